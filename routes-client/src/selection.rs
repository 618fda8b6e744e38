//! Selected origin and destination places.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::Place;

/// Which input field a search controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Origin,
    Destination,
}

/// The chosen origin and destination, shared between the two search
/// controllers and the route controller.
///
/// Pure state holder: assignment comes from `SearchController::select`,
/// reads from `RouteQueryController::submit`. Clones share state.
#[derive(Clone, Default)]
pub struct SelectionState {
    inner: Arc<RwLock<Slots>>,
}

#[derive(Default)]
struct Slots {
    origin: Option<Place>,
    destination: Option<Place>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection for the given field.
    pub async fn set(&self, field: Field, place: Place) {
        let mut slots = self.inner.write().await;
        match field {
            Field::Origin => slots.origin = Some(place),
            Field::Destination => slots.destination = Some(place),
        }
    }

    /// Clear the selection for the given field.
    pub async fn clear(&self, field: Field) {
        let mut slots = self.inner.write().await;
        match field {
            Field::Origin => slots.origin = None,
            Field::Destination => slots.destination = None,
        }
    }

    /// The current selection for the given field, if any.
    pub async fn get(&self, field: Field) -> Option<Place> {
        let slots = self.inner.read().await;
        match field {
            Field::Origin => slots.origin.clone(),
            Field::Destination => slots.destination.clone(),
        }
    }

    /// Both endpoints at once, read under a single lock.
    pub async fn endpoints(&self) -> (Option<Place>, Option<Place>) {
        let slots = self.inner.read().await;
        (slots.origin.clone(), slots.destination.clone())
    }

    /// Whether both origin and destination are selected.
    pub async fn is_complete(&self) -> bool {
        let slots = self.inner.read().await;
        slots.origin.is_some() && slots.destination.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Station {id}"),
            country_code: "DE".to_string(),
            providers: vec![],
        }
    }

    #[tokio::test]
    async fn starts_unset() {
        let selection = SelectionState::new();
        assert!(selection.get(Field::Origin).await.is_none());
        assert!(selection.get(Field::Destination).await.is_none());
        assert!(!selection.is_complete().await);
    }

    #[tokio::test]
    async fn set_and_get_are_per_field() {
        let selection = SelectionState::new();
        selection.set(Field::Origin, place("a")).await;

        assert_eq!(selection.get(Field::Origin).await.unwrap().id, "a");
        assert!(selection.get(Field::Destination).await.is_none());
        assert!(!selection.is_complete().await);

        selection.set(Field::Destination, place("b")).await;
        assert!(selection.is_complete().await);

        let (origin, destination) = selection.endpoints().await;
        assert_eq!(origin.unwrap().id, "a");
        assert_eq!(destination.unwrap().id, "b");
    }

    #[tokio::test]
    async fn clear_only_touches_its_field() {
        let selection = SelectionState::new();
        selection.set(Field::Origin, place("a")).await;
        selection.set(Field::Destination, place("b")).await;

        selection.clear(Field::Origin).await;
        assert!(selection.get(Field::Origin).await.is_none());
        assert_eq!(selection.get(Field::Destination).await.unwrap().id, "b");
    }

    #[tokio::test]
    async fn reselect_overwrites() {
        let selection = SelectionState::new();
        selection.set(Field::Origin, place("a")).await;
        selection.set(Field::Origin, place("c")).await;
        assert_eq!(selection.get(Field::Origin).await.unwrap().id, "c");
    }
}
