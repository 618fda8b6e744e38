//! Scripted routing service for tests and offline development.
//!
//! Mirrors the real client's interface so controllers can run against
//! canned data. Responses can be held open with [`MockRoutesApi::hold`]
//! and released later, letting tests resolve overlapping requests in a
//! chosen order. All calls are recorded so tests can assert exactly which
//! requests were issued.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use super::RoutesApi;
use super::error::ApiError;
use super::types::{FindRoutesRequest, Place, Route};

/// In-memory routing service with scripted responses.
#[derive(Clone, Default)]
pub struct MockRoutesApi {
    inner: Arc<Mutex<MockData>>,
}

#[derive(Default)]
struct MockData {
    places: HashMap<String, Vec<Place>>,
    failing_searches: HashSet<String>,
    routes: Vec<Route>,
    find_failure: Option<(u16, Option<String>)>,
    gates: HashMap<String, Arc<Notify>>,
    search_calls: Vec<String>,
    find_calls: Vec<FindRoutesRequest>,
}

impl MockRoutesApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the candidate list returned for `query`.
    pub fn add_places(&self, query: &str, places: Vec<Place>) {
        let mut data = self.inner.lock().unwrap();
        data.places.insert(query.to_string(), places);
    }

    /// Make searches for `query` fail with a server error.
    pub fn fail_search(&self, query: &str) {
        let mut data = self.inner.lock().unwrap();
        data.failing_searches.insert(query.to_string());
    }

    /// Script the route list returned by `find_routes`.
    pub fn set_routes(&self, routes: Vec<Route>) {
        let mut data = self.inner.lock().unwrap();
        data.find_failure = None;
        data.routes = routes;
    }

    /// Make `find_routes` fail with the given status and optional detail.
    pub fn fail_find(&self, status: u16, detail: Option<&str>) {
        let mut data = self.inner.lock().unwrap();
        data.find_failure = Some((status, detail.map(str::to_string)));
    }

    /// Hold the search response for `query` until [`release`] is called.
    ///
    /// [`release`]: MockRoutesApi::release
    pub fn hold(&self, query: &str) {
        let mut data = self.inner.lock().unwrap();
        data.gates
            .insert(query.to_string(), Arc::new(Notify::new()));
    }

    /// Release a held search response. Safe to call before the request
    /// arrives; the permit is stored.
    pub fn release(&self, query: &str) {
        let gate = {
            let data = self.inner.lock().unwrap();
            data.gates.get(query).cloned()
        };
        if let Some(gate) = gate {
            gate.notify_one();
        }
    }

    /// Queries passed to `search_places`, in call order.
    pub fn search_calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().search_calls.clone()
    }

    /// Requests passed to `find_routes`, in call order.
    pub fn find_calls(&self) -> Vec<FindRoutesRequest> {
        self.inner.lock().unwrap().find_calls.clone()
    }
}

impl RoutesApi for MockRoutesApi {
    async fn search_places(&self, query: &str) -> Result<Vec<Place>, ApiError> {
        let gate = {
            let mut data = self.inner.lock().unwrap();
            data.search_calls.push(query.to_string());
            data.gates.get(query).cloned()
        };

        if let Some(gate) = gate {
            gate.notified().await;
        }

        let data = self.inner.lock().unwrap();
        if data.failing_searches.contains(query) {
            return Err(ApiError::Api {
                status: 500,
                message: "Internal Server Error".to_string(),
                detail: None,
            });
        }

        Ok(data.places.get(query).cloned().unwrap_or_default())
    }

    async fn find_routes(&self, request: &FindRoutesRequest) -> Result<Vec<Route>, ApiError> {
        let mut data = self.inner.lock().unwrap();
        data.find_calls.push(request.clone());

        if let Some((status, detail)) = data.find_failure.clone() {
            return Err(ApiError::Api {
                status,
                message: String::new(),
                detail,
            });
        }

        Ok(data.routes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str, name: &str) -> Place {
        Place {
            id: id.to_string(),
            name: name.to_string(),
            country_code: "DE".to_string(),
            providers: vec!["Benerail".to_string()],
        }
    }

    #[tokio::test]
    async fn scripted_places_are_returned() {
        let api = MockRoutesApi::new();
        api.add_places("Ber", vec![place("b1", "Berlin Hbf")]);

        let places = api.search_places("Ber").await.unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Berlin Hbf");

        // Unscripted queries resolve to an empty list.
        let none = api.search_places("Mun").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn failing_search_returns_error() {
        let api = MockRoutesApi::new();
        api.fail_search("Ber");

        assert!(api.search_places("Ber").await.is_err());
    }

    #[tokio::test]
    async fn calls_are_recorded_in_order() {
        let api = MockRoutesApi::new();
        api.search_places("Be").await.unwrap();
        api.search_places("Ber").await.unwrap();

        assert_eq!(api.search_calls(), vec!["Be", "Ber"]);
    }

    #[tokio::test]
    async fn held_response_waits_for_release() {
        let api = MockRoutesApi::new();
        api.add_places("Ber", vec![place("b1", "Berlin Hbf")]);
        api.hold("Ber");

        let worker = api.clone();
        let task = tokio::spawn(async move { worker.search_places("Ber").await });

        // The request is parked until released.
        assert!(!task.is_finished());
        api.release("Ber");

        let places = task.await.unwrap().unwrap();
        assert_eq!(places.len(), 1);
    }

    #[tokio::test]
    async fn find_failure_carries_detail() {
        let api = MockRoutesApi::new();
        api.fail_find(503, Some("graph not ready"));

        let request = FindRoutesRequest {
            origin_id: "a".to_string(),
            destination_id: "b".to_string(),
            max_routes: 5,
        };
        let err = api.find_routes(&request).await.unwrap_err();
        assert_eq!(err.user_message(), "graph not ready");
    }
}
