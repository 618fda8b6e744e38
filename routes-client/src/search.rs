//! Place search (autocomplete) controller.
//!
//! One controller instance per input field (origin, destination); both are
//! the same parametrized type, so the two fields cannot diverge. The
//! controller turns raw text edits into gated search calls and applies only
//! the most recently issued request's response: each issued lookup carries a
//! monotonic token, and a response is applied only while its token is still
//! current. Without this, a slow early response arriving after a fast later
//! one would overwrite fresher candidates with stale ones.
//!
//! Search is advisory: a failed call degrades to "no suggestions" and is
//! logged on the debug channel rather than surfaced to the user.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::api::{Place, RoutesApi};
use crate::selection::{Field, SelectionState};

/// Minimum query length before a search call is issued. Shorter input
/// synchronously clears the candidate list instead.
const MIN_QUERY_LEN: usize = 2;

/// View state for one search field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Current text in the input field.
    pub query: String,

    /// Candidate places from the latest applied response.
    pub options: Vec<Place>,

    /// Whether the candidate dropdown is showing. True only while
    /// `options` is non-empty and no selection has been made since the
    /// fetch that populated it.
    pub visible: bool,

    /// Whether a search call is outstanding.
    pub searching: bool,
}

/// A search call that has been issued but not yet executed.
///
/// Produced by [`SearchController::set_query`]; the caller drives it to
/// completion (typically on a spawned task) with
/// [`SearchController::resolve`].
#[derive(Debug)]
pub struct PendingSearch {
    query: String,
    token: u64,
}

/// Autocomplete controller for a single input field.
///
/// Clones share state, so a handle can be moved onto the task that
/// resolves a lookup while the original keeps accepting keystrokes.
#[derive(Clone)]
pub struct SearchController<C> {
    api: C,
    field: Field,
    selection: SelectionState,
    state: Arc<RwLock<SearchState>>,
    token: Arc<AtomicU64>,
}

impl<C: RoutesApi> SearchController<C> {
    pub fn new(api: C, field: Field, selection: SelectionState) -> Self {
        Self {
            api,
            field,
            selection,
            state: Arc::new(RwLock::new(SearchState::default())),
            token: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Which field this controller drives.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Snapshot of the field's view state.
    pub async fn state(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Handle a text edit.
    ///
    /// The query text is updated unconditionally. Input of fewer than two
    /// characters clears the candidates and issues no call; the length
    /// gate doubles as cancellation for anything still in flight. Longer
    /// input marks the field as searching and returns the lookup to run.
    ///
    /// An edit that no longer matches the canonical display text of the
    /// field's selected place drops that selection: the user is typing
    /// something new, so the old choice must not silently remain active.
    pub async fn set_query(&self, text: impl Into<String>) -> Option<PendingSearch> {
        let text = text.into();
        let mut state = self.state.write().await;
        state.query = text.clone();

        if let Some(selected) = self.selection.get(self.field).await
            && text != selected.display()
        {
            self.selection.clear(self.field).await;
        }

        if text.chars().count() < MIN_QUERY_LEN {
            self.token.fetch_add(1, Ordering::SeqCst);
            state.options.clear();
            state.visible = false;
            state.searching = false;
            return None;
        }

        state.searching = true;
        let token = self.token.fetch_add(1, Ordering::SeqCst) + 1;

        Some(PendingSearch { query: text, token })
    }

    /// Execute a pending lookup and apply its result if still current.
    ///
    /// A response belonging to a superseded request is discarded whole;
    /// a failed call resolves to an empty candidate list so that search
    /// never interrupts typing.
    pub async fn resolve(&self, pending: PendingSearch) {
        let places = match self.api.search_places(&pending.query).await {
            Ok(places) => places,
            Err(e) => {
                debug!(
                    field = ?self.field,
                    query = %pending.query,
                    error = %e,
                    "place search failed; degrading to no suggestions"
                );
                Vec::new()
            }
        };

        let mut state = self.state.write().await;
        if self.token.load(Ordering::SeqCst) != pending.token {
            debug!(
                field = ?self.field,
                query = %pending.query,
                "discarding stale search response"
            );
            return;
        }

        state.visible = !places.is_empty();
        state.options = places;
        state.searching = false;
    }

    /// Accept a candidate: record the selection, rewrite the input to the
    /// canonical `"{name} ({country_code})"` form and close the dropdown.
    ///
    /// Also invalidates any in-flight lookup, so a late response cannot
    /// reopen the dropdown over the user's choice.
    pub async fn select(&self, place: &Place) {
        let mut state = self.state.write().await;
        self.token.fetch_add(1, Ordering::SeqCst);
        self.selection.set(self.field, place.clone()).await;

        state.query = place.display();
        state.visible = false;
        state.searching = false;
    }
}
