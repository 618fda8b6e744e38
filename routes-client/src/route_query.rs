//! Route lookup controller.
//!
//! Route search is an explicit action, not keystroke-driven: the shell
//! invokes [`RouteQueryController::submit`] when the user asks for routes.
//! Submission fails fast with a validation message when either endpoint is
//! missing, and otherwise moves the view through
//! Loading → Success / Empty / Error.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::api::{FindRoutesRequest, Route, RoutesApi};
use crate::selection::SelectionState;

/// Routes requested per lookup.
const MAX_ROUTES: u32 = 5;

/// Shown when submission is attempted with an endpoint missing.
const VALIDATION_MESSAGE: &str = "Please select both origin and destination";

/// Shown when the lookup succeeds but finds nothing.
const NO_ROUTES_MESSAGE: &str = "No routes found between these locations";

/// Route search view state. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RouteSearchState {
    /// No lookup attempted yet.
    #[default]
    Idle,

    /// A lookup is in flight.
    Loading,

    /// At least one route, in response order, exactly as received.
    Success(Vec<Route>),

    /// The lookup succeeded but the service found no route. Rendered as
    /// an error message, but distinct from a failed call.
    Empty,

    /// The lookup failed, or submission was invalid.
    Error(String),
}

impl RouteSearchState {
    /// User-facing message for the error-like states.
    pub fn message(&self) -> Option<&str> {
        match self {
            RouteSearchState::Empty => Some(NO_ROUTES_MESSAGE),
            RouteSearchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RouteSearchState::Loading)
    }
}

/// A validated route lookup, ready to execute via
/// [`RouteQueryController::resolve`].
#[derive(Debug)]
pub struct PendingRouteLookup {
    request: FindRoutesRequest,
    token: u64,
}

/// Controller for the explicit find-routes action.
///
/// Clones share state.
#[derive(Clone)]
pub struct RouteQueryController<C> {
    api: C,
    selection: SelectionState,
    state: Arc<RwLock<RouteSearchState>>,
    token: Arc<AtomicU64>,
}

impl<C: RoutesApi> RouteQueryController<C> {
    pub fn new(api: C, selection: SelectionState) -> Self {
        Self {
            api,
            selection,
            state: Arc::new(RwLock::new(RouteSearchState::Idle)),
            token: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the route search state.
    pub async fn state(&self) -> RouteSearchState {
        self.state.read().await.clone()
    }

    /// Whether the presentation layer should enable the find-routes
    /// trigger: both endpoints selected and no lookup in flight.
    pub async fn can_submit(&self) -> bool {
        self.selection.is_complete().await && !self.state.read().await.is_loading()
    }

    /// Validate the selections and start a lookup.
    ///
    /// With either endpoint missing, the state becomes a validation error
    /// and no network call is issued. Otherwise any previous result or
    /// error is cleared, the state moves to Loading, and the returned
    /// lookup is executed with [`resolve`].
    ///
    /// [`resolve`]: RouteQueryController::resolve
    pub async fn submit(&self) -> Option<PendingRouteLookup> {
        let (origin, destination) = self.selection.endpoints().await;
        let (Some(origin), Some(destination)) = (origin, destination) else {
            *self.state.write().await = RouteSearchState::Error(VALIDATION_MESSAGE.to_string());
            return None;
        };

        *self.state.write().await = RouteSearchState::Loading;
        let token = self.token.fetch_add(1, Ordering::SeqCst) + 1;

        Some(PendingRouteLookup {
            request: FindRoutesRequest {
                origin_id: origin.id,
                destination_id: destination.id,
                max_routes: MAX_ROUTES,
            },
            token,
        })
    }

    /// Execute a pending lookup and apply its outcome if still current.
    ///
    /// Overlapping submissions are permitted (the shell disables the
    /// trigger while Loading, but that is its concern, not ours); the
    /// token guard means only the latest submission's outcome lands.
    pub async fn resolve(&self, pending: PendingRouteLookup) {
        let outcome = match self.api.find_routes(&pending.request).await {
            Ok(routes) if routes.is_empty() => RouteSearchState::Empty,
            Ok(routes) => RouteSearchState::Success(routes),
            Err(e) => {
                RouteSearchState::Error(format!("Error finding routes: {}", e.user_message()))
            }
        };

        let mut state = self.state.write().await;
        if self.token.load(Ordering::SeqCst) != pending.token {
            debug!("discarding superseded route lookup response");
            return;
        }

        *state = outcome;
    }
}
