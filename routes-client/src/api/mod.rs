//! Routing service HTTP client.
//!
//! This module is the boundary to the backend search/routing collaborator.
//! Its graph building and pathfinding live server-side; we consume three
//! endpoints:
//!
//! - `GET /places/search?q=...` - place autocomplete; an empty array is a
//!   valid response, not an error
//! - `POST /routes/find` - multi-provider route lookup
//! - `GET /health` - liveness probe
//!
//! Error responses may carry a human-readable `detail` field, which is
//! preferred over a generic message when surfacing failures.

mod client;
mod error;
pub mod mock;
mod types;

pub use client::{RoutesClient, RoutesClientConfig};
pub use error::ApiError;
pub use types::{FindRoutesRequest, FindRoutesResponse, Place, Route, Segment};

use std::future::Future;

/// The routing service as seen by the controllers.
///
/// Implemented by the real HTTP client and by the scripted
/// [`mock::MockRoutesApi`], keeping the two interface-compatible so
/// controllers can run against either.
pub trait RoutesApi: Clone + Send + Sync + 'static {
    /// Search places matching `query`.
    fn search_places(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Place>, ApiError>> + Send;

    /// Find routes between two selected places.
    fn find_routes(
        &self,
        request: &FindRoutesRequest,
    ) -> impl Future<Output = Result<Vec<Route>, ApiError>> + Send;
}
