//! Interactive client for a multi-provider railway route planner.
//!
//! Turns keystrokes and an explicit find-routes action into gated,
//! racing, cancellable calls against the routing service, and reconciles
//! the responses into deterministic view state regardless of network
//! timing.

pub mod api;
pub mod format;
pub mod route_query;
pub mod search;
pub mod selection;
