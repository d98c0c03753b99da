//! Hand-rolled routing over the browser History API.
//!
//! `route` is the pure domain model (no DOM access); `router` is the service
//! that owns all `window.history` interaction and the guard flow.

pub mod route;
pub mod router;
