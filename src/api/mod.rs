//! HTTP layer: routes, handlers, error mapping, and server lifecycle.
//!
//! The router is composable — `document_router()` returns a `Router` that
//! can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::document_router;
pub use server::{start_server, ApiServer};
pub use types::ApiContext;
