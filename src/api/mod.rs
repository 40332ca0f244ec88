//! HTTP surface for the advocate directory.
//!
//! Exposes the directory as read-only REST endpoints. The router is
//! composable — `directory_router()` returns a `Router` that can be
//! mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::directory_router;
pub use server::{start_server, ApiServer};
pub use types::ApiContext;
