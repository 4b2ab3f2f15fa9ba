//! HTTP API layer: thin plumbing around the scan engine
//!
//! Accepts the candidate upload, runs the batch scan, and serializes the
//! result mapping. No scoring logic lives here.

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use handlers::AppState;
pub use server::HttpServer;
