//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod handlers;
mod rate_limit;
mod server;

pub use server::HttpServer;
