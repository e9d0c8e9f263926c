//! HTTP API for the prediction service.

pub mod handlers;
pub mod server;

pub use server::{router, run_api_server, AppState};
