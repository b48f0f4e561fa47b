//! # Lecture Notes API
//!
//! HTTP front end for the [`lecture_notes`] pipeline.
//!
//! ## Endpoints
//!
//! - `POST /api/process` - Generate notes from `{"prompt": "..."}`; guarded by
//!   `x-api-key` when a key is configured
//! - `GET /` - Plain-text liveness string
//! - `GET /health` - Health check endpoint
//! - `GET /metrics` - Prometheus metrics endpoint

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use errors::{NotesApiError, NotesApiResult};
pub use routes::create_router;
pub use server::NotesServer;
pub use state::AppState;
