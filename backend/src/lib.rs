//! Pulse Backend
//!
//! HTTP service for the learner engagement app:
//! - Career dashboard with notifications and drill-down panels
//! - Mood journal with simulated emotion analysis
//! - Emotion chart and mood task completion
//! - SQLite persistence for profiles and journals

pub mod api;
pub mod config;
pub mod store;

pub use api::{configure, run_server, ApiError, ApiResponse, AppState};
pub use config::ServerConfig;
pub use store::{ProfileStore, StoreError, UserScope};
