//! Pulse Core
//!
//! Domain logic for the learner dashboard and wellbeing journal:
//! - Career content resolution and drill-down panels
//! - Interest and mood driven recommendations
//! - Journal submission with emotion analysis
//! - Emotion chart series and mood task completion

pub mod chart;
pub mod content;
pub mod dashboard;
pub mod interest;
pub mod journal;
pub mod loading;
pub mod mood;
pub mod notifications;
pub mod providers;
pub mod selection;
pub mod tasks;
pub mod types;

pub use dashboard::{DashboardError, DashboardSession, DashboardSnapshot};
pub use journal::{JournalAnalyzer, JournalComposer, JournalConfig, JournalError, SimulatedAnalyzer};
pub use loading::{LoadingConfig, LoadingTracker};
pub use providers::{EmotionProvider, ProviderError, UserProfileProvider};
pub use types::*;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
