//! Dashboard loading simulation
//!
//! Progress climbs by a fixed step on every tick while the dashboard
//! "loads"; the dashboard counts as loaded once the load delay elapses.
//! Cancelling the token (the view going away) stops all further updates.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingConfig {
    pub tick_ms: u64,
    /// Progress added per tick (percent)
    pub step: u8,
    pub load_delay_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            step: 5,
            load_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Dashboard loading cancelled")]
pub struct LoadingCancelled;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadingTracker {
    progress: u8,
    loaded: bool,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already-loaded tracker, for views that skip the simulation
    pub fn done() -> Self {
        Self {
            progress: 100,
            loaded: true,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Advance by `step`, capped at 100
    pub fn advance(&mut self, step: u8) -> u8 {
        self.progress = self.progress.saturating_add(step).min(100);
        self.progress
    }

    pub fn finish(&mut self) {
        self.loaded = true;
    }
}

/// Run the loading simulation, reporting every change through `on_update`.
pub async fn simulate_loading<F>(
    config: &LoadingConfig,
    cancel: &CancellationToken,
    mut on_update: F,
) -> Result<LoadingTracker, LoadingCancelled>
where
    F: FnMut(LoadingTracker),
{
    let mut tracker = LoadingTracker::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.tick_ms.max(1)));
    // the first tick completes immediately
    ticker.tick().await;

    let deadline = tokio::time::sleep(Duration::from_millis(config.load_delay_ms));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("[DASHBOARD] Loading cancelled at {}%", tracker.progress());
                return Err(LoadingCancelled);
            }
            _ = &mut deadline => {
                tracker.finish();
                on_update(tracker);
                log::debug!("[DASHBOARD] Loaded (progress {}%)", tracker.progress());
                return Ok(tracker);
            }
            _ = ticker.tick(), if tracker.progress() < 100 => {
                tracker.advance(config.step);
                on_update(tracker);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_caps_at_100() {
        let mut t = LoadingTracker::new();
        for _ in 0..30 {
            t.advance(5);
        }
        assert_eq!(t.progress(), 100);
        assert!(!t.is_loaded());
    }

    #[tokio::test]
    async fn test_simulation_finishes() {
        let config = LoadingConfig {
            tick_ms: 1,
            step: 5,
            load_delay_ms: 20,
        };
        let mut updates = Vec::new();
        let tracker = simulate_loading(&config, &CancellationToken::new(), |t| updates.push(t))
            .await
            .unwrap();

        assert!(tracker.is_loaded());
        assert!(updates.last().unwrap().is_loaded());
        // progress never decreases
        assert!(updates.windows(2).all(|w| w[0].progress() <= w[1].progress()));
    }

    #[tokio::test]
    async fn test_cancelled_simulation_stops_updating() {
        let config = LoadingConfig::default();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut updates = 0;

        let result = simulate_loading(&config, &cancel, |_| updates += 1).await;

        assert_eq!(result, Err(LoadingCancelled));
        assert_eq!(updates, 0);
    }
}
