//! Server configuration from command-line flags and environment.

use clap::Parser;
use pulse_core::{JournalConfig, LoadingConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pulse-backend")]
#[command(about = "Pulse learner dashboard and journal API", long_about = None)]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file (defaults to pulse.db)
    #[arg(long = "db", env = "PULSE_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Simulated latency of journal analysis
    #[arg(long, env = "PULSE_ANALYSIS_DELAY_MS", default_value_t = 1500)]
    pub analysis_delay_ms: u64,

    /// Time before a freshly opened dashboard counts as loaded
    #[arg(long, env = "PULSE_LOADING_DELAY_MS", default_value_t = 1500)]
    pub loading_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: None,
            analysis_delay_ms: JournalConfig::default().analysis_delay_ms,
            loading_delay_ms: LoadingConfig::default().load_delay_ms,
        }
    }
}

impl ServerConfig {
    pub fn journal_config(&self) -> JournalConfig {
        JournalConfig {
            analysis_delay_ms: self.analysis_delay_ms,
        }
    }

    pub fn loading_config(&self) -> LoadingConfig {
        LoadingConfig {
            load_delay_ms: self.loading_delay_ms,
            ..LoadingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::parse_from([
            "pulse-backend",
            "--port",
            "9000",
            "--db",
            "/tmp/p.db",
            "--analysis-delay-ms",
            "0",
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/p.db")));
        assert_eq!(config.journal_config().analysis_delay_ms, 0);
        assert_eq!(config.loading_config().tick_ms, 100);
    }
}
