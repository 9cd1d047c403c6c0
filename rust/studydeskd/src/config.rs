use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(name = "studydeskd", version, about = "Student dashboard sidecar (JSON lines on stdin/stdout)")]
pub struct Config {
    /// JSON file backing the remembered-email preference. In-memory when unset.
    #[clap(long, env = "STUDYDESK_PREFS_PATH")]
    pub prefs_path: Option<PathBuf>,

    #[clap(long, env = "STUDYDESK_LOGIN_DELAY_MS", default_value_t = 1500)]
    pub login_delay_ms: u64,

    /// Start with empty collections instead of the sample records.
    #[clap(long, env = "STUDYDESK_NO_SEED", default_value_t = false)]
    pub no_seed: bool,

    #[clap(long, env = "STUDYDESK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}
