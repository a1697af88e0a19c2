//! Tracing subscriber installation.
//!
//! Logs go to stderr so that stdout stays free for program output. The filter
//! comes from `RUST_LOG` (default `info`) and the line format from
//! `PARTIAL_LOG_FORMAT` (`compact` or `json`).

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

pub const LOG_FORMAT_VAR: &str = "PARTIAL_LOG_FORMAT";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Unknown values fall back to [`LogFormat::Compact`].
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Compact
        }
    }

    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_VAR)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Initialize tracing with the format selected by the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(LogFormat::from_env());
}

/// Initialize tracing with an explicit format.
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().with_timer(SystemTime).try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
