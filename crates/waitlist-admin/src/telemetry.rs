use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow the configured level; everything else stays at `warn`.
const WAITLIST_TARGETS: [&str; 2] = ["waitlist_admin", "waitlist_admin_api"];

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// A bare level (`debug`) applies to the waitlist crates only; full directives pass through.
fn build_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    let directives = if log_level.contains(['=', ',']) {
        log_level.to_string()
    } else {
        let scoped: Vec<String> = WAITLIST_TARGETS
            .iter()
            .map(|target| format!("{target}={log_level}"))
            .collect();
        format!("warn,{}", scoped.join(","))
    };

    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::EnvFilter {
        value: log_level.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter_directive() {
        let err = build_filter("waitlist=loud").expect_err("directive should not parse");
        assert!(err.to_string().contains("waitlist=loud"));
    }

    #[test]
    fn plain_level_is_scoped_to_waitlist_crates() {
        let filter = build_filter("debug").expect("level parses").to_string();
        assert!(filter.contains("waitlist_admin=debug"));
        assert!(filter.contains("waitlist_admin_api=debug"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn explicit_directives_pass_through() {
        let filter = build_filter("info,axum=debug").expect("directives parse").to_string();
        assert!(filter.contains("axum=debug"));
        assert!(!filter.contains("waitlist_admin"));
    }
}
