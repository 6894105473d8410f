//! Log subscriber setup for applications embedding the form.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vdyp_params_core::config::{LogFormat, LoggingConfig};

use crate::error::{FormError, Result};

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
///
/// # Errors
/// Returns `FormError::Logging` if the configured directive is invalid.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| FormError::Logging(e.to_string()))
}

/// Install the global `tracing` subscriber.
///
/// # Errors
/// Returns `FormError::Logging` for an invalid filter or when a global
/// subscriber is already installed.
pub fn init_logger(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    };

    installed.map_err(|e| FormError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_used_without_env() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "vdyp_params_core=debug,warn".to_string(),
            format: LogFormat::Compact,
        };
        let filter = build_filter(&config).expect("valid directive");
        assert!(filter.to_string().contains("vdyp_params_core=debug"));
    }

    // The only test in this binary that installs a global subscriber.
    #[test]
    fn second_install_is_rejected() {
        let json = LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Json,
        };
        init_logger(&json).expect("first install");
        tracing::info!(target: "vdyp_params_form", "json subscriber installed");

        let compact = LoggingConfig {
            format: LogFormat::Compact,
            ..json
        };
        assert!(matches!(init_logger(&compact), Err(FormError::Logging(_))));
    }

    #[test]
    fn invalid_directive_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "vdyp_params_core=loud".to_string(),
            format: LogFormat::Json,
        };
        assert!(matches!(build_filter(&config), Err(FormError::Logging(_))));
    }
}
