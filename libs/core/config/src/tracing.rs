use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations.
/// Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive(environment: &Environment) -> &'static str {
    match environment {
        Environment::Local | Environment::Dev => "debug,h2=info,tower=info,hyper=info",
        Environment::Prod => "info",
    }
}

/// Initialize tracing with environment-aware configuration and error span capture.
///
/// - **local**: pretty-printed, debug level
/// - **dev**: JSON, debug level
/// - **prod**: JSON, info level
///
/// `RUST_LOG` overrides the default level for every environment.
///
/// Safe to call multiple times; later calls are no-ops (common in tests).
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(environment)));

    let result = if environment.use_json_logs() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(env = %environment, "Tracing initialized");
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_per_environment() {
        assert!(default_directive(&Environment::Local).starts_with("debug"));
        assert!(default_directive(&Environment::Dev).starts_with("debug"));
        assert_eq!(default_directive(&Environment::Prod), "info");
    }

    #[test]
    fn test_init_tracing_local() {
        init_tracing(&Environment::Local);
    }

    #[test]
    fn test_init_tracing_prod() {
        init_tracing(&Environment::Prod);
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        init_tracing(&Environment::Dev);
        init_tracing(&Environment::Dev);
    }
}
