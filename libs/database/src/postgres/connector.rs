use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect using a PostgresConfig, single attempt
pub async fn connect_from_config(config: PostgresConfig) -> DatabaseResult<DatabaseConnection> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect from config, retrying with exponential backoff
///
/// Used at process startup where the database may come up after the service.
/// `None` uses [`RetryConfig::default`] (three attempts).
///
/// # Example
/// ```ignore
/// use database::postgres::{PostgresConfig, connect_from_config_with_retry};
///
/// let config = PostgresConfig::from_credentials(&storage);
/// let db = connect_from_config_with_retry(config, None).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let retry = retry_config.unwrap_or_default();
    let attempts = retry.max_attempts;
    info!(url = %config.redacted_url(), max_attempts = attempts, "Connecting to PostgreSQL");

    let options = config.into_connect_options();

    retry_with_backoff(|| connect_with_options(options.clone()), retry)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed {
            attempts,
            message: e.to_string(),
        })
}
