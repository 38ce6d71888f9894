//! Database connectivity for PostgreSQL
//!
//! Connection settings, startup connection with retry, and a health probe.
//! Query execution belongs to the domain repositories; this crate only hands
//! them a ready `DatabaseConnection`.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//!
//! # Example
//!
//! ```ignore
//! use database::common::RetryConfig;
//! use database::postgres::{PostgresConfig, connect_from_config_with_retry, check_health};
//!
//! let config = PostgresConfig::from_credentials(&storage);
//! let db = connect_from_config_with_retry(config, Some(RetryConfig::default())).await?;
//! check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
