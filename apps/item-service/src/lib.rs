//! Item gRPC Service
//!
//! A microservice exposing item records over gRPC (`item.v1.ItemService`).
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC, optional Zstd compression)
//! ItemServiceImpl (service.rs)
//!   ↓ (validation, proto ↔ domain conversions)
//! ItemService (domain layer)
//!   ↓ (logging, error classification)
//! PgItemRepository (persistence)
//!   ↓
//! PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: Command line and YAML configuration
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (ItemServiceImpl)

pub mod config;
pub mod server;
pub mod service;

// Re-export for convenience
pub use config::{AppConfig, Cli};
pub use server::{run, serve};
pub use service::ItemServiceImpl;
