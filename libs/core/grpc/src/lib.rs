//! # gRPC Server Library
//!
//! Shared plumbing for tonic servers in the workspace: listener settings read
//! from the service config file, health reporting, graceful shutdown on
//! SIGINT/SIGTERM, and conversions from handler errors to `tonic::Status`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_server::server::{GrpcServer, ServerConfig, shutdown_signal};
//! use rpc::item::v1::item_service_server::{ItemServiceServer, SERVICE_NAME};
//!
//! let (health_reporter, health_service) = grpc_server::server::create_health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(ItemServiceServer::new(handler))
//!     .serve_with_shutdown(config.socket_addr()?, async { shutdown_signal().await; })
//!     .await?;
//! ```

pub mod error;
pub mod server;

pub use error::{
    GrpcError, GrpcResult, INTERNAL_ERROR_MESSAGE, ToTonicResult,
    describe_validation_errors, internal_status, validation_status,
};
