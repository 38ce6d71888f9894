//! gRPC Server Builder
//!
//! Listener settings, health reporting and graceful shutdown.
//!
//! ```ignore
//! use grpc_server::server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
//! use rpc::item::v1::item_service_server::{ItemServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let (health_reporter, health_service) = create_health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(ItemServiceServer::new(my_impl))
//!     .serve_with_shutdown(config.socket_addr()?, async { shutdown_signal().await; })
//!     .await?;
//! ```

mod builder;
mod config;
mod shutdown;

pub use builder::{GrpcServer, create_health_service};
pub use config::ServerConfig;
pub use shutdown::{ShutdownSignal, shutdown_signal};
