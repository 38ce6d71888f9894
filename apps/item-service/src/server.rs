//! gRPC server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - Configuration and tracing initialization
//! - Database connection and health probe
//! - Service creation
//! - gRPC server configuration, startup and graceful shutdown
//! - Health check service (grpc.health.v1.Health)

use std::future::Future;

use clap::Parser;
use database::postgres::{PostgresConfig, check_health, connect_from_config_with_retry};
use domain_items::{ItemRepository, ItemService, PgItemRepository};
use eyre::{Result, WrapErr};
use grpc_server::GrpcResult;
use grpc_server::error::GrpcError;
use grpc_server::server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
use rpc::item::v1::item_service_server::{ItemServiceServer, SERVICE_NAME};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::config::{AppConfig, Cli};
use crate::service::ItemServiceImpl;

/// Run the gRPC server
///
/// This is the main entry point for server initialization. It:
/// 1. Loads the config file named by `--config` / `CONFIG_PATH`
/// 2. Sets up structured logging for the configured environment
/// 3. Connects to the database with retry logic and probes it
/// 4. Creates the repository and service layers
/// 5. Serves until SIGINT or SIGTERM, then drains in-flight calls
///
/// # Errors
///
/// Returns an error if:
/// - The config file is missing or invalid
/// - Database connection fails
/// - Server binding fails
/// - Server runtime encounters an error
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).wrap_err("Failed to load configuration")?;

    core_config::tracing::init_tracing(&config.env);
    info!(env = %config.env, "Starting item service");

    let pg_config = PostgresConfig::from_credentials(&config.storage);
    let db = connect_from_config_with_retry(pg_config, None)
        .await
        .wrap_err("Failed to connect to database")?;
    check_health(&db)
        .await
        .wrap_err("Database health check failed")?;
    info!("Connected to database successfully");

    let repository = PgItemRepository::new(db);
    let handler = ItemServiceImpl::new(ItemService::new(repository));

    let addr = config.grpc.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| GrpcError::Bind {
            addr: config.grpc.addr_string(),
            source,
        })?;

    serve(listener, handler, &config.grpc, async {
        shutdown_signal().await;
    })
    .await
    .wrap_err("gRPC server failed")?;

    info!("Item service stopped");
    Ok(())
}

/// Serve `handler` on an already bound listener until `shutdown` resolves.
///
/// Health moves to NOT_SERVING as soon as shutdown starts; calls already in
/// flight are allowed to finish before this returns.
pub async fn serve<R, F>(
    listener: TcpListener,
    handler: ItemServiceImpl<R>,
    config: &ServerConfig,
    shutdown: F,
) -> GrpcResult<()>
where
    R: ItemRepository + 'static,
    F: Future<Output = ()>,
{
    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;

    if let Ok(local_addr) = listener.local_addr() {
        info!(%local_addr, "Listener bound");
    }
    GrpcServer::log_startup(config, SERVICE_NAME);

    let mut item_server = ItemServiceServer::new(handler)
        .max_decoding_message_size(config.max_message_size)
        .max_encoding_message_size(config.max_message_size);
    if config.enable_compression {
        item_server = item_server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    let mut builder = Server::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    let drain = async {
        shutdown.await;
        GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
        info!("Draining in-flight requests");
    };

    builder
        .add_service(health_service)
        .add_service(item_server)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), drain)
        .await?;

    Ok(())
}
