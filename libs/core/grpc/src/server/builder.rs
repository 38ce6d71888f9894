//! gRPC Server utilities.

use super::config::ServerConfig;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::info;

/// Helpers shared by every tonic server in the workspace.
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            timeout_ms = config.timeout.map(|t| t.as_millis() as u64),
            "gRPC server starting"
        );

        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Mark the service and the empty service name as SERVING.
    ///
    /// The empty name is what `grpc_health_probe` and k8s query by default.
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::Serving).await;
        info!(service = service_name, "Service marked as serving");
    }

    /// Mark the service and the empty service name as NOT_SERVING.
    ///
    /// Called once shutdown starts so load balancers stop routing new calls.
    pub async fn mark_not_serving(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::NotServing).await;
        info!(service = service_name, "Service marked as not serving");
    }

    async fn set_status(health_reporter: &HealthReporter, service_name: &str, status: ServingStatus) {
        health_reporter
            .set_service_status(service_name, status)
            .await;
        health_reporter.set_service_status("", status).await;
    }
}

// Re-export health_reporter for convenience
pub use tonic_health::server::health_reporter as create_health_service;
