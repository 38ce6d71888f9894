use std::net::AddrParseError;
use thiserror::Error;
use validator::ValidationErrors;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Message returned for every failure that is not the caller's fault
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// Errors that can occur while starting or running a gRPC server
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Host/port from the config do not form a socket address
  #[error("Invalid listen address '{addr}': {source}")]
  InvalidAddress {
    addr: String,
    #[source]
    source: AddrParseError,
  },

  /// Binding the listener failed
  #[error("Failed to bind {addr}: {source}")]
  Bind {
    addr: String,
    #[source]
    source: std::io::Error,
  },

  /// The transport stopped with an error
  #[error("Transport error: {0}")]
  Transport(#[from] tonic::transport::Error),
}

// ============================================================================
// Generic Error Conversion Traits
// ============================================================================

/// Extension trait for Result types to convert errors to tonic::Status
///
/// # Example
/// ```ignore
/// use grpc_server::ToTonicResult;
///
/// let id = parse_item_id(&req.item_id).to_tonic()?;
/// ```
pub trait ToTonicResult<T> {
  /// Convert the error in this Result to a tonic::Status with INVALID_ARGUMENT code
  fn to_tonic(self) -> Result<T, tonic::Status>;
}

impl<T> ToTonicResult<T> for Result<T, String> {
  fn to_tonic(self) -> Result<T, tonic::Status> {
    self.map_err(tonic::Status::invalid_argument)
  }
}

impl<T> ToTonicResult<T> for Result<T, ValidationErrors> {
  fn to_tonic(self) -> Result<T, tonic::Status> {
    self.map_err(|e| validation_status(&e))
  }
}

/// The opaque INTERNAL status. Details stay in the server logs.
pub fn internal_status() -> tonic::Status {
  tonic::Status::internal(INTERNAL_ERROR_MESSAGE)
}

/// INVALID_ARGUMENT carrying one `field: message` entry per failed field
pub fn validation_status(errors: &ValidationErrors) -> tonic::Status {
  tonic::Status::invalid_argument(describe_validation_errors(errors))
}

/// Render validation errors as `field: message; field: message`, sorted by field
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
  let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
  fields.sort_by(|a, b| a.0.cmp(&b.0));

  fields
    .into_iter()
    .flat_map(|(field, errs)| {
      errs.iter().map(move |e| match &e.message {
        Some(message) => format!("{}: {}", field, message),
        None => format!("{}: {}", field, e.code),
      })
    })
    .collect::<Vec<_>>()
    .join("; ")
}
