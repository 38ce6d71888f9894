use sea_orm::{DbErr, SqlErr};
use strum::Display;
use thiserror::Error;
use uuid::Uuid;

/// Coarse classification shared by every layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    ValidationFailed,
    StorageUnavailable,
    Internal,
}

/// Driver-level detail for [`StorageError::Database`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum StorageErrorCode {
    Query,
    Decode,
    Other,
}

/// Errors raised by the repository
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("item {0} not found")]
    ItemNotFound(Uuid),

    #[error("item already exists: {0}")]
    ItemExists(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage error ({code}): {message}")]
    Database {
        code: StorageErrorCode,
        message: String,
    },
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::ItemNotFound(_) => ErrorKind::NotFound,
            StorageError::ItemExists(_) => ErrorKind::AlreadyExists,
            StorageError::Unavailable(_) => ErrorKind::StorageUnavailable,
            StorageError::Database { .. } => ErrorKind::Internal,
        }
    }
}

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
            return StorageError::Unavailable(err.to_string());
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => StorageError::ItemExists(detail),
            _ => {
                let code = match &err {
                    DbErr::Query(_) | DbErr::Exec(_) => StorageErrorCode::Query,
                    DbErr::Type(_) | DbErr::TryIntoErr { .. } => StorageErrorCode::Decode,
                    _ => StorageErrorCode::Other,
                };
                StorageError::Database {
                    code,
                    message: err.to_string(),
                }
            }
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors returned by [`crate::ItemService`]
///
/// Not-found and duplicate outcomes collapse into `Invalid`; everything else
/// is passed through as `Storage`. Both carry the operation that failed.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("{op}: invalid item")]
    Invalid {
        op: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("{op}: {source}")]
    Storage {
        op: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ItemError {
    pub fn op(&self) -> &'static str {
        match self {
            ItemError::Invalid { op, .. } | ItemError::Storage { op, .. } => *op,
        }
    }

    pub fn storage_error(&self) -> &StorageError {
        match self {
            ItemError::Invalid { source, .. } | ItemError::Storage { source, .. } => source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.storage_error().kind()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind() == ErrorKind::AlreadyExists
    }
}

pub type ItemResult<T> = Result<T, ItemError>;
