//! Service error types with GraphQL error-code mapping.
//!
//! [`ServiceError`] is the central error type for the service. Each variant
//! maps to a stable string code that is attached to GraphQL field errors
//! under `extensions.code`:
//!
//! ```json
//! {
//!   "data": { "toilet": null },
//!   "errors": [{
//!     "message": "toilet not found: 42",
//!     "path": ["toilet"],
//!     "extensions": { "code": "TOILET_NOT_FOUND" }
//!   }]
//! }
//! ```

use async_graphql::ErrorExtensions;

use crate::domain::ToiletId;

/// Server-side error enum with GraphQL error-code mapping.
///
/// # Error Codes
///
/// | Variant          | Code               | Logged |
/// |------------------|--------------------|--------|
/// | `ToiletNotFound` | `TOILET_NOT_FOUND` | no     |
/// | `InvalidId`      | `INVALID_ID`       | no     |
/// | `Storage`        | `STORAGE_FAILURE`  | yes    |
/// | `SchemaInit`     | `SCHEMA_INIT`      | fatal  |
/// | `Internal`       | `INTERNAL`         | yes    |
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Toilet with the given ID does not exist.
    #[error("toilet not found: {0}")]
    ToiletNotFound(ToiletId),

    /// A client-supplied identifier could not be parsed.
    #[error("invalid id: {0:?}")]
    InvalidId(String),

    /// The store was unreachable or rejected a statement.
    #[error("storage error: {0}")]
    Storage(String),

    /// Schema migration failed at startup.
    #[error("schema initialization failed: {0}")]
    SchemaInit(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the string error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ToiletNotFound(_) => "TOILET_NOT_FOUND",
            Self::InvalidId(_) => "INVALID_ID",
            Self::Storage(_) => "STORAGE_FAILURE",
            Self::SchemaInit(_) => "SCHEMA_INIT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Returns `true` for failures on the server side rather than in the
    /// client's request.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::SchemaInit(_) | Self::Internal(_)
        )
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for ServiceError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::SchemaInit(err.to_string())
    }
}

impl ErrorExtensions for ServiceError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, ext| ext.set("code", self.error_code()))
    }
}

/// Converts a [`ServiceError`] into a GraphQL field error.
///
/// Server-side failures are logged here, once, before the error is handed
/// to the response envelope.
pub fn into_field_error(err: ServiceError) -> async_graphql::Error {
    if err.is_server_error() {
        tracing::error!(error = %err, code = err.error_code(), "field resolution failed");
    } else {
        tracing::debug!(error = %err, code = err.error_code(), "field rejected");
    }
    err.extend()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            ServiceError::ToiletNotFound(ToiletId::new(1)).error_code(),
            "TOILET_NOT_FOUND"
        );
        assert_eq!(
            ServiceError::InvalidId("x".to_string()).error_code(),
            "INVALID_ID"
        );
        assert_eq!(
            ServiceError::Storage("down".to_string()).error_code(),
            "STORAGE_FAILURE"
        );
    }

    #[test]
    fn only_server_failures_are_server_errors() {
        assert!(!ServiceError::ToiletNotFound(ToiletId::new(1)).is_server_error());
        assert!(!ServiceError::InvalidId(String::new()).is_server_error());
        assert!(ServiceError::Storage(String::new()).is_server_error());
        assert!(ServiceError::Internal(String::new()).is_server_error());
    }

    #[test]
    fn field_error_carries_message() {
        let err = into_field_error(ServiceError::ToiletNotFound(ToiletId::new(7)));
        assert_eq!(err.message, "toilet not found: 7");
        assert!(err.extensions.is_some());
    }

    #[test]
    fn migrate_error_maps_to_schema_init() {
        let err = ServiceError::from(sqlx::migrate::MigrateError::VersionMissing(1));
        assert!(matches!(err, ServiceError::SchemaInit(_)));
        assert_eq!(err.error_code(), "SCHEMA_INIT");
        assert!(err.is_server_error());
    }

    #[test]
    fn row_not_found_maps_to_storage() {
        let err = ServiceError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.error_code(), "STORAGE_FAILURE");
    }
}
