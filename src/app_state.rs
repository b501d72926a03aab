//! Shared application state injected into all Axum handlers.

use std::fmt;

use crate::api::schema::{ToiletSchema, build_schema};
use crate::service::ToiletService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema. Holds its own handle to the service.
    pub schema: ToiletSchema,
    /// Toilet service, used directly by non-GraphQL endpoints.
    pub toilet_service: ToiletService,
}

impl AppState {
    /// Builds the schema around `toilet_service` and bundles both.
    #[must_use]
    pub fn new(toilet_service: ToiletService) -> Self {
        Self {
            schema: build_schema(toilet_service.clone()),
            toilet_service,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("toilet_service", &self.toilet_service)
            .finish_non_exhaustive()
    }
}
