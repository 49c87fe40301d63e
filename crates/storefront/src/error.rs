//! Unified error handling with Sentry integration.
//!
//! Route handlers that can fail as a whole page return `Result<T, AppError>`;
//! the error is captured to Sentry before a client-safe response goes out.
//! HTMX fragment handlers render their own inline error fragments instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog API operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Self::Catalog(err) = &self;

        // A missing agent is a client-side 404, everything else is an
        // upstream failure worth reporting.
        if !matches!(err, CatalogError::NotFound(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let (status, message) = match err {
            CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, "Figura no encontrada"),
            _ => (StatusCode::BAD_GATEWAY, "No se pudo cargar el catálogo"),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn missing_agent_is_not_found() {
        assert_eq!(
            status_of(AppError::Catalog(CatalogError::NotFound("x".to_string()))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn upstream_failures_are_bad_gateway() {
        assert_eq!(
            status_of(AppError::Catalog(CatalogError::Api(500))),
            StatusCode::BAD_GATEWAY
        );
    }
}
