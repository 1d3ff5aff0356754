use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::employees::StoreError;
use crate::views::ViewError;

/// Handler error; the client only ever sees a short plain-text message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("Employee not found")]
    NotFound,
    #[error("view rendering failed: {0}")]
    View(#[from] ViewError),
}

impl AppError {
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Store { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            Self::NotFound => (StatusCode::NOT_FOUND, "Employee not found").into_response(),
            Self::View(e) => {
                tracing::error!(error = %e, "render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error rendering page").into_response()
            }
        }
    }
}
