//! Errors surfaced by the correction endpoint and their HTTP rendering.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::correction::types::CorrectionResult;
use crate::upstream::gemini::GeminiError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Método {0} não permitido")]
    MethodNotAllowed(Method),

    #[error("A chave da API do Gemini não está configurada no servidor.")]
    MissingCredential,

    #[error("Nenhum texto foi fornecido para correção.")]
    MissingText,

    #[error("O texto enviado excede o limite de {0} bytes.")]
    BodyTooLarge(usize),

    #[error(transparent)]
    Upstream(#[from] GeminiError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MissingCredential | ApiError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::MethodNotAllowed(method) => {
                debug!(method = %method, "Rejected method");
                return (status, [(header::ALLOW, "POST")], self.to_string()).into_response();
            }
            ApiError::MissingCredential => error!("Gemini API key is not configured"),
            ApiError::MissingText => debug!("Request without text"),
            ApiError::BodyTooLarge(limit) => warn!(limit = *limit, "Request body unreadable or over limit"),
            ApiError::Upstream(e) => error!(error = %e, "Internal server error"),
        }

        let body = CorrectionResult::Failure {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
