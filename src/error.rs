use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub const FETCH_FAILED_MESSAGE: &str = "Falha ao carregar os cursos. Tente novamente mais tarde.";
pub const UPDATE_FAILED_MESSAGE: &str = "Falha ao atualizar o status do curso no servidor.";
pub const MISSING_STATUS_MESSAGE: &str = "Por favor, selecione um status para a proposta.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Ocorreu um erro ao salvar as alterações. Por favor, tente novamente.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid catalog payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to load courses: {0}")]
    Fetch(String),

    #[error("Failed to update course status: {0}")]
    Update(String),

    #[error("{0}")]
    Validation(String),

    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Courses are still loading")]
    Loading,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    InternalServerError,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("O curso com ID \"{}\" não foi encontrado ou não existe.", id),
            ),
            AppError::Loading => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Os cursos ainda estão sendo carregados.".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Fetch(msg) => {
                error!("catalog fetch error: {}", msg);
                (StatusCode::BAD_GATEWAY, FETCH_FAILED_MESSAGE.to_string())
            }
            AppError::Update(msg) => {
                error!("catalog update error: {}", msg);
                (StatusCode::BAD_GATEWAY, SUBMIT_FAILED_MESSAGE.to_string())
            }
            AppError::Http(e) => {
                error!("catalog transport error: {}", e);
                (StatusCode::BAD_GATEWAY, FETCH_FAILED_MESSAGE.to_string())
            }
            AppError::Decode(e) => {
                error!("catalog decode error: {}", e);
                (StatusCode::BAD_GATEWAY, FETCH_FAILED_MESSAGE.to_string())
            }
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro interno do servidor.".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
