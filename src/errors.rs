use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("No JSON object found in model response")]
    NoJsonFound,

    #[error("Malformed JSON in model response: {0}")]
    MalformedJson(String),

    #[error("Invalid request: {0}")]
    CallerInput(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ModelInvocation(_) => "MODEL_INVOCATION_FAILURE",
            AppError::NoJsonFound => "NO_JSON_FOUND",
            AppError::MalformedJson(_) => "MALFORMED_JSON",
            AppError::CallerInput(_) => "CALLER_INPUT_ERROR",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

/// Body of every failed API call. The browser client branches on `status`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ResponseError for AppError {
    // Failures travel in the body, never in the transport status.
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            status: "error",
            message: self.to_string(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ModelInvocation(format!("request timed out: {}", err))
        } else {
            AppError::ModelInvocation(err.to_string())
        }
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ModelInvocation(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::CallerInput(err.to_string())
    }
}
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Persistence(format!("Failed to sign service account assertion: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_every_error_uses_ok_status() {
        let errors = [
            AppError::ModelInvocation("quota".into()),
            AppError::NoJsonFound,
            AppError::MalformedJson("eof".into()),
            AppError::CallerInput("answers".into()),
            AppError::Configuration("GEMINI_API_KEY".into()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::OK);
        }
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::CallerInput("answers is required".into());
        assert_eq!(err.to_string(), "Invalid request: answers is required");
        assert_eq!(err.error_code(), "CALLER_INPUT_ERROR");
        assert_eq!(AppError::NoJsonFound.error_code(), "NO_JSON_FOUND");
    }

    #[actix_web::test]
    async fn test_error_response_body_is_uniform_envelope() {
        let response = AppError::MalformedJson("trailing characters".into()).error_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(
            json["message"],
            "Malformed JSON in model response: trailing characters"
        );
    }
}
