use actix_web::HttpResponse;
use serde::Serialize;

use crate::{errors::AppError, models::dto::response::SuccessResponse};

/// Creates a `{"status":"success", ...}` JSON response
pub fn success_json<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(SuccessResponse::new(data))
}

/// Logs a failed operation with its error code before it is rendered as an error envelope
pub fn log_failure(request_id: &str, operation: &str, err: &AppError) {
    match err {
        AppError::CallerInput(_) => {
            log::info!("[{}] {} rejected: {}", request_id, operation, err)
        }
        _ => log::error!(
            "[{}] {} failed ({}): {}",
            request_id,
            operation,
            err.error_code(),
            err
        ),
    }
}
