use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{GenerateQuizRequestDto, QuizRequest},
    services::http_helpers::{log_failure, success_json},
};

#[post("/generate_test")]
pub async fn generate_test(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);

    let request = QuizRequest::try_from(request.into_inner())
        .inspect_err(|e| log_failure(&request_id, "generate_test", e))?;

    log::info!(
        "[{}] generate_test subject='{}' level={} count={} reading_mode={}",
        request_id,
        request.subject,
        request.level.label(),
        request.count,
        request.is_reading_mode()
    );

    let quiz = state
        .quiz_service
        .generate_quiz(request)
        .await
        .inspect_err(|e| log_failure(&request_id, "generate_test", e))?;

    Ok(success_json(quiz))
}
