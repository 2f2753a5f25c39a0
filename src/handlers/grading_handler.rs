use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GradingRequest, SubmitGradingRequestDto},
        response::GradingResponseDto,
    },
    services::http_helpers::{log_failure, success_json},
};

#[post("/submit_grading")]
pub async fn submit_grading(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SubmitGradingRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);

    // Missing questions or answers never reach the model.
    let request = GradingRequest::try_from(request.into_inner())
        .inspect_err(|e| log_failure(&request_id, "submit_grading", e))?;

    log::info!(
        "[{}] submit_grading questions={}",
        request_id,
        request.questions.len()
    );

    let result = state
        .grading_service
        .grade(request)
        .await
        .inspect_err(|e| log_failure(&request_id, "submit_grading", e))?;

    Ok(success_json(GradingResponseDto { result }))
}
