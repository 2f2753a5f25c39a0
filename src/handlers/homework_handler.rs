use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateHomeworkRequestDto, HomeworkRequest},
        response::HomeworkResponseDto,
    },
    services::http_helpers::{log_failure, success_json},
};

#[post("/generate_homework")]
pub async fn generate_homework(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateHomeworkRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);
    let request = HomeworkRequest::from(request.into_inner());

    log::info!(
        "[{}] generate_homework subject='{}' tiers={}/{}/{} total={}",
        request_id,
        request.subject,
        request.tiers.basic,
        request.tiers.normal,
        request.tiers.advanced,
        request.total_questions()
    );

    let homework_content = state
        .homework_service
        .generate_homework(request)
        .await
        .inspect_err(|e| log_failure(&request_id, "generate_homework", e))?;

    Ok(success_json(HomeworkResponseDto { homework_content }))
}
