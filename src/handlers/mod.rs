pub mod grading_handler;
pub mod health_handler;
pub mod homework_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use grading_handler::submit_grading;
pub use health_handler::health_check;
pub use homework_handler::generate_homework;
pub use quiz_handler::generate_test;

const JSON_BODY_LIMIT: usize = 512 * 1024;

/// Unreadable bodies get the same `{"status":"error"}` envelope as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| AppError::CallerInput(err.to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(generate_test)
        .service(submit_grading)
        .service(generate_homework);
}
