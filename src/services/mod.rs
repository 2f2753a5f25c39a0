pub mod grading_service;
pub mod homework_service;
pub mod http_helpers;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_service;
pub mod response_extractor;
