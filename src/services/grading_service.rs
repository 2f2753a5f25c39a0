use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{domain::GradingResult, dto::request::GradingRequest},
    services::{model_service::TextGenerator, prompt_builder, response_extractor},
};

pub struct GradingService {
    generator: Arc<dyn TextGenerator>,
}

impl GradingService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn grade(&self, request: GradingRequest) -> AppResult<GradingResult> {
        let prompt = prompt_builder::build_grading_prompt(&request);

        let reply = self.generator.generate(&prompt).await?;
        let result: GradingResult = response_extractor::extract(&reply)?;

        log::info!(
            "Graded {} questions: score {}, {} marked correct",
            request.questions.len(),
            result.score,
            result.correct_count()
        );
        Ok(result)
    }
}
