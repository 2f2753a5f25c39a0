use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{domain::HomeworkDocument, dto::request::HomeworkRequest},
    services::{model_service::TextGenerator, prompt_builder},
};

pub struct HomeworkService {
    generator: Arc<dyn TextGenerator>,
}

impl HomeworkService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// The reply is Markdown and is returned untouched.
    pub async fn generate_homework(&self, request: HomeworkRequest) -> AppResult<HomeworkDocument> {
        let prompt = prompt_builder::build_homework_prompt(&request);
        let document = HomeworkDocument(self.generator.generate(&prompt).await?);

        log::debug!(
            "homework for '{}' is {} bytes of markdown",
            request.subject,
            document.as_markdown().len()
        );
        Ok(document)
    }
}
