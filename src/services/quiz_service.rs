use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{
        domain::Quiz,
        dto::{request::QuizRequest, response::GeneratedQuizDto},
    },
    services::{model_service::TextGenerator, prompt_builder, response_extractor},
};

pub struct QuizService {
    generator: Arc<dyn TextGenerator>,
}

impl QuizService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate_quiz(&self, request: QuizRequest) -> AppResult<GeneratedQuizDto> {
        let is_reading_mode = request.is_reading_mode();
        let prompt = prompt_builder::build_quiz_prompt(&request);

        let reply = self.generator.generate(&prompt).await?;
        let mut quiz: Quiz = response_extractor::extract(&reply)?;

        let generated = quiz.questions.len();
        quiz.truncate_to(request.target_count());
        if generated < request.target_count() {
            log::warn!(
                "Model returned {} questions for '{}', fewer than the {} requested",
                generated,
                request.subject,
                request.target_count()
            );
        }

        Ok(GeneratedQuizDto::new(quiz, is_reading_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        models::domain::QuizLevel,
        services::model_service::MockTextGenerator,
        test_utils::fixtures::{quiz_reply, reading_quiz_reply},
    };

    fn service_replying(reply: String) -> QuizService {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(move |_| Ok(reply.clone()));
        QuizService::new(Arc::new(generator))
    }

    #[actix_web::test]
    async fn truncates_to_requested_count() {
        let service = service_replying(quiz_reply(5));

        let quiz = service
            .generate_quiz(QuizRequest::new("二次方程式", QuizLevel::Intermediate, 3))
            .await
            .unwrap();

        assert_eq!(quiz.questions.len(), 3);
        assert!(!quiz.is_reading_mode);
        assert_eq!(quiz.questions[0].question, "問題1: $x^2 - 1 = 0$ を解け");
    }

    #[actix_web::test]
    async fn keeps_short_replies_as_is() {
        let service = service_replying(quiz_reply(2));

        let quiz = service
            .generate_quiz(QuizRequest::new("一次関数", QuizLevel::Beginner, 4))
            .await
            .unwrap();

        assert_eq!(quiz.questions.len(), 2);
    }

    #[actix_web::test]
    async fn reading_mode_targets_five_and_keeps_passage() {
        let service = service_replying(reading_quiz_reply(7));

        let quiz = service
            .generate_quiz(QuizRequest::new("英語長文", QuizLevel::Advanced, 2))
            .await
            .unwrap();

        assert!(quiz.is_reading_mode);
        assert_eq!(quiz.questions.len(), 5);
        assert_eq!(quiz.passage_title.as_deref(), Some("Morning Walk"));
        assert!(quiz.passage_body.is_some());
    }

    #[actix_web::test]
    async fn prompt_reflects_mode() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt: &str| prompt.contains("【合計 3 問】") && prompt.contains("LaTeX"))
            .times(1)
            .returning(|_| Ok(quiz_reply(3)));
        let service = QuizService::new(Arc::new(generator));

        let result = service
            .generate_quiz(QuizRequest::new("二次方程式", QuizLevel::Intermediate, 3))
            .await;
        assert!(result.is_ok());
    }

    #[actix_web::test]
    async fn model_failure_is_propagated() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(AppError::ModelInvocation("quota exceeded".to_string())));
        let service = QuizService::new(Arc::new(generator));

        let result = service
            .generate_quiz(QuizRequest::new("確率", QuizLevel::Intermediate, 5))
            .await;
        assert!(matches!(result, Err(AppError::ModelInvocation(_))));
    }

    #[actix_web::test]
    async fn prose_only_reply_is_no_json_found() {
        let service = service_replying("申し訳ありません、作成できませんでした。".to_string());

        let result = service
            .generate_quiz(QuizRequest::new("確率", QuizLevel::Intermediate, 5))
            .await;
        assert!(matches!(result, Err(AppError::NoJsonFound)));
    }

    #[actix_web::test]
    async fn reply_without_questions_is_malformed() {
        let service = service_replying(r#"{"items": []}"#.to_string());

        let result = service
            .generate_quiz(QuizRequest::new("確率", QuizLevel::Intermediate, 5))
            .await;
        assert!(matches!(result, Err(AppError::MalformedJson(_))));
    }
}
