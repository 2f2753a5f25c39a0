use serde::Serialize;

use crate::models::domain::{GradingResult, HomeworkDocument, Quiz, QuizItem};

/// `{"status":"success", ...payload}` envelope shared by every API route.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQuizDto {
    pub questions: Vec<QuizItem>,
    pub is_reading_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_body: Option<String>,
}

impl GeneratedQuizDto {
    pub fn new(quiz: Quiz, is_reading_mode: bool) -> Self {
        GeneratedQuizDto {
            questions: quiz.questions,
            is_reading_mode,
            passage_title: quiz.passage_title,
            passage_body: quiz.passage_body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GradingResponseDto {
    pub result: GradingResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeworkResponseDto {
    pub homework_content: HomeworkDocument,
}
