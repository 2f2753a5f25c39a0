use serde::{Deserialize, Serialize};

use crate::models::serde_helpers::string_or_scalar;

/// Subjects containing this marker produce a reading-passage quiz.
pub const READING_MODE_MARKER: &str = "長文";

/// Reading-passage quizzes always carry exactly this many questions.
pub const READING_MODE_QUESTION_COUNT: usize = 5;

pub const DEFAULT_QUESTION_COUNT: u32 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizLevel {
    #[serde(alias = "初級")]
    Beginner,
    #[default]
    #[serde(alias = "中級")]
    Intermediate,
    #[serde(alias = "上級")]
    Advanced,
}

impl QuizLevel {
    /// Label used inside prompts.
    pub fn label(&self) -> &'static str {
        match self {
            QuizLevel::Beginner => "初級",
            QuizLevel::Intermediate => "中級",
            QuizLevel::Advanced => "上級",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizItem {
    pub question: String,
    /// Four entries for multiple choice, empty for fill-in and free response.
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub correct_answer: String,
}

/// Quiz as decoded from the model reply.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_body: Option<String>,
    pub questions: Vec<QuizItem>,
}

impl Quiz {
    /// Drops everything past `target_count`; never pads.
    pub fn truncate_to(&mut self, target_count: usize) {
        self.questions.truncate(target_count);
    }
}
