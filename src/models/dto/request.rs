use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz::{
    QuizLevel, DEFAULT_QUESTION_COUNT, READING_MODE_MARKER, READING_MODE_QUESTION_COUNT,
};
use crate::models::domain::TierCounts;
use crate::models::serde_helpers::{count_or_zero, optional_strict_count, string_or_scalar};

/// Body of `POST /generate_test`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequestDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,

    #[serde(default)]
    pub level: Option<QuizLevel>,

    // The browser client sends this as a string.
    #[serde(default, deserialize_with = "optional_strict_count")]
    #[validate(range(min = 1))]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub subject: String,
    pub level: QuizLevel,
    pub count: u32,
}

impl QuizRequest {
    pub fn new(subject: impl Into<String>, level: QuizLevel, count: u32) -> Self {
        Self {
            subject: subject.into(),
            level,
            count,
        }
    }

    pub fn is_reading_mode(&self) -> bool {
        self.subject.contains(READING_MODE_MARKER)
    }

    /// Number of items the reply is cut down to.
    pub fn target_count(&self) -> usize {
        if self.is_reading_mode() {
            READING_MODE_QUESTION_COUNT
        } else {
            self.count as usize
        }
    }
}

impl TryFrom<GenerateQuizRequestDto> for QuizRequest {
    type Error = AppError;

    fn try_from(dto: GenerateQuizRequestDto) -> AppResult<Self> {
        dto.validate()?;

        Ok(QuizRequest {
            subject: dto.subject.trim().to_string(),
            level: dto.level.unwrap_or_default(),
            count: dto.count.unwrap_or(DEFAULT_QUESTION_COUNT),
        })
    }
}

/// Body of `POST /submit_grading`. Extra fields such as `subject` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitGradingRequestDto {
    #[serde(default)]
    pub questions: Option<Vec<Value>>,
    #[serde(default)]
    pub answers: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradingRequest {
    /// Question records exactly as the client holds them.
    pub questions: Vec<Value>,
    /// Array indexed by question position, or object keyed by question id.
    pub answers: Value,
}

impl TryFrom<SubmitGradingRequestDto> for GradingRequest {
    type Error = AppError;

    fn try_from(dto: SubmitGradingRequestDto) -> AppResult<Self> {
        let questions = dto
            .questions
            .ok_or_else(|| AppError::CallerInput("questions is required".to_string()))?;
        let answers = dto
            .answers
            .filter(|a| !a.is_null())
            .ok_or_else(|| AppError::CallerInput("answers is required".to_string()))?;

        if questions.is_empty() {
            return Err(AppError::CallerInput(
                "questions must contain at least one item".to_string(),
            ));
        }
        if !(answers.is_array() || answers.is_object()) {
            return Err(AppError::CallerInput(
                "answers must be an array or an object".to_string(),
            ));
        }

        Ok(GradingRequest { questions, answers })
    }
}

/// Body of `POST /generate_homework`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateHomeworkRequestDto {
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub subject: String,
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub score: String,
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub improvement_points: String,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub count_basic: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub count_normal: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub count_advanced: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRequest {
    pub subject: String,
    pub score: String,
    pub improvement_points: String,
    pub tiers: TierCounts,
}

impl HomeworkRequest {
    pub fn total_questions(&self) -> u32 {
        self.tiers.total()
    }
}

impl From<GenerateHomeworkRequestDto> for HomeworkRequest {
    fn from(dto: GenerateHomeworkRequestDto) -> Self {
        HomeworkRequest {
            subject: dto.subject,
            score: dto.score,
            improvement_points: dto.improvement_points,
            tiers: TierCounts::new(dto.count_basic, dto.count_normal, dto.count_advanced),
        }
    }
}
