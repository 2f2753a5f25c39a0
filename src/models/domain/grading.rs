use serde::{Deserialize, Serialize};

use crate::models::serde_helpers::{lenient_bool, score_0_to_100, string_or_scalar};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GradingResult {
    #[serde(deserialize_with = "score_0_to_100")]
    pub score: u8,
    #[serde(default)]
    pub good_points: String,
    #[serde(default)]
    pub improvement_points: String,
    #[serde(default)]
    pub details: Vec<GradingDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GradingDetail {
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub question: String,
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub user_answer: String,
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub correct_answer: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
}

impl GradingResult {
    pub fn correct_count(&self) -> usize {
        self.details.iter().filter(|d| d.is_correct).count()
    }
}
