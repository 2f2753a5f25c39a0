use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of study history for the optional spreadsheet hook.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyRecord {
    pub recorded_at: DateTime<Utc>,
    pub subject: String,
    pub score: Option<u8>,
    pub summary: String,
}

impl StudyRecord {
    pub fn new(subject: impl Into<String>, score: Option<u8>, summary: impl Into<String>) -> Self {
        Self {
            recorded_at: Utc::now(),
            subject: subject.into(),
            score,
            summary: summary.into(),
        }
    }

    /// Cell values in column order: timestamp, subject, score, summary.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.subject.clone(),
            self.score.map(|s| s.to_string()).unwrap_or_default(),
            self.summary.clone(),
        ]
    }
}
