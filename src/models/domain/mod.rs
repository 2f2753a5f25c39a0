pub mod grading;
pub mod homework;
pub mod quiz;
pub mod study_record;
pub use grading::{GradingDetail, GradingResult};
pub use homework::{HomeworkDocument, TierCounts};
pub use quiz::{Quiz, QuizItem, QuizLevel};
pub use study_record::StudyRecord;
