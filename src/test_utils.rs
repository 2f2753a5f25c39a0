#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::dto::request::GradingRequest;

    /// Standard-mode reply with `n` items, wrapped in the chatter models tend to add.
    pub fn quiz_reply(n: usize) -> String {
        let questions: Vec<Value> = (1..=n)
            .map(|i| {
                if i % 2 == 1 {
                    json!({
                        "question": format!("問題{}: $x^2 - {} = 0$ を解け", i, i * i),
                        "choices": [],
                        "correct_answer": format!("$x = \\pm {}$", i)
                    })
                } else {
                    json!({
                        "question": format!("問題{}: $\\frac{{{}}}{{2}}$ に等しいものは？", i, i),
                        "choices": ["1", "2", "3", "4"],
                        "correct_answer": (i / 2).to_string()
                    })
                }
            })
            .collect();

        format!(
            "はい、作成しました。\n```json\n{}\n```\n",
            json!({ "questions": questions })
        )
    }

    pub fn reading_quiz_reply(n: usize) -> String {
        let questions: Vec<Value> = (1..=n)
            .map(|i| {
                json!({
                    "question": format!("Q{}: Why did Ken go out?", i),
                    "choices": ["A", "B", "C", "D"],
                    "correct_answer": "A"
                })
            })
            .collect();

        json!({
            "passage_title": "Morning Walk",
            "passage_body": "Ken went out early to see the sunrise.",
            "questions": questions
        })
        .to_string()
    }

    pub fn grading_request() -> GradingRequest {
        GradingRequest {
            questions: vec![
                json!({ "question": "1+1", "choices": [], "correct_answer": "2" }),
                json!({ "question": "2+2", "choices": ["3", "4", "5", "6"], "correct_answer": "4" }),
            ],
            answers: json!(["2", "5"]),
        }
    }

    pub fn grading_reply() -> String {
        json!({
            "score": 50,
            "good_points": "一問目は正確でした。途中式も丁寧です。計算の速さも十分です。集中して取り組めています。見直しの習慣も見られます。",
            "improvement_points": "足し算の確認が不足しています。選択肢を選ぶ前に検算しましょう。落ち着いて解きましょう。",
            "details": [
                { "question": "1+1", "user_answer": "2", "correct_answer": "2", "is_correct": true, "explanation": "正解です。" },
                { "question": "2+2", "user_answer": "5", "correct_answer": "4", "is_correct": false, "explanation": "2+2は4です。" }
            ]
        })
        .to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use serde_json::Value;

    /// Asserts the uniform failure envelope `{"status":"error","message":...}`.
    pub fn assert_error_envelope(body: &Value) {
        assert_eq!(body["status"], "error", "Expected error envelope, got: {}", body);
        assert!(
            body["message"].as_str().is_some_and(|m| !m.is_empty()),
            "Error envelope without message: {}",
            body
        );
    }

    pub fn assert_success_envelope(body: &Value) {
        assert_eq!(body["status"], "success", "Expected success envelope, got: {}", body);
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Quiz;
    use crate::services::response_extractor::extract;

    #[test]
    fn test_fixtures_quiz_reply_is_extractable() {
        let quiz: Quiz = extract(&quiz_reply(4)).unwrap();
        assert_eq!(quiz.questions.len(), 4);
        assert!(quiz.questions[0].choices.is_empty());
        assert_eq!(quiz.questions[1].choices.len(), 4);
    }

    #[test]
    fn test_fixtures_reading_reply_has_passage() {
        let quiz: Quiz = extract(&reading_quiz_reply(5)).unwrap();
        assert_eq!(quiz.passage_title.as_deref(), Some("Morning Walk"));
        assert_eq!(quiz.questions.len(), 5);
    }

    #[test]
    fn test_fixtures_grading_request() {
        let request = grading_request();
        assert_eq!(request.questions.len(), 2);
        assert!(request.answers.is_array());
    }
}
