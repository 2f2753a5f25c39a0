// Fixed instruction blocks. Per-request values are spliced in by services::prompt_builder.

pub const LATEX_RULES: &str = r#"【数式・表記ルール】
1. 数式は必ず LaTeX 形式で書き、$ $ で囲んでください。
   例: $x^2$, $\frac{1}{2}$, $\sqrt{x}$, $\times$, $\div$
2. 2乗を ^2 や ** と書くようなプログラミング的表記は禁止です。"#;

pub const STANDARD_QUIZ_OUTPUT_FORMAT: &str = r#"【出力JSONフォーマット（厳守）】
{
  "questions": [
    {
      "question": "問題文（数式は$ $で囲む）",
      "choices": ["選択肢1", "選択肢2", "選択肢3", "選択肢4"],
      "correct_answer": "正解の文字列（選択肢がある場合は、選択肢のうち1つと完全一致させること）"
    }
  ]
}
※選択肢がない問題（空欄補充・記述式）では "choices": [] と空の配列にしてください。
※キー名は必ず "question", "choices", "correct_answer" の3つだけを使用してください。
※JSON以外の文章は出力しないでください。"#;

pub const READING_QUIZ_OUTPUT_FORMAT: &str = r#"【出力JSONフォーマット（厳守）】
{
  "passage_title": "本文のタイトル",
  "passage_body": "本文",
  "questions": [
    {
      "question": "問題文",
      "choices": ["選択肢1", "選択肢2", "選択肢3", "選択肢4"],
      "correct_answer": "正解の文字列（選択肢のうち1つと完全一致させること）"
    }
  ]
}
※JSON以外の文章は出力しないでください。"#;

pub const GRADING_ROLE: &str =
    "あなたは厳格な採点官です。以下のデータを正確に採点し、指定されたJSON形式のみを出力してください。";

pub const GRADING_RULES: &str = r#"【採点ルール】
1. is_correct は、解答が正解と一致していれば true にしてください。記述式は意味が通じていれば true にしてください。
2. user_answer には「ユーザーが入力した値」を、correct_answer には「本来の正解」を入れてください。
3. 解説(explanation)は日本語で簡潔に書いてください。
4. 良かった点(good_points)と改善点(improvement_points)は必ず日本語で書いてください。
5. 良かった点(good_points)は具体的に5文以上で書いてください（最低でも4文）。
6. 改善点(improvement_points)は具体的に3文以上で書いてください。
7. score は 0 から 100 の整数にしてください。"#;

pub const GRADING_OUTPUT_FORMAT: &str = r#"【出力形式（これ以外の文字は一切出力しないでください）】
{
  "score": 点数(0-100の整数),
  "good_points": "...",
  "improvement_points": "...",
  "details": [
    {"question": "..", "user_answer": "..", "correct_answer": "..", "is_correct": true, "explanation": ".."}
  ]
}"#;

pub const HOMEWORK_ROLE: &str = r#"あなたはプロの学習教材作成者です。
以下のテスト結果をもとに、無駄な装飾を省いた実戦的な「復習問題シート」を作成してください。
名前欄や日付欄などの事務的な項目は一切不要です。"#;

pub const HOMEWORK_SUMMARY_SECTION: &str = r#"1. # 核心ポイントのまとめ
   この単元で絶対に外せない公式や考え方を、箇条書きで簡潔にまとめてください。
   生徒が「ここを見れば解ける」と思える辞書のような内容にしてください。"#;

pub const HOMEWORK_ANSWER_SECTION: &str = r#"3. # 【別紙】解答と解説
   - 全問の正解を明記してください。
   - なぜその答えになるのか、解き方の手順（ステップ）を論理的に解説してください。"#;

pub const HOMEWORK_OUTPUT_RULES: &str = r#"【出力ルール】
- Markdown形式で出力してください。
- 「作成しました」などの挨拶や前置きは不要です。最初の行は # から始めてください。"#;

pub const ANSWER_BLANK: &str = "（解答欄：　　　　　　）";
