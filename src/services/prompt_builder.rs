//! Turns validated requests into the instruction text sent to the model.
//!
//! Every function here is pure. The model is steered only by these instructions, so the wording of
//! counts, key names and formatting rules is the contract with the reply parser.

use serde_json::Value;

use crate::constants::prompts::{
    ANSWER_BLANK, GRADING_OUTPUT_FORMAT, GRADING_ROLE, GRADING_RULES, HOMEWORK_ANSWER_SECTION,
    HOMEWORK_OUTPUT_RULES, HOMEWORK_ROLE, HOMEWORK_SUMMARY_SECTION, LATEX_RULES,
    READING_QUIZ_OUTPUT_FORMAT, STANDARD_QUIZ_OUTPUT_FORMAT,
};
use crate::models::domain::quiz::READING_MODE_QUESTION_COUNT;
use crate::models::dto::request::{GradingRequest, HomeworkRequest, QuizRequest};

pub fn build_quiz_prompt(request: &QuizRequest) -> String {
    if request.is_reading_mode() {
        build_reading_quiz_prompt(request)
    } else {
        build_standard_quiz_prompt(request)
    }
}

fn build_reading_quiz_prompt(request: &QuizRequest) -> String {
    format!(
        "単元: {subject}\n難易度: {level}\n\n\
         【構成ルール】\n\
         1. 本文（長文）を1つだけ作成してください。\n\
         2. 問題は必ず{n}問にしてください。\n\
         3. 重要：各設問は【必ず4択の選択式】にしてください。\n\
         4. 各設問の正解は1つだけにしてください。\n\n\
         {format}\n",
        subject = request.subject,
        level = request.level.label(),
        n = READING_MODE_QUESTION_COUNT,
        format = READING_QUIZ_OUTPUT_FORMAT,
    )
}

fn build_standard_quiz_prompt(request: &QuizRequest) -> String {
    format!(
        "単元: {subject}\n難易度: {level}\n\n\
         【構成ルール】\n\
         1. 【合計 {count} 問】の小テストを作成してください。\n\
         2. 1つの設問につき、解くべき問題は「絶対に1つだけ」にしてください。(1)(2)などの小問分けは厳禁です。\n\
         3. 各設問の答えは1つに定まるようにしてください。\n\
         4. 選択式（4択）、空欄補充、記述式をバランスよく混ぜてください。\n\n\
         {latex}\n\n\
         {format}\n",
        subject = request.subject,
        level = request.level.label(),
        count = request.count,
        latex = LATEX_RULES,
        format = STANDARD_QUIZ_OUTPUT_FORMAT,
    )
}

pub fn build_grading_prompt(request: &GradingRequest) -> String {
    // serde_json leaves non-ASCII text unescaped, so Japanese stays readable to the model.
    let questions = Value::Array(request.questions.clone()).to_string();
    let answers = request.answers.to_string();

    format!(
        "{role}\n\n\
         【データ】\n\
         問題: {questions}\n\
         ユーザー解答: {answers}\n\n\
         {rules}\n\n\
         {format}\n",
        role = GRADING_ROLE,
        rules = GRADING_RULES,
        format = GRADING_OUTPUT_FORMAT,
    )
}

pub fn build_homework_prompt(request: &HomeworkRequest) -> String {
    let tiers = request.tiers;

    format!(
        "{role}\n\n\
         【データ】\n\
         - 単元: {subject}\n\
         - 前回のスコア: {score}点\n\
         - 重点強化ポイント: {improvement}\n\n\
         【プリント構成の指示】\n\n\
         {summary}\n\n\
         2. # 復習トレーニング（問題のみ・合計{total}問）\n\
         \x20  - 問1：基礎の再確認（穴埋めや単純な計算・和訳など）、必ず{basic}問\n\
         \x20  - 問2：類題演習（テストで間違えたパターンに似た問題）、必ず{normal}問\n\
         \x20  - 問3：応用チャレンジ（少しひねった発展問題）、必ず{advanced}問\n\
         \x20  ※0問と指定された区分は見出しごと省略してください。\n\
         \x20  ※各問題の下には、解答を書き込むための「{blank}」を大きめに設けてください。\n\n\
         {answers}\n\n\
         4. {latex}\n\n\
         {output}\n",
        role = HOMEWORK_ROLE,
        subject = request.subject,
        score = request.score,
        improvement = request.improvement_points,
        summary = HOMEWORK_SUMMARY_SECTION,
        total = request.total_questions(),
        basic = tiers.basic,
        normal = tiers.normal,
        advanced = tiers.advanced,
        blank = ANSWER_BLANK,
        answers = HOMEWORK_ANSWER_SECTION,
        latex = LATEX_RULES,
        output = HOMEWORK_OUTPUT_RULES,
    )
}
