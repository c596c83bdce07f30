use super::models::QuestionRecord;
use crate::extractors::Preprocessor;
use std::fmt::Write;

pub const DEFAULT_PREVIEW_COUNT: usize = 3;
const EXPLANATION_PREVIEW_CHARS: usize = 100;

/// Renders the first `count` questions as a short console summary.
pub fn render_preview(questions: &[QuestionRecord], count: usize) -> String {
    let mut out = String::new();

    for question in questions.iter().take(count) {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "--- Question {} ---", question.question_number);
        let _ = writeln!(out, "Text: {}", question.question_text);
        let _ = writeln!(out, "Type: {}", question.r#type.as_str());
        let _ = writeln!(out, "Correct Answer(s): {:?}", question.correct_answers);
        let _ = writeln!(
            out,
            "Explanation: {}...",
            Preprocessor::truncate_chars(&question.explanation, EXPLANATION_PREVIEW_CHARS)
        );
        out.push('\n');
    }

    out
}
