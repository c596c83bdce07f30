use crate::canonical::models::QuestionRecord;
use regex::RegexBuilder;
use std::borrow::Cow;
use std::fmt::Write;

pub const QUERY_RESULT_LIMIT: usize = 20;
pub const BROWSE_RESULT_LIMIT: usize = 10;

/// Case-insensitive lookup over an extracted question set.
pub struct QuestionSearch<'a> {
    questions: &'a [QuestionRecord],
}

impl<'a> QuestionSearch<'a> {
    pub fn new(questions: &'a [QuestionRecord]) -> Self {
        Self { questions }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns every question when the query is blank.
    pub fn filter(&self, query: &str) -> Vec<&'a QuestionRecord> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return self.questions.iter().collect();
        }

        self.questions
            .iter()
            .filter(|question| matches(question, &term))
            .collect()
    }

    pub fn summary(&self, query: &str, matched: usize) -> String {
        if query.trim().is_empty() {
            format!("{} questions loaded", self.total())
        } else {
            format!("{} of {} questions found", matched, self.total())
        }
    }

    pub fn default_limit(query: &str) -> usize {
        if query.trim().is_empty() {
            BROWSE_RESULT_LIMIT
        } else {
            QUERY_RESULT_LIMIT
        }
    }
}

fn matches(question: &QuestionRecord, term: &str) -> bool {
    question.question_text.to_lowercase().contains(term)
        || question.question_number.contains(term)
        || question.options.join(" ").to_lowercase().contains(term)
        || question.correct_answers.join(" ").to_lowercase().contains(term)
        || question.explanation.to_lowercase().contains(term)
}

/// Wraps case-insensitive occurrences of `term` in `**`.
pub fn highlight<'t>(text: &'t str, term: &str) -> Cow<'t, str> {
    let term = term.trim();
    if term.is_empty() {
        return Cow::Borrowed(text);
    }

    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace_all(text, "**${0}**"),
        Err(_) => Cow::Borrowed(text),
    }
}

pub fn render_question(question: &QuestionRecord, term: &str) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Question {} [{}]",
        question.question_number,
        question.r#type.as_str()
    );
    let _ = writeln!(out, "{}", highlight(&question.question_text, term));

    if !question.options.is_empty() {
        let _ = writeln!(out, "Options:");
        for option in &question.options {
            let _ = writeln!(out, "  - {}", highlight(option, term));
        }
    }

    if !question.correct_answers.is_empty() {
        let _ = writeln!(out, "Correct Answer(s):");
        for answer in &question.correct_answers {
            let _ = writeln!(out, "  * {}", highlight(answer, term));
        }
    }

    if question.has_explanation() {
        let _ = writeln!(out, "Explanation: {}", highlight(&question.explanation, term));
    }

    out
}
