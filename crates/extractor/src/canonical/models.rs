use serde::{Deserialize, Serialize};

/// Explanation value used when no explanation box follows a question.
pub const NO_EXPLANATION: &str = "N/A";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    Matching,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::Matching => "matching",
        }
    }
}

/// One question block recovered from an exam dump.
///
/// Field order is the JSON key order of the saved file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question_number: String,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answers: Vec<String>,
    #[serde(rename = "type")]
    pub r#type: QuestionType,
    pub explanation: String,
}

impl QuestionRecord {
    /// Builds a record from the normalized text of a question-start paragraph.
    /// The number is everything before the first period, taken verbatim.
    pub fn new(question_text: impl Into<String>) -> Self {
        let question_text = question_text.into();
        let question_number = question_text
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            question_number,
            question_text,
            options: Vec::new(),
            correct_answers: Vec::new(),
            r#type: QuestionType::MultipleChoice,
            explanation: NO_EXPLANATION.to_string(),
        }
    }

    pub fn push_option(&mut self, text: String, is_correct: bool) {
        if is_correct {
            self.correct_answers.push(text.clone());
        }
        self.options.push(text);
    }

    /// Matching rows carry no per-row correctness signal, so each row counts as correct.
    pub fn push_matching_row(&mut self, row: String) {
        self.r#type = QuestionType::Matching;
        self.push_option(row, true);
    }

    pub fn mark_matching(&mut self) {
        self.r#type = QuestionType::Matching;
    }

    pub fn set_explanation(&mut self, explanation: String) {
        self.explanation = explanation;
    }

    pub fn has_explanation(&self) -> bool {
        let trimmed = self.explanation.trim();
        !trimmed.is_empty() && trimmed != NO_EXPLANATION
    }
}
