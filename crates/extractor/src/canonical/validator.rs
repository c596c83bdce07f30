use super::models::{QuestionRecord, QuestionType};
use crate::{ExtractorError, Result};
use std::collections::HashSet;
use tracing::warn;

pub struct QuestionValidator;

impl QuestionValidator {
    pub fn validate(questions: &[QuestionRecord]) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();
        let mut seen_numbers = HashSet::new();

        for (idx, question) in questions.iter().enumerate() {
            let label = format!("#{} (question {})", idx + 1, question.question_number);

            if question.question_number.is_empty() {
                report
                    .errors
                    .push(format!("Question {} has an empty question_number", label));
            }

            let prefix = question.question_text.split('.').next().unwrap_or_default();
            if question.question_number != prefix {
                report.errors.push(format!(
                    "Question {}: question_number '{}' does not match text prefix '{}'",
                    label, question.question_number, prefix
                ));
            }

            match question.r#type {
                QuestionType::MultipleChoice => {
                    if !is_ordered_subset(&question.correct_answers, &question.options) {
                        report.errors.push(format!(
                            "Question {}: correct_answers are not an ordered subset of options",
                            label
                        ));
                    }
                    if !question.options.is_empty() && question.correct_answers.is_empty() {
                        report
                            .warnings
                            .push(format!("Question {} has no correct answer", label));
                    }
                }
                QuestionType::Matching => {
                    if question.correct_answers != question.options {
                        report.errors.push(format!(
                            "Question {}: matching correct_answers must equal options",
                            label
                        ));
                    }
                }
            }

            if question.options.is_empty() {
                report
                    .warnings
                    .push(format!("Question {} has no options", label));
            }

            if !question.has_explanation() {
                report
                    .warnings
                    .push(format!("Question {} has no explanation", label));
            }

            if !question.question_number.is_empty()
                && !seen_numbers.insert(question.question_number.as_str())
            {
                report.warnings.push(format!(
                    "Duplicate question_number: '{}'",
                    question.question_number
                ));
            }
        }

        if !report.errors.is_empty() {
            Err(ExtractorError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

/// True when every element of `subset` appears in `options` in the same relative order.
fn is_ordered_subset(subset: &[String], options: &[String]) -> bool {
    let mut remaining = options.iter();
    subset
        .iter()
        .all(|answer| remaining.any(|option| option == answer))
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiple_choice() -> QuestionRecord {
        let mut q = QuestionRecord::new("1. What is 2+2?");
        q.push_option("3".to_string(), false);
        q.push_option("4".to_string(), true);
        q.set_explanation("Basic arithmetic".to_string());
        q
    }

    #[test]
    fn test_valid_questions_have_no_warnings() {
        let mut matching = QuestionRecord::new("2. Match the pairs");
        matching.push_matching_row("A : 1".to_string());
        matching.set_explanation("Pairs".to_string());

        let report = QuestionValidator::validate(&[multiple_choice(), matching]).unwrap();
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_correct_answer_outside_options_is_an_error() {
        let mut q = multiple_choice();
        q.correct_answers.push("5".to_string());

        let err = QuestionValidator::validate(&[q]).unwrap_err();
        assert!(err.to_string().contains("ordered subset"));
    }

    #[test]
    fn test_out_of_order_answers_are_an_error() {
        let mut q = multiple_choice();
        q.push_option("5".to_string(), true);
        q.correct_answers.reverse();

        assert!(QuestionValidator::validate(&[q]).is_err());
    }

    #[test]
    fn test_matching_answers_must_equal_options() {
        let mut q = QuestionRecord::new("2. Match");
        q.push_matching_row("A : 1".to_string());
        q.options.push("B : 2".to_string());

        let err = QuestionValidator::validate(&[q]).unwrap_err();
        assert!(err.to_string().contains("must equal options"));
    }

    #[test]
    fn test_number_mismatch_is_an_error() {
        let mut q = multiple_choice();
        q.question_number = "7".to_string();

        assert!(QuestionValidator::validate(&[q]).is_err());
    }

    #[test]
    fn test_warnings_for_sparse_questions() {
        let bare = QuestionRecord::new("3. Nothing follows");
        let report = QuestionValidator::validate(&[bare.clone(), bare]).unwrap();

        assert!(report.warnings.iter().any(|w| w.contains("has no options")));
        assert!(report.warnings.iter().any(|w| w.contains("has no explanation")));
        assert!(report.warnings.iter().any(|w| w.contains("Duplicate question_number: '3'")));
    }
}
