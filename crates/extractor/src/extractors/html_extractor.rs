use super::block::{Block, has_class};
use super::preprocessor::Preprocessor;
use crate::canonical::models::QuestionRecord;
use crate::canonical::store;
use crate::error::{ExtractorError, Result};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use std::sync::LazyLock;

static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("li"));
static TABLE_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static TABLE_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Class names that mark answers and explanations in a saved exam page.
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    pub correct_marker: String,
    pub explanation_tag: String,
    pub explanation_markers: Vec<String>,
}

impl ExtractionRules {
    pub fn is_correct(&self, item: ElementRef<'_>) -> bool {
        has_class(item, &self.correct_marker)
    }

    /// An explanation box is an `explanation_tag` element carrying every configured marker.
    pub fn is_explanation(&self, element: ElementRef<'_>) -> bool {
        element.value().name() == self.explanation_tag
            && !self.explanation_markers.is_empty()
            && self
                .explanation_markers
                .iter()
                .all(|marker| has_class(element, marker))
    }
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            correct_marker: "correct_answer".to_string(),
            explanation_tag: "div".to_string(),
            explanation_markers: vec!["message_box".to_string(), "success".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlExtractor {
    rules: ExtractionRules,
}

impl HtmlExtractor {
    pub fn new(rules: ExtractionRules) -> Self {
        Self { rules }
    }

    /// Reads and extracts a saved exam page. A missing file is reported and
    /// yields no questions instead of an error.
    pub async fn extract_from_file(&self, path: impl AsRef<Path>) -> Result<Vec<QuestionRecord>> {
        match Preprocessor::read_html(path.as_ref()).await {
            Ok(html) => Ok(self.extract_from_html(&html)),
            Err(ExtractorError::NotFound(path)) => {
                tracing::error!("Error: File {} not found.", path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub fn extract_from_html(&self, html: &str) -> Vec<QuestionRecord> {
        tracing::info!("Starting HTML extraction ({} bytes)", html.len());

        let document = Html::parse_document(html);
        let mut questions = Vec::new();

        for paragraph in document.select(&PARAGRAPH) {
            let text = Preprocessor::normalized_text(paragraph);
            if !Preprocessor::is_question_start(&text) {
                continue;
            }

            let mut record = QuestionRecord::new(text);
            self.scan_siblings(paragraph, &mut record);

            tracing::debug!(
                "Question {}: {} option(s), {} correct, {}",
                record.question_number,
                record.options.len(),
                record.correct_answers.len(),
                record.r#type.as_str()
            );
            questions.push(record);
        }

        tracing::info!("Extraction complete: {} question(s)", questions.len());
        questions
    }

    /// Extracts `input` and writes the JSON array to `output` when anything was found.
    pub async fn extract_and_save(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<Vec<QuestionRecord>> {
        let questions = self.extract_from_file(input).await?;

        if !questions.is_empty() {
            store::save_questions(&questions, output.as_ref()).await?;
        }

        Ok(questions)
    }

    /// Walks the siblings after a question paragraph until the next question starts.
    fn scan_siblings(&self, paragraph: ElementRef<'_>, record: &mut QuestionRecord) {
        for element in paragraph.next_siblings().filter_map(ElementRef::wrap) {
            match Block::classify(element, &self.rules) {
                Block::QuestionStart => break,
                Block::OptionList(list) => self.collect_options(list, record),
                Block::MatchingTable(table) => collect_matching_rows(table, record),
                Block::Explanation(container) => {
                    record.set_explanation(Preprocessor::normalized_text(container));
                }
                Block::Other => {}
            }
        }
    }

    fn collect_options(&self, list: ElementRef<'_>, record: &mut QuestionRecord) {
        for item in list.select(&LIST_ITEM) {
            let text = Preprocessor::normalized_text(item);
            record.push_option(text, self.rules.is_correct(item));
        }
    }
}

fn collect_matching_rows(table: ElementRef<'_>, record: &mut QuestionRecord) {
    record.mark_matching();

    for row in table.select(&TABLE_ROW) {
        let row_text = row
            .select(&TABLE_CELL)
            .map(Preprocessor::normalized_text)
            .collect::<Vec<_>>()
            .join(" : ");

        if !row_text.is_empty() {
            record.push_matching_row(row_text);
        }
    }
}
