use crate::error::{ExtractorError, Result};
use regex::Regex;
use scraper::ElementRef;
use std::path::Path;
use std::sync::LazyLock;

static QUESTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("question start pattern is valid"));

pub struct Preprocessor;

impl Preprocessor {
    /// Reads a saved exam page. A missing file maps to [`ExtractorError::NotFound`].
    pub async fn read_html(path: &Path) -> Result<String> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExtractorError::NotFound(path.to_path_buf())
            } else {
                ExtractorError::Io(e)
            }
        })?;
        tracing::info!("Read HTML file: {} ({} bytes)", path.display(), content.len());
        Ok(content)
    }

    /// Joins every descendant text node with single spaces, trims the ends and
    /// collapses inner whitespace runs.
    pub fn normalized_text(element: ElementRef<'_>) -> String {
        element
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_question_start(text: &str) -> bool {
        QUESTION_START.is_match(text)
    }

    /// Cuts `text` to at most `max_chars` characters, on a char boundary.
    pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }
}
