use super::html_extractor::ExtractionRules;
use super::preprocessor::Preprocessor;
use scraper::ElementRef;

/// Structural kinds recognized while scanning the siblings of a question paragraph.
#[derive(Debug, Clone, Copy)]
pub enum Block<'a> {
    QuestionStart,
    OptionList(ElementRef<'a>),
    MatchingTable(ElementRef<'a>),
    Explanation(ElementRef<'a>),
    Other,
}

impl<'a> Block<'a> {
    pub fn classify(element: ElementRef<'a>, rules: &ExtractionRules) -> Self {
        match element.value().name() {
            "p" if Preprocessor::is_question_start(&Preprocessor::normalized_text(element)) => {
                Self::QuestionStart
            }
            "ul" => Self::OptionList(element),
            "table" => Self::MatchingTable(element),
            _ if rules.is_explanation(element) => Self::Explanation(element),
            _ => Self::Other,
        }
    }
}

pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn classify_first(html: &str, selector: &str) -> &'static str {
        let document = Html::parse_document(html);
        let selector = Selector::parse(selector).unwrap();
        let element = document.select(&selector).next().unwrap();
        match Block::classify(element, &ExtractionRules::default()) {
            Block::QuestionStart => "question",
            Block::OptionList(_) => "list",
            Block::MatchingTable(_) => "table",
            Block::Explanation(_) => "explanation",
            Block::Other => "other",
        }
    }

    #[test]
    fn test_classify_structural_nodes() {
        assert_eq!(classify_first("<p>4. Next question</p>", "p"), "question");
        assert_eq!(classify_first("<p>Plain paragraph</p>", "p"), "other");
        assert_eq!(classify_first("<ul><li>a</li></ul>", "ul"), "list");
        assert_eq!(classify_first("<ol><li>a</li></ol>", "ol"), "other");
        assert_eq!(
            classify_first("<table><tr><td>a</td></tr></table>", "table"),
            "table"
        );
        assert_eq!(
            classify_first(r#"<div class="message_box success">Why</div>"#, "div"),
            "explanation"
        );
        assert_eq!(
            classify_first(r#"<div class="message_box warning">Careful</div>"#, "div"),
            "other"
        );
        assert_eq!(
            classify_first(r#"<span class="message_box success">Why</span>"#, "span"),
            "other"
        );
        assert_eq!(classify_first("<img src='x.png'>", "img"), "other");
    }
}
