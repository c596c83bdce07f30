pub mod canonical;
pub mod error;
pub mod extractors;
pub mod search;

pub use canonical::{QuestionRecord, QuestionType};
pub use error::{ExtractorError, Result};
pub use extractors::{ExtractionRules, HtmlExtractor};
pub use search::QuestionSearch;
