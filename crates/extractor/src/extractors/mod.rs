pub mod block;
pub mod html_extractor;
pub mod preprocessor;

pub use block::Block;
pub use html_extractor::{ExtractionRules, HtmlExtractor};
pub use preprocessor::Preprocessor;
