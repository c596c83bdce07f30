pub mod models;
pub mod preview;
pub mod store;
pub mod validator;

pub use models::{NO_EXPLANATION, QuestionRecord, QuestionType};
pub use validator::{QuestionValidator, ValidationReport};
