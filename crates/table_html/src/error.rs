//! Error types for HTML import/export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("Malformed fragment: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("Unexpected markup: {0}")]
    UnexpectedMarkup(String),

    #[error("Model error: {0}")]
    Model(#[from] table_model::ModelError),
}

pub type HtmlResult<T> = std::result::Result<T, HtmlError>;
