//! Error types for table editing operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Model error: {0}")]
    Model(#[from] table_model::ModelError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
