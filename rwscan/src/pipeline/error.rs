use super::output::OutputError;
use crate::config::ConfigError;
use crate::file_processor::FileProcessorError;
use crate::logging::{codes, Code};
use crate::vocabulary::VocabularyError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Vocabulary loading failed: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Report output failed: {0}")]
    Output(#[from] OutputError),
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            PipelineError::FileProcessing(e) => e.error_code(),
            PipelineError::Vocabulary(e) => e.error_code(),
            PipelineError::Config(e) => e.error_code(),
            PipelineError::Output(_) => codes::output::REPORT_WRITE_FAILED,
        }
    }
}
