//! File processor module with compile-time limits and global logging integration

mod processor;

pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};
