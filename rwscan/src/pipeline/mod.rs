mod error;
pub mod output;
mod result;

pub use error::PipelineError;
pub use output::{write_report, OutputError, ReportSummary};
pub use result::PipelineResult;

use crate::classifier::{ClassificationMetrics, Classifier, RebalanceStrategy};
use crate::config::ScanConfig;
use crate::file_processor::FileProcessor;
use crate::lexical::tokenize;
use crate::logging::{self, codes};
use crate::tree::BalancedOrderedSet;
use crate::vocabulary::Vocabulary;
use crate::{log_info, log_success, log_warning};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// What happened to one source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Scanned { tokens: usize },
    /// The file does not exist; both sets were left untouched
    SourceNotFound,
}

/// Scans any number of sources into one pair of sets
pub struct Pipeline {
    classifier: Classifier,
    processor: FileProcessor,
    files_scanned: Vec<PathBuf>,
    files_missing: Vec<PathBuf>,
    start_time: Instant,
}

impl Pipeline {
    /// Load the configured vocabulary once
    pub fn new(config: &ScanConfig) -> Result<Self, PipelineError> {
        let processor = FileProcessor::new();
        let vocabulary = Vocabulary::load_with(&processor, &config.vocabulary_path)?;
        Ok(Self::with_vocabulary(vocabulary, config.rebalance_strategy))
    }

    pub fn with_vocabulary(vocabulary: Vocabulary, strategy: RebalanceStrategy) -> Self {
        Self {
            classifier: Classifier::with_strategy(vocabulary, strategy),
            processor: FileProcessor::new(),
            files_scanned: Vec::new(),
            files_missing: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Read and classify one source file.
    ///
    /// A missing file is reported as [`ScanOutcome::SourceNotFound`]; every
    /// other read failure is an error.
    pub fn scan_file(&mut self, path: &Path) -> Result<ScanOutcome, PipelineError> {
        let file_id = self.files_scanned.len() + self.files_missing.len();

        logging::with_file_context(path.to_path_buf(), file_id, || {
            let file_result = match self.processor.process_file(path) {
                Ok(result) => result,
                Err(error) if error.is_not_found() => {
                    log_warning!(
                        code = codes::file_processing::FILE_NOT_FOUND,
                        "Source file not found, nothing scanned",
                        "path" => path.display()
                    );
                    self.files_missing.push(path.to_path_buf());
                    return Ok(ScanOutcome::SourceNotFound);
                }
                Err(error) => return Err(error.into()),
            };

            let tokens = self.scan_source(&file_result.source);
            self.files_scanned.push(path.to_path_buf());

            Ok(ScanOutcome::Scanned { tokens })
        })
    }

    /// Classify every token of in-memory source text, returning the token count
    pub fn scan_source(&mut self, source: &str) -> usize {
        let tokens = self.classifier.classify_all(tokenize(source));

        log_success!(
            codes::success::TOKENIZATION_COMPLETE,
            "Source tokenized and classified",
            "tokens" => tokens,
            "reserved_words" => self.classifier.reserved_words().len(),
            "identifiers" => self.classifier.identifiers().len()
        );

        tokens
    }

    pub fn reserved_words(&self) -> &BalancedOrderedSet<String> {
        self.classifier.reserved_words()
    }

    pub fn identifiers(&self) -> &BalancedOrderedSet<String> {
        self.classifier.identifiers()
    }

    pub fn metrics(&self) -> ClassificationMetrics {
        self.classifier.metrics()
    }

    /// Apply any outstanding rebalancing and hand over the sets
    pub fn finish(mut self) -> PipelineResult {
        self.classifier.finish();

        let metrics = self.classifier.metrics();
        log_success!(
            codes::success::CLASSIFICATION_COMPLETE,
            "Classification complete",
            "reserved_rebuilds" => metrics.reserved_rebuilds,
            "identifier_rebuilds" => metrics.identifier_rebuilds
        );

        let strategy = self.classifier.strategy();
        let vocabulary_size = self.classifier.vocabulary().len();
        let (reserved_words, identifiers) = self.classifier.into_sets();

        let result = PipelineResult {
            reserved_words,
            identifiers,
            metrics,
            strategy,
            vocabulary_size,
            files_scanned: self.files_scanned,
            files_missing: self.files_missing,
            processing_duration: self.start_time.elapsed(),
        };
        result.log_success();
        result
    }
}

/// Load the vocabulary, scan every configured source in order, and finish
pub fn run(config: &ScanConfig) -> Result<PipelineResult, PipelineError> {
    config.validate()?;

    log_info!("Starting scan",
        "vocabulary" => config.vocabulary_path.display(),
        "sources" => config.source_paths.len(),
        "strategy" => config.rebalance_strategy);

    let mut pipeline = Pipeline::new(config)?;
    for path in &config.source_paths {
        pipeline.scan_file(path)?;
    }

    Ok(pipeline.finish())
}
