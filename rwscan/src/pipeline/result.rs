use crate::classifier::{ClassificationMetrics, RebalanceStrategy};
use crate::logging::codes;
use crate::tree::BalancedOrderedSet;
use std::path::PathBuf;
use std::time::Duration;

/// Everything a finished scan produced
#[derive(Debug)]
pub struct PipelineResult {
    pub reserved_words: BalancedOrderedSet<String>,
    pub identifiers: BalancedOrderedSet<String>,
    pub metrics: ClassificationMetrics,
    pub strategy: RebalanceStrategy,
    pub vocabulary_size: usize,
    pub files_scanned: Vec<PathBuf>,
    /// Sources skipped because they did not exist
    pub files_missing: Vec<PathBuf>,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn log_success(&self) {
        crate::log_performance!(
            codes::success::SCAN_COMPLETE,
            "Scan complete",
            duration = self.processing_duration,
            "files" => self.files_scanned.len(),
            "missing" => self.files_missing.len(),
            "tokens" => self.metrics.tokens_seen,
            "reserved_words" => self.reserved_words.len(),
            "identifiers" => self.identifiers.len()
        );
    }
}
