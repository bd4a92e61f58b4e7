// Internal modules
pub mod classifier;
pub mod config;
pub mod file_processor;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod tree;
pub mod vocabulary;

// Re-export key types for library consumers
pub use classifier::{ClassificationMetrics, Classifier, RebalanceStrategy, WordClass};
pub use config::{OutputFormat, ScanConfig};
pub use pipeline::{Pipeline, PipelineError, PipelineResult, ScanOutcome};
pub use tree::BalancedOrderedSet;
pub use vocabulary::Vocabulary;
