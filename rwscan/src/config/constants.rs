//! Compile-time constants

pub mod defaults {
    /// Word list consulted when no vocabulary path is configured
    pub const VOCABULARY_PATH: &str = "reservedWords.txt";

    /// Source file scanned when no source path is configured
    pub const SOURCE_PATH: &str = "Palindrome.java";
}

pub mod file_processing {
    /// Maximum file size read into memory (64 MiB)
    pub const MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

    /// Files above this size are logged as large before reading (1 MiB)
    pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;
}

pub mod logging {
    /// Events retained by the in-memory logger
    pub const LOG_BUFFER_SIZE: usize = 10_000;

    /// Longer messages are truncated before dispatch
    pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
}

pub mod report {
    pub const RESERVED_HEADER: &str = "Reserved words found:";
    pub const IDENTIFIER_HEADER: &str = "User defined identifiers found:";
}

/// Environment variable names for configuration
pub mod env_vars {
    // Scan
    pub const VOCABULARY: &str = "RWSCAN_VOCABULARY";
    pub const SOURCE: &str = "RWSCAN_SOURCE";
    pub const REBALANCE: &str = "RWSCAN_REBALANCE";
    pub const OUTPUT_FORMAT: &str = "RWSCAN_OUTPUT_FORMAT";

    // Logging
    pub const LOG_LEVEL: &str = "RWSCAN_LOG_LEVEL";
    pub const STRUCTURED_LOGS: &str = "RWSCAN_STRUCTURED_LOGS";
    pub const CONSOLE_LOGS: &str = "RWSCAN_CONSOLE_LOGS";
}
