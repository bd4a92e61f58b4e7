//! Reserved word vocabulary
//!
//! Loaded once from a whitespace-separated word list and afterwards used only
//! for exact, case-sensitive membership tests.

use crate::file_processor::{FileProcessor, FileProcessorError};
use crate::logging::codes;
use crate::{log_success, log_warning};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Failed to load vocabulary from {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: FileProcessorError,
    },
}

impl VocabularyError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            VocabularyError::Load { source, .. } => source.error_code(),
        }
    }
}

/// Separates fields of the word list: the space, line and paragraph
/// separators minus the non-breaking ones, plus the ASCII control
/// separators `\t`..`\r` and `\u{1C}`..`\u{1F}`. `\u{85}` is not a separator.
fn is_field_separator(ch: char) -> bool {
    matches!(
        ch,
        '\t'..='\r'
            | '\u{1C}'..='\u{1F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Horizontal whitespace removed from inside each field
fn is_horizontal_whitespace(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{180E}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Immutable set of reserved words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Empty vocabulary; every token classifies as an identifier
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a word list
    pub fn from_source(source: &str) -> Self {
        let words = source
            .split(is_field_separator)
            .map(|field| {
                field
                    .chars()
                    .filter(|&ch| !is_horizontal_whitespace(ch))
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Load the word list at `path`.
    ///
    /// A missing file is not an error: a warning is logged and the vocabulary
    /// is empty. Any other failure to read the file is returned.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        Self::load_with(&FileProcessor::new(), path)
    }

    pub fn load_with(processor: &FileProcessor, path: &Path) -> Result<Self, VocabularyError> {
        match processor.process_file(path) {
            Ok(result) => {
                let vocabulary = Self::from_source(&result.source);
                log_success!(
                    codes::success::VOCABULARY_LOADED,
                    "Vocabulary loaded",
                    "path" => path.display(),
                    "words" => vocabulary.len()
                );
                Ok(vocabulary)
            }
            Err(error) if error.is_not_found() => {
                log_warning!(
                    code = codes::vocabulary::VOCABULARY_MISSING,
                    "Vocabulary file not found, continuing with no reserved words",
                    "path" => path.display()
                );
                Ok(Self::empty())
            }
            Err(source) => Err(VocabularyError::Load {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in ascending order
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(Into::into)
                .filter(|word: &String| !word.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parses_whitespace_separated_words() {
        let vocabulary = Vocabulary::from_source("int\treturn\n  if\r\nwhile  \n");
        assert_eq!(vocabulary.sorted_words(), vec!["if", "int", "return", "while"]);
    }

    #[test]
    fn test_membership_is_exact_and_case_sensitive() {
        let vocabulary: Vocabulary = ["int", "return"].into_iter().collect();
        assert!(vocabulary.contains("int"));
        assert!(!vocabulary.contains("Int"));
        assert!(!vocabulary.contains("in"));
    }

    #[test]
    fn test_non_breaking_space_is_stripped_not_split() {
        let vocabulary = Vocabulary::from_source("pub\u{00A0}lic static\u{202F}\n");
        assert_eq!(vocabulary.sorted_words(), vec!["public", "static"]);
    }

    #[test]
    fn test_control_separators_split_but_next_line_does_not() {
        let vocabulary = Vocabulary::from_source("int\u{1C}if\u{1F}for\u{2028}do nat\u{85}ive");
        assert_eq!(
            vocabulary.sorted_words(),
            vec!["do", "for", "if", "int", "nat\u{85}ive"]
        );
    }

    #[test]
    fn test_blank_word_list_is_empty() {
        assert!(Vocabulary::from_source("").is_empty());
        assert!(Vocabulary::from_source(" \n\u{00A0}\n\t").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(Vocabulary::from_source("for for\nfor").len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reservedWords.txt");
        fs::write(&path, "abstract\nboolean\nbreak\n").unwrap();

        let vocabulary = Vocabulary::load(&path).unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("boolean"));
    }

    #[test]
    fn test_missing_file_yields_empty_vocabulary() {
        let dir = tempdir().unwrap();
        let vocabulary = Vocabulary::load(&dir.path().join("missing.txt")).unwrap();
        assert!(vocabulary.is_empty());
    }

    #[test]
    fn test_directory_path_is_fatal() {
        let dir = tempdir().unwrap();
        let result = Vocabulary::load(dir.path());
        assert_matches!(
            result,
            Err(VocabularyError::Load {
                source: FileProcessorError::InvalidPath { .. },
                ..
            })
        );
    }
}
