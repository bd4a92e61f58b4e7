//! Lexical analysis: source text to word tokens
//!
//! No language-specific rules apply. Comments, strings and operators are
//! not recognized; their words are tokens like any other.

mod position;
mod tokenizer;

pub use position::Position;
pub use tokenizer::{is_word_char, Token, Tokens};

/// Tokenize source text lazily
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}
