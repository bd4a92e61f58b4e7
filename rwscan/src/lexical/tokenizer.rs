//! Word tokenizer
//!
//! A token is a maximal run of letters, digits and underscores. Whitespace and
//! every other character only separate tokens, so `foo();bar` yields `foo`
//! and `bar`, and no empty token is ever produced.

use super::position::Position;
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

/// Letters and digits in any script, plus underscore
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// A word borrowed from the scanned source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Where the first character of the token sits
    pub position: Position,
}

/// Lazy token stream over a source string, in file order
pub struct Tokens<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
    position: Position,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            position: Position::start(),
        }
    }

    /// Position of the next unread character
    pub fn position(&self) -> Position {
        self.position
    }

    fn bump(&mut self) {
        if let Some(ch) = self.chars.next() {
            self.position = self.position.advance(ch);
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !is_word_char(*self.chars.peek()?) {
            self.bump();
        }

        let start = self.position;
        while self.chars.peek().is_some_and(|&ch| is_word_char(ch)) {
            self.bump();
        }

        Some(Token {
            text: &self.source[start.offset..self.position.offset],
            position: start,
        })
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        Tokens::new(source).map(|token| token.text).collect()
    }

    #[test]
    fn test_strips_punctuation_and_comments() {
        assert_eq!(texts("int x = 5; //comment"), vec!["int", "x", "5", "comment"]);
    }

    #[test]
    fn test_punctuation_inside_a_word_splits_it() {
        assert_eq!(texts("foo();bar"), vec!["foo", "bar"]);
        assert_eq!(texts("System.out.println(s);"), vec!["System", "out", "println", "s"]);
    }

    #[test]
    fn test_underscores_and_digits_are_word_characters() {
        assert_eq!(texts("MAX_SIZE2 = _tmp"), vec!["MAX_SIZE2", "_tmp"]);
    }

    #[test]
    fn test_no_empty_tokens() {
        assert!(texts("").is_empty());
        assert!(texts("  \t\n ;;{} // ").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_stay_in_words() {
        assert_eq!(texts("naïve = café;"), vec!["naïve", "café"]);
    }

    #[test]
    fn test_numeric_symbols_are_word_characters() {
        assert_eq!(texts("x\u{00B2} = \u{216B};"), vec!["x\u{00B2}", "\u{216B}"]);
        assert!(is_word_char('\u{00B2}'));
        assert!(!is_word_char('+'));
    }

    #[test]
    fn test_positions_are_one_based() {
        let tokens: Vec<Token> = Tokens::new("class A {\n  int b;\n}").collect();

        assert_eq!(tokens[0].position, Position::new(0, 1, 1));
        assert_eq!(tokens[1].text, "A");
        assert_eq!(tokens[1].position.column, 7);
        assert_eq!(tokens[2].text, "int");
        assert_eq!(tokens[2].position.line, 2);
        assert_eq!(tokens[2].position.column, 3);
        assert_eq!(tokens[3].position.to_string(), "2:7");
    }

    #[test]
    fn test_stream_is_fused() {
        let mut tokens = Tokens::new("one");
        assert_eq!(tokens.next().map(|t| t.text), Some("one"));
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }
}
