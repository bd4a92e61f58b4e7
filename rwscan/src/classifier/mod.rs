//! Token classification into reserved words and user-defined identifiers
//!
//! Each token is tested against the vocabulary and inserted into one of two
//! [`BalancedOrderedSet`]s. When the sets are rebalanced is governed by the
//! [`RebalanceStrategy`]; every strategy yields the same sorted contents.

use crate::config::ConfigError;
use crate::lexical::Token;
use crate::log_debug;
use crate::tree::BalancedOrderedSet;
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When the two sets are rebuilt into balanced shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RebalanceStrategy {
    /// After every token, rebalance both sets
    #[default]
    EagerBoth,
    /// After every token, rebalance only the set that received it
    EagerTouched,
    /// Rebalance both sets once, when the scan finishes
    Deferred,
}

impl RebalanceStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RebalanceStrategy::EagerBoth => "eager-both",
            RebalanceStrategy::EagerTouched => "eager-touched",
            RebalanceStrategy::Deferred => "deferred",
        }
    }
}

impl fmt::Display for RebalanceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RebalanceStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eager-both" | "eager" => Ok(RebalanceStrategy::EagerBoth),
            "eager-touched" => Ok(RebalanceStrategy::EagerTouched),
            "deferred" => Ok(RebalanceStrategy::Deferred),
            _ => Err(ConfigError::invalid_value(
                "rebalance_strategy",
                s,
                "expected eager-both, eager-touched or deferred",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Reserved,
    Identifier,
}

/// Counters accumulated across every scanned source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationMetrics {
    pub tokens_seen: usize,
    pub reserved_tokens: usize,
    pub identifier_tokens: usize,
    pub distinct_reserved: usize,
    pub distinct_identifiers: usize,
    pub reserved_rebuilds: usize,
    pub identifier_rebuilds: usize,
}

/// Routes tokens into the reserved word and identifier sets
pub struct Classifier {
    vocabulary: Vocabulary,
    reserved_words: BalancedOrderedSet<String>,
    identifiers: BalancedOrderedSet<String>,
    strategy: RebalanceStrategy,
    tokens_seen: usize,
    reserved_tokens: usize,
    identifier_tokens: usize,
}

impl Classifier {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_strategy(vocabulary, RebalanceStrategy::default())
    }

    pub fn with_strategy(vocabulary: Vocabulary, strategy: RebalanceStrategy) -> Self {
        Self {
            vocabulary,
            reserved_words: BalancedOrderedSet::new(),
            identifiers: BalancedOrderedSet::new(),
            strategy,
            tokens_seen: 0,
            reserved_tokens: 0,
            identifier_tokens: 0,
        }
    }

    pub fn strategy(&self) -> RebalanceStrategy {
        self.strategy
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Class a word would receive, without recording it
    pub fn class_of(&self, word: &str) -> WordClass {
        if self.vocabulary.contains(word) {
            WordClass::Reserved
        } else {
            WordClass::Identifier
        }
    }

    /// Record one word and apply the per-token rebalancing policy
    pub fn classify(&mut self, word: &str) -> WordClass {
        let class = self.class_of(word);
        self.tokens_seen += 1;

        let target = match class {
            WordClass::Reserved => {
                self.reserved_tokens += 1;
                &mut self.reserved_words
            }
            WordClass::Identifier => {
                self.identifier_tokens += 1;
                &mut self.identifiers
            }
        };

        // Repeated words are the common case; skip the allocation for them.
        if !target.contains(word) {
            target.insert(word.to_string());
        }

        match self.strategy {
            RebalanceStrategy::EagerBoth => {
                self.reserved_words.rebalance();
                self.identifiers.rebalance();
            }
            RebalanceStrategy::EagerTouched => {
                target.rebalance();
            }
            RebalanceStrategy::Deferred => {}
        }

        class
    }

    pub fn classify_token(&mut self, token: &Token<'_>) -> WordClass {
        let class = self.classify(token.text);
        log_debug!("Token classified",
            "token" => token.text,
            "position" => token.position,
            "class" => format!("{:?}", class));
        class
    }

    /// Classify every token of a stream, returning how many were consumed
    pub fn classify_all<'a, I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        let mut count = 0;
        for token in tokens {
            self.classify_token(&token);
            count += 1;
        }
        count
    }

    /// Bring both sets into balanced shape; required before reporting under `Deferred`
    pub fn finish(&mut self) {
        self.reserved_words.rebalance();
        self.identifiers.rebalance();
    }

    pub fn reserved_words(&self) -> &BalancedOrderedSet<String> {
        &self.reserved_words
    }

    pub fn identifiers(&self) -> &BalancedOrderedSet<String> {
        &self.identifiers
    }

    pub fn metrics(&self) -> ClassificationMetrics {
        ClassificationMetrics {
            tokens_seen: self.tokens_seen,
            reserved_tokens: self.reserved_tokens,
            identifier_tokens: self.identifier_tokens,
            distinct_reserved: self.reserved_words.len(),
            distinct_identifiers: self.identifiers.len(),
            reserved_rebuilds: self.reserved_words.rebuild_count(),
            identifier_rebuilds: self.identifiers.rebuild_count(),
        }
    }

    /// Hand over both sets: (reserved words, identifiers)
    pub fn into_sets(self) -> (BalancedOrderedSet<String>, BalancedOrderedSet<String>) {
        (self.reserved_words, self.identifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tokenize;

    fn java_vocabulary() -> Vocabulary {
        ["int", "return", "if"].into_iter().collect()
    }

    fn contents(set: &BalancedOrderedSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_classifies_into_two_sets() {
        let mut classifier = Classifier::new(java_vocabulary());
        classifier.classify_all(tokenize("int x = 5 return x"));

        assert_eq!(contents(classifier.reserved_words()), vec!["int", "return"]);
        assert_eq!(contents(classifier.identifiers()), vec!["5", "x"]);
    }

    #[test]
    fn test_empty_vocabulary_makes_everything_an_identifier() {
        let mut classifier = Classifier::new(Vocabulary::empty());
        classifier.classify_all(tokenize("int main return"));

        assert!(classifier.reserved_words().is_empty());
        assert_eq!(contents(classifier.identifiers()), vec!["int", "main", "return"]);
    }

    #[test]
    fn test_metrics_count_tokens_and_distinct_values() {
        let mut classifier = Classifier::new(java_vocabulary());
        let consumed = classifier.classify_all(tokenize("if a if b a"));

        let metrics = classifier.metrics();
        assert_eq!(consumed, 5);
        assert_eq!(metrics.tokens_seen, 5);
        assert_eq!(metrics.reserved_tokens, 2);
        assert_eq!(metrics.identifier_tokens, 3);
        assert_eq!(metrics.distinct_reserved, 1);
        assert_eq!(metrics.distinct_identifiers, 2);
    }

    #[test]
    fn test_eager_both_keeps_sets_balanced() {
        let mut classifier = Classifier::new(Vocabulary::empty());
        for word in ["a", "b", "c", "d", "e", "f", "g"] {
            classifier.classify(word);
            assert!(classifier.identifiers().is_balanced());
        }
        assert!(classifier.metrics().identifier_rebuilds > 0);
    }

    #[test]
    fn test_deferred_rebalances_on_finish() {
        let mut classifier =
            Classifier::with_strategy(Vocabulary::empty(), RebalanceStrategy::Deferred);
        classifier.classify_all(tokenize("a b c d e"));
        assert!(!classifier.identifiers().is_balanced());

        classifier.finish();
        assert!(classifier.identifiers().is_balanced());
        assert_eq!(classifier.metrics().identifier_rebuilds, 1);
    }

    #[test]
    fn test_all_strategies_agree() {
        let source = "public static int max(int a, int b) { if (a > b) return a; return b; }";
        let vocabulary: Vocabulary = ["public", "static", "int", "if", "return"]
            .into_iter()
            .collect();

        let results: Vec<(Vec<String>, Vec<String>)> = [
            RebalanceStrategy::EagerBoth,
            RebalanceStrategy::EagerTouched,
            RebalanceStrategy::Deferred,
        ]
        .into_iter()
        .map(|strategy| {
            let mut classifier = Classifier::with_strategy(vocabulary.clone(), strategy);
            classifier.classify_all(tokenize(source));
            classifier.finish();
            let (reserved, identifiers) = classifier.into_sets();
            (reserved.into_sorted_vec(), identifiers.into_sorted_vec())
        })
        .collect();

        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
        assert_eq!(results[0].1, vec!["a", "b", "max"]);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "eager-touched".parse::<RebalanceStrategy>().unwrap(),
            RebalanceStrategy::EagerTouched
        );
        assert_eq!(RebalanceStrategy::default().to_string(), "eager-both");
        assert!("lazy".parse::<RebalanceStrategy>().is_err());
    }
}
