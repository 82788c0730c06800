//! Rule-based sentiment classification of single reviews

pub mod rules;

pub use rules::{ScorePredicate, SentimentRule};

use std::sync::OnceLock;

use crate::config::ClassifierConfig;
use crate::domain::{ReviewRecord, SentimentLabel};
use rules::CompiledRule;

/// Assigns exactly one sentiment label to a review
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    rules: Vec<CompiledRule>,
    fallback: SentimentLabel,
}

impl SentimentClassifier {
    /// Create a classifier from a rule configuration
    pub fn new(config: &ClassifierConfig) -> Self {
        SentimentClassifier {
            rules: config.rules.iter().map(CompiledRule::compile).collect(),
            fallback: config.fallback,
        }
    }

    /// Classify review text and score.
    ///
    /// Rules are tried in configured order and the first match wins, so with
    /// the default rules a text holding both positive and negative keywords is
    /// positive.
    pub fn classify(&self, content: &str, score: Option<f64>) -> SentimentLabel {
        let text = content.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&text, score))
            .map(|rule| rule.label())
            .unwrap_or(self.fallback)
    }

    pub fn classify_record(&self, record: &ReviewRecord) -> SentimentLabel {
        self.classify(record.text(), record.score)
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        SentimentClassifier::new(&ClassifierConfig::default())
    }
}

/// Classify with the default rule set
pub fn classify(content: &str, score: Option<f64>) -> SentimentLabel {
    static DEFAULT: OnceLock<SentimentClassifier> = OnceLock::new();
    DEFAULT
        .get_or_init(SentimentClassifier::default)
        .classify(content, score)
}
