use serde::{Deserialize, Serialize};

use crate::domain::SentimentLabel;

/// Numeric condition on a review score.
///
/// Serialized as a single-key table, e.g. `score = { at_least = 4 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePredicate {
    AtLeast(f64),
    AtMost(f64),
}

impl ScorePredicate {
    /// A missing or NaN score never matches.
    pub fn matches(&self, score: Option<f64>) -> bool {
        match (self, score) {
            (ScorePredicate::AtLeast(threshold), Some(score)) => score >= *threshold,
            (ScorePredicate::AtMost(threshold), Some(score)) => score <= *threshold,
            (_, None) => false,
        }
    }

    pub fn threshold(&self) -> f64 {
        match self {
            ScorePredicate::AtLeast(threshold) | ScorePredicate::AtMost(threshold) => *threshold,
        }
    }
}

/// One classification rule: a review gets `label` when its text contains any
/// keyword, or when its score satisfies the predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRule {
    pub label: SentimentLabel,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub score: Option<ScorePredicate>,
}

/// A rule prepared for matching (keywords lower-cased once)
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    label: SentimentLabel,
    keywords: Vec<String>,
    score: Option<ScorePredicate>,
}

impl CompiledRule {
    pub(crate) fn compile(rule: &SentimentRule) -> Self {
        CompiledRule {
            label: rule.label,
            keywords: rule
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            score: rule.score,
        }
    }

    /// `text` must already be lower-cased
    pub(crate) fn matches(&self, text: &str, score: Option<f64>) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
            || self.score.is_some_and(|predicate| predicate.matches(score))
    }

    pub(crate) fn label(&self) -> SentimentLabel {
        self.label
    }
}
