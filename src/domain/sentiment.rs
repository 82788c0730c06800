use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment bucket assigned to a single review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels in leaf drawing order
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Leaf colour used for this label
    pub fn color(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "green",
            SentimentLabel::Neutral => "orange",
            SentimentLabel::Negative => "red",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-label review counts for one release
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn new(positive: usize, neutral: usize, negative: usize) -> Self {
        SentimentCounts {
            positive,
            neutral,
            negative,
        }
    }

    /// Count one more review with the given label
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Release-level flag for a branch dominated by praise or criticism.
///
/// A release is highlighted when one bucket strictly outweighs the other two
/// combined; both conditions can never hold at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Positive,
    Negative,
    #[default]
    None,
}

impl Highlight {
    pub fn from_counts(counts: &SentimentCounts) -> Self {
        if counts.positive > counts.neutral + counts.negative {
            Highlight::Positive
        } else if counts.negative > counts.positive + counts.neutral {
            Highlight::Negative
        } else {
            Highlight::None
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Highlight::Positive => write!(f, "blossom"),
            Highlight::Negative => write!(f, "wilt"),
            Highlight::None => write!(f, "-"),
        }
    }
}
