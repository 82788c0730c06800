use super::release::ReleaseId;

/// One user review as read from the input table.
///
/// Cells that were blank or malformed are `None`; the classifier treats a
/// missing content as empty text and a missing score as matching no threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub content: Option<String>,
    pub score: Option<f64>,
    pub release: ReleaseId,
}

impl ReviewRecord {
    /// Create a fully populated review
    pub fn new(content: impl Into<String>, score: f64, release: impl Into<ReleaseId>) -> Self {
        ReviewRecord {
            content: Some(content.into()),
            score: Some(score),
            release: release.into(),
        }
    }

    /// Review text, with a missing value read as empty
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}
