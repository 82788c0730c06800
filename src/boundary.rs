use std::fmt;

/// Warnings raised while reading the review table.
/// These are non-fatal: the row is still used with the offending cell coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestWarning {
    /// Review text cell is blank; the review is classified as empty text
    MissingContent { row: usize },
    /// Score cell is blank; only keywords can classify the review
    MissingScore { row: usize },
    /// Score cell is not a number; treated as missing
    MalformedScore { row: usize, raw: String },
    /// Release cell is blank; the review joins the unknown-release group
    MissingRelease { row: usize },
    /// A cell was not valid UTF-8; it was decoded lossily and the row kept
    InvalidUtf8 { row: usize, column: String },
    /// The row could not be parsed as CSV at all and was skipped
    UnreadableRow { row: usize, reason: String },
}

impl IngestWarning {
    /// 1-based line number in the input file (header is line 1)
    pub fn row(&self) -> usize {
        match self {
            IngestWarning::MissingContent { row }
            | IngestWarning::MissingScore { row }
            | IngestWarning::MalformedScore { row, .. }
            | IngestWarning::MissingRelease { row }
            | IngestWarning::InvalidUtf8 { row, .. }
            | IngestWarning::UnreadableRow { row, .. } => *row,
        }
    }
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestWarning::MissingContent { row } => {
                write!(f, "Row {}: review text is empty", row)
            }
            IngestWarning::MissingScore { row } => {
                write!(f, "Row {}: score is missing", row)
            }
            IngestWarning::MalformedScore { row, raw } => {
                let short_raw = if raw.chars().count() > 20 {
                    format!("{}...", raw.chars().take(20).collect::<String>())
                } else {
                    raw.clone()
                };
                write!(f, "Row {}: score '{}' is not a number", row, short_raw)
            }
            IngestWarning::MissingRelease { row } => {
                write!(
                    f,
                    "Row {}: release version is missing, grouped as unknown",
                    row
                )
            }
            IngestWarning::InvalidUtf8 { row, column } => {
                write!(
                    f,
                    "Row {}: {} not valid UTF-8, decoded lossily",
                    row, column
                )
            }
            IngestWarning::UnreadableRow { row, reason } => {
                write!(f, "Row {}: skipped unreadable row ({})", row, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_score_display_truncates() {
        let warning = IngestWarning::MalformedScore {
            row: 4,
            raw: "x".repeat(50),
        };
        let msg = warning.to_string();
        assert!(msg.starts_with("Row 4: score 'xxxxxxxxxxxxxxxxxxxx...'"));
    }

    #[test]
    fn test_row_accessor() {
        assert_eq!(IngestWarning::MissingRelease { row: 9 }.row(), 9);
        assert_eq!(
            IngestWarning::UnreadableRow {
                row: 2,
                reason: "bad".to_string()
            }
            .row(),
            2
        );
        assert_eq!(
            IngestWarning::InvalidUtf8 {
                row: 3,
                column: "content".to_string()
            }
            .row(),
            3
        );
    }
}
