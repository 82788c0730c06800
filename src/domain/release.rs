use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn version_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").ok())
        .as_ref()
}

/// Grouping key for reviews: a release identifier, or the marker for rows
/// that carried none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ReleaseId {
    Named(String),
    Unknown,
}

impl ReleaseId {
    /// Create a release id from a raw identifier (e.g. "43.6")
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_cell(Some(&name.into()))
    }

    /// Build a release id from a table cell; blank or absent cells map to
    /// [`ReleaseId::Unknown`]
    pub fn from_cell(cell: Option<&str>) -> Self {
        match cell.map(str::trim) {
            Some(name) if !name.is_empty() => ReleaseId::Named(name.to_string()),
            _ => ReleaseId::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ReleaseId::Unknown)
    }

    /// Branch label text (e.g. "43.6" -> "v43.6")
    pub fn label(&self) -> String {
        match self {
            ReleaseId::Named(name) if name.starts_with(['v', 'V']) => name.clone(),
            ReleaseId::Named(name) => format!("v{}", name),
            ReleaseId::Unknown => "(unknown release)".to_string(),
        }
    }

    /// Best-effort numeric version extracted from the identifier.
    ///
    /// Takes the first `major[.minor[.patch]]` run of digits, filling missing
    /// components with zero: "43.6" -> 43.6.0, "v44 (Jan 2024)" -> 44.0.0.
    pub fn numeric_version(&self) -> Option<semver::Version> {
        let ReleaseId::Named(name) = self else {
            return None;
        };

        let captures = version_pattern()?.captures(name)?;
        let component = |index: usize| -> Option<u64> {
            match captures.get(index) {
                Some(m) => m.as_str().parse::<u64>().ok(),
                None => Some(0),
            }
        };

        Some(semver::Version::new(component(1)?, component(2)?, component(3)?))
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseId::Named(name) => f.write_str(name),
            ReleaseId::Unknown => f.write_str("unknown"),
        }
    }
}

impl From<Option<String>> for ReleaseId {
    fn from(value: Option<String>) -> Self {
        ReleaseId::from_cell(value.as_deref())
    }
}

impl From<ReleaseId> for Option<String> {
    fn from(value: ReleaseId) -> Self {
        match value {
            ReleaseId::Named(name) => Some(name),
            ReleaseId::Unknown => None,
        }
    }
}

impl From<String> for ReleaseId {
    fn from(value: String) -> Self {
        ReleaseId::from_cell(Some(&value))
    }
}

impl From<&str> for ReleaseId {
    fn from(value: &str) -> Self {
        ReleaseId::from_cell(Some(value))
    }
}
