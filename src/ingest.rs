//! Review table ingestion
//!
//! Reads CSV rows into [`ReviewRecord`]s. Only a missing column is fatal;
//! problems inside a row are coerced and reported as [`IngestWarning`]s.
//! Cells are read as bytes so a non-UTF-8 export still yields every review.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::boundary::IngestWarning;
use crate::config::InputConfig;
use crate::domain::{ReleaseId, ReviewRecord};
use crate::error::{ReleaseTreeError, Result};

/// Bundled review table used by `--demo`
pub const SAMPLE_REVIEWS: &str = include_str!("../data/sample_reviews.csv");

/// Records read from a table plus the coercions applied on the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingested {
    pub records: Vec<ReviewRecord>,
    pub warnings: Vec<IngestWarning>,
}

/// Positions of the required columns in the header row
struct Columns {
    content: usize,
    score: usize,
    release: usize,
}

impl Columns {
    fn locate(headers: &StringRecord, config: &InputConfig) -> Result<Self> {
        Ok(Columns {
            content: column_index(headers, &config.content_column)?,
            score: column_index(headers, &config.score_column)?,
            release: column_index(headers, &config.release_column)?,
        })
    }
}

/// Find a header by exact name, falling back to a case-insensitive match
fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    let wanted = name.trim();
    headers
        .iter()
        .position(|h| h == wanted)
        .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(wanted)))
        .ok_or_else(|| {
            ReleaseTreeError::ingest(format!(
                "missing column '{}' (found: {})",
                wanted,
                headers.iter().collect::<Vec<_>>().join(", ")
            ))
        })
}

fn cell<'r>(record: &'r ByteRecord, index: usize) -> Option<&'r [u8]> {
    record.get(index).filter(|value| !value.is_empty())
}

/// Decode a cell as text, replacing invalid UTF-8 sequences
fn text_cell(
    record: &ByteRecord,
    index: usize,
    column: &str,
    row: usize,
    warnings: &mut Vec<IngestWarning>,
) -> Option<String> {
    let bytes = cell(record, index)?;
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text.to_string()),
        Err(_) => {
            push_warning(
                warnings,
                IngestWarning::InvalidUtf8 {
                    row,
                    column: column.to_string(),
                },
            );
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Load reviews from a CSV file
pub fn load_reviews<P: AsRef<Path>>(path: P, config: &InputConfig) -> Result<Ingested> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ReleaseTreeError::ingest(format!("cannot open '{}': {}", path.display(), e))
    })?;
    read_reviews(file, config)
}

/// Load the bundled sample table
pub fn sample_reviews(config: &InputConfig) -> Result<Ingested> {
    read_reviews(SAMPLE_REVIEWS.as_bytes(), config)
}

/// Read reviews from any CSV source with a header row
pub fn read_reviews<R: Read>(reader: R, config: &InputConfig) -> Result<Ingested> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: StringRecord = reader
        .byte_headers()?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();
    let columns = Columns::locate(&headers, config)?;

    let mut ingested = Ingested::default();

    for (index, result) in reader.byte_records().enumerate() {
        let fallback_row = index + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let row = e
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_row);
                push_warning(
                    &mut ingested.warnings,
                    IngestWarning::UnreadableRow {
                        row,
                        reason: e.to_string(),
                    },
                );
                continue;
            }
        };
        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(fallback_row);

        let warnings = &mut ingested.warnings;
        let content = text_cell(
            &record,
            columns.content,
            &config.content_column,
            row,
            warnings,
        );
        if content.is_none() {
            push_warning(warnings, IngestWarning::MissingContent { row });
        }

        let score = match cell(&record, columns.score) {
            None => {
                push_warning(warnings, IngestWarning::MissingScore { row });
                None
            }
            Some(raw) => match std::str::from_utf8(raw).ok().map(str::parse::<f64>) {
                Some(Ok(score)) if score.is_finite() => Some(score),
                _ => {
                    push_warning(
                        warnings,
                        IngestWarning::MalformedScore {
                            row,
                            raw: String::from_utf8_lossy(raw).into_owned(),
                        },
                    );
                    None
                }
            },
        };

        let release_text = text_cell(
            &record,
            columns.release,
            &config.release_column,
            row,
            warnings,
        );
        let release = ReleaseId::from_cell(release_text.as_deref());
        if release.is_unknown() {
            push_warning(warnings, IngestWarning::MissingRelease { row });
        }

        ingested.records.push(ReviewRecord {
            content,
            score,
            release,
        });
    }

    debug!(
        records = ingested.records.len(),
        warnings = ingested.warnings.len(),
        "read review table"
    );
    Ok(ingested)
}

fn push_warning(warnings: &mut Vec<IngestWarning>, warning: IngestWarning) {
    warn!(row = warning.row(), "{}", warning);
    warnings.push(warning);
}
