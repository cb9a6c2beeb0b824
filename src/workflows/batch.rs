//! CSV triage of many onboarding narratives with one engine.

use crate::workflows::onboarding::{EvaluationResult, RiskEngine};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const NARRATIVE_COLUMN: &str = "narrative";

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
    NarrativeTooLong {
        case_id: String,
        max: usize,
        found: usize,
    },
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read case file: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid case CSV data: {}", err),
            BatchImportError::MissingColumn(column) => {
                write!(f, "case CSV is missing the '{}' column", column)
            }
            BatchImportError::NarrativeTooLong {
                case_id,
                max,
                found,
            } => write!(
                f,
                "case '{}' narrative exceeds {} characters (found {})",
                case_id, max, found
            ),
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::MissingColumn(_)
            | BatchImportError::NarrativeTooLong { .. } => None,
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One evaluated row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriagedCase {
    pub case_id: String,
    pub result: EvaluationResult,
}

/// Outcome of a batch run, rows kept in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub risk_found: usize,
    pub cases: Vec<TriagedCase>,
}

impl BatchSummary {
    pub fn no_risk(&self) -> usize {
        self.total - self.risk_found
    }

    pub fn flagged(&self) -> impl Iterator<Item = &TriagedCase> {
        self.cases.iter().filter(|case| case.result.is_risk())
    }
}

pub struct BatchTriage;

impl BatchTriage {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        engine: &RiskEngine,
    ) -> Result<BatchSummary, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, engine)
    }

    /// Reads `case_id,narrative` rows. `case_id` may be blank or absent, in which case the
    /// 1-based row number is used.
    pub fn from_reader<R: Read>(
        reader: R,
        engine: &RiskEngine,
    ) -> Result<BatchSummary, BatchImportError> {
        Self::triage(reader, engine, None)
    }

    /// Like [`BatchTriage::from_reader`], but the whole batch is rejected as soon as one
    /// narrative is longer than `max_narrative_chars` characters.
    pub fn from_reader_with_limit<R: Read>(
        reader: R,
        engine: &RiskEngine,
        max_narrative_chars: usize,
    ) -> Result<BatchSummary, BatchImportError> {
        Self::triage(reader, engine, Some(max_narrative_chars))
    }

    fn triage<R: Read>(
        reader: R,
        engine: &RiskEngine,
        max_narrative_chars: Option<usize>,
    ) -> Result<BatchSummary, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        if !csv_reader
            .headers()?
            .iter()
            .any(|header| header == NARRATIVE_COLUMN)
        {
            return Err(BatchImportError::MissingColumn(NARRATIVE_COLUMN));
        }

        let mut cases = Vec::new();
        for (index, record) in csv_reader.deserialize::<CaseRow>().enumerate() {
            let row = record?;
            let case_id = row.case_id.unwrap_or_else(|| (index + 1).to_string());
            if let Some(max) = max_narrative_chars {
                let found = row.narrative.chars().count();
                if found > max {
                    warn!(%case_id, found, "batch narrative rejected for length");
                    return Err(BatchImportError::NarrativeTooLong {
                        case_id,
                        max,
                        found,
                    });
                }
            }
            let result = engine.evaluate(&row.narrative);
            cases.push(TriagedCase { case_id, result });
        }

        let risk_found = cases.iter().filter(|case| case.result.is_risk()).count();
        info!(total = cases.len(), risk_found, "batch triage complete");

        Ok(BatchSummary {
            total: cases.len(),
            risk_found,
            cases,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CaseRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    case_id: Option<String>,
    #[serde(default)]
    narrative: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
