use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::completeness::CompletenessResult;
use super::metrics::{MetricValue, SupplierMetrics};
use super::{PreviewEngine, RiskLevel, ScorePreviewResult};

pub const DEFAULT_ROW_LIMIT: usize = 5_000;

const NAME_COLUMNS: [&str; 3] = ["name", "supplier_name", "supplier"];

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row {
        row: usize,
        source: serde_json::Error,
    },
    TooManyRows {
        limit: usize,
    },
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read supplier batch: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid supplier CSV data: {}", err),
            BatchImportError::Row { row, source } => {
                write!(
                    f,
                    "row {} could not be read as supplier metrics: {}",
                    row, source
                )
            }
            BatchImportError::TooManyRows { limit } => {
                write!(f, "supplier batch exceeds the limit of {} rows", limit)
            }
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::Row { source, .. } => Some(source),
            BatchImportError::TooManyRows { .. } => None,
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

/// One scored CSV row; `row` is 1-based and excludes the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPreviewRow {
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub preview: ScorePreviewResult,
    pub completeness: CompletenessResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub mean_overall: f64,
    pub below_completeness_threshold: usize,
    pub low_risk: usize,
    pub medium_risk: usize,
    pub high_risk: usize,
    pub critical_risk: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPreviewReport {
    pub rows: Vec<BatchPreviewRow>,
    pub summary: BatchSummary,
}

impl BatchPreviewReport {
    fn from_rows(rows: Vec<BatchPreviewRow>) -> Self {
        let mut summary = BatchSummary {
            rows: rows.len(),
            ..BatchSummary::default()
        };

        for row in &rows {
            if row.completeness.below_cap_threshold() {
                summary.below_completeness_threshold += 1;
            }
            match row.preview.risk_level {
                RiskLevel::Low => summary.low_risk += 1,
                RiskLevel::Medium => summary.medium_risk += 1,
                RiskLevel::High => summary.high_risk += 1,
                RiskLevel::Critical => summary.critical_risk += 1,
            }
        }

        if !rows.is_empty() {
            let total: f64 = rows.iter().map(|row| row.preview.overall).sum();
            summary.mean_overall = super::round2(total / rows.len() as f64);
        }

        Self { rows, summary }
    }
}

/// Scores every supplier in a CSV export whose headers are metric field names.
#[derive(Debug, Clone, Copy)]
pub struct BatchPreviewImporter {
    row_limit: usize,
    engine: PreviewEngine,
}

impl Default for BatchPreviewImporter {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_LIMIT)
    }
}

impl BatchPreviewImporter {
    pub fn new(row_limit: usize) -> Self {
        Self {
            row_limit,
            engine: PreviewEngine::new(),
        }
    }

    pub fn import_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<BatchPreviewReport, BatchImportError> {
        let file = std::fs::File::open(path)?;
        self.import_reader(file)
    }

    pub fn import_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<BatchPreviewReport, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();

        let mut rows = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = index + 1;
            if row > self.row_limit {
                return Err(BatchImportError::TooManyRows {
                    limit: self.row_limit,
                });
            }

            let (name, metrics) = read_row(&headers, &record)
                .map_err(|source| BatchImportError::Row { row, source })?;

            rows.push(BatchPreviewRow {
                row,
                name,
                preview: self.engine.score(&metrics),
                completeness: self.engine.completeness(&metrics),
            });
        }

        debug!(rows = rows.len(), "scored supplier batch");
        Ok(BatchPreviewReport::from_rows(rows))
    }
}

fn normalize_header(value: &str) -> String {
    value
        .replace(['\u{feff}', '\u{200b}'], "")
        .trim()
        .to_ascii_lowercase()
}

fn read_row(
    headers: &[String],
    record: &csv::StringRecord,
) -> Result<(Option<String>, SupplierMetrics), serde_json::Error> {
    let mut name = None;
    let mut fields = Map::new();

    for (header, cell) in headers.iter().zip(record.iter()) {
        if NAME_COLUMNS.contains(&header.as_str()) {
            if name.is_none() && !cell.is_empty() {
                name = Some(cell.to_string());
            }
            continue;
        }

        if let Some(value) = MetricValue::from_cell(cell) {
            let json = match value {
                MetricValue::Number(number) => serde_json::Number::from_f64(number)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                MetricValue::Flag(flag) => Value::Bool(flag),
                MetricValue::Text(text) => Value::String(text),
                MetricValue::Other(value) => value,
            };
            fields.insert(header.clone(), json);
        }
    }

    let metrics = serde_json::from_value(Value::Object(fields))?;
    Ok((name, metrics))
}
