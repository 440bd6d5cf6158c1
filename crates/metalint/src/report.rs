//! Inspection results and their export.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::config::Level;
use crate::error::Result;
use crate::finding::{Finding, FindingKind, Language, Severity};

/// Separator between messages in a CSV cell.
const CELL_SEPARATOR: &str = "; ";

/// Result of one field of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldResult {
    /// The field is disabled for the record's level.
    NotInspected,
    /// Inspected without findings.
    Clean,
    /// Inspected with at least one finding.
    Findings(Vec<Finding>),
}

impl FieldResult {
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        if findings.is_empty() {
            FieldResult::Clean
        } else {
            FieldResult::Findings(findings)
        }
    }

    pub fn is_inspected(&self) -> bool {
        !matches!(self, FieldResult::NotInspected)
    }

    pub fn findings(&self) -> &[Finding] {
        match self {
            FieldResult::Findings(findings) => findings,
            _ => &[],
        }
    }

    fn localized(&self, lang: Language) -> Value {
        match self {
            FieldResult::NotInspected => Value::Null,
            _ => self
                .findings()
                .iter()
                .map(|f| Value::String(f.message(lang)))
                .collect(),
        }
    }

    fn cell(&self, lang: Language) -> String {
        match self {
            FieldResult::NotInspected => lang.not_inspected().to_string(),
            _ => self
                .findings()
                .iter()
                .map(|f| f.message(lang))
                .collect::<Vec<_>>()
                .join(CELL_SEPARATOR),
        }
    }
}

/// `null` when not inspected, otherwise the (possibly empty) finding list.
impl Serialize for FieldResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if !self.is_inspected() {
            return serializer.serialize_none();
        }
        let findings = self.findings();
        let mut seq = serializer.serialize_seq(Some(findings.len()))?;
        for finding in findings {
            seq.serialize_element(finding)?;
        }
        seq.end()
    }
}

/// Results of one record, fields in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordReport {
    pub level: Level,
    pub identifiers: IndexMap<String, Option<String>>,
    pub fields: IndexMap<String, FieldResult>,
}

impl RecordReport {
    pub fn finding_count(&self) -> usize {
        self.fields.values().map(|r| r.findings().len()).sum()
    }

    pub fn has_findings(&self) -> bool {
        self.finding_count() > 0
    }

    /// First non-empty identifier, for display.
    pub fn label(&self) -> Option<&str> {
        self.identifiers.values().flatten().map(String::as_str).next()
    }
}

/// Rendered identifier: its value, or the missing-information message.
fn identifier_cell(id: Option<&str>, lang: Language) -> String {
    id.map_or_else(|| Finding::MissingInfo.message(lang), str::to_string)
}

/// Fingerprint of the inspected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    pub path: PathBuf,
    /// SHA-256 hash of the input bytes.
    pub hash: String,
    pub size_bytes: u64,
}

impl SourceMetadata {
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8]) -> Self {
        Self::from_parts(path, [bytes])
    }

    /// Fingerprint of several inputs read as one batch, hashed in order.
    pub fn from_parts<'b, I>(path: impl Into<PathBuf>, parts: I) -> Self
    where
        I: IntoIterator<Item = &'b [u8]>,
    {
        let path = path.into();
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut hasher = Sha256::new();
        let mut size_bytes = 0;
        for part in parts {
            hasher.update(part);
            size_bytes += part.len() as u64;
        }
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            file,
            path,
            hash,
            size_bytes,
        }
    }
}

/// Finding counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FindingCounts {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
}

impl FindingCounts {
    fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Info => self.info += 1,
            Severity::Warning => self.warning += 1,
            Severity::Error => self.error += 1,
        }
    }
}

/// Totals over all records of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionSummary {
    pub total_records: usize,
    pub records_with_findings: usize,
    pub total_findings: usize,
    pub fields_inspected: usize,
    pub fields_not_inspected: usize,
    pub findings_by_severity: FindingCounts,
    pub findings_by_kind: IndexMap<FindingKind, usize>,
    /// Share of inspected fields without findings (1.0 if none inspected).
    pub quality_score: f64,
}

impl InspectionSummary {
    pub fn from_records(records: &[RecordReport]) -> Self {
        let mut summary = Self {
            total_records: records.len(),
            records_with_findings: 0,
            total_findings: 0,
            fields_inspected: 0,
            fields_not_inspected: 0,
            findings_by_severity: FindingCounts::default(),
            findings_by_kind: IndexMap::new(),
            quality_score: 1.0,
        };

        let mut clean = 0;
        for record in records {
            if record.has_findings() {
                summary.records_with_findings += 1;
            }
            for result in record.fields.values() {
                match result {
                    FieldResult::NotInspected => summary.fields_not_inspected += 1,
                    FieldResult::Clean => clean += 1,
                    FieldResult::Findings(_) => {}
                }
                for finding in result.findings() {
                    summary.total_findings += 1;
                    summary.findings_by_severity.add(finding.severity());
                    *summary.findings_by_kind.entry(finding.kind()).or_insert(0) += 1;
                }
            }
        }

        summary.fields_inspected = records
            .iter()
            .flat_map(|r| r.fields.values())
            .filter(|r| r.is_inspected())
            .count();
        if summary.fields_inspected > 0 {
            summary.quality_score = clean as f64 / summary.fields_inspected as f64;
        }
        summary.findings_by_kind.sort_keys();
        summary
    }
}

/// Results of one inspection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionReport {
    pub standard: String,
    pub inspected_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    pub records: Vec<RecordReport>,
    pub summary: InspectionSummary,
    #[serde(skip)]
    columns: Vec<String>,
}

impl InspectionReport {
    pub(crate) fn new(
        standard: &str,
        inspected_on: NaiveDate,
        columns: Vec<String>,
        records: Vec<RecordReport>,
    ) -> Self {
        let summary = InspectionSummary::from_records(&records);
        Self {
            standard: standard.to_string(),
            inspected_on,
            source: None,
            records,
            summary,
            columns,
        }
    }

    /// Attach the fingerprint of the inspected input.
    pub fn with_source(mut self, source: SourceMetadata) -> Self {
        self.source = Some(source);
        self
    }

    /// Identifier and field columns, in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Full report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One flat object per record with rendered messages.
    pub fn to_localized_json(&self, lang: Language) -> Result<String> {
        let rows: Vec<Value> = self
            .records
            .iter()
            .map(|record| {
                let mut row = Map::new();
                for (column, id) in &record.identifiers {
                    let id = identifier_cell(id.as_deref(), lang);
                    row.insert(column.clone(), Value::String(id));
                }
                for (column, result) in &record.fields {
                    row.insert(column.clone(), result.localized(lang));
                }
                Value::Object(row)
            })
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    /// One CSV row per record: identifiers, then one cell per field.
    pub fn write_csv<W: Write>(&self, writer: W, lang: Language, delimiter: u8) -> Result<()> {
        let mut csv = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        csv.write_record(&self.columns)?;
        for record in &self.records {
            let ids = record
                .identifiers
                .values()
                .map(|id| identifier_cell(id.as_deref(), lang));
            let cells = record.fields.values().map(|result| result.cell(lang));
            csv.write_record(ids.chain(cells))?;
        }
        csv.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
