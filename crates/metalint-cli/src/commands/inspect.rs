//! Inspect command - check every record of a metadata document.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use colored::Colorize;
use metalint::record::{Element, JsonElement, XmlElement, parse_document};
use metalint::standards::FieldCatalog;
use metalint::{
    ConfigStore, Ead, FieldResult, InspectionReport, Inspector, Language, Level, Lido,
    MetalintError, Severity, SourceMetadata, StandardKind,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::OutputFormat;

pub struct InspectArgs {
    pub file: PathBuf,
    pub standard: StandardKind,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub lang: Language,
    pub flat: bool,
    pub output: Option<PathBuf>,
    pub today: Option<NaiveDate>,
    pub delimiter: char,
}

pub fn run(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }
    if !args.delimiter.is_ascii() {
        return Err(format!(
            "Delimiter must be a single ASCII character: {}",
            args.delimiter
        )
        .into());
    }

    let inputs = read_inputs(&args.file)?;
    let config = super::load_config(args.standard, args.config.as_deref())?;

    let report = match InputFormat::detect(&inputs) {
        InputFormat::Xml => {
            let texts = inputs
                .iter()
                .map(|input| {
                    std::str::from_utf8(&input.bytes)
                        .map_err(|e| format!("{}: not valid UTF-8: {}", input.path.display(), e))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let documents = texts
                .iter()
                .zip(&inputs)
                .map(|(text, input)| {
                    parse_document(text)
                        .map_err(|e| format!("{}: {}", input.path.display(), e))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let roots: Vec<XmlElement> = documents.iter().map(XmlElement::document).collect();
            inspect_documents(args.standard, config, args.today, &roots)
        }
        InputFormat::Json => {
            let documents = inputs
                .iter()
                .map(|input| serde_json::from_slice::<Value>(&input.bytes))
                .collect::<Result<Vec<_>, _>>()?;
            let roots: Vec<JsonElement> = documents.iter().map(JsonElement::document).collect();
            inspect_documents(args.standard, config, args.today, &roots)
        }
    }
    .with_source(SourceMetadata::from_parts(
        &args.file,
        inputs.iter().map(|input| input.bytes.as_slice()),
    ));

    info!(
        standard = %args.standard,
        files = inputs.len(),
        records = report.summary.total_records,
        findings = report.summary.total_findings,
        "inspected {}",
        args.file.display()
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            colored::control::set_override(false);
            let file = File::create(path).map_err(|source| MetalintError::Io {
                path: path.clone(),
                source,
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => out.write_all(render_table(&report, args.lang).as_bytes())?,
        OutputFormat::Json if args.flat => {
            writeln!(out, "{}", report.to_localized_json(args.lang)?)?
        }
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
        OutputFormat::Csv => report.write_csv(&mut out, args.lang, args.delimiter as u8)?,
    }
    out.flush()?;

    if let Some(path) = &args.output {
        eprintln!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

/// A document read from disk.
struct Input {
    path: PathBuf,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Xml,
    Json,
}

impl InputFormat {
    /// Format by file extension, otherwise by the first non-blank byte.
    fn of(input: &Input) -> Self {
        let extension = input
            .path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        match extension.as_deref() {
            Some("xml") => InputFormat::Xml,
            Some("json") => InputFormat::Json,
            _ => match input.bytes.iter().find(|b| !b.is_ascii_whitespace()) {
                Some(b'<') => InputFormat::Xml,
                _ => InputFormat::Json,
            },
        }
    }

    fn detect(inputs: &[Input]) -> Self {
        inputs.first().map_or(InputFormat::Xml, InputFormat::of)
    }
}

/// The file itself, or every `.xml` file of a directory in name order.
fn read_inputs(path: &Path) -> Result<Vec<Input>, Box<dyn std::error::Error>> {
    if !path.is_dir() {
        let bytes = super::read_file(path)?;
        return Ok(vec![Input {
            path: path.to_path_buf(),
            bytes,
        }]);
    }

    let entries = fs::read_dir(path).map_err(|source| MetalintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| MetalintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = entry.path();
        let is_xml = file
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if is_xml && file.is_file() {
            files.push(file);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(format!("No .xml files in {}", path.display()).into());
    }
    debug!(directory = %path.display(), files = files.len(), "reading batch");

    let mut inputs = Vec::with_capacity(files.len());
    for file in files {
        let bytes = super::read_file(&file)?;
        inputs.push(Input { path: file, bytes });
    }
    Ok(inputs)
}

fn inspect_documents<E: Element>(
    standard: StandardKind,
    config: ConfigStore,
    today: Option<NaiveDate>,
    documents: &[E],
) -> InspectionReport {
    match standard {
        StandardKind::Ead => inspect_with(Ead, config, today, documents),
        StandardKind::Lido => inspect_with(Lido, config, today, documents),
    }
}

fn inspect_with<S, E>(
    standard: S,
    config: ConfigStore,
    today: Option<NaiveDate>,
    documents: &[E],
) -> InspectionReport
where
    E: Element,
    S: FieldCatalog<E>,
{
    let mut inspector = Inspector::new(standard).with_config(config);
    if let Some(today) = today {
        inspector = inspector.with_today(today);
    }
    inspector.inspect_all(documents)
}

/// Human-readable listing: one block per record with findings, then the summary.
fn render_table(report: &InspectionReport, lang: Language) -> String {
    let mut text = String::new();
    let source = report
        .source
        .as_ref()
        .map(|s| s.file.clone())
        .unwrap_or_default();

    let _ = writeln!(
        text,
        "{} {} {} records in {} ({})",
        "Inspected".cyan().bold(),
        report.summary.total_records.to_string().white().bold(),
        report.standard.to_uppercase(),
        source.white(),
        report.inspected_on
    );
    let _ = writeln!(text);

    let width = report.columns().iter().map(String::len).max().unwrap_or(0);
    for (index, record) in report.records.iter().enumerate() {
        let label = record
            .label()
            .map(str::to_string)
            .unwrap_or_else(|| format!("record {}", index + 1));

        if !record.has_findings() {
            let _ = writeln!(text, "{} {}", label.white().bold(), "clean".green());
            continue;
        }

        let level = match record.level {
            Level::Other => String::new(),
            level => format!(" [{}]", level.key()),
        };
        let _ = writeln!(
            text,
            "{}{} {} findings",
            label.white().bold(),
            level,
            record.finding_count().to_string().yellow()
        );
        for (column, result) in &record.fields {
            let FieldResult::Findings(findings) = result else {
                continue;
            };
            for finding in findings {
                let message = finding.message(lang);
                let message = match finding.severity() {
                    Severity::Error => message.red(),
                    Severity::Warning => message.yellow(),
                    Severity::Info => message.blue(),
                };
                let _ = writeln!(text, "  {:width$}  {}", column, message, width = width);
            }
        }
    }

    let summary = &report.summary;
    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "Found {} findings ({} errors, {} warnings, {} info) in {} of {} records",
        summary.total_findings.to_string().white().bold(),
        summary.findings_by_severity.error.to_string().red(),
        summary.findings_by_severity.warning.to_string().yellow(),
        summary.findings_by_severity.info.to_string().blue(),
        summary.records_with_findings,
        summary.total_records
    );
    let _ = writeln!(
        text,
        "Fields inspected: {}, not inspected: {}",
        summary.fields_inspected, summary.fields_not_inspected
    );
    let _ = writeln!(text, "Quality score: {:.0}%", summary.quality_score * 100.0);
    text
}
