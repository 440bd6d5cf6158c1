//! Example: Inspect a LIDO or EAD XML document.
//!
//! Usage:
//!   cargo run --example inspect -- <ead|lido> <file_path>
//!
//! Example:
//!   cargo run --example inspect -- lido objects.xml

use std::env;
use std::fs;

use metalint::record::{XmlElement, parse_document};
use metalint::{
    Ead, InspectionReport, Inspector, Language, Lido, MetalintError, SourceMetadata, StandardKind,
};

fn main() -> metalint::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example inspect -- <ead|lido> <file_path>");
        std::process::exit(1);
    }

    let standard: StandardKind = args[1].parse()?;
    let file_path = &args[2];
    let text = fs::read_to_string(file_path).map_err(|source| MetalintError::Io {
        path: file_path.into(),
        source,
    })?;
    let doc = parse_document(&text)?;
    let root = XmlElement::document(&doc);

    let report: InspectionReport = match standard {
        StandardKind::Ead => Inspector::new(Ead).inspect(&root),
        StandardKind::Lido => Inspector::new(Lido).inspect(&root),
    }
    .with_source(SourceMetadata::from_bytes(file_path, text.as_bytes()));

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("metalint inspection: {} ({})", file_path, standard);
    println!("{}", separator);
    println!();

    for record in &report.records {
        let label = record.label().unwrap_or("<no identifier>");
        println!("{} [{}]", label, record.level.key());
        for (field, result) in &record.fields {
            for finding in result.findings() {
                let severity = format!("{:?}", finding.severity());
                println!("  {:24} {:8} {}", field, severity, finding.message(Language::En));
            }
        }
    }

    let summary = &report.summary;
    println!();
    println!(
        "{} findings in {} of {} records, quality score {:.0}%",
        summary.total_findings,
        summary.records_with_findings,
        summary.total_records,
        summary.quality_score * 100.0
    );
    for (kind, count) in &summary.findings_by_kind {
        println!("  {:32} {}", kind.label(), count);
    }

    Ok(())
}
