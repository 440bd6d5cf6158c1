//! Metalint: formal quality inspection of structured metadata records.
//!
//! Metalint checks archival finding aids (EAD) and museum object records
//! (LIDO) for missing required fields, malformed or inconsistent dates,
//! duplicate or under-specified text and missing authority references. It
//! reports one list of findings per field per record and never modifies
//! the data.
//!
//! # Core Principles
//!
//! - **Read-only**: documents are inspected, never corrected
//! - **Configurable**: every field can be enabled, disabled and tuned per
//!   hierarchy level
//! - **Explicit results**: "not inspected", "clean" and "findings" are
//!   always distinguishable
//!
//! # Example
//!
//! ```
//! use metalint::record::JsonElement;
//! use metalint::standards::Ead;
//! use metalint::{Finding, Inspector};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "ead": { "archdesc": { "dsc": { "c": {
//!         "@level": "file",
//!         "did": { "unitid": "A-1", "unittitle": "Letters" }
//!     }}}}
//! });
//!
//! let report = Inspector::new(Ead).inspect(&JsonElement::document(&doc));
//! let title = &report.records[0].fields["unittitle"];
//! assert_eq!(title.findings(), &[Finding::TooShort]);
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod finding;
pub mod record;
pub mod report;
pub mod standards;

mod inspector;

pub use config::{ConfigStore, FieldConfig, Level};
pub use error::{MetalintError, Result};
pub use finding::{Finding, FindingKind, Language, Severity};
pub use inspector::Inspector;
pub use report::{FieldResult, InspectionReport, InspectionSummary, RecordReport, SourceMetadata};
pub use standards::{Ead, Lido, Standard, StandardKind};
