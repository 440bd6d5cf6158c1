//! Findings: the diagnostics produced by an inspection run.

mod diagnostic;
mod messages;

pub use diagnostic::{Finding, FindingKind, Severity};
pub use messages::Language;
