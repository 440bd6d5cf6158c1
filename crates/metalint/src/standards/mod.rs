//! Metadata standards: which records a document holds, which fields each
//! record has and how every field is checked.
//!
//! A standard is a [`Standard`] (name and default configuration) plus a
//! [`FieldCatalog`] over some [`Element`] implementation. The inspector is
//! generic over both, so one engine serves hierarchical and flat standards.

mod ead;
mod lido;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::checks::{DuplicateSet, EntityValidator, TextQualityChecker};
use crate::config::{ConfigStore, FieldConfig, FieldSettings, Level};
use crate::error::MetalintError;
use crate::finding::Finding;
use crate::record::Element;

pub use ead::Ead;
pub use lido::Lido;

/// A metadata standard with built-in defaults.
pub trait Standard {
    /// Short name used in reports and on the command line.
    const NAME: &'static str;

    /// Built-in configuration of every field.
    fn default_config() -> ConfigStore;
}

/// Record and field layout of a standard over one element type.
pub trait FieldCatalog<E: Element>: Standard {
    /// Records of a document, in document order.
    fn records(&self, document: &E) -> Vec<E>;

    /// Hierarchy level of a record. Flat standards keep the default.
    fn level(&self, _record: &E) -> Level {
        Level::Other
    }

    /// Identifier columns, reported before the fields.
    fn identifiers(&self) -> Vec<IdentifierSpec<E>>;

    /// Inspected fields, in output order.
    fn fields(&self) -> Vec<FieldSpec<E>>;

    /// Projections whose duplicates are collected once per run.
    fn unique_projections(&self) -> Vec<UniqueSpec<E>> {
        Vec::new()
    }
}

/// An identifier column.
pub struct IdentifierSpec<E> {
    pub column: &'static str,
    pub extract: fn(&E) -> Option<String>,
}

/// An inspected field.
pub struct FieldSpec<E> {
    /// Column name in reports.
    pub column: &'static str,
    /// Name of the field in the configuration.
    pub config_key: &'static str,
    /// Findings for one record; empty means clean.
    pub check: fn(&FieldContext<'_, E>) -> Vec<Finding>,
}

/// A value projected from every record for duplicate detection.
///
/// The set is built only when the field under `config_key` is unique on
/// some level.
pub struct UniqueSpec<E> {
    pub config_key: &'static str,
    pub project: fn(&E) -> String,
}

/// Data shared by all records of one run, across every document.
pub struct BatchContext {
    today: NaiveDate,
    duplicates: HashMap<&'static str, DuplicateSet>,
}

impl BatchContext {
    pub fn new(today: NaiveDate, duplicates: HashMap<&'static str, DuplicateSet>) -> Self {
        Self { today, duplicates }
    }
}

/// Everything a field check may look at.
pub struct FieldContext<'a, E> {
    pub record: &'a E,
    /// The document the record was read from.
    pub document: &'a E,
    pub level: Level,
    pub config: &'a FieldConfig,
    pub settings: &'a FieldSettings,
    pub batch: &'a BatchContext,
}

impl<'a, E> FieldContext<'a, E> {
    /// The whole document the record belongs to.
    pub fn document(&self) -> &'a E {
        self.document
    }

    pub fn today(&self) -> NaiveDate {
        self.batch.today
    }

    /// Duplicate set of a projection, if it was collected for this run.
    pub fn duplicates(&self, config_key: &str) -> Option<&'a DuplicateSet> {
        self.batch.duplicates.get(config_key)
    }

    pub fn vocabulary(&self) -> Option<&'a [String]> {
        self.settings.vocabulary()
    }

    pub fn entity(&self) -> EntityValidator<'a> {
        EntityValidator::new(self.config)
    }

    pub fn text(&self) -> TextQualityChecker<'a> {
        TextQualityChecker::new(self.config)
    }
}

/// The built-in standards, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardKind {
    Ead,
    Lido,
}

impl StandardKind {
    pub fn name(&self) -> &'static str {
        match self {
            StandardKind::Ead => Ead::NAME,
            StandardKind::Lido => Lido::NAME,
        }
    }

    pub fn default_config(&self) -> ConfigStore {
        match self {
            StandardKind::Ead => Ead::default_config(),
            StandardKind::Lido => Lido::default_config(),
        }
    }
}

impl FromStr for StandardKind {
    type Err = MetalintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ead" => Ok(StandardKind::Ead),
            "lido" => Ok(StandardKind::Lido),
            _ => Err(MetalintError::UnknownStandard(s.to_string())),
        }
    }
}

impl fmt::Display for StandardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Findings of a list-valued field: `MissingInfo` when there are no items,
/// otherwise the findings of every item in order.
pub(crate) fn each<E, F>(items: &[E], mut check: F) -> Vec<Finding>
where
    F: FnMut(&E) -> Vec<Finding>,
{
    if items.is_empty() {
        return vec![Finding::MissingInfo];
    }
    items.iter().flat_map(|item| check(item)).collect()
}

/// `MissingInfo` when a text is empty.
pub(crate) fn required_text(text: &str) -> Vec<Finding> {
    if text.is_empty() {
        vec![Finding::MissingInfo]
    } else {
        Vec::new()
    }
}
