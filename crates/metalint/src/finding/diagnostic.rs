//! Diagnostic types emitted by the inspection engine.

use serde::{Deserialize, Serialize};

/// Kind of diagnostic, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    MissingInfo,
    EmptyElement,
    MissingLabel,
    MissingReference,
    NotUnique,
    DuplicateText,
    DistinctFromType,
    TooShort,
    TooLong,
    MissingExplicitMaterial,
    MissingExplicitTechnique,
    MissingMeasurementType,
    MissingMeasurementUnit,
    MissingMeasurementValue,
    MissingEventType,
    MissingEventInfo,
    MissingActor,
    MissingPlace,
    MissingDate,
    DateInFuture,
    MissingNormalizedDate,
    MissingEarliestDate,
    MissingLatestDate,
    MissingNormalizedTerm,
    TooFewEntries,
    MissingLink,
    MissingLanguageCode,
    MissingRightsStatement,
    MissingResourceType,
    DuplicateBlanks,
    InconsistentDate,
    PatternMismatch,
}

impl FindingKind {
    /// Get a human-readable label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            FindingKind::MissingInfo => "Missing Information",
            FindingKind::EmptyElement => "Empty Element",
            FindingKind::MissingLabel => "Missing Label",
            FindingKind::MissingReference => "Missing Reference",
            FindingKind::NotUnique => "Not Unique",
            FindingKind::DuplicateText => "Duplicate Text",
            FindingKind::DistinctFromType => "Not Distinct From Type",
            FindingKind::TooShort => "Too Short",
            FindingKind::TooLong => "Too Long",
            FindingKind::MissingExplicitMaterial => "Missing Explicit Material",
            FindingKind::MissingExplicitTechnique => "Missing Explicit Technique",
            FindingKind::MissingMeasurementType => "Missing Measurement Type",
            FindingKind::MissingMeasurementUnit => "Missing Measurement Unit",
            FindingKind::MissingMeasurementValue => "Missing Measurement Value",
            FindingKind::MissingEventType => "Missing Event Type",
            FindingKind::MissingEventInfo => "Missing Event Information",
            FindingKind::MissingActor => "Missing Actor",
            FindingKind::MissingPlace => "Missing Place",
            FindingKind::MissingDate => "Missing Date",
            FindingKind::DateInFuture => "Date In Future",
            FindingKind::MissingNormalizedDate => "Missing Normalized Date",
            FindingKind::MissingEarliestDate => "Missing Earliest Date",
            FindingKind::MissingLatestDate => "Missing Latest Date",
            FindingKind::MissingNormalizedTerm => "Missing Normalized Term",
            FindingKind::TooFewEntries => "Too Few Entries",
            FindingKind::MissingLink => "Missing Link",
            FindingKind::MissingLanguageCode => "Missing Language Code",
            FindingKind::MissingRightsStatement => "Missing Rights Statement",
            FindingKind::MissingResourceType => "Missing Resource Type",
            FindingKind::DuplicateBlanks => "Duplicate Blanks",
            FindingKind::InconsistentDate => "Inconsistent Date",
            FindingKind::PatternMismatch => "Pattern Mismatch",
        }
    }

    /// Severity attached to every finding of this kind.
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::DuplicateBlanks => Severity::Info,
            FindingKind::NotUnique
            | FindingKind::DuplicateText
            | FindingKind::DistinctFromType
            | FindingKind::TooShort
            | FindingKind::TooLong
            | FindingKind::TooFewEntries
            | FindingKind::MissingReference
            | FindingKind::MissingNormalizedTerm
            | FindingKind::MissingLanguageCode
            | FindingKind::MissingExplicitMaterial
            | FindingKind::MissingExplicitTechnique
            | FindingKind::PatternMismatch => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic, does not affect findability.
    Info,
    /// Under-specified data that should be reviewed.
    Warning,
    /// Required information is missing or wrong.
    Error,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// One diagnostic: a kind plus its positional parameters.
///
/// Only the kind and the parameters are stable. Rendered text comes from
/// [`Finding::message`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    MissingInfo,
    EmptyElement { element: String },
    MissingLabel { reference: String },
    MissingReference { label: String },
    NotUnique,
    DuplicateText,
    DistinctFromType { compared_to: String },
    TooShort,
    TooLong,
    MissingExplicitMaterial,
    MissingExplicitTechnique,
    MissingMeasurementType,
    MissingMeasurementUnit { measurement_type: String },
    MissingMeasurementValue { measurement_type: String },
    MissingEventType,
    MissingEventInfo { event_type: String },
    MissingActor { event_type: String },
    MissingPlace { event_type: String },
    MissingDate { event_type: String },
    DateInFuture { date: String },
    MissingNormalizedDate { text: String },
    MissingEarliestDate { event_type: String },
    MissingLatestDate { event_type: String },
    MissingNormalizedTerm { term: String },
    TooFewEntries { found: usize, minimum: usize },
    MissingLink,
    MissingLanguageCode,
    MissingRightsStatement { context: String },
    MissingResourceType { context: String },
    DuplicateBlanks,
    InconsistentDate { record: String, range: String },
    PatternMismatch { value: String, pattern: String },
}

impl Finding {
    pub fn empty_element(element: impl Into<String>) -> Self {
        Finding::EmptyElement {
            element: element.into(),
        }
    }

    pub fn missing_label(reference: impl Into<String>) -> Self {
        Finding::MissingLabel {
            reference: reference.into(),
        }
    }

    pub fn missing_reference(label: impl Into<String>) -> Self {
        Finding::MissingReference {
            label: label.into(),
        }
    }

    pub fn missing_actor(event_type: impl Into<String>) -> Self {
        Finding::MissingActor {
            event_type: event_type.into(),
        }
    }

    pub fn missing_place(event_type: impl Into<String>) -> Self {
        Finding::MissingPlace {
            event_type: event_type.into(),
        }
    }

    pub fn missing_date(event_type: impl Into<String>) -> Self {
        Finding::MissingDate {
            event_type: event_type.into(),
        }
    }

    pub fn missing_event_info(event_type: impl Into<String>) -> Self {
        Finding::MissingEventInfo {
            event_type: event_type.into(),
        }
    }

    /// The parameterless kind of this finding.
    pub fn kind(&self) -> FindingKind {
        match self {
            Finding::MissingInfo => FindingKind::MissingInfo,
            Finding::EmptyElement { .. } => FindingKind::EmptyElement,
            Finding::MissingLabel { .. } => FindingKind::MissingLabel,
            Finding::MissingReference { .. } => FindingKind::MissingReference,
            Finding::NotUnique => FindingKind::NotUnique,
            Finding::DuplicateText => FindingKind::DuplicateText,
            Finding::DistinctFromType { .. } => FindingKind::DistinctFromType,
            Finding::TooShort => FindingKind::TooShort,
            Finding::TooLong => FindingKind::TooLong,
            Finding::MissingExplicitMaterial => FindingKind::MissingExplicitMaterial,
            Finding::MissingExplicitTechnique => FindingKind::MissingExplicitTechnique,
            Finding::MissingMeasurementType => FindingKind::MissingMeasurementType,
            Finding::MissingMeasurementUnit { .. } => FindingKind::MissingMeasurementUnit,
            Finding::MissingMeasurementValue { .. } => FindingKind::MissingMeasurementValue,
            Finding::MissingEventType => FindingKind::MissingEventType,
            Finding::MissingEventInfo { .. } => FindingKind::MissingEventInfo,
            Finding::MissingActor { .. } => FindingKind::MissingActor,
            Finding::MissingPlace { .. } => FindingKind::MissingPlace,
            Finding::MissingDate { .. } => FindingKind::MissingDate,
            Finding::DateInFuture { .. } => FindingKind::DateInFuture,
            Finding::MissingNormalizedDate { .. } => FindingKind::MissingNormalizedDate,
            Finding::MissingEarliestDate { .. } => FindingKind::MissingEarliestDate,
            Finding::MissingLatestDate { .. } => FindingKind::MissingLatestDate,
            Finding::MissingNormalizedTerm { .. } => FindingKind::MissingNormalizedTerm,
            Finding::TooFewEntries { .. } => FindingKind::TooFewEntries,
            Finding::MissingLink => FindingKind::MissingLink,
            Finding::MissingLanguageCode => FindingKind::MissingLanguageCode,
            Finding::MissingRightsStatement { .. } => FindingKind::MissingRightsStatement,
            Finding::MissingResourceType { .. } => FindingKind::MissingResourceType,
            Finding::DuplicateBlanks => FindingKind::DuplicateBlanks,
            Finding::InconsistentDate { .. } => FindingKind::InconsistentDate,
            Finding::PatternMismatch { .. } => FindingKind::PatternMismatch,
        }
    }

    /// Severity of this finding.
    pub fn severity(&self) -> Severity {
        self.kind().severity()
    }
}
