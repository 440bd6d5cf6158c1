//! Label/reference validation for entities (actors, places, concepts).

use crate::config::{FieldConfig, Pattern};
use crate::finding::Finding;

/// Validates `(label, reference)` pairs against a field's settings.
pub struct EntityValidator<'a> {
    config: &'a FieldConfig,
}

impl<'a> EntityValidator<'a> {
    pub fn new(config: &'a FieldConfig) -> Self {
        Self { config }
    }

    /// Check one entity. Empty strings mean "absent".
    pub fn validate(&self, label: &str, reference: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        if label.is_empty() {
            findings.push(Finding::missing_label(reference));
        }
        if !self.config.requires_reference() {
            return findings;
        }
        if reference.is_empty() {
            findings.push(Finding::missing_reference(label));
        }
        if let Some(pattern) = self.config.label_pattern() {
            check_pattern(pattern, label, &mut findings);
        }
        if let Some(pattern) = self.config.reference_pattern() {
            check_pattern(pattern, reference, &mut findings);
        }

        findings
    }
}

fn check_pattern(pattern: &Pattern, value: &str, findings: &mut Vec<Finding>) {
    if pattern.as_str().is_empty() || pattern.is_full_match(value) {
        return;
    }
    findings.push(Finding::PatternMismatch {
        value: value.to_string(),
        pattern: pattern.as_str().to_string(),
    });
}
