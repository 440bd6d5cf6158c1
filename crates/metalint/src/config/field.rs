//! Leaf configuration of a single field at a single level.

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use super::merge::{integer, optional_string, truthy};
use crate::error::{MetalintError, Result};

/// Settings for inspecting one field.
///
/// Optional settings that are `None` are not part of the field's
/// configuration at all: overrides for them are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldConfig {
    /// Whether the field is inspected.
    pub inspect: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_word_num: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_word_num: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    /// Whether entity labels need an authority reference.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_num: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Patterns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differentiated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_from_type: Option<bool>,
}

impl FieldConfig {
    pub fn new(inspect: bool) -> Self {
        Self {
            inspect,
            min_word_num: None,
            max_word_num: None,
            unique: None,
            reference: None,
            min_num: None,
            patterns: None,
            differentiated: None,
            distinct_from_type: None,
        }
    }

    pub fn with_min_word_num(mut self, n: usize) -> Self {
        self.min_word_num = Some(n);
        self
    }

    pub fn with_max_word_num(mut self, n: usize) -> Self {
        self.max_word_num = Some(n);
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = Some(unique);
        self
    }

    /// Require (or not) authority references. Fields with references also
    /// accept label and reference patterns.
    pub fn with_reference(mut self, required: bool) -> Self {
        self.reference = Some(required);
        self.patterns.get_or_insert_with(Patterns::default);
        self
    }

    pub fn with_min_num(mut self, n: usize) -> Self {
        self.min_num = Some(n);
        self
    }

    pub fn with_patterns(mut self, patterns: Patterns) -> Self {
        self.patterns = Some(patterns);
        self
    }

    pub fn with_differentiated(mut self, differentiated: bool) -> Self {
        self.differentiated = Some(differentiated);
        self
    }

    pub fn with_distinct_from_type(mut self, distinct: bool) -> Self {
        self.distinct_from_type = Some(distinct);
        self
    }

    /// Minimum number of words, zero when unset.
    pub fn min_words(&self) -> usize {
        self.min_word_num.unwrap_or(0)
    }

    pub fn is_unique(&self) -> bool {
        self.unique.unwrap_or(false)
    }

    pub fn requires_reference(&self) -> bool {
        self.reference.unwrap_or(false)
    }

    pub fn is_differentiated(&self) -> bool {
        self.differentiated.unwrap_or(false)
    }

    pub fn must_differ_from_type(&self) -> bool {
        self.distinct_from_type.unwrap_or(false)
    }

    pub fn label_pattern(&self) -> Option<&Pattern> {
        self.patterns.as_ref().and_then(|p| p.label.as_ref())
    }

    pub fn reference_pattern(&self) -> Option<&Pattern> {
        self.patterns.as_ref().and_then(|p| p.reference.as_ref())
    }

    /// Merge a partial override into this leaf.
    ///
    /// Only settings the leaf already has are touched; booleans go through
    /// truthiness, counts through integer conversion. A value that cannot
    /// be converted is an error and leaves its setting unchanged.
    pub fn apply(&mut self, changes: &Map<String, Value>) -> Result<()> {
        for (key, value) in changes {
            match key.as_str() {
                "inspect" => self.inspect = truthy(value),
                "min_word_num" => set_count(&mut self.min_word_num, key, value)?,
                "max_word_num" => set_count(&mut self.max_word_num, key, value)?,
                "min_num" => set_count(&mut self.min_num, key, value)?,
                "unique" => set_flag(&mut self.unique, value),
                "ref" => set_flag(&mut self.reference, value),
                "differentiated" => set_flag(&mut self.differentiated, value),
                "distinct_from_type" => set_flag(&mut self.distinct_from_type, value),
                "patterns" => {
                    if let Some(patterns) = self.patterns.as_mut() {
                        patterns.apply(value)?;
                    }
                }
                other => debug!(key = other, "ignoring unknown setting"),
            }
        }
        Ok(())
    }
}

fn set_count(slot: &mut Option<usize>, key: &str, value: &Value) -> Result<()> {
    if slot.is_some() {
        *slot = Some(integer(key, value)?);
    }
    Ok(())
}

fn set_flag(slot: &mut Option<bool>, value: &Value) {
    if slot.is_some() {
        *slot = Some(truthy(value));
    }
}

/// Optional full-match constraints on entity labels and references.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Patterns {
    pub label: Option<Pattern>,
    #[serde(rename = "ref")]
    pub reference: Option<Pattern>,
}

impl Patterns {
    pub fn new(label: Option<&str>, reference: Option<&str>) -> Result<Self> {
        Ok(Self {
            label: label.map(Pattern::new).transpose()?,
            reference: reference.map(Pattern::new).transpose()?,
        })
    }

    fn apply(&mut self, changes: &Value) -> Result<()> {
        let Value::Object(map) = changes else {
            debug!("ignoring non-object pattern override");
            return Ok(());
        };
        for (key, value) in map {
            let slot = match key.as_str() {
                "label" => &mut self.label,
                "ref" => &mut self.reference,
                other => {
                    debug!(key = other, "ignoring unknown pattern");
                    continue;
                }
            };
            *slot = optional_string(key, value)?
                .map(|source| Pattern::new(&source))
                .transpose()?;
        }
        Ok(())
    }
}

/// A regular expression that must match a whole value.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|e| {
            MetalintError::Pattern {
                pattern: source.to_string(),
                source: e,
            }
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The expression as configured, without anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_full_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}
