//! Inspection configuration.
//!
//! A [`ConfigStore`] maps field names to their settings. Hierarchical
//! standards key each field's settings by [`Level`], with an explicit
//! default arm; flat standards hold one [`FieldConfig`] per field.
//!
//! Overrides are partial JSON trees of the same shape. They are merged by
//! one primitive ([`FieldConfig::apply`]) that ignores unknown fields,
//! levels and settings and coerces values to the type of the leaf.

mod field;
mod level;
mod merge;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{MetalintError, Result};

pub use field::{FieldConfig, Pattern, Patterns};
pub use level::Level;

/// Key of a field's controlled vocabulary.
const VOCABULARY_KEY: &str = "normal";

/// Per-field, per-level inspection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigStore {
    fields: IndexMap<String, FieldSettings>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the settings of a field.
    pub fn with_field(mut self, name: impl Into<String>, settings: FieldSettings) -> Self {
        self.fields.insert(name.into(), settings);
        self
    }

    /// Settings of a field.
    pub fn field(&self, name: &str) -> Option<&FieldSettings> {
        self.fields.get(name)
    }

    /// Names of the configured fields, in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Leaf configuration of a field for a record level.
    pub fn resolve(&self, field: &str, level: Level) -> Option<&FieldConfig> {
        self.fields.get(field).map(|settings| settings.resolve(level))
    }

    /// Controlled vocabulary of a field.
    pub fn vocabulary(&self, field: &str) -> Option<&[String]> {
        self.fields
            .get(field)
            .and_then(|settings| settings.vocabulary.as_deref())
    }

    /// Apply a partial override tree (`{field: changes, ...}`).
    pub fn apply_overrides(&mut self, overrides: &Value) -> Result<()> {
        let Value::Object(map) = overrides else {
            return Err(MetalintError::Config(format!(
                "expected an object of field settings, found {}",
                kind_of(overrides)
            )));
        };
        for (field, changes) in map {
            self.override_field(field, changes)?;
        }
        Ok(())
    }

    /// Apply a partial override to one field. Unknown fields are ignored.
    pub fn override_field(&mut self, field: &str, changes: &Value) -> Result<()> {
        let Some(settings) = self.fields.get_mut(field) else {
            debug!(field, "ignoring override for unknown field");
            return Ok(());
        };
        let Value::Object(map) = changes else {
            return Err(MetalintError::Config(format!(
                "settings of '{}' must be an object, found {}",
                field,
                kind_of(changes)
            )));
        };

        if let (Some(terms), Some(vocabulary)) =
            (map.get(VOCABULARY_KEY), settings.vocabulary.as_mut())
        {
            *vocabulary = merge::terms(VOCABULARY_KEY, terms)?;
        }

        match &mut settings.leaves {
            Leaves::Flat(config) => config.apply(map),
            Leaves::Levelled(table) => {
                for (key, value) in map {
                    if key == VOCABULARY_KEY {
                        continue;
                    }
                    let Some(config) = Level::from_key(key).and_then(|level| table.get_mut(level))
                    else {
                        debug!(field, level = %key, "ignoring override for unknown level");
                        continue;
                    };
                    match value {
                        Value::Object(level_changes) => config.apply(level_changes)?,
                        _ => debug!(field, level = %key, "ignoring non-object level override"),
                    }
                }
                Ok(())
            }
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// All settings of one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSettings {
    /// Allowed normalized terms, replaced wholesale by overrides.
    #[serde(rename = "normal", skip_serializing_if = "Option::is_none")]
    vocabulary: Option<Vec<String>>,
    #[serde(flatten)]
    leaves: Leaves,
}

impl FieldSettings {
    /// Settings of a field in a flat standard.
    pub fn flat(config: FieldConfig) -> Self {
        Self {
            vocabulary: None,
            leaves: Leaves::Flat(config),
        }
    }

    /// Settings of a field in a hierarchical standard.
    pub fn levelled(table: LevelTable) -> Self {
        Self {
            vocabulary: None,
            leaves: Leaves::Levelled(table),
        }
    }

    pub fn with_vocabulary<I, T>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.vocabulary = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    pub fn vocabulary(&self) -> Option<&[String]> {
        self.vocabulary.as_deref()
    }

    /// Leaf for a level; flat settings ignore the level.
    pub fn resolve(&self, level: Level) -> &FieldConfig {
        match &self.leaves {
            Leaves::Flat(config) => config,
            Leaves::Levelled(table) => table.get(level),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum Leaves {
    Flat(FieldConfig),
    Levelled(LevelTable),
}

/// Level-keyed leaves. Levels without their own entry use the default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    collection: Option<FieldConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<FieldConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<FieldConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<FieldConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<FieldConfig>,
    #[serde(rename = "_default")]
    default: FieldConfig,
}

impl LevelTable {
    pub fn new(default: FieldConfig) -> Self {
        Self {
            collection: None,
            class: None,
            series: None,
            file: None,
            item: None,
            default,
        }
    }

    /// Set the leaf of one level; `Level::Other` replaces the default.
    pub fn with_level(mut self, level: Level, config: FieldConfig) -> Self {
        match level {
            Level::Collection => self.collection = Some(config),
            Level::Class => self.class = Some(config),
            Level::Series => self.series = Some(config),
            Level::File => self.file = Some(config),
            Level::Item => self.item = Some(config),
            Level::Other => self.default = config,
        }
        self
    }

    pub fn get(&self, level: Level) -> &FieldConfig {
        let own = match level {
            Level::Collection => &self.collection,
            Level::Class => &self.class,
            Level::Series => &self.series,
            Level::File => &self.file,
            Level::Item => &self.item,
            Level::Other => return &self.default,
        };
        own.as_ref().unwrap_or(&self.default)
    }

    /// Leaf explicitly configured for a level, if any.
    fn get_mut(&mut self, level: Level) -> Option<&mut FieldConfig> {
        match level {
            Level::Collection => self.collection.as_mut(),
            Level::Class => self.class.as_mut(),
            Level::Series => self.series.as_mut(),
            Level::File => self.file.as_mut(),
            Level::Item => self.item.as_mut(),
            Level::Other => Some(&mut self.default),
        }
    }
}
