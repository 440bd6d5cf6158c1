//! Hierarchy levels of archival records.

use serde::{Deserialize, Serialize};

/// Hierarchical depth category of a record.
///
/// `Other` is the default arm: any level without its own configuration,
/// and every record of a flat standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Collection,
    Class,
    Series,
    File,
    Item,
    #[default]
    Other,
}

impl Level {
    /// All levels, in hierarchy order, default arm last.
    pub const ALL: [Level; 6] = [
        Level::Collection,
        Level::Class,
        Level::Series,
        Level::File,
        Level::Item,
        Level::Other,
    ];

    /// Level of a record from its level attribute.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "collection" => Level::Collection,
            "class" => Level::Class,
            "series" => Level::Series,
            "file" => Level::File,
            "item" => Level::Item,
            _ => Level::Other,
        }
    }

    /// Level named by a configuration key, `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "_default" | "_" => Some(Level::Other),
            "collection" | "class" | "series" | "file" | "item" => Some(Level::from_attr(key)),
            _ => None,
        }
    }

    /// Configuration key of the level.
    pub fn key(&self) -> &'static str {
        match self {
            Level::Collection => "collection",
            Level::Class => "class",
            Level::Series => "series",
            Level::File => "file",
            Level::Item => "item",
            Level::Other => "_default",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attr_falls_back_to_other() {
        assert_eq!(Level::from_attr("file"), Level::File);
        assert_eq!(Level::from_attr("fonds"), Level::Other);
        assert_eq!(Level::from_attr(""), Level::Other);
    }

    #[test]
    fn test_keys_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_key(level.key()), Some(level));
        }
        assert_eq!(Level::from_key("_"), Some(Level::Other));
        assert_eq!(Level::from_key("otherlevel"), None);
    }
}
