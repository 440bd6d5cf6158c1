//! Free-text quality checks.

use crate::config::FieldConfig;
use crate::finding::Finding;

use super::DuplicateSet;

/// Element name reported when a text equals the object/work type.
const TYPE_ELEMENT: &str = "objectWorkType";

/// Checks word-count bounds, whitespace and uniqueness of free text.
pub struct TextQualityChecker<'a> {
    config: &'a FieldConfig,
    duplicates: Option<&'a DuplicateSet>,
    type_term: Option<&'a str>,
}

impl<'a> TextQualityChecker<'a> {
    pub fn new(config: &'a FieldConfig) -> Self {
        Self {
            config,
            duplicates: None,
            type_term: None,
        }
    }

    /// Report `NotUnique` for texts in this set when the field is unique.
    pub fn with_duplicates(mut self, duplicates: &'a DuplicateSet) -> Self {
        self.duplicates = Some(duplicates);
        self
    }

    /// Report `DistinctFromType` when the text equals this type term.
    pub fn distinct_from(mut self, type_term: &'a str) -> Self {
        self.type_term = Some(type_term).filter(|t| !t.is_empty());
        self
    }

    /// Check a text. `None` means inspected and clean.
    pub fn check(&self, text: &str) -> Option<Vec<Finding>> {
        if text.is_empty() {
            return Some(vec![Finding::MissingInfo]);
        }

        let mut findings = Vec::new();
        if text.contains("  ") {
            findings.push(Finding::DuplicateBlanks);
        }
        if self.config.is_unique() && self.duplicates.is_some_and(|set| set.contains(text)) {
            findings.push(Finding::NotUnique);
        }
        if self.config.must_differ_from_type() && self.type_term == Some(text) {
            findings.push(Finding::DistinctFromType {
                compared_to: TYPE_ELEMENT.to_string(),
            });
        }

        let words = text.split_whitespace().count();
        if words < self.config.min_words() {
            findings.push(Finding::TooShort);
        }
        if self.config.max_word_num.is_some_and(|max| words > max) {
            findings.push(Finding::TooLong);
        }

        if findings.is_empty() { None } else { Some(findings) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::DuplicateDetector;

    #[test]
    fn test_empty_text_short_circuits() {
        let config = FieldConfig::new(true).with_min_word_num(5);

        assert_eq!(
            TextQualityChecker::new(&config).check(""),
            Some(vec![Finding::MissingInfo])
        );
    }

    #[test]
    fn test_duplicate_blanks_without_too_short() {
        let config = FieldConfig::new(true).with_min_word_num(1);

        let findings = TextQualityChecker::new(&config).check("a  b").unwrap();

        assert!(findings.contains(&Finding::DuplicateBlanks));
        assert!(!findings.contains(&Finding::TooShort));
    }

    #[test]
    fn test_clean_text_is_none() {
        let config = FieldConfig::new(true).with_min_word_num(2).with_max_word_num(4);

        assert_eq!(TextQualityChecker::new(&config).check("Letters from Rome"), None);
    }

    #[test]
    fn test_word_bounds() {
        let config = FieldConfig::new(true).with_min_word_num(2).with_max_word_num(3);
        let checker = TextQualityChecker::new(&config);

        assert_eq!(checker.check("Vase"), Some(vec![Finding::TooShort]));
        assert_eq!(checker.check("a b c d"), Some(vec![Finding::TooLong]));
    }

    #[test]
    fn test_unique_and_type_checks() {
        let duplicates = DuplicateDetector::find_duplicates(["Vase", "Vase", "Bowl"]);
        let config = FieldConfig::new(true)
            .with_unique(true)
            .with_distinct_from_type(true)
            .with_min_word_num(2);

        let findings = TextQualityChecker::new(&config)
            .with_duplicates(&duplicates)
            .distinct_from("Vase")
            .check("Vase")
            .unwrap();

        assert_eq!(
            findings,
            vec![
                Finding::NotUnique,
                Finding::DistinctFromType {
                    compared_to: "objectWorkType".into()
                },
                Finding::TooShort,
            ]
        );
    }

    #[test]
    fn test_unique_flag_off_ignores_duplicates() {
        let duplicates = DuplicateDetector::find_duplicates(["Vase", "Vase"]);
        let config = FieldConfig::new(true).with_unique(false);

        let result = TextQualityChecker::new(&config)
            .with_duplicates(&duplicates)
            .check("Vase");

        assert_eq!(result, None);
    }
}
