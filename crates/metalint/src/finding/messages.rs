//! Localized message rendering for findings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::diagnostic::Finding;

/// Supported message languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Resolve a language code, falling back to English for unknown codes.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    /// ISO 639-1 code of the language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Text used for fields that were skipped by configuration.
    pub fn not_inspected(&self) -> &'static str {
        match self {
            Language::En => "not inspected",
            Language::De => "nicht geprüft",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::En),
            "de" | "deu" | "ger" | "german" | "deutsch" => Ok(Language::De),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Finding {
    /// Render the finding as a message in the given language.
    pub fn message(&self, lang: Language) -> String {
        match lang {
            Language::En => self.message_en(),
            Language::De => self.message_de(),
        }
    }

    fn message_en(&self) -> String {
        match self {
            Finding::MissingInfo => "missing information".to_string(),
            Finding::EmptyElement { element } => format!("empty element ({element})"),
            Finding::MissingLabel { reference } => format!("missing label ({reference})"),
            Finding::MissingReference { label } => format!("missing reference/ID ({label})"),
            Finding::NotUnique => "not unique".to_string(),
            Finding::DuplicateText => "duplicate text".to_string(),
            Finding::DistinctFromType { compared_to } => {
                format!("not distinct from {compared_to}")
            }
            Finding::TooShort => "too short".to_string(),
            Finding::TooLong => "too long".to_string(),
            Finding::MissingExplicitMaterial => "missing explicit material".to_string(),
            Finding::MissingExplicitTechnique => "missing explicit technique".to_string(),
            Finding::MissingMeasurementType => "missing measurement type".to_string(),
            Finding::MissingMeasurementUnit { measurement_type } => {
                format!("missing measurement unit ({measurement_type})")
            }
            Finding::MissingMeasurementValue { measurement_type } => {
                format!("missing measurement value ({measurement_type})")
            }
            Finding::MissingEventType => "missing event type".to_string(),
            Finding::MissingEventInfo { event_type } => {
                format!("missing actor, place or date ({event_type})")
            }
            Finding::MissingActor { event_type } => format!("missing actor ({event_type})"),
            Finding::MissingPlace { event_type } => format!("missing place ({event_type})"),
            Finding::MissingDate { event_type } => format!("missing date ({event_type})"),
            Finding::DateInFuture { date } => format!("date in future ({date})"),
            Finding::MissingNormalizedDate { text } => {
                format!("missing normalized (ISO-8601) date ({text})")
            }
            Finding::MissingEarliestDate { event_type } => {
                format!("missing earliest date ({event_type})")
            }
            Finding::MissingLatestDate { event_type } => {
                format!("missing latest date ({event_type})")
            }
            Finding::MissingNormalizedTerm { term } => format!("missing normalized term ({term})"),
            Finding::TooFewEntries { found, minimum } => {
                format!("too few entries ({found}/{minimum})")
            }
            Finding::MissingLink => "missing link".to_string(),
            Finding::MissingLanguageCode => "missing language code".to_string(),
            Finding::MissingRightsStatement { context } => {
                format!("missing rights statement ({context})")
            }
            Finding::MissingResourceType { context } => {
                format!("missing resource type ({context})")
            }
            Finding::DuplicateBlanks => "duplicate blanks".to_string(),
            Finding::InconsistentDate { record, range } => {
                format!("inconsistent date ({record}: {range})")
            }
            Finding::PatternMismatch { value, pattern } => {
                format!("does not match pattern {pattern} ({value})")
            }
        }
    }

    fn message_de(&self) -> String {
        match self {
            Finding::MissingInfo => "Angabe fehlt".to_string(),
            Finding::EmptyElement { element } => format!("leeres Element ({element})"),
            Finding::MissingLabel { reference } => format!("Bezeichnung fehlt ({reference})"),
            Finding::MissingReference { label } => format!("Verweis/ID fehlt ({label})"),
            Finding::NotUnique => "nicht einzigartig".to_string(),
            Finding::DuplicateText => "duplizierter Text".to_string(),
            Finding::DistinctFromType { compared_to } => {
                format!("kein Unterschied zu {compared_to}")
            }
            Finding::TooShort => "zu kurz".to_string(),
            Finding::TooLong => "zu lang".to_string(),
            Finding::MissingExplicitMaterial => "explizites Material fehlt".to_string(),
            Finding::MissingExplicitTechnique => "explizite Technik fehlt".to_string(),
            Finding::MissingMeasurementType => "Messgröße fehlt".to_string(),
            Finding::MissingMeasurementUnit { measurement_type } => {
                format!("Maßeinheit fehlt ({measurement_type})")
            }
            Finding::MissingMeasurementValue { measurement_type } => {
                format!("Messwert fehlt ({measurement_type})")
            }
            Finding::MissingEventType => "Eventtyp fehlt".to_string(),
            Finding::MissingEventInfo { event_type } => {
                format!("Akteur:in, Ort oder Datierung fehlen ({event_type})")
            }
            Finding::MissingActor { event_type } => format!("Akteur:in fehlt ({event_type})"),
            Finding::MissingPlace { event_type } => format!("Ort fehlt ({event_type})"),
            Finding::MissingDate { event_type } => format!("Datierung fehlt ({event_type})"),
            Finding::DateInFuture { date } => format!("Datum liegt in der Zukunft ({date})"),
            Finding::MissingNormalizedDate { text } => {
                format!("normalisierte (ISO-8601) Datierung fehlt ({text})")
            }
            Finding::MissingEarliestDate { event_type } => {
                format!("Anfangsdatum fehlt ({event_type})")
            }
            Finding::MissingLatestDate { event_type } => format!("Enddatum fehlt ({event_type})"),
            Finding::MissingNormalizedTerm { term } => {
                format!("normalisierter Begriff fehlt ({term})")
            }
            Finding::TooFewEntries { found, minimum } => {
                format!("zu wenige Einträge ({found}/{minimum})")
            }
            Finding::MissingLink => "Link fehlt".to_string(),
            Finding::MissingLanguageCode => "Sprachcode fehlt".to_string(),
            Finding::MissingRightsStatement { context } => {
                format!("Rechteangabe fehlt ({context})")
            }
            Finding::MissingResourceType { context } => format!("Ressourcentyp fehlt ({context})"),
            Finding::DuplicateBlanks => "doppelte Leerzeichen".to_string(),
            Finding::InconsistentDate { record, range } => {
                format!("inkonsistente Datierung ({record}: {range})")
            }
            Finding::PatternMismatch { value, pattern } => {
                format!("entspricht nicht dem Muster {pattern} ({value})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_messages() {
        assert_eq!(Finding::MissingInfo.message(Language::En), "missing information");
        assert_eq!(
            Finding::missing_label("GND-123").message(Language::En),
            "missing label (GND-123)"
        );
        assert_eq!(
            Finding::InconsistentDate {
                record: "2".to_string(),
                range: "2016-01-15/2016-01-15".to_string(),
            }
            .message(Language::En),
            "inconsistent date (2: 2016-01-15/2016-01-15)"
        );
    }

    #[test]
    fn test_german_messages() {
        assert_eq!(Finding::MissingInfo.message(Language::De), "Angabe fehlt");
        assert_eq!(
            Finding::missing_event_info("Herstellung").message(Language::De),
            "Akteur:in, Ort oder Datierung fehlen (Herstellung)"
        );
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("de"), Language::De);
        assert_eq!(Language::from_code("DE"), Language::De);
        assert_eq!(Language::from_code("fr"), Language::En);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::De.to_string(), "de");
    }
}
