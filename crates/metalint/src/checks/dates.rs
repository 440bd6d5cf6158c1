//! Normalized date ranges and hierarchical date consistency.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::finding::Finding;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !ISO_DATE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Earliest and latest bound of a normalized date. Bounds that could not
/// be parsed are absent; reversed bounds are kept as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(earliest: Option<NaiveDate>, latest: Option<NaiveDate>) -> Self {
        Self { earliest, latest }
    }

    /// Parse `date` or `earliest/latest`. With more than one `/` the first
    /// and last segments are used.
    pub fn parse(normalized: &str) -> Self {
        let mut segments = normalized.split('/');
        let first = segments.next().unwrap_or_default();
        let last = segments.next_back().unwrap_or(first);
        Self {
            earliest: parse_iso_date(first),
            latest: parse_iso_date(last),
        }
    }

    /// Both bounds present.
    pub fn is_complete(&self) -> bool {
        self.earliest.is_some() && self.latest.is_some()
    }

    /// Both bounds absent.
    pub fn is_unbounded(&self) -> bool {
        self.earliest.is_none() && self.latest.is_none()
    }

    /// Whether a present bound lies after `today`.
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.earliest.is_some_and(|d| d > today) || self.latest.is_some_and(|d| d > today)
    }

    /// Whether this range lies within `outer`. Absent bounds on either
    /// side do not constrain.
    pub fn is_within(&self, outer: &DateRange) -> bool {
        let earliest_ok = match (self.earliest, outer.earliest) {
            (Some(inner), Some(outer)) => inner >= outer,
            _ => true,
        };
        let latest_ok = match (self.latest, outer.latest) {
            (Some(inner), Some(outer)) => inner <= outer,
            _ => true,
        };
        earliest_ok && latest_ok
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |d: Option<NaiveDate>| d.map_or_else(|| "..".to_string(), |d| d.to_string());
        write!(f, "{}/{}", bound(self.earliest), bound(self.latest))
    }
}

/// Date statements of one descendant record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescendantDates {
    pub id: String,
    pub ranges: Vec<DateRange>,
}

impl DescendantDates {
    pub fn new(id: impl Into<String>, ranges: Vec<DateRange>) -> Self {
        Self {
            id: id.into(),
            ranges,
        }
    }
}

/// Checks descendant dates against the date statements of an ancestor.
///
/// A descendant range is consistent when it lies within at least one of
/// the ancestor's ranges.
pub struct DateConsistencyChecker<'a> {
    ancestor: &'a [DateRange],
}

impl<'a> DateConsistencyChecker<'a> {
    pub fn new(ancestor: &'a [DateRange]) -> Self {
        Self { ancestor }
    }

    pub fn is_consistent(&self, range: &DateRange) -> bool {
        range.is_unbounded() || self.ancestor.iter().any(|outer| range.is_within(outer))
    }

    /// One `InconsistentDate` per violating descendant range.
    pub fn check(&self, descendants: &[DescendantDates]) -> Vec<Finding> {
        descendants
            .iter()
            .flat_map(|descendant| {
                descendant
                    .ranges
                    .iter()
                    .filter(|range| !self.is_consistent(range))
                    .map(|range| Finding::InconsistentDate {
                        record: descendant.id.clone(),
                        range: range.to_string(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(earliest: &str, latest: &str) -> DateRange {
        DateRange::new(Some(date(earliest)), Some(date(latest)))
    }

    #[test]
    fn test_parse_single_and_range() {
        assert_eq!(DateRange::parse("2015-01-05"), range("2015-01-05", "2015-01-05"));
        assert_eq!(
            DateRange::parse("2015-01-05/2015-01-13"),
            range("2015-01-05", "2015-01-13")
        );
        assert_eq!(
            DateRange::parse("2015-01-01/2015-06-01/2015-12-31"),
            range("2015-01-01", "2015-12-31")
        );
    }

    #[test]
    fn test_parse_unparsable_bounds_are_absent() {
        let open = DateRange::parse("2015-01-05/");
        assert_eq!(open.earliest, Some(date("2015-01-05")));
        assert_eq!(open.latest, None);

        assert!(DateRange::parse("").is_unbounded());
        assert!(DateRange::parse("1915").is_unbounded());
        assert!(DateRange::parse("2015-02-30").is_unbounded());
        assert!(DateRange::parse(" 2015-01-05").is_unbounded());
    }

    #[test]
    fn test_reversed_range_kept() {
        let reversed = DateRange::parse("2015-12-31/2015-01-01");

        assert_eq!(reversed.earliest, Some(date("2015-12-31")));
        assert_eq!(reversed.latest, Some(date("2015-01-01")));
    }

    #[test]
    fn test_is_future() {
        let today = date("2024-06-01");

        assert!(!range("2015-01-01", "2024-06-01").is_future(today));
        assert!(range("2015-01-01", "2024-06-02").is_future(today));
        assert!(DateRange::new(Some(date("2030-01-01")), None).is_future(today));
        assert!(!DateRange::default().is_future(today));
    }

    #[test]
    fn test_consistency_example() {
        let ancestor = [range("2015-01-01", "2015-01-15")];
        let checker = DateConsistencyChecker::new(&ancestor);

        let inside = DescendantDates::new("A-1", vec![range("2015-01-05", "2015-01-13")]);
        assert!(checker.check(&[inside]).is_empty());

        let findings = checker.check(&[DescendantDates::new(
            "A-2",
            vec![range("2015-01-05", "2015-01-17")],
        )]);
        assert_eq!(
            findings,
            vec![Finding::InconsistentDate {
                record: "A-2".into(),
                range: "2015-01-05/2015-01-17".into()
            }]
        );
    }

    #[test]
    fn test_any_ancestor_range_suffices() {
        let ancestor = [range("1900-01-01", "1910-12-31"), range("1950-01-01", "1960-12-31")];
        let checker = DateConsistencyChecker::new(&ancestor);

        assert!(checker.is_consistent(&range("1955-01-01", "1956-01-01")));
        assert!(!checker.is_consistent(&range("1905-01-01", "1955-01-01")));
    }

    #[test]
    fn test_absent_bounds_do_not_constrain() {
        let ancestor = [DateRange::new(Some(date("1900-01-01")), None)];
        let checker = DateConsistencyChecker::new(&ancestor);

        assert!(checker.is_consistent(&range("1950-01-01", "2000-01-01")));
        assert!(checker.is_consistent(&DateRange::default()));
        assert!(!checker.is_consistent(&DateRange::new(Some(date("1850-01-01")), None)));
    }

    #[test]
    fn test_reversed_ranges_compared_literally() {
        let ancestor = [range("2015-01-01", "2015-01-15")];
        let checker = DateConsistencyChecker::new(&ancestor);

        assert!(checker.is_consistent(&DateRange::parse("2015-01-13/2015-01-05")));
        // each bound only meets its own side of the ancestor
        assert!(checker.is_consistent(&DateRange::parse("2015-02-01/2015-01-10")));

        let findings = checker.check(&[DescendantDates::new(
            "A-3",
            vec![
                DateRange::parse("2015-01-13/2015-01-05"),
                DateRange::parse("2014-12-31/2014-12-01"),
            ],
        )]);
        assert_eq!(
            findings,
            vec![Finding::InconsistentDate {
                record: "A-3".into(),
                range: "2014-12-31/2014-12-01".into()
            }]
        );
    }

    #[test]
    fn test_display_marks_absent_bounds() {
        assert_eq!(DateRange::new(Some(date("1900-01-01")), None).to_string(), "1900-01-01/..");
    }
}
