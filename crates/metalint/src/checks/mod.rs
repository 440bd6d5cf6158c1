//! Field checkers shared by all metadata standards.
//!
//! Every checker is a pure function of its input values, the field's
//! [`FieldConfig`](crate::config::FieldConfig) and, where relevant, the
//! duplicate sets precomputed for the run.

mod dates;
mod duplicates;
mod entity;
mod events;
mod text;

pub use dates::{DateConsistencyChecker, DateRange, DescendantDates, parse_iso_date};
pub use duplicates::{DuplicateDetector, DuplicateSet};
pub use entity::EntityValidator;
pub use events::EventSummarizer;
pub use text::TextQualityChecker;
