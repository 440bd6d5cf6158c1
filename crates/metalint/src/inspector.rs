//! The inspection dispatcher.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::{debug, warn};

use crate::checks::{DuplicateDetector, DuplicateSet};
use crate::config::{ConfigStore, Level};
use crate::error::Result;
use crate::record::Element;
use crate::report::{FieldResult, InspectionReport, RecordReport};
use crate::standards::{
    BatchContext, FieldCatalog, FieldContext, FieldSpec, IdentifierSpec, Standard,
};

/// Inspects documents of one metadata standard.
///
/// # Example
///
/// ```
/// use metalint::record::JsonElement;
/// use metalint::standards::Lido;
/// use metalint::Inspector;
/// use serde_json::json;
///
/// let doc = json!({"lidoWrap": {"lido": [{"lidoRecID": "DE-Mb112/lido-obj00154983"}]}});
/// let mut inspector = Inspector::new(Lido);
/// inspector.configure(&json!({"title": {"inspect": false}})).unwrap();
///
/// let report = inspector.inspect(&JsonElement::document(&doc));
/// assert_eq!(report.records.len(), 1);
/// assert!(!report.records[0].fields["title"].is_inspected());
/// ```
#[derive(Debug, Clone)]
pub struct Inspector<S> {
    standard: S,
    config: ConfigStore,
    today: Option<NaiveDate>,
}

impl<S: Standard> Inspector<S> {
    /// Create an inspector with the standard's default configuration.
    pub fn new(standard: S) -> Self {
        Self {
            standard,
            config: S::default_config(),
            today: None,
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ConfigStore) -> Self {
        self.config = config;
        self
    }

    /// Fix the reference date for future-date checks.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Apply a partial configuration override.
    pub fn configure(&mut self, overrides: &Value) -> Result<()> {
        self.config.apply_overrides(overrides)
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Inspect every record of a document.
    pub fn inspect<E>(&self, document: &E) -> InspectionReport
    where
        E: Element,
        S: FieldCatalog<E>,
    {
        self.inspect_all(std::slice::from_ref(document))
    }

    /// Inspect the records of several documents as one batch.
    ///
    /// Records keep document order, documents keep the given order, and
    /// uniqueness is judged across all of them.
    pub fn inspect_all<E>(&self, documents: &[E]) -> InspectionReport
    where
        E: Element,
        S: FieldCatalog<E>,
    {
        let records: Vec<(&E, E)> = documents
            .iter()
            .flat_map(|document| {
                self.standard
                    .records(document)
                    .into_iter()
                    .map(move |record| (document, record))
            })
            .collect();
        let identifiers = self.standard.identifiers();
        let fields = self.standard.fields();
        let today = self.today();
        debug!(
            standard = S::NAME,
            documents = documents.len(),
            records = records.len(),
            %today,
            "starting inspection"
        );

        for field in &fields {
            if self.config.field(field.config_key).is_none() {
                warn!(field = field.config_key, "field has no configuration and is skipped");
            }
        }

        let batch = BatchContext::new(
            today,
            self.duplicate_sets(records.iter().map(|(_, record)| record)),
        );
        let reports = records
            .iter()
            .map(|(document, record)| {
                self.inspect_record(record, document, &batch, &identifiers, &fields)
            })
            .collect();

        let columns = identifiers
            .iter()
            .map(|spec| spec.column)
            .chain(fields.iter().map(|spec| spec.column))
            .map(String::from)
            .collect();
        let report = InspectionReport::new(S::NAME, today, columns, reports);
        debug!(
            findings = report.summary.total_findings,
            records_with_findings = report.summary.records_with_findings,
            "inspection finished"
        );
        report
    }

    /// Duplicate sets of every projection whose field is unique on some level.
    fn duplicate_sets<'r, E, I>(&self, records: I) -> HashMap<&'static str, DuplicateSet>
    where
        E: Element + 'r,
        I: Iterator<Item = &'r E> + Clone,
        S: FieldCatalog<E>,
    {
        self.standard
            .unique_projections()
            .into_iter()
            .filter(|spec| {
                Level::ALL.into_iter().any(|level| {
                    self.config
                        .resolve(spec.config_key, level)
                        .is_some_and(|config| config.inspect && config.is_unique())
                })
            })
            .map(|spec| {
                let set = DuplicateDetector::find_duplicates(records.clone().map(spec.project));
                debug!(field = spec.config_key, duplicates = set.len(), "collected duplicates");
                (spec.config_key, set)
            })
            .collect()
    }

    fn inspect_record<E: Element>(
        &self,
        record: &E,
        document: &E,
        batch: &BatchContext,
        identifiers: &[IdentifierSpec<E>],
        fields: &[FieldSpec<E>],
    ) -> RecordReport
    where
        S: FieldCatalog<E>,
    {
        let level = self.standard.level(record);
        let identifiers = identifiers
            .iter()
            .map(|spec| (spec.column.to_string(), (spec.extract)(record)))
            .collect();

        let fields = fields
            .iter()
            .map(|spec| {
                let result = match self.config.field(spec.config_key) {
                    Some(settings) if settings.resolve(level).inspect => {
                        let ctx = FieldContext {
                            record,
                            document,
                            level,
                            config: settings.resolve(level),
                            settings,
                            batch,
                        };
                        FieldResult::from_findings((spec.check)(&ctx))
                    }
                    _ => FieldResult::NotInspected,
                };
                (spec.column.to_string(), result)
            })
            .collect();

        RecordReport {
            level,
            identifiers,
            fields,
        }
    }
}
