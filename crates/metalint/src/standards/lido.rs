//! LIDO (Lightweight Information Describing Objects) museum records.
//!
//! Every `lido` element is a record. Records are flat; cross-record checks
//! (title and description uniqueness) work on the whole batch.

use crate::checks::{DateRange, EventSummarizer, parse_iso_date};
use crate::config::{ConfigStore, FieldConfig, FieldSettings};
use crate::finding::Finding;
use crate::record::Element;

use super::{
    FieldCatalog, FieldContext, FieldSpec, IdentifierSpec, Standard, UniqueSpec, each,
};

const TITLE_SET: &str = "descriptiveMetadata/objectIdentificationWrap/titleWrap/titleSet";
const DESCRIPTION_SET: &str =
    "descriptiveMetadata/objectIdentificationWrap/objectDescriptionWrap/objectDescriptionSet";
const OBJECT_WORK_TYPE: &str =
    "descriptiveMetadata/objectClassificationWrap/objectWorkTypeWrap/objectWorkType";
const CLASSIFICATION: &str =
    "descriptiveMetadata/objectClassificationWrap/classificationWrap/classification";
const REPOSITORY_SET: &str =
    "descriptiveMetadata/objectIdentificationWrap/repositoryWrap/repositorySet";
const MEASUREMENTS_SET: &str = "descriptiveMetadata/objectIdentificationWrap/objectMeasurementsWrap/objectMeasurementsSet/objectMeasurements/measurementsSet";
const EVENT: &str = "descriptiveMetadata/eventWrap/eventSet/event";
const SUBJECT_CONCEPT: &str =
    "descriptiveMetadata/objectRelationWrap/subjectWrap/subjectSet/subject/subjectConcept";
const RESOURCE_SET: &str = "administrativeMetadata/resourceWrap/resourceSet";
const RECORD_WRAP: &str = "administrativeMetadata/recordWrap";

/// Event type exempt from actor, place and date checks.
const UNSPECIFIED_EVENT: &str = "Event (non-specified)";

/// Event type reported when the record metadata date is missing.
const METADATA_DATE_TYPE: &str = "http://terminology.lido-schema.org/lido00472";

const MATERIAL_TYPES: [&str; 4] = [
    "http://terminology.lido-schema.org/lido00132",
    "material",
    "materials",
    "substances",
];

const TECHNIQUE_TYPES: [&str; 5] = [
    "http://terminology.lido-schema.org/lido00131",
    "technique",
    "methods",
    "technik",
    "entstehungsmethode",
];

/// The LIDO standard.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lido;

impl Standard for Lido {
    const NAME: &'static str = "lido";

    fn default_config() -> ConfigStore {
        let referenced = || FieldSettings::flat(FieldConfig::new(true).with_reference(true));
        let plain = || FieldSettings::flat(FieldConfig::new(true));

        ConfigStore::new()
            .with_field(
                "title",
                FieldSettings::flat(
                    FieldConfig::new(true)
                        .with_unique(true)
                        .with_distinct_from_type(true)
                        .with_min_word_num(2)
                        .with_max_word_num(20),
                ),
            )
            .with_field("category", referenced())
            .with_field("object_work_type", referenced())
            .with_field("classification", referenced())
            .with_field(
                "object_description",
                FieldSettings::flat(
                    FieldConfig::new(true)
                        .with_unique(true)
                        .with_min_word_num(20)
                        .with_max_word_num(500),
                ),
            )
            .with_field(
                "materials_tech",
                FieldSettings::flat(
                    FieldConfig::new(true)
                        .with_reference(true)
                        .with_differentiated(false),
                ),
            )
            .with_field("object_measurements", plain())
            .with_field("event", referenced())
            .with_field(
                "subject_concept",
                FieldSettings::flat(FieldConfig::new(true).with_reference(true).with_min_num(3)),
            )
            .with_field("resource", plain())
            .with_field("record_type", referenced())
            .with_field("repository_name", referenced())
            .with_field("record_source", referenced())
            .with_field("record_rights", referenced())
            .with_field("record_info", plain())
    }
}

impl<E: Element> FieldCatalog<E> for Lido {
    fn records(&self, document: &E) -> Vec<E> {
        document.descendants("lido")
    }

    fn identifiers(&self) -> Vec<IdentifierSpec<E>> {
        vec![
            IdentifierSpec {
                column: "lidoRecID",
                extract: |record| record.find("lidoRecID").and_then(|id| id.text()),
            },
            IdentifierSpec {
                column: "workID",
                extract: |record| {
                    record
                        .find(&format!("{}/workID", REPOSITORY_SET))
                        .and_then(|id| id.text())
                },
            },
        ]
    }

    fn fields(&self) -> Vec<FieldSpec<E>> {
        vec![
            field("title", "title", title::<E>),
            field("category", "category", |ctx| {
                concepts(ctx, &ctx.record.find_all("category"))
            }),
            field("objectWorkType", "object_work_type", |ctx| {
                concepts(ctx, &ctx.record.find_all(OBJECT_WORK_TYPE))
            }),
            field("classification", "classification", |ctx| {
                concepts(ctx, &ctx.record.find_all(CLASSIFICATION))
            }),
            field("objectDescription", "object_description", object_description::<E>),
            field("materialsTech", "materials_tech", materials_tech::<E>),
            field("objectMeasurements", "object_measurements", measurements::<E>),
            field("event", "event", events::<E>),
            field("subjectConcept", "subject_concept", |ctx| {
                concepts(ctx, &ctx.record.find_all(SUBJECT_CONCEPT))
            }),
            field("resourceSet", "resource", resources::<E>),
            field("recordType", "record_type", record_type::<E>),
            field("repositoryName", "repository_name", repository_name::<E>),
            field("recordSource", "record_source", record_sources::<E>),
            field("recordRights", "record_rights", |ctx| {
                let path = format!("{}/recordRights/rightsType", RECORD_WRAP);
                concepts(ctx, &ctx.record.find_all(&path))
            }),
            field("recordInfoSet", "record_info", record_info::<E>),
        ]
    }

    fn unique_projections(&self) -> Vec<UniqueSpec<E>> {
        vec![
            UniqueSpec {
                config_key: "title",
                project: |record| {
                    record
                        .find(TITLE_SET)
                        .map(|set| value(&set))
                        .unwrap_or_default()
                },
            },
            UniqueSpec {
                config_key: "object_description",
                project: |record| {
                    record
                        .find(DESCRIPTION_SET)
                        .map(|set| value(&set))
                        .unwrap_or_default()
                },
            },
        ]
    }
}

fn field<E>(
    column: &'static str,
    config_key: &'static str,
    check: fn(&FieldContext<'_, E>) -> Vec<Finding>,
) -> FieldSpec<E> {
    FieldSpec {
        column,
        config_key,
        check,
    }
}

/// Appellation or descriptive note of a text set.
fn value<E: Element>(parent: &E) -> String {
    if !parent.has_children() {
        return String::new();
    }
    parent
        .find_descendant("appellationValue")
        .and_then(|v| v.text())
        .unwrap_or_else(|| parent.text_at("descriptiveNoteValue"))
}

/// Term or preferred label of a concept.
fn term<E: Element>(parent: &E) -> String {
    if !parent.has_children() {
        return String::new();
    }
    parent
        .find("term")
        .and_then(|t| t.text())
        .or_else(|| parent.find_descendant("prefLabel").and_then(|l| l.text()))
        .unwrap_or_default()
}

/// Concept ID or the `about` URI of an embedded SKOS concept.
fn concept_id<E: Element>(parent: &E) -> String {
    if !parent.has_children() {
        return String::new();
    }
    parent
        .find("conceptID")
        .and_then(|id| id.text())
        .or_else(|| parent.find("Concept").and_then(|c| c.attr("about")))
        .unwrap_or_default()
}

/// Text of a named child, empty unless the parent has children.
fn child_text<E: Element>(parent: &E, name: &str) -> String {
    if parent.has_children() {
        parent.text_at(name)
    } else {
        String::new()
    }
}

fn concept<E: Element>(ctx: &FieldContext<'_, E>, concept: &E) -> Vec<Finding> {
    if !concept.has_children() {
        return vec![Finding::MissingInfo];
    }
    ctx.entity().validate(&term(concept), &concept_id(concept))
}

fn concepts<E: Element>(ctx: &FieldContext<'_, E>, list: &[E]) -> Vec<Finding> {
    let mut findings = each(list, |c| concept(ctx, c));
    if let Some(minimum) = ctx.config.min_num {
        if !list.is_empty() && list.len() < minimum {
            findings.push(Finding::TooFewEntries {
                found: list.len(),
                minimum,
            });
        }
    }
    findings
}

/// Value of a text set, or `None` when the set is missing or empty.
fn set_value<E: Element>(record: &E, path: &str) -> Option<String> {
    record
        .find(path)
        .map(|set| value(&set))
        .filter(|v| !v.is_empty())
}

fn title<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let Some(title) = set_value(ctx.record, TITLE_SET) else {
        return vec![Finding::MissingInfo];
    };
    let work_type = ctx
        .record
        .find(OBJECT_WORK_TYPE)
        .map(|t| term(&t))
        .unwrap_or_default();

    let mut checker = ctx.text().distinct_from(&work_type);
    if let Some(duplicates) = ctx.duplicates("title") {
        checker = checker.with_duplicates(duplicates);
    }
    checker.check(&title).unwrap_or_default()
}

fn object_description<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let Some(description) = set_value(ctx.record, DESCRIPTION_SET) else {
        return vec![Finding::MissingInfo];
    };

    let mut checker = ctx.text();
    if let Some(duplicates) = ctx.duplicates("object_description") {
        checker = checker.with_duplicates(duplicates);
    }
    let mut findings = checker.check(&description).unwrap_or_default();

    if ctx.config.is_unique() && set_value(ctx.record, TITLE_SET).as_ref() == Some(&description) {
        findings.push(Finding::DuplicateText);
    }
    findings
}

fn has_type_in<E: Element>(terms: &[E], accepted: &[&str]) -> bool {
    terms.iter().any(|term| {
        let kind = term.attr_or_empty("type").to_lowercase();
        accepted.contains(&kind.as_str())
    })
}

fn materials_tech<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let terms: Vec<E> = ctx
        .record
        .descendants("materialsTech")
        .iter()
        .flat_map(|m| m.find_all("termMaterialsTech"))
        .collect();

    let mut findings = concepts(ctx, &terms);
    if !ctx.config.is_differentiated() || findings.contains(&Finding::MissingInfo) {
        return findings;
    }
    if !has_type_in(&terms, &MATERIAL_TYPES) {
        findings.push(Finding::MissingExplicitMaterial);
    }
    if !has_type_in(&terms, &TECHNIQUE_TYPES) {
        findings.push(Finding::MissingExplicitTechnique);
    }
    findings
}

fn measurements<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    each(&ctx.record.find_all(MEASUREMENTS_SET), |set| {
        if !set.has_children() {
            return vec![Finding::empty_element("measurementsSet")];
        }
        let measurement_type = set
            .find("measurementType")
            .map(|t| t.text().unwrap_or_else(|| concept_id(&t)))
            .unwrap_or_default();
        let unit = set.find("measurementUnit");

        let mut findings = Vec::new();
        if measurement_type.is_empty() {
            findings.push(Finding::MissingMeasurementType);
        }
        if !unit.is_some_and(|u| u.has_text() || u.has_children()) {
            findings.push(Finding::MissingMeasurementUnit {
                measurement_type: measurement_type.clone(),
            });
        }
        if set.text_at("measurementValue").is_empty() {
            findings.push(Finding::MissingMeasurementValue { measurement_type });
        }
        findings
    })
}

/// Entities of an event (actors or places): a missing list or an empty
/// entry is a gap of the event.
fn participants<E: Element>(
    ctx: &FieldContext<'_, E>,
    entries: &[E],
    id_element: &str,
    gap: fn(&str) -> Finding,
    event_type: &str,
) -> Vec<Finding> {
    if entries.is_empty() {
        return vec![gap(event_type)];
    }
    entries
        .iter()
        .flat_map(|entry| {
            if !entry.has_children() {
                return vec![gap(event_type)];
            }
            ctx.entity()
                .validate(&value(entry), &child_text(entry, id_element))
        })
        .collect()
}

fn event_date<E: Element>(
    ctx: &FieldContext<'_, E>,
    date: Option<E>,
    event_type: &str,
) -> Vec<Finding> {
    let Some(date) = date.filter(|d| d.has_children()) else {
        return vec![Finding::missing_date(event_type)];
    };

    let earliest = date.text_at("earliestDate");
    let latest = date.text_at("latestDate");
    let mut findings = Vec::new();
    if earliest.is_empty() {
        findings.push(Finding::MissingEarliestDate {
            event_type: event_type.to_string(),
        });
    }
    if latest.is_empty() {
        findings.push(Finding::MissingLatestDate {
            event_type: event_type.to_string(),
        });
    }

    let range = DateRange::new(parse_iso_date(&earliest), parse_iso_date(&latest));
    if range.is_future(ctx.today()) {
        findings.push(Finding::DateInFuture {
            date: range.to_string(),
        });
    }
    findings
}

fn event<E: Element>(ctx: &FieldContext<'_, E>, event: &E) -> Vec<Finding> {
    if !event.has_children() {
        return vec![Finding::empty_element("event")];
    }

    let event_type = event.find("eventType");
    let type_term = event_type.as_ref().map(term).unwrap_or_default();

    let mut findings = match event_type.filter(|t| t.has_children()) {
        Some(event_type) => concept(ctx, &event_type),
        None => vec![Finding::MissingEventType],
    };

    if type_term != UNSPECIFIED_EVENT {
        findings.extend(participants(
            ctx,
            &event.find_all("eventActor/actorInRole/actor"),
            "actorID",
            |t| Finding::missing_actor(t),
            &type_term,
        ));
        findings.extend(participants(
            ctx,
            &event.find_all("eventPlace/place"),
            "placeID",
            |t| Finding::missing_place(t),
            &type_term,
        ));
        findings.extend(event_date(ctx, event.find("eventDate/date"), &type_term));
    }

    EventSummarizer::summarize(findings, &type_term)
}

fn events<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    each(&ctx.record.find_all(EVENT), |e| event(ctx, e))
}

fn resources<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    each(&ctx.record.find_all(RESOURCE_SET), |set| {
        if !set.has_children() {
            return vec![Finding::empty_element("resourceSet")];
        }
        let link = set.text_at("resourceRepresentation/linkResource");

        let mut findings = Vec::new();
        if link.is_empty() {
            findings.push(Finding::MissingLink);
        }
        if set.text_at("rightsResource/rightsType/term").is_empty() {
            findings.push(Finding::MissingRightsStatement {
                context: link.clone(),
            });
        }
        if set.text_at("resourceType/term").is_empty() {
            findings.push(Finding::MissingResourceType { context: link });
        }
        findings
    })
}

fn record_type<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    match ctx.record.find(&format!("{}/recordType", RECORD_WRAP)) {
        Some(record_type) => concept(ctx, &record_type),
        None => vec![Finding::MissingInfo],
    }
}

/// Name of a legal body with its `legalBodyID`.
fn legal_body<E: Element>(ctx: &FieldContext<'_, E>, body: &E) -> Vec<Finding> {
    ctx.entity()
        .validate(&value(body), &child_text(body, "legalBodyID"))
}

fn repository_name<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    match ctx
        .record
        .find(&format!("{}/repositoryName", REPOSITORY_SET))
        .filter(|name| name.has_children())
    {
        Some(name) => legal_body(ctx, &name),
        None => vec![Finding::MissingInfo],
    }
}

fn record_sources<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let sources = ctx
        .record
        .find_all(&format!("{}/recordSource", RECORD_WRAP));
    each(&sources, |source| {
        if !source.has_children() {
            return vec![Finding::empty_element("recordSource")];
        }
        legal_body(ctx, source)
    })
}

fn record_info<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let Some(info) = ctx
        .record
        .find(&format!("{}/recordInfoSet", RECORD_WRAP))
        .filter(|info| info.has_children())
    else {
        return vec![Finding::MissingInfo];
    };

    let mut findings = Vec::new();
    if !info.find("recordInfoLink").is_some_and(|l| l.has_text()) {
        findings.push(Finding::MissingLink);
    }
    if !info.find("recordMetadataDate").is_some_and(|d| d.has_text()) {
        findings.push(Finding::missing_date(METADATA_DATE_TYPE));
    }
    findings
}
