//! Encoded Archival Description (EAD 2002) finding aids.
//!
//! Every `c` component is a record. Components are hierarchical: their
//! `level` attribute selects the configuration, and each component's unit
//! dates must contain the unit dates of all components below it.

use crate::checks::{DateConsistencyChecker, DateRange, DescendantDates};
use crate::config::{ConfigStore, FieldConfig, FieldSettings, Level, LevelTable};
use crate::finding::Finding;
use crate::record::{Element, local_name};

use super::{
    FieldCatalog, FieldContext, FieldSpec, IdentifierSpec, Standard, each, required_text,
};

/// Context named in rights findings of EAD components.
const RIGHTS_CONTEXT: &str = "EAD";

/// Genre terms accepted as normalized `genreform` values.
const GENRES: [&str; 12] = [
    "Urkunden",
    "Siegel",
    "Amtsbücher, Register und Grundbücher",
    "Akten",
    "Karten und Pläne",
    "Plakate und Flugblätter",
    "Drucksachen",
    "Bilder",
    "Handschriften",
    "Audio-Visuelle Medien",
    "Datenbanken",
    "Sonstiges",
];

/// The EAD standard.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ead;

impl Standard for Ead {
    const NAME: &'static str = "ead";

    fn default_config() -> ConfigStore {
        ConfigStore::new()
            .with_field(
                "unittitle",
                levels([true; 6], |config, level| {
                    let min = match level {
                        Level::Class | Level::Series => 1,
                        _ => 2,
                    };
                    config.with_min_word_num(min)
                }),
            )
            .with_field("unitdate", levels(MAIN_LEVELS, |c, _| c))
            .with_field(
                "abstract",
                levels(MAIN_LEVELS, |c, _| c.with_min_word_num(10)),
            )
            .with_field(
                "genreform",
                levels(MAIN_LEVELS, |c, _| c).with_vocabulary(GENRES),
            )
            .with_field("dimensions", levels(MAIN_LEVELS, |c, _| c))
            .with_field("extent", levels(MAIN_LEVELS, |c, _| c))
            .with_field(
                "scopecontent",
                levels([true, false, false, true, false, true], |c, level| {
                    let min = if level == Level::Collection { 100 } else { 10 };
                    c.with_min_word_num(min)
                }),
            )
            .with_field(
                "origination",
                levels(MAIN_LEVELS, |c, _| c.with_reference(true)),
            )
            .with_field("materialspec", levels(MAIN_LEVELS, |c, _| c))
            .with_field("language", levels(MAIN_LEVELS, |c, _| c))
            .with_field(
                "digital_archival_object",
                levels([false, false, false, false, true, true], |c, _| c),
            )
            .with_field(
                "index",
                levels(MAIN_LEVELS, |c, level| {
                    let min = if level == Level::Collection { 5 } else { 3 };
                    c.with_reference(true).with_min_num(min)
                }),
            )
            .with_field(
                "userestrict",
                levels(MAIN_LEVELS, |c, _| c.with_reference(true)),
            )
    }
}

/// Inspected on collection, file, item and unknown levels.
const MAIN_LEVELS: [bool; 6] = [true, false, false, true, true, true];

/// Level table from inspect flags in `Level::ALL` order.
fn levels(
    inspect: [bool; 6],
    build: impl Fn(FieldConfig, Level) -> FieldConfig,
) -> FieldSettings {
    let table = Level::ALL
        .into_iter()
        .zip(inspect)
        .fold(LevelTable::new(FieldConfig::new(true)), |table, (level, flag)| {
            table.with_level(level, build(FieldConfig::new(flag), level))
        });
    FieldSettings::levelled(table)
}

impl<E: Element> FieldCatalog<E> for Ead {
    fn records(&self, document: &E) -> Vec<E> {
        document.descendants("c")
    }

    fn level(&self, record: &E) -> Level {
        Level::from_attr(&record.attr_or_empty("level"))
    }

    fn identifiers(&self) -> Vec<IdentifierSpec<E>> {
        vec![
            IdentifierSpec {
                column: "id",
                extract: |c| c.attr("id"),
            },
            IdentifierSpec {
                column: "unitid",
                extract: |c| c.find("did/unitid").and_then(|u| u.text()),
            },
        ]
    }

    fn fields(&self) -> Vec<FieldSpec<E>> {
        vec![
            field("unittitle", unittitle::<E>),
            field("unitdate", unitdate::<E>),
            field("abstract", abstract_text::<E>),
            field("genreform", genreform::<E>),
            field("dimensions", |ctx| {
                required_text(&ctx.record.text_at("did/physdesc/dimensions"))
            }),
            field("extent", |ctx| {
                required_text(&ctx.record.text_at("did/physdesc/extent"))
            }),
            field("scopecontent", scopecontent::<E>),
            field("origination", origination::<E>),
            field("materialspec", |ctx| {
                required_text(&ctx.record.text_at("did/materialspec"))
            }),
            field("language", language::<E>),
            field("digital_archival_object", digital_archival_objects::<E>),
            field("index", index::<E>),
            field("userestrict", userestrict::<E>),
        ]
    }
}

fn field<E>(
    name: &'static str,
    check: fn(&FieldContext<'_, E>) -> Vec<Finding>,
) -> FieldSpec<E> {
    FieldSpec {
        column: name,
        config_key: name,
        check,
    }
}

fn text_field<E: Element>(ctx: &FieldContext<'_, E>, path: &str) -> Vec<Finding> {
    ctx.text().check(&ctx.record.text_at(path)).unwrap_or_default()
}

fn unittitle<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    text_field(ctx, "did/unittitle")
}

fn abstract_text<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    text_field(ctx, "did/abstract")
}

fn scopecontent<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let text = ctx
        .record
        .find_all("scopecontent/*")
        .iter()
        .filter_map(|paragraph| paragraph.text())
        .map(|text| text.trim().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    ctx.text().check(&text).unwrap_or_default()
}

/// Normalized ranges of a component's own unit dates.
fn unit_date_ranges<E: Element>(component: &E) -> Vec<DateRange> {
    component
        .find_all("did/unitdate")
        .iter()
        .map(|date| DateRange::parse(&date.attr_or_empty("normal")))
        .collect()
}

fn unitdate<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let dates = ctx.record.find_all("did/unitdate");
    if dates.is_empty() {
        return vec![Finding::MissingInfo];
    }

    let mut findings = Vec::new();
    for date in &dates {
        let normal = date.attr_or_empty("normal");
        let range = DateRange::parse(&normal);
        if !range.is_complete() {
            findings.push(Finding::MissingNormalizedDate {
                text: date.text_or_empty(),
            });
        }
        if range.is_future(ctx.today()) {
            findings.push(Finding::DateInFuture { date: normal });
        }
    }

    let own = unit_date_ranges(ctx.record);
    let descendants: Vec<DescendantDates> = ctx
        .record
        .descendants("c")
        .iter()
        .filter_map(|sub| {
            let unitid = sub.text_at("did/unitid");
            (!unitid.is_empty()).then(|| DescendantDates::new(unitid, unit_date_ranges(sub)))
        })
        .collect();
    findings.extend(DateConsistencyChecker::new(&own).check(&descendants));

    findings
}

fn genreform<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let genreform = ctx.record.find("did/physdesc/genreform");
    let normal = genreform
        .as_ref()
        .map(|g| g.attr_or_empty("normal"))
        .unwrap_or_default();
    let text = genreform
        .as_ref()
        .map(|g| g.text_or_empty())
        .unwrap_or_default();

    if normal.is_empty() && text.is_empty() {
        return vec![Finding::MissingInfo];
    }
    let known = ctx
        .vocabulary()
        .is_none_or(|terms| terms.iter().any(|term| *term == normal));
    if normal.is_empty() || !known {
        let term = if normal.is_empty() { text } else { normal };
        return vec![Finding::MissingNormalizedTerm { term }];
    }
    Vec::new()
}

fn origination<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    each(&ctx.record.find_all("did/origination"), |origination| {
        let children = origination.children();
        let name = match children.into_iter().next() {
            Some(name) => name,
            None if origination.has_text() => origination.clone(),
            None => return vec![Finding::empty_element("origination")],
        };
        if !name.has_text() {
            return vec![Finding::empty_element(local_name(name.name()))];
        }
        ctx.entity()
            .validate(&name.text_or_empty(), &name.attr_or_empty("authfilenumber"))
    })
}

fn language<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let Some(language) = ctx
        .record
        .find("did/langmaterial/language")
        .filter(|l| l.has_text())
    else {
        return vec![Finding::MissingInfo];
    };
    if language.attr("langcode").is_none() {
        return vec![Finding::MissingLanguageCode];
    }
    Vec::new()
}

fn digital_archival_objects<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    each(&ctx.record.find_all("daogrp"), |daogrp| {
        if !daogrp.has_children() {
            return vec![Finding::empty_element("daogrp")];
        }
        let href = daogrp
            .find("daoloc")
            .and_then(|daoloc| daoloc.attr("href"));
        if href.is_none() {
            return vec![Finding::MissingLink];
        }
        Vec::new()
    })
}

fn index<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let entries = ctx.record.find_all("index/indexentry");
    let mut findings = each(&entries, |entry| {
        let Some(term) = entry.children().into_iter().next() else {
            return vec![Finding::empty_element("indexentry")];
        };
        if !term.has_text() {
            return vec![Finding::empty_element(local_name(term.name()))];
        }
        ctx.entity()
            .validate(&term.text_or_empty(), &term.attr_or_empty("authfilenumber"))
    });

    if let Some(minimum) = ctx.config.min_num {
        if !entries.is_empty() && entries.len() < minimum {
            findings.push(Finding::TooFewEntries {
                found: entries.len(),
                minimum,
            });
        }
    }
    findings
}

/// The `extref` of the first `userestrict` with `type="ead"` below `parent`.
fn rights_reference<E: Element>(parent: &E) -> Option<E> {
    parent
        .find_all("userestrict")
        .into_iter()
        .find(|restriction| restriction.attr("type").as_deref() == Some("ead"))
        .and_then(|restriction| restriction.find_descendant("extref"))
}

fn archdesc<E: Element>(document: &E) -> Option<E> {
    document
        .find("*/archdesc")
        .or_else(|| document.find("archdesc"))
        .or_else(|| document.find_descendant("archdesc"))
}

fn userestrict<E: Element>(ctx: &FieldContext<'_, E>) -> Vec<Finding> {
    let documented = |extref: Option<E>| {
        extref.is_some_and(|e| e.has_text() || e.attr("href").is_some())
    };
    let own = rights_reference(ctx.record);
    let inherited = archdesc(ctx.document()).and_then(|a| rights_reference(&a));

    if documented(own) || documented(inherited) {
        Vec::new()
    } else {
        vec![Finding::MissingRightsStatement {
            context: RIGHTS_CONTEXT.to_string(),
        }]
    }
}
