//! Inspection performance benchmarks.
//!
//! Measures whole-document inspection for both standards and the
//! cross-record duplicate detection on its own.

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use metalint::checks::DuplicateDetector;
use metalint::record::JsonElement;
use metalint::{Ead, Inspector, Lido};
use serde_json::{Value, json};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// LIDO records with repeated titles and partly documented events.
fn generate_lido(records: usize) -> Value {
    let titles = ["Amphora with lid", "Drinking cup", "Oil lamp", "Votive figure"];
    let items: Vec<Value> = (0..records)
        .map(|i| {
            json!({
                "lidoRecID": format!("DE-Mb112/lido-obj{:08}", i),
                "descriptiveMetadata": {
                    "objectClassificationWrap": {"objectWorkTypeWrap": {"objectWorkType": {
                        "conceptID": "http://vocab.getty.edu/aat/300198841",
                        "term": "Amphora"
                    }}},
                    "objectIdentificationWrap": {
                        "titleWrap": {"titleSet": {"appellationValue": titles[i % titles.len()]}},
                        "objectDescriptionWrap": {"objectDescriptionSet": {
                            "descriptiveNoteValue": format!("Object {} from the excavation of 1911", i)
                        }}
                    },
                    "eventWrap": {"eventSet": {"event": {
                        "eventType": {"conceptID": "lido00007", "term": "Production"},
                        "eventDate": {"date": {"earliestDate": "1520-01-01", "latestDate": "1530-12-31"}}
                    }}}
                }
            })
        })
        .collect();
    json!({"lidoWrap": {"lido": items}})
}

/// One EAD collection with `files` file-level components.
fn generate_ead(files: usize) -> Value {
    let components: Vec<Value> = (0..files)
        .map(|i| {
            let year = 1880 + (i % 80);
            json!({
                "@id": format!("file-{}", i),
                "@level": "file",
                "did": {
                    "unittitle": format!("Construction permits, district {}", i),
                    "unitid": format!("Best. 1/{}", i),
                    "unitdate": {"@normal": format!("{}-01-01/{}-12-31", year, year + 2)}
                }
            })
        })
        .collect();
    json!({"ead": {"archdesc": {"dsc": {"c": {
        "@level": "collection",
        "did": {
            "unittitle": "Records of the municipal building authority",
            "unitdate": {"@normal": "1880-01-01/1950-12-31"}
        },
        "c": components
    }}}}})
}

fn bench_lido_inspection(c: &mut Criterion) {
    let mut group = c.benchmark_group("lido_inspection");
    let inspector = Inspector::new(Lido).with_today(today());

    for records in [10, 100, 1000] {
        let doc = generate_lido(records);
        group.throughput(Throughput::Elements(records as u64));
        group.bench_with_input(BenchmarkId::new("records", records), &doc, |b, doc| {
            b.iter(|| inspector.inspect(&JsonElement::document(black_box(doc))))
        });
    }
    group.finish();
}

fn bench_ead_inspection(c: &mut Criterion) {
    let mut group = c.benchmark_group("ead_inspection");
    group.sample_size(20);
    let inspector = Inspector::new(Ead).with_today(today());

    for files in [10, 100, 500] {
        let doc = generate_ead(files);
        group.throughput(Throughput::Elements(files as u64 + 1));
        group.bench_with_input(BenchmarkId::new("files", files), &doc, |b, doc| {
            b.iter(|| inspector.inspect(&JsonElement::document(black_box(doc))))
        });
    }
    group.finish();
}

fn bench_duplicate_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicates");

    for size in [1_000, 10_000] {
        let values: Vec<String> = (0..size).map(|i| format!("Title {}", i % (size / 2))).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("values", size), &values, |b, values| {
            b.iter(|| DuplicateDetector::find_duplicates(black_box(values)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_lido_inspection,
    bench_ead_inspection,
    bench_duplicate_detection
);
criterion_main!(benches);
