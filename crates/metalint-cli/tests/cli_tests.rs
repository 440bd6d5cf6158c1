use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const LIDO_DOC: &str = r#"{
  "lidoWrap": {
    "lido": [
      {
        "lidoRecID": "DE-Mb112/lido-obj00154983",
        "descriptiveMetadata": {
          "objectIdentificationWrap": {
            "titleWrap": {"titleSet": {"appellationValue": "Amphora with lid"}}
          }
        }
      },
      {
        "lidoRecID": "DE-Mb112/lido-obj00154984",
        "descriptiveMetadata": {
          "objectIdentificationWrap": {
            "titleWrap": {"titleSet": {"appellationValue": "Amphora with lid"}}
          }
        }
      }
    ]
  }
}"#;

const EAD_DOC: &str = r#"{
  "ead": {
    "archdesc": {
      "@level": "collection",
      "dsc": {
        "c": {
          "@id": "c-1",
          "@level": "file",
          "did": {"unittitle": "Letters", "unitid": "A 1"}
        }
      }
    }
  }
}"#;

const EAD_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ead xmlns="urn:isbn:1-931666-22-9" xmlns:xlink="http://www.w3.org/1999/xlink">
  <archdesc level="collection">
    <userestrict type="ead">
      <p><extref xlink:href="http://rightsstatements.org/vocab/InC/1.0/"/></p>
    </userestrict>
    <dsc>
      <c id="c-1" level="file">
        <did>
          <unittitle>Letters</unittitle>
          <unitid>A 1</unitid>
        </did>
      </c>
    </dsc>
  </archdesc>
</ead>"#;

fn lido_xml(rec_id: &str, title: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<lido:lidoWrap xmlns:lido="http://www.lido-schema.org">
  <lido:lido>
    <lido:lidoRecID lido:type="local">{rec_id}</lido:lidoRecID>
    <lido:descriptiveMetadata xml:lang="en">
      <lido:objectIdentificationWrap>
        <lido:titleWrap>
          <lido:titleSet><lido:appellationValue>{title}</lido:appellationValue></lido:titleSet>
        </lido:titleWrap>
      </lido:objectIdentificationWrap>
    </lido:descriptiveMetadata>
  </lido:lido>
</lido:lidoWrap>"#
    )
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_cli_help() {
    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_cli_version() {
    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("metalint"));
}

#[test]
fn test_inspect_json_reports_duplicate_titles() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "objects.json", LIDO_DOC);

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "--standard", "lido", "--format", "json", "--today", "2024-06-01"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"standard\": \"lido\""))
        .stdout(predicate::str::contains("\"kind\": \"not_unique\""))
        .stdout(predicate::str::contains("\"inspected_on\": \"2024-06-01\""))
        .stdout(predicate::str::contains("sha256:"));
}

#[test]
fn test_inspect_csv_in_german() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "objects.json", LIDO_DOC);

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "-s", "lido", "-f", "csv", "--lang", "de", "--delimiter", ";"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lidoRecID;workID;"))
        .stdout(predicate::str::contains("nicht einzigartig"));
}

#[test]
fn test_inspect_table_lists_findings() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "finding-aid.json", EAD_DOC);

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.env("NO_COLOR", "1")
        .args(["inspect", "--standard", "ead"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("c-1 [file]"))
        .stdout(predicate::str::contains("too short"))
        .stdout(predicate::str::contains("Quality score:"));
}

#[test]
fn test_inspect_applies_config_overrides() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "objects.json", LIDO_DOC);
    let config = write_fixture(&dir, "overrides.json", r#"{"title": {"unique": false}}"#);

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "--standard", "lido", "--format", "json", "--config"])
        .arg(&config)
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("not_unique").not());
}

#[test]
fn test_inspect_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "objects.json", LIDO_DOC);
    let out = dir.path().join("report.json");

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "--standard", "lido", "--format", "json", "--flat", "--output"])
        .arg(&out)
        .arg(&doc)
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved to"));

    let written = fs::read_to_string(&out).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(2));
    assert_eq!(rows[0]["title"], serde_json::json!(["not unique"]));
}

#[test]
fn test_inspect_missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "--standard", "lido", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: File not found"));
}

#[test]
fn test_inspect_rejects_unknown_standard() {
    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "--standard", "marc", "doc.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown metadata standard"));
}

#[test]
fn test_inspect_rejects_malformed_overrides() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "objects.json", LIDO_DOC);
    let config = write_fixture(&dir, "overrides.json", "[1, 2, 3]");

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "--standard", "lido", "--config"])
        .arg(&config)
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_prints_effective_settings() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "overrides.json", r#"{"title": {"min_word_num": 5}}"#);

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["config", "lido", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"min_word_num\": 5"))
        .stdout(predicate::str::contains("\"object_description\""));
}

#[test]
fn test_config_ead_shows_levels() {
    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["config", "ead"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"_default\""))
        .stdout(predicate::str::contains("\"normal\""));
}

#[test]
fn test_inspect_ead_xml() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "finding-aid.xml", EAD_XML);

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.env("NO_COLOR", "1")
        .args(["inspect", "--standard", "ead", "--today", "2024-06-01"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("finding-aid.xml"))
        .stdout(predicate::str::contains("c-1 [file]"))
        .stdout(predicate::str::contains("too short"))
        .stdout(predicate::str::contains("missing rights statement").not());
}

#[test]
fn test_inspect_xml_detected_without_extension() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "export", &lido_xml("obj-1", "Amphora with lid"));

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "-s", "lido", "-f", "json", "--flat"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"lidoRecID\": \"obj-1\""));
}

#[test]
fn test_inspect_directory_as_one_batch() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "a.xml", &lido_xml("obj-1", "Two-handled jar"));
    write_fixture(&dir, "b.xml", &lido_xml("obj-2", "Two-handled jar"));
    write_fixture(&dir, "c.XML", &lido_xml("obj-3", "Drinking cup"));
    write_fixture(&dir, "notes.txt", "not a document");

    let mut cmd = cargo_bin_cmd!("metalint");
    let output = cmd
        .args(["inspect", "-s", "lido", "-f", "json", "--flat"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["lidoRecID"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["obj-1", "obj-2", "obj-3"]);
    assert_eq!(rows[0]["title"], serde_json::json!(["not unique"]));
    assert_eq!(rows[1]["title"], serde_json::json!(["not unique"]));
    assert_eq!(rows[2]["title"], serde_json::json!([]));
    assert_eq!(rows[0]["workID"], serde_json::json!("missing information"));
}

#[test]
fn test_inspect_directory_without_xml_fails() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "objects.json", LIDO_DOC);

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "--standard", "lido"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .xml files"));
}

#[test]
fn test_inspect_malformed_xml_names_file() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "broken.xml", "<ead><archdesc></ead>");

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "--standard", "ead"])
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.xml"));
}

#[test]
fn test_inspect_unsupported_language_uses_english() {
    let dir = TempDir::new().unwrap();
    let doc = write_fixture(&dir, "objects.json", LIDO_DOC);

    let mut cmd = cargo_bin_cmd!("metalint");
    cmd.args(["inspect", "-s", "lido", "-f", "csv", "--lang", "fr"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("not unique"));
}
