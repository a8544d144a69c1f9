//! End-to-end runs of the digest pipeline from saved input

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::{fixture, gazette_digest};

#[test]
fn test_dry_run_prints_digest() {
    let temp = TempDir::new().unwrap();
    gazette_digest(temp.path())
        .args(["run", "--dry-run", "--input"])
        .arg(fixture("fihrist.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("04 Şubat 2026 (Sayı: 33158)"))
        .stdout(predicate::str::contains("8 entries collected, 4 kept, 4 filtered"))
        .stdout(predicate::str::contains("Gümrük Genel Tebliği (Sıra No: 12) [HTM]"))
        .stdout(predicate::str::contains("Ankara Üniversitesi").not())
        .stdout(predicate::str::contains("Dry run: nothing sent"));
}

#[test]
fn test_dry_run_json() {
    let temp = TempDir::new().unwrap();
    let output = gazette_digest(temp.path())
        .args(["run", "--dry-run", "--json", "--input"])
        .arg(fixture("fihrist.xml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "dry_run");
    assert_eq!(json["issue"]["date"], "2026-02-04");
    assert_eq!(json["digest"]["kept"], 4);
    assert_eq!(json["digest"]["summary"]["total"], 4);
}

#[test]
fn test_include_and_suppress_flags() {
    let temp = TempDir::new().unwrap();
    let output = gazette_digest(temp.path())
        .args(["run", "--dry-run", "--json", "--include", "announcements", "--suppress", "appointment", "--input"])
        .arg(fixture("fihrist.xml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // Both notices come back, the appointment decision goes
    assert_eq!(json["digest"]["kept"], 5);
    let breakdown = json["digest"]["summary"]["breakdown"].as_array().unwrap();
    let categories: Vec<_> = breakdown.iter().map(|c| c["category"].as_str().unwrap()).collect();
    assert_eq!(categories, vec!["university", "central_bank", "appointment"]);
}

#[test]
fn test_web_index_input() {
    let temp = TempDir::new().unwrap();
    gazette_digest(temp.path())
        .args(["run", "--dry-run", "--input"])
        .arg(fixture("index.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("05 Şubat 2026 (Sayı: 33159)"))
        .stdout(predicate::str::contains("Türk Gıda Kodeksi Etiketleme Tebliği [PDF]"));
}

#[test]
fn test_send_requires_api_key() {
    let temp = TempDir::new().unwrap();
    gazette_digest(temp.path())
        .args(["run", "--to", "reader@example.com", "--input"])
        .arg(fixture("fihrist.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("SENDGRID_API_KEY"));
}

#[test]
fn test_send_requires_recipient() {
    let temp = TempDir::new().unwrap();
    gazette_digest(temp.path())
        .args(["run", "--input"])
        .arg(fixture("fihrist.xml"))
        .env("SENDGRID_API_KEY", "SG.test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No recipient configured"));
}

#[test]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    gazette_digest(temp.path())
        .args(["run", "--dry-run", "--input", "missing.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read missing.xml"));
}

#[test]
fn test_entry_without_category_is_listed() {
    let temp = TempDir::new().unwrap();
    let feed = temp.path().join("broken.xml");
    fs::write(
        &feed,
        "<?xml version=\"1.0\"?><rss><channel><title>Resmî Gazete - 04 Şubat 2026</title>\
         <item><title>Başlıksız Bir Karar</title><link>/eskiler/x.htm</link></item>\
         </channel></rss>",
    )
    .unwrap();

    gazette_digest(temp.path())
        .args(["run", "--dry-run", "--input"])
        .arg(&feed)
        .assert()
        .success()
        .stdout(predicate::str::contains("YÜRÜTME VE İDARE BÖLÜMÜ"))
        .stdout(predicate::str::contains("Başlıksız Bir Karar [HTM]"));
}

#[test]
fn test_empty_issue_succeeds_without_sending() {
    let temp = TempDir::new().unwrap();
    let feed = temp.path().join("empty.xml");
    fs::write(&feed, "<?xml version=\"1.0\"?><rss><channel><title>Resmî Gazete</title></channel></rss>").unwrap();

    gazette_digest(temp.path())
        .args(["run", "--dry-run", "--input"])
        .arg(&feed)
        .assert()
        .success()
        .stdout(predicate::str::contains("The issue lists no entries"));
}

#[test]
fn test_invalid_category_rejected() {
    let temp = TempDir::new().unwrap();
    gazette_digest(temp.path())
        .args(["run", "--dry-run", "--include", "weather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));
}
