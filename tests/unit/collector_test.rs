//! Saved feed and index page through the file source

use std::path::PathBuf;

use chrono::NaiveDate;
use gazette_digest::adapters::FileSource;
use gazette_digest::adapters::resmigazete::{FALLBACK_SECTION, FALLBACK_SUBSECTION, parse_feed, parse_page};
use gazette_digest::core::models::{DocType, FilterConfig, Section};
use gazette_digest::core::ports::GazetteSource;
use gazette_digest::core::services::{build, filter};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn test_feed_fixture() {
    let gazette = FileSource::new(fixture("fihrist.xml")).fetch().unwrap();

    assert_eq!(gazette.issue.date, NaiveDate::from_ymd_opt(2026, 2, 4).unwrap());
    assert_eq!(gazette.issue.number, Some(33158));
    assert_eq!(gazette.issue.url, "https://www.resmigazete.gov.tr");
    assert_eq!(gazette.entries.len(), 8);
    assert!(gazette.entries.iter().all(|e| e.link.starts_with("https://www.resmigazete.gov.tr/")));
    assert!(gazette.entries.iter().all(|e| e.section.is_some()));

    // Sticky category: the bulletin has none of its own
    let bulletin = &gazette.entries[4];
    assert_eq!(bulletin.subsection.as_deref(), Some("TEBLİĞLER"));
    assert_eq!(bulletin.section, Some(Section::Administrative));

    assert_eq!(gazette.entries[1].doc_type, DocType::Pdf);
    assert_eq!(gazette.entries[6].section, Some(Section::JudicialNotices));
    assert_eq!(gazette.entries[7].section, Some(Section::TenderNotices));
}

#[test]
fn test_feed_fixture_digest() {
    let gazette = FileSource::new(fixture("fihrist.xml")).fetch().unwrap();
    let digest = build(&filter(gazette.entries, FilterConfig::default()).unwrap());

    assert_eq!(digest.kept, 4);
    assert_eq!(
        digest.summary.describe(),
        "4 filtered: 1 university regulation, 2 announcement-section notices, 1 central bank currency bulletin"
    );
}

#[test]
fn test_page_fixture() {
    let gazette = FileSource::new(fixture("index.html")).with_base_url("https://www.resmigazete.gov.tr").fetch().unwrap();

    assert_eq!(gazette.issue.date, NaiveDate::from_ymd_opt(2026, 2, 5).unwrap());
    assert_eq!(gazette.issue.number, Some(33159));
    assert_eq!(gazette.entries.len(), 4);
    assert_eq!(gazette.entries[2].doc_type, DocType::Pdf);
    assert_eq!(gazette.entries[2].subsection.as_deref(), Some("TEBLİĞLER"));
    assert_eq!(gazette.entries[3].section, Some(Section::MiscellaneousNotices));

    let digest = build(&filter(gazette.entries, FilterConfig::default()).unwrap());
    assert_eq!(digest.kept, 2);
    assert_eq!(digest.sections.len(), 1);
    assert_eq!(digest.sections[0].section, Section::Administrative);
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 4).unwrap()
}

#[test]
fn test_unknown_feed_category_still_filters() {
    let xml = "<?xml version=\"1.0\"?><rss><channel><title>Resmî Gazete - 04 Şubat 2026 - Sayı: 33158</title>\
               <item><title>Vergi İstisnalarına İlişkin Karar</title><link>/eskiler/2026/02/20260204-2.htm</link>\
               <category>BAKANLAR KURULU KARARLARI</category></item>\
               <item><title>Vergi Usul Kanunu Değişikliği</title><link>/eskiler/2026/02/20260204-1.htm</link>\
               <category>YASAMA BÖLÜMÜ</category></item></channel></rss>";

    let gazette = parse_feed(xml, "https://rg.test", today());
    assert!(gazette.entries.iter().all(|e| e.section.is_some()));
    assert_eq!(gazette.entries[0].section, Some(FALLBACK_SECTION));
    assert_eq!(gazette.entries[0].subsection.as_deref(), Some("BAKANLAR KURULU KARARLARI"));

    let result = filter(gazette.entries, FilterConfig::default()).unwrap();
    assert_eq!(result.kept_count(), 2);
    assert!(result.kept().any(|e| e.title == "Vergi Usul Kanunu Değişikliği"));
}

#[test]
fn test_link_before_any_heading_still_filters() {
    let html = r#"<html><body>
        <a href="/eskiler/2026/02/20260204.pdf">Tam Sayı PDF</a>
        <h3>YASAMA BÖLÜMÜ</h3>
        <a href="/eskiler/2026/02/20260204-1.htm">Vergi Usul Kanunu Değişikliği</a>
    </body></html>"#;

    let gazette = parse_page(html, "https://rg.test", today());
    assert_eq!(gazette.entries.len(), 2);
    assert!(gazette.entries.iter().all(|e| e.section.is_some()));
    assert_eq!(gazette.entries[0].subsection.as_deref(), Some(FALLBACK_SUBSECTION));

    let digest = build(&filter(gazette.entries, FilterConfig::default()).unwrap());
    assert_eq!(digest.kept, 2);
    let sections: Vec<_> = digest.sections.iter().map(|s| s.section).collect();
    assert_eq!(sections, vec![FALLBACK_SECTION, Section::Legislative]);
}
