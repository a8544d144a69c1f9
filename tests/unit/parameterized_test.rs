//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use chrono::NaiveDate;
use gazette_digest::adapters::resmigazete::{Heading, classify_heading, parse_issue_date, parse_issue_number};
use gazette_digest::core::models::{DropCategory, FilterConfig, Section};
use gazette_digest::core::services::{Decision, classify};
use test_case::test_case;

use crate::common::{entry, entry_in};

// =============================================================================
// Classification under the default toggles
// =============================================================================

#[test_case("Ankara Üniversitesi Önlisans Yönetmeliği", Section::Administrative, Some(DropCategory::University) ; "university regulation")]
#[test_case("ODTÜ Fen Bilimleri Enstitüsü Yönergesi", Section::Administrative, Some(DropCategory::University) ; "institute")]
#[test_case("Meslek Yüksekokulu Sınav Yönetmeliği", Section::Administrative, Some(DropCategory::University) ; "vocational school")]
#[test_case("REKTÖRLÜK Kararı", Section::Administrative, Some(DropCategory::University) ; "upper case rector")]
#[test_case("ABC Ltd. Şti. İflas İlanı", Section::JudicialNotices, Some(DropCategory::Announcement) ; "judicial notice")]
#[test_case("Asfalt Yapım İşi İhalesi", Section::TenderNotices, Some(DropCategory::Announcement) ; "tender notice")]
#[test_case("Türkiye Cumhuriyet Merkez Bankası Döviz Kurları", Section::Administrative, Some(DropCategory::CentralBank) ; "currency bulletin")]
#[test_case("Merkez Bankasınca Belirlenen Efektif Satış Kurları", Section::Administrative, Some(DropCategory::CentralBank) ; "effective rates")]
#[test_case("Merkez Bankası Kanunu", Section::Legislative, None ; "central bank law kept")]
#[test_case("Atama Kararları", Section::Administrative, None ; "appointments kept by default")]
#[test_case("Vergi Usul Kanunu", Section::Legislative, None ; "law kept")]
#[test_case("Anayasa Mahkemesi Kararı", Section::Judicial, None ; "judicial decision kept")]
fn test_default_classification(title: &str, section: Section, expected: Option<DropCategory>) {
    let decision = classify(&entry(title, section), FilterConfig::default());
    let expected = expected.map_or(Decision::Keep, Decision::Drop);
    assert_eq!(decision, expected, "title={title:?}");
}

#[test_case("Atama Kararı", "ATAMA KARARLARI", true ; "appointment decision")]
#[test_case("Milli Eğitim Bakanlığı Kadro İlanı", "", true ; "staffing call")]
#[test_case("Sözleşmeli Personel Alımı", "", true ; "contract staff")]
#[test_case("Münhal Kadro", "", true ; "vacancy")]
#[test_case("Hatalı Kayıtların Düzeltilmesi Hakkında Karar", "", false ; "word start required")]
fn test_appointment_rule(title: &str, subsection: &str, dropped: bool) {
    let config = FilterConfig::default().with(DropCategory::Appointment, true);
    let e = if subsection.is_empty() {
        entry(title, Section::Administrative)
    } else {
        entry_in(title, Section::Administrative, subsection)
    };
    assert_eq!(classify(&e, config) == Decision::Drop(DropCategory::Appointment), dropped);
}

// =============================================================================
// Category and section parsing
// =============================================================================

#[test_case("university", DropCategory::University ; "university")]
#[test_case("Universities", DropCategory::University ; "plural mixed case")]
#[test_case("announcements", DropCategory::Announcement ; "announcements")]
#[test_case("central-bank", DropCategory::CentralBank ; "kebab")]
#[test_case("central_bank", DropCategory::CentralBank ; "snake")]
#[test_case("appointment", DropCategory::Appointment ; "appointment")]
fn test_category_parse(input: &str, expected: DropCategory) {
    assert_eq!(input.parse::<DropCategory>().unwrap(), expected);
}

#[test_case("YASAMA BÖLÜMÜ", Section::Legislative ; "legislative label")]
#[test_case("yürütme ve idare bölümü", Section::Administrative ; "lower case label")]
#[test_case("YARGI İLÂNLARI", Section::JudicialNotices ; "judicial notices")]
#[test_case("ARTIRMA, EKSİLTME VE İHALE İLÂNLARI", Section::TenderNotices ; "tender label")]
#[test_case("ÇEŞİTLİ İLANLAR", Section::MiscellaneousNotices ; "without circumflex")]
fn test_section_heading(input: &str, expected: Section) {
    assert_eq!(classify_heading(input), Some(Heading::Section(expected)));
}

#[test]
fn test_unknown_names_rejected() {
    assert!("weather".parse::<DropCategory>().is_err());
    assert_eq!(classify_heading("HAVA DURUMU"), None);
}

// =============================================================================
// Issue metadata
// =============================================================================

#[test_case("Resmî Gazete - 04 Şubat 2026 - Sayı: 33158", Some((2026, 2, 4)), Some(33158) ; "feed title")]
#[test_case("1 OCAK 2026 PERŞEMBE Sayı : 33124", Some((2026, 1, 1)), Some(33124) ; "upper case page header")]
#[test_case("31 Ağustos 2025", Some((2025, 8, 31)), None ; "date only")]
#[test_case("30 Şubat 2026", None, None ; "impossible date")]
#[test_case("Resmî Gazete", None, None ; "neither")]
fn test_issue_metadata(text: &str, date: Option<(i32, u32, u32)>, number: Option<u32>) {
    let expected = date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
    assert_eq!(parse_issue_date(text), expected);
    assert_eq!(parse_issue_number(text), number);
}
