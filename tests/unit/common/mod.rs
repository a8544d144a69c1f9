//! Shared test fixtures and helpers
//!
//! Entry builders, a sample issue, and mock implementations of the port
//! traits that record what they were asked to do.

use std::cell::RefCell;

use chrono::NaiveDate;
use gazette_digest::core::models::{Entry, Gazette, IssueInfo, Section};
use gazette_digest::core::ports::{GazetteSource, Notifier};
use gazette_digest::core::services::Digest;

/// Build an entry with a predictable link
pub fn entry(title: &str, section: Section) -> Entry {
    let slug: String = title.chars().filter(char::is_ascii_alphanumeric).take(24).collect();
    Entry::new(title, section, format!("https://www.resmigazete.gov.tr/eskiler/2026/02/{slug}.htm"))
}

/// Build an entry with a subsection label
pub fn entry_in(title: &str, section: Section, subsection: &str) -> Entry {
    entry(title, section).with_subsection(subsection)
}

/// Issue metadata for 4 February 2026, issue 33158
pub fn issue() -> IssueInfo {
    IssueInfo {
        date: NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
        number: Some(33158),
        url: "https://www.resmigazete.gov.tr".to_string(),
    }
}

/// A realistic mixed issue
///
/// Kept under the default configuration: the law, the privatization
/// decision, the customs communiqué and the appointment decision.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        entry("Vergi Usul Kanunu ile Bazı Kanunlarda Değişiklik Yapılmasına Dair Kanun", Section::Legislative),
        entry_in("Özelleştirme İdaresi Başkanlığına Ait Karar", Section::Administrative, "KARARLAR"),
        entry_in("Gümrük Genel Tebliği (Sıra No: 12)", Section::Administrative, "TEBLİĞLER"),
        entry_in("Ankara Üniversitesi Önlisans ve Lisans Eğitim Yönetmeliği", Section::Administrative, "YÖNETMELİKLER"),
        entry_in("Hacettepe Üniversitesi Lisansüstü Eğitim Yönetmeliği", Section::Administrative, "YÖNETMELİKLER"),
        entry("Türkiye Cumhuriyet Merkez Bankasınca Belirlenen Döviz Kurları", Section::Administrative),
        entry_in("Bakanlıklarda Atama Kararları", Section::Administrative, "ATAMA KARARLARI"),
        entry("İstanbul 3. Asliye Ticaret Mahkemesi İflas İlanı", Section::JudicialNotices),
        entry("Karayolları Genel Müdürlüğü Asfalt İhalesi", Section::TenderNotices),
        entry("Gebze Teknik Üniversitesi Öğretim Üyesi Alım İlanı", Section::MiscellaneousNotices),
    ]
}

/// Gazette source returning a fixed issue
pub struct MockSource {
    gazette: Option<Gazette>,
    calls: RefCell<usize>,
}

impl MockSource {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            gazette: Some(Gazette {
                issue: issue(),
                entries,
            }),
            calls: RefCell::new(0),
        }
    }

    /// A source whose fetch always fails
    pub fn failing() -> Self {
        Self {
            gazette: None,
            calls: RefCell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl GazetteSource for MockSource {
    fn fetch(&self) -> anyhow::Result<Gazette> {
        *self.calls.borrow_mut() += 1;
        self.gazette.clone().ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// Notifier that records every digest it is handed
pub struct MockNotifier {
    sent: RefCell<Vec<(IssueInfo, Digest)>>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    /// A notifier whose delivery always fails
    pub fn failing() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(IssueInfo, Digest)> {
        self.sent.borrow().clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for MockNotifier {
    fn send(&self, issue: &IssueInfo, digest: &Digest) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("SendGrid rejected the message (401 Unauthorized)");
        }
        self.sent.borrow_mut().push((issue.clone(), digest.clone()));
        Ok(())
    }

    fn recipient(&self) -> &str {
        "reader@example.com"
    }
}
