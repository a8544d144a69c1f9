//! Email rendering for a finished digest
//!
//! Produces the subject line, an HTML body and a plain-text alternative.
//! Every piece of gazette text is escaped before it lands in markup.

use std::fmt::Write as _;

use crate::core::models::{DocType, IssueInfo, Section};
use crate::core::services::Digest;

const ACCENT: &str = "#c41e3a";

/// Subject line, e.g. "Resmi Gazete - 04 Şubat 2026 (Sayı: 33158)"
#[must_use]
pub fn subject(issue: &IssueInfo) -> String {
    format!("Resmi Gazete - {} (Sayı: {})", issue.display_date(), issue.display_number())
}

/// Escape text for use in HTML content and attribute values
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Legislative | Section::Judicial => "⚖️",
        Section::Administrative => "🏛️",
        Section::Announcements | Section::MiscellaneousNotices => "📢",
        Section::JudicialNotices => "📜",
        Section::TenderNotices => "📋",
    }
}

const fn link_style(doc_type: DocType) -> (&'static str, &'static str) {
    match doc_type {
        DocType::Pdf => ("📄", "#dc3545"),
        DocType::Htm | DocType::Unknown => ("🔗", "#007bff"),
    }
}

/// HTML body
#[must_use]
pub fn render_html(issue: &IssueInfo, digest: &Digest) -> String {
    let date = escape_html(&issue.display_date());
    let number = escape_html(&issue.display_number());

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="tr">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Resmi Gazete - {date}</title>
</head>
<body style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; background-color: #f5f5f5;">
<div style="background-color: #ffffff; border-radius: 8px; padding: 30px;">
<div style="text-align: center; border-bottom: 3px solid {ACCENT}; padding-bottom: 20px; margin-bottom: 25px;">
<h1 style="color: {ACCENT}; margin: 0; font-size: 28px;">T.C. Resmi Gazete</h1>
<p style="color: #666; margin: 10px 0 0 0; font-size: 16px;">{date} | Sayı: {number}</p>
</div>
"#
    );

    let _ = write!(
        html,
        r#"<div style="background-color: #f8f9fa; border-left: 4px solid #007bff; padding: 15px; margin-bottom: 25px;">
<p style="margin: 0; color: #333;"><strong>{}</strong> içerik listeleniyor"#,
        digest.kept
    );
    if digest.summary.total > 0 {
        let _ = write!(html, r#" <span style="color: #888;">({} içerik filtrelendi)</span>"#, digest.summary.total);
    }
    html.push_str("</p>\n</div>\n");

    for section in &digest.sections {
        let _ = write!(
            html,
            r#"<div style="margin-bottom: 25px;">
<h2 style="color: #333; font-size: 18px; border-bottom: 2px solid #e9ecef; padding-bottom: 10px;">{} {}</h2>
<ul style="list-style: none; padding: 0; margin: 0;">
"#,
            section_icon(section.section),
            escape_html(&section.label)
        );
        for item in &section.items {
            let (icon, color) = link_style(item.doc_type);
            let _ = writeln!(
                html,
                r#"<li style="padding: 10px 0; border-bottom: 1px solid #f0f0f0;"><a href="{}" style="color: {color}; text-decoration: none;" target="_blank">{icon} {}</a> <span style="color: #999; font-size: 12px;">[{}]</span></li>"#,
                escape_html(&item.link),
                escape_html(&item.title),
                item.doc_type.badge()
            );
        }
        html.push_str("</ul>\n</div>\n");
    }

    if !digest.summary.breakdown.is_empty() {
        html.push_str(
            r#"<div style="background-color: #fff3cd; border: 1px solid #ffc107; border-radius: 4px; padding: 15px; margin-top: 20px;">
<h3 style="color: #856404; margin: 0 0 10px 0; font-size: 14px;">🔍 Filtrelenen İçerikler</h3>
<ul style="margin: 0; padding-left: 20px; color: #856404; font-size: 13px;">
"#,
        );
        for count in &digest.summary.breakdown {
            let _ = writeln!(html, "<li>{}: {} öğe</li>", escape_html(count.category.tag()), count.count);
        }
        html.push_str("</ul>\n</div>\n");
    }

    let _ = write!(
        html,
        r#"<div style="text-align: center; margin-top: 30px; padding-top: 20px; border-top: 1px solid #e9ecef;">
<a href="{}" style="display: inline-block; background-color: {ACCENT}; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px; font-weight: bold;">Tam Gazeteyi Görüntüle</a>
<p style="color: #999; font-size: 12px; margin-top: 20px;">Bu e-posta otomatik olarak gönderilmiştir.</p>
</div>
</div>
</body>
</html>
"#,
        escape_html(&issue.url)
    );

    html
}

/// Plain-text alternative with the same content
#[must_use]
pub fn render_text(issue: &IssueInfo, digest: &Digest) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "T.C. RESMİ GAZETE");
    let _ = writeln!(text, "{} | Sayı: {}", issue.display_date(), issue.display_number());
    let _ = writeln!(text, "{}", "=".repeat(50));
    let _ = writeln!(text, "\nToplam {} içerik", digest.kept);

    for section in &digest.sections {
        let _ = writeln!(text, "\n{}", section.label);
        let _ = writeln!(text, "{}", "-".repeat(section.label.chars().count()));
        for item in &section.items {
            let _ = writeln!(text, "• {} [{}]", item.title, item.doc_type.badge());
            let _ = writeln!(text, "  {}", item.link);
        }
    }

    if !digest.summary.breakdown.is_empty() {
        let _ = writeln!(text, "\nFiltrelenen içerikler:");
        for count in &digest.summary.breakdown {
            let _ = writeln!(text, "  - {}: {}", count.category.tag(), count.count);
        }
    }

    let _ = writeln!(text, "\nTam Gazete: {}", issue.url);
    text
}
