//! Web index parser
//!
//! Fallback for when no feed is reachable. The daily index page prints
//! division headings in bold or heading tags, followed by links to each
//! document.

use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use crate::core::models::Gazette;

use super::index::{IndexBuilder, parse_issue_date, parse_issue_number};

static INDEX_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a, b, strong, h2, h3").unwrap_or_else(|e| panic!("invalid index selector: {e}"))
});

/// Parse the daily index page into a gazette
///
/// Only links to `.pdf` or `.htm` documents become entries. `today` is used
/// when the page does not print the issue date.
#[must_use]
pub fn parse_page(html: &str, base_url: &str, today: NaiveDate) -> Gazette {
    let document = Html::parse_document(html);

    let page_text: String = document.root_element().text().collect::<Vec<_>>().join(" ");
    let date = parse_issue_date(&page_text).unwrap_or(today);
    let number = parse_issue_number(&page_text);

    let mut index = IndexBuilder::new(base_url);
    for element in document.select(&INDEX_SELECTOR) {
        let text = text_of(element);
        if element.value().name() == "a" {
            let href = element.value().attr("href").unwrap_or_default();
            if is_document_link(href) {
                index.entry(&text, href);
            }
        } else if !inside_link(element) {
            index.heading(&text);
        }
    }

    log::debug!("Web index listed {} entries", index.len());
    index.finish(date, number)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn is_document_link(href: &str) -> bool {
    let href = href.to_lowercase();
    href.contains(".pdf") || href.contains(".htm")
}

/// Bold text inside a link is part of an entry title, not a heading
fn inside_link(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "a")
}
