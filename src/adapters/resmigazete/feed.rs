//! RSS index parser
//!
//! The gazette feed is small and flat: a channel title carrying the issue
//! date and number, then one `<item>` per entry. Items carry an optional
//! `<category>` that applies to every following item until the next one.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::core::models::Gazette;

use super::index::{IndexBuilder, parse_issue_date, parse_issue_number};

static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<item\b[^>]*>(.*?)</item>").unwrap_or_else(|e| panic!("invalid item pattern: {e}"))
});

static CDATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").unwrap_or_else(|e| panic!("invalid CDATA pattern: {e}"))
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);")
        .unwrap_or_else(|e| panic!("invalid entity pattern: {e}"))
});

/// Whether `body` looks like an RSS document
#[must_use]
pub fn is_feed(body: &str) -> bool {
    let head: String = body.chars().take(512).collect::<String>().to_lowercase();
    head.contains("<rss") || (head.starts_with("<?xml") && body.contains("<channel"))
}

/// Parse a feed into a gazette
///
/// The issue date comes from the channel title; `today` is used when the
/// title does not state one. A document without items yields an empty
/// gazette, which callers treat as "try the next source".
#[must_use]
pub fn parse_feed(xml: &str, base_url: &str, today: NaiveDate) -> Gazette {
    let first_item = ITEM_RE.find(xml).map_or(xml.len(), |m| m.start());
    let channel_title = element_text(&xml[..first_item], "title").unwrap_or_default();

    let date = parse_issue_date(&channel_title).unwrap_or_else(|| {
        log::debug!("No issue date in feed title {channel_title:?}, using {today}");
        today
    });
    let number = parse_issue_number(&channel_title);

    let mut index = IndexBuilder::new(base_url);
    for caps in ITEM_RE.captures_iter(xml) {
        let item = &caps[1];

        if let Some(category) = element_text(item, "category").filter(|c| !c.is_empty())
            && !index.heading(&category)
        {
            index.label(&category);
        }

        let title = element_text(item, "title").unwrap_or_default();
        let link = element_text(item, "link").unwrap_or_default();
        index.entry(&title, &link);
    }

    log::debug!("Feed listed {} entries", index.len());
    index.finish(date, number)
}

/// Text content of the first `<tag>` element in `fragment`
fn element_text(fragment: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let lower = fragment.to_ascii_lowercase();
    let mut from = 0;
    let start = loop {
        let at = from + lower[from..].find(&open)?;
        let after = at + open.len();
        // Skip longer names sharing the prefix, e.g. <titleImage>
        match lower[after..].chars().next() {
            Some('>' | ' ' | '\t' | '\r' | '\n') => break after,
            Some('/') => return Some(String::new()),
            _ => from = after,
        }
    };
    let content_start = start + lower[start..].find('>')? + 1;
    let content_end = content_start + lower[content_start..].find(&close)?;

    Some(unescape(&CDATA_RE.replace_all(&fragment[content_start..content_end], "$1")).trim().to_string())
}

/// Decode the XML entities a feed is likely to carry
fn unescape(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => name
                    .strip_prefix("#x")
                    .or_else(|| name.strip_prefix("#X"))
                    .map_or_else(
                        || name.strip_prefix('#').and_then(|n| n.parse::<u32>().ok()),
                        |hex| u32::from_str_radix(hex, 16).ok(),
                    )
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}
