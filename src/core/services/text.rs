//! Text folding for rule matching
//!
//! Gazette titles are printed in Turkish with inconsistent casing and
//! circumflexes (`İLÂN`, `İlan`, `ilân`). Rules match against a folded form:
//! transliterated to ASCII and lowercased.

use deunicode::deunicode;

/// Transliterate to ASCII and lowercase
///
/// ```
/// use gazette_digest::core::services::text::fold;
///
/// assert_eq!(fold("İstanbul Üniversitesi"), "istanbul universitesi");
/// assert_eq!(fold("YARGI İLÂNLARI"), "yargi ilanlari");
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    deunicode(text).to_lowercase()
}

/// Fold and drop everything except letters and digits
///
/// Used to compare headings that differ only in spacing or punctuation
/// (`ARTIRMA, EKSİLTME` vs `ARTIRMA EKSİLTME`).
#[must_use]
pub fn compact(text: &str) -> String {
    fold(text).chars().filter(char::is_ascii_alphanumeric).collect()
}
