//! Identifier normalization.

use convert_case::{Boundary, Case, Casing};
use itertools::Itertools;

/// Convert a camel-case identifier into lower-case words joined by `separator`.
///
/// Identifiers without any upper-case letter (typically function names) are returned unchanged,
/// whatever the separator.
///
/// A run of capitals is kept together as a single word, except for its last letter when that one
/// starts a new capitalized word: `HTTPView` becomes `http_view` and `JustADetailView` becomes
/// `just_a_detail_view`.
///
/// Digits stay in the word they follow, and only a capital starts a new word: `Page404` becomes
/// `page404` and `Html5View` becomes `html5_view`.
pub fn from_camel(ident: &str, separator: &str) -> String {
    if !ident.chars().any(char::is_uppercase) {
        return ident.to_owned();
    }

    ident
        .with_boundaries(&[
            Boundary::LOWER_UPPER,
            Boundary::DIGIT_UPPER,
            Boundary::ACRONYM,
        ])
        .to_case(Case::Snake)
        .split('_')
        .filter(|word| !word.is_empty())
        .join(separator)
}
