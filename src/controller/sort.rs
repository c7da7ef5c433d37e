use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::types::{RepoRecord, SortKey};

/// Records with no parseable `updated_at` compare as the oldest.
pub fn compare(a: &RepoRecord, b: &RepoRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::UpdatedDesc => b.updated.cmp(&a.updated),
        SortKey::UpdatedAsc => a.updated.cmp(&b.updated),
        SortKey::NameAsc => locale_cmp(&a.name, &b.name),
        SortKey::NameDesc => locale_cmp(&b.name, &a.name),
        SortKey::IssuesDesc => b.open_issues.cmp(&a.open_issues),
    }
}

/// Punctuation and symbols in root collation order; all of them sort before
/// digits, and digits before letters.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Multi-level collation in the manner of `localeCompare`:
/// base characters (accents and case ignored), then accents, then case with
/// lowercase first. Only identical strings compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| {
            let accents = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<Vec<_>>();
            accents(a).cmp(&accents(b))
        })
        .then_with(|| {
            let case = |s: &str| s.nfd().map(char::is_uppercase).collect::<Vec<_>>();
            case(a).cmp(&case(b))
        })
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> impl Iterator<Item = (u8, u32)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(primary_weight)
}

fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if let Some(rank) = PUNCTUATION_ORDER.find(c) {
        (1, rank as u32)
    } else if c.is_numeric() {
        (3, c as u32)
    } else if c.is_alphabetic() {
        (4, c as u32)
    } else {
        (2, c as u32)
    }
}
