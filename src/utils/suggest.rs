// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Turn free text into a candidate wild slug.

use crate::logic::slugs::MAX_TERMS;

const MAX_TERM_CHARS: usize = 12;

/// Suggest a wild slug for free text such as a headline fragment.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` (e.g., "Zürich" → "Zurich").
/// - Uppercase and split on anything that is not an ASCII letter or digit.
/// - Clip terms to twelve characters, then drop single-character terms and
///   repeats, keeping the first occurrence.
/// - Keep at most five terms and join them with `-`.
///
/// Returns `None` when no usable term remains. A returned slug always passes
/// [`crate::validate_wild_slug`].
pub fn suggest_wild_slug(text: &str) -> Option<String> {
    let transliterated = deunicode::deunicode(text).to_ascii_uppercase();

    let mut terms: Vec<&str> = Vec::new();
    for term in transliterated.split(|c: char| !c.is_ascii_alphanumeric()) {
        // Five clipped terms plus hyphens stay within the length limit.
        let term = &term[..term.len().min(MAX_TERM_CHARS)];
        if term.len() < 2 || terms.contains(&term) {
            continue;
        }
        terms.push(term);
        if terms.len() == MAX_TERMS {
            break;
        }
    }

    if terms.is_empty() {
        return None;
    }
    Some(terms.join("-"))
}
