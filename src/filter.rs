//! Free-text filtering over an in-memory catalog.
//!
//! Runs on every keystroke, so it stays allocation-light: the term is
//! lower-cased once and a blank term returns the input slice untouched.

use std::borrow::Cow;

use crate::schema::CatalogEntity;

/// Entities matching `term`, in their original order.
///
/// A term that is empty after trimming returns `items` itself (borrowed).
/// Otherwise an entity matches when any of these hold:
/// 1. its name contains the term, ignoring case;
/// 2. its number contains the term literally (`"1"` matches `"010"`);
/// 3. any of its type tags contains the term, ignoring case.
pub fn filter<'a>(items: &'a [CatalogEntity], term: &str) -> Cow<'a, [CatalogEntity]> {
    if term.trim().is_empty() {
        return Cow::Borrowed(items);
    }

    let needle = Needle::new(term);
    Cow::Owned(
        items
            .iter()
            .filter(|entity| needle.matches(entity))
            .cloned()
            .collect(),
    )
}

/// Whether a single entity matches `term` under the rules of [`filter`].
///
/// A blank term matches everything.
pub fn matches(entity: &CatalogEntity, term: &str) -> bool {
    term.trim().is_empty() || Needle::new(term).matches(entity)
}

struct Needle<'t> {
    raw: &'t str,
    folded: String,
}

impl<'t> Needle<'t> {
    fn new(raw: &'t str) -> Self {
        Self {
            raw,
            folded: raw.to_lowercase(),
        }
    }

    fn matches(&self, entity: &CatalogEntity) -> bool {
        contains_folded(&entity.name, &self.folded)
            || entity.number.contains(self.raw)
            || entity
                .types
                .iter()
                .any(|tag| contains_folded(tag, &self.folded))
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    if haystack.is_ascii() && folded_needle.is_ascii() {
        // Skips the allocation for the common ASCII case.
        let needle = folded_needle.as_bytes();
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }
    haystack.to_lowercase().contains(folded_needle)
}
