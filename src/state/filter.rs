//! Name filter (pure).
//!
//! Case-insensitive substring match on the item's display name. Case
//! folding is Rust's Unicode `to_lowercase`, which does not depend on the
//! process locale.

use crate::model::Item;

/// Lowercase form used on both sides of the comparison.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Whether `name` contains an already-folded term.
pub fn name_matches(name: &str, folded_term: &str) -> bool {
    folded_term.is_empty() || fold_case(name).contains(folded_term)
}

/// Items whose name contains `term`, in input order.
///
/// An empty term keeps every item.
pub fn filter_items<'a>(items: &'a [Item], term: &str) -> Vec<&'a Item> {
    if term.is_empty() {
        return items.iter().collect();
    }

    let folded = fold_case(term);
    items
        .iter()
        .filter(|item| name_matches(item.name(), &folded))
        .collect()
}
