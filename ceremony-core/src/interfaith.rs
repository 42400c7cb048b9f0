//! Interfaith option resolution.
//!
//! Merges the ritual and custom catalogs of several traditions into a single
//! suggestion list. There is no weighting between traditions: a ritual that
//! appears in two catalogs is listed once, at its first position.

use crate::catalog::{rituals_for, traditions_for};
use serde::Serialize;
use std::collections::HashSet;

/// Union of rituals and customs across several traditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaithOptions {
    pub all_rituals: Vec<String>,
    pub all_traditions: Vec<String>,
}

/// Compute the deduplicated union of every tradition's rituals and customs.
///
/// Order is first occurrence, walking `traditions` in the order given.
/// Unknown identifiers contribute nothing.
pub fn interfaith_options<S: AsRef<str>>(traditions: &[S]) -> InterfaithOptions {
    let mut rituals = OrderedSet::default();
    let mut customs = OrderedSet::default();

    for tradition in traditions {
        let tradition = tradition.as_ref();
        rituals.extend(rituals_for(tradition));
        customs.extend(traditions_for(tradition));
    }

    InterfaithOptions {
        all_rituals: rituals.items,
        all_traditions: customs.items,
    }
}

/// Insertion-ordered set of labels.
#[derive(Default)]
struct OrderedSet {
    seen: HashSet<&'static str>,
    items: Vec<String>,
}

impl OrderedSet {
    fn extend(&mut self, labels: &[&'static str]) {
        for &label in labels {
            if self.seen.insert(label) {
                self.items.push(label.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_preserves_first_occurrence_order() {
        let options = interfaith_options(&["Hinduism", "Christianity"]);
        let hindu = rituals_for("Hinduism");
        assert_eq!(options.all_rituals[0], hindu[0]);
        assert_eq!(options.all_rituals[hindu.len()], rituals_for("Christianity")[0]);
    }

    #[test]
    fn test_shared_rituals_deduplicated() {
        // "Exchange of vows" is in both Buddhist and Wiccan catalogs.
        let options = interfaith_options(&["Buddhism", "Wicca"]);
        let count = options
            .all_rituals
            .iter()
            .filter(|r| r.as_str() == "Exchange of vows")
            .count();
        assert_eq!(count, 1);
        assert_eq!(
            options.all_rituals.len(),
            rituals_for("Buddhism").len() + rituals_for("Wicca").len() - 1
        );
    }

    #[test]
    fn test_same_tradition_twice_is_single_catalog() {
        let options = interfaith_options(&["Islam", "muslim"]);
        assert_eq!(options.all_rituals.len(), rituals_for("Islam").len());
        assert_eq!(options.all_traditions.len(), traditions_for("Islam").len());
    }

    #[test]
    fn test_unknown_traditions_contribute_nothing() {
        let options = interfaith_options(&["Sikhism", "Unknown Faith"]);
        assert_eq!(options.all_rituals.len(), rituals_for("Sikhism").len());
        assert!(interfaith_options(&["nope", "also nope"]).all_rituals.is_empty());
    }
}
