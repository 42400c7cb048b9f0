//! Tradition identifiers.
//!
//! Callers hand the engine free-form tradition names (from onboarding data,
//! URL slugs, or older saved plans). Everything is resolved to the closed
//! [`Tradition`] enum here; a name that does not resolve is simply unknown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A religious or cultural framework with its own ritual catalog.
///
/// Variant order is the catalog's display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tradition {
    Christianity,
    Judaism,
    Islam,
    Hinduism,
    Buddhism,
    Sikhism,
    Bahai,
    Jainism,
    Shinto,
    Taoism,
    Zoroastrianism,
    Wicca,
    NativeAmerican,
    AfricanTraditional,
    Other,
}

impl Tradition {
    /// Catalog key for this tradition.
    pub fn name(&self) -> &'static str {
        match self {
            Tradition::Christianity => "Christianity",
            Tradition::Judaism => "Judaism",
            Tradition::Islam => "Islam",
            Tradition::Hinduism => "Hinduism",
            Tradition::Buddhism => "Buddhism",
            Tradition::Sikhism => "Sikhism",
            Tradition::Bahai => "Bahá'í",
            Tradition::Jainism => "Jainism",
            Tradition::Shinto => "Shinto",
            Tradition::Taoism => "Taoism",
            Tradition::Zoroastrianism => "Zoroastrianism",
            Tradition::Wicca => "Wicca",
            Tradition::NativeAmerican => "Native American",
            Tradition::AfricanTraditional => "African Traditional",
            Tradition::Other => "Other",
        }
    }

    /// Lowercase key used by the example-schedule catalog and pair labels.
    pub fn slug(&self) -> &'static str {
        match self {
            Tradition::Christianity => "christian",
            Tradition::Judaism => "jewish",
            Tradition::Islam => "muslim",
            Tradition::Hinduism => "hindu",
            Tradition::Buddhism => "buddhist",
            Tradition::Sikhism => "sikh",
            Tradition::Bahai => "bahai",
            Tradition::Jainism => "jain",
            Tradition::Shinto => "shinto",
            Tradition::Taoism => "taoist",
            Tradition::Zoroastrianism => "zoroastrian",
            Tradition::Wicca => "wiccan",
            Tradition::NativeAmerican => "native-american",
            Tradition::AfricanTraditional => "african-traditional",
            Tradition::Other => "other",
        }
    }

    /// Alternate spellings accepted by [`Tradition::from_name`], lowercase.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Tradition::Christianity => &[
                "christian",
                "christianity - catholic",
                "christianity - protestant",
                "christianity - orthodox",
                "catholic",
                "protestant",
            ],
            Tradition::Judaism => &["jewish"],
            Tradition::Islam => &["muslim"],
            Tradition::Hinduism => &["hindu"],
            Tradition::Buddhism => &["buddhist"],
            Tradition::Sikhism => &["sikh"],
            Tradition::Bahai => &["bahai", "baha'i", "bahá'i"],
            Tradition::Jainism => &["jain"],
            Tradition::Shinto => &[],
            Tradition::Taoism => &["taoist"],
            Tradition::Zoroastrianism => &["zoroastrian"],
            Tradition::Wicca => &["wiccan"],
            Tradition::NativeAmerican => &["native-american"],
            Tradition::AfricanTraditional => &["african-traditional", "african"],
            Tradition::Other => &["other/cultural", "cultural"],
        }
    }

    /// Resolve a free-form identifier, ignoring case and surrounding space.
    pub fn from_name(name: &str) -> Option<Tradition> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Self::all().iter().copied().find(|t| {
            t.name().to_lowercase() == needle
                || t.slug() == needle
                || t.aliases().contains(&needle.as_str())
        })
    }

    /// Get all traditions in catalog order.
    pub fn all() -> &'static [Tradition] {
        &[
            Tradition::Christianity,
            Tradition::Judaism,
            Tradition::Islam,
            Tradition::Hinduism,
            Tradition::Buddhism,
            Tradition::Sikhism,
            Tradition::Bahai,
            Tradition::Jainism,
            Tradition::Shinto,
            Tradition::Taoism,
            Tradition::Zoroastrianism,
            Tradition::Wicca,
            Tradition::NativeAmerican,
            Tradition::AfricanTraditional,
            Tradition::Other,
        ]
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Pairs
// ============================================================================

/// An unordered pair of distinct traditions.
///
/// The two members are stored sorted, so `TraditionPair::new(a, b)` and
/// `TraditionPair::new(b, a)` are equal and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraditionPair(Tradition, Tradition);

impl TraditionPair {
    /// Build the canonical pair, or `None` if both sides are the same.
    pub fn new(a: Tradition, b: Tradition) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self(a, b)),
            std::cmp::Ordering::Greater => Some(Self(b, a)),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Resolve two free-form identifiers into a pair.
    pub fn from_names(a: &str, b: &str) -> Option<Self> {
        Self::new(Tradition::from_name(a)?, Tradition::from_name(b)?)
    }

    pub fn first(&self) -> Tradition {
        self.0
    }

    pub fn second(&self) -> Tradition {
        self.1
    }

    /// Slug label such as `"christian-muslim"`.
    ///
    /// Always in canonical (sorted) order, so it may differ from the order a
    /// pair was authored in: the Hindu and Christian example is labelled
    /// `"christian-hindu"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.0.slug(), self.1.slug())
    }
}

impl fmt::Display for TraditionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.0.name(), self.1.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_accepts_catalog_keys() {
        for tradition in Tradition::all() {
            assert_eq!(Tradition::from_name(tradition.name()), Some(*tradition));
            assert_eq!(Tradition::from_name(tradition.slug()), Some(*tradition));
        }
    }

    #[test]
    fn test_from_name_adjective_forms() {
        assert_eq!(Tradition::from_name("Hindu"), Some(Tradition::Hinduism));
        assert_eq!(Tradition::from_name("Christian"), Some(Tradition::Christianity));
        assert_eq!(Tradition::from_name("Jewish"), Some(Tradition::Judaism));
        assert_eq!(Tradition::from_name("Muslim"), Some(Tradition::Islam));
        assert_eq!(Tradition::from_name("Buddhist"), Some(Tradition::Buddhism));
        assert_eq!(Tradition::from_name("Sikh"), Some(Tradition::Sikhism));
    }

    #[test]
    fn test_from_name_is_case_and_space_insensitive() {
        assert_eq!(Tradition::from_name("  hINDUISM "), Some(Tradition::Hinduism));
        assert_eq!(
            Tradition::from_name("Christianity - Catholic"),
            Some(Tradition::Christianity)
        );
        assert_eq!(Tradition::from_name("Bahai"), Some(Tradition::Bahai));
        assert_eq!(Tradition::from_name("Bahá'í"), Some(Tradition::Bahai));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Tradition::from_name(""), None);
        assert_eq!(Tradition::from_name("Pastafarian"), None);
        assert_eq!(Tradition::from_name("Secular/Non-religious"), None);
    }

    #[test]
    fn test_pair_is_order_independent() {
        let a = TraditionPair::new(Tradition::Islam, Tradition::Christianity);
        let b = TraditionPair::new(Tradition::Christianity, Tradition::Islam);
        assert_eq!(a, b);
        assert_eq!(a.map(|p| p.label()), Some("christian-muslim".to_string()));
        let authored = TraditionPair::new(Tradition::Hinduism, Tradition::Christianity);
        assert_eq!(authored.map(|p| p.label()), Some("christian-hindu".to_string()));
    }

    #[test]
    fn test_pair_rejects_same_tradition() {
        assert!(TraditionPair::new(Tradition::Hinduism, Tradition::Hinduism).is_none());
        assert!(TraditionPair::from_names("hindu", "Hinduism").is_none());
    }
}
