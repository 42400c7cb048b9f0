//! Tradition catalog.
//!
//! Contains the rituals, customs, ceremony order, typical length and dress
//! guidance for every tradition the planner knows about. The data is
//! compiled in and never changes at runtime.

use crate::interfaith::interfaith_options;
use crate::tradition::Tradition;
use serde::{Deserialize, Serialize};

/// Reference data for one tradition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraditionProfile {
    /// Display name.
    pub name: &'static str,
    /// Rituals a couple may choose to include.
    pub common_rituals: &'static [&'static str],
    /// Customs associated with the tradition.
    pub traditions: &'static [&'static str],
    /// Ceremony sections in the order they are performed.
    pub ceremony_sections: &'static [&'static str],
    /// Typical ceremony length, as free text.
    pub typical_duration: &'static str,
    /// Dress guidance for guests and the couple.
    pub dress_code: &'static str,
}

impl Tradition {
    /// Get the catalog entry for this tradition.
    pub fn profile(&self) -> &'static TraditionProfile {
        match self {
            Tradition::Christianity => &CHRISTIANITY,
            Tradition::Judaism => &JUDAISM,
            Tradition::Islam => &ISLAM,
            Tradition::Hinduism => &HINDUISM,
            Tradition::Buddhism => &BUDDHISM,
            Tradition::Sikhism => &SIKHISM,
            Tradition::Bahai => &BAHAI,
            Tradition::Jainism => &JAINISM,
            Tradition::Shinto => &SHINTO,
            Tradition::Taoism => &TAOISM,
            Tradition::Zoroastrianism => &ZOROASTRIANISM,
            Tradition::Wicca => &WICCA,
            Tradition::NativeAmerican => &NATIVE_AMERICAN,
            Tradition::AfricanTraditional => &AFRICAN_TRADITIONAL,
            Tradition::Other => &OTHER,
        }
    }
}

// ============================================================================
// String-keyed accessors
// ============================================================================

/// Look up a profile by free-form identifier.
pub fn profile_for(tradition: &str) -> Option<&'static TraditionProfile> {
    Tradition::from_name(tradition).map(|t| t.profile())
}

/// Rituals for a tradition, or an empty list if it is not in the catalog.
pub fn rituals_for(tradition: &str) -> &'static [&'static str] {
    profile_for(tradition)
        .map(|p| p.common_rituals)
        .unwrap_or_default()
}

/// Customs for a tradition, or an empty list if it is not in the catalog.
pub fn traditions_for(tradition: &str) -> &'static [&'static str] {
    profile_for(tradition)
        .map(|p| p.traditions)
        .unwrap_or_default()
}

/// Ordered ceremony sections, or an empty list if the tradition is unknown.
pub fn structure_for(tradition: &str) -> &'static [&'static str] {
    profile_for(tradition)
        .map(|p| p.ceremony_sections)
        .unwrap_or_default()
}

// ============================================================================
// Ceremony type
// ============================================================================

/// Overall character of the ceremony, derived from onboarding answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CeremonyType {
    Secular,
    Religious,
    Interfaith,
    Cultural,
    Spiritual,
}

impl CeremonyType {
    /// Classify a couple's selections the way onboarding does when the
    /// user did not pick a type explicitly.
    pub fn classify<S: AsRef<str>>(is_religious: bool, traditions: &[S]) -> Self {
        if !is_religious {
            return CeremonyType::Secular;
        }
        match traditions.len() {
            0 => CeremonyType::Spiritual,
            1 => CeremonyType::Religious,
            _ => CeremonyType::Interfaith,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CeremonyType::Secular => "Secular",
            CeremonyType::Religious => "Religious",
            CeremonyType::Interfaith => "Interfaith",
            CeremonyType::Cultural => "Cultural",
            CeremonyType::Spiritual => "Spiritual",
        }
    }
}

/// Header label for the planning view: "Secular", "Interfaith", the single
/// tradition's name as given, or "Religious" when none was chosen.
pub fn ceremony_label<S: AsRef<str>>(is_religious: bool, traditions: &[S]) -> String {
    if !is_religious {
        return "Secular".to_string();
    }
    match traditions {
        [] => "Religious".to_string(),
        [single] => single.as_ref().to_string(),
        _ => "Interfaith".to_string(),
    }
}

// ============================================================================
// Suggestions
// ============================================================================

/// Ritual and custom suggestions for a set of chosen traditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RitualOptions {
    pub rituals: Vec<String>,
    pub traditions: Vec<String>,
    /// Ceremony order; only filled for a single tradition.
    pub structure: Vec<String>,
    /// Full profile; only present for a single known tradition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<&'static TraditionProfile>,
}

impl RitualOptions {
    /// Suggestions for the given traditions. Two or more traditions get the
    /// deduplicated interfaith union.
    pub fn for_traditions<S: AsRef<str>>(traditions: &[S]) -> Self {
        match traditions {
            [] => Self::default(),
            [single] => {
                let single = single.as_ref();
                Self {
                    rituals: owned_list(rituals_for(single)),
                    traditions: owned_list(traditions_for(single)),
                    structure: owned_list(structure_for(single)),
                    profile: profile_for(single),
                }
            }
            _ => {
                let merged = interfaith_options(traditions);
                Self {
                    rituals: merged.all_rituals,
                    traditions: merged.all_traditions,
                    structure: Vec::new(),
                    profile: None,
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rituals.is_empty() && self.traditions.is_empty()
    }
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Catalog data
// ============================================================================

static CHRISTIANITY: TraditionProfile = TraditionProfile {
    name: "Christianity",
    common_rituals: &[
        "Exchange of Vows",
        "Exchange of Rings",
        "Unity Candle Lighting",
        "Holy Communion",
        "Reading of Scripture",
        "Prayer and Blessing",
        "Pronouncement of Marriage",
        "First Kiss",
        "Signing of Marriage Certificate",
        "Recessional",
    ],
    traditions: &[
        "Bride walks down aisle with father",
        "White wedding dress",
        "Throwing of rice or flower petals",
        "Wedding in church",
        "Organ or hymn music",
        "Benediction from priest/pastor",
    ],
    ceremony_sections: &[
        "Processional",
        "Welcome & Prayer",
        "Scripture Readings",
        "Homily",
        "Vows & Rings",
        "Communion",
        "Blessing",
        "Recessional",
    ],
    typical_duration: "30-60 minutes",
    dress_code: "Formal, modest attire",
};

static JUDAISM: TraditionProfile = TraditionProfile {
    name: "Judaism",
    common_rituals: &[
        "Signing of Ketubah (marriage contract)",
        "Chuppah (wedding canopy) ceremony",
        "Circling (Hakafot) - bride circles groom",
        "Seven Blessings (Sheva Brachot)",
        "Exchange of rings",
        "Breaking of the glass",
        "Yichud (seclusion time)",
        "Reading from Torah",
        "Kiddushin (betrothal)",
        "Nisuin (marriage)",
    ],
    traditions: &[
        "Wedding under chuppah (canopy)",
        "Fasting on wedding day",
        "Ketubah displayed at reception",
        "Hora dance at reception",
        "No weddings on Shabbat",
        "Male and female guests may sit separately (Orthodox)",
    ],
    ceremony_sections: &[
        "Ketubah Signing",
        "Bedeken (Veiling)",
        "Chuppah Ceremony",
        "Seven Blessings",
        "Breaking Glass",
        "Yichud",
    ],
    typical_duration: "30-45 minutes",
    dress_code: "Modest formal attire, head coverings for men",
};

static ISLAM: TraditionProfile = TraditionProfile {
    name: "Islam",
    common_rituals: &[
        "Nikah (marriage contract)",
        "Mahr (bridal gift)",
        "Ijab (proposal by groom)",
        "Qubul (acceptance by bride)",
        "Khutbah (sermon)",
        "Reading from Quran",
        "Dua (prayers)",
        "Witnessing by two witnesses",
        "Signing of marriage contract",
        "Waleemah (wedding feast)",
    ],
    traditions: &[
        "Mehndi/Henna ceremony (pre-wedding)",
        "Segregated seating (traditional)",
        "No music or dancing (strict observance)",
        "Modest dress for bride",
        "Wali (guardian) gives bride away",
        "Simple ceremony in mosque or home",
    ],
    ceremony_sections: &[
        "Khutbah",
        "Nikah Ceremony",
        "Mahr Presentation",
        "Contract Signing",
        "Dua",
        "Waleemah",
    ],
    typical_duration: "20-30 minutes",
    dress_code: "Modest attire, hijab for women, traditional dress preferred",
};

static HINDUISM: TraditionProfile = TraditionProfile {
    name: "Hinduism",
    common_rituals: &[
        "Kanyadaan (giving away of bride)",
        "Saptapadi (seven steps around sacred fire)",
        "Mangalsutra (sacred necklace)",
        "Sindoor (vermillion on bride)",
        "Hasta Melap (joining of hands)",
        "Agni Puja (fire worship)",
        "Saat Phere (seven circles around fire)",
        "Garland exchange (Jai Mala)",
        "Offerings to fire god (Havan)",
        "Blessing from elders",
    ],
    traditions: &[
        "Multiple day celebration",
        "Mehndi/Henna ceremony",
        "Sangeet (music night)",
        "Baraat (groom's procession)",
        "Mandap (decorated canopy)",
        "Red or colorful bridal attire",
        "Sacred fire as witness",
    ],
    ceremony_sections: &[
        "Ganesh Puja",
        "Kanyadaan",
        "Hasta Melap",
        "Agni Puja",
        "Saptapadi",
        "Sindoor & Mangalsutra",
        "Ashirvad",
    ],
    typical_duration: "2-4 hours",
    dress_code: "Traditional Indian attire, bright colors, avoid black/white",
};

static BUDDHISM: TraditionProfile = TraditionProfile {
    name: "Buddhism",
    common_rituals: &[
        "Chanting of sutras",
        "Water pouring ceremony",
        "Blessing from monk(s)",
        "Three refuges recitation",
        "Exchange of vows",
        "Offering of flowers to Buddha",
        "Lighting of candles/incense",
        "Meditation period",
        "Tying of blessed string (Sai Sin)",
        "Merit-making activities",
    ],
    traditions: &[
        "Ceremony at temple or home",
        "Monks perform blessings",
        "Morning ceremony preferred",
        "Vegetarian food offerings",
        "White or light colored attire",
        "Removal of shoes in temple",
    ],
    ceremony_sections: &[
        "Welcoming",
        "Chanting",
        "Dharma Talk",
        "Water Ceremony",
        "Vows",
        "Blessing",
        "Merit Making",
    ],
    typical_duration: "45-90 minutes",
    dress_code: "Modest, light colors preferred, remove shoes in temple",
};

static SIKHISM: TraditionProfile = TraditionProfile {
    name: "Sikhism",
    common_rituals: &[
        "Anand Karaj (blissful union)",
        "Four Laavan (four sacred hymns)",
        "Circumambulation of Guru Granth Sahib",
        "Reading from Guru Granth Sahib",
        "Ardas (Sikh prayer)",
        "Palla ceremony (joining of scarves)",
        "Karah Parshad distribution",
        "Signing of marriage register",
        "Kirtan (devotional singing)",
        "Blessing from Guru Granth Sahib",
    ],
    traditions: &[
        "Ceremony held in Gurdwara",
        "Head covering mandatory for all",
        "Sitting on floor during ceremony",
        "Langar (community meal) served",
        "No dowry or lavish displays",
        "Simplicity emphasized",
    ],
    ceremony_sections: &[
        "Ardas",
        "Reading",
        "Four Laavan",
        "Palla Ceremony",
        "Final Ardas",
        "Karah Parshad",
        "Langar",
    ],
    typical_duration: "2-3 hours",
    dress_code: "Modest attire, head covering required, remove shoes",
};

static BAHAI: TraditionProfile = TraditionProfile {
    name: "Bahá'í",
    common_rituals: &[
        "Parental consent",
        "Bahá'í vows (\"We will all verily abide by the Will of God\")",
        "Reading from Bahá'í writings",
        "Witnessing by Spiritual Assembly",
        "Prayer and meditation",
        "Musical performance",
        "Exchange of rings (optional)",
        "Unity themes emphasized",
        "Simple ceremony structure",
    ],
    traditions: &[
        "Extremely simple ceremony",
        "No clergy or ritual",
        "Parental approval required",
        "Two witnesses needed",
        "No alcohol at celebration",
        "Emphasis on spiritual unity",
    ],
    ceremony_sections: &[
        "Welcome",
        "Reading from Writings",
        "Vows",
        "Prayer",
        "Signing of Certificate",
    ],
    typical_duration: "20-30 minutes",
    dress_code: "Modest, no specific requirements",
};

static JAINISM: TraditionProfile = TraditionProfile {
    name: "Jainism",
    common_rituals: &[
        "Ganesh Puja",
        "Laja Homa (offering to fire)",
        "Saptapadi (seven steps)",
        "Hasta Milap (joining hands)",
        "Kanyadaan (giving away bride)",
        "Agni parikrama (circling fire)",
        "Mangal pheras (sacred rounds)",
        "Ashirvad (blessings from elders)",
        "Chanting of mantras",
        "Vegetarian feast",
    ],
    traditions: &[
        "Strict vegetarian ceremony and feast",
        "No leather products",
        "Morning or afternoon ceremony",
        "Simple, non-violent celebrations",
        "Traditional attire",
        "Emphasis on non-violence (Ahimsa)",
    ],
    ceremony_sections: &[
        "Puja",
        "Hasta Milap",
        "Kanyadaan",
        "Laja Homa",
        "Saptapadi",
        "Ashirvad",
    ],
    typical_duration: "2-3 hours",
    dress_code: "Traditional Indian attire, no leather, modest",
};

static SHINTO: TraditionProfile = TraditionProfile {
    name: "Shinto",
    common_rituals: &[
        "San San Kudo (sake-sharing ceremony)",
        "Purification rite (Harai)",
        "Prayer and offerings to kami",
        "Exchanging of sake cups",
        "Tamagushi offering (sacred branch)",
        "Ring exchange (modern addition)",
        "Priest blessing",
        "Bowing to shrine",
        "Processional to shrine",
    ],
    traditions: &[
        "Ceremony at Shinto shrine",
        "White kimono for bride",
        "Shiro-muku (traditional white kimono)",
        "Tsunokakushi (head covering)",
        "Small, intimate ceremony",
        "Family-focused celebration",
    ],
    ceremony_sections: &[
        "Purification",
        "Procession",
        "Prayer",
        "San San Kudo",
        "Tamagushi",
        "Ring Exchange",
        "Final Blessing",
    ],
    typical_duration: "30-45 minutes",
    dress_code: "Traditional Japanese attire (kimono), formal",
};

static TAOISM: TraditionProfile = TraditionProfile {
    name: "Taoism",
    common_rituals: &[
        "Tea ceremony",
        "Bowing to heaven and earth",
        "Incense offering",
        "Red envelope exchange",
        "Prayer to ancestors",
        "Taoist priest blessing",
        "Harmony and balance rituals",
        "Exchange of vows",
        "Unity cup ceremony",
        "Zodiac compatibility reading",
    ],
    traditions: &[
        "Auspicious date selection",
        "Red color symbolism",
        "Tea ceremony for families",
        "Bowing to parents",
        "Dragon and phoenix imagery",
        "Emphasis on harmony and balance",
    ],
    ceremony_sections: &[
        "Tea Ceremony",
        "Incense Offering",
        "Ancestor Prayer",
        "Vows",
        "Priest Blessing",
        "Unity Ceremony",
    ],
    typical_duration: "1-2 hours",
    dress_code: "Traditional Chinese attire (Qipao/Changshan), red preferred",
};

static ZOROASTRIANISM: TraditionProfile = TraditionProfile {
    name: "Zoroastrianism",
    common_rituals: &[
        "Achu Michu (blessing with rice)",
        "Exchange of rings",
        "Joining hands with white cloth",
        "Seven steps ceremony",
        "Prayer by priest (Mobed)",
        "Signing of marriage contract",
        "Throwing of rice",
        "Fire temple blessing",
        "Recitation of Yasna",
        "Honey ceremony",
    ],
    traditions: &[
        "Ceremony at fire temple or home",
        "Presence of Mobed (priest)",
        "White attire preferred",
        "Sacred fire as witness",
        "Evening ceremony common",
        "Traditional Persian elements",
    ],
    ceremony_sections: &[
        "Prayer",
        "Achu Michu",
        "Ring Exchange",
        "Seven Steps",
        "Contract Signing",
        "Blessing",
    ],
    typical_duration: "45-60 minutes",
    dress_code: "Traditional white or light colored attire",
};

static WICCA: TraditionProfile = TraditionProfile {
    name: "Wicca",
    common_rituals: &[
        "Handfasting (binding of hands)",
        "Casting the circle",
        "Calling the quarters",
        "Invoking deity",
        "Exchange of vows",
        "Jumping the broom",
        "Sharing of wine/cakes",
        "Blessing of rings",
        "Declaration of union",
        "Opening the circle",
    ],
    traditions: &[
        "Outdoor ceremony preferred",
        "Nature-based elements",
        "Circle of participants",
        "Seasonal timing important",
        "Personalized ritual",
        "No standard format",
    ],
    ceremony_sections: &[
        "Circle Casting",
        "Quarter Calling",
        "Deity Invocation",
        "Handfasting",
        "Vows",
        "Broom Jumping",
        "Cakes & Wine",
        "Circle Opening",
    ],
    typical_duration: "30-60 minutes",
    dress_code: "Nature-inspired, comfortable, often includes ritual robes",
};

static NATIVE_AMERICAN: TraditionProfile = TraditionProfile {
    name: "Native American",
    common_rituals: &[
        "Blanket ceremony",
        "Smudging with sage",
        "Circle of unity",
        "Four directions blessing",
        "Exchange of gifts",
        "Sharing of food (corn, berries)",
        "Blessing from elder",
        "Traditional songs/drums",
        "Feather ceremony",
        "Honoring ancestors",
    ],
    traditions: &[
        "Outdoor ceremony",
        "Connection to nature",
        "Tribal-specific customs",
        "Honoring of elders",
        "Traditional dress",
        "Community involvement",
    ],
    ceremony_sections: &[
        "Smudging",
        "Four Directions",
        "Elder Blessing",
        "Blanket Ceremony",
        "Vows",
        "Gift Exchange",
        "Feast",
    ],
    typical_duration: "1-2 hours",
    dress_code: "Traditional tribal attire, respectful of culture",
};

static AFRICAN_TRADITIONAL: TraditionProfile = TraditionProfile {
    name: "African Traditional",
    common_rituals: &[
        "Libation ceremony",
        "Jumping the broom",
        "Knot tying ceremony",
        "Cowrie shell divination",
        "Ancestor honoring",
        "Traditional drumming",
        "Dance celebration",
        "Exchange of kola nuts",
        "Wine/palm wine ceremony",
        "Community blessing",
    ],
    traditions: &[
        "Colorful traditional attire",
        "Community participation",
        "Multiple day celebration",
        "Bride price ceremony",
        "Traditional music and dance",
        "Oral traditions shared",
    ],
    ceremony_sections: &[
        "Libation",
        "Ancestor Honoring",
        "Vows",
        "Knot Tying",
        "Jumping Broom",
        "Wine Ceremony",
        "Dancing",
    ],
    typical_duration: "2-4 hours or multiple days",
    dress_code: "Traditional African attire (dashiki, kente, etc.), vibrant colors",
};

static OTHER: TraditionProfile = TraditionProfile {
    name: "Other/Cultural",
    common_rituals: &[
        "Exchange of vows",
        "Exchange of rings",
        "Unity ceremony (candle, sand, etc.)",
        "Reading of poetry/literature",
        "Musical performance",
        "Cultural tradition inclusion",
        "Family blessing",
        "Declaration of marriage",
        "First kiss",
        "Celebration",
    ],
    traditions: &[
        "Personalized ceremony",
        "Cultural elements",
        "Family involvement",
        "Meaningful readings",
        "Secular or spiritual mix",
        "Flexible format",
    ],
    ceremony_sections: &[
        "Welcome",
        "Readings",
        "Vows",
        "Rings",
        "Unity Ceremony",
        "Pronouncement",
        "Celebration",
    ],
    typical_duration: "20-45 minutes",
    dress_code: "Varies by culture and preference",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_traditions_have_data() {
        for tradition in Tradition::all() {
            let profile = tradition.profile();
            assert!(!profile.name.is_empty());
            assert!(!profile.common_rituals.is_empty());
            assert!(!profile.traditions.is_empty());
            assert!(!profile.ceremony_sections.is_empty());
            assert!(!profile.typical_duration.is_empty());
        }
    }

    #[test]
    fn test_hindu_data() {
        let rituals = rituals_for("Hindu");
        assert!(rituals.contains(&"Kanyadaan (giving away of bride)"));
        assert_eq!(structure_for("Hinduism").first(), Some(&"Ganesh Puja"));
        assert_eq!(profile_for("hindu").map(|p| p.typical_duration), Some("2-4 hours"));
    }

    #[test]
    fn test_unknown_tradition_is_empty() {
        assert!(rituals_for("Klingon").is_empty());
        assert!(traditions_for("Klingon").is_empty());
        assert!(structure_for("").is_empty());
        assert!(profile_for("Klingon").is_none());
    }

    #[test]
    fn test_ceremony_type_classification() {
        let none: [&str; 0] = [];
        assert_eq!(CeremonyType::classify(false, &["Hindu"]), CeremonyType::Secular);
        assert_eq!(CeremonyType::classify(true, &none), CeremonyType::Spiritual);
        assert_eq!(CeremonyType::classify(true, &["Hindu"]), CeremonyType::Religious);
        assert_eq!(
            CeremonyType::classify(true, &["Hindu", "Christian"]),
            CeremonyType::Interfaith
        );
    }

    #[test]
    fn test_ceremony_label() {
        let none: [&str; 0] = [];
        assert_eq!(ceremony_label(false, &["Islam"]), "Secular");
        assert_eq!(ceremony_label(true, &["Islam"]), "Islam");
        assert_eq!(ceremony_label(true, &["Islam", "Judaism"]), "Interfaith");
        assert_eq!(ceremony_label(true, &none), "Religious");
    }

    #[test]
    fn test_single_tradition_options_include_structure() {
        let options = RitualOptions::for_traditions(&["Sikhism"]);
        assert_eq!(options.rituals.len(), rituals_for("Sikhism").len());
        assert_eq!(options.structure.first().map(String::as_str), Some("Ardas"));
        assert_eq!(options.profile.map(|p| p.name), Some("Sikhism"));
    }

    #[test]
    fn test_interfaith_options_have_no_structure() {
        let options = RitualOptions::for_traditions(&["Hinduism", "Jainism"]);
        assert!(options.structure.is_empty());
        assert!(options.profile.is_none());
        assert!(options.rituals.iter().any(|r| r == "Ganesh Puja"));
    }

    #[test]
    fn test_no_traditions_no_options() {
        let none: [String; 0] = [];
        assert!(RitualOptions::for_traditions(&none).is_empty());
    }
}
