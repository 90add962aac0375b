//! Static zodiac bracelet catalog, one entry per rashi.

use chandra_vedic::{ALL_RASHIS, Rashi};

/// A bracelet recommendation: three crystals keyed by rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracelet {
    pub rashi: Rashi,
    pub crystals: [&'static str; 3],
}

impl Bracelet {
    /// Catalog display name, e.g. "Aries (Mesha) Bracelet".
    pub fn name(&self) -> String {
        format!("{} Bracelet", self.rashi)
    }
}

/// The fixed 12-entry catalog, in rashi sector order.
pub const BRACELET_CATALOG: [Bracelet; 12] = [
    Bracelet {
        rashi: Rashi::Mesha,
        crystals: ["Red Jasper", "Bloodstone", "Sunstone"],
    },
    Bracelet {
        rashi: Rashi::Vrishabha,
        crystals: ["Rose Quartz", "Green Jade", "Green Aventurine"],
    },
    Bracelet {
        rashi: Rashi::Mithuna,
        crystals: ["Lapis Lazuli", "Fluorite", "Sodalite"],
    },
    Bracelet {
        rashi: Rashi::Karka,
        crystals: ["Moonstone", "Clear Quartz", "Rose Quartz"],
    },
    Bracelet {
        rashi: Rashi::Simha,
        crystals: ["Tiger Eye", "Citrine", "Pyrite"],
    },
    Bracelet {
        rashi: Rashi::Kanya,
        crystals: ["Green Aventurine", "Howlite", "Amethyst"],
    },
    Bracelet {
        rashi: Rashi::Tula,
        crystals: ["Rose Quartz", "Lapis Lazuli", "Green Jade"],
    },
    Bracelet {
        rashi: Rashi::Vrischika,
        crystals: ["Black Obsidian", "Black Tourmaline", "Hematite"],
    },
    Bracelet {
        rashi: Rashi::Dhanu,
        crystals: ["Amethyst", "Sodalite", "Citrine"],
    },
    Bracelet {
        rashi: Rashi::Makara,
        crystals: ["Black Onyx", "Hematite", "Black Obsidian"],
    },
    Bracelet {
        rashi: Rashi::Kumbha,
        crystals: ["Amethyst", "Fluorite", "Lapis Lazuli"],
    },
    Bracelet {
        rashi: Rashi::Meena,
        crystals: ["Amethyst", "Fluorite", "Clear Quartz"],
    },
];

/// Look up the catalog bracelet for a rashi.
pub fn bracelet_for(rashi: Rashi) -> Bracelet {
    BRACELET_CATALOG[rashi.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_rashis_in_order() {
        assert_eq!(BRACELET_CATALOG.len(), 12);
        for (i, entry) in BRACELET_CATALOG.iter().enumerate() {
            assert_eq!(entry.rashi, ALL_RASHIS[i]);
            assert_eq!(entry.rashi.index() as usize, i);
        }
    }

    #[test]
    fn every_bracelet_has_three_crystals() {
        for entry in &BRACELET_CATALOG {
            assert_eq!(entry.crystals.len(), 3);
            for c in entry.crystals {
                assert!(!c.is_empty());
            }
        }
    }

    #[test]
    fn lookup_by_rashi() {
        let b = bracelet_for(Rashi::Simha);
        assert_eq!(b.rashi, Rashi::Simha);
        assert_eq!(b.crystals, ["Tiger Eye", "Citrine", "Pyrite"]);
    }

    #[test]
    fn bracelet_name_format() {
        assert_eq!(bracelet_for(Rashi::Mesha).name(), "Aries (Mesha) Bracelet");
    }
}
