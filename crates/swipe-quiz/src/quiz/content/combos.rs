use crate::quiz::domain::Archetype::{self, Cozy, Glow, Lore, Pulse};
use crate::quiz::domain::ComboType;
use serde::Serialize;

/// Static descriptive content for a combo type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComboProfile {
    pub primary: Archetype,
    pub secondary: Archetype,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Two combos this one tends to click with, as (primary, secondary).
    pub compatible_with: [(Archetype, Archetype); 2],
}

impl ComboProfile {
    pub fn combo(&self) -> ComboType {
        ComboType {
            primary: self.primary,
            secondary: self.secondary,
        }
    }

    pub fn compatible_combos(&self) -> [ComboType; 2] {
        self.compatible_with.map(|(primary, secondary)| ComboType { primary, secondary })
    }
}

impl ComboType {
    /// Catalog entry for this combo. Every valid combo has exactly one.
    pub fn profile(&self) -> Option<&'static ComboProfile> {
        COMBO_PROFILES
            .iter()
            .find(|profile| profile.primary == self.primary && profile.secondary == self.secondary)
    }
}

pub fn combo_catalog() -> &'static [ComboProfile] {
    COMBO_PROFILES
}

const fn profile(
    primary: Archetype,
    secondary: Archetype,
    name: &'static str,
    tagline: &'static str,
    compatible_with: [(Archetype, Archetype); 2],
) -> ComboProfile {
    ComboProfile {
        primary,
        secondary,
        name,
        tagline,
        compatible_with,
    }
}

#[rustfmt::skip]
const COMBO_PROFILES: &[ComboProfile] = &[
    profile(Pulse, Glow, "The Spotlight", "All energy, all sparkle.", [(Cozy, Lore), (Glow, Cozy)]),
    profile(Pulse, Cozy, "The Campfire Captain", "Rallies the crew, then feeds them.", [(Lore, Glow), (Cozy, Pulse)]),
    profile(Pulse, Lore, "The Explorer", "Goes everywhere, remembers everything.", [(Cozy, Glow), (Lore, Cozy)]),
    profile(Glow, Pulse, "The Showstopper", "Beauty with a pulse.", [(Lore, Cozy), (Cozy, Lore)]),
    profile(Glow, Cozy, "The Hearth Muse", "Makes comfort look gorgeous.", [(Pulse, Lore), (Lore, Pulse)]),
    profile(Glow, Lore, "The Curator", "Finds the story behind every beautiful thing.", [(Pulse, Cozy), (Cozy, Pulse)]),
    profile(Cozy, Pulse, "The Home Base", "Warm welcome, wild weekends.", [(Glow, Lore), (Lore, Glow)]),
    profile(Cozy, Glow, "The Candlelight", "Soft, warm, quietly radiant.", [(Pulse, Lore), (Lore, Pulse)]),
    profile(Cozy, Lore, "The Library Nook", "Blanket, tea, and a thousand pages.", [(Pulse, Glow), (Glow, Pulse)]),
    profile(Lore, Pulse, "The Field Researcher", "Curiosity with hiking boots on.", [(Glow, Cozy), (Cozy, Glow)]),
    profile(Lore, Glow, "The Storyteller", "Knows the legend and tells it beautifully.", [(Cozy, Pulse), (Pulse, Cozy)]),
    profile(Lore, Cozy, "The Fireside Sage", "Wisdom served warm.", [(Pulse, Glow), (Glow, Pulse)]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_combo_has_one_profile() {
        for combo in ComboType::all() {
            let matches = combo_catalog()
                .iter()
                .filter(|profile| profile.combo() == combo)
                .count();
            assert_eq!(matches, 1, "{combo} should have exactly one profile");
        }
    }

    #[test]
    fn compatibility_never_points_at_self_or_invalid_combo() {
        for profile in combo_catalog() {
            for (primary, secondary) in profile.compatible_with {
                assert_ne!(primary, secondary);
                assert_ne!((primary, secondary), (profile.primary, profile.secondary));
            }
        }
    }

    #[test]
    fn profile_lookup_by_combo() {
        let combo = ComboType::new(Lore, Cozy).expect("distinct");
        let profile = combo.profile().expect("profile exists");
        assert_eq!(profile.name, "The Fireside Sage");
        assert_eq!(profile.combo().mirror().id(), "cozy_lore");
    }
}
