use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the four base personality dimensions the quiz scores.
///
/// Declaration order is the canonical order (pulse, glow, cozy, lore) and is
/// relied upon for every deterministic tie-break in the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Pulse,
    Glow,
    Cozy,
    Lore,
}

impl Archetype {
    pub const fn ordered() -> [Self; 4] {
        [Self::Pulse, Self::Glow, Self::Cozy, Self::Lore]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Pulse => 0,
            Self::Glow => 1,
            Self::Cozy => 2,
            Self::Lore => 3,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Pulse => "pulse",
            Self::Glow => "glow",
            Self::Cozy => "cozy",
            Self::Lore => "lore",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pulse => "Pulse",
            Self::Glow => "Glow",
            Self::Cozy => "Cozy",
            Self::Lore => "Lore",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pulse" => Some(Self::Pulse),
            "glow" => Some(Self::Glow),
            "cozy" => Some(Self::Cozy),
            "lore" => Some(Self::Lore),
            _ => None,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Dense per-archetype value table. Always holds exactly four entries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArchetypeMap<T> {
    pub pulse: T,
    pub glow: T,
    pub cozy: T,
    pub lore: T,
}

impl<T: Copy> ArchetypeMap<T> {
    pub const fn new(pulse: T, glow: T, cozy: T, lore: T) -> Self {
        Self {
            pulse,
            glow,
            cozy,
            lore,
        }
    }

    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn get(&self, archetype: Archetype) -> T {
        self[archetype]
    }

    /// Returns a copy with one entry replaced.
    pub fn with(mut self, archetype: Archetype, value: T) -> Self {
        self[archetype] = value;
        self
    }

    pub fn entries(&self) -> [(Archetype, T); 4] {
        Archetype::ordered().map(|archetype| (archetype, self[archetype]))
    }

    pub fn map<U: Copy>(&self, f: impl Fn(Archetype, T) -> U) -> ArchetypeMap<U> {
        ArchetypeMap::new(
            f(Archetype::Pulse, self.pulse),
            f(Archetype::Glow, self.glow),
            f(Archetype::Cozy, self.cozy),
            f(Archetype::Lore, self.lore),
        )
    }
}

impl<T> Index<Archetype> for ArchetypeMap<T> {
    type Output = T;

    fn index(&self, archetype: Archetype) -> &T {
        match archetype {
            Archetype::Pulse => &self.pulse,
            Archetype::Glow => &self.glow,
            Archetype::Cozy => &self.cozy,
            Archetype::Lore => &self.lore,
        }
    }
}

impl<T> IndexMut<Archetype> for ArchetypeMap<T> {
    fn index_mut(&mut self, archetype: Archetype) -> &mut T {
        match archetype {
            Archetype::Pulse => &mut self.pulse,
            Archetype::Glow => &mut self.glow,
            Archetype::Cozy => &mut self.cozy,
            Archetype::Lore => &mut self.lore,
        }
    }
}

/// Running score vector. Values may go negative under the pool scoring model.
pub type Scores = ArchetypeMap<f64>;

/// Whole-number percentage split derived from a score vector.
pub type Percentages = ArchetypeMap<u32>;

impl Scores {
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Archetype with the highest value; ties go to the canonically earlier one.
    pub fn dominant(&self) -> Archetype {
        let mut best = Archetype::Pulse;
        for archetype in Archetype::ordered() {
            if self[archetype] > self[best] {
                best = archetype;
            }
        }
        best
    }
}

/// Unordered pair of distinct archetypes, stored in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ArchetypePair {
    first: Archetype,
    second: Archetype,
}

impl ArchetypePair {
    pub const ALL: [Self; 6] = [
        Self::canonical(Archetype::Pulse, Archetype::Glow),
        Self::canonical(Archetype::Pulse, Archetype::Cozy),
        Self::canonical(Archetype::Pulse, Archetype::Lore),
        Self::canonical(Archetype::Glow, Archetype::Cozy),
        Self::canonical(Archetype::Glow, Archetype::Lore),
        Self::canonical(Archetype::Cozy, Archetype::Lore),
    ];

    /// Builds the pair, ordering the members canonically.
    ///
    /// The caller guarantees `a != b`; identical members yield a degenerate
    /// pair that never matches any content.
    pub const fn canonical(a: Archetype, b: Archetype) -> Self {
        if a.index() <= b.index() {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    pub const fn first(self) -> Archetype {
        self.first
    }

    pub const fn second(self) -> Archetype {
        self.second
    }

    pub fn contains(self, archetype: Archetype) -> bool {
        self.first == archetype || self.second == archetype
    }

    pub fn key(self) -> String {
        format!("{}_{}", self.first, self.second)
    }

    /// Absolute score difference between the two members.
    pub fn separation(self, scores: &Scores) -> f64 {
        (scores[self.first] - scores[self.second]).abs()
    }
}

impl fmt::Display for ArchetypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.first, self.second)
    }
}

/// Phase-two lookup key: a locked primary plus two candidate secondaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Matchup {
    pub primary: Archetype,
    pub candidates: ArchetypePair,
}

impl Matchup {
    pub const fn new(primary: Archetype, a: Archetype, b: Archetype) -> Self {
        Self {
            primary,
            candidates: ArchetypePair::canonical(a, b),
        }
    }

    /// The twelve matchups: each primary against every pair of the other three.
    pub fn all() -> Vec<Self> {
        let mut matchups = Vec::with_capacity(12);
        for primary in Archetype::ordered() {
            for pair in ArchetypePair::ALL {
                if !pair.contains(primary) {
                    matchups.push(Self {
                        primary,
                        candidates: pair,
                    });
                }
            }
        }
        matchups
    }

    pub fn is_valid(&self) -> bool {
        !self.candidates.contains(self.primary)
            && self.candidates.first() != self.candidates.second()
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.primary, self.candidates)
    }
}

/// Ordered primary/secondary pairing that labels a quiz outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ComboType {
    pub primary: Archetype,
    pub secondary: Archetype,
}

impl ComboType {
    /// Returns `None` when both archetypes are the same.
    pub fn new(primary: Archetype, secondary: Archetype) -> Option<Self> {
        (primary != secondary).then_some(Self { primary, secondary })
    }

    pub fn all() -> Vec<Self> {
        let mut combos = Vec::with_capacity(12);
        for primary in Archetype::ordered() {
            for secondary in Archetype::ordered() {
                if primary != secondary {
                    combos.push(Self { primary, secondary });
                }
            }
        }
        combos
    }

    pub fn id(&self) -> String {
        format!("{}_{}", self.primary, self.secondary)
    }

    pub fn mirror(&self) -> Self {
        Self {
            primary: self.secondary,
            secondary: self.primary,
        }
    }

    pub fn pair(&self) -> ArchetypePair {
        ArchetypePair::canonical(self.primary, self.secondary)
    }
}

impl fmt::Display for ComboType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.primary, self.secondary)
    }
}

/// Which ordering of a locked primary/secondary pair an answer favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorDirection {
    AsIs,
    Flipped,
}

impl MirrorDirection {
    pub const fn inverted(self) -> Self {
        match self {
            Self::AsIs => Self::Flipped,
            Self::Flipped => Self::AsIs,
        }
    }

    /// Re-expresses a direction authored against the pair's canonical order
    /// relative to the locked primary.
    pub fn oriented(self, pair: ArchetypePair, primary: Archetype) -> Self {
        if primary == pair.first() {
            self
        } else {
            self.inverted()
        }
    }
}

/// Mirror-phase tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MirrorScore {
    pub as_is: u32,
    pub flipped: u32,
}

impl MirrorScore {
    pub fn margin(&self) -> u32 {
        self.as_is.abs_diff(self.flipped)
    }
}

/// Card side the user swiped toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Engine phase. The pool engine only ever uses `Phase1` and `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Phase1,
    Phase2,
    Phase3,
    Complete,
}

impl Phase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Phase1 => "Archetype sweep",
            Self::Phase2 => "Secondary matchup",
            Self::Phase3 => "Mirror check",
            Self::Complete => "Complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_canonical_regardless_of_argument_order() {
        let pair = ArchetypePair::canonical(Archetype::Lore, Archetype::Glow);
        assert_eq!(pair.first(), Archetype::Glow);
        assert_eq!(pair.second(), Archetype::Lore);
        assert_eq!(pair.key(), "glow_lore");
    }

    #[test]
    fn twelve_matchups_and_combos() {
        let matchups = Matchup::all();
        assert_eq!(matchups.len(), 12);
        assert!(matchups.iter().all(Matchup::is_valid));
        assert_eq!(ComboType::all().len(), 12);
    }

    #[test]
    fn combo_mirror_swaps_order() {
        let combo = ComboType::new(Archetype::Cozy, Archetype::Pulse).expect("distinct");
        assert_eq!(combo.id(), "cozy_pulse");
        assert_eq!(combo.mirror().id(), "pulse_cozy");
        assert!(ComboType::new(Archetype::Glow, Archetype::Glow).is_none());
    }

    #[test]
    fn mirror_direction_orients_to_locked_primary() {
        let pair = ArchetypePair::canonical(Archetype::Pulse, Archetype::Lore);
        assert_eq!(
            MirrorDirection::AsIs.oriented(pair, Archetype::Pulse),
            MirrorDirection::AsIs
        );
        assert_eq!(
            MirrorDirection::AsIs.oriented(pair, Archetype::Lore),
            MirrorDirection::Flipped
        );
    }

    #[test]
    fn dominant_prefers_canonical_order_on_ties() {
        let weights = Scores::new(0.2, 0.8, 0.8, -0.5);
        assert_eq!(weights.dominant(), Archetype::Glow);
    }
}
