use super::domain::{Archetype, ArchetypePair, Matchup, MirrorDirection, Scores, Side};
use serde::Serialize;

/// Option on a static card that credits a single archetype.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeOption {
    pub text: &'static str,
    pub emoji: &'static str,
    pub archetype: Archetype,
}

/// Phase-one card discriminating between the two archetypes of a pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub pair: ArchetypePair,
    pub left: ArchetypeOption,
    pub right: ArchetypeOption,
}

/// Phase-two card choosing between two candidate secondaries for a primary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComboQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub matchup: Matchup,
    pub left: ArchetypeOption,
    pub right: ArchetypeOption,
}

impl ComboQuestion {
    pub fn primary(&self) -> Archetype {
        self.matchup.primary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MirrorOption {
    pub text: &'static str,
    pub emoji: &'static str,
    /// Authored against the pair's canonical order: `AsIs` leans toward
    /// `pair.first()` leading.
    pub direction: MirrorDirection,
}

/// Phase-three card deciding which member of a locked pair leads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MirrorQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub pair: ArchetypePair,
    pub left: MirrorOption,
    pub right: MirrorOption,
}

/// Answer option drawn from a pool, carrying a dense weight vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolOption {
    pub id: &'static str,
    pub text: &'static str,
    pub emoji: &'static str,
    pub weights: Scores,
    pub dominant: Archetype,
}

/// Card synthesised at selection time from a stem and two pool options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolQuestion {
    pub id: String,
    pub stem_id: &'static str,
    pub pool_id: &'static str,
    pub prompt: &'static str,
    pub left: PoolOption,
    pub right: PoolOption,
}

/// Every card the engine can present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    Base(BaseQuestion),
    Combo(ComboQuestion),
    Mirror(MirrorQuestion),
    Pool(PoolQuestion),
}

impl Question {
    pub fn id(&self) -> &str {
        match self {
            Question::Base(question) => question.id,
            Question::Combo(question) => question.id,
            Question::Mirror(question) => question.id,
            Question::Pool(question) => &question.id,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Question::Base(question) => question.prompt,
            Question::Combo(question) => question.prompt,
            Question::Mirror(question) => question.prompt,
            Question::Pool(question) => question.prompt,
        }
    }

    /// Display text and emoji for one side of the card.
    pub fn option_label(&self, side: Side) -> (&'static str, &'static str) {
        match (self, side) {
            (Question::Base(q), Side::Left) => (q.left.text, q.left.emoji),
            (Question::Base(q), Side::Right) => (q.right.text, q.right.emoji),
            (Question::Combo(q), Side::Left) => (q.left.text, q.left.emoji),
            (Question::Combo(q), Side::Right) => (q.right.text, q.right.emoji),
            (Question::Mirror(q), Side::Left) => (q.left.text, q.left.emoji),
            (Question::Mirror(q), Side::Right) => (q.right.text, q.right.emoji),
            (Question::Pool(q), Side::Left) => (q.left.text, q.left.emoji),
            (Question::Pool(q), Side::Right) => (q.right.text, q.right.emoji),
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Question::Base(_) => "base",
            Question::Combo(_) => "combo",
            Question::Mirror(_) => "mirror",
            Question::Pool(_) => "pool",
        }
    }
}

/// Picks the chosen and the passed-over option of a two-sided card.
pub(crate) fn sides<T>(left: T, right: T, side: Side) -> (T, T) {
    match side {
        Side::Left => (left, right),
        Side::Right => (right, left),
    }
}
