//! Adaptive question selection, scoring, and combo resolution.

pub mod content;
pub mod domain;
pub mod engine;
pub mod progress;
pub mod question;
pub mod scoring;
pub mod selection;
pub mod strategy;
pub mod termination;

#[cfg(test)]
mod tests;

pub use domain::{
    Archetype, ArchetypeMap, ArchetypePair, ComboType, Matchup, MirrorDirection, MirrorScore,
    Percentages, Phase, Scores, Side,
};
pub use engine::{QuizEngine, QuizEvent, QuizSession, QuizState};
pub use question::{
    ArchetypeOption, BaseQuestion, ComboQuestion, MirrorOption, MirrorQuestion, PoolOption,
    PoolQuestion, Question,
};
pub use scoring::QuizResult;
pub use strategy::{LegacyStrategy, PhaseVerdict, PoolStrategy, QuizStrategy};
