//! Pure score arithmetic: answer application, rankings, percentage
//! normalisation and combo-type resolution. Nothing here mutates its inputs.

use super::domain::{Archetype, ComboType, MirrorDirection, MirrorScore, Percentages, Scores};
use serde::Serialize;
use std::cmp::Ordering;

/// Credit for the archetype the user picked.
pub const SELECTED_CREDIT: f64 = 1.0;
/// Partial credit for the archetype that was offered but passed over.
pub const PASSED_OVER_CREDIT: f64 = 0.25;

pub fn apply_answer(scores: &Scores, selected: Archetype, other: Archetype) -> Scores {
    let mut next = *scores;
    next[selected] += SELECTED_CREDIT;
    next[other] += PASSED_OVER_CREDIT;
    next
}

/// Adds a pool option's weight vector onto the scores.
pub fn apply_weighted_answer(scores: &Scores, weights: &Scores) -> Scores {
    scores.map(|archetype, value| value + weights[archetype])
}

pub fn apply_mirror_answer(mirror: &MirrorScore, direction: MirrorDirection) -> MirrorScore {
    let mut next = *mirror;
    match direction {
        MirrorDirection::AsIs => next.as_is += 1,
        MirrorDirection::Flipped => next.flipped += 1,
    }
    next
}

/// Archetypes ordered by score, highest first. Equal scores keep canonical
/// order because the sort is stable.
pub fn get_leaderboard(scores: &Scores) -> [Archetype; 4] {
    let mut order = Archetype::ordered();
    order.sort_by(|a, b| {
        scores[*b]
            .partial_cmp(&scores[*a])
            .unwrap_or(Ordering::Equal)
    });
    order
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrimarySecondary {
    pub primary: Archetype,
    pub secondary: Archetype,
    /// Rank-1 score minus rank-2 score; never negative.
    pub gap: f64,
}

pub fn get_primary_secondary(scores: &Scores) -> PrimarySecondary {
    let board = get_leaderboard(scores);
    PrimarySecondary {
        primary: board[0],
        secondary: board[1],
        gap: scores[board[0]] - scores[board[1]],
    }
}

/// Rank-2 score minus rank-3 score.
pub fn get_secondary_gap(scores: &Scores) -> f64 {
    let board = get_leaderboard(scores);
    scores[board[1]] - scores[board[2]]
}

/// Shifts the scores to be non-negative and converts them to whole
/// percentages. An all-zero total yields an even 25% split.
pub fn normalise_to_percentages(scores: &Scores) -> Percentages {
    let min = Archetype::ordered()
        .iter()
        .map(|archetype| scores[*archetype])
        .fold(f64::INFINITY, f64::min);
    let shift = if min < 0.0 { -min } else { 0.0 };
    let shifted = scores.map(|_, value| value + shift);
    let total: f64 = shifted.entries().iter().map(|(_, value)| value).sum();

    if !total.is_finite() || total <= f64::EPSILON {
        return Percentages::splat(25);
    }

    shifted.map(|_, value| ((value / total) * 100.0).round().max(0.0) as u32)
}

/// Resolves the final combo from the top two scores, swapping them when the
/// mirror phase ran and `flipped` strictly beat `as_is`.
pub fn resolve_combo_type(
    scores: &Scores,
    mirror: &MirrorScore,
    mirror_resolved: bool,
) -> ComboType {
    let ranked = get_primary_secondary(scores);
    let flip = mirror_resolved && mirror.flipped > mirror.as_is;
    let (primary, secondary) = if flip {
        (ranked.secondary, ranked.primary)
    } else {
        (ranked.primary, ranked.secondary)
    };

    ComboType { primary, secondary }
}

/// Terminal snapshot of a finished quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub combo: ComboType,
    pub combo_id: String,
    pub scores: Scores,
    pub percentages: Percentages,
    pub karma: Percentages,
    pub answered: u32,
    pub skipped: u32,
    pub mirror_resolved: bool,
}

/// Builds the legacy result. When the mirror phase swapped the labels, the
/// raw primary/secondary values are swapped too so the displayed split agrees
/// with the label.
pub fn build_result(
    scores: &Scores,
    mirror: &MirrorScore,
    mirror_resolved: bool,
    answered: u32,
    skipped: u32,
) -> QuizResult {
    let ranked = get_primary_secondary(scores);
    let combo = resolve_combo_type(scores, mirror, mirror_resolved);

    let display = if combo.primary != ranked.primary {
        scores
            .with(combo.primary, scores[ranked.primary])
            .with(combo.secondary, scores[ranked.secondary])
    } else {
        *scores
    };
    let percentages = normalise_to_percentages(&display);

    QuizResult {
        combo,
        combo_id: combo.id(),
        scores: display,
        percentages,
        karma: percentages,
        answered,
        skipped,
        mirror_resolved,
    }
}

pub fn build_pool_result(scores: &Scores, answered: u32, skipped: u32) -> QuizResult {
    let combo = resolve_combo_type(scores, &MirrorScore::default(), false);
    let percentages = normalise_to_percentages(scores);

    QuizResult {
        combo,
        combo_id: combo.id(),
        scores: *scores,
        percentages,
        karma: percentages,
        answered,
        skipped,
        mirror_resolved: false,
    }
}
