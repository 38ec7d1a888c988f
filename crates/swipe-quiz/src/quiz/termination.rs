//! Stop heuristics evaluated after every event.
//!
//! Phase one loosens its gap requirement as evidence accumulates: an early
//! stop needs a decisive lead, a late one only a moderate lead, and the total
//! cap always ends the sweep. Phases two and three key off answered counts
//! only, so skips never end them directly.

use super::domain::{Archetype, MirrorScore, Scores};
use super::scoring::{get_leaderboard, get_primary_secondary, get_secondary_gap};
use crate::config::PoolTerminationConfig;
use serde::Serialize;

pub const PHASE1_MIN_ANSWERED: u32 = 10;
pub const PHASE1_MAX_ASKED: u32 = 25;
pub const PHASE1_EARLY_ASKED: u32 = 12;
pub const PHASE1_MODERATE_ASKED: u32 = 18;
pub const PHASE1_STRONG_PRIMARY_GAP: f64 = 2.0;
pub const PHASE1_CLEAR_PRIMARY_GAP: f64 = 1.5;
pub const PHASE1_SECONDARY_GAP: f64 = 1.0;

pub const PHASE2_MAX_ANSWERED: u32 = 5;
pub const PHASE2_MIN_ANSWERED: u32 = 3;
pub const PHASE2_CANDIDATE_GAP: f64 = 1.0;

pub const MIRROR_RESOLVED_GAP: f64 = 2.5;

pub const PHASE3_MAX_ANSWERED: u32 = 5;
pub const PHASE3_MIN_ANSWERED: u32 = 2;
pub const PHASE3_MIN_MARGIN: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phase1Decision {
    pub should_end: bool,
    pub skip_phase2: bool,
}

impl Phase1Decision {
    const CONTINUE: Self = Self {
        should_end: false,
        skip_phase2: false,
    };
    const TO_PHASE2: Self = Self {
        should_end: true,
        skip_phase2: false,
    };
    const SKIP_PHASE2: Self = Self {
        should_end: true,
        skip_phase2: true,
    };
}

/// `answered` excludes skips; `total_asked` includes them.
pub fn should_end_phase1(scores: &Scores, answered: u32, total_asked: u32) -> Phase1Decision {
    if answered < PHASE1_MIN_ANSWERED {
        return if total_asked >= PHASE1_MAX_ASKED {
            Phase1Decision::TO_PHASE2
        } else {
            Phase1Decision::CONTINUE
        };
    }

    let primary_gap = get_primary_secondary(scores).gap;
    let secondary_gap = get_secondary_gap(scores);

    if total_asked >= PHASE1_EARLY_ASKED {
        if primary_gap >= PHASE1_STRONG_PRIMARY_GAP && secondary_gap >= PHASE1_SECONDARY_GAP {
            return Phase1Decision::SKIP_PHASE2;
        }
        if primary_gap >= PHASE1_CLEAR_PRIMARY_GAP && secondary_gap < PHASE1_SECONDARY_GAP {
            return Phase1Decision::TO_PHASE2;
        }
    }

    if total_asked >= PHASE1_MODERATE_ASKED && primary_gap >= PHASE1_CLEAR_PRIMARY_GAP {
        return Phase1Decision::TO_PHASE2;
    }

    if total_asked >= PHASE1_MAX_ASKED {
        return Phase1Decision::TO_PHASE2;
    }

    Phase1Decision::CONTINUE
}

/// Gap between the two strongest archetypes other than `primary`.
pub fn candidate_gap(scores: &Scores, primary: Archetype) -> f64 {
    let candidates: Vec<Archetype> = get_leaderboard(scores)
        .into_iter()
        .filter(|archetype| *archetype != primary)
        .collect();
    scores[candidates[0]] - scores[candidates[1]]
}

pub fn should_end_phase2(scores: &Scores, primary: Archetype, phase2_answered: u32) -> bool {
    if phase2_answered >= PHASE2_MAX_ANSWERED {
        return true;
    }
    phase2_answered >= PHASE2_MIN_ANSWERED
        && candidate_gap(scores, primary) >= PHASE2_CANDIDATE_GAP
}

/// Mirror disambiguation runs unless the top two are already 2.5 apart.
pub fn needs_mirror_resolution(scores: &Scores) -> bool {
    get_primary_secondary(scores).gap < MIRROR_RESOLVED_GAP
}

pub fn should_end_phase3(mirror: &MirrorScore, phase3_answered: u32) -> bool {
    if phase3_answered >= PHASE3_MAX_ANSWERED {
        return true;
    }
    phase3_answered >= PHASE3_MIN_ANSWERED && mirror.margin() >= PHASE3_MIN_MARGIN
}

/// Pool engine stop rule; tolerant of negative scores since it only compares
/// the leader with the runner-up.
pub fn should_end_pool_quiz(
    scores: &Scores,
    answered: u32,
    config: &PoolTerminationConfig,
) -> bool {
    if answered >= config.max_answers {
        return true;
    }
    answered >= config.min_answers && get_primary_secondary(scores).gap >= config.confidence_gap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pulse: f64, glow: f64, cozy: f64, lore: f64) -> Scores {
        Scores::new(pulse, glow, cozy, lore)
    }

    #[test]
    fn strong_signal_skips_phase2() {
        let decision = should_end_phase1(&scores(8.0, 5.0, 3.0, 1.0), 12, 12);
        assert_eq!(
            decision,
            Phase1Decision {
                should_end: true,
                skip_phase2: true
            }
        );
    }

    #[test]
    fn floor_blocks_early_stop_regardless_of_gap() {
        let decision = should_end_phase1(&scores(10.0, 0.0, 0.0, 0.0), 9, 9);
        assert!(!decision.should_end);
    }

    #[test]
    fn cap_forces_stop_even_below_floor() {
        let decision = should_end_phase1(&Scores::zero(), 4, 25);
        assert!(decision.should_end);
        assert!(!decision.skip_phase2);
    }

    #[test]
    fn clear_primary_with_ambiguous_secondary_goes_to_phase2() {
        let decision = should_end_phase1(&scores(6.0, 4.5, 4.0, 1.0), 12, 12);
        assert_eq!(decision, Phase1Decision::TO_PHASE2);
    }

    #[test]
    fn early_checks_need_twelve_asked() {
        let decision = should_end_phase1(&scores(8.0, 5.0, 3.0, 1.0), 11, 11);
        assert!(!decision.should_end);
    }

    #[test]
    fn moderate_signal_needs_eighteen_asked() {
        // Primary clear but secondary also clear: neither early rule applies.
        let sample = scores(6.0, 4.5, 3.0, 1.0);
        assert!(!should_end_phase1(&sample, 15, 17).should_end);
        assert_eq!(should_end_phase1(&sample, 15, 18), Phase1Decision::TO_PHASE2);
    }

    #[test]
    fn ambiguous_scores_run_to_the_cap() {
        let sample = scores(5.0, 4.75, 4.5, 4.25);
        assert!(!should_end_phase1(&sample, 20, 24).should_end);
        assert_eq!(should_end_phase1(&sample, 20, 25), Phase1Decision::TO_PHASE2);
    }

    #[test]
    fn phase2_rules() {
        let split = scores(9.0, 4.0, 2.5, 1.0);
        assert!(!should_end_phase2(&split, Archetype::Pulse, 2));
        assert!(should_end_phase2(&split, Archetype::Pulse, 3));

        let tied = scores(9.0, 3.0, 2.5, 1.0);
        assert!(!should_end_phase2(&tied, Archetype::Pulse, 4));
        assert!(should_end_phase2(&tied, Archetype::Pulse, 5));
    }

    #[test]
    fn candidate_gap_ignores_primary_rank() {
        // Primary has been overtaken; candidates are still the other three.
        let sample = scores(3.0, 5.0, 2.0, 0.5);
        assert_eq!(candidate_gap(&sample, Archetype::Pulse), 3.0);
    }

    #[test]
    fn mirror_threshold_is_exclusive() {
        assert!(needs_mirror_resolution(&scores(4.0, 1.6, 0.0, 0.0)));
        assert!(!needs_mirror_resolution(&scores(4.0, 1.5, 0.0, 0.0)));
    }

    #[test]
    fn phase3_rules() {
        let one_sided = MirrorScore { as_is: 1, flipped: 0 };
        assert!(!should_end_phase3(&one_sided, 1));

        let lean = MirrorScore { as_is: 2, flipped: 0 };
        assert!(should_end_phase3(&lean, 2));

        let tie = MirrorScore { as_is: 2, flipped: 2 };
        assert!(!should_end_phase3(&tie, 4));
        assert!(should_end_phase3(&MirrorScore { as_is: 2, flipped: 3 }, 5));
        assert!(should_end_phase3(&MirrorScore { as_is: 3, flipped: 2 }, 5));
    }

    #[test]
    fn pool_quiz_ends_on_cap_or_confident_lead() {
        let config = PoolTerminationConfig::default();
        let close = scores(-1.0, -0.5, 0.2, 0.4);
        assert!(!should_end_pool_quiz(&close, config.min_answers, &config));
        assert!(should_end_pool_quiz(&close, config.max_answers, &config));

        let decisive = scores(-2.0, 5.0, -1.0, 1.5);
        assert!(!should_end_pool_quiz(&decisive, config.min_answers - 1, &config));
        assert!(should_end_pool_quiz(&decisive, config.min_answers, &config));
    }
}
