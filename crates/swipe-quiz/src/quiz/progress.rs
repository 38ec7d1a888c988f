//! User-facing completion. Raw values are piecewise per phase; the caller
//! floors them with the previously displayed value so the bar never regresses.

use super::domain::Scores;
use super::scoring::{get_primary_secondary, get_secondary_gap};

pub const PHASE1_CEILING: f64 = 0.75;
pub const PHASE2_CEILING: f64 = 0.90;
pub const PHASE3_CEILING: f64 = 0.99;
const PHASE1_HALF: f64 = 0.375;
const PHASE1_QUESTION_SCALE: f64 = 20.0;
const LATE_PHASE_SCALE: f64 = 5.0;

/// Phase one maps into `[0, 0.75]`: half from question count, half from how
/// decisive the current gaps are.
pub fn phase1_progress(answered: u32, scores: &Scores) -> f64 {
    let base = (f64::from(answered) / PHASE1_QUESTION_SCALE).min(PHASE1_HALF);
    let primary_gap = get_primary_secondary(scores).gap;
    let secondary_gap = get_secondary_gap(scores);
    let confidence = ((primary_gap / 3.0 + secondary_gap / 2.0) / 2.0).min(PHASE1_HALF);
    (base + confidence).clamp(0.0, PHASE1_CEILING)
}

pub fn phase2_progress(phase2_answered: u32) -> f64 {
    let ramp = (f64::from(phase2_answered) / LATE_PHASE_SCALE).min(1.0);
    PHASE1_CEILING + ramp * (PHASE2_CEILING - PHASE1_CEILING)
}

pub fn phase3_progress(phase3_answered: u32) -> f64 {
    let ramp = (f64::from(phase3_answered) / LATE_PHASE_SCALE).min(1.0);
    PHASE2_CEILING + ramp * (PHASE3_CEILING - PHASE2_CEILING)
}

/// Pool engine: linear in answered count, topping out just below done.
pub fn pool_progress(answered: u32, max_answers: u32) -> f64 {
    if max_answers == 0 {
        return PHASE3_CEILING;
    }
    (f64::from(answered) / f64::from(max_answers)).min(1.0) * PHASE3_CEILING
}

pub fn displayed(raw: f64, previous: f64) -> f64 {
    raw.clamp(0.0, 1.0).max(previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn phase1_starts_at_zero() {
        assert!(phase1_progress(0, &Scores::zero()).abs() < EPS);
    }

    #[test]
    fn phase1_rewards_decisive_answers() {
        let decisive = Scores::new(6.0, 1.0, 0.0, 0.0);
        let ambiguous = Scores::new(1.5, 1.5, 1.5, 1.5);
        assert!(phase1_progress(6, &decisive) > phase1_progress(6, &ambiguous));
        assert!((phase1_progress(30, &decisive) - PHASE1_CEILING).abs() < EPS);
    }

    #[test]
    fn count_component_caps_at_half_of_phase1() {
        let flat = Scores::zero();
        assert!((phase1_progress(40, &flat) - 0.375).abs() < EPS);
    }

    #[test]
    fn later_phases_ramp_linearly() {
        assert!((phase2_progress(0) - 0.75).abs() < EPS);
        assert!((phase2_progress(5) - 0.90).abs() < EPS);
        assert!((phase2_progress(9) - 0.90).abs() < EPS);
        assert!((phase3_progress(0) - 0.90).abs() < EPS);
        assert!((phase3_progress(5) - 0.99).abs() < EPS);
    }

    #[test]
    fn pool_progress_is_linear_and_capped() {
        assert!((pool_progress(9, 18) - 0.495).abs() < EPS);
        assert!((pool_progress(30, 18) - 0.99).abs() < EPS);
    }

    #[test]
    fn displayed_never_regresses() {
        assert_eq!(displayed(0.4, 0.6), 0.6);
        assert_eq!(displayed(0.7, 0.6), 0.7);
        assert_eq!(displayed(1.4, 0.2), 1.0);
    }
}
