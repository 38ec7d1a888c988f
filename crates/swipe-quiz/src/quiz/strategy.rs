//! The two engines behind one interface. The orchestrator in `engine` only
//! ever talks to a `QuizStrategy`; which one it holds is decided when the
//! session is built.

use super::content::{LegacyCorpus, PoolCorpus};
use super::domain::{MirrorScore, Phase, Scores, Side};
use super::engine::QuizState;
use super::progress::{phase1_progress, phase2_progress, phase3_progress, pool_progress};
use super::question::{sides, Question};
use super::scoring::{
    apply_answer, apply_mirror_answer, apply_weighted_answer, build_pool_result, build_result,
    get_leaderboard, get_primary_secondary, QuizResult,
};
use super::selection::{
    secondary_candidates, select_phase1_question, select_phase2_question, select_phase3_question,
    select_pool_question, update_pool_session, PoolSession,
};
use super::termination::{
    needs_mirror_resolution, should_end_phase1, should_end_phase2, should_end_phase3,
    should_end_pool_quiz,
};
use crate::config::{EngineMode, PoolTerminationConfig};
use rand::RngCore;

/// Outcome of checking termination after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseVerdict {
    Continue,
    End { skip_next_phase: bool },
}

impl PhaseVerdict {
    const END: Self = Self::End {
        skip_next_phase: false,
    };

    fn end_if(condition: bool) -> Self {
        if condition {
            Self::END
        } else {
            Self::Continue
        }
    }
}

pub trait QuizStrategy: Send + Sync {
    fn mode(&self) -> EngineMode;

    /// Fresh state before the first question is chosen.
    fn initial_state(&self) -> QuizState {
        QuizState::new(self.mode())
    }

    /// Chooses a question for `state.phase`. Strategies may record
    /// bookkeeping on `state`; the caller reserves the returned id.
    fn select_question(&self, state: &mut QuizState, rng: &mut dyn RngCore) -> Option<Question>;

    /// Folds an answer into scores and phase counters.
    fn apply_answer(&self, state: &mut QuizState, question: &Question, side: Side);

    fn check_answer(&self, state: &QuizState) -> PhaseVerdict;

    fn check_skip(&self, state: &QuizState) -> PhaseVerdict;

    /// Locks whatever the finished phase decided and returns the phase to
    /// enter next.
    fn end_phase(&self, state: &mut QuizState, skip_next_phase: bool) -> Phase;

    fn raw_progress(&self, state: &QuizState) -> f64;

    fn build_result(&self, state: &QuizState) -> QuizResult;
}

/// Three-phase engine over the static base/combo/mirror corpus.
#[derive(Debug, Clone)]
pub struct LegacyStrategy {
    corpus: LegacyCorpus,
}

impl LegacyStrategy {
    pub fn new(corpus: LegacyCorpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &LegacyCorpus {
        &self.corpus
    }

    fn phase1_verdict(state: &QuizState) -> PhaseVerdict {
        let decision = should_end_phase1(&state.scores, state.answered, state.total_asked());
        if decision.should_end {
            PhaseVerdict::End {
                skip_next_phase: decision.skip_phase2,
            }
        } else {
            PhaseVerdict::Continue
        }
    }

    fn phase_after_secondary(state: &QuizState) -> Phase {
        if needs_mirror_resolution(&state.scores) {
            Phase::Phase3
        } else {
            Phase::Complete
        }
    }

    /// Mirror tallies are kept relative to the locked primary. If the final
    /// ranking still names the same pair, re-express them against whichever
    /// member ranks first now; otherwise the mirror answers no longer apply.
    fn final_mirror(state: &QuizState, scores: &Scores) -> Option<MirrorScore> {
        if state.phase3_answered == 0 {
            return None;
        }
        let (locked_primary, locked_secondary) = (state.primary?, state.secondary?);
        let ranked = get_primary_secondary(scores);
        if ranked.primary == locked_primary && ranked.secondary == locked_secondary {
            Some(state.mirror_score)
        } else if ranked.primary == locked_secondary && ranked.secondary == locked_primary {
            Some(MirrorScore {
                as_is: state.mirror_score.flipped,
                flipped: state.mirror_score.as_is,
            })
        } else {
            None
        }
    }
}

impl Default for LegacyStrategy {
    fn default() -> Self {
        Self::new(LegacyCorpus::standard())
    }
}

impl QuizStrategy for LegacyStrategy {
    fn mode(&self) -> EngineMode {
        EngineMode::Legacy
    }

    fn select_question(&self, state: &mut QuizState, rng: &mut dyn RngCore) -> Option<Question> {
        match state.phase {
            Phase::Phase1 => {
                select_phase1_question(&self.corpus, &state.scores, &state.asked_ids, rng)
                    .map(Question::Base)
            }
            Phase::Phase2 => {
                let primary = state.primary?;
                select_phase2_question(&self.corpus, &state.scores, primary, &state.asked_ids, rng)
                    .map(Question::Combo)
            }
            Phase::Phase3 => {
                let (primary, secondary) = (state.primary?, state.secondary?);
                select_phase3_question(&self.corpus, primary, secondary, &state.asked_ids, rng)
                    .map(Question::Mirror)
            }
            Phase::Complete => None,
        }
    }

    fn apply_answer(&self, state: &mut QuizState, question: &Question, side: Side) {
        match question {
            Question::Base(question) => {
                let (chosen, other) = sides(&question.left, &question.right, side);
                state.scores = apply_answer(&state.scores, chosen.archetype, other.archetype);
            }
            Question::Combo(question) => {
                let (chosen, other) = sides(&question.left, &question.right, side);
                state.scores = apply_answer(&state.scores, chosen.archetype, other.archetype);
                state.phase2_answered += 1;
            }
            Question::Mirror(question) => {
                let (chosen, _) = sides(&question.left, &question.right, side);
                let direction = match state.primary {
                    Some(primary) => chosen.direction.oriented(question.pair, primary),
                    None => chosen.direction,
                };
                state.mirror_score = apply_mirror_answer(&state.mirror_score, direction);
                state.phase3_answered += 1;
            }
            Question::Pool(question) => {
                let (chosen, _) = sides(&question.left, &question.right, side);
                state.scores = apply_weighted_answer(&state.scores, &chosen.weights);
            }
        }
    }

    fn check_answer(&self, state: &QuizState) -> PhaseVerdict {
        match state.phase {
            Phase::Phase1 => Self::phase1_verdict(state),
            Phase::Phase2 => match state.primary {
                Some(primary) => PhaseVerdict::end_if(should_end_phase2(
                    &state.scores,
                    primary,
                    state.phase2_answered,
                )),
                None => PhaseVerdict::END,
            },
            Phase::Phase3 => {
                PhaseVerdict::end_if(should_end_phase3(&state.mirror_score, state.phase3_answered))
            }
            Phase::Complete => PhaseVerdict::Continue,
        }
    }

    fn check_skip(&self, state: &QuizState) -> PhaseVerdict {
        match state.phase {
            Phase::Phase1 => Self::phase1_verdict(state),
            // Later phases end on answered counts only.
            _ => PhaseVerdict::Continue,
        }
    }

    fn end_phase(&self, state: &mut QuizState, skip_next_phase: bool) -> Phase {
        match state.phase {
            Phase::Phase1 => {
                let [first, second, ..] = get_leaderboard(&state.scores);
                state.primary = Some(first);
                if skip_next_phase {
                    state.secondary = Some(second);
                    Self::phase_after_secondary(state)
                } else {
                    Phase::Phase2
                }
            }
            Phase::Phase2 => {
                let primary = match state.primary {
                    Some(primary) => primary,
                    None => {
                        let primary = get_leaderboard(&state.scores)[0];
                        state.primary = Some(primary);
                        primary
                    }
                };
                state.secondary = Some(secondary_candidates(&state.scores, primary).0);
                Self::phase_after_secondary(state)
            }
            Phase::Phase3 | Phase::Complete => Phase::Complete,
        }
    }

    fn raw_progress(&self, state: &QuizState) -> f64 {
        match state.phase {
            Phase::Phase1 => phase1_progress(state.answered, &state.scores),
            Phase::Phase2 => phase2_progress(state.phase2_answered),
            Phase::Phase3 => phase3_progress(state.phase3_answered),
            Phase::Complete => 1.0,
        }
    }

    fn build_result(&self, state: &QuizState) -> QuizResult {
        let mirror = Self::final_mirror(state, &state.scores);
        build_result(
            &state.scores,
            &mirror.unwrap_or_default(),
            mirror.is_some(),
            state.answered,
            state.skipped,
        )
    }
}

/// Single-phase engine over stems and weighted answer pools.
#[derive(Debug, Clone)]
pub struct PoolStrategy {
    corpus: PoolCorpus,
    termination: PoolTerminationConfig,
}

impl PoolStrategy {
    pub fn new(corpus: PoolCorpus, termination: PoolTerminationConfig) -> Self {
        Self {
            corpus,
            termination,
        }
    }

    pub fn corpus(&self) -> &PoolCorpus {
        &self.corpus
    }

    pub fn termination(&self) -> &PoolTerminationConfig {
        &self.termination
    }
}

impl Default for PoolStrategy {
    fn default() -> Self {
        Self::new(PoolCorpus::standard(), PoolTerminationConfig::default())
    }
}

impl QuizStrategy for PoolStrategy {
    fn mode(&self) -> EngineMode {
        EngineMode::Pool
    }

    fn initial_state(&self) -> QuizState {
        let mut state = QuizState::new(self.mode());
        state.pool_session = Some(PoolSession::default());
        state
    }

    fn select_question(&self, state: &mut QuizState, rng: &mut dyn RngCore) -> Option<Question> {
        if state.phase != Phase::Phase1 {
            return None;
        }
        let session = state.pool_session.get_or_insert_with(PoolSession::default);
        let question = select_pool_question(&self.corpus, session, rng)?;
        *session = update_pool_session(session, &question);
        Some(Question::Pool(question))
    }

    fn apply_answer(&self, state: &mut QuizState, question: &Question, side: Side) {
        if let Question::Pool(question) = question {
            let (chosen, _) = sides(&question.left, &question.right, side);
            state.scores = apply_weighted_answer(&state.scores, &chosen.weights);
        }
    }

    fn check_answer(&self, state: &QuizState) -> PhaseVerdict {
        PhaseVerdict::end_if(should_end_pool_quiz(
            &state.scores,
            state.answered,
            &self.termination,
        ))
    }

    fn check_skip(&self, _state: &QuizState) -> PhaseVerdict {
        PhaseVerdict::Continue
    }

    fn end_phase(&self, _state: &mut QuizState, _skip_next_phase: bool) -> Phase {
        Phase::Complete
    }

    fn raw_progress(&self, state: &QuizState) -> f64 {
        match state.phase {
            Phase::Complete => 1.0,
            _ => pool_progress(state.answered, self.termination.max_answers),
        }
    }

    fn build_result(&self, state: &QuizState) -> QuizResult {
        build_pool_result(&state.scores, state.answered, state.skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::{Archetype, MirrorDirection};

    fn legacy_state(phase: Phase) -> QuizState {
        let mut state = QuizState::new(EngineMode::Legacy);
        state.phase = phase;
        state
    }

    #[test]
    fn phase1_end_with_strong_signal_locks_both_and_checks_mirror() {
        let strategy = LegacyStrategy::default();
        let mut state = legacy_state(Phase::Phase1);
        state.scores = Scores::new(8.0, 5.0, 3.0, 1.0);

        let next = strategy.end_phase(&mut state, true);
        assert_eq!(state.primary, Some(Archetype::Pulse));
        assert_eq!(state.secondary, Some(Archetype::Glow));
        // Gap of 3.0 clears the mirror threshold.
        assert_eq!(next, Phase::Complete);
    }

    #[test]
    fn phase1_end_without_skip_moves_to_phase2() {
        let strategy = LegacyStrategy::default();
        let mut state = legacy_state(Phase::Phase1);
        state.scores = Scores::new(1.0, 4.0, 2.0, 0.0);

        assert_eq!(strategy.end_phase(&mut state, false), Phase::Phase2);
        assert_eq!(state.primary, Some(Archetype::Glow));
        assert_eq!(state.secondary, None);
    }

    #[test]
    fn phase2_end_picks_top_candidate_and_usually_needs_mirror() {
        let strategy = LegacyStrategy::default();
        let mut state = legacy_state(Phase::Phase2);
        state.primary = Some(Archetype::Cozy);
        state.scores = Scores::new(2.0, 1.0, 4.0, 3.5);

        assert_eq!(strategy.end_phase(&mut state, false), Phase::Phase3);
        assert_eq!(state.secondary, Some(Archetype::Lore));
    }

    #[test]
    fn skips_only_end_phase1() {
        let strategy = LegacyStrategy::default();
        let mut state = legacy_state(Phase::Phase1);
        state.skipped = 25;
        assert_eq!(
            strategy.check_skip(&state),
            PhaseVerdict::End {
                skip_next_phase: false
            }
        );

        let mut later = legacy_state(Phase::Phase2);
        later.primary = Some(Archetype::Pulse);
        later.phase2_answered = 5;
        assert_eq!(strategy.check_skip(&later), PhaseVerdict::Continue);
        assert_eq!(strategy.check_answer(&later), PhaseVerdict::END);
    }

    #[test]
    fn mirror_answers_are_oriented_to_the_locked_primary() {
        let strategy = LegacyStrategy::default();
        let question = strategy
            .corpus()
            .mirror_questions()
            .iter()
            .find(|question| question.pair.first() == Archetype::Glow)
            .cloned()
            .expect("glow-first mirror question");
        let as_is_side = if question.left.direction == MirrorDirection::AsIs {
            Side::Left
        } else {
            Side::Right
        };

        let mut state = legacy_state(Phase::Phase3);
        state.primary = Some(question.pair.second());
        state.secondary = Some(question.pair.first());
        strategy.apply_answer(&mut state, &Question::Mirror(question), as_is_side);

        // Canonical "as is" favours the pair's first member, which is the
        // locked secondary here.
        assert_eq!(state.mirror_score, MirrorScore { as_is: 0, flipped: 1 });
        assert_eq!(state.phase3_answered, 1);
    }

    #[test]
    fn legacy_result_reorients_mirror_when_ranking_swapped() {
        let strategy = LegacyStrategy::default();
        let mut state = legacy_state(Phase::Complete);
        state.primary = Some(Archetype::Pulse);
        state.secondary = Some(Archetype::Lore);
        // Lore overtook pulse during phase 2.
        state.scores = Scores::new(5.0, 1.0, 0.0, 6.0);
        state.mirror_score = MirrorScore { as_is: 3, flipped: 0 };
        state.phase3_answered = 3;

        let result = strategy.build_result(&state);
        // Mirror answers said pulse leads.
        assert!(result.mirror_resolved);
        assert_eq!(result.combo.primary, Archetype::Pulse);
        assert_eq!(result.combo.secondary, Archetype::Lore);
        assert_eq!(result.scores[Archetype::Pulse], 6.0);
    }

    #[test]
    fn pool_progress_and_termination_follow_config() {
        let strategy = PoolStrategy::new(
            PoolCorpus::standard(),
            PoolTerminationConfig {
                min_answers: 2,
                max_answers: 4,
                confidence_gap: 1.0,
            },
        );
        let mut state = strategy.initial_state();
        assert!(state.pool_session.is_some());

        state.answered = 2;
        assert!((strategy.raw_progress(&state) - 0.495).abs() < 1e-9);
        assert_eq!(strategy.check_answer(&state), PhaseVerdict::Continue);

        state.scores = Scores::new(1.5, 0.0, -0.5, 0.25);
        assert_eq!(strategy.check_answer(&state), PhaseVerdict::END);
        assert_eq!(strategy.check_skip(&state), PhaseVerdict::Continue);
    }
}
