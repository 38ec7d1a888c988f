//! Reducer and session façade. Every event produces a new `QuizState`
//! behind a fresh `Arc`; events after completion hand back the same `Arc`.

use super::domain::{Archetype, MirrorScore, Phase, Scores, Side};
use super::progress::displayed;
use super::question::Question;
use super::scoring::QuizResult;
use super::selection::PoolSession;
use super::strategy::{LegacyStrategy, PhaseVerdict, PoolStrategy, QuizStrategy};
use crate::config::{EngineConfig, EngineMode};
use crate::quiz::content::{LegacyCorpus, PoolCorpus};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Immutable snapshot of one quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizState {
    pub engine: EngineMode,
    pub phase: Phase,
    pub scores: Scores,
    /// Every question id served as the current card this session. The peek
    /// card is not reserved until it is actually served.
    pub asked_ids: BTreeSet<String>,
    pub answered: u32,
    pub skipped: u32,
    pub progress: f64,
    pub primary: Option<Archetype>,
    pub secondary: Option<Archetype>,
    pub mirror_score: MirrorScore,
    pub phase2_answered: u32,
    pub phase3_answered: u32,
    pub current_question: Option<Question>,
    pub next_question: Option<Question>,
    pub result: Option<QuizResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_session: Option<PoolSession>,
}

impl QuizState {
    pub fn new(engine: EngineMode) -> Self {
        Self {
            engine,
            phase: Phase::Phase1,
            scores: Scores::zero(),
            asked_ids: BTreeSet::new(),
            answered: 0,
            skipped: 0,
            progress: 0.0,
            primary: None,
            secondary: None,
            mirror_score: MirrorScore::default(),
            phase2_answered: 0,
            phase3_answered: 0,
            current_question: None,
            next_question: None,
            result: None,
            pool_session: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Answered plus skipped.
    pub fn total_asked(&self) -> u32 {
        self.answered + self.skipped
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "side", rename_all = "snake_case")]
pub enum QuizEvent {
    Answer(Side),
    Skip,
}

/// Drives a strategy through the phase state machine.
pub struct QuizEngine {
    strategy: Box<dyn QuizStrategy>,
}

impl QuizEngine {
    pub fn new(strategy: Box<dyn QuizStrategy>) -> Self {
        Self { strategy }
    }

    pub fn legacy(corpus: LegacyCorpus) -> Self {
        Self::new(Box::new(LegacyStrategy::new(corpus)))
    }

    pub fn pool(corpus: PoolCorpus, config: &EngineConfig) -> Self {
        Self::new(Box::new(PoolStrategy::new(corpus, config.pool)))
    }

    /// Engine over the built-in content for the configured mode.
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.mode {
            EngineMode::Legacy => Self::legacy(LegacyCorpus::standard()),
            EngineMode::Pool => Self::pool(PoolCorpus::standard(), config),
        }
    }

    pub fn mode(&self) -> EngineMode {
        self.strategy.mode()
    }

    pub fn start(&self, rng: &mut dyn RngCore) -> Arc<QuizState> {
        let state = self.strategy.initial_state();
        debug!(engine = %self.mode(), "starting quiz");
        Arc::new(self.enter_phase(state, Phase::Phase1, rng))
    }

    pub fn dispatch(
        &self,
        state: Arc<QuizState>,
        event: QuizEvent,
        rng: &mut dyn RngCore,
    ) -> Arc<QuizState> {
        if state.is_complete() {
            return state;
        }
        let Some(question) = state.current_question.clone() else {
            return state;
        };

        let mut next = (*state).clone();
        let verdict = match event {
            QuizEvent::Answer(side) => {
                self.strategy.apply_answer(&mut next, &question, side);
                next.answered += 1;
                self.strategy.check_answer(&next)
            }
            QuizEvent::Skip => {
                next.skipped += 1;
                self.strategy.check_skip(&next)
            }
        };

        let next = match verdict {
            PhaseVerdict::Continue => self.advance(next, rng),
            PhaseVerdict::End { skip_next_phase } => {
                let phase = self.strategy.end_phase(&mut next, skip_next_phase);
                self.enter_phase(next, phase, rng)
            }
        };
        Arc::new(next)
    }

    fn select(&self, state: &mut QuizState, rng: &mut dyn RngCore) -> Option<Question> {
        let question = self.strategy.select_question(state, rng)?;
        state.asked_ids.insert(question.id().to_string());
        Some(question)
    }

    fn refresh_progress(&self, state: &mut QuizState) {
        state.progress = displayed(self.strategy.raw_progress(state), state.progress);
    }

    /// Stages a peek card against a scratch copy, leaving the reservation
    /// and any pool bookkeeping untouched.
    fn preview(&self, state: &QuizState, rng: &mut dyn RngCore) -> Option<Question> {
        let mut scratch = state.clone();
        self.strategy.select_question(&mut scratch, rng)
    }

    /// Selects a current card against the latest scores and stages a peek
    /// card behind it. Returns false when the phase has nothing left.
    fn serve(&self, state: &mut QuizState, rng: &mut dyn RngCore) -> bool {
        state.next_question = None;
        let Some(question) = self.select(state, rng) else {
            state.current_question = None;
            return false;
        };
        state.current_question = Some(question);
        state.next_question = self.preview(state, rng);
        self.refresh_progress(state);
        true
    }

    /// Serves the next card, or ends the phase when nothing is left.
    fn advance(&self, mut state: QuizState, rng: &mut dyn RngCore) -> QuizState {
        if self.serve(&mut state, rng) {
            return state;
        }
        debug!(phase = ?state.phase, "questions exhausted, ending phase");
        let phase = self.strategy.end_phase(&mut state, false);
        self.enter_phase(state, phase, rng)
    }

    /// Moves into `phase`, skipping straight past any phase whose content is
    /// already spent.
    fn enter_phase(
        &self,
        mut state: QuizState,
        mut phase: Phase,
        rng: &mut dyn RngCore,
    ) -> QuizState {
        loop {
            if state.phase != phase {
                debug!(from = ?state.phase, to = ?phase, "phase transition");
            }
            state.phase = phase;
            state.current_question = None;
            state.next_question = None;

            if phase == Phase::Complete {
                return self.finish(state);
            }

            if self.serve(&mut state, rng) {
                return state;
            }

            debug!(phase = ?phase, "no questions available on entry");
            phase = self.strategy.end_phase(&mut state, false);
        }
    }

    fn finish(&self, mut state: QuizState) -> QuizState {
        let result = self.strategy.build_result(&state);
        info!(
            combo = %result.combo_id,
            answered = result.answered,
            skipped = result.skipped,
            mirror_resolved = result.mirror_resolved,
            "quiz complete"
        );
        state.result = Some(result);
        state.progress = 1.0;
        state
    }
}

/// Owns an engine, its random source, and the latest state.
pub struct QuizSession {
    engine: QuizEngine,
    rng: StdRng,
    state: Arc<QuizState>,
}

impl QuizSession {
    /// Seeded from `config.seed`, or from entropy when unset.
    pub fn new(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_engine(QuizEngine::from_config(config), rng)
    }

    pub fn with_engine(engine: QuizEngine, mut rng: StdRng) -> Self {
        let state = engine.start(&mut rng);
        Self { engine, rng, state }
    }

    pub fn mode(&self) -> EngineMode {
        self.engine.mode()
    }

    pub fn dispatch(&mut self, event: QuizEvent) -> Arc<QuizState> {
        let state = Arc::clone(&self.state);
        self.state = self.engine.dispatch(state, event, &mut self.rng);
        Arc::clone(&self.state)
    }

    pub fn answer(&mut self, side: Side) -> Arc<QuizState> {
        self.dispatch(QuizEvent::Answer(side))
    }

    pub fn skip(&mut self) -> Arc<QuizState> {
        self.dispatch(QuizEvent::Skip)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.state.current_question.as_ref()
    }

    pub fn next_question(&self) -> Option<&Question> {
        self.state.next_question.as_ref()
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.state.result.as_ref()
    }

    pub fn state(&self) -> Arc<QuizState> {
        Arc::clone(&self.state)
    }

    /// Discards the attempt and starts over with the same engine and random
    /// stream.
    pub fn restart(&mut self) {
        self.state = self.engine.start(&mut self.rng);
    }
}
