use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{EngineConfig, EngineMode, PoolTerminationConfig};
use crate::quiz::content::{LegacyCorpus, PoolCorpus};
use crate::quiz::engine::{QuizEngine, QuizEvent, QuizState};
use crate::quiz::domain::Side;

/// Generous ceiling on events; both engines finish well inside it.
pub(super) const EVENT_LIMIT: usize = 400;

pub(super) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn legacy_engine() -> QuizEngine {
    QuizEngine::legacy(LegacyCorpus::standard())
}

pub(super) fn pool_engine() -> QuizEngine {
    pool_engine_with(PoolTerminationConfig::default())
}

pub(super) fn pool_engine_with(termination: PoolTerminationConfig) -> QuizEngine {
    let config = EngineConfig {
        mode: EngineMode::Pool,
        seed: None,
        pool: termination,
    };
    QuizEngine::pool(PoolCorpus::standard(), &config)
}

pub(super) fn engines() -> [QuizEngine; 2] {
    [legacy_engine(), pool_engine()]
}

/// Drives `engine` until completion, returning every state in order
/// (the starting state first).
pub(super) fn play(
    engine: &QuizEngine,
    seed: u64,
    mut next_event: impl FnMut(&QuizState, usize, &mut StdRng) -> QuizEvent,
) -> Vec<Arc<QuizState>> {
    let mut engine_rng = rng(seed);
    let mut policy_rng = rng(seed ^ 0x5eed);
    let mut history = vec![engine.start(&mut engine_rng)];

    for step in 0..EVENT_LIMIT {
        let current = Arc::clone(history.last().expect("history starts non-empty"));
        if current.is_complete() {
            return history;
        }
        let event = next_event(&current, step, &mut policy_rng);
        history.push(engine.dispatch(current, event, &mut engine_rng));
    }
    panic!("session did not complete within {EVENT_LIMIT} events");
}

pub(super) fn always(side: Side) -> impl FnMut(&QuizState, usize, &mut StdRng) -> QuizEvent {
    move |_, _, _| QuizEvent::Answer(side)
}

pub(super) fn always_skip(_: &QuizState, _: usize, _: &mut StdRng) -> QuizEvent {
    QuizEvent::Skip
}

/// Answers at random, skipping roughly one card in five.
pub(super) fn mixed(_: &QuizState, _: usize, rng: &mut StdRng) -> QuizEvent {
    if rng.gen_bool(0.2) {
        QuizEvent::Skip
    } else if rng.gen_bool(0.5) {
        QuizEvent::Answer(Side::Left)
    } else {
        QuizEvent::Answer(Side::Right)
    }
}

pub(super) fn final_state(history: &[Arc<QuizState>]) -> &QuizState {
    history.last().expect("history is never empty")
}
