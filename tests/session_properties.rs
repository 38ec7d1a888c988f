use std::collections::BTreeSet;
use swipe_quiz::config::{EngineConfig, EngineMode, PoolTerminationConfig};
use swipe_quiz::quiz::{Archetype, QuizSession, Side};
use swipe_quiz::simulation::{batch, simulate, AnswerPolicy};

fn config(mode: EngineMode, seed: u64) -> EngineConfig {
    EngineConfig {
        mode,
        seed: Some(seed),
        pool: PoolTerminationConfig::default(),
    }
}

const MODES: [EngineMode; 2] = [EngineMode::Legacy, EngineMode::Pool];

#[test]
fn every_policy_completes_on_both_engines() {
    let policies = [
        AnswerPolicy::Left,
        AnswerPolicy::Right,
        AnswerPolicy::Alternate,
        AnswerPolicy::Random,
        AnswerPolicy::Favor(Archetype::Lore),
    ];
    for mode in MODES {
        for policy in policies {
            for seed in 0..5 {
                let report = simulate(&config(mode, seed), policy).expect("session completes");
                assert_eq!(report.engine, mode);
                assert!(report.result.answered > 0, "{mode} {policy} seed {seed}");
            }
        }
    }
}

#[test]
fn interleaved_skips_never_repeat_cards() {
    for mode in MODES {
        for seed in 0..10 {
            let mut session = QuizSession::new(&config(mode, seed));
            let mut seen = BTreeSet::new();
            let mut step = 0u32;
            while let Some(question) = session.current_question() {
                assert!(
                    seen.insert(question.id().to_string()),
                    "{mode} seed {seed}: {} shown twice",
                    question.id()
                );
                if step % 4 == 3 {
                    session.skip();
                } else if step % 2 == 0 {
                    session.answer(Side::Left);
                } else {
                    session.answer(Side::Right);
                }
                step += 1;
            }
            assert!(session.is_complete());
        }
    }
}

#[test]
fn progress_is_monotonic_across_whole_sessions() {
    for mode in MODES {
        for seed in 0..10 {
            let mut session = QuizSession::new(&config(mode, seed));
            let mut last = session.progress();
            while !session.is_complete() {
                let progress = session.answer(Side::Right).progress;
                assert!(progress >= last, "{mode} seed {seed}: {last} -> {progress}");
                last = progress;
            }
            assert_eq!(last, 1.0);
        }
    }
}

#[test]
fn favoring_an_archetype_makes_it_lead() {
    for mode in MODES {
        for archetype in Archetype::ordered() {
            let rows = batch(&config(mode, 0), AnswerPolicy::Favor(archetype), 10, 500)
                .expect("batch completes");
            let led = rows
                .iter()
                .filter(|row| row.combo.starts_with(archetype.key()))
                .count();
            assert!(led >= 6, "{mode} favor {archetype}: led {led} of 10");
        }
    }
}

#[test]
fn all_skip_sessions_split_evenly() {
    for mode in MODES {
        let mut session = QuizSession::new(&config(mode, 1));
        while !session.is_complete() {
            session.skip();
        }
        let result = session.result().expect("result");
        assert_eq!(result.answered, 0);
        for archetype in Archetype::ordered() {
            assert_eq!(result.percentages[archetype], 25);
        }
    }
}
