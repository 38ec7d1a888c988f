//! Freshness-driven selection over the stem-and-pool corpus.
//!
//! Each pool is served at most once per session. The stem with the most
//! untouched pools goes first (fewest prior uses breaks ties), and the two
//! options shown always lean toward different archetypes.

use crate::quiz::content::{AnswerPool, PoolCorpus, QuestionStem};
use crate::quiz::domain::Archetype;
use crate::quiz::question::{PoolOption, PoolQuestion};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Per-session usage bookkeeping for the pool engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoolSession {
    pub used_pools: BTreeSet<&'static str>,
    pub stem_uses: BTreeMap<&'static str, u32>,
    pub shown_options: BTreeSet<&'static str>,
}

impl PoolSession {
    pub fn used_count(&self) -> usize {
        self.used_pools.len()
    }

    pub fn uses_of(&self, stem_id: &str) -> u32 {
        self.stem_uses.get(stem_id).copied().unwrap_or(0)
    }

    pub fn was_shown(&self, option_id: &str) -> bool {
        self.shown_options.contains(option_id)
    }
}

fn remaining_pools<'a>(
    corpus: &'a PoolCorpus,
    stem: &QuestionStem,
    session: &PoolSession,
) -> Vec<&'a AnswerPool> {
    stem.pool_ids
        .iter()
        .filter(|pool_id| !session.used_pools.contains(*pool_id))
        .filter_map(|pool_id| corpus.pool(pool_id))
        .filter(|pool| pool.options.len() >= 2)
        .collect()
}

/// Text for the next use of a stem: the primary phrasing first, then the
/// variants in rotation.
pub fn stem_text(stem: &QuestionStem, prior_uses: u32) -> &'static str {
    if prior_uses == 0 || stem.variants.is_empty() {
        return stem.text;
    }
    let index = (prior_uses as usize - 1) % stem.variants.len();
    stem.variants[index]
}

/// Two options with different dominant archetypes, preferring ones not yet
/// shown this session. Falls back to any two when the pool is one-sided.
pub fn pick_options<R: Rng + ?Sized>(
    pool: &AnswerPool,
    session: &PoolSession,
    rng: &mut R,
) -> Option<(PoolOption, PoolOption)> {
    let mut groups: BTreeMap<Archetype, Vec<&PoolOption>> = BTreeMap::new();
    for option in &pool.options {
        groups.entry(option.dominant).or_default().push(option);
    }

    let (first, second) = if groups.len() < 2 {
        let picked: Vec<&PoolOption> = pool.options.choose_multiple(rng, 2).collect();
        match picked.as_slice() {
            [first, second] => (*first, *second),
            _ => return None,
        }
    } else {
        let mut ranked: Vec<Vec<&PoolOption>> = groups.into_values().collect();
        ranked.shuffle(rng);
        ranked.sort_by_key(|group| {
            Reverse(
                group
                    .iter()
                    .filter(|option| !session.was_shown(option.id))
                    .count(),
            )
        });

        let mut picks = ranked.iter().take(2).filter_map(|group| {
            let fresh: Vec<&PoolOption> = group
                .iter()
                .copied()
                .filter(|option| !session.was_shown(option.id))
                .collect();
            if fresh.is_empty() {
                group.choose(rng).copied()
            } else {
                fresh.choose(rng).copied()
            }
        });
        match (picks.next(), picks.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => return None,
        }
    };

    if rng.gen_bool(0.5) {
        Some((second.clone(), first.clone()))
    } else {
        Some((first.clone(), second.clone()))
    }
}

pub fn select_pool_question<R: Rng + ?Sized>(
    corpus: &PoolCorpus,
    session: &PoolSession,
    rng: &mut R,
) -> Option<PoolQuestion> {
    let mut candidates: Vec<(&QuestionStem, Vec<&AnswerPool>)> = corpus
        .stems()
        .iter()
        .map(|stem| (stem, remaining_pools(corpus, stem, session)))
        .filter(|(_, pools)| !pools.is_empty())
        .collect();

    candidates.sort_by_key(|(stem, pools)| (Reverse(pools.len()), session.uses_of(stem.id)));
    let (stem, pools) = candidates.into_iter().next()?;

    let pool = *pools.choose(rng)?;
    let (left, right) = pick_options(pool, session, rng)?;
    let id = format!("{}-{}", pool.id, session.used_count() + 1);

    trace!(stem = stem.id, pool = pool.id, question = %id, "pool selection");

    Some(PoolQuestion {
        id,
        stem_id: stem.id,
        pool_id: pool.id,
        prompt: stem_text(stem, session.uses_of(stem.id)),
        left,
        right,
    })
}

/// Records a served question, returning the next session value.
pub fn update_pool_session(session: &PoolSession, question: &PoolQuestion) -> PoolSession {
    let mut next = session.clone();
    next.used_pools.insert(question.pool_id);
    *next.stem_uses.entry(question.stem_id).or_insert(0) += 1;
    next.shown_options.insert(question.left.id);
    next.shown_options.insert(question.right.id);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::content::{pool_option, PoolCategory};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single_stem_corpus(options: Vec<PoolOption>) -> PoolCorpus {
        PoolCorpus::new(
            vec![QuestionStem {
                id: "stem",
                text: "Pick one",
                variants: vec!["Again?", "One more"],
                pool_ids: vec!["p1", "p2", "p3"],
            }],
            ["p1", "p2", "p3"]
                .into_iter()
                .map(|id| AnswerPool {
                    id,
                    category: PoolCategory::Mood,
                    options: options.clone(),
                })
                .collect(),
        )
    }

    #[test]
    fn thirty_selections_never_repeat_a_pool() {
        let corpus = PoolCorpus::standard();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut session = PoolSession::default();
        let mut seen = BTreeSet::new();

        for _ in 0..30 {
            let question =
                select_pool_question(&corpus, &session, &mut rng).expect("pools remain");
            assert!(seen.insert(question.pool_id), "{} repeated", question.pool_id);
            session = update_pool_session(&session, &question);
        }
    }

    #[test]
    fn selection_stops_when_every_pool_is_used() {
        let corpus = PoolCorpus::standard();
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = PoolSession::default();
        let mut served = 0;

        while let Some(question) = select_pool_question(&corpus, &session, &mut rng) {
            session = update_pool_session(&session, &question);
            served += 1;
        }
        assert_eq!(served, corpus.pools().len());
    }

    #[test]
    fn stems_rotate_before_any_repeats() {
        let corpus = PoolCorpus::standard();
        let mut rng = StdRng::seed_from_u64(17);
        let mut session = PoolSession::default();
        let mut stems = BTreeSet::new();

        for _ in 0..corpus.stems().len() {
            let question = select_pool_question(&corpus, &session, &mut rng).expect("question");
            assert!(stems.insert(question.stem_id), "{} reused early", question.stem_id);
            session = update_pool_session(&session, &question);
        }
    }

    #[test]
    fn options_always_differ_in_dominant_archetype() {
        let corpus = PoolCorpus::standard();
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = PoolSession::default();

        while let Some(question) = select_pool_question(&corpus, &session, &mut rng) {
            assert_ne!(question.left.dominant, question.right.dominant, "{}", question.id);
            session = update_pool_session(&session, &question);
        }
    }

    #[test]
    fn question_ids_combine_pool_and_running_count() {
        let corpus = PoolCorpus::standard();
        let mut rng = StdRng::seed_from_u64(21);
        let first = select_pool_question(&corpus, &PoolSession::default(), &mut rng)
            .expect("question");
        assert_eq!(first.id, format!("{}-1", first.pool_id));

        let session = update_pool_session(&PoolSession::default(), &first);
        let second = select_pool_question(&corpus, &session, &mut rng).expect("question");
        assert_eq!(second.id, format!("{}-2", second.pool_id));
    }

    #[test]
    fn stem_text_cycles_variants_after_first_use() {
        let corpus = single_stem_corpus(vec![
            pool_option("a", "A", "🅰️", [1.0, 0.0, 0.0, 0.0]),
            pool_option("b", "B", "🅱️", [0.0, 1.0, 0.0, 0.0]),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = PoolSession::default();
        let mut prompts = Vec::new();

        while let Some(question) = select_pool_question(&corpus, &session, &mut rng) {
            prompts.push(question.prompt);
            session = update_pool_session(&session, &question);
        }
        assert_eq!(prompts, vec!["Pick one", "Again?", "One more"]);

        let stem = &corpus.stems()[0];
        assert_eq!(stem_text(stem, 3), "Again?");
    }

    #[test]
    fn one_sided_pool_falls_back_to_any_two() {
        let corpus = single_stem_corpus(vec![
            pool_option("a", "A", "🅰️", [0.9, 0.0, 0.0, 0.0]),
            pool_option("b", "B", "🅱️", [0.7, 0.1, 0.0, 0.0]),
            pool_option("c", "C", "©️", [0.5, 0.2, 0.0, 0.0]),
        ]);
        let mut rng = StdRng::seed_from_u64(12);
        let question = select_pool_question(&corpus, &PoolSession::default(), &mut rng)
            .expect("question");
        assert_ne!(question.left.id, question.right.id);
    }

    #[test]
    fn prefers_unshown_options() {
        let pool = AnswerPool {
            id: "p",
            category: PoolCategory::Food,
            options: vec![
                pool_option("p1", "P1", "1️⃣", [1.0, 0.0, 0.0, 0.0]),
                pool_option("p2", "P2", "2️⃣", [1.0, 0.0, 0.0, 0.0]),
                pool_option("g1", "G1", "3️⃣", [0.0, 1.0, 0.0, 0.0]),
                pool_option("c1", "C1", "4️⃣", [0.0, 0.0, 1.0, 0.0]),
            ],
        };
        let session = PoolSession {
            shown_options: ["p1", "g1"].into_iter().collect(),
            ..PoolSession::default()
        };
        let mut rng = StdRng::seed_from_u64(31);

        for _ in 0..20 {
            let (left, right) = pick_options(&pool, &session, &mut rng).expect("two options");
            let ids = [left.id, right.id];
            // Pulse and cozy groups each still hold one unshown option.
            assert!(ids.contains(&"p2"), "{ids:?}");
            assert!(ids.contains(&"c1"), "{ids:?}");
        }
    }
}
