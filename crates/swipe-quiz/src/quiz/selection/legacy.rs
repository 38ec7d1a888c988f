//! Three-phase selection over the static corpus. Each phase narrows toward
//! the dimension the engine is least sure about; ties between equally
//! relevant candidates are broken uniformly at random.

use crate::quiz::content::LegacyCorpus;
use crate::quiz::domain::{Archetype, ArchetypePair, Matchup, Scores};
use crate::quiz::question::{BaseQuestion, ComboQuestion, MirrorQuestion};
use crate::quiz::scoring::get_leaderboard;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::trace;

fn choose_unasked<'a, T, R>(
    candidates: impl Iterator<Item = &'a T>,
    id: impl Fn(&T) -> &str,
    asked: &BTreeSet<String>,
    rng: &mut R,
) -> Option<&'a T>
where
    T: 'a,
    R: Rng + ?Sized,
{
    let open: Vec<&T> = candidates.filter(|item| !asked.contains(id(*item))).collect();
    open.choose(rng).copied()
}

/// Pairs ordered most-ambiguous first. Pairs with equal separation are
/// shuffled so the sweep does not always open on the same pair.
pub fn rank_pairs_by_ambiguity<R: Rng + ?Sized>(
    scores: &Scores,
    rng: &mut R,
) -> Vec<ArchetypePair> {
    let mut pairs = ArchetypePair::ALL.to_vec();
    pairs.shuffle(rng);
    pairs.sort_by(|a, b| {
        a.separation(scores)
            .partial_cmp(&b.separation(scores))
            .unwrap_or(Ordering::Equal)
    });
    pairs
}

pub fn select_phase1_question<R: Rng + ?Sized>(
    corpus: &LegacyCorpus,
    scores: &Scores,
    asked: &BTreeSet<String>,
    rng: &mut R,
) -> Option<BaseQuestion> {
    for pair in rank_pairs_by_ambiguity(scores, rng) {
        if let Some(question) =
            choose_unasked(corpus.base_for_pair(pair), |q| q.id, asked, rng)
        {
            trace!(pair = %pair, question = question.id, "phase 1 selection");
            return Some(question.clone());
        }
    }
    None
}

/// The two strongest archetypes other than the locked primary.
pub fn secondary_candidates(scores: &Scores, primary: Archetype) -> (Archetype, Archetype) {
    let mut rest = get_leaderboard(scores)
        .into_iter()
        .filter(|archetype| *archetype != primary);
    match (rest.next(), rest.next()) {
        (Some(first), Some(second)) => (first, second),
        // Unreachable with four archetypes; keeps the function total.
        _ => (primary, primary),
    }
}

pub fn select_phase2_question<R: Rng + ?Sized>(
    corpus: &LegacyCorpus,
    scores: &Scores,
    primary: Archetype,
    asked: &BTreeSet<String>,
    rng: &mut R,
) -> Option<ComboQuestion> {
    let (first, second) = secondary_candidates(scores, primary);
    let matchup = Matchup::new(primary, first, second);

    if let Some(question) = choose_unasked(corpus.combo_for_matchup(matchup), |q| q.id, asked, rng)
    {
        trace!(matchup = %matchup, question = question.id, "phase 2 selection");
        return Some(question.clone());
    }

    let fallback = choose_unasked(corpus.combo_for_primary(primary), |q| q.id, asked, rng);
    if let Some(question) = fallback {
        trace!(matchup = %matchup, question = question.id, "phase 2 fallback selection");
    }
    fallback.cloned()
}

pub fn select_phase3_question<R: Rng + ?Sized>(
    corpus: &LegacyCorpus,
    primary: Archetype,
    secondary: Archetype,
    asked: &BTreeSet<String>,
    rng: &mut R,
) -> Option<MirrorQuestion> {
    let pair = ArchetypePair::canonical(primary, secondary);
    let question = choose_unasked(corpus.mirror_for_pair(pair), |q| q.id, asked, rng)?;
    trace!(pair = %pair, question = question.id, "phase 3 selection");
    Some(question.clone())
}
