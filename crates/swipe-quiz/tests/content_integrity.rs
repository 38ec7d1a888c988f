use std::collections::BTreeSet;
use swipe_quiz::quiz::content::{combo_catalog, CorpusIssue, LegacyCorpus, PoolCorpus};
use swipe_quiz::quiz::{Archetype, ArchetypePair, ComboType, Matchup};

#[test]
fn built_in_content_verifies() {
    LegacyCorpus::standard()
        .verify()
        .expect("legacy content is consistent");
    PoolCorpus::standard()
        .verify()
        .expect("pool content is consistent");
}

#[test]
fn every_pool_belongs_to_exactly_one_stem() {
    let corpus = PoolCorpus::standard();
    let mut owners = std::collections::BTreeMap::new();
    for stem in corpus.stems() {
        for pool_id in &stem.pool_ids {
            *owners.entry(*pool_id).or_insert(0) += 1;
        }
    }
    for pool in corpus.pools() {
        assert_eq!(owners.get(pool.id), Some(&1), "pool {}", pool.id);
    }
}

#[test]
fn pool_weights_stay_in_range_and_dominant_is_argmax() {
    for pool in PoolCorpus::standard().pools() {
        assert!(pool.options.len() >= 2, "pool {}", pool.id);
        for option in &pool.options {
            for (_, weight) in option.weights.entries() {
                assert!((-1.0..=1.0).contains(&weight), "option {}", option.id);
            }
            let best = option.weights[option.dominant];
            for archetype in Archetype::ordered() {
                assert!(option.weights[archetype] <= best, "option {}", option.id);
            }
        }
    }
}

#[test]
fn legacy_content_covers_every_pair_and_matchup() {
    let corpus = LegacyCorpus::standard();
    for pair in ArchetypePair::ALL {
        assert!(corpus.base_for_pair(pair).count() >= 1, "base {pair}");
        assert!(corpus.mirror_for_pair(pair).count() >= 1, "mirror {pair}");
    }
    for matchup in Matchup::all() {
        assert!(corpus.combo_for_matchup(matchup).count() >= 1, "combo {matchup}");
    }
}

#[test]
fn question_ids_are_unique_across_kinds() {
    let corpus = LegacyCorpus::standard();
    let mut ids = BTreeSet::new();
    let all = corpus
        .base_questions()
        .iter()
        .map(|question| question.id)
        .chain(corpus.combo_questions().iter().map(|question| question.id))
        .chain(corpus.mirror_questions().iter().map(|question| question.id));
    for id in all {
        assert!(ids.insert(id), "duplicate id {id}");
    }
}

#[test]
fn catalog_has_twelve_distinct_combos_with_mirrors() {
    let catalog = combo_catalog();
    assert_eq!(catalog.len(), 12);
    let ids: BTreeSet<String> = catalog.iter().map(|profile| profile.combo().id()).collect();
    assert_eq!(ids.len(), 12);
    for combo in ComboType::all() {
        assert!(ids.contains(&combo.mirror().id()));
        assert!(combo.profile().is_some());
    }
}

#[test]
fn verification_reports_every_problem_at_once() {
    let corpus = LegacyCorpus::new(Vec::new(), Vec::new(), Vec::new());
    let error = corpus.verify().expect_err("empty content fails");
    assert!(error
        .issues
        .iter()
        .all(|issue| matches!(issue, CorpusIssue::MissingCoverage { .. })));
    assert!(error.to_string().contains("integrity check"));
}
