//! Content integrity checks. These run from tests and the `verify` command;
//! the engine itself never calls them.

use super::legacy::LegacyCorpus;
use super::pools::PoolCorpus;
use crate::quiz::domain::{Archetype, ArchetypePair, Matchup};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CorpusIssue {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
    #[error("pool '{pool}' is not referenced by any stem")]
    OrphanPool { pool: String },
    #[error("pool '{pool}' is referenced by several stems: {}", .stems.join(", "))]
    SharedPool { pool: String, stems: Vec<String> },
    #[error("stem '{stem}' references unknown pool '{pool}'")]
    UnknownPool { stem: String, pool: String },
    #[error("stem '{stem}' has no pools")]
    EmptyStem { stem: String },
    #[error("pool '{pool}' has {options} option(s); at least 2 are required")]
    UndersizedPool { pool: String, options: usize },
    #[error("option '{option}' has weight {value} for {archetype}; weights must lie in [-1, 1]")]
    WeightOutOfRange {
        option: String,
        archetype: Archetype,
        value: f64,
    },
    #[error("question '{question}' options do not match its {tag} tag")]
    MismatchedTag { question: String, tag: String },
    #[error("mirror question '{question}' offers the same direction on both sides")]
    UndecidableMirror { question: String },
    #[error("no {kind} questions for '{key}'")]
    MissingCoverage { kind: &'static str, key: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("content failed {} integrity check(s): {}", .issues.len(), summarize(.issues))]
pub struct CorpusError {
    pub issues: Vec<CorpusIssue>,
}

fn summarize(issues: &[CorpusIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn into_result(issues: Vec<CorpusIssue>) -> Result<(), CorpusError> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(CorpusError { issues })
    }
}

fn track_duplicates<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<CorpusIssue>,
) {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(CorpusIssue::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

impl LegacyCorpus {
    pub fn verify(&self) -> Result<(), CorpusError> {
        let mut issues = Vec::new();

        let all_ids = self
            .base_questions()
            .iter()
            .map(|question| question.id)
            .chain(self.combo_questions().iter().map(|question| question.id))
            .chain(self.mirror_questions().iter().map(|question| question.id));
        track_duplicates("question", all_ids, &mut issues);

        for question in self.base_questions() {
            let offered =
                ArchetypePair::canonical(question.left.archetype, question.right.archetype);
            if question.left.archetype == question.right.archetype || offered != question.pair {
                issues.push(CorpusIssue::MismatchedTag {
                    question: question.id.to_string(),
                    tag: question.pair.key(),
                });
            }
        }

        for question in self.combo_questions() {
            let offered = Matchup::new(
                question.matchup.primary,
                question.left.archetype,
                question.right.archetype,
            );
            if !offered.is_valid() || offered != question.matchup {
                issues.push(CorpusIssue::MismatchedTag {
                    question: question.id.to_string(),
                    tag: question.matchup.to_string(),
                });
            }
        }

        for question in self.mirror_questions() {
            if question.left.direction == question.right.direction {
                issues.push(CorpusIssue::UndecidableMirror {
                    question: question.id.to_string(),
                });
            }
        }

        for pair in ArchetypePair::ALL {
            if self.base_for_pair(pair).next().is_none() {
                issues.push(CorpusIssue::MissingCoverage {
                    kind: "base",
                    key: pair.key(),
                });
            }
            if self.mirror_for_pair(pair).next().is_none() {
                issues.push(CorpusIssue::MissingCoverage {
                    kind: "mirror",
                    key: pair.key(),
                });
            }
        }

        for matchup in Matchup::all() {
            if self.combo_for_matchup(matchup).next().is_none() {
                issues.push(CorpusIssue::MissingCoverage {
                    kind: "combo",
                    key: matchup.to_string(),
                });
            }
        }

        into_result(issues)
    }
}

impl PoolCorpus {
    pub fn verify(&self) -> Result<(), CorpusError> {
        let mut issues = Vec::new();

        track_duplicates("stem", self.stems().iter().map(|stem| stem.id), &mut issues);
        track_duplicates("pool", self.pools().iter().map(|pool| pool.id), &mut issues);
        track_duplicates(
            "option",
            self.pools()
                .iter()
                .flat_map(|pool| pool.options.iter().map(|option| option.id)),
            &mut issues,
        );

        let known: BTreeSet<&str> = self.pools().iter().map(|pool| pool.id).collect();
        let mut owners: BTreeMap<&str, Vec<String>> = BTreeMap::new();

        for stem in self.stems() {
            if stem.pool_ids.is_empty() {
                issues.push(CorpusIssue::EmptyStem {
                    stem: stem.id.to_string(),
                });
            }
            for pool_id in &stem.pool_ids {
                if known.contains(pool_id) {
                    owners.entry(*pool_id).or_default().push(stem.id.to_string());
                } else {
                    issues.push(CorpusIssue::UnknownPool {
                        stem: stem.id.to_string(),
                        pool: pool_id.to_string(),
                    });
                }
            }
        }

        for pool in self.pools() {
            match owners.get(pool.id) {
                None => issues.push(CorpusIssue::OrphanPool {
                    pool: pool.id.to_string(),
                }),
                Some(stems) if stems.len() > 1 => issues.push(CorpusIssue::SharedPool {
                    pool: pool.id.to_string(),
                    stems: stems.clone(),
                }),
                Some(_) => {}
            }

            if pool.options.len() < 2 {
                issues.push(CorpusIssue::UndersizedPool {
                    pool: pool.id.to_string(),
                    options: pool.options.len(),
                });
            }

            for option in &pool.options {
                for (archetype, value) in option.weights.entries() {
                    if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
                        issues.push(CorpusIssue::WeightOutOfRange {
                            option: option.id.to_string(),
                            archetype,
                            value,
                        });
                    }
                }
            }
        }

        into_result(issues)
    }
}
