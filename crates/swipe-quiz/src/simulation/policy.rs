use crate::error::SessionError;
use crate::quiz::{Archetype, MirrorDirection, Question, Side};
use rand::{Rng, RngCore};
use std::fmt;
use std::str::FromStr;

/// Scripted swiper used by simulations and batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerPolicy {
    Left,
    Right,
    /// Left on even steps, right on odd.
    Alternate,
    Random,
    /// Whichever side leans toward the archetype; left when neither does.
    Favor(Archetype),
}

impl AnswerPolicy {
    pub fn choose(&self, question: &Question, step: usize, rng: &mut dyn RngCore) -> Side {
        match self {
            AnswerPolicy::Left => Side::Left,
            AnswerPolicy::Right => Side::Right,
            AnswerPolicy::Alternate if step % 2 == 0 => Side::Left,
            AnswerPolicy::Alternate => Side::Right,
            AnswerPolicy::Random => {
                if rng.gen_bool(0.5) {
                    Side::Left
                } else {
                    Side::Right
                }
            }
            AnswerPolicy::Favor(archetype) => favored_side(question, *archetype),
        }
    }
}

fn favored_side(question: &Question, archetype: Archetype) -> Side {
    match question {
        Question::Base(question) if question.right.archetype == archetype => Side::Right,
        Question::Combo(question) if question.right.archetype == archetype => Side::Right,
        Question::Base(_) | Question::Combo(_) => Side::Left,
        Question::Mirror(question) => {
            let wanted = if question.pair.first() == archetype {
                MirrorDirection::AsIs
            } else if question.pair.second() == archetype {
                MirrorDirection::Flipped
            } else {
                return Side::Left;
            };
            if question.right.direction == wanted {
                Side::Right
            } else {
                Side::Left
            }
        }
        Question::Pool(question) => {
            if question.right.weights[archetype] > question.left.weights[archetype] {
                Side::Right
            } else {
                Side::Left
            }
        }
    }
}

impl FromStr for AnswerPolicy {
    type Err = SessionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        if let Some(name) = value.strip_prefix("favor:") {
            return Archetype::parse(name)
                .map(AnswerPolicy::Favor)
                .ok_or_else(|| SessionError::UnknownArchetype {
                    name: name.to_string(),
                });
        }
        match value.as_str() {
            "left" | "l" => Ok(AnswerPolicy::Left),
            "right" | "r" => Ok(AnswerPolicy::Right),
            "alternate" | "alt" => Ok(AnswerPolicy::Alternate),
            "random" => Ok(AnswerPolicy::Random),
            _ => Err(SessionError::UnknownPolicy {
                policy: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for AnswerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerPolicy::Left => f.write_str("left"),
            AnswerPolicy::Right => f.write_str("right"),
            AnswerPolicy::Alternate => f.write_str("alternate"),
            AnswerPolicy::Random => f.write_str("random"),
            AnswerPolicy::Favor(archetype) => write!(f, "favor:{}", archetype.key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::content::LegacyCorpus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_and_displays_policies() {
        for raw in ["left", "right", "alternate", "random", "favor:lore"] {
            let policy: AnswerPolicy = raw.parse().expect("known policy");
            assert_eq!(policy.to_string(), raw);
        }
        assert_eq!(
            "FAVOR:Glow".parse::<AnswerPolicy>(),
            Ok(AnswerPolicy::Favor(Archetype::Glow))
        );
        assert!(matches!(
            "favor:chaos".parse::<AnswerPolicy>(),
            Err(SessionError::UnknownArchetype { .. })
        ));
        assert!(matches!(
            "sideways".parse::<AnswerPolicy>(),
            Err(SessionError::UnknownPolicy { .. })
        ));
    }

    #[test]
    fn favor_picks_the_matching_option() {
        let corpus = LegacyCorpus::standard();
        let mut rng = StdRng::seed_from_u64(0);
        for question in corpus.base_questions() {
            let side = AnswerPolicy::Favor(Archetype::Cozy).choose(
                &Question::Base(question.clone()),
                0,
                &mut rng,
            );
            if question.pair.contains(Archetype::Cozy) {
                let chosen = match side {
                    Side::Left => &question.left,
                    Side::Right => &question.right,
                };
                assert_eq!(chosen.archetype, Archetype::Cozy, "{}", question.id);
            }
        }
    }

    #[test]
    fn favor_on_mirror_cards_prefers_the_archetype_leading() {
        let corpus = LegacyCorpus::standard();
        let mut rng = StdRng::seed_from_u64(0);
        let question = corpus
            .mirror_questions()
            .first()
            .cloned()
            .expect("mirror content");
        let second = question.pair.second();
        let side =
            AnswerPolicy::Favor(second).choose(&Question::Mirror(question.clone()), 0, &mut rng);
        let chosen = match side {
            Side::Left => &question.left,
            Side::Right => &question.right,
        };
        assert_eq!(chosen.direction, MirrorDirection::Flipped);
    }

    #[test]
    fn alternate_flips_each_step() {
        let corpus = LegacyCorpus::standard();
        let question = Question::Base(corpus.base_questions()[0].clone());
        let mut rng = StdRng::seed_from_u64(0);
        let sides: Vec<Side> = (0..4)
            .map(|step| AnswerPolicy::Alternate.choose(&question, step, &mut rng))
            .collect();
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left, Side::Right]);
    }
}
