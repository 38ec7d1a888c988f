use swipe_quiz::config::{AppConfig, EngineConfig, EngineMode};
use swipe_quiz::error::SessionError;
use swipe_quiz::quiz::{Archetype, Question, QuizEvent, QuizResult, Side};
use swipe_quiz::simulation::AnswerPolicy;

const BAR_WIDTH: usize = 24;

pub(crate) fn parse_engine(raw: &str) -> Result<EngineMode, String> {
    EngineMode::parse(raw)
        .ok_or_else(|| format!("unknown engine '{raw}' (expected legacy or pool)"))
}

pub(crate) fn parse_policy(raw: &str) -> Result<AnswerPolicy, String> {
    raw.parse::<AnswerPolicy>().map_err(|err| err.to_string())
}

/// Applies command-line overrides on top of the loaded configuration.
pub(crate) fn engine_config(
    config: &AppConfig,
    engine: Option<EngineMode>,
    seed: Option<u64>,
) -> EngineConfig {
    let mut engine_config = config.engine.clone();
    if let Some(mode) = engine {
        engine_config.mode = mode;
    }
    if seed.is_some() {
        engine_config.seed = seed;
    }
    engine_config
}

/// Maps one line of interactive input. `Ok(None)` means the player quit.
pub(crate) fn parse_input(line: &str) -> Result<Option<QuizEvent>, SessionError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "l" | "left" | "<" => Ok(Some(QuizEvent::Answer(Side::Left))),
        "r" | "right" | ">" => Ok(Some(QuizEvent::Answer(Side::Right))),
        "s" | "skip" | "" => Ok(Some(QuizEvent::Skip)),
        "q" | "quit" | "exit" => Ok(None),
        other => Err(SessionError::UnknownInput {
            input: other.to_string(),
        }),
    }
}

pub(crate) fn progress_bar(progress: f64) -> String {
    let clamped = progress.clamp(0.0, 1.0);
    let filled = (clamped * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        clamped * 100.0
    )
}

pub(crate) fn render_question(question: &Question) -> String {
    let (left_text, left_emoji) = question.option_label(Side::Left);
    let (right_text, right_emoji) = question.option_label(Side::Right);
    format!(
        "{}\n  <- {} {}\n  -> {} {}",
        question.prompt(),
        left_emoji,
        left_text,
        right_emoji,
        right_text
    )
}

pub(crate) fn render_result(result: &QuizResult) -> Vec<String> {
    let mut lines = Vec::new();
    match result.combo.profile() {
        Some(profile) => lines.push(format!(
            "{} ({}) - {}",
            profile.name, result.combo_id, profile.tagline
        )),
        None => lines.push(result.combo_id.clone()),
    }
    for archetype in Archetype::ordered() {
        lines.push(format!(
            "  {:<6} {:>3}%  (score {:.2})",
            archetype.label(),
            result.percentages[archetype],
            result.scores[archetype]
        ));
    }
    lines.push(format!(
        "  answered {} | skipped {} | mirror check {}",
        result.answered,
        result.skipped,
        if result.mirror_resolved { "used" } else { "not used" }
    ));
    if let Some(profile) = result.combo.profile() {
        let matches: Vec<String> = profile
            .compatible_combos()
            .iter()
            .map(|combo| {
                combo
                    .profile()
                    .map(|other| other.name.to_string())
                    .unwrap_or_else(|| combo.id())
            })
            .collect();
        lines.push(format!("  clicks with: {}", matches.join(", ")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_aliases_map_to_events() {
        assert_eq!(parse_input("L"), Ok(Some(QuizEvent::Answer(Side::Left))));
        assert_eq!(parse_input(" right "), Ok(Some(QuizEvent::Answer(Side::Right))));
        assert_eq!(parse_input(""), Ok(Some(QuizEvent::Skip)));
        assert_eq!(parse_input("q"), Ok(None));
        assert!(matches!(
            parse_input("up"),
            Err(SessionError::UnknownInput { .. })
        ));
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0), format!("[{}]   0%", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(1.0), format!("[{}] 100%", "#".repeat(BAR_WIDTH)));
        assert!(progress_bar(0.5).starts_with(&format!("[{}", "#".repeat(BAR_WIDTH / 2))));
    }

    #[test]
    fn engine_and_policy_parsers_report_bad_values() {
        assert_eq!(parse_engine("stem-pool"), Ok(EngineMode::Pool));
        assert!(parse_engine("neural").is_err());
        assert_eq!(parse_policy("favor:cozy"), Ok(AnswerPolicy::Favor(Archetype::Cozy)));
        assert!(parse_policy("sideways")
            .expect_err("unknown policy")
            .contains("sideways"));
    }
}
