use crate::infra::{
    engine_config, parse_engine, parse_input, parse_policy, progress_bar, render_question,
    render_result,
};
use chrono::{DateTime, Local};
use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use swipe_quiz::config::{AppConfig, EngineMode};
use swipe_quiz::error::AppError;
use swipe_quiz::quiz::content::{combo_catalog, ComboProfile, LegacyCorpus, PoolCorpus};
use swipe_quiz::quiz::{QuizEvent, QuizSession};
use swipe_quiz::simulation::{
    batch, combo_distribution, simulate, write_batch_csv, AnswerPolicy, SimulationReport,
};
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct PlayArgs {
    /// Engine to drive the session (legacy or pool)
    #[arg(long, value_parser = parse_engine)]
    pub(crate) engine: Option<EngineMode>,
    /// Seed for reproducible question order
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Scripted answers: left, right, alternate, random, or favor:<archetype>
    #[arg(long, value_parser = parse_policy)]
    pub(crate) answer_policy: AnswerPolicy,
    #[arg(long, value_parser = parse_engine)]
    pub(crate) engine: Option<EngineMode>,
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Emit the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Include every card and swipe in the output
    #[arg(long)]
    pub(crate) transcript: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Number of sessions to run
    #[arg(long, default_value_t = 100)]
    pub(crate) runs: usize,
    #[arg(long, value_parser = parse_policy, default_value = "random")]
    pub(crate) answer_policy: AnswerPolicy,
    #[arg(long, value_parser = parse_engine)]
    pub(crate) engine: Option<EngineMode>,
    /// Seed for the first run; later runs use consecutive seeds
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Write CSV rows here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CombosArgs {
    /// Emit the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct SimulationEnvelope<'a> {
    generated_at: DateTime<Local>,
    #[serde(flatten)]
    report: &'a SimulationReport,
}

pub(crate) fn run_play(config: &AppConfig, args: PlayArgs) -> Result<(), AppError> {
    let engine_config = engine_config(config, args.engine, args.seed);
    let mut session = QuizSession::new(&engine_config);
    info!(engine = %session.mode(), seed = ?engine_config.seed, "interactive session started");

    println!("Swipe quiz ({} engine)", session.mode());
    println!("Answer with l/left, r/right, s/skip (or empty line), q to quit.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    while !session.is_complete() {
        let state = session.state();
        let Some(question) = state.current_question.as_ref() else {
            break;
        };

        println!("{} {}", progress_bar(session.progress()), state.phase.label());
        println!("{}", render_question(question));
        if let Some(next) = session.next_question() {
            println!("  (up next: {})", next.prompt());
        }
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            println!("Input closed; session left unfinished.");
            return Ok(());
        };

        match parse_input(&line) {
            Ok(Some(event)) => {
                session.dispatch(event);
            }
            Ok(None) => {
                println!("Quit after {} answers.", session.state().answered);
                return Ok(());
            }
            Err(err) => println!("  {err}"),
        }
        println!();
    }

    if let Some(result) = session.result() {
        println!("{}", progress_bar(session.progress()));
        for line in render_result(result) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn run_simulate(config: &AppConfig, args: SimulateArgs) -> Result<(), AppError> {
    let engine_config = engine_config(config, args.engine, args.seed);
    let mut report = simulate(&engine_config, args.answer_policy)?;
    if !args.transcript {
        report.transcript.clear();
    }

    if args.json {
        let envelope = SimulationEnvelope {
            generated_at: Local::now(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    println!(
        "Simulated {} session with policy '{}'{}",
        report.engine,
        report.policy,
        report
            .seed
            .map(|seed| format!(" (seed {seed})"))
            .unwrap_or_default()
    );
    for entry in &report.transcript {
        let swipe = match entry.event {
            QuizEvent::Answer(side) => format!("{side:?}").to_ascii_lowercase(),
            QuizEvent::Skip => "skip".to_string(),
        };
        println!(
            "  {:>2}. [{}] {} -> {} {}",
            entry.step + 1,
            entry.kind,
            entry.prompt,
            swipe,
            entry.chosen.unwrap_or("")
        );
    }
    for line in render_result(&report.result) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_batch(config: &AppConfig, args: BatchArgs) -> Result<(), AppError> {
    let base_seed = args
        .seed
        .or(config.engine.seed)
        .unwrap_or_else(rand::random::<u64>);
    let engine_config = engine_config(config, args.engine, Some(base_seed));
    info!(
        runs = args.runs,
        engine = %engine_config.mode,
        policy = %args.answer_policy,
        base_seed,
        "running batch"
    );

    let rows = batch(&engine_config, args.answer_policy, args.runs, base_seed)?;

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            write_batch_csv(&rows, file)?;
            println!(
                "Wrote {} runs to {} (base seed {})",
                rows.len(),
                path.display(),
                base_seed
            );
            for (combo, count) in combo_distribution(&rows) {
                println!("  {combo:<12} {count}");
            }
        }
        None => write_batch_csv(&rows, io::stdout().lock())?,
    }
    Ok(())
}

pub(crate) fn run_verify() -> Result<(), AppError> {
    let checks = [
        ("legacy", LegacyCorpus::standard().verify()),
        ("pool", PoolCorpus::standard().verify()),
    ];

    let mut first_failure = None;
    for (name, outcome) in checks {
        match outcome {
            Ok(()) => println!("{name} content: ok"),
            Err(err) => {
                println!("{name} content: {} issue(s)", err.issues.len());
                for issue in &err.issues {
                    println!("  - {issue}");
                }
                warn!(corpus = name, issues = err.issues.len(), "content verification failed");
                first_failure.get_or_insert(err);
            }
        }
    }

    match first_failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

pub(crate) fn run_combos(args: CombosArgs) -> Result<(), AppError> {
    let catalog: &[ComboProfile] = combo_catalog();
    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    for profile in catalog {
        let combo = profile.combo();
        println!("{:<12} {:<22} {}", combo.id(), profile.name, profile.tagline);
    }
    Ok(())
}
