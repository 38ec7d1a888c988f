use crate::demo::{
    run_batch, run_combos, run_play, run_simulate, run_verify, BatchArgs, CombosArgs, PlayArgs,
    SimulateArgs,
};
use clap::{Parser, Subcommand};
use swipe_quiz::config::AppConfig;
use swipe_quiz::error::AppError;
use swipe_quiz::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "swipe-quiz",
    about = "Play, simulate, and inspect the swipe personality quiz engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive session on stdin (default command)
    Play(PlayArgs),
    /// Run one scripted session and print its result
    Simulate(SimulateArgs),
    /// Run many scripted sessions and export one CSV row per run
    Batch(BatchArgs),
    /// Check the built-in content for integrity problems
    Verify,
    /// List the twelve combo types
    Combos(CombosArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Play(PlayArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Play(args) => run_play(&config, args),
        Command::Simulate(args) => run_simulate(&config, args),
        Command::Batch(args) => run_batch(&config, args),
        Command::Verify => run_verify(),
        Command::Combos(args) => run_combos(args),
    }
}
