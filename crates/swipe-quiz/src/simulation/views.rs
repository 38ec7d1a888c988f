use crate::config::EngineMode;
use crate::quiz::{Phase, Question, QuizEvent, QuizResult, QuizState};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    pub step: usize,
    pub phase: Phase,
    pub question_id: String,
    pub kind: &'static str,
    pub prompt: &'static str,
    pub event: QuizEvent,
    pub chosen: Option<&'static str>,
    pub progress: f64,
}

impl TranscriptEntry {
    pub(crate) fn new(
        step: usize,
        before: &QuizState,
        question: &Question,
        event: QuizEvent,
        progress: f64,
    ) -> Self {
        let chosen = match event {
            QuizEvent::Answer(side) => Some(question.option_label(side).0),
            QuizEvent::Skip => None,
        };
        Self {
            step,
            phase: before.phase,
            question_id: question.id().to_string(),
            kind: question.kind(),
            prompt: question.prompt(),
            event,
            chosen,
            progress,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub engine: EngineMode,
    pub seed: Option<u64>,
    pub policy: String,
    pub result: QuizResult,
    pub transcript: Vec<TranscriptEntry>,
}

/// Flat per-run record for CSV export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub run: usize,
    pub seed: u64,
    pub engine: EngineMode,
    pub policy: String,
    pub combo: String,
    pub combo_name: &'static str,
    pub pulse_pct: u32,
    pub glow_pct: u32,
    pub cozy_pct: u32,
    pub lore_pct: u32,
    pub answered: u32,
    pub skipped: u32,
    pub mirror_resolved: bool,
}

impl BatchRow {
    pub fn from_report(run: usize, seed: u64, report: &SimulationReport) -> Self {
        let result = &report.result;
        Self {
            run,
            seed,
            engine: report.engine,
            policy: report.policy.clone(),
            combo: result.combo_id.clone(),
            combo_name: result
                .combo
                .profile()
                .map(|profile| profile.name)
                .unwrap_or_default(),
            pulse_pct: result.percentages.pulse,
            glow_pct: result.percentages.glow,
            cozy_pct: result.percentages.cozy,
            lore_pct: result.percentages.lore,
            answered: result.answered,
            skipped: result.skipped,
            mirror_resolved: result.mirror_resolved,
        }
    }
}

pub fn write_batch_csv<W: Write>(rows: &[BatchRow], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// How many runs landed on each combo id.
pub fn combo_distribution(rows: &[BatchRow]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.combo.clone()).or_insert(0) += 1;
    }
    counts
}
