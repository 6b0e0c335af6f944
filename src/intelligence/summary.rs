// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-of-mesocycle effectiveness summaries

use chrono::{DateTime, Utc};
use tracing::info;

use crate::constants::summary as tuning;
use crate::ids::IdSource;
use crate::models::{Aggressiveness, DataSnapshot, MesocycleSummary};

/// How the mesocycle ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleEnd {
    /// Normal rollover into a new cycle
    Completed,
    /// Explicit early stop with a reason and optional free-form note
    Early {
        reason: String,
        note: Option<String>,
    },
}

/// Computes the immutable effectiveness record for an ending mesocycle
///
/// The record captures completion, fatigue, rep-dropoff, and suggestion
/// acceptance, plus a composite effectiveness score that later preset runs
/// read to calibrate how assertive their suggestions are. Callers prepend the
/// result to the snapshot's history (newest-first) and never recompute it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MesocycleSummarizer;

impl MesocycleSummarizer {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(
        &self,
        snapshot: &DataSnapshot,
        end: &CycleEnd,
        ids: &mut dyn IdSource,
        now: DateTime<Utc>,
    ) -> MesocycleSummary {
        let prescribed: u32 = snapshot
            .logs
            .iter()
            .map(|l| l.prescribed_or_completed())
            .sum();
        let completed: u32 = snapshot
            .logs
            .iter()
            .map(|l| l.sets_completed.len() as u32)
            .sum();
        let completion_rate = if prescribed > 0 {
            f64::from(completed) / f64::from(prescribed)
        } else {
            1.0
        };

        let avg_fatigue = if snapshot.checkins.is_empty() {
            tuning::DEFAULT_FATIGUE
        } else {
            snapshot
                .checkins
                .iter()
                .map(|c| f64::from(c.fatigue_level))
                .sum::<f64>()
                / snapshot.checkins.len() as f64
        };

        let dropoffs: Vec<f64> = snapshot
            .logs
            .iter()
            .map(|l| l.rep_dropoff())
            .filter(|d| d.is_finite())
            .collect();
        let avg_rep_dropoff = if dropoffs.is_empty() {
            0.0
        } else {
            dropoffs.iter().sum::<f64>() / dropoffs.len() as f64
        };

        let decisions = &snapshot.program.suggestion_decisions;
        let acceptance_rate = if decisions.is_empty() {
            tuning::DEFAULT_ACCEPTANCE
        } else {
            decisions.iter().filter(|d| d.accepted).count() as f64 / decisions.len() as f64
        };

        let effectiveness = (completion_rate * tuning::COMPLETION_WEIGHT
            + (1.0 - avg_fatigue / 10.0) * tuning::FATIGUE_WEIGHT
            + (1.0 - avg_rep_dropoff) * tuning::DROPOFF_WEIGHT)
            .clamp(0.0, 1.0);

        let notes = build_notes(end, completion_rate, effectiveness);

        info!(
            completion_rate,
            avg_fatigue,
            effectiveness,
            early = matches!(end, CycleEnd::Early { .. }),
            "summarized mesocycle"
        );

        MesocycleSummary {
            id: ids.next_id("m"),
            created_at: now,
            previous_program_id: snapshot.program.id.clone(),
            days_per_week: snapshot.program.days_per_week,
            mesocycle_length: snapshot.program.mesocycle_length,
            completion_rate: round2(completion_rate),
            avg_fatigue: round1(avg_fatigue),
            avg_rep_dropoff: round2(avg_rep_dropoff),
            suggestion_acceptance_rate: round2(acceptance_rate),
            suggestion_effectiveness_score: round2(effectiveness),
            smart_aggressiveness: snapshot
                .program
                .smart_aggressiveness
                .unwrap_or(Aggressiveness::Balanced),
            notes,
        }
    }
}

fn build_notes(end: &CycleEnd, completion_rate: f64, effectiveness: f64) -> String {
    let baseline = if completion_rate < tuning::COMPLETION_CAUTION_BELOW {
        "Completion below target; consider reducing starting volume."
    } else if effectiveness >= tuning::EFFECTIVE_AT {
        "Smart suggestions performed well this cycle."
    } else {
        "Mixed response; keep smart presets editable and review key muscles."
    };

    match end {
        CycleEnd::Completed => baseline.to_string(),
        CycleEnd::Early { reason, note } => {
            let prefix = match note.as_deref().filter(|n| !n.trim().is_empty()) {
                Some(note) => format!("Ended early: {reason} | {note}"),
                None => format!("Ended early: {reason}"),
            };
            format!("{prefix}{}{baseline}", tuning::NOTE_SEPARATOR)
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
