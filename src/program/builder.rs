//! Prescription building and atomic setup application

use std::collections::HashMap;

use tracing::info;

use super::split::split_templates;
use crate::constants::program as tuning;
use crate::ids::IdSource;
use crate::models::{
    DataSnapshot, Exercise, ExerciseAllocationInput, MuscleVolume, Prescription, Program,
    ProgramSetupInput, ProgramStatus, ProgressionModel, TrainingDay, UserProfile,
};

/// The complete replacement cycle produced from one setup
///
/// Persistence must commit all five pieces together; a reader should never
/// observe a program whose training days or volumes belong to another cycle.
#[derive(Debug, Clone)]
pub struct NextCycle {
    pub user: UserProfile,
    pub program: Program,
    pub training_days: Vec<TrainingDay>,
    pub volumes: Vec<MuscleVolume>,
    pub prescriptions: Vec<Prescription>,
}

/// Materialize the split templates into training days for a program
pub fn build_training_days(
    program_id: &str,
    setup: &ProgramSetupInput,
    ids: &mut dyn IdSource,
) -> Vec<TrainingDay> {
    split_templates(setup.days_per_week, setup.split_preference)
        .into_iter()
        .enumerate()
        .map(|(idx, tpl)| TrainingDay {
            id: ids.next_id("d"),
            program_id: program_id.to_string(),
            day_number: idx as u32 + 1,
            name: tpl.name,
            muscle_groups: tpl.muscle_groups,
        })
        .collect()
}

// Rotation counters for spreading a muscle's exercises across its candidate
// days; explicit state, created fresh per build.
#[derive(Debug, Default)]
struct DayRotation {
    counters: HashMap<String, usize>,
}

impl DayRotation {
    fn choose<'a>(&mut self, days: &'a [TrainingDay], muscle: &str) -> Option<&'a TrainingDay> {
        let candidates: Vec<&TrainingDay> = days
            .iter()
            .filter(|d| d.muscle_groups.iter().any(|m| m == muscle))
            .collect();
        if candidates.is_empty() {
            return days.first();
        }
        let counter = self.counters.entry(muscle.to_string()).or_insert(0);
        *counter += 1;
        Some(candidates[(*counter - 1) % candidates.len()])
    }
}

fn target_rep_range(muscle: &str) -> &'static str {
    if tuning::LOW_REP_MUSCLES.contains(&muscle) {
        tuning::LOW_REP_RANGE
    } else {
        tuning::DEFAULT_REP_RANGE
    }
}

/// Assign allocated exercises to training days and convert weekly set targets
/// into per-day prescriptions
///
/// Days are chosen per muscle by round-robin over the days covering that
/// muscle; allocations with zero weekly sets and unknown exercise ids are
/// skipped.
pub fn build_prescriptions(
    training_days: &[TrainingDay],
    allocations: &[ExerciseAllocationInput],
    exercises: &[Exercise],
    progression_reason: &str,
    model_overrides: &HashMap<String, ProgressionModel>,
    ids: &mut dyn IdSource,
) -> Vec<Prescription> {
    let mut rotation = DayRotation::default();
    let mut prescriptions = Vec::new();

    for alloc in allocations.iter().filter(|a| a.weekly_sets > 0) {
        let Some(day) = rotation.choose(training_days, &alloc.muscle_group) else {
            continue;
        };
        let Some(exercise) = exercises.iter().find(|e| e.id == alloc.exercise_id) else {
            continue;
        };

        let per_day = (f64::from(alloc.weekly_sets) / tuning::SESSIONS_PER_WEEK_DIVISOR).round()
            as u32;
        let sets = per_day.clamp(tuning::MIN_SETS_PER_DAY, tuning::MAX_SETS_PER_DAY);
        let model = model_overrides.get(&exercise.id).copied();

        prescriptions.push(Prescription {
            id: ids.next_id("pr"),
            training_day_id: day.id.clone(),
            exercise_id: exercise.id.clone(),
            sets,
            target_reps: target_rep_range(&alloc.muscle_group).to_string(),
            target_load: tuning::DEFAULT_TARGET_LOAD,
            target_rir: tuning::DEFAULT_TARGET_RIR,
            progression_reason: format!(
                "{progression_reason} \u{2022} {}",
                model.unwrap_or(ProgressionModel::DoubleProgression)
            ),
            progression_model: model,
        });
    }

    prescriptions
}

/// Spread a weekly set target evenly over the selected exercises,
/// remainder-first in list order
pub fn evenly_allocate_sets(total_sets: u32, exercise_ids: &[String]) -> HashMap<String, u32> {
    if exercise_ids.is_empty() {
        return HashMap::new();
    }
    let count = exercise_ids.len() as u32;
    let base = total_sets / count;
    let remainder = total_sets % count;

    exercise_ids
        .iter()
        .enumerate()
        .map(|(idx, id)| {
            let extra = if (idx as u32) < remainder { 1 } else { 0 };
            (id.clone(), base + extra)
        })
        .collect()
}

/// Apply a setup to the current snapshot, producing the complete next cycle
///
/// Pure with respect to the snapshot: nothing is mutated, and the returned
/// [`NextCycle`] is meant to replace the old program, days, volumes, and
/// prescriptions in one transaction.
pub fn apply_program_setup(
    snapshot: &DataSnapshot,
    setup: &ProgramSetupInput,
    ids: &mut dyn IdSource,
) -> NextCycle {
    let program_id = ids.next_id("p");

    let acceptance_rate = if setup.suggestion_decisions.is_empty() {
        None
    } else {
        Some(
            setup
                .suggestion_decisions
                .iter()
                .filter(|d| d.accepted)
                .count() as f64
                / setup.suggestion_decisions.len() as f64,
        )
    };

    let program = Program {
        id: program_id.clone(),
        days_per_week: setup.days_per_week,
        current_week: 1,
        mesocycle_length: setup.mesocycle_length,
        status: ProgramStatus::Active,
        split_preference: Some(setup.split_preference),
        progression_model: Some(setup.pro_settings.progression_model),
        deload_week: setup.pro_settings.deload_week,
        suggestion_decisions: setup.suggestion_decisions.clone(),
        smart_aggressiveness: Some(
            setup
                .smart_aggressiveness
                .unwrap_or(crate::models::Aggressiveness::Balanced),
        ),
        suggestion_acceptance_rate: acceptance_rate,
    };

    let volumes: Vec<MuscleVolume> = setup
        .muscle_setups
        .iter()
        .map(|m| MuscleVolume {
            id: ids.next_id("v"),
            program_id: program_id.clone(),
            muscle_group: m.muscle_group.clone(),
            mev: m.mev,
            mrv: m.mrv,
            current_volume: m.target_sets,
            is_focus: m.emphasis == crate::models::Emphasis::Emphasize,
        })
        .collect();

    let training_days = build_training_days(&program_id, setup, ids);
    let prescriptions = build_prescriptions(
        &training_days,
        &setup.exercise_allocations,
        &snapshot.exercises,
        &format!(
            "Built from {} with {} fatigue sensitivity",
            setup.pro_settings.progression_model, setup.pro_settings.fatigue_sensitivity
        ),
        &setup.exercise_model_overrides,
        ids,
    );

    let user = UserProfile {
        experience_level: setup.experience_level,
        onboarding_completed: true,
        ..snapshot.user.clone()
    };

    info!(
        program_id = %program.id,
        days = training_days.len(),
        volumes = volumes.len(),
        prescriptions = prescriptions.len(),
        "built next cycle from setup"
    );

    NextCycle {
        user,
        program,
        training_days,
        volumes,
        prescriptions,
    }
}
