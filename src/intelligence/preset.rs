//! Smart next-cycle preset generation
//!
//! Synthesizes readiness, historical suggestion effectiveness, per-muscle
//! miss/over-rep rates, and per-exercise completion patterns into a complete
//! next-cycle setup plus a list of confidence-graded suggestions. The whole
//! pass is a total function over a well-typed snapshot: empty histories fall
//! back to neutral defaults and zero denominators yield zero rates.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Confidence, ReadinessScorer, SuggestionItem};
use crate::constants::preset as tuning;
use crate::models::{
    Aggressiveness, DataSnapshot, DeloadMode, Emphasis, ExerciseAllocationInput, ExerciseLog,
    FatigueSensitivity, MuscleSetupInput, PainProtocol, ProSettings, ProgramSetupInput,
    ProgressionModel, SplitPreference, SuggestionDecision,
};
use std::collections::HashMap;

/// Complete generated preset: the setup to apply, the suggestions behind it,
/// and the stance they were generated under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartCyclePreset {
    pub setup: ProgramSetupInput,
    pub suggestions: Vec<SuggestionItem>,
    pub smart_aggressiveness: Aggressiveness,
}

/// Observed rate with the sample size behind it
#[derive(Debug, Clone, Copy)]
struct SampledRate {
    rate: f64,
    n: usize,
}

/// Generate the full smart preset for the next mesocycle
pub fn generate_smart_cycle_preset(snapshot: &DataSnapshot) -> SmartCyclePreset {
    let readiness = ReadinessScorer::new().score(snapshot.latest_checkin());
    let historical_eff = historical_effectiveness(snapshot);
    let aggressiveness = derive_aggressiveness(historical_eff);
    let mut suggestions: Vec<SuggestionItem> = Vec::new();

    info!(
        readiness,
        historical_eff,
        ?aggressiveness,
        "generating smart cycle preset"
    );

    let muscle_setups: Vec<MuscleSetupInput> = snapshot
        .volumes
        .iter()
        .map(|v| {
            let miss = muscle_miss_rate(snapshot, &v.muscle_group);
            let over_rep = muscle_over_rep_rate(snapshot, &v.muscle_group);

            let miss_ceiling = if aggressiveness == Aggressiveness::Conservative {
                tuning::MUSCLE_MISS_CONSERVATIVE
            } else {
                tuning::MUSCLE_MISS_DEFAULT
            };

            let mut target = v.current_volume;
            let mut emphasis = if v.is_focus {
                Emphasis::Emphasize
            } else {
                Emphasis::Grow
            };
            let mut rationale = "Stable performance and adherence.".to_string();

            if miss.rate > miss_ceiling {
                target = v.mev.max(v.current_volume.saturating_sub(1));
                emphasis = Emphasis::Maintain;
                rationale = format!(
                    "Missed set rate {}% suggests volume was slightly high.",
                    (miss.rate * 100.0).round() as u32
                );
            } else if over_rep.rate > tuning::MUSCLE_OVER_REP
                && readiness >= tuning::OVER_REP_READINESS
            {
                let step_up = if aggressiveness == Aggressiveness::Aggressive {
                    2
                } else {
                    1
                };
                target = v.mrv.min(v.current_volume.saturating_add(step_up));
                rationale =
                    "Frequent over-rep outcomes suggest additional productive capacity.".to_string();
            }

            debug!(
                muscle = %v.muscle_group,
                miss_rate = miss.rate,
                over_rep_rate = over_rep.rate,
                target,
                "muscle volume decision"
            );

            suggestions.push(SuggestionItem {
                field: format!("muscle.{}.target_sets", v.muscle_group),
                suggestion: format!("{target} sets"),
                confidence: Confidence::from_sample(miss.n.max(over_rep.n))
                    .adjusted(historical_eff),
                rationale,
            });

            MuscleSetupInput {
                muscle_group: v.muscle_group.clone(),
                emphasis,
                mev: v.mev,
                mrv: v.mrv,
                target_sets: target,
            }
        })
        .collect();

    let global_miss = global_miss_rate(&snapshot.logs);
    let miss_threshold = if aggressiveness == Aggressiveness::Conservative {
        tuning::GLOBAL_MISS_CONSERVATIVE
    } else {
        tuning::GLOBAL_MISS_DEFAULT
    };
    let days_per_week = if global_miss > miss_threshold {
        tuning::MIN_DAYS_PER_WEEK.max(snapshot.program.days_per_week.saturating_sub(1))
    } else {
        snapshot.program.days_per_week
    };

    let meso_length = if readiness < tuning::LOW_READINESS {
        tuning::SHORT_MESO_WEEKS
    } else {
        snapshot.program.mesocycle_length
    };

    let avg_dropoff = mean(snapshot.logs.iter().map(|l| l.rep_dropoff()));
    let deload_week = if readiness < tuning::LOW_READINESS
        || global_miss > tuning::DELOAD_MISS_TRIGGER
        || avg_dropoff > tuning::DELOAD_DROPOFF_TRIGGER
    {
        tuning::MIN_DELOAD_WEEK.max(meso_length.saturating_sub(1))
    } else {
        meso_length
    };

    suggestions.push(SuggestionItem {
        field: "program.days_per_week".to_string(),
        suggestion: format!("{days_per_week}"),
        confidence: Confidence::from_sample(snapshot.logs.len()).adjusted(historical_eff),
        rationale: if global_miss > tuning::GLOBAL_MISS_RATIONALE {
            "High incomplete-set trend suggests lower weekly session burden.".to_string()
        } else {
            "Current training frequency appears sustainable.".to_string()
        },
    });

    suggestions.push(SuggestionItem {
        field: "program.mesocycle_length".to_string(),
        suggestion: format!("{meso_length} weeks"),
        confidence: Confidence::Medium.adjusted(historical_eff),
        rationale: if readiness < tuning::LOW_READINESS {
            "Lower readiness favors shorter mesocycle with earlier resensitization.".to_string()
        } else {
            "Readiness profile supports current cycle length.".to_string()
        },
    });

    let over_rep_global = snapshot.logs.iter().filter(|l| l.over_rep()).count() as f64
        / snapshot.logs.len().max(1) as f64;
    let progression_model = if over_rep_global > tuning::GLOBAL_OVER_REP {
        ProgressionModel::DoubleProgression
    } else {
        snapshot
            .program
            .progression_model
            .unwrap_or(ProgressionModel::DoubleProgression)
    };

    suggestions.push(SuggestionItem {
        field: "pro.progression_model".to_string(),
        suggestion: progression_model.to_string(),
        confidence: Confidence::from_sample(snapshot.logs.len()).adjusted(historical_eff),
        rationale: if over_rep_global > tuning::GLOBAL_OVER_REP {
            "High over-rep frequency favors load-progressive model.".to_string()
        } else {
            "Current progression model remains suitable.".to_string()
        },
    });

    suggestions.push(SuggestionItem {
        field: "pro.deload_week".to_string(),
        suggestion: format!("Week {deload_week}"),
        confidence: Confidence::Medium.adjusted(historical_eff),
        rationale: if deload_week < meso_length {
            "Recovery/rep-dropoff profile suggests earlier deload timing.".to_string()
        } else {
            "Current trend supports deload at cycle end.".to_string()
        },
    });

    let mut exercise_model_overrides: HashMap<String, ProgressionModel> = HashMap::new();
    for exercise in &snapshot.exercises {
        let ex_logs: Vec<&ExerciseLog> = snapshot
            .logs
            .iter()
            .filter(|l| l.exercise_id.as_deref() == Some(exercise.id.as_str()))
            .collect();
        let (model, rationale) = recommend_model_for_exercise(&ex_logs);
        exercise_model_overrides.insert(exercise.id.clone(), model);
        if !ex_logs.is_empty() {
            suggestions.push(SuggestionItem {
                field: format!("exercise.{}.model", exercise.name),
                suggestion: model.to_string(),
                confidence: Confidence::from_sample(ex_logs.len()).adjusted(historical_eff),
                rationale: rationale.to_string(),
            });
        }
    }

    let setup = ProgramSetupInput {
        experience_level: snapshot.user.experience_level,
        days_per_week,
        mesocycle_length: meso_length,
        split_preference: snapshot
            .program
            .split_preference
            .unwrap_or(SplitPreference::Auto),
        muscle_setups,
        exercise_allocations: allocations_from_prescriptions(snapshot),
        exercise_model_overrides,
        suggestion_decisions: suggestions
            .iter()
            .map(|s| SuggestionDecision {
                field: s.field.clone(),
                accepted: true,
                suggested_value: s.suggestion.clone(),
                applied_value: Some(s.suggestion.clone()),
            })
            .collect(),
        smart_aggressiveness: Some(aggressiveness),
        pro_settings: ProSettings {
            progression_model,
            fatigue_sensitivity: fatigue_sensitivity_for(readiness),
            rir_floor: 1,
            use_myoreps: false,
            deload_mode: DeloadMode::Auto,
            deload_week: Some(deload_week),
            pain_protocol: PainProtocol::Moderate,
        },
    };

    SmartCyclePreset {
        setup,
        suggestions,
        smart_aggressiveness: aggressiveness,
    }
}

/// Hard-coded safe preset built from the current program state
///
/// Callers substitute this when preset generation fails upstream; it changes
/// nothing, pre-fills every setting from the snapshot, and carries a single
/// low-confidence marker suggestion.
pub fn baseline_preset(snapshot: &DataSnapshot) -> SmartCyclePreset {
    let program = &snapshot.program;
    SmartCyclePreset {
        smart_aggressiveness: Aggressiveness::Balanced,
        suggestions: vec![SuggestionItem {
            field: "fallback".to_string(),
            suggestion: "Safe defaults applied".to_string(),
            confidence: Confidence::Low,
            rationale: "Recovered with safe defaults; every setting remains editable.".to_string(),
        }],
        setup: ProgramSetupInput {
            experience_level: snapshot.user.experience_level,
            days_per_week: program.days_per_week,
            mesocycle_length: program.mesocycle_length,
            split_preference: program.split_preference.unwrap_or(SplitPreference::Auto),
            muscle_setups: snapshot
                .volumes
                .iter()
                .map(|v| MuscleSetupInput {
                    muscle_group: v.muscle_group.clone(),
                    emphasis: if v.is_focus {
                        Emphasis::Emphasize
                    } else {
                        Emphasis::Grow
                    },
                    mev: v.mev,
                    mrv: v.mrv,
                    target_sets: v.current_volume,
                })
                .collect(),
            exercise_allocations: allocations_from_prescriptions(snapshot),
            exercise_model_overrides: snapshot
                .prescriptions
                .iter()
                .map(|p| {
                    (
                        p.exercise_id.clone(),
                        p.progression_model
                            .unwrap_or(ProgressionModel::DoubleProgression),
                    )
                })
                .collect(),
            suggestion_decisions: vec![],
            smart_aggressiveness: Some(Aggressiveness::Balanced),
            pro_settings: ProSettings {
                progression_model: program
                    .progression_model
                    .unwrap_or(ProgressionModel::DoubleProgression),
                fatigue_sensitivity: FatigueSensitivity::Moderate,
                rir_floor: 1,
                use_myoreps: false,
                deload_mode: DeloadMode::Auto,
                deload_week: Some(program.deload_week.unwrap_or(program.mesocycle_length)),
                pain_protocol: PainProtocol::Moderate,
            },
        },
    }
}

fn fatigue_sensitivity_for(readiness: u32) -> FatigueSensitivity {
    if readiness < tuning::LOW_READINESS {
        FatigueSensitivity::High
    } else if readiness < tuning::MODERATE_READINESS {
        FatigueSensitivity::Moderate
    } else {
        FatigueSensitivity::Low
    }
}

fn historical_effectiveness(snapshot: &DataSnapshot) -> f64 {
    let scores: Vec<f64> = snapshot
        .mesocycle_history
        .iter()
        .map(|m| m.suggestion_effectiveness_score)
        .filter(|s| s.is_finite())
        .collect();
    if scores.is_empty() {
        return tuning::DEFAULT_EFFECTIVENESS;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn derive_aggressiveness(effectiveness: f64) -> Aggressiveness {
    if effectiveness >= tuning::AGGRESSIVE_AT {
        Aggressiveness::Aggressive
    } else if effectiveness <= tuning::CONSERVATIVE_AT {
        Aggressiveness::Conservative
    } else {
        Aggressiveness::Balanced
    }
}

fn muscle_logs<'a>(snapshot: &'a DataSnapshot, muscle_group: &str) -> Vec<&'a ExerciseLog> {
    let exercise_ids = snapshot.exercise_ids_for_muscle(muscle_group);
    snapshot
        .logs
        .iter()
        .filter(|l| {
            l.exercise_id
                .as_deref()
                .is_some_and(|id| exercise_ids.contains(&id))
        })
        .collect()
}

fn muscle_miss_rate(snapshot: &DataSnapshot, muscle_group: &str) -> SampledRate {
    let scoped = muscle_logs(snapshot, muscle_group);
    let prescribed: u32 = scoped.iter().map(|l| l.prescribed_or_completed()).sum();
    let missed: u32 = scoped.iter().map(|l| l.unused()).sum();
    SampledRate {
        rate: if prescribed > 0 {
            f64::from(missed) / f64::from(prescribed)
        } else {
            0.0
        },
        n: scoped.len(),
    }
}

fn muscle_over_rep_rate(snapshot: &DataSnapshot, muscle_group: &str) -> SampledRate {
    let scoped = muscle_logs(snapshot, muscle_group);
    if scoped.is_empty() {
        return SampledRate { rate: 0.0, n: 0 };
    }
    let hits = scoped.iter().filter(|l| l.over_rep()).count();
    SampledRate {
        rate: hits as f64 / scoped.len() as f64,
        n: scoped.len(),
    }
}

// Per-log miss fraction averaged over every log; a log with no prescribed
// sets contributes zero rather than poisoning the mean.
fn global_miss_rate(logs: &[ExerciseLog]) -> f64 {
    mean(logs.iter().map(|l| {
        let prescribed = l.prescribed_or_completed();
        if prescribed == 0 {
            0.0
        } else {
            f64::from(l.unused()) / f64::from(prescribed)
        }
    }))
}

fn recommend_model_for_exercise(logs: &[&ExerciseLog]) -> (ProgressionModel, &'static str) {
    if logs.is_empty() {
        return (
            ProgressionModel::DoubleProgression,
            "No history available; defaulting to robust baseline model.",
        );
    }
    let over_rep_rate = logs.iter().filter(|l| l.over_rep()).count() as f64 / logs.len() as f64;
    let under_complete_rate =
        logs.iter().filter(|l| l.unused() > 0).count() as f64 / logs.len() as f64;
    let rep_dropoff = mean(logs.iter().map(|l| l.rep_dropoff()));

    if under_complete_rate > tuning::EXERCISE_UNDER_COMPLETE
        || rep_dropoff > tuning::EXERCISE_DROPOFF
    {
        (
            ProgressionModel::RepGoal,
            "High rep dropoff/under-completion suggests a fatigue-managed progression model.",
        )
    } else if over_rep_rate > tuning::EXERCISE_OVER_REP {
        (
            ProgressionModel::TopSetBackoff,
            "Frequent over-rep outcomes suggest capacity for heavier top-set loading.",
        )
    } else {
        (
            ProgressionModel::DoubleProgression,
            "Balanced completion and rep profile support double progression.",
        )
    }
}

// Allocations for the next cycle mirror the current prescriptions; an
// exercise missing from the library falls back to the Chest group.
fn allocations_from_prescriptions(snapshot: &DataSnapshot) -> Vec<ExerciseAllocationInput> {
    snapshot
        .prescriptions
        .iter()
        .map(|p| ExerciseAllocationInput {
            exercise_id: p.exercise_id.clone(),
            muscle_group: snapshot
                .exercise_by_id(&p.exercise_id)
                .map(|e| e.muscle_group.clone())
                .unwrap_or_else(|| "Chest".to_string()),
            weekly_sets: p.sets,
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        return 0.0;
    }
    collected.iter().sum::<f64>() / collected.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CheckIn, Exercise, ExperienceLevel, LoggedSet, MesocycleSummary, MuscleVolume,
        Prescription, Program, ProgramStatus, Units, UserProfile,
    };
    use chrono::{TimeZone, Utc};

    fn base_snapshot() -> DataSnapshot {
        DataSnapshot {
            user: UserProfile {
                id: "u1".to_string(),
                first_name: "Alex".to_string(),
                experience_level: ExperienceLevel::Intermediate,
                onboarding_completed: true,
                preferred_units: Units::Kg,
            },
            program: Program {
                id: "p1".to_string(),
                days_per_week: 4,
                current_week: 6,
                mesocycle_length: 6,
                status: ProgramStatus::Active,
                split_preference: Some(SplitPreference::Auto),
                progression_model: Some(ProgressionModel::DoubleProgression),
                deload_week: Some(6),
                suggestion_decisions: vec![],
                smart_aggressiveness: None,
                suggestion_acceptance_rate: None,
            },
            training_days: vec![],
            volumes: vec![],
            exercises: vec![],
            prescriptions: vec![],
            logs: vec![],
            checkins: vec![],
            mesocycle_history: vec![],
        }
    }

    fn exercise(id: &str, muscle: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            name: format!("Exercise {id}"),
            muscle_group: muscle.to_string(),
            equipment: "Barbell".to_string(),
            is_system_exercise: true,
        }
    }

    fn volume(muscle: &str, mev: u32, mrv: u32, current: u32, focus: bool) -> MuscleVolume {
        MuscleVolume {
            id: format!("v-{muscle}"),
            program_id: "p1".to_string(),
            muscle_group: muscle.to_string(),
            mev,
            mrv,
            current_volume: current,
            is_focus: focus,
        }
    }

    fn sets(reps: &[u32]) -> Vec<LoggedSet> {
        reps.iter()
            .map(|r| LoggedSet {
                reps: *r,
                weight: 60.0,
                rir: 2,
                completed_at: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            })
            .collect()
    }

    fn log_for(
        id: &str,
        exercise_id: &str,
        reps: &[u32],
        prescribed: u32,
        unused: u32,
        over_rep: bool,
    ) -> ExerciseLog {
        ExerciseLog {
            id: id.to_string(),
            exercise_prescription_id: "pr1".to_string(),
            exercise_id: Some(exercise_id.to_string()),
            sets_completed: sets(reps),
            total_volume_kg: 0.0,
            performance_rating: 3.5,
            prescribed_sets: Some(prescribed),
            sets_completed_count: None,
            unused_sets: Some(unused),
            unused_set_reason: None,
            unused_set_severity: None,
            unused_set_note: None,
            rep_target_min: None,
            rep_target_max: None,
            over_rep_flag: Some(over_rep),
            next_load_recommendation: None,
        }
    }

    fn history(score: f64) -> MesocycleSummary {
        MesocycleSummary {
            id: "m1".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap(),
            previous_program_id: "p0".to_string(),
            days_per_week: 4,
            mesocycle_length: 6,
            completion_rate: 0.9,
            avg_fatigue: 5.0,
            avg_rep_dropoff: 0.1,
            suggestion_acceptance_rate: 0.8,
            suggestion_effectiveness_score: score,
            smart_aggressiveness: Aggressiveness::Balanced,
            notes: String::new(),
        }
    }

    #[test]
    fn empty_snapshot_keeps_current_program_shape() {
        let preset = generate_smart_cycle_preset(&base_snapshot());
        assert_eq!(preset.smart_aggressiveness, Aggressiveness::Balanced);
        assert_eq!(preset.setup.days_per_week, 4);
        assert_eq!(preset.setup.mesocycle_length, 6);
        // Readiness default 65: Moderate fatigue sensitivity
        assert_eq!(
            preset.setup.pro_settings.fatigue_sensitivity,
            FatigueSensitivity::Moderate
        );
        assert_eq!(preset.setup.pro_settings.deload_week, Some(6));
        // days + meso + progression + deload suggestions always emit
        assert_eq!(preset.suggestions.len(), 4);
        // Pre-accepted decisions mirror suggestions
        assert_eq!(preset.setup.suggestion_decisions.len(), 4);
        assert!(preset.setup.suggestion_decisions.iter().all(|d| d.accepted
            && d.applied_value.as_deref() == Some(d.suggested_value.as_str())));
    }

    #[test]
    fn aggressiveness_tracks_historical_effectiveness() {
        let mut data = base_snapshot();
        data.mesocycle_history = vec![history(0.8), history(0.8)];
        assert_eq!(
            generate_smart_cycle_preset(&data).smart_aggressiveness,
            Aggressiveness::Aggressive
        );

        data.mesocycle_history = vec![history(0.4)];
        assert_eq!(
            generate_smart_cycle_preset(&data).smart_aggressiveness,
            Aggressiveness::Conservative
        );
    }

    #[test]
    fn high_miss_rate_pulls_muscle_volume_back() {
        let mut data = base_snapshot();
        data.volumes = vec![volume("Chest", 10, 18, 14, false)];
        data.exercises = vec![exercise("e1", "Chest")];
        // 4 of 12 prescribed sets missed: 33% miss rate
        data.logs = vec![
            log_for("l1", "e1", &[10, 9], 4, 2, false),
            log_for("l2", "e1", &[10, 9], 4, 1, false),
            log_for("l3", "e1", &[10, 9, 8], 4, 1, false),
        ];

        let preset = generate_smart_cycle_preset(&data);
        let chest = &preset.setup.muscle_setups[0];
        assert_eq!(chest.target_sets, 13);
        assert_eq!(chest.emphasis, Emphasis::Maintain);
        let suggestion = preset
            .suggestions
            .iter()
            .find(|s| s.field == "muscle.Chest.target_sets")
            .unwrap();
        assert!(suggestion.rationale.contains("Missed set rate 33%"));
    }

    #[test]
    fn over_rep_capacity_adds_sets_when_ready() {
        let mut data = base_snapshot();
        data.volumes = vec![volume("Back", 10, 20, 14, false)];
        data.exercises = vec![exercise("e1", "Back")];
        data.logs = (0..4)
            .map(|i| log_for(&format!("l{i}"), "e1", &[10, 10], 2, 0, i < 2))
            .collect();
        // Readiness 69 clears the 65 gate
        data.checkins = vec![CheckIn {
            id: "c1".to_string(),
            fatigue_level: 4,
            soreness_level: 4,
            motivation_level: 8,
            sleep_quality: 8,
            stress_level: 4,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap(),
        }];

        let preset = generate_smart_cycle_preset(&data);
        let back = &preset.setup.muscle_setups[0];
        // Balanced stance steps up by one
        assert_eq!(back.target_sets, 15);
        assert_eq!(back.emphasis, Emphasis::Grow);
    }

    #[test]
    fn heavy_global_miss_drops_a_training_day() {
        let mut data = base_snapshot();
        // Every log misses half its sets
        data.logs = (0..6)
            .map(|i| log_for(&format!("l{i}"), "e1", &[10, 9], 4, 2, false))
            .collect();

        let preset = generate_smart_cycle_preset(&data);
        assert_eq!(preset.setup.days_per_week, 3);
        let days = preset
            .suggestions
            .iter()
            .find(|s| s.field == "program.days_per_week")
            .unwrap();
        assert_eq!(days.suggestion, "3");
        assert!(days.rationale.contains("lower weekly session burden"));
        // Global miss 0.5 also pulls the deload earlier
        assert_eq!(preset.setup.pro_settings.deload_week, Some(5));
    }

    #[test]
    fn low_readiness_shortens_cycle_and_raises_sensitivity() {
        let mut data = base_snapshot();
        data.checkins = vec![CheckIn {
            id: "c1".to_string(),
            fatigue_level: 9,
            soreness_level: 9,
            motivation_level: 2,
            sleep_quality: 2,
            stress_level: 9,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap(),
        }];

        let preset = generate_smart_cycle_preset(&data);
        assert_eq!(preset.setup.mesocycle_length, 5);
        assert_eq!(preset.setup.pro_settings.deload_week, Some(4));
        assert_eq!(
            preset.setup.pro_settings.fatigue_sensitivity,
            FatigueSensitivity::High
        );
        let meso = preset
            .suggestions
            .iter()
            .find(|s| s.field == "program.mesocycle_length")
            .unwrap();
        assert_eq!(meso.suggestion, "5 weeks");
        assert!(meso.rationale.contains("resensitization"));
    }

    #[test]
    fn exercise_histories_drive_model_overrides() {
        let mut data = base_snapshot();
        data.exercises = vec![
            exercise("e1", "Chest"),
            exercise("e2", "Back"),
            exercise("e3", "Quads"),
        ];
        // e1: chronic under-completion, wants RepGoal
        let mut logs: Vec<ExerciseLog> = (0..4)
            .map(|i| log_for(&format!("a{i}"), "e1", &[10, 9], 3, 1, false))
            .collect();
        // e2: frequent over-rep, wants TopSetBackoff
        logs.extend((0..4).map(|i| log_for(&format!("b{i}"), "e2", &[10, 10], 2, 0, i < 3)));
        data.logs = logs;

        let preset = generate_smart_cycle_preset(&data);
        let overrides = &preset.setup.exercise_model_overrides;
        assert_eq!(overrides["e1"], ProgressionModel::RepGoal);
        assert_eq!(overrides["e2"], ProgressionModel::TopSetBackoff);
        // No history: silent DoubleProgression default, no suggestion emitted
        assert_eq!(overrides["e3"], ProgressionModel::DoubleProgression);
        assert!(preset
            .suggestions
            .iter()
            .any(|s| s.field == "exercise.Exercise e1.model"));
        assert!(!preset
            .suggestions
            .iter()
            .any(|s| s.field == "exercise.Exercise e3.model"));
    }

    #[test]
    fn baseline_preset_mirrors_current_state() {
        let mut data = base_snapshot();
        data.volumes = vec![volume("Chest", 10, 18, 13, true)];
        data.exercises = vec![exercise("e1", "Chest")];
        data.prescriptions = vec![Prescription {
            id: "pr1".to_string(),
            training_day_id: "d1".to_string(),
            exercise_id: "e1".to_string(),
            sets: 4,
            target_reps: "8-15".to_string(),
            target_load: 30.0,
            target_rir: 2,
            progression_reason: String::new(),
            progression_model: Some(ProgressionModel::TopSetBackoff),
        }];

        let preset = baseline_preset(&data);
        assert_eq!(preset.smart_aggressiveness, Aggressiveness::Balanced);
        assert_eq!(preset.suggestions.len(), 1);
        assert_eq!(preset.suggestions[0].confidence, Confidence::Low);
        assert_eq!(preset.setup.muscle_setups[0].target_sets, 13);
        assert_eq!(preset.setup.muscle_setups[0].emphasis, Emphasis::Emphasize);
        assert_eq!(
            preset.setup.exercise_model_overrides["e1"],
            ProgressionModel::TopSetBackoff
        );
        assert_eq!(preset.setup.exercise_allocations[0].weekly_sets, 4);
    }
}
