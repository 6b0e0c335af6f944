// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures for the hypertrophy training engine. A user's training
//! state is carried as one [`DataSnapshot`] aggregate: the active program with
//! its training days, per-muscle volume landmarks and prescriptions, plus the
//! append-only history of exercise logs, weekly check-ins, and mesocycle
//! summaries.
//!
//! ## Design Principles
//!
//! - **Snapshot oriented**: the engine reads one immutable snapshot and
//!   returns new values; nothing here is mutated in place
//! - **Append-only history**: [`ExerciseLog`], [`CheckIn`], and
//!   [`MesocycleSummary`] records are never rewritten after creation
//! - **Serializable**: all models support JSON serialization for storage and
//!   UI consumption
//! - **Lenient history fields**: older logs may lack prescription metadata;
//!   accessors normalize those gaps in one place
//!
//! ## Core Models
//!
//! - [`Program`]: the active mesocycle configuration
//! - [`MuscleVolume`]: per-muscle volume landmarks (MEV/MRV) and current sets
//! - [`Prescription`]: per-day, per-exercise set/rep/load targets
//! - [`ExerciseLog`]: completed sets for one exercise session
//! - [`CheckIn`]: weekly wellness ratings
//! - [`MesocycleSummary`]: immutable end-of-cycle effectiveness record
//! - [`ProgramSetupInput`]: the atomic unit that produces the next cycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Training experience classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Preferred load units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Kg,
    Lb,
}

/// Per-muscle emphasis for the upcoming cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emphasis {
    Maintain,
    Grow,
    Emphasize,
}

/// Weekly split preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitPreference {
    Auto,
    #[serde(rename = "PPL")]
    Ppl,
    UpperLower,
    FullBody,
}

/// Rule governing how load/reps advance across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressionModel {
    DoubleProgression,
    TopSetBackoff,
    RepGoal,
}

impl std::fmt::Display for ProgressionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::DoubleProgression => "DoubleProgression",
            Self::TopSetBackoff => "TopSetBackoff",
            Self::RepGoal => "RepGoal",
        };
        f.write_str(name)
    }
}

/// Lifecycle state of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    Active,
    Completed,
}

/// How strongly readiness signals throttle progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FatigueSensitivity {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for FatigueSensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        };
        f.write_str(name)
    }
}

/// Deload scheduling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeloadMode {
    Auto,
    Manual,
}

/// How aggressively pain signals reduce training stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PainProtocol {
    Conservative,
    Moderate,
    Aggressive,
}

/// How assertive smart suggestions are, derived from historical effectiveness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggressiveness {
    Conservative,
    Balanced,
    Aggressive,
}

/// Why a prescribed set went unused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnusedSetReason {
    LoadTooHeavy,
    Fatigue,
    Time,
    Pain,
    Technique,
    Equipment,
    Other,
}

/// User profile carried alongside the training snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub experience_level: ExperienceLevel,
    pub onboarding_completed: bool,
    pub preferred_units: Units,
}

/// The active mesocycle configuration
///
/// `current_week` runs 1..=`mesocycle_length`; `deload_week`, when set, falls
/// inside the same range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub days_per_week: u32,
    pub current_week: u32,
    pub mesocycle_length: u32,
    pub status: ProgramStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_preference: Option<SplitPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progression_model: Option<ProgressionModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deload_week: Option<u32>,
    /// Suggestion decisions carried from the setup that created this program
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestion_decisions: Vec<SuggestionDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_aggressiveness: Option<Aggressiveness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_acceptance_rate: Option<f64>,
}

/// One scheduled day within a program's weekly split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingDay {
    pub id: String,
    pub program_id: String,
    /// Unique within the program, 1-based
    pub day_number: u32,
    pub name: String,
    /// Ordered, distinct muscle groups trained on this day
    pub muscle_groups: Vec<String>,
}

/// Per-muscle weekly volume landmarks and current allocation
///
/// `mev` (minimum effective volume) never exceeds `mrv` (maximum recoverable
/// volume); `current_volume` is this week's allocated set count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleVolume {
    pub id: String,
    pub program_id: String,
    pub muscle_group: String,
    pub mev: u32,
    pub mrv: u32,
    pub current_volume: u32,
    pub is_focus: bool,
}

/// An exercise available for prescription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: String,
    pub equipment: String,
    pub is_system_exercise: bool,
}

/// Per-day set/rep/load targets for one exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub training_day_id: String,
    pub exercise_id: String,
    pub sets: u32,
    /// Rep range as displayed, e.g. "8-15"
    pub target_reps: String,
    pub target_load: f64,
    pub target_rir: u32,
    pub progression_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progression_model: Option<ProgressionModel>,
}

/// A single completed set within an exercise log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedSet {
    pub reps: u32,
    pub weight: f64,
    pub rir: u32,
    pub completed_at: DateTime<Utc>,
}

/// Completed sets for one exercise session, immutable once created
///
/// Older records may predate prescription tracking, so `prescribed_sets`,
/// `unused_sets`, and `over_rep_flag` are optional; use
/// [`ExerciseLog::prescribed_or_completed`] and [`ExerciseLog::unused`] rather
/// than reading the raw fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: String,
    pub exercise_prescription_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    /// Ordered by completion time
    pub sets_completed: Vec<LoggedSet>,
    pub total_volume_kg: f64,
    /// Self-rated session quality on a 1-5 axis
    pub performance_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescribed_sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets_completed_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_set_reason: Option<UnusedSetReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_set_severity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_set_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_target_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_target_max: Option<u32>,
    /// Actual reps exceeded the prescribed ceiling on multiple sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_rep_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_load_recommendation: Option<f64>,
}

impl ExerciseLog {
    /// Prescribed set count, defaulting to the completed count when the log
    /// predates prescription tracking. Every miss-rate computation uses this
    /// one normalization.
    pub fn prescribed_or_completed(&self) -> u32 {
        self.prescribed_sets
            .unwrap_or(self.sets_completed.len() as u32)
    }

    /// Unused sets, treating missing data as zero
    pub fn unused(&self) -> u32 {
        self.unused_sets.unwrap_or(0)
    }

    /// Whether this log tripped the over-rep flag
    pub fn over_rep(&self) -> bool {
        self.over_rep_flag.unwrap_or(false)
    }

    /// Fractional rep dropoff from the first to the last set, in [0, 1]
    ///
    /// Zero when fewer than two sets were completed or the first set recorded
    /// no reps.
    pub fn rep_dropoff(&self) -> f64 {
        if self.sets_completed.len() < 2 {
            return 0.0;
        }
        let first = self.sets_completed[0].reps;
        let last = self.sets_completed[self.sets_completed.len() - 1].reps;
        if first == 0 {
            return 0.0;
        }
        (f64::from(first) - f64::from(last)).max(0.0) / f64::from(first)
    }

    /// Completion time of the first set, used to order logs by recency
    pub fn first_set_completed_at(&self) -> Option<DateTime<Utc>> {
        self.sets_completed.first().map(|s| s.completed_at)
    }
}

/// Weekly wellness check-in, all levels on a 1-10 axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: String,
    pub fatigue_level: u32,
    pub soreness_level: u32,
    pub motivation_level: u32,
    pub sleep_quality: u32,
    pub stress_level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Immutable end-of-cycle effectiveness record, newest-first in history
///
/// Rates and scores are fractions in [0, 1] except `avg_fatigue`, which stays
/// on the 0-10 check-in axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MesocycleSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub previous_program_id: String,
    pub days_per_week: u32,
    pub mesocycle_length: u32,
    pub completion_rate: f64,
    pub avg_fatigue: f64,
    pub avg_rep_dropoff: f64,
    pub suggestion_acceptance_rate: f64,
    pub suggestion_effectiveness_score: f64,
    pub smart_aggressiveness: Aggressiveness,
    pub notes: String,
}

/// Per-muscle setup for the next cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleSetupInput {
    pub muscle_group: String,
    pub emphasis: Emphasis,
    pub mev: u32,
    pub mrv: u32,
    pub target_sets: u32,
}

/// Weekly set allocation for one exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseAllocationInput {
    pub exercise_id: String,
    pub muscle_group: String,
    pub weekly_sets: u32,
}

/// Advanced progression settings for the next cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProSettings {
    pub progression_model: ProgressionModel,
    pub fatigue_sensitivity: FatigueSensitivity,
    pub rir_floor: u32,
    pub use_myoreps: bool,
    pub deload_mode: DeloadMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deload_week: Option<u32>,
    pub pain_protocol: PainProtocol,
}

/// A user's accept/override decision on one suggestion
///
/// `applied_value` is present exactly when the suggestion was accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionDecision {
    pub field: String,
    pub accepted: bool,
    pub suggested_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_value: Option<String>,
}

/// The single atomic unit applied to produce the next cycle
///
/// Applying a setup replaces the program, training days, muscle volumes, and
/// prescriptions together; a reader never observes a partial mix of old and
/// new cycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramSetupInput {
    pub experience_level: ExperienceLevel,
    pub days_per_week: u32,
    pub mesocycle_length: u32,
    pub split_preference: SplitPreference,
    pub muscle_setups: Vec<MuscleSetupInput>,
    pub exercise_allocations: Vec<ExerciseAllocationInput>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub exercise_model_overrides: HashMap<String, ProgressionModel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestion_decisions: Vec<SuggestionDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_aggressiveness: Option<Aggressiveness>,
    pub pro_settings: ProSettings,
}

/// The complete read-only training snapshot consumed by the engine
///
/// # Examples
///
/// ```rust
/// use hypertrophy_engine::models::DataSnapshot;
///
/// let snapshot: DataSnapshot = serde_json::from_str(r#"{
///     "user": {
///         "id": "u1", "first_name": "Alex",
///         "experience_level": "Intermediate",
///         "onboarding_completed": true, "preferred_units": "kg"
///     },
///     "program": {
///         "id": "p1", "days_per_week": 4, "current_week": 2,
///         "mesocycle_length": 6, "status": "active"
///     },
///     "training_days": [], "volumes": [], "exercises": [],
///     "prescriptions": [], "logs": [], "checkins": [],
///     "mesocycle_history": []
/// }"#).unwrap();
/// assert_eq!(snapshot.program.days_per_week, 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub user: UserProfile,
    pub program: Program,
    pub training_days: Vec<TrainingDay>,
    pub volumes: Vec<MuscleVolume>,
    pub exercises: Vec<Exercise>,
    pub prescriptions: Vec<Prescription>,
    /// Newest-first append-only history
    pub logs: Vec<ExerciseLog>,
    /// Newest-first append-only history
    pub checkins: Vec<CheckIn>,
    /// Newest-first; summaries are never recomputed once recorded
    pub mesocycle_history: Vec<MesocycleSummary>,
}

impl DataSnapshot {
    /// The most recent check-in by `created_at`, if any
    pub fn latest_checkin(&self) -> Option<&CheckIn> {
        self.checkins.iter().max_by_key(|c| c.created_at)
    }

    /// Logs ordered newest-first by first-set completion time
    pub fn logs_by_recency(&self) -> Vec<&ExerciseLog> {
        let mut ordered: Vec<&ExerciseLog> = self.logs.iter().collect();
        ordered.sort_by(|a, b| b.first_set_completed_at().cmp(&a.first_set_completed_at()));
        ordered
    }

    /// Exercise ids belonging to one muscle group
    pub fn exercise_ids_for_muscle(&self, muscle_group: &str) -> Vec<&str> {
        self.exercises
            .iter()
            .filter(|e| e.muscle_group == muscle_group)
            .map(|e| e.id.as_str())
            .collect()
    }

    /// Look up an exercise by id
    pub fn exercise_by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn set(reps: u32, at_minute: u32) -> LoggedSet {
        LoggedSet {
            reps,
            weight: 60.0,
            rir: 2,
            completed_at: Utc.with_ymd_and_hms(2025, 3, 10, 9, at_minute, 0).unwrap(),
        }
    }

    fn log(id: &str, sets: Vec<LoggedSet>) -> ExerciseLog {
        ExerciseLog {
            id: id.to_string(),
            exercise_prescription_id: "pr1".to_string(),
            exercise_id: Some("e1".to_string()),
            sets_completed: sets,
            total_volume_kg: 0.0,
            performance_rating: 3.0,
            prescribed_sets: None,
            sets_completed_count: None,
            unused_sets: None,
            unused_set_reason: None,
            unused_set_severity: None,
            unused_set_note: None,
            rep_target_min: None,
            rep_target_max: None,
            over_rep_flag: None,
            next_load_recommendation: None,
        }
    }

    #[test]
    fn prescribed_defaults_to_completed_count() {
        let entry = log("l1", vec![set(10, 0), set(9, 5), set(8, 10)]);
        assert_eq!(entry.prescribed_or_completed(), 3);

        let mut with_prescription = entry.clone();
        with_prescription.prescribed_sets = Some(4);
        assert_eq!(with_prescription.prescribed_or_completed(), 4);
    }

    #[test]
    fn rep_dropoff_handles_degenerate_logs() {
        assert_eq!(log("l1", vec![set(10, 0)]).rep_dropoff(), 0.0);
        assert_eq!(log("l2", vec![set(0, 0), set(0, 5)]).rep_dropoff(), 0.0);

        let declining = log("l3", vec![set(10, 0), set(8, 5)]);
        assert!((declining.rep_dropoff() - 0.2).abs() < 1e-9);

        // A rising last set never reports a negative dropoff
        let rising = log("l4", vec![set(8, 0), set(10, 5)]);
        assert_eq!(rising.rep_dropoff(), 0.0);
    }

    #[test]
    fn enum_wire_names_match_stored_data() {
        let json = serde_json::to_string(&ProgressionModel::TopSetBackoff).unwrap();
        assert_eq!(json, "\"TopSetBackoff\"");
        let json = serde_json::to_string(&SplitPreference::Ppl).unwrap();
        assert_eq!(json, "\"PPL\"");
        let json = serde_json::to_string(&ProgramStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let json = serde_json::to_string(&UnusedSetReason::LoadTooHeavy).unwrap();
        assert_eq!(json, "\"load_too_heavy\"");
    }
}
