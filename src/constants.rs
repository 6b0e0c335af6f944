// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Numeric contracts and canonical domain tables for the engine. Downstream
//! consumers depend on these exact values; change them only together with the
//! stored-data expectations they encode.

/// Readiness scoring
pub mod readiness {
    /// Composite weights over inverted fatigue, inverted soreness, sleep
    /// quality, motivation, and inverted stress. Sum to 1.0.
    pub const FATIGUE_WEIGHT: f64 = 0.26;
    pub const SORENESS_WEIGHT: f64 = 0.16;
    pub const SLEEP_WEIGHT: f64 = 0.22;
    pub const MOTIVATION_WEIGHT: f64 = 0.22;
    pub const STRESS_WEIGHT: f64 = 0.14;

    /// Score assumed when no check-in has ever been recorded
    pub const DEFAULT_SCORE: u32 = 65;

    /// Scores below this are labeled Low
    pub const LOW_BELOW: u32 = 45;
    /// Scores below this (and at or above [`LOW_BELOW`]) are labeled Moderate
    pub const MODERATE_BELOW: u32 = 75;
}

/// Performance trend classification
pub mod trend {
    /// Fewer logs than this always classify as stable
    pub const MIN_LOGS: usize = 4;
    /// Logs compared per window (most recent vs the three before)
    pub const WINDOW: usize = 3;
    /// Absolute rating delta that separates up/down from stable
    pub const DELTA: f64 = 0.4;
}

/// Per-muscle volume action ladder
pub mod volume {
    /// Readiness below this always deloads
    pub const DELOAD_BELOW: u32 = 35;
    /// Readiness below this reduces, and deloads when the trend is down
    pub const REDUCE_BELOW: u32 = 50;
    /// Readiness below this holds when the trend is down
    pub const HOLD_ON_DECLINE_BELOW: u32 = 65;
    /// Readiness at or above this earns an increase
    pub const INCREASE_AT: u32 = 75;
    /// Focus muscles increase from this readiness
    pub const FOCUS_INCREASE_AT: u32 = 65;

    /// Deload multiplier applied to current volume
    pub const DELOAD_FACTOR: f64 = 0.65;
    /// Deload never drops below this many weekly sets
    pub const DELOAD_FLOOR: u32 = 6;
}

/// Suggestion confidence grading
pub mod confidence {
    /// Sample sizes at which confidence reads High / Medium
    pub const HIGH_SAMPLE: usize = 8;
    pub const MEDIUM_SAMPLE: usize = 4;

    /// Historical effectiveness at or above this bumps confidence one rank
    pub const RAISE_AT: f64 = 0.75;
    /// Historical effectiveness at or below this drops confidence one rank
    pub const LOWER_AT: f64 = 0.45;
}

/// Smart preset generation
pub mod preset {
    /// Effectiveness assumed with no mesocycle history
    pub const DEFAULT_EFFECTIVENESS: f64 = 0.62;
    /// Effectiveness at or above this selects the Aggressive stance
    pub const AGGRESSIVE_AT: f64 = 0.75;
    /// Effectiveness at or below this selects the Conservative stance
    pub const CONSERVATIVE_AT: f64 = 0.5;

    /// Per-muscle miss-rate ceilings before volume is pulled back
    pub const MUSCLE_MISS_CONSERVATIVE: f64 = 0.14;
    pub const MUSCLE_MISS_DEFAULT: f64 = 0.18;
    /// Over-rep rate above which a muscle earns extra sets
    pub const MUSCLE_OVER_REP: f64 = 0.3;
    /// Readiness required before over-rep capacity converts into volume
    pub const OVER_REP_READINESS: u32 = 65;

    /// Global miss-rate ceilings before a training day is dropped
    pub const GLOBAL_MISS_CONSERVATIVE: f64 = 0.18;
    pub const GLOBAL_MISS_DEFAULT: f64 = 0.22;
    /// Global miss rate cited in the frequency rationale
    pub const GLOBAL_MISS_RATIONALE: f64 = 0.22;
    /// Training frequency never drops below this
    pub const MIN_DAYS_PER_WEEK: u32 = 3;

    /// Readiness below this shortens the cycle and raises fatigue sensitivity
    pub const LOW_READINESS: u32 = 50;
    /// Readiness below this selects Moderate fatigue sensitivity
    pub const MODERATE_READINESS: u32 = 70;
    /// Mesocycle length recommended under low readiness
    pub const SHORT_MESO_WEEKS: u32 = 5;
    /// Earliest recommended deload week
    pub const MIN_DELOAD_WEEK: u32 = 3;
    /// Global miss rate that pulls the deload earlier
    pub const DELOAD_MISS_TRIGGER: f64 = 0.2;
    /// Average rep dropoff that pulls the deload earlier
    pub const DELOAD_DROPOFF_TRIGGER: f64 = 0.3;

    /// Over-rep fraction that pins the global model to double progression
    pub const GLOBAL_OVER_REP: f64 = 0.35;
    /// Per-exercise thresholds for model overrides
    pub const EXERCISE_UNDER_COMPLETE: f64 = 0.35;
    pub const EXERCISE_DROPOFF: f64 = 0.33;
    pub const EXERCISE_OVER_REP: f64 = 0.4;
}

/// Mesocycle effectiveness summaries
pub mod summary {
    /// Fatigue assumed when no check-ins were recorded
    pub const DEFAULT_FATIGUE: f64 = 5.0;
    /// Acceptance rate assumed when no decisions were recorded
    pub const DEFAULT_ACCEPTANCE: f64 = 0.5;

    /// Effectiveness composite weights: completion, inverted fatigue,
    /// inverted rep dropoff
    pub const COMPLETION_WEIGHT: f64 = 0.5;
    pub const FATIGUE_WEIGHT: f64 = 0.3;
    pub const DROPOFF_WEIGHT: f64 = 0.2;

    /// Completion below this flags the starting volume as too high
    pub const COMPLETION_CAUTION_BELOW: f64 = 0.85;
    /// Effectiveness at or above this reads as a successful cycle
    pub const EFFECTIVE_AT: f64 = 0.75;

    /// Separator between the early-stop prefix and the baseline note
    pub const NOTE_SEPARATOR: &str = " \u{2022} ";
}

/// Program construction
pub mod program {
    /// Per-day prescription set bounds
    pub const MIN_SETS_PER_DAY: u32 = 2;
    pub const MAX_SETS_PER_DAY: u32 = 6;
    /// Weekly sets are split over roughly this many sessions
    pub const SESSIONS_PER_WEEK_DIVISOR: f64 = 2.0;

    /// Starting load and RIR target for fresh prescriptions
    pub const DEFAULT_TARGET_LOAD: f64 = 30.0;
    pub const DEFAULT_TARGET_RIR: u32 = 2;

    /// Muscles trained in the lower rep range
    pub const LOW_REP_MUSCLES: [&str; 4] = ["Quads", "Hamstrings", "Glutes", "Back"];
    pub const LOW_REP_RANGE: &str = "6-10";
    pub const DEFAULT_REP_RANGE: &str = "8-15";

    /// The seven major muscle groups a generic full-body day covers
    pub const FULL_BODY_MUSCLES: [&str; 7] = [
        "Chest",
        "Back",
        "Quads",
        "Hamstrings",
        "Shoulders",
        "Biceps",
        "Triceps",
    ];
}

/// Canonical reasons a mesocycle may be stopped early
pub const STOP_REASONS: [&str; 8] = [
    "Recovery issues",
    "Program too difficult",
    "Program too easy",
    "Pain / injury concerns",
    "Scheduling / time constraints",
    "Motivation / adherence drop",
    "Switching goal phase",
    "Other",
];
