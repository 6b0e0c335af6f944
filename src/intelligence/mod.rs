// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Intelligence Module
//!
//! Training analysis and recommendation logic over a [`DataSnapshot`].
//!
//! This module includes:
//! - Readiness scoring from weekly check-ins
//! - Performance trend classification from log history
//! - Per-muscle volume recommendations and program insights
//! - Mesocycle effectiveness summaries
//! - Smart next-cycle preset generation with confidence-graded suggestions
//!
//! Everything here is a pure, synchronous computation: components read the
//! snapshot they are given and return new values. Identifiers and timestamps
//! for produced records are injected by the caller.

use serde::{Deserialize, Serialize};

use crate::models::{DataSnapshot, MesocycleSummary};

pub mod insights;
pub mod preset;
pub mod readiness;
pub mod summary;
pub mod trend;
pub mod volume;

pub use insights::ProgramInsights;
pub use preset::SmartCyclePreset;
pub use readiness::ReadinessScorer;
pub use summary::{CycleEnd, MesocycleSummarizer};
pub use trend::PerformanceTrendAnalyzer;
pub use volume::{MuscleRecommendation, VolumeRecommender};

use crate::ids::IdSource;
use chrono::{DateTime, Utc};

/// Confidence grade attached to suggestions
///
/// Ordered so that rank arithmetic (sample-size grading plus the historical
/// effectiveness adjustment) works on the ordinal instead of round-tripping
/// through labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    fn rank(self) -> i8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    fn from_rank(rank: i8) -> Self {
        match rank.clamp(0, 2) {
            0 => Self::Low,
            1 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Grade confidence from the number of observations behind a suggestion
    pub fn from_sample(size: usize) -> Self {
        if size >= crate::constants::confidence::HIGH_SAMPLE {
            Self::High
        } else if size >= crate::constants::confidence::MEDIUM_SAMPLE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Shift the grade by one rank based on how well past suggestions landed,
    /// saturating at the Low/High bounds
    pub fn adjusted(self, effectiveness: f64) -> Self {
        let mut rank = self.rank();
        if effectiveness >= crate::constants::confidence::RAISE_AT {
            rank += 1;
        }
        if effectiveness <= crate::constants::confidence::LOWER_AT {
            rank -= 1;
        }
        Self::from_rank(rank)
    }
}

/// Direction of recent performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Down,
    Stable,
    Up,
}

/// Readiness score band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLabel {
    Low,
    Moderate,
    High,
}

/// Volume adjustment decided for a muscle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeAction {
    Increase,
    Hold,
    Reduce,
    Deload,
}

/// One human-readable recommendation with a calibrated confidence grade
///
/// `field` is a dotted path identifying the setting the suggestion targets,
/// e.g. `muscle.Chest.target_sets` or `program.days_per_week`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub field: String,
    pub suggestion: String,
    pub confidence: Confidence,
    pub rationale: String,
}

/// The periodization engine: every computation takes its snapshot as an
/// explicit argument and returns new values
///
/// The engine holds no hidden state. Callers own snapshot persistence and are
/// expected to apply a generated [`crate::models::ProgramSetupInput`]
/// atomically.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodizationEngine;

impl PeriodizationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Current readiness/trend/volume report for display; reads only
    pub fn program_insights(&self, snapshot: &DataSnapshot) -> ProgramInsights {
        insights::generate_program_insights(snapshot)
    }

    /// Full next-cycle setup plus ranked, confidence-graded suggestions
    pub fn smart_cycle_preset(&self, snapshot: &DataSnapshot) -> SmartCyclePreset {
        preset::generate_smart_cycle_preset(snapshot)
    }

    /// Hard-coded safe preset for callers recovering from an upstream failure
    pub fn baseline_preset(&self, snapshot: &DataSnapshot) -> SmartCyclePreset {
        preset::baseline_preset(snapshot)
    }

    /// Summarize the ending mesocycle into an immutable history record
    pub fn summarize_mesocycle(
        &self,
        snapshot: &DataSnapshot,
        end: &CycleEnd,
        ids: &mut dyn IdSource,
        now: DateTime<Utc>,
    ) -> MesocycleSummary {
        MesocycleSummarizer::new().summarize(snapshot, end, ids, now)
    }
}
