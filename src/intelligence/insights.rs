// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Aggregated readiness/trend/volume report for display

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    MuscleRecommendation, PerformanceTrendAnalyzer, ReadinessLabel, ReadinessScorer,
    TrendDirection, VolumeAction, VolumeRecommender,
};
use crate::models::DataSnapshot;

/// Read-only dashboard report combining readiness, trend, and the per-muscle
/// volume recommendations
///
/// `recommendations` preserves the snapshot's volume order; `deload_flag` is
/// set when any muscle landed on a deload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramInsights {
    pub readiness_score: u32,
    pub readiness_label: ReadinessLabel,
    pub deload_flag: bool,
    pub performance_trend: TrendDirection,
    pub weekly_target_sets: u32,
    pub recommendations: Vec<MuscleRecommendation>,
}

/// Build the full insights report for the current snapshot
pub fn generate_program_insights(snapshot: &DataSnapshot) -> ProgramInsights {
    let readiness_score = ReadinessScorer::new().score(snapshot.latest_checkin());
    let readiness_label = ReadinessScorer::label(readiness_score);
    let performance_trend = PerformanceTrendAnalyzer::new().classify(&snapshot.logs_by_recency());

    let recommender = VolumeRecommender::new();
    let recommendations: Vec<MuscleRecommendation> = snapshot
        .volumes
        .iter()
        .map(|v| recommender.recommend(v, readiness_score, performance_trend))
        .collect();

    let deload_flag = recommendations
        .iter()
        .any(|r| r.action == VolumeAction::Deload);
    let weekly_target_sets = recommendations.iter().map(|r| r.next_week_sets).sum();

    debug!(
        readiness_score,
        ?performance_trend,
        deload_flag,
        weekly_target_sets,
        muscles = recommendations.len(),
        "generated program insights"
    );

    ProgramInsights {
        readiness_score,
        readiness_label,
        deload_flag,
        performance_trend,
        weekly_target_sets,
        recommendations,
    }
}
