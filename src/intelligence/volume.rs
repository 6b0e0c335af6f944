//! Per-muscle weekly volume recommendations

use serde::{Deserialize, Serialize};

use super::{TrendDirection, VolumeAction};
use crate::constants::volume as tuning;
use crate::models::MuscleVolume;

/// Volume adjustment decided for one muscle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleRecommendation {
    pub muscle_group: String,
    pub action: VolumeAction,
    pub next_week_sets: u32,
    pub reason: String,
}

/// Decides a weekly volume action per muscle from readiness and trend
///
/// The rules form a strict priority ladder; conditions overlap, so the first
/// matching rule wins and the evaluation order is part of the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeRecommender;

impl VolumeRecommender {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(
        &self,
        volume: &MuscleVolume,
        readiness: u32,
        trend: TrendDirection,
    ) -> MuscleRecommendation {
        let base = volume.current_volume;
        let declining = trend == TrendDirection::Down;

        if readiness < tuning::DELOAD_BELOW || (declining && readiness < tuning::REDUCE_BELOW) {
            return MuscleRecommendation {
                muscle_group: volume.muscle_group.clone(),
                action: VolumeAction::Deload,
                next_week_sets: deload_target(base),
                reason: "Recovery markers are low and performance is declining.".to_string(),
            };
        }

        if readiness < tuning::REDUCE_BELOW {
            return MuscleRecommendation {
                muscle_group: volume.muscle_group.clone(),
                action: VolumeAction::Reduce,
                next_week_sets: volume.mev.max(base.saturating_sub(2)),
                reason: "Readiness is suppressed; pull back toward MEV.".to_string(),
            };
        }

        if base < volume.mev {
            return MuscleRecommendation {
                muscle_group: volume.muscle_group.clone(),
                action: VolumeAction::Increase,
                next_week_sets: volume.mev,
                reason: "Current volume is below MEV.".to_string(),
            };
        }

        if base >= volume.mrv || (declining && readiness < tuning::HOLD_ON_DECLINE_BELOW) {
            return MuscleRecommendation {
                muscle_group: volume.muscle_group.clone(),
                action: VolumeAction::Hold,
                next_week_sets: volume.mev.max(base.saturating_sub(1)),
                reason: "Near MRV or mild fatigue signals; hold to consolidate.".to_string(),
            };
        }

        if readiness >= tuning::INCREASE_AT
            || (volume.is_focus && readiness >= tuning::FOCUS_INCREASE_AT)
        {
            let step = if volume.is_focus { 2 } else { 1 };
            return MuscleRecommendation {
                muscle_group: volume.muscle_group.clone(),
                action: VolumeAction::Increase,
                next_week_sets: volume.mrv.min(base.saturating_add(step)),
                reason: "Recovery is strong; continue overload progression.".to_string(),
            };
        }

        MuscleRecommendation {
            muscle_group: volume.muscle_group.clone(),
            action: VolumeAction::Hold,
            next_week_sets: base,
            reason: "Within productive range; keep volume stable.".to_string(),
        }
    }
}

fn deload_target(current: u32) -> u32 {
    let scaled = (f64::from(current) * tuning::DELOAD_FACTOR).floor() as u32;
    scaled.max(tuning::DELOAD_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn muscle(mev: u32, mrv: u32, current: u32, is_focus: bool) -> MuscleVolume {
        MuscleVolume {
            id: "v1".to_string(),
            program_id: "p1".to_string(),
            muscle_group: "Chest".to_string(),
            mev,
            mrv,
            current_volume: current,
            is_focus,
        }
    }

    #[test]
    fn very_low_readiness_always_deloads() {
        let rec = VolumeRecommender::new().recommend(
            &muscle(10, 18, 20, false),
            20,
            TrendDirection::Down,
        );
        assert_eq!(rec.action, VolumeAction::Deload);
        assert_eq!(rec.next_week_sets, 13); // floor(20 * 0.65)

        // Priority rule dominates regardless of landmarks
        let rec = VolumeRecommender::new().recommend(
            &muscle(4, 30, 4, true),
            20,
            TrendDirection::Down,
        );
        assert_eq!(rec.action, VolumeAction::Deload);
        assert_eq!(rec.next_week_sets, 6); // deload floor
    }

    #[test]
    fn declining_trend_with_modest_readiness_deloads() {
        let rec =
            VolumeRecommender::new().recommend(&muscle(10, 18, 14, false), 45, TrendDirection::Down);
        assert_eq!(rec.action, VolumeAction::Deload);
    }

    #[test]
    fn suppressed_readiness_reduces_toward_mev() {
        let rec =
            VolumeRecommender::new().recommend(&muscle(10, 18, 11, false), 45, TrendDirection::Stable);
        assert_eq!(rec.action, VolumeAction::Reduce);
        assert_eq!(rec.next_week_sets, 10); // floored at mev
    }

    #[test]
    fn below_mev_raises_to_mev() {
        let rec =
            VolumeRecommender::new().recommend(&muscle(10, 18, 7, false), 60, TrendDirection::Stable);
        assert_eq!(rec.action, VolumeAction::Increase);
        assert_eq!(rec.next_week_sets, 10);
    }

    #[test]
    fn at_mrv_holds_one_set_back() {
        let rec =
            VolumeRecommender::new().recommend(&muscle(10, 18, 18, false), 80, TrendDirection::Stable);
        assert_eq!(rec.action, VolumeAction::Hold);
        assert_eq!(rec.next_week_sets, 17);
    }

    #[test]
    fn high_readiness_increases_with_focus_bonus() {
        let recommender = VolumeRecommender::new();
        let rec = recommender.recommend(&muscle(10, 18, 13, false), 80, TrendDirection::Stable);
        assert_eq!(rec.action, VolumeAction::Increase);
        assert_eq!(rec.next_week_sets, 14);

        let rec = recommender.recommend(&muscle(10, 18, 13, true), 68, TrendDirection::Stable);
        assert_eq!(rec.action, VolumeAction::Increase);
        assert_eq!(rec.next_week_sets, 15);

        // Increase is capped at MRV
        let rec = recommender.recommend(&muscle(10, 14, 13, true), 80, TrendDirection::Stable);
        assert_eq!(rec.next_week_sets, 14);
    }

    #[test]
    fn middling_readiness_holds_current_volume() {
        let rec =
            VolumeRecommender::new().recommend(&muscle(10, 18, 13, true), 60, TrendDirection::Stable);
        assert_eq!(rec.action, VolumeAction::Hold);
        assert_eq!(rec.next_week_sets, 13);
    }
}
