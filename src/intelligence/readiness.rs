//! Readiness scoring from weekly wellness check-ins

use tracing::debug;

use super::ReadinessLabel;
use crate::constants::readiness as tuning;
use crate::models::CheckIn;

/// Maps the latest check-in to a 0-100 readiness score
///
/// The score is a weighted composite over inverted fatigue, inverted
/// soreness, sleep quality, motivation, and inverted stress, each on a 0-10
/// axis. With no check-in on record the scorer returns a neutral default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessScorer;

impl ReadinessScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a check-in; `None` yields the no-data default
    pub fn score(&self, checkin: Option<&CheckIn>) -> u32 {
        let Some(checkin) = checkin else {
            return tuning::DEFAULT_SCORE;
        };

        let fatigue = invert(checkin.fatigue_level);
        let soreness = invert(checkin.soreness_level);
        let sleep = f64::from(checkin.sleep_quality);
        let motivation = f64::from(checkin.motivation_level);
        let stress = invert(checkin.stress_level);

        let score10 = fatigue * tuning::FATIGUE_WEIGHT
            + soreness * tuning::SORENESS_WEIGHT
            + sleep * tuning::SLEEP_WEIGHT
            + motivation * tuning::MOTIVATION_WEIGHT
            + stress * tuning::STRESS_WEIGHT;

        let score = (score10 * 10.0).round().clamp(0.0, 100.0) as u32;
        debug!(score, checkin_id = %checkin.id, "scored readiness");
        score
    }

    /// Band a score into its display label
    pub fn label(score: u32) -> ReadinessLabel {
        if score < tuning::LOW_BELOW {
            ReadinessLabel::Low
        } else if score < tuning::MODERATE_BELOW {
            ReadinessLabel::Moderate
        } else {
            ReadinessLabel::High
        }
    }
}

// Check-in levels run 1-10; higher fatigue/soreness/stress means worse.
fn invert(level: u32) -> f64 {
    10.0 - f64::from(level.min(10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn checkin(fatigue: u32, soreness: u32, motivation: u32, sleep: u32, stress: u32) -> CheckIn {
        CheckIn {
            id: "c1".to_string(),
            fatigue_level: fatigue,
            soreness_level: soreness,
            motivation_level: motivation,
            sleep_quality: sleep,
            stress_level: stress,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn missing_checkin_scores_default() {
        assert_eq!(ReadinessScorer::new().score(None), 65);
    }

    #[test]
    fn known_checkin_scores_exactly() {
        // (10-6)*0.26 + (10-5)*0.16 + 7*0.22 + 8*0.22 + (10-4)*0.14 = 5.98
        let c = checkin(6, 5, 8, 7, 4);
        assert_eq!(ReadinessScorer::new().score(Some(&c)), 60);
    }

    #[test]
    fn score_stays_in_bounds() {
        let best = checkin(1, 1, 10, 10, 1);
        let worst = checkin(10, 10, 1, 1, 10);
        let scorer = ReadinessScorer::new();
        assert!(scorer.score(Some(&best)) <= 100);
        assert!(scorer.score(Some(&worst)) < scorer.score(Some(&best)));
    }

    #[test]
    fn labels_band_at_45_and_75() {
        assert_eq!(ReadinessScorer::label(44), ReadinessLabel::Low);
        assert_eq!(ReadinessScorer::label(45), ReadinessLabel::Moderate);
        assert_eq!(ReadinessScorer::label(74), ReadinessLabel::Moderate);
        assert_eq!(ReadinessScorer::label(75), ReadinessLabel::High);
    }
}
