//! Performance trend classification from recent log history

use super::TrendDirection;
use crate::constants::trend as tuning;
use crate::models::ExerciseLog;

/// Classifies recent performance as declining, stable, or improving
///
/// Compares the mean performance rating of the three most recent logs against
/// the three before them. Expects logs ordered newest-first by first-set
/// completion time; with fewer than four logs the trend reads stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceTrendAnalyzer;

impl PerformanceTrendAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, logs_newest_first: &[&ExerciseLog]) -> TrendDirection {
        if logs_newest_first.len() < tuning::MIN_LOGS {
            return TrendDirection::Stable;
        }

        let recent = mean_rating(&logs_newest_first[..tuning::WINDOW.min(logs_newest_first.len())]);
        let upper = (tuning::WINDOW * 2).min(logs_newest_first.len());
        let previous = mean_rating(&logs_newest_first[tuning::WINDOW..upper]);

        let delta = recent - previous;
        if delta > tuning::DELTA {
            TrendDirection::Up
        } else if delta < -tuning::DELTA {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        }
    }
}

fn mean_rating(logs: &[&ExerciseLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    logs.iter().map(|l| l.performance_rating).sum::<f64>() / logs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoggedSet;
    use chrono::{TimeZone, Utc};

    fn log(id: &str, rating: f64) -> ExerciseLog {
        ExerciseLog {
            id: id.to_string(),
            exercise_prescription_id: "pr1".to_string(),
            exercise_id: Some("e1".to_string()),
            sets_completed: vec![LoggedSet {
                reps: 10,
                weight: 60.0,
                rir: 2,
                completed_at: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            }],
            total_volume_kg: 600.0,
            performance_rating: rating,
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

    fn classify(ratings: &[f64]) -> TrendDirection {
        let logs: Vec<ExerciseLog> = ratings
            .iter()
            .enumerate()
            .map(|(i, r)| log(&format!("l{i}"), *r))
            .collect();
        let refs: Vec<&ExerciseLog> = logs.iter().collect();
        PerformanceTrendAnalyzer::new().classify(&refs)
    }

    #[test]
    fn too_few_logs_read_stable() {
        assert_eq!(classify(&[]), TrendDirection::Stable);
        assert_eq!(classify(&[4.0, 4.0, 4.0]), TrendDirection::Stable);
    }

    #[test]
    fn rising_ratings_read_up() {
        // Recent window 4.5 vs prior 3.5
        assert_eq!(
            classify(&[4.5, 4.5, 4.5, 3.5, 3.5, 3.5]),
            TrendDirection::Up
        );
    }

    #[test]
    fn falling_ratings_read_down() {
        assert_eq!(
            classify(&[3.0, 3.0, 3.0, 4.0, 4.0, 4.0]),
            TrendDirection::Down
        );
    }

    #[test]
    fn small_delta_reads_stable() {
        assert_eq!(
            classify(&[4.0, 4.0, 4.0, 3.7, 3.7, 3.7]),
            TrendDirection::Stable
        );
    }

    #[test]
    fn four_logs_compare_against_short_window() {
        // Recent mean 4.5 vs single prior log 3.0
        assert_eq!(classify(&[4.5, 4.5, 4.5, 3.0]), TrendDirection::Up);
    }
}
