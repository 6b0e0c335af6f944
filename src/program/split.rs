//! Split-template selection for the weekly schedule

use serde::{Deserialize, Serialize};

use crate::constants::program as tuning;
use crate::models::SplitPreference;

/// One day template: display name plus the muscle groups it trains
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitTemplate {
    pub name: String,
    pub muscle_groups: Vec<String>,
}

fn template(name: &str, muscles: &[&str]) -> SplitTemplate {
    SplitTemplate {
        name: name.to_string(),
        muscle_groups: muscles.iter().map(|m| m.to_string()).collect(),
    }
}

/// Ordered day templates for a (days-per-week, preference) pair
///
/// The tables are fixed domain knowledge, not computed: Auto picks a canonical
/// layout per day count, PPL and Upper/Lower slice their six-day rotations
/// down, and FullBody generates generic days covering all seven major muscle
/// groups.
pub fn split_templates(days_per_week: u32, preference: SplitPreference) -> Vec<SplitTemplate> {
    let days = days_per_week as usize;
    match preference {
        SplitPreference::Auto => auto_templates(days_per_week)
            .into_iter()
            .take(days)
            .collect(),
        SplitPreference::Ppl => vec![
            template("Push", &["Chest", "Shoulders", "Triceps"]),
            template("Pull", &["Back", "Biceps"]),
            template("Legs", &["Quads", "Hamstrings", "Glutes", "Calves"]),
            template("Push 2", &["Chest", "Shoulders", "Triceps"]),
            template("Pull 2", &["Back", "Biceps"]),
            template("Legs 2", &["Quads", "Hamstrings", "Glutes", "Calves"]),
        ]
        .into_iter()
        .take(days)
        .collect(),
        SplitPreference::UpperLower => vec![
            template("Upper A", &["Chest", "Back", "Shoulders", "Biceps", "Triceps"]),
            template("Lower A", &["Quads", "Hamstrings", "Glutes", "Calves"]),
            template("Upper B", &["Chest", "Back", "Shoulders", "Biceps", "Triceps"]),
            template("Lower B", &["Quads", "Hamstrings", "Glutes", "Calves"]),
            template("Upper C", &["Chest", "Back", "Shoulders", "Biceps", "Triceps"]),
            template("Lower C", &["Quads", "Hamstrings", "Glutes", "Calves"]),
        ]
        .into_iter()
        .take(days)
        .collect(),
        SplitPreference::FullBody => (1..=days_per_week)
            .map(|i| SplitTemplate {
                name: format!("Full Body {i}"),
                muscle_groups: tuning::FULL_BODY_MUSCLES
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            })
            .collect(),
    }
}

fn auto_templates(days_per_week: u32) -> Vec<SplitTemplate> {
    match days_per_week {
        3 => vec![
            template("Full Body A", &["Chest", "Back", "Quads", "Biceps"]),
            template("Full Body B", &["Shoulders", "Hamstrings", "Glutes", "Triceps"]),
            template("Full Body C", &["Chest", "Back", "Quads", "Calves"]),
        ],
        4 => vec![
            template("Upper A", &["Chest", "Back", "Shoulders", "Biceps", "Triceps"]),
            template("Lower A", &["Quads", "Hamstrings", "Glutes", "Calves"]),
            template("Upper B", &["Chest", "Back", "Shoulders", "Biceps", "Triceps"]),
            template("Lower B", &["Quads", "Hamstrings", "Glutes", "Calves"]),
        ],
        5 => vec![
            template("Push", &["Chest", "Shoulders", "Triceps"]),
            template("Pull", &["Back", "Biceps"]),
            template("Legs", &["Quads", "Hamstrings", "Glutes", "Calves"]),
            template("Upper", &["Chest", "Back", "Shoulders", "Biceps", "Triceps"]),
            template("Lower", &["Quads", "Hamstrings", "Glutes", "Calves"]),
        ],
        _ => vec![
            template("Push A", &["Chest", "Shoulders", "Triceps"]),
            template("Pull A", &["Back", "Biceps"]),
            template("Legs A", &["Quads", "Hamstrings", "Glutes", "Calves"]),
            template("Push B", &["Chest", "Shoulders", "Triceps"]),
            template("Pull B", &["Back", "Biceps"]),
            template("Legs B", &["Quads", "Hamstrings", "Glutes", "Calves"]),
        ],
    }
}
