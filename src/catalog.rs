// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! External exercise-catalog boundary
//!
//! The recommendation engine never fetches anything itself; this module is
//! the injected collaborator that supplies [`Exercise`] records from an
//! external catalog. Fetching fails soft: any HTTP error or timeout yields an
//! empty list so a missing catalog never blocks program generation. Imported
//! exercises are de-duplicated by name and muscle group against whatever the
//! snapshot already carries.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::models::Exercise;

/// Source of external exercise definitions
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// Fetch and parse the catalog; fails soft to an empty list
    async fn fetch_catalog(&self) -> Vec<Exercise>;
}

/// Cache for the raw catalog payload between fetches
pub trait CatalogCache: Send {
    fn get(&self) -> Option<serde_json::Value>;
    fn set(&mut self, raw: &serde_json::Value);
}

/// In-memory cache, useful as a default and in tests
#[derive(Debug, Default)]
pub struct MemoryCatalogCache {
    raw: Option<serde_json::Value>,
}

impl MemoryCatalogCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogCache for MemoryCatalogCache {
    fn get(&self) -> Option<serde_json::Value> {
        self.raw.clone()
    }

    fn set(&mut self, raw: &serde_json::Value) {
        self.raw = Some(raw.clone());
    }
}

/// Catalog transport errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog request failed with status {0}")]
    BadStatus(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// HTTP-backed catalog reading the configured source URL
pub struct HttpExerciseCatalog {
    client: reqwest::Client,
    config: EngineConfig,
}

impl HttpExerciseCatalog {
    pub fn new(config: EngineConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.catalog.request_timeout_seconds,
            ))
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    async fn fetch_raw(&self) -> Result<serde_json::Value, CatalogError> {
        let response = self
            .client
            .get(&self.config.catalog.source_url)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CatalogError::BadStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    /// Fetch the raw payload, returning it for caching alongside the parsed
    /// exercises
    pub async fn fetch_with_raw(&self) -> (Vec<Exercise>, Option<serde_json::Value>) {
        if !self.config.catalog.enabled {
            return (Vec::new(), None);
        }
        match self.fetch_raw().await {
            Ok(raw) => {
                let parsed = parse_external_exercises(&raw, &self.config);
                debug!(count = parsed.len(), "fetched exercise catalog");
                (parsed, Some(raw))
            }
            Err(err) => {
                warn!(error = %err, "exercise catalog fetch failed; continuing without it");
                (Vec::new(), None)
            }
        }
    }
}

#[async_trait]
impl ExerciseCatalog for HttpExerciseCatalog {
    async fn fetch_catalog(&self) -> Vec<Exercise> {
        self.fetch_with_raw().await.0
    }
}

#[derive(Debug, Deserialize)]
struct ExternalExercise {
    id: Option<String>,
    name: Option<String>,
    equipment: Option<String>,
    #[serde(rename = "primaryMuscles")]
    primary_muscles: Option<Vec<String>>,
}

/// De-duplication key: lowercased name and muscle group
pub fn dedupe_key(name: &str, muscle_group: &str) -> String {
    format!(
        "{}::{}",
        name.trim().to_lowercase(),
        muscle_group.trim().to_lowercase()
    )
}

// "olympic barbell" -> "Olympic Barbell"; empty or missing -> "Other".
fn normalize_equipment(raw: Option<&str>) -> String {
    let safe = raw.unwrap_or("Other").trim();
    if safe.is_empty() {
        return "Other".to_string();
    }
    safe.split_whitespace()
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Parse the external catalog payload into exercise records
///
/// Entries without a name are dropped; duplicates (same name and mapped
/// muscle group) keep their first occurrence. Imported ids carry an `ext_`
/// prefix so they never collide with user-created exercises.
pub fn parse_external_exercises(raw: &serde_json::Value, config: &EngineConfig) -> Vec<Exercise> {
    let Some(entries) = raw.as_array() else {
        return Vec::new();
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut mapped = Vec::new();

    for entry in entries {
        let Ok(external) = serde_json::from_value::<ExternalExercise>(entry.clone()) else {
            continue;
        };
        let Some(name) = external.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
        else {
            continue;
        };

        let primary = external
            .primary_muscles
            .as_ref()
            .and_then(|m| m.first())
            .map(String::as_str)
            .unwrap_or("");
        let muscle_group = config.map_primary_muscle(primary);
        let key = dedupe_key(name, &muscle_group);
        if !seen.insert(key.clone()) {
            continue;
        }

        let id_suffix = external.id.unwrap_or_else(|| {
            key.chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect()
        });

        mapped.push(Exercise {
            id: format!("ext_{id_suffix}"),
            name: name.to_string(),
            muscle_group,
            equipment: normalize_equipment(external.equipment.as_deref()),
            is_system_exercise: true,
        });
    }

    mapped
}

/// Select the fetched exercises not already present, by dedupe key
///
/// The existing library is append-only; this never rewrites or removes
/// entries, it only reports what is safe to add.
pub fn merge_external_exercises(existing: &[Exercise], fetched: &[Exercise]) -> Vec<Exercise> {
    let existing_keys: HashSet<String> = existing
        .iter()
        .map(|e| dedupe_key(&e.name, &e.muscle_group))
        .collect();
    fetched
        .iter()
        .filter(|e| !existing_keys.contains(&dedupe_key(&e.name, &e.muscle_group)))
        .cloned()
        .collect()
}

/// Hydrate the exercise library from cache and network
///
/// Cached entries apply first so the library is usable offline; a successful
/// fetch refreshes the cache and contributes anything still unseen. Returns
/// the records to append to the existing library.
pub async fn hydrate_exercise_library(
    catalog: &HttpExerciseCatalog,
    cache: &mut dyn CatalogCache,
    existing: &[Exercise],
    config: &EngineConfig,
) -> Vec<Exercise> {
    let mut library: Vec<Exercise> = existing.to_vec();
    let mut additions = Vec::new();

    if let Some(cached_raw) = cache.get() {
        let cached = parse_external_exercises(&cached_raw, config);
        for exercise in merge_external_exercises(&library, &cached) {
            library.push(exercise.clone());
            additions.push(exercise);
        }
    }

    let (fetched, raw) = catalog.fetch_with_raw().await;
    if !fetched.is_empty() {
        if let Some(raw) = raw {
            cache.set(&raw);
        }
        for exercise in merge_external_exercises(&library, &fetched) {
            library.push(exercise.clone());
            additions.push(exercise);
        }
    }

    additions
}
