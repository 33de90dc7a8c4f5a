use anyhow::{Context, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::models::suggestion::Suggestion;

pub const DEFAULT_CATALOG: [&str; 5] = [
    "Break this task into smaller subtasks",
    "Set a deadline for this task",
    "Delegate this task if possible",
    "This task might be urgent, prioritize it",
    "Consider automating this task",
];

pub const DEFAULT_SUGGESTION_COUNT: usize = 2;

const SEED_MODULUS: u64 = 100;

/// Mock suggestion model: picks a fixed number of canned suggestions,
/// seeded from the task identifier so the same task always gets the same
/// answer.
#[derive(Debug, Clone)]
pub struct SuggestionModel {
    catalog: Vec<String>,
    count: usize,
}

impl SuggestionModel {
    pub fn new(catalog: Vec<String>, count: usize) -> Result<Self, anyhow::Error> {
        if catalog.is_empty() {
            bail!("suggestion catalog must not be empty");
        }
        if count > catalog.len() {
            bail!(
                "cannot select {count} suggestions from a catalog of {}",
                catalog.len()
            );
        }

        Ok(Self { catalog, count })
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Reads `task_id` out of a task payload and selects suggestions for it.
    pub fn predict(&self, task: &Value) -> Result<Vec<Suggestion>, anyhow::Error> {
        let task = task
            .as_object()
            .context("task payload must be a JSON object")?;
        self.suggest(task.get("task_id"))
    }

    pub fn suggest(&self, task_id: Option<&Value>) -> Result<Vec<Suggestion>, anyhow::Error> {
        let seed = seed_for(task_id)?;
        tracing::debug!(seed, count = self.count, "Selecting suggestions");

        let mut rng = StdRng::seed_from_u64(seed);
        let suggestions = self
            .catalog
            .choose_multiple(&mut rng, self.count)
            .enumerate()
            .map(|(id, text)| Suggestion {
                id,
                text: text.clone(),
            })
            .collect();

        Ok(suggestions)
    }
}

impl Default for SuggestionModel {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG.iter().map(|s| s.to_string()).collect(),
            count: DEFAULT_SUGGESTION_COUNT,
        }
    }
}

/// SHA-256 over the compact JSON encoding of the id, first 8 bytes read
/// big-endian, reduced modulo 100. A missing id hashes like `0`.
pub fn seed_for(task_id: Option<&Value>) -> Result<u64, anyhow::Error> {
    let fallback = Value::from(0);
    let encoded = serde_json::to_string(task_id.unwrap_or(&fallback))
        .context("Failed to encode task_id")?;

    let digest = Sha256::digest(encoded.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);

    Ok(u64::from_be_bytes(prefix) % SEED_MODULUS)
}
