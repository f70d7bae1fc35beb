//! Weighted-score totaling over a JSON array

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::Result;

/// One scored entry: a raw score and its weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEntry {
    pub score: f64,
    pub weight: f64,
}

/// Sum of score·weight over the entries, rounded to 3 decimal places
pub fn weighted_sum(entries: &[WeightedEntry]) -> f64 {
    let total: f64 = entries.iter().map(|e| e.score * e.weight).sum();
    (total * 1000.0).round() / 1000.0
}

/// Read a JSON array of `{ "score": .., "weight": .. }` objects and return
/// the weighted total.
pub fn weighted_total(path: &Path) -> Result<f64> {
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<WeightedEntry> = serde_json::from_str(&content)?;
    Ok(weighted_sum(&entries))
}
