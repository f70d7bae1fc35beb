//! CapacityContainer - cumulative load against two independent caps
//!
//! Models a backpack: items are tracked by name, and the running volume and
//! weight totals always equal the sum over the tracked items. Capacity is
//! checked before anything is written, so a rejected add leaves the
//! container untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::{ModelError, Result};

/// Volume and weight of a single tracked item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemDimensions {
    pub volume: f64,
    pub weight: f64,
}

/// CapacityContainer - a two-axis capacity tracker
///
/// Both caps are fixed at construction. Item names are unique keys; adding
/// a name twice is an error rather than an overwrite.
#[derive(Debug, Clone)]
pub struct CapacityContainer {
    /// Maximum total volume (immutable)
    capacity_volume: f64,
    /// Maximum total weight (immutable)
    capacity_weight: f64,
    /// Sum of tracked item volumes
    used_volume: f64,
    /// Sum of tracked item weights
    used_weight: f64,
    /// Tracked items by name
    items: HashMap<String, ItemDimensions>,
}

impl CapacityContainer {
    /// Create an empty container with the given caps.
    ///
    /// Fails with `InvalidArgument` if either cap is not a positive finite
    /// number.
    pub fn new(capacity_volume: f64, capacity_weight: f64) -> Result<Self> {
        if !capacity_volume.is_finite() || capacity_volume <= 0.0 {
            return Err(ModelError::InvalidArgument(format!(
                "capacity volume must be a positive number, got {capacity_volume}"
            )));
        }
        if !capacity_weight.is_finite() || capacity_weight <= 0.0 {
            return Err(ModelError::InvalidArgument(format!(
                "capacity weight must be a positive number, got {capacity_weight}"
            )));
        }

        Ok(Self {
            capacity_volume,
            capacity_weight,
            used_volume: 0.0,
            used_weight: 0.0,
            items: HashMap::new(),
        })
    }

    // ========== Getters ==========

    pub fn capacity_volume(&self) -> f64 {
        self.capacity_volume
    }

    pub fn capacity_weight(&self) -> f64 {
        self.capacity_weight
    }

    /// Current (used_volume, used_weight) totals
    pub fn current_load(&self) -> (f64, f64) {
        (self.used_volume, self.used_weight)
    }

    pub fn remaining_volume(&self) -> f64 {
        self.capacity_volume - self.used_volume
    }

    pub fn remaining_weight(&self) -> f64 {
        self.capacity_weight - self.used_weight
    }

    /// Snapshot of the tracked items.
    ///
    /// Returns a copy, not a live view, so callers cannot mutate internal
    /// state through it.
    pub fn list_items(&self) -> HashMap<String, ItemDimensions> {
        self.items.clone()
    }

    // ========== Mutations ==========

    /// Add a named item.
    ///
    /// Fails with `InvalidArgument` if volume or weight is not a positive
    /// finite number, with `DuplicateItem` if the name is already tracked,
    /// and with `CapacityExceeded` if either running total would pass its
    /// cap. On failure the container is unchanged.
    pub fn add_item(&mut self, name: impl Into<String>, volume: f64, weight: f64) -> Result<()> {
        let name = name.into();

        if !volume.is_finite() || volume <= 0.0 {
            return Err(ModelError::InvalidArgument(format!(
                "item volume must be a positive number, got {volume}"
            )));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ModelError::InvalidArgument(format!(
                "item weight must be a positive number, got {weight}"
            )));
        }
        if self.used_volume + volume > self.capacity_volume {
            return Err(ModelError::CapacityExceeded {
                axis: "volume",
                requested: volume,
                used: self.used_volume,
                limit: self.capacity_volume,
            });
        }
        if self.used_weight + weight > self.capacity_weight {
            return Err(ModelError::CapacityExceeded {
                axis: "weight",
                requested: weight,
                used: self.used_weight,
                limit: self.capacity_weight,
            });
        }
        if self.items.contains_key(&name) {
            return Err(ModelError::DuplicateItem { name });
        }

        self.items.insert(name, ItemDimensions { volume, weight });
        self.used_volume += volume;
        self.used_weight += weight;
        Ok(())
    }

    /// Remove a named item, returning its dimensions.
    ///
    /// Fails with `NotFound` if no item with this name is tracked.
    pub fn remove_item(&mut self, name: &str) -> Result<ItemDimensions> {
        let dims = self.items.remove(name).ok_or_else(|| ModelError::NotFound {
            name: name.to_string(),
        })?;
        self.used_volume -= dims.volume;
        self.used_weight -= dims.weight;
        Ok(dims)
    }
}
