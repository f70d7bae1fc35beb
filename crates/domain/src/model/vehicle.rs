//! BoundedVehicle - three independent bounded scalar quantities
//!
//! Models an airplane. Speed and altitude are absolute-set operations (each
//! call replaces the prior value) while traveled distance is additive and
//! monotonically non-decreasing. The asymmetry is deliberate and part of the
//! contract.

use serde::{Deserialize, Serialize};
use shared::{ModelError, Result};

/// Point-in-time snapshot of a vehicle's current quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleStatus {
    pub speed: f64,
    pub altitude: f64,
    pub distance: f64,
}

/// BoundedVehicle - bounded speed, altitude, and cumulative distance
#[derive(Debug, Clone)]
pub struct BoundedVehicle {
    /// Maximum speed (immutable)
    max_speed: f64,
    /// Maximum altitude (immutable)
    max_altitude: f64,
    /// Maximum cumulative range (immutable)
    max_range: f64,
    /// Current speed, overwritten by `set_speed`
    speed: f64,
    /// Current altitude, overwritten by `climb`
    altitude: f64,
    /// Total distance flown, only ever grows
    distance_traveled: f64,
}

impl BoundedVehicle {
    /// Create a vehicle with the given bounds; all current quantities start
    /// at zero.
    ///
    /// Fails with `InvalidArgument` if any bound is not a positive finite
    /// number.
    pub fn new(max_speed: f64, max_altitude: f64, max_range: f64) -> Result<Self> {
        for (quantity, value) in [
            ("maximum speed", max_speed),
            ("maximum altitude", max_altitude),
            ("maximum range", max_range),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ModelError::InvalidArgument(format!(
                    "{quantity} must be a positive number, got {value}"
                )));
            }
        }

        Ok(Self {
            max_speed,
            max_altitude,
            max_range,
            speed: 0.0,
            altitude: 0.0,
            distance_traveled: 0.0,
        })
    }

    // ========== Getters ==========

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn max_range(&self) -> f64 {
        self.max_range
    }

    /// Current {speed, altitude, distance} snapshot
    pub fn status(&self) -> VehicleStatus {
        VehicleStatus {
            speed: self.speed,
            altitude: self.altitude,
            distance: self.distance_traveled,
        }
    }

    // ========== Mutations ==========

    /// Set the current speed, replacing the prior value.
    ///
    /// Fails with `InvalidArgument` for non-finite input and with
    /// `OutOfRange` outside `[0, max_speed]`; the prior speed is kept.
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        if !speed.is_finite() {
            return Err(ModelError::InvalidArgument(format!(
                "speed must be a finite number, got {speed}"
            )));
        }
        if speed < 0.0 || speed > self.max_speed {
            return Err(ModelError::OutOfRange {
                quantity: "speed",
                value: speed,
                max: self.max_speed,
            });
        }
        self.speed = speed;
        Ok(())
    }

    /// Set the current altitude, replacing the prior value.
    ///
    /// Same rule as [`set_speed`](Self::set_speed), against `max_altitude`.
    pub fn climb(&mut self, altitude: f64) -> Result<()> {
        if !altitude.is_finite() {
            return Err(ModelError::InvalidArgument(format!(
                "altitude must be a finite number, got {altitude}"
            )));
        }
        if altitude < 0.0 || altitude > self.max_altitude {
            return Err(ModelError::OutOfRange {
                quantity: "altitude",
                value: altitude,
                max: self.max_altitude,
            });
        }
        self.altitude = altitude;
        Ok(())
    }

    /// Extend the traveled distance. Cumulative, never decreases.
    ///
    /// Fails with `InvalidArgument` for non-finite or negative input and
    /// with `RangeExceeded` if the new total would pass `max_range`; the
    /// prior total is kept.
    pub fn fly(&mut self, distance: f64) -> Result<()> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(ModelError::InvalidArgument(format!(
                "distance must be a non-negative number, got {distance}"
            )));
        }
        if self.distance_traveled + distance > self.max_range {
            return Err(ModelError::RangeExceeded {
                requested: distance,
                traveled: self.distance_traveled,
                max_range: self.max_range,
            });
        }
        self.distance_traveled += distance;
        Ok(())
    }
}
