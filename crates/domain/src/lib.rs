//! # Propkit Domain
//!
//! Three independent, stateful entities, each a self-contained validated
//! state machine. No data flows between them; each is created with validated
//! bounds, mutated through its own operations, and discarded.
//!
//! - [`CapacityContainer`] tracks cumulative usage against two caps.
//! - [`AccessGate`] tracks a binary lock state behind a credential check.
//! - [`BoundedVehicle`] tracks three independent bounded scalar quantities.
//!
//! Every mutation validates its input before writing a single field, so a
//! failed operation leaves the entity exactly as it was. The entities are
//! plain values with no interior locking; concurrent callers must wrap an
//! instance in their own exclusive-access discipline.

pub mod model;

// Re-export commonly used types
pub use model::{
    container::{CapacityContainer, ItemDimensions},
    gate::AccessGate,
    vehicle::{BoundedVehicle, VehicleStatus},
};
