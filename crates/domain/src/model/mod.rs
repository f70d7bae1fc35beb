//! Entities and their value objects

pub mod container;
pub mod gate;
pub mod vehicle;
