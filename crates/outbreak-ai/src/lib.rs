//! Hostile AI for OUTBREAK.
//!
//! Implements hostile pursuit steering, peer separation, contact checks,
//! and archetype-driven stat profiles.

pub mod profiles;
pub mod steering;

pub use outbreak_core as core;

#[cfg(test)]
mod tests;
