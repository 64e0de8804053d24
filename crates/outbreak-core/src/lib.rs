//! Core types and definitions for the OUTBREAK simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input events, scene commands, state snapshots, audio events,
//! tuning and constants. It has no dependency on any rendering or windowing
//! runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod scene;
pub mod state;
pub mod storage;
pub mod tuning;
pub mod types;

#[cfg(test)]
mod tests;
