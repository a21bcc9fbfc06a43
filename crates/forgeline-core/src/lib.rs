//! Core types and definitions for the FORGELINE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! resources, building/weapon/recipe tables, entity components, commands,
//! events, snapshot views, and tuning constants.
//! It has no dependency on any runtime, ECS, or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod definitions;
pub mod enums;
pub mod events;
pub mod resources;
pub mod state;
pub mod types;
pub mod waves;
