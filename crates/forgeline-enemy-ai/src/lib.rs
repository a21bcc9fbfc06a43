//! Enemy AI for FORGELINE.
//!
//! Archetype profiles, target selection by behavior tag, and the per-tick
//! move/attack decision. Everything here is pure and ECS-free: the
//! simulation gathers plain data, calls in, and applies the result.

pub mod behavior;
pub mod profiles;
pub mod targeting;

pub use forgeline_core as core;

#[cfg(test)]
mod tests;
