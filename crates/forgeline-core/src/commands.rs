//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, before the
//! world update runs.

use serde::{Deserialize, Serialize};

use crate::definitions::RecipeId;
use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// Replace the held movement keys.
    SetMovement {
        up: bool,
        down: bool,
        left: bool,
        right: bool,
    },
    /// Aim point in world pixels.
    SetAim { x: f32, y: f32 },
    /// Fire button held or released.
    SetFiring { held: bool },
    /// Switch to an unlocked weapon.
    SelectWeapon { weapon: WeaponType },
    ToggleCommanderMode,
    ActivateAbility { ability: AbilityType },

    // --- Building ---
    /// Select an unlocked building type for placement.
    SelectBuilding { building: BuildingType },
    /// Rotate the placement direction clockwise.
    RotatePlacement,
    /// Clear the placement selection. Idempotent.
    CancelPlacement,
    SetHoveredTile { x: i32, y: i32 },
    /// Place a specific building.
    PlaceBuilding {
        building: BuildingType,
        x: i32,
        y: i32,
        direction: Direction,
    },
    /// Place the selected building with the current placement direction.
    PlaceSelected { x: i32, y: i32 },
    RemoveBuilding { building_id: u32 },
    /// Assign (or clear) a production recipe.
    SetRecipe {
        building_id: u32,
        recipe: Option<RecipeId>,
    },

    // --- Waves ---
    /// Summon a catalogue wave with the chosen modifiers.
    StartWave {
        wave_id: String,
        #[serde(default)]
        modifiers: Vec<WaveModifier>,
    },

    // --- Simulation control ---
    /// Set game speed (1.0 = normal).
    SetGameSpeed { speed: f32 },
    Pause,
    Resume,
    TogglePause,
    /// Change zoom by `steps` increments of `ZOOM_STEP`.
    AdjustZoom { steps: i32 },
}
