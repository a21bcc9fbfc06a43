//! Recipe crafting for smelters, assemblers and refineries.
//!
//! A building without an assigned recipe does nothing. With one, it crafts
//! while powered and while its input storage covers the recipe inputs.
//! Finished units go to an adjacent conveyor when one has room, otherwise
//! to output storage.

use tracing::trace;

use forgeline_core::definitions::{recipe_def, recipes_for, RecipeDef, RecipeId};
use forgeline_core::resources::{add_to_stacks, stack_amount, take_from_stacks, ResourceStack};

use super::extraction::push_to_adjacent_conveyor;
use crate::world::GameWorld;

fn has_inputs(storage: &[ResourceStack], recipe: &RecipeDef) -> bool {
    recipe
        .inputs
        .iter()
        .all(|input| stack_amount(storage, input.resource) >= input.amount)
}

pub fn update(world: &mut GameWorld, id: u32, dt: f32) {
    let Some(building) = world.buildings.get_mut(id) else {
        return;
    };
    let Some(recipe) = building.recipe.map(recipe_def) else {
        return;
    };
    if !has_inputs(&building.input_storage, &recipe) {
        return;
    }

    building.craft_progress += dt;
    if building.craft_progress < recipe.craft_time {
        return;
    }
    building.craft_progress -= recipe.craft_time;
    if !take_from_stacks(&mut building.input_storage, recipe.inputs) {
        return;
    }
    let perimeter = building.perimeter();

    for output in recipe.outputs {
        for _ in 0..output.amount {
            if push_to_adjacent_conveyor(world, &perimeter, output.resource) {
                continue;
            }
            if let Some(building) = world.buildings.get_mut(id) {
                add_to_stacks(&mut building.output_storage, output.resource, 1);
            }
        }
    }
}

/// Assign or clear a building's recipe. Rejected for unknown ids and for
/// recipes the building type cannot run. Progress restarts on change.
pub fn set_recipe(world: &mut GameWorld, building_id: u32, recipe: Option<RecipeId>) -> bool {
    let Some(building) = world.buildings.get_mut(building_id) else {
        return false;
    };
    if let Some(r) = recipe {
        if !recipes_for(building.kind).contains(&r) {
            trace!(building_id, kind = ?building.kind, recipe = ?r, "recipe not supported");
            return false;
        }
    }
    if building.recipe != recipe {
        building.recipe = recipe;
        building.craft_progress = 0.0;
    }
    true
}
