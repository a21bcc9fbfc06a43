//! Radial map generator: a buildable disc around the centre, ore veins in
//! a ring inside the core's power radius, and scattered water beyond it.

use rand::Rng;

use forgeline_core::constants::*;
use forgeline_core::enums::TileType;
use forgeline_core::types::GridPos;
use forgeline_terrain::grid::{Tile, TileGrid};

/// 8-connected growth directions.
const GROWTH_DIRS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Tunable generation parameters. Distances are in tiles from the centre.
#[derive(Debug, Clone)]
pub struct MapGenParams {
    pub buildable_radius: f32,
    pub safe_zone_radius: f32,
    pub ore_min_dist: f32,
    pub ore_max_dist: f32,
    /// Deposit kind and number of veins, generated in this order.
    pub veins: Vec<(TileType, u32)>,
    pub water_probability: f64,
    pub water_max_dist: f32,
}

impl Default for MapGenParams {
    fn default() -> Self {
        Self {
            buildable_radius: BUILDABLE_RADIUS,
            safe_zone_radius: SAFE_ZONE_RADIUS,
            ore_min_dist: ORE_MIN_DIST,
            ore_max_dist: ORE_MAX_DIST,
            veins: vec![
                (TileType::IronDeposit, 12),
                (TileType::CopperDeposit, 8),
                (TileType::CoalDeposit, 6),
                (TileType::StoneDeposit, 5),
            ],
            water_probability: WATER_PROBABILITY,
            water_max_dist: WATER_MAX_DIST,
        }
    }
}

fn dist_from(center: GridPos, pos: GridPos) -> f32 {
    let dx = (pos.x - center.x) as f32;
    let dy = (pos.y - center.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Generate a map with the default parameters.
pub fn generate_map<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> TileGrid {
    generate_map_with(width, height, &MapGenParams::default(), rng)
}

pub fn generate_map_with<R: Rng + ?Sized>(
    width: i32,
    height: i32,
    params: &MapGenParams,
    rng: &mut R,
) -> TileGrid {
    let mut grid = TileGrid::filled(width, height, Tile::default());
    let center = grid.center();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = GridPos::new(x, y);
            let buildable = dist_from(center, pos) <= params.buildable_radius;
            if let Some(tile) = grid.get_mut(pos) {
                *tile = Tile::new(TileType::Grass, buildable);
            }
        }
    }

    // An empty or inverted ring grows no veins.
    let has_ring = params.ore_min_dist < params.ore_max_dist;
    for &(deposit, count) in params.veins.iter().filter(|_| has_ring) {
        for _ in 0..count {
            let Some(seed) = find_vein_seed(&grid, params, rng) else {
                continue;
            };
            let cells = grow_vein(&grid, params, seed, rng);
            for cell in cells {
                if let Some(tile) = grid.get_mut(cell) {
                    if tile.kind == TileType::Grass {
                        tile.kind = deposit;
                        tile.resource_yield = Some(1);
                    }
                }
            }
        }
    }

    scatter_water(&mut grid, params, rng);
    grid
}

/// Random point in the ore ring, away from the map edge. Gives up after
/// `VEIN_SEED_ATTEMPTS` misses.
fn find_vein_seed<R: Rng + ?Sized>(
    grid: &TileGrid,
    params: &MapGenParams,
    rng: &mut R,
) -> Option<GridPos> {
    let center = grid.center();
    for _ in 0..VEIN_SEED_ATTEMPTS {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let radius = rng.gen_range(params.ore_min_dist..params.ore_max_dist);
        let pos = GridPos::new(
            (center.x as f32 + angle.cos() * radius).floor() as i32,
            (center.y as f32 + angle.sin() * radius).floor() as i32,
        );
        let dist = dist_from(center, pos);
        let in_ring = dist >= params.ore_min_dist && dist <= params.ore_max_dist;
        let away_from_edge = pos.x >= VEIN_EDGE_MARGIN
            && pos.y >= VEIN_EDGE_MARGIN
            && pos.x < grid.width() - VEIN_EDGE_MARGIN
            && pos.y < grid.height() - VEIN_EDGE_MARGIN;
        if in_ring && away_from_edge {
            return Some(pos);
        }
    }
    None
}

/// Random-walk cluster around `seed`. Each growth step picks an existing
/// cell and a direction; steps that leave the map or the ore ring, or hit
/// a cell already in the vein, are dropped, so veins can come out smaller
/// than their target size.
fn grow_vein<R: Rng + ?Sized>(
    grid: &TileGrid,
    params: &MapGenParams,
    seed: GridPos,
    rng: &mut R,
) -> Vec<GridPos> {
    let center = grid.center();
    let target = rng.gen_range(VEIN_MIN_TILES..=VEIN_MAX_TILES);
    let mut cells = vec![seed];

    for _ in 1..target {
        let parent = cells[rng.gen_range(0..cells.len())];
        let (dx, dy) = GROWTH_DIRS[rng.gen_range(0..GROWTH_DIRS.len())];
        let next = parent.offset(dx, dy);
        let dist = dist_from(center, next);
        if grid.in_bounds(next)
            && dist >= params.ore_min_dist
            && dist <= params.ore_max_dist
            && !cells.contains(&next)
        {
            cells.push(next);
        }
    }
    cells
}

/// Water patches in the ring between the safe zone and `water_max_dist`.
fn scatter_water<R: Rng + ?Sized>(grid: &mut TileGrid, params: &MapGenParams, rng: &mut R) {
    let center = grid.center();
    let chance = if params.water_probability.is_nan() {
        0.0
    } else {
        params.water_probability.clamp(0.0, 1.0)
    };
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = GridPos::new(x, y);
            let roll = rng.gen_bool(chance);
            let dist = dist_from(center, pos);
            if roll && dist > params.safe_zone_radius && dist <= params.water_max_dist {
                if let Some(tile) = grid.get_mut(pos) {
                    tile.kind = TileType::Water;
                }
            }
        }
    }
}
