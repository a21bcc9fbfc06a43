//! TileGrid: the generated map with per-tile terrain and buildability.

use serde::{Deserialize, Serialize};

use forgeline_core::enums::TileType;
use forgeline_core::types::{GridPos, Vec2};

/// A single map cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileType,
    /// Whether a building footprint may cover this tile.
    pub buildable: bool,
    /// Units per extraction for deposit tiles.
    pub resource_yield: Option<u32>,
}

impl Tile {
    pub fn new(kind: TileType, buildable: bool) -> Self {
        Self {
            kind,
            buildable,
            resource_yield: kind.is_deposit().then_some(1),
        }
    }
}

/// Row-major tile map. Fixed after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    height: i32,
    /// `height` rows of `width` tiles, top row first.
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// A `width`×`height` grid filled with `fill`.
    pub fn filled(width: i32, height: i32, fill: Tile) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![fill; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Centre cell (integer division), the reference point for radial
    /// generation rules.
    pub fn center(&self) -> GridPos {
        GridPos::new(self.width / 2, self.height / 2)
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    pub fn get(&self, pos: GridPos) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut Tile> {
        self.index(pos).map(move |i| &mut self.tiles[i])
    }

    pub fn kind_at(&self, pos: GridPos) -> Option<TileType> {
        self.get(pos).map(|t| t.kind)
    }

    pub fn is_buildable(&self, pos: GridPos) -> bool {
        self.get(pos).is_some_and(|t| t.buildable)
    }

    /// Whether the rectangle at `origin` lies fully inside the map.
    pub fn rect_in_bounds(&self, origin: GridPos, width: i32, height: i32) -> bool {
        origin.x >= 0
            && origin.y >= 0
            && origin.x + width <= self.width
            && origin.y + height <= self.height
    }

    /// Map size in world pixels.
    pub fn world_size(&self, tile_size: f32) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * tile_size
    }

    /// All positions with their tiles, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &Tile)> + '_ {
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let i = i as i32;
            (GridPos::new(i % self.width, i / self.width), tile)
        })
    }

    /// Number of tiles of `kind`.
    pub fn count_kind(&self, kind: TileType) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }
}
