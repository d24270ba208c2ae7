//! Overlay content state: hover trail, terrain height map, and grid sweep.
//!
//! These types own what each overlay draws. They are mutated only from the
//! engine's frame body and read back out as draw commands, never from event
//! handlers directly.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    MAX_HEIGHT, MIN_HEIGHT, TERRAIN_HUE_BASE, TERRAIN_HUE_PER_LEVEL,
    TERRAIN_PCT_BASE, TERRAIN_PCT_PER_LEVEL,
};
use crate::hex::Hex;
use crate::layout::Layout;

/// Append-only record of the hexes the pointer has visited.
///
/// One entry per tracked move event; never deduplicated, so revisited cells
/// appear again. Lifetime is the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HexTrail {
    hexes: Vec<Hex>,
}

impl HexTrail {
    /// An empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the hex under the pointer.
    pub fn track(&mut self, hex: Hex) {
        self.hexes.push(hex);
    }

    /// Number of tracked entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    /// Whether nothing has been tracked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Tracked hexes, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Hex> + '_ {
        self.hexes.iter().copied()
    }
}

/// One edited cell of the terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainCell {
    /// The cell's grid identity.
    pub location: Hex,
    /// Current terrain level, within `[MIN_HEIGHT, MAX_HEIGHT]`.
    pub height: i8,
}

/// The editable terrain: one cell per distinct clicked location, kept in
/// insertion order. Cells are never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeightMap {
    cells: Vec<TerrainCell>,
}

impl HeightMap {
    /// An empty height map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click to a location.
    ///
    /// A cell springs into existence at height zero on first contact, then
    /// the delta is added, saturating at the clamp bounds. Clamping is
    /// defined behavior, not an error.
    pub fn adjust(&mut self, location: Hex, delta: i8) {
        if let Some(cell) =
            self.cells.iter_mut().find(|cell| cell.location == location)
        {
            cell.height =
                cell.height.saturating_add(delta).clamp(MIN_HEIGHT, MAX_HEIGHT);
        } else {
            let height = delta.clamp(MIN_HEIGHT, MAX_HEIGHT);
            self.cells.push(TerrainCell { location, height });
        }
    }

    /// The height of a cell, if it has ever been clicked.
    #[must_use]
    pub fn height_at(&self, location: Hex) -> Option<i8> {
        self.cells
            .iter()
            .find(|cell| cell.location == location)
            .map(|cell| cell.height)
    }

    /// Number of distinct edited cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been edited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Edited cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = TerrainCell> + '_ {
        self.cells.iter().copied()
    }
}

/// CSS color for a terrain level: greener and brighter as terrain rises,
/// darker and grayer as it sinks.
#[must_use]
pub fn terrain_color(height: i8) -> String {
    let level = i32::from(height);
    format!(
        "hsl({}, {}%, {}%)",
        TERRAIN_HUE_BASE + level * TERRAIN_HUE_PER_LEVEL,
        TERRAIN_PCT_BASE + level * TERRAIN_PCT_PER_LEVEL,
        TERRAIN_PCT_BASE + level * TERRAIN_PCT_PER_LEVEL,
    )
}

/// Every hex whose center falls inside the `[0, width] x [0, height]`
/// viewport.
///
/// Sweeps column by column, offsetting each column's row range by half the
/// column index (floored) to stay aligned with the staggered lattice, and
/// keeps only hexes whose centers land inside the viewport.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn grid_hexes(layout: &Layout, width: f64, height: f64) -> Vec<Hex> {
    let col_step = layout.orientation.f[0] * layout.size.x;
    let row_step = layout.orientation.f[3] * layout.size.y;
    if width <= 0.0 || height <= 0.0 || col_step <= 0.0 || row_step <= 0.0 {
        return Vec::new();
    }

    let max_q = (width / col_step).ceil() as i32;
    let max_r = (height / row_step).ceil() as i32 + 1;

    let mut hexes = Vec::new();
    for q in 0..=max_q {
        let offset = q / 2;
        for r in -offset..=(max_r - offset) {
            let hex = Hex::from_axial(q, r);
            let center = layout.hex_to_pixel(hex);
            if center.x >= 0.0
                && center.x <= width
                && center.y >= 0.0
                && center.y <= height
            {
                hexes.push(hex);
            }
        }
    }
    hexes
}
