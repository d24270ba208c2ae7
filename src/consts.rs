//! Shared numeric constants for the hexgrid crate.

// ── Geometry ────────────────────────────────────────────────────

/// Horizontal radius of a hex cell in pixels.
pub const HEX_SIZE_X: f64 = 28.0;

/// Vertical radius of a hex cell in pixels.
pub const HEX_SIZE_Y: f64 = 12.0;

// ── Terrain ─────────────────────────────────────────────────────

/// Highest level a terrain cell can be raised to.
pub const MAX_HEIGHT: i8 = 4;

/// Lowest level a terrain cell can be lowered to.
pub const MIN_HEIGHT: i8 = -4;

/// Hue of level-zero terrain, in degrees.
pub const TERRAIN_HUE_BASE: i32 = 120;

/// Hue shift per terrain level, in degrees.
pub const TERRAIN_HUE_PER_LEVEL: i32 = 5;

/// Saturation and lightness of level-zero terrain, in percent.
pub const TERRAIN_PCT_BASE: i32 = 50;

/// Saturation and lightness shift per terrain level, in percent.
pub const TERRAIN_PCT_PER_LEVEL: i32 = 10;

// ── Colors ──────────────────────────────────────────────────────

/// Draw color applied when a command doesn't carry one.
pub const DEFAULT_DRAW_COLOR: &str = "black";

/// Fill color of the pointer-trail overlay.
pub const MOUSE_FILL_COLOR: &str = "blue";
