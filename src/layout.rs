//! Mapping between hex space and pixel space.
//!
//! A [`Layout`] is an orientation matrix, a per-axis cell size, and a pixel
//! origin. It is immutable after construction and shared by every consumer
//! for the life of the engine.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::consts::{HEX_SIZE_X, HEX_SIZE_Y};
use crate::hex::{FractionalHex, Hex};

/// A 2D Cartesian point, reused for pixel positions, sizes, and origins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The fixed transform constants distinguishing flat-top from pointy-top
/// layouts.
///
/// `f` maps hex coordinates forward to pixels and `b` is its exact inverse;
/// `start_angle`, in sixths of a full turn, positions corner 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Forward matrix `[f0, f1, f2, f3]`.
    pub f: [f64; 4],
    /// Inverse matrix `[b0, b1, b2, b3]`.
    pub b: [f64; 4],
    /// Corner 0 angle, in sixths of a full turn.
    pub start_angle: f64,
}

impl Orientation {
    /// Flat-top orientation.
    #[must_use]
    pub fn flat() -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        Self {
            f: [3.0 / 2.0, 0.0, sqrt3 / 2.0, sqrt3],
            b: [2.0 / 3.0, 0.0, -1.0 / 3.0, sqrt3 / 3.0],
            start_angle: 0.5,
        }
    }

    /// Pointy-top orientation.
    #[must_use]
    pub fn pointy() -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        Self {
            f: [sqrt3, sqrt3 / 2.0, 0.0, 3.0 / 2.0],
            b: [sqrt3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
            start_angle: 0.0,
        }
    }
}

/// Immutable hex-to-pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Flat-top or pointy-top transform constants.
    pub orientation: Orientation,
    /// Cell radius per axis, in pixels.
    pub size: Point,
    /// Pixel position of the `(0, 0, 0)` cell's center.
    pub origin: Point,
}

impl Default for Layout {
    /// The layout the app ships with: flat-top cells, 28 by 12 pixels,
    /// origin at the top-left corner.
    fn default() -> Self {
        Self {
            orientation: Orientation::flat(),
            size: Point::new(HEX_SIZE_X, HEX_SIZE_Y),
            origin: Point::new(0.0, 0.0),
        }
    }
}

impl Layout {
    /// Pixel position of a hex's center.
    #[must_use]
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let m = &self.orientation;
        let q = f64::from(hex.q());
        let r = f64::from(hex.r());
        Point {
            x: (m.f[0] * q + m.f[1] * r) * self.size.x + self.origin.x,
            y: (m.f[2] * q + m.f[3] * r) * self.size.y + self.origin.y,
        }
    }

    /// The fractional hex containing a pixel position.
    ///
    /// Callers must [`FractionalHex::round`] the result before treating it as
    /// a cell identity.
    #[must_use]
    pub fn pixel_to_hex(&self, p: Point) -> FractionalHex {
        let m = &self.orientation;
        let local = Point::new(
            (p.x - self.origin.x) / self.size.x,
            (p.y - self.origin.y) / self.size.y,
        );
        let q = m.b[0] * local.x + m.b[1] * local.y;
        let r = m.b[2] * local.x + m.b[3] * local.y;
        FractionalHex::new(q, r, -q - r)
    }

    /// Offset from a cell center to one of its six corners.
    #[allow(clippy::cast_precision_loss)]
    fn corner_offset(&self, corner: usize) -> Point {
        let angle =
            2.0 * PI * (self.orientation.start_angle + corner as f64) / 6.0;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// The six pixel corners of a hex, in a fixed rotational order starting
    /// at the orientation's start angle. Consumers draw consecutive edges and
    /// close the path back to the first corner.
    #[must_use]
    pub fn polygon_corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        std::array::from_fn(|i| {
            let offset = self.corner_offset(i);
            Point::new(center.x + offset.x, center.y + offset.y)
        })
    }
}
