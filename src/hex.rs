//! Cube-coordinate hexagon identity and fractional rounding.
//!
//! Cells are addressed with three coordinates `(q, r, s)` constrained to the
//! plane `q + r + s = 0`, which keeps neighbor and distance math symmetric.
//! [`Hex`] is the canonical integer form; [`FractionalHex`] is the
//! intermediate form produced by pixel-to-hex conversion, and must be rounded
//! before anything treats it as a cell identity.

#[cfg(test)]
#[path = "hex_test.rs"]
mod hex_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection of a cube triple that doesn't lie on the `q + r + s = 0` plane.
///
/// Silently normalizing such a triple would corrupt neighbor adjacency, so
/// construction fails instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexError {
    /// The three components do not sum to zero.
    #[error("invalid cube coordinates ({q}, {r}, {s}): components must sum to zero")]
    OffPlane {
        /// The offending `q` component.
        q: i32,
        /// The offending `r` component.
        r: i32,
        /// The offending `s` component.
        s: i32,
    },
}

/// A hexagon identity in cube coordinates.
///
/// Only `q` and `r` are stored; `s` is derived as `-q - r`, so every value of
/// this type satisfies the sum-to-zero invariant by construction. Equality
/// over the stored pair is therefore equality over the full triple.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    /// The cell at `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::from_axial(0, 0);

    /// Construct from axial coordinates. `s` is derived, so this cannot fail.
    #[must_use]
    pub const fn from_axial(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct from a full cube triple.
    ///
    /// # Errors
    ///
    /// Returns [`HexError::OffPlane`] if the components do not sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if i64::from(q) + i64::from(r) + i64::from(s) == 0 {
            Ok(Self::from_axial(q, r))
        } else {
            Err(HexError::OffPlane { q, r, s })
        }
    }

    /// The `q` component.
    #[must_use]
    pub const fn q(self) -> i32 {
        self.q
    }

    /// The `r` component.
    #[must_use]
    pub const fn r(self) -> i32 {
        self.r
    }

    /// The derived `s` component.
    #[must_use]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s())
    }
}

/// A hex coordinate mid-computation, off the integer lattice.
///
/// Produced by [`crate::layout::Layout::pixel_to_hex`]. The components still
/// satisfy `q + r + s = 0` up to floating error; [`FractionalHex::round`] is
/// the only way back to an authoritative [`Hex`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionalHex {
    /// Fractional `q` component.
    pub q: f64,
    /// Fractional `r` component.
    pub r: f64,
    /// Fractional `s` component.
    pub s: f64,
}

impl FractionalHex {
    /// Construct from fractional components.
    #[must_use]
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Round to the nearest canonical hex.
    ///
    /// Each component is rounded independently, then the component that moved
    /// furthest is recomputed from the other two so the triple lands back on
    /// the `q + r + s = 0` plane exactly. Rounding all three naively produces
    /// wrong neighbors near cell boundaries. On a tie, `s` is the component
    /// recomputed.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn round(self) -> Hex {
        let rq = self.q.round();
        let rr = self.r.round();
        let rs = self.s.round();
        let dq = (self.q - rq).abs();
        let dr = (self.r - rr).abs();
        let ds = (self.s - rs).abs();

        if dq > dr && dq > ds {
            Hex::from_axial((-rr - rs) as i32, rr as i32)
        } else if dr > dq && dr > ds {
            Hex::from_axial(rq as i32, (-rq - rs) as i32)
        } else {
            // Recomputing `s` is implicit: Hex derives it from q and r.
            Hex::from_axial(rq as i32, rr as i32)
        }
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self::new(f64::from(hex.q()), f64::from(hex.r()), f64::from(hex.s()))
    }
}
