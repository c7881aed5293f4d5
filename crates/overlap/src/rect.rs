//! Axis-aligned rectangles in canonical corner form.
//!
//! Purpose
//! - Provide a single value type [`Rect`] whose invariant (`lo <= hi` per
//!   axis) is established at construction and preserved by every derived
//!   rectangle, so downstream code never re-checks corner order.
//! - Overlap uses strict inequalities: rectangles sharing only a boundary
//!   edge or corner are disjoint.

use nalgebra::Vector2;

use crate::parse::ParseError;

/// Axis-aligned rectangle stored as low/high corners.
///
/// Invariants:
/// - `lo.x <= hi.x` and `lo.y <= hi.y` (canonical form).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub lo: Vector2<f64>,
    pub hi: Vector2<f64>,
}

impl Rect {
    /// Build from two opposite corners given in any order.
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            lo: Vector2::new(x1.min(x2), y1.min(y2)),
            hi: Vector2::new(x1.max(x2), y1.max(y2)),
        }
    }

    /// Build from an `[x1, y1, x2, y2]` slice, corners in any order.
    ///
    /// On a count mismatch the error embeds the coordinate sequence itself,
    /// since no input line exists at this level. Line-oriented callers
    /// ([`parse_rectangles`](crate::parse::parse_rectangles)) replace the
    /// record with the full offending input line.
    pub fn from_coords(coords: &[f64]) -> Result<Self, ParseError> {
        match coords {
            &[x1, y1, x2, y2] => Ok(Self::new(x1, y1, x2, y2)),
            _ => Err(ParseError::InvalidCoordinateCount {
                record: format!("{coords:?}"),
            }),
        }
    }

    /// Intersection with `other`, or `None` when disjoint.
    ///
    /// Disjointness is strict per axis (`lo >= other.hi` or `hi <= other.lo`),
    /// so zero-width contact does not count as overlap. Symmetric in its
    /// operands; `r.overlap(&r)` returns `r` itself.
    pub fn overlap(&self, other: &Rect) -> Option<Rect> {
        if self.lo.x >= other.hi.x
            || self.hi.x <= other.lo.x
            || self.lo.y >= other.hi.y
            || self.hi.y <= other.lo.y
        {
            return None;
        }
        Some(Rect {
            lo: Vector2::new(self.lo.x.max(other.lo.x), self.lo.y.max(other.lo.y)),
            hi: Vector2::new(self.hi.x.min(other.hi.x), self.hi.y.min(other.hi.y)),
        })
    }

    /// Area `(hi.x - lo.x) * (hi.y - lo.y)`. Non-negative by the canonical
    /// invariant; zero for degenerate rectangles.
    #[inline]
    pub fn area(&self) -> f64 {
        (self.hi.x - self.lo.x) * (self.hi.y - self.lo.y)
    }

    /// Quarter turn `(x, y) ↦ (y, -x)` applied to both corners, then
    /// re-canonicalized (the turn swaps which transformed corner is low).
    #[inline]
    pub fn rotated(&self) -> Rect {
        Rect::new(self.lo.y, -self.lo.x, self.hi.y, -self.hi.x)
    }
}
