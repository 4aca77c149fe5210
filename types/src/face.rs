//! Clock face outline.

use std::collections::BTreeSet;

use crate::hand::{HandLength, hand};

/// Half-width of the band around the ideal circle that still counts as rim.
const RIM_TOLERANCE: f64 = 0.5;

/// One terminal character position: column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A circle `diameter` cells across, centered on `(radius, radius)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFace {
    diameter: u16,
}

impl ClockFace {
    #[must_use]
    pub const fn new(diameter: u16) -> Self {
        Self { diameter }
    }

    #[must_use]
    pub const fn diameter(self) -> u16 {
        self.diameter
    }

    #[must_use]
    pub const fn radius(self) -> u16 {
        self.diameter / 2
    }

    /// The hand's pivot. Always part of the rendered face.
    #[must_use]
    pub const fn center(self) -> Cell {
        Cell::new(self.radius(), self.radius())
    }

    #[must_use]
    pub fn rim(self) -> BTreeSet<Cell> {
        rim(self.diameter)
    }

    #[must_use]
    pub fn hand(self, length: HandLength, percent_elapsed: f64) -> BTreeSet<Cell> {
        hand(self.diameter, length, percent_elapsed)
    }
}

pub(crate) fn center_distance(x: u16, y: u16, radius: u16) -> f64 {
    let dx = f64::from(i32::from(x) - i32::from(radius));
    let dy = f64::from(i32::from(y) - i32::from(radius));
    (dx * dx + dy * dy).sqrt()
}

/// The cells forming the outline of a circle `diameter` cells across.
///
/// Scans the whole bounding square `[0, diameter] x [0, diameter]` and keeps
/// every cell whose distance from the center is strictly within half a cell
/// of the radius. The center cell is included unconditionally as the hand's
/// pivot, so diameters 0 and 1 yield just that one cell.
///
/// The result only depends on `diameter`; callers redrawing at a fixed size
/// can compute it once and reuse it.
#[must_use]
pub fn rim(diameter: u16) -> BTreeSet<Cell> {
    let radius = diameter / 2;
    let r = f64::from(radius);

    let mut cells = BTreeSet::new();
    cells.insert(Cell::new(radius, radius));

    for y in 0..=diameter {
        for x in 0..=diameter {
            let distance = center_distance(x, y, radius);
            if r - RIM_TOLERANCE < distance && distance < r + RIM_TOLERANCE {
                cells.insert(Cell::new(x, y));
            }
        }
    }

    cells
}
