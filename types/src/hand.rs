//! The rotating hand.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::angle::{Slope, slope_for_phase_fraction};
use crate::face::{Cell, center_distance};

/// Extra reach past `radius * length`, and the narrowest ray band.
const HAND_TOLERANCE: f64 = 0.5;

/// Length of the hand as a fraction of the clock radius, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLength(f64);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("hand length must be a positive, finite fraction of the radius (got {0})")]
pub struct HandLengthError(pub f64);

impl HandLength {
    pub const HALF: Self = Self(0.5);
    pub const FULL: Self = Self(1.0);

    /// Ratios above 1 are clamped to a full-radius hand.
    pub fn new(ratio: f64) -> Result<Self, HandLengthError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(HandLengthError(ratio));
        }
        Ok(Self(ratio.min(1.0)))
    }

    #[must_use]
    pub const fn ratio(self) -> f64 {
        self.0
    }
}

impl Default for HandLength {
    fn default() -> Self {
        Self::HALF
    }
}

impl TryFrom<f64> for HandLength {
    type Error = HandLengthError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Quarter of the bounding square the hand tip lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quadrant {
    UpperRight,
    LowerRight,
    LowerLeft,
    UpperLeft,
}

impl Quadrant {
    /// A full turn shares the starting quadrant.
    fn containing(fraction: f64) -> Self {
        if fraction <= 0.25 || fraction >= 1.0 {
            Quadrant::UpperRight
        } else if fraction <= 0.5 {
            Quadrant::LowerRight
        } else if fraction <= 0.75 {
            Quadrant::LowerLeft
        } else {
            Quadrant::UpperLeft
        }
    }

    /// Column and row ranges, both including the center line.
    fn ranges(self, radius: u16, diameter: u16) -> (RangeInclusive<u16>, RangeInclusive<u16>) {
        let near = 0..=radius;
        let far = radius..=diameter;
        match self {
            Quadrant::UpperRight => (far, near),
            Quadrant::LowerRight => (far.clone(), far),
            Quadrant::LowerLeft => (near, far),
            Quadrant::UpperLeft => (near.clone(), near),
        }
    }
}

/// The cells forming the hand after `percent_elapsed` of a phase.
///
/// Only the quadrant holding the tip is scanned; a vertical hand narrows the
/// scan to the center column. A cell is on the hand when it lies within the
/// ray's band and closer to the center than `radius * length + 0.5`. The
/// band is `max(|slope|, 0.5)` wide so steep rays stay gap-free after
/// rounding to whole cells.
///
/// `0.0` and `1.0` render the same upward hand.
#[must_use]
pub fn hand(diameter: u16, length: HandLength, percent_elapsed: f64) -> BTreeSet<Cell> {
    let fraction = if percent_elapsed.is_nan() {
        0.0
    } else {
        percent_elapsed.clamp(0.0, 1.0)
    };
    let radius = diameter / 2;
    let slope = slope_for_phase_fraction(fraction);

    let (mut columns, rows) = Quadrant::containing(fraction).ranges(radius, diameter);
    if slope.is_vertical() {
        columns = radius..=radius;
    }

    let reach = f64::from(radius) * length.ratio() + HAND_TOLERANCE;
    let mut cells = BTreeSet::new();

    for x in columns {
        let centered_x = f64::from(i32::from(x) - i32::from(radius));

        for y in rows.clone() {
            // Flip rows so that up is positive.
            let centered_y = f64::from(i32::from(radius) - i32::from(y));

            let on_ray = match slope {
                Slope::Vertical => true,
                Slope::Finite(slope) => {
                    let tolerance = slope.abs().max(HAND_TOLERANCE);
                    let projected = centered_x * slope;
                    centered_y - tolerance < projected && projected < centered_y + tolerance
                }
            };

            if on_ray && center_distance(x, y, radius) < reach {
                cells.insert(Cell::new(x, y));
            }
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{Cell, HandLength, HandLengthError, hand};
    use crate::face::center_distance;

    fn cells(list: &[(u16, u16)]) -> BTreeSet<Cell> {
        list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn cardinal_hands_on_diameter_ten() {
        let half = HandLength::HALF;
        assert_eq!(hand(10, half, 0.0), cells(&[(5, 3), (5, 4), (5, 5)]));
        assert_eq!(hand(10, half, 0.25), cells(&[(5, 5), (6, 5), (7, 5)]));
        assert_eq!(hand(10, half, 0.5), cells(&[(5, 5), (5, 6), (5, 7)]));
        assert_eq!(hand(10, half, 0.75), cells(&[(3, 5), (4, 5), (5, 5)]));
    }

    #[test]
    fn full_revolution_renders_like_start() {
        for diameter in [4, 9, 10, 23] {
            assert_eq!(
                hand(diameter, HandLength::HALF, 1.0),
                hand(diameter, HandLength::HALF, 0.0)
            );
        }
    }

    #[test]
    fn hand_always_includes_pivot() {
        for step in 0..=40 {
            let fraction = f64::from(step) / 40.0;
            assert!(
                hand(16, HandLength::HALF, fraction).contains(&Cell::new(8, 8)),
                "fraction {fraction} lost the pivot"
            );
        }
    }

    #[test]
    fn hand_never_reaches_past_its_length() {
        let diameter = 30;
        let radius = diameter / 2;
        for ratio in [0.25, 0.5, 1.0] {
            let length = HandLength::new(ratio).unwrap();
            for step in 0..=60 {
                let fraction = f64::from(step) / 60.0;
                for cell in hand(diameter, length, fraction) {
                    let distance = center_distance(cell.x, cell.y, radius);
                    assert!(distance < f64::from(radius) * ratio + 0.5);
                }
            }
        }
    }

    #[test]
    fn diagonal_stays_in_its_quadrant() {
        let up_right = hand(10, HandLength::HALF, 0.125);
        assert!(up_right.contains(&Cell::new(6, 4)));
        assert!(up_right.contains(&Cell::new(7, 3)));
        assert!(up_right.iter().all(|c| c.x >= 5 && c.y <= 5));

        let down_left = hand(10, HandLength::HALF, 0.625);
        assert!(down_left.contains(&Cell::new(4, 6)));
        assert!(down_left.iter().all(|c| c.x <= 5 && c.y >= 5));
    }

    #[test]
    fn length_scales_reach() {
        let full = hand(20, HandLength::FULL, 0.0);
        assert_eq!(full.len(), 11);
        assert!(full.contains(&Cell::new(10, 0)));

        let half = hand(20, HandLength::HALF, 0.0);
        assert_eq!(half.len(), 6);
        assert!(!half.contains(&Cell::new(10, 4)));
    }

    #[test]
    fn hand_length_validation() {
        assert_eq!(HandLength::new(0.0), Err(HandLengthError(0.0)));
        assert!(HandLength::new(-1.0).is_err());
        assert!(HandLength::new(f64::INFINITY).is_err());
        assert!(HandLength::new(f64::NAN).is_err());
        assert_eq!(HandLength::new(3.0).map(HandLength::ratio), Ok(1.0));
        assert_eq!(HandLength::default(), HandLength::HALF);
    }
}
