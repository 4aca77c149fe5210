//! Hand direction as a slope.
//!
//! The hand's ray from the center is described by `dy / dx` in a frame
//! where `y` grows upward. A hand pointing straight up or down has no finite
//! slope and is reported as [`Slope::Vertical`].

/// Direction of the hand's ray from the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    /// `dy / dx` with `y` growing upward.
    Finite(f64),
    /// The hand points straight up or straight down.
    Vertical,
}

impl Slope {
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Slope::Vertical)
    }

    /// The finite slope, or `None` for a vertical hand.
    #[must_use]
    pub const fn finite(self) -> Option<f64> {
        match self {
            Slope::Finite(value) => Some(value),
            Slope::Vertical => None,
        }
    }
}

/// Slope of the hand after `percent_elapsed` of a full clockwise turn.
///
/// `0.0` points at 12 o'clock, `0.25` at 3, `0.5` at 6 and `0.75` at 9.
/// Values outside `[0, 1]` are clamped.
///
/// The clockwise angle is first shifted by a quarter turn so that 12 o'clock
/// lands on the 90 degree axis, then reduced to its first-quadrant
/// equivalent. The two halves of each half-turn use `-tan(q)` and
/// `tan(90 - q)` respectively; the sign flip mirrors the angle across the
/// vertical axis, turning counter-clockwise math angles into clockwise clock
/// angles. The shifted angle is taken modulo 360 and each branch owns the
/// lower bound of its quarter, so the four cardinal directions come out
/// exactly as `Vertical`, `0`, `Vertical`, `0`.
#[must_use]
pub fn slope_for_phase_fraction(percent_elapsed: f64) -> Slope {
    let fraction = if percent_elapsed.is_nan() {
        0.0
    } else {
        percent_elapsed.clamp(0.0, 1.0)
    };

    let mut degrees = fraction * 360.0;
    degrees = if degrees <= 270.0 {
        degrees + 90.0
    } else {
        degrees - 270.0
    };
    let degrees = degrees % 360.0;

    let first_quadrant = degrees - 90.0 * (degrees / 90.0).floor();

    if degrees % 180.0 < 90.0 {
        Slope::Finite(-first_quadrant.to_radians().tan())
    } else if first_quadrant == 0.0 {
        Slope::Vertical
    } else {
        Slope::Finite((90.0 - first_quadrant).to_radians().tan())
    }
}

#[cfg(test)]
mod tests {
    use super::{Slope, slope_for_phase_fraction};

    fn finite(fraction: f64) -> f64 {
        slope_for_phase_fraction(fraction)
            .finite()
            .unwrap_or_else(|| panic!("{fraction} should not be vertical"))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn twelve_and_six_are_vertical() {
        assert_eq!(slope_for_phase_fraction(0.0), Slope::Vertical);
        assert_eq!(slope_for_phase_fraction(0.5), Slope::Vertical);
    }

    #[test]
    fn three_and_nine_are_horizontal() {
        assert_eq!(slope_for_phase_fraction(0.25), Slope::Finite(0.0));
        assert_eq!(slope_for_phase_fraction(0.75), Slope::Finite(0.0));
    }

    #[test]
    fn full_turn_matches_start() {
        assert_eq!(slope_for_phase_fraction(1.0), slope_for_phase_fraction(0.0));
    }

    #[test]
    fn diagonals_alternate_sign() {
        // Up-right and down-left rise with x; down-right and up-left fall.
        assert!(approx(finite(0.125), 1.0));
        assert!(approx(finite(0.375), -1.0));
        assert!(approx(finite(0.625), 1.0));
        assert!(approx(finite(0.875), -1.0));
    }

    #[test]
    fn matches_cotangent_of_clockwise_angle() {
        for step in 1..100 {
            let fraction = f64::from(step) / 100.0;
            if step % 25 == 0 {
                continue;
            }
            let theta = (fraction * 360.0).to_radians();
            let expected = theta.cos() / theta.sin();
            let actual = finite(fraction);
            assert!(
                (actual - expected).abs() < 1e-6 * expected.abs().max(1.0),
                "fraction {fraction}: {actual} != {expected}"
            );
        }
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(slope_for_phase_fraction(-0.3), Slope::Vertical);
        assert_eq!(slope_for_phase_fraction(1.7), Slope::Vertical);
        assert_eq!(slope_for_phase_fraction(f64::NAN), Slope::Vertical);
    }
}
