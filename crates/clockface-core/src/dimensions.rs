//! Dial dimensions derived from the widget's bounding size.

use crate::{HandKind, Point};

/// Hard-coded style constants feeding the dimension derivation.
///
/// These are the only tunables; everything else is a function of the bounding
/// size. The truncations are fractions of `min(width, height)` so the hands
/// keep their proportions as the widget scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceConstants {
    /// Inset from the widget edge to the numeral ring, in points.
    pub padding: f32,
    /// Font size used for the numerals, in points.
    pub font_size: f32,
    /// Fraction of `min(width, height)` trimmed off every hand's reach.
    pub hand_truncation: f32,
    /// Extra fraction trimmed off the hour hand so it reads shorter.
    pub hour_hand_truncation: f32,
    /// Gap between the dial's outer edge and the rim stroke, in points.
    pub rim_inset: f32,
}

impl Default for FaceConstants {
    fn default() -> Self {
        Self {
            padding: 90.0,
            font_size: 13.0,
            hand_truncation: 1.0 / 20.0,
            hour_hand_truncation: 1.0 / 7.0,
            rim_inset: 10.0,
        }
    }
}

/// Geometry of one clock dial, derived from a bounding size.
///
/// All radii are clamped to zero, so a bounding box too small for the
/// configured padding yields a collapsed dial rather than negative-radius
/// primitives.
///
/// # Examples
///
/// ```
/// use clockface_core::{ClockDimensions, FaceConstants};
///
/// let dims = ClockDimensions::compute(400.0, 300.0, &FaceConstants::default());
/// assert_eq!(dims.outer_radius, 300.0 / 2.0 - 90.0);
/// assert!(!dims.is_degenerate());
///
/// // A box smaller than the padding collapses instead of going negative.
/// let tiny = ClockDimensions::compute(50.0, 50.0, &FaceConstants::default());
/// assert_eq!(tiny.outer_radius, 0.0);
/// assert!(tiny.is_degenerate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockDimensions {
    /// Bounding width the dial was derived for, in points.
    pub width: f32,
    /// Bounding height the dial was derived for, in points.
    pub height: f32,
    /// Inset between the widget edge and the numeral ring, in points.
    pub padding: f32,
    /// Radius of the numeral ring, clamped to zero.
    pub outer_radius: f32,
    /// Radius of the stroked rim circle, clamped to zero.
    pub rim_radius: f32,
    /// Numeral font size, in points.
    pub font_size: f32,
    /// Absolute truncation applied to every hand's reach, in points.
    pub hand_truncation: f32,
    /// Additional absolute truncation applied to the hour hand, in points.
    pub hour_hand_truncation: f32,
}

impl ClockDimensions {
    /// Derives the dial geometry for a `width` x `height` bounding box.
    ///
    /// Total over non-negative sizes and deterministic: identical inputs
    /// produce bit-identical output.
    #[must_use]
    pub fn compute(width: f32, height: f32, constants: &FaceConstants) -> Self {
        let min_side = width.min(height);
        Self {
            width,
            height,
            padding: constants.padding,
            outer_radius: (min_side / 2.0 - constants.padding).max(0.0),
            rim_radius: (min_side / 2.0 - constants.rim_inset).max(0.0),
            font_size: constants.font_size,
            hand_truncation: min_side * constants.hand_truncation,
            hour_hand_truncation: min_side * constants.hour_hand_truncation,
        }
    }

    /// Center of the dial.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Length of `kind`'s hand from the center, clamped to zero.
    ///
    /// Every hand stops short of the numeral ring by [`Self::hand_truncation`];
    /// the hour hand is shortened further so the three remain distinguishable.
    #[must_use]
    pub fn hand_reach(&self, kind: HandKind) -> f32 {
        let reach = match kind {
            HandKind::Hour => {
                self.outer_radius - self.hand_truncation - self.hour_hand_truncation
            }
            HandKind::Minute | HandKind::Second => self.outer_radius - self.hand_truncation,
        };
        reach.max(0.0)
    }

    /// Whether the dial collapsed to nothing and should not be painted.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.outer_radius <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn compute_matches_source_constants() {
        let constants = FaceConstants::default();
        let dims = ClockDimensions::compute(400.0, 300.0, &constants);

        assert_eq!(dims.outer_radius, 60.0);
        assert_eq!(dims.rim_radius, 140.0);
        assert_eq!(dims.hand_truncation, 15.0);
        assert_eq!(dims.hour_hand_truncation, 300.0 / 7.0);
        assert_eq!(dims.center(), crate::Point::new(200.0, 150.0));
    }

    #[test]
    fn hour_hand_is_shortest() {
        let dims = ClockDimensions::compute(600.0, 600.0, &FaceConstants::default());
        assert!(dims.hand_reach(HandKind::Hour) < dims.hand_reach(HandKind::Minute));
        assert_eq!(
            dims.hand_reach(HandKind::Minute),
            dims.hand_reach(HandKind::Second)
        );
    }

    #[test]
    fn degenerate_box_collapses_everything() {
        let dims = ClockDimensions::compute(0.0, 0.0, &FaceConstants::default());
        assert!(dims.is_degenerate());
        assert_eq!(dims.outer_radius, 0.0);
        assert_eq!(dims.rim_radius, 0.0);
        for kind in HandKind::ALL {
            assert_eq!(dims.hand_reach(kind), 0.0);
        }
    }

    proptest! {
        #[test]
        fn outer_radius_is_clamped_half_min_minus_padding(
            width in 0.0f32..4096.0,
            height in 0.0f32..4096.0,
        ) {
            let constants = FaceConstants::default();
            let dims = ClockDimensions::compute(width, height, &constants);
            let expected = (width.min(height) / 2.0 - constants.padding).max(0.0);
            prop_assert_eq!(dims.outer_radius.to_bits(), expected.to_bits());
            prop_assert!(dims.outer_radius >= 0.0);
        }

        #[test]
        fn compute_is_deterministic(
            width in 0.0f32..4096.0,
            height in 0.0f32..4096.0,
        ) {
            let constants = FaceConstants::default();
            let first = ClockDimensions::compute(width, height, &constants);
            let second = ClockDimensions::compute(width, height, &constants);
            prop_assert_eq!(first, second);
        }
    }
}
