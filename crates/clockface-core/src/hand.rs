//! Hand angles and vector derivation.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::{ClockDimensions, ClockTime, Point};

/// Minute-scale units spanned by one hour on the dial.
const MINUTE_UNITS_PER_HOUR: f32 = 5.0;
/// Minutes in one 12-hour half-cycle.
const HALF_CYCLE_MINUTES: f32 = 720.0;

/// Which hand a vector belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    /// The hour hand, shortest of the three.
    Hour,
    /// The minute hand.
    Minute,
    /// The second hand.
    Second,
}

impl HandKind {
    /// All hands in paint order, hour first so later hands draw on top.
    pub const ALL: [Self; 3] = [Self::Hour, Self::Minute, Self::Second];
}

/// Strategy for deriving the hour hand's angle.
///
/// The dial supports both historical behaviors. Neither is more correct than
/// the other; the hosting widget picks one at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourHandPolicy {
    /// Whole hours only: the minute contribution quantizes away on the
    /// minute-equivalent scale, so the hand jumps from numeral to numeral
    /// when the hour rolls over.
    DiscreteSnap,
    /// Interpolates over the total minutes elapsed in the current 12-hour
    /// half-cycle, sweeping smoothly between numerals.
    #[default]
    ContinuousSweep,
}

impl HourHandPolicy {
    /// Hour-hand angle in radians for `time`.
    #[must_use]
    pub fn angle(self, time: ClockTime) -> f32 {
        match self {
            Self::DiscreteSnap => {
                minute_scale_angle(f32::from(time.hour()) * MINUTE_UNITS_PER_HOUR)
            }
            Self::ContinuousSweep => {
                let total_minutes = f32::from(time.hour()) * 60.0 + f32::from(time.minute());
                (total_minutes * 360.0 / HALF_CYCLE_MINUTES - 90.0).to_radians()
            }
        }
    }
}

/// Maps a unit on the 0-59 minute scale to its dial angle in radians.
///
/// Unit 0 points straight up and the angle grows clockwise, completing a full
/// turn every 60 units.
#[must_use]
pub fn minute_scale_angle(unit: f32) -> f32 {
    PI * unit / 30.0 - FRAC_PI_2
}

/// A hand rendered as a line segment out of the dial center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandVector {
    /// The dial center.
    pub origin: Point,
    /// The hand's tip.
    pub end: Point,
}

/// Derives the vector for one hand at `time`.
///
/// The hour hand's angle comes from `policy`; minute and second hands map
/// their unit straight onto the minute scale. The reach is the dial radius
/// minus the per-hand truncation, so a degenerate dial yields a zero-length
/// vector rather than an invalid one.
#[must_use]
pub fn hand_vector(
    dims: &ClockDimensions,
    time: ClockTime,
    kind: HandKind,
    policy: HourHandPolicy,
) -> HandVector {
    let angle = match kind {
        HandKind::Hour => policy.angle(time),
        HandKind::Minute => minute_scale_angle(f32::from(time.minute())),
        HandKind::Second => minute_scale_angle(f32::from(time.second())),
    };
    let origin = dims.center();
    HandVector {
        origin,
        end: origin.along(angle, dims.hand_reach(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FaceConstants;

    const EPS: f32 = 1e-4;

    fn dims() -> ClockDimensions {
        ClockDimensions::compute(400.0, 400.0, &FaceConstants::default())
    }

    fn at(hour: u8, minute: u8, second: u8) -> ClockTime {
        ClockTime::new(hour, minute, second).unwrap()
    }

    #[test]
    fn minute_scale_cardinal_angles() {
        assert!((minute_scale_angle(0.0) - -FRAC_PI_2).abs() < EPS);
        assert!(minute_scale_angle(15.0).abs() < EPS);
        assert!((minute_scale_angle(30.0) - FRAC_PI_2).abs() < EPS);
        assert!((minute_scale_angle(45.0) - PI).abs() < EPS);
    }

    #[test]
    fn minute_scale_is_monotonic_clockwise() {
        for unit in 0..59u8 {
            assert!(minute_scale_angle(f32::from(unit + 1)) > minute_scale_angle(f32::from(unit)));
        }
    }

    #[test]
    fn second_hand_points_up_at_zero() {
        let dims = dims();
        let hand = hand_vector(&dims, at(0, 0, 0), HandKind::Second, HourHandPolicy::default());
        assert!((hand.end.x - hand.origin.x).abs() < EPS);
        assert!((hand.end.y - (hand.origin.y - dims.hand_reach(HandKind::Second))).abs() < EPS);
    }

    #[test]
    fn second_hand_points_right_at_fifteen() {
        let dims = dims();
        let hand = hand_vector(&dims, at(0, 0, 15), HandKind::Second, HourHandPolicy::default());
        assert!((hand.end.x - (hand.origin.x + dims.hand_reach(HandKind::Second))).abs() < EPS);
        assert!((hand.end.y - hand.origin.y).abs() < EPS);
    }

    #[test]
    fn second_hand_points_left_at_forty_five() {
        let dims = dims();
        let hand = hand_vector(&dims, at(0, 0, 45), HandKind::Second, HourHandPolicy::default());
        assert!((hand.end.x - (hand.origin.x - dims.hand_reach(HandKind::Second))).abs() < EPS);
        assert!((hand.end.y - hand.origin.y).abs() < EPS);
    }

    #[test]
    fn discrete_three_oclock_matches_minute_hand_at_fifteen() {
        let angle = HourHandPolicy::DiscreteSnap.angle(at(3, 0, 0));
        assert!((angle - minute_scale_angle(15.0)).abs() < EPS);
        assert!(angle.abs() < EPS);
    }

    #[test]
    fn discrete_ignores_minutes_within_the_hour() {
        let on_the_hour = HourHandPolicy::DiscreteSnap.angle(at(3, 0, 0));
        let late_in_the_hour = HourHandPolicy::DiscreteSnap.angle(at(3, 59, 0));
        assert!((on_the_hour - late_in_the_hour).abs() < EPS);
    }

    #[test]
    fn continuous_half_past_six_is_105_degrees() {
        let angle = HourHandPolicy::ContinuousSweep.angle(at(6, 30, 0));
        assert!((angle - 105.0f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn continuous_advances_within_the_hour() {
        let on_the_hour = HourHandPolicy::ContinuousSweep.angle(at(6, 0, 0));
        let half_past = HourHandPolicy::ContinuousSweep.angle(at(6, 30, 0));
        assert!(half_past > on_the_hour);
    }

    #[test]
    fn hand_vector_is_idempotent() {
        let dims = dims();
        let time = at(7, 23, 51);
        for kind in HandKind::ALL {
            let first = hand_vector(&dims, time, kind, HourHandPolicy::ContinuousSweep);
            let second = hand_vector(&dims, time, kind, HourHandPolicy::ContinuousSweep);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn degenerate_dial_collapses_hands_to_the_center() {
        let dims = ClockDimensions::compute(10.0, 10.0, &FaceConstants::default());
        assert!(dims.is_degenerate());
        for kind in HandKind::ALL {
            let hand = hand_vector(&dims, at(4, 20, 0), kind, HourHandPolicy::default());
            assert_eq!(hand.origin, hand.end);
        }
    }
}
