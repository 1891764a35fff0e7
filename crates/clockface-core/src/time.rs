//! Time-of-day sampling for the dial.

use chrono::{Local, Timelike as _};
use derive_more::{Display, Error};

/// A time of day folded onto the 12-hour dial.
///
/// The hour is stored in `0..=11`; 12 o'clock and 0 o'clock occupy the same
/// dial angle, so the fold loses nothing a clock face could show. Minutes and
/// seconds are in `0..=59`. A value is recreated from the wall clock on every
/// redraw; nothing persists between frames.
///
/// # Examples
///
/// ```
/// use clockface_core::ClockTime;
///
/// let time = ClockTime::new(9, 41, 0).unwrap();
/// assert_eq!(time.hour(), 9);
/// assert_eq!(time.minute(), 41);
///
/// // 24-hour values fold onto the dial.
/// let evening = ClockTime::from_hms24(21, 30, 15).unwrap();
/// assert_eq!(evening.hour(), 9);
///
/// // Out-of-range components are rejected.
/// assert!(ClockTime::new(12, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

/// Error returned when a time component is outside its dial range.
#[derive(Debug, Display, Error)]
#[display("time component out of range: {hour}:{minute:02}:{second:02}")]
pub struct TimeOutOfRange {
    /// Hour component as supplied.
    pub hour: u32,
    /// Minute component as supplied.
    pub minute: u32,
    /// Second component as supplied.
    pub second: u32,
}

impl ClockTime {
    /// Creates a dial time from already-folded components.
    ///
    /// # Errors
    ///
    /// Returns [`TimeOutOfRange`] unless `hour < 12`, `minute < 60` and
    /// `second < 60`.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeOutOfRange> {
        if hour >= 12 || minute >= 60 || second >= 60 {
            return Err(TimeOutOfRange {
                hour: u32::from(hour),
                minute: u32::from(minute),
                second: u32::from(second),
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Creates a dial time from 24-hour components, folding the hour.
    ///
    /// # Errors
    ///
    /// Returns [`TimeOutOfRange`] unless `hour < 24`, `minute < 60` and
    /// `second < 60`.
    pub fn from_hms24(hour: u32, minute: u32, second: u32) -> Result<Self, TimeOutOfRange> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(TimeOutOfRange {
                hour,
                minute,
                second,
            });
        }
        // Range-checked above, so the narrowing always fits.
        Ok(Self {
            hour: u8::try_from(hour % 12).unwrap_or(0),
            minute: u8::try_from(minute).unwrap_or(0),
            second: u8::try_from(second).unwrap_or(0),
        })
    }

    /// Hour on the dial, `0..=11`.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, `0..=59`.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Second, `0..=59`.
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }
}

/// Source of the current time of day.
///
/// The widget reads time through this seam so rendering can be driven by a
/// fixed clock in tests instead of waiting on real delays.
pub trait WallClock: std::fmt::Debug {
    /// Returns the current time folded onto the 12-hour dial.
    fn now(&self) -> ClockTime;
}

/// Production clock reading the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> ClockTime {
        let now = Local::now();
        // chrono components are always in range, so the fold cannot fail.
        ClockTime::from_hms24(now.hour(), now.minute(), now.second()).unwrap_or_default()
    }
}
