//! Numeral placement around the dial.

use std::{
    f32::consts::PI,
    fmt::{self, Display},
};

use crate::{ClockDimensions, Point};

/// One of the twelve hour numerals printed around the dial.
///
/// # Examples
///
/// ```
/// use clockface_core::Numeral;
///
/// let numeral = Numeral::N7;
/// assert_eq!(numeral.value(), 7);
/// assert_eq!(numeral.label(), "7");
///
/// // Create from a value
/// let numeral = Numeral::from_value(12);
/// assert_eq!(numeral, Numeral::N12);
///
/// // Iterate over the whole ring
/// assert_eq!(Numeral::ALL.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Numeral {
    /// The numeral 1.
    N1 = 1,
    /// The numeral 2.
    N2 = 2,
    /// The numeral 3.
    N3 = 3,
    /// The numeral 4.
    N4 = 4,
    /// The numeral 5.
    N5 = 5,
    /// The numeral 6.
    N6 = 6,
    /// The numeral 7.
    N7 = 7,
    /// The numeral 8.
    N8 = 8,
    /// The numeral 9.
    N9 = 9,
    /// The numeral 10.
    N10 = 10,
    /// The numeral 11.
    N11 = 11,
    /// The numeral 12.
    N12 = 12,
}

impl Numeral {
    /// All numerals in ring order, 1 through 12.
    pub const ALL: [Self; 12] = [
        Self::N1,
        Self::N2,
        Self::N3,
        Self::N4,
        Self::N5,
        Self::N6,
        Self::N7,
        Self::N8,
        Self::N9,
        Self::N10,
        Self::N11,
        Self::N12,
    ];

    /// Creates a numeral from a value in the range 1-12.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-12.
    ///
    /// ```should_panic
    /// use clockface_core::Numeral;
    ///
    /// // This will panic
    /// let _ = Numeral::from_value(13);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::N1,
            2 => Self::N2,
            3 => Self::N3,
            4 => Self::N4,
            5 => Self::N5,
            6 => Self::N6,
            7 => Self::N7,
            8 => Self::N8,
            9 => Self::N9,
            10 => Self::N10,
            11 => Self::N11,
            12 => Self::N12,
            _ => panic!("Invalid numeral value: {value}"),
        }
    }

    /// Returns the numeric value of this numeral (1-12).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the printed label for this numeral.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::N1 => "1",
            Self::N2 => "2",
            Self::N3 => "3",
            Self::N4 => "4",
            Self::N5 => "5",
            Self::N6 => "6",
            Self::N7 => "7",
            Self::N8 => "8",
            Self::N9 => "9",
            Self::N10 => "10",
            Self::N11 => "11",
            Self::N12 => "12",
        }
    }
}

impl Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A numeral together with its anchor point on the ring.
///
/// The anchor is the geometric ring position; glyph placement around it is
/// decided by [`NumeralAlignment`] once the rendered text has been measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumeralLabel {
    /// The numeral to print.
    pub numeral: Numeral,
    /// The ring point the glyph is placed against.
    pub anchor: Point,
}

/// Vertical placement of a numeral glyph relative to its ring anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumeralAlignment {
    /// Glyph box centered on the anchor.
    #[default]
    Centered,
    /// Glyph bottom edge resting on the anchor, so the numeral sits above it.
    Raised,
}

impl NumeralAlignment {
    /// Top-left origin for a glyph measuring `text_width` x `text_height`,
    /// horizontally centered on `anchor` and vertically placed per policy.
    #[must_use]
    pub fn glyph_origin(self, anchor: Point, text_width: f32, text_height: f32) -> Point {
        let x = anchor.x - text_width / 2.0;
        let y = match self {
            Self::Centered => anchor.y - text_height / 2.0,
            Self::Raised => anchor.y - text_height,
        };
        Point::new(x, y)
    }
}

/// Computes the ring anchors for all twelve numerals, in order 1 through 12.
///
/// Each numeral sits at `pi/6 * (value - 3)`; the offset by 3 rotates the
/// sequence so 12 lands at the top of the dial.
#[must_use]
pub fn numeral_positions(dims: &ClockDimensions) -> [NumeralLabel; 12] {
    let center = dims.center();
    Numeral::ALL.map(|numeral| {
        let angle = PI / 6.0 * (f32::from(numeral.value()) - 3.0);
        NumeralLabel {
            numeral,
            anchor: center.along(angle, dims.outer_radius),
        }
    })
}
