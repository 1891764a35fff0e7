//! Geometry and time types for an analog clock face.
//!
//! This crate derives everything a renderer needs to paint a clock dial —
//! the dimensions, the twelve numeral anchors, and the three hand vectors —
//! as pure functions of a bounding size and a time of day. It knows nothing
//! about any particular drawing API: positions are plain [`Point`] values
//! that the hosting widget maps onto its own coordinate types.
//!
//! # Examples
//!
//! ```
//! use clockface_core::{
//!     ClockDimensions, ClockTime, FaceConstants, HandKind, HourHandPolicy, hand_vector,
//! };
//!
//! let dims = ClockDimensions::compute(400.0, 400.0, &FaceConstants::default());
//! let time = ClockTime::new(3, 0, 0).unwrap();
//!
//! // At 3:00 the minute hand points straight up from the dial center.
//! let hand = hand_vector(&dims, time, HandKind::Minute, HourHandPolicy::ContinuousSweep);
//! assert_eq!(hand.origin, dims.center());
//! assert!(hand.end.y < hand.origin.y);
//! ```

pub use self::{dimensions::*, hand::*, numeral::*, point::*, time::*};

mod dimensions;
mod hand;
mod numeral;
mod point;
mod time;
