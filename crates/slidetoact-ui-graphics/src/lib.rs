//! Pure math/data for drawing & units in SlideToAct
//!
//! This crate contains geometry primitives, color definitions, typefaces
//! and unit types shared by the slider core and its renderers.

mod color;
mod geometry;
mod typography;
mod unit;

pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect};
    pub use crate::typography::Typeface;
    pub use crate::unit::{Dp, Sp};
}
