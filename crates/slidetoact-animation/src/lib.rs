//! Animation system for SlideToAct
//!
//! Provides tween timelines with easing curves and a phase sequencer that
//! plays groups of timelines one after another, driven by externally
//! supplied frame timestamps.

mod animation;
mod frame_time;
mod sequence;
mod timeline;

pub use animation::*;
pub use frame_time::*;
pub use sequence::*;
pub use timeline::*;
