//! Testing utilities and harness for SlideToAct
//!
//! [`SlideToActTestRule`] owns a slider wired to recording collaborators
//! and drives it with scripted pointer input and fixed-step frames.

pub mod assertions;
pub mod recorder;
pub mod rule;

pub use recorder::{EventRecorder, HostLog, IconLog, RecordingHost, RecordingIcons};
pub use rule::SlideToActTestRule;

pub mod prelude {
    pub use crate::assertions;
    pub use crate::assertions::{assert_approx_eq, assert_events, assert_rect_approx_eq};
    pub use crate::recorder::*;
    pub use crate::rule::*;
}
