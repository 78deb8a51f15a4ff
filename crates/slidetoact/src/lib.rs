//! Slide-to-act widget core
//!
//! A draggable cursor inside a pill-shaped track. Dragging it past the
//! completion threshold commits the slide and plays the complete
//! animation; [`SlideToActView::reset_slider`] plays it back. The crate owns
//! gesture handling, pipeline playback and the drawing model, and leaves
//! painting, icons and frame scheduling to the host.

mod choreographer;
mod config;
mod error;
mod events;
mod gesture;
mod position;
mod render;
mod view;

pub use choreographer::{Channel, Pipeline, PipelineInputs, PipelineKind, MARGIN_TENSION};
pub use config::{
    ResolvedConfig, SlideToActConfig, StartWindow, DEFAULT_COMPLETION_THRESHOLD,
    PIPELINE_DURATION_MS, SNAP_DURATION_MS,
};
pub use error::SlideToActError;
pub use events::{SlideAnimationListener, SlideCallback, SlideEvent};
pub use gesture::{
    GestureOutcome, GestureRecognizer, GestureState, PointerEvent, PointerEventKind,
    ReleaseDecision,
};
pub use position::PositionModel;
pub use render::{
    HostShell, Icon, IconFrame, IconProvider, NoopHost, Renderer, SliderFrame, StaticIcons,
    Surface, TextFrame,
};
pub use view::SlideToActView;

pub use slidetoact_animation::{FrameTicker, FRAME_INTERVAL_NANOS};
pub use slidetoact_ui_graphics::{Color, Dp, Point, Rect, Sp, Typeface};

pub mod prelude {
    pub use crate::config::SlideToActConfig;
    pub use crate::events::{SlideAnimationListener, SlideEvent};
    pub use crate::gesture::PointerEvent;
    pub use crate::render::{HostShell, IconProvider, Renderer, SliderFrame};
    pub use crate::view::SlideToActView;
}
