//! Slide notifications.
//!
//! Every slot holds at most one subscriber. Callbacks receive the view
//! mutably so they can drive it from inside a notification, for example
//! resetting the slider as soon as it completed.

use std::collections::VecDeque;

use crate::view::SlideToActView;

/// Notification kinds, in the order a full complete/reset cycle emits them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlideEvent {
    Started,
    /// `threshold` is the position percent the pipeline started from.
    CompleteAnimationStarted { threshold: f32 },
    CompleteAnimationEnded,
    Complete,
    ResetAnimationStarted,
    ResetAnimationEnded,
    Reset,
}

pub type SlideCallback = dyn FnMut(&mut SlideToActView);

/// Complete and reset animation lifecycle. Every method defaults to a no-op.
pub trait SlideAnimationListener {
    fn on_complete_animation_started(&mut self, _view: &mut SlideToActView, _threshold: f32) {}

    fn on_complete_animation_ended(&mut self, _view: &mut SlideToActView) {}

    fn on_reset_animation_started(&mut self, _view: &mut SlideToActView) {}

    fn on_reset_animation_ended(&mut self, _view: &mut SlideToActView) {}
}

/// A single-subscriber slot that survives its subscriber being called.
///
/// The handler is taken out while it runs. If it installs a replacement
/// (or clears the slot) during that call, the replacement wins.
pub(crate) struct Slot<T: ?Sized> {
    handler: Option<Box<T>>,
    replaced: bool,
    busy: bool,
}

impl<T: ?Sized> Slot<T> {
    pub(crate) fn set(&mut self, handler: Option<Box<T>>) {
        self.handler = handler;
        self.replaced = true;
    }

    pub(crate) fn is_set(&self) -> bool {
        self.handler.is_some()
    }

    /// Whether a handler taken out of this slot is still running.
    pub(crate) fn is_busy(&self) -> bool {
        self.busy
    }

    pub(crate) fn take(&mut self) -> Option<Box<T>> {
        let handler = self.handler.take();
        if handler.is_some() {
            self.replaced = false;
            self.busy = true;
        }
        handler
    }

    pub(crate) fn restore(&mut self, handler: Box<T>) {
        self.busy = false;
        if !self.replaced {
            self.handler = Some(handler);
        }
    }
}

impl<T: ?Sized> Default for Slot<T> {
    fn default() -> Self {
        Self {
            handler: None,
            replaced: false,
            busy: false,
        }
    }
}

#[derive(Default)]
pub(crate) struct SlideListeners {
    pub(crate) started: Slot<SlideCallback>,
    pub(crate) complete: Slot<SlideCallback>,
    pub(crate) reset: Slot<SlideCallback>,
    pub(crate) animation: Slot<dyn SlideAnimationListener>,
    /// Animation events raised while the animation listener was running.
    pub(crate) deferred: VecDeque<SlideEvent>,
}

impl SlideListeners {
    pub(crate) fn clear(&mut self) {
        self.started.set(None);
        self.complete.set(None);
        self.reset.set(None);
        self.animation.set(None);
    }

    pub(crate) fn callback(&mut self, event: SlideEvent) -> Option<&mut Slot<SlideCallback>> {
        match event {
            SlideEvent::Started => Some(&mut self.started),
            SlideEvent::Complete => Some(&mut self.complete),
            SlideEvent::Reset => Some(&mut self.reset),
            _ => None,
        }
    }
}

impl std::fmt::Debug for SlideListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideListeners")
            .field("started", &self.started.is_set())
            .field("complete", &self.complete.is_set())
            .field("reset", &self.reset.is_set())
            .field("animation", &self.animation.is_set())
            .finish()
    }
}
