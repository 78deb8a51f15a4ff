//! Recording collaborators.
//!
//! Each recorder shares its log through `Rc<RefCell<..>>`, so a test keeps a
//! handle while the slider owns the boxed collaborator.

use std::cell::RefCell;
use std::rc::Rc;

use slidetoact::{HostShell, Icon, IconProvider, SlideAnimationListener, SlideEvent, SlideToActView};
use slidetoact_ui_graphics::Color;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HostLog {
    pub invalidations: usize,
    pub outline_invalidations: usize,
    /// Every `request_disallow_intercept` argument, in order.
    pub intercept_requests: Vec<bool>,
}

impl HostLog {
    /// Whether ancestors are currently told not to intercept.
    pub fn intercept_disallowed(&self) -> bool {
        self.intercept_requests.last().copied().unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Rc<RefCell<HostLog>> {
        self.log.clone()
    }
}

impl HostShell for RecordingHost {
    fn invalidate(&mut self) {
        self.log.borrow_mut().invalidations += 1;
    }

    fn invalidate_outline(&mut self) {
        self.log.borrow_mut().outline_invalidations += 1;
    }

    fn request_disallow_intercept(&mut self, disallow: bool) {
        self.log.borrow_mut().intercept_requests.push(disallow);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconLog {
    pub animation_starts: usize,
    pub animation_stops: usize,
    pub tints: Vec<(Icon, Color)>,
}

impl IconLog {
    pub fn last_tint(&self, icon: Icon) -> Option<Color> {
        self.tints
            .iter()
            .rev()
            .find(|(tinted, _)| *tinted == icon)
            .map(|(_, color)| *color)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingIcons {
    animated: bool,
    log: Rc<RefCell<IconLog>>,
}

impl RecordingIcons {
    /// Icons whose checkmark fades in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Icons whose checkmark animates itself.
    pub fn animated() -> Self {
        Self {
            animated: true,
            ..Self::default()
        }
    }

    pub fn log(&self) -> Rc<RefCell<IconLog>> {
        self.log.clone()
    }
}

impl IconProvider for RecordingIcons {
    fn supports_animation(&self) -> bool {
        self.animated
    }

    fn start_animation(&mut self) {
        self.log.borrow_mut().animation_starts += 1;
    }

    fn stop_animation(&mut self) {
        self.log.borrow_mut().animation_stops += 1;
    }

    fn set_tint(&mut self, icon: Icon, color: Color) {
        self.log.borrow_mut().tints.push((icon, color));
    }
}

/// Collects every slide notification in emission order.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<SlideEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every slot of `view`, replacing existing subscribers.
    pub fn attach(&self, view: &mut SlideToActView) {
        view.set_on_slide_started(self.pusher(SlideEvent::Started));
        view.set_on_slide_complete(self.pusher(SlideEvent::Complete));
        view.set_on_slide_reset(self.pusher(SlideEvent::Reset));
        view.set_animation_listener(AnimationRecorder {
            events: self.events.clone(),
        });
    }

    fn pusher(&self, event: SlideEvent) -> impl FnMut(&mut SlideToActView) + 'static {
        let events = self.events.clone();
        move |_: &mut SlideToActView| events.borrow_mut().push(event)
    }

    pub fn events(&self) -> Vec<SlideEvent> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<SlideEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn count(&self, matches: impl Fn(&SlideEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| matches(event)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

struct AnimationRecorder {
    events: Rc<RefCell<Vec<SlideEvent>>>,
}

impl SlideAnimationListener for AnimationRecorder {
    fn on_complete_animation_started(&mut self, _view: &mut SlideToActView, threshold: f32) {
        self.events
            .borrow_mut()
            .push(SlideEvent::CompleteAnimationStarted { threshold });
    }

    fn on_complete_animation_ended(&mut self, _view: &mut SlideToActView) {
        self.events
            .borrow_mut()
            .push(SlideEvent::CompleteAnimationEnded);
    }

    fn on_reset_animation_started(&mut self, _view: &mut SlideToActView) {
        self.events.borrow_mut().push(SlideEvent::ResetAnimationStarted);
    }

    fn on_reset_animation_ended(&mut self, _view: &mut SlideToActView) {
        self.events.borrow_mut().push(SlideEvent::ResetAnimationEnded);
    }
}
