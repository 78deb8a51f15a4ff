//! Frame-driving test rule.

use std::cell::RefCell;
use std::rc::Rc;

use slidetoact::{PointerEvent, SlideToActConfig, SlideToActError, SlideToActView};
use slidetoact_animation::{FrameTicker, FRAME_INTERVAL_NANOS};

use crate::recorder::{EventRecorder, HostLog, IconLog, RecordingHost, RecordingIcons};

/// Upper bound on frames pumped before a pipeline is declared stuck.
const MAX_IDLE_FRAMES: usize = 600;

/// Main test rule: a laid-out slider, its recorders and a fixed-step clock.
///
/// Frames advance in steps of [`FRAME_INTERVAL_NANOS`], so animation
/// timing is deterministic regardless of how fast the test runs.
pub struct SlideToActTestRule {
    view: SlideToActView,
    host: Rc<RefCell<HostLog>>,
    icons: Rc<RefCell<IconLog>>,
    events: EventRecorder,
    frame_time_nanos: u64,
    ticker: FrameTicker,
}

impl SlideToActTestRule {
    /// Slider at unit density, laid out as `width` x `height` pixels, with
    /// every notification recorded.
    pub fn new(config: SlideToActConfig, width: i32, height: i32) -> Result<Self, SlideToActError> {
        Self::with_icons(config, width, height, RecordingIcons::new())
    }

    pub fn with_icons(
        config: SlideToActConfig,
        width: i32,
        height: i32,
        icons: RecordingIcons,
    ) -> Result<Self, SlideToActError> {
        let host = RecordingHost::new();
        let host_log = host.log();
        let icon_log = icons.log();
        let mut view = SlideToActView::new(&config, 1.0, 1.0, Box::new(host), Box::new(icons))?;
        view.on_size_changed(width, height)?;
        let events = EventRecorder::new();
        events.attach(&mut view);
        Ok(Self {
            view,
            host: host_log,
            icons: icon_log,
            events,
            frame_time_nanos: 0,
            ticker: FrameTicker::new(),
        })
    }

    /// The default slider: 272 x 72 px, 200 px of travel.
    pub fn standard() -> Self {
        Self::new(SlideToActConfig::new("Slide to unlock"), 272, 72)
            .expect("default slider must build")
    }

    pub fn view(&self) -> &SlideToActView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut SlideToActView {
        &mut self.view
    }

    pub fn events(&self) -> &EventRecorder {
        &self.events
    }

    pub fn host(&self) -> HostLog {
        self.host.borrow().clone()
    }

    pub fn icons(&self) -> IconLog {
        self.icons.borrow().clone()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Deliver one frame at the current time, then step the clock.
    pub fn advance_frame(&mut self) {
        self.view.on_frame(self.frame_time_nanos);
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
    }

    /// Deliver frames until `nanos` of frame time have passed.
    pub fn advance_time(&mut self, nanos: u64) {
        let target = self.frame_time_nanos + nanos;
        while self.frame_time_nanos < target {
            self.advance_frame();
        }
    }

    /// Deliver one frame stamped from the wall clock.
    pub fn advance_realtime_frame(&mut self) {
        let now = self.ticker.frame_nanos();
        self.frame_time_nanos = self.frame_time_nanos.max(now);
        self.view.on_frame(self.frame_time_nanos);
    }

    /// Pump frames until no pipeline is running. Returns the number of
    /// frames delivered.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.view.pipeline_kind().is_some() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "slider still animating after {frames} frames: {:?}",
                self.view
            );
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    /// Center of the cursor in local coordinates.
    pub fn cursor_center(&self) -> (f32, f32) {
        let model = self.view.position();
        let half = model.height() as f32 / 2.0;
        (model.position() as f32 + half, half)
    }

    pub fn press_cursor(&mut self) -> bool {
        let (x, y) = self.cursor_center();
        self.view.handle_pointer_event(&PointerEvent::down(x, y))
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.view.handle_pointer_event(&PointerEvent::down(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.view.handle_pointer_event(&PointerEvent::moved(x, y))
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.view.handle_pointer_event(&PointerEvent::up(x, y))
    }

    pub fn pointer_cancel(&mut self) -> bool {
        self.view.handle_pointer_event(&PointerEvent::cancel())
    }

    /// Press the cursor and move it to `position` in ten steps, keeping the
    /// pointer down.
    pub fn drag_cursor_to(&mut self, position: i32) {
        let (from_x, y) = self.cursor_center();
        let start = self.view.position().position();
        assert!(self.press_cursor(), "cursor press was not consumed");
        // Whole-pixel steps, so no sub-pixel remainder is dropped on the way.
        let distance = position - start;
        let steps = 10;
        for i in 1..=steps {
            let offset = distance * i / steps;
            self.pointer_move(from_x + offset as f32, y);
        }
    }

    /// Drag the cursor to `position` and release it there.
    pub fn slide_to(&mut self, position: i32) {
        self.drag_cursor_to(position);
        let (x, y) = self.cursor_center();
        self.pointer_up(x, y);
    }
}
