//! Pointer gesture recognition for the slider cursor.
//!
//! The recognizer turns raw pointer events into position updates on a
//! [`PositionModel`] and decides, on release, whether the slide commits,
//! snaps back or simply ends.

use slidetoact_ui_graphics::{Point, Rect};

use crate::config::StartWindow;
use crate::position::PositionModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The host took the gesture away (e.g. a parent started scrolling).
    Cancel,
}

/// Pointer event in the slider's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, 0.0, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging,
    /// Release committed; the complete pipeline owns the model.
    Committing,
    /// Release did not commit; the cursor is animating back to 0.
    Snapping,
}

/// What a release turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    Commit,
    Snap,
    /// Released at position 0, nothing to animate.
    Rest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Input is disabled; the event was not consumed.
    Ignored,
    /// Consumed without any effect.
    Consumed,
    /// The pointer went down on the cursor.
    DragStarted,
    /// The cursor moved. `slide_started` is set on the one move that entered
    /// the start window.
    Moved { slide_started: bool },
    Released(ReleaseDecision),
}

impl GestureOutcome {
    pub fn is_consumed(&self) -> bool {
        !matches!(self, GestureOutcome::Ignored)
    }
}

#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    state: GestureState,
    last_x: f32,
    started_once: bool,
    locked: bool,
    enabled: bool,
    commits_held: bool,
    completion_threshold: f32,
    start_window: StartWindow,
}

impl GestureRecognizer {
    pub fn new(completion_threshold: f32, start_window: StartWindow) -> Self {
        Self {
            state: GestureState::Idle,
            last_x: 0.0,
            started_once: false,
            locked: false,
            enabled: true,
            commits_held: false,
            completion_threshold,
            start_window,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == GestureState::Dragging
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// While held, a release past the threshold snaps back instead of
    /// committing, the same as a locked slider.
    pub fn hold_commits(&mut self, hold: bool) {
        self.commits_held = hold;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The cursor hit box. Edges are outside.
    pub fn cursor_bounds(model: &PositionModel) -> Rect {
        Rect::from_ltrb(
            model.position() as f32,
            0.0,
            (model.position() + model.height()) as f32,
            model.height() as f32,
        )
    }

    pub fn handle(&mut self, event: &PointerEvent, model: &mut PositionModel) -> GestureOutcome {
        if !self.enabled {
            return GestureOutcome::Ignored;
        }
        match event.kind {
            PointerEventKind::Down => self.on_down(event.position, model),
            PointerEventKind::Move => self.on_move(event.position.x, model),
            PointerEventKind::Up => self.on_release(model, true),
            PointerEventKind::Cancel => self.on_release(model, false),
        }
    }

    fn on_down(&mut self, at: Point, model: &PositionModel) -> GestureOutcome {
        if self.state != GestureState::Idle {
            return GestureOutcome::Consumed;
        }
        if !Self::cursor_bounds(model).contains_strict(at.x, at.y) {
            return GestureOutcome::Consumed;
        }
        self.state = GestureState::Dragging;
        self.last_x = at.x;
        log::trace!("drag started at x={}", at.x);
        GestureOutcome::DragStarted
    }

    fn on_move(&mut self, x: f32, model: &mut PositionModel) -> GestureOutcome {
        if self.state != GestureState::Dragging {
            return GestureOutcome::Consumed;
        }
        // Sub-pixel remainders are dropped, not accumulated.
        let delta = (x - self.last_x) as i32;
        self.last_x = x;
        model.increase_position(delta);

        let position = model.position();
        if position == 0 {
            self.started_once = false;
        }
        let slide_started = !self.started_once && self.start_window.contains(position);
        if slide_started {
            self.started_once = true;
        }
        GestureOutcome::Moved { slide_started }
    }

    fn on_release(&mut self, model: &PositionModel, may_commit: bool) -> GestureOutcome {
        if self.state != GestureState::Dragging {
            return GestureOutcome::Consumed;
        }
        let decision = if model.position() == 0 {
            ReleaseDecision::Rest
        } else if may_commit
            && !self.locked
            && !self.commits_held
            && model.percent() >= self.completion_threshold
        {
            ReleaseDecision::Commit
        } else {
            ReleaseDecision::Snap
        };

        match decision {
            ReleaseDecision::Commit => {
                self.begin_commit();
            }
            ReleaseDecision::Snap => self.state = GestureState::Snapping,
            ReleaseDecision::Rest => self.state = GestureState::Idle,
        }
        log::debug!(
            "released at {} ({:.2}): {:?}",
            model.position(),
            model.percent(),
            decision
        );
        GestureOutcome::Released(decision)
    }

    /// Enter `Committing` and disable input. Returns whether a drag was
    /// interrupted.
    pub fn begin_commit(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = GestureState::Committing;
        self.enabled = false;
        was_dragging
    }

    /// The snap animation brought the cursor back to 0.
    pub fn finish_snap(&mut self) {
        if self.state == GestureState::Snapping {
            self.state = GestureState::Idle;
        }
        self.started_once = false;
    }

    /// The complete pipeline ended. Input stays disabled until reset.
    pub fn finish_commit(&mut self) {
        if self.state == GestureState::Committing {
            self.state = GestureState::Idle;
        }
    }

    /// The reset pipeline ended: the cursor is back at 0 and input is live again.
    pub fn finish_reset(&mut self) {
        self.state = GestureState::Idle;
        self.started_once = false;
        self.enabled = true;
    }

    /// Abandon whatever gesture is in progress. Returns whether a drag was
    /// interrupted.
    pub fn abort(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = GestureState::Idle;
        was_dragging
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
