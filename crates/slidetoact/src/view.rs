//! The slider itself.
//!
//! [`SlideToActView`] owns the position model, the gesture recognizer and at
//! most one animation pipeline. Hosts feed it layout, pointer events and
//! frame timestamps; it answers with repaint requests, [`SliderFrame`]s and
//! slide notifications.

use slidetoact_animation::SequenceEvent;
use slidetoact_ui_graphics::{Color, Sp, Typeface};

use crate::choreographer::{to_pixels, Channel, Pipeline, PipelineInputs, PipelineKind};
use crate::config::{ResolvedConfig, SlideToActConfig};
use crate::error::SlideToActError;
use crate::events::{SlideAnimationListener, SlideEvent, SlideListeners};
use crate::gesture::{
    GestureOutcome, GestureRecognizer, GestureState, PointerEvent, PointerEventKind,
    ReleaseDecision,
};
use crate::position::PositionModel;
use crate::render::{HostShell, Icon, IconProvider, Renderer, SliderFrame, Surface};

pub struct SlideToActView {
    config: ResolvedConfig,
    density: f32,
    font_scale: f32,
    model: PositionModel,
    gesture: GestureRecognizer,
    surface: Surface,
    completed: bool,
    animating: bool,
    tick_animation_started: bool,
    pipeline: Option<Pipeline>,
    /// Bumped whenever the pipeline is replaced or cancelled, so a frame
    /// stops applying events that belong to a pipeline a listener discarded.
    pipeline_generation: u64,
    host: Box<dyn HostShell>,
    icons: Box<dyn IconProvider>,
    listeners: SlideListeners,
}

impl SlideToActView {
    pub fn new(
        config: &SlideToActConfig,
        density: f32,
        font_scale: f32,
        host: Box<dyn HostShell>,
        icons: Box<dyn IconProvider>,
    ) -> Result<Self, SlideToActError> {
        let config = config.resolve(density, font_scale)?;
        let mut gesture = GestureRecognizer::new(config.completion_threshold, config.start_window);
        gesture.set_locked(config.locked);

        let mut view = Self {
            surface: Surface::new(&config),
            config,
            density,
            font_scale,
            model: PositionModel::default(),
            gesture,
            completed: false,
            animating: false,
            tick_animation_started: false,
            pipeline: None,
            pipeline_generation: 0,
            host,
            icons,
            listeners: SlideListeners::default(),
        };
        view.apply_tints();
        Ok(view)
    }

    /// Layout pass. A track taller than it is wide is rejected and the
    /// previous geometry is kept.
    pub fn on_size_changed(&mut self, width: i32, height: i32) -> Result<(), SlideToActError> {
        if width < 0 || height < 0 || height > width {
            log::warn!("rejected slider layout {width}x{height}");
            return Err(SlideToActError::InvalidTrack { width, height });
        }
        self.model.resize(width, height);
        self.surface.on_layout(&self.config, height);
        self.host.invalidate_outline();
        self.host.invalidate();
        Ok(())
    }

    /// Feed one pointer event. Returns whether the slider consumed it.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let outcome = self.gesture.handle(event, &mut self.model);
        if !outcome.is_consumed() {
            return false;
        }
        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.host.request_disallow_intercept(false);
        }

        match outcome {
            GestureOutcome::Ignored | GestureOutcome::Consumed => {}
            GestureOutcome::DragStarted => self.host.request_disallow_intercept(true),
            GestureOutcome::Moved { slide_started } => {
                self.host.invalidate();
                if slide_started {
                    self.emit(SlideEvent::Started);
                }
            }
            GestureOutcome::Released(ReleaseDecision::Rest) => {}
            GestureOutcome::Released(ReleaseDecision::Snap) => {
                let snap = Pipeline::snap(self.model.position(), self.config.snap_duration_ms);
                self.replace_pipeline(snap);
            }
            GestureOutcome::Released(ReleaseDecision::Commit) => self.start_complete(),
        }
        true
    }

    /// Advance the running pipeline, if any, to `frame_time_nanos`.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        let generation = self.pipeline_generation;
        let Some(pipeline) = self.pipeline.as_mut() else {
            return;
        };
        let kind = pipeline.kind();
        let events = pipeline.on_frame(frame_time_nanos);

        let mut dirty = false;
        for event in events {
            if self.pipeline_generation != generation {
                break;
            }
            match event {
                SequenceEvent::Value { key, value } => {
                    self.apply(kind, key, value);
                    dirty = true;
                }
                SequenceEvent::Ended => {
                    if dirty {
                        self.host.invalidate();
                        dirty = false;
                    }
                    self.finish_pipeline(kind);
                }
                SequenceEvent::Started
                | SequenceEvent::PhaseStarted(_)
                | SequenceEvent::PhaseEnded(_) => {
                    log::trace!("{kind:?}: {event:?} at {frame_time_nanos}ns");
                }
            }
        }
        if dirty {
            self.host.invalidate();
        }
    }

    /// Run the complete pipeline as if the user had released past the
    /// threshold. No-op when completed or while a complete/reset is playing.
    pub fn complete_slider(&mut self) {
        if self.completed || self.animating {
            log::debug!(
                "complete_slider ignored: completed={} animating={}",
                self.completed,
                self.animating
            );
            return;
        }
        if matches!(self.pipeline_kind(), Some(PipelineKind::Complete | PipelineKind::Reset)) {
            return;
        }
        if self.gesture.begin_commit() {
            self.host.request_disallow_intercept(false);
        }
        self.start_complete();
    }

    /// Undo a completion. No-op unless completed.
    pub fn reset_slider(&mut self) {
        if !self.completed {
            log::debug!("reset_slider ignored: not completed");
            return;
        }
        self.start_reset();
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Marks the slider busy. While set, `complete_slider` is a no-op and a
    /// release past the threshold snaps back instead of committing.
    pub fn set_is_animating(&mut self, animating: bool) {
        self.animating = animating;
        self.gesture.hold_commits(animating);
    }

    pub fn is_locked(&self) -> bool {
        self.gesture.is_locked()
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.config.locked = locked;
        self.gesture.set_locked(locked);
    }

    /// Whether pointer input is accepted. Off from a commit until the reset ends.
    pub fn is_enabled(&self) -> bool {
        self.gesture.is_enabled()
    }

    pub fn text(&self) -> &str {
        &self.config.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.config.text = text.into();
        self.host.invalidate();
    }

    pub fn set_typeface(&mut self, typeface: Typeface) {
        self.config.typeface = typeface;
        self.host.invalidate();
    }

    pub fn set_text_size(&mut self, size: Sp) -> Result<(), SlideToActError> {
        let px = size.to_px(self.density, self.font_scale);
        if !(px.is_finite() && px >= 0.0) {
            return Err(SlideToActError::InvalidDimension {
                name: "text_size",
                value: px,
            });
        }
        self.config.text_size = px;
        self.host.invalidate();
        Ok(())
    }

    pub fn outer_color(&self) -> Color {
        self.config.outer_color
    }

    pub fn set_outer_color(&mut self, color: Color) {
        self.config.outer_color = color;
        self.icons.set_tint(Icon::Arrow, color);
        self.host.invalidate();
    }

    pub fn inner_color(&self) -> Color {
        self.config.inner_color
    }

    pub fn set_inner_color(&mut self, color: Color) {
        self.config.inner_color = color;
        self.icons.set_tint(Icon::RightIcon, color);
        self.icons.set_tint(Icon::Tick, color);
        self.host.invalidate();
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn position(&self) -> &PositionModel {
        &self.model
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.state()
    }

    pub fn pipeline_kind(&self) -> Option<PipelineKind> {
        self.pipeline.as_ref().map(Pipeline::kind)
    }

    pub fn frame(&self) -> SliderFrame {
        self.surface.compose(&self.model, &self.config)
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw(&self.frame());
    }

    pub fn set_on_slide_started(&mut self, callback: impl FnMut(&mut SlideToActView) + 'static) {
        self.listeners.started.set(Some(Box::new(callback)));
    }

    pub fn set_on_slide_complete(&mut self, callback: impl FnMut(&mut SlideToActView) + 'static) {
        self.listeners.complete.set(Some(Box::new(callback)));
    }

    pub fn set_on_slide_reset(&mut self, callback: impl FnMut(&mut SlideToActView) + 'static) {
        self.listeners.reset.set(Some(Box::new(callback)));
    }

    pub fn set_animation_listener(&mut self, listener: impl SlideAnimationListener + 'static) {
        self.listeners.animation.set(Some(Box::new(listener)));
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// The host is tearing the slider down. Any pipeline stops where it is
    /// and no end notification fires.
    pub fn detach(&mut self) {
        if self.gesture.abort() {
            self.host.request_disallow_intercept(false);
        }
        self.cancel_pipeline();
        self.set_is_animating(false);
    }

    fn apply_tints(&mut self) {
        self.icons.set_tint(Icon::Arrow, self.config.outer_color);
        self.icons.set_tint(Icon::RightIcon, self.config.inner_color);
        self.icons.set_tint(Icon::Tick, self.config.inner_color);
    }

    fn pipeline_inputs(&self) -> PipelineInputs {
        PipelineInputs {
            width: self.model.width(),
            height: self.model.height(),
            position: self.model.position(),
            area_margin: self.surface.area_margin,
            origin_area_margin: self.surface.origin_area_margin,
            actual_area_width: self.surface.actual_area_width,
            tick_margin: self.surface.tick_margin,
            arrow_margin: self.surface.arrow_margin,
            icon_margin: self.config.icon_margin,
        }
    }

    fn replace_pipeline(&mut self, pipeline: Pipeline) {
        self.cancel_pipeline();
        self.pipeline = Some(pipeline);
    }

    fn cancel_pipeline(&mut self) {
        if let Some(mut pipeline) = self.pipeline.take() {
            pipeline.cancel();
        }
        self.pipeline_generation = self.pipeline_generation.wrapping_add(1);
    }

    fn start_complete(&mut self) {
        let threshold = self.model.percent();
        log::debug!("complete pipeline from {} ({threshold:.2})", self.model.position());
        let pipeline = Pipeline::complete(&self.pipeline_inputs(), self.config.pipeline_duration_ms);
        self.replace_pipeline(pipeline);
        self.set_is_animating(true);
        self.surface.right_icon_alpha = 0;
        self.host.invalidate();
        self.emit(SlideEvent::CompleteAnimationStarted { threshold });
    }

    fn start_reset(&mut self) {
        log::debug!("reset pipeline from {}", self.model.position());
        self.completed = false;
        let pipeline = Pipeline::reset(&self.pipeline_inputs(), self.config.pipeline_duration_ms);
        self.replace_pipeline(pipeline);
        self.set_is_animating(true);
        self.surface.right_icon_alpha = 255;
        self.host.invalidate();
        self.emit(SlideEvent::ResetAnimationStarted);
    }

    fn apply(&mut self, kind: PipelineKind, channel: Channel, value: f32) {
        let px = to_pixels(value);
        match channel {
            Channel::Position => self.model.set_position(px),
            Channel::AreaMargin => self.surface.area_margin = px,
            Channel::ActualAreaWidth => {
                if kind == PipelineKind::Reset {
                    self.surface.draw_tick = false;
                }
                self.surface.actual_area_width = px;
                self.host.invalidate_outline();
            }
            Channel::TickMargin => self.surface.tick_margin = px,
            Channel::ArrowMargin => self.surface.arrow_margin = px,
            Channel::TickReveal => self.reveal_tick(value),
        }
    }

    fn reveal_tick(&mut self, alpha: f32) {
        if self.icons.supports_animation() {
            if !self.surface.draw_tick {
                self.surface.tick_margin = self.config.icon_margin;
                self.surface.draw_tick = true;
                self.surface.tick_alpha = 255;
                self.icons.start_animation();
                self.tick_animation_started = true;
            }
        } else {
            self.surface.tick_margin = self.config.icon_margin;
            self.surface.draw_tick = true;
            self.surface.tick_alpha = to_pixels(alpha).clamp(0, 255) as u8;
        }
    }

    fn finish_pipeline(&mut self, kind: PipelineKind) {
        self.pipeline = None;
        self.pipeline_generation = self.pipeline_generation.wrapping_add(1);
        match kind {
            PipelineKind::Snap => {
                self.gesture.finish_snap();
                log::debug!("snap ended");
            }
            PipelineKind::Complete => {
                log::debug!("complete pipeline ended");
                self.completed = true;
                self.set_is_animating(false);
                self.gesture.finish_commit();
                self.emit(SlideEvent::CompleteAnimationEnded);
                self.emit(SlideEvent::Complete);
            }
            PipelineKind::Reset => {
                log::debug!("reset pipeline ended");
                self.set_is_animating(false);
                self.gesture.finish_reset();
                if self.tick_animation_started {
                    self.icons.stop_animation();
                    self.tick_animation_started = false;
                }
                self.emit(SlideEvent::ResetAnimationEnded);
                self.emit(SlideEvent::Reset);
            }
        }
    }

    fn emit(&mut self, event: SlideEvent) {
        log::debug!("{event:?}");
        if let Some(slot) = self.listeners.callback(event) {
            if let Some(mut callback) = slot.take() {
                callback(self);
                if let Some(slot) = self.listeners.callback(event) {
                    slot.restore(callback);
                }
            }
            return;
        }

        // A listener method that drives the view re-entrantly gets the
        // events it caused once it has returned.
        if self.listeners.animation.is_busy() {
            self.listeners.deferred.push_back(event);
            return;
        }
        if let Some(mut listener) = self.listeners.animation.take() {
            match event {
                SlideEvent::CompleteAnimationStarted { threshold } => {
                    listener.on_complete_animation_started(self, threshold)
                }
                SlideEvent::CompleteAnimationEnded => listener.on_complete_animation_ended(self),
                SlideEvent::ResetAnimationStarted => listener.on_reset_animation_started(self),
                SlideEvent::ResetAnimationEnded => listener.on_reset_animation_ended(self),
                SlideEvent::Started | SlideEvent::Complete | SlideEvent::Reset => {}
            }
            self.listeners.animation.restore(listener);
            while let Some(deferred) = self.listeners.deferred.pop_front() {
                self.emit(deferred);
            }
        }
    }
}

impl Drop for SlideToActView {
    fn drop(&mut self) {
        self.cancel_pipeline();
    }
}

impl std::fmt::Debug for SlideToActView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideToActView")
            .field("model", &self.model)
            .field("gesture", &self.gesture.state())
            .field("completed", &self.completed)
            .field("animating", &self.animating)
            .field("pipeline", &self.pipeline_kind())
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
