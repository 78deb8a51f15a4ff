//! Snap, complete and reset pipelines.
//!
//! Each pipeline is an [`AnimationSequence`] over the slider's animated
//! [`Channel`]s. Start and target values are captured when the pipeline is
//! built; the view applies the per-frame values and runs the lifecycle hooks.

use slidetoact_animation::{AnimationSequence, AnimationSpec, Easing, Phase, SequenceEvents};

/// Overshoot tension of the cursor collapse and re-expansion.
pub const MARGIN_TENSION: f32 = 2.0;

/// Values the pipelines animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Position,
    AreaMargin,
    ActualAreaWidth,
    TickMargin,
    ArrowMargin,
    /// Checkmark reveal: alpha `0..=255`, or a one-shot trigger when the icon
    /// animates itself.
    TickReveal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineKind {
    Snap,
    Complete,
    Reset,
}

/// Slider state the pipelines are built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineInputs {
    pub width: i32,
    pub height: i32,
    pub position: i32,
    pub area_margin: i32,
    pub origin_area_margin: i32,
    pub actual_area_width: i32,
    pub tick_margin: i32,
    pub arrow_margin: i32,
    pub icon_margin: i32,
}

impl PipelineInputs {
    fn max_position(&self) -> i32 {
        (self.width - self.height).max(0)
    }

    /// Width of the cursor once the area margin is applied on both sides.
    fn inner_rect_width(&self) -> i32 {
        self.height - 2 * self.area_margin
    }
}

#[derive(Debug)]
pub struct Pipeline {
    kind: PipelineKind,
    sequence: AnimationSequence<Channel>,
}

impl Pipeline {
    pub fn kind(&self) -> PipelineKind {
        self.kind
    }

    pub fn sequence(&self) -> &AnimationSequence<Channel> {
        &self.sequence
    }

    pub fn on_frame(&mut self, frame_time_nanos: u64) -> SequenceEvents<Channel> {
        self.sequence.on_frame(frame_time_nanos)
    }

    pub fn cancel(&mut self) {
        self.sequence.cancel();
    }

    /// Cursor back to 0 after a release that did not commit.
    pub fn snap(position: i32, duration_ms: u64) -> Self {
        let sequence = AnimationSequence::new("snap").then(Phase::single(
            Channel::Position,
            position as f32,
            0.0,
            AnimationSpec::linear(duration_ms),
        ));
        Self {
            kind: PipelineKind::Snap,
            sequence,
        }
    }

    /// Cursor to the end, collapse it, shrink the track and reveal the tick.
    pub fn complete(inputs: &PipelineInputs, total_ms: u64) -> Self {
        let max_position = inputs.max_position();
        let travel_needed = inputs.position < max_position;
        let phase_ms = phase_duration(total_ms, if travel_needed { 3 } else { 2 });

        let mut sequence = AnimationSequence::new("complete");
        if travel_needed {
            sequence = sequence.then(Phase::single(
                Channel::Position,
                inputs.position as f32,
                max_position as f32,
                AnimationSpec::linear(phase_ms),
            ));
        }
        let collapsed_margin = inputs.inner_rect_width() / 2 + inputs.area_margin;
        let sequence = sequence
            .then(Phase::single(
                Channel::AreaMargin,
                inputs.area_margin as f32,
                collapsed_margin as f32,
                AnimationSpec::tween(
                    phase_ms,
                    Easing::AnticipateOvershoot {
                        tension: MARGIN_TENSION,
                    },
                ),
            ))
            .then(Phase::single(
                Channel::ActualAreaWidth,
                0.0,
                (max_position / 2) as f32,
                AnimationSpec::tween(phase_ms, Easing::AccelerateDecelerate),
            ))
            .alongside(
                Channel::TickReveal,
                0.0,
                255.0,
                AnimationSpec::tween(total_ms, Easing::AccelerateDecelerate),
            );
        Self {
            kind: PipelineKind::Complete,
            sequence,
        }
    }

    /// Undo the completion: tick away, track back, cursor home, cursor and arrow restored.
    pub fn reset(inputs: &PipelineInputs, total_ms: u64) -> Self {
        let phase_ms = phase_duration(total_ms, 5);
        let default_spec = AnimationSpec::tween(phase_ms, Easing::AccelerateDecelerate);
        let sequence = AnimationSequence::new("reset")
            .then(Phase::single(
                Channel::TickMargin,
                inputs.tick_margin as f32,
                (inputs.width / 2) as f32,
                default_spec,
            ))
            .then(Phase::single(
                Channel::ActualAreaWidth,
                inputs.actual_area_width as f32,
                0.0,
                default_spec,
            ))
            .then(Phase::single(
                Channel::Position,
                inputs.position as f32,
                0.0,
                default_spec,
            ))
            .then(Phase::single(
                Channel::AreaMargin,
                inputs.area_margin as f32,
                inputs.origin_area_margin as f32,
                AnimationSpec::tween(
                    phase_ms,
                    Easing::Overshoot {
                        tension: MARGIN_TENSION,
                    },
                ),
            ))
            .then(Phase::single(
                Channel::ArrowMargin,
                inputs.arrow_margin as f32,
                inputs.icon_margin as f32,
                default_spec,
            ));
        Self {
            kind: PipelineKind::Reset,
            sequence,
        }
    }
}

/// Even share of `total_ms` for each of `phases` phases.
fn phase_duration(total_ms: u64, phases: u64) -> u64 {
    total_ms / phases.max(1)
}

/// Animated values are whole pixels; fractions are truncated toward zero.
pub fn to_pixels(value: f32) -> i32 {
    value as i32
}

#[cfg(test)]
#[path = "tests/choreographer_tests.rs"]
mod tests;
