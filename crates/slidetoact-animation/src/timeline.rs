//! A single tween between two values, sampled by frame timestamps.

use crate::animation::{AnimationSpec, Lerp};

/// One sample taken from a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineSample<T> {
    pub value: T,
    /// Linear (pre-easing) progress in `[0, 1]`.
    pub fraction: f32,
    pub finished: bool,
}

/// Time-based tween from `start` to `target`.
///
/// The start time is latched from the first frame it sees unless set
/// explicitly with [`Timeline::start_at`].
#[derive(Debug, Clone)]
pub struct Timeline<T: Lerp + Clone> {
    start: T,
    target: T,
    current: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl<T: Lerp + Clone> Timeline<T> {
    pub fn new(start: T, target: T, spec: AnimationSpec) -> Self {
        Self {
            current: start.clone(),
            start,
            target,
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn is_started(&self) -> bool {
        self.start_time_nanos.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pin the start of this timeline to `frame_time_nanos`.
    pub fn start_at(&mut self, frame_time_nanos: u64) {
        self.start_time_nanos = Some(frame_time_nanos);
    }

    /// Frame time at which the timeline reaches its target, once started.
    pub fn end_time_nanos(&self) -> Option<u64> {
        self.start_time_nanos
            .map(|start| start.saturating_add(self.spec.duration_nanos()))
    }

    pub fn on_frame(&mut self, frame_time_nanos: u64) -> TimelineSample<T> {
        if self.finished {
            return TimelineSample {
                value: self.current.clone(),
                fraction: 1.0,
                finished: true,
            };
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let animation_elapsed = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = self.spec.duration_nanos();
        let linear_progress = if duration_nanos == 0 {
            1.0
        } else {
            (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0)
        };

        if linear_progress >= 1.0 {
            self.current = self.target.clone();
            self.finished = true;
        } else {
            let progress = self.spec.easing.transform(linear_progress);
            self.current = self.start.lerp(&self.target, progress);
        }

        TimelineSample {
            value: self.current.clone(),
            fraction: linear_progress,
            finished: self.finished,
        }
    }
}
