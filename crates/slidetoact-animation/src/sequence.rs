//! Sequential composition of value timelines.
//!
//! An [`AnimationSequence`] plays a list of [`Phase`]s strictly one after
//! another. Every timeline inside a phase runs concurrently, and phase `N + 1`
//! starts at the exact frame time phase `N` ended, so the total duration does
//! not drift with frame boundaries. Companion tracks start together with the
//! first phase and run independently of the phase order.
//!
//! The sequence does not own the animated values. Each frame it reports a
//! list of [`SequenceEvent`]s that the caller applies to its own state,
//! which keeps the sequencer free of callbacks and borrow juggling.

use smallvec::SmallVec;
use std::fmt::Debug;

use crate::animation::AnimationSpec;
use crate::timeline::Timeline;

/// One animated channel inside a phase.
#[derive(Debug, Clone)]
pub struct Track<K> {
    key: K,
    timeline: Timeline<f32>,
}

impl<K: Copy> Track<K> {
    pub fn new(key: K, from: f32, to: f32, spec: AnimationSpec) -> Self {
        Self {
            key,
            timeline: Timeline::new(from, to, spec),
        }
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn timeline(&self) -> &Timeline<f32> {
        &self.timeline
    }
}

/// A group of tracks that run concurrently.
#[derive(Debug, Clone)]
pub struct Phase<K> {
    tracks: SmallVec<[Track<K>; 2]>,
}

impl<K: Copy> Phase<K> {
    pub fn new() -> Self {
        Self {
            tracks: SmallVec::new(),
        }
    }

    pub fn single(key: K, from: f32, to: f32, spec: AnimationSpec) -> Self {
        Self::new().with(key, from, to, spec)
    }

    pub fn with(mut self, key: K, from: f32, to: f32, spec: AnimationSpec) -> Self {
        self.tracks.push(Track::new(key, from, to, spec));
        self
    }

    pub fn tracks(&self) -> &[Track<K>] {
        &self.tracks
    }

    fn start_at(&mut self, frame_time_nanos: u64) {
        for track in &mut self.tracks {
            track.timeline.start_at(frame_time_nanos);
        }
    }

    fn end_time_nanos(&self) -> Option<u64> {
        self.tracks
            .iter()
            .filter_map(|track| track.timeline.end_time_nanos())
            .max()
    }
}

impl<K: Copy> Default for Phase<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// Built but no frame seen yet.
    Pending,
    Running,
    Finished,
    Cancelled,
}

/// Something that happened while advancing a sequence by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceEvent<K> {
    /// First frame of the sequence. Always reported before any value.
    Started,
    PhaseStarted(usize),
    Value { key: K, value: f32 },
    PhaseEnded(usize),
    /// Every phase and companion finished. Never reported after a cancel.
    Ended,
}

pub type SequenceEvents<K> = SmallVec<[SequenceEvent<K>; 8]>;

/// Ordered phases plus independent companion tracks.
#[derive(Debug, Clone)]
pub struct AnimationSequence<K> {
    label: &'static str,
    phases: Vec<Phase<K>>,
    companions: SmallVec<[Track<K>; 1]>,
    current: usize,
    state: SequenceState,
}

impl<K: Copy + Debug> AnimationSequence<K> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            phases: Vec::new(),
            companions: SmallVec::new(),
            current: 0,
            state: SequenceState::Pending,
        }
    }

    /// Append a phase that starts after every earlier phase ended.
    pub fn then(mut self, phase: Phase<K>) -> Self {
        self.phases.push(phase);
        self
    }

    /// Add a track that starts with the sequence and ignores phase order.
    pub fn alongside(mut self, key: K, from: f32, to: f32, spec: AnimationSpec) -> Self {
        self.companions.push(Track::new(key, from, to, spec));
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Index of the phase currently playing, if any.
    pub fn current_phase(&self) -> Option<usize> {
        match self.state {
            SequenceState::Running if self.current < self.phases.len() => Some(self.current),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SequenceState::Pending | SequenceState::Running)
    }

    /// Stop playback. Remaining phases are dropped and `Ended` is never reported.
    pub fn cancel(&mut self) {
        if self.is_active() {
            log::debug!(
                "{}: cancelled at phase {}/{}",
                self.label,
                self.current,
                self.phases.len()
            );
            self.state = SequenceState::Cancelled;
            self.phases.clear();
            self.companions.clear();
        }
    }

    /// Advance to `frame_time_nanos` and report what changed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> SequenceEvents<K> {
        let mut events = SequenceEvents::new();
        match self.state {
            SequenceState::Finished | SequenceState::Cancelled => return events,
            SequenceState::Pending => {
                log::debug!("{}: started with {} phases", self.label, self.phases.len());
                self.state = SequenceState::Running;
                events.push(SequenceEvent::Started);
                for companion in &mut self.companions {
                    companion.timeline.start_at(frame_time_nanos);
                }
                if let Some(first) = self.phases.first_mut() {
                    first.start_at(frame_time_nanos);
                    events.push(SequenceEvent::PhaseStarted(0));
                }
            }
            SequenceState::Running => {}
        }

        for companion in &mut self.companions {
            if companion.timeline.is_finished() {
                continue;
            }
            let sample = companion.timeline.on_frame(frame_time_nanos);
            events.push(SequenceEvent::Value {
                key: companion.key,
                value: sample.value,
            });
        }

        while self.current < self.phases.len() {
            let index = self.current;
            let phase = &mut self.phases[index];
            let mut all_finished = true;
            for track in &mut phase.tracks {
                let sample = track.timeline.on_frame(frame_time_nanos);
                events.push(SequenceEvent::Value {
                    key: track.key,
                    value: sample.value,
                });
                all_finished &= sample.finished;
            }
            if !all_finished {
                break;
            }

            let ended_at = phase.end_time_nanos().unwrap_or(frame_time_nanos);
            log::trace!("{}: phase {} ended at {}ns", self.label, index, ended_at);
            events.push(SequenceEvent::PhaseEnded(index));
            self.current += 1;
            if let Some(next) = self.phases.get_mut(self.current) {
                next.start_at(ended_at);
                events.push(SequenceEvent::PhaseStarted(self.current));
            }
        }

        let companions_done = self
            .companions
            .iter()
            .all(|companion| companion.timeline.is_finished());
        if self.current >= self.phases.len() && companions_done {
            log::debug!("{}: ended", self.label);
            self.state = SequenceState::Finished;
            events.push(SequenceEvent::Ended);
        }
        events
    }
}

#[cfg(test)]
#[path = "tests/sequence_tests.rs"]
mod tests;
