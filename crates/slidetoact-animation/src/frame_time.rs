//! Frame timestamps for hosts driving sequences from a wall clock.

use web_time::{Duration, Instant};

/// Nominal frame interval at 60 FPS, in nanoseconds.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Converts wall-clock instants into monotonically increasing frame
/// nanoseconds measured from the ticker's creation.
#[derive(Debug, Clone, Copy)]
pub struct FrameTicker {
    origin: Instant,
    last_nanos: u64,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(origin: Instant) -> Self {
        Self {
            origin,
            last_nanos: 0,
        }
    }

    /// Frame time for `now`. Never goes backwards, even if `now` does.
    pub fn frame_nanos_at(&mut self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.origin);
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.last_nanos = self.last_nanos.max(nanos);
        self.last_nanos
    }

    pub fn frame_nanos(&mut self) -> u64 {
        self.frame_nanos_at(Instant::now())
    }

    /// When the next 60 FPS frame is due, for `WaitUntil`-style scheduling.
    pub fn next_frame_deadline(&self) -> Instant {
        self.origin + Duration::from_nanos(self.last_nanos + FRAME_INTERVAL_NANOS)
    }
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_nanos_measure_from_origin() {
        let origin = Instant::now();
        let mut ticker = FrameTicker::starting_at(origin);
        assert_eq!(ticker.frame_nanos_at(origin), 0);
        assert_eq!(
            ticker.frame_nanos_at(origin + Duration::from_millis(16)),
            16_000_000
        );
    }

    #[test]
    fn frame_nanos_never_go_backwards() {
        let origin = Instant::now();
        let mut ticker = FrameTicker::starting_at(origin);
        let later = ticker.frame_nanos_at(origin + Duration::from_millis(50));
        let earlier = ticker.frame_nanos_at(origin + Duration::from_millis(10));
        assert_eq!(earlier, later);
    }

    #[test]
    fn deadline_is_one_frame_after_last_sample() {
        let origin = Instant::now();
        let mut ticker = FrameTicker::starting_at(origin);
        ticker.frame_nanos_at(origin + Duration::from_millis(100));
        assert_eq!(
            ticker.next_frame_deadline(),
            origin + Duration::from_nanos(100_000_000 + FRAME_INTERVAL_NANOS)
        );
    }
}
