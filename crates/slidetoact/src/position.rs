//! Cursor position along the track.

/// Cursor offset clamped to `[0, width - height]` with derived percentages.
///
/// Every write goes through the clamp and recomputes the percentages in the
/// same call, so readers never observe an out-of-range position.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionModel {
    width: i32,
    height: i32,
    position: i32,
    percent: f32,
    percent_inverse: f32,
}

impl PositionModel {
    pub fn new(width: i32, height: i32) -> Self {
        let mut model = Self {
            width,
            height,
            position: 0,
            percent: 0.0,
            percent_inverse: 1.0,
        };
        model.set_position(0);
        model
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    /// Largest reachable position, `width - height`.
    pub fn max_position(&self) -> i32 {
        (self.width - self.height).max(0)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.max_position()
    }

    /// Position as a fraction of the travel, in `[0, 1]`.
    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// `1 - percent`.
    pub fn percent_inverse(&self) -> f32 {
        self.percent_inverse
    }

    /// Update the track size and re-clamp the current position.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.set_position(self.position);
    }

    pub fn set_position(&mut self, value: i32) {
        let max = self.max_position();
        self.position = value.clamp(0, max);
        if max == 0 {
            self.percent = 0.0;
            self.percent_inverse = 1.0;
        } else {
            self.percent = self.position as f32 / max as f32;
            self.percent_inverse = 1.0 - self.percent;
        }
    }

    pub fn increase_position(&mut self, inc: i32) {
        self.set_position(self.position.saturating_add(inc));
    }
}

impl Default for PositionModel {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
