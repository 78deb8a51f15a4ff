//! Slider configuration.
//!
//! [`SlideToActConfig`] holds density-independent values as a host would
//! read them from its style system. [`SlideToActConfig::resolve`] validates
//! them and converts everything to device pixels.

use slidetoact_ui_graphics::{Color, Dp, Sp, Typeface};

use crate::error::SlideToActError;

/// Default fraction of the track the cursor must cover before release commits.
pub const DEFAULT_COMPLETION_THRESHOLD: f32 = 0.8;

/// Duration of the snap back after a non-committing release.
pub const SNAP_DURATION_MS: u64 = 300;

/// Duration budget of the complete and reset pipelines.
pub const PIPELINE_DURATION_MS: u64 = 300;

/// Open interval of cursor positions, in pixels, inside which the
/// "slide started" notification fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartWindow {
    pub low: i32,
    pub high: i32,
}

impl StartWindow {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Strict containment: the bounds themselves are outside the window.
    pub fn contains(&self, position: i32) -> bool {
        position > self.low && position < self.high
    }

    fn is_empty(&self) -> bool {
        self.high.saturating_sub(self.low) < 2
    }
}

impl Default for StartWindow {
    fn default() -> Self {
        Self::new(16, 80)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlideToActConfig {
    pub text: String,
    pub text_size: Sp,
    pub typeface: Typeface,
    pub outer_color: Color,
    pub inner_color: Color,
    /// Corner radius of the track. `None` rounds the track into a pill.
    pub border_radius: Option<Dp>,
    /// Inset of the cursor from the track edges.
    pub area_margin: Dp,
    /// Inset of the arrow and checkmark icons.
    pub icon_margin: Dp,
    pub locked: bool,
    pub completion_threshold: f32,
    pub start_window: StartWindow,
    pub snap_duration_ms: u64,
    pub pipeline_duration_ms: u64,
}

impl Default for SlideToActConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_size: Sp(16.0),
            typeface: Typeface::NORMAL,
            outer_color: Color::PINK_ACCENT,
            inner_color: Color::WHITE,
            border_radius: None,
            area_margin: Dp(4.0),
            icon_margin: Dp(16.0),
            locked: false,
            completion_threshold: DEFAULT_COMPLETION_THRESHOLD,
            start_window: StartWindow::default(),
            snap_duration_ms: SNAP_DURATION_MS,
            pipeline_duration_ms: PIPELINE_DURATION_MS,
        }
    }
}

impl SlideToActConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_text_size(mut self, text_size: Sp) -> Self {
        self.text_size = text_size;
        self
    }

    pub fn with_typeface(mut self, typeface: Typeface) -> Self {
        self.typeface = typeface;
        self
    }

    pub fn with_colors(mut self, outer: Color, inner: Color) -> Self {
        self.outer_color = outer;
        self.inner_color = inner;
        self
    }

    pub fn with_border_radius(mut self, radius: Dp) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_area_margin(mut self, margin: Dp) -> Self {
        self.area_margin = margin;
        self
    }

    pub fn with_icon_margin(mut self, margin: Dp) -> Self {
        self.icon_margin = margin;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn with_completion_threshold(mut self, threshold: f32) -> Self {
        self.completion_threshold = threshold;
        self
    }

    pub fn with_start_window(mut self, window: StartWindow) -> Self {
        self.start_window = window;
        self
    }

    pub fn with_durations(mut self, snap_ms: u64, pipeline_ms: u64) -> Self {
        self.snap_duration_ms = snap_ms;
        self.pipeline_duration_ms = pipeline_ms;
        self
    }

    /// Validate and convert to device pixels.
    pub fn resolve(
        &self,
        density: f32,
        font_scale: f32,
    ) -> Result<ResolvedConfig, SlideToActError> {
        if !(density.is_finite() && density > 0.0) {
            return Err(SlideToActError::InvalidDensity(density));
        }
        if !(font_scale.is_finite() && font_scale > 0.0) {
            return Err(SlideToActError::InvalidDensity(font_scale));
        }
        let threshold = self.completion_threshold;
        if !(threshold.is_finite() && threshold > 0.0 && threshold <= 1.0) {
            return Err(SlideToActError::InvalidThreshold(threshold));
        }
        if self.start_window.is_empty() {
            return Err(SlideToActError::EmptyStartWindow {
                low: self.start_window.low,
                high: self.start_window.high,
            });
        }

        let area_margin = dimension("area_margin", self.area_margin.to_px(density))?;
        let icon_margin = dimension("icon_margin", self.icon_margin.to_px(density))?;
        let text_size = dimension("text_size", self.text_size.to_px(density, font_scale))?;
        let border_radius = self
            .border_radius
            .map(|radius| dimension("border_radius", radius.to_px(density)))
            .transpose()?;

        Ok(ResolvedConfig {
            text: self.text.clone(),
            text_size,
            typeface: self.typeface,
            outer_color: self.outer_color,
            inner_color: self.inner_color,
            border_radius: border_radius.map(|radius| radius as i32),
            area_margin: area_margin as i32,
            icon_margin: icon_margin as i32,
            locked: self.locked,
            completion_threshold: threshold,
            start_window: self.start_window,
            snap_duration_ms: self.snap_duration_ms,
            pipeline_duration_ms: self.pipeline_duration_ms,
        })
    }
}

fn dimension(name: &'static str, value: f32) -> Result<f32, SlideToActError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SlideToActError::InvalidDimension { name, value })
    }
}

/// Configuration in whole device pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub text: String,
    pub text_size: f32,
    pub typeface: Typeface,
    pub outer_color: Color,
    pub inner_color: Color,
    pub border_radius: Option<i32>,
    pub area_margin: i32,
    pub icon_margin: i32,
    pub locked: bool,
    pub completion_threshold: f32,
    pub start_window: StartWindow,
    pub snap_duration_ms: u64,
    pub pipeline_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_at_unit_density() {
        let resolved = SlideToActConfig::default().resolve(1.0, 1.0).unwrap();
        assert_eq!(resolved.area_margin, 4);
        assert_eq!(resolved.icon_margin, 16);
        assert_eq!(resolved.text_size, 16.0);
        assert_eq!(resolved.border_radius, None);
        assert_eq!(resolved.completion_threshold, 0.8);
        assert_eq!(resolved.start_window, StartWindow::new(16, 80));
    }

    #[test]
    fn dimensions_scale_with_density() {
        let resolved = SlideToActConfig::new("Slide")
            .with_border_radius(Dp(10.0))
            .resolve(2.5, 1.2)
            .unwrap();
        assert_eq!(resolved.area_margin, 10);
        assert_eq!(resolved.icon_margin, 40);
        assert_eq!(resolved.border_radius, Some(25));
        assert!((resolved.text_size - 48.0).abs() < 1e-4);
        assert_eq!(resolved.text, "Slide");
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        for threshold in [0.0, -0.5, 1.5, f32::NAN] {
            let result = SlideToActConfig::default()
                .with_completion_threshold(threshold)
                .resolve(1.0, 1.0);
            assert!(
                matches!(result, Err(SlideToActError::InvalidThreshold(_))),
                "threshold {threshold} should be rejected"
            );
        }
        assert!(SlideToActConfig::default()
            .with_completion_threshold(1.0)
            .resolve(1.0, 1.0)
            .is_ok());
    }

    #[test]
    fn empty_start_window_is_rejected() {
        let result = SlideToActConfig::default()
            .with_start_window(StartWindow::new(10, 11))
            .resolve(1.0, 1.0);
        assert_eq!(
            result,
            Err(SlideToActError::EmptyStartWindow { low: 10, high: 11 })
        );
    }

    #[test]
    fn negative_margin_is_rejected() {
        let result = SlideToActConfig::default()
            .with_area_margin(Dp(-1.0))
            .resolve(1.0, 1.0);
        assert!(matches!(
            result,
            Err(SlideToActError::InvalidDimension {
                name: "area_margin",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_density_is_rejected() {
        assert_eq!(
            SlideToActConfig::default().resolve(0.0, 1.0),
            Err(SlideToActError::InvalidDensity(0.0))
        );
    }

    #[test]
    fn start_window_bounds_are_exclusive() {
        let window = StartWindow::default();
        assert!(!window.contains(16));
        assert!(window.contains(17));
        assert!(window.contains(79));
        assert!(!window.contains(80));
    }
}
