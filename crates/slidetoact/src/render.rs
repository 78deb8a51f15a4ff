//! Render surface boundary.
//!
//! The core never paints. It describes one frame as a [`SliderFrame`] and
//! hands it to a host [`Renderer`]. Icons are supplied by an
//! [`IconProvider`], and the [`HostShell`] receives repaint and
//! pointer-interception requests.

use slidetoact_ui_graphics::{Color, Point, Rect, Typeface};

use crate::config::ResolvedConfig;
use crate::position::PositionModel;

/// Right-icon inset as a multiple of the arrow margin.
const RIGHT_ICON_INSET: f32 = 1.75;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Arrow drawn inside the cursor.
    Arrow,
    /// Icon at the far end of the track.
    RightIcon,
    /// Checkmark shown once the slide completed.
    Tick,
}

/// Paints a [`SliderFrame`].
pub trait Renderer {
    fn draw(&mut self, frame: &SliderFrame);
}

/// Source of the three slider icons.
///
/// `start_animation` and `stop_animation` drive the checkmark when it can
/// animate itself; both are fire-and-forget and must be idempotent.
pub trait IconProvider {
    fn supports_animation(&self) -> bool {
        false
    }

    fn start_animation(&mut self) {}

    fn stop_animation(&mut self) {}

    fn set_tint(&mut self, icon: Icon, color: Color);
}

/// Capabilities the slider needs from whatever hosts it.
pub trait HostShell {
    fn invalidate(&mut self);

    /// The track outline changed; hosts drawing shadows should refresh it.
    fn invalidate_outline(&mut self) {}

    /// Ask ancestors to stop intercepting pointer events while dragging.
    fn request_disallow_intercept(&mut self, _disallow: bool) {}
}

/// Host that ignores every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl HostShell for NoopHost {
    fn invalidate(&mut self) {}
}

/// Icons without an animated checkmark. Tints are remembered for inspection.
#[derive(Clone, Debug, Default)]
pub struct StaticIcons {
    tints: [Option<Color>; 3],
}

impl StaticIcons {
    pub fn tint(&self, icon: Icon) -> Option<Color> {
        self.tints[icon as usize]
    }
}

impl IconProvider for StaticIcons {
    fn set_tint(&mut self, icon: Icon, color: Color) {
        self.tints[icon as usize] = Some(color);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IconFrame {
    pub bounds: Rect,
    pub visible: bool,
    /// Paint alpha, `0..=255`.
    pub alpha: u8,
    pub tint: Color,
    /// Clockwise rotation in degrees around the bounds center.
    pub rotation: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextFrame {
    pub text: String,
    /// Horizontal and vertical center of the label. Baseline placement is
    /// left to the renderer's font metrics.
    pub anchor: Point,
    pub alpha: u8,
    pub size: f32,
    pub typeface: Typeface,
    pub color: Color,
}

/// Everything a renderer needs to paint one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderFrame {
    /// Outer track, shrunk symmetrically while completing.
    pub track: Rect,
    pub border_radius: f32,
    /// Same rect as `track`; hosts use it for shadows and clipping.
    pub outline: Rect,
    pub cursor: Rect,
    pub cursor_radius: f32,
    pub outer_color: Color,
    pub inner_color: Color,
    pub text: TextFrame,
    pub arrow: IconFrame,
    pub right_icon: IconFrame,
    pub tick: IconFrame,
}

/// Animated drawing state, in whole pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub area_margin: i32,
    pub origin_area_margin: i32,
    pub actual_area_width: i32,
    pub arrow_margin: i32,
    pub tick_margin: i32,
    pub draw_tick: bool,
    pub tick_alpha: u8,
    pub right_icon_alpha: u8,
    pub border_radius: i32,
}

impl Surface {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            area_margin: config.area_margin,
            origin_area_margin: config.area_margin,
            actual_area_width: 0,
            arrow_margin: config.icon_margin,
            tick_margin: config.icon_margin,
            draw_tick: false,
            tick_alpha: 0,
            right_icon_alpha: 255,
            border_radius: config.border_radius.unwrap_or(0),
        }
    }

    /// Recompute the track-dependent defaults after a layout.
    pub fn on_layout(&mut self, config: &ResolvedConfig, height: i32) {
        self.border_radius = config.border_radius.unwrap_or(height / 2);
    }

    pub fn outline(&self, model: &PositionModel) -> Rect {
        Rect::from_ltrb(
            self.actual_area_width as f32,
            0.0,
            (model.width() - self.actual_area_width) as f32,
            model.height() as f32,
        )
    }

    pub fn compose(&self, model: &PositionModel, config: &ResolvedConfig) -> SliderFrame {
        let width = model.width();
        let height = model.height();
        let position = model.position();
        let margin = self.area_margin;

        let track = self.outline(model);
        let border_radius = self.border_radius as f32;

        let cursor = Rect::from_ltrb(
            (margin + position) as f32,
            margin as f32,
            (height + position - margin) as f32,
            (height - margin) as f32,
        );
        // Keep the cursor corners concentric with the track.
        let ratio = if height == 0 {
            0.0
        } else {
            ((height - 2 * margin) as f32 / height as f32).max(0.0)
        };

        let arrow_bounds = Rect::from_ltrb(
            (cursor.left() as i32 + self.arrow_margin) as f32,
            (cursor.top() as i32 + self.arrow_margin) as f32,
            (cursor.right() as i32 - self.arrow_margin) as f32,
            (cursor.bottom() as i32 - self.arrow_margin) as f32,
        );
        let arrow = IconFrame {
            bounds: arrow_bounds,
            visible: arrow_bounds.is_well_formed(),
            alpha: 255,
            tint: config.outer_color,
            rotation: -180.0 * model.percent(),
        };

        let inset = self.arrow_margin as f32 * RIGHT_ICON_INSET;
        let track_right = track.right() as i32;
        let track_top = track.top() as i32;
        let track_bottom = track.bottom() as i32;
        let right_icon = IconFrame {
            bounds: Rect::from_ltrb(
                ((track_right - height) as f32 + inset) as i32 as f32,
                (track_top as f32 + inset) as i32 as f32,
                (track_right as f32 - inset) as i32 as f32,
                (track_bottom as f32 - inset) as i32 as f32,
            ),
            visible: true,
            alpha: self.right_icon_alpha,
            tint: config.inner_color,
            rotation: 0.0,
        };

        let tick = IconFrame {
            bounds: Rect::from_ltrb(
                (self.actual_area_width + self.tick_margin) as f32,
                self.tick_margin as f32,
                (width - self.tick_margin - self.actual_area_width) as f32,
                (height - self.tick_margin) as f32,
            ),
            visible: self.draw_tick,
            alpha: self.tick_alpha,
            tint: config.inner_color,
            rotation: 0.0,
        };

        let text = TextFrame {
            text: config.text.clone(),
            anchor: Point::new(width as f32 / 2.0, height as f32 / 2.0),
            alpha: (255.0 * model.percent_inverse()) as u8,
            size: config.text_size,
            typeface: config.typeface,
            color: config.inner_color,
        };

        SliderFrame {
            track,
            border_radius,
            outline: track,
            cursor,
            cursor_radius: border_radius * ratio,
            outer_color: config.outer_color,
            inner_color: config.inner_color,
            text,
            arrow,
            right_icon,
            tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlideToActConfig;

    fn setup(position: i32) -> (Surface, PositionModel, ResolvedConfig) {
        let config = SlideToActConfig::new("Slide to unlock")
            .resolve(1.0, 1.0)
            .unwrap();
        let mut surface = Surface::new(&config);
        surface.on_layout(&config, 72);
        let mut model = PositionModel::new(272, 72);
        model.set_position(position);
        (surface, model, config)
    }

    #[test]
    fn idle_frame_matches_layout() {
        let (surface, model, config) = setup(0);
        let frame = surface.compose(&model, &config);
        assert_eq!(frame.track, Rect::from_ltrb(0.0, 0.0, 272.0, 72.0));
        assert_eq!(frame.border_radius, 36.0);
        assert_eq!(frame.cursor, Rect::from_ltrb(4.0, 4.0, 68.0, 68.0));
        assert!((frame.cursor_radius - 32.0).abs() < 1e-4);
        assert_eq!(frame.arrow.bounds, Rect::from_ltrb(20.0, 20.0, 52.0, 52.0));
        assert!(frame.arrow.visible);
        assert_eq!(frame.arrow.rotation, 0.0);
        assert_eq!(frame.text.alpha, 255);
        assert_eq!(frame.text.anchor, Point::new(136.0, 36.0));
        assert_eq!(
            frame.right_icon.bounds,
            Rect::from_ltrb(228.0, 28.0, 244.0, 44.0)
        );
        assert!(!frame.tick.visible);
    }

    #[test]
    fn cursor_follows_position() {
        let (surface, model, config) = setup(100);
        let frame = surface.compose(&model, &config);
        assert_eq!(frame.cursor.left(), 104.0);
        assert_eq!(frame.arrow.rotation, -90.0);
        assert_eq!(frame.text.alpha, 127);
    }

    #[test]
    fn collapsed_cursor_hides_the_arrow() {
        let (mut surface, model, config) = setup(200);
        surface.area_margin = 36;
        let frame = surface.compose(&model, &config);
        assert!(frame.cursor.width <= 0.0);
        assert!(!frame.arrow.visible);
        assert_eq!(frame.cursor_radius, 0.0);
    }

    #[test]
    fn overshooting_margin_never_yields_a_negative_radius() {
        let (mut surface, model, config) = setup(200);
        surface.area_margin = 41;
        let frame = surface.compose(&model, &config);
        assert!(!frame.cursor.is_well_formed());
        assert_eq!(frame.cursor_radius, 0.0);
    }

    #[test]
    fn shrinking_track_moves_outline_and_tick() {
        let (mut surface, model, config) = setup(200);
        surface.actual_area_width = 100;
        surface.draw_tick = true;
        surface.tick_alpha = 200;
        let frame = surface.compose(&model, &config);
        assert_eq!(frame.track, Rect::from_ltrb(100.0, 0.0, 172.0, 72.0));
        assert_eq!(frame.outline, frame.track);
        assert_eq!(frame.tick.bounds, Rect::from_ltrb(116.0, 16.0, 156.0, 56.0));
        assert!(frame.tick.visible);
        assert_eq!(frame.tick.alpha, 200);
    }

    #[test]
    fn configured_radius_survives_layout() {
        let config = SlideToActConfig::default()
            .with_border_radius(slidetoact_ui_graphics::Dp(8.0))
            .resolve(1.0, 1.0)
            .unwrap();
        let mut surface = Surface::new(&config);
        surface.on_layout(&config, 72);
        assert_eq!(surface.border_radius, 8);
    }

    #[test]
    fn icons_are_tinted_with_the_slider_colors() {
        let (surface, model, config) = setup(0);
        let frame = surface.compose(&model, &config);
        assert_eq!(frame.arrow.tint, config.outer_color);
        assert_eq!(frame.right_icon.tint, config.inner_color);
        assert_eq!(frame.tick.tint, config.inner_color);
        assert_eq!(frame.text.color, config.inner_color);
    }
}
