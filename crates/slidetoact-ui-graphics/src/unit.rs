//! Unit types: Dp, Sp, and conversions to device pixels

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}

/// Scale-independent pixels (for text)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

impl Sp {
    pub fn to_px(&self, density: f32, font_scale: f32) -> f32 {
        self.0 * density * font_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_scales_with_density() {
        assert_eq!(Dp(4.0).to_px(2.5), 10.0);
        assert_eq!(Dp(72.0).to_px(1.0), 72.0);
    }

    #[test]
    fn sp_scales_with_font_scale() {
        assert_eq!(Sp(16.0).to_px(2.0, 1.5), 48.0);
        assert_eq!(Sp(16.0).to_px(1.0, 1.0), 16.0);
    }
}
