//! Geometric primitives: Point, Rect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Builds a rect from its four edges. Inverted edges produce a negative
    /// width or height, which [`Rect::is_well_formed`] reports.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when neither edge pair is inverted.
    pub fn is_well_formed(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// Containment test where points on the edges are outside.
    pub fn contains_strict(&self, x: f32, y: f32) -> bool {
        x > self.x && y > self.y && x < self.right() && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltrb_edges_round_trip() {
        let rect = Rect::from_ltrb(10.0, 4.0, 50.0, 24.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 4.0);
        assert_eq!(rect.right(), 50.0);
        assert_eq!(rect.bottom(), 24.0);
        assert_eq!(rect.width, 40.0);
    }

    #[test]
    fn inverted_edges_are_not_well_formed() {
        assert!(Rect::from_ltrb(4.0, 4.0, 16.0, 16.0).is_well_formed());
        assert!(!Rect::from_ltrb(12.0, 4.0, 8.0, 16.0).is_well_formed());
    }

    #[test]
    fn strict_containment_excludes_edges() {
        let rect = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.contains_strict(0.0, 5.0));
        assert!(!rect.contains_strict(5.0, 10.0));
        assert!(rect.contains_strict(0.5, 9.5));
    }
}
