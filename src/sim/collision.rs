//! Collision detection between the paddle and falling objects
//!
//! Everything in the play area is an axis-aligned box, so a catch is a plain
//! rectangle overlap test. Touching edges do not count.

use glam::Vec2;

/// Axis-aligned bounding box in play-area coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build a box from its top-left corner and size
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap: boxes sharing only an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Clamp a left-edge coordinate so a span of `width` stays inside `[0, area_width]`
#[inline]
pub fn clamp_span(x: f32, width: f32, area_width: f32) -> f32 {
    let max = (area_width - width).max(0.0);
    if x.is_nan() { 0.0 } else { x.clamp(0.0, max) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_inside() {
        let paddle = Aabb::from_origin_size(100.0, 360.0, 80.0, 20.0);
        let object = Aabb::from_origin_size(120.0, 340.0, 30.0, 30.0);
        assert!(paddle.overlaps(&object));
        assert!(object.overlaps(&paddle));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let paddle = Aabb::from_origin_size(100.0, 360.0, 80.0, 20.0);

        // Object resting exactly on top of the paddle
        let above = Aabb::from_origin_size(120.0, 330.0, 30.0, 30.0);
        assert!(!paddle.overlaps(&above));

        // Object flush against the paddle's right edge
        let beside = Aabb::from_origin_size(180.0, 365.0, 30.0, 30.0);
        assert!(!paddle.overlaps(&beside));
    }

    #[test]
    fn test_miss_horizontal() {
        let paddle = Aabb::from_origin_size(330.0, 360.0, 80.0, 20.0);
        let object = Aabb::from_origin_size(0.0, 365.0, 30.0, 30.0);
        assert!(!paddle.overlaps(&object));
    }

    #[test]
    fn test_size_accessors() {
        let b = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(40.0, 25.0));
        assert_eq!(b.width(), 30.0);
        assert_eq!(b.height(), 5.0);
    }

    #[test]
    fn test_clamp_span() {
        assert_eq!(clamp_span(-50.0, 80.0, 740.0), 0.0);
        assert_eq!(clamp_span(1000.0, 80.0, 740.0), 660.0);
        assert_eq!(clamp_span(200.0, 80.0, 740.0), 200.0);
        assert_eq!(clamp_span(f32::NAN, 80.0, 740.0), 0.0);
    }
}
