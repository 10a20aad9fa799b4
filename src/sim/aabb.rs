//! Axis-aligned rectangle geometry for tiles and bodies
//!
//! Screen space: x grows right, y grows down. A box covers
//! `[left, right) × [top, bottom)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Box from its top-left corner and size
    pub fn from_origin(origin: Vec2, size: Vec2) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.x,
            bottom: origin.y + size.y,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Strict intersection: touching edges do not count
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Mirror vertically inside a band of the given height
    pub fn mirrored_y(&self, height: f32) -> Self {
        Self {
            left: self.left,
            top: height - self.bottom,
            right: self.right,
            bottom: height - self.top,
        }
    }
}

/// Vertical overlap of two boxes (0 when disjoint on Y)
#[inline]
pub fn overlap_y(a: &Aabb, b: &Aabb) -> f32 {
    (a.bottom.min(b.bottom) - a.top.max(b.top)).max(0.0)
}

/// Horizontal overlap of two boxes (0 when disjoint on X)
#[inline]
pub fn overlap_x(a: &Aabb, b: &Aabb) -> f32 {
    (a.right.min(b.right) - a.left.max(b.left)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, s: f32) -> Aabb {
        Aabb::from_origin(Vec2::new(x, y), Vec2::splat(s))
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = square(0.0, 0.0, 32.0);
        let b = square(32.0, 0.0, 32.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));

        let c = square(0.0, 32.0, 32.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_overlap_amounts() {
        let a = square(0.0, 0.0, 32.0);
        let b = square(20.0, 10.0, 32.0);
        assert!(a.intersects(&b));
        assert_eq!(overlap_x(&a, &b), 12.0);
        assert_eq!(overlap_y(&a, &b), 22.0);
        // Symmetric
        assert_eq!(overlap_x(&b, &a), 12.0);
        assert_eq!(overlap_y(&b, &a), 22.0);
    }

    #[test]
    fn test_overlap_clamps_to_zero() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(50.0, 50.0, 10.0);
        assert_eq!(overlap_x(&a, &b), 0.0);
        assert_eq!(overlap_y(&a, &b), 0.0);
    }

    #[test]
    fn test_mirror_round_trip() {
        let a = Aabb::from_origin(Vec2::new(4.0, 100.0), Vec2::new(20.0, 32.0));
        let m = a.mirrored_y(480.0);
        assert_eq!(m.top, 348.0);
        assert_eq!(m.bottom, 380.0);
        assert_eq!(m.height(), a.height());
        assert_eq!(m.mirrored_y(480.0), a);
    }
}
