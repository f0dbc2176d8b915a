//! Math utilities and types
//!
//! Integer screen geometry shared with the UI library, plus the 2D affine
//! transform and color scale handed to host surfaces.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix3, Point2, Vector2};

/// Integer 2D vector in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2i {
    /// Horizontal component
    pub x: i32,
    /// Vertical component
    pub y: i32,
}

impl Vec2i {
    /// Zero vector
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new vector
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2i {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Axis-aligned rectangle in screen pixels (top-left origin, Y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle anchored at the origin with the given size
    pub const fn from_size(w: i32, h: i32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True when the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Top-left corner
    pub const fn origin(&self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }

    /// Overlap of two rectangles, `None` when they do not overlap
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        let overlap = Self::new(x, y, right - x, bottom - y);
        if overlap.is_empty() {
            None
        } else {
            Some(overlap)
        }
    }

    /// True when `other` lies entirely inside this rectangle
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when the pixel at (`x`, `y`) is inside the rectangle
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }
}

/// 8-bit RGBA color as emitted by the UI library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// 2D affine transform (scale and translation) applied to a source image
///
/// Operations compose in call order: `identity().scale(..).translate(..)`
/// scales the source first, then moves it into place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: Matrix3<f32>,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transform
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Append a non-uniform scale
    #[must_use]
    pub fn scale(mut self, sx: f32, sy: f32) -> Self {
        self.matrix = Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)) * self.matrix;
        self
    }

    /// Append a translation
    #[must_use]
    pub fn translate(mut self, tx: f32, ty: f32) -> Self {
        self.matrix = Matrix3::new_translation(&Vector2::new(tx, ty)) * self.matrix;
        self
    }

    /// Map a source-space point into target space
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let p = self.matrix.transform_point(&Point2::new(x, y));
        (p.x, p.y)
    }

    /// Scale factors along X and Y
    pub fn scale_factors(&self) -> (f32, f32) {
        (self.matrix[(0, 0)], self.matrix[(1, 1)])
    }

    /// Translation component
    pub fn translation(&self) -> (f32, f32) {
        (self.matrix[(0, 2)], self.matrix[(1, 2)])
    }
}

/// Multiplicative per-channel color scale
///
/// Each source texel channel is multiplied by the matching factor, so a white
/// texel takes on the tint color and source alpha is preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    /// Red factor
    pub r: f32,
    /// Green factor
    pub g: f32,
    /// Blue factor
    pub b: f32,
    /// Alpha factor
    pub a: f32,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ColorScale {
    /// Leaves texels unchanged
    pub const IDENTITY: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Scale that tints by `color`
    pub fn from_color(color: Color) -> Self {
        Self {
            r: f32::from(color.r) / 255.0,
            g: f32::from(color.g) / 255.0,
            b: f32::from(color.b) / 255.0,
            a: f32::from(color.a) / 255.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_intersect_overlapping() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 60, 100, 100);
        assert_eq!(a.intersect(&b), Some(Rect::new(50, 60, 50, 40)));
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0, 0, 64, 32);
        assert!(outer.contains_rect(&Rect::new(48, 0, 16, 16)));
        assert!(!outer.contains_rect(&Rect::new(56, 0, 16, 16)));
    }

    #[test]
    fn test_scale_then_translate() {
        let transform = Transform2D::identity().scale(10.0, 4.0).translate(5.0, 7.0);
        let (x, y) = transform.apply(1.0, 1.0);
        assert_relative_eq!(x, 15.0);
        assert_relative_eq!(y, 11.0);
        assert_eq!(transform.scale_factors(), (10.0, 4.0));
        assert_eq!(transform.translation(), (5.0, 7.0));
    }

    #[test]
    fn test_translate_does_not_scale_offset() {
        let transform = Transform2D::identity().translate(3.0, 3.0).scale(2.0, 2.0);
        assert_eq!(transform.translation(), (6.0, 6.0));
    }
}
