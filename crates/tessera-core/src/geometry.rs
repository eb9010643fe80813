//! Geometric primitives for board rendering.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in scene space
//! - [`Size`] - Width and height dimensions
//! - [`Rotation`] - A rotation about a pivot, as written to an SVG `transform`
//!
//! Numbers written into attributes go through [`SvgNumber`], which lays out
//! the shortest `f32` digits the way a browser stringifies a number.
//!
//! # Coordinate System
//!
//! Tessera uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Positions name the top-left corner of a shape.

use std::fmt;

/// A 2D point in scene coordinates.
///
/// # Examples
///
/// ```
/// # use tessera_core::geometry::Point;
/// let origin = Point::new(10.0, 20.0);
/// assert_eq!(origin.x(), 10.0);
/// assert_eq!(origin.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Width and height of a scene element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size with the specified width and height
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the point at the center of a box of this size anchored at `origin`.
    pub fn center_from(self, origin: Point) -> Point {
        Point::new(
            origin.x() + self.width / 2.0,
            origin.y() + self.height / 2.0,
        )
    }
}

/// A rotation by `degrees` around a pivot point.
///
/// The [`Display`](fmt::Display) form is the SVG transform function
/// `rotate(<degrees> <pivot x> <pivot y>)`.
///
/// # Examples
///
/// ```
/// # use tessera_core::geometry::{Point, Rotation};
/// let rotation = Rotation::new(45.0, Point::new(10.0, 10.0));
/// assert_eq!(rotation.to_string(), "rotate(45 10 10)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    degrees: f32,
    pivot: Point,
}

impl Rotation {
    pub fn new(degrees: f32, pivot: Point) -> Self {
        Self { degrees, pivot }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotate({} {} {})",
            SvgNumber(self.degrees),
            SvgNumber(self.pivot.x()),
            SvgNumber(self.pivot.y())
        )
    }
}

/// Attribute text for a number.
///
/// Finite values in `[1e-6, 1e21)` use the shortest `f32` digits (`45.0`
/// becomes `45`). Outside that range the exponent is written with an
/// explicit sign (`1e+21`, `1e-7`). Both zeros are `0`, and the non-finite
/// values are `NaN`, `Infinity` and `-Infinity`.
///
/// # Examples
///
/// ```
/// # use tessera_core::geometry::SvgNumber;
/// assert_eq!(SvgNumber(0.5).to_string(), "0.5");
/// assert_eq!(SvgNumber(1e21).to_string(), "1e+21");
/// assert_eq!(SvgNumber(f32::NEG_INFINITY).to_string(), "-Infinity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgNumber(pub f32);

impl fmt::Display for SvgNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if value == 0.0 {
            return f.write_str("0");
        }

        let magnitude = value.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{value}");
        }
        let exponential = format!("{value:e}");
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&exponential),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_center_from() {
        let center = Size::new(480.0, 240.0).center_from(Point::new(10.0, 20.0));
        assert_eq!(center, Point::new(250.0, 140.0));
    }

    #[test]
    fn test_rotation_display() {
        assert_eq!(
            Rotation::new(45.0, Point::new(10.0, 10.0)).to_string(),
            "rotate(45 10 10)"
        );
        assert_eq!(
            Rotation::new(-90.5, Point::new(0.25, 3.0)).to_string(),
            "rotate(-90.5 0.25 3)"
        );
    }

    #[test]
    fn test_rotation_default_is_identity() {
        assert_eq!(Rotation::default().to_string(), "rotate(0 0 0)");
    }

    #[test]
    fn test_rotation_negative_zero_pivot() {
        assert_eq!(
            Rotation::new(-0.0, Point::new(-0.0, 5.0)).to_string(),
            "rotate(0 0 5)"
        );
    }

    #[test]
    fn test_svg_number_plain_range() {
        assert_eq!(SvgNumber(45.0).to_string(), "45");
        assert_eq!(SvgNumber(-90.5).to_string(), "-90.5");
        assert_eq!(SvgNumber(0.000001).to_string(), "0.000001");
        assert_eq!(SvgNumber(1e20).to_string(), "100000000000000000000");
    }

    #[test]
    fn test_svg_number_zero_has_no_sign() {
        assert_eq!(SvgNumber(0.0).to_string(), "0");
        assert_eq!(SvgNumber(-0.0).to_string(), "0");
    }

    #[test]
    fn test_svg_number_non_finite() {
        assert_eq!(SvgNumber(f32::NAN).to_string(), "NaN");
        assert_eq!(SvgNumber(f32::INFINITY).to_string(), "Infinity");
        assert_eq!(SvgNumber(f32::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_svg_number_exponent_range() {
        assert_eq!(SvgNumber(1e21).to_string(), "1e+21");
        assert_eq!(SvgNumber(-2.5e30).to_string(), "-2.5e+30");
        assert_eq!(SvgNumber(1e-7).to_string(), "1e-7");
        assert_eq!(SvgNumber(-1.5e-10).to_string(), "-1.5e-10");
    }
}
