//! Vertex kinds carried through subdivision.

use geode_math::{Vector3, Vector3Ext};

/// A vertex the subdivision passes know how to split an edge of.
///
/// Positions drive edge selection; any other attributes only travel along
/// through [`Vertex::midpoint`].
pub trait Vertex: Copy {
    /// Position in model space.
    fn position(&self) -> Vector3;

    /// Per-vertex RGB color, if this kind carries one.
    fn color(&self) -> Option<Vector3> {
        None
    }

    /// Derive the vertex placed at the middle of edge `a`–`b`.
    ///
    /// Both built-in kinds project the result back onto the unit sphere.
    fn midpoint(a: &Self, b: &Self) -> Self;
}

/// Position-only vertex.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PlainVertex {
    pub position: Vector3,
}

impl PlainVertex {
    pub const fn new(position: Vector3) -> Self {
        Self { position }
    }
}

impl Vertex for PlainVertex {
    #[inline]
    fn position(&self) -> Vector3 {
        self.position
    }

    #[inline]
    fn midpoint(a: &Self, b: &Self) -> Self {
        Self {
            position: (a.position + b.position).normalize(),
        }
    }
}

/// Vertex with an RGB color attribute.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ColoredVertex {
    /// Linear RGB, each channel in `[0, 1]`.
    pub color: Vector3,
    pub position: Vector3,
}

impl ColoredVertex {
    pub const fn new(color: Vector3, position: Vector3) -> Self {
        Self { color, position }
    }
}

impl Vertex for ColoredVertex {
    #[inline]
    fn position(&self) -> Vector3 {
        self.position
    }

    #[inline]
    fn color(&self) -> Option<Vector3> {
        Some(self.color)
    }

    #[inline]
    fn midpoint(a: &Self, b: &Self) -> Self {
        Self {
            color: (a.color + b.color).scale(0.5),
            position: (a.position + b.position).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_midpoint_lies_on_unit_sphere() {
        let a = PlainVertex::new(Vector3::X);
        let b = PlainVertex::new(Vector3::Y);
        let m = PlainVertex::midpoint(&a, &b);
        let expected = Vector3::new(1.0, 1.0, 0.0).normalize();
        assert!(m.position.abs_diff_eq(expected, 1e-6));
        assert!((m.position.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_plain_vertex_has_no_color() {
        assert_eq!(PlainVertex::new(Vector3::Z).color(), None);
    }

    #[test]
    fn test_colored_midpoint_averages_color() {
        let a = ColoredVertex::new(Vector3::new(1.0, 0.0, 0.0), Vector3::X);
        let b = ColoredVertex::new(Vector3::new(0.0, 0.0, 1.0), Vector3::Z);
        let m = ColoredVertex::midpoint(&a, &b);
        assert_eq!(m.color, Vector3::new(0.5, 0.0, 0.5));
        assert!((m.position.length() - 1.0).abs() < 1e-6);
        assert_eq!(m.color(), Some(m.color));
    }

    #[test]
    fn test_midpoint_is_symmetric() {
        let a = ColoredVertex::new(Vector3::new(0.2, 0.4, 0.6), Vector3::new(0.0, 0.6, 0.8));
        let b = ColoredVertex::new(Vector3::new(0.8, 0.0, 0.2), Vector3::new(0.6, 0.0, 0.8));
        assert_eq!(ColoredVertex::midpoint(&a, &b), ColoredVertex::midpoint(&b, &a));
    }
}
