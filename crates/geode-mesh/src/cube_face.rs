//! The six faces of the seamed cube, their basis vectors, and their colors.

use geode_math::Vector3;

/// The six faces of the seed cube.
///
/// Each variant corresponds to a face whose outward normal points
/// along the named axis direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

// Face palette. Never mutated; every face gets a distinct hue so seams stay visible.
const RED: Vector3 = Vector3::new(1.0, 0.0, 0.0);
const CYAN: Vector3 = Vector3::new(0.0, 1.0, 1.0);
const GREEN: Vector3 = Vector3::new(0.0, 1.0, 0.0);
const MAGENTA: Vector3 = Vector3::new(1.0, 0.0, 1.0);
const BLUE: Vector3 = Vector3::new(0.0, 0.0, 1.0);
const YELLOW: Vector3 = Vector3::new(1.0, 1.0, 0.0);

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub const fn normal(self) -> Vector3 {
        match self {
            CubeFace::PosX => Vector3::new(1.0, 0.0, 0.0),
            CubeFace::NegX => Vector3::new(-1.0, 0.0, 0.0),
            CubeFace::PosY => Vector3::new(0.0, 1.0, 0.0),
            CubeFace::NegY => Vector3::new(0.0, -1.0, 0.0),
            CubeFace::PosZ => Vector3::new(0.0, 0.0, 1.0),
            CubeFace::NegZ => Vector3::new(0.0, 0.0, -1.0),
        }
    }

    /// Tangent vector: first in-plane axis of this face.
    #[must_use]
    pub const fn tangent(self) -> Vector3 {
        match self {
            CubeFace::PosX => Vector3::new(0.0, 0.0, -1.0),
            CubeFace::NegX => Vector3::new(0.0, 0.0, 1.0),
            CubeFace::PosY => Vector3::new(1.0, 0.0, 0.0),
            CubeFace::NegY => Vector3::new(1.0, 0.0, 0.0),
            CubeFace::PosZ => Vector3::new(1.0, 0.0, 0.0),
            CubeFace::NegZ => Vector3::new(-1.0, 0.0, 0.0),
        }
    }

    /// Bitangent vector, chosen so `tangent × bitangent = normal`.
    #[must_use]
    pub const fn bitangent(self) -> Vector3 {
        match self {
            CubeFace::PosX => Vector3::new(0.0, 1.0, 0.0),
            CubeFace::NegX => Vector3::new(0.0, 1.0, 0.0),
            CubeFace::PosY => Vector3::new(0.0, 0.0, -1.0),
            CubeFace::NegY => Vector3::new(0.0, 0.0, 1.0),
            CubeFace::PosZ => Vector3::new(0.0, 1.0, 0.0),
            CubeFace::NegZ => Vector3::new(0.0, 1.0, 0.0),
        }
    }

    /// Palette color painted on every vertex of this face.
    #[must_use]
    pub const fn color(self) -> Vector3 {
        match self {
            CubeFace::PosX => RED,
            CubeFace::NegX => CYAN,
            CubeFace::PosY => GREEN,
            CubeFace::NegY => MAGENTA,
            CubeFace::PosZ => BLUE,
            CubeFace::NegZ => YELLOW,
        }
    }

    /// The four cube corners of this face (unprojected, on the `[-1, 1]` cube),
    /// counter-clockwise seen from outside.
    #[must_use]
    pub fn corners(self) -> [Vector3; 4] {
        let n = self.normal();
        let t = self.tangent();
        let b = self.bitangent();
        [n - t - b, n + t - b, n + t + b, n - t + b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tangent_cross_bitangent_equals_normal() {
        for face in CubeFace::ALL {
            let cross = face.tangent().cross(face.bitangent());
            assert_eq!(
                cross,
                face.normal(),
                "tangent x bitangent != normal for {face:?}"
            );
        }
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for (i, a) in CubeFace::ALL.iter().enumerate() {
            for b in &CubeFace::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a:?} and {b:?} share a color");
            }
        }
    }

    #[test]
    fn test_corners_lie_on_face_plane() {
        for face in CubeFace::ALL {
            for corner in face.corners() {
                assert_eq!(corner.dot(face.normal()), 1.0, "{face:?} corner {corner}");
                assert_eq!(corner.length_squared(), 3.0);
            }
        }
    }

    #[test]
    fn test_corners_wind_counter_clockwise_from_outside() {
        for face in CubeFace::ALL {
            let [c0, c1, c2, _] = face.corners();
            let n = (c1 - c0).cross(c2 - c0);
            assert!(n.dot(face.normal()) > 0.0, "{face:?} corners wind inward");
        }
    }

    #[test]
    fn test_each_corner_shared_by_three_faces() {
        let all: Vec<Vector3> = CubeFace::ALL.iter().flat_map(|f| f.corners()).collect();
        assert_eq!(all.len(), 24);
        for corner in &all {
            let shared = all.iter().filter(|c| *c == corner).count();
            assert_eq!(shared, 3, "corner {corner} appears {shared} times");
        }
    }
}
