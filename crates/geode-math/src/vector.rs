use glam::Vec3;

/// 3-component `f32` vector used for both positions and RGB colors.
///
/// This is `glam::Vec3`. `+`, `-`, `dot`, `cross`, `length` and friends come
/// straight from glam. `normalize` of the zero vector is a caller bug: debug
/// builds trip glam's finiteness assertion, release builds yield NaN. Use
/// `try_normalize` when the input may be degenerate.
pub type Vector3 = Vec3;

/// Vector operations under the names the mesher uses, forwarding to glam.
pub trait Vector3Ext {
    /// Multiply every component by `s`.
    fn scale(self, s: f32) -> Self;

    /// Returns x² + y² + z².
    fn squared_length(self) -> f32;
}

impl Vector3Ext for Vec3 {
    #[inline]
    fn scale(self, s: f32) -> Self {
        self * s
    }

    #[inline]
    fn squared_length(self) -> f32 {
        self.length_squared()
    }
}
