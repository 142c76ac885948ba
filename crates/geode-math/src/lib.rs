//! Single-precision 3D vector math for the Geode sphere mesher.

mod vector;

pub use vector::{Vector3, Vector3Ext};
