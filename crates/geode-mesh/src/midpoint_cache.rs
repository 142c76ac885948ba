//! Per-pass edge → midpoint lookup that keeps shared edges from splitting twice.

use rustc_hash::FxHashMap;

/// An undirected edge between two vertex indices.
///
/// Stored with the smaller index first, so `(i, j)` and `(j, i)` compare and
/// hash identically. Identity is purely by index: two coincident vertices with
/// different indices form distinct edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(u32, u32);

impl EdgeKey {
    /// Canonical key for the edge between `a` and `b`.
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    /// The smaller endpoint.
    pub fn low(self) -> u32 {
        self.0
    }

    /// The larger endpoint.
    pub fn high(self) -> u32 {
        self.1
    }
}

/// Maps each edge split during one subdivision pass to its midpoint vertex.
///
/// Build a fresh cache per pass; indices from an earlier pass mean nothing
/// once the triangle list has been replaced.
#[derive(Debug, Default)]
pub struct MidpointCache {
    lookup: FxHashMap<EdgeKey, u32>,
}

impl MidpointCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for roughly `edges` distinct edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            lookup: FxHashMap::with_capacity_and_hasher(edges, Default::default()),
        }
    }

    /// Return the midpoint vertex of edge `first`–`second`, creating it on first use.
    ///
    /// A new vertex is derived with `midpoint(vertices[lo], vertices[hi])`,
    /// appended to `vertices`, and remembered under the canonical key. Later
    /// calls for the same edge, in either order, return the stored index and
    /// leave `vertices` untouched.
    ///
    /// The caller guarantees both indices are in range and that
    /// `vertices.len()` fits in a `u32`.
    pub fn get_or_create<V, F>(
        &mut self,
        vertices: &mut Vec<V>,
        first: u32,
        second: u32,
        midpoint: F,
    ) -> u32
    where
        F: FnOnce(&V, &V) -> V,
    {
        let key = EdgeKey::new(first, second);
        if let Some(&index) = self.lookup.get(&key) {
            return index;
        }

        let mid = midpoint(&vertices[key.low() as usize], &vertices[key.high() as usize]);
        let index = vertices.len() as u32;
        vertices.push(mid);
        self.lookup.insert(key, index);
        index
    }

    /// Midpoint already created for this edge, if any.
    pub fn get(&self, first: u32, second: u32) -> Option<u32> {
        self.lookup.get(&EdgeKey::new(first, second)).copied()
    }

    /// Number of edges split so far.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
