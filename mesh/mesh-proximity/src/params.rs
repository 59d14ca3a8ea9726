//! Tunables for octree construction.

/// Parameters controlling how the spatial index is built.
///
/// The defaults are pragmatic rather than derived: they behave well on
/// meshes from tens to millions of faces. None of them change query
/// results, only query cost.
///
/// # Example
///
/// ```
/// use mesh_proximity::IndexParams;
///
/// let params = IndexParams::default();
/// assert_eq!(params.max_depth, 10);
///
/// let deep = IndexParams::default().max_depth(16).max_fill(1.5);
/// assert_eq!(deep.max_depth, 16);
/// ```
#[derive(Debug, Clone)]
pub struct IndexParams {
    /// Maximum octree depth. Leaves at this depth never subdivide.
    pub max_depth: usize,

    /// A leaf subdivides when `elements / (1 + depth)` exceeds this value.
    /// The depth divisor tolerates denser leaves further down, which keeps
    /// hotspots from splitting the tree all the way near the root.
    pub max_fill: f32,

    /// Meshes with fewer faces than this skip index construction entirely
    /// and answer queries by scanning every face.
    pub linear_scan_threshold: usize,
}

impl Default for IndexParams {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_fill: 3.0,
            linear_scan_threshold: 32,
        }
    }
}

impl IndexParams {
    /// Set the maximum octree depth.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the leaf fill ratio above which a leaf subdivides.
    #[must_use]
    pub const fn max_fill(mut self, fill: f32) -> Self {
        self.max_fill = fill;
        self
    }

    /// Set the face count below which queries scan linearly.
    #[must_use]
    pub const fn linear_scan_threshold(mut self, faces: usize) -> Self {
        self.linear_scan_threshold = faces;
        self
    }
}
