/// One mesh vertex. `pos` is chunk-local with `y` in chunk space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
    /// Light of the face this vertex belongs to, `0.0..=1.0`.
    pub light: f32,
}

/// CPU-side geometry of one render split.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SplitMesh {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn reserve_quads(&mut self, quads: usize) {
        self.vertices.reserve(quads * 4);
        self.indices.reserve(quads * 6);
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.indices.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
