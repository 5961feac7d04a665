use crate::{CHUNK_WIDTH, ChunkCoord};

/// Rectangular set of chunk coordinates, `min` inclusive and `max` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkRegion {
    pub min: ChunkCoord,
    pub max: ChunkCoord,
}

impl ChunkRegion {
    pub fn new(min: ChunkCoord, max: ChunkCoord) -> Self {
        debug_assert!(min.cx <= max.cx && min.cz <= max.cz);
        Self { min, max }
    }

    /// Chunks `-radius..radius` on both axes.
    pub fn centered(radius: i32) -> Self {
        Self::new(
            ChunkCoord::new(-radius, -radius),
            ChunkCoord::new(radius, radius),
        )
    }

    #[inline]
    pub fn contains(&self, c: ChunkCoord) -> bool {
        c.cx >= self.min.cx && c.cx < self.max.cx && c.cz >= self.min.cz && c.cz < self.max.cz
    }

    pub fn chunk_count(&self) -> usize {
        ((self.max.cx - self.min.cx) * (self.max.cz - self.min.cz)) as usize
    }

    /// Row-major over X then Z.
    pub fn iter(&self) -> impl Iterator<Item = ChunkCoord> + use<> {
        let (min, max) = (self.min, self.max);
        (min.cz..max.cz).flat_map(move |cz| (min.cx..max.cx).map(move |cx| ChunkCoord::new(cx, cz)))
    }

    /// World-space voxel X range, `(min inclusive, max exclusive)`.
    pub fn world_x_bounds(&self) -> (i32, i32) {
        let w = CHUNK_WIDTH as i32;
        (self.min.cx * w, self.max.cx * w)
    }

    /// World-space voxel Z range, `(min inclusive, max exclusive)`.
    pub fn world_z_bounds(&self) -> (i32, i32) {
        let w = CHUNK_WIDTH as i32;
        (self.min.cz * w, self.max.cz * w)
    }
}
