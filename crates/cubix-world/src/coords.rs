use serde::{Deserialize, Serialize};

use super::{CHUNK_WIDTH, MAX_CHUNK_HEIGHT, RENDER_SPLIT_HEIGHT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cz: self.cz + dz,
        }
    }

    /// World-space X/Z of the chunk's first voxel.
    #[inline]
    pub fn origin(self) -> (i32, i32) {
        (self.cx * CHUNK_WIDTH as i32, self.cz * CHUNK_WIDTH as i32)
    }

    #[inline]
    pub fn distance_sq(self, other: ChunkCoord) -> i64 {
        let dx = i64::from(self.cx - other.cx);
        let dz = i64::from(self.cz - other.cz);
        dx * dx + dz * dz
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ChunkCoord> for (i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cz)
    }
}

/// Voxel position inside a chunk. `y` is chunk-local: `0..MAX_CHUNK_HEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl LocalPos {
    #[inline]
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        debug_assert!(x < CHUNK_WIDTH && z < CHUNK_WIDTH, "local x/z out of range: {x},{z}");
        debug_assert!(y < MAX_CHUNK_HEIGHT, "local y out of range: {y}");
        Self { x, y, z }
    }

    /// Split index plus the split-local position.
    #[inline]
    pub fn to_split(self) -> (usize, SplitPos) {
        let split = split_index_of(self.y);
        (
            split,
            SplitPos {
                x: self.x,
                y: self.y - split * RENDER_SPLIT_HEIGHT,
                z: self.z,
            },
        )
    }

    #[inline]
    pub fn split_index(self) -> usize {
        split_index_of(self.y)
    }

    /// World-space coordinates of this cell inside `chunk`.
    #[inline]
    pub fn to_world(self, chunk: ChunkCoord) -> (i32, i32, i32) {
        let (ox, oz) = chunk.origin();
        (ox + self.x as i32, self.y as i32, oz + self.z as i32)
    }
}

/// Voxel position inside a render split. `y` is split-local: `0..RENDER_SPLIT_HEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SplitPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl SplitPos {
    #[inline]
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        debug_assert!(x < CHUNK_WIDTH && z < CHUNK_WIDTH, "split x/z out of range: {x},{z}");
        debug_assert!(y < RENDER_SPLIT_HEIGHT, "split y out of range: {y}");
        Self { x, y, z }
    }

    #[inline]
    pub fn to_local(self, split: usize) -> LocalPos {
        LocalPos::new(self.x, split * RENDER_SPLIT_HEIGHT + self.y, self.z)
    }
}

#[inline]
pub fn world_to_chunk(x: i32, z: i32) -> ChunkCoord {
    let w = CHUNK_WIDTH as i32;
    ChunkCoord::new(x.div_euclid(w), z.div_euclid(w))
}

/// Chunk-local position of a world voxel, or `None` when `y` is outside the world height.
#[inline]
pub fn world_to_local(x: i32, y: i32, z: i32) -> Option<LocalPos> {
    if y < 0 || y >= MAX_CHUNK_HEIGHT as i32 {
        return None;
    }
    let w = CHUNK_WIDTH as i32;
    Some(LocalPos {
        x: x.rem_euclid(w) as usize,
        y: y as usize,
        z: z.rem_euclid(w) as usize,
    })
}

/// Cell one step away from `p` in `chunk`, following X/Z across chunk borders.
/// `None` when the step leaves the world vertically.
#[inline]
pub fn step(chunk: ChunkCoord, p: LocalPos, dx: i32, dy: i32, dz: i32) -> Option<(ChunkCoord, LocalPos)> {
    let ny = p.y as i32 + dy;
    if ny < 0 || ny >= MAX_CHUNK_HEIGHT as i32 {
        return None;
    }
    let w = CHUNK_WIDTH as i32;
    let nx = p.x as i32 + dx;
    let nz = p.z as i32 + dz;
    let next = chunk.offset(nx.div_euclid(w), nz.div_euclid(w));
    Some((
        next,
        LocalPos {
            x: nx.rem_euclid(w) as usize,
            y: ny as usize,
            z: nz.rem_euclid(w) as usize,
        },
    ))
}

#[inline]
pub fn split_index_of(y: usize) -> usize {
    debug_assert!(y < MAX_CHUNK_HEIGHT, "y {y} outside world height");
    y / RENDER_SPLIT_HEIGHT
}

/// Offset of a cell in a chunk's voxel array. Every reader and writer of chunk voxels goes
/// through this function.
#[inline]
pub fn voxel_index(p: LocalPos) -> usize {
    (p.y * CHUNK_WIDTH + p.z) * CHUNK_WIDTH + p.x
}

/// Offset of a cell in a render split's light map.
#[inline]
pub fn light_index(p: SplitPos) -> usize {
    (p.y * CHUNK_WIDTH + p.z) * CHUNK_WIDTH + p.x
}
