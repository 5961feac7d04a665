//! Edit validation and remesh invalidation.
#![forbid(unsafe_code)]

mod error;
mod request;

pub use error::EditError;
pub use request::EditRequest;

use cubix_blocks::Voxel;
use cubix_world::{
    CHUNK_SPLITS, CHUNK_WIDTH, ChunkCoord, ChunkRegion, LocalPos, MAX_CHUNK_HEIGHT,
    RENDER_SPLIT_HEIGHT, world_to_chunk, world_to_local,
};

/// Voxel edits are accepted strictly inside the loaded region, one voxel ring in from its
/// X/Z border, at any height in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditBounds {
    min_x: i32,
    max_x: i32,
    min_z: i32,
    max_z: i32,
}

impl EditBounds {
    pub fn for_region(region: &ChunkRegion) -> Self {
        let (min_x, max_x) = region.world_x_bounds();
        let (min_z, max_z) = region.world_z_bounds();
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x > self.min_x
            && x < self.max_x - 1
            && z > self.min_z
            && z < self.max_z - 1
            && y >= 0
            && y < MAX_CHUNK_HEIGHT as i32
    }

    /// Chunk and local position of an accepted edit.
    pub fn check(&self, x: i32, y: i32, z: i32) -> Result<(ChunkCoord, LocalPos), EditError> {
        if !self.contains(x, y, z) {
            log::warn!("edit at ({x}, {y}, {z}) rejected: outside editable bounds");
            return Err(EditError::OutOfBounds { x, y, z });
        }
        let local = world_to_local(x, y, z).ok_or(EditError::OutOfBounds { x, y, z })?;
        Ok((world_to_chunk(x, z), local))
    }
}

/// Splits whose mesh can change when the voxel at `p` in `chunk` changes: its own split and,
/// per axis, the split or chunk across a boundary the voxel touches. Neighbors are not
/// checked for residency.
pub fn affected_splits(chunk: ChunkCoord, p: LocalPos) -> Vec<(ChunkCoord, usize)> {
    let (split, sp) = p.to_split();
    let mut out = vec![(chunk, split)];
    if p.x == 0 {
        out.push((chunk.offset(-1, 0), split));
    } else if p.x == CHUNK_WIDTH - 1 {
        out.push((chunk.offset(1, 0), split));
    }
    if sp.y == 0 && split > 0 {
        out.push((chunk, split - 1));
    } else if sp.y == RENDER_SPLIT_HEIGHT - 1 && split + 1 < CHUNK_SPLITS {
        out.push((chunk, split + 1));
    }
    if p.z == 0 {
        out.push((chunk.offset(0, -1), split));
    } else if p.z == CHUNK_WIDTH - 1 {
        out.push((chunk.offset(0, 1), split));
    }
    out
}

/// Result of an applied edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    pub chunk: ChunkCoord,
    pub pos: LocalPos,
    pub previous: Voxel,
    /// Every split that was rebuilt, in rebuild order.
    pub regenerated: Vec<(ChunkCoord, usize)>,
}
