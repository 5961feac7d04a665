use cubix_blocks::MAX_LIGHT_LEVEL;
use cubix_chunk::{Chunk, ChunkTable};
use cubix_world::{CHUNK_WIDTH, LocalPos, MAX_CHUNK_HEIGHT};
use rayon::prelude::*;

use crate::DirtySplits;

/// Full sky above the first opaque voxel of the column, dark from there down.
/// Returns the splits whose meshes read a changed cell, including ones across the chunk border.
pub fn seed_skylight_column(chunk: &mut Chunk, x: usize, z: usize) -> DirtySplits {
    let mut dirty = DirtySplits::new();
    let mut open = true;
    for y in (0..MAX_CHUNK_HEIGHT).rev() {
        let p = LocalPos::new(x, y, z);
        if open && chunk.voxel(p).is_opaque() {
            open = false;
        }
        let level = if open { MAX_LIGHT_LEVEL } else { 0 };
        if chunk.global_light(p) != level {
            chunk.set_global_light(p, level);
            dirty.mark_cell(chunk.coord(), p);
        }
    }
    dirty
}

pub fn seed_skylight(chunk: &mut Chunk) {
    for z in 0..CHUNK_WIDTH {
        for x in 0..CHUNK_WIDTH {
            seed_skylight_column(chunk, x, z);
        }
    }
}

/// Seeds every resident chunk, one rayon task per chunk.
pub fn seed_skylight_all(table: &mut ChunkTable) {
    let chunks: Vec<&mut Chunk> = table.iter_mut().collect();
    let n = chunks.len();
    chunks.into_par_iter().for_each(seed_skylight);
    log::debug!("skylight seeded for {n} chunks");
}
