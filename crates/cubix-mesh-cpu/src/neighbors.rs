use cubix_chunk::{Chunk, ChunkTable};
use cubix_world::ChunkCoord;

use crate::face::Face;

/// Resident horizontal neighbors of the chunk being meshed. Faces toward a missing
/// neighbor are treated as hidden.
#[derive(Clone, Copy, Default)]
pub struct NeighborChunks<'a> {
    pub neg_x: Option<&'a Chunk>,
    pub pos_x: Option<&'a Chunk>,
    pub neg_z: Option<&'a Chunk>,
    pub pos_z: Option<&'a Chunk>,
}

impl<'a> NeighborChunks<'a> {
    pub fn of(table: &'a ChunkTable, coord: ChunkCoord) -> Self {
        Self {
            neg_x: table.get(coord.offset(-1, 0)),
            pos_x: table.get(coord.offset(1, 0)),
            neg_z: table.get(coord.offset(0, -1)),
            pos_z: table.get(coord.offset(0, 1)),
        }
    }

    /// Chunk across `face`; vertical faces never leave the chunk.
    #[inline]
    pub fn toward(&self, face: Face) -> Option<&'a Chunk> {
        match face {
            Face::NegX => self.neg_x,
            Face::PosX => self.pos_x,
            Face::NegZ => self.neg_z,
            Face::PosZ => self.pos_z,
            Face::PosY | Face::NegY => None,
        }
    }

    pub fn all_loaded(&self) -> bool {
        self.neg_x.is_some() && self.pos_x.is_some() && self.neg_z.is_some() && self.pos_z.is_some()
    }
}
