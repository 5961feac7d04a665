use std::fmt;

use cubix_world::ChunkCoord;
use hashbrown::HashMap;

use crate::Chunk;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkTableError {
    AlreadyPresent(ChunkCoord),
    Missing(ChunkCoord),
}

impl fmt::Display for ChunkTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkTableError::AlreadyPresent(c) => {
                write!(f, "chunk ({}, {}) is already loaded", c.cx, c.cz)
            }
            ChunkTableError::Missing(c) => write!(f, "chunk ({}, {}) is not loaded", c.cx, c.cz),
        }
    }
}

impl std::error::Error for ChunkTableError {}

/// Resident chunks keyed by coordinate.
///
/// `capacity` is a logical bound: it starts at the configured value, grows by half
/// (rounded up) when an insert would exceed it, and never shrinks.
#[derive(Debug)]
pub struct ChunkTable {
    chunks: HashMap<ChunkCoord, Chunk>,
    capacity: usize,
}

impl Default for ChunkTable {
    fn default() -> Self {
        Self::with_capacity(16)
    }
}

impl ChunkTable {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            chunks: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts an all-air chunk at `coord`.
    pub fn insert(&mut self, coord: ChunkCoord) -> Result<&mut Chunk, ChunkTableError> {
        self.insert_chunk(Chunk::new(coord))
    }

    /// Inserts a chunk that was filled elsewhere.
    pub fn insert_chunk(&mut self, chunk: Chunk) -> Result<&mut Chunk, ChunkTableError> {
        let coord = chunk.coord();
        if self.chunks.contains_key(&coord) {
            log::warn!("rejected insert of chunk ({}, {}): already loaded", coord.cx, coord.cz);
            return Err(ChunkTableError::AlreadyPresent(coord));
        }
        if self.chunks.len() == self.capacity {
            let grown = self.capacity + self.capacity.div_ceil(2);
            log::debug!("chunk table grows {} -> {}", self.capacity, grown);
            self.chunks.reserve(grown - self.chunks.len());
            self.capacity = grown;
        }
        Ok(self.chunks.entry(coord).or_insert(chunk))
    }

    pub fn remove(&mut self, coord: ChunkCoord) -> Result<Chunk, ChunkTableError> {
        self.chunks.remove(&coord).ok_or_else(|| {
            log::warn!("rejected removal of chunk ({}, {}): not loaded", coord.cx, coord.cz);
            ChunkTableError::Missing(coord)
        })
    }

    #[inline]
    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    #[inline]
    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    #[inline]
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn for_each(&self, mut visit: impl FnMut(&Chunk)) {
        for chunk in self.chunks.values() {
            visit(chunk);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Chunk> {
        self.chunks.values_mut()
    }

    /// Resident coordinates, sorted.
    pub fn coords(&self) -> Vec<ChunkCoord> {
        let mut out: Vec<ChunkCoord> = self.chunks.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// Removes every chunk. Capacity is kept.
    pub fn drain(&mut self) -> Vec<Chunk> {
        self.chunks.drain().map(|(_, c)| c).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
