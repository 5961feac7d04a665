use std::collections::HashSet;

use cubix_world::{ChunkCoord, LocalPos, step};

use crate::propagate::NEIGHBORS;

/// `(chunk, split)` pairs that need a new mesh, deduplicated, in first-touch order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirtySplits {
    order: Vec<(ChunkCoord, usize)>,
    seen: HashSet<(ChunkCoord, usize)>,
}

impl DirtySplits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the pair was not yet recorded.
    pub fn mark(&mut self, chunk: ChunkCoord, split: usize) -> bool {
        if self.seen.insert((chunk, split)) {
            self.order.push((chunk, split));
            true
        } else {
            false
        }
    }

    /// Marks the split owning `pos` and every split holding a face that looks into it, which
    /// may lie across a split or chunk border. The owning split is marked first.
    pub fn mark_cell(&mut self, chunk: ChunkCoord, pos: LocalPos) {
        self.mark(chunk, pos.split_index());
        for (dx, dy, dz) in NEIGHBORS {
            if let Some((nc, np)) = step(chunk, pos, dx, dy, dz) {
                self.mark(nc, np.split_index());
            }
        }
    }

    /// Keeps only the pairs whose chunk passes `keep`, preserving order.
    pub fn retain_chunks(&mut self, mut keep: impl FnMut(ChunkCoord) -> bool) {
        self.order.retain(|&(c, _)| keep(c));
        self.seen.retain(|&(c, _)| keep(c));
    }

    pub fn extend(&mut self, other: DirtySplits) {
        for (c, s) in other.order {
            self.mark(c, s);
        }
    }

    pub fn contains(&self, chunk: ChunkCoord, split: usize) -> bool {
        self.seen.contains(&(chunk, split))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChunkCoord, usize)> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<(ChunkCoord, usize)> {
        self.order
    }
}
