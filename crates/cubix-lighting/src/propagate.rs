use std::collections::VecDeque;

use cubix_blocks::{MAX_LIGHT_LEVEL, MIN_LIGHT_LEVEL};
use cubix_chunk::ChunkTable;
use cubix_world::{ChunkCoord, LocalPos, step};

use crate::DirtySplits;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightNode {
    pub chunk: ChunkCoord,
    pub pos: LocalPos,
}

/// FIFO of cells whose light still has to spread.
#[derive(Debug, Default)]
pub struct LightQueue {
    nodes: VecDeque<LightNode>,
}

impl LightQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, node: LightNode) {
        self.nodes.push_back(node);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<LightNode> {
        self.nodes.pop_front()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

pub(crate) const NEIGHBORS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Writes `level` as block light at the seed and floods it outward through air, one level
/// lost per step. Steps into chunks that are not resident are skipped. Returns every resident
/// split whose mesh reads a changed cell; the seed split comes first.
pub fn propagate_block_light(
    table: &mut ChunkTable,
    chunk: ChunkCoord,
    pos: LocalPos,
    level: u8,
) -> DirtySplits {
    let mut dirty = DirtySplits::new();
    let level = level.min(MAX_LIGHT_LEVEL);
    let Some(seed) = table.get_mut(chunk) else {
        log::warn!("light seed in unloaded chunk ({}, {})", chunk.cx, chunk.cz);
        return dirty;
    };
    seed.set_block_light(pos, level);
    dirty.mark_cell(chunk, pos);

    let mut queue = LightQueue::new();
    queue.push(LightNode { chunk, pos });
    let mut updates = 0usize;
    while let Some(node) = queue.pop() {
        let Some(l) = table.get(node.chunk).map(|c| c.block_light(node.pos)) else {
            continue;
        };
        if l <= MIN_LIGHT_LEVEL {
            continue;
        }
        let next = l - 1;
        for (dx, dy, dz) in NEIGHBORS {
            let Some((nc, np)) = step(node.chunk, node.pos, dx, dy, dz) else {
                continue;
            };
            let Some(neighbor) = table.get_mut(nc) else {
                continue;
            };
            if !neighbor.is_air(np) {
                continue;
            }
            let current = neighbor.block_light(np);
            if current + MIN_LIGHT_LEVEL > l || current == next {
                continue;
            }
            neighbor.set_block_light(np, next);
            dirty.mark_cell(nc, np);
            queue.push(LightNode { chunk: nc, pos: np });
            updates += 1;
        }
    }
    dirty.retain_chunks(|c| table.contains(c));
    log::debug!(
        "block light {} at ({}, {}) {:?}: {} cells, {} splits dirty",
        level,
        chunk.cx,
        chunk.cz,
        pos,
        updates,
        dirty.len()
    );
    dirty
}

/// Lets light flow into a cell that just became air, starting from its brightest neighbor.
pub fn refill_opened_cell(table: &mut ChunkTable, chunk: ChunkCoord, pos: LocalPos) -> DirtySplits {
    let mut brightest: Option<(ChunkCoord, LocalPos, u8)> = None;
    for (dx, dy, dz) in NEIGHBORS {
        let Some((nc, np)) = step(chunk, pos, dx, dy, dz) else {
            continue;
        };
        let Some(l) = table.get(nc).map(|c| c.block_light(np)) else {
            continue;
        };
        if l > brightest.map_or(0, |b| b.2) {
            brightest = Some((nc, np, l));
        }
    }
    match brightest {
        Some((nc, np, l)) if l > MIN_LIGHT_LEVEL => propagate_block_light(table, nc, np, l),
        _ => DirtySplits::new(),
    }
}
