use cubix_blocks::MAX_LIGHT_LEVEL;
use cubix_world::{SPLIT_VOLUME, SplitPos, light_index};

/// Per-cell light of one render split. Each byte holds the global channel in the high nibble
/// and the block channel in the low nibble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightMap {
    cells: Vec<u8>,
}

impl Default for LightMap {
    fn default() -> Self {
        Self::new()
    }
}

impl LightMap {
    pub fn new() -> Self {
        Self {
            cells: vec![0; SPLIT_VOLUME],
        }
    }

    #[inline]
    pub fn block(&self, p: SplitPos) -> u8 {
        self.cells[light_index(p)] & 0x0F
    }

    #[inline]
    pub fn global(&self, p: SplitPos) -> u8 {
        self.cells[light_index(p)] >> 4
    }

    #[inline]
    pub fn effective(&self, p: SplitPos) -> u8 {
        let c = self.cells[light_index(p)];
        (c & 0x0F).max(c >> 4)
    }

    #[inline]
    pub fn set_block(&mut self, p: SplitPos, level: u8) {
        let level = clamp_level(level);
        let c = &mut self.cells[light_index(p)];
        *c = (*c & 0xF0) | level;
    }

    #[inline]
    pub fn set_global(&mut self, p: SplitPos, level: u8) {
        let level = clamp_level(level);
        let c = &mut self.cells[light_index(p)];
        *c = (*c & 0x0F) | (level << 4);
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

#[inline]
fn clamp_level(level: u8) -> u8 {
    debug_assert!(level <= MAX_LIGHT_LEVEL, "light level {level} above maximum");
    level.min(MAX_LIGHT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_do_not_bleed() {
        let mut m = LightMap::new();
        let p = SplitPos::new(1, 2, 3);
        m.set_global(p, 15);
        m.set_block(p, 4);
        assert_eq!(m.global(p), 15);
        assert_eq!(m.block(p), 4);
        assert_eq!(m.effective(p), 15);
        m.set_global(p, 0);
        assert_eq!(m.block(p), 4);
        assert_eq!(m.effective(p), 4);
        assert_eq!(m.effective(SplitPos::new(1, 2, 4)), 0);
    }
}
