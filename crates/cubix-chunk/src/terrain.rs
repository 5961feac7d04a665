//! Terrain generators fill a freshly created chunk's voxels from its coordinate.

use cubix_blocks::MaterialId;
use cubix_blocks::registry::builtin;
use cubix_world::{
    CHUNK_WIDTH, HeightSampler, LocalPos, MAX_CHUNK_HEIGHT, TerrainConfig, WorldConfig,
};

use crate::Chunk;

/// Deterministic voxel fill for one chunk. Implementations must be total: every chunk
/// coordinate gets a fill, and the same coordinate always gets the same one.
pub trait TerrainGenerator: Send + Sync {
    fn fill(&self, chunk: &mut Chunk);

    fn name(&self) -> &'static str;
}

/// Leaves chunks empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct AirTerrain;

impl TerrainGenerator for AirTerrain {
    fn fill(&self, _chunk: &mut Chunk) {}

    fn name(&self) -> &'static str {
        "air"
    }
}

/// Solid stone up to `height` with a grass top layer.
#[derive(Clone, Copy, Debug)]
pub struct FlatTerrain {
    pub height: usize,
}

impl FlatTerrain {
    pub fn new(height: usize) -> Self {
        Self {
            height: height.min(MAX_CHUNK_HEIGHT),
        }
    }
}

impl TerrainGenerator for FlatTerrain {
    fn fill(&self, chunk: &mut Chunk) {
        for y in 0..self.height {
            let material = if y + 1 == self.height {
                builtin::GRASS
            } else {
                builtin::STONE
            };
            for z in 0..CHUNK_WIDTH {
                for x in 0..CHUNK_WIDTH {
                    chunk.set_material(LocalPos::new(x, y, z), material);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "flat"
    }
}

const DIRT_LAYERS: usize = 3;

/// Height-mapped terrain: bedrock floor, stone, dirt under a grass surface.
pub struct NoiseTerrain {
    sampler: HeightSampler,
}

impl NoiseTerrain {
    pub fn new(seed: i32, base_height: f32, amplitude: f32, frequency: f32) -> Self {
        Self {
            sampler: HeightSampler::new(seed, base_height, amplitude, frequency),
        }
    }

    pub fn surface_height(&self, wx: i32, wz: i32) -> usize {
        self.sampler.height_at(wx, wz)
    }
}

fn column_material(y: usize, surface: usize) -> MaterialId {
    if y == 0 {
        builtin::BEDROCK
    } else if y == surface {
        builtin::GRASS
    } else if y + DIRT_LAYERS >= surface {
        builtin::DIRT
    } else {
        builtin::STONE
    }
}

impl TerrainGenerator for NoiseTerrain {
    fn fill(&self, chunk: &mut Chunk) {
        let (ox, oz) = chunk.coord().origin();
        for z in 0..CHUNK_WIDTH {
            for x in 0..CHUNK_WIDTH {
                let surface = self.sampler.height_at(ox + x as i32, oz + z as i32);
                for y in 0..=surface {
                    chunk.set_material(LocalPos::new(x, y, z), column_material(y, surface));
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "noise"
    }
}

pub fn terrain_from_config(cfg: &WorldConfig) -> Box<dyn TerrainGenerator> {
    match cfg.terrain {
        TerrainConfig::Air => Box::new(AirTerrain),
        TerrainConfig::Flat { height } => Box::new(FlatTerrain::new(height)),
        TerrainConfig::Noise {
            base_height,
            amplitude,
            frequency,
        } => Box::new(NoiseTerrain::new(cfg.seed, base_height, amplitude, frequency)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubix_world::ChunkCoord;

    #[test]
    fn noise_column_layers() {
        assert_eq!(column_material(0, 10), builtin::BEDROCK);
        assert_eq!(column_material(6, 10), builtin::STONE);
        assert_eq!(column_material(7, 10), builtin::DIRT);
        assert_eq!(column_material(9, 10), builtin::DIRT);
        assert_eq!(column_material(10, 10), builtin::GRASS);
        assert_eq!(column_material(1, 1), builtin::GRASS);
    }

    #[test]
    fn noise_fill_is_deterministic() {
        let t = NoiseTerrain::new(42, 50.0, 8.0, 0.05);
        let mut a = Chunk::new(ChunkCoord::new(-1, 3));
        let mut b = Chunk::new(ChunkCoord::new(-1, 3));
        t.fill(&mut a);
        t.fill(&mut b);
        for y in 0..MAX_CHUNK_HEIGHT {
            let p = LocalPos::new(5, y, 11);
            assert_eq!(a.voxel(p), b.voxel(p));
        }
        let top = t.surface_height(-16 + 5, 48 + 11);
        assert_eq!(a.material(LocalPos::new(5, top, 11)), builtin::GRASS);
        assert!(a.is_air(LocalPos::new(5, top + 1, 11)));
    }

    #[test]
    fn flat_fill_tops_with_grass() {
        let mut c = Chunk::new(ChunkCoord::new(0, 0));
        FlatTerrain::new(4).fill(&mut c);
        assert_eq!(c.material(LocalPos::new(0, 3, 0)), builtin::GRASS);
        assert_eq!(c.material(LocalPos::new(15, 0, 15)), builtin::STONE);
        assert!(c.is_air(LocalPos::new(8, 4, 8)));
    }
}
