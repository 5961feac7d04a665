//! Chunk voxel storage, render splits, the chunk index, and terrain fill.
#![forbid(unsafe_code)]

mod chunk;
mod light_map;
mod mesh;
mod table;
pub mod terrain;

pub use chunk::{Chunk, RenderSplit};
pub use light_map::LightMap;
pub use mesh::{SplitMesh, Vertex};
pub use table::{ChunkTable, ChunkTableError};
pub use terrain::{AirTerrain, FlatTerrain, NoiseTerrain, TerrainGenerator, terrain_from_config};
