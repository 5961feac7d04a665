//! World dimensions, coordinate mapping, configuration, and height sampling.
#![forbid(unsafe_code)]

pub mod config;
mod coords;
mod height;
mod region;

pub use config::{MAX_RADIUS, TerrainConfig, WorldConfig, load_config_from_path};
pub use coords::{
    ChunkCoord, LocalPos, SplitPos, light_index, split_index_of, step, voxel_index, world_to_chunk,
    world_to_local,
};
pub use height::HeightSampler;
pub use region::ChunkRegion;

/// Voxels per chunk along X and Z.
pub const CHUNK_WIDTH: usize = 16;
/// Voxels per chunk along Y; also the world height.
pub const MAX_CHUNK_HEIGHT: usize = 256;
/// Height of one render split.
pub const RENDER_SPLIT_HEIGHT: usize = 16;
/// Render splits per chunk.
pub const CHUNK_SPLITS: usize = MAX_CHUNK_HEIGHT / RENDER_SPLIT_HEIGHT;
/// Voxels per chunk.
pub const CHUNK_VOLUME: usize = CHUNK_WIDTH * CHUNK_WIDTH * MAX_CHUNK_HEIGHT;
/// Cells per render split light map.
pub const SPLIT_VOLUME: usize = CHUNK_WIDTH * CHUNK_WIDTH * RENDER_SPLIT_HEIGHT;
