//! Voxel packing, material ids, and the material registry.
#![forbid(unsafe_code)]

pub mod config;
pub mod registry;
pub mod types;

pub use registry::{MaterialDef, MaterialRegistry};
pub use types::{FaceRole, MAX_LIGHT_LEVEL, MIN_LIGHT_LEVEL, MaterialId, Voxel, VoxelFlag};
