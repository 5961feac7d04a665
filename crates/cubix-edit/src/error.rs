use std::fmt;

use cubix_blocks::MaterialId;
use cubix_world::ChunkCoord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditError {
    OutOfBounds { x: i32, y: i32, z: i32 },
    ChunkNotLoaded(ChunkCoord),
    InvalidMaterial(MaterialId),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::OutOfBounds { x, y, z } => {
                write!(f, "voxel ({x}, {y}, {z}) is outside the editable region")
            }
            EditError::ChunkNotLoaded(c) => write!(f, "chunk ({}, {}) is not loaded", c.cx, c.cz),
            EditError::InvalidMaterial(m) => write!(f, "material {} is not registered", m.0),
        }
    }
}

impl std::error::Error for EditError {}
