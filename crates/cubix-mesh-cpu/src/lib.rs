//! CPU face-culling mesher for render splits.
#![forbid(unsafe_code)]

mod atlas;
mod build;
mod emit;
pub mod face;
mod neighbors;

pub use atlas::AtlasLayout;
pub use build::{build_split_mesh, build_split_mesh_into};
pub use face::Face;
pub use neighbors::NeighborChunks;
