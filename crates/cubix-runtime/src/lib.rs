//! World context: chunk lifecycle, edits, remeshing, and the render hand-off.
#![forbid(unsafe_code)]

mod backend;
mod context;

pub use backend::{ChannelBackend, NullBackend, RenderBackend, RenderMessage};
pub use context::{WorldContext, WorldStats};
