//! Block light flood fill and skylight column seeding.
#![forbid(unsafe_code)]

mod dirty;
mod propagate;
mod skylight;

pub use dirty::DirtySplits;
pub use propagate::{LightNode, LightQueue, propagate_block_light, refill_opened_cell};
pub use skylight::{seed_skylight, seed_skylight_all, seed_skylight_column};
