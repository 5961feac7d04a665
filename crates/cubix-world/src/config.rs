use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WorldConfig {
    /// Chunks loaded on each side of the origin; the region spans `-radius..radius`.
    #[serde(default = "default_radius")]
    pub radius: i32,
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default)]
    pub terrain: TerrainConfig,
    #[serde(default = "default_atlas_columns")]
    pub atlas_columns: u32,
    #[serde(default = "default_table_capacity")]
    pub initial_table_capacity: usize,
    #[serde(default = "default_parallel_meshing")]
    pub parallel_meshing: bool,
}

fn default_radius() -> i32 {
    2
}
fn default_seed() -> i32 {
    1337
}
fn default_atlas_columns() -> u32 {
    16
}
fn default_table_capacity() -> usize {
    16
}
fn default_parallel_meshing() -> bool {
    true
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            seed: default_seed(),
            terrain: TerrainConfig::default(),
            atlas_columns: default_atlas_columns(),
            initial_table_capacity: default_table_capacity(),
            parallel_meshing: default_parallel_meshing(),
        }
    }
}

/// Largest accepted region radius in chunks. Keeps world coordinates of the region well
/// inside `i32` and the chunk count in the tens of thousands.
pub const MAX_RADIUS: i32 = 64;

impl WorldConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: WorldConfig = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if !(1..=MAX_RADIUS).contains(&self.radius) {
            return Err(format!("radius must be in 1..={MAX_RADIUS}, got {}", self.radius).into());
        }
        if self.atlas_columns == 0 {
            return Err("atlas_columns must be at least 1".into());
        }
        if let TerrainConfig::Noise { frequency, .. } = self.terrain {
            if !(frequency.is_finite() && frequency > 0.0) {
                return Err(format!("noise frequency must be positive, got {frequency}").into());
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TerrainConfig {
    Air,
    Flat {
        #[serde(default = "default_flat_height")]
        height: usize,
    },
    Noise {
        #[serde(default = "default_base_height")]
        base_height: f32,
        #[serde(default = "default_amplitude")]
        amplitude: f32,
        #[serde(default = "default_frequency")]
        frequency: f32,
    },
}

fn default_flat_height() -> usize {
    8
}
fn default_base_height() -> f32 {
    64.0
}
fn default_amplitude() -> f32 {
    12.0
}
fn default_frequency() -> f32 {
    0.02
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig::Noise {
            base_height: default_base_height(),
            amplitude: default_amplitude(),
            frequency: default_frequency(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<WorldConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    WorldConfig::from_toml_str(&s)
}
