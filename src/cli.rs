use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use cubix_edit::EditRequest;
use cubix_world::{TerrainConfig, WorldConfig};

#[derive(Parser, Debug)]
#[command(name = "cubix", version, about = "Build a voxel world, apply edits, print its stats")]
pub struct Args {
    /// World settings file (TOML).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Materials file (TOML); the built-in set is used when absent.
    #[arg(long)]
    pub materials: Option<PathBuf>,

    #[arg(long)]
    pub radius: Option<i32>,

    #[arg(long)]
    pub seed: Option<i32>,

    #[arg(long, value_enum)]
    pub terrain: Option<TerrainKind>,

    /// `add:x,y,z,material` or `remove:x,y,z`; repeatable, applied in order.
    #[arg(long = "edit", value_name = "EDIT")]
    pub edits: Vec<EditRequest>,

    /// `x,y,z,level`; repeatable, applied after the edits.
    #[arg(long = "light", value_name = "LIGHT")]
    pub lights: Vec<LightRequest>,

    /// Mesh on the calling thread only.
    #[arg(long)]
    pub serial: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TerrainKind {
    Air,
    Flat,
    Noise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightRequest {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub level: u8,
}

impl FromStr for LightRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, z, level] = parts.as_slice() else {
            return Err(format!("expected x,y,z,level, got '{s}'"));
        };
        let coord = |v: &str| v.parse::<i32>().map_err(|e| format!("invalid number '{v}': {e}"));
        Ok(LightRequest {
            x: coord(x)?,
            y: coord(y)?,
            z: coord(z)?,
            level: level
                .parse::<u8>()
                .ok()
                .filter(|l| *l <= 15)
                .ok_or_else(|| format!("light level must be 0..=15, got '{level}'"))?,
        })
    }
}

impl Args {
    /// Command-line values override the file.
    pub fn apply_overrides(&self, cfg: &mut WorldConfig) {
        if let Some(r) = self.radius {
            cfg.radius = r;
        }
        if let Some(s) = self.seed {
            cfg.seed = s;
        }
        if self.serial {
            cfg.parallel_meshing = false;
        }
        match (self.terrain, &cfg.terrain) {
            (None, _) => {}
            (Some(TerrainKind::Air), _) => cfg.terrain = TerrainConfig::Air,
            (Some(TerrainKind::Flat), TerrainConfig::Flat { .. }) => {}
            (Some(TerrainKind::Flat), _) => cfg.terrain = TerrainConfig::Flat { height: 8 },
            (Some(TerrainKind::Noise), TerrainConfig::Noise { .. }) => {}
            (Some(TerrainKind::Noise), _) => cfg.terrain = TerrainConfig::default(),
        }
    }
}
