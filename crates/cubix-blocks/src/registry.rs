use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{MaterialEntry, MaterialsConfig};
use super::types::{FaceRole, MAX_LIGHT_LEVEL, MaterialId};

/// Ids of the materials the default registry ships with.
pub mod builtin {
    use super::MaterialId;

    pub const AIR: MaterialId = MaterialId::AIR;
    pub const GRASS: MaterialId = MaterialId(1);
    pub const DIRT: MaterialId = MaterialId(2);
    pub const STONE: MaterialId = MaterialId(3);
    pub const GRASS_SIDE: MaterialId = MaterialId(4);
    pub const BEDROCK: MaterialId = MaterialId(5);
    pub const SAND: MaterialId = MaterialId(6);
    pub const GLOWSTONE: MaterialId = MaterialId(7);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialDef {
    pub id: MaterialId,
    pub name: String,
    pub top: MaterialId,
    pub side: MaterialId,
    pub bottom: MaterialId,
    pub emission: u8,
}

impl MaterialDef {
    #[inline]
    pub fn face(&self, role: FaceRole) -> MaterialId {
        match role {
            FaceRole::Top => self.top,
            FaceRole::Side => self.side,
            FaceRole::Bottom => self.bottom,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    defs: Vec<Option<MaterialDef>>,
    by_name: HashMap<String, MaterialId>,
}

impl MaterialRegistry {
    /// Air, grass (grass top, grass_side sides, dirt bottom), dirt, stone, grass_side,
    /// bedrock, sand and a light-emitting glowstone.
    pub fn builtin() -> Self {
        let mut grass = MaterialEntry::named("grass", builtin::GRASS.0);
        grass.side = Some("grass_side".into());
        grass.bottom = Some("dirt".into());
        let mut glowstone = MaterialEntry::named("glowstone", builtin::GLOWSTONE.0);
        glowstone.emission = Some(MAX_LIGHT_LEVEL);
        let cfg = MaterialsConfig {
            materials: vec![
                MaterialEntry::named("air", builtin::AIR.0),
                grass,
                MaterialEntry::named("dirt", builtin::DIRT.0),
                MaterialEntry::named("stone", builtin::STONE.0),
                MaterialEntry::named("grass_side", builtin::GRASS_SIDE.0),
                MaterialEntry::named("bedrock", builtin::BEDROCK.0),
                MaterialEntry::named("sand", builtin::SAND.0),
                glowstone,
            ],
        };
        match Self::from_config(cfg) {
            Ok(reg) => reg,
            Err(e) => unreachable!("builtin materials are valid: {e}"),
        }
    }

    pub fn from_config(cfg: MaterialsConfig) -> Result<Self, Box<dyn Error>> {
        let mut entries = cfg.materials;
        if !entries.iter().any(|e| e.name == "air") {
            entries.insert(0, MaterialEntry::named("air", MaterialId::AIR.0));
        }

        // Pass 1: assign ids.
        let mut by_name: HashMap<String, MaterialId> = HashMap::new();
        let mut taken = vec![false; MaterialId::COUNT];
        for (e, id) in entries.iter().filter_map(|e| e.id.map(|id| (e, MaterialId(id)))) {
            if !id.fits_voxel() {
                return Err(format!("material '{}' has id {} (max {})", e.name, id.0, MaterialId::COUNT - 1).into());
            }
            if taken[id.index()] {
                return Err(format!("material id {} assigned twice", id.0).into());
            }
            if by_name.insert(e.name.clone(), id).is_some() {
                return Err(format!("material '{}' defined twice", e.name).into());
            }
            taken[id.index()] = true;
        }
        let mut next_free = 0usize;
        for e in entries.iter().filter(|e| e.id.is_none()) {
            while next_free < MaterialId::COUNT && taken[next_free] {
                next_free += 1;
            }
            if next_free == MaterialId::COUNT {
                return Err("material id space exhausted".into());
            }
            let id = MaterialId(next_free as u16);
            if by_name.insert(e.name.clone(), id).is_some() {
                return Err(format!("material '{}' defined twice", e.name).into());
            }
            taken[next_free] = true;
        }
        if by_name.get("air") != Some(&MaterialId::AIR) {
            return Err("material 'air' must have id 0".into());
        }

        // Pass 2: resolve face references.
        let resolve = |own: MaterialId, name: &Option<String>| -> Result<MaterialId, Box<dyn Error>> {
            match name {
                None => Ok(own),
                Some(n) => by_name
                    .get(n)
                    .copied()
                    .ok_or_else(|| format!("unknown face material '{n}'").into()),
            }
        };
        let len = by_name.values().map(|id| id.index() + 1).max().unwrap_or(1);
        let mut defs: Vec<Option<MaterialDef>> = vec![None; len];
        for e in &entries {
            let id = by_name[&e.name];
            let emission = e.emission.unwrap_or(0);
            if emission > MAX_LIGHT_LEVEL {
                return Err(format!("material '{}' emission {} exceeds {}", e.name, emission, MAX_LIGHT_LEVEL).into());
            }
            defs[id.index()] = Some(MaterialDef {
                id,
                name: e.name.clone(),
                top: resolve(id, &e.top)?,
                side: resolve(id, &e.side)?,
                bottom: resolve(id, &e.bottom)?,
                emission,
            });
        }
        Ok(Self { defs, by_name })
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    #[inline]
    pub fn get(&self, id: MaterialId) -> Option<&MaterialDef> {
        self.defs.get(id.index()).and_then(|d| d.as_ref())
    }

    #[inline]
    pub fn contains(&self, id: MaterialId) -> bool {
        self.get(id).is_some()
    }

    pub fn id_by_name(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    /// Material drawn on the given face of a voxel. Unregistered ids draw as themselves.
    #[inline]
    pub fn face_material(&self, id: MaterialId, role: FaceRole) -> MaterialId {
        self.get(id).map_or(id, |d| d.face(role))
    }

    #[inline]
    pub fn emission(&self, id: MaterialId) -> u8 {
        self.get(id).map_or(0, |d| d.emission)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialDef> {
        self.defs.iter().flatten()
    }
}
