use serde::Deserialize;

// Top-level materials file:
//
// [[materials]]
// name = "grass"
// id = 1
// top = "grass"
// side = "grass_side"
// bottom = "dirt"
#[derive(Deserialize, Debug, Default)]
pub struct MaterialsConfig {
    #[serde(default)]
    pub materials: Vec<MaterialEntry>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct MaterialEntry {
    pub name: String,
    // Explicit id; entries without one take the next free id.
    #[serde(default)]
    pub id: Option<u16>,
    // Per-face overrides by material name. Missing roles use the entry itself.
    #[serde(default)]
    pub top: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub bottom: Option<String>,
    #[serde(default)]
    pub emission: Option<u8>,
}

impl MaterialEntry {
    pub fn named(name: &str, id: u16) -> Self {
        Self {
            name: name.to_string(),
            id: Some(id),
            ..Self::default()
        }
    }
}
