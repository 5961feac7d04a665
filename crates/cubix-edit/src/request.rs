use std::fmt;
use std::str::FromStr;

use cubix_blocks::MaterialId;

/// A single voxel edit, written `add:x,y,z,material` or `remove:x,y,z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditRequest {
    Add {
        x: i32,
        y: i32,
        z: i32,
        material: MaterialId,
    },
    Remove {
        x: i32,
        y: i32,
        z: i32,
    },
}

impl EditRequest {
    pub fn position(&self) -> (i32, i32, i32) {
        match *self {
            EditRequest::Add { x, y, z, .. } | EditRequest::Remove { x, y, z } => (x, y, z),
        }
    }
}

fn parse_ints(s: &str) -> Result<Vec<i32>, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|e| format!("invalid number '{}': {e}", part.trim()))
        })
        .collect()
}

impl FromStr for EditRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, args) = s
            .split_once(':')
            .ok_or_else(|| format!("expected add:x,y,z,material or remove:x,y,z, got '{s}'"))?;
        let n = parse_ints(args)?;
        match (kind.trim(), n.as_slice()) {
            ("add", &[x, y, z, m]) => {
                let material = u16::try_from(m)
                    .map(MaterialId)
                    .map_err(|_| format!("material id {m} out of range"))?;
                Ok(EditRequest::Add { x, y, z, material })
            }
            ("remove", &[x, y, z]) => Ok(EditRequest::Remove { x, y, z }),
            ("add", _) => Err(format!("add takes x,y,z,material, got '{args}'")),
            ("remove", _) => Err(format!("remove takes x,y,z, got '{args}'")),
            (other, _) => Err(format!("unknown edit kind '{other}'")),
        }
    }
}

impl fmt::Display for EditRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditRequest::Add { x, y, z, material } => write!(f, "add:{x},{y},{z},{}", material.0),
            EditRequest::Remove { x, y, z } => write!(f, "remove:{x},{y},{z}"),
        }
    }
}
