use cubix_blocks::MaterialId;
use cubix_geom::Uv;

/// Square texture atlas with `columns` cells per row; material `m` lives at column
/// `m % columns`, row `m / columns`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasLayout {
    pub columns: u32,
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self { columns: 16 }
    }
}

impl AtlasLayout {
    pub fn new(columns: u32) -> Self {
        debug_assert!(columns > 0);
        Self {
            columns: columns.max(1),
        }
    }

    #[inline]
    pub fn cell(self, material: MaterialId) -> (u32, u32) {
        let m = u32::from(material.0);
        (m % self.columns, m / self.columns)
    }

    /// Atlas UV of `corner`, an offset inside the material's cell.
    #[inline]
    pub fn uv(self, material: MaterialId, corner: Uv) -> Uv {
        let (col, row) = self.cell(material);
        let n = self.columns as f32;
        Uv::new((corner.u + col as f32) / n, (corner.v + row as f32) / n)
    }
}
