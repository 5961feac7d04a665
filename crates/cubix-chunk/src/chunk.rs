use std::mem;

use cubix_blocks::{MaterialId, Voxel};
use cubix_world::{
    CHUNK_SPLITS, CHUNK_VOLUME, CHUNK_WIDTH, ChunkCoord, LocalPos, MAX_CHUNK_HEIGHT, voxel_index,
};

use crate::{LightMap, SplitMesh};

/// One vertical slice of a chunk: its mesh, counts, and light.
#[derive(Clone, Debug, Default)]
pub struct RenderSplit {
    pub mesh: SplitMesh,
    /// Counts of the last built mesh; they survive [`RenderSplit::take_mesh`].
    pub vertex_count: usize,
    pub index_count: usize,
    pub light: LightMap,
    pub pending_upload: bool,
}

impl RenderSplit {
    /// Installs a freshly built mesh and marks the split for upload.
    pub fn set_mesh(&mut self, mesh: SplitMesh) {
        self.vertex_count = mesh.vertices.len();
        self.index_count = mesh.indices.len();
        self.mesh = mesh;
        self.pending_upload = true;
    }

    /// Hands the buffers over; the split keeps its counts and an empty mesh.
    pub fn take_mesh(&mut self) -> SplitMesh {
        self.pending_upload = false;
        mem::take(&mut self.mesh)
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.index_count / 6
    }
}

#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    voxels: Vec<Voxel>,
    splits: Vec<RenderSplit>,
}

impl Chunk {
    /// All air, all light zero.
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            voxels: vec![Voxel::AIR; CHUNK_VOLUME],
            splits: (0..CHUNK_SPLITS).map(|_| RenderSplit::default()).collect(),
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn voxel(&self, p: LocalPos) -> Voxel {
        self.voxels[voxel_index(p)]
    }

    #[inline]
    pub fn material(&self, p: LocalPos) -> MaterialId {
        self.voxel(p).material()
    }

    #[inline]
    pub fn is_air(&self, p: LocalPos) -> bool {
        self.voxel(p).is_air()
    }

    /// Replaces the material at `p`, keeping light and flag bits. Returns the previous voxel.
    pub fn set_material(&mut self, p: LocalPos, material: MaterialId) -> Voxel {
        let v = &mut self.voxels[voxel_index(p)];
        let prev = *v;
        v.set_material(material);
        prev
    }

    #[inline]
    pub fn contains_world(&self, wx: i32, wy: i32, wz: i32) -> bool {
        let (ox, oz) = self.coord.origin();
        let w = CHUNK_WIDTH as i32;
        wy >= 0
            && wy < MAX_CHUNK_HEIGHT as i32
            && wx >= ox
            && wx < ox + w
            && wz >= oz
            && wz < oz + w
    }

    pub fn voxel_world(&self, wx: i32, wy: i32, wz: i32) -> Option<Voxel> {
        if !self.contains_world(wx, wy, wz) {
            return None;
        }
        let (ox, oz) = self.coord.origin();
        Some(self.voxel(LocalPos::new(
            (wx - ox) as usize,
            wy as usize,
            (wz - oz) as usize,
        )))
    }

    #[inline]
    pub fn block_light(&self, p: LocalPos) -> u8 {
        let (split, sp) = p.to_split();
        self.splits[split].light.block(sp)
    }

    #[inline]
    pub fn global_light(&self, p: LocalPos) -> u8 {
        let (split, sp) = p.to_split();
        self.splits[split].light.global(sp)
    }

    #[inline]
    pub fn effective_light(&self, p: LocalPos) -> u8 {
        let (split, sp) = p.to_split();
        self.splits[split].light.effective(sp)
    }

    pub fn set_block_light(&mut self, p: LocalPos, level: u8) {
        let (split, sp) = p.to_split();
        let light = &mut self.splits[split].light;
        light.set_block(sp, level);
        let effective = light.effective(sp);
        self.voxels[voxel_index(p)].set_light(effective);
    }

    pub fn set_global_light(&mut self, p: LocalPos, level: u8) {
        let (split, sp) = p.to_split();
        let light = &mut self.splits[split].light;
        light.set_global(sp, level);
        let effective = light.effective(sp);
        self.voxels[voxel_index(p)].set_light(effective);
    }

    #[inline]
    pub fn split(&self, index: usize) -> &RenderSplit {
        &self.splits[index]
    }

    #[inline]
    pub fn split_mut(&mut self, index: usize) -> &mut RenderSplit {
        &mut self.splits[index]
    }

    pub fn splits(&self) -> impl Iterator<Item = &RenderSplit> {
        self.splits.iter()
    }

    pub fn face_count(&self) -> usize {
        self.splits.iter().map(RenderSplit::face_count).sum()
    }

    pub fn is_all_air(&self) -> bool {
        self.voxels.iter().all(|v| v.is_air())
    }
}
