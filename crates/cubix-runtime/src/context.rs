use std::mem;
use std::time::Instant;

use cubix_blocks::{MaterialId, MaterialRegistry, Voxel};
use cubix_chunk::{
    Chunk, ChunkTable, ChunkTableError, SplitMesh, TerrainGenerator, terrain_from_config,
};
use cubix_edit::{EditBounds, EditError, EditOutcome, EditRequest, affected_splits};
use cubix_lighting::{
    DirtySplits, propagate_block_light, refill_opened_cell, seed_skylight, seed_skylight_all,
    seed_skylight_column,
};
use cubix_mesh_cpu::{AtlasLayout, build_split_mesh, build_split_mesh_into};
use cubix_world::{
    CHUNK_SPLITS, CHUNK_WIDTH, ChunkCoord, ChunkRegion, LocalPos, MAX_CHUNK_HEIGHT, WorldConfig,
    world_to_chunk, world_to_local,
};
use rayon::prelude::*;

use crate::RenderBackend;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub chunks: usize,
    pub table_capacity: usize,
    pub faces: usize,
    pub pending_uploads: usize,
}

/// Owns the loaded world and is its only writer.
pub struct WorldContext<B: RenderBackend> {
    config: WorldConfig,
    registry: MaterialRegistry,
    table: ChunkTable,
    region: ChunkRegion,
    bounds: EditBounds,
    terrain: Box<dyn TerrainGenerator>,
    atlas: AtlasLayout,
    backend: B,
}

impl<B: RenderBackend> WorldContext<B> {
    pub fn new(config: WorldConfig, registry: MaterialRegistry, backend: B) -> Self {
        let terrain = terrain_from_config(&config);
        let region = ChunkRegion::centered(config.radius);
        Self {
            table: ChunkTable::with_capacity(config.initial_table_capacity),
            bounds: EditBounds::for_region(&region),
            atlas: AtlasLayout::new(config.atlas_columns),
            region,
            terrain,
            registry,
            config,
            backend,
        }
    }

    /// Replaces the generator picked from the config. Affects chunks loaded afterwards.
    pub fn with_terrain(mut self, terrain: Box<dyn TerrainGenerator>) -> Self {
        self.terrain = terrain;
        self
    }

    /// Loads, generates, lights, meshes, and uploads every chunk of the region.
    pub fn init(&mut self) -> Result<(), ChunkTableError> {
        let t0 = Instant::now();
        for coord in self.region.iter() {
            self.table.insert(coord)?;
        }
        let terrain = self.terrain.as_ref();
        let chunks: Vec<&mut Chunk> = self.table.iter_mut().collect();
        chunks.into_par_iter().for_each(|c| terrain.fill(c));
        seed_skylight_all(&mut self.table);
        for coord in self.table.coords() {
            self.light_emitters(coord);
        }
        self.remesh_all();
        let uploaded = self.flush_uploads();
        let stats = self.stats();
        log::info!(
            "world ready: {} chunks ({} terrain), {} faces, {} splits uploaded in {:.1?}",
            stats.chunks,
            self.terrain.name(),
            stats.faces,
            uploaded,
            t0.elapsed()
        );
        Ok(())
    }

    /// Brings one chunk in and rebuilds the neighbors whose border faces it uncovers.
    pub fn load_chunk(&mut self, coord: ChunkCoord) -> Result<(), ChunkTableError> {
        let chunk = self.table.insert(coord)?;
        self.terrain.fill(chunk);
        seed_skylight(chunk);
        let lit = self.light_emitters(coord);
        let near = horizontal_neighbors(coord);
        self.remesh_chunk(coord);
        for n in near {
            self.remesh_chunk(n);
        }
        // Emitter light can reach diagonal chunks too.
        for (c, split) in lit.iter() {
            if c != coord && !near.contains(&c) {
                self.remesh_split(c, split);
            }
        }
        self.flush_uploads();
        log::debug!("loaded chunk ({}, {})", coord.cx, coord.cz);
        Ok(())
    }

    /// Releases the chunk's render handles, drops it, and reseals its neighbors' borders.
    pub fn unload_chunk(&mut self, coord: ChunkCoord) -> Result<Chunk, ChunkTableError> {
        if !self.table.contains(coord) {
            return Err(ChunkTableError::Missing(coord));
        }
        self.backend.release_chunk(coord);
        let chunk = self.table.remove(coord)?;
        for n in horizontal_neighbors(coord) {
            self.remesh_chunk(n);
        }
        self.flush_uploads();
        log::debug!("unloaded chunk ({}, {})", coord.cx, coord.cz);
        Ok(chunk)
    }

    fn light_emitters(&mut self, coord: ChunkCoord) -> DirtySplits {
        let mut seeds = Vec::new();
        if let Some(chunk) = self.table.get(coord) {
            for y in 0..MAX_CHUNK_HEIGHT {
                for z in 0..CHUNK_WIDTH {
                    for x in 0..CHUNK_WIDTH {
                        let p = LocalPos::new(x, y, z);
                        let emission = self.registry.emission(chunk.material(p));
                        if emission > 0 {
                            seeds.push((p, emission));
                        }
                    }
                }
            }
        }
        let mut dirty = DirtySplits::new();
        for (p, level) in seeds {
            dirty.extend(propagate_block_light(&mut self.table, coord, p, level));
        }
        dirty
    }

    /// Rebuilds one split and marks it for upload. Returns false when the chunk is absent.
    pub fn remesh_split(&mut self, coord: ChunkCoord, split: usize) -> bool {
        let Some(chunk) = self.table.get_mut(coord) else {
            return false;
        };
        let mut mesh = mem::take(&mut chunk.split_mut(split).mesh);
        let built = build_split_mesh_into(
            &mut mesh,
            &self.table,
            coord,
            split,
            &self.registry,
            self.atlas,
        );
        match (built, self.table.get_mut(coord)) {
            (Some(faces), Some(chunk)) => {
                log::debug!("remeshed ({}, {}) split {split}: {faces} faces", coord.cx, coord.cz);
                chunk.split_mut(split).set_mesh(mesh);
                true
            }
            _ => false,
        }
    }

    pub fn remesh_chunk(&mut self, coord: ChunkCoord) -> bool {
        if !self.table.contains(coord) {
            return false;
        }
        for split in 0..CHUNK_SPLITS {
            self.remesh_split(coord, split);
        }
        true
    }

    /// Rebuilds every split of every resident chunk. Meshes are built in parallel against a
    /// shared view of the table when enabled and committed afterwards.
    pub fn remesh_all(&mut self) {
        let jobs: Vec<(ChunkCoord, usize)> = self
            .table
            .coords()
            .into_iter()
            .flat_map(|c| (0..CHUNK_SPLITS).map(move |s| (c, s)))
            .collect();
        if !self.config.parallel_meshing {
            for (coord, split) in jobs {
                self.remesh_split(coord, split);
            }
            return;
        }
        let (table, registry, atlas) = (&self.table, &self.registry, self.atlas);
        let built: Vec<(ChunkCoord, usize, SplitMesh)> = jobs
            .into_par_iter()
            .filter_map(|(coord, split)| {
                build_split_mesh(table, coord, split, registry, atlas).map(|m| (coord, split, m))
            })
            .collect();
        let n = built.len();
        for (coord, split, mesh) in built {
            if let Some(chunk) = self.table.get_mut(coord) {
                chunk.split_mut(split).set_mesh(mesh);
            }
        }
        log::debug!("meshed {n} splits in parallel");
    }

    /// Hands every pending split to the backend. Empty splits are released instead.
    pub fn flush_uploads(&mut self) -> usize {
        let mut sent = 0;
        for coord in self.table.coords() {
            let Some(chunk) = self.table.get_mut(coord) else {
                continue;
            };
            for split in 0..CHUNK_SPLITS {
                let rs = chunk.split_mut(split);
                if !rs.pending_upload {
                    continue;
                }
                let mesh = rs.take_mesh();
                if mesh.is_empty() {
                    self.backend.release_split(coord, split);
                } else {
                    self.backend.upload_split(coord, split, mesh);
                    sent += 1;
                }
            }
        }
        sent
    }

    pub fn add_voxel(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        material: MaterialId,
    ) -> Result<EditOutcome, EditError> {
        let (coord, pos) = self.bounds.check(x, y, z)?;
        if !material.fits_voxel() || !self.registry.contains(material) {
            log::warn!("edit at ({x}, {y}, {z}) rejected: unknown material {}", material.0);
            return Err(EditError::InvalidMaterial(material));
        }
        self.apply_edit(coord, pos, material)
    }

    pub fn remove_voxel(&mut self, x: i32, y: i32, z: i32) -> Result<EditOutcome, EditError> {
        let (coord, pos) = self.bounds.check(x, y, z)?;
        self.apply_edit(coord, pos, MaterialId::AIR)
    }

    pub fn apply(&mut self, request: EditRequest) -> Result<EditOutcome, EditError> {
        match request {
            EditRequest::Add { x, y, z, material } => self.add_voxel(x, y, z, material),
            EditRequest::Remove { x, y, z } => self.remove_voxel(x, y, z),
        }
    }

    fn apply_edit(
        &mut self,
        coord: ChunkCoord,
        pos: LocalPos,
        material: MaterialId,
    ) -> Result<EditOutcome, EditError> {
        let Some(chunk) = self.table.get_mut(coord) else {
            log::warn!("edit rejected: chunk ({}, {}) is not loaded", coord.cx, coord.cz);
            return Err(EditError::ChunkNotLoaded(coord));
        };
        let previous = chunk.set_material(pos, material);
        let mut dirty = DirtySplits::new();
        for (c, s) in affected_splits(coord, pos) {
            dirty.mark(c, s);
        }
        dirty.extend(seed_skylight_column(chunk, pos.x, pos.z));
        let emission = self.registry.emission(material);
        if emission > 0 {
            dirty.extend(propagate_block_light(&mut self.table, coord, pos, emission));
        } else if material == MaterialId::AIR {
            dirty.extend(refill_opened_cell(&mut self.table, coord, pos));
        }
        let regenerated = self.regenerate(dirty);
        log::debug!(
            "voxel {:?} in ({}, {}) set to {}; {} splits rebuilt",
            pos,
            coord.cx,
            coord.cz,
            material.0,
            regenerated.len()
        );
        Ok(EditOutcome {
            chunk: coord,
            pos,
            previous,
            regenerated,
        })
    }

    fn regenerate(&mut self, dirty: DirtySplits) -> Vec<(ChunkCoord, usize)> {
        let mut out = Vec::with_capacity(dirty.len());
        for (coord, split) in dirty.iter() {
            if self.remesh_split(coord, split) {
                out.push((coord, split));
            }
        }
        self.flush_uploads();
        out
    }

    /// Seeds block light at a world voxel and rebuilds every split it reached.
    pub fn set_block_light(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        level: u8,
    ) -> Result<Vec<(ChunkCoord, usize)>, EditError> {
        let pos = world_to_local(x, y, z).ok_or(EditError::OutOfBounds { x, y, z })?;
        let coord = world_to_chunk(x, z);
        if !self.table.contains(coord) {
            log::warn!("light at ({x}, {y}, {z}) rejected: chunk not loaded");
            return Err(EditError::ChunkNotLoaded(coord));
        }
        let dirty = propagate_block_light(&mut self.table, coord, pos, level);
        Ok(self.regenerate(dirty))
    }

    pub fn voxel_at(&self, x: i32, y: i32, z: i32) -> Option<Voxel> {
        let pos = world_to_local(x, y, z)?;
        self.table.get(world_to_chunk(x, z)).map(|c| c.voxel(pos))
    }

    /// Releases every chunk's render handles and drops all chunks.
    pub fn shutdown(&mut self) {
        let coords = self.table.coords();
        for &coord in &coords {
            self.backend.release_chunk(coord);
        }
        let dropped = self.table.drain().len();
        log::info!("world shut down: {dropped} chunks released");
    }

    pub fn stats(&self) -> WorldStats {
        let mut faces = 0;
        let mut pending = 0;
        self.table.for_each(|c| {
            faces += c.face_count();
            pending += c.splits().filter(|s| s.pending_upload).count();
        });
        WorldStats {
            chunks: self.table.len(),
            table_capacity: self.table.capacity(),
            faces,
            pending_uploads: pending,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn registry(&self) -> &MaterialRegistry {
        &self.registry
    }

    pub fn table(&self) -> &ChunkTable {
        &self.table
    }

    pub fn region(&self) -> ChunkRegion {
        self.region
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

fn horizontal_neighbors(coord: ChunkCoord) -> [ChunkCoord; 4] {
    [
        coord.offset(-1, 0),
        coord.offset(1, 0),
        coord.offset(0, -1),
        coord.offset(0, 1),
    ]
}
