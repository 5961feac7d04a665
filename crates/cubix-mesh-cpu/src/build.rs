use cubix_blocks::{MAX_LIGHT_LEVEL, MaterialRegistry};
use cubix_chunk::{Chunk, ChunkTable, SplitMesh};
use cubix_geom::Vec3;
use cubix_world::{CHUNK_SPLITS, CHUNK_WIDTH, ChunkCoord, LocalPos, RENDER_SPLIT_HEIGHT, step};

use crate::atlas::AtlasLayout;
use crate::emit::emit_face;
use crate::face::Face;
use crate::neighbors::NeighborChunks;

/// Light of the cell across `face` when that face is visible, `None` when it is hidden.
///
/// Inside the chunk a face is visible iff the neighbor is air. The world floor and ceiling
/// are always visible. Across an X/Z border the neighbor chunk decides; a missing neighbor
/// hides the face.
#[inline]
fn exposed_light(
    chunk: &Chunk,
    neighbors: &NeighborChunks<'_>,
    p: LocalPos,
    face: Face,
) -> Option<u8> {
    let (dx, dy, dz) = face.delta();
    match step(chunk.coord(), p, dx, dy, dz) {
        None => Some(chunk.effective_light(p)),
        Some((nc, np)) if nc == chunk.coord() => {
            chunk.is_air(np).then(|| chunk.effective_light(np))
        }
        Some((_, np)) => {
            let other = neighbors.toward(face)?;
            other.is_air(np).then(|| other.effective_light(np))
        }
    }
}

/// Rebuilds the mesh of one render split into `out`, which is cleared first. Returns the
/// number of faces emitted, or `None` when the chunk is not resident.
pub fn build_split_mesh_into(
    out: &mut SplitMesh,
    table: &ChunkTable,
    coord: ChunkCoord,
    split: usize,
    registry: &MaterialRegistry,
    atlas: AtlasLayout,
) -> Option<usize> {
    debug_assert!(split < CHUNK_SPLITS, "split {split} out of range");
    let chunk = table.get(coord)?;
    let neighbors = NeighborChunks::of(table, coord);
    out.clear_keep_capacity();

    let y0 = split * RENDER_SPLIT_HEIGHT;
    let mut faces = 0usize;
    for y in y0..y0 + RENDER_SPLIT_HEIGHT {
        for z in 0..CHUNK_WIDTH {
            for x in 0..CHUNK_WIDTH {
                let p = LocalPos::new(x, y, z);
                let voxel = chunk.voxel(p);
                if voxel.is_air() {
                    continue;
                }
                let origin = Vec3::from_cell(x, y, z);
                for face in Face::ALL {
                    let Some(light) = exposed_light(chunk, &neighbors, p, face) else {
                        continue;
                    };
                    let material = registry.face_material(voxel.material(), face.role());
                    let shade = f32::from(light) / f32::from(MAX_LIGHT_LEVEL);
                    emit_face(out, atlas, face, origin, material, shade);
                    faces += 1;
                }
            }
        }
    }
    log::trace!(
        "meshed split {} of ({}, {}): {} faces, neighbors complete: {}",
        split,
        coord.cx,
        coord.cz,
        faces,
        neighbors.all_loaded()
    );
    Some(faces)
}

pub fn build_split_mesh(
    table: &ChunkTable,
    coord: ChunkCoord,
    split: usize,
    registry: &MaterialRegistry,
    atlas: AtlasLayout,
) -> Option<SplitMesh> {
    let mut mesh = SplitMesh::new();
    build_split_mesh_into(&mut mesh, table, coord, split, registry, atlas)?;
    Some(mesh)
}
