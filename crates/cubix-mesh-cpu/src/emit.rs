use cubix_blocks::MaterialId;
use cubix_chunk::{SplitMesh, Vertex};
use cubix_geom::Vec3;

use crate::atlas::AtlasLayout;
use crate::face::Face;

/// Appends one unit quad for `face` of the voxel whose minimum corner is `origin`.
#[inline]
pub(crate) fn emit_face(
    mesh: &mut SplitMesh,
    atlas: AtlasLayout,
    face: Face,
    origin: Vec3,
    material: MaterialId,
    light: f32,
) {
    let base = mesh.vertices.len() as u32;
    let corners = face.corners();
    let uvs = face.corner_uvs();
    for i in 0..4 {
        mesh.vertices.push(Vertex {
            pos: (origin + corners[i]).to_array(),
            uv: atlas.uv(material, uvs[i]).to_array(),
            light,
        });
    }
    mesh.indices
        .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
}
