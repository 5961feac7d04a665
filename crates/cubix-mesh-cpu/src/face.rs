use cubix_blocks::FaceRole;
use cubix_geom::{Uv, Vec3};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        let (x, y, z) = self.delta();
        Vec3::new(x as f32, y as f32, z as f32)
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Classifies the face into top/bottom/side role for material lookup.
    #[inline]
    pub fn role(self) -> FaceRole {
        match self {
            Face::PosY => FaceRole::Top,
            Face::NegY => FaceRole::Bottom,
            _ => FaceRole::Side,
        }
    }

    /// Unit-cube corners of this face. Triangles `(0, 2, 1)` and `(0, 3, 2)` wind
    /// counter-clockwise seen from outside.
    #[inline]
    pub fn corners(self) -> [Vec3; 4] {
        let c = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
        match self {
            Face::PosY => [c(0., 1., 0.), c(1., 1., 0.), c(1., 1., 1.), c(0., 1., 1.)],
            Face::NegY => [c(0., 0., 0.), c(0., 0., 1.), c(1., 0., 1.), c(1., 0., 0.)],
            Face::PosX => [c(1., 0., 0.), c(1., 0., 1.), c(1., 1., 1.), c(1., 1., 0.)],
            Face::NegX => [c(0., 0., 0.), c(0., 1., 0.), c(0., 1., 1.), c(0., 0., 1.)],
            Face::PosZ => [c(0., 0., 1.), c(0., 1., 1.), c(1., 1., 1.), c(1., 0., 1.)],
            Face::NegZ => [c(0., 0., 0.), c(1., 0., 0.), c(1., 1., 0.), c(0., 1., 0.)],
        }
    }

    /// Per-corner offsets inside one atlas cell; `v` grows downward on side faces.
    #[inline]
    pub fn corner_uvs(self) -> [Uv; 4] {
        let t = |u: f32, v: f32| Uv::new(u, v);
        match self {
            Face::PosY => [t(0., 0.), t(1., 0.), t(1., 1.), t(0., 1.)],
            Face::NegY => [t(0., 0.), t(0., 1.), t(1., 1.), t(1., 0.)],
            Face::PosX => [t(1., 1.), t(0., 1.), t(0., 0.), t(1., 0.)],
            Face::NegX => [t(0., 1.), t(0., 0.), t(1., 0.), t(1., 1.)],
            Face::PosZ => [t(0., 1.), t(0., 0.), t(1., 0.), t(1., 1.)],
            Face::NegZ => [t(1., 1.), t(0., 1.), t(0., 0.), t(1., 0.)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangles_face_outward() {
        for face in Face::ALL {
            let c = face.corners();
            for (a, b, d) in [(0, 2, 1), (0, 3, 2)] {
                let n = (c[b] - c[a]).cross(c[d] - c[a]);
                assert_eq!(n, face.normal(), "{face:?}");
            }
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for face in Face::ALL {
            let n = face.normal();
            let plane = if n.x + n.y + n.z > 0.0 { 1.0 } else { 0.0 };
            for c in face.corners() {
                assert_eq!(c.dot(n).abs(), plane, "{face:?}");
            }
        }
    }

    #[test]
    fn side_faces_put_the_texture_top_up() {
        for face in [Face::PosX, Face::NegX, Face::PosZ, Face::NegZ] {
            for (c, uv) in face.corners().into_iter().zip(face.corner_uvs()) {
                assert_eq!(uv.v, 1.0 - c.y, "{face:?}");
            }
        }
    }
}
