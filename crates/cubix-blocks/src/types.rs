/// Brightest light level a voxel or light map cell can hold.
pub const MAX_LIGHT_LEVEL: u8 = 15;
/// Attenuation floor for block light propagation.
pub const MIN_LIGHT_LEVEL: u8 = 1;

// Packed voxel layout (u16):
// bits 0..10  material id
// bits 10..14 light level
// bit  14     flag A
// bit  15     flag B
const MATERIAL_BITS: u16 = 10;
const MATERIAL_MASK: u16 = (1 << MATERIAL_BITS) - 1;
const LIGHT_SHIFT: u16 = MATERIAL_BITS;
const LIGHT_MASK: u16 = 0x0F;
const FLAG_SHIFT: u16 = 14;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u16);

impl MaterialId {
    pub const AIR: MaterialId = MaterialId(0);
    /// Number of distinct ids representable in a voxel.
    pub const COUNT: usize = 1 << MATERIAL_BITS;

    #[inline]
    pub const fn fits_voxel(self) -> bool {
        self.0 <= MATERIAL_MASK
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which side of a cube a face belongs to, for per-face material selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceRole {
    Top,
    Bottom,
    Side,
}

/// The two reserved per-voxel flag bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoxelFlag {
    A,
    B,
}

impl VoxelFlag {
    #[inline]
    const fn bit(self) -> u16 {
        match self {
            VoxelFlag::A => 1 << FLAG_SHIFT,
            VoxelFlag::B => 1 << (FLAG_SHIFT + 1),
        }
    }
}

/// A single world cell: material, cached light level, and two spare flags.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Voxel(u16);

impl Voxel {
    pub const AIR: Voxel = Voxel(0);

    #[inline]
    pub fn new(material: MaterialId) -> Self {
        debug_assert!(material.fits_voxel(), "material id {} exceeds 10 bits", material.0);
        Voxel(material.0 & MATERIAL_MASK)
    }

    #[inline]
    pub fn material(self) -> MaterialId {
        MaterialId(self.0 & MATERIAL_MASK)
    }

    #[inline]
    pub fn set_material(&mut self, material: MaterialId) {
        debug_assert!(material.fits_voxel(), "material id {} exceeds 10 bits", material.0);
        self.0 = (self.0 & !MATERIAL_MASK) | (material.0 & MATERIAL_MASK);
    }

    #[inline]
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.set_material(material);
        self
    }

    #[inline]
    pub fn light(self) -> u8 {
        ((self.0 >> LIGHT_SHIFT) & LIGHT_MASK) as u8
    }

    /// Levels above `MAX_LIGHT_LEVEL` trip a debug assertion and clamp in release.
    #[inline]
    pub fn set_light(&mut self, level: u8) {
        debug_assert!(level <= MAX_LIGHT_LEVEL, "light level {level} exceeds max");
        let level = u16::from(level.min(MAX_LIGHT_LEVEL));
        self.0 = (self.0 & !(LIGHT_MASK << LIGHT_SHIFT)) | (level << LIGHT_SHIFT);
    }

    #[inline]
    pub fn flag(self, flag: VoxelFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: VoxelFlag, on: bool) {
        if on {
            self.0 |= flag.bit();
        } else {
            self.0 &= !flag.bit();
        }
    }

    /// Air is the only non-opaque material; it is skipped by the mesher and carries light.
    #[inline]
    pub fn is_air(self) -> bool {
        self.material() == MaterialId::AIR
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        !self.is_air()
    }
}

impl std::fmt::Debug for Voxel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Voxel")
            .field("material", &self.material().0)
            .field("light", &self.light())
            .field("a", &self.flag(VoxelFlag::A))
            .field("b", &self.flag(VoxelFlag::B))
            .finish()
    }
}
