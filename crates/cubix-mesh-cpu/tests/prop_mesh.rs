use std::collections::HashSet;

use cubix_blocks::MaterialRegistry;
use cubix_blocks::registry::builtin;
use cubix_chunk::ChunkTable;
use cubix_mesh_cpu::{AtlasLayout, build_split_mesh};
use cubix_world::{CHUNK_SPLITS, CHUNK_WIDTH, ChunkCoord, LocalPos, RENDER_SPLIT_HEIGHT};
use proptest::prelude::*;

// Voxels in splits 1 and 2 of a lone chunk, away from its X/Z border.
fn cell() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..CHUNK_WIDTH - 1, 16usize..48, 1usize..CHUNK_WIDTH - 1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn face_count_matches_exposed_neighbors(cells in prop::collection::vec(cell(), 0..120)) {
        let coord = ChunkCoord::new(3, -2);
        let mut table = ChunkTable::with_capacity(1);
        table.insert(coord).unwrap();
        let solid: HashSet<(usize, usize, usize)> = cells.into_iter().collect();
        for &(x, y, z) in &solid {
            table.get_mut(coord).unwrap().set_material(LocalPos::new(x, y, z), builtin::DIRT);
        }

        let mut expected = vec![0usize; CHUNK_SPLITS];
        for &(x, y, z) in &solid {
            let around = [
                (x + 1, y, z), (x - 1, y, z),
                (x, y + 1, z), (x, y - 1, z),
                (x, y, z + 1), (x, y, z - 1),
            ];
            expected[y / RENDER_SPLIT_HEIGHT] += around.iter().filter(|n| !solid.contains(*n)).count();
        }

        let reg = MaterialRegistry::builtin();
        for split in 0..CHUNK_SPLITS {
            let mesh = build_split_mesh(&table, coord, split, &reg, AtlasLayout::default()).unwrap();
            prop_assert_eq!(mesh.face_count(), expected[split], "split {}", split);
            prop_assert_eq!(mesh.vertices.len(), expected[split] * 4);
            prop_assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        }
    }
}
