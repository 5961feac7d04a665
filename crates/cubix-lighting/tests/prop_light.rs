use cubix_blocks::MAX_LIGHT_LEVEL;
use cubix_blocks::registry::builtin;
use cubix_chunk::ChunkTable;
use cubix_lighting::propagate_block_light;
use cubix_world::{CHUNK_WIDTH, ChunkCoord, LocalPos};
use proptest::prelude::*;

const Y0: usize = 60;
const SPAN: usize = 12;

fn local() -> impl Strategy<Value = (usize, usize, usize)> {
    (0..CHUNK_WIDTH, Y0..Y0 + SPAN, 0..CHUNK_WIDTH)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn light_is_bounded_by_seed_minus_distance(
        stones in prop::collection::vec(local(), 0..300),
        seed in local(),
        level in 0u8..=MAX_LIGHT_LEVEL,
    ) {
        let mut table = ChunkTable::with_capacity(2);
        let a = ChunkCoord::new(0, 0);
        let b = ChunkCoord::new(1, 0);
        table.insert(a).unwrap();
        table.insert(b).unwrap();
        for (x, y, z) in stones {
            table.get_mut(a).unwrap().set_material(LocalPos::new(x, y, z), builtin::STONE);
        }
        let seed_pos = LocalPos::new(seed.0, seed.1, seed.2);
        let dirty = propagate_block_light(&mut table, a, seed_pos, level);
        prop_assert_eq!(dirty.iter().next(), Some((a, seed_pos.split_index())));

        for (coord, dx) in [(a, 0i32), (b, CHUNK_WIDTH as i32)] {
            let chunk = table.get(coord).unwrap();
            for y in Y0 - 16..Y0 + SPAN + 16 {
                for z in 0..CHUNK_WIDTH {
                    for x in 0..CHUNK_WIDTH {
                        let p = LocalPos::new(x, y, z);
                        let l = chunk.block_light(p);
                        prop_assert!(l <= MAX_LIGHT_LEVEL);
                        let dist = (x as i32 + dx - seed.0 as i32).abs()
                            + (y as i32 - seed.1 as i32).abs()
                            + (z as i32 - seed.2 as i32).abs();
                        prop_assert!(i32::from(l) <= (i32::from(level) - dist).max(0));
                        if l > 0 && (coord, p) != (a, seed_pos) {
                            prop_assert!(chunk.is_air(p));
                            prop_assert!(dirty.contains(coord, p.split_index()));
                        }
                    }
                }
            }
        }
    }
}
