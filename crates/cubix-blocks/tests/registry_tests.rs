use cubix_blocks::registry::builtin;
use cubix_blocks::{FaceRole, MAX_LIGHT_LEVEL, MaterialId, MaterialRegistry};

#[test]
fn builtin_grass_uses_distinct_side_and_dirt_bottom() {
    let reg = MaterialRegistry::builtin();
    assert_eq!(reg.face_material(builtin::GRASS, FaceRole::Top), builtin::GRASS);
    assert_eq!(reg.face_material(builtin::GRASS, FaceRole::Side), builtin::GRASS_SIDE);
    assert_eq!(reg.face_material(builtin::GRASS, FaceRole::Bottom), builtin::DIRT);
    // Everything else draws as itself on all faces.
    for role in [FaceRole::Top, FaceRole::Side, FaceRole::Bottom] {
        assert_eq!(reg.face_material(builtin::STONE, role), builtin::STONE);
    }
}

#[test]
fn builtin_names_resolve_and_glowstone_emits() {
    let reg = MaterialRegistry::builtin();
    assert_eq!(reg.id_by_name("air"), Some(MaterialId::AIR));
    assert_eq!(reg.id_by_name("bedrock"), Some(builtin::BEDROCK));
    assert_eq!(reg.emission(builtin::GLOWSTONE), MAX_LIGHT_LEVEL);
    assert_eq!(reg.emission(builtin::STONE), 0);
    assert_eq!(reg.len(), 8);
}

#[test]
fn toml_assigns_free_ids_and_inserts_air() {
    let reg = MaterialRegistry::from_toml_str(
        r#"
        [[materials]]
        name = "dirt"
        id = 2

        [[materials]]
        name = "grass"
        side = "grass_side"
        bottom = "dirt"

        [[materials]]
        name = "grass_side"

        [[materials]]
        name = "lamp"
        emission = 12
    "#,
    )
    .unwrap();
    assert_eq!(reg.id_by_name("air"), Some(MaterialId::AIR));
    let grass = reg.id_by_name("grass").unwrap();
    let side = reg.id_by_name("grass_side").unwrap();
    let lamp = reg.id_by_name("lamp").unwrap();
    assert_eq!(grass, MaterialId(1));
    assert_eq!(side, MaterialId(3));
    assert_eq!(lamp, MaterialId(4));
    assert_eq!(reg.face_material(grass, FaceRole::Side), side);
    assert_eq!(reg.face_material(grass, FaceRole::Bottom), MaterialId(2));
    assert_eq!(reg.emission(lamp), 12);
}

#[test]
fn toml_rejects_bad_definitions() {
    let dup = MaterialRegistry::from_toml_str(
        r#"
        [[materials]]
        name = "a"
        id = 3
        [[materials]]
        name = "b"
        id = 3
    "#,
    );
    assert!(dup.is_err());

    let too_big = MaterialRegistry::from_toml_str(
        r#"
        [[materials]]
        name = "a"
        id = 1024
    "#,
    );
    assert!(too_big.is_err());

    let dangling = MaterialRegistry::from_toml_str(
        r#"
        [[materials]]
        name = "a"
        top = "missing"
    "#,
    );
    assert!(dangling.is_err());

    let bright = MaterialRegistry::from_toml_str(
        r#"
        [[materials]]
        name = "sun"
        emission = 16
    "#,
    );
    assert!(bright.is_err());
}

#[test]
fn unregistered_ids_draw_as_themselves() {
    let reg = MaterialRegistry::builtin();
    assert!(!reg.contains(MaterialId(500)));
    assert_eq!(reg.face_material(MaterialId(500), FaceRole::Top), MaterialId(500));
    assert_eq!(reg.emission(MaterialId(500)), 0);
}

#[test]
fn shipped_materials_file_matches_builtin_set() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/materials.toml");
    let from_file = MaterialRegistry::from_path(path).unwrap();
    let builtin = MaterialRegistry::builtin();
    assert_eq!(from_file.len(), builtin.len());
    for def in builtin.iter() {
        assert_eq!(from_file.get(def.id), Some(def));
    }
}
