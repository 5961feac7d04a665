use cubix_blocks::MaterialId;
use cubix_edit::{EditError, EditRequest};
use cubix_world::ChunkCoord;

#[test]
fn parses_add_and_remove() {
    assert_eq!(
        "add:0,10,-3,7".parse::<EditRequest>(),
        Ok(EditRequest::Add {
            x: 0,
            y: 10,
            z: -3,
            material: MaterialId(7)
        })
    );
    let r: EditRequest = "remove: 4, 5, 6".parse().unwrap();
    assert_eq!(r, EditRequest::Remove { x: 4, y: 5, z: 6 });
    assert_eq!(r.position(), (4, 5, 6));
    assert_eq!(r.to_string(), "remove:4,5,6");
}

#[test]
fn rejects_malformed_requests() {
    assert!("add:1,2,3".parse::<EditRequest>().is_err());
    assert!("remove:1,2".parse::<EditRequest>().is_err());
    assert!("paint:1,2,3".parse::<EditRequest>().is_err());
    assert!("add:1,2,3,-1".parse::<EditRequest>().is_err());
    assert!("add:1,x,3,1".parse::<EditRequest>().is_err());
    assert!("1,2,3".parse::<EditRequest>().is_err());
}

#[test]
fn errors_describe_the_problem() {
    let e = EditError::ChunkNotLoaded(ChunkCoord::new(-3, 2));
    assert_eq!(e.to_string(), "chunk (-3, 2) is not loaded");
    let e: Box<dyn std::error::Error> = Box::new(EditError::InvalidMaterial(MaterialId(2000)));
    assert!(e.to_string().contains("2000"));
}
