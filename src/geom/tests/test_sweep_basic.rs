use crate::geom::{
    CenterFlags, Point3, SweepError, Transform, Vec3, direct_frames, duplicate, duplicated_frames,
    place_all, simple_frames, sweep, sweep_pairs, translation,
};
use crate::shape::{CsgNode, CsgTree, ShapeEngine, cuboid, sphere};

fn rail() -> Vec<Point3> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 10.0),
        Point3::new(10.0, 0.0, 10.0),
        Point3::new(10.0, 10.0, 10.0),
    ]
}

fn union_children(node: &CsgNode) -> &[CsgNode] {
    match node {
        CsgNode::Union(children) => children,
        other => panic!("expected a union, got {other:?}"),
    }
}

#[test]
fn sweep_pairs_chamfered_link_every_neighbour() {
    assert_eq!(
        sweep_pairs(5, true).expect("pairs"),
        vec![(0, 1), (1, 2), (2, 3), (3, 4)]
    );
}

#[test]
fn sweep_pairs_unchamfered_skip_corner_links() {
    assert_eq!(sweep_pairs(5, false).expect("pairs"), vec![(0, 1), (2, 3)]);
    assert_eq!(sweep_pairs(6, false).expect("pairs"), vec![(0, 1), (2, 3), (4, 5)]);
}

#[test]
fn sweep_pairs_need_two_frames() {
    assert_eq!(sweep_pairs(1, true), Err(SweepError::NotEnoughFrames { count: 1 }));
}

#[test]
fn sweep_hulls_consecutive_frames() {
    let engine = CsgTree;
    let template = sphere(&engine, 1.0);
    let frames = direct_frames(&rail()).expect("frames");
    let solid = sweep(&engine, &frames, &template, true).expect("sweep");

    assert_eq!(solid.hull_count(), frames.len() - 1);
    assert_eq!(union_children(&solid).len(), frames.len() - 1);
}

#[test]
fn duplicated_frames_without_chamfer_hull_each_edge_once() {
    let engine = CsgTree;
    let template = sphere(&engine, 1.0);
    let path = rail();
    let frames = duplicated_frames(&path).expect("frames");
    let solid = sweep(&engine, &frames, &template, false).expect("sweep");
    assert_eq!(solid.hull_count(), path.len() - 1);
}

#[test]
fn swept_box_spans_the_rail() {
    let engine = CsgTree;
    let template = cuboid(&engine, Vec3::new(2.0, 2.0, 0.5), CenterFlags::XY);
    let path = [Point3::ORIGIN, Point3::new(0.0, 0.0, 10.0)];
    let frames = simple_frames(&path).expect("frames");
    let bounds = sweep(&engine, &frames, &template, true)
        .expect("sweep")
        .bounds()
        .expect("non-empty");
    assert_eq!(bounds.min, Point3::new(-1.0, -1.0, 0.0));
    assert_eq!(bounds.max, Point3::new(1.0, 1.0, 10.5));
}

#[test]
fn duplicate_places_one_instance_per_frame() {
    let engine = CsgTree;
    let template = sphere(&engine, 0.5);
    let frames: Vec<Transform> = (0..4)
        .map(|i| translation(Vec3::new(f64::from(i) * 3.0, 0.0, 0.0)))
        .collect();
    let solid = duplicate(&engine, &frames, &template).expect("duplicate");

    let children = union_children(&solid);
    assert_eq!(children.len(), 4);
    assert_eq!(solid.hull_count(), 0);
    let last = children[3].bounds().expect("non-empty");
    assert_eq!(last.center(), Point3::new(9.0, 0.0, 0.0));
}

#[test]
fn place_all_keeps_frame_order() {
    let engine = CsgTree;
    let template = engine.primitive(&crate::shape::Primitive::Sphere { radius: 1.0 });
    let frames = [translation(Vec3::new(0.0, 0.0, 5.0)), Transform::identity()];
    let placed = place_all(&engine, &frames, &template);
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0], CsgNode::Transform(frames[0], Box::new(template.clone())));
    assert_eq!(placed[1], CsgNode::Transform(frames[1], Box::new(template)));
}

#[test]
fn empty_inputs_are_rejected() {
    let engine = CsgTree;
    let template = sphere(&engine, 1.0);
    assert_eq!(duplicate(&engine, &[], &template), Err(SweepError::EmptyFrames));
    assert_eq!(
        sweep(&engine, &[Transform::identity()], &template, true),
        Err(SweepError::NotEnoughFrames { count: 1 })
    );
}
