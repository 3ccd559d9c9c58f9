use crate::geom::{
    FrameError, Point3, RevolveOptions, Schedule, Tolerance, Transform, Vec3, helix_frames,
    revolve_frames, rotation_x, symmetric_frames, translation,
};

fn assert_point_close(actual: Point3, expected: Point3) {
    assert!(
        Tolerance::LOOSE.approx_eq_point3(actual, expected),
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn revolve_quarter_steps_visit_each_axis() {
    let frames = revolve_frames(&RevolveOptions {
        steps: 4,
        radius: 5.0,
        ..RevolveOptions::default()
    })
    .expect("revolve");
    assert_eq!(frames.len(), 5);

    let positions: Vec<Point3> = frames.iter().map(|f| f.apply_point(Point3::ORIGIN)).collect();
    assert_point_close(positions[0], Point3::new(5.0, 0.0, 0.0));
    assert_point_close(positions[1], Point3::new(0.0, 5.0, 0.0));
    assert_point_close(positions[2], Point3::new(-5.0, 0.0, 0.0));
    assert_point_close(positions[3], Point3::new(0.0, -5.0, 0.0));
    assert_point_close(positions[4], Point3::new(5.0, 0.0, 0.0));
    assert!(Tolerance::LOOSE.approx_eq_transform(&frames[4], &frames[0]));
}

#[test]
fn revolve_applies_base_before_rotation() {
    // Profile laid flat in XZ, swept about Z.
    let frames = revolve_frames(&RevolveOptions {
        angle: 90.0,
        steps: 1,
        radius: 2.0,
        base: rotation_x(90.0),
        ..RevolveOptions::default()
    })
    .expect("revolve");
    assert_eq!(frames.len(), 2);
    let tip = frames[1].apply_point(Point3::new(0.0, 1.0, 0.0));
    assert_point_close(tip, Point3::new(0.0, 2.0, 1.0));
}

#[test]
fn revolve_scale_schedule_interpolates() {
    let frames = revolve_frames(&RevolveOptions {
        steps: 2,
        scale: Some(Schedule::from(vec![1.0, 2.0])),
        ..RevolveOptions::default()
    })
    .expect("revolve");
    let length = |frame: &Transform| frame.apply_vec(Vec3::Z).length();
    assert!((length(&frames[0]) - 1.0).abs() < 1e-12);
    assert!((length(&frames[1]) - 1.5).abs() < 1e-12);
    assert!((length(&frames[2]) - 2.0).abs() < 1e-12);
}

#[test]
fn symmetric_frames_mirror_through_z_axis() {
    let frames = symmetric_frames(translation(Vec3::new(1.0, 0.0, 3.0))).expect("symmetric");
    assert_eq!(frames.len(), 2);
    assert_point_close(frames[0].apply_point(Point3::ORIGIN), Point3::new(1.0, 0.0, 3.0));
    assert_point_close(frames[1].apply_point(Point3::ORIGIN), Point3::new(-1.0, 0.0, 3.0));
}

#[test]
fn helix_rises_by_pitch_per_turn() {
    let frames = helix_frames(2.0, 3.0, 2.0, 8, Transform::identity()).expect("helix");
    assert_eq!(frames.len(), 17);
    assert_point_close(frames[2].apply_point(Point3::ORIGIN), Point3::new(0.0, 2.0, 0.75));
    assert_point_close(frames[8].apply_point(Point3::ORIGIN), Point3::new(2.0, 0.0, 3.0));
    assert_point_close(frames[16].apply_point(Point3::ORIGIN), Point3::new(2.0, 0.0, 6.0));
}

#[test]
fn invalid_revolve_parameters_are_rejected() {
    assert_eq!(
        revolve_frames(&RevolveOptions {
            steps: 0,
            ..RevolveOptions::default()
        }),
        Err(FrameError::InvalidStepCount)
    );
    assert_eq!(
        revolve_frames(&RevolveOptions {
            angle: f64::INFINITY,
            ..RevolveOptions::default()
        }),
        Err(FrameError::NonFiniteRevolve)
    );
    assert_eq!(
        helix_frames(1.0, 1.0, 0.0, 8, Transform::identity()),
        Err(FrameError::NonFiniteRevolve)
    );
}

#[test]
fn oversized_step_counts_are_rejected() {
    assert_eq!(
        revolve_frames(&RevolveOptions {
            steps: usize::MAX,
            ..RevolveOptions::default()
        }),
        Err(FrameError::StepCountOutOfRange)
    );
    assert_eq!(
        helix_frames(1.0, 1.0, 1e300, 8, Transform::identity()),
        Err(FrameError::StepCountOutOfRange)
    );
}

#[test]
fn revolve_options_deserialize_with_defaults() {
    let options: RevolveOptions =
        serde_json::from_str(r#"{"steps":4,"radius":1.5}"#).expect("valid json");
    assert_eq!(options.steps, 4);
    assert!((options.angle - 360.0).abs() < f64::EPSILON);
    assert!((options.radius - 1.5).abs() < f64::EPSILON);
    assert_eq!(options.base, Transform::identity());
    assert_eq!(options.scale, None);
}

#[test]
fn revolve_scale_loads_from_numbers_and_vectors() {
    let options: RevolveOptions =
        serde_json::from_str(r#"{"steps":2,"scale":[1.0,[2.0,3.0,4.0]]}"#).expect("valid json");
    assert_eq!(
        options.scale,
        Some(Schedule::Sequence(vec![Vec3::ONE, Vec3::new(2.0, 3.0, 4.0)]))
    );

    let frames = revolve_frames(&options).expect("revolve");
    let tip = frames[2].apply_vec(Vec3::ONE);
    assert!(Tolerance::LOOSE.approx_eq_vec3(tip, Vec3::new(2.0, 3.0, 4.0)), "{tip:?}");
}
