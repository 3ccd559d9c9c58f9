mod algebra;
mod core;
mod curve;
mod fillet_chamfer;
mod frames;
mod index;
mod par;
mod schedule;
mod sweep;
mod transform;

pub use algebra::{
    Mat3, VectorError, cross, dot, lerp, norm, normalize, normalize_with_tolerance, skew,
};
pub use self::core::{BBox, PathPoint, Point2, Point3, Tolerance, Transform, Vec3};
pub use curve::{
    CurveError, DEFAULT_SUBDIVISIONS, bezier_cubic, bezier_cubic_chain, bezier_quadratic,
    bezier_quadratic_chain, linear_cut, smooth_path, synthesize_control_points,
};
pub use fillet_chamfer::{
    CornerDiagnostics, CornerError, CornerRadius, CornerStyle, bezier_fillet, chamfer_path,
    corner_cuts, fillet_path, round_corner, round_corners, straight_chamfer,
};
pub use frames::{
    FrameError, FrameOptions, OrientationPolicy, ResolvedFrameOptions, RevolveOptions,
    bezier_frames, cut_frames, direct_frames, duplicated_frames, helix_frames, middle_frames,
    path_frames, placement, revolve_frames, simple_frames, symmetric_frames,
};
pub use index::{IndexError, IndexRange, Step, index_range};
pub use schedule::{Schedule, ScheduleError};
pub use sweep::{SweepError, duplicate, place_all, sweep, sweep_pairs};
pub use transform::{
    CenterFlags, ScaleSpec, align, align_with_tolerance, align_z, apply_many, apply_one, center,
    rotation_x, rotation_y, rotation_z, scaling, translation,
};

#[cfg(test)]
mod tests;
