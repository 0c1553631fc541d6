//! Projection of one measurement into 3D orientation geometry and its 2D
//! trace on the net.
//!
//! Every feature gets both representations: a solid showing the true
//! attitude intersecting the net sphere (3D view) and the trace a geologist
//! would plot on the flat net (2D view). Both are pure functions of
//! `(feature, radius, resolution, projection)` and reproduce bit for bit on
//! identical inputs.

use glam::{Quat, Vec3};
use std::f32::consts::TAU;

use super::angles::{deg_to_rad, wrap_degrees};
use super::net_grid::circle_points;
use super::orientation::{Feature, FeatureKind};
use crate::state::view::{overhead_height, ProjectionMode};

/// World radius of the marker disk drawn for a projected line.
pub const MARKER_RADIUS: f32 = 2.0;

/// True-orientation geometry shown in the 3D view.
#[derive(Clone, PartialEq, Debug)]
pub enum SolidGeometry {
    /// Disk outline of net radius at the plane's attitude.
    Disk(Vec<Vec3>),
    /// Center-to-rim segment at the line's attitude.
    Segment([Vec3; 2]),
}

/// Projected trace shown in the 2D view.
#[derive(Clone, PartialEq, Debug)]
pub enum TraceGeometry {
    /// Great-circle arc the plane cuts across the net.
    Arc(Vec<Vec3>),
    /// Marker disk at the line's projected position. `scale` compensates
    /// for the marker's depth below the overhead camera so its apparent
    /// size stays constant.
    Marker {
        center: Vec3,
        radius: f32,
        scale: f32,
    },
}

/// Both derived artifacts for one feature.
#[derive(Clone, PartialEq, Debug)]
pub struct ProjectedFeature {
    pub solid: SolidGeometry,
    pub trace: TraceGeometry,
}

/// Maps a feature to its 3D and 2D geometry under the selected projection.
pub fn project_feature(
    feature: &Feature,
    radius: f32,
    resolution: usize,
    projection: ProjectionMode,
) -> ProjectedFeature {
    if projection == ProjectionMode::EqualArea {
        log::warn!("equal-area projection is not implemented; using equal-angle geometry");
    }

    ProjectedFeature {
        solid: solid_geometry(feature, radius, resolution),
        trace: trace_geometry(feature, radius, resolution),
    }
}

/// Attitude rotation shared by the 3D path and the 2D line marker: yaw by
/// `-(strike + 90)` about the vertical axis, then pitch by `90 - dip` about
/// the rotated horizontal (strike) axis.
fn attitude_rotation(feature: &Feature) -> Quat {
    let azimuth = -(deg_to_rad(wrap_degrees(feature.strike() + 90.0)) as f32);
    let tilt = deg_to_rad(90.0 - feature.dip()) as f32;
    Quat::from_rotation_y(azimuth) * Quat::from_rotation_x(tilt)
}

/// Circle outline in the vertical XY plane, the rest attitude of a plane's
/// disk before rotation (a vertical plane striking north).
fn disk_points(radius: f32, resolution: usize) -> Vec<Vec3> {
    let step = TAU / resolution as f32;
    (0..resolution)
        .map(|i| {
            let theta = i as f32 * step;
            Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
        })
        .collect()
}

/// Reference segment for a line: net center to the lower rim.
fn reference_segment(radius: f32) -> Vec3 {
    Vec3::new(0.0, -radius, 0.0)
}

fn solid_geometry(feature: &Feature, radius: f32, resolution: usize) -> SolidGeometry {
    let rotation = attitude_rotation(feature);

    match feature.kind() {
        FeatureKind::Plane => SolidGeometry::Disk(
            disk_points(radius, resolution)
                .iter()
                .map(|p| rotation * *p)
                .collect(),
        ),
        FeatureKind::Line => {
            SolidGeometry::Segment([Vec3::ZERO, rotation * reference_segment(radius)])
        }
    }
}

fn trace_geometry(feature: &Feature, radius: f32, resolution: usize) -> TraceGeometry {
    match feature.kind() {
        FeatureKind::Plane => {
            // The 2D trace uses the unrotated strike: it projects the great
            // circle itself rather than its pole.
            let azimuth = -(deg_to_rad(wrap_degrees(feature.strike())) as f32);
            let tilt = deg_to_rad(feature.dip()) as f32;
            let rotation = Quat::from_rotation_y(azimuth) * Quat::from_rotation_x(-tilt);

            TraceGeometry::Arc(
                circle_points(radius, resolution, resolution / 2)
                    .iter()
                    .map(|p| rotation * *p)
                    .collect(),
            )
        }
        FeatureKind::Line => {
            let rotation = attitude_rotation(feature);
            let tip = rotation * reference_segment(radius);

            // Twice the center of the segment's axis-aligned bounding box.
            // A legacy derivation kept for visual compatibility with the
            // original output; for a center-to-rim segment it lands on the
            // rotated tip.
            let bounds_min = Vec3::ZERO.min(tip);
            let bounds_max = Vec3::ZERO.max(tip);
            let center = (bounds_min + bounds_max) / 2.0 * 2.0;

            let height = overhead_height(radius);
            let scale = (height - center.y) / height;

            TraceGeometry::Marker {
                center,
                radius: MARKER_RADIUS,
                scale,
            }
        }
    }
}
