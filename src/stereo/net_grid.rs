//! Static stereonet reference grid.
//!
//! Builds the overlay the net is drawn against: the primitive (equatorial)
//! great circle, a fan of meridian great-circle arcs at 2 degree spacing,
//! and a fan of parallel small circles. The grid is independent of any
//! measured data and is built exactly once per session.
//!
//! Coordinates are right-handed with +Y as the net's vertical axis; the net
//! itself lies in the XZ plane.

use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

use super::angles::deg_to_rad;

/// Default net radius in world units.
pub const DEFAULT_RADIUS: f32 = 90.0;

/// Default number of samples around a full circle.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Default fan parameter; a fan of `5 * (1 + semi_count)` arcs covers the
/// net at 2 degree increments.
pub const DEFAULT_SEMI_COUNT: usize = 17;

/// Stroke weight of a grid arc.
///
/// Arcs at multiples of 10 degrees are drawn heavier than the 2 degree
/// intermediate arcs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StrokeWeight {
    Major,
    Minor,
}

/// One polyline of the grid with its stroke weight.
#[derive(Clone, PartialEq, Debug)]
pub struct GridArc {
    pub points: Vec<Vec3>,
    pub weight: StrokeWeight,
}

/// The full reference grid: immutable, shared, read-only geometry.
#[derive(Clone, PartialEq, Debug)]
pub struct NetGrid {
    pub radius: f32,
    /// Bounding circle of the net, in the horizontal plane.
    pub primitive: Vec<Vec3>,
    /// 90 great-circle half arcs at 2 degree spacing.
    pub meridians: Vec<GridArc>,
    /// 90 small circles stacked along the net's polar axis.
    pub parallels: Vec<GridArc>,
}

/// Samples `count` points of a circle of the given radius in the horizontal
/// plane, stepping at `TAU / resolution` per sample. `count == resolution`
/// yields the full circle, `count == resolution / 2` a half circle.
pub(crate) fn circle_points(radius: f32, resolution: usize, count: usize) -> Vec<Vec3> {
    let step = TAU / resolution as f32;
    (0..count)
        .map(|i| {
            let theta = i as f32 * step;
            Vec3::new(radius * theta.sin(), 0.0, -radius * theta.cos())
        })
        .collect()
}

impl NetGrid {
    /// Builds the grid for the given radius and angular resolution.
    ///
    /// Deterministic: identical inputs always produce identical point sets.
    pub fn build(radius: f32, resolution: usize, semi_count: usize) -> NetGrid {
        let primitive = circle_points(radius, resolution, resolution);
        let meridians = build_meridians(radius, resolution, semi_count);
        let parallels = build_parallels(radius, resolution, semi_count);

        log::debug!(
            "Built net grid: radius {}, {} meridians, {} parallels",
            radius,
            meridians.len(),
            parallels.len()
        );

        NetGrid {
            radius,
            primitive,
            meridians,
            parallels,
        }
    }

    #[allow(dead_code)] // Convenience constructor, used by tests
    pub fn with_defaults() -> NetGrid {
        NetGrid::build(DEFAULT_RADIUS, DEFAULT_RESOLUTION, DEFAULT_SEMI_COUNT)
    }
}

/// Weight rule shared by both fans: every fifth arc marks a 10 degree
/// interval.
fn fan_weight(x: usize) -> StrokeWeight {
    if x == 0 {
        StrokeWeight::Major
    } else {
        StrokeWeight::Minor
    }
}

/// Half circles rotated about the net's polar (world Z) axis, producing
/// great-circle arcs pole to pole at `2x + 10i` degrees.
fn build_meridians(radius: f32, resolution: usize, semi_count: usize) -> Vec<GridArc> {
    let mut arcs = Vec::with_capacity(5 * (1 + semi_count));

    for i in 0..=semi_count {
        for x in 0..5 {
            let angle = deg_to_rad((2 * x + 10 * i) as f64) as f32;
            let rotation = Quat::from_rotation_z(-angle);

            let points = circle_points(radius, resolution, resolution / 2)
                .iter()
                .map(|p| rotation * *p)
                .collect();

            arcs.push(GridArc {
                points,
                weight: fan_weight(x),
            });
        }
    }

    arcs
}

/// Small circles perpendicular to the polar axis.
///
/// For index `a = 5i + x` with `total = 5 * (1 + semi_count)`, the offset
/// along the axis is `r2 = radius * (1 - |a - total/2| / (total/2))` and the
/// circle radius is `sqrt(radius^2 - r2^2)`, so offsets are linear in `a`.
/// Each half circle is built in the horizontal plane, stood up by two fixed
/// 90 degree local rotations, then shifted along its local Y by `-r2` on the
/// near side of the fan and `+r2` on the far side.
fn build_parallels(radius: f32, resolution: usize, semi_count: usize) -> Vec<GridArc> {
    let total = (5 * (1 + semi_count)) as f32;
    let orientation = Quat::from_rotation_z(-FRAC_PI_2) * Quat::from_rotation_x(FRAC_PI_2);

    let mut arcs = Vec::with_capacity(5 * (1 + semi_count));

    for i in 0..=semi_count {
        for x in 0..5 {
            let a = (i * 5 + x) as f32;
            let r2 = radius * (1.0 - (a - total / 2.0).abs() / (total / 2.0));
            let r = (radius * radius - r2 * r2).sqrt();

            let shift = if a < total / 2.0 { -r2 } else { r2 };
            let offset = orientation * Vec3::new(0.0, shift, 0.0);

            let points = circle_points(r, resolution, resolution / 2)
                .iter()
                .map(|p| orientation * *p + offset)
                .collect();

            arcs.push(GridArc {
                points,
                weight: fan_weight(x),
            });
        }
    }

    arcs
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_fan_counts() {
        let grid = NetGrid::with_defaults();
        assert_eq!(grid.meridians.len(), 90);
        assert_eq!(grid.parallels.len(), 90);
        assert_eq!(grid.primitive.len(), DEFAULT_RESOLUTION);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = NetGrid::build(90.0, 1000, 17);
        let b = NetGrid::build(90.0, 1000, 17);
        assert_eq!(a, b);
    }

    #[test]
    fn test_primitive_lies_in_horizontal_plane() {
        let grid = NetGrid::with_defaults();
        for p in &grid.primitive {
            assert_eq!(p.y, 0.0);
            assert!((p.length() - grid.radius).abs() < EPSILON);
        }
    }

    #[test]
    fn test_primitive_symmetric_under_half_turn() {
        let grid = NetGrid::with_defaults();
        let half = grid.primitive.len() / 2;
        for i in 0..half {
            let p = grid.primitive[i];
            let opposite = grid.primitive[i + half];
            assert!(
                approx(opposite, Vec3::new(-p.x, p.y, -p.z)),
                "point {} not mirrored: {:?} vs {:?}",
                i,
                p,
                opposite
            );
        }
    }

    #[test]
    fn test_major_minor_weighting() {
        let grid = NetGrid::with_defaults();
        for (index, arc) in grid.meridians.iter().enumerate() {
            let expected = if index % 5 == 0 {
                StrokeWeight::Major
            } else {
                StrokeWeight::Minor
            };
            assert_eq!(arc.weight, expected, "meridian {}", index);
        }
        for (index, arc) in grid.parallels.iter().enumerate() {
            let expected = if index % 5 == 0 {
                StrokeWeight::Major
            } else {
                StrokeWeight::Minor
            };
            assert_eq!(arc.weight, expected, "parallel {}", index);
        }
    }

    #[test]
    fn test_meridian_endpoints_pinned_to_poles() {
        // Every meridian half circle starts at the same pole of the polar
        // axis regardless of its fan angle.
        let grid = NetGrid::with_defaults();
        let pole = Vec3::new(0.0, 0.0, -grid.radius);
        for arc in &grid.meridians {
            assert!(approx(arc.points[0], pole), "start {:?}", arc.points[0]);
        }
    }

    #[test]
    fn test_parallels_lie_on_the_sphere() {
        let grid = NetGrid::with_defaults();
        for (index, arc) in grid.parallels.iter().enumerate() {
            for p in &arc.points {
                assert!(
                    (p.length() - grid.radius).abs() < EPSILON,
                    "parallel {} leaves the sphere at {:?}",
                    index,
                    p
                );
            }
        }
    }

    #[test]
    fn test_degenerate_parallels() {
        // The first arc of the fan has zero axial offset and maximal planar
        // radius (a great circle through the poles); the central arc
        // collapses to a single point at one pole.
        let grid = NetGrid::with_defaults();

        for p in &grid.parallels[0].points {
            assert!(p.z.abs() < EPSILON, "a = 0 arc offset from axis: {:?}", p);
            assert!((p.length() - grid.radius).abs() < EPSILON);
        }

        let pole = Vec3::new(0.0, 0.0, grid.radius);
        for p in &grid.parallels[45].points {
            assert!(
                approx(*p, pole),
                "central parallel should collapse onto the pole, got {:?}",
                p
            );
        }
    }

    #[test]
    fn test_parallel_offsets_linear_in_index() {
        let grid = NetGrid::with_defaults();
        // The axial (world Z) offset of each parallel's plane steps
        // uniformly with the fan index on each side of the fan.
        let offset = |index: usize| grid.parallels[index].points[0].z;
        let step = offset(1) - offset(0);
        for index in 1..45 {
            let delta = offset(index) - offset(index - 1);
            assert!(
                (delta - step).abs() < EPSILON,
                "offset step at {} was {}, expected {}",
                index,
                delta,
                step
            );
        }
    }
}
