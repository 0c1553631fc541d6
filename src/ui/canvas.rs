//! Central canvas: perspective rendering of the active geometry set.
//!
//! Draws whatever the engine reports as active through its camera pose.
//! The canvas never mutates engine state; the only state it touches is the
//! orbit offset accumulated from drags while orbiting is enabled.

use eframe::egui::{self, Color32, Pos2, Shape, Stroke};
use glam::{Mat4, Quat, Vec3};

use crate::state::AppState;
use crate::stereo::{
    ActiveSet, NetGrid, SolidGeometry, StereonetEngine, StrokeWeight, TraceGeometry,
};

const BACKGROUND: Color32 = Color32::from_gray(240);
const MAJOR_GRID: Color32 = Color32::from_gray(90);
const MINOR_GRID: Color32 = Color32::from_gray(153);
const PLANE_COLOR: Color32 = Color32::from_rgb(46, 110, 180);
const LINE_COLOR: Color32 = Color32::from_rgb(190, 70, 50);
const PLANE_FILL_ALPHA: u8 = 50;

const ORBIT_SENSITIVITY: f32 = 0.01;
const ORBIT_PITCH_LIMIT: f32 = 1.2;

pub fn render_canvas(ctx: &egui::Context, state: &mut AppState, engine: &StereonetEngine) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, BACKGROUND);

        let pose = engine.camera();

        if pose.orbit_enabled && response.dragged() {
            let delta = response.drag_delta();
            state.orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
            state.orbit.pitch = (state.orbit.pitch + delta.y * ORBIT_SENSITIVITY)
                .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        }

        let eye = if pose.orbit_enabled {
            orbited_eye(pose.eye, pose.target, state.orbit.yaw, state.orbit.pitch)
        } else {
            pose.eye
        };

        let aspect = rect.width() / rect.height().max(1.0);
        let view = Mat4::look_at_rh(eye, pose.target, pose.up);
        let projection = Mat4::perspective_rh(pose.fov_y, aspect, 1.0, 10_000.0);
        let view_proj = projection * view;

        let to_screen = move |p: Vec3| -> Option<Pos2> {
            let clip = view_proj * p.extend(1.0);
            if clip.w <= 0.0 {
                return None;
            }
            let ndc = clip.truncate() / clip.w;
            Some(Pos2::new(
                rect.center().x + ndc.x * rect.width() / 2.0,
                rect.center().y - ndc.y * rect.height() / 2.0,
            ))
        };

        let active = engine.active_geometry();
        draw_grid(&painter, active.grid, &to_screen);

        match active.set {
            ActiveSet::Solids(solids) => {
                for solid in solids {
                    draw_solid(&painter, solid, &to_screen);
                }
            }
            ActiveSet::Traces(traces) => {
                for trace in traces {
                    draw_trace(&painter, trace, &to_screen);
                }
            }
        }
    });
}

/// Applies the accumulated orbit offsets to the derived eye position.
fn orbited_eye(eye: Vec3, target: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    let offset = Quat::from_rotation_y(yaw) * (eye - target);
    let right = offset.cross(Vec3::Y).normalize_or_zero();
    if right == Vec3::ZERO {
        return target + offset;
    }
    target + Quat::from_axis_angle(right, pitch) * offset
}

fn grid_stroke(weight: StrokeWeight) -> Stroke {
    match weight {
        StrokeWeight::Major => Stroke::new(1.0, MAJOR_GRID),
        StrokeWeight::Minor => Stroke::new(1.0, MINOR_GRID),
    }
}

fn draw_grid(painter: &egui::Painter, grid: &NetGrid, to_screen: &impl Fn(Vec3) -> Option<Pos2>) {
    let primitive: Vec<Pos2> = grid.primitive.iter().filter_map(|p| to_screen(*p)).collect();
    if primitive.len() >= 2 {
        painter.add(Shape::closed_line(primitive, grid_stroke(StrokeWeight::Major)));
    }

    for arc in grid.meridians.iter().chain(grid.parallels.iter()) {
        let points: Vec<Pos2> = arc.points.iter().filter_map(|p| to_screen(*p)).collect();
        if points.len() >= 2 {
            painter.add(Shape::line(points, grid_stroke(arc.weight)));
        }
    }
}

fn draw_solid(
    painter: &egui::Painter,
    solid: &SolidGeometry,
    to_screen: &impl Fn(Vec3) -> Option<Pos2>,
) {
    match solid {
        SolidGeometry::Disk(outline) => {
            let points: Vec<Pos2> = outline.iter().filter_map(|p| to_screen(*p)).collect();
            if points.len() >= 3 {
                let fill = Color32::from_rgba_unmultiplied(
                    PLANE_COLOR.r(),
                    PLANE_COLOR.g(),
                    PLANE_COLOR.b(),
                    PLANE_FILL_ALPHA,
                );
                painter.add(Shape::convex_polygon(
                    points,
                    fill,
                    Stroke::new(1.5, PLANE_COLOR),
                ));
            }
        }
        SolidGeometry::Segment([start, end]) => {
            if let (Some(a), Some(b)) = (to_screen(*start), to_screen(*end)) {
                painter.line_segment([a, b], Stroke::new(2.0, LINE_COLOR));
            }
        }
    }
}

fn draw_trace(
    painter: &egui::Painter,
    trace: &TraceGeometry,
    to_screen: &impl Fn(Vec3) -> Option<Pos2>,
) {
    match trace {
        TraceGeometry::Arc(arc) => {
            let points: Vec<Pos2> = arc.iter().filter_map(|p| to_screen(*p)).collect();
            if points.len() >= 2 {
                painter.add(Shape::line(points, Stroke::new(1.5, PLANE_COLOR)));
            }
        }
        TraceGeometry::Marker {
            center,
            radius,
            scale,
        } => {
            // Screen radius comes from projecting a point one world radius
            // away at the marker's depth, so the compensation in `scale`
            // carries through the perspective divide.
            let edge = *center + Vec3::new(radius * scale, 0.0, 0.0);
            if let (Some(at), Some(rim)) = (to_screen(*center), to_screen(edge)) {
                painter.circle_filled(at, at.distance(rim), LINE_COLOR);
            }
        }
    }
}
