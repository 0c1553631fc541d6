//! Display mode, projection mode, and camera pose derivation.

use glam::Vec3;
use std::f32::consts::FRAC_PI_4;

/// Vertical field of view shared by both camera placements.
pub const CAMERA_FOV_Y: f32 = FRAC_PI_4;

/// Margin factor so the net does not touch the viewport edge in 2D mode.
const FILL_MARGIN: f32 = 1.15;

/// The 3D viewpoint sits at three quarters of the overhead height.
const OBLIQUE_HEIGHT_SCALE: f32 = 0.75;

/// Direction of the oblique 3D viewpoint, scaled so its height matches
/// `OBLIQUE_HEIGHT_SCALE * overhead_height`.
const OBLIQUE_EYE_DIR: Vec3 = Vec3::new(50.0, 185.0, 540.0);

/// Which geometry set is displayed.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewMode {
    #[default]
    TwoD,
    ThreeD,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::TwoD => "2D",
            ViewMode::ThreeD => "3D",
        }
    }

    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::TwoD, ViewMode::ThreeD]
    }
}

/// Sphere-to-plane mapping used for 2D traces.
///
/// Equal-area is accepted as a mode but does not yet produce distinct
/// geometry; the projector falls back to equal-angle with a logged caveat.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectionMode {
    #[default]
    EqualAngle,
    EqualArea,
}

impl ProjectionMode {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectionMode::EqualAngle => "equal-angle",
            ProjectionMode::EqualArea => "equal-area",
        }
    }

    pub fn all() -> &'static [ProjectionMode] {
        &[ProjectionMode::EqualAngle, ProjectionMode::EqualArea]
    }
}

/// Current display options. Mutated only by explicit user action; both
/// fields are always replaced together.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ViewOptions {
    pub view: ViewMode,
    pub projection: ProjectionMode,
}

/// Height at which a camera directly above the net center sees the whole
/// net filling the viewport, with margin.
pub fn overhead_height(radius: f32) -> f32 {
    FILL_MARGIN * radius / (CAMERA_FOV_Y / 2.0).tan()
}

/// Camera placement derived purely from the view options and net radius.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub orbit_enabled: bool,
}

impl CameraPose {
    pub fn for_options(options: ViewOptions, radius: f32) -> CameraPose {
        let height = overhead_height(radius);

        match options.view {
            ViewMode::TwoD => CameraPose {
                eye: Vec3::new(0.0, height, 0.0),
                target: Vec3::ZERO,
                // Looking straight down; -Z (north on the net) is screen up.
                up: Vec3::NEG_Z,
                fov_y: CAMERA_FOV_Y,
                orbit_enabled: false,
            },
            ViewMode::ThreeD => CameraPose {
                eye: OBLIQUE_EYE_DIR * (OBLIQUE_HEIGHT_SCALE * height / OBLIQUE_EYE_DIR.y),
                target: Vec3::ZERO,
                up: Vec3::Y,
                fov_y: CAMERA_FOV_Y,
                orbit_enabled: true,
            },
        }
    }
}
