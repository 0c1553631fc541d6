//! Application state management.
//!
//! Engine-owned state (features, geometry, view options) lives in
//! [`crate::stereo::StereonetEngine`]; this module holds the UI-side state:
//! form field contents, the status line, and the orbit offsets applied on
//! top of the derived camera pose in 3D mode.

pub mod view;

pub use view::{CameraPose, ProjectionMode, ViewMode, ViewOptions};

/// Orbit offsets accumulated from canvas drags while orbiting is enabled.
#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub struct OrbitState {
    /// Rotation around the net's vertical axis, radians.
    pub yaw: f32,
    /// Elevation offset, radians, clamped to keep the camera off the poles.
    pub pitch: f32,
}

impl OrbitState {
    pub fn reset(&mut self) {
        *self = OrbitState::default();
    }
}

/// Root application state for the UI layer.
pub struct AppState {
    /// Feature type field ("plane" or "point").
    pub kind_input: String,

    /// Dip field, free-form numeric text.
    pub dip_input: String,

    /// Strike field, free-form numeric text.
    pub strike_input: String,

    /// Status message displayed in the top bar.
    pub status_message: String,

    /// Camera orbit offsets (3D mode only).
    pub orbit: OrbitState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            kind_input: "plane".to_string(),
            dip_input: String::new(),
            strike_input: String::new(),
            status_message: "Ready".to_string(),
            orbit: OrbitState::default(),
        }
    }
}
