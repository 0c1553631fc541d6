//! The stereographic projection engine.
//!
//! Validates raw dip/strike measurements, builds the static reference grid,
//! and projects each measurement into true 3D orientation geometry and its
//! 2D trace on the net.

pub mod angles;
mod engine;
mod net_grid;
mod orientation;
mod projector;

pub use engine::{ActiveGeometry, ActiveSet, StereonetEngine};
pub use net_grid::{NetGrid, StrokeWeight};
pub use orientation::{Feature, FeatureKind, InputError};
pub use projector::{SolidGeometry, TraceGeometry};
