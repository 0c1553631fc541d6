//! UI panels for the stereonet workbench.
//!
//! - Top bar (in `app`): title and status line
//! - Side panel: measurement form and view/projection toggles
//! - Central canvas: perspective rendering of the active geometry set

mod canvas;
mod side_panel;

pub use canvas::render_canvas;
pub use side_panel::render_side_panel;
