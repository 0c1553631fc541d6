//! Side panel: measurement input form and view/projection toggles.

use eframe::egui::{self, RichText};

use crate::state::{AppState, ProjectionMode, ViewMode};
use crate::stereo::{FeatureKind, StereonetEngine};

pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState, engine: &mut StereonetEngine) {
    egui::SidePanel::left("side_panel")
        .resizable(false)
        .exact_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Measurement");
            ui.separator();

            egui::ComboBox::from_label("Type")
                .selected_text(state.kind_input.clone())
                .show_ui(ui, |ui| {
                    for kind in FeatureKind::all() {
                        ui.selectable_value(
                            &mut state.kind_input,
                            kind.label().to_string(),
                            kind.label(),
                        );
                    }
                });

            ui.label("Dip");
            ui.text_edit_singleline(&mut state.dip_input);

            ui.label("Strike");
            ui.text_edit_singleline(&mut state.strike_input);

            ui.add_space(5.0);

            if ui.button("Add feature").clicked() {
                // Acceptance feedback arrives through the feature-added
                // event; only rejections are reported here.
                match engine.add_feature(&state.kind_input, &state.dip_input, &state.strike_input) {
                    Ok(_) => {
                        state.dip_input.clear();
                        state.strike_input.clear();
                    }
                    Err(e) => {
                        state.status_message = format!("Rejected: {}", e);
                    }
                }
            }

            ui.add_space(10.0);
            ui.heading("View");
            ui.separator();

            let current = engine.options();
            let mut options = current;

            ui.horizontal(|ui| {
                for view in ViewMode::all() {
                    ui.radio_value(&mut options.view, *view, view.label());
                }
            });
            ui.horizontal(|ui| {
                for projection in ProjectionMode::all() {
                    ui.radio_value(&mut options.projection, *projection, projection.label());
                }
            });

            if options != current {
                engine.set_view_options(options);
                state.orbit.reset();
            }

            if options.projection == ProjectionMode::EqualArea {
                ui.label(
                    RichText::new("Equal-area is not yet implemented; showing equal-angle.")
                        .small(),
                );
            }

            ui.add_space(10.0);
            ui.label(RichText::new(format!("{} feature(s)", engine.features().len())).small());
        });
}
