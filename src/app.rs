//! Application wiring: engine ownership, bus subscriptions, panel layout.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::events::{Channel, Event};
use crate::state::{AppState, ViewOptions};
use crate::stereo::StereonetEngine;
use crate::ui;

/// Example measurements seeded at startup.
const DEMO_FEATURES: [(&str, &str, &str); 4] = [
    ("plane", "20", "83"),
    ("plane", "50", "310"),
    ("point", "25", "40"),
    ("point", "65", "180"),
];

/// Main application: owns the engine and the UI-side state.
pub struct StereonetApp {
    state: AppState,
    engine: StereonetEngine,

    /// Messages pushed by bus subscribers, drained into the status line
    /// once per frame.
    notifications: Rc<RefCell<Vec<String>>>,
}

impl StereonetApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut engine = StereonetEngine::with_defaults(ViewOptions::default());
        let notifications = Rc::new(RefCell::new(Vec::new()));

        let sink = notifications.clone();
        engine.subscribe(Channel::FeatureAdded, move |event| {
            if let Event::FeatureAdded(feature) = event {
                sink.borrow_mut().push(format!(
                    "Added {} {:03.0}/{:02.0}",
                    feature.kind().label(),
                    feature.strike(),
                    feature.dip()
                ));
            }
        });

        let sink = notifications.clone();
        engine.subscribe(Channel::ViewChanged, move |event| {
            if let Event::ViewChanged(options) = event {
                sink.borrow_mut().push(format!(
                    "View: {} / {}",
                    options.view.label(),
                    options.projection.label()
                ));
            }
        });

        for (kind, dip, strike) in DEMO_FEATURES {
            if let Err(e) = engine.add_feature(kind, dip, strike) {
                log::error!("Failed to seed demo feature: {}", e);
            }
        }

        Self {
            state: AppState::default(),
            engine,
            notifications,
        }
    }
}

impl eframe::App for StereonetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(message) = self.notifications.borrow_mut().drain(..).last() {
            self.state.status_message = message;
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Stereonet Workbench");
                ui.separator();
                ui.label(&self.state.status_message);
            });
        });

        ui::render_side_panel(ctx, &mut self.state, &mut self.engine);
        ui::render_canvas(ctx, &mut self.state, &self.engine);
    }
}
