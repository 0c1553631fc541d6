//! Owned engine context.
//!
//! All mutation funnels through two entry points: [`StereonetEngine::add_feature`]
//! and [`StereonetEngine::set_view_options`]. The engine owns the append-only
//! feature sequence, both projected geometry collections, the reference grid,
//! and the event bus; rendering collaborators only ever read from it.

use crate::events::{Channel, Event, EventBus, Subscription};
use crate::state::view::{CameraPose, ViewMode, ViewOptions};

use super::net_grid::{NetGrid, DEFAULT_RADIUS, DEFAULT_RESOLUTION, DEFAULT_SEMI_COUNT};
use super::orientation::{Feature, InputError};
use super::projector::{project_feature, SolidGeometry, TraceGeometry};

/// The geometry a renderer should draw for the current view mode.
pub struct ActiveGeometry<'a> {
    pub grid: &'a NetGrid,
    pub set: ActiveSet<'a>,
}

/// Per-mode feature collection selected by the view mode.
pub enum ActiveSet<'a> {
    /// 3D true-orientation solids.
    Solids(&'a [SolidGeometry]),
    /// 2D projected traces.
    Traces(&'a [TraceGeometry]),
}

impl ActiveSet<'_> {
    pub fn len(&self) -> usize {
        match self {
            ActiveSet::Solids(solids) => solids.len(),
            ActiveSet::Traces(traces) => traces.len(),
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The stereographic projection engine.
pub struct StereonetEngine {
    radius: f32,
    resolution: usize,
    grid: NetGrid,
    features: Vec<Feature>,
    solids: Vec<SolidGeometry>,
    traces: Vec<TraceGeometry>,
    options: ViewOptions,
    camera: CameraPose,
    bus: EventBus,
}

impl StereonetEngine {
    /// Builds an engine, its grid, and its initial camera pose.
    pub fn new(radius: f32, resolution: usize, semi_count: usize, options: ViewOptions) -> Self {
        StereonetEngine {
            radius,
            resolution,
            grid: NetGrid::build(radius, resolution, semi_count),
            features: Vec::new(),
            solids: Vec::new(),
            traces: Vec::new(),
            options,
            camera: CameraPose::for_options(options, radius),
            bus: EventBus::new(),
        }
    }

    pub fn with_defaults(options: ViewOptions) -> Self {
        StereonetEngine::new(DEFAULT_RADIUS, DEFAULT_RESOLUTION, DEFAULT_SEMI_COUNT, options)
    }

    /// Validates raw input and, on success, appends the feature and both of
    /// its geometry representations, then publishes `feature-added`.
    ///
    /// On rejection nothing changes and no event fires; the error is
    /// returned so the caller can surface it.
    pub fn add_feature(
        &mut self,
        raw_kind: &str,
        raw_dip: &str,
        raw_strike: &str,
    ) -> Result<Feature, InputError> {
        let feature = Feature::normalize(raw_kind, raw_dip, raw_strike)?;

        let projected =
            project_feature(&feature, self.radius, self.resolution, self.options.projection);

        self.features.push(feature);
        self.solids.push(projected.solid);
        self.traces.push(projected.trace);

        log::info!(
            "Added {} {:03.0}/{:02.0} ({} total)",
            feature.kind().label(),
            feature.strike(),
            feature.dip(),
            self.features.len()
        );

        self.bus.publish(&Event::FeatureAdded(feature));
        Ok(feature)
    }

    /// Replaces both view options atomically, publishes `view-changed`, and
    /// re-derives the camera pose. A projection change reprojects every
    /// cached feature so the collections always match the current mode.
    /// Idempotent: repeating the same options re-derives the same pose and
    /// swaps in the same active set.
    pub fn set_view_options(&mut self, options: ViewOptions) {
        if options != self.options {
            log::info!(
                "View changed: {} / {}",
                options.view.label(),
                options.projection.label()
            );
        }

        if options.projection != self.options.projection {
            self.solids.clear();
            self.traces.clear();
            for feature in &self.features {
                let projected =
                    project_feature(feature, self.radius, self.resolution, options.projection);
                self.solids.push(projected.solid);
                self.traces.push(projected.trace);
            }
            log::debug!(
                "Reprojected {} feature(s) as {}",
                self.features.len(),
                options.projection.label()
            );
        }

        self.options = options;
        self.camera = CameraPose::for_options(options, self.radius);
        self.bus.publish(&Event::ViewChanged(options));
    }

    /// The grid plus the feature collection for the current view mode.
    pub fn active_geometry(&self) -> ActiveGeometry<'_> {
        let set = match self.options.view {
            ViewMode::TwoD => ActiveSet::Traces(&self.traces),
            ViewMode::ThreeD => ActiveSet::Solids(&self.solids),
        };

        ActiveGeometry {
            grid: &self.grid,
            set,
        }
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    #[allow(dead_code)] // Convenience accessor for collaborators
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Registers a collaborator on a bus channel.
    pub fn subscribe(
        &mut self,
        channel: Channel,
        callback: impl FnMut(&Event) + 'static,
    ) -> Subscription {
        self.bus.subscribe(channel, callback)
    }

    #[allow(dead_code)] // Collaborators that outlive their interest
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.bus.unsubscribe(subscription);
    }
}
