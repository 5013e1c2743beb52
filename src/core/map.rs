//! The map context: one value owning everything the helper layer needs.
//!
//! Construction is the single registration point for projections; after
//! that every operation is a stateless transformation except the view's
//! resolution and the pending zoom transition.

use crate::animation::easing::EasingType;
use crate::animation::zoom::ZoomTransition;
use crate::core::config::MapConfig;
use crate::core::constants::{DEFAULT_ZOOM_DELTA, ZOOM_DURATION_MS};
use crate::core::extent::Extent;
use crate::core::projection::ProjectionRegistry;
use crate::core::view::View;
use crate::layers::tile::TileLayer;
use crate::Result;
use instant::Instant;
use std::time::Duration;

pub struct MapContext {
    config: MapConfig,
    projections: ProjectionRegistry,
    view: View,
    zoom_transition: Option<ZoomTransition>,
}

impl MapContext {
    /// Creates a context from a loaded configuration, registering the
    /// configuration's projection definitions exactly once.
    pub fn new(config: MapConfig) -> Self {
        let mut projections = ProjectionRegistry::new();
        projections.register_all(config.projection_defs.iter().cloned());
        log::info!(
            "map context ready: projection {}, {} registered CRS",
            config.projection,
            projections.len()
        );

        Self {
            config,
            projections,
            view: View::new(),
            zoom_transition: None,
        }
    }

    /// Creates a context straight from the catalog's raw configuration
    /// value, defaulting when it is absent or malformed.
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        Self::new(MapConfig::from_value(value))
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn projections(&self) -> &ProjectionRegistry {
        &self.projections
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Builds the base tile layer the configuration asks for
    pub fn base_layer(&self) -> TileLayer {
        TileLayer::from_config(&self.config)
    }

    /// Reprojects an extent between two reference systems
    pub fn reproject_extent(
        &self,
        extent: Option<Extent>,
        src: &str,
        dst: &str,
    ) -> Result<Option<Extent>> {
        self.projections.reproject_extent(extent, src, dst)
    }

    /// Reprojects an extent from `src` into the configured view projection
    pub fn reproject_to_view(&self, extent: Option<Extent>, src: &str) -> Result<Option<Extent>> {
        self.projections
            .reproject_extent(extent, src, &self.config.projection)
    }

    /// Zooms the view by `delta` levels with a 250 ms eased transition.
    ///
    /// The target resolution is committed immediately; the transition only
    /// describes what a render loop should draw in between. A view whose
    /// resolution has not been initialized yet ignores the call.
    pub fn zoom_by(&mut self, delta: i32) {
        let current = match self.view.resolution() {
            Some(resolution) => resolution,
            None => return,
        };

        let target = self.view.constrain_resolution(current, delta);
        log::debug!("zoom by {}: resolution {} -> {}", delta, current, target);

        self.zoom_transition = Some(ZoomTransition::new(
            current,
            target,
            Duration::from_millis(ZOOM_DURATION_MS),
            EasingType::EaseOut,
        ));
        self.view.set_resolution(target);
    }

    /// One level in
    pub fn zoom_in(&mut self) {
        self.zoom_by(DEFAULT_ZOOM_DELTA);
    }

    /// One level out
    pub fn zoom_out(&mut self) {
        self.zoom_by(-DEFAULT_ZOOM_DELTA);
    }

    /// The resolution to draw at `now`: the eased transition while one is
    /// running, the committed view resolution otherwise
    pub fn animated_resolution(&self, now: Instant) -> Option<f64> {
        match &self.zoom_transition {
            Some(transition) if !transition.is_finished(now) => Some(transition.sample(now)),
            _ => self.view.resolution(),
        }
    }

    pub fn zoom_transition(&self) -> Option<&ZoomTransition> {
        self.zoom_transition.as_ref()
    }

    /// Drops the pending transition once the render loop is done with it
    pub fn clear_finished_transition(&mut self, now: Instant) {
        if let Some(transition) = &self.zoom_transition {
            if transition.is_finished(now) {
                self.zoom_transition = None;
            }
        }
    }
}

impl Default for MapContext {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projection::ProjectionDef;

    #[test]
    fn test_context_registers_config_projections() {
        let config = MapConfig {
            projection_defs: vec![ProjectionDef::new("EPSG:27572", "+proj=lcc +lat_1=46.8")],
            ..MapConfig::default()
        };
        let context = MapContext::new(config);
        assert!(context.projections().contains("EPSG:27572"));
        assert!(context.projections().contains("EPSG:2154"));
    }

    #[test]
    fn test_zoom_before_initialization_is_noop() {
        let mut context = MapContext::default();
        context.zoom_by(1);
        assert_eq!(context.view().resolution(), None);
        assert!(context.zoom_transition().is_none());
    }

    #[test]
    fn test_zoom_commits_constrained_resolution() {
        let mut context = MapContext::default();
        let zoom_zero = context.view().max_resolution();
        context.view_mut().set_resolution(zoom_zero);

        context.zoom_by(2);
        let committed = context.view().resolution().unwrap();
        assert!((committed - zoom_zero / 4.0).abs() < 1e-9);

        let transition = context.zoom_transition().unwrap();
        assert_eq!(transition.start_resolution(), zoom_zero);
        assert_eq!(transition.target_resolution(), committed);
        assert_eq!(transition.duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_animated_resolution_settles_on_target() {
        let mut context = MapContext::default();
        let zoom_zero = context.view().max_resolution();
        context.view_mut().set_resolution(zoom_zero);
        context.zoom_in();

        let settled = context
            .animated_resolution(Instant::now() + Duration::from_secs(1))
            .unwrap();
        assert_eq!(settled, context.view().resolution().unwrap());
    }

    #[test]
    fn test_clear_finished_transition() {
        let mut context = MapContext::default();
        context.view_mut().set_resolution(1000.0);
        context.zoom_in();
        assert!(context.zoom_transition().is_some());

        context.clear_finished_transition(Instant::now() + Duration::from_secs(1));
        assert!(context.zoom_transition().is_none());
    }
}
