//! Fluent batch builder
//!
//! The builder accumulates property specs for a fixed target set and stages
//! playback options on the owning chain node. It is a value: every chained
//! call consumes it and returns the updated builder, and `start` seals the
//! chain into a [`Sequencer`]. Because the builder is the only handle to the
//! chain under construction, structural mistakes like giving a node two
//! successors cannot be expressed.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use choreo_core::{ElementId, MotionPath, Stage, Targets, Units};

use crate::batch::{AssetRequest, Batch, ChainOptions};
use crate::chain::{Chain, NodeId};
use crate::driver::{AssetPlayer, PlaybackDriver};
use crate::easing::Easing;
use crate::error::{ChainError, Result};
use crate::group::{properties, PropertySpec, RepeatCount, RepeatMode, TrackPayload, UpdateFn};
use crate::sequencer::Sequencer;

/// Open a new animation chain over the given targets.
///
/// Fails fast on an empty target set.
///
/// ```rust
/// # use choreo_core::{Element, Stage};
/// # use choreo_animation::animate;
/// let stage = Stage::new(1.0);
/// let card = stage.insert(Element::new(200.0, 120.0));
/// let builder = animate(&stage, [card])?.fade_in().duration(400);
/// # Ok::<(), choreo_animation::ChainError>(())
/// ```
pub fn animate(stage: &Stage, targets: impl IntoIterator<Item = ElementId>) -> Result<BatchBuilder> {
    let targets = collect_targets(targets)?;
    let (chain, node) = Chain::with_head(Batch::new(targets));
    Ok(BatchBuilder {
        stage: stage.clone(),
        chain,
        node,
        batch: 0,
    })
}

fn collect_targets(targets: impl IntoIterator<Item = ElementId>) -> Result<Targets> {
    let targets: Targets = targets.into_iter().collect();
    if targets.is_empty() {
        return Err(ChainError::EmptyTargets);
    }
    Ok(targets)
}

/// Accumulates property specs for a fixed target set; see [`animate`]
pub struct BatchBuilder {
    stage: Stage,
    chain: Chain,
    node: NodeId,
    batch: usize,
}

impl BatchBuilder {
    fn batch_mut(&mut self) -> &mut Batch {
        let batch = self.batch;
        &mut self
            .chain
            .node_mut(self.node)
            .expect("builder node always exists while building")
            .batches[batch]
    }

    fn options_mut(&mut self) -> &mut ChainOptions {
        &mut self
            .chain
            .node_mut(self.node)
            .expect("builder node always exists while building")
            .options
    }

    pub(crate) fn stage(&self) -> &Stage {
        &self.stage
    }

    pub(crate) fn targets(&self) -> Targets {
        self.chain
            .node(self.node)
            .expect("builder node always exists while building")
            .batches[self.batch]
            .targets
            .clone()
    }

    pub(crate) fn push_scalar_for(
        &mut self,
        target: ElementId,
        property: &'static str,
        values: Vec<f32>,
    ) {
        self.batch_mut().specs.push(PropertySpec {
            target,
            property: Cow::Borrowed(property),
            payload: TrackPayload::Scalar { values },
            easing: None,
        });
    }

    // ------------------------------------------------------------------
    // Property tracks
    // ------------------------------------------------------------------

    /// Add a scalar track per target, consuming `values` verbatim as the
    /// keyframe sequence (pixel units)
    pub fn property(self, name: impl Into<Cow<'static, str>>, values: &[f32]) -> Self {
        self.property_in(Units::Px, name, values)
    }

    /// Unit-aware variant of [`property`](Self::property). `Units::Dp`
    /// scales every value by the stage density exactly once, here at call
    /// time; later calls are unaffected.
    pub fn property_in(
        mut self,
        units: Units,
        name: impl Into<Cow<'static, str>>,
        values: &[f32],
    ) -> Self {
        let name = name.into();
        let resolved: Vec<f32> = values.iter().map(|v| self.stage.resolve(units, *v)).collect();
        for target in self.targets() {
            self.batch_mut().specs.push(PropertySpec {
                target,
                property: name.clone(),
                payload: TrackPayload::Scalar {
                    values: resolved.clone(),
                },
                easing: None,
            });
        }
        self
    }

    pub fn translation_x(self, values: &[f32]) -> Self {
        self.property(properties::TRANSLATION_X, values)
    }

    pub fn translation_y(self, values: &[f32]) -> Self {
        self.property(properties::TRANSLATION_Y, values)
    }

    pub fn alpha(self, values: &[f32]) -> Self {
        self.property(properties::ALPHA, values)
    }

    pub fn scale_x(self, values: &[f32]) -> Self {
        self.property(properties::SCALE_X, values)
    }

    pub fn scale_y(self, values: &[f32]) -> Self {
        self.property(properties::SCALE_Y, values)
    }

    /// Uniform scale on both axes
    pub fn scale(self, values: &[f32]) -> Self {
        self.scale_x(values).scale_y(values)
    }

    pub fn rotation(self, values: &[f32]) -> Self {
        self.property(properties::ROTATION, values)
    }

    pub fn rotation_x(self, values: &[f32]) -> Self {
        self.property(properties::ROTATION_X, values)
    }

    pub fn rotation_y(self, values: &[f32]) -> Self {
        self.property(properties::ROTATION_Y, values)
    }

    pub fn pivot_x(self, values: &[f32]) -> Self {
        self.property(properties::PIVOT_X, values)
    }

    pub fn pivot_y(self, values: &[f32]) -> Self {
        self.property(properties::PIVOT_Y, values)
    }

    /// ARGB background color track, interpolated in color space
    pub fn background_color(mut self, colors: &[u32]) -> Self {
        for target in self.targets() {
            self.batch_mut().specs.push(PropertySpec {
                target,
                property: Cow::Borrowed(properties::BACKGROUND_COLOR),
                payload: TrackPayload::Color {
                    values: colors.to_vec(),
                },
                easing: None,
            });
        }
        self
    }

    /// ARGB text color track; applied only to text-capable targets
    pub fn text_color(mut self, colors: &[u32]) -> Self {
        for target in self.targets() {
            if !self.stage.supports_text_color(target) {
                continue;
            }
            self.batch_mut().specs.push(PropertySpec {
                target,
                property: Cow::Borrowed(properties::TEXT_COLOR),
                payload: TrackPayload::Color {
                    values: colors.to_vec(),
                },
                easing: None,
            });
        }
        self
    }

    /// Custom track: the callback is invoked once per produced frame with
    /// the interpolated value of the synthetic keyframe range
    pub fn custom(self, update: impl FnMut(ElementId, f32) + 'static, values: &[f32]) -> Self {
        self.custom_named(properties::CUSTOM, update, values)
    }

    fn custom_named(
        mut self,
        property: &'static str,
        update: impl FnMut(ElementId, f32) + 'static,
        values: &[f32],
    ) -> Self {
        let update: UpdateFn = Rc::new(RefCell::new(update));
        for target in self.targets() {
            self.batch_mut().specs.push(PropertySpec {
                target,
                property: Cow::Borrowed(property),
                payload: TrackPayload::Custom {
                    values: values.to_vec(),
                    update: update.clone(),
                },
                easing: None,
            });
        }
        self
    }

    /// Animate element width through the stage
    pub fn width(self, values: &[f32]) -> Self {
        let stage = self.stage.clone();
        self.custom_named(
            properties::WIDTH,
            move |target, value| stage.set_width(target, value),
            values,
        )
    }

    /// Animate element height through the stage
    pub fn height(self, values: &[f32]) -> Self {
        let stage = self.stage.clone();
        self.custom_named(
            properties::HEIGHT,
            move |target, value| stage.set_height(target, value),
            values,
        )
    }

    /// Move targets along a measured path, from its start to its end
    pub fn path(self, path: &MotionPath) -> Self {
        let stage = self.stage.clone();
        let path = path.clone();
        let length = path.length();
        self.custom_named(
            properties::POSITION,
            move |target, distance| {
                let (x, y) = path.point_at(distance);
                stage.set_position(target, x, y);
            },
            &[0.0, length],
        )
    }

    // ------------------------------------------------------------------
    // Chain structure
    // ------------------------------------------------------------------

    /// Open a new batch at the same chain position, playing in parallel
    /// with every batch already staged there
    pub fn and_animate(mut self, targets: impl IntoIterator<Item = ElementId>) -> Result<Self> {
        let targets = collect_targets(targets)?;
        self.batch = self.chain.push_batch(self.node, Batch::new(targets));
        Ok(self)
    }

    /// Open a new chain step that runs after the current one finishes
    pub fn then_animate(mut self, targets: impl IntoIterator<Item = ElementId>) -> Result<Self> {
        let targets = collect_targets(targets)?;
        self.node = self.chain.link_after(self.node, Batch::new(targets));
        self.batch = 0;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Playback options
    // ------------------------------------------------------------------

    /// Group duration in milliseconds for this chain position
    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.options_mut().duration_ms = duration_ms;
        self
    }

    /// Delay before this chain position starts producing values
    pub fn start_delay(mut self, start_delay_ms: u32) -> Self {
        self.options_mut().start_delay_ms = start_delay_ms;
        self
    }

    pub fn repeat_count(mut self, repeat_count: RepeatCount) -> Self {
        self.options_mut().repeat_count = repeat_count;
        self
    }

    pub fn repeat_mode(mut self, repeat_mode: RepeatMode) -> Self {
        self.options_mut().repeat_mode = repeat_mode;
        self
    }

    /// Chain-level easing for every spec at this chain position
    pub fn easing(mut self, easing: Easing) -> Self {
        self.options_mut().easing = Some(easing);
        self
    }

    /// Batch-only easing override: applies to every spec in the current
    /// batch and takes precedence over the chain-level easing for them
    pub fn batch_easing(mut self, easing: Easing) -> Self {
        self.batch_mut().single_easing = Some(easing);
        self
    }

    /// Accelerating chain easing
    pub fn accelerate(self) -> Self {
        self.easing(Easing::EaseIn)
    }

    /// Decelerating chain easing
    pub fn decelerate(self) -> Self {
        self.easing(Easing::EaseOut)
    }

    /// Fires when the runtime reports playback start for this chain
    /// position, before any values change
    pub fn on_start(mut self, callback: impl FnMut() + 'static) -> Self {
        self.options_mut().on_start = Some(Box::new(callback));
        self
    }

    /// Fires once when this chain position completes naturally
    pub fn on_stop(mut self, callback: impl FnMut() + 'static) -> Self {
        self.options_mut().on_stop = Some(Box::new(callback));
        self
    }

    /// Bind a declarative asset playback to the asset-capable subset of the
    /// current batch targets. Targets without asset support are skipped.
    pub fn asset(mut self, name: impl Into<String>) -> Self {
        let stage = self.stage.clone();
        let capable: Targets = self
            .targets()
            .into_iter()
            .filter(|t| stage.supports_assets(*t))
            .collect();
        self.batch_mut().asset = Some(AssetRequest {
            targets: capable,
            name: name.into(),
        });
        self
    }

    // ------------------------------------------------------------------
    // Terminal
    // ------------------------------------------------------------------

    /// Seal the chain and begin playback at its head. Returns the sequencer
    /// so the caller can cancel and route runtime notifications.
    pub fn start<D: PlaybackDriver, A: AssetPlayer>(
        self,
        driver: &mut D,
        assets: &mut A,
    ) -> Sequencer {
        let mut sequencer = Sequencer::new(self.chain);
        sequencer.start(driver, assets);
        sequencer
    }

    /// Seal the chain without starting it
    pub fn build(self) -> Sequencer {
        Sequencer::new(self.chain)
    }

    #[cfg(test)]
    pub(crate) fn current_specs(&self) -> &[PropertySpec] {
        &self
            .chain
            .node(self.node)
            .expect("builder node always exists while building")
            .batches[self.batch]
            .specs
    }

    #[cfg(test)]
    pub(crate) fn current_options(&self) -> &ChainOptions {
        &self
            .chain
            .node(self.node)
            .expect("builder node always exists while building")
            .options
    }

    #[cfg(test)]
    pub(crate) fn current_asset(&self) -> Option<&AssetRequest> {
        self.chain
            .node(self.node)
            .expect("builder node always exists while building")
            .batches[self.batch]
            .asset
            .as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choreo_core::Element;

    fn stage_with(density: f32, count: usize) -> (Stage, Vec<ElementId>) {
        let stage = Stage::new(density);
        let ids = (0..count)
            .map(|_| stage.insert(Element::new(100.0, 50.0)))
            .collect();
        (stage, ids)
    }

    #[test]
    fn test_empty_targets_rejected_at_call_time() {
        let stage = Stage::new(1.0);
        assert!(matches!(
            animate(&stage, std::iter::empty()),
            Err(ChainError::EmptyTargets)
        ));

        let (stage, ids) = stage_with(1.0, 1);
        let builder = animate(&stage, ids.clone()).unwrap();
        assert!(matches!(
            builder.and_animate(std::iter::empty()),
            Err(ChainError::EmptyTargets)
        ));

        let builder = animate(&stage, ids).unwrap();
        assert!(matches!(
            builder.then_animate(std::iter::empty()),
            Err(ChainError::EmptyTargets)
        ));
    }

    #[test]
    fn test_property_creates_one_spec_per_target() {
        let (stage, ids) = stage_with(1.0, 3);
        let builder = animate(&stage, ids.clone())
            .unwrap()
            .alpha(&[0.0, 1.0]);

        let specs = builder.current_specs();
        assert_eq!(specs.len(), 3);
        for (spec, id) in specs.iter().zip(ids) {
            assert_eq!(spec.target, id);
            assert_eq!(spec.property, "alpha");
            assert_eq!(spec.scalar_values().unwrap(), &[0.0, 1.0]);
        }
    }

    #[test]
    fn test_dp_values_scale_exactly_once() {
        let (stage, ids) = stage_with(2.0, 1);
        let builder = animate(&stage, ids)
            .unwrap()
            .property_in(Units::Dp, "translationX", &[0.0, 50.0, 100.0])
            .property("translationY", &[0.0, 50.0]);

        let specs = builder.current_specs();
        assert_eq!(specs[0].scalar_values().unwrap(), &[0.0, 100.0, 200.0]);
        // the later px call is unaffected by the earlier dp call
        assert_eq!(specs[1].scalar_values().unwrap(), &[0.0, 50.0]);
    }

    #[test]
    fn test_scale_animates_both_axes() {
        let (stage, ids) = stage_with(1.0, 1);
        let builder = animate(&stage, ids).unwrap().scale(&[0.5, 1.0]);

        let specs = builder.current_specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].property, "scaleX");
        assert_eq!(specs[1].property, "scaleY");
    }

    #[test]
    fn test_text_color_skips_non_text_targets() {
        let stage = Stage::new(1.0);
        let label = stage.insert(Element::new(80.0, 20.0).text_colorable());
        let icon = stage.insert(Element::new(24.0, 24.0));

        let builder = animate(&stage, [label, icon])
            .unwrap()
            .text_color(&[0xFF000000, 0xFFFF0000]);

        let specs = builder.current_specs();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].target, label);
        assert_eq!(specs[0].color_values().unwrap(), &[0xFF000000, 0xFFFF0000]);
    }

    #[test]
    fn test_width_track_writes_through_the_stage() {
        let (stage, ids) = stage_with(1.0, 1);
        let builder = animate(&stage, ids.clone()).unwrap().width(&[100.0, 40.0]);

        let specs = builder.current_specs();
        assert_eq!(specs[0].property, "width");
        assert_eq!(specs[0].scalar_values().unwrap(), &[100.0, 40.0]);

        match &specs[0].payload {
            TrackPayload::Custom { update, .. } => {
                (&mut *update.borrow_mut())(ids[0], 55.0);
            }
            other => panic!("expected custom payload, got {other:?}"),
        }
        assert_eq!(stage.geometry(ids[0]).unwrap().width, 55.0);
    }

    #[test]
    fn test_path_track_follows_the_polyline() {
        let (stage, ids) = stage_with(1.0, 1);
        let path = MotionPath::new(vec![(0.0, 0.0), (30.0, 0.0), (30.0, 40.0)]).unwrap();
        let builder = animate(&stage, ids.clone()).unwrap().path(&path);

        let specs = builder.current_specs();
        assert_eq!(specs[0].property, "position");
        assert_eq!(specs[0].scalar_values().unwrap(), &[0.0, 70.0]);

        match &specs[0].payload {
            TrackPayload::Custom { update, .. } => {
                (&mut *update.borrow_mut())(ids[0], 70.0);
            }
            other => panic!("expected custom payload, got {other:?}"),
        }
        let geom = stage.geometry(ids[0]).unwrap();
        assert_eq!((geom.x, geom.y), (30.0, 40.0));
    }

    #[test]
    fn test_custom_update_is_shared_across_targets() {
        let (stage, ids) = stage_with(1.0, 2);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let builder = animate(&stage, ids.clone())
            .unwrap()
            .custom(move |target, value| sink.borrow_mut().push((target, value)), &[0.0, 1.0]);

        for spec in builder.current_specs() {
            match &spec.payload {
                TrackPayload::Custom { update, .. } => (&mut *update.borrow_mut())(spec.target, 0.5),
                other => panic!("expected custom payload, got {other:?}"),
            }
        }
        assert_eq!(*seen.borrow(), vec![(ids[0], 0.5), (ids[1], 0.5)]);
    }

    #[test]
    fn test_asset_binds_only_capable_targets() {
        let stage = Stage::new(1.0);
        let player = stage.insert(Element::new(64.0, 64.0).asset_playable());
        let plain = stage.insert(Element::new(64.0, 64.0));

        let builder = animate(&stage, [player, plain]).unwrap().asset("loading");

        let request = builder.current_asset().unwrap();
        assert_eq!(request.name, "loading");
        assert_eq!(request.targets.as_slice(), &[player]);
    }

    #[test]
    fn test_options_stage_on_the_chain_node() {
        let (stage, ids) = stage_with(1.0, 1);
        let builder = animate(&stage, ids)
            .unwrap()
            .duration(1200)
            .start_delay(80)
            .repeat_count(RepeatCount::Infinite)
            .repeat_mode(RepeatMode::Reverse)
            .decelerate();

        let opts = builder.current_options();
        assert_eq!(opts.duration_ms, 1200);
        assert_eq!(opts.start_delay_ms, 80);
        assert_eq!(opts.repeat_count, RepeatCount::Infinite);
        assert_eq!(opts.repeat_mode, RepeatMode::Reverse);
        assert_eq!(opts.easing, Some(Easing::EaseOut));
    }
}
