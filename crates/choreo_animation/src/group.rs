//! Property specs and compiled groups
//!
//! A [`PropertySpec`] is one target element's one animated property with its
//! keyframe value sequence. Compilation gathers every spec at a chain
//! position into a [`CompiledGroup`], the unit handed to the playback
//! runtime: all specs in a group play together in parallel under shared
//! duration, delay, repeat, and easing settings.

use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use choreo_core::ElementId;

use crate::easing::Easing;

/// Well-known property names consumed by playback runtimes
pub mod properties {
    pub const TRANSLATION_X: &str = "translationX";
    pub const TRANSLATION_Y: &str = "translationY";
    pub const ALPHA: &str = "alpha";
    pub const SCALE_X: &str = "scaleX";
    pub const SCALE_Y: &str = "scaleY";
    pub const ROTATION: &str = "rotation";
    pub const ROTATION_X: &str = "rotationX";
    pub const ROTATION_Y: &str = "rotationY";
    pub const PIVOT_X: &str = "pivotX";
    pub const PIVOT_Y: &str = "pivotY";
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    pub const TEXT_COLOR: &str = "textColor";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const POSITION: &str = "position";
    pub const CUSTOM: &str = "custom";
}

/// Per-frame callback for custom tracks, shared across the per-target specs
/// a single `custom(...)` call produces
pub type UpdateFn = Rc<RefCell<dyn FnMut(ElementId, f32)>>;

/// Keyframe payload of a property spec.
///
/// The payload kind selects the interpolation space: `Scalar` values
/// interpolate numerically, `Color` values interpolate in ARGB color space,
/// and `Custom` values interpolate numerically but are delivered to the
/// update callback instead of a named property setter.
#[derive(Clone)]
pub enum TrackPayload {
    Scalar { values: Vec<f32> },
    Color { values: Vec<u32> },
    Custom { values: Vec<f32>, update: UpdateFn },
}

impl fmt::Debug for TrackPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackPayload::Scalar { values } => {
                f.debug_struct("Scalar").field("values", values).finish()
            }
            TrackPayload::Color { values } => {
                f.debug_struct("Color").field("values", values).finish()
            }
            TrackPayload::Custom { values, .. } => f
                .debug_struct("Custom")
                .field("values", values)
                .finish_non_exhaustive(),
        }
    }
}

/// One target element's one animated property and its keyframe sequence.
///
/// Immutable once created; compilation only stamps the batch-level easing
/// override into `easing`.
#[derive(Clone, Debug)]
pub struct PropertySpec {
    pub target: ElementId,
    pub property: Cow<'static, str>,
    pub payload: TrackPayload,
    /// Per-spec easing, set when the owning batch carries an override.
    /// `None` means the group-level easing applies.
    pub easing: Option<Easing>,
}

impl PropertySpec {
    /// Scalar keyframe values, if this is a scalar or custom track
    pub fn scalar_values(&self) -> Option<&[f32]> {
        match &self.payload {
            TrackPayload::Scalar { values } | TrackPayload::Custom { values, .. } => Some(values),
            TrackPayload::Color { .. } => None,
        }
    }

    /// Color keyframe values, if this is a color track
    pub fn color_values(&self) -> Option<&[u32]> {
        match &self.payload {
            TrackPayload::Color { values } => Some(values),
            _ => None,
        }
    }
}

/// How many times a group repeats after its first run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatCount {
    /// Repeat this many additional times; `Times(0)` plays the group once
    Times(u32),
    /// Repeat until cancelled
    Infinite,
}

impl Default for RepeatCount {
    fn default() -> Self {
        RepeatCount::Times(0)
    }
}

/// What a repeat iteration does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Restart from the first keyframe
    #[default]
    Restart,
    /// Play the next iteration backwards
    Reverse,
}

/// A parallel-playable group of property specs with shared playback settings
#[derive(Debug)]
pub struct CompiledGroup {
    pub specs: Vec<PropertySpec>,
    pub duration_ms: u32,
    pub start_delay_ms: u32,
    pub repeat_count: RepeatCount,
    pub repeat_mode: RepeatMode,
    /// Group-level easing; specs carrying their own easing take precedence
    pub easing: Option<Easing>,
}

impl CompiledGroup {
    /// Specs targeting the given element
    pub fn specs_for(&self, target: ElementId) -> impl Iterator<Item = &PropertySpec> {
        self.specs.iter().filter(move |s| s.target == target)
    }
}
