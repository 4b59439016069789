//! Batches and chain-level playback options
//!
//! A batch is one `animate`/`and_animate` call's worth of property specs for
//! a fixed target set, played in parallel with every other batch at the same
//! chain position. Playback options that apply to the whole chain position
//! live in [`ChainOptions`] on the owning chain node; the only batch-scoped
//! option is the easing override.

use choreo_core::Targets;

use crate::easing::Easing;
use crate::group::{PropertySpec, RepeatCount, RepeatMode};

/// Default group duration in milliseconds
pub const DEFAULT_DURATION_MS: u32 = 3000;

/// A declarative-asset playback request bound to a batch
#[derive(Clone, Debug)]
pub struct AssetRequest {
    /// Asset-capable subset of the batch targets
    pub targets: Targets,
    pub name: String,
}

/// An accumulating set of property specs for a fixed target set.
///
/// Mutable only through the owning builder during accumulation; compilation
/// drains the specs and the batch is read-only afterwards.
pub struct Batch {
    pub targets: Targets,
    pub specs: Vec<PropertySpec>,
    /// Batch-only easing override; stamped onto every spec compiled from
    /// this batch, taking precedence over the chain-level easing
    pub single_easing: Option<Easing>,
    pub asset: Option<AssetRequest>,
}

impl Batch {
    pub fn new(targets: Targets) -> Self {
        Self {
            targets,
            specs: Vec::new(),
            single_easing: None,
            asset: None,
        }
    }
}

/// Lifecycle callback staged on a chain node
pub type LifecycleFn = Box<dyn FnMut()>;

/// Playback options applied uniformly to every batch at one chain position
pub struct ChainOptions {
    pub duration_ms: u32,
    pub start_delay_ms: u32,
    pub repeat_count: RepeatCount,
    pub repeat_mode: RepeatMode,
    /// Chain-level easing; a batch-level override takes precedence
    pub easing: Option<Easing>,
    /// Fires when the runtime reports playback start, before values change
    pub on_start: Option<LifecycleFn>,
    /// Fires once on natural completion; cancellation does not fire it
    pub on_stop: Option<LifecycleFn>,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            start_delay_ms: 0,
            repeat_count: RepeatCount::default(),
            repeat_mode: RepeatMode::default(),
            easing: None,
            on_start: None,
            on_stop: None,
        }
    }
}
