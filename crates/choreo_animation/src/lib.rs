//! Fluent property-animation composition and sequencing for choreo
//!
//! The entry point is [`animate`], which opens a batch of property tracks
//! against a set of stage elements. Batches joined with
//! [`and_animate`](BatchBuilder::and_animate) play in parallel; batches
//! joined with [`then_animate`](BatchBuilder::then_animate) open the next
//! sequential step. [`start`](BatchBuilder::start) seals the chain, compiles
//! the first step into a [`CompiledGroup`], and hands it to the host's
//! [`PlaybackDriver`]; the returned [`Sequencer`] advances the chain as the
//! host forwards completion signals.
//!
//! # Example
//!
//! ```
//! use choreo_animation::{
//!     animate, CompiledGroup, Easing, GroupHandle, NoAssets, PlaybackDriver,
//! };
//! use choreo_core::{Element, Stage};
//!
//! struct CountingDriver {
//!     next: u64,
//! }
//!
//! impl PlaybackDriver for CountingDriver {
//!     fn play(&mut self, _group: CompiledGroup) -> GroupHandle {
//!         self.next += 1;
//!         GroupHandle(self.next)
//!     }
//!
//!     fn cancel(&mut self, _handle: GroupHandle) {}
//! }
//!
//! # fn main() -> Result<(), choreo_animation::ChainError> {
//! let stage = Stage::new(2.0);
//! let badge = stage.insert(Element::new(120.0, 40.0));
//!
//! let mut driver = CountingDriver { next: 0 };
//! let mut assets = NoAssets;
//!
//! let sequencer = animate(&stage, [badge])?
//!     .fade_in()
//!     .duration(400)
//!     .then_animate([badge])?
//!     .alpha(&[1.0, 0.0])
//!     .easing(Easing::EaseOut)
//!     .start(&mut driver, &mut assets);
//!
//! assert_eq!(sequencer.node_count(), 2);
//! assert!(sequencer.is_playing());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod builder;
pub mod chain;
pub mod driver;
pub mod easing;
pub mod error;
pub mod group;
pub mod presets;
pub mod sequencer;

#[cfg(test)]
pub(crate) mod test_util;

pub use batch::{AssetRequest, ChainOptions, LifecycleFn, DEFAULT_DURATION_MS};
pub use builder::{animate, BatchBuilder};
pub use chain::{NodeId, NodeState};
pub use driver::{AssetHandle, AssetPlayer, GroupHandle, NoAssets, PlaybackDriver};
pub use easing::Easing;
pub use error::{AssetError, ChainError, Result};
pub use group::{
    properties, CompiledGroup, PropertySpec, RepeatCount, RepeatMode, TrackPayload, UpdateFn,
};
pub use sequencer::Sequencer;
