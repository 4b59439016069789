//! Playback collaborator traits
//!
//! The engine never produces intermediate values itself. It compiles groups
//! and hands them to a [`PlaybackDriver`]; the host forwards the driver's
//! start/finish signals back into the sequencer. Declarative asset playback
//! goes through a separate [`AssetPlayer`] because its failures must never
//! abort property playback.

use choreo_core::ElementId;

use crate::error::AssetError;
use crate::group::CompiledGroup;

/// Opaque handle to an in-flight compiled group, issued by the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupHandle(pub u64);

/// Opaque handle to an in-flight declarative asset playback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssetHandle(pub u64);

/// The external interpolation/playback runtime.
///
/// `play` takes ownership of a compiled group and schedules it on the host
/// timeline. The host reports lifecycle through
/// [`Sequencer::notify_started`](crate::Sequencer::notify_started) and
/// [`Sequencer::notify_finished`](crate::Sequencer::notify_finished) using
/// the returned handle.
pub trait PlaybackDriver {
    fn play(&mut self, group: CompiledGroup) -> GroupHandle;
    fn cancel(&mut self, handle: GroupHandle);
}

/// The declarative-asset playback collaborator.
///
/// Given an asset name and compatible targets, asynchronously loads and
/// plays a pre-authored animation. Completion and errors are reported
/// independently of the property-animation group.
pub trait AssetPlayer {
    fn play(&mut self, name: &str, targets: &[ElementId]) -> Result<AssetHandle, AssetError>;
    fn cancel(&mut self, handle: AssetHandle);
}

/// Asset player for hosts without declarative asset support
pub struct NoAssets;

impl AssetPlayer for NoAssets {
    fn play(&mut self, _name: &str, _targets: &[ElementId]) -> Result<AssetHandle, AssetError> {
        Err(AssetError::Unsupported)
    }

    fn cancel(&mut self, _handle: AssetHandle) {}
}
