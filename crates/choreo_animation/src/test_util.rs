//! Recording doubles for the playback and asset collaborators

use choreo_core::ElementId;

use crate::driver::{AssetHandle, AssetPlayer, GroupHandle, PlaybackDriver};
use crate::error::AssetError;
use crate::group::CompiledGroup;

/// Driver that records every compiled group and hands out sequential handles
pub struct RecordingDriver {
    pub played: Vec<CompiledGroup>,
    pub handles: Vec<GroupHandle>,
    pub cancelled: Vec<GroupHandle>,
    next: u64,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self {
            played: Vec::new(),
            handles: Vec::new(),
            cancelled: Vec::new(),
            next: 1,
        }
    }
}

impl PlaybackDriver for RecordingDriver {
    fn play(&mut self, group: CompiledGroup) -> GroupHandle {
        let handle = GroupHandle(self.next);
        self.next += 1;
        self.played.push(group);
        self.handles.push(handle);
        handle
    }

    fn cancel(&mut self, handle: GroupHandle) {
        self.cancelled.push(handle);
    }
}

/// Asset player that records requests, optionally failing every one
pub struct RecordingAssets {
    pub started: Vec<(String, Vec<ElementId>)>,
    pub cancelled: Vec<AssetHandle>,
    fail_with: Option<AssetError>,
    next: u64,
}

impl RecordingAssets {
    pub fn new() -> Self {
        Self {
            started: Vec::new(),
            cancelled: Vec::new(),
            fail_with: None,
            next: 1,
        }
    }

    pub fn failing(err: AssetError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new()
        }
    }
}

impl AssetPlayer for RecordingAssets {
    fn play(&mut self, name: &str, targets: &[ElementId]) -> Result<AssetHandle, AssetError> {
        if let Some(err) = self.fail_with.clone() {
            return Err(err);
        }
        let handle = AssetHandle(self.next);
        self.next += 1;
        self.started.push((name.to_owned(), targets.to_vec()));
        Ok(handle)
    }

    fn cancel(&mut self, handle: AssetHandle) {
        self.cancelled.push(handle);
    }
}
