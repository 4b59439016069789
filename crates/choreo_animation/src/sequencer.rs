//! Chain sequencing
//!
//! The sequencer owns a sealed chain, compiles each node's batches into one
//! parallel-playable group, and runs the nodes strictly in chain order.
//! Playback always begins at the head. The host forwards the driver's
//! start/finish signals through `notify_started`/`notify_finished`; a
//! finished node hands off to its successor, a cancelled chain is severed
//! and stays dead.

use crate::chain::{Chain, NodeId, NodeState};
use crate::driver::{AssetPlayer, GroupHandle, PlaybackDriver};
use crate::group::CompiledGroup;

/// Runs a sealed chain of animation batches
pub struct Sequencer {
    chain: Chain,
}

impl Sequencer {
    pub(crate) fn new(chain: Chain) -> Self {
        Self { chain }
    }

    /// Begin playback at the chain head.
    ///
    /// Compilation is synchronous; the head node is Playing when this
    /// returns. Starting an already-started or cancelled chain is a no-op.
    pub fn start<D: PlaybackDriver, A: AssetPlayer>(&mut self, driver: &mut D, assets: &mut A) {
        let head = self.chain.head();
        self.start_node(head, driver, assets);
    }

    fn start_node<D: PlaybackDriver, A: AssetPlayer>(
        &mut self,
        id: NodeId,
        driver: &mut D,
        assets: &mut A,
    ) {
        let Some(node) = self.chain.node_mut(id) else {
            return;
        };
        if node.state != NodeState::Idle {
            tracing::debug!(state = ?node.state, "start ignored on non-idle chain node");
            return;
        }
        node.state = NodeState::Compiling;

        // Declarative assets first. A decorative secondary animation failing
        // must not abort the property animation, so errors stop here.
        let requests: Vec<_> = node.batches.iter().filter_map(|b| b.asset.clone()).collect();
        for request in requests {
            if request.targets.is_empty() {
                tracing::debug!(asset = %request.name, "no asset-capable targets, skipping");
                continue;
            }
            match assets.play(&request.name, &request.targets) {
                Ok(handle) => {
                    if let Some(node) = self.chain.node_mut(id) {
                        node.live_assets.push(handle);
                    }
                }
                Err(err) => {
                    tracing::warn!(asset = %request.name, %err, "asset playback failed, continuing");
                }
            }
        }

        let group = self.compile(id);
        tracing::debug!(specs = group.specs.len(), duration_ms = group.duration_ms, "chain node playing");
        let handle = driver.play(group);
        if let Some(node) = self.chain.node_mut(id) {
            node.state = NodeState::Playing;
            node.live = Some(handle);
        }
    }

    /// Merge every batch at the node into one parallel group. A batch-level
    /// easing override is stamped onto that batch's specs; node options
    /// apply to the whole group.
    fn compile(&mut self, id: NodeId) -> CompiledGroup {
        let node = self
            .chain
            .node_mut(id)
            .expect("compile is only called on live nodes");

        let mut specs = Vec::new();
        for batch in &mut node.batches {
            let single = batch.single_easing;
            for mut spec in batch.specs.drain(..) {
                if single.is_some() {
                    spec.easing = single;
                }
                specs.push(spec);
            }
        }

        let opts = &node.options;
        CompiledGroup {
            specs,
            duration_ms: opts.duration_ms,
            start_delay_ms: opts.start_delay_ms,
            repeat_count: opts.repeat_count,
            repeat_mode: opts.repeat_mode,
            easing: opts.easing,
        }
    }

    /// Host forwards the runtime's playback-start signal for a group.
    /// Fires the staged start callback before any values change.
    pub fn notify_started(&mut self, handle: GroupHandle) {
        let Some(id) = self.chain.node_by_live_handle(handle) else {
            tracing::debug!(?handle, "start signal for unknown group ignored");
            return;
        };
        if let Some(node) = self.chain.node_mut(id) {
            if let Some(on_start) = node.options.on_start.as_mut() {
                on_start();
            }
        }
    }

    /// Host forwards the runtime's completion signal for a group.
    ///
    /// Transitions the node to Finished, fires the staged stop callback
    /// (at most once), detaches the successor's back link, and starts the
    /// successor. Signals for unknown handles, including handles cancelled
    /// earlier, are ignored.
    pub fn notify_finished<D: PlaybackDriver, A: AssetPlayer>(
        &mut self,
        driver: &mut D,
        assets: &mut A,
        handle: GroupHandle,
    ) {
        let Some(id) = self.chain.node_by_live_handle(handle) else {
            tracing::debug!(?handle, "completion signal for unknown group ignored");
            return;
        };

        let next = {
            let node = self
                .chain
                .node_mut(id)
                .expect("node found by live handle still exists");
            node.state = NodeState::Finished;
            node.live = None;
            node.live_assets.clear();
            if let Some(mut on_stop) = node.options.on_stop.take() {
                on_stop();
            }
            node.next
        };

        if let Some(next_id) = next {
            // The successor must never re-enter "forward to previous".
            if let Some(next_node) = self.chain.node_mut(next_id) {
                next_node.previous = None;
            }
            self.start_node(next_id, driver, assets);
        } else {
            tracing::debug!("chain finished");
        }
    }

    /// Cancel the chain: depth-first from the head, cancelling each node's
    /// live group and asset playbacks, then severing the `next` edge so the
    /// chain cannot restart. Idempotent.
    pub fn cancel<D: PlaybackDriver, A: AssetPlayer>(&mut self, driver: &mut D, assets: &mut A) {
        let head = self.chain.head();
        self.cancel_from(head, driver, assets);
    }

    fn cancel_from<D: PlaybackDriver, A: AssetPlayer>(
        &mut self,
        id: NodeId,
        driver: &mut D,
        assets: &mut A,
    ) {
        let Some(node) = self.chain.node_mut(id) else {
            return;
        };
        if node.state == NodeState::Cancelled {
            return;
        }

        if let Some(handle) = node.live.take() {
            driver.cancel(handle);
        }
        for handle in std::mem::take(&mut node.live_assets) {
            assets.cancel(handle);
        }
        node.state = NodeState::Cancelled;
        let next = node.next;

        if let Some(next_id) = next {
            self.cancel_from(next_id, driver, assets);
        }
        if let Some(node) = self.chain.node_mut(id) {
            node.next = None;
        }
        tracing::debug!("chain node cancelled");
    }

    /// Number of sequential steps in the chain
    pub fn node_count(&self) -> usize {
        self.chain.len()
    }

    /// Whether any node currently has a live group
    pub fn is_playing(&self) -> bool {
        self.chain.states().any(|s| s == NodeState::Playing)
    }

    /// Whether the whole chain has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.chain.states().all(|s| s == NodeState::Cancelled)
    }

    #[cfg(test)]
    pub(crate) fn chain(&self) -> &Chain {
        &self.chain
    }
}
