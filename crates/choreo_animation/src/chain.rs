//! The chain of sequential animation steps
//!
//! Chain nodes live in a slotmap arena owned by the chain value. `next` is
//! the owning structural edge between steps; `previous` is a plain id lookup
//! used for navigation only, so no reference cycle can keep a node alive.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::batch::{Batch, ChainOptions};
use crate::driver::{AssetHandle, GroupHandle};

new_key_type! {
    /// Identifier of a node in the chain arena
    pub struct NodeId;
}

/// Lifecycle of a chain node.
///
/// `Idle -> Compiling -> Playing` happens synchronously inside start.
/// `Finished` is reached only through the runtime's completion signal.
/// `Cancelled` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeState {
    #[default]
    Idle,
    Compiling,
    Playing,
    Finished,
    Cancelled,
}

/// One sequential step: all and-joined batches at one chain position
pub(crate) struct ChainNode {
    /// Navigation-only back link; cleared before this node is started
    pub previous: Option<NodeId>,
    /// Owning edge to the step that runs after this one finishes
    pub next: Option<NodeId>,
    pub batches: Vec<Batch>,
    pub options: ChainOptions,
    pub state: NodeState,
    /// Handle of the in-flight compiled group, present only while playing
    pub live: Option<GroupHandle>,
    /// Handles of in-flight declarative asset playbacks
    pub live_assets: SmallVec<[AssetHandle; 1]>,
}

impl ChainNode {
    fn new(batch: Batch) -> Self {
        Self {
            previous: None,
            next: None,
            batches: vec![batch],
            options: ChainOptions::default(),
            state: NodeState::Idle,
            live: None,
            live_assets: SmallVec::new(),
        }
    }
}

/// Arena of chain nodes with a distinguished head
pub(crate) struct Chain {
    nodes: SlotMap<NodeId, ChainNode>,
    head: NodeId,
}

impl Chain {
    /// Create a chain whose head holds the given first batch
    pub fn with_head(batch: Batch) -> (Self, NodeId) {
        let mut nodes = SlotMap::with_key();
        let head = nodes.insert(ChainNode::new(batch));
        (Self { nodes, head }, head)
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn node(&self, id: NodeId) -> Option<&ChainNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut ChainNode> {
        self.nodes.get_mut(id)
    }

    /// Open a new batch at the same chain position; returns its index
    pub fn push_batch(&mut self, node: NodeId, batch: Batch) -> usize {
        let batches = &mut self.nodes[node].batches;
        batches.push(batch);
        batches.len() - 1
    }

    /// Allocate a new node after `node` and link it in.
    ///
    /// The builder is consumed by value on every chained call, so a node can
    /// never be asked for a second successor; the assert documents that.
    pub fn link_after(&mut self, node: NodeId, batch: Batch) -> NodeId {
        debug_assert!(
            self.nodes[node].next.is_none(),
            "chain node already has a successor"
        );
        let new = self.nodes.insert(ChainNode::new(batch));
        self.nodes[new].previous = Some(node);
        self.nodes[node].next = Some(new);
        new
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Node whose live group handle matches, if any
    pub fn node_by_live_handle(&self, handle: GroupHandle) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, n)| n.live == Some(handle))
            .map(|(id, _)| id)
    }

    pub fn states(&self) -> impl Iterator<Item = NodeState> + '_ {
        self.nodes.values().map(|n| n.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choreo_core::Targets;

    fn batch() -> Batch {
        Batch::new(Targets::new())
    }

    #[test]
    fn test_head_has_no_previous() {
        let (chain, head) = Chain::with_head(batch());
        assert!(chain.node(head).unwrap().previous.is_none());
        assert_eq!(chain.head(), head);
    }

    #[test]
    fn test_link_after_wires_both_directions() {
        let (mut chain, head) = Chain::with_head(batch());
        let second = chain.link_after(head, batch());

        assert_eq!(chain.node(head).unwrap().next, Some(second));
        assert_eq!(chain.node(second).unwrap().previous, Some(head));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_push_batch_keeps_chain_position() {
        let (mut chain, head) = Chain::with_head(batch());
        let idx = chain.push_batch(head, batch());
        assert_eq!(idx, 1);
        assert_eq!(chain.node(head).unwrap().batches.len(), 2);
        assert_eq!(chain.len(), 1);
    }
}
