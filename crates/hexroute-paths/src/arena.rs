//! Index-addressed search tree shared by both half-searches of a query.
//!
//! Every node records the cell it reached, the hexside crossed from its
//! parent's cell to get there, and the cumulative cost and step count from
//! its search's root. Nodes are never mutated once pushed; a cheaper route
//! to a cell just adds another node.

use hexroute_core::{HexCoords, Hexside};

use crate::path::DirectedPath;
use crate::traits::StepCost;

pub(crate) type NodeId = usize;

/// Edge from a node back to the node it was reached from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) parent: NodeId,
    /// Hexside crossed from the parent's cell into this one.
    pub(crate) hexside: Hexside,
    /// Cost of that crossing, walked in the search's direction.
    pub(crate) step: StepCost,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ArenaNode {
    pub(crate) coords: HexCoords,
    /// `None` at a search root.
    pub(crate) link: Option<Link>,
    pub(crate) cost: i32,
    pub(crate) steps: u32,
}

#[derive(Default)]
pub(crate) struct PathArena {
    nodes: Vec<ArenaNode>,
}

impl PathArena {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &ArenaNode {
        &self.nodes[id]
    }

    /// Root node of a search at `coords`.
    pub(crate) fn push_root(&mut self, coords: HexCoords) -> NodeId {
        self.push_node(ArenaNode {
            coords,
            link: None,
            cost: 0,
            steps: 0,
        })
    }

    /// Child of `parent` across `hexside`.
    pub(crate) fn push(&mut self, parent: NodeId, hexside: Hexside, cost: StepCost) -> NodeId {
        let p = *self.get(parent);
        self.push_node(ArenaNode {
            coords: p.coords.neighbor(hexside),
            link: Some(Link {
                parent,
                hexside,
                step: cost,
            }),
            cost: p.cost + cost.get(),
            steps: p.steps + 1,
        })
    }

    fn push_node(&mut self, node: ArenaNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Path from a node of a reverse search back to that search's root.
    ///
    /// A reverse search grows from the destination, so the chain from `id`
    /// to the root is already in travel order: each node is left across the
    /// reverse of the hexside that reached it.
    pub(crate) fn reverse_path(&self, id: NodeId) -> DirectedPath {
        let mut chain = Vec::with_capacity(self.get(id).steps as usize);
        let mut cur = id;
        while let Some(link) = self.get(cur).link {
            chain.push((cur, link));
            cur = link.parent;
        }
        let mut path = DirectedPath::new(self.get(cur).coords);
        for &(c, link) in chain.iter().rev() {
            path = path.add_step(self.get(c).coords, link.hexside.reverse(), link.step);
        }
        path
    }

    /// Re-stack the forward half-path ending at `id` onto `path`, which must
    /// start at `id`'s cell.
    ///
    /// Walks from `id` up to the forward root, putting each parent in front
    /// of the path so far.
    pub(crate) fn restack_forward(&self, id: NodeId, mut path: DirectedPath) -> DirectedPath {
        debug_assert_eq!(self.get(id).coords, path.coords());
        let mut child = id;
        while let Some(link) = self.get(child).link {
            path = path.add_step(self.get(link.parent).coords, link.hexside, link.step);
            child = link.parent;
        }
        path
    }
}
