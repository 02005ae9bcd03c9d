//! Core flow-graph data structures.

use core::fmt;

use ff_core::{LinkId, Money, NodeId};

use crate::palette::{Color, LinkKind};

/// Semantic category of an income-statement line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A revenue or profit item flowing through.
    RevenueFlow,
    /// A revenue or profit aggregation point.
    RevenueBlock,
    /// A cost item flowing through.
    CostFlow,
    /// A cost aggregation point.
    CostBlock,
    /// An operating credit (other income).
    Credit,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::RevenueFlow,
        Category::RevenueBlock,
        Category::CostFlow,
        Category::CostBlock,
        Category::Credit,
    ];

    pub const fn is_block(self) -> bool {
        matches!(self, Category::RevenueBlock | Category::CostBlock)
    }

    pub const fn is_cost(self) -> bool {
        matches!(self, Category::CostFlow | Category::CostBlock)
    }

    pub const fn is_credit(self) -> bool {
        matches!(self, Category::Credit)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::RevenueFlow => "revenue-flow",
            Category::RevenueBlock => "revenue-block",
            Category::CostFlow => "cost-flow",
            Category::CostBlock => "cost-block",
            Category::Credit => "credit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line item of the income statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub category: Category,
    pub color: Color,
}

/// A directed, magnitude-weighted edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub source: NodeId,
    pub target: NodeId,
    pub magnitude: Money,
    pub kind: LinkKind,
    pub color: Color,
}

/// A validated, immutable flow graph.
///
/// Nodes and links are stored in ordinal order. Adjacency is kept in two
/// compact offset tables: node i's inbound links are
/// `in_links[in_offsets[i]..in_offsets[i + 1]]`, and likewise for outbound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) links: Vec<Link>,
    pub(crate) in_offsets: Vec<usize>,
    pub(crate) in_links: Vec<LinkId>,
    pub(crate) out_offsets: Vec<usize>,
    pub(crate) out_links: Vec<LinkId>,
}

impl FlowGraph {
    /// Return all nodes in ordinal order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all links in declaration order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_usize())
    }

    /// Get a link by ID (returns None if ID out of bounds).
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.as_usize())
    }

    /// First node carrying `label`.
    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Links whose target is `node`.
    pub fn inbound(&self, node: NodeId) -> impl Iterator<Item = &Link> + '_ {
        Self::adjacent(&self.in_offsets, &self.in_links, node)
            .iter()
            .map(|&id| &self.links[id.as_usize()])
    }

    /// Links whose source is `node`.
    pub fn outbound(&self, node: NodeId) -> impl Iterator<Item = &Link> + '_ {
        Self::adjacent(&self.out_offsets, &self.out_links, node)
            .iter()
            .map(|&id| &self.links[id.as_usize()])
    }

    /// Total magnitude entering `node`.
    pub fn inflow(&self, node: NodeId) -> Money {
        self.inbound(node).map(|l| l.magnitude).sum()
    }

    /// Total magnitude leaving `node`.
    pub fn outflow(&self, node: NodeId) -> Money {
        self.outbound(node).map(|l| l.magnitude).sum()
    }

    /// Block nodes that aggregate flow: at least one inbound and one
    /// outbound link. Root and terminal blocks are not included.
    pub fn intermediate_blocks(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| {
            n.category.is_block()
                && self.inbound(n.id).next().is_some()
                && self.outbound(n.id).next().is_some()
        })
    }

    fn adjacent<'a>(offsets: &[usize], flat: &'a [LinkId], node: NodeId) -> &'a [LinkId] {
        let idx = node.as_usize();
        if idx + 1 >= offsets.len() {
            return &[];
        }
        &flat[offsets[idx]..offsets[idx + 1]]
    }
}
