//! Incremental flow-graph builder.

use ff_core::{FfResult, LinkId, Money, NodeId};

use crate::graph::{Category, FlowGraph, Link, Node};
use crate::palette::{LinkKind, node_color};
use crate::validate;

/// A link as declared, before its endpoints have been checked.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinkSpec {
    pub(crate) id: LinkId,
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) magnitude: Money,
}

/// Builder for constructing a flow graph incrementally.
///
/// Use `add_node` and `add_link` to declare the tables, then call `build()`
/// to validate and freeze them into an immutable `FlowGraph`.
#[derive(Debug, Default)]
pub struct FlowGraphBuilder {
    nodes: Vec<Node>,
    links: Vec<LinkSpec>,
}

impl FlowGraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its ordinal. Its color follows from `category`.
    pub fn add_node(&mut self, label: impl Into<String>, category: Category) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            label: label.into(),
            category,
            color: node_color(category),
        });
        id
    }

    /// Add a directed link. Endpoints are checked in `build()`.
    pub fn add_link(&mut self, source: NodeId, target: NodeId, magnitude: Money) -> LinkId {
        let id = LinkId::from_index(self.links.len() as u32);
        self.links.push(LinkSpec {
            id,
            source,
            target,
            magnitude,
        });
        id
    }

    /// Build and validate the graph, asserting conservation of flow on
    /// every intermediate block.
    pub fn build(self) -> FfResult<FlowGraph> {
        let graph = self.build_unchecked()?;
        validate::validate_conservation(&graph)?;
        Ok(graph)
    }

    /// Build without the conservation check. Index and sign checks still run.
    pub fn build_unchecked(self) -> FfResult<FlowGraph> {
        validate::validate_links(&self.nodes, &self.links)?;

        let links: Vec<Link> = self
            .links
            .iter()
            .map(|spec| {
                let kind = LinkKind::classify(self.nodes[spec.target.as_usize()].category);
                Link {
                    id: spec.id,
                    source: spec.source,
                    target: spec.target,
                    magnitude: spec.magnitude,
                    kind,
                    color: kind.color(),
                }
            })
            .collect();

        let (in_offsets, in_links) = Self::build_adjacency(self.nodes.len(), &links, |l| l.target);
        let (out_offsets, out_links) =
            Self::build_adjacency(self.nodes.len(), &links, |l| l.source);

        tracing::debug!(
            nodes = self.nodes.len(),
            links = links.len(),
            "flow graph assembled"
        );

        Ok(FlowGraph {
            nodes: self.nodes,
            links,
            in_offsets,
            in_links,
            out_offsets,
            out_links,
        })
    }

    /// Build compact adjacency: for each node, the links whose `endpoint` is
    /// that node, in declaration order.
    fn build_adjacency(
        node_count: usize,
        links: &[Link],
        endpoint: impl Fn(&Link) -> NodeId,
    ) -> (Vec<usize>, Vec<LinkId>) {
        let mut per_node: Vec<Vec<LinkId>> = vec![Vec::new(); node_count];
        for link in links {
            per_node[endpoint(link).as_usize()].push(link.id);
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut flat = Vec::with_capacity(links.len());
        offsets.push(0);
        for ids in per_node {
            flat.extend(ids);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
