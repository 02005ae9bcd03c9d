//! ff-statement: hand-entered income statements for finflow.
//!
//! Each fiscal year lives in its own module as literal constants: the line
//! items in ordinal order, the flows between them, and the totals reported in
//! the published statement.

pub mod fy2024;

use ff_core::{FfResult, Money, NodeId};
use ff_graph::{Category, FlowGraph, FlowGraphBuilder};

/// One income-statement line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub label: &'static str,
    pub category: Category,
}

/// One flow between two line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flow {
    pub source: NodeId,
    pub target: NodeId,
    pub magnitude: Money,
}

impl Flow {
    pub const fn new(source: NodeId, target: NodeId, magnitude: Money) -> Self {
        Self {
            source,
            target,
            magnitude,
        }
    }
}

/// A figure as printed in the published statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reported {
    pub node: NodeId,
    pub amount: Money,
}

/// Assemble a flow graph from literal tables. Node ordinals follow the order
/// of `items`; conservation is asserted on every intermediate block.
pub fn build_graph(items: &[LineItem], flows: &[Flow]) -> FfResult<FlowGraph> {
    builder(items, flows).build()
}

/// Like [`build_graph`], but leaves conservation to be inspected by the
/// caller instead of failing on the first unbalanced block.
pub fn build_graph_unchecked(items: &[LineItem], flows: &[Flow]) -> FfResult<FlowGraph> {
    builder(items, flows).build_unchecked()
}

fn builder(items: &[LineItem], flows: &[Flow]) -> FlowGraphBuilder {
    let mut builder = FlowGraphBuilder::new();
    for item in items {
        builder.add_node(item.label, item.category);
    }
    for flow in flows {
        builder.add_link(flow.source, flow.target, flow.magnitude);
    }
    builder
}
