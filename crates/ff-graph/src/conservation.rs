//! Inflow/outflow balances of aggregation blocks.

use ff_core::{Money, NodeId};

use crate::graph::FlowGraph;

/// Inflow and outflow totals of one intermediate block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockBalance {
    pub node: NodeId,
    pub inflow: Money,
    pub outflow: Money,
}

impl BlockBalance {
    /// Absolute difference between inflow and outflow.
    pub fn imbalance(&self) -> Money {
        self.inflow.abs_diff(self.outflow)
    }

    /// Balanced within one precision unit (0.1 million).
    pub fn is_balanced(&self) -> bool {
        self.imbalance() <= Money::PRECISION
    }
}

/// Balances of every intermediate block, in node order.
///
/// Terminal blocks (no outbound link) are sinks and are not reported.
pub fn block_balances(graph: &FlowGraph) -> Vec<BlockBalance> {
    graph
        .intermediate_blocks()
        .map(|n| BlockBalance {
            node: n.id,
            inflow: graph.inflow(n.id),
            outflow: graph.outflow(n.id),
        })
        .collect()
}
