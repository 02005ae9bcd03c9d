//! Graph validation logic.

use ff_core::FfResult;

use crate::builder::LinkSpec;
use crate::conservation::block_balances;
use crate::error::GraphError;
use crate::graph::{FlowGraph, Node};

/// Validate the link table: every endpoint exists and no magnitude is negative.
pub(crate) fn validate_links(nodes: &[Node], links: &[LinkSpec]) -> FfResult<()> {
    for link in links {
        for node in [link.source, link.target] {
            if node.as_usize() >= nodes.len() {
                return Err(GraphError::InvalidNodeRef {
                    link: link.id,
                    node,
                    node_count: nodes.len(),
                }
                .into());
            }
        }
    }

    for link in links {
        if link.magnitude.is_negative() {
            return Err(GraphError::NegativeMagnitude {
                link: link.id,
                magnitude: link.magnitude,
            }
            .into());
        }
    }

    Ok(())
}

/// Validate conservation of flow across every intermediate block.
pub(crate) fn validate_conservation(graph: &FlowGraph) -> FfResult<()> {
    for balance in block_balances(graph) {
        if !balance.is_balanced() {
            let label = graph
                .node(balance.node)
                .map(|n| n.label.clone())
                .unwrap_or_default();
            return Err(GraphError::Unbalanced {
                node: balance.node,
                label,
                inflow: balance.inflow,
                outflow: balance.outflow,
            }
            .into());
        }
    }
    Ok(())
}
