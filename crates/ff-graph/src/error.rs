//! Graph-specific error types.

use ff_core::{FfError, LinkId, Money, NodeId};

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A link refers to a node ordinal that doesn't exist.
    InvalidNodeRef {
        link: LinkId,
        node: NodeId,
        node_count: usize,
    },

    /// A link carries a negative magnitude.
    NegativeMagnitude { link: LinkId, magnitude: Money },

    /// An intermediate block's inflow and outflow differ by more than 0.1.
    Unbalanced {
        node: NodeId,
        label: String,
        inflow: Money,
        outflow: Money,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNodeRef {
                link,
                node,
                node_count,
            } => {
                write!(
                    f,
                    "Link {} refers to node {} but only {} nodes exist",
                    link, node, node_count
                )
            }
            GraphError::NegativeMagnitude { link, magnitude } => {
                write!(f, "Link {} has negative magnitude {}", link, magnitude)
            }
            GraphError::Unbalanced {
                node,
                label,
                inflow,
                outflow,
            } => {
                write!(
                    f,
                    "Block {} '{}' is unbalanced: inflow {} vs outflow {}",
                    node, label, inflow, outflow
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for FfError {
    fn from(err: GraphError) -> Self {
        FfError::Invariant {
            what: err.to_string(),
        }
    }
}
