//! ff-graph: flow-graph layer for finflow.
//!
//! Provides:
//! - Core data structures (Node, Link, Category, FlowGraph)
//! - Category palette and the link coloring rule
//! - Incremental builder with index, sign and conservation checks
//! - Per-block inflow/outflow balances
//!
//! # Example
//!
//! ```
//! use ff_core::Money;
//! use ff_graph::{Category, FlowGraphBuilder};
//!
//! let mut builder = FlowGraphBuilder::new();
//! let revenue = builder.add_node("Revenue", Category::RevenueFlow);
//! let block = builder.add_node("Net Revenue", Category::RevenueBlock);
//! let costs = builder.add_node("Costs", Category::CostFlow);
//! let profit = builder.add_node("Profit", Category::RevenueBlock);
//! builder.add_link(revenue, block, Money::new(10, 0));
//! builder.add_link(block, costs, Money::new(4, 0));
//! builder.add_link(block, profit, Money::new(6, 0));
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.nodes().len(), 4);
//! assert_eq!(graph.inflow(block), graph.outflow(block));
//! ```

pub mod builder;
pub mod conservation;
pub mod error;
pub mod graph;
pub mod palette;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::FlowGraphBuilder;
pub use conservation::{BlockBalance, block_balances};
pub use error::GraphError;
pub use graph::{Category, FlowGraph, Link, Node};
pub use palette::{Color, LinkKind};
