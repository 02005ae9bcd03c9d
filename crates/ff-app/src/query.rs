//! Inspection queries over the flow graph: tables and balances.

use ff_core::{Money, NodeId};
use ff_graph::{FlowGraph, block_balances};
use ff_statement::Reported;
use serde::Serialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRow {
    pub index: u32,
    pub label: String,
    pub category: &'static str,
    pub color: &'static str,
    pub inflow: Money,
    pub outflow: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRow {
    pub index: u32,
    pub source: u32,
    pub target: u32,
    pub source_label: String,
    pub target_label: String,
    pub magnitude: Money,
    pub kind: &'static str,
    pub color: &'static str,
}

/// The node and link tables as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowTable {
    pub nodes: Vec<NodeRow>,
    pub links: Vec<LinkRow>,
}

/// Inflow/outflow of one intermediate block, with the statement figure
/// when one is reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceRow {
    pub label: String,
    pub inflow: Money,
    pub outflow: Money,
    pub imbalance: Money,
    pub reported: Option<Money>,
    pub balanced: bool,
}

pub fn flow_table(graph: &FlowGraph) -> FlowTable {
    let label = |id: NodeId| {
        graph
            .node(id)
            .map(|n| n.label.clone())
            .unwrap_or_default()
    };

    let nodes = graph
        .nodes()
        .iter()
        .map(|n| NodeRow {
            index: n.id.index(),
            label: n.label.clone(),
            category: n.category.as_str(),
            color: n.color,
            inflow: graph.inflow(n.id),
            outflow: graph.outflow(n.id),
        })
        .collect();

    let links = graph
        .links()
        .iter()
        .map(|l| LinkRow {
            index: l.id.index(),
            source: l.source.index(),
            target: l.target.index(),
            source_label: label(l.source),
            target_label: label(l.target),
            magnitude: l.magnitude,
            kind: l.kind.as_str(),
            color: l.color,
        })
        .collect();

    FlowTable { nodes, links }
}

pub fn conservation_summary(graph: &FlowGraph, reported: &[Reported]) -> Vec<BalanceRow> {
    block_balances(graph)
        .into_iter()
        .map(|b| BalanceRow {
            label: graph
                .node(b.node)
                .map(|n| n.label.clone())
                .unwrap_or_default(),
            inflow: b.inflow,
            outflow: b.outflow,
            imbalance: b.imbalance(),
            reported: reported
                .iter()
                .find(|r| r.node == b.node)
                .map(|r| r.amount),
            balanced: b.is_balanced(),
        })
        .collect()
}

/// Fail with the first unbalanced block, if any.
pub fn ensure_balanced(rows: &[BalanceRow]) -> AppResult<()> {
    match rows.iter().find(|r| !r.balanced) {
        Some(row) => Err(AppError::Unbalanced(format!(
            "'{}' inflow {} vs outflow {}",
            row.label, row.inflow, row.outflow
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(balanced: bool) -> BalanceRow {
        BalanceRow {
            label: "Block".into(),
            inflow: Money::new(10, 0),
            outflow: Money::new(9, 0),
            imbalance: Money::new(1, 0),
            reported: None,
            balanced,
        }
    }

    #[test]
    fn ensure_balanced_reports_first_failure() {
        assert!(ensure_balanced(&[row(true)]).is_ok());
        let err = ensure_balanced(&[row(true), row(false)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conservation check failed: 'Block' inflow 10.0 vs outflow 9.0"
        );
    }
}
