//! FY 2024 statement properties.

use ff_core::Money;
use ff_graph::{Category, block_balances, palette};
use ff_statement::fy2024::{self, node};

#[test]
fn statement_builds_with_conservation() {
    let graph = fy2024::graph().unwrap();
    assert_eq!(graph.nodes().len(), 19);
    assert_eq!(graph.links().len(), 18);
}

#[test]
fn every_link_references_a_valid_node() {
    let graph = fy2024::graph().unwrap();
    let count = graph.nodes().len();
    for link in graph.links() {
        assert!(link.source.as_usize() < count);
        assert!(link.target.as_usize() < count);
    }
}

#[test]
fn net_revenue_conserves_flow() {
    let graph = fy2024::graph().unwrap();
    let inbound: Vec<_> = graph
        .inbound(node::NET_REVENUE)
        .map(|l| l.magnitude)
        .collect();
    assert_eq!(inbound, vec![Money::new(1987, 8), Money::new(27, 1)]);

    let outbound: Vec<_> = graph
        .outbound(node::NET_REVENUE)
        .map(|l| l.magnitude)
        .collect();
    assert_eq!(
        outbound,
        vec![
            Money::new(18, 8),
            Money::new(701, 2),
            Money::new(104, 5),
            Money::new(309, 6),
            Money::new(880, 8),
        ]
    );

    assert_eq!(graph.inflow(node::NET_REVENUE), Money::new(2014, 9));
    assert_eq!(graph.outflow(node::NET_REVENUE), Money::new(2014, 9));
}

#[test]
fn every_intermediate_block_balances() {
    let graph = fy2024::graph().unwrap();
    let balances = block_balances(&graph);

    let blocks: Vec<_> = balances.iter().map(|b| b.node).collect();
    assert_eq!(
        blocks,
        vec![
            node::COST_OF_SERVICE,
            node::NET_NON_INTEREST_REVENUE,
            node::NET_REVENUE,
            node::OPERATING_PROFIT,
            node::PRETAX_INCOME,
        ]
    );
    for b in &balances {
        assert!(b.is_balanced(), "{:?}", b);
    }

    // Pre-tax is the one block off by a rounding unit.
    let pretax = balances
        .iter()
        .find(|b| b.node == node::PRETAX_INCOME)
        .unwrap();
    assert_eq!(pretax.inflow, Money::new(1226, 7));
    assert_eq!(pretax.outflow, Money::new(1226, 8));
}

#[test]
fn bottom_line_links() {
    let graph = fy2024::graph().unwrap();

    let net_income: Vec<_> = graph.inbound(node::NET_INCOME).collect();
    assert_eq!(net_income.len(), 1);
    assert_eq!(net_income[0].magnitude, Money::new(925, 2));
    assert_eq!(net_income[0].source, node::PRETAX_INCOME);

    let tax: Vec<_> = graph.inbound(node::INCOME_TAX).collect();
    assert_eq!(tax.len(), 1);
    assert_eq!(tax[0].magnitude, Money::new(301, 6));
    assert_eq!(tax[0].source, node::PRETAX_INCOME);
}

#[test]
fn node_colors_follow_category() {
    let graph = fy2024::graph().unwrap();
    let colors: Vec<_> = graph.nodes().iter().map(|n| n.color).collect();
    let expected = vec![
        palette::LIGHT_GREEN,
        palette::DARK_BLUE,
        palette::LIGHT_BLUE,
        palette::LIGHT_BLUE,
        palette::DARK_GREEN,
        palette::LIGHT_GREEN,
        palette::LIGHT_BLUE,
        palette::DARK_GREEN,
        palette::LIGHT_BLUE,
        palette::LIGHT_BLUE,
        palette::LIGHT_BLUE,
        palette::TEAL,
        palette::DARK_GREEN,
        palette::LIGHT_GREEN,
        palette::LIGHT_BLUE,
        palette::LIGHT_BLUE,
        palette::DARK_GREEN,
        palette::LIGHT_BLUE,
        palette::DARK_GREEN,
    ];
    assert_eq!(colors, expected);
}

#[test]
fn cost_targets_get_cost_color() {
    let graph = fy2024::graph().unwrap();
    let cost_targets = [1_u32, 2, 3, 6, 8, 9, 10, 14, 15, 17];
    for link in graph.links() {
        let expected = if cost_targets.contains(&link.target.index()) {
            palette::LIGHT_BLUE
        } else {
            palette::LIGHT_GREEN
        };
        assert_eq!(link.color, expected, "link {}", link.id);
    }
}

#[test]
fn rebuild_is_identical() {
    assert_eq!(fy2024::graph().unwrap(), fy2024::graph().unwrap());
}

#[test]
fn reported_totals_line_up_with_flows() {
    let graph = fy2024::graph().unwrap();
    for reported in fy2024::REPORTED {
        let n = graph.node(reported.node).unwrap();
        assert!(
            n.category.is_block() || n.category == Category::RevenueFlow,
            "{}",
            n.label
        );
    }
    // Operating profit equals its reported figure exactly.
    assert_eq!(graph.inflow(node::OPERATING_PROFIT), fy2024::OPERATING_PROF);
    // Net income is a terminal sink.
    assert_eq!(graph.outflow(node::NET_INCOME), Money::ZERO);
}
