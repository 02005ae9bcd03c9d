//! Adyen FY 2024 income statement (EUR million, one decimal).

use ff_core::{FfResult, Money, NodeId};
use ff_graph::{Category, FlowGraph};

use crate::{Flow, LineItem, Reported, build_graph, build_graph_unchecked};

pub const TITLE: &str = "Adyen – FY 2024 Income‑statement Flow (€ m)";
pub const OUTPUT_FILE: &str = "adyen_2024_sankey.html";

// Values as entered from the statement.
pub const NI_REVENUE: Money = Money::new(2225, 6);
pub const FI_COSTS: Money = Money::new(148, 2);
pub const COGS: Money = Money::new(89, 7);
pub const COST_OF_SERVICE: Money = FI_COSTS.plus(COGS); // 237.9
pub const NET_NI_REV: Money = Money::new(1987, 8);

pub const INT_INCOME: Money = Money::new(27, 1);
pub const INT_EXPENSE: Money = Money::new(18, 8);
pub const NET_REVENUE: Money = Money::new(1996, 1);

pub const EMP_BENEFITS: Money = Money::new(701, 2);
pub const AMORT_DEPR: Money = Money::new(104, 5);
pub const OTHER_OPEX: Money = Money::new(309, 6);
pub const OTHER_INCOME: Money = Money::new(7, 0);
pub const OPERATING_PROF: Money = Money::new(887, 8);

pub const FIN_INCOME: Money = Money::new(349, 8);
pub const FIN_EXPENSE: Money = Money::new(7, 9);
/// Net cost.
pub const OTHER_FIN_RES: Money = Money::new(3, 0);
pub const PRETAX_INCOME: Money = Money::new(1226, 7);
pub const INCOME_TAX: Money = Money::new(301, 6);
pub const NET_INCOME: Money = Money::new(925, 2);

/// Net revenue left after operating expenses (880.8).
pub const NET_REVENUE_TO_OPERATING: Money = NET_REVENUE
    .minus(EMP_BENEFITS)
    .minus(AMORT_DEPR)
    .minus(OTHER_OPEX);

/// Operating profit left after finance costs (876.9).
pub const OPERATING_TO_PRETAX: Money = OPERATING_PROF.minus(FIN_EXPENSE).minus(OTHER_FIN_RES);

/// Node ordinals. Must match the order of [`LINE_ITEMS`].
pub mod node {
    use ff_core::NodeId;

    pub const NON_INTEREST_REVENUE: NodeId = NodeId::from_index(0);
    pub const COST_OF_SERVICE: NodeId = NodeId::from_index(1);
    pub const FI_COSTS: NodeId = NodeId::from_index(2);
    pub const COGS: NodeId = NodeId::from_index(3);
    pub const NET_NON_INTEREST_REVENUE: NodeId = NodeId::from_index(4);
    pub const INTEREST_INCOME: NodeId = NodeId::from_index(5);
    pub const INTEREST_EXPENSE: NodeId = NodeId::from_index(6);
    pub const NET_REVENUE: NodeId = NodeId::from_index(7);
    pub const EMPLOYEE_BENEFITS: NodeId = NodeId::from_index(8);
    pub const AMORT_DEPR: NodeId = NodeId::from_index(9);
    pub const OTHER_OPEX: NodeId = NodeId::from_index(10);
    pub const OTHER_INCOME: NodeId = NodeId::from_index(11);
    pub const OPERATING_PROFIT: NodeId = NodeId::from_index(12);
    pub const FINANCE_INCOME: NodeId = NodeId::from_index(13);
    pub const FINANCE_EXPENSE: NodeId = NodeId::from_index(14);
    pub const OTHER_FIN_RESULTS: NodeId = NodeId::from_index(15);
    pub const PRETAX_INCOME: NodeId = NodeId::from_index(16);
    pub const INCOME_TAX: NodeId = NodeId::from_index(17);
    pub const NET_INCOME: NodeId = NodeId::from_index(18);
}

const fn item(label: &'static str, category: Category) -> LineItem {
    LineItem { label, category }
}

pub const LINE_ITEMS: [LineItem; 19] = [
    // revenue + cost-of-service branch
    item("Non-interest Revenue", Category::RevenueFlow),
    item("Cost of Service", Category::CostBlock),
    item("FI Costs", Category::CostFlow),
    item("COGS", Category::CostFlow),
    item("Net Non-interest Revenue", Category::RevenueBlock),
    // interest layer
    item("Interest Income", Category::RevenueFlow),
    item("Interest Expense", Category::CostFlow),
    // net revenue & opex branch
    item("Net Revenue", Category::RevenueBlock),
    item("Employee Benefits", Category::CostFlow),
    item("Amort./Depr.", Category::CostFlow),
    item("Other Opex", Category::CostFlow),
    item("Other Income", Category::Credit),
    // operating profit
    item("Operating Profit", Category::RevenueBlock),
    // finance
    item("Finance Income", Category::RevenueFlow),
    item("Finance Expense", Category::CostFlow),
    item("Other Fin. Results", Category::CostFlow),
    item("Pre-tax Income", Category::RevenueBlock),
    // tax & bottom line
    item("Income Tax", Category::CostFlow),
    item("Net Income", Category::RevenueBlock),
];

pub const FLOWS: [Flow; 18] = [
    Flow::new(node::NON_INTEREST_REVENUE, node::COST_OF_SERVICE, COST_OF_SERVICE),
    Flow::new(node::NON_INTEREST_REVENUE, node::NET_NON_INTEREST_REVENUE, NET_NI_REV),
    Flow::new(node::COST_OF_SERVICE, node::FI_COSTS, FI_COSTS),
    Flow::new(node::COST_OF_SERVICE, node::COGS, COGS),
    Flow::new(node::NET_NON_INTEREST_REVENUE, node::NET_REVENUE, NET_NI_REV),
    // interest adjusts net revenue
    Flow::new(node::INTEREST_INCOME, node::NET_REVENUE, INT_INCOME),
    Flow::new(node::NET_REVENUE, node::INTEREST_EXPENSE, INT_EXPENSE),
    Flow::new(node::NET_REVENUE, node::EMPLOYEE_BENEFITS, EMP_BENEFITS),
    Flow::new(node::NET_REVENUE, node::AMORT_DEPR, AMORT_DEPR),
    Flow::new(node::NET_REVENUE, node::OTHER_OPEX, OTHER_OPEX),
    Flow::new(node::NET_REVENUE, node::OPERATING_PROFIT, NET_REVENUE_TO_OPERATING),
    Flow::new(node::OTHER_INCOME, node::OPERATING_PROFIT, OTHER_INCOME),
    Flow::new(node::OPERATING_PROFIT, node::FINANCE_EXPENSE, FIN_EXPENSE),
    Flow::new(node::OPERATING_PROFIT, node::OTHER_FIN_RESULTS, OTHER_FIN_RES),
    Flow::new(node::OPERATING_PROFIT, node::PRETAX_INCOME, OPERATING_TO_PRETAX),
    Flow::new(node::FINANCE_INCOME, node::PRETAX_INCOME, FIN_INCOME),
    Flow::new(node::PRETAX_INCOME, node::INCOME_TAX, INCOME_TAX),
    Flow::new(node::PRETAX_INCOME, node::NET_INCOME, NET_INCOME),
];

/// Totals as printed in the statement, for cross-checking the flow totals.
pub const REPORTED: [Reported; 7] = [
    Reported {
        node: node::NON_INTEREST_REVENUE,
        amount: NI_REVENUE,
    },
    Reported {
        node: node::COST_OF_SERVICE,
        amount: COST_OF_SERVICE,
    },
    Reported {
        node: node::NET_NON_INTEREST_REVENUE,
        amount: NET_NI_REV,
    },
    Reported {
        node: node::NET_REVENUE,
        amount: NET_REVENUE,
    },
    Reported {
        node: node::OPERATING_PROFIT,
        amount: OPERATING_PROF,
    },
    Reported {
        node: node::PRETAX_INCOME,
        amount: PRETAX_INCOME,
    },
    Reported {
        node: node::NET_INCOME,
        amount: NET_INCOME,
    },
];

/// The FY 2024 flow graph.
pub fn graph() -> FfResult<FlowGraph> {
    build_graph(&LINE_ITEMS, &FLOWS)
}

/// The FY 2024 flow graph without the conservation assertion.
pub fn graph_unchecked() -> FfResult<FlowGraph> {
    build_graph_unchecked(&LINE_ITEMS, &FLOWS)
}

/// Look up a node ordinal by its label.
pub fn node_id(label: &str) -> Option<NodeId> {
    LINE_ITEMS
        .iter()
        .position(|item| item.label == label)
        .map(|i| NodeId::from_index(i as u32))
}
