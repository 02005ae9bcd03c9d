//! Category palette and the link coloring rule.
//!
//! Colors are pure functions of category: blocks get the dark swatch of
//! their family, flows get the light one.

use crate::graph::Category;

/// CSS color string handed to the renderer.
pub type Color = &'static str;

/// Vertical blocks for revenue and profit.
pub const DARK_GREEN: Color = "#d4d72c";
/// Flows for revenue, profit and credits.
pub const LIGHT_GREEN: Color = "#f1f3b6";
/// Vertical blocks for cost items.
pub const DARK_BLUE: Color = "#008bb9";
/// Flows for cost items.
pub const LIGHT_BLUE: Color = "#C2EBF8";
/// Special credits.
pub const TEAL: Color = "#0d4b5a";

/// Display color of a node.
pub const fn node_color(category: Category) -> Color {
    match category {
        Category::RevenueFlow => LIGHT_GREEN,
        Category::RevenueBlock => DARK_GREEN,
        Category::CostFlow => LIGHT_BLUE,
        Category::CostBlock => DARK_BLUE,
        Category::Credit => TEAL,
    }
}

/// Classification of a link by the category of its target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Target is cost-like (cost flow or cost block).
    Cost,
    /// Target is credit-like.
    Credit,
    /// Anything else.
    Revenue,
}

impl LinkKind {
    /// The cost-like and credit-like target sets are disjoint, so the order
    /// of the checks does not matter.
    pub const fn classify(target: Category) -> Self {
        if target.is_cost() {
            LinkKind::Cost
        } else if target.is_credit() {
            LinkKind::Credit
        } else {
            LinkKind::Revenue
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LinkKind::Cost => "cost",
            LinkKind::Credit => "credit",
            LinkKind::Revenue => "revenue",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            LinkKind::Cost => LIGHT_BLUE,
            LinkKind::Credit | LinkKind::Revenue => LIGHT_GREEN,
        }
    }
}
