//! Layout settings for the Sankey trace.

use plotly::sankey;

/// How the renderer may move nodes after layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arrangement {
    /// Nodes snap to the nearest column when dragged.
    #[default]
    Snap,
    Perpendicular,
    Freeform,
    Fixed,
}

impl Arrangement {
    pub(crate) fn to_plotly(self) -> sankey::Arrangement {
        match self {
            Arrangement::Snap => sankey::Arrangement::Snap,
            Arrangement::Perpendicular => sankey::Arrangement::Perpendicular,
            Arrangement::Freeform => sankey::Arrangement::Freeform,
            Arrangement::Fixed => sankey::Arrangement::Fixed,
        }
    }
}

/// Rendering configuration.
///
/// Defaults reproduce the FY 2024 chart: snap arrangement, 16 px node
/// padding, 18 px node thickness, a thin grey outline, 11 pt font and a
/// hover label in EUR millions.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub title: String,
    pub arrangement: Arrangement,
    pub pad: usize,
    pub thickness: usize,
    pub node_line_width: f64,
    pub node_line_color: String,
    pub font_size: usize,
    /// Printed before the value in the hover label.
    pub currency_prefix: String,
    /// Printed after the value in the hover label.
    pub unit_suffix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            arrangement: Arrangement::Snap,
            pad: 16,
            thickness: 18,
            node_line_width: 0.4,
            node_line_color: "grey".to_string(),
            font_size: 11,
            currency_prefix: "€".to_string(),
            unit_suffix: " m".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    pub fn with_node_size(mut self, pad: usize, thickness: usize) -> Self {
        self.pad = pad;
        self.thickness = thickness;
        self
    }

    pub fn with_currency(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.currency_prefix = prefix.into();
        self.unit_suffix = suffix.into();
        self
    }
}
