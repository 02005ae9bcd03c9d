//! Mapping from a flow graph onto a plotly Sankey trace.

use ff_graph::{Color, FlowGraph};
use plotly::common::Font;
use plotly::sankey::{Line as SankeyLine, Link as SankeyLink, Node as SankeyNode};
use plotly::{Layout, Plot, Sankey};

use crate::config::RenderConfig;

/// Hover label: source, target and the value to one decimal.
pub fn hover_template(config: &RenderConfig) -> String {
    format!(
        "%{{source.label}} → %{{target.label}}<br>{}%{{value:,.1f}}{}<extra></extra>",
        config.currency_prefix, config.unit_suffix
    )
}

/// Build the plot. Node and link order follow the graph's ordinals, so the
/// renderer sees exactly the tables the builder validated.
pub fn build_plot(graph: &FlowGraph, config: &RenderConfig) -> Plot {
    let nodes = graph.nodes();
    let links = graph.links();

    let labels: Vec<&str> = nodes.iter().map(|n| n.label.as_str()).collect();
    let node_colors: Vec<Color> = nodes.iter().map(|n| n.color).collect();

    let sources: Vec<usize> = links.iter().map(|l| l.source.as_usize()).collect();
    let targets: Vec<usize> = links.iter().map(|l| l.target.as_usize()).collect();
    let values: Vec<f64> = links.iter().map(|l| l.magnitude.to_millions()).collect();
    let link_colors: Vec<Color> = links.iter().map(|l| l.color).collect();

    let trace = Sankey::new()
        .arrangement(config.arrangement.to_plotly())
        .node(
            SankeyNode::new()
                .pad(config.pad)
                .thickness(config.thickness)
                .line(
                    SankeyLine::new()
                        .width(config.node_line_width)
                        .color(config.node_line_color.clone()),
                )
                .label(labels)
                .color_array(node_colors),
        )
        .link(
            SankeyLink::new()
                .source(sources)
                .target(targets)
                .value(values)
                .color_array(link_colors)
                .hover_template(&hover_template(config)),
        );

    let layout = Layout::new()
        .title(config.title.as_str())
        .font(Font::new().size(config.font_size));

    tracing::debug!(
        nodes = nodes.len(),
        links = links.len(),
        "sankey trace built"
    );

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_template_uses_currency() {
        let t = hover_template(&RenderConfig::default());
        assert_eq!(
            t,
            "%{source.label} → %{target.label}<br>€%{value:,.1f} m<extra></extra>"
        );
    }

    #[test]
    fn hover_template_custom_currency() {
        let c = RenderConfig::default().with_currency("$", "M");
        assert!(hover_template(&c).contains("<br>$%{value:,.1f}M<extra>"));
    }
}
