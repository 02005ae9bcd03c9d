//! ff-render: turns a flow graph into an interactive Sankey document.
//!
//! Rendering is delegated to `plotly`; this crate maps nodes and links onto
//! a Sankey trace, applies the layout settings from [`RenderConfig`] and
//! writes the resulting HTML to disk.

pub mod config;
pub mod error;
pub mod persist;
pub mod sankey;

use std::path::Path;

use ff_graph::FlowGraph;

pub use config::{Arrangement, RenderConfig};
pub use error::{RenderError, RenderResult};
pub use persist::write_html;
pub use sankey::{build_plot, hover_template};

/// Render `graph` to a standalone HTML document. plotly.js is embedded
/// inline, so the file opens without network access.
pub fn render_html(graph: &FlowGraph, config: &RenderConfig) -> String {
    strip_remote_scripts(&build_plot(graph, config).to_html())
}

/// Drop `<script src="http...">` tags. plotly's template pulls MathJax from
/// a CDN even though no label uses LaTeX.
fn strip_remote_scripts(html: &str) -> String {
    const OPEN: &str = "<script src=\"http";
    const CLOSE: &str = "</script>";

    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let Some(end) = rest[start..].find(CLOSE) else {
            rest = &rest[start..];
            break;
        };
        rest = &rest[start + end + CLOSE.len()..];
    }
    out.push_str(rest);
    out
}

/// Render `graph` and write it to `path`, overwriting any existing file.
/// Returns the number of bytes written.
pub fn render_to_file(
    graph: &FlowGraph,
    config: &RenderConfig,
    path: &Path,
) -> RenderResult<u64> {
    let html = render_html(graph, config);
    write_html(path, &html)
}

#[cfg(test)]
mod tests {
    use super::strip_remote_scripts;

    #[test]
    fn remote_script_tags_are_removed() {
        let html = "<head>\n<script src=\"https://cdn.example/m.js\"></script>\n\
                    <script type=\"text/javascript\">var a = 1;</script>\n</head>";
        let out = strip_remote_scripts(html);
        assert!(!out.contains("cdn.example"));
        assert!(out.contains("var a = 1;"));
    }

    #[test]
    fn html_without_remote_scripts_is_unchanged() {
        let html = "<div id=\"plot\"></div><script>Plotly.newPlot()</script>";
        assert_eq!(strip_remote_scripts(html), html);
    }
}
