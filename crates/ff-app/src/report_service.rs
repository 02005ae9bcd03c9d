//! Construct, render and persist the FY 2024 diagram.

use std::path::{Path, PathBuf};

use ff_render::RenderConfig;
use ff_statement::fy2024;

use crate::error::{AppError, AppResult};

/// Request to produce the diagram.
#[derive(Debug, Clone)]
pub struct ReportRequest<'a> {
    pub output: &'a Path,
    pub config: RenderConfig,
    /// Open the written file in the default viewer afterwards.
    pub open: bool,
}

/// What was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResponse {
    pub output: PathBuf,
    pub bytes: u64,
    pub node_count: usize,
    pub link_count: usize,
}

/// Render settings for the FY 2024 chart.
pub fn default_config() -> RenderConfig {
    RenderConfig::new(fy2024::TITLE)
}

/// Build the graph, render it and write it to `request.output`.
///
/// Any failure aborts the sequence; an existing file at the output path is
/// overwritten only once rendering has succeeded.
pub fn generate_report(request: &ReportRequest<'_>) -> AppResult<ReportResponse> {
    tracing::debug!("building FY 2024 flow graph");
    let graph = fy2024::graph()?;

    tracing::debug!(output = %request.output.display(), "rendering diagram");
    let bytes = ff_render::render_to_file(&graph, &request.config, request.output)?;

    if request.open {
        tracing::debug!("opening preview");
        open::that(request.output).map_err(|source| AppError::Preview {
            path: request.output.to_path_buf(),
            source,
        })?;
    }

    Ok(ReportResponse {
        output: request.output.to_path_buf(),
        bytes,
        node_count: graph.nodes().len(),
        link_count: graph.links().len(),
    })
}
