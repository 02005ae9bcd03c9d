//! Shared application service layer for finflow.
//!
//! Centralizes the construct -> render -> persist sequence and the
//! inspection queries so the CLI stays a thin argument parser.

pub mod error;
pub mod query;
pub mod report_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use query::{
    BalanceRow, FlowTable, LinkRow, NodeRow, conservation_summary, ensure_balanced, flow_table,
};
pub use report_service::{ReportRequest, ReportResponse, default_config, generate_report};
