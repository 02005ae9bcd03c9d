use clap::{Parser, Subcommand};
use ff_app::{
    AppResult, BalanceRow, ReportRequest, conservation_summary, default_config, ensure_balanced,
    flow_table, generate_report,
};
use ff_statement::fy2024;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ff-cli")]
#[command(about = "finflow - income-statement flow (Sankey) diagrams", long_about = None)]
struct Cli {
    /// Defaults to `render` with its default options
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the FY 2024 diagram to an HTML file
    Render {
        /// Output HTML path (overwritten if it exists)
        #[arg(short, long, default_value = fy2024::OUTPUT_FILE)]
        output: PathBuf,
        /// Open the written file in the default viewer
        #[arg(long)]
        open: bool,
        /// Chart title
        #[arg(long)]
        title: Option<String>,
    },
    /// Check that every intermediate block conserves flow
    Check,
    /// Print the node and link tables
    Table {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    // Quiet by default so the confirmation line is the only output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => cmd_render(Path::new(fy2024::OUTPUT_FILE), false, None),
        Some(Commands::Render {
            output,
            open,
            title,
        }) => cmd_render(&output, open, title),
        Some(Commands::Check) => cmd_check(),
        Some(Commands::Table { json }) => cmd_table(json),
    }
}

fn cmd_render(output: &Path, open: bool, title: Option<String>) -> AppResult<()> {
    let mut config = default_config();
    if let Some(title) = title {
        config = config.with_title(title);
    }

    let response = generate_report(&ReportRequest {
        output,
        config,
        open,
    })?;
    tracing::debug!(
        bytes = response.bytes,
        nodes = response.node_count,
        links = response.link_count,
        "report generated"
    );

    println!("✅  {} written", response.output.display());
    Ok(())
}

fn cmd_check() -> AppResult<()> {
    let graph = fy2024::graph_unchecked()?;
    let rows = conservation_summary(&graph, &fy2024::REPORTED);

    println!(
        "{:<26} {:>10} {:>10} {:>10}",
        "Block", "Inflow", "Outflow", "Reported"
    );
    for row in &rows {
        print_balance(row);
    }

    ensure_balanced(&rows)?;
    println!("✓ All {} blocks balance", rows.len());
    Ok(())
}

fn print_balance(row: &BalanceRow) {
    let reported = row
        .reported
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mark = if row.balanced { "✓" } else { "✗" };
    println!(
        "{:<26} {:>10} {:>10} {:>10}  {}",
        row.label,
        row.inflow.to_string(),
        row.outflow.to_string(),
        reported,
        mark
    );
}

fn cmd_table(json: bool) -> AppResult<()> {
    let graph = fy2024::graph()?;
    let table = flow_table(&graph);

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("Nodes:");
    for n in &table.nodes {
        println!(
            "  {:>2}  {:<26} {:<14} {}",
            n.index, n.label, n.category, n.color
        );
    }
    println!("\nLinks:");
    for l in &table.links {
        println!(
            "  {:>2} -> {:<2}  {:>8}  {} -> {}",
            l.source,
            l.target,
            l.magnitude.to_string(),
            l.source_label,
            l.target_label
        );
    }
    Ok(())
}
