use std::io;

use anyhow::Context;
use clap::Parser;
use todoview_cli::{run_session, UreqTransport};
use todoview_core::{TodoClient, TodoView, DEFAULT_BASE_URL};
use tracing::info;

#[derive(Parser)]
#[command(name = "todoview")]
#[command(about = "Todo list kept in sync with a REST backend", long_about = None)]
struct Cli {
    /// Base URL of the todo backend
    #[arg(long, env = "TODOVIEW_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log requests and dispatched effects to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    info!(base_url = %cli.base_url, "starting");
    let mut view = TodoView::new(TodoClient::new(&cli.base_url), UreqTransport::new());
    view.mount();

    run_session(&mut view, io::stdin().lock(), io::stdout().lock()).context("terminal I/O failed")?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the rendered list.
fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("todoview=debug,todoview_core=debug,todoview_cli=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose)
        .init();
}
