//! matgraph: run BFS, DFS or Dijkstra over a weight-matrix file.
//!
//! Vertex labels on the command line and in output are 1-based; the
//! conversion to core ids happens in `vertex.rs` only.

mod cli;
mod commands;
mod logging;
mod vertex;

use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = commands::run(&cli, &mut out).and_then(|()| out.flush().map_err(Into::into));
    tracing::debug!(elapsed = ?start.elapsed(), ok = result.is_ok(), "command finished");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
