//! Argument definitions for the `matgraph` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use matgraph_core::DEFAULT_MAX_VERTICES;

/// Load a weight-matrix graph and run BFS, DFS or Dijkstra over it
#[derive(Parser, Debug)]
#[command(name = "matgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Largest accepted vertex count (and row width)
    #[arg(
        long,
        global = true,
        env = "MATGRAPH_MAX_VERTICES",
        default_value_t = DEFAULT_MAX_VERTICES
    )]
    pub max_vertices: usize,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. "debug" or "matgraph_core=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show each vertex's neighbors with edge weights
    Adjacency {
        /// Matrix file: one row per line, whitespace-separated weights
        file: PathBuf,
    },

    /// Breadth-first visitation order
    Bfs {
        file: PathBuf,

        #[command(flatten)]
        start: StartArg,
    },

    /// Depth-first (pre-order) visitation order
    Dfs {
        file: PathBuf,

        #[command(flatten)]
        start: StartArg,
    },

    /// Shortest distances from the start vertex (non-negative weights only)
    Dijkstra {
        file: PathBuf,

        #[command(flatten)]
        start: StartArg,

        /// Also print one shortest path per reachable vertex
        #[arg(long)]
        paths: bool,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct StartArg {
    /// Start vertex, 1-based
    #[arg(long, short, default_value_t = 1)]
    pub start: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["matgraph", "bfs", "g.txt"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Bfs { file, start } => {
                assert_eq!(file, PathBuf::from("g.txt"));
                assert_eq!(start.start, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "matgraph", "dijkstra", "g.txt", "--start", "3", "--paths", "--format", "json",
            "--max-vertices", "500",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.max_vertices, 500);
        match cli.command {
            Commands::Dijkstra { start, paths, .. } => {
                assert_eq!(start.start, 3);
                assert!(paths);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_usage_error() {
        assert!(Cli::try_parse_from(["matgraph", "dfs"]).is_err());
    }
}
