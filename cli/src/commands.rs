use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use matgraph_core::{Graph, GraphConfig, ShortestPaths, Weight};
use serde::Serialize;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::vertex::{label, parse_label, relabel_error};

#[derive(Debug, Serialize)]
struct AdjacencyReport {
    vertex_count: usize,
    edge_count: usize,
    vertices: Vec<VertexEntry>,
}

#[derive(Debug, Serialize)]
struct VertexEntry {
    vertex: usize,
    neighbors: Vec<NeighborEntry>,
}

#[derive(Debug, Serialize)]
struct NeighborEntry {
    vertex: usize,
    weight: Weight,
}

#[derive(Debug, Serialize)]
struct TraversalReport {
    algorithm: &'static str,
    start: usize,
    order: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct DistanceReport {
    start: usize,
    distances: Vec<DistanceEntry>,
}

#[derive(Debug, Serialize)]
struct DistanceEntry {
    vertex: usize,
    /// `null` when unreachable.
    distance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<usize>>,
}

/// Execute the parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = GraphConfig::with_max_vertices(cli.max_vertices)?;

    match &cli.command {
        Commands::Adjacency { file } => {
            let graph = load(file, &config)?;
            render_adjacency(&adjacency_report(&graph), cli.format, out)
        }
        Commands::Bfs { file, start } => {
            let graph = load(file, &config)?;
            let start = parse_label(start.start, &graph)?;
            let order: Vec<usize> = matgraph_core::bfs(&graph, start)
                .map_err(relabel_error)?
                .map(label)
                .collect();
            render_traversal(&traversal_report("bfs", start, order), cli.format, out)
        }
        Commands::Dfs { file, start } => {
            let graph = load(file, &config)?;
            let start = parse_label(start.start, &graph)?;
            let order: Vec<usize> = matgraph_core::dfs(&graph, start)
                .map_err(relabel_error)?
                .map(label)
                .collect();
            render_traversal(&traversal_report("dfs", start, order), cli.format, out)
        }
        Commands::Dijkstra { file, start, paths } => {
            let graph = load(file, &config)?;
            let start = parse_label(start.start, &graph)?;
            let result = matgraph_core::dijkstra(&graph, start).map_err(relabel_error)?;
            render_distances(&distance_report(&result, *paths), cli.format, out)
        }
    }
}

fn load(path: &Path, config: &GraphConfig) -> Result<Graph> {
    let graph = matgraph_core::load_graph(path, config)
        .map_err(relabel_error)
        .with_context(|| format!("failed to load graph from {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        vertex_count = graph.vertex_count(),
        edge_count = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

fn adjacency_report(graph: &Graph) -> AdjacencyReport {
    let vertices = (0..graph.vertex_count())
        .map(|v| VertexEntry {
            vertex: label(v),
            neighbors: graph
                .edges(v)
                .map(|(to, weight)| NeighborEntry {
                    vertex: label(to),
                    weight,
                })
                .collect(),
        })
        .collect();

    AdjacencyReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        vertices,
    }
}

fn traversal_report(algorithm: &'static str, start: usize, order: Vec<usize>) -> TraversalReport {
    TraversalReport {
        algorithm,
        start: label(start),
        order,
    }
}

fn distance_report(result: &ShortestPaths, with_paths: bool) -> DistanceReport {
    let distances = result
        .iter()
        .map(|(v, distance)| DistanceEntry {
            vertex: label(v),
            distance,
            path: if with_paths {
                result
                    .path_to(v)
                    .map(|p| p.into_iter().map(label).collect())
            } else {
                None
            },
        })
        .collect();

    DistanceReport {
        start: label(result.start()),
        distances,
    }
}

fn render_adjacency(report: &AdjacencyReport, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(report, out);
    }

    writeln!(out, "Adjacency List:")?;
    for entry in &report.vertices {
        write!(out, "Vertex {}:", entry.vertex)?;
        if entry.neighbors.is_empty() {
            write!(out, " (none)")?;
        }
        for n in &entry.neighbors {
            write!(out, " -> {} ({})", n.vertex, n.weight)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_traversal(report: &TraversalReport, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(report, out);
    }

    let order: Vec<String> = report.order.iter().map(|v| v.to_string()).collect();
    writeln!(
        out,
        "{} order from vertex {}: {}",
        report.algorithm.to_uppercase(),
        report.start,
        order.join(" ")
    )?;
    Ok(())
}

fn render_distances(report: &DistanceReport, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(report, out);
    }

    for entry in &report.distances {
        let distance = entry
            .distance
            .map(|d| d.to_string())
            .unwrap_or_else(|| "inf".to_string());
        write!(
            out,
            "Shortest distance from vertex {} to vertex {}: {}",
            report.start, entry.vertex, distance
        )?;
        if let Some(path) = &entry.path {
            let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            write!(out, " via {}", hops.join(" -> "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_json<T: Serialize>(value: &T, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_matrix(&[[0, 1, 4], [1, 0, 2], [4, 2, 0]], &GraphConfig::default()).unwrap()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_adjacency_human() {
        let g = Graph::from_matrix(&[[0, 1, 4], [0, 0, 0], [4, 2, 0]], &GraphConfig::default())
            .unwrap();
        let text = render(|out| render_adjacency(&adjacency_report(&g), OutputFormat::Human, out));
        assert_eq!(
            text,
            "Adjacency List:\nVertex 1: -> 2 (1) -> 3 (4)\nVertex 2: (none)\nVertex 3: -> 1 (4) -> 2 (2)\n"
        );
    }

    #[test]
    fn test_adjacency_json() {
        let text = render(|out| render_adjacency(&adjacency_report(&triangle()), OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["vertex_count"], 3);
        assert_eq!(value["edge_count"], 6);
        assert_eq!(value["vertices"][0]["neighbors"][1]["vertex"], 3);
        assert_eq!(value["vertices"][0]["neighbors"][1]["weight"], 4);
    }

    #[test]
    fn test_traversal_human() {
        let report = traversal_report("dfs", 0, vec![1, 2, 3]);
        let text = render(|out| render_traversal(&report, OutputFormat::Human, out));
        assert_eq!(text, "DFS order from vertex 1: 1 2 3\n");
    }

    #[test]
    fn test_distances_human_with_unreachable() {
        let g = Graph::from_matrix(&[[0, 0], [0, 0]], &GraphConfig::default()).unwrap();
        let result = matgraph_core::dijkstra(&g, 0).unwrap();
        let text = render(|out| render_distances(&distance_report(&result, false), OutputFormat::Human, out));
        assert_eq!(
            text,
            "Shortest distance from vertex 1 to vertex 1: 0\nShortest distance from vertex 1 to vertex 2: inf\n"
        );
    }

    #[test]
    fn test_distances_with_paths() {
        let result = matgraph_core::dijkstra(&triangle(), 0).unwrap();
        let text = render(|out| render_distances(&distance_report(&result, true), OutputFormat::Human, out));
        assert!(text.contains("to vertex 3: 3 via 1 -> 2 -> 3"));
    }

    #[test]
    fn test_distances_json_null_for_unreachable() {
        let g = Graph::from_matrix(&[[0, 5], [0, 0]], &GraphConfig::default()).unwrap();
        let result = matgraph_core::dijkstra(&g, 1).unwrap();
        let text = render(|out| render_distances(&distance_report(&result, false), OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["start"], 2);
        assert!(value["distances"][0]["distance"].is_null());
        assert_eq!(value["distances"][1]["distance"], 0);
        assert!(value["distances"][0].get("path").is_none());
    }
}
