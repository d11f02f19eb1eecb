use matgraph_core::{Graph, GraphConfig, Weight};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: matgraph-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all        Run all generators and benchmark each (default)");
        println!("  random     Erdos-Renyi, ~10 outgoing edges per vertex");
        println!("  ring       Directed ring lattice, 5 forward neighbors each");
        println!("  tree       Ternary tree (deep BFS levels, long DFS descents)");
        println!("  barbell    Two dense clusters joined by a thin chain");
        println!("  complete   Every vertex linked to every other (worst case)");
        println!();
        println!("Default vertex_count: 2000 (matrix is vertex_count^2 cells)");
        return;
    }

    println!("matgraph-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, fn(usize) -> Vec<Vec<Weight>>)> = match mode {
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "ring" => vec![("Ring lattice", gen_ring)],
        "tree" => vec![("Ternary tree", gen_tree)],
        "barbell" => vec![("Barbell (cluster-chain-cluster)", gen_barbell)],
        "complete" => vec![("Complete graph", gen_complete)],
        "all" => vec![
            ("Erdos-Renyi random", gen_random as fn(usize) -> Vec<Vec<Weight>>),
            ("Ring lattice", gen_ring),
            ("Ternary tree", gen_tree),
            ("Barbell (cluster-chain-cluster)", gen_barbell),
            ("Complete graph", gen_complete),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Vec<Vec<Weight>>, vertex_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let rows = generator(vertex_count);
    let gen_time = t.elapsed();

    let config = match GraphConfig::with_max_vertices(vertex_count.max(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid vertex count: {}", e);
            return;
        }
    };

    let t = Instant::now();
    let graph = match Graph::from_matrix(&rows, &config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Build failed: {}", e);
            return;
        }
    };
    let build_time = t.elapsed();
    drop(rows);

    println!(
        "Generated in {:.2}s, built in {:.1}ms: {} vertices, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        build_time.as_secs_f64() * 1000.0,
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    if graph.is_empty() {
        println!();
        return;
    }

    println!();
    println!("{:>10} {:>12} {:>10}", "algorithm", "reached", "time");
    println!("{:->10} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let reached = matgraph_core::bfs(&graph, 0).map(|w| w.count()).unwrap_or(0);
    print_row("bfs", reached, t);

    let t = Instant::now();
    let reached = matgraph_core::dfs(&graph, 0).map(|w| w.count()).unwrap_or(0);
    print_row("dfs", reached, t);

    let t = Instant::now();
    match matgraph_core::dijkstra(&graph, 0) {
        Ok(sp) => {
            print_row("dijkstra", sp.reachable_count(), t);
            let far = graph.vertex_count() - 1;
            match sp.path_to(far) {
                Some(path) => println!(
                    "Shortest path 0 -> {}: {} hops, weight {}",
                    far,
                    path.len() - 1,
                    sp.distance(far).unwrap_or(0)
                ),
                None => println!("Shortest path 0 -> {}: unreachable", far),
            }
        }
        Err(e) => println!("{:>10} failed: {}", "dijkstra", e),
    }
    println!();
}

fn print_row(algorithm: &str, reached: usize, started: Instant) {
    println!(
        "{:>10} {:>12} {:>8.1}ms",
        algorithm,
        reached,
        started.elapsed().as_secs_f64() * 1000.0
    );
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded, dense n x n output
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn weight(&mut self) -> Weight {
        self.next(100) as Weight + 1
    }
}

fn empty_matrix(n: usize) -> Vec<Vec<Weight>> {
    vec![vec![0; n]; n]
}

/// Erdos-Renyi: ~10 uniformly random outgoing edges per vertex.
fn gen_random(n: usize) -> Vec<Vec<Weight>> {
    let mut rows = empty_matrix(n);
    let mut rng = FastRng::new(54321);

    for _ in 0..n * 10 {
        let from = rng.next(n as u64) as usize;
        let to = rng.next(n as u64) as usize;
        if from != to {
            rows[from][to] = rng.weight();
        }
    }

    rows
}

/// Ring lattice: each vertex points at its next 5 neighbors around the ring.
///
/// Long shortest paths (about n/5 hops to the far side).
fn gen_ring(n: usize) -> Vec<Vec<Weight>> {
    let k = 5usize;
    let mut rows = empty_matrix(n);
    let mut rng = FastRng::new(67890);

    for (i, row) in rows.iter_mut().enumerate() {
        for j in 1..=k.min(n.saturating_sub(1)) {
            row[(i + j) % n] = rng.weight();
        }
    }

    rows
}

/// Ternary tree rooted at 0, edges pointing away from the root.
fn gen_tree(n: usize) -> Vec<Vec<Weight>> {
    let mut rows = empty_matrix(n);
    let mut rng = FastRng::new(42);

    for child in 1..n {
        let parent = (child - 1) / 3;
        rows[parent][child] = rng.weight();
    }

    rows
}

/// Barbell: two dense clusters joined by a one-way chain of 10 vertices.
///
/// Worst case for "find path through bottleneck."
fn gen_barbell(n: usize) -> Vec<Vec<Weight>> {
    let bridge_len = 10usize.min(n);
    let cluster = (n - bridge_len) / 2;
    let mut rows = empty_matrix(n);
    let mut rng = FastRng::new(99999);

    let mut fill_cluster = |rows: &mut Vec<Vec<Weight>>, base: usize| {
        for i in 0..cluster {
            for _ in 0..20usize.min(cluster.saturating_sub(1)) {
                let target = rng.next(cluster as u64) as usize;
                if target != i {
                    rows[base + i][base + target] = rng.weight();
                }
            }
        }
    };

    fill_cluster(&mut rows, 0);
    let b_start = cluster + bridge_len;
    fill_cluster(&mut rows, b_start);

    // Chain: last of cluster A -> bridge -> first of cluster B
    let mut prev = cluster.checked_sub(1);
    for id in cluster..(b_start + 1).min(n) {
        if let Some(p) = prev {
            rows[p][id] = 1;
        }
        prev = Some(id);
    }

    rows
}

/// Complete directed graph: every off-diagonal cell is an edge.
fn gen_complete(n: usize) -> Vec<Vec<Weight>> {
    let mut rng = FastRng::new(77777);
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0 } else { rng.weight() }).collect())
        .collect()
}
