#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use mtxgraph::{algo::*, io::*, prelude::*, render::Renderer};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "mtxgraph: analyze and render graphs from Matrix-Market files",
    long_about = None
)]
struct Cli {
    /// Input graph in Matrix-Market coordinate format.
    input: PathBuf,

    /// Render the graph to this image file (e.g. graph.png).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start node for the traversal printouts.
    #[arg(long, default_value_t = 0)]
    start: Node,

    /// Seed for the layout sampling; drawn from the OS if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the adjacency matrix and adjacency lists.
    #[arg(long)]
    adjacency: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MTXGRAPH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("mtxgraph=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn print_adjacency(graph: &GraphStore) {
    println!("\nadjacency matrix:");
    for u in graph.vertices() {
        let row = graph
            .vertices()
            .map(|v| if graph.has_edge(u, v) { "1" } else { "0" })
            .join(" ");
        println!("{row}");
    }

    println!("\nadjacency lists:");
    for u in graph.vertices() {
        println!("{u}: {}", graph.neighbors_of(u).join(", "));
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("verbose mode enabled");
    }

    let graph: GraphStore = MatrixMarketReader::new()
        .try_read_graph_file(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    println!("{}", graph.describe());
    println!(
        "cyclic: {}",
        if graph.contains_cycle() { "yes" } else { "no" }
    );

    if cli.adjacency {
        print_adjacency(&graph);
    }

    if !graph.is_empty() {
        let bfs = graph.bfs(cli.start)?.join(" -> ");
        println!("\nbreadth-first from {}: {bfs}", cli.start);

        let dfs = graph.dfs(cli.start)?.join(" -> ");
        println!("depth-first from {}: {dfs}", cli.start);
    }

    if let Some(path) = cli.output {
        let mut rng = match cli.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_os_rng(),
        };

        Renderer::new()
            .render_to_file(&graph, &mut rng, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\ngraph image written to {}", path.display());
    }

    Ok(())
}
