//! grafo - run the analyses of the library on graph and formula files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use grafo::{algo::*, io::*, prelude::*};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grafo")]
#[command(author, version, about = "Classical graph algorithms on edge list files", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Read a weight as third token of every edge line
    #[arg(long, global = true)]
    weighted: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Input file path
    #[arg(required = true)]
    file: PathBuf,
}

#[derive(Args)]
struct MstArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Grow the forest with Prim's algorithm instead of Kruskal's
    #[arg(long)]
    prim: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a 2-CNF formula given as one clause per line
    TwoSat(InputArgs),
    /// Strongly connected components and condensation of a digraph
    Scc(InputArgs),
    /// Topological order of a digraph
    Topo(InputArgs),
    /// Find a directed cycle
    Cycle(InputArgs),
    /// Eulerian circuit of a strongly connected digraph
    Euler(InputArgs),
    /// Two-colouring of an undirected graph
    Bipartite(InputArgs),
    /// Eccentricities, diameter, radius, center and Wiener index of a connected undirected graph
    Metrics(InputArgs),
    /// Minimum spanning forest of an undirected graph
    Mst(MstArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let reader = EdgeListReader::new().weighted(cli.weighted);

    match cli.command {
        Commands::TwoSat(args) => two_sat(&args.file),
        Commands::Scc(args) => scc(&read_graph(&reader, &args.file)?),
        Commands::Topo(args) => topo(&read_graph(&reader, &args.file)?),
        Commands::Cycle(args) => cycle(&read_graph(&reader, &args.file)?),
        Commands::Euler(args) => euler(&read_graph(&reader, &args.file)?),
        Commands::Bipartite(args) => bipartite(&read_graph(&reader, &args.file)?),
        Commands::Metrics(args) => metrics(&read_graph(&reader, &args.file)?),
        Commands::Mst(args) => mst(&read_graph(&reader, &args.input.file)?, args.prim),
    }
}

fn read_graph<G: GraphFromScratch>(reader: &EdgeListReader, path: &Path) -> anyhow::Result<G> {
    tracing::info!("Loading graph from {:?}", path);
    reader
        .try_read_graph_file(path)
        .with_context(|| format!("cannot read graph from {}", path.display()))
}

fn two_sat(path: &Path) -> anyhow::Result<()> {
    tracing::info!("Loading formula from {:?}", path);
    let solver = TwoSatSolver::from_file(path)
        .with_context(|| format!("cannot read formula from {}", path.display()))?;

    match solver.assignment() {
        Ok(assignment) => {
            println!("satisfiable");
            for (variable, value) in assignment.iter().enumerate() {
                println!("x{variable} = {value}");
            }
        }
        Err(_) => println!("unsatisfiable"),
    }
    Ok(())
}

fn scc(graph: &DirectedGraph) -> anyhow::Result<()> {
    let sccs = graph.strongly_connected_components();

    println!("{} components", sccs.number_of_components());
    for (id, members) in sccs.components().iter().enumerate() {
        println!("{id}: {}", members.iter().join(" "));
    }

    let condensation = sccs.component_graph();
    println!("condensation");
    for Edge(u, v) in condensation.ordered_edges(false) {
        println!("{u} {v}");
    }
    Ok(())
}

fn topo(graph: &DirectedGraph) -> anyhow::Result<()> {
    let order = graph.topological_order()?;
    println!("{}", order.iter().join(" "));
    Ok(())
}

fn cycle(graph: &DirectedGraph) -> anyhow::Result<()> {
    let detector = DirectedCycle::new(graph);
    match detector.cycle() {
        Ok(cycle) => println!("cycle: {}", cycle.iter().join(" ")),
        Err(_) => println!("acyclic"),
    }
    Ok(())
}

fn euler(graph: &DirectedGraph) -> anyhow::Result<()> {
    let euler = EulerianCircuit::new(graph)?;
    let circuit = euler.circuit()?;

    let walk = circuit
        .iter()
        .map(|arc| arc.source())
        .chain(circuit.first().map(|arc| arc.source()))
        .join(" ");
    println!("{walk}");
    Ok(())
}

fn bipartite(graph: &UndirectedGraph) -> anyhow::Result<()> {
    let coloring = graph.two_coloring();
    let Some(sides) = coloring.sides() else {
        println!("not bipartite");
        return Ok(());
    };

    let (left, right): (Vec<Node>, Vec<Node>) =
        graph.vertices().partition(|&u| sides[u as usize] == Side::Left);
    println!("left: {}", left.iter().join(" "));
    println!("right: {}", right.iter().join(" "));
    Ok(())
}

fn metrics(graph: &UndirectedGraph) -> anyhow::Result<()> {
    let metrics = GraphMetrics::new(graph)?;

    println!("eccentricities: {}", metrics.eccentricities().iter().join(" "));
    println!("diameter: {}", metrics.diameter());
    println!("radius: {}", metrics.radius());
    println!("center: {}", metrics.center());
    println!("wiener index: {}", metrics.wiener_index());
    Ok(())
}

fn mst(graph: &UndirectedGraph, prim: bool) -> anyhow::Result<()> {
    let mst = if prim {
        MinimumSpanningTree::prim(graph)
    } else {
        MinimumSpanningTree::kruskal(graph)
    };

    for edge in mst.edges() {
        let Edge(u, v) = edge.endpoints().normalized();
        println!("{u} {v} {}", edge.weight());
    }
    println!("total weight: {}", mst.total_weight());
    if !mst.is_spanning_tree() {
        println!("forest of {} trees", mst.number_of_trees());
    }
    Ok(())
}
