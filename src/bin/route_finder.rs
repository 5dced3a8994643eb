use clap::Parser;
use informed_search::utils::graph_from_edge_list;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the edge-list file: one 'FROM TO WEIGHT' edge per line,
    /// a lone name for an isolated node, '#' for comments
    graph_file: PathBuf,

    /// Node to start from
    #[clap(long = "from")]
    from: String,

    /// Destination node; omit to print distances to every node instead
    #[clap(long = "to")]
    to: Option<String>,

    /// Treat every edge as bidirectional
    #[clap(long)]
    undirected: bool,
}

fn main() {
    let args = Args::parse();

    let content = match fs::read_to_string(&args.graph_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read {}: {}", args.graph_file.display(), e);
            process::exit(1);
        }
    };

    let graph = match graph_from_edge_list(&content, args.undirected) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Invalid graph file: {}", e);
            process::exit(1);
        }
    };

    if !graph.contains(&args.from) {
        eprintln!("Unknown start node '{}'", args.from);
        process::exit(1);
    }

    match &args.to {
        Some(to) => {
            if !graph.contains(to) {
                eprintln!("Unknown destination node '{}'", to);
                process::exit(1);
            }
            match graph.shortest_path(&args.from, to) {
                Some(solution) => {
                    println!("Shortest route {} -> {}:", args.from, to);
                    println!("  {}", solution.path.join(" -> "));
                    println!("Total cost: {}", solution.cost);
                }
                None => println!("No route from {} to {}.", args.from, to),
            }
        }
        None => {
            let distances = graph.shortest_distances(&args.from);
            println!("Shortest distances from {}:", args.from);
            for node in graph.nodes() {
                match distances.get(node) {
                    Some(d) => println!("  {} -> {}: {}", args.from, node, d),
                    None => println!("  {} -> {}: unreachable", args.from, node),
                }
            }
        }
    }
}
