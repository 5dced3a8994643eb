use clap::Parser;
use informed_search::jugs::JugProblem;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Capacity of jug A
    #[clap(short = 'a', long)]
    capacity_a: u64,

    /// Capacity of jug B
    #[clap(short = 'b', long)]
    capacity_b: u64,

    /// Amount of water to measure out
    #[clap(short, long)]
    target: u64,
}

fn main() {
    let args = Args::parse();

    let problem = match JugProblem::new(args.capacity_a, args.capacity_b, args.target) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!(
        "Jugs: A holds {}, B holds {}. Target: {}.\n",
        problem.capacity_a, problem.capacity_b, problem.target
    );

    match problem.solve() {
        Some(solution) => {
            println!("Measured in {} steps:\n", solution.transitions.len());
            for (i, (action, state)) in solution
                .transitions
                .iter()
                .zip(solution.path.iter().skip(1))
                .enumerate()
            {
                println!(
                    "  Step {}: {:<15} (A: {}, B: {})",
                    i + 1,
                    action.to_string(),
                    state.a,
                    state.b
                );
            }
            if solution.transitions.is_empty() {
                println!("  Both jugs start empty; nothing to do.");
            }
        }
        None => println!("Cannot measure {} with these jugs.", args.target),
    }
}
