use clap::{Parser, ValueEnum};
use informed_search::heuristics::{manhattan_distance, misplaced_tiles};
use informed_search::puzzle::Puzzle;
use informed_search::search::{best_first_search_with, SearchBudget, Solution};
use informed_search::utils::puzzle_from_rows;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicChoice {
    /// Sum of tile Manhattan distances (A*, strongest)
    Manhattan,
    /// Count of misplaced tiles (A*, weaker)
    Misplaced,
    /// Zero heuristic (uniform-cost search)
    None,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file: 3 rows for the start board, optionally
    /// followed by 3 rows for the goal (default goal: 1..8 with the blank
    /// last). Use 0 or _ for the blank.
    #[clap(conflicts_with = "scramble")]
    board_file: Option<PathBuf>,

    /// Solve a scrambled board generated from this seed instead of a file
    #[clap(long)]
    scramble: Option<u64>,

    /// Number of random moves used to scramble
    #[clap(long, default_value_t = 40)]
    scramble_steps: usize,

    /// Heuristic used to guide the search
    #[clap(short = 'H', long, value_enum, default_value_t = HeuristicChoice::Manhattan)]
    heuristic: HeuristicChoice,

    /// Give up after this many expansions (0 means unbounded)
    #[clap(long, default_value_t = 0)]
    max_expansions: usize,

    /// Print each finalized board with its accumulated cost
    #[clap(long)]
    trace: bool,
}

/// Reads a start board and an optional goal board from a file.
fn read_board_file(path: &PathBuf) -> Result<(Puzzle, Puzzle), String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && !s.starts_with('#'))
        .collect();

    match lines.len() {
        3 => Ok((puzzle_from_rows(&lines)?, Puzzle::solved())),
        6 => Ok((puzzle_from_rows(&lines[..3])?, puzzle_from_rows(&lines[3..])?)),
        n => Err(format!(
            "Expected 3 or 6 board rows in file, found {}",
            n
        )),
    }
}

fn print_solution(start: &Puzzle, solution: &Solution<Puzzle, informed_search::puzzle::Move>) {
    println!("Solution found in {} moves:\n", solution.transitions.len());
    println!("{}\n", start);
    for (mv, board) in solution.transitions.iter().zip(solution.path.iter().skip(1)) {
        println!("Move: {}\n", mv);
        println!("{}\n", board);
    }
    println!("Cost: {}", solution.cost);
    println!("States expanded: {}", solution.expanded);
}

fn main() {
    let args = Args::parse();

    let (start, goal) = if let Some(seed) = args.scramble {
        (
            Puzzle::scrambled(seed, args.scramble_steps),
            Puzzle::solved(),
        )
    } else if let Some(path) = &args.board_file {
        match read_board_file(path) {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("Failed to read board from {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Provide a board file or --scramble <SEED>");
        process::exit(1);
    };

    println!("Start board:\n{}\n", start);
    println!("Goal board:\n{}\n", goal);

    if !start.solvable_to(&goal) {
        // Parity mismatch; searching would only exhaust the state space.
        println!("No solution exists: the start and goal boards have different parity.");
        return;
    }

    let budget = if args.max_expansions == 0 {
        SearchBudget::unbounded()
    } else {
        SearchBudget::expansions(args.max_expansions)
    };

    let heuristic: Box<dyn Fn(&Puzzle) -> u64> = match args.heuristic {
        HeuristicChoice::Manhattan => Box::new(move |s: &Puzzle| manhattan_distance(s, &goal)),
        HeuristicChoice::Misplaced => Box::new(move |s: &Puzzle| misplaced_tiles(s, &goal)),
        HeuristicChoice::None => Box::new(|_| 0),
    };

    println!("Searching...\n");

    let trace = args.trace;
    let solution = best_first_search_with(
        start,
        |s: &Puzzle| *s == goal,
        |s: &Puzzle| {
            s.successors()
                .into_iter()
                .map(|(next, mv)| (next, mv, 1))
                .collect()
        },
        |s: &Puzzle| heuristic(s),
        budget,
        |s: &Puzzle, cost| {
            if trace {
                println!("Expanding (cost {}):\n{}\n", cost, s);
            }
        },
    );

    match solution {
        Some(solution) => print_solution(&start, &solution),
        None if args.max_expansions > 0 => {
            println!(
                "Search gave up after {} expansions. Raise --max-expansions to keep going.",
                args.max_expansions
            );
        }
        None => println!("No solution exists."),
    }
}
