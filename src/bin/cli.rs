use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use pagesim::{
    ComparisonBatch, ComparisonRow, Page, Policy, RunResult, generate_reference_string,
    parse_reference_string, run_comparison, run_simulation, sweep_frame_counts,
};

const HISTORY_FILE: &str = ".psim_history";

#[derive(Parser)]
#[command(author, version, about = "psim - page replacement policy simulator")]
struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace a single policy over a reference string
    Run {
        /// Replacement policy (FIFO, LRU, Optimal)
        policy: Policy,

        /// Comma-separated reference string, e.g. "7,0,1,2,0,3"
        #[arg(short, long, conflicts_with = "file")]
        refs: Option<String>,

        /// Read the reference string from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Number of physical frames
        #[arg(short, long, default_value_t = 3)]
        frames: usize,

        /// Print the run result as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Compare several policies over the same input
    Compare {
        /// Comma-separated reference string
        #[arg(short, long, conflicts_with = "file")]
        refs: Option<String>,

        /// Read the reference string from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Number of physical frames
        #[arg(short, long, default_value_t = 3)]
        frames: usize,

        /// Policies to compare
        #[arg(short, long, value_delimiter = ',', default_values_t = Policy::ALL)]
        policies: Vec<Policy>,

        /// Print the comparison batch as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Fault totals for every policy across a range of frame counts
    Sweep {
        /// Comma-separated reference string
        #[arg(short, long, conflicts_with = "file")]
        refs: Option<String>,

        /// Read the reference string from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Smallest frame count to simulate
        #[arg(long, default_value_t = 1)]
        min_frames: usize,

        /// Largest frame count to simulate
        #[arg(long, default_value_t = 8)]
        max_frames: usize,

        /// Print the rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print a randomly generated reference string
    Generate {
        /// Number of references to generate
        #[arg(short, long, default_value_t = 20)]
        length: usize,

        /// Exclusive upper bound on page numbers
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        max_page: Page,
    },

    /// Start an interactive shell
    Shell,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            policy,
            refs,
            file,
            frames,
            json,
        }) => {
            let reference_string = load_reference_string(refs, file)?;
            let result = run_simulation(policy, &reference_string, frames)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_run(&result);
            }
        }
        Some(Commands::Compare {
            refs,
            file,
            frames,
            policies,
            json,
        }) => {
            let reference_string = load_reference_string(refs, file)?;
            let batch = run_comparison(&reference_string, frames, &policies)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&batch)?);
            } else {
                print_comparison(&batch);
            }
        }
        Some(Commands::Sweep {
            refs,
            file,
            min_frames,
            max_frames,
            json,
        }) => {
            if min_frames > max_frames {
                bail!(
                    "min-frames ({}) must not exceed max-frames ({})",
                    min_frames,
                    max_frames
                );
            }
            let reference_string = load_reference_string(refs, file)?;
            let rows = sweep_frame_counts(&reference_string, min_frames..=max_frames)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_sweep(&rows);
            }
        }
        Some(Commands::Generate { length, max_page }) => {
            let reference_string = generate_reference_string(length, max_page);
            println!("{}", format_reference_string(&reference_string));
        }
        Some(Commands::Shell) | None => run_shell()?,
    }

    Ok(())
}

/// Resolve the reference string from --refs or --file
fn load_reference_string(refs: Option<String>, file: Option<PathBuf>) -> Result<Vec<Page>> {
    let raw = match (refs, file) {
        (Some(raw), _) => raw,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("reading reference string from {}", path.display()))?,
        (None, None) => bail!("provide a reference string with --refs or --file"),
    };
    Ok(parse_reference_string(&raw)?)
}

fn format_reference_string(reference_string: &[Page]) -> String {
    reference_string
        .iter()
        .map(|page| page.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn print_run(result: &RunResult) {
    println!(
        "Policy: {}   Frames: {}   References: {}",
        result.policy,
        result.frame_count,
        result.steps.len()
    );
    println!();
    print_trace(result);
    println!();
    print_frame_matrix(result);
    println!();
    print_stats(result);
}

fn print_trace(result: &RunResult) {
    for step in &result.steps {
        let marker = if step.is_fault { "FAULT" } else { "hit  " };
        println!(
            "  [{:>3}] page {:>3}  {}  {}",
            step.step, step.page, marker, step.rationale
        );
    }
}

/// Frame contents over time: one column per step, one row per frame slot
fn print_frame_matrix(result: &RunResult) {
    let header: String = result
        .steps
        .iter()
        .map(|step| format!(" {:>3}", step.page))
        .collect();
    println!("  ref |{}", header);
    println!("  ----+{}", "-".repeat(result.steps.len() * 4));

    for row in 0..result.frame_count {
        let cells: String = result
            .steps
            .iter()
            .map(|step| match step.frames[row] {
                Some(page) => format!(" {:>3}", page),
                None => "   .".to_string(),
            })
            .collect();
        println!("   f{} |{}", row, cells);
    }

    let faults: String = result
        .steps
        .iter()
        .map(|step| if step.is_fault { "   *" } else { "    " }.to_string())
        .collect();
    println!("      |{}", faults);
}

fn print_stats(result: &RunResult) {
    println!(
        "Faults: {}   Hits: {}   Fault rate: {:.1}%",
        result.total_faults,
        result.total_hits(),
        result.fault_rate * 100.0
    );
}

fn print_comparison(batch: &ComparisonBatch) {
    println!(
        "{:<10} {:>8} {:>8} {:>12}",
        "Policy", "Faults", "Hits", "Fault rate"
    );
    for (policy, result) in batch.iter() {
        println!(
            "{:<10} {:>8} {:>8} {:>11.1}%",
            policy.name(),
            result.total_faults,
            result.total_hits(),
            result.fault_rate * 100.0
        );
    }
}

fn print_sweep(rows: &[ComparisonRow]) {
    println!(
        "{:>8} {:>8} {:>8} {:>8}",
        "Frames", "FIFO", "LRU", "Optimal"
    );
    for row in rows {
        println!(
            "{:>8} {:>8} {:>8} {:>8}",
            row.frame_count, row.fifo_faults, row.lru_faults, row.optimal_faults
        );
    }
}

/// Interactive session state: the current reference string and frame count
struct ShellState {
    reference_string: Vec<Page>,
    frame_count: usize,
}

impl ShellState {
    fn new() -> Self {
        Self {
            reference_string: Vec::new(),
            frame_count: 3,
        }
    }

    fn execute(&mut self, line: &str) -> Result<()> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("").to_lowercase();
        let args: Vec<&str> = parts.collect();

        match command.as_str() {
            "set" => {
                let raw = args.join(" ");
                if raw.is_empty() {
                    bail!("usage: set <comma-separated reference string>");
                }
                self.reference_string = parse_reference_string(&raw)?;
                self.show();
            }
            "gen" => {
                let length: usize = parse_arg(args.first(), "length")?;
                let max_page: Page = parse_arg(args.get(1), "max-page")?;
                if max_page < 1 {
                    bail!("max-page must be at least 1");
                }
                self.reference_string = generate_reference_string(length, max_page);
                self.show();
            }
            "frames" => {
                self.frame_count = parse_arg(args.first(), "frame count")?;
                self.show();
            }
            "show" => self.show(),
            "run" => {
                let policy: Policy = parse_arg(args.first(), "policy")?;
                let result = run_simulation(policy, &self.reference_string, self.frame_count)?;
                print_run(&result);
            }
            "compare" => {
                let batch =
                    run_comparison(&self.reference_string, self.frame_count, &Policy::ALL)?;
                print_comparison(&batch);
            }
            "sweep" => {
                let min: usize = parse_arg(args.first(), "min frames")?;
                let max: usize = parse_arg(args.get(1), "max frames")?;
                if min > max {
                    bail!("min frames must not exceed max frames");
                }
                let rows = sweep_frame_counts(&self.reference_string, min..=max)?;
                print_sweep(&rows);
            }
            _ => bail!("unknown command '{}', type 'help' for a list", command),
        }

        Ok(())
    }

    fn show(&self) {
        println!(
            "Reference string ({} entries): {}",
            self.reference_string.len(),
            format_reference_string(&self.reference_string)
        );
        println!("Frame count: {}", self.frame_count);
    }
}

/// Parse one shell argument, naming it in the error when missing or invalid
fn parse_arg<T: std::str::FromStr>(arg: Option<&&str>, name: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let raw = arg.ok_or_else(|| anyhow::anyhow!("missing {}", name))?;
    raw.parse()
        .map_err(|err| anyhow::anyhow!("invalid {} '{}': {}", name, raw, err))
}

fn run_shell() -> Result<()> {
    println!("Welcome to psim. Type 'help' for assistance or 'exit' to quit.");

    let mut state = ShellState::new();
    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        let readline = rl.readline("psim> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => {
                        print_help();
                    }
                    _ => {
                        if let Err(err) = state.execute(line) {
                            println!("Error: {}", err);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  set <p,p,p,...>       - Set the reference string");
    println!("  gen <length> <max>    - Generate a random reference string");
    println!("  frames <n>            - Set the number of physical frames");
    println!("  show                  - Show the current configuration");
    println!("  run <policy>          - Trace one policy (FIFO, LRU, Optimal)");
    println!("  compare               - Compare all policies");
    println!("  sweep <min> <max>     - Fault totals across a frame-count range");
    println!("  help                  - Show this help");
    println!("  exit                  - Quit the shell");
}
