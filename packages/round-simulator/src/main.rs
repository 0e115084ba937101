//! Round simulator CLI: plays complete Wizard games in memory.
//!
//! Every choice is drawn uniformly from the legal options. Results go to a
//! JSONL (or JSON) file plus a CSV summary.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "round-simulator")]
#[command(about = "Plays Wizard games in memory with random legal moves")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Apprentices per game (3 to 6)
    #[arg(short, long, default_value = "4", value_parser = clap::value_parser!(u8).range(3..=6))]
    players: u8,

    /// Base seed; game N uses seed + N - 1. Random per game when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the detailed output with gzip
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let players = args.players as usize;
    if args.show_output {
        info!(games = args.games, players, "Starting round simulator");
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(game_num as u64 - 1),
            None => rand::random(),
        };

        match Simulator::new(game_seed, game_num, players).simulate_game() {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(game_num, args.games, &result, duration_ms);
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(game_num, seed = game_seed, scores = ?result.final_scores, "Game completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, seed = game_seed, "Game failed: {}", e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = {
        let (d, c) = output_writer.output_paths();
        (d.clone(), c.clone())
    };
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games, players);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    errors: u32,
    elapsed: Duration,
    total: u32,
    players: usize,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = vec![0u32; players];
    let mut total_scores = vec![0i64; players];
    let mut max_scores = vec![i32::MIN; players];
    let mut min_scores = vec![i32::MAX; players];

    for result in results {
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += score as i64;
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
        // Ties count as a win for every tied seat
        for &seat in &result.winners {
            wins[seat] += 1;
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..players {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat, avg_score, min_scores[seat], max_scores[seat], wins[seat], win_rate
        );
    }
}
