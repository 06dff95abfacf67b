//! Manual Sorting Driver
//!
//! Generates random sequences of increasing length, shuffles each one and
//! runs the sort algorithms on the shuffled copy, printing every result.
//! The sorts for one input run side by side on the rayon pool and their
//! outputs are checked for sortedness and for agreement with each other.

use clap::Parser;
use int_sorter::{is_permutation, is_sorted, shuffle_with_rng, Algorithm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Default exclusive upper bound on generated sequence lengths
const DEFAULT_MAX_LEN: usize = 9;
/// Default exclusive upper bound on generated values
const DEFAULT_MAX_VALUE: i32 = 9;

#[derive(Parser, Debug)]
#[command(name = "int-sorter", about = "Shuffle and sort random integer sequences")]
struct Args {
    /// Generate sequences of length 1 up to (but excluding) this value
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Values are drawn from 0 up to (but excluding) this value
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE, value_parser = clap::value_parser!(i32).range(1..))]
    max_value: i32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Only run this algorithm (selection, gnome, cocktail, quick)
    #[arg(long)]
    algorithm: Option<Algorithm>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("int_sorter=info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let algorithms: Vec<Algorithm> = match args.algorithm {
        Some(a) => vec![a],
        None => Algorithm::ALL.to_vec(),
    };

    let mut failures = 0;
    for len in 1..args.max_len {
        let data: Vec<i32> = (0..len).map(|_| rng.gen_range(0..args.max_value)).collect();
        if !run_case(&data, &algorithms, &mut rng) {
            failures += 1;
        }
    }

    if failures > 0 {
        error!(failures, "some sequences were not sorted correctly");
        return ExitCode::FAILURE;
    }
    info!("all sequences verified");
    ExitCode::SUCCESS
}

/// Shuffle `data`, sort the shuffled copy with each algorithm and print the
/// results. Returns `false` if any output is wrong.
fn run_case<R: Rng>(data: &[i32], algorithms: &[Algorithm], rng: &mut R) -> bool {
    println!();
    println!("Sequence:         {:?}", data);

    let shuffled = match shuffle_with_rng(Some(data), rng) {
        Ok(s) => s,
        Err(e) => {
            error!("shuffle failed: {}", e);
            return false;
        }
    };
    println!("Shuffled:         {:?}", shuffled);

    let results: Vec<_> = algorithms
        .par_iter()
        .map(|&algorithm| (algorithm, algorithm.sort(Some(&shuffled))))
        .collect();

    let mut ok = true;
    let mut reference: Option<&[i32]> = None;
    for (algorithm, result) in &results {
        let label = format!("{} sorted:", algorithm);
        match result {
            Ok(sorted) => {
                println!("{:<17} {:?}", label, sorted);
                if !is_sorted(sorted) || !is_permutation(data, sorted) {
                    error!(%algorithm, "output is not a sorted permutation of the input");
                    ok = false;
                }
                match reference {
                    Some(expected) if expected != sorted.as_slice() => {
                        error!(%algorithm, "output differs from the other algorithms");
                        ok = false;
                    }
                    Some(_) => {}
                    None => reference = Some(sorted.as_slice()),
                }
            }
            Err(e) => {
                error!(%algorithm, "sort failed: {}", e);
                ok = false;
            }
        }
    }
    ok
}
