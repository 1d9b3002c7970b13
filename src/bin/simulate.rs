//! Reel balance simulator CLI.
//!
//! Runs headless Monte Carlo sessions against every species with a naive
//! tracking player and reports how each profile plays out.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                 # Default: 200 runs per species
//!   cargo run --bin simulate -- -n 50       # 50 runs per species
//!   cargo run --bin simulate -- --seed 42   # Reproducible run

use std::env;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tightline::minigame::types::Phase;
use tightline::session::ReelSession;
use tightline::species::Species;

const FRAME_MS: u64 = 16;
const MAX_TICKS: u64 = 50_000;

struct SpeciesReport {
    name: &'static str,
    wins: u32,
    perfects: u32,
    total_ticks: u64,
    unresolved: u32,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let (runs, seed) = parse_args(&args);

    println!("TIGHTLINE BALANCE SIMULATOR");
    println!();
    println!("Configuration:");
    println!("  Runs per species: {}", runs);
    println!("  Seed:             {}", seed);
    println!();
    println!(
        "{:<18} {:>7} {:>9} {:>10} {:>11}",
        "Species", "Win %", "Perfects", "Avg ticks", "Unresolved"
    );

    for (index, species) in Species::ALL.iter().enumerate() {
        let report = simulate_species(*species, runs, seed + index as u64 * 10_000);
        let resolved = runs - report.unresolved;
        let win_rate = if resolved > 0 {
            report.wins as f64 / resolved as f64 * 100.0
        } else {
            0.0
        };
        let avg_ticks = if resolved > 0 {
            report.total_ticks / resolved as u64
        } else {
            0
        };
        println!(
            "{:<18} {:>6.1}% {:>9} {:>10} {:>11}",
            report.name, win_rate, report.perfects, avg_ticks, report.unresolved
        );
    }
}

fn simulate_species(species: Species, runs: u32, seed_base: u64) -> SpeciesReport {
    let mut report = SpeciesReport {
        name: species.name(),
        wins: 0,
        perfects: 0,
        total_ticks: 0,
        unresolved: 0,
    };

    for run in 0..runs {
        let mut rng = StdRng::seed_from_u64(seed_base + run as u64);
        let mut session = ReelSession::start(species.name())
            .expect("catalog species always start");

        let mut now_ms = 0;
        let mut ticks = 0;
        while !session.is_over() && ticks < MAX_TICKS {
            now_ms += FRAME_MS;
            ticks += 1;
            // Naive player: lift whenever the bar center trails the fish.
            let state = session.state();
            let chase = state.bar_pos + 10.0 < state.fish_pos + 4.0;
            session.set_thrust(chase);
            session.tick_at(now_ms, &mut rng);
        }

        if !session.is_over() {
            report.unresolved += 1;
            continue;
        }
        report.total_ticks += ticks;
        if session.phase() == Phase::Won {
            report.wins += 1;
            if session.state().perfect {
                report.perfects += 1;
            }
        }
    }

    report
}

fn parse_args(args: &[String]) -> (u32, u64) {
    let mut runs = 200;
    let mut seed = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().unwrap_or(42);
                    i += 1;
                }
            }
            "-h" | "--help" => {
                println!("Usage: simulate [-n RUNS] [--seed SEED]");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (runs, seed)
}
