//! Console frontend for the Ashfall survival simulation.
//!
//! All rules live in `ashfall-simulation`; this binary only parses
//! commands, forwards them to the engine, and renders the state back.

mod input;
mod render;

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use colored::Colorize;

use ashfall_simulation::{SimConfig, Simulation};
use input::ConsoleCommand;

#[derive(Parser)]
#[command(
    name = "ashfall",
    about = "Ashfall — a turn-based wilderness survival simulation",
    version
)]
struct Cli {
    /// RNG seed for a reproducible session
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Simulation speed multiplier
    #[arg(long, default_value = "0.1")]
    time_scale: f64,

    /// Player name
    #[arg(long, default_value = "Survivor")]
    name: String,

    /// Ticks applied after each action command
    #[arg(long, default_value = "1")]
    auto_ticks: u64,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = SimConfig::default()
        .with_seed(cli.seed)
        .with_time_scale(cli.time_scale)
        .with_player_name(cli.name.clone());
    let mut sim = Simulation::new(config).map_err(|e| e.to_string())?;

    println!("{}", "You wake up in an unfamiliar forest.".bold());
    println!("Type 'help' for the list of commands.");
    println!();
    render::status(&sim);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if bytes_read == 0 {
            break; // EOF: treat like quit.
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match input::parse(trimmed, sim.catalog()) {
            Ok(ConsoleCommand::Quit) => break,
            Ok(ConsoleCommand::Help) => println!("{}", input::HELP),
            Ok(ConsoleCommand::Status) => render::status(&sim),
            Ok(ConsoleCommand::Inventory) => render::inventory(&sim),
            Ok(ConsoleCommand::Restart) => {
                sim.restart().map_err(|e| e.to_string())?;
                println!("A new attempt begins.");
                println!();
                render::status(&sim);
            }
            Ok(ConsoleCommand::Wait(ticks)) => {
                if reject_when_over(&sim) {
                    continue;
                }
                let ended = sim.run(ticks).is_some();
                println!("  Time passes...");
                if ended {
                    render::game_over(&sim);
                }
            }
            Ok(ConsoleCommand::Do(action)) => {
                if reject_when_over(&sim) {
                    continue;
                }
                let report = sim.perform_action(&action);
                render::report(&report);
                let ended = sim.is_game_over() || sim.run(cli.auto_ticks).is_some();
                if ended {
                    render::game_over(&sim);
                }
            }
            Err(message) => println!("  {}", message.red()),
        }
    }

    Ok(())
}

/// Actions make no sense after the end; nudge toward restart instead.
fn reject_when_over(sim: &Simulation) -> bool {
    if sim.is_game_over() {
        println!(
            "  {}",
            "You did not survive. Type 'restart' to try again.".red()
        );
        true
    } else {
        false
    }
}
