//! Battle of Souls
//!
//! Runs the simulation from the command line and prints a colored report of
//! every conflict followed by the Judge's verdicts.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use battle_core::config::Config;
use battle_core::events::ConflictLog;
use battle_core::output::{write_final_report, Palette};
use battle_core::{BattleError, Simulation};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "soul_battle")]
#[command(about = "Angels and Demons fight over the souls of Humans")]
struct Args {
    /// Configuration file (defaults to battle.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rounds to simulate
    #[arg(long)]
    rounds: Option<u32>,

    #[arg(long)]
    humans: Option<usize>,

    #[arg(long)]
    angels: Option<usize>,

    #[arg(long)]
    demons: Option<usize>,

    /// Pause between per-Human updates, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Write every conflict as JSONL to this file
    #[arg(long)]
    events_out: Option<PathBuf>,

    /// Write the final report as JSON to this file
    #[arg(long)]
    report_out: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

impl Args {
    /// Loads the configuration file and applies command line overrides.
    fn resolve_config(&self) -> Result<Config, BattleError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::load_or_default()?,
        };

        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(rounds) = self.rounds {
            config.simulation.rounds = rounds;
        }
        if let Some(humans) = self.humans {
            config.population.humans = humans;
        }
        if let Some(angels) = self.angels {
            config.population.angels = angels;
        }
        if let Some(demons) = self.demons {
            config.population.demons = demons;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.simulation.delay_ms = delay_ms;
        }
        if self.no_color {
            config.output.color = false;
        }
        if self.events_out.is_some() {
            config.output.events_path = self.events_out.clone();
        }
        if self.report_out.is_some() {
            config.output.report_path = self.report_out.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), BattleError> {
    if args.print_default_config {
        print!("{}", Config::default().to_toml()?);
        return Ok(());
    }

    let config = args.resolve_config()?;
    let palette = Palette::new(config.output.color);
    let delay = Duration::from_millis(config.simulation.delay_ms);

    let mut log = match &config.output.events_path {
        Some(path) => ConflictLog::new(path)?,
        None => ConflictLog::null(),
    };

    println!();
    println!("{}", palette.banner());
    let mut sim = Simulation::new(&config)?;
    {
        let population = sim.population();
        println!(
            "{}",
            palette.population(
                population.humans.len(),
                population.angels.len(),
                population.demons.len()
            )
        );
    }

    println!();
    println!("{}", palette.start(sim.rounds(), sim.seed()));

    let human_count = sim.population().humans.len();
    while !sim.is_finished() {
        let round = sim.rounds_completed() + 1;
        println!();
        println!("{}", palette.round_header(round, sim.rounds()));

        for human in 0..human_count {
            let Some(record) = sim.resolve_human(human) else {
                break;
            };
            for line in palette.conflict(&record) {
                println!("{}", line);
            }
            log.log(&record)?;

            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        sim.finish_round();
        println!("{}", palette.round_footer());
    }
    log.flush()?;

    println!();
    println!("{}", palette.end());
    let report = sim.final_report();
    for verdict in &report.verdicts {
        println!("{}", palette.verdict(verdict));
    }
    println!();
    println!("{}", palette.summary(&report));

    if let Some(path) = &config.output.report_path {
        write_final_report(path, &report)?;
        info!(path = %path.display(), "final report written");
    }
    if config.output.events_path.is_some() {
        info!(records = log.record_count(), "conflict log written");
    }

    Ok(())
}
