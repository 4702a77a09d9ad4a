//! Command-line front end: single-spec simulation and multi-variant
//! reports.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tracksim::{render_markdown, run_batch, SimulationSpec, VariantReport};

#[derive(Parser)]
#[command(name = "tracksim", version, about = "Board game outcome simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate one board spec and print JSON statistics.
    Simulate {
        /// Path to the board JSON file.
        spec: PathBuf,
        #[arg(long, default_value_t = 50_000)]
        games: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        players: usize,
    },
    /// Run every board in a directory and render a markdown report.
    Report {
        /// Directory containing board JSON files.
        boards: PathBuf,
        #[arg(long, default_value_t = 50_000)]
        games: usize,
        #[arg(long, default_value_t = 7)]
        seed: u64,
        /// Player counts to run each variant at.
        #[arg(long, value_delimiter = ',', default_values_t = [1, 2, 3, 4])]
        players: Vec<usize>,
        /// Output path; prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate {
            spec,
            games,
            seed,
            players,
        } => simulate(&spec, games, seed, players),
        Command::Report {
            boards,
            games,
            seed,
            players,
            out,
        } => report(&boards, games, seed, &players, out.as_deref()),
    }
}

fn load_spec(path: &Path) -> Result<SimulationSpec> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    SimulationSpec::from_json(&json)
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn simulate(path: &Path, games: usize, seed: u64, players: usize) -> Result<()> {
    let spec = load_spec(path)?;
    let stats = run_batch(&spec, games, seed, players)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn report(
    boards: &Path,
    games: usize,
    seed: u64,
    players: &[usize],
    out: Option<&Path>,
) -> Result<()> {
    let mut paths: Vec<PathBuf> = fs::read_dir(boards)
        .with_context(|| format!("failed to read {}", boards.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut variants = Vec::with_capacity(paths.len());
    for path in &paths {
        let spec = load_spec(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = spec.name.clone().unwrap_or_else(|| stem.clone());
        log::info!("simulating variant {name:?}");

        let mut runs = Vec::with_capacity(players.len());
        for &count in players {
            runs.push(run_batch(&spec, games, seed, count)?);
        }

        variants.push(VariantReport {
            name,
            source: path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            runs,
        });
    }

    let date = chrono::Local::now().format("%B %d, %Y").to_string();
    let rendered = render_markdown(&variants, games, seed, &date);

    match out {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
