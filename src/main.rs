use std::process;

use clap::{Parser, ValueEnum};

use pagesim::common::config::{DEFAULT_FRAMES, DEFAULT_LENGTH};
use pagesim::simulation::render;
use pagesim::workload::generate_seeded;
use pagesim::{
    run_simulation, PolicyKind, ReferenceSequence, Result, SimulationConfig, SimulationResult,
    DEFAULT_VALUE_RANGE,
};

/// Command-line options for pagesim.
#[derive(Parser, Debug)]
#[command(about = "Simulate FIFO, LRU and Optimal page replacement over a reference stream")]
struct CmdOptions {
    /// Number of references to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Number of frames
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    frames: usize,

    /// Policy to simulate
    #[arg(short, long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Generated references are drawn from 0..RANGE
    #[arg(long, default_value_t = DEFAULT_VALUE_RANGE)]
    range: u32,

    /// Seed for the reference generator
    #[arg(long)]
    seed: Option<u64>,

    /// Use this comma-separated sequence instead of generating one
    #[arg(long)]
    pages: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Fifo,
    Lru,
    Opt,
    All,
}

impl PolicyArg {
    fn policies(self) -> Vec<PolicyKind> {
        match self {
            PolicyArg::Fifo => vec![PolicyKind::Fifo],
            PolicyArg::Lru => vec![PolicyKind::Lru],
            PolicyArg::Opt => vec![PolicyKind::Optimal],
            PolicyArg::All => PolicyKind::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    if let Err(err) = run(options) {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run(options: CmdOptions) -> Result<()> {
    let report = build_report(&options)?;

    match &options.output {
        Some(path) => render::write_report(path, &report)?,
        None => print!("{}", report),
    }
    Ok(())
}

/// Resolve the reference sequence, run the selected policies and render them.
fn build_report(options: &CmdOptions) -> Result<String> {
    let config = SimulationConfig {
        length: options.length,
        frames: options.frames,
        value_range: options.range,
        seed: options.seed,
    };
    config.validate_capacity()?;

    // --range only matters when the sequence is generated.
    let references = match &options.pages {
        Some(pages) => pages.parse::<ReferenceSequence>()?,
        None => {
            config.validate()?;
            generate_seeded(config.length, config.value_range, config.seed)?
        }
    };
    log::info!("Reference sequence: {}", references);
    log::info!("Frames: {}", config.frames);

    let results = options
        .policy
        .policies()
        .into_iter()
        .map(|policy| run_simulation(policy, &references, config.frames))
        .collect::<Result<Vec<SimulationResult>>>()?;

    let report = match options.format {
        Format::Table => {
            let mut report: Vec<String> = results.iter().map(render::table).collect();
            if results.len() > 1 {
                report.push(render::summary(&results));
            }
            report.join("\n")
        }
        Format::Json => match results.as_slice() {
            [single] => format!("{}\n", render::json(single)?),
            _ => format!("{}\n", render::json_all(&results)?),
        },
    };
    Ok(report)
}
