//! Suitcase Packer
//!
//! Packs rectangular items into a suitcase with an area budget, using the
//! rushed, greedy or optimal strategy, and checks the optimal strategy
//! against random packings.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};

use suitcase::config::PackingConfig;
use suitcase::persistence::{self, ExtInstance, PackingOutput, StrategyResult};
use suitcase::random::{random_items, randomly_pack, randomly_pack_partial};
use suitcase::suitcase::Suitcase;
use suitcase::Strategy;

/// Packs items into a suitcase and compares packing strategies.
#[derive(Parser)]
#[command(name = "suitcase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// JSON file with the packing configuration.
    #[arg(short, long, value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Pack an instance file and print the resulting suitcases.
    Pack {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        /// Strategies to run, overriding the configuration.
        #[arg(short, long = "strategy", value_enum)]
        strategies: Vec<Strategy>,
        /// Node budget of the optimal search, overriding the configuration.
        #[arg(long)]
        max_nodes: Option<u64>,
        /// Write the results as JSON.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Write a random instance file.
    Generate {
        #[arg(short = 'n', long, default_value_t = 6)]
        items: usize,
        #[arg(long, default_value_t = 6)]
        width: u32,
        #[arg(long, default_value_t = 6)]
        height: u32,
        #[arg(long, default_value = "6")]
        max_side: NonZeroU32,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Check that no random packing beats the optimal packing.
    Check {
        #[arg(long, default_value_t = 10)]
        scenarios: usize,
        #[arg(short = 'n', long, default_value_t = 6)]
        items: usize,
        /// Width and height of every suitcase.
        #[arg(long, default_value_t = 6)]
        size: u32,
        #[arg(long, default_value = "6")]
        max_side: NonZeroU32,
        /// Random packings per scenario.
        #[arg(long, default_value_t = 150)]
        trials: usize,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let config = match &cli.config_file {
        Some(path) => persistence::read_config(path)?,
        None => {
            warn!("No config file provided, use --config-file to provide a custom config");
            PackingConfig::default()
        }
    };
    info!("Using {config:?}");

    match cli.command {
        Command::Pack {
            input,
            strategies,
            max_nodes,
            output,
        } => {
            let mut config = config;
            if !strategies.is_empty() {
                config.strategies = strategies;
            }
            if max_nodes.is_some() {
                config.max_search_nodes = max_nodes;
            }
            run_pack(input, output, config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Generate {
            items,
            width,
            height,
            max_side,
            output,
        } => {
            let mut rng = config.rng();
            let items = random_items(items, max_side, &mut rng);
            let instance = ExtInstance::from_items(width, height, &items);
            // reject dimensions that could never be read back
            instance.to_suitcase()?;
            persistence::write_json(&instance, &output)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            scenarios,
            items,
            size,
            max_side,
            trials,
        } => {
            let beaten = run_check(&config, scenarios, items, size, max_side, trials)?;
            if beaten == 0 {
                println!("optimal packing was never beaten in {scenarios} scenarios");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("optimal packing was beaten in {beaten} of {scenarios} scenarios");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Packs the instance with every configured strategy and prints the results.
fn run_pack(input: PathBuf, output: Option<PathBuf>, config: PackingConfig) -> Result<()> {
    let instance = persistence::read_instance(&input)?;
    let suitcase = instance.to_suitcase()?;
    info!(
        "Packing {} items into a {}x{} suitcase",
        suitcase.num_items_unpacked(),
        suitcase.width(),
        suitcase.height()
    );

    let search = config.optimal_search();
    let results: Vec<(Strategy, Suitcase)> = config
        .strategies
        .iter()
        .map(|&strategy| {
            let start = Instant::now();
            let packed = strategy.pack_with(suitcase.clone(), &search);
            info!("{strategy} packing took {:?}", start.elapsed());
            (strategy, packed)
        })
        .collect();

    print!("{}", format_results(&results));

    if let Some(path) = output {
        let output = PackingOutput {
            instance,
            config,
            results: results
                .iter()
                .map(|(strategy, packed)| StrategyResult::new(*strategy, packed))
                .collect(),
        };
        persistence::write_json(&output, &path)?;
    }
    Ok(())
}

/// Formats one section per strategy.
fn format_results(results: &[(Strategy, Suitcase)]) -> String {
    let mut output = String::new();
    for (strategy, packed) in results {
        output.push_str(&format!("== {strategy} ==\n"));
        output.push_str(&packed.to_string());
    }
    output
}

/// Packs random scenarios optimally and tries `trials` random packings
/// against each. Returns the number of scenarios where a random packing
/// packed more area.
fn run_check(
    config: &PackingConfig,
    scenarios: usize,
    items: usize,
    size: u32,
    max_side: NonZeroU32,
    trials: usize,
) -> Result<usize> {
    let mut rng = config.rng();
    let search = config.optimal_search();
    let mut beaten = 0;

    for scenario in 0..scenarios {
        let suitcase = Suitcase::new(size, size, random_items(items, max_side, &mut rng))?;
        let outcome = search.run(suitcase.clone());
        if !outcome.complete {
            warn!("scenario {scenario}: optimal search hit its node budget");
        }
        let best = outcome.suitcase.area_packed();

        for trial in 0..trials {
            let random = if trial % 2 == 0 {
                randomly_pack(&suitcase, &mut rng)
            } else {
                randomly_pack_partial(&suitcase, &mut rng)
            };
            if random.area_packed() > best {
                warn!(
                    "scenario {scenario}: random packing reached {} but optimal only {best}",
                    random.area_packed()
                );
                beaten += 1;
                break;
            }
        }
        info!(
            "scenario {scenario}: optimal area {best} of {}, {} nodes",
            suitcase.capacity(),
            outcome.nodes_explored
        );
    }

    Ok(beaten)
}
