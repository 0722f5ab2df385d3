//! Segregation cost evaluation CLI.
//!
//! Commands:
//! - evaluate: score every step of a recorded trajectory
//! - scatter: score random initial placements

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use segregation_cost::adapters::outbound::{init_domain_logger, FileTrajectorySource};
use segregation_cost::application::{TrialReport, TrialService};
use segregation_cost::domains::logger::FileLogger;
use segregation_cost::domains::segregation::{PlacementSpec, SegregationCostEvaluator};
use segregation_cost::Config;

#[derive(Parser)]
#[command(name = "segregation-eval")]
#[command(version)]
#[command(about = "Segregation cost of grouped robot swarms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every step of a recorded trajectory
    Evaluate {
        /// Experiment configuration (groups, evaluator, logging)
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,

        /// Trajectory JSON file
        #[arg(long)]
        trajectory: PathBuf,
    },

    /// Score random initial placements
    Scatter {
        /// Number of groups
        #[arg(long, default_value = "2")]
        groups: u32,

        /// Agents per group
        #[arg(long, default_value = "5")]
        per_group: u32,

        /// Number of placements to sample
        #[arg(long, default_value = "5")]
        trials: usize,

        /// Radius of each group's placement disc
        #[arg(long, default_value = "0.5")]
        spread: f64,

        /// Distance of group discs from the origin
        #[arg(long, default_value = "2.0")]
        separation: f64,

        /// Drop every group around the origin
        #[arg(long)]
        mixed: bool,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Optional configuration for evaluator settings and logging; groups are generated
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Plain global default: leaves the `log` facade free for the fast_log file backend.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let result = run(Cli::parse()).await;
    // fast_log writes from a background thread; drain it on every exit path
    FileLogger::flush_backend();
    result
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Evaluate { config, trajectory } => {
            let config = Config::from_file(&config)
                .await
                .with_context(|| format!("loading {}", config.display()))?;
            let logger = init_domain_logger(config.logging.file.as_deref());
            let evaluator = config.build_evaluator()?;
            info!("evaluating {} agents in {} groups", evaluator.assignment().len(), config.groups.len());

            let source = FileTrajectorySource::new(trajectory.parent().map(PathBuf::from));
            let name = trajectory
                .file_name()
                .and_then(|n| n.to_str())
                .context("trajectory path has no file name")?;
            let service = TrialService::new(evaluator, logger);
            let report = service.run_source(&source, name).await?;
            for step in &report.steps {
                println!("step {} cost {}", step.step, step.cost.total);
            }
            print_summary(&report);
        }
        Commands::Scatter { groups, per_group, trials, spread, separation, mixed, seed, config } => {
            let config = match config {
                Some(path) => Config::from_file(&path)
                    .await
                    .with_context(|| format!("loading {}", path.display()))?,
                None => Config::default(),
            };
            let logger = init_domain_logger(config.logging.file.as_deref());
            let spec = PlacementSpec { groups, per_group, spread, separation, mixed };
            let evaluator = SegregationCostEvaluator::new(spec.assignment()?, config.evaluator)?;
            let seed = seed.unwrap_or_else(rand::random);
            info!("sampling {} placements with seed {}", trials, seed);

            let service = TrialService::new(evaluator, logger);
            let report = service.run_placements(&spec, trials, &mut StdRng::seed_from_u64(seed))?;
            for step in &report.steps {
                println!("trial {} cost {}", step.step, step.cost.total);
            }
            print_summary(&report);
        }
    }

    Ok(())
}

fn print_summary(report: &TrialReport) {
    let s = &report.summary;
    println!("steps {} mean {} min {} max {} final {}", s.steps, s.mean, s.min, s.max, s.final_cost);
}
