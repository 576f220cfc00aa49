use brownsim_core::diagnostics::format_runtime_error;
use brownsim_core::{
    build_initial_state_seeded, format_error, InitialConditions, SimError, SimulationParameters,
    Stepper, VelocityDistribution,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_STEPS: usize = 1000;

#[derive(Parser)]
#[command(name = "brownsim")]
#[command(
    about = "Brownian motion of a heavy particle in a bath of light molecules",
    long_about = None
)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and optionally write its trajectory as JSON
    Run(RunArgs),
}

#[derive(clap::Args, Debug, Default)]
struct RunArgs {
    /// JSON file with `parameters`, `initial` and `run` sections
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    molecules: Option<usize>,
    #[arg(long)]
    molecule_mass: Option<f64>,
    #[arg(long)]
    brownian_mass: Option<f64>,
    #[arg(long)]
    domain_size: Option<f64>,
    #[arg(long)]
    dt: Option<f64>,
    #[arg(long)]
    mean_speed: Option<f64>,
    #[arg(long, value_enum)]
    distribution: Option<DistributionArg>,
    #[arg(long)]
    steps: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Record the state before the first step
    #[arg(long)]
    record_initial: bool,
    /// Leave bath positions out of the exported frames
    #[arg(long)]
    hide_molecules: bool,
    /// Where to write the trajectory JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DistributionArg {
    Gaussian,
    FixedSpeed,
}

impl From<DistributionArg> for VelocityDistribution {
    fn from(arg: DistributionArg) -> Self {
        match arg {
            DistributionArg::Gaussian => VelocityDistribution::Gaussian,
            DistributionArg::FixedSpeed => VelocityDistribution::FixedSpeed,
        }
    }
}

/// Run-level settings that are not physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct RunConfig {
    steps: usize,
    seed: Option<u64>,
    record_initial: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            seed: None,
            record_initial: false,
        }
    }
}

/// Everything needed to start a run, as read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    parameters: SimulationParameters,
    initial: InitialConditions,
    run: RunConfig,
}

impl Config {
    /// Apply command-line overrides on top of file/default values.
    fn apply(&mut self, args: &RunArgs) {
        let p = &mut self.parameters;
        if let Some(v) = args.molecules {
            p.molecule_count = v;
        }
        if let Some(v) = args.molecule_mass {
            p.molecule_mass = v;
        }
        if let Some(v) = args.brownian_mass {
            p.brownian_mass = v;
        }
        if let Some(v) = args.domain_size {
            p.domain_size = v;
        }
        if let Some(v) = args.dt {
            p.time_step = v;
        }
        if let Some(v) = args.mean_speed {
            self.initial.mean_speed = v;
        }
        if let Some(v) = args.distribution {
            self.initial.distribution = v.into();
        }
        if let Some(v) = args.steps {
            self.run.steps = v;
        }
        if args.seed.is_some() {
            self.run.seed = args.seed;
        }
        self.run.record_initial |= args.record_initial;
    }
}

fn load_config(args: &RunArgs) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    config.apply(args);
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Run(args) => {
            if let Err(e) = run(&args) {
                match e.downcast_ref::<SimError>() {
                    Some(sim) => eprintln!("{}", format_error(sim)),
                    None => eprintln!("{}", format_runtime_error(e.as_ref())),
                }
                std::process::exit(1);
            }
        }
    }
}

fn run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    let initial =
        build_initial_state_seeded(config.parameters, &config.initial, config.run.seed)?;

    log::info!(
        "simulating {} molecules for {} steps",
        config.parameters.molecule_count,
        config.run.steps
    );
    let trajectory = Stepper::new(initial)
        .record_initial(config.run.record_initial)
        .run(config.run.steps);

    if let Some(last) = trajectory.last() {
        let b = last.brownian();
        println!("snapshots = {}", trajectory.len());
        println!("brownian position = ({:.6}, {:.6})", b.position.x, b.position.y);
        println!("brownian velocity = ({:.6}, {:.6})", b.velocity.x, b.velocity.y);
    }

    if let Some(path) = &args.output {
        fs::write(path, trajectory.to_json(!args.hide_molecules)?)?;
        log::info!("trajectory written to {}", path.display());
    }

    Ok(())
}
