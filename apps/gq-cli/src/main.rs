use clap::{Parser, Subcommand};
use gq_cli::report::{render_components, render_grid, render_text};
use gq_cli::{CliError, CliResult, GasInput};
use gq_eos::ExcessViscosityTable;
use gq_solver::{
    DensityConfig, SweepDefinition, SweepType, evaluate, evaluate_with_viscosity, run_grid,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const CELSIUS_OFFSET: f64 = 273.15;

#[derive(Parser)]
#[command(name = "gq-cli")]
#[command(about = "Natural gas density, compressibility and sound speed (AGA8-DC92 / GOST 30319)", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute properties for one gas at one state point
    Calc {
        /// Input file (line format, or YAML for .yaml/.yml)
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
        /// Newton step limit for the density solve
        #[arg(long, default_value_t = DensityConfig::default().max_iterations)]
        max_iterations: usize,
        /// Excess viscosity table (JSON or YAML); enables the viscosity calculation
        #[arg(long)]
        viscosity_table: Option<PathBuf>,
    },
    /// List accepted component names
    Components,
    /// Evaluate the gas over a pressure x temperature grid
    Sweep {
        /// Input file; its pressure and temperature are ignored
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        p_start: f64,
        #[arg(long)]
        p_end: f64,
        #[arg(long, default_value_t = 5)]
        p_points: usize,
        /// Space pressures logarithmically
        #[arg(long)]
        p_log: bool,
        /// Start temperature [°C]
        #[arg(long)]
        t_start: f64,
        /// End temperature [°C]
        #[arg(long)]
        t_end: f64,
        #[arg(long, default_value_t = 3)]
        t_points: usize,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Calc {
            input,
            output,
            json,
            max_iterations,
            viscosity_table,
        } => cmd_calc(
            &input,
            output.as_deref(),
            json,
            max_iterations,
            viscosity_table.as_deref(),
        ),
        Commands::Components => {
            print!("{}", render_components());
            Ok(())
        }
        Commands::Sweep {
            input,
            output,
            p_start,
            p_end,
            p_points,
            p_log,
            t_start,
            t_end,
            t_points,
        } => {
            let spacing = if p_log {
                SweepType::Logarithmic
            } else {
                SweepType::Linear
            };
            let pressures = SweepDefinition::new(p_start, p_end, p_points, spacing)?;
            let temperatures = SweepDefinition::new(
                t_start + CELSIUS_OFFSET,
                t_end + CELSIUS_OFFSET,
                t_points,
                SweepType::Linear,
            )?;
            cmd_sweep(&input, output.as_deref(), &pressures, &temperatures)
        }
    }
}

fn load_viscosity_table(path: &Path) -> CliResult<ExcessViscosityTable> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let table = if is_json {
        ExcessViscosityTable::from_json_str(&text)?
    } else {
        ExcessViscosityTable::from_yaml_str(&text)?
    };
    Ok(table)
}

fn write_output(output: Option<&Path>, text: &str) -> CliResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| CliError::io(path, e))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_calc(
    input: &Path,
    output: Option<&Path>,
    json: bool,
    max_iterations: usize,
    viscosity_table: Option<&Path>,
) -> CliResult<()> {
    let gas = GasInput::load(input)?;
    let ctx = gas.context()?;
    let config = DensityConfig {
        max_iterations,
        ..DensityConfig::default()
    };

    let report = match viscosity_table {
        Some(path) => evaluate_with_viscosity(&ctx, &config, &load_viscosity_table(path)?)?,
        None => evaluate(&ctx, &config)?,
    };

    let text = if json {
        let mut s = serde_json::to_string_pretty(&report)?;
        s.push('\n');
        s
    } else {
        render_text(&report)
    };
    write_output(output, &text)
}

fn cmd_sweep(
    input: &Path,
    output: Option<&Path>,
    pressures: &SweepDefinition,
    temperatures: &SweepDefinition,
) -> CliResult<()> {
    let gas = GasInput::load(input)?;
    let ctx = gas.context()?;
    let points = run_grid(&ctx, pressures, temperatures, &DensityConfig::default());
    write_output(output, &render_grid(&points))
}
