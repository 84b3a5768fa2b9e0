use clap::{Args, Parser, Subcommand};
use pt_units::LengthUnit;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod batch;
mod error;

use batch::Calculation;
use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "Process Toolbox CLI - dimensionless numbers and metric length conversion", long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reynolds number, rho*v*L/mu
    Reynolds {
        /// Density [kg/m3]
        #[arg(long, allow_hyphen_values = true)]
        rho: f64,
        /// Flow speed [m/s]
        #[arg(long, allow_hyphen_values = true)]
        v: f64,
        /// Characteristic length [m]
        #[arg(long, allow_hyphen_values = true)]
        l: f64,
        /// Dynamic viscosity [Pa s]
        #[arg(long, allow_hyphen_values = true)]
        mu: f64,
    },
    /// Prandtl number, Cp*mu/k
    Prandtl {
        /// Specific heat [J/(kg K)]
        #[arg(long, allow_hyphen_values = true)]
        cp: f64,
        /// Dynamic viscosity [Pa s]
        #[arg(long, allow_hyphen_values = true)]
        mu: f64,
        /// Thermal conductivity [W/(m K)]
        #[arg(long, allow_hyphen_values = true)]
        k: f64,
    },
    /// Schmidt number, mu/(rho*D)
    Schmidt {
        #[arg(long, allow_hyphen_values = true)]
        mu: f64,
        #[arg(long, allow_hyphen_values = true)]
        rho: f64,
        /// Mass diffusivity [m2/s]
        #[arg(long, allow_hyphen_values = true)]
        d: f64,
    },
    /// Lewis number, Pr/Sc
    Lewis {
        #[arg(long, allow_hyphen_values = true)]
        pr: f64,
        #[arg(long, allow_hyphen_values = true)]
        sc: f64,
    },
    /// Peclet number for heat transfer: give --re and --pr, or --u, --alpha and --l
    PecletHeat(PecletHeatArgs),
    /// Peclet number for mass transfer: give --re and --sc, or --u, --d and --l
    PecletMass(PecletMassArgs),
    /// Stanton number: give --nu and --pe, or --h, --rho, --u and --cp
    Stanton(StantonArgs),
    /// Sherwood number, L*h/D
    Sherwood {
        #[arg(long, allow_hyphen_values = true)]
        l: f64,
        /// Mass-transfer coefficient [m/s]
        #[arg(long, allow_hyphen_values = true)]
        h: f64,
        #[arg(long, allow_hyphen_values = true)]
        d: f64,
    },
    /// Nusselt number, h*L/k
    Nusselt {
        /// Heat-transfer coefficient [W/(m2 K)]
        #[arg(long, allow_hyphen_values = true)]
        h: f64,
        #[arg(long, allow_hyphen_values = true)]
        l: f64,
        #[arg(long, allow_hyphen_values = true)]
        k: f64,
    },
    /// Convert a length between metric prefixes
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        /// Unit of the input value (e.g. mm)
        unit_in: String,
        /// Desired output unit (e.g. km)
        unit_out: String,
    },
    /// Area of a circle from its diameter
    Area {
        #[arg(allow_hyphen_values = true)]
        diameter: f64,
        #[arg(long, default_value = "m")]
        unit_in: String,
        #[arg(long, default_value = "m")]
        unit_out: String,
    },
    /// List supported metric length units
    Units,
    /// Evaluate every case in a YAML batch file
    Batch {
        /// Path to the batch YAML file
        path: PathBuf,
    },
}

#[derive(Args)]
struct PecletHeatArgs {
    #[arg(long, allow_hyphen_values = true)]
    re: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pr: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    u: Option<f64>,
    /// Thermal diffusivity [m2/s]
    #[arg(long, allow_hyphen_values = true)]
    alpha: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    l: Option<f64>,
}

#[derive(Args)]
struct PecletMassArgs {
    #[arg(long, allow_hyphen_values = true)]
    re: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    sc: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    u: Option<f64>,
    /// Mass diffusivity [m2/s]
    #[arg(long, allow_hyphen_values = true)]
    d: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    l: Option<f64>,
}

#[derive(Args)]
struct StantonArgs {
    #[arg(long, allow_hyphen_values = true)]
    nu: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pe: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    h: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    rho: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    u: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    cp: Option<f64>,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Reynolds { rho, v, l, mu } => {
            cmd_calculate(Calculation::Reynolds { rho, v, l, mu })
        }
        Commands::Prandtl { cp, mu, k } => cmd_calculate(Calculation::Prandtl { cp, mu, k }),
        Commands::Schmidt { mu, rho, d } => cmd_calculate(Calculation::Schmidt { mu, rho, d }),
        Commands::Lewis { pr, sc } => cmd_calculate(Calculation::Lewis { pr, sc }),
        Commands::PecletHeat(args) => cmd_calculate(Calculation::PecletHeat {
            re: args.re,
            pr: args.pr,
            u: args.u,
            alpha: args.alpha,
            l: args.l,
        }),
        Commands::PecletMass(args) => cmd_calculate(Calculation::PecletMass {
            re: args.re,
            sc: args.sc,
            u: args.u,
            d: args.d,
            l: args.l,
        }),
        Commands::Stanton(args) => cmd_calculate(Calculation::Stanton {
            nu: args.nu,
            pe: args.pe,
            h: args.h,
            rho: args.rho,
            u: args.u,
            cp: args.cp,
        }),
        Commands::Sherwood { l, h, d } => cmd_calculate(Calculation::Sherwood { l, h, d }),
        Commands::Nusselt { h, l, k } => cmd_calculate(Calculation::Nusselt { h, l, k }),
        Commands::Convert {
            value,
            unit_in,
            unit_out,
        } => cmd_calculate(Calculation::ConvertLength {
            value,
            unit_in,
            unit_out,
        }),
        Commands::Area {
            diameter,
            unit_in,
            unit_out,
        } => cmd_calculate(Calculation::AreaCircle {
            diameter,
            unit_in,
            unit_out,
        }),
        Commands::Units => {
            cmd_units();
            Ok(())
        }
        Commands::Batch { path } => cmd_batch(&path),
    }
}

fn cmd_calculate(calculation: Calculation) -> CliResult<()> {
    let value = calculation.evaluate()?;
    println!("{} = {}", calculation.label(), value);
    Ok(())
}

fn cmd_units() {
    println!("Metric length units (power of ten relative to m):");
    for unit in LengthUnit::ALL {
        println!("  {:>4}  1e{}", unit.symbol(), unit.exponent());
    }
}

fn cmd_batch(path: &Path) -> CliResult<()> {
    let file = batch::load_batch(path)?;
    let outcomes = batch::run_batch(&file);

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(value) => println!("✓ {}: {} = {}", outcome.name, outcome.label, value),
            Err(err) => {
                failed += 1;
                println!("✗ {}: {}", outcome.name, err);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::BatchFailed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}
