mod error;
mod report;
mod shell;

use clap::{Args, Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use ev_physics::{PhysicalConstants, SweepAxis, SweepDefinition, VehicleCatalog};
use ev_project::limits::{DRAG_COEFFICIENT, FRONTAL_AREA_M2, ROLLING_RESISTANCE_COEFF};
use ev_project::{
    ConditionsDef, CustomVehicleDef, LATEST_VERSION, ResolvedScenario, Scenario, SystemDef,
    VehicleDef, load_scenario, validate_scenario,
};
use report::RunSummary;
use shell::Shell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, info, warn};

#[derive(Parser)]
#[command(name = "ev-cli")]
#[command(about = "EV Range Estimator - steady-state driving range from road load", long_about = None)]
struct Cli {
    /// Log calculation stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guided prompt session (the default)
    Interactive,
    /// One-shot estimate from command-line values
    Estimate(EstimateArgs),
    /// Estimate range for a scenario file
    Run {
        /// Path to a YAML or JSON scenario file
        scenario_path: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Vary speed or slope across a scenario
    Sweep {
        /// Path to a YAML or JSON scenario file
        scenario_path: PathBuf,
        #[arg(long, value_enum)]
        axis: AxisArg,
        /// First value (km/h or %)
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        /// Last value (km/h or %)
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = 9)]
        points: usize,
        #[arg(long)]
        json: bool,
    },
    /// List the built-in vehicle presets
    Presets,
    /// Check a scenario file without computing
    Validate {
        /// Path to a YAML or JSON scenario file
        scenario_path: PathBuf,
    },
}

#[derive(Args)]
struct EstimateArgs {
    /// Preset key or name (compact, suv, sports)
    #[arg(long, conflicts_with_all = ["mass", "battery", "cd", "area", "crr"])]
    preset: Option<String>,
    /// Vehicle mass in kg
    #[arg(long, required_unless_present = "preset")]
    mass: Option<f64>,
    /// Battery capacity in kWh
    #[arg(long, required_unless_present = "preset")]
    battery: Option<f64>,
    /// Drag coefficient
    #[arg(long)]
    cd: Option<f64>,
    /// Frontal area in m²
    #[arg(long)]
    area: Option<f64>,
    /// Rolling resistance coefficient
    #[arg(long)]
    crr: Option<f64>,
    /// Cruise speed in km/h
    #[arg(long)]
    speed: f64,
    /// Road grade in percent, negative for downhill
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    slope: f64,
    /// Drivetrain efficiency in percent
    #[arg(long, default_value_t = 88.0)]
    efficiency: f64,
    /// Usable battery share in percent
    #[arg(long, default_value_t = 90.0)]
    usable: f64,
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Speed,
    Slope,
}

impl From<AxisArg> for SweepAxis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Speed => SweepAxis::Speed,
            AxisArg::Slope => SweepAxis::Slope,
        }
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = VehicleCatalog::builtin()?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => cmd_interactive(&catalog),
        Commands::Estimate(args) => cmd_estimate(&catalog, args),
        Commands::Run {
            scenario_path,
            json,
        } => cmd_run(&catalog, &scenario_path, json),
        Commands::Sweep {
            scenario_path,
            axis,
            from,
            to,
            points,
            json,
        } => cmd_sweep(&catalog, &scenario_path, axis.into(), from, to, points, json),
        Commands::Presets => report::write_presets(&mut io::stdout().lock(), &catalog),
        Commands::Validate { scenario_path } => cmd_validate(&catalog, &scenario_path),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn cmd_interactive(catalog: &VehicleCatalog) -> CliResult<()> {
    let stdin = io::stdin();
    let mut shell = Shell::new(
        stdin.lock(),
        io::stdout().lock(),
        catalog,
        PhysicalConstants::default(),
    );
    let completed = shell.run()?;
    info!(completed, "interactive session finished");
    Ok(())
}

fn cmd_estimate(catalog: &VehicleCatalog, args: EstimateArgs) -> CliResult<()> {
    let scenario = estimate_scenario(&args)?;
    validate_scenario(&scenario).map_err(ev_project::ProjectError::from)?;
    let resolved = scenario.resolve(catalog)?;
    print_result(&scenario, &resolved, args.json)
}

fn estimate_scenario(args: &EstimateArgs) -> CliResult<Scenario> {
    let vehicle = match (&args.preset, args.mass, args.battery) {
        (Some(preset), _, _) => VehicleDef::Preset {
            preset: preset.clone(),
        },
        (None, Some(mass_kg), Some(battery_capacity_kwh)) => VehicleDef::Custom(CustomVehicleDef {
            name: None,
            battery_capacity_kwh,
            mass_kg,
            drag_coefficient: args.cd.unwrap_or(DRAG_COEFFICIENT.default_value()),
            frontal_area_m2: args.area.unwrap_or(FRONTAL_AREA_M2.default_value()),
            rolling_resistance_coeff: args
                .crr
                .unwrap_or(ROLLING_RESISTANCE_COEFF.default_value()),
        }),
        _ => {
            return Err(CliError::InvalidInput(
                "either --preset or both --mass and --battery are required".to_string(),
            ));
        }
    };

    Ok(Scenario {
        version: LATEST_VERSION,
        name: "Command line".to_string(),
        vehicle,
        conditions: ConditionsDef {
            speed_kmh: args.speed,
            slope_percent: args.slope,
        },
        system: SystemDef {
            drivetrain_efficiency_percent: args.efficiency,
            battery_usable_percent: args.usable,
        },
        constants: None,
    })
}

fn cmd_run(catalog: &VehicleCatalog, path: &Path, json: bool) -> CliResult<()> {
    let scenario = load_scenario(path)?;
    info!(name = %scenario.name, "running scenario");
    let resolved = scenario.resolve(catalog)?;
    print_result(&scenario, &resolved, json)
}

fn print_result(scenario: &Scenario, resolved: &ResolvedScenario, json: bool) -> CliResult<()> {
    let result = resolved.compute()?;
    let summary = RunSummary {
        vehicle: &resolved.vehicle_name,
        speed_kmh: scenario.conditions.speed_kmh,
        slope_percent: scenario.conditions.slope_percent,
    };

    let mut out = io::stdout().lock();
    if json {
        report::write_result_json(&mut out, &summary, &result)
    } else {
        report::write_result(&mut out, &summary, &result)
    }
}

fn cmd_sweep(
    catalog: &VehicleCatalog,
    path: &Path,
    axis: SweepAxis,
    from: f64,
    to: f64,
    points: usize,
    json: bool,
) -> CliResult<()> {
    let scenario = load_scenario(path)?;
    let resolved = scenario.resolve(catalog)?;
    let definition = SweepDefinition::new(axis, from, to, points)?;
    info!(name = %scenario.name, sweep = %definition, "running sweep");

    let result = resolved.sweep(&definition);
    if result.num_failed() > 0 {
        warn!(
            failed = result.num_failed(),
            total = result.points.len(),
            "some sweep points had no valid range"
        );
    }

    let mut out = io::stdout().lock();
    if json {
        report::write_sweep_json(&mut out, &result)
    } else {
        report::write_sweep(&mut out, &resolved.vehicle_name, &result)
    }
}

fn cmd_validate(catalog: &VehicleCatalog, path: &Path) -> CliResult<()> {
    let scenario = load_scenario(path)?;
    scenario.resolve(catalog)?;

    let mut out = io::stdout().lock();
    writeln!(out, "✓ Scenario is valid")?;
    writeln!(out, "  Name: {}", scenario.name)?;
    writeln!(out, "  Version: {}", scenario.version)?;
    match &scenario.vehicle {
        VehicleDef::Preset { preset } => writeln!(out, "  Vehicle: preset '{preset}'")?,
        VehicleDef::Custom(custom) => writeln!(
            out,
            "  Vehicle: {}",
            custom.name.as_deref().unwrap_or("custom")
        )?,
    }
    Ok(())
}
