//! Interactive prompt loop.
//!
//! The shell gathers inputs, hands them to `compute_range` and prints the
//! outcome. Input mistakes are re-prompted field by field; a calculation the
//! model rejects sends the user back through the whole form. The shell is
//! generic over its streams so it can be driven from a script in tests.

use crate::error::{CliError, CliResult};
use crate::report::{self, RunSummary};
use ev_physics::{
    DrivingConditions, PhysicalConstants, PhysicsResult, SystemParameters, VehicleCatalog,
    VehicleSpec, compute_range,
};
use ev_project::FieldLimit;
use ev_project::limits::{
    BATTERY_USABLE_PERCENT, CUSTOM_VEHICLE_FIELDS, DRIVETRAIN_EFFICIENCY_PERCENT, SLOPE_PERCENT,
    SPEED_KMH,
};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    catalog: &'a VehicleCatalog,
    constants: PhysicalConstants,
}

struct ChosenVehicle {
    name: String,
    spec: PhysicsResult<VehicleSpec>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(input: R, output: W, catalog: &'a VehicleCatalog, constants: PhysicalConstants) -> Self {
        Self {
            input,
            output,
            catalog,
            constants,
        }
    }

    /// Run until the user declines another calculation or input ends.
    ///
    /// Returns the number of completed calculations.
    pub fn run(&mut self) -> CliResult<usize> {
        report::write_banner(&mut self.output)?;
        let mut completed = 0;

        loop {
            match self.calculate_once() {
                Ok(()) => completed += 1,
                Err(CliError::InputClosed) => break,
                Err(e) => return Err(e),
            }
            match self.ask_continue() {
                Ok(true) => continue,
                Ok(false) | Err(CliError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        report::write_farewell(&mut self.output)?;
        Ok(completed)
    }

    fn calculate_once(&mut self) -> CliResult<()> {
        loop {
            let vehicle = self.read_vehicle()?;
            let (speed_kmh, slope_percent) = self.read_conditions()?;
            let (efficiency_percent, usable_percent) = self.read_system()?;

            let outcome = vehicle.spec.and_then(|spec| {
                let conditions = DrivingConditions::from_kmh(speed_kmh, slope_percent)?;
                let system = SystemParameters::from_percent(efficiency_percent, usable_percent)?;
                compute_range(&spec, &conditions, &system, &self.constants)
            });

            match outcome {
                Ok(result) => {
                    debug!(range_km = result.range_km, "calculation complete");
                    let summary = RunSummary {
                        vehicle: &vehicle.name,
                        speed_kmh,
                        slope_percent,
                    };
                    report::write_result(&mut self.output, &summary, &result)?;
                    return Ok(());
                }
                Err(err) => {
                    warn!(%err, "calculation rejected");
                    writeln!(self.output)?;
                    writeln!(self.output, "Error: {err}")?;
                    writeln!(self.output, "Please adjust the inputs and try again.")?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    fn read_vehicle(&mut self) -> CliResult<ChosenVehicle> {
        writeln!(self.output, "--- Vehicle Specifications ---")?;
        writeln!(self.output)?;
        writeln!(self.output, "Choose vehicle specification method")?;
        writeln!(self.output, " 1. Use preset vehicle profile")?;
        writeln!(self.output, " 2. Enter custom specifications")?;
        writeln!(self.output)?;

        loop {
            match self.read_line("Enter choice 1 or 2: ")?.as_str() {
                "1" => return self.read_preset(),
                "2" => return self.read_custom(),
                _ => writeln!(self.output, "Error: Please enter 1 or 2")?,
            }
        }
    }

    fn read_preset(&mut self) -> CliResult<ChosenVehicle> {
        let catalog = self.catalog;
        writeln!(self.output)?;
        writeln!(self.output, "Available vehicle presets:")?;
        for (idx, profile) in catalog.iter().enumerate() {
            writeln!(self.output, " {}. {}", idx + 1, profile.name)?;
        }
        writeln!(self.output)?;

        let prompt = format!("Select vehicle (1-{}): ", catalog.len());
        let profile = loop {
            let choice = self.read_line(&prompt)?;
            match choice.parse::<usize>().ok().and_then(|n| catalog.by_index(n)) {
                Some(profile) => break profile,
                None => writeln!(
                    self.output,
                    "Error: Please enter a number from 1 to {}",
                    catalog.len()
                )?,
            }
        };

        writeln!(self.output)?;
        writeln!(self.output, "Selected: {}", profile.name)?;
        writeln!(self.output, " Mass: {} kg", profile.spec.mass_kg())?;
        writeln!(
            self.output,
            " Battery: {} kWh",
            profile.spec.battery_capacity_kwh().round()
        )?;
        writeln!(self.output)?;

        Ok(ChosenVehicle {
            name: profile.name.to_string(),
            spec: Ok(profile.spec),
        })
    }

    fn read_custom(&mut self) -> CliResult<ChosenVehicle> {
        writeln!(self.output)?;
        writeln!(self.output, "Enter custom vehicle specification")?;
        writeln!(self.output)?;

        let mut values = [0.0; CUSTOM_VEHICLE_FIELDS.len()];
        for (slot, limit) in values.iter_mut().zip(CUSTOM_VEHICLE_FIELDS.iter()) {
            *slot = self.read_number(limit)?;
        }
        writeln!(self.output)?;

        let [battery_kwh, mass_kg, cd, area_m2, crr] = values;
        Ok(ChosenVehicle {
            name: "Custom vehicle".to_string(),
            spec: VehicleSpec::from_si(mass_kg, cd, area_m2, crr, battery_kwh),
        })
    }

    fn read_conditions(&mut self) -> CliResult<(f64, f64)> {
        writeln!(self.output, "--- Driving Conditions ---")?;
        writeln!(self.output)?;
        let speed_kmh = self.read_number(&SPEED_KMH)?;

        writeln!(self.output, "Road slope options:")?;
        writeln!(self.output, " - Enter 0 for flat road")?;
        writeln!(
            self.output,
            " - Enter a positive number for uphill (e.g., 5 for 5%)"
        )?;
        writeln!(
            self.output,
            " - Enter a negative number for downhill (e.g., -3 for -3%)"
        )?;
        let slope_percent = self.read_number(&SLOPE_PERCENT)?;
        writeln!(self.output)?;

        Ok((speed_kmh, slope_percent))
    }

    fn read_system(&mut self) -> CliResult<(f64, f64)> {
        writeln!(self.output, "--- System Efficiency Settings ---")?;
        writeln!(self.output, "Press Enter to use the default values")?;
        writeln!(self.output)?;
        let efficiency = self.read_number(&DRIVETRAIN_EFFICIENCY_PERCENT)?;
        let usable = self.read_number(&BATTERY_USABLE_PERCENT)?;
        writeln!(self.output)?;
        Ok((efficiency, usable))
    }

    fn ask_continue(&mut self) -> CliResult<bool> {
        loop {
            let answer = self
                .read_line("Do you want to run another calculation (yes/no): ")?
                .to_lowercase();
            match answer.as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => writeln!(self.output, "Please enter yes or no.")?,
            }
        }
    }

    /// Prompt until the answer parses and lies inside `limit`.
    fn read_number(&mut self, limit: &FieldLimit) -> CliResult<f64> {
        let prompt = match limit.default {
            Some(default) => format!(
                "Enter {} ({}, default {}): ",
                limit.label, limit.unit, default
            ),
            None => format!("Enter {} ({}): ", limit.label, limit.unit),
        };

        loop {
            let line = self.read_line(&prompt)?;
            if line.is_empty() {
                if let Some(default) = limit.default {
                    return Ok(default);
                }
            }
            let value = match line.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    writeln!(self.output, "Error: Please enter a numeric value")?;
                    continue;
                }
            };
            if value < limit.min {
                writeln!(self.output, "Error: Value must be at least {}", limit.min)?;
            } else if value > limit.max {
                writeln!(self.output, "Error: Value must be at most {}", limit.max)?;
            } else {
                return Ok(value);
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
