//! Text and JSON rendering of results.

use crate::error::CliResult;
use ev_physics::{EnergyResult, SweepResult, VehicleCatalog};
use serde::Serialize;
use std::io::Write;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn write_banner(out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "EV Range Estimator v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", rule())?;
    writeln!(out)?;
    writeln!(out, "This program estimates electric vehicle range based on:")?;
    writeln!(out, "- Vehicle specifications (mass, aerodynamics)")?;
    writeln!(out, "- Driving conditions (speed, road slope)")?;
    writeln!(out, "- Battery capacity and efficiency")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_farewell(out: &mut impl Write) -> CliResult<()> {
    writeln!(out)?;
    writeln!(out, "Thank you for using EV Range Estimator!")?;
    writeln!(out, "Drive efficiently!")?;
    writeln!(out)?;
    Ok(())
}

/// What was asked, alongside what came out.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunSummary<'a> {
    pub vehicle: &'a str,
    pub speed_kmh: f64,
    pub slope_percent: f64,
}

pub fn write_result(
    out: &mut impl Write,
    summary: &RunSummary<'_>,
    result: &EnergyResult,
) -> CliResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "RESULTS: {}", summary.vehicle)?;
    writeln!(out, "{}", rule())?;
    writeln!(out)?;
    writeln!(out, "Estimated range: {:.2} km", result.range_km)?;
    writeln!(
        out,
        "Energy consumption: {:.3} kWh/km ({:.0} Wh/km)",
        result.energy_per_km_kwh,
        result.energy_per_km_wh()
    )?;
    writeln!(out, "Driving speed: {:.0} km/h", summary.speed_kmh)?;
    writeln!(out, "Road slope: {:+.1} %", summary.slope_percent)?;
    writeln!(out)?;
    writeln!(out, "Resistive forces:")?;
    writeln!(out, "  Rolling:  {:>9.1} N", result.forces.rolling_n)?;
    writeln!(out, "  Drag:     {:>9.1} N", result.forces.drag_n)?;
    writeln!(out, "  Gradient: {:>9.1} N", result.forces.gradient_n)?;
    writeln!(out, "  Total:    {:>9.1} N", result.forces.total_n)?;
    writeln!(out, "Power:")?;
    writeln!(out, "  At wheels:    {:>8.2} kW", result.power_at_wheels_w / 1000.0)?;
    writeln!(
        out,
        "  From battery: {:>8.2} kW",
        result.power_from_battery_w / 1000.0
    )?;
    writeln!(out, "Usable energy: {:.1} kWh", result.usable_energy_kwh)?;
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct ResultReport<'a> {
    #[serde(flatten)]
    summary: &'a RunSummary<'a>,
    result: &'a EnergyResult,
}

pub fn write_result_json(
    out: &mut impl Write,
    summary: &RunSummary<'_>,
    result: &EnergyResult,
) -> CliResult<()> {
    let report = ResultReport { summary, result };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_sweep(out: &mut impl Write, vehicle: &str, sweep: &SweepResult) -> CliResult<()> {
    writeln!(out, "Range sweep over {} for {}", sweep.axis, vehicle)?;
    writeln!(
        out,
        "{:>10}  {:>10}  {:>10}  {:>10}",
        format!("{} [{}]", sweep.axis, sweep.axis.unit()),
        "range km",
        "kWh/km",
        "total N"
    )?;
    for point in &sweep.points {
        match &point.outcome {
            Ok(r) => writeln!(
                out,
                "{:>10.2}  {:>10.2}  {:>10.3}  {:>10.1}",
                point.value, r.range_km, r.energy_per_km_kwh, r.forces.total_n
            )?,
            Err(e) => writeln!(out, "{:>10.2}  {}", point.value, e)?,
        }
    }
    if let Some((value, best)) = sweep.best() {
        writeln!(
            out,
            "Longest range: {:.2} km at {:.2} {}",
            best.range_km,
            value,
            sweep.axis.unit()
        )?;
    }
    if sweep.num_failed() > 0 {
        writeln!(out, "{} point(s) had no valid range", sweep.num_failed())?;
    }
    Ok(())
}

#[derive(Serialize)]
struct SweepRow<'a> {
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a EnergyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn write_sweep_json(out: &mut impl Write, sweep: &SweepResult) -> CliResult<()> {
    let rows: Vec<SweepRow<'_>> = sweep
        .points
        .iter()
        .map(|p| SweepRow {
            value: p.value,
            result: p.outcome.as_ref().ok(),
            error: p.outcome.as_ref().err().map(|e| e.to_string()),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_presets(out: &mut impl Write, catalog: &VehicleCatalog) -> CliResult<()> {
    writeln!(
        out,
        "{:<3} {:<8} {:<16} {:>8} {:>6} {:>7} {:>7} {:>9}",
        "#", "key", "name", "mass kg", "Cd", "area m²", "Crr", "battery"
    )?;
    for (idx, profile) in catalog.iter().enumerate() {
        let spec = &profile.spec;
        writeln!(
            out,
            "{:<3} {:<8} {:<16} {:>8.0} {:>6.2} {:>7.1} {:>7.3} {:>5.0} kWh",
            idx + 1,
            profile.key,
            profile.name,
            spec.mass_kg(),
            spec.drag_coefficient(),
            spec.frontal_area_m2(),
            spec.rolling_resistance_coeff(),
            spec.battery_capacity_kwh()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_physics::{
        DrivingConditions, PhysicalConstants, SweepAxis, SweepDefinition, SystemParameters,
        compute_range, execute_sweep,
    };

    fn sample() -> EnergyResult {
        let catalog = VehicleCatalog::builtin().unwrap();
        let conditions = DrivingConditions::from_kmh(100.0, 0.0).unwrap();
        compute_range(
            &catalog.get("compact").unwrap().spec,
            &conditions,
            &SystemParameters::default(),
            &PhysicalConstants::default(),
        )
        .unwrap()
    }

    fn summary() -> RunSummary<'static> {
        RunSummary {
            vehicle: "Nissan Leaf",
            speed_kmh: 100.0,
            slope_percent: 0.0,
        }
    }

    #[test]
    fn text_result_has_headline_figures() {
        let mut buf = Vec::new();
        write_result(&mut buf, &summary(), &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Estimated range: 325.27 km"), "{text}");
        assert!(text.contains("Energy consumption: 0.138 kWh/km"));
        assert!(text.contains("Driving speed: 100 km/h"));
    }

    #[test]
    fn json_result_is_flat_summary_plus_result() {
        let mut buf = Vec::new();
        write_result_json(&mut buf, &summary(), &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["vehicle"], "Nissan Leaf");
        assert!(value["result"]["range_km"].as_f64().unwrap() > 300.0);
        assert!(value["result"]["forces"]["drag_n"].as_f64().is_some());
    }

    #[test]
    fn sweep_table_reports_failures() {
        let catalog = VehicleCatalog::builtin().unwrap();
        let sweep = SweepDefinition::new(SweepAxis::Slope, -15.0, 5.0, 3).unwrap();
        let base = DrivingConditions::from_kmh(30.0, 0.0).unwrap();
        let result = execute_sweep(
            &sweep,
            &catalog.get("compact").unwrap().spec,
            &base,
            &SystemParameters::default(),
            &PhysicalConstants::default(),
        );

        let mut buf = Vec::new();
        write_sweep(&mut buf, "Nissan Leaf", &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Non-positive energy consumption"));
        assert!(text.contains("Longest range"));

        let mut buf = Vec::new();
        write_sweep_json(&mut buf, &result).unwrap();
        let rows: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 3);
        assert!(rows[0]["error"].is_string());
        assert!(rows[2]["result"].is_object());
    }

    #[test]
    fn presets_table_lists_every_vehicle() {
        let catalog = VehicleCatalog::builtin().unwrap();
        let mut buf = Vec::new();
        write_presets(&mut buf, &catalog).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for name in ["Nissan Leaf", "Volvo EX90", "Tesla Roadster"] {
            assert!(text.contains(name));
        }
    }
}
