//! Plain-text rendering of results.

use gq_fluids::Component;
use gq_solver::{GasReport, GridPoint};
use std::fmt::Write;
use uom::si::dynamic_viscosity::micropascal_second;
use uom::si::velocity::meter_per_second;

const CELSIUS_OFFSET: f64 = 273.15;

/// Aligned table with a 1-based row counter in the first column.
///
/// Cells are padded to the widest entry of their column; the last column is
/// left unpadded.
fn table(out: &mut String, counter: &str, headers: &[&str], rows: &[Vec<String>]) {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(c, h)| {
            rows.iter()
                .map(|r| r[c].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(out, &widths, format!("{counter:>2}"), headers);
    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        write_row(out, &widths, format!("{:>2}", i + 1), &cells);
    }
}

fn write_row(out: &mut String, widths: &[usize], first: String, cells: &[&str]) {
    let last = cells.len() - 1;
    out.push_str(&first);
    for (c, cell) in cells.iter().enumerate() {
        out.push_str("  |  ");
        out.push_str(cell);
        if c < last {
            let pad = widths[c] - cell.chars().count();
            out.extend(std::iter::repeat_n(' ', pad));
        }
    }
    out.push('\n');
}

pub fn render_text(report: &GasReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, r: &GasReport) -> std::fmt::Result {
    writeln!(out, "Pressure: p = {} MPa", r.pressure_mpa)?;
    writeln!(
        out,
        "Temperature: T = {:.2} K ({:.2} °C)",
        r.temperature_k,
        r.temperature_k - CELSIUS_OFFSET
    )?;
    writeln!(out, "Composition (after trace fold):")?;
    for (component, x) in &r.composition {
        writeln!(out, "  {:<16} {:>10.4} %", component.display_name(), x * 100.0)?;
    }
    writeln!(out, "Mixture size parameter: Kx = {:.6} (m³/kmol)^1/3", r.kx)?;
    writeln!(out, "Reference pressure: p0m = {:.6} MPa", r.reference_pressure_mpa)?;
    writeln!(out, "Molar mass: M = {:.6} kg/kmol", r.molar_mass)?;

    writeln!(out, "Composition functions:")?;
    let du: Vec<Vec<String>> = r
        .coefficients
        .d
        .iter()
        .zip(&r.coefficients.u)
        .map(|(d, u)| vec![d.to_string(), u.to_string()])
        .collect();
    table(out, "n", &["D", "U"], &du);

    writeln!(out, "Reduced pressure: π = {:.6}", r.reduced_pressure)?;
    writeln!(out, "Reduced temperature: τ = {:.6}", r.reduced_temperature)?;
    writeln!(out, "Initial reduced density: σ0 = {:.6}", r.initial_sigma)?;

    writeln!(out, "Reduced density iterations:")?;
    let steps: Vec<Vec<String>> = r
        .iterations
        .iter()
        .map(|s| vec![s.delta.to_string(), s.sigma.to_string(), s.pi_calc.to_string()])
        .collect();
    table(out, "k", &["Δσ", "σ", "π calc"], &steps);

    writeln!(out, "Density: ρ = {:.6} kg/m³", r.density_kg_m3())?;
    writeln!(out, "Compressibility factor: Z = {:.6}", r.compressibility)?;
    writeln!(out, "Ideal-gas heat capacity: cp0/R = {:.6}", r.sound.cp0r)?;
    writeln!(out, "Adiabatic exponent: κ = {:.6}", r.sound.adiabatic_exponent)?;
    writeln!(
        out,
        "Speed of sound: w = {:.3} m/s",
        r.sound.speed_of_sound.get::<meter_per_second>()
    )?;

    if let Some(v) = &r.viscosity {
        writeln!(out, "Pseudocritical density: {:.6} kmol/m³", v.pseudocritical_density)?;
        writeln!(out, "Pseudocritical temperature: {:.4} K", v.pseudocritical_temperature)?;
        writeln!(out, "Pseudocritical pressure: {:.6} MPa", v.pseudocritical_pressure)?;
        writeln!(out, "Dilute-gas viscosity: μ0 = {:.6} µPa·s", v.dilute)?;
        writeln!(
            out,
            "Dynamic viscosity: μ = {:.6} µPa·s",
            v.viscosity.get::<micropascal_second>()
        )?;
    }
    Ok(())
}

pub fn render_components() -> String {
    let mut out = String::new();
    for c in Component::ALL {
        let _ = writeln!(
            out,
            "{:<8} {:<16} {}",
            c.key(),
            c.display_name(),
            c.aliases().join(", ")
        );
    }
    out
}

pub fn render_grid(points: &[GridPoint]) -> String {
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|pt| {
            let mut row = vec![
                format!("{:.4}", pt.pressure_mpa),
                format!("{:.2}", pt.temperature_k - CELSIUS_OFFSET),
            ];
            match &pt.result {
                Ok(r) => row.extend([
                    format!("{:.4}", r.density_kg_m3()),
                    format!("{:.4}", r.compressibility),
                    r.iterations.len().to_string(),
                ]),
                Err(e) => row.extend([String::from("-"), String::from("-"), e.to_string()]),
            }
            row
        })
        .collect();
    let mut out = String::new();
    table(
        &mut out,
        "#",
        &["p, MPa", "t, °C", "ρ, kg/m³", "Z", "steps"],
        &rows,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let mut out = String::new();
        let rows = vec![
            vec!["1.5".to_string(), "x".to_string()],
            vec!["-0.25".to_string(), "y".to_string()],
        ];
        table(&mut out, "n", &["D", "U"], &rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " n  |  D      |  U");
        assert_eq!(lines[1], " 1  |  1.5    |  x");
        assert_eq!(lines[2], " 2  |  -0.25  |  y");
    }

    #[test]
    fn component_listing_has_every_component() {
        assert_eq!(render_components().lines().count(), Component::COUNT);
    }
}
