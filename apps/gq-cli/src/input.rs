//! Gas input files.
//!
//! Two formats are accepted. The line format has one `<name> <value>` pair
//! per line:
//!
//! ```text
//! p 5
//! t 26,85
//! Methane 96,5
//! Диоксид углерода 0,6
//! ```
//!
//! The value is the last token that parses as a number (`,` is accepted as
//! the decimal separator) and the name is everything before it. `p` is the
//! pressure in MPa, `t` the temperature in °C, every other name a component
//! whose value is a percentage.
//!
//! Files ending in `.yaml` / `.yml` are read as
//!
//! ```yaml
//! pressure_mpa: 5
//! temperature_c: 26.85
//! components:
//!   CH4: 96.5
//!   CO2: 0.6
//! ```
//!
//! Component order is kept as written in either format.

use crate::error::{CliError, CliResult};
use gq_fluids::{Component, ComponentDatabase, Composition, MixtureContext, StatePoint};
use serde::Deserialize;
use std::path::Path;

/// Parsed input, values in the units they were given in.
#[derive(Debug, Clone, PartialEq)]
pub struct GasInput {
    pub pressure_mpa: f64,
    pub temperature_c: f64,
    /// Components in input order, amounts in percent
    pub components: Vec<(Component, f64)>,
}

#[derive(Deserialize)]
struct YamlInput {
    pressure_mpa: f64,
    temperature_c: f64,
    // Mapping keeps insertion order.
    components: serde_yaml::Mapping,
}

fn parse_number(token: &str) -> Option<f64> {
    token.replace(',', ".").parse().ok()
}

impl GasInput {
    /// Read an input file, choosing the format by extension.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Self::parse_yaml(&text)
        } else {
            Self::parse_lines(&text)
        }
    }

    pub fn parse_lines(text: &str) -> CliResult<Self> {
        let mut pressure = None;
        let mut temperature = None;
        let mut components = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() < 2 {
                return Err(CliError::Parse {
                    line: line_no,
                    what: format!("missing name or value in '{}'", line.trim()),
                });
            }

            let Some((at, value)) = tokens
                .iter()
                .enumerate()
                .filter_map(|(i, t)| parse_number(t).map(|v| (i, v)))
                .last()
            else {
                return Err(CliError::Parse {
                    line: line_no,
                    what: format!("cannot parse value in '{}'", line.trim()),
                });
            };

            let name = tokens[..at].join(" ").to_lowercase();
            match name.as_str() {
                "t" => temperature = Some(value),
                "p" => pressure = Some(value),
                _ => {
                    let component = name.parse::<Component>().map_err(|_| CliError::Parse {
                        line: line_no,
                        what: format!("unknown component or parameter '{name}'"),
                    })?;
                    components.push((component, value));
                }
            }
        }

        Ok(Self {
            pressure_mpa: pressure.ok_or(CliError::Missing { what: "pressure p" })?,
            temperature_c: temperature.ok_or(CliError::Missing {
                what: "temperature t",
            })?,
            components,
        })
    }

    pub fn parse_yaml(text: &str) -> CliResult<Self> {
        let raw: YamlInput = serde_yaml::from_str(text)?;
        let mut components = Vec::with_capacity(raw.components.len());
        for (key, value) in &raw.components {
            let name = key.as_str().ok_or_else(|| CliError::Parse {
                line: 0,
                what: format!("component name must be a string, got {key:?}"),
            })?;
            let percent = value.as_f64().ok_or_else(|| CliError::Parse {
                line: 0,
                what: format!("amount of '{name}' must be a number"),
            })?;
            components.push((name.parse::<Component>()?, percent));
        }
        Ok(Self {
            pressure_mpa: raw.pressure_mpa,
            temperature_c: raw.temperature_c,
            components,
        })
    }

    pub fn state(&self) -> CliResult<StatePoint> {
        Ok(StatePoint::from_mpa_celsius(
            self.pressure_mpa,
            self.temperature_c,
        )?)
    }

    /// Mole fractions from the percentages.
    pub fn composition(&self) -> CliResult<Composition> {
        if self.components.is_empty() {
            return Err(CliError::Missing { what: "components" });
        }
        let fractions = self
            .components
            .iter()
            .map(|&(c, percent)| (c, percent / 100.0))
            .collect();
        Ok(Composition::new(fractions)?)
    }

    /// Context against the standard database; applies the trace fold.
    pub fn context(&self) -> CliResult<MixtureContext<'static>> {
        Ok(MixtureContext::new(
            ComponentDatabase::standard(),
            self.composition()?,
            self.state()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_last_numeric_token() {
        assert_eq!(parse_number("96,5"), Some(96.5));
        assert_eq!(parse_number("%"), None);
        let input = GasInput::parse_lines("p 1\nt 0\nmethane 100 %\n").unwrap();
        assert_eq!(input.components, vec![(Component::Methane, 100.0)]);
    }

    #[test]
    fn later_values_override_earlier_ones() {
        let input = GasInput::parse_lines("p 1\np 2\nt 0\nCH4 100\n").unwrap();
        assert_eq!(input.pressure_mpa, 2.0);
    }
}
