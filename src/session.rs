use crate::error::{NeffError, NeffResult};
use crate::evaluator::{evaluate, CoefficientResult};
use crate::measurements::{parse_width, MeasurementField, MeasurementSet};
use std::str::FromStr;
use tracing::{debug, info};

/// The calculator form: the measurements being edited plus whatever result
/// is currently on display.
#[derive(Debug, Clone, Default)]
pub struct Session {
    measurements: MeasurementSet,
    display: Option<CoefficientResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_measurements(measurements: MeasurementSet) -> Self {
        Self {
            measurements,
            display: None,
        }
    }

    pub fn measurements(&self) -> &MeasurementSet {
        &self.measurements
    }

    pub fn display(&self) -> Option<&CoefficientResult> {
        self.display.as_ref()
    }

    /// Parses and stores one field. A parse failure leaves the form as it was.
    pub fn set_field(&mut self, field: MeasurementField, text: &str) -> NeffResult<f64> {
        let value = parse_width(field, text)?;
        debug!("{} <- {}", field, value);
        self.measurements.set(field, value);
        Ok(value)
    }

    /// Evaluates the current measurements. On failure the previous result
    /// stays on display.
    pub fn calculate(&mut self) -> NeffResult<&CoefficientResult> {
        let result = evaluate(&self.measurements)?;
        info!("Calculated coefficient {:.3} ({})", result.coefficient, result.band);
        Ok(&*self.display.insert(result))
    }

    pub fn reset(&mut self) {
        self.measurements = MeasurementSet::default();
        self.display = None;
        debug!("Form reset to ideal values");
    }
}

/// A single line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    Show,
    Set(MeasurementField, String),
    Calculate,
    Reset,
    Info,
    Help,
    Quit,
}

impl FromStr for FormCommand {
    type Err = NeffError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or("").to_lowercase();

        let cmd = match verb.as_str() {
            "" | "show" => Self::Show,
            "calc" | "calculate" => Self::Calculate,
            "reset" => Self::Reset,
            "info" => Self::Info,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            "set" => {
                let name = parts
                    .next()
                    .ok_or_else(|| NeffError::Command("usage: set <field> <value>".into()))?;
                let field = MeasurementField::from_str(name)
                    .map_err(|_| NeffError::Command(format!("unknown field '{}'", name)))?;
                let value = parts.collect::<Vec<_>>().join(" ");
                if value.is_empty() {
                    return Err(NeffError::Command("usage: set <field> <value>".into()));
                }
                Self::Set(field, value)
            }
            other => return Err(NeffError::Command(format!("unknown command '{}'", other))),
        };
        Ok(cmd)
    }
}
