use crate::error::NeffResult;
use crate::measurements::MeasurementSet;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Widths in mm. Defaults are the population ideals.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeasurementArgs {
    /// Maxillary central incisors (11, 21)
    #[arg(long, default_value_t = 8.5, allow_hyphen_values = true)]
    pub max_incisor: f64,
    /// Maxillary canines (13, 23)
    #[arg(long, default_value_t = 7.6, allow_hyphen_values = true)]
    pub max_canine: f64,
    /// Mandibular central incisors (31, 41)
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    pub mand_incisor: f64,
    /// Mandibular canines (33, 43)
    #[arg(long, default_value_t = 6.5, allow_hyphen_values = true)]
    pub mand_canine: f64,
}

impl Default for MeasurementArgs {
    fn default() -> Self {
        MeasurementSet::default().into()
    }
}

impl From<MeasurementSet> for MeasurementArgs {
    fn from(set: MeasurementSet) -> Self {
        Self {
            max_incisor: set.max_incisor,
            max_canine: set.max_canine,
            mand_incisor: set.mand_incisor,
            mand_canine: set.mand_canine,
        }
    }
}

impl From<MeasurementArgs> for MeasurementSet {
    fn from(args: MeasurementArgs) -> Self {
        MeasurementSet::new(
            args.max_incisor,
            args.max_canine,
            args.mand_incisor,
            args.mand_canine,
        )
    }
}

impl MeasurementArgs {
    /// Reads a JSON object keyed by field name. Missing keys keep their ideal value.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NeffResult<Self> {
        let path = path.as_ref();
        info!("Loading measurements from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over only the flags the user actually typed.
    pub fn merge_from_cli(&mut self, cli_args: &MeasurementArgs, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_args.$field;
                }
            };
        }

        update_if_present!(max_incisor, "max_incisor");
        update_if_present!(max_canine, "max_canine");
        update_if_present!(mand_incisor, "mand_incisor");
        update_if_present!(mand_canine, "mand_canine");
    }
}
