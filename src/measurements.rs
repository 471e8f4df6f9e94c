use crate::error::{InvalidInput, NeffResult};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum Arch {
    Maxillary,
    Mandibular,
}

/// One of the four summed mesiodistal widths entered by the clinician.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum MeasurementField {
    #[strum(to_string = "max-incisor", serialize = "max_incisor")]
    MaxIncisor,
    #[strum(to_string = "max-canine", serialize = "max_canine")]
    MaxCanine,
    #[strum(to_string = "mand-incisor", serialize = "mand_incisor")]
    MandIncisor,
    #[strum(to_string = "mand-canine", serialize = "mand_canine")]
    MandCanine,
}

impl MeasurementField {
    pub fn arch(&self) -> Arch {
        match self {
            Self::MaxIncisor | Self::MaxCanine => Arch::Maxillary,
            Self::MandIncisor | Self::MandCanine => Arch::Mandibular,
        }
    }

    /// FDI numbers of the left/right pair summed into this field.
    pub fn teeth(&self) -> (u8, u8) {
        match self {
            Self::MaxIncisor => (11, 21),
            Self::MaxCanine => (13, 23),
            Self::MandIncisor => (31, 41),
            Self::MandCanine => (33, 43),
        }
    }

    pub fn label(&self) -> String {
        let (a, b) = self.teeth();
        let kind = match self {
            Self::MaxIncisor | Self::MandIncisor => "Incisor",
            Self::MaxCanine | Self::MandCanine => "Canine",
        };
        format!("{} Width ({}, {})", kind, a, b)
    }

    /// Population ideal in mm.
    pub fn ideal(&self) -> f64 {
        match self {
            Self::MaxIncisor => 8.5,
            Self::MaxCanine => 7.6,
            Self::MandIncisor => 5.0,
            Self::MandCanine => 6.5,
        }
    }

    pub fn reference_range(&self) -> RangeInclusive<f64> {
        match self {
            Self::MaxIncisor => 7.5..=9.5,
            Self::MaxCanine => 7.0..=8.2,
            Self::MandIncisor => 4.5..=5.5,
            Self::MandCanine => 6.0..=7.0,
        }
    }
}

/// Widths in millimetres, each the sum of the left and right tooth.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MeasurementSet {
    pub max_incisor: f64,
    pub max_canine: f64,
    pub mand_incisor: f64,
    pub mand_canine: f64,
}

impl Default for MeasurementSet {
    fn default() -> Self {
        Self {
            max_incisor: MeasurementField::MaxIncisor.ideal(),
            max_canine: MeasurementField::MaxCanine.ideal(),
            mand_incisor: MeasurementField::MandIncisor.ideal(),
            mand_canine: MeasurementField::MandCanine.ideal(),
        }
    }
}

impl MeasurementSet {
    pub fn new(max_incisor: f64, max_canine: f64, mand_incisor: f64, mand_canine: f64) -> Self {
        Self {
            max_incisor,
            max_canine,
            mand_incisor,
            mand_canine,
        }
    }

    pub fn get(&self, field: MeasurementField) -> f64 {
        match field {
            MeasurementField::MaxIncisor => self.max_incisor,
            MeasurementField::MaxCanine => self.max_canine,
            MeasurementField::MandIncisor => self.mand_incisor,
            MeasurementField::MandCanine => self.mand_canine,
        }
    }

    pub fn set(&mut self, field: MeasurementField, value: f64) {
        match field {
            MeasurementField::MaxIncisor => self.max_incisor = value,
            MeasurementField::MaxCanine => self.max_canine = value,
            MeasurementField::MandIncisor => self.mand_incisor = value,
            MeasurementField::MandCanine => self.mand_canine = value,
        }
    }

    #[inline(always)]
    pub fn maxillary_sum(&self) -> f64 {
        self.max_incisor + self.max_canine
    }

    #[inline(always)]
    pub fn mandibular_sum(&self) -> f64 {
        self.mand_incisor + self.mand_canine
    }

    /// Fields whose value falls outside the documented population range.
    /// Informational only; the evaluator accepts any value.
    pub fn out_of_range(&self) -> Vec<MeasurementField> {
        MeasurementField::iter()
            .filter(|f| !f.reference_range().contains(&self.get(*f)))
            .collect()
    }
}

/// Parses a user-typed width. Surrounding whitespace is ignored.
pub fn parse_width(field: MeasurementField, text: &str) -> NeffResult<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        InvalidInput::NonNumeric {
            field: field.label(),
            value: text.to_string(),
        }
        .into()
    })
}
