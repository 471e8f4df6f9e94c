use crate::error::{InvalidInput, NeffResult};
use crate::measurements::MeasurementSet;
use serde::{Serialize, Serializer};
use strum_macros::Display;
use tracing::debug;

pub const IDEAL_MIN: f64 = 1.20;
pub const IDEAL_MAX: f64 = 1.22;

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Serialize)]
pub enum Band {
    Ideal,
    BelowIdeal,
    AboveIdeal,
}

impl Band {
    /// Closed at both ends of the ideal range. Anything not strictly below and
    /// not inside the range (NaN included) is reported above it.
    pub fn classify(coefficient: f64) -> Self {
        if (IDEAL_MIN..=IDEAL_MAX).contains(&coefficient) {
            Self::Ideal
        } else if coefficient < IDEAL_MIN {
            Self::BelowIdeal
        } else {
            Self::AboveIdeal
        }
    }

    pub fn message(&self, coefficient: f64) -> String {
        let heading = match self {
            Self::Ideal => "IDEAL RELATIONSHIP (1.20-1.22)".to_string(),
            Self::BelowIdeal => format!("BELOW IDEAL RANGE ({:.3} < 1.20)", coefficient),
            Self::AboveIdeal => format!("ABOVE IDEAL RANGE ({:.3} > 1.22)", coefficient),
        };

        let bullets: &[&str] = match self {
            Self::Ideal => &[
                "Predicts normal overbite of approximately 20%",
                "Balanced anterior tooth size relationship",
                "Minimal risk of bite depth issues",
            ],
            Self::BelowIdeal => &[
                "May result in excessive overbite",
                "Potential for deep bite development",
                "Possible anterior crowding",
                "Consider maxillary tooth size reduction or mandibular augmentation",
            ],
            Self::AboveIdeal => &[
                "May result in reduced overbite",
                "Potential for open bite tendencies",
                "Possible anterior spacing",
                "Consider mandibular tooth size reduction or maxillary augmentation",
            ],
        };

        let mut out = heading;
        for b in bullets {
            out.push_str("\n• ");
            out.push_str(b);
        }
        out
    }
}

/// JSON has no NaN or infinity, so those go out as `"NaN"`, `"inf"`, `"-inf"`.
fn finite_or_string<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientResult {
    #[serde(serialize_with = "finite_or_string")]
    pub coefficient: f64,
    #[serde(serialize_with = "finite_or_string")]
    pub maxillary_sum: f64,
    #[serde(serialize_with = "finite_or_string")]
    pub mandibular_sum: f64,
    pub band: Band,
    pub message: String,
}

impl CoefficientResult {
    /// The coefficient as shown in the result box.
    pub fn coefficient_line(&self) -> String {
        format!(
            "{:.3} (Ideal range: {:.2}-{:.2})",
            self.coefficient, IDEAL_MIN, IDEAL_MAX
        )
    }
}

/// Computes `(mand_incisor + mand_canine) / (max_incisor + max_canine)` and
/// classifies it.
pub fn evaluate(set: &MeasurementSet) -> NeffResult<CoefficientResult> {
    let maxillary_sum = set.maxillary_sum();
    let mandibular_sum = set.mandibular_sum();

    if maxillary_sum == 0.0 {
        return Err(InvalidInput::ZeroMaxillarySum.into());
    }

    let coefficient = mandibular_sum / maxillary_sum;
    let band = Band::classify(coefficient);

    debug!(
        "Coefficient {:.3} = {:.2} / {:.2} -> {}",
        coefficient, mandibular_sum, maxillary_sum, band
    );

    Ok(CoefficientResult {
        coefficient,
        maxillary_sum,
        mandibular_sum,
        band,
        message: band.message(coefficient),
    })
}
