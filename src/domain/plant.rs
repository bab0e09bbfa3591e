use serde::{Deserialize, Serialize};
use strum::Display;
use validator::{Validate, ValidationError};

/// Production technology of a plant. The wire names are the lowercase
/// strings used by the production-plan payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlantType {
    WindTurbine,
    GasFired,
    Turbojet,
    /// Catch-all for type strings this service does not dispatch.
    #[serde(other)]
    Unknown,
}

impl PlantType {
    /// Rank used by the shedding engine; lowest rank is shed first.
    pub fn merit_rank(self) -> u8 {
        match self {
            PlantType::WindTurbine => 1,
            PlantType::GasFired => 2,
            PlantType::Turbojet => 3,
            PlantType::Unknown => 4,
        }
    }
}

/// Immutable description of a single power plant as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = power_band_is_ordered))]
pub struct PlantSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlantType,
    /// Carried through the plan but not used by the dispatch arithmetic.
    pub efficiency: f64,
    #[validate(range(min = 0.0))]
    pub pmin: f64,
    #[validate(range(min = 0.0))]
    pub pmax: f64,
}

impl PlantSpec {
    /// Minimum output the repair engine must honor. Wind turbines are
    /// dispatched from the wind forecast and carry no enforced minimum.
    pub fn enforced_minimum(&self) -> Option<f64> {
        match self.kind {
            PlantType::WindTurbine => None,
            _ => Some(self.pmin),
        }
    }
}

fn power_band_is_ordered(plant: &PlantSpec) -> Result<(), ValidationError> {
    if plant.pmax < plant.pmin {
        return Err(ValidationError::new("pmax_below_pmin"));
    }
    Ok(())
}
