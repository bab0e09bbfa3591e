use serde::{Deserialize, Serialize};
use validator::Validate;

use super::plant::PlantSpec;

/// Fuel and wind conditions for one request. Prices are carried through but
/// the allocation arithmetic only reads the wind forecast.
///
/// The wire names are the parenthesised unit strings of the production-plan
/// payload; plain snake_case aliases are accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Fuels {
    #[serde(rename = "gas(euro/MWh)", alias = "gas_price")]
    pub gas_euro_per_mwh: f64,
    #[serde(rename = "kerosine(euro/MWh)", alias = "kerosine_price")]
    pub kerosine_euro_per_mwh: f64,
    #[serde(rename = "co2(euro/ton)", alias = "co2_price")]
    pub co2_euro_per_ton: f64,
    #[serde(rename = "wind(%)", alias = "wind_percentage")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub wind_percentage: f64,
}

/// Validated input to the plan computation: the target load, the fuel/wind
/// context and the plant list in caller order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductionRequest {
    #[validate(range(min = 0.0))]
    pub load: f64,
    #[validate(nested)]
    pub fuels: Fuels,
    #[validate(nested)]
    pub powerplants: Vec<PlantSpec>,
}
