use axum::Json;
use serde::Serialize;
use validator::Validate;

use crate::{
    api::error::ApiError,
    dispatch::{self, AllocationRecord, Feasibility, TracingSink},
    domain::ProductionRequest,
};

/// Wire shape of one plant in the response: name and assigned power only.
#[derive(Debug, Serialize)]
pub struct PlantPower {
    pub name: String,
    pub p: f64,
}

/// Response for `POST /productionplan`, in dispatch order.
#[derive(Debug, Serialize)]
pub struct ProductionResponse {
    pub powerplants: Vec<PlantPower>,
}

impl From<Vec<AllocationRecord>> for ProductionResponse {
    fn from(plan: Vec<AllocationRecord>) -> Self {
        Self {
            powerplants: plan
                .into_iter()
                .map(|record| PlantPower {
                    name: record.name,
                    p: record.p,
                })
                .collect(),
        }
    }
}

/// POST /productionplan - compute a merit-order production plan
///
/// Infeasible requests still answer 200 with the best-effort plan; the
/// shortfall is only visible in the diagnostics.
pub async fn production_plan(
    Json(request): Json<ProductionRequest>,
) -> Result<Json<ProductionResponse>, ApiError> {
    request.validate()?;

    tracing::info!(
        load = request.load,
        plants = request.powerplants.len(),
        "computing production plan"
    );
    tracing::debug!(
        payload = %serde_json::to_string(&request).unwrap_or_default(),
        "request payload"
    );

    let mut sink = TracingSink;
    let outcome = dispatch::compute_plan(&request, &mut sink);

    match outcome.feasibility {
        Feasibility::Satisfied => {
            tracing::info!("production plan computed");
        }
        Feasibility::Shed { residual_excess } if residual_excess > 0.0 => {
            tracing::warn!(residual_excess, "request infeasible; returning best-effort plan");
        }
        Feasibility::Shed { .. } => {
            tracing::warn!("minimum-output repair failed; excess absorbed by shedding");
        }
    }

    Ok(Json(ProductionResponse::from(outcome.plan)))
}
