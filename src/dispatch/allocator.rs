use crate::domain::{PlantType, ProductionRequest};

use super::plan::{round1, AllocationRecord};
use super::trace::{DispatchEvent, DispatchSink};

/// Passes run in fixed technology priority, regardless of input order.
const DISPATCH_PASSES: [PlantType; 3] = [
    PlantType::WindTurbine,
    PlantType::GasFired,
    PlantType::Turbojet,
];

/// Assign power to every plant in merit order, consuming the requested load.
///
/// Wind turbines offer `pmax` scaled by the wind forecast; thermal plants
/// offer their full `pmax`. Each plant receives `min(candidate, remaining)`.
/// The stored value is rounded to one decimal while the load bookkeeping
/// subtracts the unrounded amount, so the remaining load never drifts.
/// Plants reached after the load is exhausted still emit a record with
/// `p = 0.0`; within a pass the caller's relative ordering is preserved.
pub fn dispatch(request: &ProductionRequest, sink: &mut dyn DispatchSink) -> Vec<AllocationRecord> {
    let mut load_remaining = request.load;
    let mut plan = Vec::with_capacity(request.powerplants.len());

    for pass in DISPATCH_PASSES {
        for plant in request.powerplants.iter().filter(|p| p.kind == pass) {
            let candidate = match plant.kind {
                PlantType::WindTurbine => plant.pmax * request.fuels.wind_percentage / 100.0,
                _ => plant.pmax,
            };
            let assigned = candidate.min(load_remaining);
            load_remaining -= assigned;

            sink.record(DispatchEvent::Assigned {
                name: plant.name.clone(),
                kind: plant.kind,
                p: round1(assigned),
                load_remaining,
            });

            plan.push(AllocationRecord {
                name: plant.name.clone(),
                kind: plant.kind,
                p: round1(assigned),
                pmin: plant.enforced_minimum(),
                pmax: plant.pmax,
            });
        }
    }

    plan
}
