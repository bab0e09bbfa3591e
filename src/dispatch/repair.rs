use thiserror::Error;

use super::plan::{round1, AllocationRecord};
use super::trace::{DispatchEvent, DispatchSink};

/// Why the repair pass gave up on the plan.
///
/// Both causes hand the same numeric signal to the shedding engine, but the
/// deficit and the overage stay apart in diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepairFailure {
    #[error("cannot raise {name} to its minimum; {deficit:.1} MW uncovered")]
    UnmetMinimum { name: String, deficit: f64 },
    #[error("{name} exceeds its maximum by {overage:.1} MW")]
    OverCapacity { name: String, overage: f64 },
}

impl RepairFailure {
    /// Surplus the shedding engine must remove from the plan.
    pub fn excess(&self) -> f64 {
        match self {
            RepairFailure::UnmetMinimum { deficit, .. } => *deficit,
            RepairFailure::OverCapacity { overage, .. } => *overage,
        }
    }
}

/// Raise every producing plant to its enforced minimum by stealing capacity
/// from earlier-dispatched plants.
///
/// The scan runs in dispatch order and aborts on the first plant whose
/// deficit cannot be covered. A completed scan is followed by a bounds
/// check reporting any plant above its maximum.
pub fn enforce_minimums(
    plan: &mut [AllocationRecord],
    sink: &mut dyn DispatchSink,
) -> Result<(), RepairFailure> {
    for i in 0..plan.len() {
        let Some(floor) = plan[i].pmin else { continue };
        if plan[i].p <= 0.0 || plan[i].p >= floor {
            continue;
        }

        let deficit = floor - plan[i].p;
        sink.record(DispatchEvent::DeficitDetected {
            name: plan[i].name.clone(),
            deficit,
        });

        match cover_deficit(plan, i, deficit, sink) {
            Ok(()) => {
                plan[i].p = floor;
                sink.record(DispatchEvent::MinimumRestored {
                    name: plan[i].name.clone(),
                    p: floor,
                });
            }
            Err(uncovered) => {
                sink.record(DispatchEvent::RepairExhausted { deficit: uncovered });
                return Err(RepairFailure::UnmetMinimum {
                    name: plan[i].name.clone(),
                    deficit: uncovered,
                });
            }
        }
    }

    for record in plan.iter() {
        if record.p > record.pmax {
            let overage = record.p - record.pmax;
            sink.record(DispatchEvent::OverCapacity {
                name: record.name.clone(),
                overage,
            });
            return Err(RepairFailure::OverCapacity {
                name: record.name.clone(),
                overage,
            });
        }
    }

    Ok(())
}

/// Walk donors backwards from the plant at `below`, taking capacity until
/// the deficit is covered. Donors are never driven under their own minimum;
/// plants without an enforced minimum and plants already off contribute
/// nothing. Returns the uncovered deficit when the walk runs off the front
/// of the plan.
fn cover_deficit(
    plan: &mut [AllocationRecord],
    below: usize,
    deficit: f64,
    sink: &mut dyn DispatchSink,
) -> Result<(), f64> {
    let mut outstanding = deficit;

    for j in (0..below).rev() {
        let donor = &mut plan[j];
        let Some(floor) = donor.pmin else { continue };
        if donor.p == 0.0 {
            continue;
        }

        let available = donor.p - floor;
        if available >= outstanding {
            donor.p = round1(donor.p - outstanding);
            sink.record(DispatchEvent::DonorReduced {
                name: donor.name.clone(),
                p: donor.p,
            });
            return Ok(());
        }

        donor.p = floor;
        outstanding -= available;
        sink.record(DispatchEvent::DonorReduced {
            name: donor.name.clone(),
            p: donor.p,
        });
    }

    Err(outstanding)
}
