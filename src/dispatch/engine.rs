use crate::domain::ProductionRequest;

use super::allocator;
use super::plan::AllocationRecord;
use super::repair;
use super::shedding;
use super::trace::DispatchSink;

/// How the pipeline left the plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feasibility {
    /// Every producing plant sits inside its band; no shedding was needed.
    Satisfied,
    /// Minimum-output repair failed and plants were shed. A zero residual
    /// means the excess was fully absorbed; a positive residual means the
    /// request could not be satisfied even with everything possible shed.
    Shed { residual_excess: f64 },
}

/// Result of a plan computation: the plan plus a feasibility marker.
///
/// The plan is always present. Infeasibility is a data condition surfaced
/// through `feasibility` and the diagnostic sink, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub plan: Vec<AllocationRecord>,
    pub feasibility: Feasibility,
}

impl PlanOutcome {
    pub fn is_infeasible(&self) -> bool {
        matches!(self.feasibility, Feasibility::Shed { .. })
    }
}

/// Compute a merit-order production plan for a validated request.
///
/// Stages run strictly forward: type-ordered dispatch, minimum-output
/// repair, and, only when repair reports failure, excess shedding.
pub fn compute_plan(request: &ProductionRequest, sink: &mut dyn DispatchSink) -> PlanOutcome {
    let mut plan = allocator::dispatch(request, sink);

    let feasibility = match repair::enforce_minimums(&mut plan, sink) {
        Ok(()) => Feasibility::Satisfied,
        Err(failure) => {
            let residual_excess = shedding::shed_excess(&mut plan, failure.excess(), sink);
            Feasibility::Shed { residual_excess }
        }
    };

    PlanOutcome { plan, feasibility }
}
