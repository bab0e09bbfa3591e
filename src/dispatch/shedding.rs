use std::cmp::Ordering;

use itertools::Itertools;

use super::plan::AllocationRecord;
use super::trace::{DispatchEvent, DispatchSink};

/// Deactivate plants one at a time until the excess is absorbed.
///
/// Candidates are ordered by technology rank, then capacity, so the least
/// efficient and smallest units drop out first; ties keep dispatch order.
/// Shedding is all-or-nothing per plant. Returns the excess still standing
/// after every producing plant has been switched off (0.0 when fully
/// absorbed).
pub fn shed_excess(
    plan: &mut [AllocationRecord],
    excess: f64,
    sink: &mut dyn DispatchSink,
) -> f64 {
    let order: Vec<usize> = (0..plan.len())
        .sorted_by(|&a, &b| shed_priority(&plan[a], &plan[b]))
        .collect();

    let mut remaining = excess;
    for idx in order {
        let record = &mut plan[idx];
        if record.p <= 0.0 {
            continue;
        }

        sink.record(DispatchEvent::PlantShed {
            name: record.name.clone(),
            p: record.p,
        });
        remaining -= record.p;
        record.p = 0.0;

        if remaining <= 0.0 {
            return 0.0;
        }
    }

    sink.record(DispatchEvent::ExcessUnresolved { excess: remaining });
    remaining
}

fn shed_priority(a: &AllocationRecord, b: &AllocationRecord) -> Ordering {
    a.kind
        .merit_rank()
        .cmp(&b.kind.merit_rank())
        .then(a.pmax.partial_cmp(&b.pmax).unwrap_or(Ordering::Equal))
}
