use crate::domain::PlantType;

/// One diagnostic step taken while a plan was being computed.
///
/// Adjustments are expected behavior, not errors. They are reported to the
/// caller-supplied sink so the transport can log them and tests can assert
/// on the adjustment trail.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    /// The dispatcher assigned `p` MW to a plant, leaving `load_remaining`.
    Assigned {
        name: String,
        kind: PlantType,
        p: f64,
        load_remaining: f64,
    },
    /// A producing plant sits `deficit` MW below its enforced minimum.
    DeficitDetected { name: String, deficit: f64 },
    /// An earlier plant gave up capacity; its output is now `p` MW.
    DonorReduced { name: String, p: f64 },
    /// The deficient plant was raised to its minimum.
    MinimumRestored { name: String, p: f64 },
    /// No earlier plant could cover the remaining `deficit` MW.
    RepairExhausted { deficit: f64 },
    /// A plant ended up `overage` MW above its maximum.
    OverCapacity { name: String, overage: f64 },
    /// The shedding pass switched a plant off; it was producing `p` MW.
    PlantShed { name: String, p: f64 },
    /// Shedding ran out of producing plants with `excess` MW left over.
    ExcessUnresolved { excess: f64 },
}

/// Injected diagnostic capability. The pipeline reports every adjustment
/// here instead of talking to a process-wide logger directly, so tests can
/// capture or suppress diagnostics deterministically.
pub trait DispatchSink {
    fn record(&mut self, event: DispatchEvent);
}

/// Production sink: forwards every event to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DispatchSink for TracingSink {
    fn record(&mut self, event: DispatchEvent) {
        match event {
            DispatchEvent::Assigned {
                name,
                kind,
                p,
                load_remaining,
            } => {
                tracing::info!(%name, kind = %kind, p, load_remaining, "assigned power");
            }
            DispatchEvent::DeficitDetected { name, deficit } => {
                tracing::info!(%name, deficit, "plant below its minimum, repairing");
            }
            DispatchEvent::DonorReduced { name, p } => {
                tracing::info!(%name, p, "reduced earlier plant to free capacity");
            }
            DispatchEvent::MinimumRestored { name, p } => {
                tracing::info!(%name, p, "raised plant to its minimum");
            }
            DispatchEvent::RepairExhausted { deficit } => {
                tracing::warn!(deficit, "no remaining capacity to cover minimum");
            }
            DispatchEvent::OverCapacity { name, overage } => {
                tracing::error!(%name, overage, "plant exceeds its maximum");
            }
            DispatchEvent::PlantShed { name, p } => {
                tracing::info!(%name, p, "deactivated plant to absorb excess");
            }
            DispatchEvent::ExcessUnresolved { excess } => {
                tracing::warn!(excess, "excess could not be fully absorbed");
            }
        }
    }
}

/// Test sink: buffers events so assertions can inspect the trail.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<DispatchEvent>,
}

impl DispatchSink for MemorySink {
    fn record(&mut self, event: DispatchEvent) {
        self.events.push(event);
    }
}
