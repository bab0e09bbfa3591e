use proptest::prelude::*;

use production_planner::dispatch::{self, Feasibility, MemorySink};
use production_planner::domain::{Fuels, PlantSpec, PlantType, ProductionRequest};

fn fuels(wind_percentage: f64) -> Fuels {
    Fuels {
        gas_euro_per_mwh: 13.4,
        kerosine_euro_per_mwh: 50.8,
        co2_euro_per_ton: 20.0,
        wind_percentage,
    }
}

/// Integer capacities, wind in steps of 10% and a one-decimal load keep all
/// dispatch arithmetic exact in one decimal place, so the properties below
/// are not blurred by rounding.
fn arb_plants() -> impl Strategy<Value = Vec<PlantSpec>> {
    prop::collection::vec(
        (
            prop_oneof![
                Just(PlantType::WindTurbine),
                Just(PlantType::GasFired),
                Just(PlantType::Turbojet),
            ],
            10u32..500u32,
            0u32..=100u32,
        ),
        1..8,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (kind, pmax, pmin_fraction))| {
                let pmax = f64::from(pmax);
                let pmin = match kind {
                    PlantType::WindTurbine => 0.0,
                    _ => (pmax * f64::from(pmin_fraction) / 100.0).floor(),
                };
                PlantSpec {
                    name: format!("plant-{i}"),
                    kind,
                    efficiency: 0.5,
                    pmin,
                    pmax,
                }
            })
            .collect()
    })
}

fn arb_wind() -> impl Strategy<Value = f64> {
    (0u32..=10u32).prop_map(|step| f64::from(step) * 10.0)
}

fn available_capacity(plants: &[PlantSpec], wind_percentage: f64) -> f64 {
    plants
        .iter()
        .map(|p| match p.kind {
            PlantType::WindTurbine => p.pmax * wind_percentage / 100.0,
            _ => p.pmax,
        })
        .sum()
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

proptest! {
    #[test]
    fn plan_respects_bounds_and_rounding(
        plants in arb_plants(),
        wind in arb_wind(),
        load_fraction in 0u32..=100u32,
    ) {
        let capacity = available_capacity(&plants, wind);
        let load = one_decimal(capacity * f64::from(load_fraction) / 100.0);
        let request = ProductionRequest {
            load,
            fuels: fuels(wind),
            powerplants: plants,
        };

        let outcome = dispatch::compute_plan(&request, &mut MemorySink::default());

        for record in &outcome.plan {
            // Power stays inside the physical band ...
            prop_assert!(record.p >= 0.0);
            prop_assert!(record.p <= record.pmax + 1e-9);
            // ... and is always reported with a single decimal.
            prop_assert!((record.p * 10.0 - (record.p * 10.0).round()).abs() < 1e-6);
        }
    }

    #[test]
    fn output_is_grouped_by_technology(
        plants in arb_plants(),
        wind in arb_wind(),
        load_fraction in 0u32..=100u32,
    ) {
        let capacity = available_capacity(&plants, wind);
        let load = one_decimal(capacity * f64::from(load_fraction) / 100.0);
        let request = ProductionRequest {
            load,
            fuels: fuels(wind),
            powerplants: plants,
        };

        let outcome = dispatch::compute_plan(&request, &mut MemorySink::default());

        let ranks: Vec<u8> = outcome.plan.iter().map(|r| r.kind.merit_rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ranks, sorted);
    }

    #[test]
    fn satisfied_plans_conserve_load_and_minimums(
        plants in arb_plants(),
        wind in arb_wind(),
        load_fraction in 0u32..=100u32,
    ) {
        let capacity = available_capacity(&plants, wind);
        let load = one_decimal(capacity * f64::from(load_fraction) / 100.0);
        let request = ProductionRequest {
            load,
            fuels: fuels(wind),
            powerplants: plants,
        };

        let outcome = dispatch::compute_plan(&request, &mut MemorySink::default());

        if outcome.feasibility == Feasibility::Satisfied {
            let total: f64 = outcome.plan.iter().map(|r| r.p).sum();
            prop_assert!((total - load).abs() < 0.05);

            for record in &outcome.plan {
                if let Some(pmin) = record.pmin {
                    prop_assert!(record.p == 0.0 || record.p >= pmin - 1e-9);
                }
            }
        }
    }

    #[test]
    fn shedding_only_ever_zeroes_plants(
        plants in arb_plants(),
        wind in arb_wind(),
        load_fraction in 0u32..=100u32,
    ) {
        let capacity = available_capacity(&plants, wind);
        let load = one_decimal(capacity * f64::from(load_fraction) / 100.0);
        let request = ProductionRequest {
            load,
            fuels: fuels(wind),
            powerplants: plants,
        };

        let mut sink = MemorySink::default();
        let outcome = dispatch::compute_plan(&request, &mut sink);

        if let Feasibility::Shed { residual_excess } = outcome.feasibility {
            prop_assert!(residual_excess >= 0.0);
            // All-or-nothing: every shed plant went straight to zero.
            for event in &sink.events {
                if let dispatch::DispatchEvent::PlantShed { name, .. } = event {
                    let record = outcome.plan.iter().find(|r| &r.name == name).unwrap();
                    prop_assert_eq!(record.p, 0.0);
                }
            }
        }
    }
}
