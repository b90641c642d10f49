//! Property-based tests for carry-over and stock reconciliation.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;

use super::*;
use crate::memory::MemoryStore;
use crate::period::Period;

/// Strategy for a single delta with a small unit count.
fn delta_strategy() -> impl Strategy<Value = StockDelta> {
    (prop_oneof![Just(MovementType::In), Just(MovementType::Out)], 1..10_000i32)
        .prop_map(|(movement_type, units)| StockDelta { movement_type, units })
}

/// Strategy for a movement draft dated somewhere in 2024.
fn draft_strategy() -> impl Strategy<Value = MovementDraft> {
    (
        prop_oneof![
            Just((MovementType::In, None)),
            Just((MovementType::Out, Some(OutSubtype::Venta))),
            Just((MovementType::Out, Some(OutSubtype::Regalia))),
        ],
        1..500i64,
        1..=12u32,
        1..=28u32,
    )
        .prop_map(|((movement_type, subtype), units, month, day)| MovementDraft {
            movement_type: Some(movement_type),
            subtype,
            units: Some(units),
            description: Some("lote".to_string()),
            invoice_number: None,
            date: NaiveDate::from_ymd_opt(2024, month, day),
        })
}

fn run<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Carry-over of a concatenation is the sum of the carry-overs.
    #[test]
    fn prop_carry_over_is_additive(
        before in prop::collection::vec(delta_strategy(), 0..40),
        after in prop::collection::vec(delta_strategy(), 0..40),
    ) {
        let joined: Vec<_> = before.iter().chain(after.iter()).copied().collect();
        prop_assert_eq!(carry_over(joined), carry_over(before) + carry_over(after));
    }

    /// Each month's closing stock is the next month's opening stock, and the
    /// opening stock of any month equals the signed sum of all earlier movements.
    #[test]
    fn prop_months_chain_and_reconcile(drafts in prop::collection::vec(draft_strategy(), 0..60)) {
        let store = Arc::new(MemoryStore::new());
        let inventory = InventoryService::new(Arc::clone(&store));

        run(async {
            for draft in drafts.clone() {
                inventory.record(draft).await.unwrap();
            }
        });

        let mut expected_opening = 0i64;
        for month in 1..=12u32 {
            let period = Period::new(month, 2024).unwrap();
            let (snapshot, summary) = run(inventory.summarize_period(&period)).unwrap();

            prop_assert_eq!(snapshot.initial_stock, expected_opening);
            prop_assert_eq!(
                summary.current_stock,
                summary.initial_stock + summary.total_in - summary.total_out
            );
            prop_assert_eq!(summary.total_out, summary.total_ventas + summary.total_regalias);
            prop_assert!(snapshot.movements.iter().all(|m| period.contains(m.date)));

            expected_opening = summary.current_stock;
        }

        let all: i64 = drafts
            .iter()
            .map(|d| {
                let units = d.units.unwrap_or_default();
                if d.movement_type == Some(MovementType::In) { units } else { -units }
            })
            .sum();
        prop_assert_eq!(expected_opening, all);
    }
}
