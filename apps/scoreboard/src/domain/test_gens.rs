// Proptest generators for round inputs.
// Values come back in seat order as (call, made) pairs.

use proptest::prelude::*;

use crate::domain::rules::TableSize;

pub fn table() -> impl Strategy<Value = TableSize> {
    prop_oneof![Just(TableSize::Three), Just(TableSize::Four)]
}

/// Split `total` into `parts` non-negative counts.
pub fn partition(total: u32, parts: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..=total, parts.saturating_sub(1)).prop_map(move |mut cuts| {
        cuts.sort_unstable();
        let mut out = Vec::with_capacity(parts);
        let mut prev = 0;
        for cut in cuts {
            out.push(cut - prev);
            prev = cut;
        }
        out.push(total - prev);
        out
    })
}

/// Split a total drawn from `totals` into `parts` counts.
fn partition_of(
    totals: impl Strategy<Value = u32>,
    parts: usize,
) -> impl Strategy<Value = Vec<u32>> {
    totals.prop_flat_map(move |total| partition(total, parts))
}

fn zip(calls: Vec<u32>, made: Vec<u32>) -> Vec<(u32, u32)> {
    calls.into_iter().zip(made).collect()
}

/// Rounds satisfying both aggregate constraints.
pub fn valid_round(table: TableSize) -> impl Strategy<Value = Vec<(u32, u32)>> {
    let n = table.player_count();
    let min = table.min_total_call();
    (
        partition_of(min..=min + 12, n),
        partition(table.tricks_per_round(), n),
    )
        .prop_map(|(calls, made)| zip(calls, made))
}

/// Rounds whose calls fall short of the minimum; made totals are fine.
pub fn short_call_round(table: TableSize) -> impl Strategy<Value = Vec<(u32, u32)>> {
    let n = table.player_count();
    (
        partition_of(0..table.min_total_call(), n),
        partition(table.tricks_per_round(), n),
    )
        .prop_map(|(calls, made)| zip(calls, made))
}

/// Rounds with acceptable calls but a made total that does not reconcile.
pub fn mismatched_made_round(table: TableSize) -> impl Strategy<Value = Vec<(u32, u32)>> {
    let n = table.player_count();
    let min = table.min_total_call();
    let target = table.tricks_per_round();
    let wrong_total = prop_oneof![0..target, (target + 1)..=(target + 10)];
    (partition_of(min..=min + 12, n), partition_of(wrong_total, n))
        .prop_map(|(calls, made)| zip(calls, made))
}
