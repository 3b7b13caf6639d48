#![cfg(test)]

// Property tests for FrequencyTable kept inside the crate so they can use
// the test-only probe accessors.

use crate::config::TableConfig;
use crate::frequency_table::{FrequencyTable, Upsert};
use hashbrown::HashMap;
use proptest::prelude::*;
use std::collections::BTreeMap;

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Upsert(usize),
    CountOf(usize),
    CountOfFresh(String),
    Grow,
    Entries,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{1,6}", 1..=24).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            6 => idx.clone().prop_map(Op::Upsert),
            2 => idx.clone().prop_map(Op::CountOf),
            1 => "[A-Z]{1,4}".prop_map(Op::CountOfFresh),
            1 => Just(Op::Grow),
            1 => Just(Op::Entries),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn arb_config() -> impl Strategy<Value = TableConfig> {
    (
        1usize..=8,
        proptest::sample::select(vec![0.25, 0.5, 0.75, 1.0]),
        2usize..=3,
    )
        .prop_map(|(cap, lf, gf)| {
            TableConfig::with_capacity(cap)
                .with_load_factor(lf)
                .with_growth_factor(gf)
        })
}

fn snapshot(t: &FrequencyTable) -> BTreeMap<String, u64> {
    t.entries().map(|(k, c)| (k.to_string(), c)).collect()
}

// Property: state-machine equivalence against a hashbrown HashMap model.
// Invariants exercised across random operation sequences:
// - `upsert` reports Inserted iff the model lacked the key; counts match.
// - `live_count` equals the model's key count at every step.
// - `live / capacity <= load_factor` after every upsert.
// - Capacity only changes by whole growth-factor multiples.
// - Probes for present and absent keys examine at most `capacity` slots.
// - `entries` yields every model entry exactly once, with no duplicates.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(cfg in arb_config(), (pool, ops) in arb_scenario()) {
        let mut sut = FrequencyTable::with_config(cfg).unwrap();
        let mut model: HashMap<String, u64> = HashMap::new();

        for op in ops {
            let cap_before = sut.capacity();
            match op {
                Op::Upsert(i) => {
                    let k = &pool[i];
                    let expected = if model.contains_key(k) { Upsert::Incremented } else { Upsert::Inserted };
                    prop_assert_eq!(sut.upsert(k).unwrap(), expected);
                    *model.entry(k.clone()).or_insert(0) += 1;
                    prop_assert!(sut.load_factor() <= cfg.load_factor);
                    let mut c = cap_before;
                    while c < sut.capacity() { c *= cfg.growth_factor; }
                    prop_assert_eq!(c, sut.capacity());
                }
                Op::CountOf(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.count_of(k), model.get(k).copied());
                    prop_assert!(sut.probe_len(k) <= sut.capacity());
                }
                Op::CountOfFresh(k) => {
                    prop_assert_eq!(sut.count_of(&k), None);
                    prop_assert!(sut.probe_len(&k) <= sut.capacity());
                }
                // Bounded so repeated explicit growth stays cheap.
                Op::Grow if cap_before <= 4096 => {
                    let before = snapshot(&sut);
                    sut.grow().unwrap();
                    prop_assert_eq!(sut.capacity(), cap_before * cfg.growth_factor);
                    prop_assert_eq!(snapshot(&sut), before);
                }
                Op::Grow => {}
                Op::Entries => {
                    let n = sut.entries().count();
                    let seen = snapshot(&sut);
                    prop_assert_eq!(n, seen.len());
                    let expected: BTreeMap<String, u64> =
                        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(seen, expected);
                }
            }
            prop_assert_eq!(sut.live_count(), model.len());
            prop_assert_eq!(sut.entries().len(), model.len());
        }
    }
}

// Property: N distinct keys survive any number of growth events with their
// counts intact, and each key is found from its home slot.
proptest! {
    #[test]
    fn prop_no_lost_entries_across_growth(
        cap in 1usize..=16,
        keys in proptest::collection::btree_set("[a-z0-9]{1,10}", 1..200),
        repeats in 1u64..=3,
    ) {
        let mut t = FrequencyTable::create(cap).unwrap();
        for _ in 0..repeats {
            for k in &keys {
                t.upsert(k).unwrap();
                prop_assert!(t.load_factor() <= 0.75);
            }
        }
        prop_assert_eq!(t.live_count(), keys.len());
        let expected: BTreeMap<String, u64> = keys.iter().map(|k| (k.clone(), repeats)).collect();
        prop_assert_eq!(snapshot(&t), expected);
        for k in &keys {
            prop_assert!(t.slot_of(k).is_some());
        }
    }
}
