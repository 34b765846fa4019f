use std::cell::Cell;
use std::collections::BTreeSet;

use lambda_collections::{every, map, map_as, map_c, map_can, map_list, some, Sequence, SortedSet};
use proptest::prelude::*;

use crate::naive::{arb_list, arb_nested, arb_positive_with_index, flat_map, suffix_sums, zip_with};
use crate::test_run;

proptest! {
    #[test]
    fn map_is_pointwise_and_ordered(list in arb_list()) {
        test_run();
        let mapped = map([&list], |[x]| x + 1).unwrap();

        prop_assert_eq!(mapped.len(), list.len());
        prop_assert_eq!(mapped, zip_with(&[&list[..]], |t| t[0] + 1));
    }

    #[test]
    fn map_stops_at_the_shortest_input(a in arb_list(), b in arb_list(), c in arb_list()) {
        let mapped = map([&a, &b, &c], |[x, y, z]| x - y + z).unwrap();

        prop_assert_eq!(mapped.len(), a.len().min(b.len()).min(c.len()));
        prop_assert_eq!(mapped, zip_with(&[&a[..], &b[..], &c[..]], |t| t[0] - t[1] + t[2]));
    }

    #[test]
    fn map_c_visits_every_element_without_touching_the_input(list in arb_list()) {
        let before = list.clone();
        let mut copy = Vec::new();

        map_c([&list], |[x]| copy.push(*x)).unwrap();

        prop_assert_eq!(&copy, &list);
        prop_assert_eq!(list, before);
    }

    #[test]
    fn map_list_sees_every_suffix(list in arb_list()) {
        let tails = map_list([&list], |[tail]| tail.to_vec()).unwrap();

        prop_assert_eq!(tails.len(), list.len());
        for (i, tail) in tails.iter().enumerate() {
            prop_assert_eq!(&tail[..], &list[i..]);
        }
    }

    #[test]
    fn map_list_sums_match_suffix_sums(list in arb_list()) {
        let sums = map_list([&list], |[tail]| tail.iter().sum::<i64>()).unwrap();
        prop_assert_eq!(sums, suffix_sums(&list));
    }

    #[test]
    fn map_list_over_two_lists_ends_with_the_shorter(a in arb_list(), b in arb_list()) {
        let lens = map_list([&a, &b], |[x, y]| (x.len(), y.len())).unwrap();

        prop_assert_eq!(lens.len(), a.len().min(b.len()));
        for (i, (x, y)) in lens.into_iter().enumerate() {
            prop_assert_eq!(x, a.len() - i);
            prop_assert_eq!(y, b.len() - i);
        }
    }

    #[test]
    fn map_can_flattens_in_outer_then_inner_order(nested in arb_nested()) {
        let flat = map_can(Sequence, [&nested], |[x]| x * 3).unwrap();

        prop_assert_eq!(flat.len(), nested.iter().map(Vec::len).sum::<usize>());
        prop_assert_eq!(flat, flat_map(&nested, |x| x * 3));
    }

    #[test]
    fn sorted_set_output_is_ascending_and_deduplicated(list in arb_list()) {
        let sorted = map_as(SortedSet, [&list], |[x]| *x).unwrap();
        let expected: BTreeSet<i64> = list.iter().copied().collect();

        prop_assert_eq!(sorted.iter().copied().collect::<Vec<_>>(), expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn some_stops_at_the_first_satisfying_tuple((mut list, p) in arb_positive_with_index()) {
        list[p] = 0;
        let calls = Cell::new(0);

        let found = some([&list], |[x]| {
            calls.set(calls.get() + 1);
            *x == 0
        })
        .unwrap();

        prop_assert!(found);
        prop_assert_eq!(calls.get(), p + 1);
    }

    #[test]
    fn every_stops_at_the_first_unsatisfied_tuple((mut list, p) in arb_positive_with_index()) {
        list[p] = 0;
        let calls = Cell::new(0);

        let all = every([&list], |[x]| {
            calls.set(calls.get() + 1);
            (*x != 0).then_some(*x)
        })
        .unwrap();

        prop_assert!(!all);
        prop_assert_eq!(calls.get(), p + 1);
    }

    #[test]
    fn quantifiers_agree_with_iterator_adapters(a in arb_list(), b in arb_list()) {
        let pairs: Vec<(i64, i64)> = a.iter().copied().zip(b.iter().copied()).collect();

        prop_assert_eq!(
            some([&a, &b], |[x, y]| x > y).unwrap(),
            pairs.iter().any(|(x, y)| x > y)
        );
        prop_assert_eq!(
            every([&a, &b], |[x, y]| x >= y).unwrap(),
            pairs.iter().all(|(x, y)| x >= y)
        );
    }
}
