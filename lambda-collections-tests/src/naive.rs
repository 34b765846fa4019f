//! Index-based reference versions of the combinators, used as oracles by the property tests
//! and as baselines by the benchmarks.
use proptest::prelude::*;

/// Apply `f` to each cross-section of `inputs`, up to the shortest
pub fn zip_with<T: Copy, R>(inputs: &[&[T]], mut f: impl FnMut(&[T]) -> R) -> Vec<R> {
    let len = inputs.iter().map(|l| l.len()).min().unwrap_or(0);
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let tuple: Vec<T> = inputs.iter().map(|l| l[i]).collect();
        out.push(f(&tuple));
    }
    out
}

/// Sum of every suffix: `[1, 2, 3]` gives `[6, 5, 3]`
pub fn suffix_sums(list: &[i64]) -> Vec<i64> {
    (0..list.len()).map(|i| list[i..].iter().sum()).collect()
}

/// Concatenate the inner lists, then apply `f`
pub fn flat_map(nested: &[Vec<i64>], f: impl Fn(i64) -> i64) -> Vec<i64> {
    let mut out = Vec::new();
    for inner in nested {
        for x in inner {
            out.push(f(*x));
        }
    }
    out
}

pub fn arb_list() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i32>().prop_map(i64::from), 0..64)
}

pub fn arb_nested() -> impl Strategy<Value = Vec<Vec<i64>>> {
    prop::collection::vec(prop::collection::vec(-1000i64..1000, 0..8), 0..8)
}

/// A non-empty list of strictly positive values paired with a position inside it
pub fn arb_positive_with_index() -> impl Strategy<Value = (Vec<i64>, usize)> {
    prop::collection::vec(1i64..100, 1..64)
        .prop_flat_map(|list| {
            let len = list.len();
            (Just(list), 0..len)
        })
}
