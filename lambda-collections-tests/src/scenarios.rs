use std::collections::{BTreeSet, VecDeque};
use std::error::Error as _;

use lambda_collections::{
    every, map, map_as, map_c, map_can, map_list, some, AnyContainer, BoundedDeque, Category,
    Error, Registry, Sequence, SortedSet,
};

use crate::test_run;

#[test]
fn increments_a_sequence() {
    test_run();
    let out = map([&vec![1, 2, 3, 4]], |[x]| x + 1).unwrap();
    assert_eq!(out, vec![2, 3, 4, 5]);
}

#[test]
fn sums_every_tail() {
    test_run();
    let list = vec![1, 2, 3, 4];
    let sums = map_list([&list], |[tail]| tail.iter().sum::<i32>()).unwrap();
    assert_eq!(sums, vec![10, 9, 7, 4]);
}

#[test]
fn finds_a_matching_pair() {
    test_run();
    let a = vec![1, 2, 3, 4, 5];
    let b = vec![5, 4, 3, 2, 1];
    assert!(some([&a, &b], |[x, y]| x == y).unwrap());
    assert!(!every([&a, &b], |[x, y]| x == y).unwrap());
    assert!(every([&a, &b], |[x, y]| x + y == 6).unwrap());
}

#[test]
fn sorted_set_output_is_ascending() {
    test_run();
    let input = vec![9, 2, 7, 2, 5];
    let squares: BTreeSet<i32> = map_as(SortedSet, [&input], |[x]| x * x).unwrap();
    assert_eq!(
        squares.into_iter().collect::<Vec<_>>(),
        vec![4, 25, 49, 81]
    );
}

#[test]
fn deque_input_gives_deque_output() {
    test_run();
    let deque: VecDeque<&str> = ["x", "yy", "zzz"].into_iter().collect();
    let lengths: VecDeque<usize> = map([&deque], |[s]| s.len()).unwrap();
    assert_eq!(lengths, [1, 2, 3]);
}

#[test]
fn flattens_nested_sequences() {
    test_run();
    let nested = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
    let flat = map_can(Sequence, [&nested], |[x]| x + 1).unwrap();
    assert_eq!(flat, vec![2, 3, 4, 5, 6, 7]);
}

#[test]
fn side_effects_run_in_order() {
    test_run();
    let a = vec!['a', 'b', 'c'];
    let b = vec!['1', '2'];
    let mut seen = Vec::new();
    map_c([&a, &b], |[c, n]| seen.push(format!("{c}{n}"))).unwrap();
    assert_eq!(seen, ["a1", "b2"]);
}

#[test]
fn unsupported_kind_is_reported_by_name() {
    test_run();
    let registry = Registry::<i32>::new();
    let err = registry.resolve("multimap").unwrap_err();
    assert!(matches!(&err, Error::UnsupportedContainerKind(name) if name == "multimap"));
    assert!(err.to_string().contains("multimap"));
}

#[test]
fn blank_kind_is_a_missing_argument() {
    test_run();
    let registry = Registry::<i32>::new();
    assert!(matches!(
        registry.resolve(""),
        Err(Error::MissingArgument("kind"))
    ));
    assert!(matches!(
        "".parse::<Category>(),
        Err(Error::MissingArgument("kind"))
    ));
}

#[test]
fn zero_inputs_are_rejected() {
    test_run();
    let none: [&Vec<i32>; 0] = [];
    assert!(matches!(map(none, |_| 0), Err(Error::EmptyInputSet)));
    assert!(matches!(some(none, |_| true), Err(Error::EmptyInputSet)));
    let no_lists: [&Vec<i32>; 0] = [];
    assert!(matches!(
        map_list(no_lists, |_| 0),
        Err(Error::EmptyInputSet)
    ));
}

#[test]
fn registry_kinds_drive_map_as() {
    test_run();
    let mut registry = Registry::<u32>::new();
    registry
        .register("pair-deque", || {
            BoundedDeque::with_capacity(2).map(AnyContainer::BlockingDeque)
        })
        .unwrap();

    let small = vec![7, 8];
    let out = map_as(registry.named("pair-deque"), [&small], |[x]| x * 2).unwrap();
    assert_eq!(out.category(), Category::BlockingDeque);
    assert_eq!(out.into_vec(), vec![14, 16]);

    let large = vec![1, 2, 3];
    let err = map_as(registry.named("pair-deque"), [&large], |[x]| *x).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { capacity: 2 }));

    let navigable = map_as(registry.named("navigable_set"), [&large], |[x]| 10 - x).unwrap();
    assert_eq!(navigable.category(), Category::NavigableSet);
    assert_eq!(navigable.into_vec(), vec![7, 8, 9]);
}

#[test]
fn failing_factory_keeps_its_cause() {
    test_run();
    let mut registry = Registry::<u32>::new();
    registry
        .register("empty-queue", || {
            BoundedDeque::with_capacity(0).map(AnyContainer::BlockingDeque)
        })
        .unwrap();

    let err = map_as(registry.named("empty-queue"), [&vec![1u32]], |[x]| *x).unwrap_err();
    match &err {
        Error::ContainerInstantiationFailed { kind, .. } => assert_eq!(kind, "empty-queue"),
        other => panic!("expected instantiation failure, got {other:?}"),
    }
    assert!(err.source().is_some());
}
