#![allow(dead_code)]

use numanal_core::{Program, Timing};
use numanal_storage::{StorageError, TimingStore};

pub fn l2norm() -> Program {
    Program::new("l2norm", "L2 vector norm", "l2vecnorm")
}

pub fn add_then_list<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    assert!(store.list_programs().unwrap().is_empty());

    store.add_program(&l2norm()).unwrap();
    let programs = store.list_programs().unwrap();
    assert_eq!(programs, vec![l2norm()]);
}

pub fn duplicate_add_is_rejected<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    store.add_program(&l2norm()).unwrap();

    let other = Program::new("l2norm", "something else", "other");
    let err = store.add_program(&other).unwrap_err();
    assert!(matches!(err, StorageError::DuplicateKey { ref name } if name == "l2norm"));

    // Store unchanged.
    assert_eq!(store.list_programs().unwrap(), vec![l2norm()]);
}

pub fn delete_program_cascades<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    store.add_program(&l2norm()).unwrap();
    store
        .add_program(&Program::new("sort", "merge sort", "msort"))
        .unwrap();
    for size in [1000, 2000, 3000, 4000] {
        store.add_timing("l2norm", Timing::new(size, 0.01)).unwrap();
    }
    store.add_timing("sort", Timing::new(10, 0.5)).unwrap();

    store.delete_program("l2norm").unwrap();

    assert!(store.list_timings("l2norm").unwrap().is_empty());
    let names: Vec<String> = store
        .list_programs()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["sort"]);
    // Other programs are untouched.
    assert_eq!(store.list_timings("sort").unwrap(), vec![Timing::new(10, 0.5)]);
}

pub fn delete_missing_program_is_noop<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    store.add_program(&l2norm()).unwrap();
    store.delete_program("ghost").unwrap();
    assert_eq!(store.list_programs().unwrap().len(), 1);
}

pub fn delete_timings_keeps_program<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    store.add_program(&l2norm()).unwrap();
    store.add_timing("l2norm", Timing::new(1000, 0.001)).unwrap();
    store.add_timing("l2norm", Timing::new(5000, 0.006)).unwrap();

    assert_eq!(store.delete_timings("l2norm").unwrap(), 2);
    assert!(store.list_timings("l2norm").unwrap().is_empty());
    assert_eq!(store.list_programs().unwrap(), vec![l2norm()]);

    // Nothing left to delete.
    assert_eq!(store.delete_timings("l2norm").unwrap(), 0);
    assert_eq!(store.delete_timings("ghost").unwrap(), 0);
}

pub fn timings_sorted_by_size<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    store.add_program(&l2norm()).unwrap();
    for (size, time) in [(5000, 0.006), (10, 0.0), (1000, 0.001), (40000, 0.0045)] {
        store.add_timing("l2norm", Timing::new(size, time)).unwrap();
    }
    let sizes: Vec<u64> = store
        .list_timings("l2norm")
        .unwrap()
        .iter()
        .map(|t| t.problem_size)
        .collect();
    assert_eq!(sizes, vec![10, 1000, 5000, 40000]);
}

pub fn l2norm_scenario<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    store.add_program(&l2norm()).unwrap();
    store.add_timing("l2norm", Timing::new(1000, 0.001)).unwrap();
    store.add_timing("l2norm", Timing::new(5000, 0.006)).unwrap();
    assert_eq!(
        store.list_timings("l2norm").unwrap(),
        vec![Timing::new(1000, 0.001), Timing::new(5000, 0.006)]
    );
}

pub fn command_line_prefix_lookup<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    store.add_program(&l2norm()).unwrap();
    assert_eq!(store.get_command_line_prefix("l2norm").unwrap(), "l2vecnorm");
    assert_eq!(store.get_program("l2norm").unwrap(), l2norm());

    let err = store.get_command_line_prefix("ghost").unwrap_err();
    assert!(matches!(err, StorageError::NotFound { ref name } if name == "ghost"));
    assert!(matches!(
        store.get_program("ghost"),
        Err(StorageError::NotFound { .. })
    ));
}

pub fn timing_for_unknown_program<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    let err = store
        .add_timing("ghost", Timing::new(10, 0.1))
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
    assert!(store.list_timings("ghost").unwrap().is_empty());
}

pub fn store_does_not_dedup_sizes<S, F>(factory: F)
where
    S: TimingStore,
    F: FnOnce() -> S,
{
    let mut store = factory();
    store.add_program(&l2norm()).unwrap();
    store.add_timing("l2norm", Timing::new(100, 0.1)).unwrap();
    store.add_timing("l2norm", Timing::new(100, 0.2)).unwrap();
    assert_eq!(store.list_timings("l2norm").unwrap().len(), 2);
}
