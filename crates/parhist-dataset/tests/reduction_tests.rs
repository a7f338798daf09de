//! Tests that both reduction primitives agree regardless of partitioning

use parhist_dataset::{Bag, ExecutionConfig, Executor, Rdd};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_values(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1000..1000)).collect()
}

#[test]
fn test_rdd_and_bag_agree() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let data = random_values(10_000, 7);
    let expected: i64 = data.iter().sum();

    let rdd = Rdd::parallelize(data.clone(), 13).unwrap();
    assert_eq!(rdd.aggregate(0i64, |acc, &x| acc + x, |a, b| a + b), expected);

    let bag = Bag::from_sequence(data, 97).unwrap().with_split_every(4).unwrap();
    assert_eq!(bag.reduction(|p| p.iter().sum::<i64>(), |v| v.into_iter().sum()), expected);
}

#[cfg(feature = "parallel")]
#[test]
fn test_dedicated_pool_runs_tasks() {
    let executor = Executor::with_num_threads(2).unwrap();
    let rdd = Rdd::parallelize((0..64).collect::<Vec<u32>>(), 8)
        .unwrap()
        .with_executor(executor.clone());

    let names = rdd.aggregate(
        Vec::new(),
        |mut acc: Vec<String>, _| {
            if acc.is_empty() {
                acc.push(std::thread::current().name().unwrap_or("").to_string());
            }
            acc
        },
        |mut a, b| {
            a.extend(b);
            a
        },
    );
    assert!(!names.is_empty());
    assert!(names.iter().all(|n| n.starts_with("parhist-worker-")));
}

#[test]
#[should_panic(expected = "bad partition")]
fn test_task_panic_propagates() {
    let bag = Bag::from_sequence(vec![1, 2, 3, 4], 2).unwrap();
    bag.reduction(
        |p| {
            if p.contains(&3) {
                panic!("bad partition");
            }
            p.len()
        },
        |v| v.into_iter().sum(),
    );
}

#[test]
fn test_config_built_collections() {
    let config = ExecutionConfig::from_json(r#"{"default_partitions": 6, "split_every": 2}"#).unwrap();
    let data: Vec<i64> = (0..100).collect();

    let rdd = Rdd::parallelize_with(data.clone(), &config).unwrap();
    let bag = Bag::from_sequence_with(data, &config).unwrap();
    assert_eq!(rdd.num_partitions(), 6);
    assert_eq!(bag.npartitions(), 6);
    assert_eq!(rdd.fold(0, |a, b| a + b), 4950);
    assert_eq!(bag.reduction(|p| p.iter().sum::<i64>(), |v| v.into_iter().sum()), 4950);
}

proptest! {
    #[test]
    fn prop_partitioning_does_not_change_result(
        data in prop::collection::vec(-1000i64..1000, 0..400),
        num_partitions in 1usize..20,
        partition_size in 1usize..50,
        split_every in 2usize..6,
    ) {
        let expected: i64 = data.iter().sum();

        let rdd = Rdd::parallelize(data.clone(), num_partitions).unwrap();
        prop_assert_eq!(rdd.count(), data.len());
        prop_assert_eq!(rdd.aggregate(0i64, |acc, &x| acc + x, |a, b| a + b), expected);

        let bag = Bag::from_sequence(data.clone(), partition_size)
            .unwrap()
            .with_split_every(split_every)
            .unwrap();
        prop_assert_eq!(bag.compute(), data);
        prop_assert_eq!(bag.reduction(|p| p.iter().sum::<i64>(), |v| v.into_iter().sum()), expected);
    }
}
