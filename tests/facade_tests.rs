//! End-to-end use of the facade crate

use approx::assert_relative_eq;
use parhist::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_config_driven_histograms() -> anyhow::Result<()> {
    init_tracing();

    let config = ExecutionConfig::from_json(
        r#"{"num_threads": 2, "default_partitions": 5, "split_every": 2}"#,
    )?;
    let values: Vec<f64> = (0..1_000).map(|i| (i as f64 - 250.0) / 100.0).collect();

    let rdd = Rdd::parallelize_with(values.clone(), &config)?;
    let bag = Bag::from_sequence_with(values, &config)?;
    assert_eq!(rdd.num_partitions(), 5);
    assert_eq!(bag.split_every(), 2);

    let from_rdd = histogram1d(&rdd, 0.0, 5.0, 20)?;
    let from_bag = histogram(&bag, 0.0, 5.0, 20)?;
    assert_eq!(from_rdd, from_bag);
    assert_eq!(from_rdd.underflow(), 250);
    assert_eq!(from_rdd.overflow(), 250);
    assert_eq!(from_rdd.total(), 1_000);

    let centers = from_rdd.centers();
    assert_eq!(centers.len(), 20);
    assert_relative_eq!(centers[0], 0.125, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_2d_through_facade() -> anyhow::Result<()> {
    init_tracing();

    let pairs: Vec<(i32, i32)> = (0..10).map(|i| (i, 9 - i)).collect();
    let bag = Bag::from_sequence(pairs, 3)?;
    let hist = histogram2d(&bag, 0.0, 10.0, 2, 0.0, 10.0, 2)?;

    // x < 5 pairs with y >= 5 and the other way round
    assert_eq!(hist.counts()[(1, 2)], 5);
    assert_eq!(hist.counts()[(2, 1)], 5);
    assert_eq!(hist.counts().interior_total(), 10);
    Ok(())
}

#[test]
fn test_unsupported_input_through_facade() {
    let err = histogram1d(&[1.0_f64, 2.0], 0.0, 1.0, 2).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }));
    assert_eq!(err.to_string(), "Not supported data type: '[f64; 2]'");
}

#[test]
fn test_executor_follows_parallel_feature() {
    let strategy = Executor::global().strategy();
    assert_eq!(
        strategy == parhist::parhist_core::ExecutionStrategy::Parallel,
        cfg!(feature = "parallel")
    );
}
