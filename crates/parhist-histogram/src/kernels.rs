//! Increment functions handed to collection reductions
//!
//! The element-wise forms have the `(accumulator, element) -> accumulator`
//! shape of an `Rdd::aggregate` sequence operation. The partition forms bin a
//! whole slice at once, the shape of a `Bag::reduction` per-partition step.

use crate::counts::{Counts1D, Counts2D};
use parhist_core::{BinSpec, Sample};

/// Count one value into `counts`
#[inline]
pub fn increment_1d<T: Sample>(mut counts: Counts1D, spec: &BinSpec, value: T) -> Counts1D {
    counts.increment(spec.index_of(value.to_f64()));
    counts
}

/// Count one `(x, y)` pair into `counts`
#[inline]
pub fn increment_2d<T: Sample>(
    mut counts: Counts2D,
    xspec: &BinSpec,
    yspec: &BinSpec,
    (x, y): (T, T),
) -> Counts2D {
    counts.increment(xspec.index_of(x.to_f64()), yspec.index_of(y.to_f64()));
    counts
}

/// Bin a whole partition into fresh counts
pub fn bin_partition_1d<T: Sample>(spec: &BinSpec, values: &[T]) -> Counts1D {
    values
        .iter()
        .fold(Counts1D::for_spec(spec), |counts, &value| increment_1d(counts, spec, value))
}

/// Bin a whole partition of pairs into fresh counts
pub fn bin_partition_2d<T: Sample>(xspec: &BinSpec, yspec: &BinSpec, pairs: &[(T, T)]) -> Counts2D {
    pairs
        .iter()
        .fold(Counts2D::for_specs(xspec, yspec), |counts, &pair| {
            increment_2d(counts, xspec, yspec, pair)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_1d_edges() {
        let spec = BinSpec::new(0.0, 4.0, 4).unwrap();
        let counts = [-1.0, 0.0, 0.5, 3.999, 4.0, 100.0, f64::NAN]
            .into_iter()
            .fold(Counts1D::for_spec(&spec), |c, v| increment_1d(c, &spec, v));

        assert_eq!(counts.as_slice(), &[1, 2, 0, 0, 1, 3]);
    }

    #[test]
    fn test_bin_partition_1d_integers() {
        let spec = BinSpec::new(0.0, 10.0, 5).unwrap();
        let counts = bin_partition_1d(&spec, &[-3_i64, 0, 1, 2, 9, 10, 11]);
        assert_eq!(counts.as_slice(), &[1, 2, 1, 0, 0, 1, 2]);
    }

    #[test]
    fn test_bin_partition_empty() {
        let spec = BinSpec::new(0.0, 1.0, 3).unwrap();
        let counts = bin_partition_1d::<f64>(&spec, &[]);
        assert_eq!(counts, Counts1D::new(3));
    }

    #[test]
    fn test_bin_partition_2d() {
        let xspec = BinSpec::new(0.0, 2.0, 2).unwrap();
        let yspec = BinSpec::new(0.0, 3.0, 3).unwrap();
        let pairs = [(0.5, 0.5), (0.5, 0.7), (1.5, 2.5), (-1.0, 1.0), (5.0, 5.0)];
        let counts = bin_partition_2d(&xspec, &yspec, &pairs);

        assert_eq!(counts.shape(), (4, 5));
        assert_eq!(counts[(1, 1)], 2);
        assert_eq!(counts[(2, 3)], 1);
        assert_eq!(counts[(0, 2)], 1);
        assert_eq!(counts[(3, 4)], 1);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.interior_total(), 3);
    }

    #[test]
    fn test_partition_matches_elementwise() {
        let spec = BinSpec::new(-1.0, 1.0, 8).unwrap();
        let values: Vec<f32> = (0..200).map(|i| (i as f32 * 0.37).sin() * 1.2).collect();

        let batch = bin_partition_1d(&spec, &values);
        let elementwise = values
            .iter()
            .fold(Counts1D::for_spec(&spec), |c, &v| increment_1d(c, &spec, v));
        assert_eq!(batch, elementwise);
        assert_eq!(batch.total(), 200);
    }
}
