//! Collections that can be histogrammed through their own reduction primitive

use crate::counts::{Counts1D, Counts2D};
use crate::kernels::{bin_partition_1d, bin_partition_2d, increment_1d, increment_2d};
use crate::types::{Histogram1D, Histogram2D};
use parhist_core::{BinSpec, Result, Sample};
use parhist_dataset::{Bag, Rdd};
use tracing::instrument;

/// A collection of scalar samples
pub trait Histogram1DSource {
    /// Bin every element against `spec`
    fn bin_1d(&self, spec: &BinSpec) -> Counts1D;

    /// Fixed-width histogram of `bins` bins over `[lower, upper)`
    fn histogram1d(&self, lower: f64, upper: f64, bins: usize) -> Result<Histogram1D> {
        let spec = BinSpec::new(lower, upper, bins)?;
        Ok(Histogram1D::new(self.bin_1d(&spec), &spec))
    }
}

/// A collection of `(x, y)` samples
pub trait Histogram2DSource {
    /// Bin every pair against `xspec` and `yspec`
    fn bin_2d(&self, xspec: &BinSpec, yspec: &BinSpec) -> Counts2D;

    /// Fixed-width 2D histogram over `[xlower, xupper) x [ylower, yupper)`
    fn histogram2d(
        &self,
        xlower: f64,
        xupper: f64,
        xbins: usize,
        ylower: f64,
        yupper: f64,
        ybins: usize,
    ) -> Result<Histogram2D> {
        let xspec = BinSpec::new(xlower, xupper, xbins)?;
        let yspec = BinSpec::new(ylower, yupper, ybins)?;
        Ok(Histogram2D::new(self.bin_2d(&xspec, &yspec), &xspec, &yspec))
    }
}

impl<T: Sample> Histogram1DSource for Rdd<T> {
    #[instrument(skip_all, fields(bins = spec.bins(), partitions = self.num_partitions()))]
    fn bin_1d(&self, spec: &BinSpec) -> Counts1D {
        self.aggregate(
            Counts1D::for_spec(spec),
            |counts, &value| increment_1d(counts, spec, value),
            Counts1D::combine,
        )
    }
}

impl<T: Sample> Histogram1DSource for Bag<T> {
    #[instrument(skip_all, fields(bins = spec.bins(), partitions = self.npartitions()))]
    fn bin_1d(&self, spec: &BinSpec) -> Counts1D {
        self.reduction(
            |partition| bin_partition_1d(spec, partition),
            |partials| Counts1D::sum(spec, partials),
        )
    }
}

impl<T: Sample> Histogram2DSource for Rdd<(T, T)> {
    #[instrument(skip_all, fields(xbins = xspec.bins(), ybins = yspec.bins(), partitions = self.num_partitions()))]
    fn bin_2d(&self, xspec: &BinSpec, yspec: &BinSpec) -> Counts2D {
        self.aggregate(
            Counts2D::for_specs(xspec, yspec),
            |counts, &pair| increment_2d(counts, xspec, yspec, pair),
            Counts2D::combine,
        )
    }
}

impl<T: Sample> Histogram2DSource for Bag<(T, T)> {
    #[instrument(skip_all, fields(xbins = xspec.bins(), ybins = yspec.bins(), partitions = self.npartitions()))]
    fn bin_2d(&self, xspec: &BinSpec, yspec: &BinSpec) -> Counts2D {
        self.reduction(
            |partition| bin_partition_2d(xspec, yspec, partition),
            |partials| Counts2D::sum(xspec, yspec, partials),
        )
    }
}
