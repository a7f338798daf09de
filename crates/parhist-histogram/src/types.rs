//! Histogram results: counts together with the edges they were binned against

use crate::counts::{Counts1D, Counts2D};
use parhist_core::BinSpec;
use serde::Serialize;
use std::fmt;

/// A single interior bin of a 1D histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive)
    pub right: f64,
    /// Number of values in this bin
    pub count: u64,
}

impl HistogramBin {
    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}): count={}", self.left, self.right, self.count)
    }
}

/// A one-dimensional fixed-width histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram1D {
    counts: Counts1D,
    edges: Vec<f64>,
}

impl Histogram1D {
    /// Pair counts with the edges of the spec they were binned against
    pub fn new(counts: Counts1D, spec: &BinSpec) -> Self {
        debug_assert_eq!(counts.len(), spec.counts_len());
        Self {
            counts,
            edges: spec.edges().to_vec(),
        }
    }

    /// Counts, including underflow and overflow slots
    pub fn counts(&self) -> &Counts1D {
        &self.counts
    }

    /// Bin edges, one more than the number of interior bins
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of interior bins
    pub fn len(&self) -> usize {
        self.counts.bins()
    }

    /// Check if the histogram has no interior bins
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Values below the lower edge
    pub fn underflow(&self) -> u64 {
        self.counts.underflow()
    }

    /// Values at or above the upper edge
    pub fn overflow(&self) -> u64 {
        self.counts.overflow()
    }

    /// Every counted value, in range or not
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// Interior bins with their edges
    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.interior())
            .map(|(edge, &count)| HistogramBin {
                left: edge[0],
                right: edge[1],
                count,
            })
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins().map(|bin| bin.center()).collect()
    }

    /// Split into `(counts, edges)`
    pub fn into_parts(self) -> (Counts1D, Vec<f64>) {
        (self.counts, self.edges)
    }
}

impl fmt::Display for Histogram1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower = self.edges.first().copied().unwrap_or(f64::NAN);
        let upper = self.edges.last().copied().unwrap_or(f64::NAN);
        write!(
            f,
            "Histogram1D({} bins, n={}, range=[{:.3}, {:.3}), underflow={}, overflow={})",
            self.len(),
            self.total(),
            lower,
            upper,
            self.underflow(),
            self.overflow()
        )
    }
}

/// A two-dimensional fixed-width histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram2D {
    counts: Counts2D,
    xedges: Vec<f64>,
    yedges: Vec<f64>,
}

impl Histogram2D {
    /// Pair counts with the edges of the specs they were binned against
    pub fn new(counts: Counts2D, xspec: &BinSpec, yspec: &BinSpec) -> Self {
        debug_assert_eq!(counts.shape(), (xspec.counts_len(), yspec.counts_len()));
        Self {
            counts,
            xedges: xspec.edges().to_vec(),
            yedges: yspec.edges().to_vec(),
        }
    }

    /// Counts of shape `(xbins + 2, ybins + 2)`
    pub fn counts(&self) -> &Counts2D {
        &self.counts
    }

    /// X-axis bin edges
    pub fn xedges(&self) -> &[f64] {
        &self.xedges
    }

    /// Y-axis bin edges
    pub fn yedges(&self) -> &[f64] {
        &self.yedges
    }

    /// Every counted pair
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// Histogram of the x coordinates alone
    pub fn marginal_x(&self) -> Histogram1D {
        Histogram1D {
            counts: self.counts.project_x(),
            edges: self.xedges.clone(),
        }
    }

    /// Histogram of the y coordinates alone
    pub fn marginal_y(&self) -> Histogram1D {
        Histogram1D {
            counts: self.counts.project_y(),
            edges: self.yedges.clone(),
        }
    }

    /// Split into `(counts, xedges, yedges)`
    pub fn into_parts(self) -> (Counts2D, Vec<f64>, Vec<f64>) {
        (self.counts, self.xedges, self.yedges)
    }
}

impl fmt::Display for Histogram2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (xlen, ylen) = self.counts.shape();
        write!(
            f,
            "Histogram2D({}x{} bins, n={})",
            xlen - 2,
            ylen - 2,
            self.total()
        )
    }
}
