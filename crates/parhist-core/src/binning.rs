//! Fixed-width bin edges and digitization
//!
//! Bin `i` (for `1 <= i <= bins`) covers `[edges[i - 1], edges[i])`. Index `0`
//! collects everything below `lower` and index `bins + 1` everything at or
//! above `upper`, so a count array always has `bins + 2` slots.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Evenly spaced values over `[start, stop]`, inclusive of both ends
///
/// The last element is exactly `stop` regardless of accumulated rounding.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Index of the bin containing `x` given ascending `edges`
///
/// Returns the number of edges `<= x`: `0` below the first edge,
/// `edges.len()` at or above the last one. NaN orders after every edge.
#[inline]
pub fn digitize(x: f64, edges: &[f64]) -> usize {
    if x.is_nan() {
        return edges.len();
    }
    edges.partition_point(|&edge| edge <= x)
}

/// A validated fixed-width binning of `[lower, upper]` into `bins` intervals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BinRange", into = "BinRange")]
pub struct BinSpec {
    lower: f64,
    upper: f64,
    bins: usize,
    edges: Vec<f64>,
}

/// Serialized form of a [`BinSpec`], without the derived edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinRange {
    pub lower: f64,
    pub upper: f64,
    pub bins: usize,
}

impl BinSpec {
    /// Create a bin specification, rejecting empty or degenerate ranges
    pub fn new(lower: f64, upper: f64, bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::invalid_bins(lower, upper, bins, "at least one bin is required"));
        }
        if counts_capacity(bins).is_none() {
            return Err(Error::invalid_bins(lower, upper, bins, "too many bins"));
        }
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::invalid_bins(lower, upper, bins, "bounds must be finite"));
        }
        if lower >= upper {
            return Err(Error::invalid_bins(lower, upper, bins, "lower must be below upper"));
        }
        if !(upper - lower).is_finite() {
            return Err(Error::invalid_bins(lower, upper, bins, "range width must be finite"));
        }

        let edges = linspace(lower, upper, bins + 1);
        if !edges.windows(2).all(|w| w[0] < w[1]) {
            return Err(Error::invalid_bins(
                lower,
                upper,
                bins,
                "bin width is below floating-point resolution",
            ));
        }

        Ok(Self {
            lower,
            upper,
            bins,
            edges,
        })
    }

    /// Lower bound of the first interior bin
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the last interior bin
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Number of interior bins
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Width of every interior bin
    pub fn width(&self) -> f64 {
        (self.upper - self.lower) / self.bins as f64
    }

    /// Bin edges, `bins + 1` of them
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Length of a count array for this spec, including under/overflow
    pub fn counts_len(&self) -> usize {
        self.bins + 2
    }

    /// Counts-array index for a value
    #[inline]
    pub fn index_of(&self, x: f64) -> usize {
        digitize(x, &self.edges)
    }

    /// Index of the underflow slot
    pub const fn underflow_index(&self) -> usize {
        0
    }

    /// Index of the overflow slot
    pub fn overflow_index(&self) -> usize {
        self.bins + 1
    }
}

/// Slots in a count array for `bins` interior bins, if such an array can exist
fn counts_capacity(bins: usize) -> Option<usize> {
    let slots = bins.checked_add(2)?;
    let bytes = slots.checked_mul(std::mem::size_of::<u64>())?;
    (bytes <= isize::MAX as usize).then_some(slots)
}

impl TryFrom<BinRange> for BinSpec {
    type Error = Error;

    fn try_from(range: BinRange) -> Result<Self> {
        BinSpec::new(range.lower, range.upper, range.bins)
    }
}

impl From<BinSpec> for BinRange {
    fn from(spec: BinSpec) -> Self {
        BinRange {
            lower: spec.lower,
            upper: spec.upper,
            bins: spec.bins,
        }
    }
}
