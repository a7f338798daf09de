//! Count arrays with underflow and overflow slots
//!
//! A 1D array for `bins` interior bins has `bins + 2` slots: index `0` is
//! underflow, `1..=bins` are the interior bins and `bins + 1` is overflow. A 2D
//! array applies the same layout to both axes and is stored row-major, x first.

use parhist_core::{BinSpec, Error, Result};
use serde::Serialize;
use std::ops::Index;

/// Counts for a one-dimensional histogram
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Counts1D {
    counts: Vec<u64>,
}

impl Counts1D {
    /// Zeroed counts for `bins` interior bins
    pub fn new(bins: usize) -> Self {
        Self {
            counts: vec![0; bins + 2],
        }
    }

    /// Zeroed counts shaped for `spec`
    pub fn for_spec(spec: &BinSpec) -> Self {
        Self::new(spec.bins())
    }

    /// Wrap raw counts laid out as `[underflow, bins..., overflow]`
    pub fn from_vec(counts: Vec<u64>) -> Result<Self> {
        if counts.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "counts need underflow and overflow slots, got length {}",
                counts.len()
            )));
        }
        Ok(Self { counts })
    }

    /// Total number of slots, including underflow and overflow
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when there are no interior bins
    pub fn is_empty(&self) -> bool {
        self.bins() == 0
    }

    /// Number of interior bins
    pub fn bins(&self) -> usize {
        self.counts.len() - 2
    }

    /// Count in slot `index`, if it exists
    pub fn get(&self, index: usize) -> Option<u64> {
        self.counts.get(index).copied()
    }

    /// Values below the lower bound
    pub fn underflow(&self) -> u64 {
        self.counts[0]
    }

    /// Values at or above the upper bound, and NaN
    pub fn overflow(&self) -> u64 {
        self.counts[self.counts.len() - 1]
    }

    /// Interior bin counts
    pub fn interior(&self) -> &[u64] {
        &self.counts[1..self.counts.len() - 1]
    }

    /// Sum of every slot
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Sum of the interior slots
    pub fn interior_total(&self) -> u64 {
        self.interior().iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// All slots
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Consume into the raw slot vector
    pub fn into_vec(self) -> Vec<u64> {
        self.counts
    }

    /// Add one to slot `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn increment(&mut self, index: usize) {
        self.counts[index] = self.counts[index].saturating_add(1);
    }

    /// Add `other` into `self` element-wise
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.counts.len() != other.counts.len() {
            return Err(Error::shape_mismatch(&[self.len()], &[other.len()]));
        }
        add_into(&mut self.counts, &other.counts);
        Ok(())
    }

    /// Element-wise sum of two arrays of the same shape
    ///
    /// The combiner used inside reductions, where every partial is shaped by
    /// the same [`BinSpec`].
    pub fn combine(mut self, other: Self) -> Self {
        debug_assert_eq!(self.counts.len(), other.counts.len());
        add_into(&mut self.counts, &other.counts);
        self
    }

    /// Sum a batch of partial counts shaped by `spec`
    ///
    /// An empty batch yields zeroed counts.
    pub fn sum(spec: &BinSpec, partials: impl IntoIterator<Item = Self>) -> Self {
        partials.into_iter().fold(Self::for_spec(spec), Self::combine)
    }
}

impl Index<usize> for Counts1D {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.counts[index]
    }
}

/// Counts for a two-dimensional histogram
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Counts2D {
    xlen: usize,
    ylen: usize,
    counts: Vec<u64>,
}

impl Counts2D {
    /// Zeroed counts for `xbins` by `ybins` interior bins
    pub fn new(xbins: usize, ybins: usize) -> Self {
        let (xlen, ylen) = (xbins + 2, ybins + 2);
        Self {
            xlen,
            ylen,
            counts: vec![0; xlen * ylen],
        }
    }

    /// Zeroed counts shaped for a pair of specs
    pub fn for_specs(xspec: &BinSpec, yspec: &BinSpec) -> Self {
        Self::new(xspec.bins(), yspec.bins())
    }

    /// Wrap raw row-major counts of shape `(xlen, ylen)`
    pub fn from_vec(xlen: usize, ylen: usize, counts: Vec<u64>) -> Result<Self> {
        if xlen < 2 || ylen < 2 {
            return Err(Error::InvalidParameter(format!(
                "counts need underflow and overflow slots on both axes, got shape ({xlen}, {ylen})"
            )));
        }
        if counts.len() != xlen * ylen {
            return Err(Error::shape_mismatch(&[xlen * ylen], &[counts.len()]));
        }
        Ok(Self { xlen, ylen, counts })
    }

    /// `(xbins + 2, ybins + 2)`
    pub fn shape(&self) -> (usize, usize) {
        (self.xlen, self.ylen)
    }

    /// Count at `(x, y)`, if in range
    pub fn get(&self, x: usize, y: usize) -> Option<u64> {
        if x < self.xlen && y < self.ylen {
            Some(self.counts[x * self.ylen + y])
        } else {
            None
        }
    }

    /// All y slots for x index `x`
    pub fn row(&self, x: usize) -> &[u64] {
        &self.counts[x * self.ylen..(x + 1) * self.ylen]
    }

    /// Sum of every slot
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Sum of the slots that are interior on both axes
    pub fn interior_total(&self) -> u64 {
        (1..self.xlen - 1)
            .flat_map(|x| &self.row(x)[1..self.ylen - 1])
            .fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Per-x counts summed over every y slot
    pub fn project_x(&self) -> Counts1D {
        let counts = (0..self.xlen)
            .map(|x| self.row(x).iter().fold(0u64, |acc, &c| acc.saturating_add(c)))
            .collect();
        Counts1D { counts }
    }

    /// Per-y counts summed over every x slot
    pub fn project_y(&self) -> Counts1D {
        let mut counts = vec![0u64; self.ylen];
        for x in 0..self.xlen {
            add_into(&mut counts, self.row(x));
        }
        Counts1D { counts }
    }

    /// All slots, row-major
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Consume into the raw row-major slot vector
    pub fn into_vec(self) -> Vec<u64> {
        self.counts
    }

    /// Add one to slot `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn increment(&mut self, x: usize, y: usize) {
        assert!(y < self.ylen, "y index {y} out of range for {} slots", self.ylen);
        let slot = &mut self.counts[x * self.ylen + y];
        *slot = slot.saturating_add(1);
    }

    /// Add `other` into `self` element-wise
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(
                &[self.xlen, self.ylen],
                &[other.xlen, other.ylen],
            ));
        }
        add_into(&mut self.counts, &other.counts);
        Ok(())
    }

    /// Element-wise sum of two arrays of the same shape
    pub fn combine(mut self, other: Self) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        add_into(&mut self.counts, &other.counts);
        self
    }

    /// Sum a batch of partial counts shaped by `xspec` and `yspec`
    pub fn sum(xspec: &BinSpec, yspec: &BinSpec, partials: impl IntoIterator<Item = Self>) -> Self {
        partials
            .into_iter()
            .fold(Self::for_specs(xspec, yspec), Self::combine)
    }
}

impl Index<(usize, usize)> for Counts2D {
    type Output = u64;

    fn index(&self, (x, y): (usize, usize)) -> &u64 {
        assert!(y < self.ylen, "y index {y} out of range for {} slots", self.ylen);
        &self.counts[x * self.ylen + y]
    }
}

fn add_into(target: &mut [u64], source: &[u64]) {
    for (t, &s) in target.iter_mut().zip(source) {
        *t = t.saturating_add(s);
    }
}
