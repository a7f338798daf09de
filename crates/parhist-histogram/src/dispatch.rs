//! Runtime selection of the histogram implementation for a collection
//!
//! [`histogram1d`] and [`histogram2d`] accept any value and look up the
//! collection/element combination at runtime. Anything without an
//! implementation is rejected with [`Error::UnsupportedType`] naming the type.

use crate::traits::{Histogram1DSource, Histogram2DSource};
use crate::types::{Histogram1D, Histogram2D};
use parhist_core::{Error, Result};
use parhist_dataset::{Bag, Rdd};
use std::any::{type_name, Any};
use tracing::instrument;

macro_rules! downcast_first {
    ($any:expr, $target:ty; $($collection:ident<$elem:ty>),+ $(,)?) => {
        $(
            if let Some(source) = $any.downcast_ref::<$collection<$elem>>() {
                return Some(source as $target);
            }
        )+
    };
}

fn as_source_1d(data: &dyn Any) -> Option<&dyn Histogram1DSource> {
    downcast_first!(data, &dyn Histogram1DSource;
        Rdd<f64>, Rdd<f32>, Rdd<i64>, Rdd<i32>, Rdd<u64>, Rdd<u32>,
        Bag<f64>, Bag<f32>, Bag<i64>, Bag<i32>, Bag<u64>, Bag<u32>,
    );
    None
}

fn as_source_2d(data: &dyn Any) -> Option<&dyn Histogram2DSource> {
    downcast_first!(data, &dyn Histogram2DSource;
        Rdd<(f64, f64)>, Rdd<(f32, f32)>, Rdd<(i64, i64)>,
        Rdd<(i32, i32)>, Rdd<(u64, u64)>, Rdd<(u32, u32)>,
        Bag<(f64, f64)>, Bag<(f32, f32)>, Bag<(i64, i64)>,
        Bag<(i32, i32)>, Bag<(u64, u64)>, Bag<(u32, u32)>,
    );
    None
}

/// Whether [`histogram1d`] accepts values of type `D`
pub fn supports_1d<D: Any>(data: &D) -> bool {
    as_source_1d(data).is_some()
}

/// Whether [`histogram2d`] accepts values of type `D`
pub fn supports_2d<D: Any>(data: &D) -> bool {
    as_source_2d(data).is_some()
}

/// Fixed-width histogram of a collection's elements over `[lower, upper)`
///
/// `data` must be an [`Rdd`] or [`Bag`] of a [`Sample`](parhist_core::Sample)
/// type. The counts have `bins + 2` slots: underflow, the interior bins, then
/// overflow. The edges are the `bins + 1` evenly spaced boundaries from
/// `lower` to `upper`.
///
/// # Errors
///
/// [`Error::UnsupportedType`] for any other input, and
/// [`Error::InvalidParameter`] for an unusable bin specification.
#[instrument(skip(data), fields(data_type = type_name::<D>()))]
pub fn histogram1d<D: Any>(data: &D, lower: f64, upper: f64, bins: usize) -> Result<Histogram1D> {
    let source = as_source_1d(data).ok_or_else(Error::unsupported::<D>)?;
    source.histogram1d(lower, upper, bins)
}

/// Fixed-width 2D histogram of a collection of `(x, y)` pairs
///
/// `data` must be an [`Rdd`] or [`Bag`] of `(T, T)` with `T` a
/// [`Sample`](parhist_core::Sample) type. Counts have shape
/// `(xbins + 2, ybins + 2)` with under/overflow slots on both axes.
///
/// # Errors
///
/// [`Error::UnsupportedType`] for any other input, and
/// [`Error::InvalidParameter`] for an unusable bin specification.
#[instrument(skip(data), fields(data_type = type_name::<D>()))]
pub fn histogram2d<D: Any>(
    data: &D,
    xlower: f64,
    xupper: f64,
    xbins: usize,
    ylower: f64,
    yupper: f64,
    ybins: usize,
) -> Result<Histogram2D> {
    let source = as_source_2d(data).ok_or_else(Error::unsupported::<D>)?;
    source.histogram2d(xlower, xupper, xbins, ylower, yupper, ybins)
}
