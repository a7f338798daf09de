//! Sample types accepted by the binning functions
//!
//! Every element is widened to `f64` before it is compared against bin edges,
//! so integer and single-precision inputs land in exactly the bin their `f64`
//! conversion would.

use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Base trait for values that can be histogrammed
pub trait Sample: AsPrimitive<f64> + PartialOrd + Debug + Send + Sync + 'static {
    /// Convert to f64 for binning
    fn to_f64(self) -> f64 {
        self.as_()
    }
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {}
        )*
    };
}

impl_sample!(f64, f32, i64, i32, u64, u32);
