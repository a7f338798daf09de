//! Splitting a flat sequence into partitions

use parhist_core::{Error, Result};

/// Split `data` into exactly `num_partitions` contiguous slices
///
/// Partition `i` holds elements `[i * len / n, (i + 1) * len / n)`, so sizes
/// differ by at most one and some partitions are empty when `len < n`.
pub fn slice_evenly<T>(data: Vec<T>, num_partitions: usize) -> Result<Vec<Vec<T>>> {
    if num_partitions == 0 {
        return Err(Error::InvalidParameter(
            "num_partitions must be positive".to_string(),
        ));
    }

    let len = data.len();
    let mut items = data.into_iter();
    let partitions: Vec<Vec<T>> = (0..num_partitions)
        .map(|i| {
            let start = i * len / num_partitions;
            let end = (i + 1) * len / num_partitions;
            items.by_ref().take(end - start).collect::<Vec<T>>()
        })
        .collect();
    Ok(partitions)
}

/// Split `data` into chunks of `partition_size` elements, the last possibly shorter
///
/// An empty input yields a single empty partition.
pub fn chunk_by_size<T>(data: Vec<T>, partition_size: usize) -> Result<Vec<Vec<T>>> {
    if partition_size == 0 {
        return Err(Error::InvalidParameter(
            "partition_size must be positive".to_string(),
        ));
    }
    if data.is_empty() {
        return Ok(vec![Vec::new()]);
    }

    let mut partitions = Vec::with_capacity(data.len().div_ceil(partition_size));
    let mut items = data.into_iter().peekable();
    while items.peek().is_some() {
        partitions.push(items.by_ref().take(partition_size).collect::<Vec<T>>());
    }
    Ok(partitions)
}
