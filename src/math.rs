//! Random integer helpers backed by the thread-local RNG

use std::collections::HashSet;

use rand::distributions::{Distribution, WeightedIndex};
use rand::{thread_rng, Rng};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Uniformly picks an integer between `min` and `max`, both included.
///
/// The bounds may be given in either order.
pub fn random_int(min: i64, max: i64) -> i64 {
    if min == max {
        return min;
    }
    let (low, high) = if min > max { (max, min) } else { (min, max) };
    thread_rng().gen_range(low..=high)
}

/// Draws `count` integers between `min` and `max`; values may repeat
pub fn random_ints(min: i64, max: i64, count: usize) -> Vec<i64> {
    (0..count).map(|_| random_int(min, max)).collect()
}

/// Draws an integer between `min` and `max` that is not in `excluded`
///
/// # Errors
/// * [`Error::ExhaustedRange`] - every candidate is excluded
pub fn random_int_excluding(min: i64, max: i64, excluded: &[i64]) -> Result<i64> {
    let (low, high) = if min > max { (max, min) } else { (min, max) };
    let blocked: HashSet<i64> = excluded
        .iter()
        .copied()
        .filter(|n| (low..=high).contains(n))
        .collect();

    if blocked.len() as u128 > u128::from(high.abs_diff(low)) {
        warn!("No integer between {} and {} is left after exclusions", low, high);
        return Err(Error::ExhaustedRange { min: low, max: high });
    }

    let mut rng = thread_rng();
    loop {
        let n = rng.gen_range(low..=high);
        if !blocked.contains(&n) {
            return Ok(n);
        }
    }
}

/// Draws `count` pairwise-distinct integers between `min` and `max`
///
/// # Errors
/// * [`Error::RangeTooSmall`] - `|max - min|` is smaller than `count`
pub fn distinct_random_ints(min: i64, max: i64, count: usize) -> Result<Vec<i64>> {
    if max.abs_diff(min) < count as u64 {
        return Err(Error::RangeTooSmall { min, max, count });
    }

    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let n = random_int_excluding(min, max, &picked)?;
        picked.push(n);
    }
    debug!("Picked {} distinct integers between {} and {}", count, min, max);
    Ok(picked)
}

/// Picks an index with probability proportional to its weight.
///
/// `[10.0, 20.0, 30.0, 40.0]` yields `3` about 40% of the time.
///
/// # Errors
/// * [`Error::InvalidProportions`] - empty, negative, non-finite or all-zero weights
pub fn random_index_by_proportion(proportions: &[f64]) -> Result<usize> {
    if proportions.iter().any(|p| !p.is_finite()) {
        return Err(Error::InvalidProportions(format!("non-finite weight in {:?}", proportions)));
    }
    let weights = WeightedIndex::new(proportions)
        .map_err(|e| Error::InvalidProportions(e.to_string()))?;
    Ok(weights.sample(&mut thread_rng()))
}
