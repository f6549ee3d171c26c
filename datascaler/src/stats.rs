// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! NaN-aware reductions over a single column.
//!
//! Every reduction skips NaN entries and returns `None` when nothing is left,
//! so a column made entirely of missing values never yields a statistic.

use std::cmp::Ordering;

use log::warn;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use num_traits::{Float, FromPrimitive};

fn present<T: Float>(column: ArrayView1<'_, T>) -> impl Iterator<Item = T> + '_ {
    column.into_iter().copied().filter(|v| !v.is_nan())
}

/// Smallest non-NaN entry.
pub fn nan_min<T: Float>(column: ArrayView1<T>) -> Option<T> {
    present(column).reduce(T::min)
}

/// Largest non-NaN entry.
pub fn nan_max<T: Float>(column: ArrayView1<T>) -> Option<T> {
    present(column).reduce(T::max)
}

/// Arithmetic mean of the non-NaN entries.
pub fn nan_mean<T: Float + FromPrimitive>(column: ArrayView1<T>) -> Option<T> {
    let (sum, count) = present(column).fold((T::zero(), 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return None;
    }
    Some(sum / T::from_usize(count)?)
}

/// Population standard deviation (ddof = 0) of the non-NaN entries.
pub fn nan_std<T: Float + FromPrimitive>(column: ArrayView1<T>) -> Option<T> {
    let mean = nan_mean(column)?;
    let (sum_sq, count) = present(column).fold((T::zero(), 0usize), |(s, n), v| {
        let d = v - mean;
        (s + d * d, n + 1)
    });
    Some((sum_sq / T::from_usize(count)?).sqrt())
}

/// Quantile `q` of the non-NaN entries, interpolating linearly between the two
/// closest ranks at position `q * (n - 1)` of the sorted values.
///
/// `q` is clamped to `[0, 1]`.
pub fn nan_quantile<T: Float + FromPrimitive>(column: ArrayView1<T>, q: f64) -> Option<T> {
    let mut values: Vec<T> = present(column).collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let position = q.clamp(0.0, 1.0) * (values.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return Some(values[lower]);
    }
    let fraction = T::from_f64(position - lower as f64)?;
    Some(values[lower] + (values[upper] - values[lower]) * fraction)
}

/// Median of the non-NaN entries, i.e. `nan_quantile(column, 0.5)`.
pub fn nan_median<T: Float + FromPrimitive>(column: ArrayView1<T>) -> Option<T> {
    nan_quantile(column, 0.5)
}

/// Applies `stat` to every column of `distribution`.
///
/// A column for which `stat` yields nothing (all NaN) gets a NaN statistic,
/// so that column transforms to NaN while the others scale normally.
pub fn column_stat<T, F>(distribution: &Array2<T>, stat: F) -> Array1<T>
where
    T: Float,
    F: Fn(ArrayView1<T>) -> Option<T>,
{
    distribution
        .axis_iter(Axis(1))
        .enumerate()
        .map(|(column, values)| {
            stat(values).unwrap_or_else(|| {
                warn!("Column {} has no non-NaN values, its statistic is NaN", column);
                T::nan()
            })
        })
        .collect()
}
