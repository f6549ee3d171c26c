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

use log::debug;
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Configuration for splitting rows into a training and a validation part.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    train_ratio: f64,
    seed: Option<u64>,
}

impl SplitConfig {
    pub fn new() -> Self {
        SplitConfig { train_ratio: 0.7, seed: None }
    }

    pub fn with_train_ratio(mut self, ratio: f64) -> Self {
        self.train_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Shuffles the rows of `data` and splits them into `(train, validation)`.
///
/// The training part holds `round(n_rows * train_ratio)` rows. Fit scalers on
/// the training part only and apply them to both.
pub fn train_validation_split<T: Clone>(
    data: &Array2<T>,
    config: &SplitConfig,
) -> (Array2<T>, Array2<T>) {
    let total_rows = data.nrows();
    let mut rows: Vec<usize> = (0..total_rows).collect();
    match config.seed {
        Some(seed) => rows.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => rows.shuffle(&mut rand::thread_rng()),
    }

    let train_size = (total_rows as f64 * config.train_ratio).round() as usize;
    let (train_rows, validation_rows) = rows.split_at(train_size.min(total_rows));
    debug!(
        "Split data: train_size={}, validation_size={}",
        train_rows.len(),
        validation_rows.len()
    );

    (data.select(Axis(0), train_rows), data.select(Axis(0), validation_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array;

    fn indexed_rows(n: usize) -> Array2<f64> {
        Array::from_shape_fn((n, 2), |(row, col)| (row * 10 + col) as f64)
    }

    #[test]
    fn test_split_sizes() {
        let data = indexed_rows(10);
        let (train, validation) = train_validation_split(&data, &SplitConfig::new());
        assert_eq!(train.dim(), (7, 2));
        assert_eq!(validation.dim(), (3, 2));
    }

    #[test]
    fn test_split_partitions_rows() {
        let data = indexed_rows(9);
        let config = SplitConfig::new().with_train_ratio(0.5).with_seed(7);
        let (train, validation) = train_validation_split(&data, &config);

        let mut seen: Vec<f64> =
            train.column(0).iter().chain(validation.column(0)).copied().collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seen, data.column(0).to_vec());
    }

    #[test]
    fn test_seeded_split_is_deterministic() {
        let data = indexed_rows(20);
        let config = SplitConfig::new().with_seed(42);
        assert_eq!(train_validation_split(&data, &config), train_validation_split(&data, &config));
    }

    #[test]
    fn test_train_ratio_is_clamped() {
        let data = indexed_rows(3);

        let (train, validation) =
            train_validation_split(&data, &SplitConfig::new().with_train_ratio(1.5));
        assert_eq!((train.nrows(), validation.nrows()), (3, 0));

        let (train, validation) =
            train_validation_split(&data, &SplitConfig::new().with_train_ratio(-0.1));
        assert_eq!((train.nrows(), validation.nrows()), (0, 3));
    }
}
