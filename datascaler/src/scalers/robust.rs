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
use ndarray::{Array1, Array2};
use num_traits::{Float, FromPrimitive};

use super::{Affine, DataScaler, check_fit, guarded_scale};
use crate::errors::ScalerError;
use crate::stats::{column_stat, nan_median, nan_quantile};

/// Outlier-resistant scaling: `(x - median) / (q75 - q25)` per column.
///
/// Mean and variance are pulled around by outliers; median and interquartile
/// range barely move, so heavy-tailed columns keep a usable scale. Quantiles
/// interpolate linearly between the closest ranks of the non-NaN entries.
#[derive(Debug, Clone, PartialEq)]
pub struct RobustStandardizer<T: Float> {
    params: Option<Affine<T>>,
}

impl<T: Float + FromPrimitive> RobustStandardizer<T> {
    pub fn new() -> Self {
        RobustStandardizer { params: None }
    }

    pub fn median(&self) -> Option<&Array1<T>> {
        self.params.as_ref().map(Affine::center)
    }

    /// Zero-guarded interquartile range.
    pub fn scale(&self) -> Option<&Array1<T>> {
        self.params.as_ref().map(Affine::scale)
    }

    pub fn n_features(&self) -> Option<usize> {
        self.params.as_ref().map(Affine::n_features)
    }
}

impl<T: Float + FromPrimitive> Default for RobustStandardizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FromPrimitive> DataScaler<T> for RobustStandardizer<T> {
    fn fit(&mut self, distribution: &Array2<T>) -> Result<&mut Self, ScalerError> {
        check_fit(self.params.is_some(), distribution)?;
        let median = column_stat(distribution, nan_median);
        let q25 = column_stat(distribution, |column| nan_quantile(column, 0.25));
        let q75 = column_stat(distribution, |column| nan_quantile(column, 0.75));
        let scale = guarded_scale("RobustStandardizer", q75 - q25);

        debug!(
            "RobustStandardizer fitted on {} rows x {} columns",
            distribution.nrows(),
            distribution.ncols()
        );
        self.params = Some(Affine::new(median, scale));
        Ok(self)
    }

    fn transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        self.params.as_ref().ok_or(ScalerError::NotFitted)?.apply(data)
    }

    fn inverse_transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        self.params.as_ref().ok_or(ScalerError::NotFitted)?.invert(data)
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // Second column carries an outlier.
    fn create_test_data() -> Array2<f64> {
        array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0], [4.0, 8.0], [5.0, 100.0]]
    }

    #[test]
    fn test_robust_fit() {
        let mut scaler = RobustStandardizer::new();
        scaler.fit(&create_test_data()).unwrap();

        assert_eq!(scaler.median(), Some(&array![3.0, 6.0]));
        assert_eq!(scaler.scale(), Some(&array![2.0, 4.0]));
        assert_eq!(scaler.n_features(), Some(2));
    }

    #[test]
    fn test_robust_transform() {
        let mut scaler = RobustStandardizer::new();
        let scaled = scaler.fit_transform(&create_test_data()).unwrap();

        assert_eq!(scaled.column(0).to_vec(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(scaled[[4, 1]], 23.5);
    }

    #[test]
    fn test_robust_inverse_transform() {
        let data = create_test_data();
        let mut scaler = RobustStandardizer::new();
        let transformed = scaler.fit_transform(&data).unwrap();
        let recovered = scaler.inverse_transform(&transformed).unwrap();

        for (o, r) in data.iter().zip(recovered.iter()) {
            assert!((o - r).abs() < 1e-12, "Expected {}, got {}", o, r);
        }
    }

    #[test]
    fn test_robust_even_count_interpolates() {
        let mut scaler = RobustStandardizer::new();
        scaler.fit(&array![[4.0], [f64::NAN], [1.0], [3.0], [2.0]]).unwrap();

        assert_eq!(scaler.median(), Some(&array![2.5]));
        assert_eq!(scaler.scale(), Some(&array![1.5]));
    }

    #[test]
    fn test_robust_zero_iqr() {
        let mut scaler = RobustStandardizer::new();
        let scaled = scaler.fit_transform(&array![[7.0], [7.0], [7.0], [7.0], [50.0]]).unwrap();

        assert_eq!(scaler.scale(), Some(&array![f64::EPSILON]));
        assert!(scaled.iter().all(|v| v.is_finite()));
        assert_eq!(scaled[[0, 0]], 0.0);
    }
}
