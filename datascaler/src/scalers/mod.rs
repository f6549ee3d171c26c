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

//! Column-wise feature scalers.
//!
//! Scalers are fitted on a training distribution only and then applied to any
//! data with the same column layout (training, validation, test). Fitting on
//! validation data would leak its statistics into training, which is what the
//! split between [`DataScaler::fit`] and [`DataScaler::transform`] prevents.

mod any;
mod identity;
mod normalizer;
mod robust;
mod standardizer;

pub use any::{AnyScaler, ScalerKind};
pub use identity::IdentityScaler;
pub use normalizer::Normalizer;
pub use robust::RobustStandardizer;
pub use standardizer::Standardizer;

use log::debug;
use ndarray::{Array1, Array2};
use num_traits::Float;

use crate::errors::ScalerError;
use crate::shape::{prevent_zeros, zero_positions};

/// Shared contract of every scaler.
///
/// Stateful scalers move from unfitted to fitted exactly once, through
/// [`fit`](DataScaler::fit). Both transforms refuse to run before that with
/// [`ScalerError::NotFitted`], and a second `fit` is refused with
/// [`ScalerError::AlreadyFitted`].
pub trait DataScaler<T: Float> {
    /// Computes the scaling parameters from `distribution`
    /// (rows = samples, columns = features), ignoring NaN entries.
    fn fit(&mut self, distribution: &Array2<T>) -> Result<&mut Self, ScalerError>;

    fn transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError>;

    fn inverse_transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError>;

    fn is_fitted(&self) -> bool;

    fn fit_transform(&mut self, distribution: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        self.fit(distribution)?.transform(distribution)
    }
}

/// `(x - center) / scale` applied per column, with its exact inverse.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Affine<T> {
    center: Array1<T>,
    scale: Array1<T>,
}

impl<T: Float> Affine<T> {
    pub(crate) fn new(center: Array1<T>, scale: Array1<T>) -> Self {
        Affine { center, scale }
    }

    pub(crate) fn center(&self) -> &Array1<T> {
        &self.center
    }

    pub(crate) fn scale(&self) -> &Array1<T> {
        &self.scale
    }

    pub(crate) fn n_features(&self) -> usize {
        self.center.len()
    }

    pub(crate) fn apply(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        self.check_columns(data)?;
        Ok((data - &self.center) / &self.scale)
    }

    pub(crate) fn invert(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        self.check_columns(data)?;
        Ok(data * &self.scale + &self.center)
    }

    fn check_columns(&self, data: &Array2<T>) -> Result<(), ScalerError> {
        if data.ncols() != self.n_features() {
            return Err(ScalerError::DimensionMismatch {
                expected: self.n_features(),
                actual: data.ncols(),
            });
        }
        Ok(())
    }
}

/// Rejects a refit and a distribution with no rows or no columns.
pub(crate) fn check_fit<T>(fitted: bool, distribution: &Array2<T>) -> Result<(), ScalerError> {
    if fitted {
        return Err(ScalerError::AlreadyFitted);
    }
    if distribution.is_empty() {
        return Err(ScalerError::EmptyInput);
    }
    Ok(())
}

/// Zero-guards a per-column divisor, noting which columns were degenerate.
pub(crate) fn guarded_scale<T: Float>(scaler: &str, raw: Array1<T>) -> Array1<T> {
    let degenerate = zero_positions(&raw);
    if !degenerate.is_empty() {
        debug!("{}: zero scale in columns {:?}, substituting epsilon", scaler, degenerate);
    }
    prevent_zeros(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Axis, array};

    fn all_kinds() -> [ScalerKind; 4] {
        [
            ScalerKind::Identity,
            ScalerKind::Normalizer,
            ScalerKind::Standardizer,
            ScalerKind::RobustStandardizer,
        ]
    }

    fn distribution() -> Array2<f64> {
        array![[1.0, -2.0, 100.0], [4.0, 0.5, 110.0], [2.5, 3.0, 90.0], [8.0, 1.0, 500.0]]
    }

    #[test]
    fn test_round_trip_every_scaler() {
        let _ = env_logger::builder().is_test(true).try_init();

        let x = array![[0.0, 7.0, 95.0], [-3.0, 2.0, 1000.0], [5.5, -1.0, 101.0]];
        for kind in all_kinds() {
            let mut scaler = AnyScaler::<f64>::new(kind);
            scaler.fit(&distribution()).unwrap();
            let restored = scaler.inverse_transform(&scaler.transform(&x).unwrap()).unwrap();
            for (orig, back) in x.iter().zip(restored.iter()) {
                assert!((orig - back).abs() < 1e-9, "{}: expected {}, got {}", kind, orig, back);
            }
        }
    }

    #[test]
    fn test_zero_variance_column_stays_finite() {
        let constant = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0], [5.0, 4.0]];
        for kind in all_kinds() {
            let mut scaler = AnyScaler::<f64>::new(kind);
            let scaled = scaler.fit_transform(&constant).unwrap();
            assert!(scaled.iter().all(|v| v.is_finite()), "{}: non-finite output", kind);
            if kind != ScalerKind::Identity {
                assert_eq!(scaled.column(0), Array1::<f64>::zeros(4));
            }
        }
    }

    #[test]
    fn test_unfitted_scalers_refuse_to_transform() {
        let x = array![[1.0, 2.0]];
        for kind in all_kinds().into_iter().skip(1) {
            let scaler = AnyScaler::<f64>::new(kind);
            assert!(!scaler.is_fitted());
            assert_eq!(scaler.transform(&x), Err(ScalerError::NotFitted));
            assert_eq!(scaler.inverse_transform(&x), Err(ScalerError::NotFitted));
        }
    }

    #[test]
    fn test_unfitted_check_precedes_shape_check() {
        let scaler = Standardizer::<f64>::new();
        let empty = Array2::<f64>::zeros((0, 0));
        assert_eq!(scaler.transform(&empty), Err(ScalerError::NotFitted));
    }

    #[test]
    fn test_nan_rows_are_ignored_when_fitting() {
        let with_nan = array![
            [1.0, 10.0],
            [f64::NAN, 40.0],
            [3.0, f64::NAN],
            [2.0, 20.0],
            [7.0, 30.0]
        ];
        let x = array![[2.0, 25.0], [9.0, -5.0]];

        for kind in all_kinds() {
            let mut on_nan = AnyScaler::<f64>::new(kind);
            on_nan.fit(&with_nan).unwrap();

            // Drop each column's NaN rows independently, as the per-column reduction does.
            let mut left = AnyScaler::<f64>::new(kind);
            left.fit(&array![[1.0], [3.0], [2.0], [7.0]]).unwrap();
            let mut right = AnyScaler::<f64>::new(kind);
            right.fit(&array![[10.0], [40.0], [20.0], [30.0]]).unwrap();

            let scaled = on_nan.transform(&x).unwrap();
            let expected_left = left.transform(&x.select(Axis(1), &[0])).unwrap();
            let expected_right = right.transform(&x.select(Axis(1), &[1])).unwrap();
            assert_eq!(scaled.column(0), expected_left.column(0), "{}", kind);
            assert_eq!(scaled.column(1), expected_right.column(0), "{}", kind);
        }
    }

    #[test]
    fn test_refit_is_rejected() {
        for kind in all_kinds().into_iter().skip(1) {
            let mut scaler = AnyScaler::<f64>::new(kind);
            scaler.fit(&distribution()).unwrap();
            assert!(matches!(scaler.fit(&distribution()), Err(ScalerError::AlreadyFitted)));
        }
    }

    #[test]
    fn test_column_count_must_match_fit() {
        for kind in all_kinds().into_iter().skip(1) {
            let mut scaler = AnyScaler::<f64>::new(kind);
            scaler.fit(&distribution()).unwrap();
            let wrong = array![[1.0, 2.0]];
            assert_eq!(
                scaler.transform(&wrong),
                Err(ScalerError::DimensionMismatch { expected: 3, actual: 2 })
            );
            assert_eq!(
                scaler.inverse_transform(&wrong),
                Err(ScalerError::DimensionMismatch { expected: 3, actual: 2 })
            );
        }
    }

    #[test]
    fn test_empty_distribution_is_rejected() {
        let empty = Array2::<f64>::zeros((0, 3));
        for kind in all_kinds().into_iter().skip(1) {
            let mut scaler = AnyScaler::<f64>::new(kind);
            assert!(matches!(scaler.fit(&empty), Err(ScalerError::EmptyInput)));
            assert!(!scaler.is_fitted());
        }
    }

    #[test]
    fn test_all_nan_column_scales_to_nan() {
        let _ = env_logger::builder().is_test(true).try_init();

        let distribution = array![[0.0, f64::NAN], [2.0, f64::NAN]];
        for kind in all_kinds().into_iter().skip(1) {
            let mut scaler = AnyScaler::<f64>::new(kind);
            let scaled = scaler.fit_transform(&distribution).unwrap();
            assert!(scaler.is_fitted());

            let expected = match kind {
                ScalerKind::Normalizer => [0.0, 1.0],
                _ => [-1.0, 1.0],
            };
            assert_eq!(scaled.column(0).to_vec(), expected.to_vec(), "{}", kind);
            assert!(scaled.column(1).iter().all(|v| v.is_nan()), "{}", kind);

            let later = scaler.transform(&array![[1.0, 3.0]]).unwrap();
            assert!(later[[0, 0]].is_finite(), "{}", kind);
            assert!(later[[0, 1]].is_nan(), "{}", kind);
        }
    }

    #[test]
    fn test_scalers_are_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Normalizer<f64>>();
        assert_send_sync::<Standardizer<f32>>();
        assert_send_sync::<RobustStandardizer<f64>>();
        assert_send_sync::<AnyScaler<f64>>();
    }
}
