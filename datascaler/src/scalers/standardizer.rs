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
use crate::stats::{column_stat, nan_mean, nan_std};

/// Z-score scaling: `(x - mean) / std` per column.
///
/// `std` is the population standard deviation of the non-NaN entries, with a
/// zero deviation replaced by `T::epsilon()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardizer<T: Float> {
    params: Option<Affine<T>>,
}

impl<T: Float + FromPrimitive> Standardizer<T> {
    pub fn new() -> Self {
        Standardizer { params: None }
    }

    pub fn mean(&self) -> Option<&Array1<T>> {
        self.params.as_ref().map(Affine::center)
    }

    pub fn std(&self) -> Option<&Array1<T>> {
        self.params.as_ref().map(Affine::scale)
    }

    pub fn n_features(&self) -> Option<usize> {
        self.params.as_ref().map(Affine::n_features)
    }
}

impl<T: Float + FromPrimitive> Default for Standardizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FromPrimitive> DataScaler<T> for Standardizer<T> {
    fn fit(&mut self, distribution: &Array2<T>) -> Result<&mut Self, ScalerError> {
        check_fit(self.params.is_some(), distribution)?;
        let mean = column_stat(distribution, nan_mean);
        let std = guarded_scale("Standardizer", column_stat(distribution, nan_std));

        debug!(
            "Standardizer fitted on {} rows x {} columns",
            distribution.nrows(),
            distribution.ncols()
        );
        self.params = Some(Affine::new(mean, std));
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
