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
use crate::stats::{column_stat, nan_max, nan_min};

#[derive(Debug, Clone, PartialEq)]
struct MinMax<T> {
    max: Array1<T>,
    affine: Affine<T>,
}

/// Min-max scaling: `(x - min) / (max - min)` per column.
///
/// The fitted distribution maps onto `[0, 1]`. Later data outside the fitted
/// range lands outside `[0, 1]`, which is expected. A constant column gets a
/// zero-guarded range of `T::epsilon()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalizer<T: Float> {
    params: Option<MinMax<T>>,
}

impl<T: Float + FromPrimitive> Normalizer<T> {
    pub fn new() -> Self {
        Normalizer { params: None }
    }

    pub fn min(&self) -> Option<&Array1<T>> {
        self.params.as_ref().map(|p| p.affine.center())
    }

    pub fn max(&self) -> Option<&Array1<T>> {
        self.params.as_ref().map(|p| &p.max)
    }

    /// Zero-guarded `max - min`.
    pub fn scale(&self) -> Option<&Array1<T>> {
        self.params.as_ref().map(|p| p.affine.scale())
    }

    pub fn n_features(&self) -> Option<usize> {
        self.params.as_ref().map(|p| p.affine.n_features())
    }

    fn fitted(&self) -> Result<&Affine<T>, ScalerError> {
        self.params.as_ref().map(|p| &p.affine).ok_or(ScalerError::NotFitted)
    }
}

impl<T: Float + FromPrimitive> Default for Normalizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FromPrimitive> DataScaler<T> for Normalizer<T> {
    fn fit(&mut self, distribution: &Array2<T>) -> Result<&mut Self, ScalerError> {
        check_fit(self.params.is_some(), distribution)?;
        let min = column_stat(distribution, nan_min);
        let max = column_stat(distribution, nan_max);
        let scale = guarded_scale("Normalizer", &max - &min);

        debug!(
            "Normalizer fitted on {} rows x {} columns",
            distribution.nrows(),
            distribution.ncols()
        );
        self.params = Some(MinMax { max, affine: Affine::new(min, scale) });
        Ok(self)
    }

    fn transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        self.fitted()?.apply(data)
    }

    fn inverse_transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        self.fitted()?.invert(data)
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }
}
