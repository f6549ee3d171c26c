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

use ndarray::Array2;
use num_traits::Float;

use super::DataScaler;
use crate::errors::ScalerError;

/// Pass-through scaler for callers that want no scaling but still expect a
/// [`DataScaler`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityScaler;

impl IdentityScaler {
    pub fn new() -> Self {
        IdentityScaler
    }
}

impl<T: Float> DataScaler<T> for IdentityScaler {
    fn fit(&mut self, _distribution: &Array2<T>) -> Result<&mut Self, ScalerError> {
        Ok(self)
    }

    fn transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        Ok(data.clone())
    }

    fn inverse_transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        Ok(data.clone())
    }

    fn is_fitted(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_identity_returns_input() {
        let distribution = array![[1.0, 2.0], [3.0, 4.0]];
        let x = array![[-7.5, f64::NAN, 1e12]];
        let mut scaler = IdentityScaler::new();
        let scaler = scaler.fit(&distribution).unwrap();

        let transformed = scaler.transform(&x).unwrap();
        let restored = scaler.inverse_transform(&x).unwrap();
        assert_eq!(transformed[[0, 0]], -7.5);
        assert!(transformed[[0, 1]].is_nan());
        assert_eq!(restored[[0, 2]], 1e12);
    }

    #[test]
    fn test_identity_fits_anything() {
        let mut scaler = IdentityScaler::new();
        let empty = Array2::<f32>::zeros((0, 0));
        assert!(scaler.fit(&empty).is_ok());
        assert!(scaler.fit(&empty).is_ok());
        assert!(DataScaler::<f32>::is_fitted(&scaler));
    }
}
