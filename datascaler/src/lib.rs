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

//! Leakage-free feature scaling over `ndarray`.
//!
//! Fit a scaler on the training distribution, then transform training,
//! validation and test data with the same parameters:
//!
//! ```
//! use datascaler::{DataScaler, Normalizer};
//! use ndarray::array;
//!
//! let train = array![[0.0, 10.0], [1.0, 20.0], [2.0, 30.0]];
//! let mut scaler = Normalizer::new();
//! scaler.fit(&train)?;
//!
//! let scaled = scaler.transform(&array![[1.0, 20.0]])?;
//! assert_eq!(scaled, array![[0.5, 0.5]]);
//! assert_eq!(scaler.inverse_transform(&scaled)?, array![[1.0, 20.0]]);
//! # Ok::<(), datascaler::ScalerError>(())
//! ```

pub mod errors;
pub mod scalers;
pub mod shape;
pub mod stats;

pub use errors::ScalerError;
pub use scalers::{
    AnyScaler, DataScaler, IdentityScaler, Normalizer, RobustStandardizer, ScalerKind,
    Standardizer,
};
pub use shape::prevent_zeros;
