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

use thiserror::Error;

/// Errors raised by the scalers in [`crate::scalers`].
///
/// Every variant is returned before any arithmetic takes place, so a failed
/// call never leaves partially transformed output behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalerError {
    #[error("cannot transform data, you must call .fit(distribution) first")]
    NotFitted,

    #[error("scaler is already fitted, construct a new instance to fit another distribution")]
    AlreadyFitted,

    #[error("Input data is empty")]
    EmptyInput,

    #[error("Dimension mismatch: expected {expected} columns, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Unknown scaler '{0}'")]
    UnknownScaler(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_fitted_message_names_fit() {
        let message = ScalerError::NotFitted.to_string();
        assert!(message.contains(".fit(distribution)"), "Unexpected message: {}", message);
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = ScalerError::DimensionMismatch { expected: 2, actual: 3 };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 2 columns, got 3");
    }
}
