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

pub mod csv;
pub mod error;
pub mod split;

pub use csv::CsvHeadersLoader;
pub use split::{SplitConfig, train_validation_split};

use ndarray::Array2;

/// A trait for loading a numeric feature matrix from a file.
///
/// Every column of the file is a feature; missing cells are represented as
/// `f64::NAN` so that the NaN-aware scalers can skip them when fitting.
///
/// # Notes
/// - The returned array has shape `(n_rows, n_features)`.
/// - Implementors decide how the file is parsed and which error type they report.
pub trait DataLoader {
    /// Loads a feature matrix of shape `(n_rows, n_features)` from `path`.
    fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Array2<f64>, Self::Error>;

    /// The error type returned by the `load` method.
    type Error: std::error::Error + 'static;
}

/// Loads data from a file using a specified `DataLoader` implementation.
///
/// # Type Parameters
/// - `T`: The type implementing `DataLoader`, determining the specific loading behavior
///   and error type.
/// - `P`: The path type, constrained to implement `AsRef<Path>`.
pub fn load_data<T: DataLoader, P: AsRef<std::path::Path>>(
    path: P,
) -> Result<Array2<f64>, T::Error> {
    T::load(path)
}
