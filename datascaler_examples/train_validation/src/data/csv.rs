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

use crate::data::DataLoader;
use crate::data::error::CsvError;
use log::debug;
use ndarray::Array2;
use std::fs::File;
use std::path::Path;

/// Cells treated as missing values besides the empty cell. `NaN` spellings are
/// already understood by the float parser.
const MISSING_MARKERS: [&str; 2] = ["NA", "N/A"];

/// Loads a CSV file whose first row holds column names.
pub struct CsvHeadersLoader;

fn parse_cell(value: &str, row: usize, column: usize) -> Result<f64, CsvError> {
    let value = value.trim();
    if value.is_empty() || MISSING_MARKERS.iter().any(|m| value.eq_ignore_ascii_case(m)) {
        return Ok(f64::NAN);
    }
    value.parse::<f64>().map_err(|e| CsvError::InvalidNumeric {
        value: value.to_string(),
        row,
        column,
        source: e,
    })
}

fn load_csv<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, CsvError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(file);

    let mut values: Vec<f64> = Vec::new();
    let mut n_rows = 0;
    let mut n_cols = 0;
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i + 1;
        if i == 0 {
            n_cols = record.len();
        } else if record.len() != n_cols {
            return Err(CsvError::InconsistentColumns {
                row,
                actual: record.len(),
                expected: n_cols,
            });
        }
        for (column, field) in record.iter().enumerate() {
            values.push(parse_cell(field, row, column + 1)?);
        }
        n_rows += 1;
    }

    if n_rows == 0 || n_cols == 0 {
        return Err(CsvError::EmptyFile);
    }

    debug!("Loaded {} rows x {} columns from {:?}", n_rows, n_cols, path);
    Ok(Array2::from_shape_vec((n_rows, n_cols), values)?)
}

impl DataLoader for CsvHeadersLoader {
    type Error = CsvError;

    fn load<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, CsvError> {
        load_csv(path)
    }
}
