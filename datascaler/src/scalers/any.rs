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

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use num_traits::{Float, FromPrimitive};

use super::{DataScaler, IdentityScaler, Normalizer, RobustStandardizer, Standardizer};
use crate::errors::ScalerError;

/// Names the available scaling strategies, e.g. when chosen from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalerKind {
    Identity,
    Normalizer,
    Standardizer,
    RobustStandardizer,
}

impl fmt::Display for ScalerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalerKind::Identity => "identity",
            ScalerKind::Normalizer => "normalizer",
            ScalerKind::Standardizer => "standardizer",
            ScalerKind::RobustStandardizer => "robust",
        };
        f.write_str(name)
    }
}

impl FromStr for ScalerKind {
    type Err = ScalerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "none" => Ok(ScalerKind::Identity),
            "normalizer" | "minmax" => Ok(ScalerKind::Normalizer),
            "standardizer" | "standard" | "zscore" => Ok(ScalerKind::Standardizer),
            "robust" | "robust-standardizer" => Ok(ScalerKind::RobustStandardizer),
            _ => Err(ScalerError::UnknownScaler(s.to_string())),
        }
    }
}

/// One of the scalers, picked at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyScaler<T: Float> {
    Identity(IdentityScaler),
    Normalizer(Normalizer<T>),
    Standardizer(Standardizer<T>),
    RobustStandardizer(RobustStandardizer<T>),
}

impl<T: Float + FromPrimitive> AnyScaler<T> {
    pub fn new(kind: ScalerKind) -> Self {
        match kind {
            ScalerKind::Identity => AnyScaler::Identity(IdentityScaler::new()),
            ScalerKind::Normalizer => AnyScaler::Normalizer(Normalizer::new()),
            ScalerKind::Standardizer => AnyScaler::Standardizer(Standardizer::new()),
            ScalerKind::RobustStandardizer => {
                AnyScaler::RobustStandardizer(RobustStandardizer::new())
            }
        }
    }

    pub fn kind(&self) -> ScalerKind {
        match self {
            AnyScaler::Identity(_) => ScalerKind::Identity,
            AnyScaler::Normalizer(_) => ScalerKind::Normalizer,
            AnyScaler::Standardizer(_) => ScalerKind::Standardizer,
            AnyScaler::RobustStandardizer(_) => ScalerKind::RobustStandardizer,
        }
    }
}

impl<T: Float + FromPrimitive> From<ScalerKind> for AnyScaler<T> {
    fn from(kind: ScalerKind) -> Self {
        AnyScaler::new(kind)
    }
}

impl<T: Float + FromPrimitive> DataScaler<T> for AnyScaler<T> {
    fn fit(&mut self, distribution: &Array2<T>) -> Result<&mut Self, ScalerError> {
        match self {
            AnyScaler::Identity(s) => {
                s.fit(distribution)?;
            }
            AnyScaler::Normalizer(s) => {
                s.fit(distribution)?;
            }
            AnyScaler::Standardizer(s) => {
                s.fit(distribution)?;
            }
            AnyScaler::RobustStandardizer(s) => {
                s.fit(distribution)?;
            }
        }
        Ok(self)
    }

    fn transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        match self {
            AnyScaler::Identity(s) => s.transform(data),
            AnyScaler::Normalizer(s) => s.transform(data),
            AnyScaler::Standardizer(s) => s.transform(data),
            AnyScaler::RobustStandardizer(s) => s.transform(data),
        }
    }

    fn inverse_transform(&self, data: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        match self {
            AnyScaler::Identity(s) => s.inverse_transform(data),
            AnyScaler::Normalizer(s) => s.inverse_transform(data),
            AnyScaler::Standardizer(s) => s.inverse_transform(data),
            AnyScaler::RobustStandardizer(s) => s.inverse_transform(data),
        }
    }

    fn is_fitted(&self) -> bool {
        match self {
            AnyScaler::Identity(s) => DataScaler::<T>::is_fitted(s),
            AnyScaler::Normalizer(s) => s.is_fitted(),
            AnyScaler::Standardizer(s) => s.is_fitted(),
            AnyScaler::RobustStandardizer(s) => s.is_fitted(),
        }
    }
}
