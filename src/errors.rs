/*
  Copyright 2020 Takashi Ogura

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
*/
use crate::link::DhParam;
use thiserror::Error;

/// The reason of the failure of any operation in this crate
///
/// All of them are usage errors. Nothing is retried and the state is kept
/// as it was before the failed call.
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown axis name, unknown parameter name or invalid limits
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The matrix or vector does not have the required dimensions
    #[error("shape error: expected {expected}, but got {rows}x{cols}")]
    ShapeError {
        expected: &'static str,
        rows: usize,
        cols: usize,
    },
    /// Joint value is out of the limits of the link
    #[error("joint value {value} is out of range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
    /// Index of the link is out of the chain
    #[error("link index {index} is out of range (number of links = {count})")]
    IndexOutOfRange { index: usize, count: usize },
    /// The parameter is fixed at construction
    #[error("{field} is read-only")]
    ReadOnlyField { field: DhParam },
    #[error("size mismatch: input = {input}, required = {required}")]
    SizeMismatch { input: usize, required: usize },
    #[error("failed to read robot description: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse robot description: {0}")]
    Parse(#[from] toml::de::Error),
}
