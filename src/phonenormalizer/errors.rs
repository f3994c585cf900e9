// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by configuration entry points before any parsing happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// A rule table must contain at least one country.
    #[error("Rule table must contain at least one country")]
    EmptyRuleTable,
    /// `normalize_all` was called without numbers.
    #[error("Batch of phone numbers must not be empty")]
    EmptyBatch,
    #[error("Country code must be a non-empty string of ascii digits, got `{0}`")]
    InvalidCountryCode(String),
    #[error("Country `{0}` has no name")]
    MissingCountryName(String),
    #[error("Country `{code}` has invalid area code exception `{exception}`")]
    InvalidException { code: String, exception: String },
    /// The string passed to source auto-detection is blank.
    #[error("Source of codes must contain a data")]
    EmptySource,
}

/// Failures of a rule table provider. None of them touches the table
/// which is already installed in a normalizer.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("File can not be a directory: {}", .0.display())]
    IsADirectory(PathBuf),
    #[error("Can not read the file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Not valid json: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Invalid codes table: {0}")]
    InvalidTable(#[from] InvalidInputError),
    /// The source answered, but with nothing in it.
    #[error("Empty payload received from {0}")]
    EmptyPayload(String),
    #[error("Failed to get a file on a remote server {url}: {message}")]
    Remote { url: String, message: String },
    #[error("Loading codes from {0} requires the `remote` feature")]
    RemoteDisabled(String),
}

/// Umbrella error of the fallible `PhoneNormalizer` entry points.
#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("{0}")]
    InvalidInput(#[from] InvalidInputError),
    #[error("{0}")]
    Source(#[from] SourceError),
}

impl NormalizerError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, NormalizerError::InvalidInput(_))
    }

    pub fn is_source_error(&self) -> bool {
        matches!(self, NormalizerError::Source(_))
    }
}
