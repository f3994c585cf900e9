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

use std::{fs, io, path::PathBuf};

use log::debug;

use super::RuleTable;
use crate::{
    interfaces::RuleTableProvider,
    phonenormalizer::{
        errors::{InvalidInputError, SourceError},
        normalizer_regexps_and_mappings::REG_EXPS,
    },
};

/// Json text of a codes table.
#[derive(Debug, Clone, Copy)]
pub struct JsonStr<'a>(pub &'a str);

/// Path of a local file containing a codes table in json.
#[derive(Debug, Clone)]
pub struct JsonFile(pub PathBuf);

/// Http(s) url of a codes table in json.
#[derive(Debug, Clone)]
pub struct RemoteJson(pub String);

/// A codes source given as a single string whose kind is guessed.
#[derive(Debug, Clone)]
pub enum TableSource<'a> {
    Json(JsonStr<'a>),
    Remote(RemoteJson),
    File(JsonFile),
}

impl<'a> TableSource<'a> {
    /// Guesses what the string is: json text first, then an http(s) url,
    /// and a file path otherwise.
    pub fn detect(source: &'a str) -> Result<Self, InvalidInputError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(InvalidInputError::EmptySource);
        }
        let detected = if serde_json::from_str::<serde::de::IgnoredAny>(source).is_ok() {
            TableSource::Json(JsonStr(source))
        } else if REG_EXPS.url_pattern.is_match(source) {
            TableSource::Remote(RemoteJson(source.to_owned()))
        } else {
            TableSource::File(JsonFile::new(source))
        };
        debug!("Codes source detected as {}", detected.kind());
        Ok(detected)
    }

    fn kind(&self) -> &'static str {
        match self {
            TableSource::Json(_) => "json",
            TableSource::Remote(_) => "remote",
            TableSource::File(_) => "file",
        }
    }
}

impl RuleTableProvider for TableSource<'_> {
    fn provide(&self) -> Result<RuleTable, SourceError> {
        match self {
            TableSource::Json(json) => json.provide(),
            TableSource::Remote(remote) => remote.provide(),
            TableSource::File(file) => file.provide(),
        }
    }
}

fn parse_payload(payload: &str, origin: &str) -> Result<RuleTable, SourceError> {
    if payload.trim().is_empty() {
        return Err(SourceError::EmptyPayload(origin.to_owned()));
    }
    RuleTable::from_json_str(payload)
}

impl RuleTableProvider for JsonStr<'_> {
    fn provide(&self) -> Result<RuleTable, SourceError> {
        parse_payload(self.0, "json string")
    }
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl RuleTableProvider for JsonFile {
    fn provide(&self) -> Result<RuleTable, SourceError> {
        let path = &self.0;
        let metadata = fs::metadata(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(path.clone()),
            _ => SourceError::Unreadable { path: path.clone(), source: err },
        })?;
        if metadata.is_dir() {
            return Err(SourceError::IsADirectory(path.clone()));
        }
        let payload = fs::read_to_string(path)
            .map_err(|source| SourceError::Unreadable { path: path.clone(), source })?;
        parse_payload(&payload, &path.display().to_string())
    }
}

impl RemoteJson {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl RuleTableProvider for RemoteJson {
    fn provide(&self) -> Result<RuleTable, SourceError> {
        let payload = fetch(&self.0)?;
        parse_payload(&payload, &self.0)
    }
}

#[cfg(feature = "remote")]
fn fetch(url: &str) -> Result<String, SourceError> {
    use std::time::Duration;

    /// HTTP request timeout.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    debug!("Fetching codes from {}", url);
    reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .and_then(|client| client.get(url).send())
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|err| SourceError::Remote { url: url.to_owned(), message: err.to_string() })
}

#[cfg(not(feature = "remote"))]
fn fetch(url: &str) -> Result<String, SourceError> {
    Err(SourceError::RemoteDisabled(url.to_owned()))
}
