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

use std::{collections::BTreeSet, ops::RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::string_util::split_at_most;

/// Dialing rules of a single country calling code.
///
/// In a codes document it looks like
/// `{"name": "Russia", "zero": false, "exceptions": [495, 812], "code_length": 3}`
/// where everything except `name` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCountryRule", into = "RawCountryRule")]
pub struct CountryRule {
    name: String,
    zero: bool,
    exceptions: BTreeSet<String>,
    code_length: usize,
    /// Shortest and longest exception, cached once the set is known.
    exception_lengths: Option<RangeInclusive<usize>>,
}

/// Shape of a rule inside a codes document.
#[derive(Serialize, Deserialize)]
struct RawCountryRule {
    name: String,
    #[serde(default)]
    zero: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "exceptions_or_null")]
    exceptions: Vec<ExceptionCode>,
    #[serde(default)]
    code_length: usize,
}

/// Codes documents store exceptions either as json numbers or as strings.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ExceptionCode {
    Text(String),
    Number(u64),
}

fn exceptions_or_null<'de, D>(deserializer: D) -> Result<Vec<ExceptionCode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<ExceptionCode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<RawCountryRule> for CountryRule {
    fn from(raw: RawCountryRule) -> Self {
        let exceptions = raw.exceptions.into_iter().map(|code| match code {
            ExceptionCode::Text(text) => text,
            ExceptionCode::Number(number) => number.to_string(),
        });
        CountryRule::new(raw.name)
            .with_zero(raw.zero)
            .with_code_length(raw.code_length)
            .with_exceptions(exceptions)
    }
}

impl From<CountryRule> for RawCountryRule {
    fn from(rule: CountryRule) -> Self {
        Self {
            name: rule.name,
            zero: rule.zero,
            exceptions: rule.exceptions.into_iter().map(ExceptionCode::Text).collect(),
            code_length: rule.code_length,
        }
    }
}

impl CountryRule {
    /// Rule without trunk zero, exceptions and area code.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            zero: false,
            exceptions: BTreeSet::new(),
            code_length: 0,
            exception_lengths: None,
        }
    }

    /// Whether a "0" right after the country code is a trunk digit.
    pub fn with_zero(mut self, zero: bool) -> Self {
        self.zero = zero;
        self
    }

    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    /// Adds area codes of non-uniform length which are matched before
    /// the fixed `code_length` is applied.
    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions.extend(exceptions.into_iter().map(Into::into));
        self.exception_lengths = self
            .exceptions
            .iter()
            .map(|exception| exception.chars().count())
            .fold(None, |range: Option<RangeInclusive<usize>>, len| match range {
                None => Some(len..=len),
                Some(range) => Some(*range.start().min(&len)..=*range.end().max(&len)),
            });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zero(&self) -> bool {
        self.zero
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn exceptions(&self) -> impl Iterator<Item = &str> {
        self.exceptions.iter().map(String::as_str)
    }

    pub fn has_exceptions(&self) -> bool {
        !self.exceptions.is_empty()
    }

    /// Looks for the longest exception the remainder starts with, trying
    /// candidate lengths from the longest exception down to the shortest.
    ///
    /// A remainder shorter than a candidate length is compared as is.
    /// Returns the matched code and the rest of the remainder.
    pub(crate) fn match_exception<'a>(&self, remainder: &'a str) -> Option<(&'a str, &'a str)> {
        let lengths = self.exception_lengths.clone()?;
        lengths
            .rev()
            .map(|length| split_at_most(remainder, length))
            .find(|(candidate, _)| self.exceptions.contains(*candidate))
    }

    /// Splits the fixed-length area code off the remainder.
    pub(crate) fn split_fixed_code<'a>(&self, remainder: &'a str) -> (&'a str, &'a str) {
        split_at_most(remainder, self.code_length)
    }
}
