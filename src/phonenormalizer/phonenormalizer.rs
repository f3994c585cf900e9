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

use std::{path::Path, sync::Arc};

use log::{debug, trace, warn};
use rayon::prelude::*;

use super::{
    errors::{InvalidInputError, NormalizerError},
    helper_constants::MAX_LENGTH_FOR_LOCAL_ONLY,
    helper_functions::{parse_with_rule, prepare},
    parsed_phone::ParsedPhone,
};
use crate::{
    interfaces::RuleTableProvider,
    rule_table::{
        RuleTable,
        sources::{JsonFile, JsonStr, RemoteJson, TableSource},
    },
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, NormalizerError>;

/// Splits free-form phone numbers into country code, area code and local
/// number using an ordered table of country dialing rules.
///
/// The normalizer is a small configuration value: the table is shared
/// behind an `Arc` and replaced as a whole, so clones are cheap and a
/// normalizer can be used from many threads at once.
#[derive(Debug, Clone)]
pub struct PhoneNormalizer {
    /// Country rules in matching order.
    rule_table: Arc<RuleTable>,

    /// Whether letters are translated with the telephone keypad
    /// (`1-800-FLOWERS`) instead of being dropped.
    convert_letters: bool,
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::with_bundled_codes()
    }
}

impl PhoneNormalizer {
    pub fn new(rule_table: RuleTable) -> Self {
        Self::from_shared(Arc::new(rule_table))
    }

    /// Normalizer over the codes table compiled into the crate.
    pub fn with_bundled_codes() -> Self {
        Self::new(RuleTable::bundled().clone())
    }

    pub fn from_shared(rule_table: Arc<RuleTable>) -> Self {
        Self {
            rule_table,
            convert_letters: true,
        }
    }

    pub fn enable_letter_conversion(&mut self) -> &mut Self {
        self.convert_letters = true;
        self
    }

    pub fn disable_letter_conversion(&mut self) -> &mut Self {
        self.convert_letters = false;
        self
    }

    pub fn is_letter_conversion_enabled(&self) -> bool {
        self.convert_letters
    }

    pub fn is_letter_conversion_disabled(&self) -> bool {
        !self.convert_letters
    }

    pub fn rule_table(&self) -> &RuleTable {
        &self.rule_table
    }

    /// Snapshot of the table which stays valid after the normalizer
    /// switches to another one.
    pub fn shared_rule_table(&self) -> Arc<RuleTable> {
        Arc::clone(&self.rule_table)
    }

    /// Replaces the table. Emptiness is rejected when the table is built,
    /// so installing one cannot fail.
    pub fn set_rule_table(&mut self, rule_table: RuleTable) -> &mut Self {
        debug_assert!(!rule_table.is_empty());
        debug!("Installing codes table with {} countries", rule_table.len());
        self.rule_table = Arc::new(rule_table);
        self
    }

    /// Loads the table from any provider. On failure the current table is
    /// left untouched.
    pub fn load_codes_from<P>(&mut self, provider: &P) -> Result<&mut Self>
    where
        P: RuleTableProvider + ?Sized,
    {
        match provider.provide() {
            Ok(rule_table) => Ok(self.set_rule_table(rule_table)),
            Err(err) => {
                warn!("Could not load codes, keeping the current table: {}", err);
                Err(err.into())
            }
        }
    }

    /// Loads the table from a string which is either json text, an http(s)
    /// url or a path of a local json file.
    pub fn load_codes(&mut self, source: &str) -> Result<&mut Self> {
        let source = TableSource::detect(source)?;
        self.load_codes_from(&source)
    }

    pub fn load_codes_from_json_str(&mut self, json: &str) -> Result<&mut Self> {
        self.load_codes_from(&JsonStr(json))
    }

    pub fn load_codes_from_json_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        self.load_codes_from(&JsonFile::new(path.as_ref()))
    }

    /// Fetches the table over http(s). Requires the `remote` feature.
    pub fn load_codes_from_url(&mut self, url: &str) -> Result<&mut Self> {
        self.load_codes_from(&RemoteJson::new(url))
    }

    /// Canonical digits of a raw phone string, as matched by `normalize`.
    pub fn prepare(&self, phone: &str) -> String {
        prepare(phone.trim(), self.convert_letters)
    }

    /// Splits a phone number into its parts.
    ///
    /// Never fails: an empty input gives `ParsedPhone::default()` and a number
    /// no country rule explains keeps only its digits as the local number.
    pub fn normalize(&self, phone: &str) -> ParsedPhone {
        if phone.trim().is_empty() {
            return ParsedPhone::default();
        }
        let digits = self.prepare(phone);
        self.match_digits(digits)
    }

    fn match_digits(&self, digits: String) -> ParsedPhone {
        if digits.len() > MAX_LENGTH_FOR_LOCAL_ONLY {
            for (country_code, rule) in self.rule_table.iter() {
                trace!("Trying country code {} for {}", country_code, digits);
                if let Some(parsed) = parse_with_rule(&digits, country_code, rule) {
                    return parsed;
                }
            }
        }
        trace!("No country rule matched {}, keeping it as a local number", digits);
        ParsedPhone::unmatched(digits)
    }

    /// Normalizes every number of a non-empty batch, keeping their order.
    pub fn normalize_all<S: AsRef<str>>(&self, phones: &[S]) -> Result<Vec<ParsedPhone>> {
        if phones.is_empty() {
            return Err(InvalidInputError::EmptyBatch.into());
        }
        Ok(phones.iter().map(|phone| self.normalize(phone.as_ref())).collect())
    }

    /// Same as `normalize_all`, spreading the batch over the rayon pool.
    pub fn par_normalize_all<S>(&self, phones: &[S]) -> Result<Vec<ParsedPhone>>
    where
        S: AsRef<str> + Sync,
    {
        if phones.is_empty() {
            return Err(InvalidInputError::EmptyBatch.into());
        }
        Ok(phones.par_iter().map(|phone| self.normalize(phone.as_ref())).collect())
    }
}
