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

use std::{fmt, sync::LazyLock};

use log::debug;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

use super::CountryRule;
use crate::{
    phonenormalizer::{
        errors::{InvalidInputError, SourceError},
        normalizer_regexps_and_mappings::REG_EXPS,
    },
    regex_util::RegexFullMatch,
};

/// Codes of countries and cities shipped with the crate.
const BUNDLED_CODES: &'static str = include_str!("../../resources/codes.json");

static BUNDLED_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    match RuleTable::from_json_str(BUNDLED_CODES) {
        Err(err) => {
            let err_message = format!("Could not parse compiled-in codes: {:?}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
        Ok(table) => table,
    }
});

/// Ordered mapping from a country calling code to its dialing rules.
///
/// Order is significant: numbers are matched against the first country
/// whose code they start with, so a table keeps entries exactly in the
/// order they were given (or appeared in a json document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    entries: Vec<(String, CountryRule)>,
}

impl RuleTable {
    /// Builds a validated table. A repeated country code replaces the rule
    /// given earlier but keeps its position.
    pub fn new<I, K>(entries: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = (K, CountryRule)>,
        K: Into<String>,
    {
        let mut ordered = OrderedEntries::default();
        for (country_code, rule) in entries {
            ordered.insert(country_code.into(), rule);
        }
        Self::from_entries(ordered)
    }

    /// Parses a codes json document, an object keyed by country code.
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let entries: OrderedEntries = serde_json::from_str(json)?;
        let table = Self::from_entries(entries)?;
        debug!("Parsed codes table with {} countries", table.len());
        Ok(table)
    }

    /// The table compiled into the crate from `resources/codes.json`.
    pub fn bundled() -> &'static RuleTable {
        &BUNDLED_TABLE
    }

    fn from_entries(entries: OrderedEntries) -> Result<Self, InvalidInputError> {
        if entries.0.is_empty() {
            return Err(InvalidInputError::EmptyRuleTable);
        }
        for (country_code, rule) in &entries.0 {
            validate_entry(country_code, rule)?;
        }
        Ok(Self { entries: entries.0 })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a table that passed validation; kept for symmetry
    /// with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in matching order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountryRule)> {
        self.entries.iter().map(|(code, rule)| (code.as_str(), rule))
    }

    pub fn get(&self, country_code: &str) -> Option<&CountryRule> {
        self.entries
            .iter()
            .find(|(code, _)| code == country_code)
            .map(|(_, rule)| rule)
    }

    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = (&'a str, &'a CountryRule);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a CountryRule)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn validate_entry(country_code: &str, rule: &CountryRule) -> Result<(), InvalidInputError> {
    if !REG_EXPS.non_empty_digits_pattern.full_match(country_code) {
        return Err(InvalidInputError::InvalidCountryCode(country_code.to_owned()));
    }
    if rule.name().trim().is_empty() {
        return Err(InvalidInputError::MissingCountryName(country_code.to_owned()));
    }
    if let Some(exception) = rule
        .exceptions()
        .find(|exception| !REG_EXPS.non_empty_digits_pattern.full_match(exception))
    {
        return Err(InvalidInputError::InvalidException {
            code: country_code.to_owned(),
            exception: exception.to_owned(),
        });
    }
    Ok(())
}

/// Unvalidated entries in document order.
#[derive(Default)]
struct OrderedEntries(Vec<(String, CountryRule)>);

impl OrderedEntries {
    fn insert(&mut self, country_code: String, rule: CountryRule) {
        if let Some(slot) = self.0.iter_mut().find(|(code, _)| *code == country_code) {
            slot.1 = rule;
        } else {
            self.0.push((country_code, rule));
        }
    }
}

struct OrderedEntriesVisitor;

impl<'de> Visitor<'de> for OrderedEntriesVisitor {
    type Value = OrderedEntries;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from country code to country rule")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut entries = OrderedEntries(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((country_code, rule)) = access.next_entry::<String, CountryRule>()? {
            entries.insert(country_code, rule);
        }
        Ok(entries)
    }
}

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedEntriesVisitor)
    }
}

impl<'de> Deserialize<'de> for RuleTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = OrderedEntries::deserialize(deserializer)?;
        RuleTable::from_entries(entries).map_err(de::Error::custom)
    }
}

impl Serialize for RuleTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (country_code, rule) in &self.entries {
            map.serialize_entry(country_code, rule)?;
        }
        map.end()
    }
}
