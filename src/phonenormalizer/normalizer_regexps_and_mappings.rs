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

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use super::helper_constants::{ASCII_DIGITS, KEYPAD_LAYOUT};

pub(crate) static REG_EXPS: LazyLock<NormalizerRegExpsAndMappings> =
    LazyLock::new(NormalizerRegExpsAndMappings::new);

pub(crate) struct NormalizerRegExpsAndMappings {
    /// Ascii digits. Used with `full_match`, so the empty string is accepted.
    pub digits_pattern: Regex,

    /// Matches a non-empty run of ascii digits. Used to validate country
    /// codes and area code exceptions of a rule table.
    pub non_empty_digits_pattern: Regex,

    /// Any run of whitespace left in a formatted number after substitution.
    pub whitespace_run_pattern: Regex,

    /// A source string which looks like a http(s) url of a codes file.
    pub url_pattern: Regex,

    /// These mappings map a letter (both cases) to the telephone keypad digit
    /// that should replace it.
    pub keypad_mappings: HashMap<char, char>,
}

impl NormalizerRegExpsAndMappings {
    fn initialize_keypad_mappings(&mut self) {
        let mut keypad_map = HashMap::with_capacity(52);
        for (digit, letters) in KEYPAD_LAYOUT {
            for letter in letters.chars() {
                keypad_map.insert(letter, digit);
                keypad_map.insert(letter.to_ascii_uppercase(), digit);
            }
        }
        self.keypad_mappings = keypad_map;
    }

    pub fn new() -> Self {
        let mut instance = Self {
            digits_pattern: Regex::new(&format!("[{}]*", ASCII_DIGITS)).unwrap(),
            non_empty_digits_pattern: Regex::new(&format!("[{}]+", ASCII_DIGITS)).unwrap(),
            whitespace_run_pattern: Regex::new(r"\s+").unwrap(),
            url_pattern: Regex::new(r"(?i)^https?://\S+$").unwrap(),
            keypad_mappings: Default::default(),
        };
        instance.initialize_keypad_mappings();
        instance
    }
}
