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

use std::borrow::Cow;

use log::trace;

use super::{
    helper_constants::{
        INTERNATIONAL_TRUNK_PREFIX, NATIONAL_TRUNK_PREFIX, RUSSIAN_COUNTRY_CODE, RUSSIAN_TRUNK_CODE,
    },
    normalizer_regexps_and_mappings::REG_EXPS,
    parsed_phone::ParsedPhone,
};
use crate::{
    regex_util::RegexFullMatch, rule_table::CountryRule, string_util::trim_cow_prefix,
};

/// Reduces a raw phone string to its canonical digits.
///
/// Everything except ascii letters and digits is dropped. Letters are
/// translated with the telephone keypad when `convert_letters` is set and
/// dropped otherwise. A leading international prefix "00" is removed.
pub(super) fn prepare(phone: &str, convert_letters: bool) -> String {
    let alphanumeric = retain_chars(Cow::Borrowed(phone), char::is_ascii_alphanumeric);

    let digits = if convert_letters && !REG_EXPS.digits_pattern.full_match(&alphanumeric) {
        Cow::Owned(convert_keypad_letters(&alphanumeric))
    } else {
        retain_chars(alphanumeric, char::is_ascii_digit)
    };

    trim_cow_prefix(digits, INTERNATIONAL_TRUNK_PREFIX).into_owned()
}

/// Keeps only the chars accepted by `keep`, borrowing when nothing is dropped.
fn retain_chars<'a>(phone: Cow<'a, str>, keep: fn(&char) -> bool) -> Cow<'a, str> {
    if phone.chars().all(|c| keep(&c)) {
        return phone;
    }
    Cow::Owned(phone.chars().filter(keep).collect())
}

/// Replaces letters with keypad digits, case-insensitively.
pub(super) fn convert_keypad_letters(phone: &str) -> String {
    phone
        .chars()
        .map(|c| REG_EXPS.keypad_mappings.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Tries to explain `digits` with a single country rule.
///
/// Returns `None` when `digits` does not start with `country_code`;
/// every other outcome is a match, however short the remainder is.
pub(super) fn parse_with_rule(
    digits: &str,
    country_code: &str,
    rule: &CountryRule,
) -> Option<ParsedPhone> {
    let mut remainder = digits.strip_prefix(country_code)?;
    let country_code = if country_code == RUSSIAN_TRUNK_CODE {
        RUSSIAN_COUNTRY_CODE
    } else {
        country_code
    };

    let mut had_zero = false;
    if rule.zero() {
        if let Some(stripped) = remainder.strip_prefix(NATIONAL_TRUNK_PREFIX) {
            had_zero = true;
            remainder = stripped;
        }
    }

    let area_code = match rule.match_exception(remainder) {
        Some((exception, rest)) => {
            remainder = rest;
            let trunk = if had_zero { NATIONAL_TRUNK_PREFIX } else { "" };
            fast_cat::concat_str!(trunk, exception)
        }
        None => {
            let (code, rest) = rule.split_fixed_code(remainder);
            remainder = rest;
            code.to_owned()
        }
    };

    trace!(
        "Matched {} by country code {} ({}), area code {:?}",
        digits, country_code, rule.name(), area_code
    );
    Some(ParsedPhone::new(
        Some(country_code.to_owned()),
        Some(rule.name().to_owned()),
        (!area_code.is_empty()).then_some(area_code),
        remainder,
    ))
}
