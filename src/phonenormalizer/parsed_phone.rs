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

use std::{borrow::Cow, fmt};

use serde::Serialize;
use strum::IntoEnumIterator;

use super::{
    enums::Placeholder,
    helper_constants::{DANGLING_SEPARATOR, DEFAULT_FORMAT, DIGIT_PLACEHOLDER, EMPTY_GROUPS},
    normalizer_regexps_and_mappings::REG_EXPS,
};
use crate::macros::owned_from_cow_or;

/// A phone number split into its parts.
///
/// A number which did not match any country keeps only `local_number`.
/// `Default` is the value for an empty input: every part absent and an
/// empty local number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPhone {
    country_code: Option<String>,
    country_name: Option<String>,
    area_code: Option<String>,
    local_number: String,
}

impl ParsedPhone {
    pub fn new(
        country_code: Option<String>,
        country_name: Option<String>,
        area_code: Option<String>,
        local_number: impl Into<String>,
    ) -> Self {
        Self {
            country_code,
            country_name,
            area_code,
            local_number: local_number.into(),
        }
    }

    /// Result of a number no country rule could explain.
    pub fn unmatched(local_number: impl Into<String>) -> Self {
        Self {
            local_number: local_number.into(),
            ..Default::default()
        }
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country_name.as_deref()
    }

    /// Code of the region, city or mobile operator.
    pub fn area_code(&self) -> Option<&str> {
        self.area_code.as_deref()
    }

    /// Subscriber number without any codes. May be empty.
    pub fn local_number(&self) -> &str {
        &self.local_number
    }

    /// Whether a country rule produced this result.
    pub fn is_matched(&self) -> bool {
        self.country_code.is_some()
    }

    fn placeholder_value(&self, placeholder: Placeholder) -> &str {
        let value = match placeholder {
            Placeholder::AreaCode => &self.area_code,
            Placeholder::CountryCode => &self.country_code,
            Placeholder::CountryName => &self.country_name,
        };
        value.as_deref().unwrap_or_default()
    }

    /// Renders the number into `template`.
    ///
    /// Named placeholders (`#c#`, `#CC#`, `#CN#`) are substituted first, then
    /// every remaining `#` takes the next digit of the local number, or a
    /// space once the digits run out. Finally whitespace runs are collapsed,
    /// groups left empty (`()`, `[]`) are dropped, a dangling `"- "` becomes
    /// a space and the result is trimmed.
    pub fn format(&self, template: &str) -> String {
        let mut substituted = Cow::Borrowed(template);
        for placeholder in Placeholder::iter() {
            let token: &str = placeholder.as_ref();
            if substituted.contains(token) {
                substituted = Cow::Owned(substituted.replace(token, self.placeholder_value(placeholder)));
            }
        }

        let mut local_digits = self.local_number.chars();
        let filled: String = substituted
            .chars()
            .map(|c| match c {
                DIGIT_PLACEHOLDER => local_digits.next().unwrap_or(' '),
                other => other,
            })
            .collect();

        let mut formatted = owned_from_cow_or!(
            REG_EXPS.whitespace_run_pattern.replace_all(&filled, " "),
            filled
        );
        for group in EMPTY_GROUPS {
            if formatted.contains(group) {
                formatted = formatted.replace(group, "");
            }
        }
        if formatted.contains(DANGLING_SEPARATOR) {
            formatted = formatted.replace(DANGLING_SEPARATOR, " ");
        }
        formatted.trim().to_owned()
    }

    /// Renders the number as `+7(903)123-45-67`.
    pub fn format_default(&self) -> String {
        self.format(DEFAULT_FORMAT)
    }
}

impl fmt::Display for ParsedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_default())
    }
}
