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

/// Strips prefix of given string Cow. Returns the cow untouched if the
/// prefix is not found.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn trim_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Cow<'a, str> {
    match cow {
        Cow::Borrowed(s) => Cow::Borrowed(s.strip_prefix(prefix).unwrap_or(s)),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
            }
            Cow::Owned(s)
        }
    }
}

/// Splits off at most `count` leading chars of `s`.
///
/// Unlike `str::split_at` never panics: if `s` is shorter than `count`
/// the whole string becomes the head and the tail is empty.
pub fn split_at_most(s: &str, count: usize) -> (&str, &str) {
    let boundary = s
        .char_indices()
        .nth(count)
        .map(|(index, _)| index)
        .unwrap_or(s.len());
    s.split_at(boundary)
}
