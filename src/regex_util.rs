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

use regex::Regex;

pub trait RegexFullMatch {
    /// Whether the leftmost match of the pattern covers the whole string.
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}
