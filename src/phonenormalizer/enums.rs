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

use strum::{AsRefStr, EnumIter};

/// Named placeholders of a format template.
///
/// Variants are declared in substitution order, so iterating them
/// replaces the area code first, then the country code and finally the
/// country name. Every remaining `#` of a template stands for a single
/// digit of the local number.
///
/// For example, `"+#CC# (#c#) ###-##-##"` formats Moscow's `4951234567`
/// as `+7 (495) 123-45-67`.
#[derive(Debug, EnumIter, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// **Area code.**
    /// Code of the region, city or mobile operator.
    #[strum(serialize = "#c#")]
    AreaCode,
    /// **Country calling code.**
    /// Written without the leading plus sign.
    #[strum(serialize = "#CC#")]
    CountryCode,
    /// **Country name.**
    /// As given by the codes table.
    #[strum(serialize = "#CN#")]
    CountryName,
}
