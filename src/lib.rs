mod interfaces;
mod phonenormalizer;
mod rule_table;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Small macros for the boilerplate places where the name of
/// the macro describes what is happening more clearly than
/// a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::RuleTableProvider;
pub use phonenormalizer::{
    DEFAULT_FORMAT, PHONE_NORMALIZER, Placeholder,
    errors::{InvalidInputError, NormalizerError, SourceError},
    parsed_phone::ParsedPhone,
    phonenormalizer::PhoneNormalizer,
};
pub use rule_table::{
    CountryRule, RuleTable,
    sources::{JsonFile, JsonStr, RemoteJson, TableSource},
};
