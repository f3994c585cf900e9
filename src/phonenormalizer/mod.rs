mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenormalizer;
pub mod parsed_phone;
pub(crate) mod normalizer_regexps_and_mappings;

use std::sync::LazyLock;

pub use enums::Placeholder;
pub use helper_constants::DEFAULT_FORMAT;
use crate::phonenormalizer::phonenormalizer::PhoneNormalizer;

/// Normalizer over the bundled codes table with letter conversion enabled.
pub static PHONE_NORMALIZER: LazyLock<PhoneNormalizer> = LazyLock::new(|| {
    PhoneNormalizer::with_bundled_codes()
});
