/// Template used by `ParsedPhone::format_default` and `Display`.
pub const DEFAULT_FORMAT: &'static str = "+#CC#(#c#)###-##-##";

// Numbers of this length or shorter can not hold a country code together
// with an area code, so they are returned as a bare local number.
pub const MAX_LENGTH_FOR_LOCAL_ONLY: usize = 7;

pub const ASCII_DIGITS: &'static str = "0-9";

// International dialing prefix written in front of a country code.
pub const INTERNATIONAL_TRUNK_PREFIX: &'static str = "00";
// National trunk digit some countries dial before an area code.
pub const NATIONAL_TRUNK_PREFIX: &'static str = "0";

// Russian long distance prefix "8" is read as the country code "7".
pub const RUSSIAN_TRUNK_CODE: &'static str = "8";
pub const RUSSIAN_COUNTRY_CODE: &'static str = "7";

/// Placeholder of a single local number digit in a format template.
pub const DIGIT_PLACEHOLDER: char = '#';

// Groups which became empty because their code was absent.
pub const EMPTY_GROUPS: [&'static str; 2] = ["()", "[]"];
pub const DANGLING_SEPARATOR: &'static str = "- ";

pub const KEYPAD_LAYOUT: [(char, &'static str); 8] = [
    ('2', "abc"),
    ('3', "def"),
    ('4', "ghi"),
    ('5', "jkl"),
    ('6', "mno"),
    ('7', "pqrs"),
    ('8', "tuv"),
    ('9', "wxyz"),
];
