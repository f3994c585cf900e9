use std::fs;

use crate::{
    CountryRule, InvalidInputError, NormalizerError, PHONE_NORMALIZER, ParsedPhone,
    PhoneNormalizer, RuleTable, SourceError,
};

use super::{
    country_code::CountryCode,
    test_codes::{get_normalizer, get_test_table, init_logger},
};

fn assert_parts(
    parsed: &ParsedPhone,
    country_code: &str,
    country_name: &str,
    area_code: Option<&str>,
    local_number: &str,
) {
    assert_eq!(parsed.country_code(), Some(country_code));
    assert_eq!(parsed.country_name(), Some(country_name));
    assert_eq!(parsed.area_code(), area_code);
    assert_eq!(parsed.local_number(), local_number);
}

#[test]
fn empty_input_gives_all_absent_result() {
    let normalizer = get_normalizer();
    for input in ["", "   ", "\t\n"] {
        let parsed = normalizer.normalize(input);
        assert_eq!(parsed, ParsedPhone::default());
        assert!(!parsed.is_matched());
    }
    // nothing but punctuation
    assert_eq!(normalizer.normalize("+() -"), ParsedPhone::default());
}

#[test]
fn short_numbers_are_kept_as_local() {
    let normalizer = get_normalizer();

    // seven digits can not hold a country code with an area code
    let parsed = normalizer.normalize("123-45-67");
    assert_eq!(parsed, ParsedPhone::unmatched("1234567"));
    assert_eq!(parsed.country_code(), None);
    assert_eq!(parsed.country_name(), None);
    assert_eq!(parsed.area_code(), None);

    // would match "1" if it were one digit longer
    assert_eq!(normalizer.normalize("+1 555 123"), ParsedPhone::unmatched("1555123"));
    assert_parts(&normalizer.normalize("12345678"), CountryCode::us(), "USA", Some("234"), "5678");
}

#[test]
fn parses_number_with_fixed_area_code() {
    let normalizer = get_normalizer();
    assert_eq!(normalizer.prepare("+7(903)123-45-67"), "79031234567");

    let parsed = normalizer.normalize("+7(903)123-45-67");
    assert!(parsed.is_matched());
    assert_parts(&parsed, CountryCode::ru(), "Russia", Some("903"), "1234567");
}

#[test]
fn russian_trunk_code_is_read_as_country_code_seven() {
    let normalizer = get_normalizer();
    let parsed = normalizer.normalize("8 (903) 123-45-67");
    assert_ne!(parsed.country_code(), Some(CountryCode::ru_trunk()));
    assert_parts(&parsed, CountryCode::ru(), "Russia", Some("903"), "1234567");
}

#[test]
fn longest_exception_is_tried_first() {
    let normalizer = get_normalizer();

    assert_parts(
        &normalizer.normalize("+7 4950 123-45-67"),
        CountryCode::ru(), "Russia", Some("4950"), "1234567",
    );
    assert_parts(
        &normalizer.normalize("+7 495 123-45-67"),
        CountryCode::ru(), "Russia", Some("495"), "1234567",
    );
}

#[test]
fn trunk_zero_is_kept_in_exception_area_code() {
    let normalizer = get_normalizer();

    assert_parts(
        &normalizer.normalize("+7 (0495) 123-45-67"),
        CountryCode::ru(), "Russia", Some("0495"), "1234567",
    );
    // only an exception carries the zero, a fixed length code does not
    assert_parts(
        &normalizer.normalize("+380 (067) 123-45-67"),
        CountryCode::ua(), "Ukraine", Some("67"), "1234567",
    );
    assert_parts(
        &normalizer.normalize("+380 (044) 123-45-67"),
        CountryCode::ua(), "Ukraine", Some("044"), "1234567",
    );
}

#[test]
fn international_prefix_is_removed() {
    let normalizer = get_normalizer();
    assert_eq!(normalizer.prepare("00 44 20 7946 0958"), "442079460958");
    assert_parts(
        &normalizer.normalize("00 44 20 7946 0958"),
        CountryCode::gb(), "United Kingdom", Some("20"), "79460958",
    );
    assert_parts(
        &normalizer.normalize("+44 (0) 121 496 0000"),
        CountryCode::gb(), "United Kingdom", Some("0121"), "4960000",
    );
}

#[test]
fn letters_follow_the_keypad() {
    let mut normalizer = get_normalizer();
    assert!(normalizer.is_letter_conversion_enabled());

    assert_eq!(normalizer.prepare("1-800-FLOWERS"), "18003569377");
    assert_eq!(normalizer.prepare("1-800-flowers"), "18003569377");
    assert_eq!(normalizer.prepare("pqrs wxyz"), "77779999");
    assert_parts(&normalizer.normalize("1-800-FLOWERS"), CountryCode::us(), "USA", Some("800"), "3569377");

    normalizer.disable_letter_conversion();
    assert!(normalizer.is_letter_conversion_disabled());
    assert!(!normalizer.is_letter_conversion_enabled());
    assert_eq!(normalizer.prepare("1-800-FLOWERS"), "1800");
    assert_eq!(normalizer.normalize("1-800-FLOWERS"), ParsedPhone::unmatched("1800"));

    normalizer.enable_letter_conversion().disable_letter_conversion().enable_letter_conversion();
    assert!(normalizer.is_letter_conversion_enabled());
}

#[test]
fn prepare_is_idempotent() {
    let normalizer = get_normalizer();
    for input in [
        "+7(903)123-45-67",
        "00 44 20 7946 0958",
        "1-800-FLOWERS",
        "  tel: 8 (800) 555-35-35 ",
        "",
    ] {
        let prepared = normalizer.prepare(input);
        assert_eq!(normalizer.prepare(&prepared), prepared, "input {input:?}");
    }
}

#[test]
fn unmatched_number_keeps_all_digits() {
    let normalizer = get_normalizer();
    assert_eq!(
        normalizer.normalize("+99 (123) 456-78-90"),
        ParsedPhone::unmatched("991234567890"),
    );
}

#[test]
fn short_remainder_is_truncated_not_rejected() {
    init_logger();
    let table = RuleTable::new([("1", CountryRule::new("USA").with_code_length(10))]).unwrap();
    let normalizer = PhoneNormalizer::new(table);

    assert_parts(&normalizer.normalize("+1 555 123 4"), CountryCode::us(), "USA", Some("5551234"), "");
}

#[test]
fn first_matching_country_in_table_order_wins() {
    init_logger();
    let usa = CountryRule::new("USA").with_code_length(3);
    let other = CountryRule::new("Elsewhere").with_code_length(2);

    let usa_first = PhoneNormalizer::new(
        RuleTable::new([("1", usa.clone()), ("12", other.clone())]).unwrap(),
    );
    let other_first = PhoneNormalizer::new(RuleTable::new([("12", other), ("1", usa)]).unwrap());

    let number = "12345678901";
    assert_parts(&usa_first.normalize(number), "1", "USA", Some("234"), "5678901");
    assert_parts(&other_first.normalize(number), "12", "Elsewhere", Some("34"), "5678901");
}

#[test]
fn leading_zero_of_country_code_is_significant() {
    init_logger();
    let table = RuleTable::new([
        ("07", CountryRule::new("Zero Seven").with_code_length(2)),
        ("7", CountryRule::new("Russia").with_code_length(3)),
    ]).unwrap();
    let normalizer = PhoneNormalizer::new(table);

    assert_parts(&normalizer.normalize("0712345678"), "07", "Zero Seven", Some("12"), "345678");
    assert_parts(&normalizer.normalize("7123456789"), CountryCode::ru(), "Russia", Some("123"), "456789");
}

#[test]
fn zero_code_length_gives_no_area_code() {
    init_logger();
    let table = RuleTable::new([("372", CountryRule::new("Estonia"))]).unwrap();
    let normalizer = PhoneNormalizer::new(table);
    assert_parts(&normalizer.normalize("+372 5123 4567"), "372", "Estonia", None, "51234567");
}

#[test]
fn normalize_all_rejects_empty_batch() {
    let normalizer = get_normalizer();
    let err = normalizer.normalize_all::<&str>(&[]).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(err, NormalizerError::InvalidInput(InvalidInputError::EmptyBatch)));

    let err = normalizer.par_normalize_all::<String>(&[]).unwrap_err();
    assert!(matches!(err, NormalizerError::InvalidInput(InvalidInputError::EmptyBatch)));
}

#[test]
fn normalize_all_keeps_input_order() {
    let normalizer = get_normalizer();
    let phones = vec![
        "+7(903)123-45-67".to_owned(),
        "123-45-67".to_owned(),
        String::new(),
        "00 44 20 7946 0958".to_owned(),
    ];

    let parsed = normalizer.normalize_all(&phones).unwrap();
    assert_eq!(parsed.len(), phones.len());
    for (parsed, phone) in parsed.iter().zip(&phones) {
        assert_eq!(*parsed, normalizer.normalize(phone));
    }

    assert_eq!(normalizer.par_normalize_all(&phones).unwrap(), parsed);
}

#[test]
fn normalizer_is_shareable_between_threads() {
    let normalizer = get_normalizer();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| normalizer.normalize("+7(903)123-45-67")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().area_code(), Some("903"));
        }
    });
}

#[test]
fn failed_loads_keep_current_table() {
    let mut normalizer = get_normalizer();
    let before = normalizer.shared_rule_table();

    let err = normalizer.load_codes_from_json_str("{}").unwrap_err();
    assert!(matches!(
        err,
        NormalizerError::Source(SourceError::InvalidTable(InvalidInputError::EmptyRuleTable))
    ));

    let err = normalizer.load_codes_from_json_str("{\"7\": ").unwrap_err();
    assert!(matches!(err, NormalizerError::Source(SourceError::MalformedJson(_))));

    let err = normalizer.load_codes_from_json_str("").unwrap_err();
    assert!(matches!(err, NormalizerError::Source(SourceError::EmptyPayload(_))));

    let err = normalizer.load_codes("   ").unwrap_err();
    assert!(matches!(err, NormalizerError::InvalidInput(InvalidInputError::EmptySource)));

    assert_eq!(*normalizer.rule_table(), *before);
    assert_parts(
        &normalizer.normalize("+7(903)123-45-67"),
        CountryCode::ru(), "Russia", Some("903"), "1234567",
    );
}

#[test]
fn set_rule_table_installs_and_chains() {
    let mut normalizer = get_normalizer();
    let table = RuleTable::new([("49", CountryRule::new("Germany").with_code_length(2))]).unwrap();

    normalizer.set_rule_table(table.clone()).disable_letter_conversion();
    assert_eq!(*normalizer.rule_table(), table);
    assert!(normalizer.is_letter_conversion_disabled());

    // an empty table never reaches the setter
    assert_eq!(
        RuleTable::new(Vec::<(String, CountryRule)>::new()).unwrap_err(),
        InvalidInputError::EmptyRuleTable
    );
}

#[test]
fn replacing_table_does_not_affect_snapshots() {
    let mut normalizer = get_normalizer();
    let snapshot = normalizer.shared_rule_table();
    let copy = normalizer.clone();

    normalizer
        .load_codes_from_json_str(r#"{"49": {"name": "Germany", "zero": true, "exceptions": [30]}}"#)
        .unwrap();

    assert_eq!(normalizer.rule_table().len(), 1);
    assert_eq!(*snapshot, get_test_table());
    assert_eq!(*copy.rule_table(), get_test_table());
    assert_parts(&normalizer.normalize("+49 (030) 1234567"), CountryCode::de(), "Germany", Some("030"), "1234567");
    assert!(!copy.normalize("+49 (030) 1234567").is_matched());
}

#[test]
fn loads_codes_from_file() {
    let mut normalizer = get_normalizer();
    let dir = tempfile::TempDir::new().unwrap();

    let codes_path = dir.path().join("codes.json");
    fs::write(&codes_path, r#"{"49": {"name": "Germany", "zero": true, "exceptions": [30, 89]}}"#).unwrap();
    normalizer.load_codes_from_json_file(&codes_path).unwrap();
    assert_eq!(normalizer.rule_table().country_codes().collect::<Vec<_>>(), vec!["49"]);

    // auto-detected as a path
    let other_path = dir.path().join("other.json");
    fs::write(&other_path, super::test_codes::TEST_CODES).unwrap();
    normalizer.load_codes(other_path.to_str().unwrap()).unwrap();
    assert_eq!(*normalizer.rule_table(), get_test_table());
}

#[test]
fn file_source_errors_are_reported() {
    let mut normalizer = get_normalizer();
    let dir = tempfile::TempDir::new().unwrap();

    let err = normalizer.load_codes_from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, NormalizerError::Source(SourceError::NotFound(_))));

    let err = normalizer.load_codes_from_json_file(dir.path()).unwrap_err();
    assert!(matches!(err, NormalizerError::Source(SourceError::IsADirectory(_))));

    let empty_path = dir.path().join("empty.json");
    fs::write(&empty_path, "").unwrap();
    let err = normalizer.load_codes_from_json_file(&empty_path).unwrap_err();
    assert!(err.is_source_error());
    assert!(matches!(err, NormalizerError::Source(SourceError::EmptyPayload(_))));

    let binary_path = dir.path().join("binary.json");
    fs::write(&binary_path, [0xff, 0xfe]).unwrap();
    let err = normalizer.load_codes_from_json_file(&binary_path).unwrap_err();
    assert!(matches!(err, NormalizerError::Source(SourceError::Unreadable { .. })));

    assert_eq!(*normalizer.rule_table(), get_test_table());
}

#[cfg(not(feature = "remote"))]
#[test]
fn remote_codes_need_feature() {
    let mut normalizer = get_normalizer();
    let err = normalizer.load_codes("https://example.com/codes.json").unwrap_err();
    assert!(matches!(err, NormalizerError::Source(SourceError::RemoteDisabled(_))));
    assert_eq!(*normalizer.rule_table(), get_test_table());
}

/// Serves a single http response on a local port and returns its url.
#[cfg(feature = "remote")]
fn serve_once(status: &str, body: &str) -> String {
    use std::{
        io::{Read, Write},
        net::TcpListener,
    };

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/codes.json", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut buf).unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        stream.write_all(response.as_bytes()).unwrap();
    });
    url
}

#[cfg(feature = "remote")]
#[test]
fn loads_codes_from_url() {
    let mut normalizer = get_normalizer();

    let err = normalizer.load_codes(&serve_once("404 Not Found", "")).unwrap_err();
    assert!(matches!(err, NormalizerError::Source(SourceError::Remote { .. })));
    assert_eq!(*normalizer.rule_table(), get_test_table());

    let err = normalizer.load_codes_from_url(&serve_once("200 OK", "")).unwrap_err();
    assert!(matches!(err, NormalizerError::Source(SourceError::EmptyPayload(_))));
    assert_eq!(*normalizer.rule_table(), get_test_table());

    let codes = r#"{"49": {"name": "Germany", "zero": true, "exceptions": [30]}}"#;
    normalizer.load_codes(&serve_once("200 OK", codes)).unwrap();
    assert_eq!(normalizer.rule_table().country_codes().collect::<Vec<_>>(), vec!["49"]);
    assert_parts(
        &normalizer.normalize("+49 (030) 1234567"),
        CountryCode::de(), "Germany", Some("030"), "1234567",
    );
}

#[test]
fn bundled_codes_parse_common_numbers() {
    init_logger();
    assert!(PHONE_NORMALIZER.is_letter_conversion_enabled());

    assert_parts(
        &PHONE_NORMALIZER.normalize("+7 (903) 123-45-67"),
        CountryCode::ru(), "Russia", Some("903"), "1234567",
    );
    assert_parts(
        &PHONE_NORMALIZER.normalize("8 (3812) 12-34-56"),
        CountryCode::ru(), "Russia", Some("3812"), "123456",
    );
    assert_parts(
        &PHONE_NORMALIZER.normalize("+49 (030) 1234567"),
        CountryCode::de(), "Germany", Some("030"), "1234567",
    );
    assert_parts(
        &PHONE_NORMALIZER.normalize("+44 20 7946 0958"),
        CountryCode::gb(), "United Kingdom", Some("20"), "79460958",
    );
    assert_eq!(PhoneNormalizer::default().rule_table(), RuleTable::bundled());
}
