// tests/formatter_tests.rs
mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use common::{random_iv, CIPHER, DATA, SECRET};
use iv_encryptor::formatter::{FormattedRecord, Formatter};
use iv_encryptor::{
    cipher_iv_length, Base64Formatter, CoreError, Encryptor, FormatterKind, HexFormatter,
    ParsingError,
};

/// Minimum behaviour every formatter must show
fn assert_formatter_conformance<F: Formatter + Copy + 'static>(formatter: F) {
    common::setup();
    let iv_length = cipher_iv_length(CIPHER).unwrap();

    // format → parse gives back exactly what went in
    for payload in [&b""[..], DATA, &[0u8; 1][..], &[0xffu8; 33][..]] {
        let iv = random_iv(CIPHER);
        let formatted = formatter.format(&iv, payload);
        let parsed = formatter.parse(&formatted, iv_length).unwrap();
        assert_eq!(
            parsed,
            FormattedRecord {
                iv: iv.clone(),
                payload: payload.to_vec(),
            }
        );
        assert_eq!(formatter.format(&iv, payload), formatted, "format must be deterministic");
    }

    // works behind an encryptor with auto-rotation left on
    let mut encryptor = Encryptor::new(SECRET, CIPHER).with_formatter(formatter);
    let output = encryptor.encrypt(DATA).unwrap();
    assert!(output.is_formatted());
    assert_eq!(encryptor.decrypt(&output).unwrap(), DATA);
}

#[test]
fn test_base64_conformance() {
    assert_formatter_conformance(Base64Formatter);
}

#[test]
fn test_hex_conformance() {
    assert_formatter_conformance(HexFormatter);
}

#[test]
fn test_base64_format() {
    let iv = random_iv(CIPHER);
    let expected = format!("{}:{}", STANDARD.encode(&iv), STANDARD.encode(DATA));
    assert_eq!(Base64Formatter.format(&iv, DATA), expected);
}

#[test]
fn test_base64_parse_ignores_iv_length() {
    let formatted = Base64Formatter.format(b"iv", b"payload");
    let parsed = Base64Formatter.parse(&formatted, 999).unwrap();
    assert_eq!(parsed.iv, b"iv");
    assert_eq!(parsed.payload, b"payload");
}

#[test]
fn test_base64_parse_rejects_wrong_part_count() {
    for (input, found) in [("abcdef", 1), ("not-two-colon-parts", 1), ("a:b:c", 3)] {
        let result = Base64Formatter.parse(input, 0);
        assert!(
            matches!(result, Err(ParsingError::PartCount { formatter: "base64", found: f }) if f == found),
            "{input} → {result:?}"
        );
    }

    let err = Base64Formatter.parse("abcdef", 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unable to parse the given data with the \"base64\" formatter: expected 2 parts, found 1"
    );
}

#[test]
fn test_base64_parse_rejects_malformed_segments() {
    assert!(matches!(
        Base64Formatter.parse("!!!!:AAAA", 16),
        Err(ParsingError::Base64(_))
    ));
    assert!(matches!(
        Base64Formatter.parse("AAAA:A", 16),
        Err(ParsingError::Base64(_))
    ));
}

#[test]
fn test_hex_format() {
    let iv = random_iv(CIPHER);
    let mut joined = iv.clone();
    joined.extend_from_slice(DATA);
    assert_eq!(HexFormatter.format(&iv, DATA), hex::encode(joined));
}

#[test]
fn test_hex_parse_rejects_invalid_hex() {
    assert!(matches!(
        HexFormatter.parse("not-hex!", 16),
        Err(ParsingError::Hex(_))
    ));
    // odd number of digits
    assert_eq!(
        HexFormatter.parse("abc", 1),
        Err(ParsingError::Hex(hex::FromHexError::OddLength))
    );
}

#[test]
fn test_hex_parse_rejects_input_shorter_than_iv() {
    let result = HexFormatter.parse("00ff", 16);
    assert_eq!(
        result,
        Err(ParsingError::Truncated {
            formatter: "hex",
            iv_length: 16,
            actual: 2,
        })
    );
}

#[test]
fn test_hex_parse_splits_at_iv_length() {
    let parsed = HexFormatter.parse("0102030405", 2).unwrap();
    assert_eq!(parsed.iv, [1, 2]);
    assert_eq!(parsed.payload, [3, 4, 5]);

    // uppercase digits are accepted, empty payload is fine
    let parsed = HexFormatter.parse("ABCD", 2).unwrap();
    assert_eq!(parsed.iv, [0xab, 0xcd]);
    assert!(parsed.payload.is_empty());
}

#[test]
fn test_formatter_kind_builds_matching_formatter() {
    assert_eq!(FormatterKind::Base64.build().name(), "base64");
    assert_eq!(FormatterKind::Hex.build().name(), "hex");
}

#[test]
fn test_shared_formatter_across_encryptors() {
    let shared = FormatterKind::Hex.build();

    let mut a = Encryptor::new(SECRET, CIPHER);
    let mut b = Encryptor::new(SECRET, CIPHER);
    a.set_formatter(Some(shared.clone()));
    b.set_formatter(Some(shared));

    let sealed = a.encrypt(DATA).unwrap();
    assert_eq!(b.decrypt(&sealed).unwrap(), DATA);
}

#[test]
fn test_decrypt_surfaces_hex_parsing_error() {
    let mut encryptor = Encryptor::new(SECRET, CIPHER).with_formatter(HexFormatter);
    assert!(matches!(
        encryptor.decrypt("zz"),
        Err(CoreError::Parsing(ParsingError::Hex(_)))
    ));
    assert!(encryptor.iv().is_none());
}
