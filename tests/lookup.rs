//! Integration tests over the committed tables.
//!
//! The interesting half cross-checks table contents against encoding_rs,
//! an independent implementation of the same legacy encodings. WHATWG
//! tables assign C1 control characters to bytes iconv treats as holes, so
//! the cross-check covers the bytes our tables mark valid; on those the
//! two sources must agree exactly. CP437 predates the WHATWG registry and
//! is exempt.

use codepage_d::{DecodeError, codepages, decode_byte, table_for};

/// Codepages whose assigned bytes encoding_rs can independently verify,
/// with their WHATWG labels.
const CROSS_CHECKED: &[(&str, &str)] = &[
    ("CP1250", "windows-1250"),
    ("CP1251", "windows-1251"),
    ("CP1252", "windows-1252"),
    ("ISO-8859-2", "iso-8859-2"),
    ("ISO-8859-15", "iso-8859-15"),
];

fn undefined_bytes(encoding: &str) -> Vec<u8> {
    (0x80..=0xFFu8)
        .filter(|&b| {
            matches!(
                decode_byte(encoding, b),
                Err(DecodeError::UndefinedCodepoint { .. })
            )
        })
        .collect()
}

#[test]
fn ascii_identity_holds_for_every_codepage() {
    for cp in codepages() {
        for byte in 0u8..0x80 {
            let exp = decode_byte(cp.name, byte).unwrap();
            assert_eq!(exp.as_bytes(), [byte], "{} byte 0x{:02X}", cp.name, byte);
        }
    }
}

#[test]
fn every_valid_entry_is_a_single_scalar() {
    for cp in codepages() {
        for byte in 0x80..=0xFFu8 {
            let Ok(exp) = decode_byte(cp.name, byte) else {
                continue;
            };
            assert_eq!(
                exp.as_str().chars().count(),
                1,
                "{} byte 0x{:02X} expanded to {:?}",
                cp.name,
                byte,
                exp.as_str()
            );
        }
    }
}

#[test]
fn valid_entries_match_encoding_rs() {
    for &(ours, label) in CROSS_CHECKED {
        let theirs = encoding_rs::Encoding::for_label(label.as_bytes()).unwrap();
        for byte in 0x80..=0xFFu8 {
            let Ok(exp) = decode_byte(ours, byte) else {
                continue;
            };
            let bytes = [byte];
            let (decoded, _, had_errors) = theirs.decode(&bytes);
            assert!(!had_errors, "{} byte 0x{:02X}", ours, byte);
            assert_eq!(
                exp.as_str(),
                decoded,
                "{} and {} disagree on byte 0x{:02X}",
                ours,
                label,
                byte
            );
        }
    }
}

#[test]
fn iso_codepages_have_no_holes() {
    assert!(undefined_bytes("ISO-8859-2").is_empty());
    assert!(undefined_bytes("ISO-8859-15").is_empty());
    assert!(undefined_bytes("CP437").is_empty());
}

#[test]
fn windows_codepages_have_known_holes() {
    assert_eq!(undefined_bytes("CP1250"), vec![0x81, 0x83, 0x88, 0x90, 0x98]);
    assert_eq!(undefined_bytes("CP1251"), vec![0x98]);
    assert_eq!(
        undefined_bytes("CP1252"),
        vec![0x81, 0x8D, 0x8F, 0x90, 0x9D]
    );
}

#[test]
fn euro_placement_differs_per_codepage() {
    // The euro moved between these encodings; identical neighbors would
    // mean the tables were not compiled independently.
    assert_eq!(decode_byte("CP1252", 0x80).unwrap().as_str(), "\u{20AC}");
    assert_eq!(decode_byte("ISO-8859-15", 0xA4).unwrap().as_str(), "\u{20AC}");
    assert_eq!(decode_byte("CP1252", 0xA4).unwrap().as_str(), "\u{A4}");
    assert_eq!(decode_byte("ISO-8859-2", 0xA4).unwrap().as_str(), "\u{A4}");
}

#[test]
fn unknown_encoding_is_a_recoverable_signal() {
    assert_eq!(
        decode_byte("CP9999", 200),
        Err(DecodeError::UnknownEncoding("CP9999".to_string()))
    );
    assert!(table_for("CP9999").is_none());
}

#[test]
fn raw_table_access_matches_decode_byte() {
    let table = table_for("CP1252").unwrap();
    assert_eq!(table[0], [0xE2, 0x82, 0xAC]);
    let exp = decode_byte("CP1252", 0x80).unwrap();
    assert_eq!(exp.as_bytes(), &table[0][..]);
}

#[test]
fn listing_and_directory_agree() {
    for cp in codepages() {
        let table = table_for(cp.name).unwrap();
        assert!(std::ptr::eq(table, cp.table));
    }
}
