//! Runtime lookup over the precompiled codepage tables.
//!
//! Pure table indexing against the generated [`crate::tables`] module. The
//! tables are `'static` data baked into the binary, so lookups never touch
//! a conversion library, never allocate on success, and are safe under
//! arbitrary concurrent readers.

use crate::tables::{self, Codepage, CodepageConvTable};

/// Errors reported by the lookup service.
///
/// Both variants are recoverable signals, never a crash condition: on
/// `UnknownEncoding` the caller is expected to fall back to a
/// general-purpose conversion path, on `UndefinedCodepoint` to apply its
/// own substitution policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No table is compiled under that name. Names are matched exactly and
    /// case sensitively against the original codepage name.
    UnknownEncoding(String),
    /// The byte has no assigned mapping in this codepage.
    UndefinedCodepoint {
        /// The codepage the byte was looked up in
        encoding: String,
        /// The unassigned byte value
        byte: u8,
    },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::UnknownEncoding(name) => {
                write!(f, "No compiled table for encoding '{}'", name)
            }
            DecodeError::UndefinedCodepoint { encoding, byte } => {
                write!(f, "Byte 0x{:02X} has no mapping in {}", byte, encoding)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// UTF-8 expansion of a single legacy byte: one to three bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Bytes {
    buf: [u8; 3],
    len: u8,
}

impl Utf8Bytes {
    fn identity(byte: u8) -> Self {
        Utf8Bytes {
            buf: [byte, 0, 0],
            len: 1,
        }
    }

    /// Reads a table row, trimming the trailing zero padding. `None` for
    /// the all-zero invalid marker.
    fn from_row(row: &[u8; 3]) -> Option<Self> {
        let len = row.iter().position(|&b| b == 0).unwrap_or(3);
        if len == 0 {
            return None;
        }
        Some(Utf8Bytes {
            buf: *row,
            len: len as u8,
        })
    }

    /// The expansion as raw UTF-8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// The expansion as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).expect("compiled tables hold valid UTF-8")
    }
}

/// Decodes one byte of `encoding` to its UTF-8 expansion.
///
/// Bytes below 128 are an identity mapping in every supported codepage and
/// succeed without consulting the table directory at all, so ASCII decodes
/// even under an encoding name that was never compiled.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownEncoding`] if no table is registered under
/// `encoding`, and [`DecodeError::UndefinedCodepoint`] if the byte has no
/// assigned mapping in that codepage.
pub fn decode_byte(encoding: &str, byte: u8) -> Result<Utf8Bytes, DecodeError> {
    if byte < 0x80 {
        return Ok(Utf8Bytes::identity(byte));
    }
    let table = lookup_table(encoding)?;
    expansion(table, byte).ok_or_else(|| DecodeError::UndefinedCodepoint {
        encoding: encoding.to_string(),
        byte,
    })
}

/// Decodes a whole buffer, failing on the first unassigned byte.
///
/// # Errors
///
/// Same as [`decode_byte`]; unlike the per-byte path, an unknown encoding
/// is an error even for pure-ASCII input.
pub fn decode(encoding: &str, bytes: &[u8]) -> Result<String, DecodeError> {
    let table = lookup_table(encoding)?;
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        if byte < 0x80 {
            out.push(byte as char);
        } else {
            let exp = expansion(table, byte).ok_or_else(|| DecodeError::UndefinedCodepoint {
                encoding: encoding.to_string(),
                byte,
            })?;
            out.push_str(exp.as_str());
        }
    }
    Ok(out)
}

/// Decodes a whole buffer, replacing unassigned bytes with U+FFFD.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownEncoding`] if no table is registered under
/// `encoding`.
pub fn decode_lossy(encoding: &str, bytes: &[u8]) -> Result<String, DecodeError> {
    let table = lookup_table(encoding)?;
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        if byte < 0x80 {
            out.push(byte as char);
        } else {
            match expansion(table, byte) {
                Some(exp) => out.push_str(exp.as_str()),
                None => out.push('\u{FFFD}'),
            }
        }
    }
    Ok(out)
}

/// The compiled codepages, in table order.
pub fn codepages() -> &'static [Codepage] {
    tables::CODEPAGES
}

fn lookup_table(encoding: &str) -> Result<&'static CodepageConvTable, DecodeError> {
    tables::table_for(encoding).ok_or_else(|| DecodeError::UnknownEncoding(encoding.to_string()))
}

fn expansion(table: &CodepageConvTable, byte: u8) -> Option<Utf8Bytes> {
    debug_assert!(byte >= 0x80);
    Utf8Bytes::from_row(&table[byte as usize - 0x80])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_identity() {
        for byte in 0u8..0x80 {
            let exp = decode_byte("CP1252", byte).unwrap();
            assert_eq!(exp.as_bytes(), [byte]);
        }
    }

    #[test]
    fn test_ascii_identity_without_table() {
        // The identity range never consults the table directory.
        let exp = decode_byte("CP9999", 0x41).unwrap();
        assert_eq!(exp.as_str(), "A");
    }

    #[test]
    fn test_cp1252_euro() {
        let exp = decode_byte("CP1252", 0x80).unwrap();
        assert_eq!(exp.as_bytes(), [0xE2, 0x82, 0xAC]);
        assert_eq!(exp.as_str(), "\u{20AC}");
    }

    #[test]
    fn test_cp1252_undefined_byte() {
        assert_eq!(
            decode_byte("CP1252", 0x81),
            Err(DecodeError::UndefinedCodepoint {
                encoding: "CP1252".to_string(),
                byte: 0x81,
            })
        );
    }

    #[test]
    fn test_iso_8859_15_euro() {
        // 0xA4 is the euro in ISO-8859-15 but the currency sign in its
        // neighbors, so the tables must really be per-encoding.
        let exp = decode_byte("ISO-8859-15", 0xA4).unwrap();
        assert_eq!(exp.as_bytes(), [0xE2, 0x82, 0xAC]);

        let neighbor = decode_byte("CP1252", 0xA4).unwrap();
        assert_eq!(neighbor.as_str(), "\u{A4}");
    }

    #[test]
    fn test_table_boundaries() {
        // First and last slot of the 128-entry range.
        assert_eq!(decode_byte("CP437", 0x80).unwrap().as_str(), "\u{C7}");
        assert_eq!(decode_byte("CP437", 0xFF).unwrap().as_str(), "\u{A0}");
    }

    #[test]
    fn test_two_byte_expansion_is_trimmed() {
        let exp = decode_byte("ISO-8859-2", 0xA0).unwrap();
        assert_eq!(exp.as_bytes().len(), 2);
        assert_eq!(exp.as_bytes(), [0xC2, 0xA0]);
    }

    #[test]
    fn test_unknown_encoding() {
        assert_eq!(
            decode_byte("CP9999", 200),
            Err(DecodeError::UnknownEncoding("CP9999".to_string()))
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(decode_byte("cp1252", 0x80).is_err());
        assert!(decode_byte("iso-8859-2", 0xA0).is_err());
    }

    #[test]
    fn test_decode_buffer() {
        // 0x9B is the cent sign in CP437.
        let text = decode("CP437", b"price: 5\x9B").unwrap();
        assert_eq!(text, "price: 5\u{A2}");
    }

    #[test]
    fn test_decode_buffer_strict_fails_on_hole() {
        assert_eq!(
            decode("CP1252", b"ok\x81"),
            Err(DecodeError::UndefinedCodepoint {
                encoding: "CP1252".to_string(),
                byte: 0x81,
            })
        );
    }

    #[test]
    fn test_decode_lossy_substitutes() {
        let text = decode_lossy("CP1252", b"a\x81b\x80").unwrap();
        assert_eq!(text, "a\u{FFFD}b\u{20AC}");
    }

    #[test]
    fn test_decode_unknown_encoding_even_for_ascii() {
        assert!(decode("CP9999", b"plain ascii").is_err());
    }

    #[test]
    fn test_codepages_listing() {
        let list = codepages();
        assert_eq!(list.len(), 6);
        assert_eq!(list[0].name, "CP437");
        assert!(list.iter().any(|cp| cp.name == "ISO-8859-15"));
        assert!(list.iter().all(|cp| !cp.comment.is_empty()));
    }
}
