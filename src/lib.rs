//! Legacy single-byte codepage to UTF-8 decoding without a runtime
//! conversion library.
//!
//! For a fixed set of legacy 8-bit encodings (CP437, CP1250, CP1251,
//! CP1252, ISO-8859-2, ISO-8859-15) this crate carries a precompiled
//! 128-entry table giving the UTF-8 expansion of every byte value
//! 128..=255. Bytes below 128 are ASCII in every supported codepage and
//! decode as themselves. Lookups are plain table indexing: no conversion
//! engine, no allocation, no locking.
//!
//! The tables live in [`mod@tables`], a generated module produced ahead of
//! time by the table compiler (the `codepage-d` binary, behind the
//! `compiler` feature) from the platform `iconv` facility. Regenerating the
//! tables needs `iconv`; using them never does.
//!
//! # Example
//!
//! ```
//! use codepage_d::{decode_byte, DecodeError};
//!
//! let euro = decode_byte("CP1252", 0x80).unwrap();
//! assert_eq!(euro.as_bytes(), [0xE2, 0x82, 0xAC]);
//! assert_eq!(euro.as_str(), "\u{20AC}");
//!
//! // 0x81 has no assigned mapping in CP1252; substitution policy is yours.
//! assert!(matches!(
//!     decode_byte("CP1252", 0x81),
//!     Err(DecodeError::UndefinedCodepoint { .. })
//! ));
//! ```

mod lookup;
pub mod tables;

pub use lookup::{DecodeError, Utf8Bytes, codepages, decode, decode_byte, decode_lossy};
pub use tables::{Codepage, CodepageConvTable, table_for};

#[cfg(feature = "compiler")]
pub mod compiler;
