//! Ahead-of-time table compiler.
//!
//! Derives, for each configured codepage, the 128-entry UTF-8 expansion
//! table consumed by the runtime lookup, using a general-purpose conversion
//! backend as ground truth. This runs only when the generated tables module
//! is regenerated; the lookup path never touches a conversion backend.

mod codegen;
mod config;
mod iconv;

pub use codegen::{launder, render_tables_module};
pub use config::{CodepageConfig, CodepageSet};
pub use iconv::Iconv;

use rayon::prelude::*;
use std::io;

use crate::tables::CodepageConvTable;

/// Result of compiling one codepage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTable {
    /// Original codepage name, the runtime lookup key
    pub name: String,
    /// Description carried into the generated module unchanged
    pub comment: String,
    /// One row per byte value 128..=255, zero padded; all-zero = unassigned
    pub entries: CodepageConvTable,
}

/// Errors that abort a compile run.
///
/// Every variant is fatal: the artifact is written only when all configured
/// codepages compiled cleanly, so a partial or corrupt table can never
/// reach the runtime lookup.
#[derive(Debug)]
pub enum CompileError {
    /// The conversion backend cannot convert from this encoding at all.
    UnsupportedEncoding { encoding: String },
    /// A byte below 128 did not round-trip to itself. The codepage list is
    /// inconsistent with the fixed ASCII-identity table model.
    AsciiInvariantViolation {
        encoding: String,
        byte: u8,
        output: Vec<u8>,
    },
    /// A byte expanded to more than three UTF-8 bytes, breaking the
    /// fixed-width row model.
    ExpansionTooLong {
        encoding: String,
        byte: u8,
        output: Vec<u8>,
    },
    /// The conversion backend itself failed mid-run.
    Converter {
        encoding: String,
        source: io::Error,
    },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::UnsupportedEncoding { encoding } => {
                write!(f, "Conversion backend cannot convert from {}", encoding)
            }
            CompileError::AsciiInvariantViolation {
                encoding,
                byte,
                output,
            } => write!(
                f,
                "Byte 0x{:02X} of {} did not round-trip as ASCII (got {:02X?})",
                byte, encoding, output
            ),
            CompileError::ExpansionTooLong {
                encoding,
                byte,
                output,
            } => write!(
                f,
                "Byte 0x{:02X} of {} expanded to {} UTF-8 bytes, more than the 3 a table row holds",
                byte,
                encoding,
                output.len()
            ),
            CompileError::Converter { encoding, source } => {
                write!(f, "Conversion backend failed while compiling {}: {}", encoding, source)
            }
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Converter { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Build-time conversion backend used as ground truth for table contents.
///
/// `Ok(None)` from [`convert_byte`](Converter::convert_byte) means the byte
/// has no assigned mapping, which includes any conversion that does not
/// fully consume the input byte. `Err` is reserved for transport failures
/// of the backend itself.
pub trait Converter {
    /// Whether the backend can open a conversion from `encoding` to UTF-8.
    fn supports(&self, encoding: &str) -> io::Result<bool>;

    /// Converts a single byte of `encoding` to UTF-8.
    fn convert_byte(&self, encoding: &str, byte: u8) -> io::Result<Option<Vec<u8>>>;
}

/// Compiles the conversion table for one codepage.
///
/// Bytes are converted one at a time, never batched: a single unassigned
/// byte must not disturb the conversion of its 127 neighbors. Bytes below
/// 128 are asserted to round-trip to themselves rather than stored.
///
/// # Errors
///
/// See [`CompileError`]; every error aborts the run for this codepage.
pub fn compile<C: Converter>(
    converter: &C,
    config: &CodepageConfig,
) -> Result<CompiledTable, CompileError> {
    let name = config.name.as_str();

    let supported = converter.supports(name).map_err(|source| CompileError::Converter {
        encoding: name.to_string(),
        source,
    })?;
    if !supported {
        return Err(CompileError::UnsupportedEncoding {
            encoding: name.to_string(),
        });
    }
    log::debug!("compiling {}", name);

    let mut entries: CodepageConvTable = [[0u8; 3]; 128];
    for byte in 0u8..=0xFF {
        let output = converter
            .convert_byte(name, byte)
            .map_err(|source| CompileError::Converter {
                encoding: name.to_string(),
                source,
            })?;

        if byte < 0x80 {
            // Universal invariant: every supported codepage is a strict
            // superset of 7-bit ASCII.
            match output {
                Some(out) if out.as_slice() == [byte] => {}
                other => {
                    return Err(CompileError::AsciiInvariantViolation {
                        encoding: name.to_string(),
                        byte,
                        output: other.unwrap_or_default(),
                    });
                }
            }
            continue;
        }

        match output {
            Some(out) if out.len() > 3 => {
                return Err(CompileError::ExpansionTooLong {
                    encoding: name.to_string(),
                    byte,
                    output: out,
                });
            }
            Some(out) if !out.is_empty() => {
                let row = &mut entries[byte as usize - 0x80];
                row[..out.len()].copy_from_slice(&out);
            }
            // Unassigned byte (or an empty expansion, which we refuse to
            // guess a mapping for): the row stays the all-zero marker.
            _ => {}
        }
    }

    log::info!("compiled {} ({})", name, config.comment);
    Ok(CompiledTable {
        name: config.name.clone(),
        comment: config.comment.clone(),
        entries,
    })
}

/// Compiles every configured codepage.
///
/// Codepages share no state and compile in parallel; results keep list
/// order so the rendered artifact is deterministic.
///
/// # Errors
///
/// The first [`CompileError`] aborts the whole run: no partial table set is
/// returned.
pub fn compile_all<C: Converter + Sync>(
    converter: &C,
    set: &CodepageSet,
) -> Result<Vec<CompiledTable>, CompileError> {
    set.codepages
        .par_iter()
        .map(|config| compile(converter, config))
        .collect()
}
