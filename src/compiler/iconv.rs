//! Conversion backend over the platform `iconv` tool.
//!
//! Driven through `std::process::Command` rather than an FFI binding:
//! `iconv` is available on any POSIX system and this path only runs when
//! the tables are regenerated. Requires `iconv` in `PATH`.

use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};

use super::Converter;

/// Ground-truth backend that shells out to `iconv` once per byte.
///
/// One process per byte: `iconv` stops at the first illegal input
/// sequence, so a batched conversion would let a single unassigned byte
/// mask the mappings of its neighbors.
#[derive(Debug, Clone)]
pub struct Iconv {
    program: String,
}

impl Default for Iconv {
    fn default() -> Self {
        Iconv::new()
    }
}

impl Iconv {
    /// Resolves `iconv` from `PATH`.
    pub fn new() -> Self {
        Iconv {
            program: "iconv".to_string(),
        }
    }

    /// Uses a specific iconv binary instead of resolving from `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Iconv {
            program: program.into(),
        }
    }

    fn run(&self, encoding: &str, input: &[u8]) -> io::Result<Option<Vec<u8>>> {
        let mut child = Command::new(&self.program)
            .arg("-f")
            .arg(encoding)
            .arg("-t")
            .arg("UTF-8")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // iconv exits without draining stdin when it rejects the
            // encoding; the exit status below is the real verdict.
            match stdin.write_all(input) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                Err(e) => return Err(e),
            }
        }

        let output = child.wait_with_output()?;
        if output.status.success() {
            Ok(Some(output.stdout))
        } else {
            Ok(None)
        }
    }
}

impl Converter for Iconv {
    fn supports(&self, encoding: &str) -> io::Result<bool> {
        // Empty input converts successfully exactly when the encoding pair
        // opens at all.
        Ok(self.run(encoding, &[])?.is_some())
    }

    fn convert_byte(&self, encoding: &str, byte: u8) -> io::Result<Option<Vec<u8>>> {
        self.run(encoding, &[byte])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These hit the real iconv binary; run with `cargo test -- --ignored`
    // on a machine that has it.

    #[test]
    #[ignore]
    fn test_euro_sign() {
        let iconv = Iconv::new();
        let out = iconv.convert_byte("CP1252", 0x80).unwrap();
        assert_eq!(out, Some(vec![0xE2, 0x82, 0xAC]));
    }

    #[test]
    #[ignore]
    fn test_unassigned_byte() {
        let iconv = Iconv::new();
        assert_eq!(iconv.convert_byte("CP1252", 0x81).unwrap(), None);
    }

    #[test]
    #[ignore]
    fn test_unknown_encoding_is_unsupported() {
        let iconv = Iconv::new();
        assert!(!iconv.supports("CP9999").unwrap());
        assert!(iconv.supports("CP1252").unwrap());
    }

    #[test]
    fn test_missing_binary_is_a_transport_error() {
        let iconv = Iconv::with_program("/nonexistent/iconv");
        assert!(iconv.supports("CP1252").is_err());
    }
}
