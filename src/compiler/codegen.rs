//! Renders the generated tables module.
//!
//! The output is committed as `src/tables.rs`, so rendering must be
//! deterministic: same compiled tables in, byte-identical module out.

use std::fmt::Write;

use super::CompiledTable;

const INVALID_ROW: [u8; 3] = [0, 0, 0];

/// Replaces every character that is illegal in a Rust identifier with `_`.
///
/// Applied only to generated item names. Runtime lookup keys always keep
/// the original spelling.
pub fn launder(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Renders the complete tables module for `tables`, in slice order.
pub fn render_tables_module(tables: &[CompiledTable]) -> String {
    let mut out = String::new();

    push(&mut out, "// This file has been generated by the codepage-d table compiler.");
    push(&mut out, "// DO NOT EDIT! Regenerate with `cargo run -- --out src/tables.rs`.");
    push(&mut out, "");
    push(&mut out, "/// UTF-8 expansions for byte values 128..=255 of one legacy codepage.");
    push(&mut out, "///");
    push(&mut out, "/// Each row holds up to three UTF-8 bytes, zero padded. An all-zero row");
    push(&mut out, "/// marks a byte with no assigned mapping in that codepage.");
    push(&mut out, "pub type CodepageConvTable = [[u8; 3]; 128];");
    push(&mut out, "");
    push(&mut out, "/// A compiled codepage: original name, description and conversion table.");
    push(&mut out, "#[derive(Debug, Clone, Copy)]");
    push(&mut out, "pub struct Codepage {");
    push(&mut out, "    /// Original codepage name, e.g. \"ISO-8859-2\".");
    push(&mut out, "    pub name: &'static str,");
    push(&mut out, "    /// Human readable description.");
    push(&mut out, "    pub comment: &'static str,");
    push(&mut out, "    /// Conversion table for byte values 128..=255.");
    push(&mut out, "    pub table: &'static CodepageConvTable,");
    push(&mut out, "}");

    for table in tables {
        push(&mut out, "");
        let _ = writeln!(out, "/// {}", table.comment);
        let _ = writeln!(
            out,
            "pub static {}_TO_UTF8: CodepageConvTable = [",
            launder(&table.name)
        );
        for row in &table.entries {
            if *row == INVALID_ROW {
                push(&mut out, "    [0x00, 0x00, 0x00], // invalid");
            } else {
                let _ = writeln!(
                    out,
                    "    [0x{:02X}, 0x{:02X}, 0x{:02X}],",
                    row[0], row[1], row[2]
                );
            }
        }
        push(&mut out, "];");
    }

    push(&mut out, "");
    push(&mut out, "/// Every codepage with a compiled table, in compilation order.");
    push(&mut out, "pub static CODEPAGES: &[Codepage] = &[");
    for table in tables {
        push(&mut out, "    Codepage {");
        let _ = writeln!(out, "        name: \"{}\",", table.name);
        let _ = writeln!(out, "        comment: \"{}\",", table.comment);
        let _ = writeln!(out, "        table: &{}_TO_UTF8,", launder(&table.name));
        push(&mut out, "    },");
    }
    push(&mut out, "];");

    push(&mut out, "");
    push(&mut out, "/// Returns the conversion table registered under `encoding`, matched");
    push(&mut out, "/// case-sensitively against the original codepage name.");
    push(&mut out, "pub fn table_for(encoding: &str) -> Option<&'static CodepageConvTable> {");
    push(&mut out, "    match encoding {");
    for table in tables {
        let _ = writeln!(
            out,
            "        \"{}\" => Some(&{}_TO_UTF8),",
            table.name,
            launder(&table.name)
        );
    }
    push(&mut out, "        _ => None,");
    push(&mut out, "    }");
    push(&mut out, "}");

    out
}

fn push(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompiledTable {
        let mut entries = [[0u8; 3]; 128];
        entries[0] = [0xC2, 0xA0, 0x00];
        entries[127] = [0xE2, 0x82, 0xAC];
        CompiledTable {
            name: "ISO-8859-2".to_string(),
            comment: "Central Europe languages".to_string(),
            entries,
        }
    }

    #[test]
    fn test_launder() {
        assert_eq!(launder("CP1252"), "CP1252");
        assert_eq!(launder("ISO-8859-2"), "ISO_8859_2");
        assert_eq!(launder("x-mac.roman"), "x_mac_roman");
    }

    #[test]
    fn test_generated_item_names_are_laundered() {
        let module = render_tables_module(&[sample()]);
        assert!(module.contains("pub static ISO_8859_2_TO_UTF8: CodepageConvTable"));
        assert!(!module.contains("ISO-8859-2_TO_UTF8"));
    }

    #[test]
    fn test_lookup_keys_keep_original_spelling() {
        let module = render_tables_module(&[sample()]);
        assert!(module.contains("\"ISO-8859-2\" => Some(&ISO_8859_2_TO_UTF8),"));
    }

    #[test]
    fn test_invalid_rows_are_marked() {
        let module = render_tables_module(&[sample()]);
        // 126 of the 128 rows in the sample are unassigned.
        assert_eq!(module.matches("[0x00, 0x00, 0x00], // invalid").count(), 126);
    }

    #[test]
    fn test_header_marks_file_generated() {
        let module = render_tables_module(&[sample()]);
        assert!(module.starts_with("// This file has been generated"));
        assert!(module.contains("DO NOT EDIT!"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let tables = vec![sample()];
        assert_eq!(render_tables_module(&tables), render_tables_module(&tables));
    }

    #[test]
    fn test_listing_carries_comment_unchanged() {
        let module = render_tables_module(&[sample()]);
        assert!(module.contains("comment: \"Central Europe languages\","));
    }
}
