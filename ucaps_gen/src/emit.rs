// Copyright 2026 the Ucaps Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering of [`CaseMaps`] as source text.
//!
//! Every format declares two tables (lower to upper, upper to lower) and two lookup functions
//! that return the mapped code point, or the input unchanged when the table has no entry for it.
//! Output always uses `\n` line endings so that it is identical on every platform.

use core::fmt;
use std::path::Path;

use crate::{CaseMapping, CaseMaps, Error};

const GENERATED_BY: &str = "Auto-generated by ucaps_gen from UnicodeData.txt";

/// The language of the generated table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// A Lua module returning a `ucaps` table with decimal keys, in source order.
    #[default]
    Lua,
    /// A C header with hexadecimal pair arrays and binary-search lookups.
    C,
    /// A Rust module with sorted tuple slices and binary-search lookups.
    Rust,
}

impl Format {
    /// Returns the path the table is written to when none is given, relative to the working
    /// directory.
    pub const fn default_output(self) -> &'static str {
        match self {
            Self::Lua => "src/library/string/ucaps.lua",
            Self::C => "src/library/string/ucaps.h",
            Self::Rust => "src/library/string/ucaps.rs",
        }
    }
}

/// Renders `maps` as a complete source file in `format`.
pub fn render(maps: &CaseMaps, format: Format) -> String {
    match format {
        Format::Lua => LuaModule(maps).to_string(),
        Format::C => CHeader(maps).to_string(),
        Format::Rust => RustModule(maps).to_string(),
    }
}

/// Overwrites `path` with `contents` in a single write.
///
/// Parent directories are not created.
pub fn write(path: &Path, contents: &str) -> Result<(), Error> {
    std::fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Entries ordered by code point, for the formats that binary search their tables.
fn sorted(table: &[CaseMapping]) -> Vec<CaseMapping> {
    let mut table = table.to_vec();
    table.sort_by_key(|m| m.code_point);
    table
}

struct LuaModule<'a>(&'a CaseMaps);

const LUA_FUNCTIONS: &str = "\
function ucaps.to_upper(ch)
    return ucaps.lower_to_upper[ch] or ch
end

function ucaps.to_lower(ch)
    return ucaps.upper_to_lower[ch] or ch
end

return ucaps";

impl fmt::Display for LuaModule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- ucaps.lua")?;
        writeln!(f, "-- {GENERATED_BY}")?;
        writeln!(f)?;
        writeln!(f, "local ucaps = {{}}")?;
        writeln!(f)?;
        lua_table(f, "lower_to_upper", &self.0.lower_to_upper)?;
        writeln!(f)?;
        lua_table(f, "upper_to_lower", &self.0.upper_to_lower)?;
        writeln!(f)?;
        f.write_str(LUA_FUNCTIONS)
    }
}

fn lua_table(f: &mut fmt::Formatter<'_>, name: &str, table: &[CaseMapping]) -> fmt::Result {
    writeln!(f, "ucaps.{name} = {{")?;
    for m in table {
        writeln!(f, "    [{}] = {},", m.code_point, m.mapping)?;
    }
    writeln!(f, "}}")
}

struct CHeader<'a>(&'a CaseMaps);

impl fmt::Display for CHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_to_upper = sorted(&self.0.lower_to_upper);
        let upper_to_lower = sorted(&self.0.upper_to_lower);

        writeln!(f, "/* ucaps.h */")?;
        writeln!(f, "/* {GENERATED_BY} */")?;
        writeln!(f)?;
        writeln!(f, "#ifndef UCAPS_H")?;
        writeln!(f, "#define UCAPS_H")?;
        writeln!(f)?;
        writeln!(f, "#define LTU_LEN {}", lower_to_upper.len())?;
        writeln!(f, "#define UTL_LEN {}", upper_to_lower.len())?;
        writeln!(f)?;
        c_table(f, "caps_table", "LTU_LEN", &lower_to_upper)?;
        c_table(f, "reverse_caps_table", "UTL_LEN", &upper_to_lower)?;
        c_lookup(f, "ucaps_to_upper", "caps_table", "LTU_LEN")?;
        writeln!(f)?;
        c_lookup(f, "ucaps_to_lower", "reverse_caps_table", "UTL_LEN")?;
        writeln!(f)?;
        writeln!(f, "#endif /* UCAPS_H */")
    }
}

fn c_table(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    len: &str,
    table: &[CaseMapping],
) -> fmt::Result {
    if table.is_empty() {
        // ISO C has no zero-length arrays; `len` stays 0 so the lookup never reads the entry.
        writeln!(f, "static const int {name}[1][2] = {{")?;
        writeln!(f, "\t{{ 0, 0 }},")?;
    } else {
        writeln!(f, "static const int {name}[{len}][2] = {{")?;
        for m in table {
            writeln!(f, "\t{{ 0x{:04X}, 0x{:04X} }},", m.code_point, m.mapping)?;
        }
    }
    writeln!(f, "}};")?;
    writeln!(f)
}

fn c_lookup(f: &mut fmt::Formatter<'_>, name: &str, table: &str, len: &str) -> fmt::Result {
    writeln!(f, "static inline int {name}(int ch) {{")?;
    writeln!(f, "\tint low = 0;")?;
    writeln!(f, "\tint high = {len} - 1;")?;
    writeln!(f, "\twhile (low <= high) {{")?;
    writeln!(f, "\t\tint middle = low + (high - low) / 2;")?;
    writeln!(f, "\t\tif (ch < {table}[middle][0]) {{")?;
    writeln!(f, "\t\t\thigh = middle - 1;")?;
    writeln!(f, "\t\t}} else if (ch > {table}[middle][0]) {{")?;
    writeln!(f, "\t\t\tlow = middle + 1;")?;
    writeln!(f, "\t\t}} else {{")?;
    writeln!(f, "\t\t\treturn {table}[middle][1];")?;
    writeln!(f, "\t\t}}")?;
    writeln!(f, "\t}}")?;
    writeln!(f, "\treturn ch;")?;
    writeln!(f, "}}")
}

struct RustModule<'a>(&'a CaseMaps);

const RUST_FUNCTIONS: &str = "\
/// Returns the simple uppercase mapping of `ch`, or `ch` itself when it has none.
pub fn to_upper(ch: u32) -> u32 {
    lookup(LOWER_TO_UPPER, ch)
}

/// Returns the simple lowercase mapping of `ch`, or `ch` itself when it has none.
pub fn to_lower(ch: u32) -> u32 {
    lookup(UPPER_TO_LOWER, ch)
}

fn lookup(table: &[(u32, u32)], ch: u32) -> u32 {
    match table.binary_search_by_key(&ch, |&(key, _)| key) {
        Ok(i) => table[i].1,
        Err(_) => ch,
    }
}
";

impl fmt::Display for RustModule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// {GENERATED_BY}. Do not edit.")?;
        writeln!(f)?;
        rust_table(
            f,
            "Simple lowercase to uppercase mappings, sorted by code point.",
            "LOWER_TO_UPPER",
            &sorted(&self.0.lower_to_upper),
        )?;
        rust_table(
            f,
            "Simple uppercase to lowercase mappings, sorted by code point.",
            "UPPER_TO_LOWER",
            &sorted(&self.0.upper_to_lower),
        )?;
        f.write_str(RUST_FUNCTIONS)
    }
}

fn rust_table(
    f: &mut fmt::Formatter<'_>,
    doc: &str,
    name: &str,
    table: &[CaseMapping],
) -> fmt::Result {
    writeln!(f, "/// {doc}")?;
    writeln!(f, "#[rustfmt::skip]")?;
    writeln!(f, "pub static {name}: &[(u32, u32); {}] = &[", table.len())?;
    for m in table {
        writeln!(f, "    ({}, {}),", m.code_point, m.mapping)?;
    }
    writeln!(f, "];")?;
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::{render, write, Format};
    use crate::{extract, CaseMapping, CaseMaps, Error};

    const SMALL_A: &str = "0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041";
    const CAPITAL_A: &str = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;";

    fn maps() -> CaseMaps {
        extract([CAPITAL_A, SMALL_A]).unwrap()
    }

    #[test]
    fn lua_module() {
        let expected = "\
-- ucaps.lua
-- Auto-generated by ucaps_gen from UnicodeData.txt

local ucaps = {}

ucaps.lower_to_upper = {
    [97] = 65,
}

ucaps.upper_to_lower = {
    [65] = 97,
}

function ucaps.to_upper(ch)
    return ucaps.lower_to_upper[ch] or ch
end

function ucaps.to_lower(ch)
    return ucaps.upper_to_lower[ch] or ch
end

return ucaps";
        assert_eq!(render(&maps(), Format::Lua), expected);
    }

    #[test]
    fn lua_keeps_source_order() {
        let maps = CaseMaps {
            lower_to_upper: vec![CaseMapping::new(0x1C6, 0x1C4), CaseMapping::new(0x61, 0x41)],
            upper_to_lower: Vec::new(),
        };
        let lua = render(&maps, Format::Lua);
        let first = lua.find("[454] = 452,").unwrap();
        let second = lua.find("[97] = 65,").unwrap();
        assert!(first < second, "entries were reordered:\n{lua}");
        assert!(
            lua.contains("ucaps.upper_to_lower = {\n}\n"),
            "empty table missing:\n{lua}"
        );
    }

    #[test]
    fn c_header() {
        let header = render(&maps(), Format::C);
        assert!(header.starts_with("/* ucaps.h */\n"), "{header}");
        assert!(header.contains("#define LTU_LEN 1\n#define UTL_LEN 1\n"), "{header}");
        assert!(
            header.contains("static const int caps_table[LTU_LEN][2] = {\n\t{ 0x0061, 0x0041 },\n};\n"),
            "{header}"
        );
        assert!(
            header.contains(
                "static const int reverse_caps_table[UTL_LEN][2] = {\n\t{ 0x0041, 0x0061 },\n};\n"
            ),
            "{header}"
        );
        assert!(header.contains("static inline int ucaps_to_upper(int ch) {"), "{header}");
        assert!(header.contains("static inline int ucaps_to_lower(int ch) {"), "{header}");
        assert!(header.ends_with("#endif /* UCAPS_H */\n"), "{header}");
    }

    #[test]
    fn c_header_pads_empty_tables() {
        let header = render(&CaseMaps::default(), Format::C);
        assert!(header.contains("#define LTU_LEN 0\n#define UTL_LEN 0\n"), "{header}");
        assert!(
            header.contains("static const int caps_table[1][2] = {\n\t{ 0, 0 },\n};\n"),
            "{header}"
        );
        assert!(
            header.contains("static const int reverse_caps_table[1][2] = {\n\t{ 0, 0 },\n};\n"),
            "{header}"
        );
        assert!(
            !header.contains("[LTU_LEN][2]") && !header.contains("[UTL_LEN][2]"),
            "zero-length array emitted:\n{header}"
        );
    }

    #[test]
    fn rust_module_is_sorted() {
        let maps = CaseMaps {
            lower_to_upper: vec![CaseMapping::new(0x1C6, 0x1C4), CaseMapping::new(0x61, 0x41)],
            upper_to_lower: vec![CaseMapping::new(0x41, 0x61)],
        };
        let module = render(&maps, Format::Rust);
        assert!(
            module.contains(
                "pub static LOWER_TO_UPPER: &[(u32, u32); 2] = &[\n    (97, 65),\n    (454, 452),\n];\n"
            ),
            "{module}"
        );
        assert!(
            module.contains("pub static UPPER_TO_LOWER: &[(u32, u32); 1] = &[\n    (65, 97),\n];\n"),
            "{module}"
        );
        assert!(module.contains("pub fn to_upper(ch: u32) -> u32 {"), "{module}");
        assert!(module.contains("pub fn to_lower(ch: u32) -> u32 {"), "{module}");
    }

    #[test]
    fn output_uses_line_feeds_only() {
        let maps = extract([format!("{SMALL_A}\r")]).unwrap();
        for format in [Format::Lua, Format::C, Format::Rust] {
            assert!(!render(&maps, format).contains('\r'), "{format:?} emitted CR");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        for format in [Format::Lua, Format::C, Format::Rust] {
            assert_eq!(render(&maps(), format), render(&maps(), format));
        }
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ucaps.lua");
        std::fs::write(&path, "stale contents that are longer than the new ones").unwrap();
        write(&path, "fresh").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn write_does_not_create_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ucaps.lua");
        let err = write(&path, "fresh").unwrap_err();
        assert!(matches!(err, Error::Write { .. }), "unexpected error: {err}");
        assert!(!path.exists(), "file was created");
    }

    #[test]
    fn default_outputs() {
        assert_eq!(Format::default(), Format::Lua);
        assert_eq!(Format::Lua.default_output(), "src/library/string/ucaps.lua");
    }
}
