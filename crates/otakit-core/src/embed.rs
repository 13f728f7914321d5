//! Binary-to-C-header embedding
//!
//! Converts an arbitrary binary file into an include-guarded `const char`
//! array so the blob (a web UI page, a font, a firmware image) can be
//! compiled straight into device firmware. The emitted array carries one
//! extra trailing `0` terminator, so an array for `n` input bytes has
//! `n + 1` elements.

use crate::error::EmbedError;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Identifiers derived from the output file name.
///
/// Both are pure functions of the output path: `array` is the lowercased
/// file stem (everything before the last dot), `guard` is
/// `__{STEM}_{EXT}__` uppercased. Characters that are not valid in C
/// identifiers pass through untouched, so callers own identifier-safe file
/// names (`blob.bin.h` yields the guard `__BLOB.BIN_H__`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIdents {
    /// Name of the emitted array constant.
    pub array: String,
    /// Include-guard token.
    pub guard: String,
}

/// Derive the array name and include-guard token from the output path.
pub fn header_idents(output: &Path) -> HeaderIdents {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = output
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    HeaderIdents {
        array: stem.to_lowercase(),
        guard: format!("__{}_{}__", stem.to_uppercase(), ext.to_uppercase()),
    }
}

/// Render the header text embedding `data` as a zero-terminated array.
///
/// Each input byte becomes its unsigned decimal value followed by a comma
/// and a space; the literal always ends with the `0` terminator before the
/// closing brace, so empty input still renders a one-element array.
pub fn render_header(idents: &HeaderIdents, data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 5 + 128);

    // Writes to a String are infallible.
    let _ = writeln!(out, "#ifndef {}", idents.guard);
    let _ = writeln!(out, "#define {}", idents.guard);
    out.push('\n');
    out.push_str("#include <cstdint>\n\n");

    let _ = write!(out, "const char {}[{}] = {{", idents.array, data.len() + 1);
    for byte in data {
        let _ = write!(out, "{}, ", byte);
    }
    out.push_str("0};\n");

    let _ = writeln!(out, "#endif // {}", idents.guard);
    out
}

/// Convert a binary file into a C header embedding its contents.
///
/// Reads all of `input`, renders the header for `output`'s file name, and
/// writes the result to `output` in one call. Returns the number of input
/// bytes embedded (the emitted array has one more element for the
/// terminator).
pub fn convert(input: &Path, output: &Path) -> Result<usize, EmbedError> {
    let data = fs::read(input).map_err(|source| EmbedError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let idents = header_idents(output);
    let text = render_header(&idents, &data);

    fs::write(output, text).map_err(|source| EmbedError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(data.len())
}
