use crate::collection::Collection;
use crate::error::{PatchError, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Indentation used when writing the collection back
const INDENT: &[u8] = b"\t";

/// Read and parse the whole collection file
pub fn load(path: &Path) -> Result<Collection> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PatchError::FileNotFound(path.to_path_buf()),
        _ => PatchError::Io(e),
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| PatchError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded collection");
    Collection::from_value(value)
}

/// Pretty formatter that writes everything outside printable ASCII as
/// `\uXXXX` escapes (UTF-16 surrogate pairs above the BMP), so the file
/// stays byte-identical to what Python's `json.dump` produces.
struct AsciiFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        AsciiFormatter {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Render the collection exactly as it will be written
pub fn render(collection: &Collection) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = AsciiFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    collection
        .as_map()
        .serialize(&mut ser)
        .map_err(PatchError::Serialize)?;
    Ok(buf)
}

/// Replace the file contents with the rendered collection. Nothing is
/// written if rendering fails.
pub fn save(path: &Path, collection: &Collection) -> Result<()> {
    let content = render(collection)?;
    fs::write(path, &content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Saved collection");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(load(&path), Err(PatchError::FileNotFound(p)) if p == path));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"item\": [").unwrap();
        assert!(matches!(load(&path), Err(PatchError::Parse { .. })));
    }

    #[test]
    fn test_save_keeps_key_order_and_tabs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collection.json");
        let doc = r#"{"zeta": 1, "item": [], "alpha": {"b": true, "a": null}}"#;
        fs::write(&path, doc).unwrap();

        let collection = load(&path).unwrap();
        save(&path, &collection).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n\t\"zeta\": 1,\n\t\"item\": [],\n\t\"alpha\": {\n\t\t\"b\": true,\n\t\t\"a\": null\n\t}\n}"
        );
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let collection = Collection::from_value(json!({
            "item": [{"name": "Café ☕", "description": "emoji 😀 and del \u{7f}"}]
        }))
        .unwrap();

        let written = String::from_utf8(render(&collection).unwrap()).unwrap();
        assert!(written.is_ascii());
        assert!(written.contains(r#""name": "Caf\u00e9 \u2615""#));
        assert!(written.contains(r#""description": "emoji \ud83d\ude00 and del \u007f""#));

        let reparsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(reparsed, collection.into_value());
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collection.json");
        let doc = json!({
            "info": {"name": "DocuFlow", "_postman_id": "1234"},
            "item": [{"name": "Health Check", "event": [{"listen": "test"}]}],
            "variable": [{"key": "baseUrl", "value": "http://localhost:3000"}]
        });
        fs::write(&path, doc.to_string()).unwrap();

        let collection = load(&path).unwrap();
        save(&path, &collection).unwrap();

        assert_eq!(load(&path).unwrap().into_value(), doc);
    }
}
