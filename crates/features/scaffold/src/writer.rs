//! Small filesystem helpers shared by the document writers.

use crate::error::{ScaffoldError, ScaffoldErrorExt};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serializes `value` as tab-indented JSON with a trailing newline.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, ScaffoldError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer).context("Serializing document")?;
    buf.push(b'\n');
    Ok(buf)
}

pub(crate) fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), ScaffoldError> {
    fs::write(path, contents).context(format!("Writing {}", path.display()))?;
    debug!(path = %path.display(), "Wrote file");
    Ok(())
}

pub(crate) fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir(path).context(format!("Creating {}", path.display()))?;
    debug!(path = %path.display(), "Created directory");
    Ok(())
}
