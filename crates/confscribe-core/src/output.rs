use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::fs;

use crate::{error::Result, types::TranscribedPresentation};

/// Serialize the whole record sequence as newline-delimited JSON, one
/// object per line, in a single write.
pub async fn write_ndjson(records: &[TranscribedPresentation], path: &Path) -> Result<()> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    fs::write(path, out).await?;
    Ok(())
}

/// Write one pretty-printed JSON document for a single record, named after
/// its title, into `dir`. Returns the path written.
pub async fn write_presentation_file(
    record: &TranscribedPresentation,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", file_stem(&record.title)));

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut serializer)?;

    fs::write(&path, buf).await?;
    Ok(path)
}

/// Titles double as filenames; path separators become hyphens and nothing
/// else is altered.
pub fn file_stem(title: &str) -> String {
    title.replace('/', "-")
}
