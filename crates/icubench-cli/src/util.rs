use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;

/// Writes `value` as pretty-printed JSON to `path`, followed by a newline.
pub fn save_json<T>(file_kind: &str, value: &T, path: &Path) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create {} file: {}", file_kind, path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writeln!(writer)
        .with_context(|| format!("Failed to write newline after JSON to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {}", path.display()))?;
    Ok(())
}
