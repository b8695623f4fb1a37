// 💾 JSON Export
// Writes migrated members for the app's data loader

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::member::MigratedMember;

/// Write members as a pretty-printed JSON array (2-space indent)
///
/// serde_json leaves non-ASCII as-is, so Korean names stay readable.
/// Missing parent directories are created.
pub fn write_members_json(output_path: &Path, members: &[MigratedMember]) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, members)
        .context("Failed to serialize members JSON")?;
    writer
        .flush()
        .with_context(|| format!("Failed to write file: {}", output_path.display()))?;

    Ok(())
}
