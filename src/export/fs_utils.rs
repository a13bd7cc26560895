// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Decide whether the roster of `label` may be written to `path`.
///
/// A missing file, or `force`, is always fine. Otherwise one answer line is
/// read from `answers`; only "y"/"yes" lets the export replace the file.
pub(crate) fn confirm_overwrite<R: BufRead>(
    path: &Path,
    force: bool,
    label: &str,
    answers: &mut R,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!(
        "'{}' already exists; exporting {} would replace it.",
        path.display(),
        label
    ));
    print!("Replace with the current roster? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    answers.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info(format!("Replacing {} with the {} roster.", path.display(), label));
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "{label} roster not exported: {} kept",
            path.display()
        ))),
    }
}
