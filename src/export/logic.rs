// src/export/logic.rs

use crate::core::notify::Notifier;
use crate::core::session::AttendanceSession;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::confirm_overwrite;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{RosterExport, SessionExport};
use crate::utils::path::expand_tilde;

/// High-level export of a session's roster snapshot.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export<N: Notifier>(
        session: &mut AttendanceSession<N>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if file.trim().is_empty() {
            return Err(AppError::Export("output file path is empty".into()));
        }
        let path = expand_tilde(file);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::Export(format!(
                "output directory does not exist: {}",
                parent.display()
            )));
        }

        let label = format!(
            "{} ({}) on {}",
            session.class().course,
            session.class().section,
            session.date()
        );
        confirm_overwrite(&path, force, &label, &mut std::io::stdin().lock())?;

        match format {
            ExportFormat::Csv => {
                let rows: Vec<RosterExport> =
                    session.records().iter().map(RosterExport::from).collect();
                export_csv(&rows, &path)?;
            }
            ExportFormat::Json => {
                let doc = SessionExport::new(
                    session.class(),
                    session.date(),
                    session.summary(),
                    session.records(),
                );
                export_json(&doc, &path)?;
            }
        }

        let msg = format!("{} rows to {}", session.records().len(), path.display());
        session.note("export", format.as_str(), &msg);
        Ok(())
    }
}
