// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::prompt::ask_confirmation;
use std::fs;
use std::path::Path;

/// Verifica se il file di output può essere scritto.
///
/// - file assente → crea la cartella padre se manca
/// - file esistente con `force` → Ok
/// - file esistente senza `force` → chiede conferma all'utente
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() {
        if force
            || ask_confirmation(&format!("The file '{}' already exists.", path.display()))
        {
            return Ok(());
        }
        return Err(AppError::Export(format!(
            "export cancelled, '{}' not overwritten (use --force)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}
