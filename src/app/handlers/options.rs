//! Handler für die Optionen-Datei.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Speichert die aktuellen Darstellungs-Einstellungen als Startwerte.
pub fn save(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::options::save_current_settings(state, path)
}

/// Setzt die Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::options::reset_to_defaults(state, path)
}
