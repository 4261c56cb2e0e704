//! Use-Case-Funktionen für die Optionen-Datei.

use crate::app::AppState;
use crate::shared::{EditorOptions, RenderSettings};
use std::path::Path;

/// Übernimmt die aktuellen Darstellungs-Einstellungen als Startwerte und speichert.
pub fn save_current_settings(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    state.view.render_settings.store_into(&mut state.options);
    state.options.save_to_file(path)?;
    state.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}

/// Setzt Optionen und Darstellungs-Einstellungen auf Standardwerte zurück und speichert.
///
/// Die Auflösung wird sofort übernommen, die Kurve bleibt unverändert.
pub fn reset_to_defaults(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.view.render_settings = RenderSettings::from_options(&state.options);
    state.options.save_to_file(path)?;
    state.status_message = Some("Optionen zurückgesetzt".to_string());
    Ok(())
}
