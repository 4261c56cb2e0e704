//! Use-Case-Funktionen für Auflösung und Sichtbarkeit.

use crate::app::AppState;
use crate::shared::RenderLayer;

/// Setzt die Auflösung, begrenzt auf den konfigurierten Bereich.
pub fn set_resolution(state: &mut AppState, value: u32) {
    let clamped = state.options.clamp_resolution(i64::from(value));
    if clamped != state.view.render_settings.resolution {
        log::debug!("Auflösung: {} → {}", state.view.render_settings.resolution, clamped);
    }
    state.view.render_settings.resolution = clamped;
}

/// Schaltet eine Zeichenebene ein oder aus.
pub fn toggle_layer(state: &mut AppState, layer: RenderLayer) {
    state.view.render_settings.toggle(layer);
    log::debug!(
        "Ebene {:?} {}",
        layer,
        if state.view.render_settings.is_visible(layer) {
            "eingeblendet"
        } else {
            "ausgeblendet"
        }
    );
}
