//! Handler für Zeichenfläche, Darstellung und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::RenderLayer;

/// Aktualisiert die Größe der Zeichenfläche im State.
pub fn set_canvas_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Setzt die Auflösung der Kurven-Polylinien.
pub fn set_resolution(state: &mut AppState, value: u32) {
    use_cases::render_settings::set_resolution(state, value);
}

/// Schaltet eine Zeichenebene um.
pub fn toggle_visibility(state: &mut AppState, layer: RenderLayer) {
    use_cases::render_settings::toggle_layer(state, layer);
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
