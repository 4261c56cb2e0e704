//! Use-Case-Funktionen für die Zeichenfläche.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Größe der Zeichenfläche.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.canvas_size = glam::Vec2::new(size[0].max(0.0), size[1].max(0.0));
}
