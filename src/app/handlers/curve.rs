//! Handler für Platzieren und Leeren der Kontrollpunkte.

use crate::app::use_cases;
use crate::app::AppState;

/// Hängt ein Tripel um `center` an.
pub fn append_triple(state: &mut AppState, center: glam::Vec2) {
    use_cases::curve::append_triple(state, center);
}

/// Leert Kurve und Drag-Zustand.
pub fn clear(state: &mut AppState) {
    use_cases::curve::clear_curve(state);
}
