//! Use-Case: Tripel platzieren und Zeichenfläche leeren.

use crate::app::AppState;

/// Hängt ein Tripel (Handle, Anker, Handle) um `center` an.
///
/// Die Prüfung, ob der Zeiger in der Zeichenfläche liegt, passiert beim
/// Intent-Mapping; hier wird immer angehängt.
pub fn append_triple(state: &mut AppState, center: glam::Vec2) {
    let first = state
        .curve
        .append_triple(center, state.options.handle_offset);

    log::debug!(
        "Tripel an ({:.1}, {:.1}) platziert (Index {}..={}), {} Segmente",
        center.x,
        center.y,
        first,
        first + 2,
        state.curve.points().segment_count()
    );
}

/// Leert Kontrollpunkte und aktiven Drag in einem Schritt.
pub fn clear_curve(state: &mut AppState) {
    let removed = state.curve.points().len() - 1;
    state.curve.clear();
    log::info!("Zeichenfläche geleert ({} Punkte entfernt)", removed);
}
