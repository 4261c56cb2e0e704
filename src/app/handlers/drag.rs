//! Handler für die Drag-Auswertung pro Frame.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::FrameInput;

/// Führt den Drag mit Zeichenflächen-Größe und Hit-Abstand aus dem State aus.
pub fn update(state: &mut AppState, input: &FrameInput) {
    let canvas_size = state.view.canvas_size;
    let hit_distance_sq = state.options.hit_distance_sq();
    use_cases::drag::drag_points(&mut state.curve, input, canvas_size, hit_distance_sq);
}
