//! Use-Case: Punkte per Primärtaste greifen und ziehen.

use crate::app::state::CurveState;
use crate::shared::FrameInput;
use glam::Vec2;

/// Wertet den Drag für alle Punkte in Index-Reihenfolge aus.
///
/// Pro Punkt:
/// 1. Hit-Test: `dist² ≤ hit_distance_sq`
/// 2. Greifen: kein aktiver Punkt, Zeiger in der Zeichenfläche,
///    Primärtaste gerade gedrückt, Hit-Test erfolgreich
/// 3. Verfolgen: aktiver Punkt folgt dem auf `[0, w] × [0, h]` begrenzten
///    Zeiger, solange die Taste gehalten ist; sonst wird losgelassen
///
/// Überlappen sich mehrere Trefferkreise, gewinnt der kleinste Index.
pub fn drag_points(
    curve: &mut CurveState,
    input: &FrameInput,
    canvas_size: Vec2,
    hit_distance_sq: f32,
) {
    let (points, drag) = curve.split_mut();
    let clamp_max = canvas_size.max(Vec2::ZERO);

    for index in 1..points.len() {
        let Some(position) = points.point(index) else {
            continue;
        };
        let hovered = input.pointer.distance_squared(position) <= hit_distance_sq;

        if !drag.is_dragging() && hovered && input.pointer_in_canvas && input.primary_pressed {
            drag.acquire(index);
            log::debug!("Punkt {} gegriffen", index);
        }

        if drag.is_active(index) {
            if input.primary_down {
                points.set_point(index, input.pointer.clamp(Vec2::ZERO, clamp_max));
            } else {
                drag.release();
                log::debug!("Punkt {} losgelassen", index);
            }
        }
    }

    if drag
        .active_index()
        .is_some_and(|index| points.point(index).is_none())
    {
        drag.release();
    }
}
