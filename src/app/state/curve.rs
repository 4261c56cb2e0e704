use super::DragState;
use crate::core::ControlPointSequence;
use glam::Vec2;

/// Kurvenmodell plus Drag-Zustand.
///
/// Beide Teile werden nur gemeinsam geleert, damit nach `clear` nie ein
/// Drag-Index auf einen entfernten Punkt zeigt.
#[derive(Debug, Clone, Default)]
pub struct CurveState {
    points: ControlPointSequence,
    drag: DragState,
}

impl CurveState {
    /// Erstellt eine leere Kurve ohne aktiven Drag.
    pub fn new() -> Self {
        Self {
            points: ControlPointSequence::new(),
            drag: DragState::new(),
        }
    }

    /// Read-only Zugriff auf die Kontrollpunkte.
    pub fn points(&self) -> &ControlPointSequence {
        &self.points
    }

    /// Read-only Zugriff auf den Drag-Zustand.
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Hängt ein Tripel um `center` an und gibt den Index des ersten Punkts zurück.
    pub fn append_triple(&mut self, center: Vec2, handle_offset: f32) -> usize {
        self.points.append_triple_with_offset(center, handle_offset)
    }

    /// Leert Punkte und Drag-Zustand in einem Schritt.
    pub fn clear(&mut self) {
        self.points.clear();
        self.drag.release();
    }

    /// Gleichzeitiger Schreibzugriff auf Punkte und Drag-Zustand (Drag-Logik).
    pub(crate) fn split_mut(&mut self) -> (&mut ControlPointSequence, &mut DragState) {
        (&mut self.points, &mut self.drag)
    }
}
