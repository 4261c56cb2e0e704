//! Eingabe-Schnappschuss eines Frames (Zeiger + Maustasten).

use glam::Vec2;

/// Zustand der Zeigereingabe in einem Frame, in Zeichenflächen-Koordinaten.
///
/// Wird vom UI-Layer einmal pro Frame erzeugt und von der Drag-Logik
/// konsumiert. Clear-Taste und Mausrad laufen als eigene Intents.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Zeigerposition relativ zur linken oberen Ecke der Zeichenfläche
    pub pointer: Vec2,
    /// Zeiger liegt innerhalb der Zeichenfläche
    pub pointer_in_canvas: bool,
    /// Primärtaste wurde in diesem Frame gedrückt
    pub primary_pressed: bool,
    /// Primärtaste ist gehalten (inkl. Druck-Frame)
    pub primary_down: bool,
}

impl FrameInput {
    /// Prüft, ob `pointer` echt innerhalb von `(0, width) × (0, height)` liegt.
    pub fn is_inside_canvas(pointer: Vec2, canvas_size: Vec2) -> bool {
        pointer.x > 0.0 && pointer.x < canvas_size.x && pointer.y > 0.0 && pointer.y < canvas_size.y
    }
}
