//! Zeichenflächen-Input: Zeiger, Maustasten, Tastatur → AppIntent.
//!
//! Reihenfolge pro Frame: Größe, Drag-Eingabe, Leeren, Platzieren.
//! Der Controller arbeitet die Intents in genau dieser Reihenfolge ab.

use super::keyboard;
use crate::app::AppIntent;
use crate::shared::FrameInput;
use glam::Vec2;

/// Rohzustand des Zeigers in Bildschirmkoordinaten.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Letzte bekannte Zeigerposition (Bildschirm)
    pub position: Option<egui::Pos2>,
    /// Primärtaste in diesem Frame gedrückt
    pub primary_pressed: bool,
    /// Primärtaste gehalten
    pub primary_down: bool,
    /// Sekundärtaste in diesem Frame gedrückt
    pub secondary_pressed: bool,
}

impl PointerSnapshot {
    /// Liest den Zeigerzustand aus dem egui-Input.
    pub fn capture(ui: &egui::Ui) -> Self {
        ui.input(|i| Self {
            position: i.pointer.latest_pos(),
            primary_pressed: i.pointer.primary_pressed(),
            primary_down: i.pointer.primary_down(),
            secondary_pressed: i.pointer.secondary_pressed(),
        })
    }
}

/// Rechnet einen Bildschirm-Zeiger in Zeichenflächen-Koordinaten um.
///
/// Ohne bekannte Zeigerposition gibt es keine Eingabe für den Drag.
pub fn to_canvas_input(pointer: &PointerSnapshot, canvas_rect: egui::Rect) -> Option<FrameInput> {
    let position = pointer.position?;
    let local = Vec2::new(position.x - canvas_rect.min.x, position.y - canvas_rect.min.y);
    let size = Vec2::new(canvas_rect.width(), canvas_rect.height());

    Some(FrameInput {
        pointer: local,
        pointer_in_canvas: FrameInput::is_inside_canvas(local, size),
        primary_pressed: pointer.primary_pressed,
        primary_down: pointer.primary_down,
    })
}

/// Verwaltet den Input-Zustand der Zeichenfläche über Frames hinweg.
#[derive(Debug, Default)]
pub struct InputState {
    /// Letzte bekannte Zeigerposition (Bildschirm)
    last_position: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_position: None,
        }
    }

    /// Sammelt alle Zeichenflächen-Events eines Frames.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        canvas_rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let pointer = PointerSnapshot::capture(ui);
        self.canvas_intents(
            pointer,
            canvas_rect,
            keyboard::collect_keyboard_intents(ui),
        )
    }

    /// Baut die Intents eines Frames aus Zeigerzustand und Tastatur-Intents.
    ///
    /// Verlässt der Zeiger das Fenster, gilt die letzte bekannte Position weiter.
    pub fn canvas_intents(
        &mut self,
        pointer: PointerSnapshot,
        canvas_rect: egui::Rect,
        keyboard_intents: Vec<AppIntent>,
    ) -> Vec<AppIntent> {
        let pointer = self.resolve(pointer);
        let input = to_canvas_input(&pointer, canvas_rect);

        let mut events = vec![AppIntent::CanvasResized {
            size: [canvas_rect.width(), canvas_rect.height()],
        }];
        if let Some(input) = input {
            events.push(AppIntent::FrameInputReceived { input });
        }

        events.extend(keyboard_intents);

        if let Some(input) = input.filter(|_| pointer.secondary_pressed) {
            events.push(AppIntent::PlaceTripleRequested {
                pointer: input.pointer,
                pointer_in_canvas: input.pointer_in_canvas,
            });
        }

        events
    }

    fn resolve(&mut self, mut pointer: PointerSnapshot) -> PointerSnapshot {
        match pointer.position {
            Some(position) => self.last_position = Some(position),
            None => pointer.position = self.last_position,
        }
        pointer
    }
}
