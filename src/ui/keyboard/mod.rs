//! Keyboard-Shortcuts für die Zeichenfläche.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// `C` leert die Zeichenfläche, unabhängig von Modifiern und Zeigerposition.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.input(|i| i.key_pressed(egui::Key::C)) {
        events.push(AppIntent::ClearCanvasRequested);
    }

    events
}
