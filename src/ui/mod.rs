//! UI-Komponenten: Einstellungs-Panel mit Status, Zeichenfläche, Input-Handling.

pub mod canvas;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten. Keyboard-Shortcuts und
/// Zeiger-Auswertung sind in eigene Dateien extrahiert.
pub mod settings_panel;
pub mod status;

pub use canvas::paint_scene;
pub use input::InputState;
pub use settings_panel::render_settings_panel;

/// Wandelt eine RGBA-Farbe `[0, 1]` in eine egui-Farbe um.
pub(crate) fn color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}
