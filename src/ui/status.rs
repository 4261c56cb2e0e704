//! Statusanzeige im Einstellungs-Panel.
//!
//! Liegt im Panel statt in einer eigenen Leiste, damit die Zeichenfläche die
//! volle Fensterhöhe behält.

use crate::app::render_scene::polyline_vertex_count;
use crate::shared::RenderScene;

/// Rendert die Statuszeilen in das übergebene Panel.
pub fn render_status_section(
    ui: &mut egui::Ui,
    scene: &RenderScene,
    status_message: Option<&str>,
    text_color: egui::Color32,
) {
    let lines = [
        format!(
            "Punkte: {} | Segmente: {}",
            scene.point_count, scene.segment_count
        ),
        format!(
            "Auflösung: {} | Kurvenpunkte: {}",
            scene.settings.resolution,
            polyline_vertex_count(scene)
        ),
        match scene.active_index {
            Some(index) => format!("Aktiver Punkt: {}", index),
            None => "Aktiver Punkt: -".to_string(),
        },
        format!("FPS: {:.0}", ui.ctx().input(|i| 1.0 / i.stable_dt)),
    ];
    for line in lines {
        ui.label(egui::RichText::new(line).color(text_color).small());
    }

    // Statusnachricht (z.B. Optionen gespeichert)
    if let Some(msg) = status_message {
        ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW).small());
    }
}
