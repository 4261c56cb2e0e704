//! Einstellungs-Panel (rechte Seitenleiste) mit Hilfe, Sichtbarkeit, Auflösung und Status.

use super::color32;
use super::status::render_status_section;
use crate::app::{AppIntent, AppState};
use crate::shared::{RenderLayer, RenderScene, RenderSettings};
use egui::RichText;

/// Helligkeitsfaktor der Fußzeile relativ zur Panel-Farbe.
const FOOTER_BRIGHTNESS: f32 = 0.6;

/// Farben, die im ganzen Panel gebraucht werden.
struct PanelColors {
    text: egui::Color32,
    accent: egui::Color32,
}

/// Rendert das Einstellungs-Panel und gibt erzeugte Events zurück.
///
/// `scene` ist die Szene des letzten Frames und speist nur die Statuszeilen.
pub fn render_settings_panel(
    ctx: &egui::Context,
    state: &AppState,
    scene: &RenderScene,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let options = &state.options;
    let settings = state.view.render_settings;
    let colors = PanelColors {
        text: color32(options.text_color),
        accent: color32(options.curve_color),
    };

    let frame = egui::Frame::NONE
        .fill(color32(options.panel_color))
        .inner_margin(egui::Margin::same(12));

    egui::SidePanel::right("settings_panel")
        .exact_width(options.panel_width)
        .resizable(false)
        .frame(frame)
        .show(ctx, |ui| {
            for line in ["C: Clear Canvas", "RMB: Place Dots", "LMB: Move Dots"] {
                ui.label(RichText::new(line).color(colors.text));
            }
            ui.separator();

            ui.label(RichText::new("Control Points:").color(colors.text).strong());
            toggle_row(
                ui,
                "Draw Lines?",
                RenderLayer::ConstructionLines,
                &settings,
                &colors,
                &mut events,
            );
            toggle_row(
                ui,
                "Draw Dots?",
                RenderLayer::HandleDots,
                &settings,
                &colors,
                &mut events,
            );
            ui.separator();

            ui.label(RichText::new("Spline:").color(colors.text).strong());
            resolution_row(ui, state, &colors, &mut events);
            toggle_row(
                ui,
                "Draw Dots?",
                RenderLayer::JoinDots,
                &settings,
                &colors,
                &mut events,
            );
            toggle_row(
                ui,
                "Draw Curve?",
                RenderLayer::Curve,
                &settings,
                &colors,
                &mut events,
            );
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .button("Speichern")
                    .on_hover_text("Aktuelle Einstellungen als Startwerte speichern")
                    .clicked()
                {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui
                    .button("Standard")
                    .on_hover_text("Optionen auf Standardwerte zurücksetzen")
                    .clicked()
                {
                    events.push(AppIntent::ResetOptionsRequested);
                }
            });

            ui.separator();
            render_status_section(ui, scene, state.status_message.as_deref(), colors.text);

            let [r, g, b, a] = options.panel_color;
            let footer = color32([
                r * FOOTER_BRIGHTNESS,
                g * FOOTER_BRIGHTNESS,
                b * FOOTER_BRIGHTNESS,
                a,
            ]);
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.label(RichText::new("splines").color(footer));
            });
        });

    events
}

/// Zeile mit Beschriftung und "yes"/"no"-Schalter für eine Zeichenebene.
fn toggle_row(
    ui: &mut egui::Ui,
    label: &str,
    layer: RenderLayer,
    settings: &RenderSettings,
    colors: &PanelColors,
    events: &mut Vec<AppIntent>,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(colors.text));
        let text = if settings.is_visible(layer) { "yes" } else { "no" };
        let button = egui::Button::new(RichText::new(text).color(colors.accent)).frame(false);
        if ui.add(button).clicked() {
            events.push(AppIntent::ToggleVisibilityRequested { layer });
        }
    });
}

/// Auflösungs-Regler; reagiert zusätzlich auf das Mausrad, solange er überfahren wird.
fn resolution_row(
    ui: &mut egui::Ui,
    state: &AppState,
    colors: &PanelColors,
    events: &mut Vec<AppIntent>,
) {
    let options = &state.options;
    ui.horizontal(|ui| {
        ui.label(RichText::new("Curvature:").color(colors.text));

        let mut value = state.view.render_settings.resolution;
        let response = ui.add(egui::Slider::new(
            &mut value,
            options.min_resolution..=options.max_resolution,
        ));
        if response.changed() {
            events.push(AppIntent::ResolutionChanged { value });
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if let Some(steps) = scroll_steps(scroll) {
                events.push(AppIntent::ResolutionScrolled { steps });
            }
        }
    });
}

/// Eine Mausrad-Bewegung entspricht genau einer Raste.
fn scroll_steps(delta: f32) -> Option<i32> {
    if delta > 0.0 {
        Some(1)
    } else if delta < 0.0 {
        Some(-1)
    } else {
        None
    }
}
