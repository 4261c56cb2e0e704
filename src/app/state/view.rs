use crate::shared::{EditorOptions, RenderSettings};
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Größe der Zeichenfläche in Pixeln (Fenster minus Seitenpanel)
    pub canvas_size: Vec2,
    /// Auflösung und Sichtbarkeit der Zeichenebenen
    pub render_settings: RenderSettings,
}

impl ViewState {
    /// Erstellt den View-Zustand aus den Startwerten der Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            canvas_size: Vec2::new(
                (options.window_width - options.panel_width).max(0.0),
                options.window_height,
            ),
            render_settings: RenderSettings::from_options(options),
        }
    }
}
