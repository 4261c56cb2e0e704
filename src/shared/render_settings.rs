//! Darstellungs-Einstellungen (shared zwischen App und UI).

use super::EditorOptions;

/// Einzeln ein-/ausblendbare Zeichenebene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderLayer {
    /// Linien zwischen benachbarten Kontrollpunkten
    ConstructionLines,
    /// Handle-Punkte
    HandleDots,
    /// Verbindungspunkte (Anker)
    JoinDots,
    /// Die Kurve selbst
    Curve,
}

impl RenderLayer {
    /// Alle Ebenen in Panel-Reihenfolge.
    pub const ALL: [RenderLayer; 4] = [
        RenderLayer::ConstructionLines,
        RenderLayer::HandleDots,
        RenderLayer::JoinDots,
        RenderLayer::Curve,
    ];
}

/// Auflösung und Sichtbarkeit der Zeichenebenen.
///
/// Kein Teil des Kurvenmodells; nur die Auflösung fließt in
/// `ControlPointSequence::evaluate_segment` ein.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Stützpunkte pro Segment
    pub resolution: u32,
    /// Konstruktionslinien sichtbar
    pub show_construction_lines: bool,
    /// Handle-Punkte sichtbar
    pub show_handle_dots: bool,
    /// Verbindungspunkte sichtbar
    pub show_join_dots: bool,
    /// Kurve sichtbar
    pub show_curve: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

impl RenderSettings {
    /// Übernimmt die Startwerte aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            resolution: options.default_resolution,
            show_construction_lines: options.show_construction_lines,
            show_handle_dots: options.show_handle_dots,
            show_join_dots: options.show_join_dots,
            show_curve: options.show_curve,
        }
    }

    /// Gibt zurück, ob eine Ebene gezeichnet wird.
    pub fn is_visible(&self, layer: RenderLayer) -> bool {
        match layer {
            RenderLayer::ConstructionLines => self.show_construction_lines,
            RenderLayer::HandleDots => self.show_handle_dots,
            RenderLayer::JoinDots => self.show_join_dots,
            RenderLayer::Curve => self.show_curve,
        }
    }

    /// Schaltet die Sichtbarkeit einer Ebene um.
    pub fn toggle(&mut self, layer: RenderLayer) {
        let flag = match layer {
            RenderLayer::ConstructionLines => &mut self.show_construction_lines,
            RenderLayer::HandleDots => &mut self.show_handle_dots,
            RenderLayer::JoinDots => &mut self.show_join_dots,
            RenderLayer::Curve => &mut self.show_curve,
        };
        *flag = !*flag;
    }

    /// Schreibt die aktuellen Werte als Startwerte zurück in die Optionen.
    pub fn store_into(&self, options: &mut EditorOptions) {
        options.default_resolution = self.resolution;
        options.show_construction_lines = self.show_construction_lines;
        options.show_handle_dots = self.show_handle_dots;
        options.show_join_dots = self.show_join_dots;
        options.show_curve = self.show_curve;
    }
}
