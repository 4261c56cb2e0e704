//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use super::RenderSettings;
use crate::core::ConstructionLine;
use glam::Vec2;

/// Read-only Zeichenliste für einen Frame.
///
/// Ausgeblendete Ebenen sind bereits leer; der Painter zeichnet alles,
/// was enthalten ist.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Größe der Zeichenfläche in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Auflösung und Sichtbarkeit dieses Frames
    pub settings: RenderSettings,
    /// Laufzeit-Optionen für Farben, Radien, Breiten
    pub options: EditorOptions,
    /// Eine Polylinie pro Segment (erster Kontrollpunkt + Samples)
    pub curve_polylines: Vec<Vec<Vec2>>,
    /// Konstruktionslinien zwischen Rohpunkten
    pub construction_lines: Vec<ConstructionLine>,
    /// Verbindungspunkte (Anker)
    pub join_dots: Vec<Vec2>,
    /// Handle-Punkte
    pub handle_dots: Vec<Vec2>,
    /// Logischer Index des aktuell gezogenen Punkts
    pub active_index: Option<usize>,
    /// Anzahl platzierter Punkte (ohne Sentinel)
    pub point_count: usize,
    /// Anzahl vollständiger Segmente
    pub segment_count: usize,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.curve_polylines.is_empty()
            && self.construction_lines.is_empty()
            && self.join_dots.is_empty()
            && self.handle_dots.is_empty()
    }
}
