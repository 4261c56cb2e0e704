use crate::shared::{FrameInput, RenderLayer};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger- und Tastenzustand dieses Frames (steuert den Drag)
    FrameInputReceived { input: FrameInput },
    /// Zeichenfläche leeren (Taste C)
    ClearCanvasRequested,
    /// Tripel an der Zeigerposition platzieren (Sekundärtaste)
    PlaceTripleRequested {
        pointer: glam::Vec2,
        pointer_in_canvas: bool,
    },
    /// Mausrad über dem Auflösungs-Regler (Rasten, positiv = mehr)
    ResolutionScrolled { steps: i32 },
    /// Auflösung über den Regler gesetzt
    ResolutionChanged { value: u32 },
    /// Sichtbarkeit einer Zeichenebene umschalten
    ToggleVisibilityRequested { layer: RenderLayer },
    /// Aktuelle Darstellungs-Einstellungen als Startwerte speichern
    SaveOptionsRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Größe der Zeichenfläche hat sich geändert
    CanvasResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
}
