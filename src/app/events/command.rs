use crate::shared::{FrameInput, RenderLayer};
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Drag-Logik für alle Punkte mit der Eingabe dieses Frames ausführen
    UpdateDrag { input: FrameInput },
    /// Alle Kontrollpunkte und den aktiven Drag verwerfen
    ClearCurve,
    /// Tripel um `center` anhängen
    AppendTriple { center: glam::Vec2 },
    /// Auflösung setzen (wird auf den erlaubten Bereich begrenzt)
    SetResolution { value: u32 },
    /// Sichtbarkeit einer Zeichenebene umschalten
    ToggleVisibility { layer: RenderLayer },
    /// Darstellungs-Einstellungen in die Optionen-Datei schreiben
    SaveOptions { path: PathBuf },
    /// Optionen zurücksetzen und speichern
    ResetOptions { path: PathBuf },
    /// Größe der Zeichenfläche setzen
    SetCanvasSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Gibt zurück, ob der Command in jedem Frame erzeugt wird.
    ///
    /// Solche Commands landen nicht im Command-Log.
    pub fn is_frame_update(&self) -> bool {
        matches!(
            self,
            AppCommand::UpdateDrag { .. } | AppCommand::SetCanvasSize { .. }
        )
    }
}
