use crate::app::CommandLog;
use crate::shared::EditorOptions;
use std::path::PathBuf;

use super::{CurveState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte und aktiver Drag
    pub curve: CurveState,
    /// View-State (Zeichenfläche, Darstellungs-Einstellungen)
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Grenzen)
    pub options: EditorOptions,
    /// Ziel für Speichern/Zurücksetzen der Optionen
    pub options_path: PathBuf,
    /// Temporäre Statusnachricht (z.B. Optionen gespeichert)
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            curve: CurveState::new(),
            view: ViewState::new(&options),
            command_log: CommandLog::new(),
            options,
            options_path: EditorOptions::config_path(),
            status_message: None,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl platzierter Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.curve.points().len() - 1
    }

    /// Gibt die Anzahl vollständiger Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.curve.points().segment_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
