//! Zentrale Konfiguration für den C0 Spline Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Fensterbreite beim Start (Pixel).
pub const WINDOW_WIDTH: f32 = 1100.0;
/// Fensterhöhe beim Start (Pixel).
pub const WINDOW_HEIGHT: f32 = 800.0;
/// Breite des Einstellungs-Panels rechts (Pixel). Die Zeichenfläche ist der Rest.
pub const PANEL_WIDTH: f32 = 300.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Hit-Radius eines Punkts; getroffen wird innerhalb von `2 * HIT_RADIUS`.
pub const HIT_RADIUS: f32 = 5.0;
/// Vertikaler Abstand der Handles zum Klickpunkt beim Platzieren.
pub const HANDLE_OFFSET: f32 = crate::core::DEFAULT_HANDLE_OFFSET;

// ── Auflösung ───────────────────────────────────────────────────────

/// Standard-Anzahl Stützpunkte pro Segment.
pub const DEFAULT_RESOLUTION: u32 = 50;
/// Minimale Auflösung (0 = Kurve wird nicht gezeichnet).
pub const MIN_RESOLUTION: u32 = 0;
/// Maximale Auflösung.
pub const MAX_RESOLUTION: u32 = 150;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Verbindungspunkte (Anker).
pub const JOIN_DOT_RADIUS: f32 = 5.0;
/// Radius der Handle-Punkte.
pub const HANDLE_DOT_RADIUS: f32 = 3.0;
/// Linienstärke der Kurve.
pub const CURVE_STROKE_WIDTH: f32 = 5.0;
/// Linienstärke der Konstruktionslinien.
pub const CONSTRUCTION_STROKE_WIDTH: f32 = 2.0;
/// Farbe von Kurve und Ankern (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.475, 0.945, 1.0];
/// Farbe der Handle-Punkte (RGBA: Lime).
pub const HANDLE_COLOR: [f32; 4] = [0.0, 0.62, 0.184, 1.0];
/// Farbe der Konstruktionslinien (RGBA: Dunkelgrau).
pub const CONSTRUCTION_COLOR: [f32; 4] = [0.157, 0.157, 0.157, 1.0];
/// Helligkeitsfaktor für Linien zwischen zwei Handles.
pub const CHORD_BRIGHTNESS: f32 = 0.5;
/// Hintergrund der Zeichenfläche (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hintergrund des Einstellungs-Panels.
pub const PANEL_COLOR: [f32; 4] = [0.114, 0.114, 0.114, 1.0];
/// Textfarbe im Einstellungs-Panel.
pub const TEXT_COLOR: [f32; 4] = [0.569, 0.569, 0.569, 1.0];

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "c0_spline_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `c0_spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Fensterbreite beim Start
    pub window_width: f32,
    /// Fensterhöhe beim Start
    pub window_height: f32,
    /// Breite des Einstellungs-Panels
    pub panel_width: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Hit-Radius für das Greifen von Punkten
    pub hit_radius: f32,
    /// Handle-Abstand beim Platzieren eines Tripels
    pub handle_offset: f32,

    // ── Auflösung ───────────────────────────────────────────────
    /// Auflösung beim Start
    pub default_resolution: u32,
    /// Untere Grenze der Auflösung
    pub min_resolution: u32,
    /// Obere Grenze der Auflösung
    pub max_resolution: u32,

    // ── Sichtbarkeit beim Start ─────────────────────────────────
    /// Konstruktionslinien anzeigen
    #[serde(default = "default_true")]
    pub show_construction_lines: bool,
    /// Handle-Punkte anzeigen
    #[serde(default = "default_true")]
    pub show_handle_dots: bool,
    /// Verbindungspunkte anzeigen
    #[serde(default = "default_true")]
    pub show_join_dots: bool,
    /// Kurve anzeigen
    #[serde(default = "default_true")]
    pub show_curve: bool,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Verbindungspunkte
    pub join_dot_radius: f32,
    /// Radius der Handle-Punkte
    pub handle_dot_radius: f32,
    /// Linienstärke der Kurve
    pub curve_stroke_width: f32,
    /// Linienstärke der Konstruktionslinien
    pub construction_stroke_width: f32,
    /// Farbe von Kurve und Verbindungspunkten
    pub curve_color: [f32; 4],
    /// Farbe der Handle-Punkte
    pub handle_color: [f32; 4],
    /// Farbe der Konstruktionslinien
    pub construction_color: [f32; 4],
    /// Helligkeitsfaktor für Handle-zu-Handle-Linien
    #[serde(default = "default_chord_brightness")]
    pub chord_brightness: f32,
    /// Hintergrund der Zeichenfläche
    pub background_color: [f32; 4],
    /// Hintergrund des Einstellungs-Panels
    pub panel_color: [f32; 4],
    /// Textfarbe im Einstellungs-Panel
    pub text_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            panel_width: PANEL_WIDTH,

            hit_radius: HIT_RADIUS,
            handle_offset: HANDLE_OFFSET,

            default_resolution: DEFAULT_RESOLUTION,
            min_resolution: MIN_RESOLUTION,
            max_resolution: MAX_RESOLUTION,

            show_construction_lines: true,
            show_handle_dots: true,
            show_join_dots: true,
            show_curve: true,

            join_dot_radius: JOIN_DOT_RADIUS,
            handle_dot_radius: HANDLE_DOT_RADIUS,
            curve_stroke_width: CURVE_STROKE_WIDTH,
            construction_stroke_width: CONSTRUCTION_STROKE_WIDTH,
            curve_color: CURVE_COLOR,
            handle_color: HANDLE_COLOR,
            construction_color: CONSTRUCTION_COLOR,
            chord_brightness: CHORD_BRIGHTNESS,
            background_color: BACKGROUND_COLOR,
            panel_color: PANEL_COLOR,
            text_color: TEXT_COLOR,
        }
    }
}

/// Serde-Default für die Sichtbarkeits-Flags (Abwärtskompatibilität).
fn default_true() -> bool {
    true
}

/// Serde-Default für `chord_brightness` (Abwärtskompatibilität).
fn default_chord_brightness() -> f32 {
    CHORD_BRIGHTNESS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("c0_spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Quadrierter Hit-Abstand: `(2 * hit_radius)²`.
    pub fn hit_distance_sq(&self) -> f32 {
        let threshold = 2.0 * self.hit_radius;
        threshold * threshold
    }

    /// Begrenzt eine (ggf. negative) Auflösung auf `min_resolution..=max_resolution`.
    pub fn clamp_resolution(&self, value: i64) -> u32 {
        let clamped = value.clamp(self.min_resolution as i64, self.max_resolution as i64);
        clamped as u32
    }

    /// Korrigiert vertauschte Grenzen und eine Start-Auflösung außerhalb des Bereichs.
    fn sanitized(mut self) -> Self {
        if self.min_resolution > self.max_resolution {
            std::mem::swap(&mut self.min_resolution, &mut self.max_resolution);
        }
        self.default_resolution = self.clamp_resolution(self.default_resolution as i64);
        self
    }
}
