//! C0 Spline Editor.
//!
//! Interaktiver Editor für stückweise kubische Bézier-Kurven mit
//! C0-Stetigkeit: Tripel platzieren, Punkte ziehen, Auflösung einstellen.

use c0_spline_editor::{ui, AppController, AppIntent, AppState, EditorOptions, RenderScene};
use eframe::egui;

/// Fenstertitel
const WINDOW_TITLE: &str = "SPLINES - C^0 CONTINUITY";

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("C0 Spline Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([editor_options.window_width, editor_options.window_height])
                .with_title(WINDOW_TITLE),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            WINDOW_TITLE,
            native_options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(editor_options, config_path)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    /// Letzte bekannte Zeigerposition über Frames hinweg
    input: ui::InputState,
    /// Szene des letzten Frames (für die Statusanzeige)
    scene: RenderScene,
}

impl EditorApp {
    fn new(options: EditorOptions, config_path: std::path::PathBuf) -> Self {
        let mut state = AppState::with_options(options);
        state.options_path = config_path;
        let controller = AppController::new();
        let scene = controller.build_render_scene(&state);

        Self {
            state,
            controller,
            input: ui::InputState::new(),
            scene,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let panel_events = ui::render_settings_panel(ctx, &self.state, &self.scene);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |canvas_ui| {
                let (rect, _response) = canvas_ui
                    .allocate_exact_size(canvas_ui.available_size(), egui::Sense::click_and_drag());

                let mut events = panel_events;
                events.extend(self.input.collect_canvas_events(canvas_ui, rect));

                let has_meaningful_events = events.iter().any(|e| {
                    !matches!(
                        e,
                        AppIntent::CanvasResized { .. } | AppIntent::FrameInputReceived { .. }
                    )
                });

                // Alle Intents vor dem Szenenaufbau, damit der Frame den neuen Zustand zeigt
                self.process_events(events);

                self.scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(&canvas_ui.painter_at(rect), rect, &self.scene);

                if has_meaningful_events || self.state.curve.drag().is_dragging() {
                    ctx.request_repaint();
                }
            });
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.status_message = Some(format!("Fehler: {e}"));
            }
        }
    }
}
