//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        if !command.is_frame_update() {
            state.command_log.record(&command);
        }
        use super::handlers;

        match command {
            // === Kurve ===
            AppCommand::UpdateDrag { input } => handlers::drag::update(state, &input),
            AppCommand::ClearCurve => handlers::curve::clear(state),
            AppCommand::AppendTriple { center } => handlers::curve::append_triple(state, center),

            // === Darstellung & Zeichenfläche ===
            AppCommand::SetResolution { value } => handlers::view::set_resolution(state, value),
            AppCommand::ToggleVisibility { layer } => {
                handlers::view::toggle_visibility(state, layer)
            }
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),

            // === Optionen ===
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,
            AppCommand::ResetOptions { path } => handlers::options::reset(state, &path)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
