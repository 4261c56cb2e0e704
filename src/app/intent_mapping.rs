//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FrameInputReceived { input } => vec![AppCommand::UpdateDrag { input }],
        AppIntent::ClearCanvasRequested => vec![AppCommand::ClearCurve],
        AppIntent::PlaceTripleRequested {
            pointer,
            pointer_in_canvas,
        } => {
            // Klicks auf das Seitenpanel platzieren nichts
            if pointer_in_canvas {
                vec![AppCommand::AppendTriple { center: pointer }]
            } else {
                vec![]
            }
        }
        AppIntent::ResolutionScrolled { steps } => {
            let target = i64::from(state.view.render_settings.resolution) + i64::from(steps);
            vec![AppCommand::SetResolution {
                value: state.options.clamp_resolution(target),
            }]
        }
        AppIntent::ResolutionChanged { value } => vec![AppCommand::SetResolution { value }],
        AppIntent::ToggleVisibilityRequested { layer } => {
            vec![AppCommand::ToggleVisibility { layer }]
        }
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions {
            path: state.options_path.clone(),
        }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions {
            path: state.options_path.clone(),
        }],
        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
