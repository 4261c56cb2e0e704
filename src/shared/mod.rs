//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod frame_input;
pub mod options;
mod render_scene;
mod render_settings;

pub use frame_input::FrameInput;
pub use options::EditorOptions;
pub use render_scene::RenderScene;
pub use render_settings::{RenderLayer, RenderSettings};
