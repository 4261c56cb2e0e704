//! Use-Cases der Application-Layer-Orchestrierung.

pub mod curve;
pub mod drag;
pub mod options;
pub mod render_settings;
pub mod viewport;
