//! C0 Spline Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CurveState, DragState, ViewState};
pub use core::{
    de_casteljau, ConstructionLine, ConstructionLineKind, ControlPointSequence, PointRole,
    SegmentSamples,
};
pub use shared::{EditorOptions, FrameInput, RenderLayer, RenderScene, RenderSettings};
