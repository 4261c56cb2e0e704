//! Application State: zentrale Datenhaltung.
//!
//! Der gesamte veränderliche Zustand liegt in einem `AppState`, den die
//! Frame-Schleife besitzt und pro Frame per `&mut` an den Controller reicht.

mod app_state;
mod curve;
mod drag;
mod view;

pub use app_state::AppState;
pub use curve::CurveState;
pub use drag::DragState;
pub use view::ViewState;
