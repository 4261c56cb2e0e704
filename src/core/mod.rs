//! Core-Domänentypen: Kontrollpunkt-Folge, Bézier-Auswertung, Punkt-Rollen.

pub mod bezier;
/// Kurvenmodell
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - ControlPointSequence: Kontrollpunkte mit Sentinel an Index 0
/// - SegmentSamples: Lazy Polylinien-Approximation eines Segments
/// - PointRole: Anker/Handle-Klassifikation nach `index % 3`
pub mod control_points;
pub mod point_role;

pub use bezier::{de_casteljau, lerp, SegmentSamples};
pub use control_points::{
    ConstructionLine, ConstructionLineKind, ControlPointSequence, DEFAULT_HANDLE_OFFSET,
    SENTINEL_INDEX,
};
pub use point_role::PointRole;
