//! Kontrollpunkt-Folge mit reserviertem Sentinel an Index 0.
//!
//! Logische Indizes zählen den Sentinel mit: der erste platzierte Punkt hat
//! Index 1. Segment `k` nutzt die Punkte `3k+1 ..= 3k+4`, benachbarte
//! Segmente teilen sich also genau einen Punkt (C0-Stetigkeit).

use super::bezier::SegmentSamples;
use super::point_role::{self, PointRole};
use glam::Vec2;

/// Logischer Index des Sentinels.
pub const SENTINEL_INDEX: usize = 0;
/// Vertikaler Abstand der Handles zum Klickpunkt beim Platzieren (Pixel).
pub const DEFAULT_HANDLE_OFFSET: f32 = 30.0;

/// Art einer Konstruktionslinie zwischen zwei benachbarten Rohpunkten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionLineKind {
    /// Linie zwischen Anker und Handle
    HandleArm,
    /// Linie zwischen zwei Handles (wird dunkler gezeichnet)
    Chord,
}

/// Konstruktionslinie zwischen den Punkten `from` und `from + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructionLine {
    /// Logischer Index des Startpunkts
    pub from: usize,
    /// Position des Startpunkts
    pub start: Vec2,
    /// Position des Endpunkts (Index `from + 1`)
    pub end: Vec2,
    /// Darstellungsart
    pub kind: ConstructionLineKind,
}

/// Geordnete Folge der Kontrollpunkte.
///
/// Wächst nur über `append_triple`, schrumpft nur über `clear`. Der Sentinel
/// ist immer logisch vorhanden, wird aber nie gespeichert oder herausgegeben.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointSequence {
    /// Vom Benutzer platzierte Punkte; Speicherindex = logischer Index - 1
    points: Vec<Vec2>,
}

impl ControlPointSequence {
    /// Erstellt eine leere Folge (nur Sentinel).
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Anzahl der Punkte inklusive Sentinel.
    pub fn len(&self) -> usize {
        self.points.len() + 1
    }

    /// Gibt `true` zurück, wenn keine Punkte platziert wurden.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entfernt alle Punkte. Der Sentinel bleibt logisch bestehen.
    ///
    /// Ein gehaltener Drag-Index wird dadurch ungültig und muss im selben
    /// Schritt verworfen werden (siehe `CurveState::clear`).
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Hängt ein Tripel mit dem Standard-Handle-Abstand an.
    pub fn append_triple(&mut self, center: Vec2) -> usize {
        self.append_triple_with_offset(center, DEFAULT_HANDLE_OFFSET)
    }

    /// Hängt `(x, y - offset)`, `center`, `(x, y + offset)` an.
    ///
    /// Gibt den logischen Index des ersten neuen Punkts zurück.
    pub fn append_triple_with_offset(&mut self, center: Vec2, offset: f32) -> usize {
        let first = self.len();
        self.points.extend([
            Vec2::new(center.x, center.y - offset),
            center,
            Vec2::new(center.x, center.y + offset),
        ]);
        first
    }

    /// Position an einem logischen Index (`None` für Sentinel und außerhalb).
    pub fn point(&self, index: usize) -> Option<Vec2> {
        let slot = index.checked_sub(1)?;
        self.points.get(slot).copied()
    }

    /// Setzt die Position eines vorhandenen Punkts. Der Sentinel ist nicht setzbar.
    pub fn set_point(&mut self, index: usize, position: Vec2) -> bool {
        let Some(slot) = index.checked_sub(1) else {
            return false;
        };
        match self.points.get_mut(slot) {
            Some(point) => {
                *point = position;
                true
            }
            None => false,
        }
    }

    /// Iteriert `(logischer Index, Position)` über alle platzierten Punkte.
    pub fn points(&self) -> impl Iterator<Item = (usize, Vec2)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(slot, &position)| (slot + 1, position))
    }

    /// Anzahl vollständiger Segmente: `max(0, floor((len - 2) / 3))`.
    pub fn segment_count(&self) -> usize {
        self.len().saturating_sub(2) / 3
    }

    /// Die vier Kontrollpunkte von Segment `segment`.
    pub fn segment_controls(&self, segment: usize) -> Option<[Vec2; 4]> {
        if segment >= self.segment_count() {
            return None;
        }
        let slot = segment * 3;
        self.points.get(slot..slot + 4)?.try_into().ok()
    }

    /// Wertet Segment `segment` mit `resolution` Stützpunkten aus.
    ///
    /// Unbekannte Segmente und `resolution == 0` liefern eine leere Folge.
    pub fn evaluate_segment(&self, segment: usize, resolution: u32) -> SegmentSamples {
        match self.segment_controls(segment) {
            Some(controls) => SegmentSamples::new(controls, resolution),
            None => SegmentSamples::empty(),
        }
    }

    /// Rolle des Punkts an `index` (siehe [`point_role::classify`]).
    pub fn classify_point(&self, index: usize) -> PointRole {
        point_role::classify(index, self.len())
    }

    /// Konstruktionslinien zwischen benachbarten Rohpunkten.
    ///
    /// Linien zu einem Punkt ohne Rolle (letzter Punkt) entfallen.
    pub fn construction_lines(&self) -> impl Iterator<Item = ConstructionLine> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .filter_map(move |(slot, pair)| {
                let from = slot + 1;
                let from_role = self.classify_point(from);
                let to_role = self.classify_point(from + 1);
                if from_role == PointRole::Unclassified || to_role == PointRole::Unclassified {
                    return None;
                }
                let kind = if from_role == PointRole::Anchor || to_role == PointRole::Anchor {
                    ConstructionLineKind::HandleArm
                } else {
                    ConstructionLineKind::Chord
                };
                Some(ConstructionLine {
                    from,
                    start: pair[0],
                    end: pair[1],
                    kind,
                })
            })
    }
}

#[cfg(test)]
mod tests;
