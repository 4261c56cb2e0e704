//! Bézier-Auswertung nach de Casteljau.
//!
//! Ein Segment wird nicht über Polynom-Koeffizienten, sondern über
//! wiederholte lineare Interpolation der vier Kontrollpunkte ausgewertet.

use glam::Vec2;

/// Lineare Interpolation zwischen `a` und `b`.
///
/// Bei `t = 1.0` liefert die Formel exakt `b`.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a * (1.0 - t) + b * t
}

/// Punkt auf einer kubischen Bézier-Kurve per de Casteljau.
pub fn de_casteljau(controls: &[Vec2; 4], t: f32) -> Vec2 {
    let [a, b, c, d] = *controls;

    let q0 = lerp(a, b, t);
    let q1 = lerp(b, c, t);
    let q2 = lerp(c, d, t);

    let r0 = lerp(q0, q1, t);
    let r1 = lerp(q1, q2, t);

    lerp(r0, r1, t)
}

/// Lazy erzeugte Stützpunkte eines Segments bei `t = 1/n, 2/n, …, 1`.
///
/// Der Startpunkt (`t = 0`) ist nicht enthalten; die Polylinie beginnt
/// beim ersten Kontrollpunkt und läuft dann durch alle Samples.
/// Jeder Aufruf von `ControlPointSequence::evaluate_segment` liefert einen
/// frischen Iterator, es gibt keinen gecachten Zustand.
#[derive(Debug, Clone)]
pub struct SegmentSamples {
    controls: [Vec2; 4],
    resolution: u32,
    step: u32,
}

impl SegmentSamples {
    /// Erstellt die Sample-Folge für ein Segment.
    pub fn new(controls: [Vec2; 4], resolution: u32) -> Self {
        Self {
            controls,
            resolution,
            step: 0,
        }
    }

    /// Leere Folge (Auflösung 0 oder kein Segment vorhanden).
    pub fn empty() -> Self {
        Self::new([Vec2::ZERO; 4], 0)
    }

    /// Erster Kontrollpunkt, an dem die Polylinie beginnt.
    pub fn start(&self) -> Vec2 {
        self.controls[0]
    }
}

impl Iterator for SegmentSamples {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.step >= self.resolution {
            return None;
        }
        self.step += 1;
        let t = self.step as f32 / self.resolution as f32;
        Some(de_casteljau(&self.controls, t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.resolution - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentSamples {}

impl std::iter::FusedIterator for SegmentSamples {}
