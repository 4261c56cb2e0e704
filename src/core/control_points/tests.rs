use super::*;
use approx::assert_abs_diff_eq;

fn sequence_with_triples(centers: &[Vec2]) -> ControlPointSequence {
    let mut seq = ControlPointSequence::new();
    for &center in centers {
        seq.append_triple(center);
    }
    seq
}

// ── Aufbau & Sentinel ──

#[test]
fn new_sequence_contains_only_sentinel() {
    let seq = ControlPointSequence::new();
    assert_eq!(seq.len(), 1);
    assert!(seq.is_empty());
    assert_eq!(seq.point(SENTINEL_INDEX), None);
    assert_eq!(seq.points().count(), 0);
}

#[test]
fn append_triple_adds_three_points_in_order() {
    let mut seq = sequence_with_triples(&[Vec2::new(10.0, 10.0)]);
    let before = seq.len();
    let center = Vec2::new(-4.5, 250.0);

    let first = seq.append_triple(center);

    assert_eq!(seq.len(), before + 3);
    assert_eq!(first, before);
    assert_eq!(seq.point(first), Some(Vec2::new(-4.5, 220.0)));
    assert_eq!(seq.point(first + 1), Some(center));
    assert_eq!(seq.point(first + 2), Some(Vec2::new(-4.5, 280.0)));
}

#[test]
fn append_triple_with_custom_offset() {
    let mut seq = ControlPointSequence::new();
    seq.append_triple_with_offset(Vec2::new(0.0, 0.0), 12.0);

    assert_eq!(seq.point(1), Some(Vec2::new(0.0, -12.0)));
    assert_eq!(seq.point(3), Some(Vec2::new(0.0, 12.0)));
}

#[test]
fn sentinel_cannot_be_read_or_written() {
    let mut seq = sequence_with_triples(&[Vec2::new(1.0, 1.0)]);

    assert!(!seq.set_point(SENTINEL_INDEX, Vec2::new(9.0, 9.0)));
    assert_eq!(seq.point(SENTINEL_INDEX), None);
    assert!(seq.points().all(|(index, _)| index != SENTINEL_INDEX));
}

#[test]
fn set_point_moves_only_existing_points() {
    let mut seq = sequence_with_triples(&[Vec2::new(1.0, 1.0)]);

    assert!(seq.set_point(2, Vec2::new(5.0, 6.0)));
    assert_eq!(seq.point(2), Some(Vec2::new(5.0, 6.0)));
    assert!(!seq.set_point(4, Vec2::new(5.0, 6.0)));
}

#[test]
fn clear_resets_to_sentinel_only() {
    let mut seq = sequence_with_triples(&[Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)]);

    seq.clear();

    assert_eq!(seq.len(), 1);
    assert_eq!(seq.segment_count(), 0);
    assert_eq!(seq.point(1), None);

    // Nach dem Leeren beginnt die Indizierung wieder bei 1
    assert_eq!(seq.append_triple(Vec2::ZERO), 1);
}

// ── Segmente ──

#[test]
fn segment_count_follows_stride_three() {
    let mut seq = ControlPointSequence::new();
    assert_eq!((seq.len(), seq.segment_count()), (1, 0));

    seq.append_triple(Vec2::new(100.0, 100.0));
    assert_eq!((seq.len(), seq.segment_count()), (4, 0));

    seq.append_triple(Vec2::new(200.0, 100.0));
    assert_eq!((seq.len(), seq.segment_count()), (7, 1));

    seq.append_triple(Vec2::new(300.0, 100.0));
    assert_eq!((seq.len(), seq.segment_count()), (10, 2));

    seq.append_triple(Vec2::new(400.0, 100.0));
    assert_eq!((seq.len(), seq.segment_count()), (13, 3));
}

#[test]
fn consecutive_segments_share_their_join_point() {
    let seq = sequence_with_triples(&[
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(100.0, 0.0),
    ]);
    assert_eq!(seq.segment_count(), 2);

    let first = seq.segment_controls(0).unwrap();
    let second = seq.segment_controls(1).unwrap();

    assert_eq!(first[3], second[0]);
    assert_eq!(Some(first[0]), seq.point(1));
    assert_eq!(Some(first[3]), seq.point(4));
    assert_eq!(Some(second[3]), seq.point(7));
    assert_eq!(seq.classify_point(4), PointRole::Anchor);
}

#[test]
fn segment_controls_out_of_range() {
    let seq = sequence_with_triples(&[Vec2::ZERO, Vec2::ONE]);
    assert!(seq.segment_controls(1).is_none());
    assert!(seq.segment_controls(usize::MAX).is_none());
}

#[test]
fn evaluate_segment_ends_at_last_control_point() {
    let seq = sequence_with_triples(&[Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0)]);
    let last = seq.point(4).unwrap();

    let samples: Vec<Vec2> = seq.evaluate_segment(0, 10).collect();

    assert_eq!(samples.len(), 10);
    let end = *samples.last().unwrap();
    assert_abs_diff_eq!(end.x, last.x, epsilon = 1e-4);
    assert_abs_diff_eq!(end.y, last.y, epsilon = 1e-4);
}

#[test]
fn first_sample_converges_to_first_control_point() {
    let seq = sequence_with_triples(&[Vec2::new(100.0, 100.0), Vec2::new(400.0, 300.0)]);
    let first = seq.point(1).unwrap();

    let mut previous_distance = f32::INFINITY;
    for resolution in [2, 10, 50, 150] {
        let sample = seq.evaluate_segment(0, resolution).next().unwrap();
        let distance = sample.distance(first);
        assert!(
            distance < previous_distance,
            "Auflösung {} liefert Abstand {:.3}",
            resolution,
            distance
        );
        previous_distance = distance;
    }
    assert!(previous_distance < 5.0);
}

#[test]
fn evaluate_segment_is_idempotent() {
    let seq = sequence_with_triples(&[Vec2::new(10.0, 20.0), Vec2::new(80.0, 15.0)]);

    let a: Vec<Vec2> = seq.evaluate_segment(0, 33).collect();
    let b: Vec<Vec2> = seq.evaluate_segment(0, 33).collect();

    assert_eq!(a, b);
}

#[test]
fn evaluate_segment_degenerate_cases_are_empty() {
    let seq = sequence_with_triples(&[Vec2::new(10.0, 20.0), Vec2::new(80.0, 15.0)]);
    assert_eq!(seq.evaluate_segment(0, 0).count(), 0);
    assert_eq!(seq.evaluate_segment(1, 50).count(), 0);
    assert_eq!(ControlPointSequence::new().evaluate_segment(0, 50).count(), 0);
}

#[test]
fn evaluate_segment_reflects_moved_points() {
    let mut seq = sequence_with_triples(&[Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]);
    let before: Vec<Vec2> = seq.evaluate_segment(0, 4).collect();

    seq.set_point(4, Vec2::new(100.0, 200.0));
    let after: Vec<Vec2> = seq.evaluate_segment(0, 4).collect();

    assert_ne!(before, after);
    assert_eq!(*after.last().unwrap(), Vec2::new(100.0, 200.0));
}

// ── Rollen & Konstruktionslinien ──

#[test]
fn classify_point_uses_sequence_length() {
    let seq = sequence_with_triples(&[Vec2::ZERO, Vec2::ONE]);
    assert_eq!(seq.len(), 7);

    let roles: Vec<PointRole> = (0..seq.len()).map(|i| seq.classify_point(i)).collect();
    assert_eq!(
        roles,
        vec![
            PointRole::Unclassified,
            PointRole::Anchor,
            PointRole::HandleAfter,
            PointRole::HandleBefore,
            PointRole::Anchor,
            PointRole::HandleAfter,
            PointRole::Unclassified,
        ]
    );
}

#[test]
fn construction_lines_skip_last_point_and_tag_chords() {
    let seq = sequence_with_triples(&[Vec2::ZERO, Vec2::new(10.0, 0.0)]);

    let lines: Vec<ConstructionLine> = seq.construction_lines().collect();
    let summary: Vec<(usize, ConstructionLineKind)> =
        lines.iter().map(|line| (line.from, line.kind)).collect();

    assert_eq!(
        summary,
        vec![
            (1, ConstructionLineKind::HandleArm),
            (2, ConstructionLineKind::Chord),
            (3, ConstructionLineKind::HandleArm),
            (4, ConstructionLineKind::HandleArm),
        ]
    );
    assert_eq!(Some(lines[1].start), seq.point(2));
    assert_eq!(Some(lines[1].end), seq.point(3));
}

#[test]
fn construction_lines_for_short_sequences() {
    assert_eq!(ControlPointSequence::new().construction_lines().count(), 0);

    // Ein Tripel: nur Anker → Handle, die Linie zum letzten Punkt entfällt
    let seq = sequence_with_triples(&[Vec2::ZERO]);
    let lines: Vec<ConstructionLine> = seq.construction_lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].from, 1);
}
