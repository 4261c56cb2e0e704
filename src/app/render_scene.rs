//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::PointRole;
use crate::shared::{RenderLayer, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Ausgeblendete Ebenen werden gar nicht erst berechnet.
pub fn build(state: &AppState) -> RenderScene {
    let settings = state.view.render_settings;
    let points = state.curve.points();

    let curve_polylines = if settings.is_visible(RenderLayer::Curve) {
        (0..points.segment_count())
            .filter_map(|segment| {
                let samples = points.evaluate_segment(segment, settings.resolution);
                let mut polyline = Vec::with_capacity(samples.len() + 1);
                polyline.push(samples.start());
                polyline.extend(samples);
                // Auflösung 0: nur der Startpunkt, keine Linie
                (polyline.len() >= 2).then_some(polyline)
            })
            .collect()
    } else {
        Vec::new()
    };

    let construction_lines = if settings.is_visible(RenderLayer::ConstructionLines) {
        points.construction_lines().collect()
    } else {
        Vec::new()
    };

    let mut join_dots = Vec::new();
    let mut handle_dots = Vec::new();
    for (index, position) in points.points() {
        match points.classify_point(index) {
            PointRole::Anchor if settings.is_visible(RenderLayer::JoinDots) => {
                join_dots.push(position)
            }
            role if role.is_handle() && settings.is_visible(RenderLayer::HandleDots) => {
                handle_dots.push(position)
            }
            _ => {}
        }
    }

    RenderScene {
        canvas_size: state.view.canvas_size.to_array(),
        settings,
        options: state.options.clone(),
        curve_polylines,
        construction_lines,
        join_dots,
        handle_dots,
        active_index: state.curve.drag().active_index(),
        point_count: state.point_count(),
        segment_count: state.segment_count(),
    }
}

/// Summe aller Polylinien-Punkte (Statusleiste).
pub fn polyline_vertex_count(scene: &RenderScene) -> usize {
    scene.curve_polylines.iter().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases;
    use glam::Vec2;

    fn state_with_two_triples() -> AppState {
        let mut state = AppState::new();
        use_cases::curve::append_triple(&mut state, Vec2::new(100.0, 100.0));
        use_cases::curve::append_triple(&mut state, Vec2::new(200.0, 100.0));
        state
    }

    #[test]
    fn empty_state_builds_empty_scene() {
        let scene = build(&AppState::new());
        assert!(scene.is_empty());
        assert_eq!(scene.canvas_size, [800.0, 800.0]);
        assert_eq!((scene.point_count, scene.segment_count), (0, 0));
    }

    #[test]
    fn two_triples_give_one_polyline_with_resolution_plus_one_points() {
        let state = state_with_two_triples();

        let scene = build(&state);

        assert_eq!(scene.curve_polylines.len(), 1);
        assert_eq!(scene.curve_polylines[0].len(), 51);
        assert_eq!(scene.curve_polylines[0][0], Vec2::new(100.0, 70.0));
        assert_eq!(polyline_vertex_count(&scene), 51);
    }

    #[test]
    fn dots_follow_point_roles() {
        let state = state_with_two_triples();

        let scene = build(&state);

        // Index 1 und 4 sind Anker, 2/3/5 Handles, 6 ist der letzte Punkt
        assert_eq!(
            scene.join_dots,
            vec![Vec2::new(100.0, 70.0), Vec2::new(200.0, 70.0)]
        );
        assert_eq!(
            scene.handle_dots,
            vec![
                Vec2::new(100.0, 100.0),
                Vec2::new(100.0, 130.0),
                Vec2::new(200.0, 100.0)
            ]
        );
        assert_eq!(scene.construction_lines.len(), 4);
    }

    #[test]
    fn hidden_layers_stay_empty() {
        let mut state = state_with_two_triples();
        for layer in RenderLayer::ALL {
            state.view.render_settings.toggle(layer);
        }

        let scene = build(&state);

        assert!(scene.is_empty());
        assert_eq!(scene.point_count, 6);
    }

    #[test]
    fn zero_resolution_draws_no_curve() {
        let mut state = state_with_two_triples();
        state.view.render_settings.resolution = 0;

        let scene = build(&state);

        assert!(scene.curve_polylines.is_empty());
        assert!(!scene.join_dots.is_empty());
    }

    #[test]
    fn active_index_is_forwarded() {
        let mut state = state_with_two_triples();
        state.curve.split_mut().1.acquire(4);

        let scene = build(&state);

        assert_eq!(scene.active_index, Some(4));
    }
}
