//! Zeichenfläche: malt eine `RenderScene` mit dem egui-Painter.
//!
//! Zeichenreihenfolge: Konstruktionslinien, Kurve, Punkte obenauf.

use super::color32;
use crate::core::ConstructionLineKind;
use crate::shared::RenderScene;
use glam::Vec2;

/// Zeichnet Hintergrund und alle enthaltenen Ebenen in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let options = &scene.options;
    painter.rect_filled(rect, 0.0, color32(options.background_color));

    let to_screen = |p: Vec2| egui::pos2(rect.min.x + p.x, rect.min.y + p.y);

    let arm_stroke = egui::Stroke::new(
        options.construction_stroke_width,
        color32(options.construction_color),
    );
    let chord_stroke = egui::Stroke::new(
        options.construction_stroke_width,
        color32(darkened(options.construction_color, options.chord_brightness)),
    );
    for line in &scene.construction_lines {
        let stroke = match line.kind {
            ConstructionLineKind::HandleArm => arm_stroke,
            ConstructionLineKind::Chord => chord_stroke,
        };
        painter.line_segment([to_screen(line.start), to_screen(line.end)], stroke);
    }

    let curve_color = color32(options.curve_color);
    let curve_stroke = egui::Stroke::new(options.curve_stroke_width, curve_color);
    for polyline in &scene.curve_polylines {
        let points: Vec<egui::Pos2> = polyline.iter().map(|&p| to_screen(p)).collect();
        painter.add(egui::Shape::line(points, curve_stroke));
    }

    for &dot in &scene.join_dots {
        painter.circle_filled(to_screen(dot), options.join_dot_radius, curve_color);
    }

    let handle_color = color32(options.handle_color);
    for &dot in &scene.handle_dots {
        painter.circle_filled(to_screen(dot), options.handle_dot_radius, handle_color);
    }
}

/// Skaliert die RGB-Kanäle, Alpha bleibt.
fn darkened(color: [f32; 4], brightness: f32) -> [f32; 4] {
    let factor = brightness.clamp(0.0, 1.0);
    [color[0] * factor, color[1] * factor, color[2] * factor, color[3]]
}
