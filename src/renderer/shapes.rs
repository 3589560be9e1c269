//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::glyphs::{GLYPH_ADVANCE, lit_cells};
use super::scene::{Color, DisplayList, DrawCmd};
use super::vertex::{Vertex, colors};

/// Triangle fan resolution for filled circles
pub const CIRCLE_SEGMENTS: u32 = 24;

/// A display list flattened into a triangle list
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation {
    pub clear: Color,
    pub vertices: Vec<Vertex>,
}

/// Flatten every draw command into triangles, in submission order
pub fn tessellate(list: &DisplayList) -> Tessellation {
    let mut out = Tessellation {
        clear: list.clear_color().unwrap_or(colors::BACKGROUND),
        vertices: Vec::new(),
    };

    for cmd in &list.commands {
        let v = &mut out.vertices;
        match cmd {
            DrawCmd::Clear(_) => {}
            DrawCmd::FillRect { min, size, color } => v.extend(rect(*min, *size, *color)),
            DrawCmd::FillCircle {
                center,
                radius,
                color,
            } => v.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCmd::Line {
                from,
                to,
                width,
                color,
            } => v.extend(line(*from, *to, *width, *color)),
            DrawCmd::Polyline {
                points,
                width,
                color,
            } => v.extend(polyline(points, *width, *color)),
            DrawCmd::Text {
                origin,
                text: label,
                scale,
                color,
            } => v.extend(text(*origin, label, *scale, *color)),
        }
    }
    out
}

/// Two triangles covering an axis-aligned rectangle
fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) -> [Vertex; 6] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: Color) -> [Vertex; 6] {
    let max = min + size;
    quad(
        min,
        Vec2::new(max.x, min.y),
        Vec2::new(min.x, max.y),
        max,
        color,
    )
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a thick line segment (empty when degenerate)
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad(from + perp, from - perp, to + perp, to - perp, color).to_vec()
}

/// One line quad per consecutive pair of points
pub fn polyline(points: &[Vec2], width: f32, color: Color) -> Vec<Vertex> {
    points
        .windows(2)
        .flat_map(|pair| line(pair[0], pair[1], width, color))
        .collect()
}

/// Generate vertices for bitmap text, one square per lit font pixel
pub fn text(origin: Vec2, text: &str, scale: f32, color: Color) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for (i, ch) in text.chars().enumerate() {
        let glyph_origin = origin + Vec2::new((i as u32 * GLYPH_ADVANCE) as f32 * scale, 0.0);
        for (col, row) in lit_cells(ch) {
            let min = glyph_origin + Vec2::new(col as f32, row as f32) * scale;
            vertices.extend(rect(min, Vec2::splat(scale), color));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::new(50.0, 50.0), 10.0, RED, CIRCLE_SEGMENTS);
        assert_eq!(v.len(), 72);
        for tri in v.chunks(3) {
            assert_eq!(tri[0].position, [50.0, 50.0]);
            let edge = Vec2::from(tri[1].position) - Vec2::new(50.0, 50.0);
            assert!((edge.length() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(390.0, 290.0), Vec2::splat(20.0), RED);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 390.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 410.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 290.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 310.0);
    }

    #[test]
    fn test_line_width() {
        let v = line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0, RED);
        assert_eq!(v.len(), 6);
        for vert in &v {
            assert!((vert.position[1].abs() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, RED).is_empty());
    }

    #[test]
    fn test_polyline_segments() {
        let points = [Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(5.0, 5.0), Vec2::new(0.0, 5.0)];
        assert_eq!(polyline(&points, 1.0, RED).len(), 18);
        assert!(polyline(&points[..1], 1.0, RED).is_empty());
    }

    #[test]
    fn test_text_quads_per_lit_pixel() {
        // '2' and 'a' light 14 cells each
        let v = text(Vec2::ZERO, "2a", 2.0, RED);
        assert_eq!(v.len(), 28 * 6);

        let max_x = v.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!(max_x <= (6.0 + 5.0) * 2.0);
    }

    #[test]
    fn test_tessellate_uses_clear_color() {
        let mut list = DisplayList::default();
        list.push(DrawCmd::Clear([0.5, 0.5, 0.5, 1.0]));
        list.push(DrawCmd::FillCircle {
            center: Vec2::ZERO,
            radius: 1.0,
            color: RED,
        });
        let t = tessellate(&list);
        assert_eq!(t.clear, [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(t.vertices.len(), 72);
    }

    #[test]
    fn test_tessellate_scene() {
        let state = crate::sim::SimState::new(3);
        let t = tessellate(&crate::renderer::scene::compose(&state));
        assert_eq!(t.clear, colors::BACKGROUND);
        // light + two bodies + four whiskers + two labels
        assert!(t.vertices.len() >= 6 + 2 * 72 + 4 * 6 + (14 + 14 + 14 + 16) * 6);
    }
}
