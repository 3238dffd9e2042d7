//! Concentric progress rings.
//!
//! Every ring gets a full background track and a foreground arc that starts
//! at 12 o'clock and grows clockwise. Arc ends are capped with small discs
//! so they read as round line caps.

use crate::models::ring::RingValue;
use crate::services::ring_progress::RingGeometry;
use crate::ui_egui::theme::DashboardTheme;
use egui::{Sense, Shape, Stroke, Vec2};

/// Canvas edge length: the configured size, grown when the rings would not
/// fit inside it.
pub fn canvas_edge(geometry: &RingGeometry, ring_count: usize) -> f32 {
    geometry.canvas_size.max(geometry.outer_extent(ring_count) * 2.0)
}

pub fn render_rings(
    ui: &mut egui::Ui,
    geometry: &RingGeometry,
    rings: &[RingValue],
    fractions: &[f32],
    theme: &DashboardTheme,
) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::splat(canvas_edge(geometry, rings.len())), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter_at(rect);
    let center = rect.center();
    let cap_radius = geometry.stroke_width / 2.0;

    for index in 0..rings.len() {
        painter.circle_stroke(
            center,
            geometry.radius(index),
            Stroke::new(geometry.stroke_width, theme.ring_track),
        );
    }

    for (index, ring) in rings.iter().enumerate() {
        let fraction = fractions.get(index).copied().unwrap_or(0.0);
        let points = geometry.arc_points(center, index, fraction);
        if points.len() < 2 {
            continue;
        }

        let color = DashboardTheme::ring_color(ring.color);
        let first = points[0];
        let last = points[points.len() - 1];
        painter.add(Shape::line(points, Stroke::new(geometry.stroke_width, color)));
        painter.circle_filled(first, cap_radius, color);
        painter.circle_filled(last, cap_radius, color);
    }

    response.on_hover_ui(|ui| {
        for (index, ring) in rings.iter().enumerate().rev() {
            let fraction = fractions.get(index).copied().unwrap_or(0.0);
            ui.label(format!(
                "{} ({}): {:.0}%",
                ring.category.legend_label(),
                ring.category,
                fraction * 100.0
            ));
        }
    })
}
