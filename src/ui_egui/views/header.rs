use crate::models::settings::HeaderStyle;
use crate::ui_egui::theme::DashboardTheme;
use egui::{Color32, Mesh, Rect, Shape};

/// Top padding above the date strip
pub const HEADER_TOP_PADDING: f32 = 50.0;
pub const HEADER_SIDE_PADDING: f32 = 20.0;

/// Two-stop vertical gradient filling `rect`.
pub fn gradient_mesh(rect: Rect, top: Color32, bottom: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

/// Render the header area, painting the gradient backdrop when requested.
pub fn render_header(
    ui: &mut egui::Ui,
    style: HeaderStyle,
    theme: &DashboardTheme,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    // Reserve a background slot so the gradient ends up behind the contents
    let background = ui.painter().add(Shape::Noop);

    let inner = egui::Frame::none()
        .inner_margin(egui::Margin {
            left: HEADER_SIDE_PADDING,
            right: HEADER_SIDE_PADDING,
            top: HEADER_TOP_PADDING,
            bottom: 0.0,
        })
        .show(ui, add_contents);

    if style == HeaderStyle::Gradient {
        let rect = inner.response.rect;
        ui.painter().set(
            background,
            Shape::mesh(gradient_mesh(rect, theme.header_gradient_top, theme.header_gradient_bottom)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_mesh_corners() {
        let rect = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 40.0));
        let mesh = gradient_mesh(rect, Color32::RED, Color32::BLUE);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.vertices[0].color, Color32::RED);
        assert_eq!(mesh.vertices[1].color, Color32::RED);
        assert_eq!(mesh.vertices[2].color, Color32::BLUE);
        assert_eq!(mesh.vertices[3].color, Color32::BLUE);
    }
}
