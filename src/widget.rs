//! egui integration

use egui::{Color32, InnerResponse, Pos2, Sense, Shape, Stroke, Ui};

use crate::bubble::SpeechBubble;
use crate::layout::BubbleLayout;
use crate::paint::{self, Canvas};
use crate::types::Rect;

/// Colors are sRGB, like `#FF5252` written as floats
fn to_color32(c: [f32; 4]) -> Color32 {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(byte(c[0]), byte(c[1]), byte(c[2]), byte(c[3]))
}

fn to_egui_rect(r: &Rect) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(r.x, r.y), egui::vec2(r.width, r.height))
}

/// Turns filled paths into convex polygons
#[derive(Default)]
struct ShapeCanvas {
    points: Vec<Pos2>,
    shapes: Vec<Shape>,
}

impl Canvas for ShapeCanvas {
    fn move_to(&mut self, x: f32, y: f32) {
        self.points.clear();
        self.points.push(egui::pos2(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.points.push(egui::pos2(x, y));
    }

    // Polygons are implicitly closed
    fn close(&mut self) {}

    fn fill(&mut self, color: [f32; 4]) {
        let points = std::mem::take(&mut self.points);
        self.shapes
            .push(Shape::convex_polygon(points, to_color32(color), Stroke::NONE));
    }
}

impl SpeechBubble {
    /// Show the bubble with `add_contents` as its child.
    ///
    /// The returned response covers the body. The nip may reach outside of
    /// it; the parent `Ui` grows to include it.
    pub fn show<R>(
        self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> InnerResponse<R> {
        let config = self.config();
        let padding = config.padding;

        // Shadow and body go underneath the child
        let shadow_idx = ui.painter().add(Shape::Noop);
        let body_idx = ui.painter().add(Shape::Noop);

        let outer = ui.available_rect_before_wrap();
        let mut content_rect = egui::Rect::from_min_max(
            outer.min + egui::vec2(padding.left, padding.top),
            outer.max - egui::vec2(padding.right, padding.bottom),
        );
        if let Some(width) = config.width {
            content_rect.set_width((width - padding.horizontal()).max(0.0));
        }
        if let Some(height) = config.height {
            content_rect.set_height((height - padding.vertical()).max(0.0));
        }

        let mut child_ui = ui.child_ui(content_rect, *ui.layout());
        if config.width.is_some() || config.height.is_some() {
            child_ui.set_min_size(egui::vec2(
                config.width.map_or(0.0, |_| content_rect.width()),
                config.height.map_or(0.0, |_| content_rect.height()),
            ));
        }
        let inner = add_contents(&mut child_ui);
        let child_size = child_ui.min_rect().size();

        let layout = self
            .layout([child_size.x, child_size.y])
            .translate(outer.min.x, outer.min.y);
        paint_layout(ui, &layout, shadow_idx, body_idx);

        let response = ui.allocate_rect(to_egui_rect(&layout.bounds), Sense::hover());
        ui.expand_to_include_rect(to_egui_rect(&layout.extent()));

        InnerResponse::new(inner, response)
    }
}

fn paint_layout(
    ui: &Ui,
    layout: &BubbleLayout,
    shadow_idx: egui::layers::ShapeIdx,
    body_idx: egui::layers::ShapeIdx,
) {
    let painter = ui.painter();
    let body = &layout.body;

    if let Some(shadow) = &body.shadow {
        let shadow_shape = egui::epaint::Shadow {
            offset: egui::vec2(shadow.rect.x - body.rect.x, shadow.rect.y - body.rect.y),
            blur: shadow.blur,
            spread: 0.0,
            color: to_color32(shadow.color),
        };
        painter.set(
            shadow_idx,
            shadow_shape.tessellate(to_egui_rect(&body.rect), body.border_radius),
        );
    }

    painter.set(
        body_idx,
        egui::epaint::RectShape::filled(
            to_egui_rect(&body.rect),
            body.border_radius,
            to_color32(body.color),
        ),
    );

    let mut canvas = ShapeCanvas::default();
    paint::replay(&layout.nip.path, &mut canvas);
    painter.extend(canvas.shapes);
}
