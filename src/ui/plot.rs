use std::sync::Arc;

use eframe::egui::{
    self, emath::Rot2, epaint::TextShape, Color32, FontId, Galley, Painter, Pos2, Sense, Stroke,
    Ui, Vec2,
};

use crate::chart::scene::{Element, SurfacePoint, TextAnchor, TextBaseline, TextElement};
use crate::color::{highlight, to_color32};
use crate::state::AppState;

const INK: Color32 = Color32::from_rgb(30, 30, 30);

// ---------------------------------------------------------------------------
// Scatter surface (central panel)
// ---------------------------------------------------------------------------

/// Paint the current scene on a fixed-size surface and route hover events.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view the chart  (File → Open…)");
        });
        return;
    }

    let size = Vec2::new(state.scene.width, state.scene.height);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min;
    let to_screen = |p: SurfacePoint| origin + Vec2::new(p.x, p.y);

    let pointer = response
        .hover_pos()
        .map(|pos| SurfacePoint::new(pos.x - origin.x, pos.y - origin.y));
    state.update_hover(pointer);

    painter.rect_filled(response.rect, 0.0, Color32::WHITE);

    let stroke = Stroke::new(1.0, INK);
    let hovered = state.hovered_marker;
    let mut marker_idx = 0;
    for element in state.scene.elements() {
        match element {
            Element::Line { from, to } => {
                painter.line_segment([to_screen(*from), to_screen(*to)], stroke);
            }
            Element::Text(text) => paint_text(&painter, to_screen(text.position), text),
            Element::Marker(marker) => {
                let color = if hovered == Some(marker_idx) {
                    highlight(marker.fill)
                } else {
                    to_color32(marker.fill)
                };
                painter.circle_filled(to_screen(marker.center), marker.radius, color);
                marker_idx += 1;
            }
        }
    }

    if let Some(detail) = state.detail() {
        egui::Area::new(egui::Id::new("detail_panel"))
            .order(egui::Order::Tooltip)
            .fixed_pos(to_screen(detail.position))
            .interactable(false)
            .show(ui.ctx(), |ui: &mut Ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui: &mut Ui| {
                    for line in &detail.lines {
                        ui.label(line);
                    }
                });
            });
    }
}

fn paint_text(painter: &Painter, pos: Pos2, text: &TextElement) {
    let galley: Arc<Galley> =
        painter.layout_no_wrap(text.text.clone(), FontId::proportional(text.size), INK);
    let w = galley.size().x;
    let h = galley.size().y;

    let dx = match text.anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => -w / 2.0,
        TextAnchor::End => -w,
    };
    let dy = match text.baseline {
        TextBaseline::Hanging => 0.0,
        TextBaseline::Middle => -h / 2.0,
        // Approximate ascent; egui galleys are positioned by their top edge.
        TextBaseline::Alphabetic => -h * 0.8,
    };

    if text.rotation_deg == 0.0 {
        painter.galley(pos + Vec2::new(dx, dy), galley, INK);
    } else {
        let angle = text.rotation_deg.to_radians();
        let top_left = pos + Rot2::from_angle(angle) * Vec2::new(dx, dy);
        painter.add(TextShape::new(top_left, galley, INK).with_angle(angle));
    }
}
