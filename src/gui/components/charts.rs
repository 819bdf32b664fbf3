// src/gui/components/charts.rs
//
// On-screen version of the 2×2 summary chart, painted straight from the
// report panels. Same layout and placeholders as the SVG export.

use eframe::egui::{ self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2 };

use crate::{ gui::app::App, report::Panel };

const PAD: f32 = 12.0;
const TITLE_H: f32 = 28.0;
const LABEL_H: f32 = 36.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(report) = app.report.as_ref() else {
        ui.centered_and_justified(|ui| { ui.label("Nothing to chart yet."); });
        return;
    };

    let size = ui.available_size();
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();
    let text = visuals.text_color();
    let bar = visuals.selection.bg_fill;
    let axis = visuals.widgets.noninteractive.fg_stroke.color;

    let cell = Vec2::new(rect.width() / 2.0, rect.height() / 2.0);
    for (i, panel) in report.grid().into_iter().enumerate() {
        let Some(panel) = panel else { continue };
        let min = rect.min + Vec2::new((i % 2) as f32 * cell.x, (i / 2) as f32 * cell.y);
        paint_panel(&painter, panel, Rect::from_min_size(min, cell), text, bar, axis);
    }
}

fn paint_panel(painter: &egui::Painter, panel: &Panel, cell: Rect, text: Color32, bar: Color32, axis: Color32) {
    painter.text(
        Pos2::new(cell.center().x, cell.top() + TITLE_H / 2.0),
        Align2::CENTER_CENTER,
        panel.title(),
        FontId::proportional(16.0),
        text,
    );

    if let Some(msg) = panel.placeholder() {
        painter.text(cell.center(), Align2::CENTER_CENTER, msg, FontId::proportional(15.0), text);
        return;
    }

    let plot = Rect::from_min_max(
        Pos2::new(cell.left() + PAD * 2.0, cell.top() + TITLE_H + PAD),
        Pos2::new(cell.right() - PAD * 2.0, cell.bottom() - LABEL_H),
    );
    let stroke = Stroke::new(1.0, axis);
    painter.line_segment([plot.left_top(), plot.left_bottom()], stroke);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], stroke);

    let max = panel.max_count().max(1) as f32;
    let slot = plot.width() / panel.bars.len() as f32;
    let bar_w = slot * 0.7;
    let usable = plot.height() - 16.0; // room for the count label

    for (i, (label, count)) in panel.bars.iter().enumerate() {
        let h = usable * (*count as f32 / max);
        let cx = plot.left() + slot * (i as f32 + 0.5);
        let r = Rect::from_min_max(
            Pos2::new(cx - bar_w / 2.0, plot.bottom() - h),
            Pos2::new(cx + bar_w / 2.0, plot.bottom()),
        );
        painter.rect_filled(r, 2.0, bar);
        painter.text(
            Pos2::new(cx, r.top() - 2.0),
            Align2::CENTER_BOTTOM,
            count.to_string(),
            FontId::proportional(12.0),
            text,
        );
        painter.text(
            Pos2::new(cx, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(12.0),
            text,
        );
    }
}
