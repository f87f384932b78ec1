// src/gui/components/charts.rs
//
// Chart painting with the egui painter. Data comes from crate::viz; nothing
// here computes statistics.

use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::sentiment::Sentiment;
use crate::viz::{self, Breakdown, Histogram, Scatter, XValue};

pub fn color(s: Sentiment) -> Color32 {
    match s {
        Sentiment::Positive => Color32::from_rgb(0x3C, 0xB4, 0x4B),
        Sentiment::Neutral => Color32::from_rgb(0x9A, 0x9A, 0x9A),
        Sentiment::Negative => Color32::from_rgb(0xDC, 0x61, 0x49),
    }
}

fn legend(ui: &mut egui::Ui, entries: &[(Sentiment, String)]) {
    ui.horizontal(|ui| {
        for (s, text) in entries {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color(*s));
            ui.label(text);
            ui.add_space(10.0);
        }
    });
}

/// Proportion chart: one wedge per label, painted as a triangle fan so wedges
/// over half the circle stay convex piecewise.
pub fn pie(ui: &mut egui::Ui, b: &Breakdown) {
    ui.strong("Sentiment Analysis");
    let size = ui.available_width().min(ui.available_height() - 40.0).clamp(160.0, 420.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let painter = ui.painter_at(rect);
    let c = rect.center();
    let r = size * 0.45;

    let mut start = -TAU / 4.0;
    for slice in &b.slices {
        if slice.count == 0 { continue; }
        let sweep = TAU * (slice.percent as f32 / 100.0);
        let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as usize;
        let fill = color(slice.label);
        for i in 0..steps {
            let a0 = start + sweep * i as f32 / steps as f32;
            let a1 = start + sweep * (i + 1) as f32 / steps as f32;
            let p0 = c + r * Vec2::angled(a0);
            let p1 = c + r * Vec2::angled(a1);
            painter.add(Shape::convex_polygon(vec![c, p0, p1], fill, Stroke::NONE));
        }
        if slice.percent >= 4.0 {
            let mid = start + sweep / 2.0;
            painter.text(
                c + 0.62 * r * Vec2::angled(mid),
                Align2::CENTER_CENTER,
                format!("{:.1}%", slice.percent),
                FontId::proportional(13.0),
                Color32::WHITE,
            );
        }
        start += sweep;
    }

    let entries: Vec<(Sentiment, String)> = b.slices.iter()
        .map(|s| (s.label, format!("{} {} ({:.1}%)", s.label, s.count, s.percent)))
        .collect();
    legend(ui, &entries);
}

fn plot_rect(ui: &mut egui::Ui, h: f32) -> Rect {
    let w = ui.available_width().max(200.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(w, h), Sense::hover());
    rect
}

/// Stacked bars: one bar per distinct value, segments per label.
pub fn histogram(ui: &mut egui::Ui, hist: &Histogram) {
    ui.strong(format!("Sentiment Analysis: {}", hist.column));
    if hist.bins.is_empty() {
        ui.label("No labeled rows to plot.");
        return;
    }

    let rect = plot_rect(ui, 320.0);
    let painter = ui.painter_at(rect);
    let axis = Stroke::new(1.0, ui.visuals().weak_text_color());
    let plot = rect.shrink2(Vec2::new(36.0, 28.0));

    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.left_top()], axis);

    let max = hist.max_bin().max(1) as f32;
    painter.text(plot.left_top() - Vec2::new(6.0, 0.0), Align2::RIGHT_CENTER, format!("{}", hist.max_bin()), FontId::monospace(11.0), axis.color);
    painter.text(plot.left_bottom() - Vec2::new(6.0, 0.0), Align2::RIGHT_CENTER, "0", FontId::monospace(11.0), axis.color);

    let slot = plot.width() / hist.bins.len() as f32;
    let bar_w = (slot * 0.8).max(1.0);
    for (i, bin) in hist.bins.iter().enumerate() {
        let x0 = plot.left() + slot * i as f32 + (slot - bar_w) / 2.0;
        let mut y = plot.bottom();
        for (si, &n) in bin.counts.iter().enumerate() {
            if n == 0 { continue; }
            let hgt = plot.height() * n as f32 / max;
            let seg = Rect::from_min_max(Pos2::new(x0, y - hgt), Pos2::new(x0 + bar_w, y));
            painter.rect_filled(seg, 0.0, color(viz::slot_label(si)));
            y -= hgt;
        }
        if slot >= 28.0 {
            let mut label = bin.value.clone();
            if label.chars().count() > 12 {
                label = label.chars().take(11).collect::<String>() + "…";
            }
            painter.text(Pos2::new(x0 + bar_w / 2.0, plot.bottom() + 4.0), Align2::CENTER_TOP, label, FontId::proportional(11.0), axis.color);
        }
    }

    let entries: Vec<(Sentiment, String)> = Sentiment::ALL.iter()
        .map(|s| (*s, s.to_string()))
        .collect();
    legend(ui, &entries);
}

/// Chosen field on x, label on y.
pub fn scatter(ui: &mut egui::Ui, sc: &Scatter) {
    ui.strong(format!("Sentiment Analysis: {}", sc.column));
    if sc.points.is_empty() {
        ui.label("No labeled rows to plot.");
        return;
    }

    let rect = plot_rect(ui, 280.0);
    let painter = ui.painter_at(rect);
    let axis = Stroke::new(1.0, ui.visuals().weak_text_color());
    let plot = rect.shrink2(Vec2::new(70.0, 24.0));

    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    for s in Sentiment::ALL {
        let y = plot.bottom() - plot.height() * viz::label_axis(s) as f32 / 2.0;
        painter.text(Pos2::new(plot.left() - 8.0, y), Align2::RIGHT_CENTER, s.as_str(), FontId::proportional(12.0), axis.color);
    }

    // Numbers and categories share one axis: categories sit after the numeric range.
    let nums: Vec<f64> = sc.points.iter()
        .filter_map(|p| match p.x { XValue::Number(n) => Some(n), _ => None })
        .collect();
    let (lo, hi) = nums.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &n| (lo.min(n), hi.max(n)));
    let (lo, hi) = if nums.is_empty() { (0.0, 0.0) } else { (lo, hi) };
    let span_num = if nums.is_empty() { 0.0 } else { (hi - lo).max(1.0) };
    let span = span_num + sc.categories.len() as f64;
    let span = if span <= 0.0 { 1.0 } else { span };

    for p in &sc.points {
        let xv = match &p.x {
            XValue::Number(n) => n - lo,
            XValue::Category { index, .. } => span_num + *index as f64 + 0.5,
        };
        let x = plot.left() + plot.width() * (xv / span) as f32;
        let y = plot.bottom() - plot.height() * viz::label_axis(p.y) as f32 / 2.0;
        painter.circle_filled(Pos2::new(x, y), 4.0, color(p.y).gamma_multiply(0.7));
    }

    if !nums.is_empty() {
        painter.text(plot.left_bottom() + Vec2::new(0.0, 4.0), Align2::LEFT_TOP, format!("{lo}"), FontId::monospace(11.0), axis.color);
        painter.text(
            Pos2::new(plot.left() + plot.width() * (span_num / span) as f32, plot.bottom() + 4.0),
            Align2::CENTER_TOP, format!("{hi}"), FontId::monospace(11.0), axis.color,
        );
    }
    if !sc.categories.is_empty() {
        ui.label(format!("{} distinct text value(s) plotted after the numeric range.", sc.categories.len()));
    }
}
