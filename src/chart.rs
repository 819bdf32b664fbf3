// src/chart.rs
//
// 2×2 bar-chart summary as a standalone SVG document.
// All styling comes in through `ChartStyle`; nothing here is global.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::report::{Panel, Report};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    /// CSS font-family list; must include a CJK-capable face for readable labels.
    pub font_family: String,
    pub title_size: f32,
    pub label_size: f32,
    pub background: &'static str,
    pub bar_fill: &'static str,
    pub axis_stroke: &'static str,
    pub text_fill: &'static str,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 1000,
            font_family: s!("SimHei, 'Microsoft YaHei', 'Noto Sans CJK SC', sans-serif"),
            title_size: 20.0,
            label_size: 13.0,
            background: "#ffffff",
            bar_fill: "#1f77b4",
            axis_stroke: "#333333",
            text_fill: "#222222",
        }
    }
}

// Panel inner margins, px.
const MARGIN_TOP: f32 = 50.0;
const MARGIN_BOTTOM: f32 = 110.0;
const MARGIN_SIDE: f32 = 50.0;
const BAR_GAP: f32 = 0.2; // fraction of a slot left empty

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_svg(report: &Report, style: &ChartStyle) -> String {
    let (w, h) = (style.width as f32, style.height as f32);
    let (pw, ph) = (w / 2.0, h / 2.0);

    let mut svg = s!();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="{}">"#,
        style.width, style.height, style.width, style.height, escape_xml(&style.font_family)
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="{}"/>"#, style.background);

    for (i, panel) in report.grid().into_iter().enumerate() {
        let Some(panel) = panel else { continue };
        let x0 = (i % 2) as f32 * pw;
        let y0 = (i / 2) as f32 * ph;
        draw_panel(&mut svg, panel, style, x0, y0, pw, ph);
    }

    svg.push_str("</svg>\n");
    svg
}

fn draw_panel(svg: &mut String, panel: &Panel, style: &ChartStyle, x0: f32, y0: f32, pw: f32, ph: f32) {
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-size="{}" text-anchor="middle" fill="{}">{}</text>"#,
        x0 + pw / 2.0, y0 + MARGIN_TOP / 2.0 + style.title_size / 2.0,
        style.title_size, style.text_fill, escape_xml(panel.title())
    );

    let left = x0 + MARGIN_SIDE;
    let right = x0 + pw - MARGIN_SIDE;
    let top = y0 + MARGIN_TOP;
    let bottom = y0 + ph - MARGIN_BOTTOM;

    if let Some(text) = panel.placeholder() {
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="{}" text-anchor="middle" dominant-baseline="middle" fill="{}">{}</text>"#,
            x0 + pw / 2.0, y0 + ph / 2.0, style.title_size, style.text_fill, escape_xml(&text)
        );
        return;
    }

    // Axes
    let _ = writeln!(
        svg,
        r#"<polyline points="{left:.1},{top:.1} {left:.1},{bottom:.1} {right:.1},{bottom:.1}" fill="none" stroke="{}"/>"#,
        style.axis_stroke
    );

    let max = panel.max_count().max(1) as f32;
    let slot = (right - left) / panel.bars.len() as f32;
    let bar_w = slot * (1.0 - BAR_GAP);

    for (i, (label, count)) in panel.bars.iter().enumerate() {
        let bh = (bottom - top - style.label_size * 2.0) * (*count as f32 / max);
        let bx = left + slot * i as f32 + (slot - bar_w) / 2.0;
        let by = bottom - bh;
        let cx = bx + bar_w / 2.0;

        let _ = writeln!(
            svg,
            r#"<rect x="{bx:.1}" y="{by:.1}" width="{bar_w:.1}" height="{bh:.1}" fill="{}"/>"#,
            style.bar_fill
        );
        let _ = writeln!(
            svg,
            r#"<text x="{cx:.1}" y="{:.1}" font-size="{}" text-anchor="middle" fill="{}">{count}</text>"#,
            by - 4.0, style.label_size, style.text_fill
        );
        // x tick label, rotated 45°
        let ly = bottom + style.label_size + 4.0;
        let _ = writeln!(
            svg,
            r#"<text x="{cx:.1}" y="{ly:.1}" font-size="{}" text-anchor="end" transform="rotate(-45 {cx:.1} {ly:.1})" fill="{}">{}</text>"#,
            style.label_size, style.text_fill, escape_xml(label)
        );
    }
}

pub fn write_svg<W: Write>(mut w: W, report: &Report, style: &ChartStyle) -> io::Result<()> {
    w.write_all(render_svg(report, style).as_bytes())?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregate;
    use crate::config::options::ReportOptions;
    use crate::data::MovieRecord;

    fn report(records: Vec<MovieRecord>) -> Report {
        let opts = ReportOptions { font_path: None, ..ReportOptions::default() };
        Report::from_aggregate(&Aggregate::build(records), &opts)
    }

    #[test]
    fn empty_report_draws_placeholders() {
        let svg = render_svg(&report(Vec::new()), &ChartStyle::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        for text in ["无演员数据", "无国家数据", "无导演数据", "无类型数据"] {
            assert!(svg.contains(text), "missing {text}");
        }
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn bars_and_labels_escaped() {
        let rec = MovieRecord {
            title: s!("t"),
            director: s!("A&B <导演>"),
            actors: svec!["张国荣"],
            country: s!("美国"),
            genres: svec!["剧情"],
        };
        let svg = render_svg(&report(vec![rec]), &ChartStyle::default());
        assert_eq!(svg.matches("<polyline").count(), 4);
        assert!(svg.contains("A&amp;B &lt;导演&gt;"));
        assert!(svg.contains(">张国荣</text>"));
        assert!(svg.contains("出演次数最多的演员"));
    }

    #[test]
    fn style_is_applied() {
        let style = ChartStyle { width: 800, height: 600, bar_fill: "#ff0000", ..ChartStyle::default() };
        let rec = MovieRecord {
            title: s!("t"),
            director: s!("某导演"),
            actors: vec![],
            country: s!("日本"),
            genres: svec!["动画"],
        };
        let svg = render_svg(&report(vec![rec]), &style);
        assert!(svg.contains(r#"width="800" height="600""#));
        assert!(svg.contains(r##"fill="#ff0000""##));
    }
}
