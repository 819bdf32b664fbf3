// src/report.rs
//
// Presentation-ready view of an Aggregate: one panel per dimension with its
// top-K entries. The text summary, the SVG chart and the GUI chart tab all
// read from this; none of them touch the tables directly.

use std::fmt::Write as _;

use serde::Serialize;

use crate::aggregate::Aggregate;
use crate::config::options::ReportOptions;
use crate::data::Dimension;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// There is something to draw.
    Bars,
    /// Top-K had entries but none survived label validation.
    Insufficient,
    /// Top-K was empty.
    NoData,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub dimension: Dimension,
    /// Raw top-K, as printed.
    pub top: Vec<(String, u64)>,
    /// Top-K minus invalid labels, as charted.
    pub bars: Vec<(String, u64)>,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        self.dimension.title()
    }

    pub fn state(&self) -> PanelState {
        if self.top.is_empty() {
            PanelState::NoData
        } else if self.bars.is_empty() {
            PanelState::Insufficient
        } else {
            PanelState::Bars
        }
    }

    /// Placeholder text for panels with nothing to draw.
    pub fn placeholder(&self) -> Option<String> {
        let noun = self.dimension.noun();
        match self.state() {
            PanelState::Bars => None,
            PanelState::Insufficient => Some(format!("{noun}数据不足")),
            PanelState::NoData => Some(format!("无{noun}数据")),
        }
    }

    pub fn max_count(&self) -> u64 {
        self.bars.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

/// Labels worth a bar. Single-character actor names are treated as noise.
fn chartable(dim: Dimension, label: &str) -> bool {
    let t = label.trim();
    match dim {
        Dimension::Actors => t.chars().count() > 1,
        _ => !t.is_empty(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// In `Dimension::REPORT_ORDER`.
    pub panels: Vec<Panel>,
    pub record_count: usize,
}

impl Report {
    pub fn from_aggregate(agg: &Aggregate, opts: &ReportOptions) -> Self {
        let panels = Dimension::REPORT_ORDER
            .into_iter()
            .map(|dim| {
                let top = agg.top_k(dim, top_k_for(opts, dim));
                let bars = top
                    .iter()
                    .filter(|(label, _)| chartable(dim, label))
                    .cloned()
                    .collect();
                Panel { dimension: dim, top, bars }
            })
            .collect();
        Self { panels, record_count: agg.records().len() }
    }

    pub fn panel(&self, dim: Dimension) -> Option<&Panel> {
        self.panels.iter().find(|p| p.dimension == dim)
    }

    /// Chart layout, row-major 2×2.
    pub fn grid(&self) -> [Option<&Panel>; 4] {
        [
            self.panel(Dimension::Actors),
            self.panel(Dimension::Countries),
            self.panel(Dimension::Directors),
            self.panel(Dimension::Genres),
        ]
    }
}

pub fn top_k_for(opts: &ReportOptions, dim: Dimension) -> usize {
    match dim {
        Dimension::Actors    => opts.top_actors,
        Dimension::Directors => opts.top_directors,
        Dimension::Countries => opts.top_countries,
        Dimension::Genres    => opts.top_genres,
    }
}

/// Console summary. `nominal` is the ranking slice size shown in the banner.
pub fn render_text(report: &Report, nominal: u32) -> String {
    let rule = "=".repeat(50);
    let mut out = s!();
    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "豆瓣Top{nominal}电影分析结果");
    let _ = writeln!(out, "{rule}");

    for panel in &report.panels {
        let _ = writeln!(out);
        let _ = writeln!(out, "【{}】", panel.title());
        for (i, (label, count)) in panel.top.iter().enumerate() {
            let _ = writeln!(out, "{}. {} - {}部电影", i + 1, label, count);
        }
    }
    out
}

/// Serialized form: `{"actors": [["张国荣", 3], …], …}`.
#[derive(Serialize)]
pub struct ReportJson<'a> {
    pub records: usize,
    pub actors: &'a [(String, u64)],
    pub directors: &'a [(String, u64)],
    pub countries: &'a [(String, u64)],
    pub genres: &'a [(String, u64)],
}

impl<'a> ReportJson<'a> {
    pub fn new(report: &'a Report) -> Self {
        let top = |dim| report.panel(dim).map_or(&[][..], |p| p.top.as_slice());
        Self {
            records: report.record_count,
            actors: top(Dimension::Actors),
            directors: top(Dimension::Directors),
            countries: top(Dimension::Countries),
            genres: top(Dimension::Genres),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MovieRecord;

    fn rec(director: &str, actors: &[&str], country: &str, genres: &[&str]) -> MovieRecord {
        MovieRecord {
            title: s!("t"),
            director: s!(director),
            actors: actors.iter().map(|a| s!(*a)).collect(),
            country: s!(country),
            genres: genres.iter().map(|g| s!(*g)).collect(),
        }
    }

    fn opts() -> ReportOptions {
        ReportOptions { font_path: None, ..ReportOptions::default() }
    }

    #[test]
    fn panels_follow_report_order_and_k() {
        let agg = Aggregate::build(vec![
            rec("宫崎骏", &["柊瑠美"], "日本", &["动画", "奇幻"]),
            rec("宫崎骏", &["柊瑠美"], "日本", &["动画"]),
        ]);
        let mut o = opts();
        o.top_genres = 1;
        let report = Report::from_aggregate(&agg, &o);

        let dims: Vec<Dimension> = report.panels.iter().map(|p| p.dimension).collect();
        assert_eq!(dims, Dimension::REPORT_ORDER.to_vec());
        assert_eq!(report.panel(Dimension::Genres).unwrap().top, vec![(s!("动画"), 2)]);
        assert_eq!(report.record_count, 2);
    }

    #[test]
    fn single_char_actor_filtered_from_bars_only() {
        let agg = Aggregate::build(vec![rec("导", &["甲"], "日本", &["剧情"])]);
        let report = Report::from_aggregate(&agg, &opts());

        let actors = report.panel(Dimension::Actors).unwrap();
        assert_eq!(actors.top, vec![(s!("甲"), 1)]);
        assert!(actors.bars.is_empty());
        assert_eq!(actors.state(), PanelState::Insufficient);
        assert_eq!(actors.placeholder().as_deref(), Some("演员数据不足"));

        // Directors keep one-character names.
        let directors = report.panel(Dimension::Directors).unwrap();
        assert_eq!(directors.state(), PanelState::Bars);
    }

    #[test]
    fn empty_aggregate_gives_no_data_panels() {
        let report = Report::from_aggregate(&Aggregate::build(Vec::new()), &opts());
        for panel in &report.panels {
            assert_eq!(panel.state(), PanelState::NoData);
        }
        assert_eq!(
            report.panel(Dimension::Countries).unwrap().placeholder().as_deref(),
            Some("无国家数据")
        );
    }

    #[test]
    fn text_summary_lines() {
        let agg = Aggregate::build(vec![
            rec("陈凯歌", &["张国荣", "张丰毅"], "中国大陆", &["剧情", "爱情"]),
            rec("王家卫", &["张国荣"], "中国香港", &["剧情"]),
        ]);
        let text = render_text(&Report::from_aggregate(&agg, &opts()), 50);

        assert!(text.contains("豆瓣Top50电影分析结果"));
        assert!(text.contains("【出演次数最多的演员】\n1. 张国荣 - 2部电影\n2. 张丰毅 - 1部电影"));
        assert!(text.contains("【各类型电影数量】\n1. 剧情 - 2部电影\n2. 爱情 - 1部电影"));
        let actors_at = text.find("【出演次数最多的演员】").unwrap();
        let countries_at = text.find("【制片最多的国家】").unwrap();
        let directors_at = text.find("【出现次数最多的导演】").unwrap();
        assert!(actors_at < countries_at && countries_at < directors_at);
    }

    #[test]
    fn json_keeps_pairs() {
        let agg = Aggregate::build(vec![rec("陈凯歌", &[], "中国大陆", &["剧情"])]);
        let report = Report::from_aggregate(&agg, &opts());
        let json = serde_json::to_string(&ReportJson::new(&report)).unwrap();
        assert!(json.contains(r#""directors":[["陈凯歌",1]]"#));
        assert!(json.contains(r#""actors":[]"#));
    }
}
