// src/data.rs
//
// Shapes that flow through the pipeline:
//
// - RawItem:     one listing entry as found in the page, pre-extraction.
// - MovieRecord: the typed result of extracting one RawItem.
// - Dimension:   the four axes the aggregator counts over.

use serde::{Deserialize, Serialize};

/// Placeholder for a director or country that could not be determined.
pub const UNKNOWN: &str = "未知";
/// Placeholder genre when the listing carries no genre line.
pub const DEFAULT_GENRE: &str = "剧情";

/// Raw text of one `div.item`. `None` means the node was missing in the markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawItem {
    pub title: Option<String>,
    pub info: Option<String>,
}

impl RawItem {
    pub fn new(title: impl Into<String>, info: impl Into<String>) -> Self {
        Self { title: Some(title.into()), info: Some(info.into()) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub director: String,
    pub actors: Vec<String>,
    pub country: String,
    #[serde(rename = "genre")]
    pub genres: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Actors,
    Directors,
    Countries,
    Genres,
}

impl Dimension {
    /// Printed report order.
    pub const REPORT_ORDER: [Dimension; 4] = [
        Dimension::Actors,
        Dimension::Countries,
        Dimension::Directors,
        Dimension::Genres,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Dimension::Actors    => "出演次数最多的演员",
            Dimension::Directors => "出现次数最多的导演",
            Dimension::Countries => "制片最多的国家",
            Dimension::Genres    => "各类型电影数量",
        }
    }

    /// Short noun used in "no data" placeholders.
    pub fn noun(self) -> &'static str {
        match self {
            Dimension::Actors    => "演员",
            Dimension::Directors => "导演",
            Dimension::Countries => "国家",
            Dimension::Genres    => "类型",
        }
    }

    /// Labels this record contributes along the dimension, in record order.
    pub fn labels<'a>(self, record: &'a MovieRecord) -> &'a [String] {
        match self {
            Dimension::Actors    => &record.actors,
            Dimension::Directors => std::slice::from_ref(&record.director),
            Dimension::Countries => std::slice::from_ref(&record.country),
            Dimension::Genres    => &record.genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_genre_key_and_literal_cjk() {
        let rec = MovieRecord {
            title: s!("霸王别姬"),
            director: s!("陈凯歌"),
            actors: svec!["张国荣", "张丰毅"],
            country: s!("中国大陆"),
            genres: svec!["剧情", "爱情"],
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains(r#""genre":["剧情","爱情"]"#));
        assert!(json.contains("霸王别姬"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn single_valued_dimensions_yield_one_label() {
        let rec = MovieRecord {
            title: s!("t"),
            director: s!("d"),
            actors: svec!["a1", "a2"],
            country: s!("c"),
            genres: svec!["g"],
        };
        assert_eq!(Dimension::Directors.labels(&rec), &[s!("d")]);
        assert_eq!(Dimension::Actors.labels(&rec).len(), 2);
    }
}
