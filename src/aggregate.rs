// src/aggregate.rs
//
// Frequency tables over the collected records.
//
// Tables keep labels in first-seen order; `top_k` is a stable sort on the
// count, so equal counts come back in the order they were first encountered.

use std::collections::HashMap;

use crate::data::{Dimension, MovieRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(s!(label), self.entries.len());
                self.entries.push((s!(label), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> u64 {
        self.index.get(label).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// All entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn top_k(&self, k: usize) -> Vec<(String, u64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1)); // stable
        ranked.truncate(k);
        ranked
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for label in iter {
            table.count(label);
        }
        table
    }
}

/// The four tables plus the records they were built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Aggregate {
    records: Vec<MovieRecord>,
    actors: FrequencyTable,
    directors: FrequencyTable,
    countries: FrequencyTable,
    genres: FrequencyTable,
}

impl Aggregate {
    /// Zero records is fine: every table comes back empty.
    pub fn build(records: Vec<MovieRecord>) -> Self {
        let tally = |dim: Dimension| -> FrequencyTable {
            records
                .iter()
                .flat_map(|r| dim.labels(r))
                .map(String::as_str)
                .collect()
        };
        let actors = tally(Dimension::Actors);
        let directors = tally(Dimension::Directors);
        let countries = tally(Dimension::Countries);
        let genres = tally(Dimension::Genres);

        Self { records, actors, directors, countries, genres }
    }

    pub fn records(&self) -> &[MovieRecord] { &self.records }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn table(&self, dim: Dimension) -> &FrequencyTable {
        match dim {
            Dimension::Actors    => &self.actors,
            Dimension::Directors => &self.directors,
            Dimension::Countries => &self.countries,
            Dimension::Genres    => &self.genres,
        }
    }

    pub fn top_k(&self, dim: Dimension, k: usize) -> Vec<(String, u64)> {
        self.table(dim).top_k(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(director: &str, actors: &[&str], country: &str, genres: &[&str]) -> MovieRecord {
        MovieRecord {
            title: s!("t"),
            director: s!(director),
            actors: actors.iter().map(|a| s!(*a)).collect(),
            country: s!(country),
            genres: genres.iter().map(|g| s!(*g)).collect(),
        }
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let table: FrequencyTable = ["C", "A", "B", "A", "B", "A", "B"]
            .into_iter()
            .collect();
        // C seen first but lower count; A before B on the tie.
        assert_eq!(table.top_k(2), vec![(s!("A"), 3), (s!("B"), 3)]);
        assert_eq!(table.top_k(10), vec![(s!("A"), 3), (s!("B"), 3), (s!("C"), 1)]);
    }

    #[test]
    fn tie_order_follows_first_appearance_not_label() {
        let table: FrequencyTable = ["B", "A", "A", "B"].into_iter().collect();
        assert_eq!(table.top_k(2), vec![(s!("B"), 2), (s!("A"), 2)]);
    }

    #[test]
    fn top_k_zero_and_oversized() {
        let table: FrequencyTable = ["x"].into_iter().collect();
        assert!(table.top_k(0).is_empty());
        assert_eq!(table.top_k(5).len(), 1);
    }

    #[test]
    fn build_counts_each_dimension() {
        let records = vec![
            rec("宫崎骏", &["柊瑠美", "入野自由"], "日本", &["剧情", "动画", "奇幻"]),
            rec("宫崎骏", &["入野自由"], "日本", &["动画"]),
            rec("陈凯歌", &[], "中国大陆", &["剧情"]),
        ];
        let agg = Aggregate::build(records);

        assert_eq!(agg.table(Dimension::Directors).get("宫崎骏"), 2);
        assert_eq!(agg.table(Dimension::Actors).get("入野自由"), 2);
        assert_eq!(agg.table(Dimension::Actors).total(), 3);
        assert_eq!(agg.top_k(Dimension::Countries, 1), vec![(s!("日本"), 2)]);
        assert_eq!(
            agg.top_k(Dimension::Genres, 8),
            vec![(s!("剧情"), 2), (s!("动画"), 2), (s!("奇幻"), 1)]
        );
        assert_eq!(agg.records().len(), 3);
    }

    #[test]
    fn empty_build_has_empty_tables() {
        let agg = Aggregate::build(Vec::new());
        assert!(agg.is_empty());
        for dim in Dimension::REPORT_ORDER {
            assert!(agg.table(dim).is_empty());
            assert!(agg.top_k(dim, 5).is_empty());
        }
    }

    #[test]
    fn build_is_idempotent() {
        let records = vec![
            rec("A", &["甲", "乙"], "美国", &["剧情"]),
            rec("B", &["乙"], "英国", &["喜剧"]),
        ];
        assert_eq!(Aggregate::build(records.clone()), Aggregate::build(records));
    }
}
