// src/collect.rs
//
// Runs the extractor over a batch. A bad item is dropped and counted,
// never propagated.

use log::{debug, info, warn};

use crate::data::{MovieRecord, RawItem};
use crate::extract::{ExtractionFailure, FieldExtractor};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedItem {
    /// Position in the input batch.
    pub index: usize,
    pub reason: ExtractionFailure,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectReport {
    pub records: Vec<MovieRecord>,
    pub skipped: Vec<SkippedItem>,
}

impl CollectReport {
    pub fn seen(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

pub struct BatchCollector {
    extractor: FieldExtractor,
}

impl BatchCollector {
    pub fn new(extractor: FieldExtractor) -> Self {
        Self { extractor }
    }

    pub fn collect(&self, items: &[RawItem]) -> Vec<MovieRecord> {
        self.collect_report(items).records
    }

    pub fn collect_report(&self, items: &[RawItem]) -> CollectReport {
        let mut report = CollectReport {
            records: Vec::with_capacity(items.len()),
            skipped: Vec::new(),
        };

        for (index, raw) in items.iter().enumerate() {
            match self.extractor.extract(raw) {
                Ok(record) => report.records.push(record),
                Err(reason) => {
                    debug!("Collect: skipping item {index}: {reason}");
                    report.skipped.push(SkippedItem { index, reason });
                }
            }
        }

        if report.skipped.is_empty() {
            info!("Collect: {} item(s) extracted", report.records.len());
        } else {
            warn!(
                "Collect: {} of {} item(s) extracted, {} skipped",
                report.records.len(),
                items.len(),
                report.skipped.len()
            );
        }
        report
    }
}

impl Default for BatchCollector {
    fn default() -> Self {
        Self::new(FieldExtractor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good(title: &str) -> RawItem {
        RawItem::new(title, "导演: 某人 主演: 某演员\n2000 / 中国大陆 / 剧情")
    }

    #[test]
    fn empty_batch_yields_nothing() {
        let report = BatchCollector::default().collect_report(&[]);
        assert!(report.records.is_empty());
        assert!(report.skipped.is_empty());
        assert_eq!(report.seen(), 0);
    }

    #[test]
    fn failures_are_skipped_and_order_kept() {
        let items = vec![
            good("一"),
            RawItem { title: None, info: Some(s!("导演: A")) },
            good("二"),
            RawItem { title: Some(s!("三")), info: None },
            good("四"),
        ];
        let report = BatchCollector::default().collect_report(&items);

        let titles: Vec<&str> = report.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["一", "二", "四"]);
        assert_eq!(
            report.skipped,
            vec![
                SkippedItem { index: 1, reason: ExtractionFailure::MissingTitle },
                SkippedItem { index: 3, reason: ExtractionFailure::MissingInfo },
            ]
        );
        assert_eq!(report.seen(), items.len());
    }

    #[test]
    fn output_never_longer_than_input() {
        let items: Vec<RawItem> = (0..7)
            .map(|i| if i % 2 == 0 { good("x") } else { RawItem::default() })
            .collect();
        let out = BatchCollector::default().collect(&items);
        assert!(out.len() <= items.len());
        assert_eq!(out.len(), 4);
    }
}
