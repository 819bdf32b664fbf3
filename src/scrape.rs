// src/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use log::{error, info};
use thiserror::Error;

use crate::{
    collect::BatchCollector,
    config::options::{ExtractOptions, ScrapeOptions},
    core::net::{NetError, PageSource},
    data::{MovieRecord, RawItem},
    extract::FieldExtractor,
    progress::Progress,
    specs::top250::{self, ListingError},
};

#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Net(#[from] NetError),
    #[error(transparent)]
    Listing(#[from] ListingError),
}

/// Outcome of one full run. `records.len()` may fall short of the nominal
/// listing size; the counts say why.
#[derive(Clone, Debug, Default)]
pub struct ScrapeSummary {
    pub records: Vec<MovieRecord>,
    pub pages_ok: usize,
    pub pages_failed: Vec<u32>,
    pub items_seen: usize,
    pub items_skipped: usize,
}

pub fn fetch_page(source: &dyn PageSource, url: &str) -> Result<Vec<RawItem>, PageError> {
    let html = source.fetch(url)?;
    Ok(top250::parse_listing(&html)?)
}

/// Fetch every listing page, then extract all entries in page order.
pub fn run(
    source: &dyn PageSource,
    scrape: &ScrapeOptions,
    extract: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeSummary {
    let urls = scrape.page_urls();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    // Concurrency
    type PageResult = (u32, Result<Vec<RawItem>, PageError>);

    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<PageResult>();
    let workers = scrape.workers.min(urls.len()).max(1);

    let mut per_page: Vec<(u32, Vec<RawItem>)> = Vec::with_capacity(urls.len());
    let mut pages_failed: Vec<u32> = Vec::new();

    thread::scope(|sc| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let urls = &urls;
            let counter = &counter;

            sc.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    let Some((page, url)) = urls.get(i) else { break };

                    let result = fetch_page(source, url);
                    if tx.send((*page, result)).is_err() {
                        break;
                    }
                    if counter.load(Ordering::Relaxed) < urls.len() {
                        thread::sleep(Duration::from_millis(scrape.pause_for(*page))); // be polite
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Aggregate results
        for (page, result) in res_rx {
            match result {
                Ok(items) => {
                    info!("Scrape: page {page} → {} item(s)", items.len());
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(page, items.len());
                    }
                    per_page.push((page, items));
                }
                Err(e) => {
                    error!("Scrape: page {page} failed: {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(page, &e.to_string());
                    }
                    pages_failed.push(page);
                }
            }
        }
    });

    // Completion order is arbitrary; page order is not.
    per_page.sort_by_key(|(page, _)| *page);
    pages_failed.sort_unstable();
    let pages_ok = per_page.len();
    let items: Vec<RawItem> = per_page.into_iter().flat_map(|(_, items)| items).collect();

    let collector = BatchCollector::new(FieldExtractor::new(extract.empty_genre));
    let report = collector.collect_report(&items);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "解析完成: {}条有效, 跳过{}条",
            report.records.len(),
            report.skipped.len()
        ));
        p.finish();
    }

    ScrapeSummary {
        items_seen: report.seen(),
        items_skipped: report.skipped.len(),
        records: report.records,
        pages_ok,
        pages_failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeSite {
        pages: HashMap<String, (u64, Option<String>)>, // delay ms, body (None = 500)
    }

    impl PageSource for FakeSite {
        fn fetch(&self, url: &str) -> Result<String, NetError> {
            let (delay, body) = self.pages.get(url).cloned().unwrap_or((0, None));
            thread::sleep(Duration::from_millis(delay));
            body.ok_or_else(|| NetError::Status { status: 500, url: s!(url) })
        }
    }

    fn listing(titles: &[&str]) -> String {
        let mut html = s!("<html><body>");
        for t in titles {
            html.push_str(&format!(
                r#"<div class="item"><span class="title">{t}</span><div class="bd"><p>导演: 某人 主演: 某演员<br>
                2000&nbsp;/&nbsp;日本&nbsp;/&nbsp;剧情</p></div></div>"#
            ));
        }
        html.push_str("</body></html>");
        html
    }

    fn opts(pages: u32) -> ScrapeOptions {
        ScrapeOptions {
            base_url: s!("http://fake/top"),
            pages,
            page_size: 2,
            workers: 3,
            pause_ms: 0,
            jitter_ms: 0,
        }
    }

    #[test]
    fn page_order_survives_out_of_order_completion() {
        let mut pages = HashMap::new();
        pages.insert(s!("http://fake/top?start=0"), (60, Some(listing(&["一", "二"]))));
        pages.insert(s!("http://fake/top?start=2"), (0, Some(listing(&["三", "四"]))));
        pages.insert(s!("http://fake/top?start=4"), (20, Some(listing(&["五"]))));
        let site = FakeSite { pages };

        let summary = run(&site, &opts(3), &ExtractOptions::default(), None);
        let titles: Vec<&str> = summary.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["一", "二", "三", "四", "五"]);
        assert_eq!(summary.pages_ok, 3);
        assert!(summary.pages_failed.is_empty());
        assert_eq!(summary.records[0].country, "日本");
    }

    #[test]
    fn failed_page_is_reported_not_fatal() {
        let mut pages = HashMap::new();
        pages.insert(s!("http://fake/top?start=0"), (0, Some(listing(&["一", "二"]))));
        pages.insert(s!("http://fake/top?start=2"), (0, None));
        let site = FakeSite { pages };

        struct Count { done: usize, failed: Vec<u32>, logs: Vec<String>, finished: bool }
        impl Progress for Count {
            fn log(&mut self, msg: &str) { self.logs.push(s!(msg)); }
            fn item_done(&mut self, _page: u32, _items: usize) { self.done += 1; }
            fn item_failed(&mut self, page: u32, _msg: &str) { self.failed.push(page); }
            fn finish(&mut self) { self.finished = true; }
        }
        let mut count = Count { done: 0, failed: Vec::new(), logs: Vec::new(), finished: false };

        let summary = run(&site, &opts(2), &ExtractOptions::default(), Some(&mut count));
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.pages_failed, vec![2]);
        assert_eq!(count.done, 1);
        assert_eq!(count.failed, vec![2]);
        assert!(count.finished);
        assert_eq!(count.logs, vec![s!("解析完成: 2条有效, 跳过0条")]);
    }

    #[test]
    fn skipped_items_are_counted() {
        let mut body = listing(&["一"]);
        body = body.replace(
            "</body>",
            r#"<div class="item"><div class="bd"><p>导演: X</p></div></div></body>"#,
        );
        let mut pages = HashMap::new();
        pages.insert(s!("http://fake/top?start=0"), (0, Some(body)));
        let site = FakeSite { pages };

        let summary = run(&site, &opts(1), &ExtractOptions::default(), None);
        assert_eq!(summary.items_seen, 2);
        assert_eq!(summary.items_skipped, 1);
        assert_eq!(summary.records.len(), 1);
    }

    #[test]
    fn zero_pages_is_an_empty_run() {
        let site = FakeSite { pages: HashMap::new() };
        let summary = run(&site, &opts(0), &ExtractOptions::default(), None);
        assert!(summary.records.is_empty());
        assert_eq!(summary.pages_ok, 0);
    }
}
