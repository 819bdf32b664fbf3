// src/specs/top250.rs
//! Parser for the Top 250 listing page (`/top250?start=N`).
//!
//! Each entry is shaped like
//!
//! ```html
//! <div class="item">
//!   <div class="pic">…</div>
//!   <div class="info">
//!     <div class="hd"><a href="…"><span class="title">肖申克的救赎</span>
//!       <span class="title">&nbsp;/&nbsp;The Shawshank Redemption</span></a></div>
//!     <div class="bd">
//!       <p class="">导演: 弗兰克·德拉邦特 Frank Darabont&nbsp;&nbsp;&nbsp;主演: 蒂姆·罗宾斯 Tim Robbins /...<br>
//!         1994&nbsp;/&nbsp;美国&nbsp;/&nbsp;犯罪 剧情</p>
//!       …
//! ```
//!
//! Only the first `span.title` (the native title) and the first `p` of the
//! first `div.bd` are read.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::data::RawItem;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("invalid selector `{0}`")]
    Selector(&'static str),
}

struct Selectors {
    item: Selector,
    title: Selector,
    body: Selector,
    para: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ListingError> {
        Ok(Self {
            item: parse_selector("div.item")?,
            title: parse_selector("span.title")?,
            body: parse_selector("div.bd")?,
            para: parse_selector("p")?,
        })
    }
}

fn parse_selector(css: &'static str) -> Result<Selector, ListingError> {
    Selector::parse(css).map_err(|_| ListingError::Selector(css))
}

/// One `RawItem` per `div.item`, in document order.
pub fn parse_listing(html: &str) -> Result<Vec<RawItem>, ListingError> {
    let sel = Selectors::new()?;
    let document = Html::parse_document(html);

    let items = document
        .select(&sel.item)
        .map(|item| RawItem {
            title: item.select(&sel.title).next().map(text_of),
            info: item
                .select(&sel.body)
                .next()
                .and_then(|bd| bd.select(&sel.para).next())
                .map(text_of),
        })
        .collect();
    Ok(items)
}

// All descendant text, entities already decoded by the parser; <br> adds nothing.
fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::FieldExtractor;

    const PAGE: &str = r##"
<html><body><ol class="grid_view">
<li><div class="item">
  <div class="pic"><em>1</em></div>
  <div class="info">
    <div class="hd"><a href="https://movie.douban.com/subject/1292052/">
      <span class="title">肖申克的救赎</span>
      <span class="title">&nbsp;/&nbsp;The Shawshank Redemption</span>
    </a></div>
    <div class="bd">
      <p class="">
        导演: 弗兰克·德拉邦特 Frank Darabont&nbsp;&nbsp;&nbsp;主演: 蒂姆·罗宾斯 Tim Robbins /...<br>
        1994&nbsp;/&nbsp;美国&nbsp;/&nbsp;犯罪 剧情
      </p>
      <div class="star"><span class="rating_num">9.7</span></div>
      <p class="quote"><span>希望让人自由。</span></p>
    </div>
  </div>
</div></li>
<li><div class="item">
  <div class="info">
    <div class="hd"><a href="#"><span class="other">no title span</span></a></div>
    <div class="bd"><p>导演: 某人</p></div>
  </div>
</div></li>
<li><div class="item">
  <div class="info">
    <div class="hd"><a href="#"><span class="title">霸王别姬</span></a></div>
  </div>
</div></li>
</ol></body></html>
"##;

    #[test]
    fn one_raw_item_per_entry() {
        let items = parse_listing(PAGE).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title.as_deref(), Some("肖申克的救赎"));
        assert!(items[1].title.is_none());
        assert_eq!(items[1].info.as_deref(), Some("导演: 某人"));
        assert_eq!(items[2].title.as_deref(), Some("霸王别姬"));
        assert!(items[2].info.is_none());
    }

    #[test]
    fn info_keeps_line_break_after_br() {
        let items = parse_listing(PAGE).unwrap();
        let info = items[0].info.as_deref().unwrap();
        let lines: Vec<&str> = info.trim().split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim().starts_with("导演: 弗兰克·德拉邦特"));
        assert!(lines[1].contains("1994\u{a0}/\u{a0}美国"));
    }

    #[test]
    fn parsed_entry_extracts_cleanly() {
        let items = parse_listing(PAGE).unwrap();
        let rec = FieldExtractor::default().extract(&items[0]).unwrap();
        assert_eq!(rec.title, "肖申克的救赎");
        assert_eq!(rec.director, "弗兰克·德拉邦特 Frank Darabont");
        assert_eq!(rec.actors, svec!["蒂姆·罗宾斯"]);
        assert_eq!(rec.country, "美国");
        assert_eq!(rec.genres, svec!["剧情"]);
    }

    #[test]
    fn page_without_items_is_empty() {
        assert!(parse_listing("<html><body><p>blocked</p></body></html>").unwrap().is_empty());
    }
}
