// src/specs/mod.rs
//! # Page parsers
//!
//! Page-specific knowledge of *where the text lives in the HTML*. A parser turns
//! one fetched document into raw, untyped items and stops there.
//!
//! ## What lives here
//! - **Pure HTML traversal** of a listing page (`div.item` blocks and the nodes
//!   inside them) using `scraper` selectors.
//! - **Missing-node tolerance**: an entry whose title or info node is absent is
//!   still emitted, with `None` in that slot, so the collector can count it.
//!
//! ## What does **not** live here
//! - **Field heuristics** (director/actor/country/genre) – see `extract`.
//! - **Fetching, pacing, retries** – see `scrape` and `core::net`.
//! - **Caching/persistence** – see `store` and `file`.
//!
//! ## Typical call chain
//! ```text
//! CLI / GUI → scrape::run → core::net (HTML) → specs::top250::parse_listing
//!                        ↘ collect::BatchCollector → aggregate::Aggregate
//! ```
//!
//! ## Testing notes
//! Parsers are tested offline against captured page fragments.
pub mod top250;
