// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod specs;

pub mod aggregate;
pub mod chart;
pub mod collect;
pub mod data;
pub mod extract;
pub mod file;
pub mod gui;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod store;
