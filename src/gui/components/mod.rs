// src/gui/components/mod.rs
pub mod charts;
pub mod controls;
pub mod records_table;
pub mod tabs;
