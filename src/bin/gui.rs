// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use douban_top::{ config::state::GuiState, gui };
use eframe::egui::{ IconData, ViewportBuilder };
use image::{ Rgba, RgbaImage };

const ICON_SIZE: u32 = 32;

// Three green bars on transparent ground; drawn here so the binary needs no asset.
fn app_icon() -> IconData {
    let heights = [14, 26, 20];
    let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let col = (x / 10) as usize;
        let in_bar = x % 10 >= 2 && col < heights.len();
        if in_bar && y >= ICON_SIZE - 3 - heights[col] && y < ICON_SIZE - 3 {
            Rgba([0, 119, 34, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32]),
        ..Default::default()
    };

    douban_top::logging::init(douban_top::logging::resolve_level(None));

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
