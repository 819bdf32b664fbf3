// src/gui/components/controls.rs
//
// Fetch settings, output dir and the action row.

use eframe::egui::{ self, widgets::Spinner };
use log::debug;

use crate::{
    config::consts::MAX_PAGES,
    extract::EmptyGenre,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let scrape = &mut app.state.options.scrape;

        ui.label("Pages:");
        let before = scrape.pages;
        ui.add_enabled(!app.running, egui::DragValue::new(&mut scrape.pages).range(1..=MAX_PAGES));
        if scrape.pages != before {
            debug!("UI: pages → {} ({} movies)", scrape.pages, scrape.expected_items());
        }

        ui.label("Workers:");
        ui.add_enabled(!app.running, egui::DragValue::new(&mut scrape.workers).range(1..=4));

        ui.separator();

        let mut fill = app.state.options.extract.empty_genre == EmptyGenre::Default;
        if ui
            .checkbox(&mut fill, "Empty genre → 剧情")
            .on_hover_text("Records whose genre list filters down to nothing get the default genre")
            .changed()
        {
            app.state.options.extract.empty_genre = if fill { EmptyGenre::Default } else { EmptyGenre::Keep };
            debug!("UI: empty_genre → {:?}", app.state.options.extract.empty_genre);
        }

        ui.checkbox(&mut app.state.options.export.write_chart, "Write chart");
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        ui.add(egui::TextEdit::singleline(&mut app.out_dir_text).font(egui::TextStyle::Monospace));
    });

    ui.horizontal(|ui| {
        let button_scrape = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("FETCH").strong())
                .fill(egui::Color32::from_rgb(0, 119, 34)));
        if button_scrape.clicked() {
            app.start_scrape(ui.ctx());
        }

        if ui.add_enabled(!app.running && !app.records().is_empty(), egui::Button::new("Export")).clicked() {
            app.export();
        }

        if ui.add_enabled(!app.running, egui::Button::new("Reload cache")).clicked() {
            app.reload_cache();
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });

    ui.add_space(4.0);
}
