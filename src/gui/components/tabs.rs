// src/gui/components/tabs.rs
use eframe::egui;
use log::debug;

use crate::config::state::Tab;
use crate::gui::app::App;

const TABS: [(Tab, &str); 2] = [(Tab::Movies, "Movies"), (Tab::Charts, "Charts")];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for (tab, title) in TABS {
            let selected = app.state.gui.tab == tab;
            if ui.selectable_label(selected, title).clicked() && !selected {
                debug!("UI: Tab switch {:?} → {:?}", app.state.gui.tab, tab);
                app.state.gui.tab = tab;
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{} movie(s)", app.records().len()));
        });
    });
}
