// src/gui/components/records_table.rs
use eframe::egui::{ self, RichText };
use egui_extras::{ Column, TableBuilder };

use crate::{ data::MovieRecord, gui::app::App };

const HEADERS: [&str; 6] = ["#", "片名", "导演", "主演", "国家", "类型"];

fn matches(rec: &MovieRecord, needle: &str) -> bool {
    needle.is_empty()
        || rec.title.contains(needle)
        || rec.director.contains(needle)
        || rec.actors.iter().any(|a| a.contains(needle))
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Filter:");
        ui.text_edit_singleline(&mut app.state.gui.filter);
    });

    let needle = app.state.gui.filter.trim().to_owned();
    // Rank is the position in the full list, not the filtered one.
    let rows: Vec<(usize, &MovieRecord)> = app
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, &needle))
        .collect();

    if rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(if app.records().is_empty() { "No data yet. Press FETCH." } else { "No matches." });
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(36.0))
        .column(Column::initial(200.0).resizable(true).clip(true))
        .column(Column::initial(140.0).resizable(true).clip(true))
        .column(Column::initial(240.0).resizable(true).clip(true))
        .column(Column::initial(100.0).resizable(true).clip(true))
        .column(Column::remainder().clip(true))
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.label(RichText::new(h).strong()); });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let (i, rec) = rows[row.index()];
                row.col(|ui| { ui.label((i + 1).to_string()); });
                row.col(|ui| { ui.label(rec.title.as_str()); });
                row.col(|ui| { ui.label(rec.director.as_str()); });
                row.col(|ui| { ui.label(rec.actors.join(" / ")); });
                row.col(|ui| { ui.label(rec.country.as_str()); });
                row.col(|ui| { ui.label(rec.genres.join(" ")); });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_checks_title_director_and_actors() {
        let rec = MovieRecord {
            title: s!("霸王别姬"),
            director: s!("陈凯歌"),
            actors: svec!["张国荣", "张丰毅"],
            country: s!("中国大陆"),
            genres: svec!["剧情"],
        };
        assert!(matches(&rec, ""));
        assert!(matches(&rec, "别姬"));
        assert!(matches(&rec, "凯歌"));
        assert!(matches(&rec, "丰毅"));
        assert!(!matches(&rec, "中国")); // country is not searched
    }
}
