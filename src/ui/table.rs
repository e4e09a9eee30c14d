use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::MovieDataset;

const HEADERS: [&str; 5] = ["name", "genre", "score", "year", "budget"];

/// Render the given dataset rows as a scrollable table.
pub fn movie_table(ui: &mut Ui, dataset: &MovieDataset, rows: &[usize]) {
    TableBuilder::new(ui)
        .id_salt("movie_table")
        .striped(true)
        .resizable(true)
        .vscroll(true)
        .max_scroll_height(320.0)
        .column(Column::remainder().at_least(200.0).clip(true))
        .column(Column::auto().at_least(100.0))
        .columns(Column::auto().at_least(70.0), 3)
        .header(22.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let movie = &dataset.movies[rows[row.index()]];
                row.col(|ui| {
                    ui.label(&movie.name);
                });
                row.col(|ui| {
                    ui.label(&movie.genre);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", movie.score));
                });
                row.col(|ui| {
                    ui.label(movie.year.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", movie.budget));
                });
            });
        });
}
