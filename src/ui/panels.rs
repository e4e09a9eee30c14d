use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the closures.
    let genres = dataset.genres.clone();
    let years: Vec<i32> = dataset.years.iter().copied().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            score_range_widget(ui, state);
            ui.separator();
            genre_widget(ui, state, &genres);
            ui.separator();
            year_widget(ui, state, &years);
        });
}

fn score_range_widget(ui: &mut Ui, state: &mut AppState) {
    let (min, max) = state.config.score_bounds();
    let step = state.config.score_step;
    let decimals = state.config.score_decimals();

    ui.strong("Score Range:");
    let mut lower = state.params.score_range.lower();
    let mut upper = state.params.score_range.upper();

    if ui
        .add(
            egui::Slider::new(&mut lower, min..=max)
                .step_by(step)
                .max_decimals(decimals)
                .text("min"),
        )
        .changed()
    {
        state.set_score_lower(lower);
    }
    if ui
        .add(
            egui::Slider::new(&mut upper, min..=max)
                .step_by(step)
                .max_decimals(decimals)
                .text("max"),
        )
        .changed()
    {
        state.set_score_upper(upper);
    }
}

fn genre_widget(ui: &mut Ui, state: &mut AppState, genres: &[String]) {
    let header_text = format!(
        "Choose Genre:  ({}/{})",
        state.params.selected_genres.len(),
        genres.len()
    );

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("genre_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_genres();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_genres();
                }
            });

            for genre in genres {
                let mut checked = state.params.selected_genres.contains(genre);
                let text = RichText::new(genre).color(state.genre_colors.color_for(genre));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_genre(genre);
                }
            }
        });
}

fn year_widget(ui: &mut Ui, state: &mut AppState, years: &[i32]) {
    ui.strong("Choose a Year");
    let current = state
        .params
        .selected_year
        .map(|y| y.to_string())
        .unwrap_or_default();

    egui::ComboBox::from_id_salt("year_select")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for &year in years {
                let selected = state.params.selected_year == Some(year);
                if ui.selectable_label(selected, year.to_string()).clicked() {
                    state.set_year(year);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} movies loaded, {} genres, {} years",
                ds.len(),
                ds.genres.len(),
                ds.years.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open movie data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
