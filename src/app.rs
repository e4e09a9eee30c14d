use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::view::DashboardView;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

const SECTION_COLOR: egui::Color32 = egui::Color32::from_rgb(210, 40, 40);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MovieDashboardApp {
    pub state: AppState,
}

impl MovieDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for MovieDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table and charts ----
        // The view is rebuilt after the sidebar so this frame reflects any
        // selection made in it.
        let view = self.state.view();
        egui::CentralPanel::default().show(ctx, |ui| match &view {
            Some(view) => dashboard(ui, &self.state, view),
            None => {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Open a movie CSV to start  (File → Open…)");
                });
            }
        });
    }
}

fn section_heading(ui: &mut Ui, text: &str) {
    ui.separator();
    ui.label(RichText::new(text).color(SECTION_COLOR).heading());
}

fn dashboard(ui: &mut Ui, state: &AppState, view: &DashboardView) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let params = &state.params;
    let year_label = params
        .selected_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());

    ScrollArea::vertical()
        .id_salt("dashboard_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.heading(RichText::new("Movie Dashboard").color(SECTION_COLOR).strong());
            });

            section_heading(ui, "Filtered Movies by Year and Genre");
            table::movie_table(ui, dataset, &view.table);

            section_heading(
                ui,
                &format!("Number of Movies by Genre in {year_label} (Filtered by Score)"),
            );
            match params.selected_year {
                Some(year) => {
                    plot::genre_count_line(ui, &view.genre_counts, year, params.score_range)
                }
                None => plot::notice(ui, "No year available."),
            }

            section_heading(ui, &format!("Genre Distribution in {year_label}"));
            match params.selected_year {
                Some(year) => {
                    plot::genre_pie(ui, &view.genre_distribution, year, &state.genre_colors)
                }
                None => plot::notice(ui, "No year available."),
            }

            section_heading(ui, "Average Budget by Year");
            plot::average_budget_bars(ui, &view.average_budget);

            section_heading(ui, "Score Distribution (Based on Selection)");
            match params.selected_year {
                Some(year) => plot::score_distribution_bars(
                    ui,
                    &view.score_distribution,
                    year,
                    state.config.score_step * 0.8,
                ),
                None => plot::notice(ui, "No year available."),
            }
        });
}
