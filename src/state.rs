use std::path::Path;

use crate::color::GenreColors;
use crate::config::DashboardConfig;
use crate::data::filter::{FilterParams, ScoreRange};
use crate::data::model::MovieDataset;
use crate::data::view::DashboardView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<MovieDataset>,

    /// Current sidebar selections.
    pub params: FilterParams,

    /// Stable colour per genre for the pie chart.
    pub genre_colors: GenreColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let params = FilterParams {
            score_range: config.initial_score_range(),
            selected_genres: Default::default(),
            selected_year: None,
        };
        Self {
            config,
            dataset: None,
            params,
            genre_colors: GenreColors::default(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and reset the selections for it.
    pub fn set_dataset(&mut self, dataset: MovieDataset) {
        self.params = FilterParams::for_dataset(&dataset, self.config.initial_score_range());
        self.genre_colors = GenreColors::new(&dataset.genres);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Load a CSV and make it the current dataset. Failures keep the previous
    /// dataset and surface in the status message.
    pub fn load_path(&mut self, path: &Path) {
        match crate::data::loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} movies from {} ({} genres, {} years)",
                    dataset.len(),
                    path.display(),
                    dataset.genres.len(),
                    dataset.years.len()
                );
                if dataset.is_empty() {
                    log::warn!("{} has no complete rows", path.display());
                }
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Move the lower score bound, dragging the upper bound along if needed.
    /// The value is snapped to the slider step's precision.
    pub fn set_score_lower(&mut self, lower: f64) {
        let lower = self.config.snap_score(lower);
        let upper = self.params.score_range.upper().max(lower);
        self.params.score_range = ScoreRange::new(lower, upper);
    }

    /// Move the upper score bound, dragging the lower bound along if needed.
    /// The value is snapped to the slider step's precision.
    pub fn set_score_upper(&mut self, upper: f64) {
        let upper = self.config.snap_score(upper);
        let lower = self.params.score_range.lower().min(upper);
        self.params.score_range = ScoreRange::new(lower, upper);
    }

    /// Toggle a single genre in the multi-select.
    pub fn toggle_genre(&mut self, genre: &str) {
        if !self.params.selected_genres.remove(genre) {
            self.params.selected_genres.insert(genre.to_string());
        }
    }

    /// Select every genre of the loaded dataset.
    pub fn select_all_genres(&mut self) {
        if let Some(ds) = &self.dataset {
            self.params.selected_genres = ds.genres.iter().cloned().collect();
        }
    }

    /// Deselect all genres.
    pub fn select_no_genres(&mut self) {
        self.params.selected_genres.clear();
    }

    /// Choose the year. Years absent from the dataset are ignored.
    pub fn set_year(&mut self, year: i32) {
        if let Some(ds) = &self.dataset {
            if ds.years.contains(&year) {
                self.params.selected_year = Some(year);
            }
        }
    }

    /// Run the filter / aggregation pipeline for the current selections.
    pub fn view(&self) -> Option<DashboardView> {
        self.dataset
            .as_ref()
            .map(|ds| DashboardView::compute(ds, &self.params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv_reader;

    fn loaded() -> AppState {
        let csv = "name,genre,score,year,budget\n\
                   A,Action,7.5,2000,100\n\
                   B,Drama,6.0,2000,50\n\
                   C,Action,8.0,2001,200\n";
        let mut state = AppState::default();
        state.set_dataset(load_csv_reader(csv.as_bytes()).unwrap());
        state
    }

    #[test]
    fn loading_resets_selections() {
        let state = loaded();
        assert_eq!(state.params.selected_year, Some(2000));
        assert!(state.params.selected_genres.is_empty());
        assert_eq!(state.params.score_range, ScoreRange::new(1.0, 2.0));
        let view = state.view().unwrap();
        assert!(view.table.is_empty());
    }

    #[test]
    fn score_bounds_push_each_other() {
        let mut state = loaded();
        state.set_score_lower(5.0);
        assert_eq!(state.params.score_range, ScoreRange::new(5.0, 5.0));
        state.set_score_upper(3.0);
        assert_eq!(state.params.score_range, ScoreRange::new(3.0, 3.0));
        state.set_score_upper(8.0);
        assert_eq!(state.params.score_range, ScoreRange::new(3.0, 8.0));
    }

    #[test]
    fn slider_float_noise_keeps_boundary_movie() {
        let csv = "name,genre,score,year,budget\n\
                   Edge,Action,5.8,2000,100\n";
        let mut state = AppState::default();
        state.set_dataset(load_csv_reader(csv.as_bytes()).unwrap());
        state.toggle_genre("Action");
        state.set_score_upper(10.0);

        // value a 1.0..=10.0 step 0.1 slider produces at the 5.8 tick
        let snapped_by_slider = 1.0 + ((5.8f64 - 1.0) / 0.1).round() * 0.1;
        state.set_score_lower(snapped_by_slider);
        assert_eq!(state.params.score_range.lower(), 5.8);

        let view = state.view().unwrap();
        assert_eq!(view.score_distribution.len(), 1);
        assert_eq!(view.score_distribution[0].count, 1);
    }

    #[test]
    fn genre_toggles_and_bulk_selection() {
        let mut state = loaded();
        state.toggle_genre("Action");
        assert!(state.params.selected_genres.contains("Action"));
        state.toggle_genre("Action");
        assert!(state.params.selected_genres.is_empty());
        state.select_all_genres();
        assert_eq!(state.params.selected_genres.len(), 2);
        state.select_no_genres();
        assert!(state.params.selected_genres.is_empty());
    }

    #[test]
    fn unknown_year_is_ignored() {
        let mut state = loaded();
        state.set_year(1999);
        assert_eq!(state.params.selected_year, Some(2000));
        state.set_year(2001);
        assert_eq!(state.params.selected_year, Some(2001));
    }

    #[test]
    fn failed_load_keeps_dataset_and_reports() {
        let mut state = loaded();
        state.load_path(Path::new("does-not-exist.csv"));
        assert!(state.dataset.is_some());
        assert!(state.status_message.as_deref().unwrap_or("").starts_with("Error"));
    }

    #[test]
    fn no_dataset_no_view() {
        assert!(AppState::default().view().is_none());
    }
}
