use super::aggregate::{
    average_budget_by_year, genre_counts, score_distribution, GenreCount, ScoreCount, YearBudget,
};
use super::filter::{
    combined_mask, genre_year_mask, mask_indices, score_year_mask, year_mask, FilterParams,
};
use super::model::MovieDataset;

/// Everything the central panel shows for one set of selections.
///
/// Computed from scratch each frame; nothing here outlives the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Rows of the selected genres in the selected year (score ignored).
    pub table: Vec<usize>,
    /// Genre counts within the score range and year.
    pub genre_counts: Vec<GenreCount>,
    /// Genre counts within the year only.
    pub genre_distribution: Vec<GenreCount>,
    /// Mean budget per year over the unfiltered dataset.
    pub average_budget: Vec<YearBudget>,
    /// Score counts for rows passing every selection.
    pub score_distribution: Vec<ScoreCount>,
}

impl DashboardView {
    pub fn compute(dataset: &MovieDataset, params: &FilterParams) -> Self {
        let table = mask_indices(&genre_year_mask(dataset, params));
        let by_score_year = mask_indices(&score_year_mask(dataset, params));
        let by_year = mask_indices(&year_mask(dataset, params));
        let by_all = mask_indices(&combined_mask(dataset, params));

        DashboardView {
            table,
            genre_counts: genre_counts(dataset, &by_score_year),
            genre_distribution: genre_counts(dataset, &by_year),
            average_budget: average_budget_by_year(dataset),
            score_distribution: score_distribution(dataset, &by_all),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::ScoreRange;
    use crate::data::model::Movie;

    fn sample() -> MovieDataset {
        MovieDataset::from_movies(vec![
            Movie::new("A", "Action", 7.5, 2000, 100.0),
            Movie::new("B", "Drama", 6.0, 2000, 50.0),
            Movie::new("C", "Action", 8.0, 2001, 200.0),
        ])
    }

    fn params(lo: f64, hi: f64, genres: &[&str], year: i32) -> FilterParams {
        FilterParams {
            score_range: ScoreRange::new(lo, hi),
            selected_genres: genres.iter().map(|g| g.to_string()).collect(),
            selected_year: Some(year),
        }
    }

    #[test]
    fn action_in_2000_example() {
        let ds = sample();
        let view = DashboardView::compute(&ds, &params(6.0, 8.0, &["Action"], 2000));

        assert_eq!(view.table, vec![0]);
        assert_eq!(ds.movies[view.table[0]].name, "A");
        assert_eq!(
            view.score_distribution,
            vec![ScoreCount {
                score: 7.5,
                count: 1
            }]
        );
        // line chart ignores genre selection
        assert_eq!(view.genre_counts.len(), 2);
        assert_eq!(view.genre_distribution.iter().map(|g| g.count).sum::<usize>(), 2);
    }

    #[test]
    fn genre_count_of_full_filter_matches_example() {
        let ds = sample();
        let p = params(6.0, 8.0, &["Action"], 2000);
        let rows = mask_indices(&combined_mask(&ds, &p));
        assert_eq!(
            genre_counts(&ds, &rows),
            vec![GenreCount {
                genre: "Action".to_string(),
                count: 1
            }]
        );
    }

    #[test]
    fn average_budget_ignores_selections() {
        let ds = sample();
        let a = DashboardView::compute(&ds, &params(1.0, 2.0, &[], 2000));
        let b = DashboardView::compute(&ds, &params(6.0, 9.0, &["Drama"], 2001));
        assert_eq!(a.average_budget, b.average_budget);
        assert_eq!(a.average_budget.len(), 2);
    }

    #[test]
    fn narrow_score_range_empties_score_dependent_views() {
        let ds = sample();
        let view = DashboardView::compute(&ds, &params(1.0, 2.0, &["Action", "Drama"], 2000));
        assert!(view.genre_counts.is_empty());
        assert!(view.score_distribution.is_empty());
        assert_eq!(view.table, vec![0, 1]);
        assert!(!view.genre_distribution.is_empty());
    }
}
