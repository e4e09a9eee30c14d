use std::collections::BTreeSet;

use super::model::MovieDataset;

/// One boolean per dataset row; `true` keeps the row.
pub type Mask = Vec<bool>;

// ---------------------------------------------------------------------------
// Filter parameters
// ---------------------------------------------------------------------------

/// Inclusive score interval. Always ordered: `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    lower: f64,
    upper: f64,
}

impl ScoreRange {
    /// Build a range from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            ScoreRange { lower: a, upper: b }
        } else {
            ScoreRange { lower: b, upper: a }
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Inclusive on both ends.
    pub fn contains(&self, score: f64) -> bool {
        self.lower <= score && score <= self.upper
    }
}

/// The three sidebar selections.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub score_range: ScoreRange,
    /// Empty means no genre selected, which matches nothing.
    pub selected_genres: BTreeSet<String>,
    /// `None` only when the dataset has no rows.
    pub selected_year: Option<i32>,
}

impl FilterParams {
    /// Initial selections for a freshly loaded dataset: the given score range,
    /// no genres and the earliest year.
    pub fn for_dataset(dataset: &MovieDataset, score_range: ScoreRange) -> Self {
        FilterParams {
            score_range,
            selected_genres: BTreeSet::new(),
            selected_year: dataset.years.iter().next().copied(),
        }
    }
}

// ---------------------------------------------------------------------------
// Masks
// ---------------------------------------------------------------------------

/// Rows whose score lies inside the selected range.
pub fn score_mask(dataset: &MovieDataset, params: &FilterParams) -> Mask {
    dataset
        .movies
        .iter()
        .map(|m| params.score_range.contains(m.score))
        .collect()
}

/// Rows from the selected year.
pub fn year_mask(dataset: &MovieDataset, params: &FilterParams) -> Mask {
    dataset
        .movies
        .iter()
        .map(|m| params.selected_year == Some(m.year))
        .collect()
}

/// Rows inside the score range and from the selected year. Genre is ignored.
pub fn score_year_mask(dataset: &MovieDataset, params: &FilterParams) -> Mask {
    and(&score_mask(dataset, params), &year_mask(dataset, params))
}

/// Rows of a selected genre from the selected year. Score is ignored.
pub fn genre_year_mask(dataset: &MovieDataset, params: &FilterParams) -> Mask {
    dataset
        .movies
        .iter()
        .map(|m| {
            params.selected_year == Some(m.year) && params.selected_genres.contains(&m.genre)
        })
        .collect()
}

/// Rows passing all three selections.
pub fn combined_mask(dataset: &MovieDataset, params: &FilterParams) -> Mask {
    and(&score_mask(dataset, params), &genre_year_mask(dataset, params))
}

/// Indices of the rows a mask keeps, in dataset order.
pub fn mask_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter(|(_, keep)| **keep)
        .map(|(i, _)| i)
        .collect()
}

fn and(a: &[bool], b: &[bool]) -> Mask {
    a.iter().zip(b).map(|(x, y)| *x && *y).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn score_mask_is_inclusive_on_both_bounds() {
        let ds = sample();
        assert_eq!(score_mask(&ds, &params(6.0, 7.5, &[], 2000)), vec![true, true, false]);
        assert_eq!(score_mask(&ds, &params(6.1, 7.9, &[], 2000)), vec![true, false, false]);
        assert_eq!(score_mask(&ds, &params(8.0, 8.0, &[], 2000)), vec![false, false, true]);
    }

    #[test]
    fn score_range_orders_its_bounds() {
        let r = ScoreRange::new(9.0, 2.0);
        assert_eq!((r.lower(), r.upper()), (2.0, 9.0));
        assert!(r.contains(2.0) && r.contains(9.0));
    }

    #[test]
    fn no_selected_genre_matches_nothing() {
        let ds = sample();
        for year in [2000, 2001, 1999] {
            let mask = genre_year_mask(&ds, &params(1.0, 10.0, &[], year));
            assert!(mask_indices(&mask).is_empty());
            assert!(mask_indices(&combined_mask(&ds, &params(1.0, 10.0, &[], year))).is_empty());
        }
    }

    #[test]
    fn combined_mask_requires_all_three_conditions() {
        let ds = sample();
        let p = params(6.0, 8.0, &["Action"], 2000);
        assert_eq!(mask_indices(&combined_mask(&ds, &p)), vec![0]);
        assert_eq!(mask_indices(&genre_year_mask(&ds, &p)), vec![0]);
        assert_eq!(mask_indices(&score_year_mask(&ds, &p)), vec![0, 1]);
        assert_eq!(mask_indices(&year_mask(&ds, &p)), vec![0, 1]);
    }

    #[test]
    fn missing_year_selects_nothing() {
        let ds = sample();
        let mut p = params(1.0, 10.0, &["Action", "Drama"], 2000);
        p.selected_year = None;
        assert!(mask_indices(&year_mask(&ds, &p)).is_empty());
        assert!(mask_indices(&combined_mask(&ds, &p)).is_empty());
        assert_eq!(mask_indices(&score_mask(&ds, &p)).len(), 3);
    }

    #[test]
    fn initial_params_pick_earliest_year_and_no_genres() {
        let ds = sample();
        let p = FilterParams::for_dataset(&ds, ScoreRange::new(1.0, 2.0));
        assert_eq!(p.selected_year, Some(2000));
        assert!(p.selected_genres.is_empty());

        let empty = FilterParams::for_dataset(&MovieDataset::default(), ScoreRange::new(1.0, 2.0));
        assert_eq!(empty.selected_year, None);
    }
}
