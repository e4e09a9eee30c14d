use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Movie – one row of the dataset
// ---------------------------------------------------------------------------

/// A single movie record. Only complete rows make it this far: the loader
/// drops anything with a missing cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub name: String,
    pub genre: String,
    /// User score, nominally 1.0 – 10.0.
    pub score: f64,
    pub year: i32,
    pub budget: f64,
}

#[cfg(test)]
impl Movie {
    pub fn new(name: &str, genre: &str, score: f64, year: i32, budget: f64) -> Self {
        Movie {
            name: name.to_string(),
            genre: genre.to_string(),
            score,
            year,
            budget,
        }
    }
}

// ---------------------------------------------------------------------------
// MovieDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter choices.
#[derive(Debug, Clone, Default)]
pub struct MovieDataset {
    /// All movies (rows), in file order.
    pub movies: Vec<Movie>,
    /// Distinct genres in order of first appearance.
    pub genres: Vec<String>,
    /// Distinct years, ascending.
    pub years: BTreeSet<i32>,
}

impl MovieDataset {
    /// Build the genre / year indices from the loaded movies.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut genres: Vec<String> = Vec::new();
        let mut years = BTreeSet::new();

        for movie in &movies {
            if !genres.iter().any(|g| g == &movie.genre) {
                genres.push(movie.genre.clone());
            }
            years.insert(movie.year);
        }

        MovieDataset {
            movies,
            genres,
            years,
        }
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_keep_first_appearance_order() {
        let ds = MovieDataset::from_movies(vec![
            Movie::new("A", "Drama", 7.0, 1999, 10.0),
            Movie::new("B", "Action", 6.0, 1980, 20.0),
            Movie::new("C", "Drama", 5.0, 2001, 30.0),
        ]);
        assert_eq!(ds.genres, vec!["Drama".to_string(), "Action".to_string()]);
        assert_eq!(ds.years.iter().copied().collect::<Vec<_>>(), vec![1980, 1999, 2001]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_no_choices() {
        let ds = MovieDataset::from_movies(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.genres.is_empty());
        assert!(ds.years.is_empty());
    }
}
