use std::collections::BTreeMap;

use super::model::MovieDataset;

// ---------------------------------------------------------------------------
// Aggregate rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearBudget {
    pub year: i32,
    pub mean_budget: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCount {
    pub score: f64,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Aggregators
// ---------------------------------------------------------------------------

/// Count the given rows per genre.
///
/// Ordered by count, highest first; equal counts keep the order in which the
/// genre first appears among `rows`. Empty `rows` gives an empty result.
pub fn genre_counts(dataset: &MovieDataset, rows: &[usize]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    for &idx in rows {
        let genre = &dataset.movies[idx].genre;
        match counts.iter_mut().find(|c| &c.genre == genre) {
            Some(entry) => entry.count += 1,
            None => counts.push(GenreCount {
                genre: genre.clone(),
                count: 1,
            }),
        }
    }
    // stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Mean budget per year over the whole dataset, ascending by year.
pub fn average_budget_by_year(dataset: &MovieDataset) -> Vec<YearBudget> {
    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for movie in &dataset.movies {
        let entry = sums.entry(movie.year).or_insert((0.0, 0));
        entry.0 += movie.budget;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(year, (total, n))| YearBudget {
            year,
            mean_budget: total / n as f64,
        })
        .collect()
}

/// Count the given rows per distinct score, ascending by score.
pub fn score_distribution(dataset: &MovieDataset, rows: &[usize]) -> Vec<ScoreCount> {
    let mut scores: Vec<f64> = rows.iter().map(|&i| dataset.movies[i].score).collect();
    scores.sort_by(|a, b| a.total_cmp(b));

    let mut out: Vec<ScoreCount> = Vec::new();
    for score in scores {
        match out.last_mut() {
            Some(last) if last.score == score => last.count += 1,
            _ => out.push(ScoreCount { score, count: 1 }),
        }
    }
    out
}
