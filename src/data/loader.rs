use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::StringRecord;

use super::model::{Movie, MovieDataset};

/// Columns every movie CSV must carry. Others are allowed and only take part
/// in the missing-value check.
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "genre", "score", "year", "budget"];

/// Cell contents treated as missing: blanks plus the NA markers common in
/// spreadsheet and dataframe exports.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Header-level problems that make a file unusable as a movie table.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a movie dataset from a file. Only `.csv` is accepted.
pub fn load_file(path: &Path) -> Result<MovieDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening CSV {}", path.display()))?;
            load_csv_reader(file)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Parse a movie CSV from any reader.
///
/// Rows with a missing cell in *any* column are dropped, not only rows
/// missing one of the [`REQUIRED_COLUMNS`]. A row shorter than the header
/// counts as missing its trailing cells; a longer one is an error. Cells are
/// taken verbatim, without trimming.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<MovieDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(SchemaError::MissingColumn(column).into());
        }
    }

    let mut movies = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let record = result.context("reading CSV record")?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() > headers.len() {
            bail!(
                "CSV line {line}: expected {} fields, found {}",
                headers.len(),
                record.len()
            );
        }
        if record.len() < headers.len() || has_missing_value(&record) {
            dropped += 1;
            continue;
        }

        let movie: Movie = record
            .deserialize(Some(&headers))
            .with_context(|| format!("CSV line {line}: invalid movie record"))?;
        movies.push(movie);
    }

    if dropped > 0 {
        log::info!("Dropped {dropped} rows with missing values");
    }
    log::debug!("Parsed {} complete movie rows", movies.len());

    Ok(MovieDataset::from_movies(movies))
}

fn has_missing_value(record: &StringRecord) -> bool {
    record.iter().any(is_missing)
}

fn is_missing(cell: &str) -> bool {
    NA_TOKENS.contains(&cell)
}
