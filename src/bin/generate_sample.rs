use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const GENRES: [(&str, f64); 8] = [
    // genre, typical budget in millions
    ("Action", 60.0),
    ("Adventure", 50.0),
    ("Animation", 70.0),
    ("Comedy", 20.0),
    ("Crime", 18.0),
    ("Drama", 15.0),
    ("Horror", 8.0),
    ("Biography", 25.0),
];
const RATINGS: [&str; 4] = ["G", "PG", "PG-13", "R"];
const ADJECTIVES: [&str; 8] = ["Silent", "Last", "Broken", "Golden", "Hidden", "Lost", "Red", "Wild"];
const NOUNS: [&str; 8] = ["River", "Empire", "Promise", "Harbor", "Signal", "Summer", "Code", "Garden"];
const DIRECTORS: [&str; 6] = ["A. Reyes", "M. Okafor", "J. Lind", "S. Tanaka", "R. Kowalski", "L. Haddad"];

const MOVIES_PER_YEAR: usize = 40;
/// Roughly one row in this many gets a blank cell.
const MISSING_EVERY: usize = 25;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "movies.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["name", "rating", "genre", "year", "score", "votes", "director", "budget"])?;

    let mut rows = 0usize;
    for year in 1980..=2020 {
        for n in 0..MOVIES_PER_YEAR {
            let (genre, base_budget) = GENRES[rng.below(GENRES.len())];
            let name = format!("{} {} {}", rng.pick(&ADJECTIVES), rng.pick(&NOUNS), n + 1);
            // scores land on one decimal, like user ratings
            let score = (rng.gauss(6.4, 1.0).clamp(1.0, 10.0) * 10.0).round() / 10.0;
            let votes = (rng.next_f64() * 500_000.0) as u64 + 100;
            let budget = (base_budget * rng.gauss(1.0, 0.35).max(0.1) * 1_000_000.0).round();

            let mut record = vec![
                name,
                rng.pick(&RATINGS).to_string(),
                genre.to_string(),
                year.to_string(),
                format!("{score:.1}"),
                votes.to_string(),
                rng.pick(&DIRECTORS).to_string(),
                format!("{budget:.0}"),
            ];
            if rng.below(MISSING_EVERY) == 0 {
                let column = 1 + rng.below(record.len() - 1);
                record[column].clear();
            }

            writer.write_record(&record)?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} movies to {output_path}");
    Ok(())
}
