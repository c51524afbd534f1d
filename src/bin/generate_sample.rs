//! Writes a sample `housing_cost.csv` with twenty countries.
//!
//! Usage: `generate_sample [OUTPUT]` (defaults to `housing_cost.csv`).

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Country")]
    country: &'a str,
    #[serde(rename = "Continent")]
    continent: &'a str,
    house2015: f64,
    house2022: f64,
}

/// Country, continent, approximate 2015 burden (% of households).
const COUNTRIES: [(&str, &str, f64); 20] = [
    ("United States", "North America", 14.8),
    ("Canada", "North America", 12.1),
    ("Mexico", "North America", 9.4),
    ("Chile", "South America", 16.2),
    ("Colombia", "South America", 11.7),
    ("Brazil", "South America", 13.0),
    ("United Kingdom", "Europe", 15.3),
    ("Germany", "Europe", 13.9),
    ("France", "Europe", 11.2),
    ("Spain", "Europe", 10.6),
    ("Italy", "Europe", 8.7),
    ("Greece", "Europe", 36.5),
    ("Poland", "Europe", 8.9),
    ("Japan", "Asia", 10.4),
    ("Korea", "Asia", 9.8),
    ("Israel", "Asia", 12.9),
    ("Turkey", "Asia", 7.5),
    ("Australia", "Oceania", 13.5),
    ("New Zealand", "Oceania", 18.1),
    ("South Africa", "Africa", 6.3),
];

/// splitmix64, enough for reproducible jitter.
struct Jitter(u64);

impl Jitter {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[-spread, spread]`.
    fn spread(&mut self, spread: f64) -> f64 {
        (self.next_unit() * 2.0 - 1.0) * spread
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let output = std::env::args().nth(1).unwrap_or_else(|| "housing_cost.csv".to_string());
    let mut jitter = Jitter(20_152_022);

    let mut writer = csv::Writer::from_path(&output).with_context(|| format!("creating {output}"))?;
    for (country, continent, base) in COUNTRIES {
        let house2022 = round1((base + jitter.spread(3.0)).max(0.5));
        writer
            .serialize(Row {
                country,
                continent,
                house2015: base,
                house2022,
            })
            .with_context(|| format!("writing {country}"))?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} countries to {output}", COUNTRIES.len());
    Ok(())
}
