use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, Write};
use std::path::Path;

use rand::prelude::*;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

const CITIES: [(&str, f64); 6] = [
    ("Amman", 0.45),
    ("Irbid", 0.18),
    ("Zarqa", 0.14),
    ("Aqaba", 0.09),
    ("Salt", 0.07),
    ("Madaba", 0.07),
];

const CATEGORIES: [(&str, f64, f64, f64); 6] = [
    ("Fashion", 0.30, 20.0, 180.0),
    ("Electronics", 0.20, 150.0, 900.0),
    ("Home & Kitchen", 0.15, 30.0, 300.0),
    ("Beauty", 0.14, 10.0, 90.0),
    ("Books", 0.11, 5.0, 60.0),
    ("Sports", 0.10, 25.0, 250.0),
];

const PAYMENT_METHODS: [(&str, f64); 3] = [
    ("Credit Card", 0.45),
    ("Cash on Delivery", 0.35),
    ("Digital Wallet", 0.20),
];

const MISSING_CITY_PROBABILITY: f64 = 0.01;

struct GeneratorConfig {
    num_records: usize,
    year: i32,
    seed: u64,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_records = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1_000);
        let seed = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2024);

        Self {
            num_records,
            year: 2024,
            seed,
            output_path: "samples/generated.csv".to_string(),
        }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!("Generating {} orders into {} (seed {})...", config.num_records, config.output_path, config.seed);

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(&config.output_path)?;
    let mut writer = io::BufWriter::new(file);
    let mut rng = StdRng::seed_from_u64(config.seed);

    writeln!(writer, "order_id,city,product_category,total_amount,payment_method,order_date")?;

    for order in 1..=config.num_records {
        //NOTE: Orders spread over August to October with volume rising each month
        let month = pick_month(&mut rng);
        let day = rng.random_range(1..=days_in(month));
        let city = if rng.random::<f64>() < MISSING_CITY_PROBABILITY { "" } else { pick(&mut rng, &CITIES) };
        let (category, low, high) = pick_category(&mut rng);
        let amount = generate_amount(&mut rng, low, high);
        let payment = pick(&mut rng, &PAYMENT_METHODS);

        writeln!(writer, "ORD-{order:06},{city},{category},{amount},{payment},{}-{month:02}-{day:02}", config.year)?;
    }

    writer.flush()?;

    println!("Generation complete.");

    Ok(())
}

fn pick(rng: &mut StdRng, weighted: &[(&'static str, f64)]) -> &'static str {
    let roll: f64 = rng.random();
    let mut cumulative = 0.0;

    for &(value, weight) in weighted {
        cumulative += weight;
        if roll < cumulative {
            return value;
        }
    }

    weighted[weighted.len() - 1].0
}

fn pick_category(rng: &mut StdRng) -> (&'static str, f64, f64) {
    let roll: f64 = rng.random();
    let mut cumulative = 0.0;

    for (category, weight, low, high) in CATEGORIES {
        cumulative += weight;
        if roll < cumulative {
            return (category, low, high);
        }
    }

    let (category, _, low, high) = CATEGORIES[CATEGORIES.len() - 1];
    (category, low, high)
}

fn pick_month(rng: &mut StdRng) -> u32 {
    match rng.random_range(0..100) {
        0..30 => 8,
        30..64 => 9,
        _ => 10,
    }
}

fn days_in(month: u32) -> u32 {
    match month {
        9 => 30,
        _ => 31,
    }
}

fn generate_amount(rng: &mut StdRng, low: f64, high: f64) -> Decimal {
    Decimal::from_f64(rng.random_range(low..high))
        .map(|amount| amount.round_dp(2))
        .unwrap_or(Decimal::ZERO)
}
