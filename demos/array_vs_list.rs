//! Times summation over `Vec`, a boxed slice and `GrowableArray`.
//!
//! Usage: `cargo run --release --example array_vs_list [config.json]`
//!
//! The optional JSON file configures the growable array, for example
//! `{"capacity": 1, "growth_factor": 0.25}`.

use anyhow::{Context, Result};
use growarray::{GrowableArray, GrowthConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::time::Instant;

const REPEATS: usize = 50;
const SIZE: usize = 1_000_000;
const SEED: u64 = 12345;

fn load_config() -> Result<GrowthConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(GrowthConfig::default());
    };
    let text = fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {path}"))
}

fn report(label: &str, start: Instant, chk: i64) {
    println!("{label:<22}: {}ms ({chk})", start.elapsed().as_millis());
}

fn main() -> Result<()> {
    let config = load_config()?;

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut list: Vec<i32> = Vec::with_capacity(SIZE);
    for _ in 0..SIZE {
        list.push(rng.gen_range(0..5000));
    }
    let arr: Box<[i32]> = list.clone().into_boxed_slice();

    let mut darr = GrowableArray::from_config(&config);
    for &v in &list {
        darr.push(v);
    }
    println!(
        "GrowableArray: len {} capacity {} growth factor {}",
        darr.len(),
        darr.capacity(),
        darr.growth_factor()
    );

    let mut hits: u64 = 0;

    let mut chk = 0i64;
    let start = Instant::now();
    for _ in 0..REPEATS {
        for i in 0..list.len() {
            chk += i64::from(list[i]);
            hits += 1;
        }
    }
    report("Vec/for", start, chk);

    let mut chk = 0i64;
    let start = Instant::now();
    for _ in 0..REPEATS {
        for i in 0..arr.len() {
            chk += i64::from(arr[i]);
            hits += 1;
        }
    }
    report("Array/for", start, chk);

    let mut chk = 0i64;
    let start = Instant::now();
    let compacted = darr.compact();
    for _ in 0..REPEATS {
        for i in 0..compacted.len() {
            chk += i64::from(compacted[i]);
            hits += 1;
        }
    }
    report("GrowableArray/for", start, chk);

    println!();

    let mut chk = 0i64;
    let start = Instant::now();
    for _ in 0..REPEATS {
        for &v in &list {
            chk += i64::from(v);
        }
    }
    report("Vec/foreach", start, chk);

    let mut chk = 0i64;
    let start = Instant::now();
    for _ in 0..REPEATS {
        for &v in arr.iter() {
            chk += i64::from(v);
        }
    }
    report("Array/foreach", start, chk);

    let mut chk = 0i64;
    let start = Instant::now();
    for _ in 0..REPEATS {
        for &v in &darr {
            chk += i64::from(v);
        }
    }
    report("GrowableArray/foreach", start, chk);

    println!();
    println!("Total number of hits: {hits}");
    Ok(())
}
