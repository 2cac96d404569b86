use std::f64::consts::TAU;
use std::fs::File;
use std::io::{BufWriter, Write};

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

    /// Uniform in `[-amount, amount)`.
    fn jitter(&mut self, amount: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * amount
    }
}

fn create(path: &str) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("creating {path}"))?;
    Ok(BufWriter::new(file))
}

/// Ten damped waves sampled at 200 x positions.
fn write_series(path: &str, rng: &mut SimpleRng) -> Result<()> {
    let mut out = create(path)?;
    for i in 0..200 {
        let x = i as f64 * 0.05;
        write!(out, "{x:.2}")?;
        for k in 1..=10 {
            let wave = (x * k as f64 * 0.4).sin() * (-0.1 * x).exp();
            let y = wave + rng.jitter(0.02);
            write!(out, " {y:.5}")?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    println!("Wrote 200 records to {path}");
    Ok(())
}

/// Irregular outlines around fixed centres (British National Grid metres).
/// Alternates between one-pair-per-line and bracketed blocks.
fn write_neighbourhoods(path: &str, rng: &mut SimpleRng) -> Result<()> {
    let areas = [
        ("Leith", 327_000.0, 676_200.0),
        ("Old Town", 325_800.0, 673_500.0),
        ("Morningside", 324_500.0, 670_800.0),
        ("Portobello", 330_900.0, 674_000.0),
        ("Stockbridge", 324_700.0, 674_600.0),
    ];

    let mut out = create(path)?;
    writeln!(out, "# Sample natural neighbourhoods")?;
    writeln!(out, "# EPSG:27700")?;

    for (n, &(name, cx, cy)) in areas.iter().enumerate() {
        let vertices = 6 + n * 2;
        let mut pairs = Vec::with_capacity(vertices);
        for v in 0..vertices {
            let angle = TAU * v as f64 / vertices as f64;
            let radius = 600.0 + rng.jitter(150.0);
            let x = cx + radius * angle.cos();
            let y = cy + radius * angle.sin();
            pairs.push(format!("({x:.1}, {y:.1})"));
        }

        writeln!(out)?;
        writeln!(out, "{name}")?;
        if n % 2 == 0 {
            for pair in &pairs {
                writeln!(out, "{pair}")?;
            }
        } else {
            writeln!(out, "[{}]", pairs.join(", "))?;
        }
    }

    // one malformed pair so the skip path shows up in the output
    writeln!(out, "(n/a, {:.1})", areas[4].2)?;
    out.flush()?;
    println!("Wrote {} neighbourhoods to {path}", areas.len());
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    write_series("sample.data", &mut rng)?;
    write_neighbourhoods("sample_neighbourhoods.dat", &mut rng)?;
    Ok(())
}
