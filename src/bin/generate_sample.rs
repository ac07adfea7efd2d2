use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// A 2D Gaussian ridge in (R, k) space.
struct Ridge {
    r: f64,
    k: f64,
    sigma_r: f64,
    sigma_k: f64,
    amplitude: f64,
}

impl Ridge {
    fn at(&self, r: f64, k: f64) -> f64 {
        let dr = (r - self.r) / self.sigma_r;
        let dk = (k - self.k) / self.sigma_k;
        self.amplitude * (-(dr * dr + dk * dk) / 2.0).exp()
    }
}

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

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // R axis 0 → 6 Å, k axis 2 → 14 Å⁻¹
    let r_axis: Vec<f64> = (0..600).map(|i| i as f64 * 0.01).collect();
    let k_axis: Vec<f64> = (0..480).map(|i| 2.0 + i as f64 * 0.025).collect();

    let ridges = [
        Ridge { r: 1.6, k: 6.0, sigma_r: 0.15, sigma_k: 1.8, amplitude: 1.0 },
        Ridge { r: 2.4, k: 9.0, sigma_r: 0.20, sigma_k: 2.2, amplitude: 0.45 },
        Ridge { r: 3.1, k: 10.5, sigma_r: 0.25, sigma_k: 2.5, amplitude: 0.2 },
    ];

    let output_path = "wavelet_2D_matrix.txt";
    let file = File::create(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    let mut out = BufWriter::new(file);

    writeln!(
        out,
        "# wavelet magnitude matrix; rows follow wavelet_R_axis.txt, columns follow wavelet_k_axis.txt"
    )?;
    for &r in &r_axis {
        let row: Vec<String> = k_axis
            .iter()
            .map(|&k| {
                let signal: f64 = ridges.iter().map(|ridge| ridge.at(r, k)).sum();
                // Magnitudes: noise only adds, never goes negative.
                format!("{:.6e}", signal + 0.01 * rng.next_f64())
            })
            .collect();
        writeln!(out, "{}", row.join(" "))?;
    }
    out.flush()?;

    println!(
        "Wrote {}x{} wavelet magnitudes to {output_path}",
        r_axis.len(),
        k_axis.len()
    );
    Ok(())
}
