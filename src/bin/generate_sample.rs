//! Generate a synthetic calibration recording for manual testing.
//!
//! Layout mirrors a two-sensor rig: one slow auxiliary channel, then per
//! sensor four quaternion components followed by an MMG channel. Repeats
//! are separated by marker rows where every channel reads 10.

use std::f32::consts::PI;

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

    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f32, std_dev: f32) -> f32 {
        let u1 = self.next_f32().max(1e-7);
        let u2 = self.next_f32();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Unit quaternion for a rotation of `angle` radians about `axis`,
/// with per-component sensor jitter.
fn quaternion(angle: f32, axis: [f32; 3], rng: &mut SimpleRng) -> [f32; 4] {
    let half = angle / 2.0;
    let s = half.sin();
    [
        half.cos() + rng.gauss(0.0, 0.005),
        s * axis[0] + rng.gauss(0.0, 0.005),
        s * axis[1] + rng.gauss(0.0, 0.005),
        s * axis[2] + rng.gauss(0.0, 0.005),
    ]
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "sample_recording.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    // One aux channel + two sensors of (4 quaternion + 1 MMG).
    let width = 11;
    let marker: Vec<String> = vec!["10".to_string(); width];

    let repeats = [520usize, 400, 400];
    let mut total_rows = 0;

    for (repeat, &rows) in repeats.iter().enumerate() {
        for t in 0..rows {
            let phase = t as f32 * 0.01 + repeat as f32 * 0.5;

            let aux = 3.3 + 0.05 * (phase * 0.1).sin();
            let qa = quaternion(phase, [0.6, 0.3, 0.74], &mut rng);
            let qb = quaternion(phase * 0.7 + 0.3, [0.0, 0.8, 0.6], &mut rng);
            let mmg_a = rng.gauss(0.5 + 0.1 * phase.sin(), 0.05);
            let mmg_b = rng.gauss(0.4 + 0.1 * (phase * 1.3).cos(), 0.05);

            let mut row = vec![aux];
            row.extend(qa);
            row.push(mmg_a);
            row.extend(qb);
            row.push(mmg_b);

            let record: Vec<String> = row.iter().map(|v| format!("{v:.4}")).collect();
            writer.write_record(&record).expect("Failed to write row");
            total_rows += 1;
        }

        writer.write_record(&marker).expect("Failed to write marker");
        total_rows += 1;
    }

    writer.flush().expect("Failed to flush output");

    println!(
        "Wrote {} rows ({} repeats, {} channels) to {output_path}",
        total_rows,
        repeats.len(),
        width
    );
}
