use serde::Serialize;

#[derive(Serialize)]
struct SampleRow<'a> {
    location: &'a str,
    time: i32,
    fertility_rate: f64,
    life_expectancy: f64,
    pop_mlns: f64,
}

/// Starting point and yearly drift for one synthetic country.
struct CountryProfile {
    name: &'static str,
    fertility_1960: f64,
    fertility_floor: f64,
    life_1960: f64,
    life_ceiling: f64,
    pop_1960: f64,
    pop_growth: f64,
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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Exponential approach from `start` towards `target`.
fn approach(start: f64, target: f64, rate: f64, years: f64) -> f64 {
    target + (start - target) * (-rate * years).exp()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let countries = [
        CountryProfile { name: "Afghanistan", fertility_1960: 7.45, fertility_floor: 4.5, life_1960: 32.3, life_ceiling: 64.0, pop_1960: 8.99, pop_growth: 0.026 },
        CountryProfile { name: "Brazil", fertility_1960: 6.06, fertility_floor: 1.7, life_1960: 54.2, life_ceiling: 76.0, pop_1960: 72.2, pop_growth: 0.021 },
        CountryProfile { name: "China", fertility_1960: 5.75, fertility_floor: 1.6, life_1960: 43.7, life_ceiling: 77.0, pop_1960: 667.1, pop_growth: 0.014 },
        CountryProfile { name: "Germany", fertility_1960: 2.37, fertility_floor: 1.4, life_1960: 69.3, life_ceiling: 81.5, pop_1960: 72.8, pop_growth: 0.002 },
        CountryProfile { name: "India", fertility_1960: 5.87, fertility_floor: 2.2, life_1960: 41.4, life_ceiling: 70.0, pop_1960: 449.7, pop_growth: 0.019 },
        CountryProfile { name: "Japan", fertility_1960: 2.00, fertility_floor: 1.3, life_1960: 67.7, life_ceiling: 84.5, pop_1960: 92.5, pop_growth: 0.006 },
        CountryProfile { name: "Nigeria", fertility_1960: 6.35, fertility_floor: 5.2, life_1960: 37.0, life_ceiling: 55.0, pop_1960: 45.1, pop_growth: 0.026 },
        CountryProfile { name: "Peru", fertility_1960: 6.94, fertility_floor: 2.3, life_1960: 47.7, life_ceiling: 76.0, pop_1960: 10.1, pop_growth: 0.021 },
        CountryProfile { name: "Sweden", fertility_1960: 2.17, fertility_floor: 1.8, life_1960: 73.0, life_ceiling: 82.5, pop_1960: 7.48, pop_growth: 0.004 },
        CountryProfile { name: "United States", fertility_1960: 3.65, fertility_floor: 1.8, life_1960: 69.8, life_ceiling: 79.0, pop_1960: 180.7, pop_growth: 0.010 },
    ];

    let output_path = "dataEveryYear.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut rows = 0;
    for year in 1960..=2016 {
        let elapsed = (year - 1960) as f64;
        for c in &countries {
            let fertility = approach(c.fertility_1960, c.fertility_floor, 0.05, elapsed)
                + rng.gauss(0.0, 0.05);
            let life = approach(c.life_1960, c.life_ceiling, 0.04, elapsed) + rng.gauss(0.0, 0.3);
            let pop = c.pop_1960 * (c.pop_growth * elapsed).exp();

            writer
                .serialize(SampleRow {
                    location: c.name,
                    time: year,
                    fertility_rate: round_to(fertility.max(0.8), 2),
                    life_expectancy: round_to(life, 2),
                    pop_mlns: round_to(pop, 2),
                })
                .expect("Failed to write row");
            rows += 1;
        }
    }
    writer.flush().expect("Failed to flush output");

    println!(
        "Wrote {rows} rows ({} countries, 1960-2016) to {output_path}",
        countries.len()
    );
}
