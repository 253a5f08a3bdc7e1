use tode_core::RandomSource;

const ZERO_STATE: u64 = 0xA5A5_A5A5_A5A5_A5A5;

/// Deterministic xorshift64* generator.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { ZERO_STATE } else { seed },
        }
    }

    /// Seeded from a fresh v4 uuid, so every page load differs.
    pub fn from_entropy() -> Self {
        let bits = uuid::Uuid::new_v4().as_u128();
        Self::new((bits >> 64) as u64 ^ bits as u64)
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = if x == 0 { ZERO_STATE } else { x };
        let out = x.wrapping_mul(0x2545_F491_4F6C_DD1D);
        // top 53 bits -> [0.0, 1.0)
        ((out >> 11) as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Always yields the same value. Useful for scripting a scenario.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub f64);

impl RandomSource for Fixed {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}
