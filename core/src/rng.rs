pub const RNG_MODULUS: i64 = 2_147_483_647;
pub const RNG_MULTIPLIER: i64 = 16_807;

/// Source of uniformly distributed values in `[0, 1)` (or `(0, 1)` for the
/// seeded generator).
pub trait UnitRandom {
    fn next_unit(&mut self) -> f64;
}

impl<F> UnitRandom for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Park-Miller "minimal standard" generator.
///
/// State stays in `1..=RNG_MODULUS - 1`, so every output lies strictly inside
/// `(0, 1)`. The products fit in an `i64` exactly, which keeps the sequence
/// identical to a double-precision implementation of the same recurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    pub fn new(seed: i64) -> Self {
        let mut state = seed % RNG_MODULUS;
        if state <= 0 {
            state += RNG_MODULUS - 1;
        }
        Self { state }
    }

    pub fn state(&self) -> i64 {
        self.state
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * RNG_MULTIPLIER) % RNG_MODULUS;
        self.state as f64 / RNG_MODULUS as f64
    }
}

impl UnitRandom for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.next_f64()
    }
}
