use rand::Rng;

/// Distribution of the keys looked up during a search timing run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum KeyGenerator {
    /// Sweeps `1, 2, …, max, 1, 2, …` in order.
    Uniform,
    /// Small keys dominate: 1 about a third of the time, 2 about a quarter,
    /// and keys above `max / 2` about 1% in total.
    Potential,
}

pub const ALL_KEY_GENERATORS: [KeyGenerator; 2] = [KeyGenerator::Uniform, KeyGenerator::Potential];

pub fn key_generator_name(generator: KeyGenerator) -> &'static str {
    match generator {
        KeyGenerator::Uniform => "uniform",
        KeyGenerator::Potential => "potential",
    }
}

pub fn key_generator_from_name(name: &str) -> Option<KeyGenerator> {
    ALL_KEY_GENERATORS
        .iter()
        .copied()
        .find(|&generator| key_generator_name(generator) == name)
}

impl KeyGenerator {
    /// `n_keys` keys in `[1, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero or does not fit in an `i32`.
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R, n_keys: usize, max: usize) -> Vec<i32> {
        assert!(
            max > 0 && max <= i32::MAX as usize,
            "key range [1, {max}] is not representable"
        );
        let max = max as i32;

        match self {
            KeyGenerator::Uniform => (0..n_keys)
                .map(|i| 1 + (i % max as usize) as i32)
                .collect(),
            KeyGenerator::Potential => (0..n_keys)
                .map(|_| {
                    let u = rng.random::<f64>();
                    let max = f64::from(max);
                    (0.5 + max / (1.0 + max * u)) as i32
                })
                .collect(),
        }
    }
}
