use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::RngCore;
use rand_distr::{Distribution, StandardNormal};

/// Deterministic-given-seed stream of random words.
///
/// Every draw made by the encryption and key generation routines goes
/// through a [Source]. Two sources built from the same seed produce the same
/// keys and ciphertexts.
pub struct Source {
    source: ChaCha8Rng,
}

/// Returns a fresh seed taken from the operating system entropy pool.
pub fn new_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// A source seeded from the operating system.
    pub fn from_entropy() -> Source {
        Source::new(new_seed())
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    /// Derives an independent stream, e.g. one per unit of parallel work.
    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Uniform over the whole signed 32-bit range.
    #[inline(always)]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Uniform over {0, 1}.
    #[inline(always)]
    pub fn next_bit(&mut self) -> i32 {
        (self.next_u32() >> 31) as i32
    }

    /// Centered normal sample with standard deviation `sigma`.
    #[inline(always)]
    pub fn next_normal(&mut self, sigma: f64) -> f64 {
        if sigma == 0.0 {
            return 0.0;
        }
        let z: f64 = StandardNormal.sample(self);
        z * sigma
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
