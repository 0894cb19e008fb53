// ABOUTME: Serial-number source passed explicitly to container constructors.
// ABOUTME: Random draws mirror the legacy numbering; sequential mode keeps tests deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::serial_number::{ClassCode, SerialNumber};

/// Issues container serial numbers.
///
/// One issuer serves the whole process; constructors take it by `&mut` so no
/// hidden global randomness is involved.
pub struct SerialIssuer {
    mode: Mode,
}

enum Mode {
    Random(StdRng),
    Sequential(u16),
}

impl SerialIssuer {
    /// Entropy-seeded issuer. Collisions are possible, as with the legacy
    /// numbering scheme.
    pub fn random() -> Self {
        Self {
            mode: Mode::Random(StdRng::from_entropy()),
        }
    }

    /// RNG-backed issuer with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            mode: Mode::Random(StdRng::seed_from_u64(seed)),
        }
    }

    /// Counter-based issuer starting at `0001`. Never collides within one
    /// issuer until the four-digit range wraps.
    pub fn sequential() -> Self {
        Self {
            mode: Mode::Sequential(0),
        }
    }

    /// Draw the next serial number for the given cargo class.
    pub fn issue(&mut self, code: ClassCode) -> SerialNumber {
        let number = match &mut self.mode {
            Mode::Random(rng) => rng.gen_range(0..10_000),
            Mode::Sequential(previous) => {
                *previous = (*previous + 1) % 10_000;
                *previous
            }
        };
        SerialNumber::new(code, number)
    }
}
