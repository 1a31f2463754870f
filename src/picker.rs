//! Uniform random selection from the current filtered set.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Picks one of `items` uniformly at random, or `None` if there are none.
///
/// ```rust
/// use question_browser::picker::pick_random;
///
/// let mut rng = rand::thread_rng();
/// let empty: [u32; 0] = [];
/// assert!(pick_random(&empty, &mut rng).is_none());
///
/// let items = [7, 8, 9];
/// let picked = pick_random(&items, &mut rng).unwrap();
/// assert!(items.contains(picked));
/// ```
pub fn pick_random<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// A random picker that owns its source of randomness.
///
/// The default picker is seeded from the operating system. Use
/// [`Picker::with_seed`] for a reproducible sequence.
#[derive(Debug, Clone)]
pub struct Picker {
    rng: StdRng,
}

impl Default for Picker {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Picker {
    /// Creates a picker seeded from the operating system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a picker with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks one of `items` uniformly, or `None` if there are none.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        pick_random(items, &mut self.rng)
    }
}
