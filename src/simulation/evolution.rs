//! Spawning policy that turns the hall of fame into new brains.
//!
//! Half of a spawn request is served by cloning hall-of-fame entries in rank
//! order. A crossover stage follows, then random brains fill whatever is left.

use rand::Rng;

use super::hall_of_fame::HallOfFame;

/// Where a spawned creature's brain comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Genesis {
    /// Fresh uniform random weights.
    Random,
    /// A copy of the given weight vector.
    Weights(Vec<f32>),
}

/// Plans `n` spawns from the current hall of fame.
///
/// With an empty hall of fame every spawn is random. Otherwise
/// `max(1, n / 2)` clones come first, cycling through the entries by rank.
/// The crossover stage shares the clone counter and runs while it is below
/// `n / 4`, so after the clone stage it adds nothing; single-point splicing is
/// available through [`crossover`]. Random brains fill the rest.
///
/// Returns exactly `n` entries except when `n == 0` and the hall of fame is
/// non-empty, where the single mandatory clone is still planned.
pub fn plan_spawns<R: Rng + ?Sized>(hall_of_fame: &HallOfFame, n: usize, rng: &mut R) -> Vec<Genesis> {
    let mut plan = Vec::with_capacity(n.max(1));
    let entries = hall_of_fame.entries();
    let mut i = 0;

    if !entries.is_empty() {
        let len = entries.len();
        let weights_len = entries[0].weights.len();

        let clones = (n / 2).max(1);
        while i < clones {
            plan.push(Genesis::Weights(entries[i % len].weights.clone()));
            i += 1;
        }
        if i == n {
            return plan;
        }

        let mut offset = 0;
        while i < n / 4 {
            let split = rng.random_range(0..weights_len);
            let a = &entries[offset % len].weights;
            let b = &entries[(offset + 1) % len].weights;
            plan.push(Genesis::Weights(crossover(a, b, split)));
            offset += 1;
            i += 1;
        }
    }

    while i < n {
        plan.push(Genesis::Random);
        i += 1;
    }
    plan
}

/// Single-point crossover: `a[..split]` followed by `b[split..]`.
///
/// # Panics
///
/// Panics if the parents differ in length or `split` exceeds it.
pub fn crossover(a: &[f32], b: &[f32], split: usize) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "crossover parents must have equal length");
    let mut child = Vec::with_capacity(a.len());
    child.extend_from_slice(&a[..split]);
    child.extend_from_slice(&b[split..]);
    child
}
