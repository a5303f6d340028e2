//! Pure half of the toss: shuffle, link into a cycle, check the result.
//!
//! Linking a uniformly shuffled sequence head-to-tail gives every
//! participant exactly one recipient and one giver, with no self-links for
//! three or more participants, so no retry loop is needed.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::Rng;

/// Smallest group a toss accepts. With two people the cycle collapses into
/// a swap, which is excluded.
pub const MIN_PARTICIPANTS: usize = 3;

/// A uniformly random ordering of `items` drawn from `rng`.
pub fn shuffled<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut order = items.to_vec();
    order.shuffle(rng);
    order
}

/// Links `order` into a cycle: each element gifts the next one and the last
/// gifts the first. Pairs come back in `order`.
pub fn cycle_of<T: Copy>(order: &[T]) -> Vec<(T, T)> {
    let n = order.len();
    (0..n).map(|i| (order[i], order[(i + 1) % n])).collect()
}

/// True when `pairs` form exactly one cycle through every giver: each giver
/// appears once, no one gifts themselves, and following recipients from any
/// giver visits all of them before coming back.
pub fn verify_single_cycle<T: Copy + Eq + Hash>(pairs: &[(T, T)]) -> bool {
    let n = pairs.len();
    if n == 0 {
        return false;
    }

    let next: HashMap<T, T> = pairs.iter().copied().collect();
    if next.len() != n || pairs.iter().any(|(giver, recipient)| giver == recipient) {
        return false;
    }

    let start = pairs[0].0;
    let mut seen = HashSet::with_capacity(n);
    let mut current = start;
    for _ in 0..n {
        if !seen.insert(current) {
            return false;
        }
        current = match next.get(&current) {
            Some(recipient) => *recipient,
            None => return false,
        };
    }
    current == start && seen.len() == n
}
