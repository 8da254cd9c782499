//! The prime numbers, in order.
//!
//! [`Tuple::hash_code()`] multiplies its accumulator by successive primes.
//! Any ascending prime source can be handed to [`Tuple::hash_code_with()`]
//! instead; [`Primes`] is the one used by default.
//!
//! [`Tuple::hash_code()`]: crate::Tuple::hash_code
//! [`Tuple::hash_code_with()`]: crate::Tuple::hash_code_with

use core::iter::FusedIterator;

/// An infinite iterator over the prime numbers: 2, 3, 5, 7, 11, ...
///
/// Every prime is produced on demand by trial division against the primes
/// found so far.
///
/// ```
/// use tuple_zip::Primes;
///
/// let first: Vec<u64> = Primes::new().take(6).collect();
/// assert_eq!(first, [2, 3, 5, 7, 11, 13]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Primes {
    found: Vec<u64>,
}

impl Primes {
    /// Creates an iterator starting at 2.
    pub fn new() -> Self {
        Self { found: Vec::new() }
    }

    fn is_prime(&self, candidate: u64) -> bool {
        self.found
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0)
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self.found.last() {
            None => 2,
            Some(2) => 3,
            Some(&last) => {
                // Only odd numbers past 2.
                let mut candidate = last + 2;
                while !self.is_prime(candidate) {
                    candidate += 2;
                }
                candidate
            }
        };
        self.found.push(next);
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Primes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_primes() {
        let primes: Vec<_> = Primes::new().take(15).collect();
        assert_eq!(
            primes,
            [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn no_gaps_below_one_thousand() {
        let naive: Vec<u64> = (2..1000u64)
            .filter(|&n| (2..n).all(|d| n % d != 0))
            .collect();
        let primes: Vec<u64> = Primes::new().take_while(|&p| p < 1000).collect();
        assert_eq!(primes, naive);
    }

    #[test]
    fn deterministic() {
        let a: Vec<_> = Primes::new().take(100).collect();
        let b: Vec<_> = Primes::new().take(100).collect();
        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn clones_resume_independently() {
        let mut a = Primes::new();
        a.nth(3);
        let mut b = a.clone();
        assert_eq!(a.next(), Some(11));
        assert_eq!(b.next(), Some(11));
        assert_eq!(a.next(), Some(13));
    }
}
