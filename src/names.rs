//! Random cat names
//!
//! A name is one prefix and one suffix, each picked uniformly and
//! independently. The picks go through `RandomSource` so a run can be seeded
//! and tests can script the exact choices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices
pub trait RandomSource {
    /// Uniform index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local OS-seeded generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible generator for `--seed`
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

pub struct NameGenerator<R> {
    prefixes: &'static [&'static str],
    suffixes: &'static [&'static str],
    rng: R,
}

impl<R: RandomSource> NameGenerator<R> {
    /// Panics if either list is empty; both are constants in practice
    pub fn new(prefixes: &'static [&'static str], suffixes: &'static [&'static str], rng: R) -> Self {
        assert!(!prefixes.is_empty(), "name prefixes must not be empty");
        assert!(!suffixes.is_empty(), "name suffixes must not be empty");
        Self { prefixes, suffixes, rng }
    }

    /// Pick a fresh "<prefix> <suffix>" name
    pub fn generate(&mut self) -> String {
        let prefix = self.prefixes[self.rng.pick(self.prefixes.len())];
        let suffix = self.suffixes[self.rng.pick(self.suffixes.len())];
        format!("{} {}", prefix, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const PREFIXES: &[&str] = &["Sir", "Lady"];
    const SUFFIXES: &[&str] = &["Whiskers", "Paws"];

    /// Replays a fixed list of indices
    struct Scripted(std::vec::IntoIter<usize>);

    impl Scripted {
        fn new(picks: Vec<usize>) -> Self {
            Self(picks.into_iter())
        }
    }

    impl RandomSource for Scripted {
        fn pick(&mut self, len: usize) -> usize {
            let i = self.0.next().expect("script exhausted");
            assert!(i < len);
            i
        }
    }

    #[test]
    fn test_scripted_picks_are_exact() {
        let mut generator = NameGenerator::new(PREFIXES, SUFFIXES, Scripted::new(vec![1, 0, 0, 1]));
        assert_eq!(generator.generate(), "Lady Whiskers");
        assert_eq!(generator.generate(), "Sir Paws");
    }

    #[test]
    fn test_names_are_one_of_four() {
        let allowed = ["Sir Whiskers", "Sir Paws", "Lady Whiskers", "Lady Paws"];
        let mut generator = NameGenerator::new(PREFIXES, SUFFIXES, SeededRandom::new(7));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let name = generator.generate();
            assert!(allowed.contains(&name.as_str()), "unexpected name {}", name);
            seen.insert(name);
        }
        // Every combination is reachable
        assert_eq!(seen.len(), PREFIXES.len() * SUFFIXES.len());
    }

    #[test]
    fn test_thread_random_shape() {
        let mut generator = NameGenerator::new(
            crate::content::NAME_PREFIXES,
            crate::content::NAME_SUFFIXES,
            ThreadRandom,
        );
        for _ in 0..100 {
            let name = generator.generate();
            let (prefix, suffix) = name.split_once(' ').unwrap();
            assert!(crate::content::NAME_PREFIXES.contains(&prefix));
            assert!(crate::content::NAME_SUFFIXES.contains(&suffix));
        }
    }

    #[test]
    fn test_distribution_is_uniform_and_independent() {
        let prefixes = crate::content::NAME_PREFIXES;
        let suffixes = crate::content::NAME_SUFFIXES;
        let mut generator = NameGenerator::new(prefixes, suffixes, SeededRandom::new(42));

        let draws = 100_000;
        let mut prefix_counts: HashMap<&str, usize> = HashMap::new();
        let mut suffix_counts: HashMap<&str, usize> = HashMap::new();
        let mut pair_counts: HashMap<(String, String), usize> = HashMap::new();

        for _ in 0..draws {
            let name = generator.generate();
            let (p, s) = name.split_once(' ').unwrap();
            let p = *prefixes.iter().find(|x| **x == p).unwrap();
            let s = *suffixes.iter().find(|x| **x == s).unwrap();
            *prefix_counts.entry(p).or_default() += 1;
            *suffix_counts.entry(s).or_default() += 1;
            *pair_counts.entry((p.to_string(), s.to_string())).or_default() += 1;
        }

        let within = |count: usize, expected: f64| {
            let freq = count as f64 / draws as f64;
            (freq - expected).abs() < expected * 0.15
        };

        for p in prefixes {
            assert!(within(prefix_counts[p], 1.0 / prefixes.len() as f64), "prefix {} skewed", p);
        }
        for s in suffixes {
            assert!(within(suffix_counts[s], 1.0 / suffixes.len() as f64), "suffix {} skewed", s);
        }

        // Joint frequency of each pair is the product of the marginals
        let pair_expected = 1.0 / (prefixes.len() * suffixes.len()) as f64;
        assert_eq!(pair_counts.len(), prefixes.len() * suffixes.len());
        for (pair, count) in &pair_counts {
            assert!(within(*count, pair_expected), "pair {:?} skewed", pair);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = NameGenerator::new(PREFIXES, SUFFIXES, SeededRandom::new(99));
        let mut b = NameGenerator::new(PREFIXES, SUFFIXES, SeededRandom::new(99));
        for _ in 0..50 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_boxed_source() {
        let rng: Box<dyn RandomSource> = Box::new(Scripted::new(vec![0, 1]));
        let mut generator = NameGenerator::new(PREFIXES, SUFFIXES, rng);
        assert_eq!(generator.generate(), "Sir Paws");
    }
}
