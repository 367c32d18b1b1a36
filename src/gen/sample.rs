//! Uniform sampling from a character pool.

use rand::Rng;

/// Draw `length` characters uniformly at random, with replacement,
/// from `pool`. The pool must be non-empty; `charset::resolve`
/// guarantees that.
pub fn sample(pool: &[u8], length: usize) -> String {
    let mut rng = rand::rng();

    let bytes: Vec<u8> = (0..length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect();

    // Safety: pool bytes come from the fixed ASCII category sets
    unsafe { String::from_utf8_unchecked(bytes) }
}

#[cfg(test)]
mod tests {
    use super::super::charset::{self, Categories};
    use super::*;

    fn flags(uppercase: bool, lowercase: bool, digits: bool, symbols: bool) -> Categories {
        Categories {
            uppercase,
            lowercase,
            digits,
            symbols,
        }
    }

    #[test]
    fn exact_length_and_membership() {
        let pool = charset::resolve(flags(true, true, true, true));
        for length in [1, 2, 10, 50, 100] {
            let s = sample(&pool, length);
            assert_eq!(s.len(), length);
            assert!(s.bytes().all(|b| pool.contains(&b)));
        }
    }

    #[test]
    fn uppercase_only_stays_uppercase() {
        let pool = charset::resolve(flags(true, false, false, false));
        for _ in 0..20 {
            let s = sample(&pool, 5);
            assert_eq!(s.len(), 5);
            assert!(s.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn all_off_single_char_is_lowercase() {
        let pool = charset::resolve(flags(false, false, false, false));
        let s = sample(&pool, 1);
        assert_eq!(s.len(), 1);
        assert!(s.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn successive_samples_differ() {
        // 62^32 possibilities; a collision is not a realistic flake source
        let pool = charset::resolve(Categories::default());
        assert_ne!(sample(&pool, 32), sample(&pool, 32));
    }
}
