//! Character pool building from category selections.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Which character categories feed the pool. All combinations are
/// valid, including all-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categories {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
        }
    }
}

/// Build the character pool from the enabled categories, concatenated
/// in fixed order: uppercase, lowercase, digits, symbols.
///
/// An all-off selection falls back to the lowercase set so the pool is
/// never empty.
pub fn resolve(categories: Categories) -> Vec<u8> {
    let mut pool: Vec<u8> = Vec::new();

    if categories.uppercase {
        pool.extend_from_slice(UPPERCASE.as_bytes());
    }
    if categories.lowercase {
        pool.extend_from_slice(LOWERCASE.as_bytes());
    }
    if categories.digits {
        pool.extend_from_slice(DIGITS.as_bytes());
    }
    if categories.symbols {
        pool.extend_from_slice(SYMBOLS.as_bytes());
    }

    if pool.is_empty() {
        pool.extend_from_slice(LOWERCASE.as_bytes());
    }

    pool
}

#[cfg(test)]
mod tests {
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
    fn concatenates_in_fixed_order() {
        let pool = resolve(flags(true, true, true, true));
        let expected = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();
        assert_eq!(pool, expected.into_bytes());
    }

    #[test]
    fn all_off_falls_back_to_lowercase() {
        assert_eq!(resolve(flags(false, false, false, false)), LOWERCASE.as_bytes());
    }

    #[test]
    fn single_category_pools() {
        assert_eq!(resolve(flags(true, false, false, false)), UPPERCASE.as_bytes());
        assert_eq!(resolve(flags(false, true, false, false)), LOWERCASE.as_bytes());
        assert_eq!(resolve(flags(false, false, true, false)), DIGITS.as_bytes());
        assert_eq!(resolve(flags(false, false, false, true)), SYMBOLS.as_bytes());
    }

    #[test]
    fn defaults_match_initial_selection() {
        let c = Categories::default();
        assert!(c.uppercase && c.lowercase && c.digits);
        assert!(!c.symbols);
    }
}
