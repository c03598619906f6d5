//! Brute-force guess count for lowercase strings.

use exhaustive_core::{Result, SearchError};

/// Letters available at each position.
pub const ALPHABET_SIZE: u128 = 26;

/// Number of guesses needed to try every lowercase string of length
/// `1..=length`, i.e. `26 + 26^2 + ... + 26^length`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] if the count overflows `u128`
/// (lengths above 27).
///
/// # Example
///
/// ```
/// use exhaustive_search::num_guesses;
///
/// assert_eq!(num_guesses(0), Ok(0));
/// assert_eq!(num_guesses(2), Ok(26 + 676));
/// ```
pub fn num_guesses(length: u32) -> Result<u128> {
    let overflow = || {
        SearchError::invalid_input(format!("guess count for length {length} overflows u128"))
    };

    let mut total: u128 = 0;
    let mut power: u128 = 1;
    for _ in 0..length {
        power = power.checked_mul(ALPHABET_SIZE).ok_or_else(overflow)?;
        total = total.checked_add(power).ok_or_else(overflow)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_lengths() {
        assert_eq!(num_guesses(0), Ok(0));
        assert_eq!(num_guesses(1), Ok(26));
        assert_eq!(num_guesses(2), Ok(702));
        assert_eq!(num_guesses(3), Ok(18_278));
    }

    #[test]
    fn test_largest_representable_length() {
        assert_eq!(
            num_guesses(27),
            Ok(166_461_473_448_801_533_683_942_072_758_341_510_102)
        );
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(num_guesses(28), Err(SearchError::InvalidInput(_))));
    }
}
