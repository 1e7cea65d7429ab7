//! Divisor engine — proper-divisor enumeration on signed integers.
//!
//! `proper_divisors(n)` is total: inputs `<= 1` (including zero and every
//! negative number) have no proper divisors and yield an empty vector rather
//! than an error. For `n > 1` the result holds every `d` with `n % d == 0`
//! and `d < n`, strictly ascending.
//!
//! The reference scan visits `1..=n/2`. [`proper_divisors_paired`] reaches
//! the same output in O(√n) and must stay identical to it, order included.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Largest input the bounded entry points accept.
pub const MAX_INPUT: i64 = 250_000_000;

/// Divisibility test used by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisorMode {
    /// `n % i == 0`. The proper-divisor contract.
    #[default]
    Exact,
    /// Compatibility mode: the degenerate always-true test, yielding every
    /// integer in `1..=n/2`. Not a divisor enumeration.
    Midpoint,
}

/// Error returned by [`proper_divisors_bounded`] and by the
/// [`DivisorMode::Midpoint`] scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivisorError {
    InputTooLarge { input: i64, max: i64 },
}

impl fmt::Display for DivisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputTooLarge { input, max } => {
                write!(f, "input {} exceeds maximum {}", input, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DivisorError {}

/// Enumerate the proper divisors of `n` in ascending order.
pub fn proper_divisors(n: i64) -> Vec<i64> {
    if n <= 1 {
        return Vec::new();
    }
    (1..=n / 2).filter(|i| n % i == 0).collect()
}

/// Linear scan of `1..=n/2` under the given divisibility test.
///
/// `Exact` never fails. `Midpoint` materialises all `n/2` integers, so it
/// rejects inputs above [`MAX_INPUT`].
pub fn proper_divisors_with(n: i64, mode: DivisorMode) -> Result<Vec<i64>, DivisorError> {
    match mode {
        DivisorMode::Exact => Ok(proper_divisors(n)),
        DivisorMode::Midpoint if n > MAX_INPUT => {
            Err(DivisorError::InputTooLarge { input: n, max: MAX_INPUT })
        }
        DivisorMode::Midpoint if n <= 1 => Ok(Vec::new()),
        DivisorMode::Midpoint => Ok((1..=n / 2).collect()),
    }
}

/// Same output as [`proper_divisors`], found by walking `1..=√n` and
/// mirroring each divisor `i` to its cofactor `n / i`.
pub fn proper_divisors_paired(n: i64) -> Vec<i64> {
    if n <= 1 {
        return Vec::new();
    }

    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i: i64 = 1;
    // `i <= n / i` is `i * i <= n` without the overflow.
    while i <= n / i {
        if n % i == 0 {
            low.push(i);
            let cofactor = n / i;
            if cofactor != i && cofactor != n {
                high.push(cofactor);
            }
        }
        i += 1;
    }

    low.extend(high.into_iter().rev());
    low
}

/// [`proper_divisors_paired`] with an upper bound on the input.
pub fn proper_divisors_bounded(n: i64) -> Result<Vec<i64>, DivisorError> {
    if n > MAX_INPUT {
        return Err(DivisorError::InputTooLarge { input: n, max: MAX_INPUT });
    }
    Ok(proper_divisors_paired(n))
}

/// True when `d` is a proper divisor of `n`.
pub fn is_proper_divisor(n: i64, d: i64) -> bool {
    n > 1 && d >= 1 && d < n && n % d == 0
}

/// Sum of the proper divisors of `n` (0 for `n <= 1`).
pub fn aliquot_sum(n: i64) -> i128 {
    proper_divisors_paired(n).into_iter().map(i128::from).sum()
}

/// Classification of a positive integer by its aliquot sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Abundance {
    Deficient,
    Perfect,
    Abundant,
}

/// Classify `n`; `None` for `n < 1`.
pub fn classify(n: i64) -> Option<Abundance> {
    if n < 1 {
        return None;
    }
    let sum = aliquot_sum(n);
    let n = i128::from(n);
    Some(match sum.cmp(&n) {
        core::cmp::Ordering::Less => Abundance::Deficient,
        core::cmp::Ordering::Equal => Abundance::Perfect,
        core::cmp::Ordering::Greater => Abundance::Abundant,
    })
}
