//! Small fallible computations used to show how outcomes compose.

use std::{num::ParseIntError, ops::RangeInclusive};

use log::debug;

use crate::{Diagnostic, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Diagnostic)]
pub enum FactorError {
    #[diagnostic("number is below the minimum")]
    BelowMinimum,

    #[diagnostic("number is prime")]
    IsPrime,
}

/// All divisors of `number` in ascending order. Zero has none.
///
/// Only candidates up to the square root are tried, each hit also yields its
/// partner `number / candidate`.
pub fn factors(number: u64) -> Vec<u64> {
    let mut low = Vec::new();
    let mut high = Vec::new();

    let mut candidate = 1;
    // same as `candidate * candidate <= number` without the overflow
    while candidate <= number / candidate {
        if number % candidate == 0 {
            low.push(candidate);
            if candidate != number / candidate {
                high.push(number / candidate);
            }
        }
        candidate += 1;
    }

    low.extend(high.into_iter().rev());
    low
}

/// Counts the factors of `number`. Numbers below 1 have no meaningful factor
/// count and primes are rejected.
pub fn calculate_factors(number: i64) -> Outcome<usize, FactorError> {
    let number = match u64::try_from(number) {
        Ok(number) if number >= 1 => number,
        _ => return Outcome::failure(FactorError::BelowMinimum),
    };

    let factors = factors(number);
    debug!("calculate_factors - factors of {}: {:?}", number, factors);

    if factors.len() == 2 {
        Outcome::failure(FactorError::IsPrime)
    } else {
        Outcome::success(factors.len())
    }
}

/// Draws a number in `0..=maximum`. The draw itself is done by `pick`, which is
/// not called when `maximum` is negative.
pub fn generate_random_number<P>(maximum: i64, pick: P) -> Outcome<i64, FactorError>
where
    P: FnOnce(RangeInclusive<i64>) -> i64,
{
    if maximum < 0 {
        debug!("generate_random_number - maximum {} is negative", maximum);
        return Outcome::failure(FactorError::BelowMinimum);
    }
    Outcome::success(pick(0..=maximum))
}

pub fn parse_number(input: &str) -> Outcome<i64, ParseIntError> {
    Outcome::from_throwing(|| input.trim().parse())
}
