use log::{info, warn};
use outcome::numbers::{calculate_factors, generate_random_number, parse_number};
use outcome::{Diagnostic, Outcome};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // No randomness here, the "draw" always lands on the maximum.
    let largest = |range: std::ops::RangeInclusive<i64>| *range.end();

    for maximum in [11, -1] {
        let message = generate_random_number(maximum, largest)
            .map(|number| format!("The random number is: {}.", number))
            .unwrap_or_else(|e| e.describe());
        info!("maximum {} - {}", maximum, message);
    }

    for maximum in [4, 7, 12, -1] {
        match generate_random_number(maximum, largest).flat_map(calculate_factors) {
            Outcome::Success(count) => info!("maximum {} - {} factors", maximum, count),
            Outcome::Failure(e) => warn!("maximum {} - {}", maximum, e.describe()),
        }
    }

    let number = parse_number("42")
        .context("parsing the answer")
        .unwrap()?;
    info!("parsed {}", number);

    Ok(())
}
