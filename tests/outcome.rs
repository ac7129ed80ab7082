use std::cell::Cell;

use outcome::numbers::{calculate_factors, generate_random_number, FactorError};
use outcome::{Diagnostic, Outcome};
use tools::{CallCounter, ProbeError, ReportError};


type Probe = Outcome<i32, ProbeError>;

#[test]
fn test_map() {
    let counter = CallCounter::new();

    assert_eq!(
        Probe::success(20).map(counter.counting(|v: i32| v + 1)),
        Outcome::success(21)
    );
    assert_eq!(counter.calls(), 1);

    assert_eq!(
        Probe::failure(ProbeError::Timeout).map(counter.counting(|v: i32| v + 1)),
        Outcome::failure(ProbeError::Timeout)
    );
    assert_eq!(counter.calls(), 1, "map must not run on failure");
}

#[test]
fn test_map_changes_success_type() {
    let described = Probe::success(3).map(|v| format!("The random number is: {}.", v));

    assert_eq!(
        described,
        Outcome::success("The random number is: 3.".to_string())
    );
}

#[test]
fn test_flat_map() {
    let counter = CallCounter::new();

    let halve = |v: i32| -> Probe {
        if v % 2 == 0 {
            Outcome::success(v / 2)
        } else {
            Outcome::failure(ProbeError::Rejected(format!("{} is odd", v)))
        }
    };

    assert_eq!(
        Probe::success(8).flat_map(counter.counting(halve)),
        halve(8)
    );
    assert_eq!(
        Probe::success(7).flat_map(counter.counting(halve)),
        Outcome::failure(ProbeError::Rejected("7 is odd".into()))
    );
    assert_eq!(counter.calls(), 2);

    assert_eq!(
        Probe::failure(ProbeError::Timeout).flat_map(counter.counting(halve)),
        Outcome::failure(ProbeError::Timeout)
    );
    assert_eq!(counter.calls(), 2, "flat_map must not run on failure");
}

#[test]
fn test_flat_map_does_not_nest() {
    let inner: Outcome<Outcome<i32, ProbeError>, ProbeError> =
        Probe::success(1).map(|v| Outcome::success(v + 1));
    let flat: Probe = Probe::success(1).flat_map(|v| Outcome::success(v + 1));

    assert_eq!(inner, Outcome::success(Outcome::success(2)));
    assert_eq!(flat, Outcome::success(2));
}

#[test]
fn test_map_error() {
    let counter = CallCounter::new();

    assert_eq!(
        Probe::failure(ProbeError::Timeout).map_error(counter.counting(ReportError::Probe)),
        Outcome::failure(ReportError::Probe(ProbeError::Timeout))
    );
    assert_eq!(counter.calls(), 1);

    assert_eq!(
        Probe::success(5).map_error(counter.counting(ReportError::Probe)),
        Outcome::success(5)
    );
    assert_eq!(counter.calls(), 1, "map_error must not run on success");
}

#[test]
fn test_flat_map_error() {
    let counter = CallCounter::new();

    let retry = |e: ProbeError| -> Outcome<i32, ReportError> {
        match e {
            ProbeError::Timeout => Outcome::success(0),
            other => Outcome::failure(ReportError::Probe(other)),
        }
    };

    assert_eq!(
        Probe::failure(ProbeError::Timeout).flat_map_error(counter.counting(retry)),
        Outcome::success(0)
    );
    assert_eq!(
        Probe::failure(ProbeError::Rejected("no".into())).flat_map_error(counter.counting(retry)),
        Outcome::failure(ReportError::Probe(ProbeError::Rejected("no".into())))
    );
    assert_eq!(counter.calls(), 2);

    assert_eq!(
        Probe::success(9).flat_map_error(counter.counting(retry)),
        Outcome::success(9)
    );
    assert_eq!(counter.calls(), 2, "flat_map_error must not run on success");
}

#[test]
fn test_from_throwing() {
    let calls = Cell::new(0);

    let ok: Probe = Outcome::from_throwing(|| {
        calls.set(calls.get() + 1);
        Ok(4)
    });
    assert_eq!(ok, Outcome::success(4));
    assert_eq!(calls.get(), 1);

    let failed: Probe = Outcome::from_throwing(|| Err(ProbeError::Timeout));
    assert_eq!(failed, Outcome::failure(ProbeError::Timeout));
}

#[test]
fn test_from_throwing_captures_question_mark() {
    fn both(a: &str, b: &str) -> Result<i64, std::num::ParseIntError> {
        Ok(a.parse::<i64>()? + b.parse::<i64>()?)
    }

    assert_eq!(Outcome::from_throwing(|| both("1", "2")), Outcome::success(3));
    assert!(Outcome::from_throwing(|| both("1", "two")).is_failure());
}

#[test]
fn test_unwrap() -> anyhow::Result<()> {
    assert_eq!(Probe::success(6).unwrap(), Ok(6));
    assert_eq!(
        Probe::failure(ProbeError::Timeout).unwrap(),
        Err(ProbeError::Timeout)
    );

    fn reraise() -> Result<i32, ProbeError> {
        let value = Probe::failure(ProbeError::Rejected("busy".into())).unwrap()?;
        Ok(value + 1)
    }
    assert_eq!(reraise(), Err(ProbeError::Rejected("busy".into())));

    let value = Probe::success(6).unwrap()?;
    assert_eq!(value, 6);
    Ok(())
}

#[test]
fn test_unwrap_inverts_from_throwing() {
    for outcome in [Probe::success(1), Probe::failure(ProbeError::Timeout)] {
        let again = Outcome::from_throwing(|| outcome.clone().unwrap());
        assert_eq!(again, outcome);
    }
}

#[test]
fn test_factor_scenarios() {
    assert_eq!(calculate_factors(4), Outcome::success(3));
    assert_eq!(calculate_factors(7), Outcome::failure(FactorError::IsPrime));
}

#[test]
fn test_below_minimum_short_circuits() {
    let counter = CallCounter::new();

    let result = generate_random_number(-1, |range| *range.start())
        .flat_map(counter.counting(calculate_factors));

    assert_eq!(result, Outcome::failure(FactorError::BelowMinimum));
    assert_eq!(counter.calls(), 0);
}

#[test]
fn test_generated_number_flows_into_factors() {
    let counter = CallCounter::new();

    let result = generate_random_number(10, |_| 6).flat_map(counter.counting(calculate_factors));

    assert_eq!(result, Outcome::success(4));
    assert_eq!(counter.calls(), 1);
}

#[test]
fn test_derived_diagnostic() {
    assert_eq!(ProbeError::Timeout.describe(), "probe timed out");
    assert_eq!(
        ProbeError::Rejected("busy".into()).describe(),
        "probe rejected: busy"
    );
    assert_eq!(
        ReportError::Probe(ProbeError::Timeout).to_string(),
        "report failed: probe timed out"
    );
}

#[test]
fn test_context_reaches_anyhow() {
    let result: anyhow::Result<i32> = Probe::failure(ProbeError::Timeout)
        .with_context(|| "probing port 8080")
        .unwrap();

    let error = result.expect_err("failure expected");
    assert_eq!(format!("{:#}", error), "probing port 8080: probe timed out");
}

#[test]
fn test_serde_shape() -> anyhow::Result<()> {
    let ok: Outcome<i32, String> = Outcome::success(3);
    let failed: Outcome<i32, String> = Outcome::failure("is prime".into());

    assert_eq!(serde_json::to_string(&ok)?, r#"{"Success":3}"#);
    assert_eq!(serde_json::to_string(&failed)?, r#"{"Failure":"is prime"}"#);

    let parsed: Outcome<i32, String> = serde_json::from_str(r#"{"Failure":"is prime"}"#)?;
    assert_eq!(parsed, failed);
    Ok(())
}
