//! Randomised checks of the validation and reset contracts
//!
//! Each test draws from a seeded ChaCha generator so failures reproduce.

use capeparam_rs::parameters::{messages, ParamValue, Parameter};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const CASES: usize = 500;

#[test]
fn test_integer_validation_matches_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..CASES {
        let lower = rng.gen_range(-1_000i64..1_000);
        let upper = lower + rng.gen_range(0i64..1_000);
        let value = rng.gen_range(lower - 500..upper + 500);

        let mut count = Parameter::integer("Count", lower, lower, upper);
        count.set_value(ParamValue::Int(value)).unwrap();
        let outcome = count.validate();

        assert_eq!(
            outcome.is_valid(),
            lower <= value && value <= upper,
            "{value} in [{lower}, {upper}]"
        );
        if value < lower {
            assert_eq!(outcome.message(), messages::BELOW_LOWER_BOUND);
            assert!(outcome.message().contains("Lower Bound"));
        } else if value > upper {
            assert_eq!(outcome.message(), messages::ABOVE_UPPER_BOUND);
            assert!(outcome.message().contains("upper bound"));
        } else {
            assert_eq!(outcome.message(), messages::VALID);
        }
    }
}

#[test]
fn test_real_validation_matches_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..CASES {
        let lower = rng.gen_range(-1.0e3..1.0e3);
        let upper = lower + rng.gen_range(0.0..1.0e3);
        let value = rng.gen_range(lower - 5.0e2..upper + 5.0e2);

        let mut ratio = Parameter::real("Ratio", lower, lower, upper);
        ratio.set_value(ParamValue::Real(value)).unwrap();
        let outcome = ratio.validate();

        assert_eq!(
            outcome.is_valid(),
            lower <= value && value <= upper,
            "{value} in [{lower}, {upper}]"
        );
        if value < lower {
            assert_eq!(outcome.message(), messages::BELOW_LOWER_BOUND);
        } else if value > upper {
            assert_eq!(outcome.message(), messages::ABOVE_UPPER_BOUND);
        }
    }
}

#[test]
fn test_restricted_option_set_fails_outside_list() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let options = ["TP", "PH", "TV", "PS", "PV"];
    let candidates = ["TP", "PH", "TV", "PS", "PV", "XX", "tp", "", "TP "];

    for _ in 0..CASES {
        let amount = rng.gen_range(1..=options.len());
        let allowed: Vec<&str> = options.choose_multiple(&mut rng, amount).copied().collect();
        let mut method = Parameter::option("Method", allowed[0], allowed.iter().copied(), true);
        let before = method.value().clone();

        let candidate = *candidates.choose(&mut rng).unwrap();
        let result = method.set_value(ParamValue::from(candidate));

        if allowed.contains(&candidate) {
            assert!(result.is_ok());
            assert_eq!(method.value(), &ParamValue::from(candidate));
        } else {
            assert!(result.is_err());
            assert_eq!(method.value(), &before);
        }
    }
}

#[test]
fn test_reset_returns_default() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..CASES {
        let default = rng.gen_range(-100i64..100);
        let mut count = Parameter::integer("Count", default, -100, 100);

        for _ in 0..rng.gen_range(1..5) {
            count.set_value(ParamValue::Int(rng.gen_range(-1_000i64..1_000))).unwrap();
        }
        if rng.gen_bool(0.5) {
            let moved = rng.gen_range(-100i64..100);
            count.set_default_value(ParamValue::Int(moved)).unwrap();
        }

        count.reset();
        assert_eq!(count.value(), &count.default_value());
    }
}
