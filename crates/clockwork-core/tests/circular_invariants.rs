// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use clockwork_core::math::circular::CircularInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// Brute-force wrap computed in a wider type.
fn reference_wrap(value: i128, minimum: i64, maximum: i64) -> i64 {
    let minimum = minimum as i128;
    let span = maximum as i128 - minimum + 1;
    (minimum + (value - minimum).rem_euclid(span)) as i64
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    AddAssign(i64),
    SubAssign(i64),
    MulAssign(i64),
    PreIncrement,
    PostDecrement,
    Negate,
}

fn random_op(rng: &mut ChaCha8Rng) -> Op {
    let operand = if rng.random_bool(0.1) {
        // Extreme operands exercise the overflow-free paths.
        if rng.random_bool(0.5) { i64::MAX } else { i64::MIN }
    } else {
        rng.random_range(-10_000..=10_000)
    };
    match rng.random_range(0..6) {
        0 => Op::AddAssign(operand),
        1 => Op::SubAssign(operand),
        2 => Op::MulAssign(operand),
        3 => Op::PreIncrement,
        4 => Op::PostDecrement,
        _ => Op::Negate,
    }
}

#[test]
fn test_random_sequences_stay_in_bounds_and_match_reference() {
    let mut rng = rng();
    for _ in 0..200 {
        let minimum = rng.random_range(-1_000..=1_000_i64);
        let maximum = minimum + rng.random_range(0..=60_i64);
        let mut c = CircularInt::new(minimum, maximum).unwrap();
        let mut expected = minimum;

        for _ in 0..100 {
            let op = random_op(&mut rng);
            let exact = match op {
                Op::AddAssign(n) => {
                    c += n;
                    expected as i128 + n as i128
                }
                Op::SubAssign(n) => {
                    c -= n;
                    expected as i128 - n as i128
                }
                Op::MulAssign(n) => {
                    c *= n;
                    expected as i128 * n as i128
                }
                Op::PreIncrement => {
                    c.pre_increment();
                    expected as i128 + 1
                }
                Op::PostDecrement => {
                    c.post_decrement();
                    expected as i128 - 1
                }
                Op::Negate => {
                    c = -c;
                    maximum as i128 - expected as i128
                }
            };
            expected = reference_wrap(exact, minimum, maximum);

            assert!(
                c.contains(c.current()),
                "{:?} left {:?} out of bounds",
                op,
                c
            );
            assert_eq!(c.current(), expected, "{:?} on {:?}", op, c);
            assert_eq!(c.bounds(), minimum..=maximum);
        }
    }
}

#[test]
fn test_add_sub_round_trip_random() {
    let mut rng = rng();
    for _ in 0..1_000 {
        let minimum = rng.random_range(i64::MIN / 2..=i64::MAX / 2);
        let maximum = minimum + rng.random_range(0..=i64::MAX / 4);
        let value = rng.random_range(minimum..=maximum);
        let n = rng.random_range(i64::MIN..=i64::MAX);

        let c = CircularInt::with_value(minimum, maximum, value).unwrap();
        assert_eq!(((c + n) - n).current(), value);
        assert_eq!(((c - n) + n).current(), value);
    }
}

#[test]
fn test_wide_span_multiplication_matches_reference() {
    let mut rng = rng();
    for _ in 0..1_000 {
        let minimum = rng.random_range(i64::MIN / 2 + 1..=0);
        let maximum = rng.random_range(0..=i64::MAX / 2);
        let value = rng.random_range(minimum..=maximum);
        let n = rng.random_range(i64::MIN..=i64::MAX);

        let c = CircularInt::with_value(minimum, maximum, value).unwrap();
        let expected = reference_wrap(value as i128 * n as i128, minimum, maximum);
        assert_eq!((c * n).current(), expected, "{value} * {n} on {minimum}..={maximum}");
    }
}

#[test]
fn test_with_value_matches_reference_for_i8_extremes() {
    for minimum in i8::MIN..=0 {
        for maximum in minimum..=(minimum as i16 + 126).min(i8::MAX as i16) as i8 {
            for value in [i8::MIN, -1, 0, 1, i8::MAX] {
                let c = CircularInt::with_value(minimum, maximum, value).unwrap();
                let expected =
                    reference_wrap(value as i128, minimum as i64, maximum as i64) as i8;
                assert_eq!(c.current(), expected);
            }
        }
    }
}

#[test]
fn test_exact_div_exhaustive_small_intervals() {
    for minimum in -6..=6_i64 {
        for maximum in minimum..=minimum + 12 {
            for value in minimum..=maximum {
                let c = CircularInt::with_value(minimum, maximum, value).unwrap();
                for divisor in -8..=8_i64 {
                    let result = c.exact_div(divisor);
                    if divisor != 0 && value % divisor == 0 {
                        let expected =
                            reference_wrap((value / divisor) as i128, minimum, maximum);
                        assert_eq!(result.unwrap().current(), expected);
                    } else {
                        let err = result.unwrap_err();
                        assert_eq!(err.minimum(), minimum);
                        assert_eq!(err.maximum(), maximum);
                        assert_eq!(err.divisor(), divisor);
                        assert_eq!(err.current(), value);
                    }
                }
            }
        }
    }
}

#[test]
fn test_mod_div_assign_exhaustive_small_intervals() {
    for minimum in -3..=3_i64 {
        for maximum in minimum..=minimum + 15 {
            let span = maximum - minimum + 1;
            for value in minimum..=maximum {
                for divisor in -20..=20_i64 {
                    let mut c = CircularInt::with_value(minimum, maximum, value).unwrap();
                    let result = c.mod_div_assign(divisor).map(|c| c.current());
                    if gcd(divisor, span) == 1 {
                        let y = result.unwrap();
                        assert!((minimum..=maximum).contains(&y));
                        assert_eq!(
                            (y * divisor - value).rem_euclid(span),
                            0,
                            "{value} / {divisor} on {minimum}..={maximum} gave {y}"
                        );
                    } else {
                        assert!(result.is_err());
                        assert_eq!(c.current(), value);
                    }
                }
            }
        }
    }
}

#[test]
fn test_free_operators_match_reference() {
    let mut rng = rng();
    for _ in 0..500 {
        let minimum = rng.random_range(-500..=500_i64);
        let maximum = minimum + rng.random_range(0..=100_i64);
        let value = rng.random_range(minimum..=maximum);
        let other = rng.random_range(-1_000..=1_000_i64);
        let n = rng.random_range(i64::MIN..=i64::MAX);

        let c = CircularInt::with_value(minimum, maximum, value).unwrap();
        let rhs = CircularInt::with_value(-1_000, 1_000, other).unwrap();

        let diff = n - c;
        assert_eq!(
            diff.current(),
            reference_wrap(n as i128 - value as i128, minimum, maximum)
        );
        assert_eq!(diff.bounds(), c.bounds());

        let sum = c + rhs;
        assert_eq!(
            sum.current(),
            reference_wrap(value as i128 + other as i128, minimum, maximum)
        );
        assert_eq!(sum.bounds(), c.bounds());
    }
}

#[test]
fn test_postfix_and_prefix_steps_move_by_one() {
    let mut rng = rng();
    for _ in 0..200 {
        let minimum = rng.random_range(-50..=50_i64);
        let maximum = minimum + rng.random_range(0..=20_i64);
        let value = rng.random_range(minimum..=maximum);
        let mut c = CircularInt::with_value(minimum, maximum, value).unwrap();

        let before = c.post_increment();
        assert_eq!(before.current(), value);
        assert_eq!(c.current(), reference_wrap(value as i128 + 1, minimum, maximum));

        let after = c.pre_decrement();
        assert_eq!(after.current(), value);
        assert_eq!(c, after);

        let after = c.pre_increment();
        let before = c.post_decrement();
        assert_eq!(after, before);
        assert_eq!(c.current(), value);
    }
}
