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

//! # Circular Integers
//!
//! `CircularInt<T>` is an integer confined to the closed interval
//! `[minimum, maximum]`. Every arithmetic result is wrapped back into that
//! interval by modular reduction, so a value on `{1, 12}` behaves like the hour
//! hand of a clock: `12 + 1 == 1`, `1 - 2 == 11`.
//!
//! ## Wrapping
//!
//! The number of values in the interval, `span = maximum - minimum + 1`, is the
//! modulus. Wrapping maps any integer `v` to the unique integer congruent to `v`
//! modulo `span` inside the interval, i.e.
//! `v + ceil((minimum - v) / span) * span`. All arithmetic is carried out on
//! residues modulo `span`, so results equal the wrap of the exact, unbounded
//! result and no operation can overflow `T`.
//!
//! ## Equality and ordering
//!
//! Equality compares the current value *and* the bounds. Ordering, exposed
//! through `cmp_current` and the `is_*` predicates, compares only the current
//! value and ignores the bounds. `PartialOrd` is therefore not implemented,
//! since it would have to disagree with `PartialEq`.
//!
//! ## Usage
//!
//! ```rust
//! use clockwork_core::math::circular::CircularInt;
//!
//! let mut hour = CircularInt::new(1, 12).unwrap();
//! hour += 11;
//! assert_eq!(hour.current(), 12);
//! hour += 1;
//! assert_eq!(hour.current(), 1);
//!
//! // Reflection: the hours remaining until 12.
//! hour.set_current(9);
//! assert_eq!((-hour).current(), 3);
//!
//! assert_eq!(format!("{}", hour * 2), "6");
//! ```

use crate::{
    math::error::{BoundsError, NotDivisibleError},
    num::modular::{add_mod, mod_inverse, mul_mod, neg_mod, residue, sub_mod},
};
use num_traits::{PrimInt, Signed};
use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, RangeInclusive, Sub, SubAssign},
};

/// An integer confined to `[minimum, maximum]` with wraparound arithmetic.
///
/// Instances are plain `Copy` values; copying produces an independent value.
/// The type performs no internal synchronization: mutation requires `&mut`,
/// so an instance shared between threads must be guarded externally.
///
/// # Invariants
///
/// `minimum <= current <= maximum` and `span == maximum - minimum + 1` hold
/// after construction and after every operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircularInt<T>
where
    T: PrimInt + Signed,
{
    current: T,
    minimum: T,
    maximum: T,
    span: T,
}

impl<T> CircularInt<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `CircularInt` on `[minimum, maximum]` positioned at `minimum`.
    ///
    /// # Errors
    ///
    /// Returns `BoundsError::Inverted` if `minimum > maximum` and
    /// `BoundsError::SpanOverflow` if `maximum - minimum + 1` does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    /// # use clockwork_core::math::error::BoundsError;
    ///
    /// let hour = CircularInt::new(1, 12).unwrap();
    /// assert_eq!(hour.current(), 1);
    /// assert_eq!(hour.span(), 12);
    ///
    /// assert!(matches!(CircularInt::new(12, 1), Err(BoundsError::Inverted { .. })));
    /// assert!(matches!(
    ///     CircularInt::new(i8::MIN, i8::MAX),
    ///     Err(BoundsError::SpanOverflow { .. })
    /// ));
    /// ```
    pub fn new(minimum: T, maximum: T) -> Result<Self, BoundsError<T>> {
        if maximum < minimum {
            return Err(BoundsError::Inverted { minimum, maximum });
        }
        let span = maximum
            .checked_sub(&minimum)
            .and_then(|distance| distance.checked_add(&T::one()))
            .ok_or(BoundsError::SpanOverflow { minimum, maximum })?;

        Ok(Self {
            current: minimum,
            minimum,
            maximum,
            span,
        })
    }

    /// Creates a new `CircularInt` on `[minimum, maximum]` holding `value`, wrapped.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`CircularInt::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    ///
    /// let weekday = CircularInt::with_value(0, 6, 10).unwrap();
    /// assert_eq!(weekday.current(), 3);
    /// ```
    pub fn with_value(minimum: T, maximum: T, value: T) -> Result<Self, BoundsError<T>> {
        let mut circular = Self::new(minimum, maximum)?;
        circular.set_current(value);
        Ok(circular)
    }

    /// Creates a new `CircularInt` without reporting invalid bounds as an error.
    ///
    /// The caller must ensure `minimum <= maximum`. This function contains a
    /// `debug_assert!` to catch inverted bounds during development.
    ///
    /// # Panics
    ///
    /// Panics if the span `maximum - minimum + 1` does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    ///
    /// let minute = CircularInt::new_unchecked(0, 59);
    /// assert_eq!(minute.span(), 60);
    /// ```
    #[inline]
    pub fn new_unchecked(minimum: T, maximum: T) -> Self {
        debug_assert!(
            minimum <= maximum,
            "Invalid bounds: minimum must be less than or equal to maximum"
        );
        let span = maximum
            .checked_sub(&minimum)
            .and_then(|distance| distance.checked_add(&T::one()))
            .expect("CircularInt::new_unchecked: span exceeds the range of the integer type");
        Self {
            current: minimum,
            minimum,
            maximum,
            span,
        }
    }

    /// Returns the current value.
    #[inline]
    pub const fn current(&self) -> T {
        self.current
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn minimum(&self) -> T {
        self.minimum
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn maximum(&self) -> T {
        self.maximum
    }

    /// Returns the number of values in the interval, `maximum - minimum + 1`.
    #[inline]
    pub const fn span(&self) -> T {
        self.span
    }

    /// Returns the bounds as an inclusive range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    ///
    /// let hour = CircularInt::new(1, 12).unwrap();
    /// assert_eq!(hour.bounds(), 1..=12);
    /// ```
    #[inline]
    pub fn bounds(&self) -> RangeInclusive<T> {
        self.minimum..=self.maximum
    }

    /// Returns `true` if `value` lies in `[minimum, maximum]`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.minimum <= value && value <= self.maximum
    }

    /// Assigns `value` to the current value, wrapping it into the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    ///
    /// let mut hour = CircularInt::new(1, 12).unwrap();
    /// hour.set_current(15);
    /// assert_eq!(hour.current(), 3);
    /// hour.set_current(0);
    /// assert_eq!(hour.current(), 12);
    /// ```
    #[inline]
    pub fn set_current(&mut self, value: T) {
        self.current = self.wrap(value);
    }

    /// Maps `value` to the unique integer in `[minimum, maximum]` that is
    /// congruent to it modulo the span.
    ///
    /// Equivalent to `value + ceil((minimum - value) / span) * span`, computed
    /// exactly in `O(1)` without overflow. Values already in range are returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    ///
    /// let c = CircularInt::new(-5, 5).unwrap();
    /// assert_eq!(c.wrap(100), 1);
    /// assert_eq!(c.wrap(-100), -1);
    /// assert_eq!(c.wrap(4), 4);
    /// ```
    #[inline]
    pub fn wrap(&self, value: T) -> T {
        self.from_residue(residue(value, self.span))
    }

    /// Increments in place and returns the new value (`++x`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    ///
    /// let mut hour = CircularInt::with_value(1, 12, 12).unwrap();
    /// assert_eq!(hour.pre_increment().current(), 1);
    /// assert_eq!(hour.current(), 1);
    /// ```
    #[inline]
    pub fn pre_increment(&mut self) -> Self {
        *self += T::one();
        *self
    }

    /// Increments in place and returns the value before the increment (`x++`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    ///
    /// let mut hour = CircularInt::with_value(1, 12, 12).unwrap();
    /// assert_eq!(hour.post_increment().current(), 12);
    /// assert_eq!(hour.current(), 1);
    /// ```
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let before = *self;
        *self += T::one();
        before
    }

    /// Decrements in place and returns the new value (`--x`).
    #[inline]
    pub fn pre_decrement(&mut self) -> Self {
        *self -= T::one();
        *self
    }

    /// Decrements in place and returns the value before the decrement (`x--`).
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let before = *self;
        *self -= T::one();
        before
    }

    /// Divides exactly, returning a new instance holding `current / divisor`, wrapped.
    ///
    /// The division only succeeds if `current` is a multiple of `divisor`; the
    /// receiver is never modified. The `/` operator forwards to this method.
    ///
    /// # Errors
    ///
    /// Returns `NotDivisibleError` if `divisor` is zero or `current % divisor != 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    ///
    /// let hour = CircularInt::with_value(1, 12, 6).unwrap();
    /// assert_eq!(hour.exact_div(3).unwrap().current(), 2);
    /// assert_eq!(hour.exact_div(-2).unwrap().current(), 9);
    ///
    /// let err = hour.exact_div(4).unwrap_err();
    /// assert_eq!(err.to_string(), "There is no number x in {1, 12} such that x * 4 = 6");
    /// ```
    pub fn exact_div(&self, divisor: T) -> Result<Self, NotDivisibleError<T>> {
        if divisor.is_zero() {
            return Err(self.not_divisible(divisor));
        }
        // `MIN / -1` overflows, negate on residues instead.
        if divisor == -T::one() {
            return Ok(self.with_residue(neg_mod(self.current_residue(), self.span)));
        }
        if !(self.current % divisor).is_zero() {
            return Err(self.not_divisible(divisor));
        }

        let mut quotient = *self;
        quotient.set_current(self.current / divisor);
        Ok(quotient)
    }

    /// Divides in place modulo the span: `current = current * divisor⁻¹ (mod span)`, wrapped.
    ///
    /// The result `y` satisfies `y * divisor ≡ current (mod span)`. On failure the
    /// current value is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotDivisibleError` if `divisor` has no inverse modulo the span,
    /// i.e. `gcd(divisor, span) != 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    ///
    /// let mut hour = CircularInt::with_value(1, 12, 6).unwrap();
    /// hour.mod_div_assign(5).unwrap();
    /// assert_eq!((hour.current() * 5) % 12, 6);
    ///
    /// assert!(hour.mod_div_assign(4).is_err());
    /// ```
    pub fn mod_div_assign(&mut self, divisor: T) -> Result<&mut Self, NotDivisibleError<T>> {
        let inverse = mod_inverse(divisor, self.span).ok_or_else(|| self.not_divisible(divisor))?;
        let quotient = mul_mod(inverse, self.current_residue(), self.span);
        self.current = self.from_residue(quotient);
        Ok(self)
    }

    /// Compares the current values only, ignoring the bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockwork_core::math::circular::CircularInt;
    /// # use std::cmp::Ordering;
    ///
    /// let day_hour = CircularInt::with_value(0, 23, 5).unwrap();
    /// let clock_hour = CircularInt::with_value(1, 12, 7).unwrap();
    /// assert_eq!(day_hour.cmp_current(&clock_hour), Ordering::Less);
    /// ```
    #[inline]
    pub fn cmp_current(&self, other: &Self) -> Ordering {
        self.current.cmp(&other.current)
    }

    /// Returns `true` if `self.current() < other.current()`. Bounds are ignored.
    #[inline]
    pub fn is_less_than(&self, other: &Self) -> bool {
        self.current < other.current
    }

    /// Returns `true` if `self.current() > other.current()`. Bounds are ignored.
    #[inline]
    pub fn is_greater_than(&self, other: &Self) -> bool {
        self.current > other.current
    }

    /// Returns `true` if `self.current() <= other.current()`. Bounds are ignored.
    #[inline]
    pub fn is_less_or_equal(&self, other: &Self) -> bool {
        self.current <= other.current
    }

    /// Returns `true` if `self.current() >= other.current()`. Bounds are ignored.
    #[inline]
    pub fn is_greater_or_equal(&self, other: &Self) -> bool {
        self.current >= other.current
    }

    #[inline]
    fn current_residue(&self) -> T {
        residue(self.current, self.span)
    }

    /// Lifts a residue in `[0, span)` to its representative in `[minimum, maximum]`.
    #[inline]
    fn from_residue(&self, r: T) -> T {
        self.minimum + sub_mod(r, residue(self.minimum, self.span), self.span)
    }

    #[inline]
    fn with_residue(mut self, r: T) -> Self {
        self.current = self.from_residue(r);
        self
    }

    #[inline]
    fn not_divisible(&self, divisor: T) -> NotDivisibleError<T> {
        NotDivisibleError::new(self.minimum, self.maximum, divisor, self.current)
    }
}

/// Computes `value - circular.current()`, wrapped into the bounds of `circular`.
///
/// The `-` operator with a primitive on the left forwards to this function.
/// That operator is implemented once per signed primitive, so `literal - circular`
/// only type-checks once the integer type of `circular` is already known.
/// This function infers the type from its arguments and works in either case.
///
/// # Examples
///
/// ```rust
/// # use clockwork_core::math::circular::{reverse_sub, CircularInt};
///
/// let hour = CircularInt::with_value(1_i32, 12, 5).unwrap();
/// assert_eq!(reverse_sub(3, &hour).current(), 10);
/// assert_eq!((3 - hour).current(), 10);
/// ```
#[inline]
pub fn reverse_sub<T>(value: T, circular: &CircularInt<T>) -> CircularInt<T>
where
    T: PrimInt + Signed,
{
    let span = circular.span;
    circular.with_residue(sub_mod(residue(value, span), circular.current_residue(), span))
}

/// Computes `lhs.current() + rhs.current()`, wrapped into the bounds of `lhs`.
///
/// The bounds of `rhs` are ignored. The `+` operator between two instances
/// forwards to this function.
///
/// # Examples
///
/// ```rust
/// # use clockwork_core::math::circular::{add_instances, CircularInt};
///
/// let hour = CircularInt::with_value(1, 12, 10).unwrap();
/// let minutes = CircularInt::with_value(0, 59, 45).unwrap();
/// let sum = add_instances(&hour, &minutes);
/// assert_eq!(sum.current(), 7);
/// assert_eq!(sum.bounds(), 1..=12);
/// ```
#[inline]
pub fn add_instances<T>(lhs: &CircularInt<T>, rhs: &CircularInt<T>) -> CircularInt<T>
where
    T: PrimInt + Signed,
{
    let mut sum = *lhs;
    sum += rhs.current;
    sum
}

impl<T> AddAssign<T> for CircularInt<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        let r = add_mod(self.current_residue(), residue(rhs, self.span), self.span);
        self.current = self.from_residue(r);
    }
}

impl<T> SubAssign<T> for CircularInt<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        let r = sub_mod(self.current_residue(), residue(rhs, self.span), self.span);
        self.current = self.from_residue(r);
    }
}

impl<T> MulAssign<T> for CircularInt<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        let r = mul_mod(self.current_residue(), residue(rhs, self.span), self.span);
        self.current = self.from_residue(r);
    }
}

impl<T> Add<T> for CircularInt<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: T) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T> Sub<T> for CircularInt<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: T) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T> Mul<T> for CircularInt<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T> Div<T> for CircularInt<T>
where
    T: PrimInt + Signed,
{
    type Output = Result<Self, NotDivisibleError<T>>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.exact_div(rhs)
    }
}

/// Reflection across the interval: `maximum - current`, wrapped.
///
/// On `{1, 12}` this is the number of hours remaining until twelve.
impl<T> Neg for CircularInt<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        let r = sub_mod(residue(self.maximum, self.span), self.current_residue(), self.span);
        self.with_residue(r)
    }
}

impl<T> Add for CircularInt<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        add_instances(&self, &rhs)
    }
}

macro_rules! impl_reverse_sub_for {
    ($t:ty) => {
        impl Sub<CircularInt<$t>> for $t {
            type Output = CircularInt<$t>;

            #[inline]
            fn sub(self, rhs: CircularInt<$t>) -> Self::Output {
                reverse_sub(self, &rhs)
            }
        }
    };
}

impl_reverse_sub_for!(i8);
impl_reverse_sub_for!(i16);
impl_reverse_sub_for!(i32);
impl_reverse_sub_for!(i64);
impl_reverse_sub_for!(i128);
impl_reverse_sub_for!(isize);

impl<T> std::fmt::Debug for CircularInt<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircularInt")
            .field("current", &self.current)
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("span", &self.span)
            .finish()
    }
}

impl<T> std::fmt::Display for CircularInt<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.current)
    }
}

impl<T> From<CircularInt<T>> for RangeInclusive<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn from(circular: CircularInt<T>) -> Self {
        circular.bounds()
    }
}

impl<T> TryFrom<RangeInclusive<T>> for CircularInt<T>
where
    T: PrimInt + Signed,
{
    type Error = BoundsError<T>;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (minimum, maximum) = range.into_inner();
        Self::new(minimum, maximum)
    }
}
