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

use std::fmt::{Debug, Display};

/// The error returned when a `CircularInt` cannot be built from the given bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundsError<T> {
    /// The minimum is greater than the maximum.
    Inverted {
        /// The requested lower bound.
        minimum: T,
        /// The requested upper bound.
        maximum: T,
    },
    /// The number of values in `[minimum, maximum]` is not representable in `T`.
    SpanOverflow {
        /// The requested lower bound.
        minimum: T,
        /// The requested upper bound.
        maximum: T,
    },
}

impl<T> BoundsError<T>
where
    T: Copy,
{
    /// Returns the lower bound that was rejected.
    #[inline]
    pub fn minimum(&self) -> T {
        match *self {
            Self::Inverted { minimum, .. } | Self::SpanOverflow { minimum, .. } => minimum,
        }
    }

    /// Returns the upper bound that was rejected.
    #[inline]
    pub fn maximum(&self) -> T {
        match *self {
            Self::Inverted { maximum, .. } | Self::SpanOverflow { maximum, .. } => maximum,
        }
    }
}

impl<T> Display for BoundsError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inverted { minimum, maximum } => write!(
                f,
                "Invalid bounds: minimum {} is greater than maximum {}",
                minimum, maximum
            ),
            Self::SpanOverflow { minimum, maximum } => write!(
                f,
                "Invalid bounds: the span of {{{}, {}}} does not fit in the integer type",
                minimum, maximum
            ),
        }
    }
}

impl<T> std::error::Error for BoundsError<T> where T: Debug + Display {}

/// Error indicating that a division has no solution inside the interval.
///
/// Returned by exact division when the current value is not a multiple of the
/// divisor, and by modular division when the divisor has no inverse modulo the
/// span of the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotDivisibleError<T> {
    minimum: T,
    maximum: T,
    divisor: T,
    current: T,
}

impl<T> NotDivisibleError<T>
where
    T: Copy,
{
    #[inline]
    pub(crate) fn new(minimum: T, maximum: T, divisor: T, current: T) -> Self {
        Self {
            minimum,
            maximum,
            divisor,
            current,
        }
    }

    /// The lower bound of the dividend's interval.
    #[inline]
    pub fn minimum(&self) -> T {
        self.minimum
    }

    /// The upper bound of the dividend's interval.
    #[inline]
    pub fn maximum(&self) -> T {
        self.maximum
    }

    /// The divisor that was attempted.
    #[inline]
    pub fn divisor(&self) -> T {
        self.divisor
    }

    /// The value of the dividend at the time of the attempt.
    #[inline]
    pub fn current(&self) -> T {
        self.current
    }
}

impl<T> Display for NotDivisibleError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "There is no number x in {{{}, {}}} such that x * {} = {}",
            self.minimum, self.maximum, self.divisor, self.current
        )
    }
}

impl<T> std::error::Error for NotDivisibleError<T> where T: Debug + Display {}
