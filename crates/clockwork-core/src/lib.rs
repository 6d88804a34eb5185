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

//! # Clockwork Core
//!
//! Bounded circular integers: values confined to a closed interval
//! `[minimum, maximum]` whose arithmetic wraps around the interval like the
//! face of a clock.
//!
//! ## Modules
//!
//! - `math`: The `CircularInt<T>` value type with in-place and by-value
//!   arithmetic (`+=`, `-=`, `*=`, `+`, `-`, `*`), prefix/postfix steps,
//!   reflection (unary `-`), exact division (`/`, yielding a `Result`) and
//!   modular division through the modular inverse, together with its error
//!   types (`BoundsError`, `NotDivisibleError`).
//! - `num`: Overflow-free residue arithmetic and the extended Euclidean
//!   algorithm the circular types are built on.
//!
//! ## Example
//!
//! ```rust
//! use clockwork_core::math::circular::CircularInt;
//!
//! let mut weekday = CircularInt::new(0, 6).unwrap();
//! weekday += 10;
//! assert_eq!(weekday.current(), 3);
//! assert_eq!((weekday / 3).unwrap().current(), 1);
//! ```

pub mod math;
pub mod num;
