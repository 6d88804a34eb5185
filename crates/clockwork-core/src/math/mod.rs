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

//! # Math Primitives
//!
//! Value types for arithmetic on closed, wrapping intervals.
//!
//! ## Submodules
//!
//! - `circular`: `CircularInt<T>`, an integer confined to `[minimum, maximum]`
//!   whose arithmetic wraps around like the face of a clock. Supports in-place
//!   and by-value addition, subtraction, multiplication, reflection, exact
//!   division, and modular division through the modular inverse.
//! - `error`: The error types reported by invalid bounds and impossible
//!   divisions.
//!
//! ## Motivation
//!
//! Hours on a clock, days of the week, ring-buffer slots and angles all live on
//! a circle. Encoding the bounds in the value keeps every intermediate result
//! inside the circle and removes hand-written `%` adjustments from call sites.

pub mod circular;
pub mod error;
