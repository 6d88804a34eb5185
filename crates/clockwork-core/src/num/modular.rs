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

//! # Residue Arithmetic
//!
//! Overflow-free modular arithmetic over signed primitive integers. Every
//! function here (except `residue` and `mod_inverse`, which accept arbitrary
//! inputs) operates on residues in `[0, modulus)` with `modulus >= 1`, and no
//! intermediate result ever leaves the range of `T`. This makes the functions
//! safe to use with moduli close to `T::MAX`, where naive `(a + b) % m` or
//! `(a * b) % m` would overflow.
//!
//! ```rust
//! # use clockwork_core::num::modular::{add_mod, mul_mod, residue};
//! let m: i8 = 120;
//! assert_eq!(residue(-1_i8, m), 119);
//! assert_eq!(add_mod(100_i8, 100, m), 80);
//! assert_eq!(mul_mod(100_i8, 100, m), 40);
//! ```

use num_traits::{PrimInt, Signed};

/// Returns the Euclidean remainder of `value` modulo `modulus`.
///
/// The result always lies in `[0, modulus)`, also for negative `value`.
///
/// # Panics
///
/// Panics in debug builds if `modulus` is not positive.
///
/// # Examples
///
/// ```rust
/// # use clockwork_core::num::modular::residue;
/// assert_eq!(residue(13, 7), 6);
/// assert_eq!(residue(-1, 7), 6);
/// assert_eq!(residue(i32::MIN, 12), 4);
/// ```
#[inline]
pub fn residue<T>(value: T, modulus: T) -> T
where
    T: PrimInt + Signed,
{
    debug_assert!(modulus > T::zero(), "residue: modulus must be positive");
    let r = value % modulus;
    if r < T::zero() { r + modulus } else { r }
}

/// Computes `(a + b) mod m` for residues `a, b` in `[0, m)`.
///
/// # Examples
///
/// ```rust
/// # use clockwork_core::num::modular::add_mod;
/// assert_eq!(add_mod(5, 4, 7), 2);
/// assert_eq!(add_mod(126_i8, 126, 127), 125);
/// ```
#[inline]
pub fn add_mod<T>(a: T, b: T, m: T) -> T
where
    T: PrimInt + Signed,
{
    debug_assert!(a >= T::zero() && a < m);
    debug_assert!(b >= T::zero() && b < m);
    let gap = m - b;
    if a >= gap { a - gap } else { a + b }
}

/// Computes `(a - b) mod m` for residues `a, b` in `[0, m)`.
///
/// # Examples
///
/// ```rust
/// # use clockwork_core::num::modular::sub_mod;
/// assert_eq!(sub_mod(2, 5, 7), 4);
/// assert_eq!(sub_mod(5, 2, 7), 3);
/// ```
#[inline]
pub fn sub_mod<T>(a: T, b: T, m: T) -> T
where
    T: PrimInt + Signed,
{
    debug_assert!(a >= T::zero() && a < m);
    debug_assert!(b >= T::zero() && b < m);
    if a >= b { a - b } else { a + (m - b) }
}

/// Computes `(-a) mod m` for a residue `a` in `[0, m)`.
///
/// # Examples
///
/// ```rust
/// # use clockwork_core::num::modular::neg_mod;
/// assert_eq!(neg_mod(3, 7), 4);
/// assert_eq!(neg_mod(0, 7), 0);
/// ```
#[inline]
pub fn neg_mod<T>(a: T, m: T) -> T
where
    T: PrimInt + Signed,
{
    debug_assert!(a >= T::zero() && a < m);
    if a.is_zero() { a } else { m - a }
}

/// Computes `(a * b) mod m` for residues `a, b` in `[0, m)`.
///
/// Uses the direct product when it fits into `T` and falls back to
/// double-and-add otherwise, which takes `O(log b)` steps.
///
/// # Examples
///
/// ```rust
/// # use clockwork_core::num::modular::mul_mod;
/// assert_eq!(mul_mod(5, 6, 12), 6);
/// // 100 * 100 does not fit into an i8.
/// assert_eq!(mul_mod(100_i8, 100, 127), 94);
/// ```
pub fn mul_mod<T>(a: T, b: T, m: T) -> T
where
    T: PrimInt + Signed,
{
    debug_assert!(a >= T::zero() && a < m);
    debug_assert!(b >= T::zero() && b < m);
    if let Some(product) = a.checked_mul(&b) {
        return product % m;
    }

    let mut result = T::zero();
    let mut base = a;
    let mut factor = b;
    while factor > T::zero() {
        if (factor & T::one()) == T::one() {
            result = add_mod(result, base, m);
        }
        base = add_mod(base, base, m);
        factor = factor >> 1usize;
    }
    result
}

/// Runs the extended Euclidean algorithm on non-negative `a` and positive `b`.
///
/// Returns `(g, x)` where `g = gcd(a, b)` and `a * x ≡ g (mod b)`. The
/// coefficient satisfies `|x| <= b`, so the iteration never overflows `T`.
///
/// # Examples
///
/// ```rust
/// # use clockwork_core::num::modular::extended_gcd;
/// let (g, x) = extended_gcd(5_i32, 12);
/// assert_eq!(g, 1);
/// assert_eq!((5 * x).rem_euclid(12), 1);
///
/// assert_eq!(extended_gcd(4, 12).0, 4);
/// ```
pub fn extended_gcd<T>(a: T, b: T) -> (T, T)
where
    T: PrimInt + Signed,
{
    debug_assert!(a >= T::zero(), "extended_gcd: a must be non-negative");
    debug_assert!(b > T::zero(), "extended_gcd: b must be positive");

    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (T::one(), T::zero());
    while !r.is_zero() {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    (old_r, old_s)
}

/// Returns the multiplicative inverse of `a` modulo `m`, in `[0, m)`.
///
/// `a` may be any value, including negative ones; only its residue matters.
/// Returns `None` if `gcd(a, m) != 1`. For `m == 1` every value has the
/// inverse `0`.
///
/// # Examples
///
/// ```rust
/// # use clockwork_core::num::modular::mod_inverse;
/// assert_eq!(mod_inverse(5, 12), Some(5));
/// assert_eq!(mod_inverse(-5, 12), Some(7));
/// assert_eq!(mod_inverse(4, 12), None);
/// ```
pub fn mod_inverse<T>(a: T, m: T) -> Option<T>
where
    T: PrimInt + Signed,
{
    let (g, x) = extended_gcd(residue(a, m), m);
    if g != T::one() {
        return None;
    }
    Some(residue(x, m))
}
