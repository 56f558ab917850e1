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

//! NaN detection through IEEE-754 self-inequality.
//!
//! NaN is the only floating-point value that does not compare equal to
//! itself. Both `is_nan` and `NotANumber` rely on that rule alone and never
//! look at the bit pattern, so every NaN encoding (quiet or signalling, any
//! payload, either sign) is detected and every other value is rejected.

macro_rules! impl_not_a_number_for {
    ($t:ty) => {
        impl NotANumber for $t {
            #[inline(always)]
            #[allow(clippy::eq_op)]
            fn is_not_a_number(self) -> bool {
                self != self
            }
        }
    };
}

/// Checks whether `v` is NaN.
///
/// Equivalent to `f64::is_nan`, but expressed purely as a comparison.
/// Total over all inputs, including infinities, signed zeros and subnormals.
///
/// # Examples
///
/// ```rust
/// # use euler_core::num::nan::is_nan;
/// let zero = 0.0f64;
/// assert!(is_nan(zero / zero));
/// assert!(!is_nan(1.0));
/// assert!(!is_nan(1.0 / zero)); // +inf
/// ```
#[inline(always)]
#[allow(clippy::eq_op)]
pub fn is_nan(v: f64) -> bool {
    v != v
}

/// NaN detection by value (no references).
///
/// # Examples
///
/// ```rust
/// # use euler_core::num::nan::NotANumber;
/// assert!(f32::NAN.is_not_a_number());
/// assert!(!f32::INFINITY.is_not_a_number());
/// assert!(!(-0.0f64).is_not_a_number());
/// ```
pub trait NotANumber: Copy + PartialEq {
    /// Returns `true` if and only if `self` is NaN.
    fn is_not_a_number(self) -> bool;
}

impl_not_a_number_for!(f32);
impl_not_a_number_for!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn not_a_number<T: NotANumber>(v: T) -> bool {
        v.is_not_a_number()
    }

    fn nan_encodings_f64() -> [f64; 6] {
        [
            f64::NAN,
            -f64::NAN,
            f64::from_bits(0x7FF8_0000_0000_0000), // canonical quiet
            f64::from_bits(0x7FF0_0000_0000_0001), // signalling, smallest payload
            f64::from_bits(0x7FFF_FFFF_FFFF_FFFF), // quiet, largest payload
            f64::from_bits(0xFFF4_0000_0000_0000), // negative signalling
        ]
    }

    fn non_nan_f64() -> [f64; 12] {
        [
            0.0,
            -0.0,
            1.0,
            -1.0,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::MAX,
            f64::MIN,
            f64::MIN_POSITIVE,
            f64::from_bits(1), // smallest subnormal
            -f64::from_bits(0x000F_FFFF_FFFF_FFFF), // largest negative subnormal
            f64::EPSILON,
        ]
    }

    #[test]
    fn test_is_nan_zero_over_zero() {
        let zero = 0.0f64;
        assert!(is_nan(zero / zero));
    }

    #[test]
    fn test_is_nan_one() {
        assert!(!is_nan(1.0));
    }

    #[test]
    fn test_is_nan_positive_infinity() {
        let zero = 0.0f64;
        assert!(!is_nan(1.0 / zero));
        assert!(!is_nan(-1.0 / zero));
    }

    #[test]
    fn test_is_nan_all_encodings() {
        for v in nan_encodings_f64() {
            assert!(is_nan(v), "expected NaN for bits {:#018x}", v.to_bits());
        }
    }

    #[test]
    fn test_is_nan_rejects_non_nan() {
        for v in non_nan_f64() {
            assert!(!is_nan(v), "unexpected NaN for {v:e}");
        }
    }

    #[test]
    fn test_is_nan_agrees_with_std() {
        for v in nan_encodings_f64().into_iter().chain(non_nan_f64()) {
            assert_eq!(is_nan(v), v.is_nan());
        }
    }

    #[test]
    fn test_is_nan_is_idempotent() {
        for v in nan_encodings_f64().into_iter().chain(non_nan_f64()) {
            let first = is_nan(v);
            for _ in 0..4 {
                assert_eq!(is_nan(v), first);
            }
        }
    }

    #[test]
    fn test_not_a_number_f64_matches_is_nan() {
        for v in nan_encodings_f64().into_iter().chain(non_nan_f64()) {
            assert_eq!(not_a_number(v), is_nan(v));
        }
    }

    #[test]
    fn test_not_a_number_f32() {
        assert!(not_a_number(f32::NAN));
        assert!(not_a_number(f32::from_bits(0x7F80_0001))); // signalling
        assert!(not_a_number(f32::from_bits(0xFFFF_FFFF)));
        assert!(!not_a_number(0.0f32));
        assert!(!not_a_number(-0.0f32));
        assert!(!not_a_number(f32::INFINITY));
        assert!(!not_a_number(f32::NEG_INFINITY));
        assert!(!not_a_number(f32::from_bits(1)));
        assert!(!not_a_number(f32::MAX));
    }
}
