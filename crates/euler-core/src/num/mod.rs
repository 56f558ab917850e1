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

//! # Numeric Foundations
//!
//! Compile-time mathematical constants and a NaN predicate for floating-point
//! primitives.
//!
//! ## Submodules
//!
//! - `constants`: Free `f64` constants plus the associated-constant trait
//!   `MathConst`, implemented for `f32` and `f64`, so generic code can write
//!   `T::PI` without caring about the width of `T`.
//! - `nan`: `is_nan` and the by-value `NotANumber` trait. Both rely only on
//!   the IEEE-754 rule that NaN is the single value not equal to itself.
//!
//! ```rust
//! use euler_core::num::{is_nan, PI, SQRT1_2, SQRT2};
//!
//! assert!((SQRT2 * SQRT1_2 - 1.0).abs() < 1e-15);
//! assert!(!is_nan(PI));
//! assert!(is_nan(f64::NAN));
//! ```

pub mod constants;
pub mod nan;

pub use constants::{E, LN2, LN10, LOG2E, LOG10E, MathConst, PI, PI_2, PI_4, SQRT1_2, SQRT2};
pub use nan::{NotANumber, is_nan};
