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

//! # Euler Core
//!
//! Mathematical constants and a portable NaN test for numeric code that
//! wants named, documented values instead of scattered literals.
//!
//! ## Modules
//!
//! - `num`: The constant table (`E`, `LOG2E`, `LOG10E`, `LN2`, `LN10`, `PI`,
//!   `PI_2`, `PI_4`, `SQRT2`, `SQRT1_2`) as free `f64` constants and as
//!   associated constants of the `MathConst` trait for `f32` and `f64`,
//!   together with the self-inequality NaN predicate `is_nan` and its
//!   by-value trait form `NotANumber`.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
