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

use num_traits::Float;

/// A trait for floating-point types that carry a fixed table of mathematical
/// constants.
///
/// Every constant is written with ~37 significant decimal digits and rounded
/// by the compiler to the nearest value of the implementing type, so `f64`
/// gets full double precision and `f32` full single precision from the same
/// literal.
///
/// # Examples
///
/// ```rust
/// # use euler_core::num::constants::MathConst;
/// fn circle_area<T: MathConst>(r: T) -> T {
///     T::PI * r * r
/// }
///
/// assert_eq!(circle_area(1.0f64), std::f64::consts::PI);
/// assert_eq!(circle_area(1.0f32), std::f32::consts::PI);
/// ```
pub trait MathConst: Float {
    /// Euler's number, e.
    const E: Self;
    /// log_2(e)
    const LOG2E: Self;
    /// log_10(e)
    const LOG10E: Self;
    /// ln(2)
    const LN2: Self;
    /// ln(10)
    const LN10: Self;
    /// pi
    const PI: Self;
    /// pi/2
    const PI_2: Self;
    /// pi/4
    const PI_4: Self;
    /// sqrt(2)
    const SQRT2: Self;
    /// 1/sqrt(2)
    const SQRT1_2: Self;
}

macro_rules! impl_math_const_for {
    ($t:ty) => {
        #[allow(clippy::excessive_precision, clippy::approx_constant)]
        impl MathConst for $t {
            const E: Self = 2.7182818284590452353602874713526625;
            const LOG2E: Self = 1.4426950408889634073599246810018921;
            const LOG10E: Self = 0.4342944819032518276511289189166051;
            const LN2: Self = 0.6931471805599453094172321214581766;
            const LN10: Self = 2.3025850929940456840179914546843642;
            const PI: Self = 3.1415926535897932384626433832795029;
            const PI_2: Self = 1.5707963267948966192313216916397514;
            const PI_4: Self = 0.7853981633974483096156608458198757;
            const SQRT2: Self = 1.4142135623730950488016887242096981;
            const SQRT1_2: Self = 0.7071067811865475244008443621048490;
        }
    };
}

impl_math_const_for!(f32);
impl_math_const_for!(f64);

/// Euler's number, e.
pub const E: f64 = <f64 as MathConst>::E;
/// log_2(e)
pub const LOG2E: f64 = <f64 as MathConst>::LOG2E;
/// log_10(e)
pub const LOG10E: f64 = <f64 as MathConst>::LOG10E;
/// ln(2)
pub const LN2: f64 = <f64 as MathConst>::LN2;
/// ln(10)
pub const LN10: f64 = <f64 as MathConst>::LN10;
/// pi
///
/// ```rust
/// # use euler_core::num::constants::PI;
/// assert_eq!(format!("{:.10}", PI), "3.1415926536");
/// ```
pub const PI: f64 = <f64 as MathConst>::PI;
/// pi/2
pub const PI_2: f64 = <f64 as MathConst>::PI_2;
/// pi/4
pub const PI_4: f64 = <f64 as MathConst>::PI_4;
/// sqrt(2)
pub const SQRT2: f64 = <f64 as MathConst>::SQRT2;
/// 1/sqrt(2)
pub const SQRT1_2: f64 = <f64 as MathConst>::SQRT1_2;
