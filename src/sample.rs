/*
 * // Copyright (c) Radzivon Bartoshyk 12/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::wavelets::{DiscreteWavelet, FilterBank};
use num_complex::Complex;
use num_traits::{AsPrimitive, Num, Zero};
use pxfm::{f_exp, f_expf, f_pow, f_powf, f_sincos, f_sincosf};
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Filter coefficient scalar: the real kind matching the signal precision.
///
/// This is the Rust rendition of the `REAL_TYPE` half of the original engine's
/// type templating: it selects the precision-matched filter bank out of a
/// [`DiscreteWavelet`] and carries the transcendental surface used by the
/// analytic continuous-wavelet evaluators.
pub trait WtReal:
    'static
    + Copy
    + Clone
    + Send
    + Sync
    + Num
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + PartialOrd
    + Debug
    + Display
    + Zero
    + AsPrimitive<f64>
{
    /// The filter bank of `wavelet` tabulated at this precision.
    fn bank(wavelet: &DiscreteWavelet) -> &FilterBank<Self>;
    fn exp(self) -> Self;
    fn sincos(self) -> (Self, Self);
    fn sqrt(self) -> Self;
    fn pow(self, other: Self) -> Self;
    const PI: Self;
    const TWO_PI: Self;
}

impl WtReal for f32 {
    #[inline]
    fn bank(wavelet: &DiscreteWavelet) -> &FilterBank<Self> {
        wavelet.bank_f32()
    }

    #[inline]
    fn exp(self) -> Self {
        f_expf(self)
    }

    #[inline]
    fn sincos(self) -> (Self, Self) {
        f_sincosf(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline]
    fn pow(self, other: Self) -> Self {
        f_powf(self, other)
    }

    const PI: Self = f32::from_bits(0x40490fdb);

    // Computed in SageMath:
    // R = RealField(256)
    // def float_to_hex(f):
    //     packed = struct.pack('>f', float(f))
    //     return '0x' + packed.hex()
    // float_to_hex(float(R.pi() * 2))
    const TWO_PI: Self = f32::from_bits(0x40c90fdb); // accurate PI*2
}

impl WtReal for f64 {
    #[inline]
    fn bank(wavelet: &DiscreteWavelet) -> &FilterBank<Self> {
        wavelet.bank_f64()
    }

    #[inline]
    fn exp(self) -> Self {
        f_exp(self)
    }

    #[inline]
    fn sincos(self) -> (Self, Self) {
        f_sincos(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn pow(self, other: Self) -> Self {
        f_pow(self, other)
    }

    const PI: Self = f64::from_bits(0x400921fb54442d18);

    // Computed in SageMath:
    // R = RealField(256)
    // def double_to_hex(f):
    //     packed = struct.pack('>d', float(f))
    //     return '0x' + packed.hex()
    // double_to_hex(float(R.pi() * 2))
    const TWO_PI: Self = f64::from_bits(0x401921fb54442d18); // accurate PI*2
}

/// Signal scalar: anything the convolution kernels accumulate.
///
/// A ring with addition, subtraction, negation and multiplication by the
/// matching real filter scalar. The complex implementations distribute the
/// real tap over both components; no complex-by-complex product exists
/// anywhere in the engine because filters are always real.
pub trait WtSample:
    'static
    + Copy
    + Clone
    + Send
    + Sync
    + Debug
    + Zero
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    type Real: WtReal;
    /// `self * r` where `r` is a real filter tap.
    fn mul_real(self, r: Self::Real) -> Self;
}

impl WtSample for f32 {
    type Real = f32;

    #[inline]
    fn mul_real(self, r: Self::Real) -> Self {
        self * r
    }
}

impl WtSample for f64 {
    type Real = f64;

    #[inline]
    fn mul_real(self, r: Self::Real) -> Self {
        self * r
    }
}

impl WtSample for Complex<f32> {
    type Real = f32;

    #[inline]
    fn mul_real(self, r: Self::Real) -> Self {
        Complex::new(self.re * r, self.im * r)
    }
}

impl WtSample for Complex<f64> {
    type Real = f64;

    #[inline]
    fn mul_real(self, r: Self::Real) -> Self {
        Complex::new(self.re * r, self.im * r)
    }
}
