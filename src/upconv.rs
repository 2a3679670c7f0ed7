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
//! Upsampling convolution: zero-insert upsampling fused with the filter walk.
//!
//! Both kernels ADD into the output instead of overwriting it. IDWT is
//! literally "reconstruct from approximation, add reconstruction from
//! detail", so additivity is part of the contract; callers pre-zero (or
//! deliberately overlay) the output.

use crate::ExtensionMode;
use crate::err::{UnduletError, try_vec};
use crate::sample::WtSample;

/// Full convolution of the zero-upsampled input with an even-length filter.
///
/// Each input sample feeds two consecutive output slots through the even and
/// odd filter phases; output length is `2N + F - 2`.
pub(crate) fn upsampling_convolution_full<S: WtSample>(
    input: &[S],
    filter: &[S::Real],
    output: &mut [S],
) -> Result<(), UnduletError> {
    let n = input.len();
    let f = filter.len();
    if f < 2 || f % 2 != 0 {
        return Err(UnduletError::BadFilterLength(f));
    }
    if n == 0 {
        return Ok(());
    }

    let mut i = 0usize;
    let mut o = 0usize;
    while i < n && i < f / 2 {
        for j in 0..=i {
            output[o] += input[i - j].mul_real(filter[j * 2]);
            output[o + 1] += input[i - j].mul_real(filter[j * 2 + 1]);
        }
        i += 1;
        o += 2;
    }
    while i < n {
        for j in 0..f / 2 {
            output[o] += input[i - j].mul_real(filter[j * 2]);
            output[o + 1] += input[i - j].mul_real(filter[j * 2 + 1]);
        }
        i += 1;
        o += 2;
    }
    while i < f / 2 {
        for j in i - (n - 1)..=i {
            output[o] += input[i - j].mul_real(filter[j * 2]);
            output[o + 1] += input[i - j].mul_real(filter[j * 2 + 1]);
        }
        i += 1;
        o += 2;
    }
    while i < n + f / 2 {
        for j in i - (n - 1)..f / 2 {
            output[o] += input[i - j].mul_real(filter[j * 2]);
            output[o + 1] += input[i - j].mul_real(filter[j * 2 + 1]);
        }
        i += 1;
        o += 2;
    }
    Ok(())
}

fn upsampling_convolution_valid_sf_periodization<S: WtSample>(
    input: &[S],
    filter: &[S::Real],
    output: &mut [S],
) -> Result<(), UnduletError> {
    let n = input.len();
    let f = filter.len();
    if f % 2 != 0 {
        return Err(UnduletError::BadFilterLength(f));
    }
    if n == 0 {
        return Ok(());
    }

    if n < f / 2 {
        // Coefficient stream shorter than the half-filter: extend it
        // cyclically to the smallest multiple of N covering F/2, run the
        // engine on the extended view and fold the leading 2N slots back.
        // The extended output is 2N-periodic, so the prefix is exact.
        let ext_len = (f / 2).div_ceil(n) * n;
        let mut ext = try_vec![S::zero(); ext_len];
        for (i, dst) in ext.iter_mut().enumerate() {
            *dst = input[i % n];
        }
        let mut scratch = try_vec![S::zero(); 2 * ext_len];
        upsampling_convolution_valid_sf_periodization(&ext, filter, &mut scratch)?;
        for (dst, &src) in output.iter_mut().zip(scratch.iter()).take(2 * n) {
            *dst += src;
        }
        return Ok(());
    }

    let start = f / 4;
    let mut i = start;
    let end = n + start - if (f / 2) % 2 != 0 { 0 } else { 1 };
    let mut o = 0usize;

    if (f / 2) % 2 == 0 {
        // Shift output one element right. This is necessary for perfect
        // reconstruction with the split-phase scheme.

        // i = N-1; even phase goes to output[2N-1], odd phase to output[0]
        let mut j = 0usize;
        while j + 1 <= start {
            let mut k = 0;
            while k < n && j + 1 <= start {
                output[2 * n - 1] += input[k].mul_real(filter[2 * (start - 1 - j)]);
                output[0] += input[k].mul_real(filter[2 * (start - 1 - j) + 1]);
                k += 1;
                j += 1;
            }
        }
        while j <= n + start - 1 && j < f / 2 {
            output[2 * n - 1] += input[n + start - 1 - j].mul_real(filter[2 * j]);
            output[0] += input[n + start - 1 - j].mul_real(filter[2 * j + 1]);
            j += 1;
        }
        while j < f / 2 {
            let mut k = 0;
            while k < n && j < f / 2 {
                output[2 * n - 1] += input[n - 1 - k].mul_real(filter[2 * j]);
                output[0] += input[n - 1 - k].mul_real(filter[2 * j + 1]);
                k += 1;
                j += 1;
            }
        }
        o += 1;
    }

    while i < f / 2 && i < n {
        let mut j = 0usize;
        while j <= i {
            output[o] += input[i - j].mul_real(filter[2 * j]);
            output[o + 1] += input[i - j].mul_real(filter[2 * j + 1]);
            j += 1;
        }
        while j < f / 2 {
            let mut k = 0;
            while k < n && j < f / 2 {
                output[o] += input[n - 1 - k].mul_real(filter[2 * j]);
                output[o + 1] += input[n - 1 - k].mul_real(filter[2 * j + 1]);
                k += 1;
                j += 1;
            }
        }
        i += 1;
        o += 2;
    }

    while i < n {
        for j in 0..f / 2 {
            output[o] += input[i - j].mul_real(filter[2 * j]);
            output[o + 1] += input[i - j].mul_real(filter[2 * j + 1]);
        }
        i += 1;
        o += 2;
    }

    while i < f / 2 && i < end {
        let mut j = 0usize;
        while i - j >= n {
            let mut k = 0;
            while k < n && i - j >= n {
                output[o] += input[k].mul_real(filter[2 * (i - n - j)]);
                output[o + 1] += input[k].mul_real(filter[2 * (i - n - j) + 1]);
                k += 1;
                j += 1;
            }
        }
        while j <= i && j < f / 2 {
            output[o] += input[i - j].mul_real(filter[2 * j]);
            output[o + 1] += input[i - j].mul_real(filter[2 * j + 1]);
            j += 1;
        }
        while j < f / 2 {
            let mut k = 0;
            while k < n && j < f / 2 {
                output[o] += input[n - 1 - k].mul_real(filter[2 * j]);
                output[o + 1] += input[n - 1 - k].mul_real(filter[2 * j + 1]);
                k += 1;
                j += 1;
            }
        }
        i += 1;
        o += 2;
    }

    while i < end {
        let mut j = 0usize;
        while i - j >= n {
            let mut k = 0;
            while k < n && i - j >= n {
                output[o] += input[k].mul_real(filter[2 * (i - n - j)]);
                output[o + 1] += input[k].mul_real(filter[2 * (i - n - j) + 1]);
                k += 1;
                j += 1;
            }
        }
        while j <= i && j < f / 2 {
            output[o] += input[i - j].mul_real(filter[2 * j]);
            output[o + 1] += input[i - j].mul_real(filter[2 * j + 1]);
            j += 1;
        }
        i += 1;
        o += 2;
    }

    Ok(())
}

/// Valid-region convolution with the filter split into even/odd phases,
/// the workhorse of IDWT.
///
/// The filter is conceptually split into `filter[2j]` and `filter[2j + 1]`
/// taps of length `F/2` each; every valid position accumulates both phase
/// sums in lockstep and adds them to two consecutive output slots. Output
/// length is `2N - F + 2` (`2N` under periodization, which also handles
/// coefficient streams shorter than the half-filter).
pub(crate) fn upsampling_convolution_valid_sf<S: WtSample>(
    input: &[S],
    filter: &[S::Real],
    output: &mut [S],
    mode: ExtensionMode,
) -> Result<(), UnduletError> {
    let n = input.len();
    let f = filter.len();

    if mode == ExtensionMode::Periodization {
        return upsampling_convolution_valid_sf_periodization(input, filter, output);
    }
    if f < 2 || f % 2 != 0 {
        return Err(UnduletError::BadFilterLength(f));
    }
    if n < f / 2 {
        return Err(UnduletError::ShapeMismatch {
            dim: 0,
            expected: f / 2,
            got: n,
        });
    }

    // Only the fully-overlapping region: every filter tap sees an input.
    let mut o = 0usize;
    for i in f / 2 - 1..n {
        let mut sum_even = S::zero();
        let mut sum_odd = S::zero();
        for j in 0..f / 2 {
            sum_even += input[i - j].mul_real(filter[j * 2]);
            sum_odd += input[i - j].mul_real(filter[j * 2 + 1]);
        }
        output[o] += sum_even;
        output[o + 1] += sum_odd;
        o += 2;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const HAAR: [f64; 2] = [
        0.7071067811865475244008443621048490393,
        0.7071067811865475244008443621048490393,
    ];

    #[test]
    fn full_upsampling_is_additive() {
        let coeffs = [
            2.121320343559643,
            4.949747468305834,
            7.778174593052023,
            10.606601717798213,
        ];
        let mut out = vec![0.0; crate::lengths::reconstruction_out_len(4, 2)];
        upsampling_convolution_full(&coeffs, &HAAR, &mut out).unwrap();
        let expected = [1.5, 1.5, 3.5, 3.5, 5.5, 5.5, 7.5, 7.5];
        for (got, want) in out.iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
        // a second pass doubles every slot
        upsampling_convolution_full(&coeffs, &HAAR, &mut out).unwrap();
        for (got, want) in out.iter().zip(expected) {
            assert_abs_diff_eq!(*got, 2.0 * want, epsilon = 1e-12);
        }
    }

    #[test]
    fn odd_filter_is_rejected() {
        let mut out = vec![0.0; 8];
        let err = upsampling_convolution_full(&[1.0, 2.0], &[0.5, 0.5, 0.5], &mut out);
        assert_eq!(err, Err(UnduletError::BadFilterLength(3)));
        let err = upsampling_convolution_valid_sf(
            &[1.0, 2.0],
            &[0.5, 0.5, 0.5],
            &mut out,
            crate::ExtensionMode::Periodization,
        );
        assert_eq!(err, Err(UnduletError::BadFilterLength(3)));
    }

    #[test]
    fn valid_sf_rejects_short_input() {
        let mut out = vec![0.0; 4];
        let err = upsampling_convolution_valid_sf(
            &[1.0],
            &[0.5; 4],
            &mut out,
            crate::ExtensionMode::ZeroPad,
        );
        assert_eq!(
            err,
            Err(UnduletError::ShapeMismatch {
                dim: 0,
                expected: 2,
                got: 1
            })
        );
    }
}
