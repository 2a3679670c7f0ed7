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
//! Buffer length arithmetic shared by the kernels and their callers.
//!
//! All functions are total and pure; a zero result means "no valid buffer".

use crate::ExtensionMode;

/// Length of one level of DWT coefficients for a signal of `input_len`
/// filtered with `filter_len` taps under `mode`.
#[inline]
pub const fn dwt_out_len(input_len: usize, filter_len: usize, mode: ExtensionMode) -> usize {
    if input_len < 1 || filter_len < 1 {
        return 0;
    }
    match mode {
        ExtensionMode::Periodization => input_len / 2 + (input_len % 2),
        _ => (input_len + filter_len - 1) / 2,
    }
}

/// Length of a direct reconstruction (full convolution of upsampled
/// coefficients) from `coeffs_len` coefficients.
#[inline]
pub const fn reconstruction_out_len(coeffs_len: usize, filter_len: usize) -> usize {
    if coeffs_len < 1 || filter_len < 1 {
        return 0;
    }
    2 * coeffs_len + filter_len - 2
}

/// Length of an IDWT reconstruction from `coeffs_len` coefficients
/// (`2C - L + 2`, saturating to zero when the stream is shorter than the
/// filter overlap).
#[inline]
pub const fn idwt_out_len(coeffs_len: usize, filter_len: usize, mode: ExtensionMode) -> usize {
    match mode {
        ExtensionMode::Periodization => 2 * coeffs_len,
        _ => (2 * coeffs_len + 2).saturating_sub(filter_len),
    }
}

/// SWT output length equals the input length at every level.
#[inline]
pub const fn swt_out_len(input_len: usize) -> usize {
    input_len
}

/// Maximum useful DWT decomposition level: the last level at which at least
/// one coefficient is still driven by the data rather than the extension.
#[inline]
pub const fn dwt_max_level(input_len: usize, filter_len: usize) -> usize {
    if filter_len <= 1 || input_len < filter_len - 1 {
        return 0;
    }
    (input_len / (filter_len - 1)).ilog2() as usize
}

/// Maximum useful SWT decomposition level: how many times `input_len` is
/// divisible by two.
#[inline]
pub const fn swt_max_level(input_len: usize) -> usize {
    if input_len == 0 {
        return 0;
    }
    input_len.trailing_zeros() as usize
}
