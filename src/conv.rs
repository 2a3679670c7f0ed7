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
//! Downsampling convolution with on-demand boundary extension.
//!
//! The general scheme is `output[o] = sum(filter[j] * input[i - j])` where
//! `o`, `i` and `j` progress at different rates. Virtual samples outside
//! `[0, N)` are computed on demand from the extension mode, in four phases:
//!
//! 1. filter extends past the signal on the left,
//! 2. filter completely contained within the signal,
//! 3. filter extends past the signal on both sides (only if `F > N`),
//! 4. filter extends past the signal on the right.
//!
//! [`ExtensionMode::Periodization`] produces a different output length, so it
//! lives in a separate kernel which also understands the à-trous filter
//! stride used by the multi-level SWT.

use crate::ExtensionMode;
use crate::sample::WtSample;
use num_traits::AsPrimitive;

/// Finish a partial sum whose remaining filter taps `j..F` hang past the
/// left signal edge, drawing virtual samples from the extension mode.
#[inline]
fn extend_left<S: WtSample>(
    mut sum: S,
    mut j: usize,
    input: &[S],
    filter: &[S::Real],
    mode: ExtensionMode,
) -> S
where
    usize: AsPrimitive<S::Real>,
{
    let n = input.len();
    let f = filter.len();
    match mode {
        ExtensionMode::Symmetric => {
            while j < f {
                let mut k = 0;
                while k < n && j < f {
                    sum += input[k].mul_real(filter[j]);
                    j += 1;
                    k += 1;
                }
                let mut k = 0;
                while k < n && j < f {
                    sum += input[n - 1 - k].mul_real(filter[j]);
                    k += 1;
                    j += 1;
                }
            }
        }
        ExtensionMode::AntiSymmetric => {
            // half-sample anti-symmetric
            while j < f {
                let mut k = 0;
                while k < n && j < f {
                    sum -= input[k].mul_real(filter[j]);
                    j += 1;
                    k += 1;
                }
                let mut k = 0;
                while k < n && j < f {
                    sum += input[n - 1 - k].mul_real(filter[j]);
                    k += 1;
                    j += 1;
                }
            }
        }
        ExtensionMode::Reflect => {
            while j < f {
                let mut k = 1;
                while k < n && j < f {
                    sum += input[k].mul_real(filter[j]);
                    j += 1;
                    k += 1;
                }
                let mut k = 1;
                while k < n && j < f {
                    sum += input[n - 1 - k].mul_real(filter[j]);
                    k += 1;
                    j += 1;
                }
            }
        }
        ExtensionMode::AntiReflect => {
            // whole-sample anti-symmetric: each traversal reflects about the
            // running edge value, so successive periods keep drifting by the
            // edge-to-edge difference
            let mut le = input[0];
            let mut tmp = S::zero();
            while j < f {
                let mut k = 1;
                while k < n && j < f {
                    tmp = le - (input[k] - input[0]);
                    sum += tmp.mul_real(filter[j]);
                    j += 1;
                    k += 1;
                }
                le = tmp;
                let mut k = 1;
                while k < n && j < f {
                    tmp = le + (input[n - 1 - k] - input[n - 1]);
                    sum += tmp.mul_real(filter[j]);
                    j += 1;
                    k += 1;
                }
                le = tmp;
            }
        }
        ExtensionMode::ConstantEdge => {
            while j < f {
                sum += input[0].mul_real(filter[j]);
                j += 1;
            }
        }
        ExtensionMode::Smooth => {
            let mut k = 1usize;
            while j < f {
                sum += (input[0] + (input[0] - input[1]).mul_real(k.as_())).mul_real(filter[j]);
                j += 1;
                k += 1;
            }
        }
        ExtensionMode::Periodic => {
            while j < f {
                let mut k = 0;
                while k < n && j < f {
                    sum += input[n - 1 - k].mul_real(filter[j]);
                    k += 1;
                    j += 1;
                }
            }
        }
        ExtensionMode::ZeroPad | ExtensionMode::Periodization => {}
    }
    sum
}

/// Accumulate the virtual-sample contributions for taps reaching past the
/// right signal edge of output position `i`, returning the partial sum and
/// the first filter index that maps back into the signal.
#[inline]
fn extend_right<S: WtSample>(
    mut sum: S,
    i: usize,
    input: &[S],
    filter: &[S::Real],
    mode: ExtensionMode,
) -> (S, usize)
where
    usize: AsPrimitive<S::Real>,
{
    let n = input.len();
    let mut j = 0usize;
    match mode {
        ExtensionMode::Symmetric => {
            // iterate over the filter in reverse to process elements away
            // from the data, which pins the first virtual sample to N-1
            while i - j >= n {
                let mut k = 0;
                while k < n && i - j >= n {
                    sum += input[n - 1 - k].mul_real(filter[i - n - j]);
                    j += 1;
                    k += 1;
                }
                let mut k = 0;
                while k < n && i - j >= n {
                    sum += input[k].mul_real(filter[i - n - j]);
                    j += 1;
                    k += 1;
                }
            }
        }
        ExtensionMode::AntiSymmetric => {
            // half-sample anti-symmetric
            while i - j >= n {
                let mut k = 0;
                while k < n && i - j >= n {
                    sum -= input[n - 1 - k].mul_real(filter[i - n - j]);
                    j += 1;
                    k += 1;
                }
                let mut k = 0;
                while k < n && i - j >= n {
                    sum += input[k].mul_real(filter[i - n - j]);
                    j += 1;
                    k += 1;
                }
            }
        }
        ExtensionMode::Reflect => {
            while i - j >= n {
                let mut k = 1;
                while k < n && i - j >= n {
                    sum += input[n - 1 - k].mul_real(filter[i - n - j]);
                    j += 1;
                    k += 1;
                }
                let mut k = 1;
                while k < n && i - j >= n {
                    sum += input[k].mul_real(filter[i - n - j]);
                    j += 1;
                    k += 1;
                }
            }
        }
        ExtensionMode::AntiReflect => {
            // whole-sample anti-symmetric, mirrored about the right edge
            let mut re = input[n - 1];
            let mut tmp = S::zero();
            while i - j >= n {
                let mut k = 1;
                while k < n && i - j >= n {
                    tmp = re - (input[n - 1 - k] - input[n - 1]);
                    sum += tmp.mul_real(filter[i - n - j]);
                    j += 1;
                    k += 1;
                }
                re = tmp;
                let mut k = 1;
                while k < n && i - j >= n {
                    tmp = re + (input[k] - input[0]);
                    sum += tmp.mul_real(filter[i - n - j]);
                    j += 1;
                    k += 1;
                }
                re = tmp;
            }
        }
        ExtensionMode::ConstantEdge => {
            while i - j >= n {
                sum += input[n - 1].mul_real(filter[j]);
                j += 1;
            }
        }
        ExtensionMode::Smooth => {
            let mut k = i - n + 1;
            while i - j >= n {
                sum += (input[n - 1] + (input[n - 1] - input[n - 2]).mul_real(k.as_()))
                    .mul_real(filter[j]);
                j += 1;
                k -= 1;
            }
        }
        ExtensionMode::Periodic => {
            while i - j >= n {
                let mut k = 0;
                while k < n && i - j >= n {
                    sum += input[k].mul_real(filter[i - n - j]);
                    j += 1;
                    k += 1;
                }
            }
        }
        ExtensionMode::ZeroPad | ExtensionMode::Periodization => {
            j = i - n + 1;
        }
    }
    (sum, j)
}

/// Convolution of `input` with `filter` keeping every `step`-th output,
/// with virtual boundary samples supplied by `mode`.
///
/// The output span must hold exactly
/// [`dwt_out_len`](crate::lengths::dwt_out_len)`(N, F, mode)` elements for
/// `step == 2` (callers enforce this).
///
/// `Smooth`, `Reflect` and `AntiReflect` degenerate to `ConstantEdge` for
/// signals shorter than two samples; this is a documented contract of the
/// modes, not a fallback.
pub(crate) fn downsampling_convolution<S: WtSample>(
    input: &[S],
    filter: &[S::Real],
    output: &mut [S],
    step: usize,
    mode: ExtensionMode,
) where
    usize: AsPrimitive<S::Real>,
{
    let n = input.len();
    let f = filter.len();
    if n == 0 || f == 0 {
        return;
    }

    if mode == ExtensionMode::Periodization {
        return downsampling_convolution_periodization(input, filter, output, step, 1);
    }
    // Smooth has no derivative to extrapolate off a single sample, and the
    // whole-sample reflections have nothing besides the edge to mirror; all
    // three collapse to the constant extension for n < 2.
    let mode = if n < 2
        && matches!(
            mode,
            ExtensionMode::Smooth | ExtensionMode::Reflect | ExtensionMode::AntiReflect
        ) {
        ExtensionMode::ConstantEdge
    } else {
        mode
    };

    let mut i = step - 1;
    let mut o = 0usize;

    // left boundary overhang
    while i < f && i < n {
        let mut sum = S::zero();
        for j in 0..=i {
            sum += input[i - j].mul_real(filter[j]);
        }
        output[o] = extend_left(sum, i + 1, input, filter, mode);
        i += step;
        o += 1;
    }

    // center (if input equal or wider than filter: N >= F)
    while i < n {
        let mut sum = S::zero();
        for j in 0..f {
            sum += input[i - j].mul_real(filter[j]);
        }
        output[o] = sum;
        i += step;
        o += 1;
    }

    // center (if filter is wider than input: F > N)
    while i < f {
        let (mut sum, mut j) = extend_right(S::zero(), i, input, filter, mode);
        while j <= i {
            sum += input[i - j].mul_real(filter[j]);
            j += 1;
        }
        output[o] = extend_left(sum, j, input, filter, mode);
        i += step;
        o += 1;
    }

    // right boundary overhang
    while i < n + f - 1 {
        let (mut sum, mut j) = extend_right(S::zero(), i, input, filter, mode);
        while j < f {
            sum += input[i - j].mul_real(filter[j]);
            j += 1;
        }
        output[o] = sum;
        i += step;
        o += 1;
    }
}

/// Periodization-mode downsampling convolution.
///
/// The signal is treated as circular with an implicit pad of one trailing
/// edge sample when `N` is odd, and the output shrinks to `ceil(N / step)`.
/// `fstep` is the à-trous hole spacing: for a level-`l` SWT filter expanded
/// with `2^(l-1) - 1` zeros between taps, passing `fstep = 2^(l-1)` walks
/// only the non-zero taps.
pub(crate) fn downsampling_convolution_periodization<S: WtSample>(
    input: &[S],
    filter: &[S::Real],
    output: &mut [S],
    step: usize,
    fstep: usize,
) {
    let n = input.len();
    let f = filter.len();
    if n == 0 || f == 0 {
        return;
    }
    let padding = (step - (n % step)) % step;

    let mut i = f / 2;
    let mut o = 0usize;

    while i < f && i < n {
        let mut sum = S::zero();
        let mut j = 0;
        while j <= i {
            sum += input[i - j].mul_real(filter[j]);
            j += fstep;
        }
        let k_start = if fstep > 1 { j - (i + 1) } else { 0 };
        while j < f {
            let mut k = k_start;
            while k < padding && j < f {
                sum += input[n - 1].mul_real(filter[j]);
                k += fstep;
                j += fstep;
            }
            let mut k = k_start;
            while k < n && j < f {
                sum += input[n - 1 - k].mul_real(filter[j]);
                k += fstep;
                j += fstep;
            }
        }
        output[o] = sum;
        i += step;
        o += 1;
    }

    while i < n {
        let mut sum = S::zero();
        let mut j = 0;
        while j < f {
            sum += input[i - j].mul_real(filter[j]);
            j += fstep;
        }
        output[o] = sum;
        i += step;
        o += 1;
    }

    while i < f && i < n + f / 2 {
        let mut sum = S::zero();
        let mut j = 0;
        while i - j >= n {
            // walking the wrapped head of the signal; fstep is not applied
            // here, zero taps of an expanded filter contribute nothing
            let mut k = 0;
            while k < padding && i - j >= n {
                sum += input[n - 1].mul_real(filter[i - n - j]);
                k += 1;
                j += 1;
            }
            let mut k = 0;
            while k < n && i - j >= n {
                sum += input[k].mul_real(filter[i - n - j]);
                k += 1;
                j += 1;
            }
        }
        if fstep > 1 {
            j += (fstep - j % fstep) % fstep; // move to next non-zero entry
        }
        while j <= i {
            sum += input[i - j].mul_real(filter[j]);
            j += fstep;
        }
        let k_start = if fstep > 1 { j - (i + 1) } else { 0 };
        while j < f {
            let mut k = k_start;
            while k < padding && j < f {
                sum += input[n - 1].mul_real(filter[j]);
                k += fstep;
                j += fstep;
            }
            let mut k = k_start;
            while k < n && j < f {
                sum += input[n - 1 - k].mul_real(filter[j]);
                k += fstep;
                j += fstep;
            }
        }
        output[o] = sum;
        i += step;
        o += 1;
    }

    while i < n + f / 2 {
        let mut sum = S::zero();
        let mut j = 0;
        while i - j >= n {
            let mut k = 0;
            while k < padding && i - j >= n {
                sum += input[n - 1].mul_real(filter[i - n - j]);
                k += 1;
                j += 1;
            }
            let mut k = 0;
            while k < n && i - j >= n {
                sum += input[k].mul_real(filter[i - n - j]);
                k += 1;
                j += 1;
            }
        }
        if fstep > 1 {
            j += (fstep - j % fstep) % fstep;
        }
        while j < f {
            sum += input[i - j].mul_real(filter[j]);
            j += fstep;
        }
        output[o] = sum;
        i += step;
        o += 1;
    }
}
