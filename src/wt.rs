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
//! Single-level 1-D transforms over contiguous spans.

use crate::conv::{downsampling_convolution, downsampling_convolution_periodization};
use crate::err::{UnduletError, try_vec};
use crate::lengths::{dwt_out_len, idwt_out_len, reconstruction_out_len, swt_max_level, swt_out_len};
use crate::sample::{WtReal, WtSample};
use crate::upconv::{upsampling_convolution_full, upsampling_convolution_valid_sf};
use num_traits::Zero;
use crate::wavelets::DiscreteWavelet;
use crate::ExtensionMode;
use num_traits::AsPrimitive;

#[inline]
fn check_output_len(expected: usize, got: usize) -> Result<(), UnduletError> {
    if expected != got {
        return Err(UnduletError::InvalidOutputLength { expected, got });
    }
    Ok(())
}

/// Single-level DWT approximation: decompose `input` with the low-pass
/// analysis filter, downsampling by two.
pub fn dec_a<S: WtSample>(
    input: &[S],
    wavelet: &DiscreteWavelet,
    output: &mut [S],
    mode: ExtensionMode,
) -> Result<(), UnduletError>
where
    usize: AsPrimitive<S::Real>,
{
    let bank = S::Real::bank(wavelet);
    check_output_len(
        dwt_out_len(input.len(), wavelet.dec_len(), mode),
        output.len(),
    )?;
    downsampling_convolution(input, &bank.dec_lo, output, 2, mode);
    Ok(())
}

/// Single-level DWT detail: decompose `input` with the high-pass analysis
/// filter, downsampling by two.
pub fn dec_d<S: WtSample>(
    input: &[S],
    wavelet: &DiscreteWavelet,
    output: &mut [S],
    mode: ExtensionMode,
) -> Result<(), UnduletError>
where
    usize: AsPrimitive<S::Real>,
{
    let bank = S::Real::bank(wavelet);
    check_output_len(
        dwt_out_len(input.len(), wavelet.dec_len(), mode),
        output.len(),
    )?;
    downsampling_convolution(input, &bank.dec_hi, output, 2, mode);
    Ok(())
}

/// Direct reconstruction from an approximation coefficient stream with the
/// low-pass synthesis filter. Adds into `output`; the caller pre-zeros it
/// (or overlays several passes).
pub fn rec_a<S: WtSample>(
    coeffs_a: &[S],
    wavelet: &DiscreteWavelet,
    output: &mut [S],
) -> Result<(), UnduletError> {
    let bank = S::Real::bank(wavelet);
    check_output_len(
        reconstruction_out_len(coeffs_a.len(), wavelet.rec_len()),
        output.len(),
    )?;
    upsampling_convolution_full(coeffs_a, &bank.rec_lo, output)
}

/// Direct reconstruction from a detail coefficient stream with the
/// high-pass synthesis filter. Adds into `output`.
pub fn rec_d<S: WtSample>(
    coeffs_d: &[S],
    wavelet: &DiscreteWavelet,
    output: &mut [S],
) -> Result<(), UnduletError> {
    let bank = S::Real::bank(wavelet);
    check_output_len(
        reconstruction_out_len(coeffs_d.len(), wavelet.rec_len()),
        output.len(),
    )?;
    upsampling_convolution_full(coeffs_d, &bank.rec_hi, output)
}

/// Inverse DWT from approximation and detail streams, either of which may be
/// absent (but not both).
///
/// The output is zeroed first, then the low-pass synthesis pass runs over the
/// approximation and the high-pass pass accumulates over it.
pub fn idwt<S: WtSample>(
    coeffs_a: Option<&[S]>,
    coeffs_d: Option<&[S]>,
    wavelet: &DiscreteWavelet,
    output: &mut [S],
    mode: ExtensionMode,
) -> Result<(), UnduletError> {
    let input_len = match (coeffs_a, coeffs_d) {
        (Some(a), Some(d)) => {
            if a.len() != d.len() {
                return Err(UnduletError::ShapeMismatch {
                    dim: 0,
                    expected: a.len(),
                    got: d.len(),
                });
            }
            a.len()
        }
        (Some(a), None) => a.len(),
        (None, Some(d)) => d.len(),
        (None, None) => return Err(UnduletError::NullInput),
    };
    check_output_len(
        idwt_out_len(input_len, wavelet.rec_len(), mode),
        output.len(),
    )?;

    // the upsampling convolution adds into the output
    output.fill(S::zero());

    let bank = S::Real::bank(wavelet);
    if let Some(a) = coeffs_a {
        upsampling_convolution_valid_sf(a, &bank.rec_lo, output, mode)?;
    }
    if let Some(d) = coeffs_d {
        upsampling_convolution_valid_sf(d, &bank.rec_hi, output, mode)?;
    }
    Ok(())
}

/// One SWT convolution pass: level checks, à-trous filter expansion, and the
/// periodization kernel with the matching hole stride.
fn swt<S: WtSample>(
    input: &[S],
    filter: &[S::Real],
    output: &mut [S],
    level: usize,
) -> Result<(), UnduletError> {
    let max = swt_max_level(input.len());
    if level < 1 || level > max {
        return Err(UnduletError::LevelOutOfRange { level, max });
    }
    check_output_len(swt_out_len(input.len()), output.len())?;

    if level > 1 {
        // dilate the filter: original taps spaced 2^(level-1) apart; the
        // kernel's fstep walk never touches the inserted zeros
        let fstep = 1usize << (level - 1);
        let mut e_filter = try_vec![S::Real::zero(); filter.len() << (level - 1)];
        for (i, &tap) in filter.iter().enumerate() {
            e_filter[i << (level - 1)] = tap;
        }
        downsampling_convolution_periodization(input, &e_filter, output, 1, fstep);
    } else {
        downsampling_convolution_periodization(input, filter, output, 1, 1);
    }
    Ok(())
}

/// SWT approximation at `level` (input is the signal for level 1, or the
/// approximation from the previous level).
pub fn swt_a<S: WtSample>(
    input: &[S],
    wavelet: &DiscreteWavelet,
    output: &mut [S],
    level: usize,
) -> Result<(), UnduletError> {
    let bank = S::Real::bank(wavelet);
    swt(input, &bank.dec_lo, output, level)
}

/// SWT detail at `level`.
pub fn swt_d<S: WtSample>(
    input: &[S],
    wavelet: &DiscreteWavelet,
    output: &mut [S],
    level: usize,
) -> Result<(), UnduletError> {
    let bank = S::Real::bank(wavelet);
    swt(input, &bank.dec_hi, output, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExtensionMode::{Periodization, ZeroPad};
    use crate::wavelets::WaveletFamily;
    use approx::assert_abs_diff_eq;

    fn haar() -> DiscreteWavelet {
        DiscreteWavelet::from_family(WaveletFamily::Haar, 0).unwrap()
    }

    #[test]
    fn idwt_requires_matching_coefficient_lengths() {
        let w = haar();
        let a = [1.0f64, 2.0, 3.0];
        let d = [1.0f64, 2.0];
        let mut out = vec![0.0; 6];
        assert_eq!(
            idwt(Some(&a[..]), Some(&d[..]), &w, &mut out, ZeroPad),
            Err(UnduletError::ShapeMismatch {
                dim: 0,
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn idwt_requires_some_input() {
        let w = haar();
        let mut out = vec![0.0f64; 4];
        assert_eq!(
            idwt(None, None, &w, &mut out, ZeroPad),
            Err(UnduletError::NullInput)
        );
    }

    #[test]
    fn output_length_is_enforced() {
        let w = haar();
        let x = [1.0f64, 2.0, 3.0, 4.0];
        let mut bad = vec![0.0; 3];
        assert_eq!(
            dec_a(&x, &w, &mut bad, Periodization),
            Err(UnduletError::InvalidOutputLength {
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn swt_level_bounds() {
        let w = haar();
        let x = [1.0f64; 8];
        let mut out = vec![0.0; 8];
        assert_eq!(
            swt_a(&x, &w, &mut out, 0),
            Err(UnduletError::LevelOutOfRange { level: 0, max: 3 })
        );
        assert_eq!(
            swt_a(&x, &w, &mut out, 4),
            Err(UnduletError::LevelOutOfRange { level: 4, max: 3 })
        );
        swt_a(&x, &w, &mut out, 3).unwrap();
    }

    #[test]
    fn rec_a_matches_reference() {
        let w = haar();
        let coeffs = [
            2.121320343559643,
            4.949747468305834,
            7.778174593052023,
            10.606601717798213,
        ];
        let mut out = vec![0.0f64; 8];
        rec_a(&coeffs, &w, &mut out).unwrap();
        let expected = [1.5, 1.5, 3.5, 3.5, 5.5, 5.5, 7.5, 7.5];
        for (got, want) in out.iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }
}
