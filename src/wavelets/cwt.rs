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
//! Analytic evaluators for the continuous families.
//!
//! Each evaluator samples the mother wavelet over the caller's grid. The
//! normalization constants (the integer under the square root per Gaussian
//! derivative order) are part of the family definition and must not be
//! re-derived.

use crate::err::UnduletError;
use crate::sample::WtReal;
use crate::wavelets::{ContinuousWavelet, WaveletFamily};
use num_traits::AsPrimitive;

#[inline]
fn c<R: WtReal>(v: f64) -> R
where
    f64: AsPrimitive<R>,
{
    v.as_()
}

/// Gaussian derivative of the given order: the derivative polynomial times
/// the Gaussian envelope, L2-normalized by `sqrt(norm * sqrt(pi / 2))`.
fn gaus<R: WtReal>(order: usize, grid: &[R], out: &mut [R])
where
    f64: AsPrimitive<R>,
{
    let half_pi_root = (R::PI / c(2.0)).sqrt();
    let norm: R = match order {
        1 => c::<R>(1.0),
        2 => c(3.0),
        3 => c(15.0),
        4 => c(105.0),
        5 => c(945.0),
        6 => c(10395.0),
        7 => c(135135.0),
        _ => c(2027025.0),
    };
    let scale = (norm * half_pi_root).sqrt();
    for (dst, &t) in out.iter_mut().zip(grid.iter()) {
        let t2 = t * t;
        let poly = match order {
            1 => -c::<R>(2.0) * t,
            2 => c::<R>(2.0) * (c::<R>(2.0) * t2 - c(1.0)),
            3 => -c::<R>(4.0) * (c::<R>(2.0) * t2 * t - c::<R>(3.0) * t),
            4 => c::<R>(4.0) * (c::<R>(4.0) * t2 * t2 - c::<R>(12.0) * t2 + c(3.0)),
            5 => {
                c::<R>(8.0)
                    * (-c::<R>(4.0) * t2 * t2 * t + c::<R>(20.0) * t2 * t - c::<R>(15.0) * t)
            }
            6 => {
                c::<R>(8.0)
                    * (c::<R>(8.0) * t2 * t2 * t2 - c::<R>(60.0) * t2 * t2
                        + c::<R>(90.0) * t2
                        - c(15.0))
            }
            7 => {
                c::<R>(16.0)
                    * (-c::<R>(8.0) * t2 * t2 * t2 * t + c::<R>(84.0) * t2 * t2 * t
                        - c::<R>(210.0) * t2 * t
                        + c::<R>(105.0) * t)
            }
            _ => {
                c::<R>(16.0)
                    * (c::<R>(16.0) * t2 * t2 * t2 * t2 - c::<R>(224.0) * t2 * t2 * t2
                        + c::<R>(840.0) * t2 * t2
                        - c::<R>(840.0) * t2
                        + c(105.0))
            }
        };
        *dst = poly * (-t2).exp() / scale;
    }
}

/// Complex Gaussian derivative: polynomial-in-`t` combinations of `cos t`
/// and `sin t` under a Gaussian envelope, with the family's tabulated
/// normalization integer. Order 3 is the one member with a first-power
/// `exp(-t)` envelope; every other order decays as `exp(-t^2)`.
fn cgau<R: WtReal>(order: usize, grid: &[R], out_re: &mut [R], out_im: &mut [R])
where
    f64: AsPrimitive<R>,
{
    let half_pi_root = (R::PI / c(2.0)).sqrt();
    let norm: R = match order {
        1 => c::<R>(2.0),
        2 => c(10.0),
        3 => c(76.0),
        4 => c(764.0),
        5 => c(9496.0),
        6 => c(140152.0),
        7 => c(2390480.0),
        _ => c(46206736.0),
    };
    let scale = (norm * half_pi_root).sqrt();
    for ((re, im), &t) in out_re.iter_mut().zip(out_im.iter_mut()).zip(grid.iter()) {
        let (sn, cs) = t.sincos();
        // order 3 keeps its first-power envelope
        let env = if order == 3 {
            (-t).exp() / scale
        } else {
            (-(t * t)).exp() / scale
        };
        let t2 = t * t;
        let (pr, pi) = match order {
            1 => (
                -c::<R>(2.0) * t * cs - sn,
                c::<R>(2.0) * t * sn - cs,
            ),
            2 => (
                c::<R>(4.0) * t2 * cs + c::<R>(4.0) * t * sn - c::<R>(3.0) * cs,
                -c::<R>(4.0) * t2 * sn + c::<R>(4.0) * t * cs + c::<R>(3.0) * sn,
            ),
            3 => (
                -c::<R>(8.0) * t2 * t * cs - c::<R>(12.0) * t2 * sn
                    + c::<R>(18.0) * t * cs
                    + c::<R>(7.0) * sn,
                c::<R>(8.0) * t2 * t * sn - c::<R>(12.0) * t2 * cs - c::<R>(18.0) * t * sn
                    + c::<R>(7.0) * cs,
            ),
            4 => (
                c::<R>(16.0) * t2 * t2 * cs + c::<R>(32.0) * t2 * t * sn
                    - c::<R>(72.0) * t2 * cs
                    - c::<R>(56.0) * t * sn
                    + c::<R>(25.0) * cs,
                -c::<R>(16.0) * t2 * t2 * sn + c::<R>(32.0) * t2 * t * cs
                    + c::<R>(72.0) * t2 * sn
                    - c::<R>(56.0) * t * cs
                    - c::<R>(25.0) * sn,
            ),
            5 => (
                -c::<R>(32.0) * t2 * t2 * t * cs - c::<R>(80.0) * t2 * t2 * sn
                    + c::<R>(240.0) * t2 * t * cs
                    + c::<R>(280.0) * t2 * sn
                    - c::<R>(250.0) * t * cs
                    - c::<R>(81.0) * sn,
                c::<R>(32.0) * t2 * t2 * t * sn - c::<R>(80.0) * t2 * t2 * cs
                    - c::<R>(240.0) * t2 * t * sn
                    + c::<R>(280.0) * t2 * cs
                    + c::<R>(250.0) * t * sn
                    - c::<R>(81.0) * cs,
            ),
            6 => (
                c::<R>(64.0) * t2 * t2 * t2 * cs + c::<R>(192.0) * t2 * t2 * t * sn
                    - c::<R>(720.0) * t2 * t2 * cs
                    - c::<R>(1120.0) * t2 * t * sn
                    + c::<R>(1500.0) * t2 * cs
                    + c::<R>(972.0) * t * sn
                    - c::<R>(331.0) * cs,
                -c::<R>(64.0) * t2 * t2 * t2 * sn + c::<R>(192.0) * t2 * t2 * t * cs
                    + c::<R>(720.0) * t2 * t2 * sn
                    - c::<R>(1120.0) * t2 * t * cs
                    - c::<R>(1500.0) * t2 * sn
                    + c::<R>(972.0) * t * cs
                    + c::<R>(331.0) * sn,
            ),
            7 => (
                -c::<R>(128.0) * t2 * t2 * t2 * t * cs - c::<R>(448.0) * t2 * t2 * t2 * sn
                    + c::<R>(2016.0) * t2 * t2 * t * cs
                    + c::<R>(3920.0) * t2 * t2 * sn
                    - c::<R>(7000.0) * t2 * t * cs
                    - c::<R>(6804.0) * t2 * sn
                    + c::<R>(4634.0) * t * cs
                    + c::<R>(1303.0) * sn,
                c::<R>(128.0) * t2 * t2 * t2 * t * sn - c::<R>(448.0) * t2 * t2 * t2 * cs
                    - c::<R>(2016.0) * t2 * t2 * t * sn
                    + c::<R>(3920.0) * t2 * t2 * cs
                    + c::<R>(7000.0) * t2 * t * sn
                    - c::<R>(6804.0) * t2 * cs
                    - c::<R>(4634.0) * t * sn
                    + c::<R>(1303.0) * cs,
            ),
            _ => (
                c::<R>(256.0) * t2 * t2 * t2 * t2 * cs + c::<R>(1024.0) * t2 * t2 * t2 * t * sn
                    - c::<R>(5376.0) * t2 * t2 * t2 * cs
                    - c::<R>(12544.0) * t2 * t2 * t * sn
                    + c::<R>(28000.0) * t2 * t2 * cs
                    + c::<R>(36288.0) * t2 * t * sn
                    - c::<R>(37072.0) * t2 * cs
                    - c::<R>(20848.0) * t * sn
                    + c::<R>(5937.0) * cs,
                -c::<R>(256.0) * t2 * t2 * t2 * t2 * sn + c::<R>(1024.0) * t2 * t2 * t2 * t * cs
                    + c::<R>(5376.0) * t2 * t2 * t2 * sn
                    - c::<R>(12544.0) * t2 * t2 * t * cs
                    - c::<R>(28000.0) * t2 * t2 * sn
                    + c::<R>(36288.0) * t2 * t * cs
                    + c::<R>(37072.0) * t2 * sn
                    - c::<R>(20848.0) * t * cs
                    - c::<R>(5937.0) * sn,
            ),
        };
        *re = pr * env;
        *im = pi * env;
    }
}

fn mexh<R: WtReal>(grid: &[R], out: &mut [R])
where
    f64: AsPrimitive<R>,
{
    // 2 / (sqrt(3) * pi^(1/4))
    let scale = c::<R>(2.0) / (c::<R>(3.0).sqrt() * R::PI.sqrt().sqrt());
    for (dst, &t) in out.iter_mut().zip(grid.iter()) {
        let t2 = t * t;
        *dst = (c::<R>(1.0) - t2) * (-t2 / c(2.0)).exp() * scale;
    }
}

fn morl<R: WtReal>(grid: &[R], out: &mut [R])
where
    f64: AsPrimitive<R>,
{
    for (dst, &t) in out.iter_mut().zip(grid.iter()) {
        let (_, cs) = (c::<R>(5.0) * t).sincos();
        *dst = cs * (-(t * t) / c(2.0)).exp();
    }
}

fn shan<R: WtReal>(fb: R, fc: R, grid: &[R], out_re: &mut [R], out_im: &mut [R])
where
    f64: AsPrimitive<R>,
{
    let root_fb = fb.sqrt();
    for ((re, im), &t) in out_re.iter_mut().zip(out_im.iter_mut()).zip(grid.iter()) {
        let (sn, cs) = (R::TWO_PI * fc * t).sincos();
        let mut r = cs * root_fb;
        let mut i = sn * root_fb;
        if t != R::zero() {
            let arg = t * fb * R::PI;
            let (sinc_n, _) = arg.sincos();
            let sinc = sinc_n / arg;
            r = r * sinc;
            i = i * sinc;
        }
        *re = r;
        *im = i;
    }
}

fn fbsp<R: WtReal>(m: usize, fb: R, fc: R, grid: &[R], out_re: &mut [R], out_im: &mut [R])
where
    f64: AsPrimitive<R>,
    usize: AsPrimitive<R>,
{
    let root_fb = fb.sqrt();
    let order: R = m.as_();
    for ((re, im), &t) in out_re.iter_mut().zip(out_im.iter_mut()).zip(grid.iter()) {
        let (sn, cs) = (R::TWO_PI * fc * t).sincos();
        let mut r = cs * root_fb;
        let mut i = sn * root_fb;
        if t != R::zero() {
            let arg = t * fb * R::PI / order;
            let (sinc_n, _) = arg.sincos();
            let sinc = (sinc_n / arg).pow(order);
            r = r * sinc;
            i = i * sinc;
        }
        *re = r;
        *im = i;
    }
}

fn cmor<R: WtReal>(fb: R, fc: R, grid: &[R], out_re: &mut [R], out_im: &mut [R])
where
    f64: AsPrimitive<R>,
{
    let scale = (R::PI * fb).sqrt();
    for ((re, im), &t) in out_re.iter_mut().zip(out_im.iter_mut()).zip(grid.iter()) {
        let (sn, cs) = (R::TWO_PI * fc * t).sincos();
        let env = (-(t * t) / fb).exp() / scale;
        *re = cs * env;
        *im = sn * env;
    }
}

pub(crate) fn psi<R: WtReal>(
    wavelet: &ContinuousWavelet,
    grid: &[R],
    out_re: &mut [R],
    out_im: Option<&mut [R]>,
) -> Result<(), UnduletError>
where
    f64: AsPrimitive<R>,
    usize: AsPrimitive<R>,
{
    if out_re.len() != grid.len() {
        return Err(UnduletError::InvalidOutputLength {
            expected: grid.len(),
            got: out_re.len(),
        });
    }
    if wavelet.is_complex() {
        let out_im = out_im.ok_or(UnduletError::NullInput)?;
        if out_im.len() != grid.len() {
            return Err(UnduletError::InvalidOutputLength {
                expected: grid.len(),
                got: out_im.len(),
            });
        }
        let fb: R = wavelet.bandwidth_frequency().as_();
        let fc: R = wavelet.center_frequency().as_();
        match wavelet.family() {
            WaveletFamily::ComplexGaussian => cgau(wavelet.order(), grid, out_re, out_im),
            WaveletFamily::Shannon => shan(fb, fc, grid, out_re, out_im),
            WaveletFamily::FrequencyBSpline => {
                fbsp(wavelet.fbsp_order(), fb, fc, grid, out_re, out_im)
            }
            WaveletFamily::ComplexMorlet => cmor(fb, fc, grid, out_re, out_im),
            family => {
                return Err(UnduletError::UnknownWavelet(format!("{family:?}")));
            }
        }
    } else {
        match wavelet.family() {
            WaveletFamily::Gaussian => gaus(wavelet.order(), grid, out_re),
            WaveletFamily::MexicanHat => mexh(grid, out_re),
            WaveletFamily::Morlet => morl(grid, out_re),
            family => {
                return Err(UnduletError::UnknownWavelet(format!("{family:?}")));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavelets::ContinuousWavelet;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mexh_peak_at_zero() {
        let w = ContinuousWavelet::from_family(WaveletFamily::MexicanHat, 0).unwrap();
        let grid = [-1.0f64, 0.0, 1.0];
        let mut out = [0.0f64; 3];
        w.psi(&grid, &mut out, None).unwrap();
        // 2 / (sqrt(3) * pi^(1/4))
        assert_abs_diff_eq!(out[1], 0.8673250705840776, epsilon = 1e-12);
        assert_abs_diff_eq!(out[0], out[2], epsilon = 1e-15);
    }

    #[test]
    fn gaus1_is_odd() {
        let w = ContinuousWavelet::from_family(WaveletFamily::Gaussian, 1).unwrap();
        let grid = [-0.75f64, 0.0, 0.75];
        let mut out = [0.0f64; 3];
        w.psi(&grid, &mut out, None).unwrap();
        assert_abs_diff_eq!(out[1], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(out[0], -out[2], epsilon = 1e-14);
    }

    #[test]
    fn morl_at_zero_is_one() {
        let w = ContinuousWavelet::from_family(WaveletFamily::Morlet, 0).unwrap();
        let mut out = [0.0f64];
        w.psi(&[0.0f64], &mut out, None).unwrap();
        assert_abs_diff_eq!(out[0], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn complex_families_demand_imaginary_output() {
        let w = ContinuousWavelet::from_family(WaveletFamily::ComplexMorlet, 0).unwrap();
        let mut re = [0.0f64; 2];
        assert_eq!(
            w.psi(&[0.0f64, 1.0], &mut re, None),
            Err(UnduletError::NullInput)
        );
        let mut im = [0.0f64; 2];
        w.psi(&[0.0f64, 1.0], &mut re, Some(&mut im)).unwrap();
        // at t = 0 the envelope is 1/sqrt(pi * fb) and the phase is zero
        assert_abs_diff_eq!(re[0], 0.5641895835477563, epsilon = 1e-12);
        assert_abs_diff_eq!(im[0], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn shan_sinc_guard_at_zero() {
        let w = ContinuousWavelet::from_family(WaveletFamily::Shannon, 0).unwrap();
        let mut re = [0.0f64; 1];
        let mut im = [0.0f64; 1];
        w.psi(&[0.0f64], &mut re, Some(&mut im)).unwrap();
        // sqrt(fb) with fb = 0.5
        assert_abs_diff_eq!(re[0], 0.7071067811865476, epsilon = 1e-12);
    }

    #[test]
    fn cgau1_spot_values() {
        let w = ContinuousWavelet::from_family(WaveletFamily::ComplexGaussian, 1).unwrap();
        let mut re = [0.0f64; 1];
        let mut im = [0.0f64; 1];
        w.psi(&[0.5f64], &mut re, Some(&mut im)).unwrap();
        // (-2 t cos t - sin t) e^(-t^2) / sqrt(2 sqrt(pi/2)) at t = 0.5
        assert_abs_diff_eq!(re[0], -0.6675193393265451, epsilon = 1e-12);
        assert_abs_diff_eq!(im[0], -0.1958555096578587, epsilon = 1e-12);
    }

    #[test]
    fn cgau3_first_power_envelope() {
        // order 3 decays as exp(-t), unlike its siblings, so the magnitude
        // is not even in t
        let w = ContinuousWavelet::from_family(WaveletFamily::ComplexGaussian, 3).unwrap();
        let grid = [-0.5f64, 0.0, 0.5, 1.0];
        let mut re = [0.0f64; 4];
        let mut im = [0.0f64; 4];
        w.psi(&grid, &mut re, Some(&mut im)).unwrap();
        assert_abs_diff_eq!(re[0], -1.5099704439995658, epsilon = 1e-12);
        assert_abs_diff_eq!(im[0], -0.05491522819977516, epsilon = 1e-12);
        assert_abs_diff_eq!(re[1], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(im[1], 0.717234670171893, epsilon = 1e-12);
        assert_abs_diff_eq!(re[2], 0.5554870831239549, epsilon = 1e-12);
        assert_abs_diff_eq!(im[2], -0.020202183461935516, epsilon = 1e-12);
        assert_abs_diff_eq!(re[3], 0.04506915419914795, epsilon = 1e-12);
        assert_abs_diff_eq!(im[3], -0.4190114973004886, epsilon = 1e-12);
        let mag = |r: f64, i: f64| (r * r + i * i).sqrt();
        assert!(mag(re[0], im[0]) > 2.0 * mag(re[2], im[2]));
    }

    #[test]
    fn cgau8_spot_values() {
        let w = ContinuousWavelet::from_family(WaveletFamily::ComplexGaussian, 8).unwrap();
        let mut re = [0.0f64; 1];
        let mut im = [0.0f64; 1];
        w.psi(&[0.7f64], &mut re, Some(&mut im)).unwrap();
        assert_abs_diff_eq!(re[0], -0.5933212602347089, epsilon = 1e-10);
        assert_abs_diff_eq!(im[0], 0.06075625425483494, epsilon = 1e-10);
    }

    #[test]
    fn fbsp_spot_values() {
        // defaults m = 2, fb = 1, fc = 0.5
        let w = ContinuousWavelet::from_family(WaveletFamily::FrequencyBSpline, 0).unwrap();
        let grid = [0.0f64, 0.4, -0.4];
        let mut re = [0.0f64; 3];
        let mut im = [0.0f64; 3];
        w.psi(&grid, &mut re, Some(&mut im)).unwrap();
        // at t = 0 the squared sinc is skipped and sqrt(fb) remains
        assert_abs_diff_eq!(re[0], 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(im[0], 0.0, epsilon = 1e-15);
        // cos(2 pi fc t) (sin(t fb pi / m) / (t fb pi / m))^m at t = 0.4
        assert_abs_diff_eq!(re[1], 0.2704331942864565, epsilon = 1e-12);
        assert_abs_diff_eq!(im[1], 0.8323077899611439, epsilon = 1e-12);
        // the real part is even and the imaginary part odd in t
        assert_abs_diff_eq!(re[2], re[1], epsilon = 1e-15);
        assert_abs_diff_eq!(im[2], -im[1], epsilon = 1e-15);
    }
}
