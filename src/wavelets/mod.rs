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
//! The wavelet catalog: named discrete filter banks and analytic continuous
//! families.

mod coeffs;
mod cwt;

use crate::err::UnduletError;
use crate::sample::WtReal;
use coeffs::SQRT2;

/// Wavelet symmetry properties.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Symmetry {
    Unknown,
    Asymmetric,
    NearSymmetric,
    Symmetric,
    AntiSymmetric,
}

/// Wavelet family names understood by the catalog.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WaveletFamily {
    Haar,
    Daubechies,
    Symlets,
    Coiflets,
    Biorthogonal,
    ReverseBiorthogonal,
    DiscreteMeyer,
    Gaussian,
    MexicanHat,
    Morlet,
    ComplexGaussian,
    Shannon,
    FrequencyBSpline,
    ComplexMorlet,
}

impl WaveletFamily {
    /// Whether this family tabulates FIR filter banks (as opposed to an
    /// analytic mother wavelet).
    pub fn is_discrete(self) -> bool {
        matches!(
            self,
            WaveletFamily::Haar
                | WaveletFamily::Daubechies
                | WaveletFamily::Symlets
                | WaveletFamily::Coiflets
                | WaveletFamily::Biorthogonal
                | WaveletFamily::ReverseBiorthogonal
                | WaveletFamily::DiscreteMeyer
        )
    }
}

/// The four FIR filters of one discrete wavelet at one precision.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank<R> {
    /// Low-pass decomposition (analysis) filter.
    pub dec_lo: Vec<R>,
    /// High-pass decomposition (analysis) filter.
    pub dec_hi: Vec<R>,
    /// Low-pass reconstruction (synthesis) filter.
    pub rec_lo: Vec<R>,
    /// High-pass reconstruction (synthesis) filter.
    pub rec_hi: Vec<R>,
}

impl FilterBank<f64> {
    fn to_f32(&self) -> FilterBank<f32> {
        FilterBank {
            dec_lo: self.dec_lo.iter().map(|&v| v as f32).collect(),
            dec_hi: self.dec_hi.iter().map(|&v| v as f32).collect(),
            rec_lo: self.rec_lo.iter().map(|&v| v as f32).collect(),
            rec_hi: self.rec_hi.iter().map(|&v| v as f32).collect(),
        }
    }
}

/// A discrete wavelet: immutable filter banks at both precisions plus the
/// family attributes.
#[derive(Debug, Clone)]
pub struct DiscreteWavelet {
    family: WaveletFamily,
    family_name: &'static str,
    short_name: &'static str,
    symmetry: Symmetry,
    orthogonal: bool,
    biorthogonal: bool,
    compact_support: bool,
    support_width: isize,
    vanishing_moments_psi: isize,
    vanishing_moments_phi: isize,
    dec_len: usize,
    rec_len: usize,
    bank_f64: FilterBank<f64>,
    bank_f32: FilterBank<f32>,
}

/// Reconstruction low-pass plus the flip rules of the orthogonal families:
/// `dec_lo` is the time reversal of `rec_lo`, the high-pass pair alternates
/// signs on top of that.
fn orthogonal_bank(h: &[f64], scale: f64) -> FilterBank<f64> {
    let len = h.len();
    let rec_lo: Vec<f64> = h.iter().map(|&v| v * scale).collect();
    let dec_lo: Vec<f64> = rec_lo.iter().rev().copied().collect();
    let rec_hi: Vec<f64> = dec_lo
        .iter()
        .enumerate()
        .map(|(i, &v)| if i % 2 != 0 { -v } else { v })
        .collect();
    let dec_hi: Vec<f64> = (0..len).map(|i| rec_hi[len - 1 - i]).collect();
    FilterBank {
        dec_lo,
        dec_hi,
        rec_lo,
        rec_hi,
    }
}

/// Synthesis/analysis low-pass pair plus the biorthogonal flip rules.
fn biorthogonal_bank(dec_lo: Vec<f64>, rec_lo: Vec<f64>) -> FilterBank<f64> {
    let len = dec_lo.len();
    let rec_hi: Vec<f64> = dec_lo
        .iter()
        .enumerate()
        .map(|(i, &v)| if i % 2 != 0 { -v } else { v })
        .collect();
    let dec_hi: Vec<f64> = rec_lo
        .iter()
        .enumerate()
        .map(|(i, &v)| if (len - 1 - i) % 2 != 0 { -v } else { v })
        .collect();
    FilterBank {
        dec_lo,
        dec_hi,
        rec_lo,
        rec_hi,
    }
}

/// Per-N biorthogonal order validation. Returns `(m_idx, m_max)`.
fn bior_order_check(order: usize) -> Option<(usize, usize, usize)> {
    let n = order / 10;
    let m = order % 10;
    let (m_idx, m_max) = match n {
        1 => {
            if m % 2 != 1 || m > 5 {
                return None;
            }
            (m / 2, 5)
        }
        2 => {
            if m % 2 != 0 || m < 2 || m > 8 {
                return None;
            }
            (m / 2 - 1, 8)
        }
        3 => {
            if m % 2 != 1 || m > 9 {
                return None;
            }
            (m / 2, 9)
        }
        4 | 5 => {
            if m != n {
                return None;
            }
            (0, m)
        }
        6 => {
            if m != 8 {
                return None;
            }
            (0, 8)
        }
        _ => return None,
    };
    Some((n, m_idx, m_max))
}

fn bior_row(n: usize, row: usize) -> &'static [f64] {
    match n {
        1 => &coeffs::BIOR1[row],
        2 => &coeffs::BIOR2[row],
        3 => &coeffs::BIOR3[row],
        4 => &coeffs::BIOR4[row],
        5 => &coeffs::BIOR5[row],
        _ => &coeffs::BIOR6[row],
    }
}

impl DiscreteWavelet {
    /// Look up a wavelet by `(family, order)`.
    ///
    /// Recognized orders: Daubechies 1..=20, Symlets 2..=10, Coiflets 1..=5,
    /// Biorthogonal / ReverseBiorthogonal two-digit `N*10 + M` codes from
    /// the published grid, Haar and DiscreteMeyer ignore `order`.
    pub fn from_family(family: WaveletFamily, order: usize) -> Result<Self, UnduletError> {
        let unknown = || UnduletError::UnknownWavelet(format!("{family:?}/{order}"));
        match family {
            WaveletFamily::Haar => {
                let mut w = Self::from_family(WaveletFamily::Daubechies, 1)?;
                w.family = WaveletFamily::Haar;
                w.family_name = "Haar";
                w.short_name = "haar";
                Ok(w)
            }
            WaveletFamily::Daubechies => {
                let h = *coeffs::DB.get(order.wrapping_sub(1)).ok_or_else(unknown)?;
                let bank = orthogonal_bank(h, 1.0);
                Ok(Self::assemble(
                    family,
                    "Daubechies",
                    "db",
                    Symmetry::Asymmetric,
                    true,
                    bank,
                    2 * order as isize - 1,
                    order as isize,
                    0,
                ))
            }
            WaveletFamily::Symlets => {
                let h = *coeffs::SYM.get(order.wrapping_sub(2)).ok_or_else(unknown)?;
                let bank = orthogonal_bank(h, 1.0);
                Ok(Self::assemble(
                    family,
                    "Symlets",
                    "sym",
                    Symmetry::NearSymmetric,
                    true,
                    bank,
                    2 * order as isize - 1,
                    order as isize,
                    0,
                ))
            }
            WaveletFamily::Coiflets => {
                let h = *coeffs::COIF.get(order.wrapping_sub(1)).ok_or_else(unknown)?;
                let bank = orthogonal_bank(h, SQRT2);
                Ok(Self::assemble(
                    family,
                    "Coiflets",
                    "coif",
                    Symmetry::NearSymmetric,
                    true,
                    bank,
                    6 * order as isize - 1,
                    2 * order as isize,
                    2 * order as isize - 1,
                ))
            }
            WaveletFamily::DiscreteMeyer => {
                let bank = orthogonal_bank(&coeffs::DMEY, 1.0);
                Ok(Self::assemble(
                    family,
                    "Discrete Meyer (FIR Approximation)",
                    "dmey",
                    Symmetry::Symmetric,
                    true,
                    bank,
                    -1,
                    -1,
                    -1,
                ))
            }
            WaveletFamily::Biorthogonal => {
                let (n, m_idx, m_max) = bior_order_check(order).ok_or_else(unknown)?;
                let m = order % 10;
                let len = if n == 1 { 2 * m } else { 2 * m + 2 };
                let pad = m_max - m;
                let synthesis = bior_row(n, 0);
                let analysis = bior_row(n, m_idx + 1);
                let rec_lo: Vec<f64> = (0..len).map(|i| synthesis[i + pad]).collect();
                let dec_lo: Vec<f64> = (0..len).map(|i| analysis[len - 1 - i]).collect();
                let bank = biorthogonal_bank(dec_lo, rec_lo);
                let mut w = Self::assemble(
                    family,
                    "Biorthogonal",
                    "bior",
                    Symmetry::Symmetric,
                    false,
                    bank,
                    -1,
                    n as isize,
                    -1,
                );
                w.biorthogonal = true;
                Ok(w)
            }
            WaveletFamily::ReverseBiorthogonal => {
                // rbio is bior with the analysis/synthesis roles swapped and
                // every filter reversed in place
                let base = Self::from_family(WaveletFamily::Biorthogonal, order)?;
                let b = &base.bank_f64;
                let len = base.dec_len;
                let bank = FilterBank {
                    rec_lo: (0..len).map(|i| b.dec_lo[len - 1 - i]).collect(),
                    rec_hi: (0..len).map(|i| b.dec_hi[len - 1 - i]).collect(),
                    dec_lo: (0..len).map(|i| b.rec_lo[len - 1 - i]).collect(),
                    dec_hi: (0..len).map(|i| b.rec_hi[len - 1 - i]).collect(),
                };
                let mut w = Self::assemble(
                    family,
                    "Reverse biorthogonal",
                    "rbio",
                    Symmetry::Symmetric,
                    false,
                    bank,
                    -1,
                    (order / 10) as isize,
                    -1,
                );
                w.biorthogonal = true;
                Ok(w)
            }
            _ => Err(unknown()),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        family: WaveletFamily,
        family_name: &'static str,
        short_name: &'static str,
        symmetry: Symmetry,
        orthogonal: bool,
        bank: FilterBank<f64>,
        support_width: isize,
        vanishing_moments_psi: isize,
        vanishing_moments_phi: isize,
    ) -> Self {
        let bank_f32 = bank.to_f32();
        let dec_len = bank.dec_lo.len();
        let rec_len = bank.rec_lo.len();
        DiscreteWavelet {
            family,
            family_name,
            short_name,
            symmetry,
            orthogonal,
            biorthogonal: orthogonal,
            compact_support: true,
            support_width,
            vanishing_moments_psi,
            vanishing_moments_phi,
            dec_len,
            rec_len,
            bank_f64: bank,
            bank_f32,
        }
    }

    /// A blank wavelet: zero-filled banks of `filters_length` taps (padded
    /// to even), no properties set.
    pub fn blank(filters_length: usize) -> Result<Self, UnduletError> {
        if filters_length < 1 {
            return Err(UnduletError::BadFilterLength(filters_length));
        }
        let len = filters_length + filters_length % 2;
        let zeros = vec![0.0f64; len];
        let bank = FilterBank {
            dec_lo: zeros.clone(),
            dec_hi: zeros.clone(),
            rec_lo: zeros.clone(),
            rec_hi: zeros,
        };
        let bank_f32 = bank.to_f32();
        Ok(DiscreteWavelet {
            family: WaveletFamily::Haar,
            family_name: "",
            short_name: "",
            symmetry: Symmetry::Unknown,
            orthogonal: false,
            biorthogonal: false,
            compact_support: false,
            support_width: -1,
            vanishing_moments_psi: 0,
            vanishing_moments_phi: 0,
            dec_len: len,
            rec_len: len,
            bank_f64: bank,
            bank_f32,
        })
    }

    /// A custom wavelet from explicit filters, all of one length (padded to
    /// even with a trailing zero when necessary). Properties stay unknown.
    pub fn from_filters(
        dec_lo: &[f64],
        dec_hi: &[f64],
        rec_lo: &[f64],
        rec_hi: &[f64],
    ) -> Result<Self, UnduletError> {
        let len = dec_lo.len();
        for filt in [dec_hi, rec_lo, rec_hi] {
            if filt.len() != len {
                return Err(UnduletError::ShapeMismatch {
                    dim: 0,
                    expected: len,
                    got: filt.len(),
                });
            }
        }
        let mut w = Self::blank(len)?;
        let bank = &mut w.bank_f64;
        bank.dec_lo[..len].copy_from_slice(dec_lo);
        bank.dec_hi[..len].copy_from_slice(dec_hi);
        bank.rec_lo[..len].copy_from_slice(rec_lo);
        bank.rec_hi[..len].copy_from_slice(rec_hi);
        w.bank_f32 = w.bank_f64.to_f32();
        Ok(w)
    }

    pub fn family(&self) -> WaveletFamily {
        self.family
    }

    pub fn family_name(&self) -> &'static str {
        self.family_name
    }

    pub fn short_name(&self) -> &'static str {
        self.short_name
    }

    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    pub fn orthogonal(&self) -> bool {
        self.orthogonal
    }

    pub fn biorthogonal(&self) -> bool {
        self.biorthogonal
    }

    pub fn compact_support(&self) -> bool {
        self.compact_support
    }

    /// Support width, `-1` when not meaningful for the family.
    pub fn support_width(&self) -> isize {
        self.support_width
    }

    pub fn vanishing_moments_psi(&self) -> isize {
        self.vanishing_moments_psi
    }

    pub fn vanishing_moments_phi(&self) -> isize {
        self.vanishing_moments_phi
    }

    /// Decomposition filter length.
    pub fn dec_len(&self) -> usize {
        self.dec_len
    }

    /// Reconstruction filter length.
    pub fn rec_len(&self) -> usize {
        self.rec_len
    }

    /// The filter bank at the precision selected by `R`.
    pub fn bank<R: WtReal>(&self) -> &FilterBank<R> {
        R::bank(self)
    }

    pub fn bank_f64(&self) -> &FilterBank<f64> {
        &self.bank_f64
    }

    pub fn bank_f32(&self) -> &FilterBank<f32> {
        &self.bank_f32
    }
}

/// A continuous wavelet: parameters plus an analytic evaluator over a
/// caller-provided sample grid.
#[derive(Debug, Clone)]
pub struct ContinuousWavelet {
    family: WaveletFamily,
    family_name: &'static str,
    short_name: &'static str,
    symmetry: Symmetry,
    order: usize,
    lower_bound: f64,
    upper_bound: f64,
    complex: bool,
    center_frequency: f64,
    bandwidth_frequency: f64,
    fbsp_order: usize,
}

impl ContinuousWavelet {
    /// Look up a continuous wavelet by `(family, order)`. Gaussian and
    /// complex Gaussian orders are restricted to 1..=8; the other families
    /// ignore `order`.
    pub fn from_family(family: WaveletFamily, order: usize) -> Result<Self, UnduletError> {
        let unknown = || UnduletError::UnknownWavelet(format!("{family:?}/{order}"));
        let mut w = ContinuousWavelet {
            family,
            family_name: "",
            short_name: "",
            symmetry: Symmetry::Asymmetric,
            order,
            lower_bound: -8.0,
            upper_bound: 8.0,
            complex: false,
            center_frequency: 0.0,
            bandwidth_frequency: 0.0,
            fbsp_order: 0,
        };
        match family {
            WaveletFamily::Gaussian => {
                if order < 1 || order > 8 {
                    return Err(unknown());
                }
                w.family_name = "Gaussian";
                w.short_name = "gaus";
                w.symmetry = if order % 2 == 0 {
                    Symmetry::Symmetric
                } else {
                    Symmetry::AntiSymmetric
                };
                w.lower_bound = -5.0;
                w.upper_bound = 5.0;
            }
            WaveletFamily::MexicanHat => {
                w.family_name = "Mexican hat wavelet";
                w.short_name = "mexh";
                w.symmetry = Symmetry::Symmetric;
                w.order = 0;
            }
            WaveletFamily::Morlet => {
                w.family_name = "Morlet wavelet";
                w.short_name = "morl";
                w.symmetry = Symmetry::Symmetric;
                w.order = 0;
            }
            WaveletFamily::ComplexGaussian => {
                if order < 1 || order > 8 {
                    return Err(unknown());
                }
                w.family_name = "Complex Gaussian wavelets";
                w.short_name = "cgau";
                w.symmetry = if order % 2 == 0 {
                    Symmetry::Symmetric
                } else {
                    Symmetry::AntiSymmetric
                };
                w.lower_bound = -5.0;
                w.upper_bound = 5.0;
                w.complex = true;
            }
            WaveletFamily::Shannon => {
                w.family_name = "Shannon wavelets";
                w.short_name = "shan";
                w.lower_bound = -20.0;
                w.upper_bound = 20.0;
                w.complex = true;
                w.center_frequency = 1.0;
                w.bandwidth_frequency = 0.5;
                w.order = 0;
            }
            WaveletFamily::FrequencyBSpline => {
                w.family_name = "Frequency B-Spline wavelets";
                w.short_name = "fbsp";
                w.lower_bound = -20.0;
                w.upper_bound = 20.0;
                w.complex = true;
                w.center_frequency = 0.5;
                w.bandwidth_frequency = 1.0;
                w.fbsp_order = 2;
                w.order = 0;
            }
            WaveletFamily::ComplexMorlet => {
                w.family_name = "Complex Morlet wavelets";
                w.short_name = "cmor";
                w.complex = true;
                w.center_frequency = 0.5;
                w.bandwidth_frequency = 1.0;
                w.order = 0;
            }
            _ => return Err(unknown()),
        }
        Ok(w)
    }

    /// Sample the mother wavelet over `grid`, writing the real part into
    /// `out_re` and (for complex families) the imaginary part into `out_im`.
    ///
    /// Real families leave `out_im` untouched when it is given. Complex
    /// families require it.
    pub fn psi<R: WtReal>(
        &self,
        grid: &[R],
        out_re: &mut [R],
        out_im: Option<&mut [R]>,
    ) -> Result<(), UnduletError>
    where
        f64: num_traits::AsPrimitive<R>,
        usize: num_traits::AsPrimitive<R>,
    {
        cwt::psi(self, grid, out_re, out_im)
    }

    pub fn family(&self) -> WaveletFamily {
        self.family
    }

    pub fn family_name(&self) -> &'static str {
        self.family_name
    }

    pub fn short_name(&self) -> &'static str {
        self.short_name
    }

    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Derivative order for the Gaussian families, zero otherwise.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Default sampling interval for the mother wavelet.
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    pub fn is_complex(&self) -> bool {
        self.complex
    }

    pub fn center_frequency(&self) -> f64 {
        self.center_frequency
    }

    pub fn bandwidth_frequency(&self) -> f64 {
        self.bandwidth_frequency
    }

    pub fn fbsp_order(&self) -> usize {
        self.fbsp_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn haar_is_relabeled_db1() {
        let haar = DiscreteWavelet::from_family(WaveletFamily::Haar, 0).unwrap();
        let db1 = DiscreteWavelet::from_family(WaveletFamily::Daubechies, 1).unwrap();
        assert_eq!(haar.short_name(), "haar");
        assert_eq!(haar.bank_f64().rec_lo, db1.bank_f64().rec_lo);
        assert_eq!(haar.dec_len(), 2);
    }

    #[test]
    fn db2_bank_derivation() {
        let w = DiscreteWavelet::from_family(WaveletFamily::Daubechies, 2).unwrap();
        let b = w.bank_f64();
        assert_abs_diff_eq!(b.rec_lo[0], 0.48296291314453414, epsilon = 1e-15);
        assert_abs_diff_eq!(b.rec_lo[3], -0.12940952255126037, epsilon = 1e-15);
        // dec_lo is rec_lo reversed
        for i in 0..4 {
            assert_eq!(b.dec_lo[i], b.rec_lo[3 - i]);
        }
        // rec_hi alternates signs over dec_lo
        for i in 0..4 {
            let sign = if i % 2 != 0 { -1.0 } else { 1.0 };
            assert_eq!(b.rec_hi[i], sign * b.dec_lo[i]);
        }
    }

    #[test]
    fn every_lowpass_sums_to_sqrt2() {
        let mut wavelets: Vec<DiscreteWavelet> = Vec::new();
        for order in 1..=20 {
            wavelets.push(DiscreteWavelet::from_family(WaveletFamily::Daubechies, order).unwrap());
        }
        for order in 2..=10 {
            wavelets.push(DiscreteWavelet::from_family(WaveletFamily::Symlets, order).unwrap());
        }
        for order in 1..=5 {
            wavelets.push(DiscreteWavelet::from_family(WaveletFamily::Coiflets, order).unwrap());
        }
        for order in [11, 13, 15, 22, 24, 26, 28, 31, 33, 35, 37, 39, 44, 55, 68] {
            wavelets.push(
                DiscreteWavelet::from_family(WaveletFamily::Biorthogonal, order).unwrap(),
            );
            wavelets.push(
                DiscreteWavelet::from_family(WaveletFamily::ReverseBiorthogonal, order).unwrap(),
            );
        }
        wavelets.push(DiscreteWavelet::from_family(WaveletFamily::DiscreteMeyer, 0).unwrap());
        for w in &wavelets {
            let b = w.bank_f64();
            let dec: f64 = b.dec_lo.iter().sum();
            let rec: f64 = b.rec_lo.iter().sum();
            assert_abs_diff_eq!(dec, SQRT2, epsilon = 1e-10);
            assert_abs_diff_eq!(rec, SQRT2, epsilon = 1e-10);
            assert_eq!(b.dec_lo.len() % 2, 0, "{}", w.short_name());
        }
    }

    #[test]
    fn unknown_orders_are_rejected() {
        assert!(DiscreteWavelet::from_family(WaveletFamily::Daubechies, 0).is_err());
        assert!(DiscreteWavelet::from_family(WaveletFamily::Daubechies, 21).is_err());
        assert!(DiscreteWavelet::from_family(WaveletFamily::Symlets, 1).is_err());
        assert!(DiscreteWavelet::from_family(WaveletFamily::Coiflets, 6).is_err());
        // bior2.x requires even M in 2..=8
        assert!(DiscreteWavelet::from_family(WaveletFamily::Biorthogonal, 23).is_err());
        assert!(DiscreteWavelet::from_family(WaveletFamily::Biorthogonal, 66).is_err());
        assert!(DiscreteWavelet::from_family(WaveletFamily::Gaussian, 1).is_err());
    }

    #[test]
    fn blank_pads_to_even() {
        let w = DiscreteWavelet::blank(5).unwrap();
        assert_eq!(w.dec_len(), 6);
        assert_eq!(w.symmetry(), Symmetry::Unknown);
        assert!(w.bank_f64().dec_lo.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn continuous_defaults() {
        let g = ContinuousWavelet::from_family(WaveletFamily::Gaussian, 3).unwrap();
        assert_eq!(g.bounds(), (-5.0, 5.0));
        assert_eq!(g.symmetry(), Symmetry::AntiSymmetric);
        assert!(!g.is_complex());
        let shan = ContinuousWavelet::from_family(WaveletFamily::Shannon, 0).unwrap();
        assert!(shan.is_complex());
        assert_eq!(shan.center_frequency(), 1.0);
        assert_eq!(shan.bandwidth_frequency(), 0.5);
        assert!(ContinuousWavelet::from_family(WaveletFamily::ComplexGaussian, 9).is_err());
        assert!(ContinuousWavelet::from_family(WaveletFamily::Haar, 0).is_err());
    }
}
