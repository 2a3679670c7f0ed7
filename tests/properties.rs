// Property tests: perfect reconstruction across the catalog, linearity,
// shift equivariance, additivity.

use approx::assert_abs_diff_eq;
use undulet::ExtensionMode::{Periodization, Symmetric};
use undulet::{
    DiscreteWavelet, ExtensionMode, WaveletFamily, dec_a, dec_d, dwt_out_len, idwt, idwt_out_len,
    swt_max_level, swt_a,
};

const ALL_MODES: [ExtensionMode; 9] = [
    ExtensionMode::ZeroPad,
    ExtensionMode::Symmetric,
    ExtensionMode::AntiSymmetric,
    ExtensionMode::Reflect,
    ExtensionMode::AntiReflect,
    ExtensionMode::ConstantEdge,
    ExtensionMode::Smooth,
    ExtensionMode::Periodic,
    ExtensionMode::Periodization,
];

fn signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (i as f64 * 0.41).sin() + 0.3 * (i as f64 * 1.7).cos())
        .collect()
}

fn dec_pair(x: &[f64], w: &DiscreteWavelet, mode: ExtensionMode) -> (Vec<f64>, Vec<f64>) {
    let len = dwt_out_len(x.len(), w.dec_len(), mode);
    let mut a = vec![0.0; len];
    let mut d = vec![0.0; len];
    dec_a(x, w, &mut a, mode).unwrap();
    dec_d(x, w, &mut d, mode).unwrap();
    (a, d)
}

fn roundtrip(x: &[f64], w: &DiscreteWavelet, mode: ExtensionMode) -> Vec<f64> {
    let (a, d) = dec_pair(x, w, mode);
    let mut back = vec![0.0; idwt_out_len(a.len(), w.rec_len(), mode)];
    idwt(Some(&a), Some(&d), w, &mut back, mode).unwrap();
    back
}

fn catalog() -> Vec<DiscreteWavelet> {
    let mut out = Vec::new();
    for order in 1..=20 {
        out.push(DiscreteWavelet::from_family(WaveletFamily::Daubechies, order).unwrap());
    }
    for order in 2..=10 {
        out.push(DiscreteWavelet::from_family(WaveletFamily::Symlets, order).unwrap());
    }
    for order in 1..=5 {
        out.push(DiscreteWavelet::from_family(WaveletFamily::Coiflets, order).unwrap());
    }
    for order in [11, 13, 15, 22, 24, 26, 28, 31, 33, 35, 37, 39, 44, 55, 68] {
        out.push(DiscreteWavelet::from_family(WaveletFamily::Biorthogonal, order).unwrap());
        out.push(DiscreteWavelet::from_family(WaveletFamily::ReverseBiorthogonal, order).unwrap());
    }
    out.push(DiscreteWavelet::from_family(WaveletFamily::Haar, 0).unwrap());
    out
}

#[test]
fn perfect_reconstruction_across_catalog() {
    for w in catalog() {
        let lengths = [w.dec_len(), w.dec_len() + 5, 2 * w.dec_len(), 31, 32];
        for mode in ALL_MODES {
            for n in lengths {
                let x = signal(n);
                let back = roundtrip(&x, &w, mode);
                for (got, want) in back.iter().zip(x.iter()) {
                    assert_abs_diff_eq!(*got, *want, epsilon = 1e-8);
                }
            }
        }
    }
}

#[test]
fn dmey_reconstructs_to_its_known_accuracy() {
    // the 62-tap Meyer approximation is only near-orthogonal; its
    // reconstruction error is a property of the historical filter
    let w = DiscreteWavelet::from_family(WaveletFamily::DiscreteMeyer, 0).unwrap();
    let x = signal(128);
    let back = roundtrip(&x, &w, Periodization);
    let worst = back
        .iter()
        .zip(x.iter())
        .map(|(g, w)| (g - w).abs())
        .fold(0.0f64, f64::max);
    assert!(worst < 2e-2, "dmey roundtrip drifted to {worst}");
    assert!(worst > 1e-8, "dmey is not expected to reconstruct exactly");
}

#[test]
fn swt_preserves_length_at_every_level() {
    let w = DiscreteWavelet::from_family(WaveletFamily::Daubechies, 3).unwrap();
    let x = signal(64);
    for level in 1..=swt_max_level(64) {
        let mut out = vec![0.0; 64];
        swt_a(&x, &w, &mut out, level).unwrap();
        assert_eq!(out.len(), 64);
    }
}

#[test]
fn decomposition_is_linear() {
    let w = DiscreteWavelet::from_family(WaveletFamily::Coiflets, 2).unwrap();
    let x = signal(40);
    let y: Vec<f64> = (0..40).map(|i| (i as f64 * 0.93).cos()).collect();
    let mixed: Vec<f64> = x.iter().zip(y.iter()).map(|(&a, &b)| 2.5 * a - 1.25 * b).collect();
    let (ax, _) = dec_pair(&x, &w, Symmetric);
    let (ay, _) = dec_pair(&y, &w, Symmetric);
    let (am, _) = dec_pair(&mixed, &w, Symmetric);
    for ((m, x), y) in am.iter().zip(ax.iter()).zip(ay.iter()) {
        assert_abs_diff_eq!(*m, 2.5 * x - 1.25 * y, epsilon = 1e-10);
    }
}

#[test]
fn periodization_is_shift_equivariant() {
    let w = DiscreteWavelet::from_family(WaveletFamily::Daubechies, 3).unwrap();
    let x = signal(16);
    let shifted: Vec<f64> = (0..16).map(|i| x[(i + 2) % 16]).collect();
    let (a, _) = dec_pair(&x, &w, Periodization);
    let (a_shifted, _) = dec_pair(&shifted, &w, Periodization);
    // an even cyclic input shift rotates the coefficients by half as much
    for i in 0..8 {
        assert_abs_diff_eq!(a_shifted[i], a[(i + 1) % 8], epsilon = 1e-10);
    }
}

#[test]
fn symmetric_mode_commutes_with_time_reversal() {
    // holds for filters with whole-sample symmetry and odd coefficient count
    for (family, order) in [
        (WaveletFamily::Haar, 0),
        (WaveletFamily::Biorthogonal, 33),
    ] {
        let w = DiscreteWavelet::from_family(family, order).unwrap();
        let x = signal(8);
        let reversed: Vec<f64> = x.iter().rev().copied().collect();
        let (a, _) = dec_pair(&x, &w, Symmetric);
        let (b, _) = dec_pair(&reversed, &w, Symmetric);
        for (p, q) in a.iter().rev().zip(b.iter()) {
            assert_abs_diff_eq!(*p, *q, epsilon = 1e-10);
        }
    }
}

#[test]
fn idwt_is_additive_in_its_inputs() {
    let w = DiscreteWavelet::from_family(WaveletFamily::Symlets, 5).unwrap();
    let x = signal(32);
    let (a, d) = dec_pair(&x, &w, Symmetric);
    let out_len = idwt_out_len(a.len(), w.rec_len(), Symmetric);
    let mut from_a = vec![0.0; out_len];
    let mut from_d = vec![0.0; out_len];
    let mut from_both = vec![0.0; out_len];
    idwt(Some(&a), None, &w, &mut from_a, Symmetric).unwrap();
    idwt(None, Some(&d), &w, &mut from_d, Symmetric).unwrap();
    idwt(Some(&a), Some(&d), &w, &mut from_both, Symmetric).unwrap();
    for ((a, d), both) in from_a.iter().zip(from_d.iter()).zip(from_both.iter()) {
        assert_abs_diff_eq!(a + d, *both, epsilon = 1e-10);
    }
}

#[test]
fn out_len_formulas() {
    for n in 1..40usize {
        for f in 1..20usize {
            for mode in ALL_MODES {
                let expected = match mode {
                    Periodization => n.div_ceil(2),
                    _ => (n + f - 1) / 2,
                };
                assert_eq!(dwt_out_len(n, f, mode), expected);
            }
        }
    }
}
