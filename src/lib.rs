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
//! Signal-extension-aware convolution engine for one-dimensional wavelet
//! transforms: single-level DWT/IDWT, the stationary (undecimated) transform,
//! per-axis application over dense N-D arrays, and the wavelet catalog.
//!
//! The kernels are generic over the signal scalar (`f32`, `f64` and their
//! complex counterparts); filter taps are always the matching real kind.
//! Every operation takes caller-owned spans and returns synchronously; the
//! engine keeps no global state and never allocates user-visible memory.
#![allow(clippy::excessive_precision)]
#![allow(clippy::needless_range_loop)]
mod axis;
mod conv;
mod err;
mod lengths;
mod sample;
mod upconv;
mod wavelets;
mod wt;

pub use axis::{ArrayInfo, Coefficient, axis_dec, axis_idwt, axis_swt};
pub use err::UnduletError;
pub use lengths::{
    dwt_max_level, dwt_out_len, idwt_out_len, reconstruction_out_len, swt_max_level, swt_out_len,
};
pub use sample::{WtReal, WtSample};
pub use wavelets::{ContinuousWavelet, DiscreteWavelet, FilterBank, Symmetry, WaveletFamily};
pub use wt::{dec_a, dec_d, idwt, rec_a, rec_d, swt_a, swt_d};

/// How virtual samples outside `[0, N)` are derived during convolution.
///
/// All nine modes are handled by every decomposition kernel.
/// [`Periodization`](ExtensionMode::Periodization) additionally shortens the
/// output to `ceil(N / 2)` and runs on a dedicated kernel path.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ExtensionMode {
    /// Extend with zeros.
    ZeroPad,
    /// Half-sample symmetric mirroring: `.. x1 x0 | x0 x1 ..`.
    Symmetric,
    /// Half-sample anti-symmetric mirroring with sign flips:
    /// `.. -x1 -x0 | x0 x1 ..`.
    AntiSymmetric,
    /// Whole-sample mirroring, edge sample not repeated:
    /// `.. x2 x1 | x0 x1 ..`.
    Reflect,
    /// Whole-sample anti-symmetric extension about the edge values; each
    /// traversal accumulates the edge-to-edge drift, which keeps the first
    /// derivative continuous across the boundary.
    AntiReflect,
    /// Repeat the edge sample.
    ConstantEdge,
    /// First-derivative linear extrapolation off the edge. Signals shorter
    /// than two samples degrade to [`ConstantEdge`](ExtensionMode::ConstantEdge)
    /// (there is no derivative to extrapolate); this is contractual.
    Smooth,
    /// Wrap around circularly.
    Periodic,
    /// Circular wrapping with decimated output length `ceil(N / 2)` (the
    /// signal is padded by one repeated edge sample when `N` is odd).
    Periodization,
}
