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
//! Applying the 1-D kernels along one axis of a dense N-D array.
//!
//! The harness walks every strip parallel to the chosen axis (mixed-radix
//! decomposition of the strip index over the non-axis extents, last axis
//! fastest), copies a strip into a contiguous scratch buffer only when its
//! axis stride is not one element, runs the selected kernel, and scatters
//! the result back.

use crate::err::{UnduletError, try_vec};
use crate::lengths::{dwt_out_len, idwt_out_len, swt_out_len};
use crate::sample::{WtReal, WtSample};
use crate::wavelets::DiscreteWavelet;
use crate::wt::{dec_a, dec_d, swt_a, swt_d};
use crate::ExtensionMode;
use num_traits::AsPrimitive;

/// Which coefficient stream a decomposing axis pass produces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Coefficient {
    Approximation,
    Detail,
}

/// Stripe descriptor for a dense N-D array backed by a flat slice.
///
/// `strides` are signed **element** strides (negative strides walk the
/// buffer backwards); `offset` is the index of the logical `(0, .., 0)`
/// element inside the backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayInfo {
    pub shape: Vec<usize>,
    pub strides: Vec<isize>,
    pub offset: usize,
}

impl ArrayInfo {
    /// Descriptor for a C-contiguous (row-major) array of `shape`.
    pub fn contiguous(shape: &[usize]) -> ArrayInfo {
        let mut strides = vec![0isize; shape.len()];
        let mut acc = 1isize;
        for (stride, &extent) in strides.iter_mut().zip(shape.iter()).rev() {
            *stride = acc;
            acc *= extent as isize;
        }
        ArrayInfo {
            shape: shape.to_vec(),
            strides,
            offset: 0,
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Every index reachable from `shape`/`strides`/`offset` must fall
    /// inside a backing buffer of `len` elements.
    fn check_bounds(&self, len: usize) -> Result<(), UnduletError> {
        let mut lo = self.offset as isize;
        let mut hi = self.offset as isize;
        for (&extent, &stride) in self.shape.iter().zip(self.strides.iter()) {
            if extent == 0 {
                return Ok(());
            }
            let span = (extent - 1) as isize * stride;
            if span >= 0 {
                hi += span;
            } else {
                lo += span;
            }
        }
        if lo < 0 || hi as usize >= len {
            return Err(UnduletError::InvalidOutputLength {
                expected: (hi.max(0) as usize) + 1,
                got: len,
            });
        }
        Ok(())
    }

    /// Byte-for-byte gather of the strip at `base` along `axis`.
    #[inline]
    fn gather<S: WtSample>(&self, data: &[S], base: isize, axis: usize, dst: &mut [S]) {
        let stride = self.strides[axis];
        for (j, dst) in dst.iter_mut().enumerate() {
            *dst = data[(base + j as isize * stride) as usize];
        }
    }

    #[inline]
    fn scatter<S: WtSample>(&self, data: &mut [S], base: isize, axis: usize, src: &[S]) {
        let stride = self.strides[axis];
        for (j, &src) in src.iter().enumerate() {
            data[(base + j as isize * stride) as usize] = src;
        }
    }
}

/// Offsets of strip `index` into each buffer, by mixed-radix decomposition
/// over `shape` (last axis fastest; the axis itself is skipped).
#[inline]
fn strip_offsets(index: usize, shape: &[usize], infos: &[&ArrayInfo], axis: usize, offsets: &mut [isize]) {
    for (offset, info) in offsets.iter_mut().zip(infos.iter()) {
        *offset = info.offset as isize;
    }
    let mut reduced = index;
    for dim in (0..shape.len()).rev() {
        if dim == axis {
            continue;
        }
        let coord = reduced % shape[dim];
        reduced /= shape[dim];
        for (offset, info) in offsets.iter_mut().zip(infos.iter()) {
            *offset += coord as isize * info.strides[dim];
        }
    }
}

fn check_non_axis_shapes(
    input: &ArrayInfo,
    output: &ArrayInfo,
    axis: usize,
) -> Result<(), UnduletError> {
    if input.ndim() != output.ndim() {
        return Err(UnduletError::ShapeMismatch {
            dim: 0,
            expected: output.ndim(),
            got: input.ndim(),
        });
    }
    if axis >= output.ndim() {
        return Err(UnduletError::ShapeMismatch {
            dim: axis,
            expected: output.ndim(),
            got: axis,
        });
    }
    for dim in 0..output.ndim() {
        if dim != axis && input.shape[dim] != output.shape[dim] {
            return Err(UnduletError::ShapeMismatch {
                dim,
                expected: output.shape[dim],
                got: input.shape[dim],
            });
        }
    }
    Ok(())
}

fn num_strips(shape: &[usize], axis: usize) -> usize {
    shape
        .iter()
        .enumerate()
        .filter(|&(dim, _)| dim != axis)
        .map(|(_, &extent)| extent)
        .product()
}

/// Single-level DWT along `axis`: every strip of `input` is decomposed into
/// the requested coefficient stream of `output`.
pub fn axis_dec<S: WtSample>(
    input: &[S],
    input_info: &ArrayInfo,
    output: &mut [S],
    output_info: &ArrayInfo,
    wavelet: &DiscreteWavelet,
    axis: usize,
    coef: Coefficient,
    mode: ExtensionMode,
) -> Result<(), UnduletError>
where
    usize: AsPrimitive<S::Real>,
{
    check_non_axis_shapes(input_info, output_info, axis)?;
    let expected = dwt_out_len(input_info.shape[axis], wavelet.dec_len(), mode);
    if output_info.shape[axis] != expected {
        return Err(UnduletError::ShapeMismatch {
            dim: axis,
            expected,
            got: output_info.shape[axis],
        });
    }
    axis_apply(
        input,
        input_info,
        output,
        output_info,
        axis,
        |strip_in, strip_out| match coef {
            Coefficient::Approximation => dec_a(strip_in, wavelet, strip_out, mode),
            Coefficient::Detail => dec_d(strip_in, wavelet, strip_out, mode),
        },
    )
}

/// SWT at `level` along `axis`.
pub fn axis_swt<S: WtSample>(
    input: &[S],
    input_info: &ArrayInfo,
    output: &mut [S],
    output_info: &ArrayInfo,
    wavelet: &DiscreteWavelet,
    axis: usize,
    coef: Coefficient,
    level: usize,
) -> Result<(), UnduletError>
where
    usize: AsPrimitive<S::Real>,
{
    check_non_axis_shapes(input_info, output_info, axis)?;
    let expected = swt_out_len(input_info.shape[axis]);
    if output_info.shape[axis] != expected {
        return Err(UnduletError::ShapeMismatch {
            dim: axis,
            expected,
            got: output_info.shape[axis],
        });
    }
    axis_apply(
        input,
        input_info,
        output,
        output_info,
        axis,
        |strip_in, strip_out| match coef {
            Coefficient::Approximation => swt_a(strip_in, wavelet, strip_out, level),
            Coefficient::Detail => swt_d(strip_in, wavelet, strip_out, level),
        },
    )
}

fn axis_apply<S: WtSample>(
    input: &[S],
    input_info: &ArrayInfo,
    output: &mut [S],
    output_info: &ArrayInfo,
    axis: usize,
    mut kernel: impl FnMut(&[S], &mut [S]) -> Result<(), UnduletError>,
) -> Result<(), UnduletError> {
    input_info.check_bounds(input.len())?;
    output_info.check_bounds(output.len())?;

    let make_temp_input = input_info.strides[axis] != 1;
    let make_temp_output = output_info.strides[axis] != 1;
    let in_len = input_info.shape[axis];
    let out_len = output_info.shape[axis];
    let mut temp_input = if make_temp_input {
        try_vec![S::zero(); in_len]
    } else {
        try_vec![]
    };
    let mut temp_output = if make_temp_output {
        try_vec![S::zero(); out_len]
    } else {
        try_vec![]
    };

    let mut offsets = [0isize; 2];
    for strip in 0..num_strips(&output_info.shape, axis) {
        strip_offsets(
            strip,
            &output_info.shape,
            &[input_info, output_info],
            axis,
            &mut offsets,
        );
        let (in_base, out_base) = (offsets[0], offsets[1]);

        if make_temp_input {
            input_info.gather(input, in_base, axis, &mut temp_input);
        }

        if make_temp_input && make_temp_output {
            kernel(&temp_input, &mut temp_output)?;
        } else if make_temp_input {
            let out_start = out_base as usize;
            kernel(&temp_input, &mut output[out_start..out_start + out_len])?;
        } else if make_temp_output {
            let in_start = in_base as usize;
            kernel(&input[in_start..in_start + in_len], &mut temp_output)?;
        } else {
            let in_start = in_base as usize;
            let out_start = out_base as usize;
            kernel(
                &input[in_start..in_start + in_len],
                &mut output[out_start..out_start + out_len],
            )?;
        }

        if make_temp_output {
            output_info.scatter(output, out_base, axis, &temp_output);
        }
    }
    Ok(())
}

/// Inverse DWT along `axis` from optional approximation and detail tensors.
///
/// At least one of the coefficient tensors must be present; when both are,
/// their shapes must match exactly. Every output strip is pre-zeroed, then
/// the low-pass synthesis pass runs over the approximation strip and the
/// high-pass pass accumulates over the detail strip.
pub fn axis_idwt<S: WtSample>(
    coeffs_a: Option<(&[S], &ArrayInfo)>,
    coeffs_d: Option<(&[S], &ArrayInfo)>,
    output: &mut [S],
    output_info: &ArrayInfo,
    wavelet: &DiscreteWavelet,
    axis: usize,
    mode: ExtensionMode,
) -> Result<(), UnduletError> {
    let coef_info = match (coeffs_a, coeffs_d) {
        (Some((_, a_info)), Some((_, d_info))) => {
            if a_info.shape != d_info.shape {
                let dim = a_info
                    .shape
                    .iter()
                    .zip(d_info.shape.iter())
                    .position(|(a, d)| a != d)
                    .unwrap_or(0);
                return Err(UnduletError::ShapeMismatch {
                    dim,
                    expected: a_info.shape.get(dim).copied().unwrap_or(0),
                    got: d_info.shape.get(dim).copied().unwrap_or(0),
                });
            }
            a_info
        }
        (Some((_, a_info)), None) => a_info,
        (None, Some((_, d_info))) => d_info,
        (None, None) => return Err(UnduletError::NullInput),
    };
    check_non_axis_shapes(coef_info, output_info, axis)?;
    let expected = idwt_out_len(coef_info.shape[axis], wavelet.rec_len(), mode);
    if output_info.shape[axis] != expected {
        return Err(UnduletError::ShapeMismatch {
            dim: axis,
            expected,
            got: output_info.shape[axis],
        });
    }
    if let Some((data, info)) = coeffs_a {
        info.check_bounds(data.len())?;
    }
    if let Some((data, info)) = coeffs_d {
        info.check_bounds(data.len())?;
    }
    output_info.check_bounds(output.len())?;

    let coef_len = coef_info.shape[axis];
    let out_len = output_info.shape[axis];
    let bank = S::Real::bank(wavelet);

    let mut temp_a = match coeffs_a {
        Some((_, info)) if info.strides[axis] != 1 => try_vec![S::zero(); coef_len],
        _ => try_vec![],
    };
    let mut temp_d = match coeffs_d {
        Some((_, info)) if info.strides[axis] != 1 => try_vec![S::zero(); coef_len],
        _ => try_vec![],
    };
    let make_temp_output = output_info.strides[axis] != 1;
    let mut temp_output = if make_temp_output {
        try_vec![S::zero(); out_len]
    } else {
        try_vec![]
    };

    let mut infos: Vec<&ArrayInfo> = Vec::new();
    infos.push(output_info);
    if let Some((_, info)) = coeffs_a {
        infos.push(info);
    }
    if let Some((_, info)) = coeffs_d {
        infos.push(info);
    }

    let mut offsets = [0isize; 3];
    for strip in 0..num_strips(&output_info.shape, axis) {
        strip_offsets(
            strip,
            &output_info.shape,
            &infos,
            axis,
            &mut offsets[..infos.len()],
        );
        let out_base = offsets[0];
        let mut next = 1;

        let strip_out: &mut [S] = if make_temp_output {
            temp_output.fill(S::zero());
            &mut temp_output
        } else {
            let start = out_base as usize;
            let strip = &mut output[start..start + out_len];
            strip.fill(S::zero());
            strip
        };

        if let Some((data, info)) = coeffs_a {
            let base = offsets[next];
            next += 1;
            if info.strides[axis] != 1 {
                info.gather(data, base, axis, &mut temp_a);
                crate::upconv::upsampling_convolution_valid_sf(
                    &temp_a,
                    &bank.rec_lo,
                    strip_out,
                    mode,
                )?;
            } else {
                let start = base as usize;
                crate::upconv::upsampling_convolution_valid_sf(
                    &data[start..start + coef_len],
                    &bank.rec_lo,
                    strip_out,
                    mode,
                )?;
            }
        }
        if let Some((data, info)) = coeffs_d {
            let base = offsets[next];
            if info.strides[axis] != 1 {
                info.gather(data, base, axis, &mut temp_d);
                crate::upconv::upsampling_convolution_valid_sf(
                    &temp_d,
                    &bank.rec_hi,
                    strip_out,
                    mode,
                )?;
            } else {
                let start = base as usize;
                crate::upconv::upsampling_convolution_valid_sf(
                    &data[start..start + coef_len],
                    &bank.rec_hi,
                    strip_out,
                    mode,
                )?;
            }
        }

        if make_temp_output {
            output_info.scatter(output, out_base, axis, &temp_output);
        }
    }
    Ok(())
}
