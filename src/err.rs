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
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Errors produced by the transform kernels and the wavelet catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnduletError {
    /// The requested family/order pair is not in the catalog. The associated
    /// value is the requested name.
    UnknownWavelet(String),
    /// A non-axis dimension differs between input and output, or an axis
    /// length does not satisfy the transform length arithmetic.
    ShapeMismatch {
        dim: usize,
        expected: usize,
        got: usize,
    },
    /// The caller-provided output span has the wrong size for the requested
    /// operation.
    InvalidOutputLength { expected: usize, got: usize },
    /// A filter had odd length where an even length is required
    /// (upsampling/split-phase convolution). Carries the offending length.
    BadFilterLength(usize),
    /// SWT level outside `1..=swt_max_level(input_len)`.
    LevelOutOfRange { level: usize, max: usize },
    /// Both approximation and detail inputs were absent in IDWT.
    NullInput,
    /// Indicates a failure to allocate the memory required for a scratch
    /// buffer. The associated value is the requested size (`usize`).
    Allocation(usize),
}

impl Display for UnduletError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UnduletError::UnknownWavelet(name) => {
                f.write_fmt(format_args!("Wavelet {name} is not in the catalog"))
            }
            UnduletError::ShapeMismatch { dim, expected, got } => f.write_fmt(format_args!(
                "Dimension {dim} expected extent {expected} but it was {got}"
            )),
            UnduletError::InvalidOutputLength { expected, got } => f.write_fmt(format_args!(
                "Output expected to have length {expected} but it was {got}"
            )),
            UnduletError::BadFilterLength(len) => f.write_fmt(format_args!(
                "Filter length {len} is odd where an even length is required"
            )),
            UnduletError::LevelOutOfRange { level, max } => f.write_fmt(format_args!(
                "SWT level {level} is outside the valid range 1..={max}"
            )),
            UnduletError::NullInput => {
                f.write_str("At least one of approximation and detail must be present")
            }
            UnduletError::Allocation(size) => {
                f.write_fmt(format_args!("Failed to allocate buffer with size {size}"))
            }
        }
    }
}

impl Error for UnduletError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::UnduletError::Allocation($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
