//! # pixkit-interp
//!
//! Linear and bilinear interpolation between pixels, used for resampling.
//!
//! Two paths share one contract:
//!
//! - **Quantized** ([`QuantizedInterpolate`]) - integer weights in
//!   `[0, 2^11]`; bilinear corner weights sum to exactly `2^22`
//! - **Floating** ([`FloatInterpolate`]) - `f32` weights summing to 1.0 per
//!   axis
//!
//! Alpha-bearing sources are interpolated in premultiplied space so
//! transparent samples never bleed color. Both traits are implemented on
//! the destination type, so the kernel is fixed at compile time; runtime
//! callers look kernels up with [`quantized_kernel`] / [`float_kernel`].
//!
//! # Usage
//!
//! ```rust
//! use pixkit_interp::{QuantizedInterpolate, FloatInterpolate};
//! use pixkit_core::{Bgra32, Bgrp32, Rgba128F};
//!
//! let a = Bgra32::new(255, 0, 0, 255);
//! let b = Bgra32::new(0, 0, 255, 0);
//! let q = Bgrp32::interpolate_bilinear(a, b, a, b, 1024, 0);
//! assert_eq!(q, Bgrp32::new(127, 0, 0, 127));
//!
//! let f = Rgba128F::interpolate_linear(a, b, 0.5);
//! assert!((f.b - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`pixkit_convert`] - sample decoding and result encoding
//! - `glam` - `Vec4` accumulation on the floating path
//! - `tracing` - row-level events

#![warn(missing_docs)]

pub mod float;
pub mod quantized;
pub mod registry;
pub mod resample;
pub mod weights;

pub use float::{float_bilinear, float_linear, FloatInterpolate, FloatPixel};
pub use quantized::{quantized_bilinear, quantized_linear, QuantizedInterpolate, QuantizedPixel};
pub use registry::{
    float_kernel, has_float_kernel, has_quantized_kernel, quantized_kernel, FloatKernel, Kernel,
    QuantizedKernel,
};
pub use resample::{
    interpolate_span, interpolate_span_f, resample_row, resample_row_f, POSITION_ONE,
    POSITION_SHIFT,
};
pub use weights::{
    quantize_weight, BilinearWeights, LinearWeights, BILINEAR_ONE, BILINEAR_SHIFT, WEIGHT_ONE,
    WEIGHT_SHIFT,
};
