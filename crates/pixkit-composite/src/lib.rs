//! # pixkit-composite
//!
//! Premultiplied-alpha compositing of one source pixel onto one destination
//! pixel, in place.
//!
//! The destination is always premultiplied: [`Bgrp32`] on the integer path
//! and [`Rgbp128F`] on the floating path. The source may be any cataloged
//! format; it is decoded to straight color plus alpha first.
//!
//! # Operators
//!
//! - [`source_over`] / [`source_over_f`] - Porter-Duff over
//! - [`add_over`] / [`add_over_f`] - over with a saturating additive blend
//! - [`multiply_over`] / [`multiply_over_f`] - over with a multiplicative blend
//! - [`compose`] / [`compose_span`] - runtime [`BlendMode`] selection
//!
//! All integer operators share the [`over`] primitive, parameterized by a
//! [`WeightScale`] ([`Scale256`] or [`Scale16384`]) and a precomputed blend
//! value.
//!
//! # Example
//!
//! ```rust
//! use pixkit_composite::{source_over, Scale16384, WeightScale};
//! use pixkit_core::{Bgr24, Bgrp32};
//!
//! let mut dst = Bgrp32::new(10, 20, 30, 128);
//! source_over::<Scale16384, _>(&mut dst, Bgr24::new(1, 2, 3), Scale16384::ONE);
//! assert_eq!(dst, Bgrp32::new(1, 2, 3, 255));
//! ```
//!
//! # Dependencies
//!
//! - [`pixkit_convert`] - source decoding
//! - `glam` - `Vec4` column algebra on the floating path
//! - `tracing` - span-level events
//!
//! [`Bgrp32`]: pixkit_core::Bgrp32
//! [`Rgbp128F`]: pixkit_core::Rgbp128F

#![warn(missing_docs)]

pub mod blend;
pub mod float;
pub mod quantized;
pub mod weights;

pub use blend::BlendMode;
pub use float::{
    add_over_f, compose_f, compose_span_f, multiply_over_f, over_f, source_over_f,
    source_over_span_f,
};
pub use quantized::{
    add_over, add_over_span, compose, compose_span, multiply_over, multiply_over_span, over,
    source_over, source_over_span, OverWeights,
};
pub use weights::{full_opacity, Scale16384, Scale256, WeightScale};
