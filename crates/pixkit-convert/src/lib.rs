//! # pixkit-convert
//!
//! Any-to-any conversion between the 19 cataloged pixel formats.
//!
//! # Architecture
//!
//! Rather than one routine per format pair, every format decodes into one of
//! eight canonical hubs ([`Canonical`]) that keep its native precision, and
//! encodes back out of any hub. Typed conversion is fully monomorphized; the
//! runtime [`ByteConverter`] resolves a `(FormatCode, FormatCode)` pair to a
//! function pointer once.
//!
//! ```text
//!   S --to_canonical--> Canonical --from_canonical--> D
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pixkit_convert::{convert, is_supported};
//! use pixkit_core::{Bgra32, FormatCode, Luminance8};
//!
//! let gray: Luminance8 = convert(Bgra32::opaque(255, 255, 255)).unwrap();
//! assert_eq!(gray.l, 255);
//! assert!(!is_supported(FormatCode::Alpha8, FormatCode::Rgb24));
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - rayon-backed [`Converter::convert_span_par`] and
//!   [`ByteConverter::convert_rows_par`]
//!
//! # Dependencies
//!
//! - [`pixkit_core`] - pixel types and numeric rules
//! - `tracing` - resolution and row events
//! - `rayon` - optional data parallelism

#![warn(missing_docs)]

pub mod canonical;
pub mod convert;
pub mod dispatch;
pub mod hub;

pub use canonical::{to_bgra32, to_bgrp32, to_rgba128f, to_rgbp128f, CanonicalPixel};
pub use convert::{check_pair, convert, convert_unchecked, is_supported, Converter};
pub use dispatch::{convert_row, row_fn, ByteConverter, RowFn};
pub use hub::{
    premultiply_bgra32, premultiply_rgba128f, unpremultiply_bgrp32, unpremultiply_rgbp128f,
    Canonical,
};
pub use pixkit_core::{Error, Result};
