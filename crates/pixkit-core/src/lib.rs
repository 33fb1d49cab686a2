//! # pixkit-core
//!
//! Core pixel types for the pixkit conversion, compositing and resampling
//! kernel.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`FormatCode`] - stable numeric identity of every cataloged format
//! - [`PixelFormat`] - compile-time format metadata and explicit byte packing
//! - [`formats`] - the 19 pixel value types
//! - [`quantize`] - the channel-level rounding, truncation and premultiply rules
//! - [`Error`] - the error taxonomy shared by every pixkit crate
//!
//! ## Crate Structure
//!
//! ```text
//! pixkit-core (this crate)
//!    ^
//!    |
//!    +-- pixkit-convert (conversion matrix)
//!    +-- pixkit-composite (premultiplied compositing)
//!    +-- pixkit-interp (linear / bilinear interpolation)
//!    +-- pixkit-yuv (YUV decode)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`FormatCode`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod formats;
pub mod pixel;
pub mod quantize;

pub use error::{Error, Result};
pub use format::FormatCode;
pub use formats::*;
pub use pixel::{
    is_floating_point_format, is_opaque_format, is_premultiplied_format, is_quantized_format,
    PixelFormat,
};

/// Prelude module for convenient imports.
///
/// ```
/// use pixkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::FormatCode;
    pub use crate::formats::*;
    pub use crate::pixel::{
        is_floating_point_format, is_opaque_format, is_premultiplied_format,
        is_quantized_format, PixelFormat,
    };
}
