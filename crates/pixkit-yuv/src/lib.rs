//! # pixkit-yuv
//!
//! BT.601 studio-range YUV to RGB decoding into any color pixel format.
//!
//! Chroma is subsampled horizontally by two in every supported layout
//! (4:2:0 also vertically), and each chroma sample is evaluated once per
//! pair of luma samples via [`ChromaTerms`].
//!
//! Layers, from smallest to largest:
//!
//! - [`yuv_to_bgr`] - one sample
//! - [`decode_row_planar`], [`decode_row_semiplanar`], [`decode_row_packed`] - one row
//! - [`decode_420_frame`], [`decode_422_frame`] - strided frames
//! - [`YuvDecoder`] - tightly packed frames in a named [`YuvLayout`]
//!
//! Destinations without RGB channels (`Alpha8` and the luminance formats)
//! fail with [`pixkit_core::Error::NotImplemented`] before any output is
//! written.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_yuv::{decode_row_planar, yuv_to_bgr};
//! use pixkit_core::{Bgr24, Bgra32};
//!
//! assert_eq!(yuv_to_bgr(235, 128, 128), Bgr24::new(255, 255, 255));
//!
//! let mut row = [Bgra32::default(); 2];
//! decode_row_planar(&[16, 235], &[128], &[128], &mut row)?;
//! assert_eq!(row[0], Bgra32::new(0, 0, 0, 255));
//! # Ok::<(), pixkit_core::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - row-pair parallel frame decoding via rayon
//!
//! # Dependencies
//!
//! - [`pixkit_convert`] - encoding decoded pixels into the destination format
//! - `rayon` - optional frame parallelism
//! - `tracing` - frame-level events

#![warn(missing_docs)]

pub mod frame;
pub mod kernel;
pub mod layout;
pub mod row;

pub use frame::{decode_420_frame, decode_422_frame, Chroma420, Yuv420Frame, Yuv422Frame};
#[cfg(feature = "parallel")]
pub use frame::{decode_420_frame_par, decode_422_frame_par};
pub use kernel::{yuv_to_bgr, ChromaTerms};
pub use layout::{YuvDecoder, YuvLayout};
pub use row::{
    check_destination, decode_row_packed, decode_row_planar, decode_row_semiplanar, ChromaOrder,
    PackedOrder,
};
