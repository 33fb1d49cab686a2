//! The closed catalog of pixel value types.
//!
//! | Family | Types |
//! |---|---|
//! | single channel | [`Alpha8`], [`Luminance8`], [`Luminance16`], [`Luminance32F`] |
//! | packed 16-bit | [`Bgr565`], [`Bgra5551`], [`Bgra4444`] |
//! | 8-bit color | [`Bgr24`], [`Rgb24`], [`Bgra32`], [`Rgba32`], [`Argb32`], [`Bgrp32`], [`Rgbp32`] |
//! | float color | [`Bgr96F`], [`Rgb96F`], [`Bgra128F`], [`Rgba128F`], [`Rgbp128F`] |

mod float;
mod luminance;
mod packed;
mod rgb8;

pub use float::{Bgr96F, Bgra128F, Rgb96F, Rgba128F, Rgbp128F};
pub use luminance::{Alpha8, Luminance16, Luminance32F, Luminance8};
pub use packed::{Bgr565, Bgra4444, Bgra5551};
pub use rgb8::{Argb32, Bgr24, Bgra32, Bgrp32, Rgb24, Rgba32, Rgbp32};

/// Binds a type alias to the pixel type named by a runtime [`FormatCode`]
/// and evaluates an expression with it.
///
/// This is the single place where runtime codes become static types; the
/// expression is monomorphized once per cataloged format.
///
/// ```rust
/// use pixkit_core::{with_pixel_format, FormatCode, PixelFormat};
///
/// let code = FormatCode::Rgb24;
/// let bytes = with_pixel_format!(code, T => T::BYTES);
/// assert_eq!(bytes, 3);
/// ```
///
/// [`FormatCode`]: crate::FormatCode
#[macro_export]
macro_rules! with_pixel_format {
    ($code:expr, $t:ident => $body:expr) => {
        match $code {
            $crate::FormatCode::Alpha8 => { type $t = $crate::formats::Alpha8; $body }
            $crate::FormatCode::Luminance8 => { type $t = $crate::formats::Luminance8; $body }
            $crate::FormatCode::Luminance16 => { type $t = $crate::formats::Luminance16; $body }
            $crate::FormatCode::Luminance32F => { type $t = $crate::formats::Luminance32F; $body }
            $crate::FormatCode::Bgr565 => { type $t = $crate::formats::Bgr565; $body }
            $crate::FormatCode::Bgra5551 => { type $t = $crate::formats::Bgra5551; $body }
            $crate::FormatCode::Bgra4444 => { type $t = $crate::formats::Bgra4444; $body }
            $crate::FormatCode::Bgr24 => { type $t = $crate::formats::Bgr24; $body }
            $crate::FormatCode::Rgb24 => { type $t = $crate::formats::Rgb24; $body }
            $crate::FormatCode::Bgra32 => { type $t = $crate::formats::Bgra32; $body }
            $crate::FormatCode::Rgba32 => { type $t = $crate::formats::Rgba32; $body }
            $crate::FormatCode::Argb32 => { type $t = $crate::formats::Argb32; $body }
            $crate::FormatCode::Bgrp32 => { type $t = $crate::formats::Bgrp32; $body }
            $crate::FormatCode::Rgbp32 => { type $t = $crate::formats::Rgbp32; $body }
            $crate::FormatCode::Bgr96F => { type $t = $crate::formats::Bgr96F; $body }
            $crate::FormatCode::Rgb96F => { type $t = $crate::formats::Rgb96F; $body }
            $crate::FormatCode::Bgra128F => { type $t = $crate::formats::Bgra128F; $body }
            $crate::FormatCode::Rgba128F => { type $t = $crate::formats::Rgba128F; $body }
            $crate::FormatCode::Rgbp128F => { type $t = $crate::formats::Rgbp128F; $body }
        }
    };
}
