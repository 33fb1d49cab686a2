//! Stable runtime identity of the pixel format catalog.
//!
//! Every pixel type in [`crate::formats`] carries a [`FormatCode`]. Adapters
//! and dispatch tables key on the code instead of reflecting on concrete
//! types, so the numeric values are part of the public contract and never
//! change between versions.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::FormatCode;
//!
//! let code = FormatCode::try_from(13u16).unwrap();
//! assert_eq!(code, FormatCode::Bgrp32);
//! assert!(code.is_premultiplied());
//! assert_eq!(code.bytes_per_pixel(), 4);
//! ```

use crate::error::Error;
use std::fmt;

/// Numeric identity of a cataloged pixel format.
///
/// The discriminants are stable; `0` is never assigned so that a zeroed
/// adapter table entry never aliases a real format.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatCode {
    /// 8-bit alpha only.
    Alpha8 = 1,
    /// 8-bit luminance.
    Luminance8 = 2,
    /// 16-bit luminance.
    Luminance16 = 3,
    /// 32-bit float luminance.
    Luminance32F = 4,
    /// Packed 5-6-5 BGR.
    Bgr565 = 5,
    /// Packed 5-5-5-1 BGRA.
    Bgra5551 = 6,
    /// Packed 4-4-4-4 BGRA.
    Bgra4444 = 7,
    /// 8-bit BGR.
    Bgr24 = 8,
    /// 8-bit RGB.
    Rgb24 = 9,
    /// 8-bit BGRA, straight alpha.
    Bgra32 = 10,
    /// 8-bit RGBA, straight alpha.
    Rgba32 = 11,
    /// 8-bit ARGB, straight alpha.
    Argb32 = 12,
    /// 8-bit BGRA, premultiplied alpha.
    Bgrp32 = 13,
    /// 8-bit RGBA, premultiplied alpha.
    Rgbp32 = 14,
    /// 32-bit float BGR.
    Bgr96F = 15,
    /// 32-bit float RGB.
    Rgb96F = 16,
    /// 32-bit float BGRA, straight alpha.
    Bgra128F = 17,
    /// 32-bit float RGBA, straight alpha.
    Rgba128F = 18,
    /// 32-bit float RGBA, premultiplied alpha.
    Rgbp128F = 19,
}

impl FormatCode {
    /// Every cataloged format, in code order.
    pub const ALL: [FormatCode; 19] = [
        Self::Alpha8,
        Self::Luminance8,
        Self::Luminance16,
        Self::Luminance32F,
        Self::Bgr565,
        Self::Bgra5551,
        Self::Bgra4444,
        Self::Bgr24,
        Self::Rgb24,
        Self::Bgra32,
        Self::Rgba32,
        Self::Argb32,
        Self::Bgrp32,
        Self::Rgbp32,
        Self::Bgr96F,
        Self::Rgb96F,
        Self::Bgra128F,
        Self::Rgba128F,
        Self::Rgbp128F,
    ];

    /// Raw numeric code.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Whether the format has no alpha channel.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        matches!(
            self,
            Self::Luminance8
                | Self::Luminance16
                | Self::Luminance32F
                | Self::Bgr565
                | Self::Bgr24
                | Self::Rgb24
                | Self::Bgr96F
                | Self::Rgb96F
        )
    }

    /// Whether color channels are stored multiplied by alpha.
    #[inline]
    pub const fn is_premultiplied(self) -> bool {
        matches!(self, Self::Bgrp32 | Self::Rgbp32 | Self::Rgbp128F)
    }

    /// Whether channels are fixed-point integers.
    #[inline]
    pub const fn is_quantized(self) -> bool {
        !self.is_floating_point()
    }

    /// Whether channels are 32-bit floats.
    #[inline]
    pub const fn is_floating_point(self) -> bool {
        matches!(
            self,
            Self::Luminance32F
                | Self::Bgr96F
                | Self::Rgb96F
                | Self::Bgra128F
                | Self::Rgba128F
                | Self::Rgbp128F
        )
    }

    /// Whether the format carries an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        !self.is_opaque()
    }

    /// Whether the format carries color (or luminance) information.
    ///
    /// Only [`FormatCode::Alpha8`] carries none.
    #[inline]
    pub const fn has_color(self) -> bool {
        !matches!(self, Self::Alpha8)
    }

    /// Whether the format stores luminance instead of RGB.
    #[inline]
    pub const fn is_luminance(self) -> bool {
        matches!(
            self,
            Self::Luminance8 | Self::Luminance16 | Self::Luminance32F
        )
    }

    /// Number of logical channels.
    #[inline]
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Alpha8 | Self::Luminance8 | Self::Luminance16 | Self::Luminance32F => 1,
            Self::Bgr565 | Self::Bgr24 | Self::Rgb24 | Self::Bgr96F | Self::Rgb96F => 3,
            _ => 4,
        }
    }

    /// Size of one pixel in bytes.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Alpha8 | Self::Luminance8 => 1,
            Self::Luminance16 | Self::Bgr565 | Self::Bgra5551 | Self::Bgra4444 => 2,
            Self::Bgr24 | Self::Rgb24 => 3,
            Self::Luminance32F
            | Self::Bgra32
            | Self::Rgba32
            | Self::Argb32
            | Self::Bgrp32
            | Self::Rgbp32 => 4,
            Self::Bgr96F | Self::Rgb96F => 12,
            Self::Bgra128F | Self::Rgba128F | Self::Rgbp128F => 16,
        }
    }

    /// Short name for display.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha8 => "Alpha8",
            Self::Luminance8 => "Luminance8",
            Self::Luminance16 => "Luminance16",
            Self::Luminance32F => "Luminance32F",
            Self::Bgr565 => "Bgr565",
            Self::Bgra5551 => "Bgra5551",
            Self::Bgra4444 => "Bgra4444",
            Self::Bgr24 => "Bgr24",
            Self::Rgb24 => "Rgb24",
            Self::Bgra32 => "Bgra32",
            Self::Rgba32 => "Rgba32",
            Self::Argb32 => "Argb32",
            Self::Bgrp32 => "Bgrp32",
            Self::Rgbp32 => "Rgbp32",
            Self::Bgr96F => "Bgr96F",
            Self::Rgb96F => "Rgb96F",
            Self::Bgra128F => "Bgra128F",
            Self::Rgba128F => "Rgba128F",
            Self::Rgbp128F => "Rgbp128F",
        }
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<FormatCode> for u16 {
    #[inline]
    fn from(code: FormatCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for FormatCode {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == value)
            .ok_or(Error::UnknownFormatCode(value))
    }
}
