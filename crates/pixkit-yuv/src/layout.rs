//! Named YUV layouts over tightly packed buffers.
//!
//! [`YuvDecoder`] takes a whole frame as one contiguous buffer in a standard
//! layout, splits it into planes, and forwards to the frame decoders.
//!
//! | Layout | Planes |
//! |---|---|
//! | I420 | `Y`, then `U`, then `V` (4:2:0) |
//! | YV12 | `Y`, then `V`, then `U` (4:2:0) |
//! | NV12 | `Y`, then interleaved `UV` (4:2:0) |
//! | NV21 | `Y`, then interleaved `VU` (4:2:0) |
//! | YUYV | packed `Y0 U Y1 V` (4:2:2) |
//! | UYVY | packed `U Y0 V Y1` (4:2:2) |
//!
//! # Example
//!
//! ```rust
//! use pixkit_yuv::{YuvDecoder, YuvLayout};
//! use pixkit_core::Rgb24;
//!
//! let decoder = YuvDecoder::new(YuvLayout::Nv12, 2, 2);
//! let frame = [235u8, 235, 16, 16, 128, 128];
//! assert_eq!(frame.len(), decoder.frame_size());
//! let mut out = [Rgb24::default(); 4];
//! decoder.decode(&frame, &mut out).unwrap();
//! assert_eq!(out[0], Rgb24::new(255, 255, 255));
//! assert_eq!(out[3], Rgb24::new(0, 0, 0));
//! ```

use crate::frame::{decode_420_frame, decode_422_frame, Chroma420, Yuv420Frame, Yuv422Frame};
use crate::row::{check_destination, ChromaOrder, PackedOrder};
use pixkit_convert::CanonicalPixel;
use pixkit_core::{Error, Result};
use std::fmt;

/// A standard YUV frame layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YuvLayout {
    /// Planar 4:2:0, `U` before `V`.
    I420,
    /// Planar 4:2:0, `V` before `U`.
    Yv12,
    /// Semi-planar 4:2:0, `U` in the low byte of each chroma word.
    Nv12,
    /// Semi-planar 4:2:0, `V` in the low byte of each chroma word.
    Nv21,
    /// Packed 4:2:2, `Y0 U Y1 V`.
    Yuyv,
    /// Packed 4:2:2, `U Y0 V Y1`.
    Uyvy,
}

impl YuvLayout {
    /// All layouts.
    pub const ALL: [YuvLayout; 6] = [
        Self::I420,
        Self::Yv12,
        Self::Nv12,
        Self::Nv21,
        Self::Yuyv,
        Self::Uyvy,
    ];

    /// Layout name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I420 => "I420",
            Self::Yv12 => "YV12",
            Self::Nv12 => "NV12",
            Self::Nv21 => "NV21",
            Self::Yuyv => "YUYV",
            Self::Uyvy => "UYVY",
        }
    }

    /// Whether chroma is subsampled vertically as well as horizontally.
    pub const fn is_420(self) -> bool {
        matches!(self, Self::I420 | Self::Yv12 | Self::Nv12 | Self::Nv21)
    }

    /// Size in bytes of a tightly packed `width` x `height` frame.
    pub const fn frame_size(self, width: usize, height: usize) -> usize {
        let cw = width.div_ceil(2);
        if self.is_420() {
            width * height + 2 * cw * height.div_ceil(2)
        } else {
            4 * cw * height
        }
    }
}

impl fmt::Display for YuvLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes tightly packed frames of one layout and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YuvDecoder {
    layout: YuvLayout,
    width: usize,
    height: usize,
}

impl YuvDecoder {
    /// Decoder for `width` x `height` frames.
    pub const fn new(layout: YuvLayout, width: usize, height: usize) -> Self {
        Self {
            layout,
            width,
            height,
        }
    }

    /// The frame layout.
    pub const fn layout(&self) -> YuvLayout {
        self.layout
    }

    /// Frame dimensions.
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Expected input size in bytes.
    pub const fn frame_size(&self) -> usize {
        self.layout.frame_size(self.width, self.height)
    }

    /// Decodes one frame into a tightly packed destination.
    pub fn decode<D: CanonicalPixel>(&self, src: &[u8], dst: &mut [D]) -> Result<()> {
        self.decode_strided(src, dst, self.width)
    }

    /// Decodes one frame into a destination with `dst_stride` pixels per row.
    pub fn decode_strided<D: CanonicalPixel>(
        &self,
        src: &[u8],
        dst: &mut [D],
        dst_stride: usize,
    ) -> Result<()> {
        check_destination(D::CODE)?;
        let need = self.frame_size();
        if src.len() < need {
            return Err(Error::invalid_layout(format!(
                "{} {}x{} frame needs {need} bytes, got {}",
                self.layout,
                self.width,
                self.height,
                src.len()
            )));
        }
        let (w, h) = (self.width, self.height);
        let cw = w.div_ceil(2);
        if !self.layout.is_420() {
            let order = match self.layout {
                YuvLayout::Uyvy => PackedOrder::Uyvy,
                _ => PackedOrder::Yuyv,
            };
            let frame = Yuv422Frame {
                width: w,
                height: h,
                data: &src[..need],
                stride: 4 * cw,
                order,
            };
            return decode_422_frame(&frame, dst, dst_stride);
        }

        let (y, chroma) = src[..need].split_at(w * h);
        let chroma = match self.layout {
            YuvLayout::Nv12 => Chroma420::Interleaved {
                uv: chroma,
                stride: 2 * cw,
                order: ChromaOrder::Uv,
            },
            YuvLayout::Nv21 => Chroma420::Interleaved {
                uv: chroma,
                stride: 2 * cw,
                order: ChromaOrder::Vu,
            },
            _ => {
                let (first, second) = chroma.split_at(chroma.len() / 2);
                let (u, v) = if self.layout == YuvLayout::Yv12 {
                    (second, first)
                } else {
                    (first, second)
                };
                Chroma420::Planar { u, v, stride: cw }
            }
        };
        let frame = Yuv420Frame {
            width: w,
            height: h,
            y,
            y_stride: w,
            chroma,
        };
        decode_420_frame(&frame, dst, dst_stride)
    }
}
