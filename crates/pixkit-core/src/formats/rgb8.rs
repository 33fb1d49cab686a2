//! 8-bit-per-channel color formats.
//!
//! Constructors take channels in memory order, so `Bgra32::new(b, g, r, a)`
//! and `Argb32::new(a, r, g, b)`.

use crate::format::FormatCode;
use crate::pixel::PixelFormat;

macro_rules! byte_format {
    ($(#[$meta:meta])* $ty:ident, $n:literal, [$($field:ident: $doc:literal),+]) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $ty {
            $(
                #[doc = $doc]
                pub $field: u8,
            )+
        }

        impl $ty {
            /// Create a pixel from channels in memory order.
            #[inline]
            pub const fn new($($field: u8),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl PixelFormat for $ty {
            const CODE: FormatCode = FormatCode::$ty;

            #[inline]
            fn read_bytes(bytes: &[u8]) -> Self {
                let mut raw = [0u8; $n];
                raw.copy_from_slice(&bytes[..$n]);
                let [$($field),+] = raw;
                Self { $($field),+ }
            }

            #[inline]
            fn write_bytes(self, out: &mut [u8]) {
                out[..$n].copy_from_slice(&[$(self.$field),+]);
            }
        }
    };
}

byte_format!(
    /// 8-bit BGR pixel.
    Bgr24, 3, [b: "Blue channel.", g: "Green channel.", r: "Red channel."]
);

byte_format!(
    /// 8-bit RGB pixel.
    Rgb24, 3, [r: "Red channel.", g: "Green channel.", b: "Blue channel."]
);

byte_format!(
    /// 8-bit BGRA pixel with straight alpha.
    Bgra32, 4, [b: "Blue channel.", g: "Green channel.", r: "Red channel.", a: "Alpha channel."]
);

byte_format!(
    /// 8-bit RGBA pixel with straight alpha.
    Rgba32, 4, [r: "Red channel.", g: "Green channel.", b: "Blue channel.", a: "Alpha channel."]
);

byte_format!(
    /// 8-bit ARGB pixel with straight alpha.
    Argb32, 4, [a: "Alpha channel.", r: "Red channel.", g: "Green channel.", b: "Blue channel."]
);

byte_format!(
    /// 8-bit BGRA pixel with premultiplied alpha.
    ///
    /// Every color channel is at most `a`. This is the canonical quantized
    /// premultiplied representative used by compositing and interpolation.
    Bgrp32, 4, [b: "Premultiplied blue.", g: "Premultiplied green.", r: "Premultiplied red.", a: "Alpha channel."]
);

byte_format!(
    /// 8-bit RGBA pixel with premultiplied alpha.
    ///
    /// Every color channel is at most `a`.
    Rgbp32, 4, [r: "Premultiplied red.", g: "Premultiplied green.", b: "Premultiplied blue.", a: "Alpha channel."]
);

impl Bgra32 {
    /// Opaque pixel from color.
    #[inline]
    pub const fn opaque(b: u8, g: u8, r: u8) -> Self {
        Self::new(b, g, r, 255)
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
}

impl Bgrp32 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Whether every color channel is at most alpha.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.b <= self.a && self.g <= self.a && self.r <= self.a
    }
}

impl Rgbp32 {
    /// Whether every color channel is at most alpha.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.b <= self.a && self.g <= self.a && self.r <= self.a
    }
}
