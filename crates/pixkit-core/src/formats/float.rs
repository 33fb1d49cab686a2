//! 32-bit float color formats, nominal channel range 0.0–1.0.

use crate::format::FormatCode;
use crate::pixel::{read_f32, write_f32, PixelFormat};

macro_rules! float_format {
    ($(#[$meta:meta])* $ty:ident, [$($idx:literal => $field:ident: $doc:literal),+]) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        pub struct $ty {
            $(
                #[doc = $doc]
                pub $field: f32,
            )+
        }

        impl $ty {
            /// Create a pixel from channels in memory order.
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl PixelFormat for $ty {
            const CODE: FormatCode = FormatCode::$ty;

            #[inline]
            fn read_bytes(bytes: &[u8]) -> Self {
                Self { $($field: read_f32(bytes, $idx)),+ }
            }

            #[inline]
            fn write_bytes(self, out: &mut [u8]) {
                $(write_f32(out, $idx, self.$field);)+
            }
        }
    };
}

float_format!(
    /// Float BGR pixel.
    Bgr96F, [0 => b: "Blue channel.", 1 => g: "Green channel.", 2 => r: "Red channel."]
);

float_format!(
    /// Float RGB pixel.
    Rgb96F, [0 => r: "Red channel.", 1 => g: "Green channel.", 2 => b: "Blue channel."]
);

float_format!(
    /// Float BGRA pixel with straight alpha.
    Bgra128F, [0 => b: "Blue channel.", 1 => g: "Green channel.", 2 => r: "Red channel.", 3 => a: "Alpha channel."]
);

float_format!(
    /// Float RGBA pixel with straight alpha.
    ///
    /// The canonical floating straight-alpha representative.
    Rgba128F, [0 => r: "Red channel.", 1 => g: "Green channel.", 2 => b: "Blue channel.", 3 => a: "Alpha channel."]
);

float_format!(
    /// Float RGBA pixel with premultiplied alpha.
    ///
    /// The canonical floating premultiplied representative used by the
    /// floating compositing and interpolation paths.
    Rgbp128F, [0 => r: "Premultiplied red.", 1 => g: "Premultiplied green.", 2 => b: "Premultiplied blue.", 3 => a: "Alpha channel."]
);

impl Rgba128F {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl Rgbp128F {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Whether every color channel is at most alpha.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.r <= self.a && self.g <= self.a && self.b <= self.a
    }
}
